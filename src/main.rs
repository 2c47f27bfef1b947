use clap::Parser;
use tracing_subscriber::EnvFilter;

use totaliterm::cli::Cli;
use totaliterm::config::resolve_config_path;
use totaliterm::utils::error::report_error;

fn init_logging(debug: bool) {
    let fallback = if debug { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.debug);

    let result = resolve_config_path(cli.config.as_deref())
        .map_err(anyhow::Error::from)
        .and_then(|config_path| {
            tracing::debug!(path = %config_path.display(), "using config file");
            cli.command.execute(&config_path)
        });

    if let Err(err) = result {
        report_error(&err);
        std::process::exit(1);
    }
}
