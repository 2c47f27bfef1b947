use crate::cli::CloneArgs;
use crate::github;
use crate::utils::error::{FlowResult, handle_flow};
use crate::utils::{SystemExecutor, print_warning};
use anyhow::{Context, Result};

pub fn handle_clone_command(args: &CloneArgs) -> Result<()> {
    let dest = std::env::current_dir().context("Failed to read the current directory")?;

    let summary = github::clone_all(
        &mut std::io::stdout().lock(),
        &SystemExecutor,
        &args.username,
        args.limit,
        &args.options,
        &dest,
    )
    .with_context(|| format!("Failed to clone repositories of '{}'", args.username))?;

    println!();
    let message = format!(
        "{} cloned, {} already present, {} failed",
        summary.cloned, summary.existing, summary.failed
    );
    if summary.failed > 0 {
        print_warning(&message);
    } else if summary.cloned == 0 {
        handle_flow(FlowResult::Skipped(message));
    } else {
        handle_flow(FlowResult::Success(message));
    }

    Ok(())
}
