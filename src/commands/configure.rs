use crate::cli::ConfigCommands;
use crate::config::{CONFIG_DIR_ENV, ConfigStore};
use crate::registry::Registry;
use crate::utils::OutputStyle;
use anyhow::Result;
use std::io::{self, Write};
use std::path::Path;

pub fn handle_config_command(config_path: &Path, command: Option<ConfigCommands>) -> Result<()> {
    match command {
        Some(ConfigCommands::Path) => {
            println!("{}", config_path.display());
            Ok(())
        }
        Some(ConfigCommands::Show) => handle_show_command(config_path),
        None => handle_config_help(config_path),
    }
}

fn handle_show_command(config_path: &Path) -> Result<()> {
    let store = ConfigStore::open(config_path.to_path_buf())?;
    let registry = store.load()?;

    write_config_summary(&mut io::stdout().lock(), store.path(), &registry)?;
    Ok(())
}

fn write_config_summary<W: Write + ?Sized>(
    out: &mut W,
    path: &Path,
    registry: &Registry,
) -> io::Result<()> {
    writeln!(out, "⚙️  Totaliterm Configuration")?;
    writeln!(out, "==========================")?;
    OutputStyle::write_field(out, "File", &path.display().to_string())?;

    if registry.entries().is_empty() {
        writeln!(out, "{}", OutputStyle::muted("No tags registered yet."))?;
        return Ok(());
    }

    writeln!(out, "Tags:")?;
    for entry in registry.entries() {
        let noun = if entry.paths.len() == 1 { "directory" } else { "directories" };
        OutputStyle::write_field(out, &entry.tag, &format!("{} {}", entry.paths.len(), noun))?;
    }

    Ok(())
}

fn handle_config_help(config_path: &Path) -> Result<()> {
    println!("⚙️  Configuration Management");
    println!("==========================");
    println!("Available configuration commands:");
    println!("  totaliterm config path    - Print the configuration file location");
    println!("  totaliterm config show    - Show registered tags");
    println!();
    println!("Configuration file location: {}", config_path.display());
    println!("Override the directory with {}.", CONFIG_DIR_ENV);
    Ok(())
}
