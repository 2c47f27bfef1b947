use crate::cli::AddArgs;
use crate::config::ConfigStore;
use crate::registry;
use crate::utils::{print_success, print_warning};
use anyhow::{Context, Result};
use std::path::Path;

pub fn handle_add_command(config_path: &Path, args: &AddArgs) -> Result<()> {
    let store = ConfigStore::open(config_path.to_path_buf())
        .with_context(|| format!("Failed to open config file: {}", config_path.display()))?;

    let results = registry::add(&store, &args.tag, &args.paths)?;

    for result in &results {
        match result.warning() {
            Some(warning) => print_warning(&warning),
            None => {
                if let registry::AddOutcome::Added(path) = &result.outcome {
                    print_success(&format!("Added {} to '{}'", path.display(), args.tag));
                }
            }
        }
    }

    Ok(())
}
