use crate::cli::ReposArgs;
use crate::github;
use crate::utils::SystemExecutor;
use crate::utils::error::{FlowResult, handle_flow};
use anyhow::{Context, Result};

pub fn handle_repos_command(args: &ReposArgs) -> Result<()> {
    let names = github::list_repositories(&SystemExecutor, args.username.as_deref(), args.limit)
        .context("Failed to list repositories")?;

    if names.is_empty() {
        handle_flow(FlowResult::EmptyList {
            item_type: "repositories".to_string(),
        });
        return Ok(());
    }

    github::write_repositories(&mut std::io::stdout().lock(), &names)?;
    Ok(())
}
