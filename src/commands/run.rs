use crate::cli::{RunArgs, Source};
use crate::core::traits::Confirm;
use crate::registry::DEFAULT_TAG;
use crate::runner::{DirectorySource, collect_targets, run_in_each};
use crate::utils::error::{AppError, AppResult, FlowResult, handle_flow};
use crate::utils::{AssumeYes, SystemExecutor, TerminalConfirm, print_warning};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

pub fn handle_run_command(config_path: &Path, args: &RunArgs) -> Result<()> {
    let cwd = if args.source == Source::Scan {
        std::env::current_dir().context("Failed to read the current directory")?
    } else {
        PathBuf::new()
    };
    let source = directory_source(args, cwd)?;
    let targets = collect_targets(&source, config_path)?;

    if targets.is_empty() {
        let item_type = match &source {
            DirectorySource::Registry { tag } => format!("directories under tag '{}'", tag),
            DirectorySource::Scan { root } => format!("git repositories in {}", root.display()),
        };
        handle_flow(FlowResult::EmptyList { item_type });
        return Ok(());
    }

    let mut confirm: Box<dyn Confirm> = if args.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(TerminalConfirm)
    };

    let summary = run_in_each(
        &mut std::io::stdout().lock(),
        &targets,
        &args.command,
        &SystemExecutor,
        confirm.as_mut(),
    )?;

    println!();
    let message = format!(
        "Ran in {} of {} directories ({} skipped, {} failed)",
        summary.executed,
        targets.len(),
        summary.skipped,
        summary.failed
    );
    if summary.failed > 0 {
        print_warning(&message);
    } else {
        handle_flow(FlowResult::Success(message));
    }

    Ok(())
}

/// `--tag` only selects registry entries; scan mode has no tags to pick from
fn directory_source(args: &RunArgs, cwd: PathBuf) -> AppResult<DirectorySource> {
    match args.source {
        Source::Registry => Ok(DirectorySource::Registry {
            tag: args.tag.clone().unwrap_or_else(|| DEFAULT_TAG.to_string()),
        }),
        Source::Scan if args.tag.is_some() => Err(AppError::Input(
            "--tag cannot be combined with --source scan".to_string(),
        )),
        Source::Scan => Ok(DirectorySource::Scan { root: cwd }),
    }
}
