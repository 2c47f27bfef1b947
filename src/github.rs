//! Listing and cloning the repositories of a GitHub account through `gh`

use crate::core::traits::CommandExecutor;
use crate::utils::command::split_options;
use crate::utils::error::{AppError, AppResult};
use crate::utils::output::{OutputStyle, write_indexed, write_notice, write_warning};
use serde::Deserialize;
use std::collections::BTreeSet;
use std::io::Write;
use std::path::Path;
use tracing::{debug, info};

pub const GH: &str = "gh";
pub const GIT: &str = "git";
pub const DEFAULT_LIMIT: u32 = 100;

#[derive(Debug, Deserialize)]
struct RepoRecord {
    name: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct CloneSummary {
    pub cloned: usize,
    pub existing: usize,
    pub failed: usize,
}

pub fn remote_url(account: &str, name: &str) -> String {
    format!("git@github.com:{}/{}.git", account, name)
}

fn listing_args(account: Option<&str>, limit: u32) -> Vec<String> {
    let mut args: Vec<String> = ["repo", "list", "--json", "name", "--limit"]
        .into_iter()
        .map(str::to_string)
        .collect();
    args.push(limit.to_string());
    if let Some(account) = account {
        args.push(account.to_string());
    }
    args
}

/// Decode `gh --json name` output into sorted, deduplicated names
pub fn parse_listing(json: &str) -> AppResult<Vec<String>> {
    let records: Vec<RepoRecord> =
        serde_json::from_str(json).map_err(|e| AppError::Parse(format!("gh repo list: {}", e)))?;

    let names: BTreeSet<String> = records.into_iter().map(|r| r.name).collect();
    Ok(names.into_iter().collect())
}

/// Repository names of `account`, or of the authenticated user when `None`.
///
/// Any failure here is fatal: the rest of the operation depends on it.
pub fn list_repositories<E>(
    executor: &E,
    account: Option<&str>,
    limit: u32,
) -> AppResult<Vec<String>>
where
    E: CommandExecutor + ?Sized,
{
    executor.require(GH)?;

    let output = executor.capture(GH, &listing_args(account, limit))?;
    if !output.exit.success() {
        return Err(AppError::External {
            program: GH.to_string(),
            status: output.exit.describe(),
            stderr: output.stderr.trim().to_string(),
        });
    }

    let names = parse_listing(&output.stdout)?;
    debug!(account = account.unwrap_or("<self>"), count = names.len(), "listed repositories");
    Ok(names)
}

pub fn write_repositories<W: Write + ?Sized>(out: &mut W, names: &[String]) -> std::io::Result<()> {
    for (i, name) in names.iter().enumerate() {
        write_indexed(out, i + 1, name)?;
    }
    Ok(())
}

/// Clone every repository of `account` that is not already present in `dest`.
///
/// Existing directories are left alone; a failed clone is reported and the
/// batch continues. Nothing is rolled back.
pub fn clone_all<W, E>(
    out: &mut W,
    executor: &E,
    account: &str,
    limit: u32,
    options: &str,
    dest: &Path,
) -> AppResult<CloneSummary>
where
    W: Write + ?Sized,
    E: CommandExecutor + ?Sized,
{
    executor.require(GIT)?;
    let names = list_repositories(executor, Some(account), limit)?;
    let extra = split_options(options);
    let total = names.len();
    let mut summary = CloneSummary::default();

    for (i, name) in names.iter().enumerate() {
        if dest.join(name).exists() {
            write_notice(out, &format!("{} already exists, skipping.", name))?;
            summary.existing += 1;
            continue;
        }

        writeln!(out)?;
        writeln!(out, "{}", OutputStyle::header(&format!("{}/{}: {}", i + 1, total, name)))?;
        out.flush()?;

        let mut args = vec!["clone".to_string()];
        args.extend(extra.iter().cloned());
        args.push("--".to_string());
        args.push(remote_url(account, name));

        match executor.run(GIT, &args, dest) {
            Ok(exit) if exit.success() => {
                info!(repo = %name, "cloned");
                summary.cloned += 1;
            }
            Ok(exit) => {
                summary.failed += 1;
                let message = format!("{}: git clone finished with {}", name, exit.describe());
                write_warning(out, &message)?;
            }
            Err(e) => {
                summary.failed += 1;
                write_warning(out, &format!("{}: cannot run git clone: {}", name, e))?;
            }
        }
    }

    Ok(summary)
}
