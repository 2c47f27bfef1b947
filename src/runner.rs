//! Run one command string in many directories, one after another

use crate::config::ConfigStore;
use crate::core::traits::{CommandExecutor, Confirm};
use crate::utils::error::AppResult;
use crate::utils::output::{OutputStyle, write_error, write_indexed, write_warning};
use std::io::Write;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

/// Entry whose presence marks a directory as a git checkout
pub const VCS_MARKER: &str = ".git";

/// Where the directories to iterate come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DirectorySource {
    /// Stored order of one registry tag
    Registry { tag: String },
    /// Immediate git checkouts under `root`, sorted by path
    Scan { root: PathBuf },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    pub dir: PathBuf,
    /// What the progress line shows
    pub label: String,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub executed: usize,
    pub skipped: usize,
    pub failed: usize,
}

/// Resolve the directories to visit. Only the registry source touches the
/// config file, so a scan never creates one.
pub fn collect_targets(source: &DirectorySource, config_path: &Path) -> AppResult<Vec<Target>> {
    match source {
        DirectorySource::Registry { tag } => {
            let registry = ConfigStore::open(config_path.to_path_buf())?.load()?;
            Ok(registry
                .paths(tag)
                .iter()
                .map(|dir| Target {
                    dir: dir.clone(),
                    label: dir.display().to_string(),
                })
                .collect())
        }
        DirectorySource::Scan { root } => Ok(scan_git_roots(root)?
            .into_iter()
            .map(|dir| Target {
                label: dir
                    .file_name()
                    .map(|n| n.to_string_lossy().into_owned())
                    .unwrap_or_else(|| dir.display().to_string()),
                dir,
            })
            .collect()),
    }
}

/// Immediate children of `root` that contain a `.git` entry
pub fn scan_git_roots(root: &Path) -> AppResult<Vec<PathBuf>> {
    let mut roots = Vec::new();
    for entry in std::fs::read_dir(root)? {
        let path = entry?.path();
        if path.is_dir() && path.join(VCS_MARKER).exists() {
            roots.push(path);
        }
    }
    roots.sort();
    debug!(root = %root.display(), found = roots.len(), "scanned for git roots");
    Ok(roots)
}

/// Run `command` in every target in order.
///
/// A declined confirmation skips that directory only. A failing or
/// unspawnable command is reported and the loop moves on.
pub fn run_in_each<W, E, C>(
    out: &mut W,
    targets: &[Target],
    command: &str,
    executor: &E,
    confirm: &mut C,
) -> AppResult<RunSummary>
where
    W: Write + ?Sized,
    E: CommandExecutor + ?Sized,
    C: Confirm + ?Sized,
{
    let mut summary = RunSummary::default();
    let question = format!("Run the following command?\n  $ {}", OutputStyle::command(command));

    for (i, target) in targets.iter().enumerate() {
        writeln!(out)?;
        write_indexed(out, i + 1, &target.label)?;
        out.flush()?;

        if !confirm.confirm(&question)? {
            summary.skipped += 1;
            continue;
        }

        match executor.run_shell(command, &target.dir) {
            Ok(exit) if exit.success() => summary.executed += 1,
            Ok(exit) => {
                summary.executed += 1;
                summary.failed += 1;
                let status = exit.describe();
                let message = format!("{}: command finished with {}", target.label, status);
                write_warning(out, &message)?;
            }
            Err(e) => {
                summary.failed += 1;
                warn!(dir = %target.dir.display(), error = %e, "command could not be started");
                write_error(out, &format!("{}: cannot run command: {}", target.label, e))?;
            }
        }
    }

    Ok(summary)
}


#[cfg(test)]
mod tests {
    use super::testing::{Call, FakeExecutor, ScriptedConfirm};
    use super::*;
    use crate::utils::interactive::AssumeYes;
    use crate::utils::output::plain_output;
    use tempfile::TempDir;

    fn targets(dirs: &[&str]) -> Vec<Target> {
        dirs.iter()
            .map(|d| Target {
                dir: PathBuf::from(d),
                label: d.to_string(),
            })
            .collect()
    }

    fn shell_dirs(executor: &FakeExecutor) -> Vec<PathBuf> {
        executor
            .calls()
            .into_iter()
            .filter_map(|c| match c {
                Call::Shell { dir, .. } => Some(dir),
                Call::Run { .. } => None,
            })
            .collect()
    }

    #[test]
    fn test_runs_once_per_directory_in_stored_order() {
        plain_output();
        let executor = FakeExecutor::default();
        let mut out = Vec::new();

        let dirs = targets(&["/a", "/b", "/c"]);
        let summary = run_in_each(&mut out, &dirs, "echo hi", &executor, &mut AssumeYes).unwrap();

        assert_eq!(
            shell_dirs(&executor),
            vec![PathBuf::from("/a"), PathBuf::from("/b"), PathBuf::from("/c")]
        );
        assert_eq!(summary, RunSummary { executed: 3, skipped: 0, failed: 0 });

        let text = String::from_utf8(out).unwrap();
        let a = text.find("1: /a").unwrap();
        let b = text.find("2: /b").unwrap();
        let c = text.find("3: /c").unwrap();
        assert!(a < b && b < c);
    }

    #[test]
    fn test_failing_directory_does_not_stop_the_next() {
        plain_output();
        let mut executor = FakeExecutor::default();
        executor.exit_codes.insert(PathBuf::from("/a"), 1);
        executor.unspawnable.push(PathBuf::from("/b"));
        let mut out = Vec::new();

        let dirs = targets(&["/a", "/b", "/c"]);
        let summary = run_in_each(&mut out, &dirs, "make", &executor, &mut AssumeYes).unwrap();

        assert_eq!(shell_dirs(&executor).len(), 3);
        assert_eq!(summary, RunSummary { executed: 2, skipped: 0, failed: 2 });
        let text = String::from_utf8(out).unwrap();
        assert!(text.contains("exit code 1"));
        assert!(text.contains("/b: cannot run command"));
    }

    #[test]
    fn test_declined_directory_is_skipped_only() {
        plain_output();
        let executor = FakeExecutor::default();
        let mut confirm = ScriptedConfirm([true, false, true].into());
        let mut out = Vec::new();

        let dirs = targets(&["/a", "/b", "/c"]);
        let summary = run_in_each(&mut out, &dirs, "ls", &executor, &mut confirm).unwrap();

        assert_eq!(shell_dirs(&executor), vec![PathBuf::from("/a"), PathBuf::from("/c")]);
        assert_eq!(summary.skipped, 1);
    }

    #[test]
    fn test_scan_finds_sorted_git_children_only() {
        let temp = TempDir::new().unwrap();
        for name in ["zeta", "alpha", "plain"] {
            std::fs::create_dir(temp.path().join(name)).unwrap();
        }
        std::fs::create_dir(temp.path().join("zeta").join(".git")).unwrap();
        std::fs::create_dir(temp.path().join("alpha").join(".git")).unwrap();
        std::fs::create_dir_all(temp.path().join("plain").join("nested").join(".git")).unwrap();
        std::fs::write(temp.path().join("file.txt"), "").unwrap();

        let roots = scan_git_roots(temp.path()).unwrap();

        assert_eq!(roots, vec![temp.path().join("alpha"), temp.path().join("zeta")]);
    }

    #[test]
    fn test_collect_targets_from_both_sources() {
        let temp = TempDir::new().unwrap();
        std::fs::create_dir_all(temp.path().join("repo").join(".git")).unwrap();
        let config = temp.path().join("config.toml");
        std::fs::write(&config, "[directories]\nwork = [\"/x\", \"/y\"]\n").unwrap();

        let registry = DirectorySource::Registry { tag: "work".to_string() };
        let labels: Vec<String> = collect_targets(&registry, &config)
            .unwrap()
            .into_iter()
            .map(|t| t.label)
            .collect();
        assert_eq!(labels, vec!["/x", "/y"]);

        let scan = DirectorySource::Scan { root: temp.path().to_path_buf() };
        let scanned = collect_targets(&scan, &config).unwrap();
        assert_eq!(scanned.len(), 1);
        assert_eq!(scanned[0].label, "repo");
    }

    #[test]
    fn test_scan_leaves_config_file_alone() {
        let temp = TempDir::new().unwrap();
        let config = temp.path().join("nested").join("config.toml");

        let scan = DirectorySource::Scan { root: temp.path().to_path_buf() };
        assert!(collect_targets(&scan, &config).unwrap().is_empty());
        assert!(!temp.path().join("nested").exists());
    }
}
