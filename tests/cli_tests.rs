//! End-to-end tests driving the `totaliterm` binary.
//!
//! Each test points TOTALITERM_CONFIG_DIR at its own temp dir so the user's
//! real registry is never touched.

use assert_cmd::Command;
use predicates::prelude::*;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Sandbox {
    config: TempDir,
    work: TempDir,
}

impl Sandbox {
    fn new() -> Self {
        Self {
            config: TempDir::new().unwrap(),
            work: TempDir::new().unwrap(),
        }
    }

    fn cmd(&self) -> Command {
        let mut cmd = Command::cargo_bin("totaliterm").unwrap();
        cmd.env("TOTALITERM_CONFIG_DIR", self.config.path())
            .env("NO_COLOR", "1")
            .env_remove("RUST_LOG")
            .env_remove("CLICOLOR_FORCE")
            .current_dir(self.work.path());
        cmd
    }

    fn dir(&self, name: &str) -> PathBuf {
        let path = self.work.path().join(name);
        std::fs::create_dir_all(&path).unwrap();
        std::fs::canonicalize(path).unwrap()
    }

    fn config_file(&self) -> PathBuf {
        self.config.path().join("config.toml")
    }
}

fn text(path: &Path) -> String {
    path.to_str().unwrap().to_string()
}

#[test]
fn test_add_then_list_numbers_paths() {
    let sb = Sandbox::new();
    let a = sb.dir("a");
    let b = sb.dir("b");

    sb.cmd().args(["add", &text(&a), &text(&b)]).assert().success();

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("default:"))
        .stdout(predicate::str::contains(format!("1: {}", a.display())))
        .stdout(predicate::str::contains(format!("2: {}", b.display())));
}

#[test]
fn test_add_duplicate_in_one_call_collapses() {
    let sb = Sandbox::new();
    let x = sb.dir("x");

    sb.cmd()
        .args(["add", &text(&x), &text(&x), "--tag", "work"])
        .assert()
        .success()
        .stdout(predicate::str::contains("already in the list"));

    let written = std::fs::read_to_string(sb.config_file()).unwrap();
    assert_eq!(written.matches(&text(&x)).count(), 1);
    assert!(written.contains("[directories]"));
    assert!(written.contains("work = ["));
}

#[test]
fn test_add_missing_path_warns_and_keeps_the_rest() {
    let sb = Sandbox::new();
    let good = sb.dir("good");
    let missing = sb.work.path().join("missing");

    sb.cmd()
        .args(["add", &text(&missing), &text(&good)])
        .assert()
        .success()
        .stdout(predicate::str::contains("does not exist"));

    sb.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains(format!("1: {}", good.display())))
        .stdout(predicate::str::contains("missing").not());
}

#[test]
fn test_list_unknown_tag_prints_no_paths() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["list", "--tag", "nothing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1:").not())
        .stdout(predicate::str::contains("No directories under tag 'nothing' found"));
}

#[test]
fn test_list_all_restarts_numbering_per_tag() {
    let sb = Sandbox::new();
    let a = sb.dir("a");
    let w = sb.dir("w");
    sb.cmd().args(["add", &text(&a)]).assert().success();
    sb.cmd().args(["add", &text(&w), "--tag", "work"]).assert().success();

    let output = sb.cmd().args(["list", "--all"]).output().unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();

    assert!(stdout.contains(&format!("default:\n1: {}\n", a.display())));
    assert!(stdout.contains(&format!("work:\n1: {}\n", w.display())));
}

#[test]
fn test_malformed_config_is_fatal() {
    let sb = Sandbox::new();
    std::fs::write(sb.config_file(), "[directories\n").unwrap();

    sb.cmd()
        .arg("list")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("config.toml"));
}

#[test]
fn test_config_path_prints_location() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"));
}

#[test]
fn test_explicit_config_flag_wins() {
    let sb = Sandbox::new();
    let custom = sb.config.path().join("elsewhere.toml");

    sb.cmd()
        .args(["--config", &text(&custom), "config", "path"])
        .assert()
        .success()
        .stdout(predicate::str::contains("elsewhere.toml"));
}

#[test]
fn test_config_show_counts_tags() {
    let sb = Sandbox::new();
    let a = sb.dir("a");
    let b = sb.dir("b");
    sb.cmd().args(["add", &text(&a), &text(&b), "-t", "work"]).assert().success();

    sb.cmd()
        .args(["config", "show"])
        .assert()
        .success()
        .stdout(predicate::str::contains("work: 2 directories"));
}

#[test]
fn test_run_scan_rejects_tag() {
    let sb = Sandbox::new();

    sb.cmd()
        .args(["run", "-c", "true", "--source", "scan", "--tag", "work", "-y"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--tag cannot be combined"));
}

#[cfg(unix)]
mod unix {
    use super::*;

    #[test]
    fn test_run_visits_registry_in_order_despite_failures() {
        let sb = Sandbox::new();
        let dirs = [sb.dir("c"), sb.dir("a"), sb.dir("b")];
        for dir in &dirs {
            sb.cmd().args(["add", &text(dir)]).assert().success();
        }
        let log = sb.work.path().join("visits.log");
        let command = format!("pwd >> {}; exit 1", text(&log));

        sb.cmd()
            .args(["run", "-c", &command, "-y"])
            .assert()
            .success()
            .stdout(predicate::str::contains(format!("1: {}", dirs[0].display())))
            .stdout(predicate::str::contains(format!("3: {}", dirs[2].display())))
            .stdout(predicate::str::contains("3 failed"));

        let visits: Vec<PathBuf> = std::fs::read_to_string(&log)
            .unwrap()
            .lines()
            .map(|l| std::fs::canonicalize(l).unwrap())
            .collect();
        assert_eq!(visits, dirs.to_vec());
    }

    #[test]
    fn test_run_declined_directory_is_skipped() {
        let sb = Sandbox::new();
        let a = sb.dir("a");
        let b = sb.dir("b");
        sb.cmd().args(["add", &text(&a), &text(&b)]).assert().success();

        sb.cmd()
            .args(["run", "-c", "touch ran"])
            .write_stdin("n\ny\n")
            .assert()
            .success()
            .stdout(predicate::str::contains("1 skipped"));

        assert!(!a.join("ran").exists());
        assert!(b.join("ran").exists());
    }

    #[test]
    fn test_run_without_answer_on_stdin_aborts() {
        let sb = Sandbox::new();
        let a = sb.dir("a");
        sb.cmd().args(["add", &text(&a)]).assert().success();

        sb.cmd()
            .args(["run", "-c", "touch ran"])
            .write_stdin("")
            .assert()
            .failure()
            .stderr(predicate::str::contains("--yes"));

        assert!(!a.join("ran").exists());
    }

    #[test]
    fn test_run_scan_mode_does_not_create_config() {
        let sb = Sandbox::new();
        std::fs::create_dir_all(sb.dir("repo").join(".git")).unwrap();

        sb.cmd()
            .args(["run", "-c", "true", "--source", "scan", "-y"])
            .assert()
            .success();

        assert!(!sb.config_file().exists());
    }

    #[test]
    fn test_run_scan_mode_uses_git_children() {
        let sb = Sandbox::new();
        let repo = sb.dir("repo");
        std::fs::create_dir(repo.join(".git")).unwrap();
        let plain = sb.dir("plain");

        sb.cmd()
            .args(["run", "-c", "touch ran", "--source", "scan", "--yes"])
            .assert()
            .success()
            .stdout(predicate::str::contains("1: repo"));

        assert!(repo.join("ran").exists());
        assert!(!plain.join("ran").exists());
    }

    #[test]
    fn test_run_missing_registered_directory_is_reported() {
        let sb = Sandbox::new();
        let gone = sb.dir("gone");
        let kept = sb.dir("kept");
        sb.cmd().args(["add", &text(&gone), &text(&kept)]).assert().success();
        std::fs::remove_dir(&gone).unwrap();

        sb.cmd()
            .args(["run", "-c", "touch ran", "-y"])
            .assert()
            .success()
            .stdout(predicate::str::contains("cannot run command"));

        assert!(kept.join("ran").exists());
    }
}
