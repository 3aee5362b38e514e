//! CLI integration tests for shortcut
//!
//! These tests drive the binary through its non-interactive flags against a
//! temporary shortcuts file.

use std::fs;
use std::path::{Path, PathBuf};

use predicates::prelude::*;
use tempfile::TempDir;

/// Isolated environment: a shortcuts file and an empty config file
struct Env {
    dir: TempDir,
}

impl Env {
    fn new() -> Self {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("config.toml"), "").unwrap();
        Self { dir }
    }

    fn config(&self) -> PathBuf {
        self.dir.path().join("config.toml")
    }

    fn db(&self) -> PathBuf {
        self.dir.path().join("shortcuts.json")
    }

    /// Creates (and returns) a working directory inside the sandbox
    fn workdir(&self, rel: &str) -> PathBuf {
        let path = self.dir.path().join("work").join(rel);
        fs::create_dir_all(&path).unwrap();
        path
    }

    fn cmd(&self) -> assert_cmd::Command {
        let mut cmd = assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("shortcut"));
        cmd.env("SHORTCUT_DB", self.db())
            .env("SHORTCUT_CONFIG", self.config())
            .current_dir(self.dir.path());
        cmd
    }

    fn cmd_in(&self, dir: &Path) -> assert_cmd::Command {
        let mut cmd = self.cmd();
        cmd.current_dir(dir);
        cmd
    }

    fn add_global(&self, name: &str, commands: &[&str]) {
        self.cmd()
            .args(["add", "--scope", "global", "--name", name])
            .args(commands)
            .assert()
            .success();
    }

    fn add_local(&self, dir: &Path, name: &str, commands: &[&str]) {
        self.cmd_in(dir)
            .args(["add", "--scope", "local", "--name", name])
            .args(commands)
            .assert()
            .success();
    }
}

// =============================================================================
// Help and Listing
// =============================================================================

#[test]
fn test_no_arguments_shows_help() {
    let env = Env::new();

    env.cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage"));
}

#[test]
fn test_shortcut_name_with_subcommand_is_usage_error() {
    let env = Env::new();
    env.add_global("build", &["echo hi"]);

    env.cmd()
        .args(["build", "list"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("cannot be combined with a subcommand"));
}

#[test]
fn test_missing_explicit_config_is_an_error() {
    let env = Env::new();

    env.cmd()
        .env("SHORTCUT_CONFIG", env.dir.path().join("typo.toml"))
        .arg("list")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Configuration file not found"));

    assert!(!env.db().exists());
}

#[test]
fn test_config_file_sets_database() {
    let env = Env::new();
    let other = env.dir.path().join("other.json");
    fs::write(
        env.config(),
        format!("database = {:?}\n", other.display().to_string()),
    )
    .unwrap();

    env.cmd()
        .env_remove("SHORTCUT_DB")
        .arg("list")
        .assert()
        .success();

    assert!(other.exists());
    assert!(!env.db().exists());
}

#[test]
fn test_list_empty_creates_document() {
    let env = Env::new();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No shortcuts found"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(env.db()).unwrap()).unwrap();
    assert_eq!(
        json,
        serde_json::json!({ "globalShortcuts": {}, "localShortcuts": {} })
    );
}

#[test]
fn test_list_shows_global_and_local() {
    let env = Env::new();
    let project = env.workdir("project");

    env.add_global("hello", &["echo hi"]);
    env.add_local(&project, "build", &["make", "make test"]);

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Global Shortcuts:"))
        .stdout(predicate::str::contains("hello ->"))
        .stdout(predicate::str::contains("  1. echo hi"))
        .stdout(predicate::str::contains("Local Shortcuts:"))
        .stdout(predicate::str::contains("    2. make test"));
}

#[test]
fn test_list_json() {
    let env = Env::new();
    env.add_global("hello", &["echo hi"]);

    let output = env
        .cmd()
        .args(["list", "--format", "json"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["globalShortcuts"]["hello"][0], "echo hi");
}

#[test]
fn test_legacy_single_string_entries() {
    let env = Env::new();
    fs::write(
        env.db(),
        r#"{ "globalShortcuts": { "greet": "echo legacy" }, "localShortcuts": {} }"#,
    )
    .unwrap();

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("1. echo legacy"));
}

// =============================================================================
// Add
// =============================================================================

#[test]
fn test_add_reports_shortcut() {
    let env = Env::new();

    env.cmd()
        .args(["add", "--scope", "global", "--name", "hello", "echo hi"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Shortcut added (Global): hello -> echo hi",
        ));
}

#[test]
fn test_add_duplicate_is_rejected() {
    let env = Env::new();
    env.add_global("hello", &["echo hi"]);
    let before = fs::read(env.db()).unwrap();

    env.cmd()
        .args(["add", "--scope", "global", "--name", "hello", "echo again"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("already exists"));

    assert_eq!(fs::read(env.db()).unwrap(), before);
}

#[test]
fn test_add_same_name_in_child_directory_is_allowed() {
    let env = Env::new();
    let parent = env.workdir("a");
    let child = env.workdir("a/b");

    env.add_local(&parent, "t", &["echo parent"]);
    env.add_local(&child, "t", &["echo child"]);
}

#[test]
fn test_add_empty_name_is_rejected() {
    let env = Env::new();

    env.cmd()
        .args(["add", "--scope", "global", "--name", "", "ls"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be empty"));
}

// =============================================================================
// Run
// =============================================================================

#[cfg(unix)]
#[test]
fn test_run_global_shortcut() {
    let env = Env::new();
    env.add_global("hello", &["echo hi"]);

    env.cmd()
        .arg("hello")
        .assert()
        .success()
        .stdout(predicate::str::contains("Running global shortcut: hello -> echo hi"))
        .stdout(predicate::str::ends_with("\nhi\n"));
}

#[cfg(unix)]
#[test]
fn test_run_chains_commands_in_order() {
    let env = Env::new();
    env.add_global("both", &["echo first", "echo second"]);

    env.cmd()
        .arg("both")
        .assert()
        .success()
        .stdout(predicate::str::ends_with("first\nsecond\n"));
}

#[cfg(unix)]
#[test]
fn test_run_local_from_descendant() {
    let env = Env::new();
    let project = env.workdir("project");
    let nested = env.workdir("project/src/deep");
    let elsewhere = env.workdir("elsewhere");

    env.add_local(&project, "build", &["echo local-build"]);

    env.cmd_in(&nested)
        .arg("build")
        .assert()
        .success()
        .stdout(predicate::str::contains("Running local shortcut"))
        .stdout(predicate::str::contains("local-build"));

    env.cmd_in(&elsewhere)
        .arg("build")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Shortcut \"build\" not found!"));
}

#[cfg(unix)]
#[test]
fn test_nearest_local_shadows_outer_and_global() {
    let env = Env::new();
    let outer = env.workdir("outer");
    let inner = env.workdir("outer/inner");
    let below = env.workdir("outer/inner/below");

    env.add_global("which", &["echo from-global"]);
    env.add_local(&outer, "which", &["echo from-outer"]);
    env.add_local(&inner, "which", &["echo from-inner"]);

    env.cmd_in(&below)
        .arg("which")
        .assert()
        .success()
        .stdout(predicate::str::contains("from-inner"))
        .stdout(predicate::str::contains("from-outer").not());

    env.cmd_in(&outer)
        .arg("which")
        .assert()
        .success()
        .stdout(predicate::str::contains("from-outer"));
}

#[test]
fn test_run_unknown_shortcut() {
    let env = Env::new();

    env.cmd()
        .arg("nothing-here")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("not found"));
}

#[cfg(unix)]
#[test]
fn test_run_failing_shortcut() {
    let env = Env::new();
    env.add_global("broken", &["exit 7", "echo unreachable"]);

    env.cmd()
        .arg("broken")
        .assert()
        .code(4)
        .stdout(predicate::str::ends_with("exit 7 && echo unreachable\n"))
        .stderr(predicate::str::contains("exit code 7"));
}

// =============================================================================
// Remove
// =============================================================================

#[test]
fn test_remove_global() {
    let env = Env::new();
    env.add_global("hello", &["echo hi"]);

    env.cmd()
        .args(["remove", "--scope", "global", "--name", "hello", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Global shortcut \"hello\" removed."));

    env.cmd()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No shortcuts found"));
}

#[test]
fn test_remove_missing_does_not_write() {
    let env = Env::new();
    env.add_global("hello", &["echo hi"]);
    let before = fs::read(env.db()).unwrap();

    env.cmd()
        .args(["remove", "--scope", "global", "--name", "nope", "--yes"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Global shortcut \"nope\" not found!"));

    assert_eq!(fs::read(env.db()).unwrap(), before);
}

#[test]
fn test_remove_local_from_unrelated_directory() {
    let env = Env::new();
    let project = env.workdir("project");
    let elsewhere = env.workdir("elsewhere");
    env.add_local(&project, "build", &["make"]);

    env.cmd_in(&elsewhere)
        .args(["remove", "--scope", "local", "--name", "build", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Local shortcut \"build\" removed from directory:"));

    let json: serde_json::Value =
        serde_json::from_str(&fs::read_to_string(env.db()).unwrap()).unwrap();
    assert_eq!(json["localShortcuts"], serde_json::json!({}));
}
