//! Integration tests driving the compiled `rosegen` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

use rosegen_core::domain::BoilerplateKind;

const ROOT: &str = "Scripts/Server/Authoring/Behaviours/External";

/// Command with a clean environment: no user config, no env overrides.
fn rosegen() -> Command {
    let mut cmd = Command::cargo_bin("rosegen").unwrap();
    cmd.env_remove("ROSEGEN_TEMPLATES_DIR")
        .env_remove("RUST_LOG")
        .env_remove("NO_COLOR")
        .env("XDG_CONFIG_HOME", "/nonexistent/rosegen-test-config");
    cmd
}

#[test]
fn help_lists_the_subcommands() {
    rosegen()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("single-account"))
        .stdout(predicate::str::contains("multi-account"))
        .stdout(predicate::str::contains("completions"));
}

#[test]
fn version_flag_reports_cargo_version() {
    rosegen()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn single_account_scaffolds_five_files() {
    let temp = TempDir::new().unwrap();

    rosegen()
        .current_dir(temp.path())
        .args(["single-account", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("SingleCharAccountAPIClient.cs"));

    let root = temp.path().join(ROOT);
    assert!(root.join("Client/SingleCharAccountAPIClient.cs").exists());
    for model in ["SingleCharAccount", "Scope", "Map", "Position"] {
        assert!(root.join(format!("Models/{model}.cs")).exists(), "missing {model}");
    }

    let account = fs::read_to_string(root.join("Models/SingleCharAccount.cs")).unwrap();
    assert!(account.contains("class SingleCharAccount"));
}

#[test]
fn multi_account_scaffolds_six_files_into_the_given_path() {
    let temp = TempDir::new().unwrap();

    rosegen()
        .current_dir(temp.path())
        .args(["multi-account", "./game", "--yes"])
        .assert()
        .success();

    let root = temp.path().join("game").join(ROOT);
    assert!(root.join("Client/MultiCharAccountAPIClient.cs").exists());
    assert!(root.join("Models/Character.cs").exists());

    let files: Vec<_> = walk_files(&temp.path().join("game"));
    assert_eq!(files.len(), 6);
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    rosegen()
        .current_dir(temp.path())
        .args(["single-account", "--dry-run"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"))
        .stdout(predicate::str::contains("Position.cs"));

    assert!(!temp.path().join("Scripts").exists());
}

#[test]
fn force_overwrites_edited_output() {
    let temp = TempDir::new().unwrap();
    let scope = temp.path().join(ROOT).join("Models/Scope.cs");

    rosegen()
        .current_dir(temp.path())
        .args(["single-account", "--yes"])
        .assert()
        .success();

    fs::write(&scope, "// local edits\n").unwrap();

    rosegen()
        .current_dir(temp.path())
        .args(["single-account", "--yes", "--force"])
        .assert()
        .success();

    let restored = fs::read_to_string(&scope).unwrap();
    assert!(restored.contains("class Scope"));
    assert!(!restored.contains("local edits"));
}

#[test]
fn set_substitution_flows_into_generated_files() {
    let temp = TempDir::new().unwrap();
    let templates = temp.path().join("templates");
    fs::create_dir(&templates).unwrap();
    for spec in BoilerplateKind::SingleAccount.specs() {
        fs::write(
            templates.join(format!("{}.cs.txt", spec.key)),
            "// Maintained by {{TEAM}}\n",
        )
        .unwrap();
    }

    rosegen()
        .current_dir(temp.path())
        .args([
            "single-account",
            "./game",
            "--yes",
            "--templates-dir",
            "./templates",
            "--set",
            "TEAM=WorldServer",
        ])
        .assert()
        .success();

    let map = temp.path().join("game").join(ROOT).join("Models/Map.cs");
    assert_eq!(
        fs::read_to_string(map).unwrap(),
        "// Maintained by WorldServer\n"
    );
}

#[test]
fn list_table_shows_both_kinds() {
    rosegen()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("single-account"))
        .stdout(predicate::str::contains("multi-account"))
        .stdout(predicate::str::contains("SingleCharAccountAPIClient.cs"));
}

#[test]
fn list_json_is_parseable() {
    let assert = rosegen().args(["list", "--format", "json"]).assert().success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed.as_array().unwrap().len(), 2);
}

#[test]
fn list_json_respects_kind_filter() {
    let assert = rosegen()
        .args(["list", "--format", "json", "--kind", "multi-account"])
        .assert()
        .success();
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    let kinds = parsed.as_array().unwrap();
    assert_eq!(kinds.len(), 1);
    assert_eq!(kinds[0]["kind"], "multi-account");
    assert_eq!(kinds[0]["files"].as_array().unwrap().len(), 6);
}

#[test]
fn quiet_scaffold_prints_nothing_but_still_writes() {
    let temp = TempDir::new().unwrap();

    rosegen()
        .current_dir(temp.path())
        .args(["-q", "single-account", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert!(temp
        .path()
        .join(ROOT)
        .join("Client/SingleCharAccountAPIClient.cs")
        .exists());
}

#[test]
fn verbose_flag_logs_progress_to_stderr() {
    let temp = TempDir::new().unwrap();

    rosegen()
        .current_dir(temp.path())
        .args(["-v", "single-account", "--yes"])
        .assert()
        .success()
        .stderr(predicate::str::contains("INFO"));
}

#[test]
fn completions_bash_emits_a_completion_script() {
    rosegen()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("complete"));
}

#[test]
#[cfg(target_os = "linux")]
fn init_writes_a_default_config_file() {
    let temp = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("rosegen").unwrap();
    cmd.env_remove("ROSEGEN_TEMPLATES_DIR")
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("init")
        .assert()
        .success();

    let config = temp.path().join("rosegen/config.toml");
    assert!(config.exists());
    let body = fs::read_to_string(&config).unwrap();
    assert!(body.contains("[defaults]"));
    assert!(body.contains("color = true"));

    // A second init without --force must leave the file alone.
    let mut again = Command::cargo_bin("rosegen").unwrap();
    again
        .env("XDG_CONFIG_HOME", temp.path())
        .arg("init")
        .assert()
        .success()
        .stdout(predicate::str::contains("already exists"));
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn walk_files(dir: &Path) -> Vec<std::path::PathBuf> {
    let mut files = Vec::new();
    let mut stack = vec![dir.to_path_buf()];
    while let Some(current) = stack.pop() {
        for entry in fs::read_dir(current).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                stack.push(path);
            } else {
                files.push(path);
            }
        }
    }
    files
}
