//! End-to-end tests for the `bcs` binary
//!
//! HOME points at an empty directory so a user config never leaks in.

use assert_cmd::Command;
use bcs_domain::Tier;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write(root: &Path, rel: &str, body: &str) {
    let path = root.join(rel);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, body).unwrap();
}

fn corpus() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path().join("data");
    for tier in Tier::CORE {
        write(&root, &format!("01-script-structure/00-section.{}.md", tier), "# Script Structure\n");
        write(
            &root,
            &format!("01-script-structure/02-shebang.{}.md", tier),
            &format!("## Shebang [BCS0102]\n{} text\nUse #!/usr/bin/env bash\n", tier),
        );
    }
    write(&root, "01-script-structure/00-script-structure.rulet.md", "- [BCS0102] Use env bash\n");
    write(&root, "BASH-CODING-STANDARD.complete.md", "# BCS\n## Script Structure\n");
    write(&root, "BASH-CODING-STANDARD.summary.md", "# BCS\n## Script Structure\n");
    dir
}

fn bcs(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("bcs").unwrap();
    cmd.env("HOME", dir.path())
        .env_remove("BCS_DATA_DIR")
        .env_remove("RUST_LOG")
        .arg("--data-dir")
        .arg(dir.path().join("data"));
    cmd
}

#[test]
fn test_decode_prints_path() {
    let dir = corpus();
    bcs(&dir)
        .args(["decode", "BCS0102"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("01-script-structure/02-shebang.complete.md\n"));
}

#[test]
fn test_decode_relative_all_tiers() {
    let dir = corpus();
    bcs(&dir)
        .args(["decode", "--all", "--relative", "0102"])
        .assert()
        .success()
        .stdout(
            "01-script-structure/02-shebang.complete.md\n\
             01-script-structure/02-shebang.summary.md\n\
             01-script-structure/02-shebang.abstract.md\n",
        );
}

#[test]
fn test_decode_print_contents() {
    let dir = corpus();
    bcs(&dir)
        .args(["decode", "-p", "-s", "BCS0102"])
        .assert()
        .success()
        .stdout(predicate::str::contains("summary text"))
        .stdout(predicate::str::contains("complete text").not());
}

#[test]
fn test_decode_unknown_code_exits_one() {
    let dir = corpus();
    bcs(&dir)
        .args(["decode", "BCS9999"])
        .assert()
        .code(1)
        .stdout("")
        .stderr(predicate::str::contains("BCS9999"));
}

#[test]
fn test_decode_malformed_code_exits_einval() {
    let dir = corpus();
    bcs(&dir)
        .args(["decode", "BCS0102", "BCS102"])
        .assert()
        .code(22)
        .stdout(predicate::str::contains("02-shebang.complete.md"))
        .stderr(predicate::str::contains("BCS102"));
}

#[test]
fn test_decode_exists_is_silent() {
    let dir = corpus();
    bcs(&dir).args(["decode", "--exists", "BCS0102"]).assert().success().stdout("").stderr("");
    bcs(&dir).args(["decode", "--exists", "-r", "BCS0102"]).assert().code(1).stdout("").stderr("");
}

#[test]
fn test_path_reverse_lookup() {
    let dir = corpus();
    let file = dir.path().join("data/01-script-structure/02-shebang.abstract.md");
    bcs(&dir)
        .args(["--format", "quiet", "path"])
        .arg(&file)
        .assert()
        .success()
        .stdout("BCS0102\n");
}

#[test]
fn test_codes_json() {
    let dir = corpus();
    let output = bcs(&dir).args(["codes", "--format", "json"]).output().unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value[0]["code"], "BCS01");
    assert_eq!(value[1]["code"], "BCS0102");
    assert_eq!(value[1]["tiers"].as_array().unwrap().len(), 3);
}

#[test]
fn test_grep_alias_and_no_match() {
    let dir = corpus();
    bcs(&dir)
        .args(["grep", "-i", "-r", "ENV BASH"])
        .assert()
        .success()
        .stdout(predicate::str::contains("00-script-structure.rulet.md:1:"));

    bcs(&dir).args(["search", "zsh"]).assert().code(1);
}

#[test]
fn test_sections_quiet() {
    let dir = corpus();
    bcs(&dir).args(["sections", "-f", "quiet"]).assert().success().stdout("BCS01\n");
}

#[test]
fn test_validate_reports_violations() {
    let dir = corpus();
    bcs(&dir)
        .args(["validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation passed"));

    fs::remove_file(dir.path().join("data/01-script-structure/02-shebang.summary.md")).unwrap();
    bcs(&dir)
        .args(["validate", "--format", "quiet"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("[missing-tier]"));
}

#[test]
fn test_missing_data_dir_exits_two() {
    let dir = TempDir::new().unwrap();
    bcs(&dir).args(["decode", "BCS0102"]).assert().code(2);
}

#[cfg(unix)]
#[test]
fn test_default_tier_steers_best_lookup() {
    let dir = corpus();
    bcs(&dir).args(["default"]).assert().code(1);

    bcs(&dir).args(["default", "summary"]).assert().success();
    bcs(&dir).args(["default"]).assert().success().stdout("summary\n");
    bcs(&dir)
        .args(["decode", "BCS0102"])
        .assert()
        .success()
        .stdout(predicate::str::ends_with("02-shebang.summary.md\n"));
}
