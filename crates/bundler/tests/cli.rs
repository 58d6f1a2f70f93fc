//! CLI integration tests for the bundler binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use tempfile::TempDir;

fn bundler() -> Command {
    Command::cargo_bin("prism-bundler").unwrap()
}

/// Minimal valid package for CLI runs.
fn fixture() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();
    fs::create_dir_all(root.join("src")).unwrap();

    fs::write(
        root.join("registry.toml"),
        r#"
[package]
name = "kit"
peers = ["dioxus"]

[[module]]
name = "utils"
kind = "util"
path = "@/utils.rs"
"#,
    )
    .unwrap();
    fs::write(
        root.join("Cargo.toml"),
        "[package]\nname = \"kit\"\nversion = \"0.1.0\"\nedition = \"2021\"\n\n[features]\ndefault = [\"full\"]\nfull = [\"utils\"]\nutils = []\n",
    )
    .unwrap();
    fs::write(root.join("src/lib.rs"), "pub mod utils;\n").unwrap();
    fs::write(root.join("src/utils.rs"), "pub fn noop() {}\n").unwrap();

    dir
}

/// The real component kit in this workspace.
fn ui_package() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("../ui")
}

#[test]
fn check_accepts_a_valid_package() {
    let pkg = fixture();

    bundler()
        .args(["check", "--package"])
        .arg(pkg.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("ok: 1 modules"));
}

#[test]
fn check_rejects_a_duplicate_name_before_any_output() {
    let pkg = fixture();
    fs::write(
        pkg.path().join("registry.toml"),
        r#"
[package]
name = "kit"

[[module]]
name = "utils"
kind = "util"
path = "@/utils.rs"

[[module]]
name = "utils"
kind = "util"
path = "@/utils.rs"
"#,
    )
    .unwrap();

    bundler()
        .args(["check", "--package"])
        .arg(pkg.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("duplicate export name `utils`"));
    assert!(!pkg.path().join("dist").exists());
}

#[test]
fn check_rejects_feature_table_drift() {
    let pkg = fixture();
    fs::write(
        pkg.path().join("Cargo.toml"),
        "[package]\nname = \"kit\"\nversion = \"0.1.0\"\nedition = \"2021\"\n\n[features]\ndefault = [\"full\"]\nfull = []\nutils = []\n",
    )
    .unwrap();

    bundler()
        .args(["check", "--package"])
        .arg(pkg.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("feature table out of sync"));
}

#[test]
fn build_emits_and_clean_removes() {
    let pkg = fixture();

    bundler()
        .args(["build", "--package"])
        .arg(pkg.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("emitted"));
    assert!(pkg.path().join("dist/MANIFEST.toml").exists());
    assert!(pkg.path().join("dist/modules/utils/api.toml").exists());

    bundler()
        .args(["clean", "--package"])
        .arg(pkg.path())
        .assert()
        .success();
    assert!(!pkg.path().join("dist").exists());
}

#[test]
fn build_failure_names_the_offending_module() {
    let pkg = fixture();
    fs::remove_file(pkg.path().join("src/utils.rs")).unwrap();

    bundler()
        .args(["build", "--package"])
        .arg(pkg.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("utils"));
}

#[test]
fn the_shipped_component_kit_passes_check() {
    bundler()
        .args(["check", "--package"])
        .arg(ui_package())
        .assert()
        .success()
        .stdout(predicate::str::contains("ok:"));
}
