use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use std::process::Command;
use tempfile::tempdir;

fn write_file(path: &PathBuf, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn doctree() -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("doctree"));
    for var in ["DOCS_ROOT", "DOCS_GLOB", "MAX_DEPTH", "SUMMARY_LENGTH", "RUST_LOG"] {
        cmd.env_remove(var);
    }
    cmd
}

#[test]
fn doctor_reads_provided_config_path() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    write_file(&docs.join("guide.md"), "# Guide\n");
    let cfg = tmp.path().join("config.toml");
    let toml = format!(
        r#"
version = 1
profile = "default"

[profiles.default]
docs_root = "{}"
max_depth = 4
"#,
        docs.display()
    );
    write_file(&cfg, &toml);

    let mut cmd = doctree();
    cmd.args(["doctor", "--config", cfg.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   doctree doctor"))
        .stdout(predicate::str::contains("profile: default"))
        .stdout(predicate::str::contains(format!("docs_root: {}", docs.display())))
        .stdout(predicate::str::contains("max_depth: 4"))
        .stdout(predicate::str::contains("documents: 1"));
}

#[test]
fn doctor_uses_xdg_default_when_present() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    fs::create_dir_all(&docs).unwrap();
    write_file(
        &tmp.path().join("doctree").join("config.toml"),
        &format!(
            r#"
version = 1
profile = "work"
[profiles.work]
docs_root = "{}"
"#,
            docs.display()
        ),
    );

    let mut cmd = doctree();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("OK   doctree doctor"))
        .stdout(predicate::str::contains("profile: work"))
        .stdout(predicate::str::contains("documents: 0"));
}

#[test]
fn doctor_falls_back_to_defaults_without_config() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("handbook");
    write_file(&docs.join("a.md"), "# A\n");
    write_file(&docs.join("b/c.md"), "# C\n");

    let mut cmd = doctree();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.args(["doctor", "--root", docs.to_str().unwrap()]);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("not found, using defaults"))
        .stdout(predicate::str::contains("glob: **/*.md"))
        .stdout(predicate::str::contains("documents: 2"));
}

#[test]
fn doctor_applies_env_overrides() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    write_file(&docs.join("a.md"), "# A\n");
    write_file(&docs.join("b.markdown"), "# B\n");

    let mut cmd = doctree();
    cmd.env("XDG_CONFIG_HOME", tmp.path());
    cmd.env("DOCS_ROOT", &docs);
    cmd.env("DOCS_GLOB", "*.markdown");
    cmd.arg("doctor");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("glob: *.markdown"))
        .stdout(predicate::str::contains("documents: 1"));
}
