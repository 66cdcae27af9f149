use assert_cmd::prelude::*;
use predicates::prelude::*;
use regex::Regex;
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

fn normalize_paths(s: &str) -> String {
    let path_re = Regex::new(r#"(?m)^path: .*$"#).unwrap();
    let root_re = Regex::new(r#"(?m)^docs_root: .*$"#).unwrap();
    let s = path_re.replace(s, "path: <CFG>");
    root_re.replace(&s, "docs_root: <ROOT>").to_string()
}

#[test]
fn doctor_snapshot_default_profile() {
    let tmp = tempdir().unwrap();
    let docs = tmp.path().join("docs");
    write_file(&docs.join("guides/auth.md"), "# Auth\n");
    write_file(&docs.join("drafts/wip.md"), "# WIP\n");
    write_file(&docs.join("readme.md"), "# Readme\n");

    let cfg = tmp.path().join("config.toml");
    let toml = format!(
        r#"
version = 1
profile = "default"

[profiles.default]
docs_root = "{}"
excluded_folders = ["drafts"]

[glossary]
SSE = ["server-sent events"]
"#,
        docs.display()
    );
    write_file(&cfg, &toml);

    let assert = Command::new(assert_cmd::cargo::cargo_bin!("doctree"))
        .env_remove("DOCS_ROOT")
        .env_remove("DOCS_GLOB")
        .env_remove("MAX_DEPTH")
        .env_remove("SUMMARY_LENGTH")
        .args(["doctor", "--config", cfg.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("OK   doctree doctor"));

    let out = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let norm = normalize_paths(&out);

    insta::assert_snapshot!("doctor_default_profile", norm);
}
