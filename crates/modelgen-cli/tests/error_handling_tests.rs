//! Tests for error handling, suggestions and exit codes.

use std::fs;

use assert_cmd::cargo;
use predicates::prelude::*;
use tempfile::TempDir;

fn project_with(models: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    let package = dir.path().join("src/main/java/com/acme/entities");
    fs::create_dir_all(&package).unwrap();
    for (name, source) in models {
        fs::write(package.join(format!("{name}.java")), source).unwrap();
    }
    dir
}

fn modelgen(dir: &TempDir) -> assert_cmd::Command {
    let mut cmd = cargo::cargo_bin_cmd!("modelgen");
    cmd.current_dir(dir.path())
        .env("HOME", dir.path())
        .env("XDG_CONFIG_HOME", dir.path().join(".config"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

const USER: &str = "package com.acme.entities;\n\npublic class User {\n    private String name;\n}\n";

#[test]
fn test_missing_models_are_listed_together() {
    let dir = project_with(&[("User", USER)]);
    modelgen(&dir)
        .args(["generate", "-n", "com.acme.entities", "-m", "Ghost,User,Phantom"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("Ghost"))
        .stderr(predicate::str::contains("Phantom"))
        .stderr(predicate::str::contains("modelgen list models"));

    assert!(!dir.path().join("src/main/java/com/acme/dto").exists());
}

#[test]
fn test_many_to_many_aborts_with_user_error() {
    let post = "package com.acme.entities;\n\npublic class Post {\n    @ManyToMany\n    private Set<Tag> tags;\n}\n";
    let dir = project_with(&[("User", USER), ("Post", post)]);
    modelgen(&dir)
        .args(["generate", "-n", "com.acme.entities", "-m", "User,Post"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("@ManyToOne"));

    assert!(!dir.path().join("src/main/java/com/acme/dto").exists());
}

#[test]
fn test_missing_namespace_suggests_flag_and_config() {
    let dir = project_with(&[("User", USER)]);
    modelgen(&dir)
        .args(["generate", "-m", "User"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Missing required value: namespace"))
        .stderr(predicate::str::contains("--namespace"))
        .stderr(predicate::str::contains("generator.namespace"));
}

#[test]
fn test_invalid_artifact_kind_is_rejected_by_parser() {
    let dir = project_with(&[("User", USER)]);
    modelgen(&dir)
        .args(["generate", "-n", "com.acme.entities", "-m", "User", "-a", "entity"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("artifact kind"));
}

#[test]
fn test_qualified_model_name_is_rejected() {
    let dir = project_with(&[("User", USER)]);
    modelgen(&dir)
        .args(["generate", "-n", "com.acme", "-m", "entities.User"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("simple name"));
}

#[test]
fn test_broken_config_file_is_a_configuration_error() {
    let dir = project_with(&[("User", USER)]);
    let config = dir.path().join("broken.toml");
    fs::write(&config, "[generator\nnamespace = ").unwrap();

    modelgen(&dir)
        .args(["--config", config.to_str().unwrap(), "list", "artifacts"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_unknown_config_key() {
    let dir = project_with(&[]);
    modelgen(&dir)
        .args(["config", "get", "generator.flavour"])
        .assert()
        .code(4)
        .stderr(predicate::str::contains("Unknown config key"));
}

#[test]
fn test_verbose_omits_verbose_hint() {
    let dir = project_with(&[]);
    modelgen(&dir)
        .args(["-v", "config", "get", "nope"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--verbose").not());
}
