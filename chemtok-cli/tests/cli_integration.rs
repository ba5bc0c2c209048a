//! Integration tests for the chemtok CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to a test fixture
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

fn chemtok() -> Command {
    Command::cargo_bin("chemtok").unwrap()
}

#[test]
fn test_tokenize_text() {
    let mut cmd = chemtok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("synthesis-sample.txt"))
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "The salt was dissolved in NaOH ( aq ) first .\n",
        ))
        .stdout(predicate::str::contains("Then Fe(III) chloride"))
        .stdout(predicate::str::contains(
            "Sulfuric acid was removed in vacuo .\n",
        ));
}

#[test]
fn test_tokenize_json() {
    let mut cmd = chemtok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("synthesis-sample.txt"))
        .arg("-f")
        .arg("json")
        .arg("-q");

    let output = cmd.assert().success().get_output().stdout.clone();
    let documents: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let documents = documents.as_array().unwrap();
    assert_eq!(documents.len(), 1);
    assert!(documents[0]["file"]
        .as_str()
        .unwrap()
        .ends_with("synthesis-sample.txt"));

    let sentences = documents[0]["sentences"].as_array().unwrap();
    assert_eq!(sentences.len(), 3);
    assert_eq!(sentences[2][0], "Sulfuric");
}

#[test]
fn test_tokenize_markdown() {
    let mut cmd = chemtok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("synthesis-sample.txt"))
        .arg("-f")
        .arg("markdown")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("1. `The`"))
        .stdout(predicate::str::contains("3. `Sulfuric`"))
        .stdout(predicate::str::contains("---"))
        .stdout(predicate::str::contains("*Total sentences: 3"));
}

#[test]
fn test_output_to_file() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("tokens.txt");

    let mut cmd = chemtok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("synthesis-sample.txt"))
        .arg("-o")
        .arg(&output_path)
        .arg("-q");

    cmd.assert().success().stdout(predicate::str::is_empty());

    let content = fs::read_to_string(&output_path).unwrap();
    assert_eq!(content.lines().count(), 3);
}

#[test]
fn test_glob_pattern() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("a.txt"), "First sample.").unwrap();
    fs::write(temp_dir.path().join("b.txt"), "Second sample.").unwrap();
    fs::write(temp_dir.path().join("c.md"), "Not matched.").unwrap();

    let mut cmd = chemtok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(format!("{}/*.txt", temp_dir.path().display()))
        .arg("-q");

    cmd.assert()
        .success()
        .stdout("First sample .\nSecond sample .\n");
}

#[test]
fn test_parallel_matches_sequential() {
    let temp_dir = TempDir::new().unwrap();
    for i in 0..6 {
        fs::write(
            temp_dir.path().join(format!("part{i}.txt")),
            format!("Sample {i} was heated. It melted."),
        )
        .unwrap();
    }
    let pattern = format!("{}/*.txt", temp_dir.path().display());

    let sequential = chemtok()
        .args(["tokenize", "-q", "-i", &pattern])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let parallel = chemtok()
        .args(["tokenize", "-q", "-p", "-t", "3", "-i", &pattern])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    assert_eq!(sequential, parallel);
}

#[test]
fn test_no_normalize() {
    let mut cmd = chemtok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("synthesis-sample.txt"))
        .arg("--no-normalize")
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Sulphuric acid"));
}

#[test]
fn test_tokenize_with_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("chemtok.toml");
    fs::write(&config_path, "[normalization]\nenabled = false\n").unwrap();

    let mut cmd = chemtok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("synthesis-sample.txt"))
        .arg("-c")
        .arg(&config_path)
        .arg("-q");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Sulphuric acid"));
}

#[test]
fn test_invalid_file() {
    let mut cmd = chemtok();
    cmd.arg("tokenize").arg("-i").arg("nonexistent-file.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("No files found"));
}

#[test]
fn test_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("bad.toml");
    fs::write(&config_path, "[extra]\nabbreviations = [\"expt\"]\n").unwrap();

    let mut cmd = chemtok();
    cmd.arg("tokenize")
        .arg("-i")
        .arg(fixture_path("synthesis-sample.txt"))
        .arg("-c")
        .arg(&config_path);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Configuration error"));
}

#[test]
fn test_help_command() {
    let mut cmd = chemtok();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("tokenize"))
        .stdout(predicate::str::contains("normalize"))
        .stdout(predicate::str::contains("generate-config"));
}

#[test]
fn test_list_tags() {
    let mut cmd = chemtok();
    cmd.arg("list").arg("tags");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("<strong>"))
        .stdout(predicate::str::contains("<sub>"));
}

#[test]
fn test_list_formats() {
    let mut cmd = chemtok();
    cmd.arg("list").arg("formats");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("text"))
        .stdout(predicate::str::contains("json"))
        .stdout(predicate::str::contains("markdown"));
}

#[test]
fn test_list_abbreviations() {
    let mut cmd = chemtok();
    cmd.arg("list").arg("abbreviations");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("  ca.\n"))
        .stdout(predicate::str::contains("  fig.\n"));
}

#[test]
fn test_normalize_command() {
    let temp_dir = TempDir::new().unwrap();
    let input = temp_dir.path().join("in.txt");
    fs::write(&input, "Sulphuric acid\nat 120°C").unwrap();

    let mut cmd = chemtok();
    cmd.arg("normalize").arg("-i").arg(&input);
    cmd.assert()
        .success()
        .stdout("Sulfuric acid at 120 °C\n");

    let mut cmd = chemtok();
    cmd.arg("normalize").arg("-i").arg(&input).arg("--keep-lines");
    cmd.assert()
        .success()
        .stdout("Sulfuric acid\nat 120 °C\n");
}

#[test]
fn test_generate_and_validate_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("chemtok.toml");

    let mut cmd = chemtok();
    cmd.arg("generate-config").arg("-o").arg(&config_path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("generated successfully"));
    assert!(config_path.exists());

    let mut cmd = chemtok();
    cmd.arg("validate").arg("-c").arg(&config_path);
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Configuration is valid"))
        .stdout(predicate::str::contains("Last names: bundled"));
}

#[test]
fn test_validate_invalid_config() {
    let temp_dir = TempDir::new().unwrap();
    let config_path = temp_dir.path().join("chemtok.toml");
    fs::write(&config_path, "[normalization\n").unwrap();

    let mut cmd = chemtok();
    cmd.arg("validate").arg("--config").arg(&config_path);
    cmd.assert()
        .failure()
        .stdout(predicate::str::contains("Configuration is invalid"))
        .stderr(predicate::str::contains("Validation failed"));
}
