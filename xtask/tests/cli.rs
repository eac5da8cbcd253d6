use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::tempdir;

const GENERATED: &str = "../crates/countries/src/generated/countries_data.rs";

fn xtask() -> Command {
    Command::cargo_bin("xtask").expect("xtask binary should build")
}

fn committed_catalog() -> String {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join(GENERATED);
    fs::read_to_string(path).expect("generated catalog should be committed")
}

#[test]
fn help_lists_codegen() {
    xtask().arg("--help").assert().success().stdout(predicate::str::contains("codegen"));
}

#[test]
fn committed_catalog_is_up_to_date() {
    xtask()
        .args(["codegen", "countries", "--check"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Verified country catalog: 249 countries"));
}

#[test]
fn generation_reproduces_the_committed_catalog() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("generated").join("countries_data.rs");

    xtask()
        .args(["codegen", "countries", "--output"])
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("243 capitals"));

    assert_eq!(fs::read_to_string(&output).unwrap(), committed_catalog());
}

#[test]
fn check_fails_for_stale_output() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("countries_data.rs");
    fs::write(&output, "// stale\n").unwrap();

    xtask()
        .args(["codegen", "countries", "--check", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of date"));

    assert_eq!(fs::read_to_string(&output).unwrap(), "// stale\n");
}

#[test]
fn missing_source_fails_without_writing() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("countries_data.rs");

    xtask()
        .args(["codegen", "countries", "--primary", "/nonexistent/iso3166.json", "--output"])
        .arg(&output)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Load error"));

    assert!(!output.exists());
}

#[test]
fn custom_sources_and_repo_url_are_used() {
    let dir = tempdir().unwrap();
    let primary = dir.path().join("primary.json");
    let alternate = dir.path().join("alternate.json");
    let output = dir.path().join("countries_data.rs");

    fs::write(
        &primary,
        r#"[{"name": "Test Country", "alpha-2": "TC", "alpha-3": "TST", "country-code": "999", "iso_3166-2": "ISO 3166-2:TC"}]"#,
    )
    .unwrap();
    fs::write(
        &alternate,
        r#"[{"countryCode": "TC", "capital": "Test Capital", "continentName": "Test Continent", "currencyCode": "TST"}]"#,
    )
    .unwrap();

    xtask()
        .args(["codegen", "countries", "--repo-url", "https://example.com/countries"])
        .arg("--primary")
        .arg(&primary)
        .arg("--alternate")
        .arg(&alternate)
        .arg("--output")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("1 countries (1 enriched), 1 capitals"));

    let source = fs::read_to_string(&output).unwrap();
    assert!(source.contains("//! Source: https://example.com/countries"));
    assert!(source.contains("capital: \"Test Capital\","));
    assert!(source.contains("    (\"test capital\", 0),"));
}

#[test]
fn check_fails_with_io_error_when_output_is_unreadable() {
    let dir = tempdir().unwrap();

    xtask()
        .args(["codegen", "countries", "--check", "--output"])
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("IO error").and(predicate::str::contains("out of date").not()));
}

#[test]
fn environment_sets_repo_url() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("countries_data.rs");

    xtask()
        .env("COUNTRIES__REPO_URL", "https://env.example/countries")
        .args(["codegen", "countries", "--output"])
        .arg(&output)
        .assert()
        .success();

    let source = fs::read_to_string(&output).unwrap();
    assert!(source.contains("//! Source: https://env.example/countries\n"));
}

#[test]
fn cli_flags_override_environment() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("countries_data.rs");
    let env_output = dir.path().join("from_env.rs");

    xtask()
        .env("COUNTRIES__REPO_URL", "https://env.example/countries")
        .env("COUNTRIES__OUTPUT_PATH", &env_output)
        .args(["codegen", "countries", "--repo-url", "https://cli.example/countries", "--output"])
        .arg(&output)
        .assert()
        .success();

    let source = fs::read_to_string(&output).unwrap();
    assert!(source.contains("//! Source: https://cli.example/countries\n"));
    assert!(!env_output.exists());
}
