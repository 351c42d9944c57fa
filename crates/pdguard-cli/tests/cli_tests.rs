//! Integration tests for pdguardctl
//!
//! Each test writes an invocation document to a temporary directory and
//! checks output and exit code.

use assert_cmd::Command;
use pdguard_test_helpers::must;
use predicates::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

fn pdguardctl() -> Command {
    must(Command::cargo_bin("pdguardctl"))
}

fn write_doc(dir: &TempDir, name: &str, doc: &Value) -> PathBuf {
    let path = dir.path().join(name);
    must(fs::write(&path, must(serde_json::to_string_pretty(doc))));
    path
}

fn text(value: &str) -> Value {
    json!({ "text": value })
}

#[test]
fn test_cli_help() {
    pdguardctl()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("personal-data"));
}

#[test]
fn test_normalize_prints_digits() {
    pdguardctl()
        .args(["normalize", "(11) 98888-7777"])
        .assert()
        .success()
        .stdout(predicate::str::diff("11988887777\n"));
}

#[test]
fn test_normalize_json() {
    let output = must(
        pdguardctl()
            .args(["--json", "normalize", "isento"])
            .output(),
    );
    assert!(output.status.success());
    let value: Value = must(serde_json::from_slice(&output.stdout));
    insta::assert_json_snapshot!(value, @r#"
    {
      "input": "isento",
      "normalized": null,
      "success": true
    }
    "#);
}

#[test]
fn test_replay_create_normalizes() {
    let dir = must(TempDir::new());
    let doc = write_doc(
        &dir,
        "create.json",
        &json!({
            "operation": "Create",
            "target": {
                "logical_name": "tr_dadospessoais",
                "attributes": {
                    "tr_telefonecliente": text("(11) 98888-7777"),
                    "tr_cpfdadospessoais": text("123.456.789-00")
                }
            }
        }),
    );

    let output = must(pdguardctl().arg("--json").arg("replay").arg(&doc).output());
    assert!(output.status.success());
    let value: Value = must(serde_json::from_slice(&output.stdout));
    assert_eq!(value["success"], json!(true));
    assert_eq!(
        value["record"]["attributes"]["tr_cpfdadospessoais"],
        text("12345678900")
    );
    assert_eq!(
        value["record"]["attributes"]["tr_telefonecliente"],
        text("11988887777")
    );
}

#[test]
fn test_replay_duplicate_exits_with_business_rule_code() {
    let dir = must(TempDir::new());
    let doc = write_doc(
        &dir,
        "duplicate.json",
        &json!({
            "seed": [{
                "logical_name": "tr_dadospessoais",
                "attributes": { "tr_rgdadospessoais": text("123456789") }
            }],
            "operation": "Create",
            "target": {
                "logical_name": "tr_dadospessoais",
                "attributes": { "tr_rgdadospessoais": text("12.345.678-9") }
            }
        }),
    );

    pdguardctl()
        .arg("replay")
        .arg(&doc)
        .assert()
        .code(3)
        .stderr(predicate::str::contains(
            "a record with this stateID already exists",
        ));
}

#[test]
fn test_replay_update_backfills_stored_value() {
    let dir = must(TempDir::new());
    let id = "4f1c2b7e-8d3a-4e5f-9a6b-0c1d2e3f4a5b";
    let doc = write_doc(
        &dir,
        "update.json",
        &json!({
            "seed": [{
                "logical_name": "tr_dadospessoais",
                "id": id,
                "attributes": { "tr_rgdadospessoais": text("AB.123.456") }
            }],
            "operation": "Update",
            "user_id": "00000000-0000-0000-0000-000000000001",
            "target": {
                "logical_name": "tr_dadospessoais",
                "id": id,
                "attributes": { "tr_telefonecliente": text("11 3333-4444") }
            }
        }),
    );

    let output = must(pdguardctl().arg("--json").arg("replay").arg(&doc).output());
    assert!(output.status.success());
    let value: Value = must(serde_json::from_slice(&output.stdout));
    assert_eq!(value["record"]["id"], json!(id));
    assert_eq!(
        value["record"]["attributes"]["tr_rgdadospessoais"],
        text("123456")
    );
}

#[test]
fn test_replay_update_without_id_is_invalid_input() {
    let dir = must(TempDir::new());
    let doc = write_doc(
        &dir,
        "bad.json",
        &json!({
            "operation": "Update",
            "target": { "logical_name": "tr_dadospessoais" }
        }),
    );

    pdguardctl()
        .arg("--json")
        .arg("replay")
        .arg(&doc)
        .assert()
        .code(4)
        .stdout(predicate::str::contains("invalid_invocation"));
}

#[test]
fn test_replay_malformed_document_is_invalid_input() {
    let dir = must(TempDir::new());
    let path = dir.path().join("broken.json");
    must(fs::write(&path, "{ not json"));

    pdguardctl().arg("replay").arg(&path).assert().code(4);
}

#[test]
fn test_replay_missing_file_is_generic_failure() {
    let dir = must(TempDir::new());
    pdguardctl()
        .arg("replay")
        .arg(dir.path().join("absent.json"))
        .assert()
        .code(1);
}

#[test]
fn test_replay_reads_yaml_config() {
    let dir = must(TempDir::new());
    let config = dir.path().join("hook.yaml");
    must(fs::write(&config, "redact_values: false\n"));
    let doc = write_doc(
        &dir,
        "create.json",
        &json!({
            "operation": "Create",
            "target": {
                "logical_name": "tr_dadospessoais",
                "attributes": { "tr_cnhdadospessoais": text("0123 4567 890") }
            }
        }),
    );

    pdguardctl()
        .arg("-v")
        .arg("replay")
        .arg(&doc)
        .arg("--config")
        .arg(&config)
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::contains("01234567890"))
        .stderr(predicate::str::contains("0123 4567 890"));
}
