use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Helper to get the path to test fixtures
fn fixture_path(name: &str) -> String {
    format!("tests/fixtures/{}", name)
}

/// Helper to create a Command for the ruleval binary
#[allow(deprecated)]
fn ruleval() -> Command {
    Command::cargo_bin("ruleval").expect("Failed to find ruleval binary")
}

fn parse_json_output(stdout: &[u8]) -> serde_json::Value {
    let output = String::from_utf8_lossy(stdout);
    let start = output
        .find(['{', '['])
        .expect("Should contain a JSON document");
    serde_json::from_str(&output[start..]).expect("Output should be valid JSON")
}

// ============================================================================
// validate command tests
// ============================================================================

#[test]
fn test_validate_valid_record() {
    ruleval()
        .arg("validate")
        .arg(fixture_path("user_rules.yml"))
        .arg(fixture_path("valid_user.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Validation PASSED"))
        .stdout(predicate::str::contains("RUN_ALL_VALIDATIONS"));
}

#[test]
fn test_validate_yaml_data_document() {
    ruleval()
        .arg("validate")
        .arg(fixture_path("user_rules.yml"))
        .arg(fixture_path("valid_user.yml"))
        .assert()
        .success();
}

#[test]
fn test_validate_invalid_record_reports_every_failure() {
    ruleval()
        .arg("validate")
        .arg(fixture_path("user_rules.yml"))
        .arg(fixture_path("invalid_user.json"))
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Validation FAILED"))
        .stdout(predicate::str::contains("Must not be empty"))
        .stdout(predicate::str::contains("Must be present"))
        .stdout(predicate::str::contains("Must be numeric"))
        .stdout(predicate::str::contains("Must be between 13 and 130"))
        .stdout(predicate::str::contains("Must be one of: admin, editor, viewer"))
        .stdout(predicate::str::contains("Must be of type array"));
}

#[test]
fn test_validate_json_output() {
    let output = ruleval()
        .arg("validate")
        .arg("--format")
        .arg("json")
        .arg(fixture_path("user_rules.yml"))
        .arg(fixture_path("invalid_user.json"))
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report = parse_json_output(&output);

    assert_eq!(report["passed"], false);
    assert_eq!(report["strategy"], "RUN_ALL_VALIDATIONS");
    assert_eq!(report["summary"]["error_count"], 6);
    assert_eq!(report["summary"]["invalid_fields"], 5);
    assert_eq!(
        report["errors"]["age"],
        serde_json::json!(["Must be numeric", "Must be between 13 and 130"])
    );
    assert_eq!(report["errors"]["email"], serde_json::json!(["Must be present"]));
}

#[test]
fn test_validate_json_errors_follow_most_recent_failure() {
    let output = ruleval()
        .arg("validate")
        .arg("--format")
        .arg("json")
        .arg(fixture_path("user_rules.yml"))
        .arg(fixture_path("invalid_user.json"))
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report = parse_json_output(&output);
    let properties: Vec<&str> = report["errors"]
        .as_object()
        .expect("errors should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(properties, vec!["tags", "role", "age", "email", "username"]);
}

#[test]
fn test_validate_document_strategy() {
    let output = ruleval()
        .arg("validate")
        .arg("--format")
        .arg("json")
        .arg(fixture_path("user_rules.toml"))
        .arg(fixture_path("invalid_user.json"))
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report = parse_json_output(&output);

    assert_eq!(report["strategy"], "STOP_AT_FIRST_INVALID_PROPERTY");
    assert_eq!(report["summary"]["error_count"], 1);
    assert_eq!(
        report["errors"]["username"],
        serde_json::json!(["Must not be empty"])
    );
}

#[test]
fn test_validate_strategy_flag_overrides_document() {
    let output = ruleval()
        .arg("validate")
        .arg("--strategy")
        .arg("stop-at-first-invalid-validation")
        .arg("--format")
        .arg("json")
        .arg(fixture_path("user_rules.yml"))
        .arg(fixture_path("invalid_user.json"))
        .assert()
        .code(1)
        .get_output()
        .stdout
        .clone();

    let report = parse_json_output(&output);

    assert_eq!(report["strategy"], "STOP_AT_FIRST_INVALID_VALIDATION");
    assert_eq!(report["summary"]["error_count"], 1);
}

#[test]
fn test_validate_invalid_strategy() {
    ruleval()
        .arg("validate")
        .arg("--strategy")
        .arg("fastest")
        .arg(fixture_path("user_rules.yml"))
        .arg(fixture_path("valid_user.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unknown validation strategy"));
}

#[test]
fn test_validate_unrecognized_identifier() {
    ruleval()
        .arg("validate")
        .arg(fixture_path("unknown_rules.yml"))
        .arg(fixture_path("valid_user.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unrecognized validation identifier: positive"));
}

#[test]
fn test_validate_predicate_defect() {
    let temp_dir = TempDir::new().unwrap();
    let rules = temp_dir.path().join("rules.yml");
    fs::write(&rules, "rules:\n  age: min:lots\n").unwrap();

    ruleval()
        .arg("validate")
        .arg(rules.to_str().unwrap())
        .arg(fixture_path("valid_user.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Predicate 'min' failed on property 'age'"));
}

#[test]
fn test_validate_missing_data_file() {
    ruleval()
        .arg("validate")
        .arg(fixture_path("user_rules.yml"))
        .arg("nonexistent.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse data document"));
}

#[test]
fn test_validate_non_object_data() {
    let temp_dir = TempDir::new().unwrap();
    let data = temp_dir.path().join("data.json");
    fs::write(&data, "[1, 2, 3]").unwrap();

    ruleval()
        .arg("validate")
        .arg(fixture_path("user_rules.yml"))
        .arg(data.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Expected an object, found list"));
}

// ============================================================================
// check command tests
// ============================================================================

#[test]
fn test_check_valid_rules() {
    ruleval()
        .arg("check")
        .arg(fixture_path("user_rules.yml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Rule document is valid"))
        .stdout(predicate::str::contains("username: present, not_empty, max"))
        .stdout(predicate::str::contains("RUN_ALL_VALIDATIONS"));
}

#[test]
fn test_check_toml_and_json_rules() {
    ruleval()
        .arg("check")
        .arg(fixture_path("user_rules.toml"))
        .assert()
        .success()
        .stdout(predicate::str::contains("STOP_AT_FIRST_INVALID_PROPERTY"));

    ruleval()
        .arg("check")
        .arg(fixture_path("user_rules.json"))
        .assert()
        .success()
        .stdout(predicate::str::contains("default (RUN_ALL_VALIDATIONS)"));
}

#[test]
fn test_check_unknown_identifier() {
    ruleval()
        .arg("check")
        .arg(fixture_path("unknown_rules.yml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("'positive' on property 'age'"))
        .stderr(predicate::str::contains("1 unrecognized identifier(s)"));
}

#[test]
fn test_check_json_output() {
    let output = ruleval()
        .arg("check")
        .arg("--format")
        .arg("json")
        .arg(fixture_path("unknown_rules.yml"))
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();

    let summary = parse_json_output(&output);

    assert_eq!(summary["valid"], false);
    assert_eq!(summary["unknown"][0]["identifier"], "positive");
    assert_eq!(summary["rules"]["age"], "numeric, positive");
}

#[test]
fn test_check_json_keeps_rule_order() {
    let output = ruleval()
        .arg("check")
        .arg("--format")
        .arg("json")
        .arg(fixture_path("user_rules.toml"))
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary = parse_json_output(&output);
    let properties: Vec<&str> = summary["rules"]
        .as_object()
        .expect("rules should be an object")
        .keys()
        .map(String::as_str)
        .collect();

    assert_eq!(properties, vec!["username", "email", "age"]);
}

#[test]
fn test_check_malformed_rules() {
    let temp_dir = TempDir::new().unwrap();
    let malformed = temp_dir.path().join("rules.yml");
    fs::write(&malformed, "rules: 5\n").unwrap();

    ruleval()
        .arg("check")
        .arg(malformed.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error"));
}

#[test]
fn test_check_unsupported_extension() {
    let temp_dir = TempDir::new().unwrap();
    let file = temp_dir.path().join("rules.ini");
    fs::write(&file, "rules=present").unwrap();

    ruleval()
        .arg("check")
        .arg(file.to_str().unwrap())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported file format"));
}

// ============================================================================
// list command tests
// ============================================================================

#[test]
fn test_list_identifiers() {
    ruleval()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("present (built in)"))
        .stdout(predicate::str::contains("between"))
        .stdout(predicate::str::contains("not_empty"))
        .stdout(predicate::str::contains("type"));
}

#[test]
fn test_list_json_output() {
    let output = ruleval()
        .arg("list")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let identifiers = parse_json_output(&output);
    let identifiers = identifiers.as_array().expect("Should be a JSON array");

    assert_eq!(identifiers.len(), 15);
    assert_eq!(identifiers[0], "present");
}

// ============================================================================
// General CLI tests
// ============================================================================

#[test]
fn test_cli_help() {
    ruleval()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("validate"))
        .stdout(predicate::str::contains("check"))
        .stdout(predicate::str::contains("list"));
}

#[test]
fn test_cli_version() {
    ruleval()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_validate_help() {
    ruleval()
        .arg("validate")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("strategy"))
        .stdout(predicate::str::contains("format"));
}
