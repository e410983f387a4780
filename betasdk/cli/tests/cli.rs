use std::io::Write;

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use tempfile::NamedTempFile;

fn payload_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

const TEXT_WEB_PART: &str =
    r##"{"@odata.type":"#microsoft.graph.textWebPart","id":"w1","innerHtml":"<p>Hi</p>"}"##;

// ============================================================================
// Help and Version Tests
// ============================================================================

#[test]
fn test_help_flag() {
    cargo_bin_cmd!("betasdk")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Microsoft Graph beta"))
        .stdout(predicate::str::contains("inspect"))
        .stdout(predicate::str::contains("normalize"));
}

#[test]
fn test_version_flag() {
    cargo_bin_cmd!("betasdk")
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("betasdk"));
}

// ============================================================================
// Registry and Enum Listing Tests
// ============================================================================

#[test]
fn test_types_lists_discriminators() {
    cargo_bin_cmd!("betasdk")
        .arg("types")
        .assert()
        .success()
        .stdout(predicate::str::contains("#microsoft.graph.sitePage"))
        .stdout(predicate::str::contains("#microsoft.graph.search.bookmark"));
}

#[test]
fn test_types_json_is_an_array() {
    let output = cargo_bin_cmd!("betasdk")
        .args(["types", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let names: Vec<String> = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(names.len(), 20);
}

#[test]
fn test_enums_single_table() {
    cargo_bin_cmd!("betasdk")
        .args(["enums", "titleAreaLayoutType"])
        .assert()
        .success()
        .stdout(predicate::str::contains("colorBlock"))
        .stdout(predicate::str::contains("pageLayoutType").not());
}

#[test]
fn test_enums_unknown_name_fails() {
    cargo_bin_cmd!("betasdk")
        .args(["enums", "colourType"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown enum 'colourType'"));
}

// ============================================================================
// Inspect Tests
// ============================================================================

#[test]
fn test_inspect_reports_concrete_type() {
    let file = payload_file(TEXT_WEB_PART);
    cargo_bin_cmd!("betasdk")
        .arg("inspect")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("TextWebPart"))
        .stdout(predicate::str::contains("w1"));
}

#[test]
fn test_inspect_reads_stdin() {
    cargo_bin_cmd!("betasdk")
        .args(["inspect", "-", "--json"])
        .write_stdin(r##"{"@odata.type":"#microsoft.graph.driveItem","id":"d1","size":5}"##)
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""typeName": "Entity""#))
        .stdout(predicate::str::contains(r#""additionalProperties": ["#));
}

#[test]
fn test_inspect_bad_enum_exits_non_zero() {
    let file = payload_file(
        r##"{"@odata.type":"#microsoft.graph.sitePage","titleArea":{"layout":"diagonal"}}"##,
    );
    cargo_bin_cmd!("betasdk")
        .arg("inspect")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains(
            "'diagonal' is not a valid titleAreaLayoutType",
        ));
}

#[test]
fn test_inspect_missing_file_fails() {
    cargo_bin_cmd!("betasdk")
        .args(["inspect", "/definitely/not/here.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

// ============================================================================
// Normalize Tests
// ============================================================================

#[test]
fn test_normalize_reemits_equivalent_json() {
    let file = payload_file(TEXT_WEB_PART);
    let output = cargo_bin_cmd!("betasdk")
        .arg("normalize")
        .arg(file.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let written: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let input: serde_json::Value = serde_json::from_str(TEXT_WEB_PART).unwrap();
    assert_eq!(written, input);
}

#[test]
fn test_normalize_can_drop_additional_data() {
    let file = payload_file(r##"{"id":"e1","unmodelled":true}"##);
    cargo_bin_cmd!("betasdk")
        .args(["normalize", "--ignore-additional-data"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::diff("{\"id\":\"e1\"}\n"));
}

#[test]
fn test_normalize_pretty() {
    let file = payload_file(r##"{"id":"e1"}"##);
    cargo_bin_cmd!("betasdk")
        .args(["normalize", "--pretty"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("{\n  \"id\": \"e1\"\n}"));
}
