//! CLI tests for the xmlsplit binary.

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

fn xmlsplit() -> Command {
    Command::cargo_bin("xmlsplit").expect("binary builds")
}

#[test]
fn test_split_writes_documents_and_reports_count() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("aggregate.xml");
    fs::write(&input, "<root><r>1</r><r>2</r></root>").expect("write input");

    let out = dir.path().join("out");
    fs::create_dir(&out).expect("create output dir");

    xmlsplit()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(&out)
        .arg("-e")
        .arg("r")
        .assert()
        .success()
        .stdout(predicate::str::contains("Documents written: 2"));

    assert_eq!(fs::read_dir(&out).expect("readable dir").count(), 2);
}

#[test]
fn test_missing_output_directory_fails_before_parsing() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("aggregate.xml");
    fs::write(&input, "<root><r/></root>").expect("write input");

    xmlsplit()
        .arg("-i")
        .arg(&input)
        .arg("-o")
        .arg(dir.path().join("absent"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Output directory does not exist"));
}

#[test]
fn test_unpaired_namespace_element_list_fails() {
    let dir = tempfile::tempdir().expect("tempdir");
    let input = dir.path().join("aggregate.xml");
    fs::write(&input, "<root/>").expect("write input");

    xmlsplit()
        .arg("-i")
        .arg(&input)
        .arg("-l")
        .arg("urn:a,foo,bar")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unpaired entry"));
}

#[test]
fn test_missing_input_option_is_usage_error() {
    xmlsplit()
        .arg("-e")
        .arg("r")
        .assert()
        .failure()
        .stderr(predicate::str::contains("--input-file-path"));
}

#[test]
fn test_help_short_circuits() {
    xmlsplit()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--aggregate-record-element"))
        .stdout(predicate::str::contains("--aggregate-depth"));
}

#[test]
fn test_nonexistent_input_file_fails() {
    let dir = tempfile::tempdir().expect("tempdir");

    xmlsplit()
        .arg("-i")
        .arg(dir.path().join("absent.xml"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
