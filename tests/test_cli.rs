//! End-to-end tests for the `llm_textfix` binary.

use std::fs;
use std::io::Write;
use std::process::{Command, Output, Stdio};

fn run_with_stdin(args: &[&str], stdin: &[u8]) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_llm_textfix"))
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn llm_textfix");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(stdin)
        .unwrap();
    child.wait_with_output().unwrap()
}

#[test]
fn test_count_from_stdin() {
    let out = run_with_stdin(&["count"], "\u{201C}Hi\u{201D} \u{2014}".as_bytes());
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "3\n");
}

#[test]
fn test_replace_file_to_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("in.txt");
    let output = dir.path().join("out.txt");
    fs::write(&input, "It\u{2019}s 9\u{2013}5\u{2026}").unwrap();

    let out = run_with_stdin(
        &[
            "replace",
            "--input",
            input.to_str().unwrap(),
            "--output",
            output.to_str().unwrap(),
        ],
        b"",
    );
    assert!(out.status.success());
    assert_eq!(fs::read_to_string(&output).unwrap(), "It's 9-5...");
}

#[test]
fn test_annotate_with_prefix() {
    let out = run_with_stdin(&["annotate", "--class-prefix", "x-"], "<\u{00A0}>".as_bytes());
    assert!(out.status.success());
    assert_eq!(
        String::from_utf8(out.stdout).unwrap(),
        "&lt;<span class='x-space' title='Non-breaking space \u{2192}  '>\u{00A0}</span>&gt;"
    );
}

#[test]
fn test_report_json_on_sample() {
    let out = run_with_stdin(&["report", "--sample", "--format", "json"], b"");
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(json["problematic"], 26);
    assert_eq!(json["by_category"]["punctuation"], 1);
}

#[test]
fn test_table_json_lists_all_entries() {
    let out = run_with_stdin(&["table", "-f", "json"], b"");
    assert!(out.status.success());
    let json: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 27);
    assert_eq!(entries[0]["codepoint"], "\u{00A0}");
    assert_eq!(entries[0]["category"], "space");
}

#[test]
fn test_invalid_utf8_is_decoded_lossily() {
    let out = run_with_stdin(&["replace"], b"ok \xff \xe2\x80\x94");
    assert!(out.status.success());
    assert_eq!(String::from_utf8(out.stdout).unwrap(), "ok \u{FFFD} -");
}

#[test]
fn test_bad_arguments_fail() {
    let out = run_with_stdin(&["frobnicate"], b"");
    assert_eq!(out.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&out.stderr).contains("unknown command"));

    let out = run_with_stdin(&["count", "--input", "/definitely/not/here.txt"], b"");
    assert_eq!(out.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&out.stderr).contains("IO error"));
}
