//! End-to-end CLI tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn markdown_file(body: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".md").tempfile().unwrap();
    write!(file, "{}", body).unwrap();
    file
}

#[test]
fn extract_text_output() {
    let file = markdown_file("## Setup\nInstall it.\n```bash\nmake\n```\n");

    Command::cargo_bin("snipscan")
        .unwrap()
        .args(["extract", &file.path().display().to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[bash] Setup"))
        .stdout(predicate::str::contains("Summary: Install it."))
        .stdout(predicate::str::contains("| make"));
}

#[test]
fn extract_json_output() {
    let file = markdown_file("## Setup\nInstall it.\n```bash\nmake\n```\n");

    let output = Command::cargo_bin("snipscan")
        .unwrap()
        .args(["--format", "json", "extract", &file.path().display().to_string()])
        .output()
        .unwrap();
    assert!(output.status.success());

    let snippets: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let snippets = snippets.as_array().unwrap();
    assert_eq!(snippets.len(), 1);
    assert_eq!(snippets[0]["language"], "bash");
    assert_eq!(snippets[0]["code"], "make");
    // Ids derive from the document id and the opening fence line index
    assert!(snippets[0]["id"].as_str().unwrap().ends_with("-2"));
}

#[test]
fn extract_language_filter() {
    let file = markdown_file("```rust\nx\n```\n```bash\ny\n```\n");

    Command::cargo_bin("snipscan")
        .unwrap()
        .args([
            "extract",
            &file.path().display().to_string(),
            "--language",
            "bash",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("[bash]"))
        .stdout(predicate::str::contains("[rust]").not());
}

#[test]
fn extract_missing_path_fails() {
    Command::cargo_bin("snipscan")
        .unwrap()
        .args(["extract", "/no/such/draft.md"])
        .assert()
        .failure();
}

#[test]
fn batch_skips_non_text_body() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
        file,
        r#"[
            {{"id": "a", "title": "Post", "summary": "s", "content": "```js\nfoo()\n```"}},
            {{"id": "b", "content": 42}}
        ]"#
    )
    .unwrap();

    Command::cargo_bin("snipscan")
        .unwrap()
        .args(["batch", &file.path().display().to_string()])
        .assert()
        .success()
        .stdout(predicate::str::contains("[js] Post"));
}

#[test]
fn languages_lists_distinct_sorted() {
    let file = markdown_file("```rust\nx\n```\n```bash\ny\n```\n```rust\nz\n```\n");

    Command::cargo_bin("snipscan")
        .unwrap()
        .args(["languages", &file.path().display().to_string()])
        .assert()
        .success()
        .stdout(predicate::str::diff("bash\nrust\n"));
}
