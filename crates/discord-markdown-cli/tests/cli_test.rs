//! Integration tests for the discord-markdown CLI.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn cli() -> Command {
    Command::new(env!("CARGO_BIN_EXE_discord-markdown"))
}

#[test]
fn test_basic_stdin() {
    cli()
        .write_stdin("<p>Hello <code>world</code></p>")
        .assert()
        .success()
        .stdout(" Hello  `world` \n");
}

#[test]
fn test_dash_reads_stdin() {
    cli()
        .arg("-")
        .write_stdin("<pre>a\n  b</pre>")
        .assert()
        .success()
        .stdout("\n```a\n  b```\n");
}

#[test]
fn test_file_input() {
    let temp_dir = TempDir::new().unwrap();
    let input_path = temp_dir.path().join("input.html");
    fs::write(&input_path, "<p>Test content</p>").unwrap();

    cli()
        .arg(input_path.to_str().unwrap())
        .assert()
        .success()
        .stdout(" Test content \n");
}

#[test]
fn test_file_output() {
    let temp_dir = TempDir::new().unwrap();
    let output_path = temp_dir.path().join("output.md");

    cli()
        .arg("-o")
        .arg(output_path.to_str().unwrap())
        .write_stdin("<code>x=1</code>")
        .assert()
        .success()
        .stdout("");

    let output = fs::read_to_string(&output_path).unwrap();
    assert_eq!(output, " `x=1` \n");
}

#[test]
fn test_missing_file_fails() {
    cli()
        .arg("/nonexistent/input.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn test_strip_mode() {
    cli()
        .arg("--strip")
        .write_stdin("**bold** and *italic* and `code`")
        .assert()
        .success()
        .stdout("bold and italic and code\n");
}

#[test]
fn test_hidden_container_is_dropped() {
    cli()
        .write_stdin(
            r#"<div class="text-token-text-secondary bg-token-main-surface-secondary">secret</div><p>shown</p>"#,
        )
        .assert()
        .success()
        .stdout(" shown \n");
}

#[test]
fn test_no_suppress_keeps_hidden_container() {
    cli()
        .arg("--no-suppress")
        .write_stdin(
            r#"<div class="text-token-text-secondary bg-token-main-surface-secondary">secret</div>"#,
        )
        .assert()
        .success()
        .stdout(" secret \n");
}

#[test]
fn test_invalid_utf8_fails() {
    cli()
        .write_stdin(vec![b'<', b'p', b'>', 0xff, 0xfe])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("Error formatting response."));
}

#[test]
fn test_invalid_utf8_with_fallback() {
    cli()
        .arg("--fallback")
        .write_stdin(vec![0xff, 0xfe])
        .assert()
        .success()
        .stdout("Error formatting response.\n");
}
