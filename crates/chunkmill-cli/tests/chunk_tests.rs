//! Integration tests for the chunk and languages commands

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn chunkmill_cmd() -> Command {
    Command::cargo_bin("chunkmill").unwrap()
}

fn setup_fixture_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    let root = dir.path();

    fs::create_dir_all(root.join("src")).unwrap();
    fs::create_dir_all(root.join("docs")).unwrap();

    fs::write(
        root.join("src/widget.ts"),
        "class Widget {\n    render(): string {\n        return \"ok\";\n    }\n}",
    )
    .unwrap();
    fs::write(
        root.join("docs/notes.md"),
        "First paragraph of notes.\n\nSecond paragraph of notes.",
    )
    .unwrap();
    fs::write(root.join("image.png"), [0xFFu8, 0xFE, 0x00, 0x89]).unwrap();

    dir
}

#[test]
fn test_chunk_directory_lists_chunks() {
    let dir = setup_fixture_dir();

    chunkmill_cmd()
        .arg("chunk")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("src/widget.ts:1-5 class Widget"))
        .stdout(predicate::str::contains("src/widget.ts:2-4 method render"))
        .stdout(predicate::str::contains("docs/notes.md:1-3 text"))
        .stdout(predicate::str::contains("image.png").not());
}

#[test]
fn test_chunk_single_file() {
    let dir = setup_fixture_dir();

    chunkmill_cmd()
        .arg("chunk")
        .arg(dir.path().join("src/widget.ts"))
        .assert()
        .success()
        .stdout(predicate::str::contains("widget.ts:1-5 class Widget"));
}

#[test]
fn test_chunk_json_format() {
    let dir = setup_fixture_dir();

    chunkmill_cmd()
        .arg("chunk")
        .arg("--format")
        .arg("json")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("\"filePath\": \"src/widget.ts\""))
        .stdout(predicate::str::contains("\"fileContents\""))
        .stdout(predicate::str::contains("\"language\": \"typescript\""));
}

#[test]
fn test_chunk_pattern_filters_files() {
    let dir = setup_fixture_dir();

    chunkmill_cmd()
        .arg("chunk")
        .arg(dir.path())
        .arg("--pattern")
        .arg("**/*.md")
        .assert()
        .success()
        .stdout(predicate::str::contains("docs/notes.md"))
        .stdout(predicate::str::contains("widget.ts").not());
}

#[test]
fn test_chunk_missing_path_exits_with_input_code() {
    chunkmill_cmd()
        .arg("chunk")
        .arg("/definitely/not/a/real/path")
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("no such path"));
}

#[test]
fn test_languages_lists_extensions() {
    chunkmill_cmd()
        .arg("languages")
        .assert()
        .success()
        .stdout(predicate::str::contains(".java -> java"))
        .stdout(predicate::str::contains(".tsx -> typescript"))
        .stdout(predicate::str::contains(".md"));
}

#[test]
fn test_languages_json_format() {
    chunkmill_cmd()
        .arg("languages")
        .arg("--format")
        .arg("json")
        .assert()
        .success()
        .stdout(predicate::str::contains("\"codeExtensions\""))
        .stdout(predicate::str::contains("\"textExtensions\""));
}
