//! End-to-end CLI tests: exit codes and report output

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

const SOURCE: &str = r#"package client

type Client interface {
    Foo(a int) error
    Bar() error
}
"#;

fn write_inputs(dir: &TempDir, readme: &str, go: &str) -> (PathBuf, PathBuf) {
    let docs = dir.path().join("README.md");
    let source = dir.path().join("iface.go");
    fs::write(&docs, readme).unwrap();
    fs::write(&source, go).unwrap();
    (docs, source)
}

fn ifacediff() -> Command {
    Command::cargo_bin("ifacediff").unwrap()
}

#[test]
fn identical_interface_exits_zero_with_no_output() {
    let dir = TempDir::new().unwrap();
    let readme = r#"# Client

```go
type Client interface {
    Foo(a int) error
    Bar() error
}
```
"#;
    let (docs, source) = write_inputs(&dir, readme, SOURCE);

    ifacediff()
        .args([&docs, &source])
        .arg("Client")
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}

#[test]
fn mismatched_parameter_type_exits_one_with_both_renderings() {
    let dir = TempDir::new().unwrap();
    let readme = r#"```go
type Client interface {
    Foo(a string) error
    Bar() error
}
```
"#;
    let (docs, source) = write_inputs(&dir, readme, SOURCE);

    ifacediff()
        .args([&docs, &source])
        .arg("Client")
        .assert()
        .code(1)
        .stdout("Actual: Foo(a int) error\nReadme: Foo(a string) error\n\n");
}

#[test]
fn undocumented_method_exits_one_with_empty_readme_line() {
    let dir = TempDir::new().unwrap();
    let readme = r#"```go
type Client interface {
    Foo(a int) error
}
```
"#;
    let (docs, source) = write_inputs(&dir, readme, SOURCE);

    ifacediff()
        .args([&docs, &source])
        .arg("Client")
        .assert()
        .code(1)
        .stdout("Actual: Bar() error\nReadme: \n\n");
}

#[test]
fn extra_documented_method_exits_one_with_empty_actual_line() {
    let dir = TempDir::new().unwrap();
    let readme = r#"```go
type Client interface {
    Foo(a int) error
    Bar() error
    Baz(id string) error
}
```
"#;
    let (docs, source) = write_inputs(&dir, readme, SOURCE);

    ifacediff()
        .args([&docs, &source])
        .arg("Client")
        .assert()
        .code(1)
        .stdout("Actual: \nReadme: Baz(id string) error\n\n");
}

#[test]
fn wrong_language_block_reports_every_method_missing() {
    let dir = TempDir::new().unwrap();
    let readme = r#"```java
type Client interface {
    Foo(a int) error
    Bar() error
}
```
"#;
    let (docs, source) = write_inputs(&dir, readme, SOURCE);

    // Records are sorted by method name within the group
    ifacediff()
        .args([&docs, &source])
        .arg("Client")
        .assert()
        .code(1)
        .stdout(
            "Actual: Bar() error\nReadme: \n\n\
             Actual: Foo(a int) error\nReadme: \n\n",
        );
}

#[test]
fn missing_interface_in_source_is_a_fatal_error() {
    let dir = TempDir::new().unwrap();
    let (docs, source) = write_inputs(&dir, "# nothing\n", SOURCE);

    ifacediff()
        .args([&docs, &source])
        .arg("Ghost")
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("interface `Ghost` not found"));
}

#[test]
fn invalid_go_source_is_a_fatal_parse_error() {
    let dir = TempDir::new().unwrap();
    let (docs, source) = write_inputs(&dir, "# nothing\n", "package client\n\ntype Client interface {\n");

    ifacediff()
        .args([&docs, &source])
        .arg("Client")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("parse error"));
}

#[test]
fn unreadable_source_file_is_a_fatal_error() {
    let dir = TempDir::new().unwrap();
    let docs = dir.path().join("README.md");
    fs::write(&docs, "# nothing\n").unwrap();
    let source = dir.path().join("missing.go");

    ifacediff()
        .args([&docs, &source])
        .arg("Client")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn wrong_argument_count_fails_before_running() {
    let dir = TempDir::new().unwrap();
    let (docs, source) = write_inputs(&dir, "# nothing\n", SOURCE);

    ifacediff().args([&docs, &source]).assert().failure();
    ifacediff()
        .args([&docs, &source])
        .args(["Client", "extra"])
        .assert()
        .failure();
}

#[test]
fn json_format_emits_tagged_records() {
    let dir = TempDir::new().unwrap();
    let readme = r#"```go
type Client interface {
    Foo(a int) error
}
```
"#;
    let (docs, source) = write_inputs(&dir, readme, SOURCE);

    ifacediff()
        .args([&docs, &source])
        .args(["Client", "--format", "json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("\"kind\": \"missing_from_docs\""))
        .stdout(predicate::str::contains("\"name\": \"Bar\""));
}

#[test]
fn json_format_on_clean_diff_emits_empty_array() {
    let dir = TempDir::new().unwrap();
    let readme = r#"```go
type Client interface {
    Foo(a int) error
    Bar() error
}
```
"#;
    let (docs, source) = write_inputs(&dir, readme, SOURCE);

    ifacediff()
        .args([&docs, &source])
        .args(["Client", "--format", "json"])
        .assert()
        .success()
        .stdout("[]\n");
}

#[test]
fn verbose_diagnostics_stay_off_stdout() {
    let dir = TempDir::new().unwrap();
    let readme = r#"```go
type Client interface {
    Foo(a int) error
    Bar() error
}
```
"#;
    let (docs, source) = write_inputs(&dir, readme, SOURCE);

    ifacediff()
        .args([&docs, &source])
        .args(["Client", "--verbose"])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
