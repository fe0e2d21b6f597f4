// Dweve Inclusion - Nested Inclusion Directives
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Comprehensive CLI integration tests

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::NamedTempFile;

// Test helper to create an incl command
fn incl_cmd() -> Command {
    let mut cmd = Command::cargo_bin("incl").expect("Failed to find incl binary");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// Test helper to create a temporary file with content
fn create_temp_file(content: &str, suffix: &str) -> NamedTempFile {
    let file = tempfile::Builder::new()
        .suffix(suffix)
        .tempfile()
        .expect("Failed to create temp file");
    fs::write(file.path(), content).expect("Failed to write temp file");
    file
}

fn nested(depth: usize) -> String {
    format!("{}leaf{}", "level(".repeat(depth), ")".repeat(depth))
}

// ===== Help and Version Tests =====

#[test]
fn test_help_output() {
    incl_cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("incl - inclusion directive toolkit"))
        .stdout(predicate::str::contains("Usage:"));
}

#[test]
fn test_version_output() {
    incl_cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("incl"));
}

#[test]
fn test_no_subcommand_fails() {
    incl_cmd().assert().failure();
}

// ===== Validate Command Tests =====

#[test]
fn test_validate_argument() {
    incl_cmd()
        .args(["validate", "tags,people(account,projects(posts,tags))"])
        .assert()
        .success()
        .stdout(predicate::str::contains("✓"))
        .stdout(predicate::str::contains("<argument>"))
        .stdout(predicate::str::contains("Inclusions: 6"))
        .stdout(predicate::str::contains("Depth: 2"));
}

#[test]
fn test_validate_missing_token() {
    incl_cmd()
        .args(["validate", "tags,(account)"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("✗"))
        .stderr(predicate::str::contains(
            "Error: Parse error: Missing token before parenthesis at position 5: tags,(",
        ));
}

#[test]
fn test_validate_unmatched_close() {
    incl_cmd()
        .args(["validate", "tags,people(account))"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Too many closing parenthesis at position 20"));
}

#[test]
fn test_validate_unterminated() {
    incl_cmd()
        .args(["validate", "tags,people(account"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing closing parenthesis: tags,people(account"));
}

#[test]
fn test_validate_from_file() {
    let file = create_temp_file("tags,people(account)\n", ".txt");

    incl_cmd()
        .args(["validate", "--file"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Inclusions: 3"));
}

#[test]
fn test_validate_from_stdin() {
    incl_cmd()
        .arg("validate")
        .write_stdin("tags,people\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("<stdin>"))
        .stdout(predicate::str::contains("Inclusions: 2"));
}

#[test]
fn test_validate_empty_directive() {
    incl_cmd()
        .args(["validate", ""])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inclusions: 0"));
}

#[test]
fn test_validate_max_depth() {
    incl_cmd()
        .args(["validate", "--max-depth", "1", "a(b(c))"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nesting depth 2 at position 3 exceeds maximum 1"));
}

#[test]
fn test_validate_max_inclusions() {
    incl_cmd()
        .args(["validate", "--max-inclusions", "2", "a,b,c"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("inclusion count 3"));
}

#[test]
fn test_validate_default_limits_and_unlimited() {
    let directive = nested(40);

    incl_cmd()
        .args(["validate", &directive])
        .assert()
        .failure()
        .stderr(predicate::str::contains("exceeds maximum 32"));

    incl_cmd()
        .args(["validate", "--unlimited", &directive])
        .assert()
        .success()
        .stdout(predicate::str::contains("Depth: 40"));
}

#[test]
fn test_validate_directive_and_file_conflict() {
    let file = create_temp_file("tags", ".txt");

    incl_cmd()
        .args(["validate", "tags", "--file"])
        .arg(file.path())
        .assert()
        .failure();
}

#[test]
fn test_validate_missing_file() {
    incl_cmd()
        .args(["validate", "--file", "/nonexistent/directive.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error for '/nonexistent/directive.txt'"));
}

#[test]
fn test_file_size_limit() {
    let file = create_temp_file(&"tags,".repeat(100), ".txt");

    incl_cmd()
        .env("INCL_MAX_FILE_SIZE", "64")
        .args(["validate", "--file"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("too large"));
}

// ===== Format Command Tests =====

#[test]
fn test_format_canonicalizes() {
    incl_cmd()
        .args(["format", " tags , people ( account , account () ) , tags "])
        .assert()
        .success()
        .stdout("tags,people(account)\n");
}

#[test]
fn test_format_sorted_spaced() {
    incl_cmd()
        .args(["format", "--sort", "--spaced", "tags,people(projects,account)"])
        .assert()
        .success()
        .stdout("people(account, projects), tags\n");
}

#[test]
fn test_format_check_canonical() {
    incl_cmd()
        .args(["format", "--check", "tags,people(account)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Directive is in canonical form"));
}

#[test]
fn test_format_check_not_canonical() {
    incl_cmd()
        .args(["format", "--check", "tags, people()"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("not in canonical form"))
        .stderr(predicate::str::contains("tags,people"));
}

#[test]
fn test_format_to_output_file() {
    let output = NamedTempFile::new().expect("Failed to create temp file");

    incl_cmd()
        .args(["format", "a ( b )", "--output"])
        .arg(output.path())
        .assert()
        .success();

    assert_eq!(fs::read_to_string(output.path()).unwrap(), "a(b)\n");
}

#[test]
fn test_format_invalid_directive() {
    incl_cmd()
        .args(["format", "a(b"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Missing closing parenthesis"));
}

// ===== Inspect Command Tests =====

#[test]
fn test_inspect_tree() {
    incl_cmd()
        .args(["inspect", "tags,people(account,projects(posts,tags))"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Inclusion Tree"))
        .stdout(predicate::str::contains("  people (2)"))
        .stdout(predicate::str::contains("      posts"));
}

#[test]
fn test_inspect_verbose() {
    incl_cmd()
        .args(["inspect", "--verbose", "tags,people(account)"])
        .assert()
        .success()
        .stdout(predicate::str::contains("people.account"))
        .stdout(predicate::str::contains("Leaves: 2"))
        .stdout(predicate::str::contains("Groups: 1"))
        .stdout(predicate::str::contains("Max depth: 1"));
}

#[test]
fn test_inspect_empty() {
    incl_cmd()
        .args(["inspect", "  "])
        .assert()
        .success()
        .stdout(predicate::str::contains("(empty)"));
}

// ===== Conversion Command Tests =====

#[test]
fn test_to_json_compact() {
    incl_cmd()
        .args(["to-json", "tags,people(account)"])
        .assert()
        .success()
        .stdout("{\"tags\":{},\"people\":{\"account\":{}}}\n");
}

#[test]
fn test_to_json_pretty_to_file() {
    let output = NamedTempFile::new().expect("Failed to create temp file");

    incl_cmd()
        .args(["to-json", "people(account)", "--pretty", "-o"])
        .arg(output.path())
        .assert()
        .success();

    let json = fs::read_to_string(output.path()).unwrap();
    assert_eq!(json, "{\n  \"people\": {\n    \"account\": {}\n  }\n}\n");
}

#[test]
fn test_from_json() {
    let file = create_temp_file(
        r#"{"people": {"projects": {"posts": true}}, "tags": null}"#,
        ".json",
    );

    incl_cmd()
        .arg("from-json")
        .arg(file.path())
        .assert()
        .success()
        .stdout("people(projects(posts)),tags\n");
}

#[test]
fn test_from_json_invalid_value() {
    let file = create_temp_file(r#"{"people": {"account": 42}}"#, ".json");

    incl_cmd()
        .arg("from-json")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid value at 'people.account'"));
}

#[test]
fn test_json_roundtrip() {
    let directive = "tags,people(account,projects(posts,tags))";

    let json = incl_cmd()
        .args(["to-json", directive])
        .output()
        .expect("Failed to run to-json");
    let file = create_temp_file(&String::from_utf8_lossy(&json.stdout), ".json");

    incl_cmd()
        .arg("from-json")
        .arg(file.path())
        .assert()
        .success()
        .stdout(format!("{}\n", directive));
}

// ===== Input Limit Tests =====

// 20 000 levels in 60 000 characters: inside the default input length,
// far beyond the default depth.
fn deep_directive() -> String {
    format!("{}{}", "a(".repeat(20_000), ")".repeat(20_000))
}

#[test]
fn test_to_json_rejects_deep_file() {
    let file = create_temp_file(&deep_directive(), ".txt");

    incl_cmd()
        .args(["to-json", "-f"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Error: Parse error: nesting depth 33"))
        .stderr(predicate::str::contains("exceeds maximum 32"));
}

#[test]
fn test_format_rejects_deep_file() {
    let file = create_temp_file(&deep_directive(), ".txt");

    incl_cmd()
        .args(["format", "-f"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nesting depth 33"));
}

#[test]
fn test_inspect_rejects_deep_stdin() {
    incl_cmd()
        .arg("inspect")
        .write_stdin(deep_directive())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("nesting depth 33"));
}

#[test]
fn test_to_json_rejects_oversized_directive() {
    let directive = format!("{}{}", "a(".repeat(200_000), ")".repeat(200_000));
    let file = create_temp_file(&directive, ".txt");

    incl_cmd()
        .args(["to-json", "-f"])
        .arg(file.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("input length 800000 exceeds maximum 65536"));
}

#[test]
fn test_to_json_within_default_limits() {
    incl_cmd()
        .args(["to-json", &nested(32)])
        .assert()
        .success();
}

// ===== Batch Command Tests =====

#[test]
fn test_batch_validate_all_valid() {
    let file = create_temp_file("tags\npeople(account)\n\nposts(tags,comments)\n", ".txt");

    incl_cmd()
        .arg("batch-validate")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total directives: 3"))
        .stdout(predicate::str::contains("Failed: 0"));
}

#[test]
fn test_batch_validate_reports_line_numbers() {
    let file = create_temp_file("tags\npeople(account\n\n(posts)\nok\n", ".txt");

    incl_cmd()
        .arg("batch-validate")
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("line 2: people(account"))
        .stderr(predicate::str::contains("line 4: (posts)"))
        .stderr(predicate::str::contains("2 of 4 directives failed validation"));
}

#[test]
fn test_batch_validate_parallel() {
    let content: String = (0..300)
        .map(|i| format!("relation_{}(nested_{})\n", i, i))
        .collect();
    let file = create_temp_file(&content, ".txt");

    incl_cmd()
        .args(["batch-validate", "--parallel", "--threads", "2"])
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Total directives: 300"));
}

#[test]
fn test_batch_validate_zero_threads() {
    let file = create_temp_file("tags\n", ".txt");

    incl_cmd()
        .args(["batch-validate", "-j", "0"])
        .arg(file.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("--threads must be at least 1"));
}

// ===== Completion Command Tests =====

#[test]
fn test_completion_bash() {
    incl_cmd()
        .args(["completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("incl"));
}

#[test]
fn test_completion_install_instructions() {
    incl_cmd()
        .args(["completion", "zsh", "--install"])
        .assert()
        .success()
        .stdout(predicate::str::contains("incl completion zsh"));
}

#[test]
fn test_completion_unsupported_shell() {
    incl_cmd()
        .args(["completion", "tcsh"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Unsupported shell"));
}
