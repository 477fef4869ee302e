use assert_cmd::cargo_bin_cmd;
use predicates::prelude::*;

#[test]
fn no_arguments_prints_help() {
    cargo_bin_cmd!("vitess-rag")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: vitess-rag"))
        .stdout(predicate::str::contains("versions"));
}

#[test]
fn help_flag_includes_examples() {
    cargo_bin_cmd!("vitess-rag")
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Examples:"))
        .stdout(predicate::str::contains("v22.0 (Development)"));
}

#[test]
fn versions_lists_annotated_labels() {
    cargo_bin_cmd!("vitess-rag")
        .arg("versions")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Available Vitess Documentation Versions:",
        ))
        .stdout(predicate::str::contains(
            "v21.0 (Stable)        - Latest stable release",
        ))
        .stdout(predicate::str::contains(
            "v11.0 (Archived)      - Archived version",
        ));
}

#[test]
fn missing_query_is_a_usage_error_on_stdout() {
    cargo_bin_cmd!("vitess-rag")
        .args(["raw", "-v", "v21.0"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--query"));
}

#[test]
fn missing_prompt_is_a_usage_error() {
    cargo_bin_cmd!("vitess-rag")
        .arg("test")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--prompt"));
}

#[test]
fn unknown_flag_fails() {
    cargo_bin_cmd!("vitess-rag")
        .args(["query", "-q", "x", "--bogus"])
        .assert()
        .code(1);
}

#[test]
fn unreachable_server_is_reported_and_exits_cleanly() {
    cargo_bin_cmd!("vitess-rag")
        .args(["query", "-q", "vtgate", "-u", "http://127.0.0.1:1"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Request failed: "));
}

#[test]
fn verbose_logs_go_to_stderr() {
    cargo_bin_cmd!("vitess-rag")
        .args(["--verbose", "query", "-q", "vtgate", "-u", "http://127.0.0.1:1"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Request failed: "))
        .stderr(predicate::str::contains("http://127.0.0.1:1/query"));
}

#[test]
fn root_query_with_a_subcommand_is_a_usage_error() {
    cargo_bin_cmd!("vitess-rag")
        .args(["-q", "foo", "-n", "3", "versions"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains("cannot be used with"))
        .stdout(predicate::str::contains("Available Vitess").not());
}

#[test]
fn version_flag_is_the_docs_version_not_the_program_version() {
    cargo_bin_cmd!("vitess-rag")
        .arg("--version")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--version <DOC_VERSION>"));
}
