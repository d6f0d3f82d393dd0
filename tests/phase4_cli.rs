//! Phase 4 tests: the `ugraph` binary end to end.

use std::process::{Command, Output};

// ==================== CLI Helpers ====================

/// Run the `ugraph` CLI with the given arguments and return the output.
fn run_ugraph(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ugraph"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("Failed to run ugraph")
}

/// Helper: assert that the CLI ran successfully (exit code 0).
fn assert_success(output: &Output) {
    assert!(
        output.status.success(),
        "ugraph failed with status {:?}\nstdout: {}\nstderr: {}",
        output.status,
        String::from_utf8_lossy(&output.stdout),
        String::from_utf8_lossy(&output.stderr),
    );
}

/// Helper: get stdout as a string from an Output.
fn stdout_str(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).to_string()
}

/// Helper: parse stdout as JSON.
fn stdout_json(output: &Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout is not JSON")
}

// ==================== Traversal Commands ====================

#[test]
fn test_cli_dfs_text() {
    let output = run_ugraph(&[
        "--edge", "a:b", "--edge", "b:c", "--edge", "a:c", "dfs", "--start", "a",
    ]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "dfs from a: 3 vertices\n  a -> c -> b\n");
}

#[test]
fn test_cli_bfs_text() {
    let output = run_ugraph(&[
        "--edge", "S:A", "--edge", "A:B", "--edge", "B:E", "--edge", "S:E", "bfs", "--start",
        "S",
    ]);
    assert_success(&output);
    assert_eq!(
        stdout_str(&output),
        "bfs from S: 4 vertices\n  S -> A -> E -> B\n"
    );
}

#[test]
fn test_cli_bfs_json() {
    let output = run_ugraph(&[
        "--format", "json", "--edge", "a:b", "--edge", "b:c", "--edge", "a:c", "bfs",
        "--start", "a",
    ]);
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["start"], "a");
    assert_eq!(json["order"], "bfs");
    assert_eq!(json["visited"], serde_json::json!(["a", "b", "c"]));
}

#[test]
fn test_cli_dfs_json_flags_after_subcommand() {
    let output = run_ugraph(&["dfs", "--start", "x", "--vertex", "x", "--format", "json"]);
    assert_success(&output);
    assert_eq!(stdout_json(&output)["visited"], serde_json::json!(["x"]));
}

// ==================== Distance Command ====================

#[test]
fn test_cli_distance_text() {
    let output = run_ugraph(&[
        "--edge", "a:b", "--edge", "b:c", "--edge", "c:d", "distance", "--from", "a", "--to",
        "d",
    ]);
    assert_success(&output);
    assert_eq!(stdout_str(&output), "Distance a -> d: 3\n");
}

#[test]
fn test_cli_distance_json() {
    let output = run_ugraph(&[
        "--format", "json", "--edge", "a:b", "--edge", "b:c", "distance", "--from", "c",
        "--to", "c",
    ]);
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["distance"], 0);
    assert_eq!(json["from"], "c");
}

#[test]
fn test_cli_info_json() {
    let output = run_ugraph(&[
        "--format", "json", "--vertex", "lonely", "--edge", "a:b", "--edge", "b:c", "info",
    ]);
    assert_success(&output);
    let json = stdout_json(&output);
    assert_eq!(json["vertices"], 4);
    assert_eq!(json["edges"], 2);
    assert_eq!(json["adjacency"][0]["label"], "lonely");
    assert_eq!(json["adjacency"][0]["id"], 0);
    assert_eq!(json["adjacency"][2]["neighbors"], serde_json::json!(["a", "c"]));
}

// ==================== Exit Codes ====================

#[test]
fn test_cli_bad_edge_spec_exits_2() {
    let output = run_ugraph(&["--edge", "a-b", "info"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("a-b"));
    assert!(output.stdout.is_empty());
}

#[test]
fn test_cli_unknown_label_exits_2() {
    let output = run_ugraph(&["--edge", "a:b", "dfs", "--start", "zzz"]);
    assert_eq!(output.status.code(), Some(2));
    assert!(String::from_utf8_lossy(&output.stderr).contains("zzz"));
}

#[test]
fn test_cli_unreachable_exits_3() {
    let output = run_ugraph(&[
        "--vertex", "island", "--edge", "a:b", "distance", "--from", "a", "--to", "island",
    ]);
    assert_eq!(output.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&output.stderr).contains("No path"));
    assert!(output.stdout.is_empty());
}
