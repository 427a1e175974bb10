//! End-to-end checks of the `mindiff` binary: exit status, stdout layout and
//! one-line diagnostics.

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};

fn tmp_path(name: &str, ext: &str) -> PathBuf {
    let mut p = std::env::temp_dir();
    let nanos = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    p.push(format!("mindiff_cli_{name}_{nanos}.{ext}"));
    p
}

fn mindiff(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_mindiff"))
        .args(args)
        .env_remove("RUST_LOG")
        .env_remove("MINDIFF_MAX_TABLE_CELLS")
        .output()
        .unwrap()
}

fn with_weights(name: &str, contents: &str) -> PathBuf {
    let path = tmp_path(name, "txt");
    std::fs::write(&path, contents).unwrap();
    path
}

#[test]
fn solves_file_and_prints_both_teams() {
    let path = with_weights("ok", "1 6 2 4\n");
    let out = mindiff(&["solve", path.to_str().unwrap()]);
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert!(stdout.starts_with("Best team assignment (by weight) = \n"));
    assert!(stdout.contains("Team 1:\n3(2) 4(4) \nTotal weight = 6\n"));
    assert!(stdout.contains("Team 2:\n1(1) 2(6) \nTotal weight = 7\n"));
    let _ = std::fs::remove_file(path);
}

#[test]
fn odd_length_fails_with_one_line() {
    let path = with_weights("odd", "1 2 3");
    let out = mindiff(&["solve", path.to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&out.stderr);

    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    assert_eq!(stderr.lines().count(), 1, "stderr: {stderr}");
    assert!(stderr.contains("not of an even size"));
    let _ = std::fs::remove_file(path);
}

#[test]
fn missing_file_fails() {
    let out = mindiff(&["solve", "/definitely/not/here.txt"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("failed to open file"));
}

#[test]
fn table_cap_from_flag() {
    let path = with_weights("cap", "1000 1000 1000 1000");
    let out = mindiff(&["solve", path.to_str().unwrap(), "--max-table-cells", "100"]);
    assert!(!out.status.success());
    assert!(String::from_utf8_lossy(&out.stderr).contains("limit is 100"));
    let _ = std::fs::remove_file(path);
}

#[test]
fn json_format_and_out_file() {
    let path = with_weights("json", "3 7");
    let out_path = tmp_path("result", "json");
    let out = mindiff(&[
        "solve",
        path.to_str().unwrap(),
        "--format",
        "json",
        "--out",
        out_path.to_str().unwrap(),
    ]);
    assert!(out.status.success());

    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["set_a"], serde_json::json!([0]));
    assert_eq!(v["difference"], 4);

    let saved: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&out_path).unwrap()).unwrap();
    assert_eq!(saved, v);

    let _ = std::fs::remove_file(path);
    let _ = std::fs::remove_file(out_path);
}

#[test]
fn reads_one_line_from_stdin() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mindiff"))
        .arg("solve")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child
        .stdin
        .take()
        .unwrap()
        .write_all(b"5 5 5 5\n9 9\n")
        .unwrap();
    let out = child.wait_with_output().unwrap();
    let stdout = String::from_utf8_lossy(&out.stdout);

    assert!(out.status.success());
    assert!(stdout.starts_with("Please enter a sequence of numbers: \n"));
    assert_eq!(stdout.matches("Total weight = 10").count(), 2);
}

#[test]
fn stdin_json_keeps_stdout_parseable() {
    let mut child = Command::new(env!("CARGO_BIN_EXE_mindiff"))
        .args(["solve", "--format", "json"])
        .env_remove("RUST_LOG")
        .env_remove("MINDIFF_MAX_TABLE_CELLS")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .unwrap();
    child.stdin.take().unwrap().write_all(b"1 6 2 4\n").unwrap();
    let out = child.wait_with_output().unwrap();

    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["sum_a"], 6);
    assert_eq!(v["difference"], 1);
    assert!(String::from_utf8_lossy(&out.stderr).starts_with("Please enter a sequence of numbers: "));
}

#[test]
fn generate_rejects_odd_count() {
    let path = tmp_path("gen_odd", "txt");
    for n in ["9", "0"] {
        let out = mindiff(&["generate", "--n", n, "--out", path.to_str().unwrap()]);
        assert!(!out.status.success(), "n = {n}");
        assert!(String::from_utf8_lossy(&out.stderr).contains("positive even count"));
    }
    assert!(!path.exists());
}

#[test]
fn generate_then_solve() {
    let path = tmp_path("gen", "txt");
    let out = mindiff(&[
        "generate",
        "--n",
        "10",
        "--max-weight",
        "20",
        "--out",
        path.to_str().unwrap(),
    ]);
    assert!(out.status.success());

    let out = mindiff(&["solve", path.to_str().unwrap(), "--format", "json"]);
    assert!(out.status.success());
    let v: serde_json::Value = serde_json::from_slice(&out.stdout).unwrap();
    assert_eq!(v["weights"].as_array().unwrap().len(), 10);
    assert_eq!(v["set_a"].as_array().unwrap().len(), 5);
    let _ = std::fs::remove_file(path);
}
