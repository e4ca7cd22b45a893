use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};

use tempfile::TempDir;

const ADMIN_DOWN: &str = "\
Interface 1 is down (Administratively down)
Admin state is down
State information: admin_down
Hardware: Ethernet, MAC Address: aa:55:aa:55:00:43
MTU 0
Half-duplex
Speed 0 Mb/s
Auto-Negotiation is turned off
Input flow-control is off, output flow-control is off
RX
         0 input packets     0 bytes
         0 input error       0 dropped     0 CRC/FCS
TX
         0 output packets    0 bytes
         0 input error       0 dropped     0 collision
";

fn bin() -> &'static str {
    env!("CARGO_BIN_EXE_switch-report")
}

fn write_file(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).expect("failed to write test file");
    path
}

fn run(args: &[&str]) -> Output {
    Command::new(bin())
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run switch-report")
}

fn path_str(path: &Path) -> &str {
    path.to_str().expect("temp path should be UTF-8")
}

// ---------------------------------------------------------------------------
// parse-stdin
// ---------------------------------------------------------------------------

#[test]
fn parse_stdin_prints_json_record() {
    let mut child = Command::new(bin())
        .arg("parse-stdin")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn switch-report");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(ADMIN_DOWN.as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(output.status.success());
    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["port"], 1);
    assert_eq!(record["state_description"], "Administratively down");
    assert_eq!(record["autonegotiation"], false);
    assert_eq!(record["conection_type"], "Half-duplex");
    assert_eq!(record.as_object().unwrap().len(), 24);
}

#[test]
fn parse_stdin_rejects_malformed_report() {
    let mut child = Command::new(bin())
        .arg("parse-stdin")
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn switch-report");
    child
        .stdin
        .take()
        .unwrap()
        .write_all(ADMIN_DOWN.replace("MTU 0\n", "").as_bytes())
        .unwrap();
    let output = child.wait_with_output().unwrap();

    assert!(!output.status.success());
    assert!(output.stdout.is_empty(), "no partial record may be printed");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("MTU line"), "stderr was: {stderr}");
}

// ---------------------------------------------------------------------------
// parse-file
// ---------------------------------------------------------------------------

#[test]
fn parse_file_single_input_prints_record() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "port1.txt", ADMIN_DOWN);

    let output = run(&["parse-file", path_str(&input)]);

    assert!(output.status.success());
    let record: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(record["mac_address"], "aa:55:aa:55:00:43");
}

#[test]
fn parse_file_multiple_inputs_keys_by_path() {
    let dir = TempDir::new().unwrap();
    let first = write_file(&dir, "port1.txt", ADMIN_DOWN);
    let second = write_file(
        &dir,
        "port2.txt",
        &ADMIN_DOWN.replace("Interface 1 is", "Interface 2 is"),
    );

    let output = run(&["parse-file", path_str(&first), path_str(&second), "--jobs", "2"]);

    assert!(output.status.success());
    let records: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(records[path_str(&first)]["port"], 1);
    assert_eq!(records[path_str(&second)]["port"], 2);
}

#[test]
fn parse_file_table_format() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "port1.txt", ADMIN_DOWN);

    let output = run(&["parse-file", path_str(&input), "--format", "table"]);

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.lines().next().unwrap().starts_with("port "));
    assert!(stdout.contains("input_flow_control"));
}

#[test]
fn parse_file_fails_when_any_input_is_malformed() {
    let dir = TempDir::new().unwrap();
    let good = write_file(&dir, "good.txt", ADMIN_DOWN);
    let end = ADMIN_DOWN.find("TX").unwrap();
    let bad = write_file(&dir, "bad.txt", &ADMIN_DOWN[..end]);

    let output = run(&["parse-file", path_str(&good), path_str(&bad)]);

    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("bad.txt"), "stderr was: {stderr}");
    assert!(stderr.contains("TX header"), "stderr was: {stderr}");
}

// ---------------------------------------------------------------------------
// validate
// ---------------------------------------------------------------------------

#[test]
fn validate_accepts_parsed_output() {
    let dir = TempDir::new().unwrap();
    let input = write_file(&dir, "port1.txt", ADMIN_DOWN);
    let parsed = run(&["parse-file", path_str(&input)]);
    assert!(parsed.status.success());
    let record_path = dir.path().join("port1.json");
    fs::write(&record_path, &parsed.stdout).unwrap();

    let output = run(&["validate", path_str(&record_path)]);

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("OK "));
}

#[test]
fn validate_reports_missing_and_unexpected_fields() {
    let dir = TempDir::new().unwrap();
    let record = write_file(
        &dir,
        "partial.json",
        r#"{"port": 1, "hadrware": "Ethernet"}"#,
    );

    let output = run(&["validate", path_str(&record)]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("missing field: mtu"), "stderr was: {stderr}");
    assert!(stderr.contains("unexpected field: hadrware"), "stderr was: {stderr}");
}
