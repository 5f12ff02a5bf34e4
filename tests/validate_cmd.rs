use std::fs;
use std::path::Path;

use assert_cmd::Command;
use tempfile::TempDir;

fn write_session(path: &Path) {
    let mut rows = String::new();
    for particle in 1..=2 {
        for frame in 0..6 {
            rows.push_str(&format!(
                "{},{},{},{},0\n",
                particle,
                frame,
                frame as f64 + particle as f64,
                frame as f64 + 2.0 * particle as f64
            ));
        }
    }
    fs::write(path, rows).unwrap();
}

#[test]
fn validate_command_ok() {
    let tmp = TempDir::new().unwrap();
    let session = tmp.path().join("s1.csv");
    write_session(&session);

    let mut cmd = Command::cargo_bin("kira-trajmsd").unwrap();
    cmd.arg("validate").arg("--input").arg(&session);
    cmd.assert().success();
}

#[test]
fn validate_directory_requires_name() {
    let tmp = TempDir::new().unwrap();
    let mut cmd = Command::cargo_bin("kira-trajmsd").unwrap();
    cmd.arg("validate").arg("--input").arg(tmp.path());
    cmd.assert().failure();
}

#[test]
fn validate_rejects_malformed_session() {
    let tmp = TempDir::new().unwrap();
    let session = tmp.path().join("bad.csv");
    fs::write(&session, "1,0,1.0\n").unwrap();

    let mut cmd = Command::cargo_bin("kira-trajmsd").unwrap();
    cmd.arg("validate").arg("--input").arg(&session);
    cmd.assert().failure();
}
