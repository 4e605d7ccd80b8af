use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

fn namepat() -> Command {
    let mut cmd = Command::cargo_bin("namepat").unwrap();
    cmd.arg("--no-color");
    cmd
}

fn hosts_dir() -> TempDir {
    let dir = TempDir::new().unwrap();
    for name in ["Host001~010", "Host020a~030a", "Web%", "notes"] {
        fs::create_dir(dir.path().join(name)).unwrap();
    }
    dir
}

#[test]
fn test_range_match_prints_true() {
    namepat()
        .args(["Host001~010", "Host005"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_range_miss_prints_false() {
    namepat()
        .args(["Host001~010", "Host011"])
        .assert()
        .failure()
        .stdout("false\n");
}

#[test]
fn test_several_names_are_labelled() {
    namepat()
        .args(["Host020a~030a", "Host025A", "Host031a"])
        .assert()
        .failure()
        .stdout("Host025A: true\nHost031a: false\n");
}

#[test]
fn test_wildcard_is_case_insensitive() {
    namepat()
        .args(["Host00%", "HOST005"])
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_unusable_pattern_never_matches() {
    namepat()
        .args(["Host*", "Host001"])
        .assert()
        .failure()
        .stdout("false\n");
}

#[test]
fn test_explain_shows_compiled_range() {
    namepat()
        .args(["--explain", "HostAAAA~050t", "Host000t"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "HostAAAA~050t: range Host000t..=Host050t (51 names)",
        ))
        .stdout(predicate::str::ends_with("true\n"));
}

#[test]
fn test_explain_shows_why_pattern_is_unavailable() {
    namepat()
        .args(["--explain", "A~0001", "A0001"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("A~0001: unavailable ("))
        .stdout(predicate::str::contains("shorter than the 4 characters"));
}

#[test]
fn test_defaults_to_machine_name() {
    namepat()
        .env("COMPUTERNAME", "Host007")
        .arg("Host001~010")
        .assert()
        .success()
        .stdout("true\n");
}

#[test]
fn test_json_output() {
    let assert = namepat()
        .args(["--json", "Web%", "web01", "db01"])
        .assert()
        .failure();
    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(report["pattern"], "Web%");
    assert_eq!(report["kind"], "wildcard");
    assert_eq!(report["results"][0]["matched"], true);
    assert_eq!(report["results"][1]["matched"], false);
}

#[test]
fn test_pattern_required_without_dir() {
    namepat().assert().failure();
}

#[test]
fn test_dir_lists_matching_folders() {
    let dir = hosts_dir();
    namepat()
        .arg("--dir")
        .arg(dir.path())
        .arg("host009")
        .assert()
        .success()
        .stdout("Host001~010\n");
}

#[test]
fn test_dir_sequential_and_several_names() {
    let dir = hosts_dir();
    namepat()
        .args(["--sequential", "--dir"])
        .arg(dir.path())
        .args(["Host021a", "Web7"])
        .assert()
        .success()
        .stdout("Host021a: Host020a~030a\nWeb7: Web%\n");
}

#[test]
fn test_dir_without_match_fails() {
    let dir = hosts_dir();
    namepat()
        .arg("--dir")
        .arg(dir.path())
        .arg("db01")
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("No folder in"));
}

#[test]
fn test_dir_explain_reports_every_folder() {
    let dir = hosts_dir();
    namepat()
        .args(["--explain", "--dir"])
        .arg(dir.path())
        .arg("Web1")
        .assert()
        .success()
        .stdout(predicate::str::contains("notes: unavailable"))
        .stdout(predicate::str::contains("Web%: wildcard"))
        .stdout(predicate::str::ends_with("Web%\n"));
}

#[test]
fn test_dir_json_output() {
    let dir = hosts_dir();
    let assert = namepat()
        .args(["--json", "--dir"])
        .arg(dir.path())
        .arg("Host010")
        .assert()
        .success();
    let report: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();

    assert_eq!(report["folders"].as_array().unwrap().len(), 4);
    assert_eq!(report["results"][0]["name"], "Host010");
    assert_eq!(report["results"][0]["matched"][0], "Host001~010");
}

#[test]
fn test_missing_dir_is_an_error() {
    namepat()
        .args(["--dir", "/definitely/not/here", "Host001"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not a directory"));
}
