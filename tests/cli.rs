use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;
use tempfile::tempdir;

#[test]
fn cli_shows_help() {
    let mut cmd = Command::cargo_bin("prettyplot").unwrap();
    cmd.arg("--help");
    cmd.assert()
        .success()
        .stdout(predicate::str::contains("prettyplot"));
}

#[test]
fn ramp_prints_hex_colors() {
    let mut cmd = Command::cargo_bin("prettyplot").unwrap();
    cmd.args(["ramp", "3"]);
    cmd.assert()
        .success()
        .stdout(predicate::str::starts_with("#D9D9D9\n"))
        .stdout(predicate::str::ends_with("#969696\n"));
}

#[test]
fn ramp_of_zero_fails() {
    let mut cmd = Command::cargo_bin("prettyplot").unwrap();
    cmd.args(["ramp", "0"]);
    cmd.assert().failure();
}

#[test]
fn layout_prints_sorted_rows() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.json");
    fs::write(&input, r#"{"a": 3, "b": 1, "c": 2}"#).unwrap();

    let mut cmd = Command::cargo_bin("prettyplot").unwrap();
    cmd.arg("layout").arg("--input").arg(&input).arg("--ascending");
    let out = cmd.output().unwrap();
    assert!(out.status.success());

    let mut rdr = csv::Reader::from_reader(out.stdout.as_slice());
    let headers = rdr.headers().unwrap().clone();
    assert_eq!(
        headers.iter().collect::<Vec<_>>(),
        ["label", "value", "position", "r", "g", "b", "color"]
    );
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    let labels: Vec<&str> = rows.iter().map(|r| &r[0]).collect();
    assert_eq!(labels, ["b", "c", "a"]);
    assert_eq!(&rows[0][6], "#D9D9D9");
    assert_eq!(&rows[2][6], "#969696");
}

#[test]
fn layout_quotes_labels_containing_commas() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.csv");
    fs::write(&input, "label,value\n\"x,y\",2\nz,1\n").unwrap();

    let mut cmd = Command::cargo_bin("prettyplot").unwrap();
    cmd.arg("layout").arg("--input").arg(&input);
    let out = cmd.output().unwrap();
    assert!(out.status.success());

    let mut rdr = csv::Reader::from_reader(out.stdout.as_slice());
    let rows: Vec<csv::StringRecord> = rdr.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 2);
    assert!(rows.iter().all(|r| r.len() == 7));
    assert_eq!(&rows[0][0], "x,y");
    assert_eq!(&rows[1][0], "z");
}

#[test]
fn bars_rejects_non_boolean_order_in_config() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("data.csv");
    let config = dir.path().join("opts.json");
    fs::write(&input, "label,value\na,1\nb,2\n").unwrap();
    fs::write(&config, r#"{"order": "yes"}"#).unwrap();

    let mut cmd = Command::cargo_bin("prettyplot").unwrap();
    cmd.arg("bars")
        .arg("--input")
        .arg(&input)
        .arg("--out")
        .arg(dir.path().join("out.svg"))
        .arg("--config")
        .arg(&config);
    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("order"));
}
