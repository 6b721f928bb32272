use assert_cmd::Command;
use predicates::prelude::*;
use std::fs::{create_dir_all, read_to_string, write};
use tempfile::tempdir;

#[test]
fn combine_cli_happy_flow_writes_archive_and_prints_summary() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    create_dir_all(root.join("src")).unwrap();
    write(root.join("src/lib.rs"), "pub fn answer() -> u32 { 42 }\n").unwrap();

    let mut cmd = Command::cargo_bin("combine-code").expect("Binary exists");
    cmd.arg("--root").arg(root).arg("--output").arg("archive.txt");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("--- Summary ---"))
        .stdout(predicate::str::contains("Successfully processed 1 files."))
        .stdout(predicate::str::contains("Combined output saved to:"));

    let output = read_to_string(root.join("archive.txt")).unwrap();
    assert!(output.contains("<src/lib.rs>"));
}

#[test]
fn combine_cli_exits_zero_even_when_files_are_skipped() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    write(root.join("empty.txt"), "").unwrap();

    let mut cmd = Command::cargo_bin("combine-code").expect("Binary exists");
    cmd.arg("--root").arg(root);

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Successfully processed 0 files."));
}

#[test]
fn combine_cli_fails_when_root_does_not_exist() {
    let tmp = tempdir().unwrap();
    let missing = tmp.path().join("no_such_dir");

    let mut cmd = Command::cargo_bin("combine-code").expect("Binary exists");
    cmd.arg("--root").arg(&missing);

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("[ERROR]"))
        .stderr(predicate::str::contains("cannot resolve root directory"));
}

#[test]
fn combine_cli_fails_when_output_path_cannot_be_created() {
    let tmp = tempdir().unwrap();
    let root = tmp.path();
    // A directory squatting on the output name makes File::create fail.
    create_dir_all(root.join("archive.txt")).unwrap();
    write(root.join("ok.txt"), "fine").unwrap();

    let mut cmd = Command::cargo_bin("combine-code").expect("Binary exists");
    cmd.arg("--root").arg(root).arg("--output").arg("archive.txt");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("could not write output archive"));
}

#[test]
fn combine_cli_rejects_an_unknown_log_level() {
    let tmp = tempdir().unwrap();

    let mut cmd = Command::cargo_bin("combine-code").expect("Binary exists");
    cmd.arg("--root").arg(tmp.path()).arg("--log-level").arg("loud");

    cmd.assert().failure();
}
