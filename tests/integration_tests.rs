mod common;

use assert_cmd::Command;
use assert_fs::TempDir;
use common::{write_garbage_image, write_test_png};
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("share-squeeze").unwrap()
}

#[test]
fn test_cli_help() {
    cmd().arg("--help").assert().success();
}

#[test]
fn test_compress_help() {
    cmd().args(["compress", "--help"]).assert().success();
}

#[test]
fn test_batch_help() {
    cmd().args(["batch", "--help"]).assert().success();
}

#[test]
fn test_info_help() {
    cmd().args(["info", "--help"]).assert().success();
}

#[test]
fn test_compress_missing_args() {
    cmd().arg("compress").assert().failure();
}

#[test]
fn test_compress_invalid_quality() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_test_png(temp_dir.path(), "in.png", 16, 16);

    cmd()
        .args(["compress", &file.to_string_lossy(), "--quality", "10"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid quality"));
}

#[test]
fn test_compress_real_image_succeeds() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_test_png(temp_dir.path(), "in.png", 64, 64);

    cmd()
        .args(["compress", &file.to_string_lossy(), "-q", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("kb"));
}

#[test]
fn test_compress_garbage_is_passed_through() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_garbage_image(temp_dir.path(), "broken.jpg");

    // Decode failure degrades to passthrough; the run still succeeds.
    cmd()
        .args(["compress", &file.to_string_lossy()])
        .assert()
        .success()
        .stderr(predicate::str::contains("passed through"));
}

#[test]
fn test_compress_missing_file_does_not_abort_batch() {
    let temp_dir = TempDir::new().unwrap();
    let good = write_test_png(temp_dir.path(), "good.png", 32, 32);
    let missing = temp_dir.path().join("missing.jpg");

    cmd()
        .args([
            "compress",
            &good.to_string_lossy(),
            &missing.to_string_lossy(),
        ])
        .assert()
        .success()
        .stderr(predicate::str::contains("Failed to read"));
}

#[test]
fn test_compress_with_export_dir() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_test_png(temp_dir.path(), "in.png", 32, 32);
    let export = temp_dir.path().join("outbox");

    cmd()
        .args([
            "compress",
            &file.to_string_lossy(),
            "--export-dir",
            &export.to_string_lossy(),
        ])
        .assert()
        .success();

    let exported: Vec<_> = std::fs::read_dir(&export).unwrap().collect();
    assert_eq!(exported.len(), 1);
}

#[test]
fn test_batch_empty_directory_is_not_an_error() {
    let temp_dir = TempDir::new().unwrap();

    cmd()
        .args(["batch", &temp_dir.path().to_string_lossy()])
        .assert()
        .success();
}

#[test]
fn test_batch_directory_with_images() {
    let temp_dir = TempDir::new().unwrap();
    write_test_png(temp_dir.path(), "a.png", 32, 32);
    write_test_png(temp_dir.path(), "b.png", 32, 32);

    cmd()
        .args(["batch", &temp_dir.path().to_string_lossy(), "-q", "40"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Batch Summary"));
}

#[test]
fn test_info_missing_args() {
    cmd().arg("info").assert().failure();
}

#[test]
fn test_info_nonexistent_file() {
    cmd().args(["info", "nonexistent.jpg"]).assert().failure();
}

#[test]
fn test_info_real_image() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_test_png(temp_dir.path(), "photo.png", 48, 48);

    cmd()
        .args(["info", &file.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::contains("48x48"));
}

#[test]
fn test_quiet_suppresses_output() {
    let temp_dir = TempDir::new().unwrap();
    let file = write_test_png(temp_dir.path(), "in.png", 32, 32);

    cmd()
        .args(["--quiet", "compress", &file.to_string_lossy()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());
}
