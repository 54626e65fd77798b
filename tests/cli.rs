extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

const GOOD_ARGS: [&str; 9] = ["32", "24", "4", "3", "0", "0", "0.285", "0.01", "2"];

#[test]
fn renders_a_small_set_to_a_png() {
    let dir = tempfile::tempdir().unwrap();
    let outfile = dir.path().join("julia.png");

    Command::cargo_bin("julia")
        .unwrap()
        .args(&GOOD_ARGS)
        .arg("-o")
        .arg(&outfile)
        .assert()
        .success()
        .stdout(predicate::str::contains("Processing time:"));

    let written = std::fs::metadata(&outfile).unwrap();
    assert!(written.len() > 0);
}

#[test]
fn negative_coordinates_are_accepted() {
    let dir = tempfile::tempdir().unwrap();
    let outfile = dir.path().join("julia.png");

    Command::cargo_bin("julia")
        .unwrap()
        .args(&["32", "24", "4", "3", "-0.5", "-0.25", "-0.8", "0.156", "2"])
        .arg("-o")
        .arg(&outfile)
        .assert()
        .success();
}

#[test]
fn insufficient_arguments_exit_with_code_2() {
    Command::cargo_bin("julia")
        .unwrap()
        .args(&["800", "600", "4"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Insufficient arguments"));
}

#[test]
fn non_numeric_argument_exits_with_code_4() {
    let mut args = GOOD_ARGS;
    args[2] = "wide";
    Command::cargo_bin("julia")
        .unwrap()
        .args(&args)
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("is not a number"));
}

#[test]
fn zero_window_width_exits_with_code_3() {
    let mut args = GOOD_ARGS;
    args[0] = "0";
    Command::cargo_bin("julia")
        .unwrap()
        .args(&args)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Window dimensions"));
}

#[test]
fn zero_thread_count_exits_with_code_3() {
    let mut args = GOOD_ARGS;
    args[8] = "0";
    Command::cargo_bin("julia")
        .unwrap()
        .args(&args)
        .assert()
        .failure()
        .code(3)
        .stderr(predicate::str::contains("Number of threads"));
}
