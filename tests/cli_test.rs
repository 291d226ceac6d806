// Copyright 2025 Vivian Voss. Licensed under the Apache License, Version 2.0.
// SPDX-License-Identifier: Apache-2.0

//! CLI integration tests.
//!
//! Tests the `reedkv-bench` command-line tool end to end.
//! Uses assert_cmd for running the binary and predicates for output
//! assertions.

use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn test_cli_demo_prints_structure_and_stats() {
    Command::cargo_bin("reedkv-bench")
        .unwrap()
        .args(["demo", "--order", "4", "10", "20", "5", "15"])
        .assert()
        .success()
        .stdout(predicate::str::contains("=== B-Tree Structure ==="))
        .stdout(predicate::str::contains("valid:           true"));
}

#[test]
fn test_cli_demo_lists_keys_in_order() {
    Command::cargo_bin("reedkv-bench")
        .unwrap()
        .args(["demo", "--order", "4", "30", "10", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("in-order keys: 10 20 30"));
}

#[test]
fn test_cli_bench_reports_speedup() {
    Command::cargo_bin("reedkv-bench")
        .unwrap()
        .args(["bench", "-n", "500", "-s", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("speedup:"))
        .stdout(predicate::str::contains("tree valid:        true"));
}

#[test]
fn test_cli_rejects_invalid_order() {
    Command::cargo_bin("reedkv-bench")
        .unwrap()
        .args(["demo", "--order", "2", "1"])
        .assert()
        .failure();
}
