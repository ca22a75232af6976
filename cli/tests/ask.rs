//! # DAVID CLI Ask Integration Tests
//!
//! File: cli/tests/ask.rs
//!
//! `david ask` answers from the built-in knowledge base and stores nothing.
//!
mod common;
use common::*;
use predicates::prelude::*;

#[test]
fn test_ask_prints_bucket_text() {
    let sandbox = Sandbox::new();
    sandbox
        .cmd()
        .args(["ask", "kapan booster?"])
        .assert()
        .success()
        .stdout(predicate::str::contains("**COVID-19 Vaccination Information:**"));

    assert!(sandbox.session_ids().is_empty());
}

#[test]
fn test_ask_first_bucket_wins() {
    Sandbox::new()
        .cmd()
        .args(["ask", "saya demam dan batuk"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "COVID-19 symptoms typically appear 2-14 days",
        ));
}

#[test]
fn test_ask_falls_back_to_general() {
    Sandbox::new()
        .cmd()
        .args(["ask", "halo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to DAVID AI"));
}

#[test]
fn test_ask_json_output() {
    let output = Sandbox::new()
        .cmd()
        .args(["ask", "--json", "PCR"])
        .output()
        .expect("Failed to run david ask");
    assert!(output.status.success());

    let body: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("ask --json printed invalid JSON");
    assert!(body["response"]
        .as_str()
        .unwrap()
        .starts_with("**COVID-19 Testing Guide:**"));
    assert!(body["timestamp"].as_str().unwrap().ends_with('Z'));
}

#[test]
fn test_ask_rejects_bad_endpoint_in_config() {
    let sandbox = Sandbox::new();
    sandbox.write_project_config("[chat]\nendpoint = \"localhost:3000/api/chat\"\n");

    sandbox
        .cmd()
        .args(["ask", "gejala"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Error:"));
}
