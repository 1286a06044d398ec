//! Black-box tests for the `tm` binary

use assert_cmd::Command;
use predicates::prelude::*;

fn tm() -> Command {
    Command::cargo_bin("tm").expect("tm binary should build")
}

#[test]
fn test_plan_text_output_lists_days() {
    tm().args(["plan", "I want a 5 day trip to kerala with cultural experiences"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Kerala Backwaters & Hills Adventure"))
        .stdout(predicate::str::contains("Day 1:"))
        .stdout(predicate::str::contains("Arrival in Kochi"));
}

#[test]
fn test_plan_json_output_is_parseable() {
    let output = tm()
        .args(["plan", "2 weeks in goa", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let body: serde_json::Value = serde_json::from_slice(&output).expect("stdout should be JSON");
    assert!(body["chat_response"].as_str().is_some());
    assert_eq!(body["itinerary_data"]["days"].as_array().map(Vec::len), Some(7));
}

#[test]
fn test_plan_without_destination_asks_clarifying_question() {
    tm().args(["plan", "plan something fun"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Could you tell me where"));
}

#[test]
fn test_unknown_subcommand_fails() {
    tm().arg("definitely-not-a-command").assert().failure();
}
