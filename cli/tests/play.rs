use assert_cmd::Command;
use predicates::prelude::*;

fn raidboss() -> Command {
    Command::cargo_bin("raidboss").expect("binary builds")
}

#[test]
fn scripted_game_reaches_victory() {
    raidboss()
        .args(["play", "--seed", "7"])
        .write_stdin("4\nGorehowl\n1\n1000\n0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Raid Boss!"))
        .stdout(predicate::str::contains("cannot attack on turn 1!"))
        .stdout(predicate::str::contains(
            "Congratulations! You have defeated Gorehowl!",
        ));
}

#[test]
fn invalid_damage_is_reported_not_accepted() {
    raidboss()
        .args(["play", "--seed", "7"])
        .write_stdin("4\nGorehowl\n1\n-10\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Please enter a non-negative number for damage.",
        ));
}

#[test]
fn json_mode_emits_tagged_events() {
    raidboss()
        .args(["play", "--seed", "7", "--json"])
        .write_stdin("4\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""kind":"prompt""#))
        .stdout(predicate::str::contains(r#""kind":"state_update""#));
}

#[test]
fn roll_prints_values_in_range() {
    let output = raidboss()
        .args(["roll", "--seed", "42", "--rolls", "20"])
        .output()
        .expect("command ran");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf8");
    for line in stdout.lines() {
        let value: u8 = line.parse().expect("numeric roll");
        assert!(value <= 10);
    }
}

#[test]
fn schedule_dump_respects_the_half_turn_rule() {
    let output = raidboss()
        .args(["schedule", "--seed", "42", "--turns", "6"])
        .output()
        .expect("command ran");
    assert!(output.status.success());
    let dump: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("valid JSON");
    let turns = dump.as_array().expect("array of turns");
    assert_eq!(turns.len(), 6);
    for (i, turn) in turns.iter().enumerate() {
        assert_eq!(turn.as_array().expect("turn array").len(), i / 2);
    }
}
