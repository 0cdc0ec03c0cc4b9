use predicates::prelude::*;
use std::process::Command;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::from(Command::new(env!("CARGO_BIN_EXE_flatargs")))
}

const VALID: [&str; 11] = [
    "-s", "-v", "-p", "42", "-f", "2.5", "--str", "hello", "-m", "1", "-m",
];

#[test]
fn cli_happy_path_prints_record_and_exits_zero() {
    cmd()
        .args(VALID)
        .arg("2")
        .assert()
        .success()
        .stdout(predicate::str::contains("param: 42"))
        .stdout(predicate::str::contains("text: \"hello\""))
        .stdout(predicate::str::contains("flag_some: true"));
}

#[test]
fn cli_many_values_accumulate_in_order() {
    cmd()
        .args(["-s", "-v", "-p", "1", "-f", "1", "--str", "a"])
        .args(["--many-values", "1", "--many-values", "2", "-m", "3"])
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)many_values: \[.*1,.*2,.*3,.*\]").unwrap());
}

#[test]
fn cli_help_prints_usage_and_exits_zero() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: flatargs [OPTIONS]"))
        .stdout(predicate::str::contains("-m, --many-values <MANY_VALUES>"));
}

#[test]
fn cli_help_wins_even_amid_invalid_arguments() {
    cmd()
        .args(["--garbage", "--param", "abc", "-h"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: flatargs [OPTIONS]"));
}

#[test]
fn cli_help_never_lists_the_hidden_alias() {
    cmd()
        .arg("-h")
        .assert()
        .success()
        .stdout(predicate::str::contains("--omg").not());
}

#[test]
fn cli_hidden_alias_is_accepted() {
    cmd()
        .args(["-s", "-v", "--omg", "13", "-f", "1", "--str", "a", "-m", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("param: 13"));
}

#[test]
fn cli_missing_str_exits_one_and_names_it() {
    cmd()
        .args(["-s", "-v", "-p", "1", "-f", "1", "-m", "1"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "--str was required but it was not provided",
        ));
}

#[test]
fn cli_reports_every_missing_field_not_just_the_first() {
    cmd()
        .assert()
        .code(1)
        .stdout(predicate::str::contains("--some was required"))
        .stdout(predicate::str::contains("--param was required"))
        .stdout(predicate::str::contains("--many_values was required"));
}

#[test]
fn cli_unknown_option_exits_one() {
    cmd()
        .arg("--frobnicate")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Unknown option '--frobnicate'"));
}

#[test]
fn cli_invalid_integer_exits_one() {
    cmd()
        .args(["--param", "abc"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Value 'abc' of option '--param' is not a valid integer",
        ));
}

#[test]
fn cli_literal_zero_param_is_accepted() {
    cmd()
        .args(["-s", "-v", "-p", "0", "-f", "1", "--str", "a", "-m", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("param: 0"));
}

#[test]
fn cli_trailing_value_option_exits_one() {
    cmd()
        .args(["-s", "--float-value"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(
            "Expected value for option '--float-value' but no value was provided",
        ));
}

#[test]
fn cli_diagnostics_go_to_stdout_not_stderr() {
    cmd()
        .arg("--frobnicate")
        .assert()
        .code(1)
        .stderr(predicate::str::is_empty());
}
