mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::io::Write;
use std::process::Command;
use tempfile::NamedTempFile;

#[test]
fn test_rows_without_currency_are_skipped() {
    let csv = common::amounts_csv(&["USD,1", ",2", "USD,3"]);

    let mut cmd = Command::new(cargo_bin!("collective-payouts"));
    cmd.arg("amounts").arg(csv.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Error reading amount row"))
        .stdout(predicate::str::contains("USD,$,1,1.00,valid,100,false"))
        .stdout(predicate::str::contains("USD,$,3,3.00,valid,300,false"));
}

#[test]
fn test_garbage_inputs_never_abort() {
    let csv = common::amounts_csv(&[
        "USD,12abc",
        "USD,--5",
        "USD,1e3",
        "USD,.",
        "USD,99999999999999999999999999999999",
        "USD,1e-30",
    ]);

    let mut cmd = Command::new(cargo_bin!("collective-payouts"));
    cmd.arg("amounts").arg(csv.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("USD,$,12abc,12abc,invalid,,false"))
        .stdout(predicate::str::contains("USD,$,--5,--5,invalid,,false"))
        .stdout(predicate::str::contains("USD,$,1e3,1000.00,valid,100000,false"))
        .stdout(predicate::str::contains("USD,$,.,.,invalid,,false"))
        .stdout(predicate::str::contains(
            "USD,$,99999999999999999999999999999999,99999999999999999999999999999999,invalid,,false",
        ))
        .stdout(predicate::str::contains("USD,$,1e-30,0.00,valid,0,false"));
}

#[test]
fn test_malformed_scenario_fails() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{{ \"payer\": ").unwrap();

    let mut cmd = Command::new(cargo_bin!("collective-payouts"));
    cmd.arg("options").arg(file.path());

    cmd.assert().failure().stderr(predicate::str::contains("JSON error"));
}

#[test]
fn test_draft_methods_in_scenario_are_skipped() {
    let mut file = NamedTempFile::new().unwrap();
    write!(
        file,
        r#"{{
            "payer": {{ "host": {{ "id": "h1", "supportedPayoutMethods": ["PAYPAL"] }} }},
            "payee": {{ "id": "me", "type": "INDIVIDUAL" }},
            "payoutMethods": [{{ "type": "PAYPAL", "data": {{ "email": "x@y.z" }} }}]
        }}"#
    )
    .unwrap();

    let mut cmd = Command::new(cargo_bin!("collective-payouts"));
    cmd.arg("options").arg(file.path());

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("Skipping payout method"))
        .stdout(predicate::str::contains("x@y.z").not());
}

#[test]
fn test_missing_input_file_fails() {
    let mut cmd = Command::new(cargo_bin!("collective-payouts"));
    cmd.arg("amounts").arg("tests/fixtures/does-not-exist.csv");

    cmd.assert().failure();
}
