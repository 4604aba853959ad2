mod common;

use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

#[test]
fn test_maximum_amount_boundary() {
    let csv = common::amounts_csv(&["USD,10000000", "USD,10000000.01"]);

    let mut cmd = Command::new(cargo_bin!("collective-payouts"));
    cmd.arg("amounts").arg(csv.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "USD,$,10000000,10000000.00,valid,1000000000,false",
        ))
        .stdout(predicate::str::contains(
            "USD,$,10000000.01,10000000.01,invalid,,false",
        ));
}

#[test]
fn test_minimum_flags_error() {
    let csv = common::amounts_csv(&["USD,5", "USD,10"]);

    let mut cmd = Command::new(cargo_bin!("collective-payouts"));
    cmd.arg("amounts").arg(csv.path()).arg("--min").arg("1000");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("USD,$,5,5,invalid,,true"))
        .stdout(predicate::str::contains("USD,$,10,10.00,valid,1000,false"));
}

#[test]
fn test_zero_precision() {
    let csv = common::amounts_csv(&["JPY,1500", "JPY,1500.5"]);

    let mut cmd = Command::new(cargo_bin!("collective-payouts"));
    cmd.arg("amounts")
        .arg(csv.path())
        .arg("--precision")
        .arg("0")
        .arg("--currency-display")
        .arg("code");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("JPY,JPY,1500,1500,valid,1500,false"))
        .stdout(predicate::str::contains("JPY,JPY,1500.5,1500.5,invalid,,false"));
}

#[test]
fn test_precision_out_of_range() {
    let csv = common::amounts_csv(&["USD,1"]);

    let mut cmd = Command::new(cargo_bin!("collective-payouts"));
    cmd.arg("amounts").arg(csv.path()).arg("--precision").arg("19");

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Precision must be at most 18"));
}
