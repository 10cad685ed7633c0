use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn add_contact() {
    // Fresh process: four seed contacts, next id is 5
    Command::cargo_bin("rusty-contacts")
        .unwrap()
        .args(&[
            "add",
            "--name",
            "Zoe",
            "--phone",
            "1234567890",
            "--gender",
            "female",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 5 added successfully"));

    // Email is optional but has to look like one when given
    Command::cargo_bin("rusty-contacts")
        .unwrap()
        .args(&[
            "add",
            "--name",
            "Alice",
            "--phone",
            "(202) 555-0199",
            "--email",
            "alice@example.com",
            "--gender",
            "female",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 5 added successfully"));

    // Starting empty allocates from 1
    Command::cargo_bin("rusty-contacts")
        .unwrap()
        .args(&[
            "add",
            "--seed",
            "empty",
            "--name",
            "Alice",
            "--phone",
            "1234567890",
            "--gender",
            "male",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact 1 added successfully"));
}

#[test]
fn invalid_inputs() {
    // INVALID COMMAND
    Command::cargo_bin("rusty-contacts")
        .unwrap()
        .args(&["and", "--name", "Alice"])
        .assert()
        .failure();

    // EMPTY NAME
    Command::cargo_bin("rusty-contacts")
        .unwrap()
        .args(&[
            "add",
            "--name",
            "  ",
            "--phone",
            "1234567890",
            "--gender",
            "male",
        ])
        .assert()
        .failure()
        .stderr(predicate::str::contains("name: Name is required"));

    // SHORT PHONE AND BAD EMAIL, BOTH REPORTED
    Command::cargo_bin("rusty-contacts")
        .unwrap()
        .args(&[
            "add",
            "--name",
            "Alice",
            "--phone",
            "555-12",
            "--email",
            "not-an-email",
            "--gender",
            "female",
        ])
        .assert()
        .failure()
        .stderr(
            predicate::str::contains("phone: Please enter a valid phone number")
                .and(predicate::str::contains("email: Please enter a valid email address")),
        );

    // UNKNOWN GENDER
    Command::cargo_bin("rusty-contacts")
        .unwrap()
        .args(&[
            "add",
            "--name",
            "Alice",
            "--phone",
            "1234567890",
            "--gender",
            "other",
        ])
        .assert()
        .failure();

    // UNKNOWN SEED CHOICE
    Command::cargo_bin("rusty-contacts")
        .unwrap()
        .args(&["list", "--seed", "json"])
        .assert()
        .failure();
}
