use assert_cmd::Command;
use predicates::prelude::*;

#[test]
fn deleting_contacts() {
    // Attempt to delete non existing contact, not an error
    Command::cargo_bin("rusty-contacts")
        .unwrap()
        .args(&["delete", "--id", "42"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No contact with id 42, nothing deleted"));

    Command::cargo_bin("rusty-contacts")
        .unwrap()
        .args(&["delete", "--id", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact Karim Ali deleted successfully"));

    Command::cargo_bin("rusty-contacts")
        .unwrap()
        .args(&["delete", "--id", "two"])
        .assert()
        .failure();
}
