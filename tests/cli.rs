use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn phonebook(data_dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("phonebook").unwrap();
    cmd.env_remove("PHONEBOOK_HOME")
        .env_remove("PHONEBOOK_LOG")
        .env("NO_COLOR", "1")
        .arg("--data-dir")
        .arg(data_dir);
    cmd
}

fn write_config(data_dir: &Path, json: &str) {
    fs::write(data_dir.join("config.json"), json).unwrap();
}

fn add_three_contacts(data_dir: &Path) {
    for (name, phone) in [
        ("ann", "1000000001"),
        ("bob", "1000000002"),
        ("cid", "1000000003"),
    ] {
        phonebook(data_dir)
            .args(["add", name, phone])
            .assert()
            .success();
    }
}

#[test]
fn test_add_persists_between_invocations() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .args(["add", "John", "1234567890"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added"));

    assert!(temp_dir.path().join("phone_book.bin").exists());

    phonebook(temp_dir.path())
        .args(["find", "john"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Contact name: john, birthday: none, phones: 1234567890",
        ));
}

#[test]
fn test_duplicate_name_fails() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .args(["add", "john", "1234567890"])
        .assert()
        .success();

    phonebook(temp_dir.path())
        .args(["add", "john", "5555555555"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Contact already exists: john"));

    phonebook(temp_dir.path())
        .args(["phone", "john"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1234567890"))
        .stdout(predicate::str::contains("5555555555").not());
}

#[test]
fn test_invalid_phone_is_rejected() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .args(["add", "john", "12345"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Wrong phone format"));

    assert!(!temp_dir.path().join("phone_book.bin").exists());
}

#[test]
fn test_birthday_commands() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .args(["add", "john", "1234567890"])
        .assert()
        .success();
    phonebook(temp_dir.path())
        .args(["add_b", "john", "01/12/1993"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Birthday 01/12/1993 added"));
    phonebook(temp_dir.path())
        .args(["days_to_birthday", "john"])
        .assert()
        .success()
        .stdout(predicate::str::contains("days to john's birthday"));
    phonebook(temp_dir.path())
        .args(["birthday", "366"])
        .assert()
        .success()
        .stdout(predicate::str::contains("birthday in"));
    phonebook(temp_dir.path())
        .args(["add_b", "john", "1993-12-01"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Use DD/MM/YYYY"));
}

#[test]
fn test_show_all_prints_every_page_without_a_terminal() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_three_contacts(temp_dir.path());

    phonebook(temp_dir.path())
        .args(["show_all", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 2"))
        .stdout(predicate::str::contains("Contact name: ann"))
        .stdout(predicate::str::contains("Contact name: cid"))
        .stdout(predicate::str::contains("Press Enter").not());
}

#[test]
fn test_show_all_rejects_zero_page_size() {
    let temp_dir = tempfile::tempdir().unwrap();
    phonebook(temp_dir.path())
        .args(["show_all", "0"])
        .assert()
        .failure();
}

#[test]
fn test_repl_session_autosaves() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .write_stdin(
            "add john 1234567890\nadd_phone john 5555555555\nfind 555\nchange john 0000000000 1112223333\nexit\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("Welcome to Address Book."))
        .stdout(predicate::str::contains(
            "Contact name: john, birthday: none, phones: 1234567890; 5555555555",
        ))
        .stdout(predicate::str::contains("Phonebook saved"))
        .stdout(predicate::str::contains("Good bye!"))
        .stderr(predicate::str::contains("Phone 0000000000 not found"));

    phonebook(temp_dir.path())
        .args(["phone", "john"])
        .assert()
        .success()
        .stdout(predicate::str::contains("5555555555"));
}

#[test]
fn test_repl_reports_unknown_commands_and_keeps_going() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .arg("repl")
        .write_stdin("frobnicate\nhello\nclose\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("frobnicate"))
        .stdout(predicate::str::contains("Welcome to Address Book.").count(2))
        .stdout(predicate::str::contains("Good bye!"));
}

#[test]
fn test_repl_loads_saved_book() {
    let temp_dir = tempfile::tempdir().unwrap();

    phonebook(temp_dir.path())
        .args(["add", "jane", "9876543210"])
        .assert()
        .success();

    phonebook(temp_dir.path())
        .write_stdin("find jane\ngood_bye\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Phonebook loaded (1 contacts)"))
        .stdout(predicate::str::contains("Contact name: jane"));
}

#[test]
fn test_show_all_uses_configured_page_size() {
    let temp_dir = tempfile::tempdir().unwrap();
    add_three_contacts(temp_dir.path());

    phonebook(temp_dir.path())
        .arg("show_all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact name: cid"))
        .stdout(predicate::str::contains("Page").not());

    write_config(temp_dir.path(), r#"{"page_size": 2}"#);
    phonebook(temp_dir.path())
        .arg("show_all")
        .assert()
        .success()
        .stdout(predicate::str::contains("Page 1"))
        .stdout(predicate::str::contains("Page 2"))
        .stdout(predicate::str::contains("Page 3").not())
        .stdout(predicate::str::contains("Contact name: cid"));
}

#[test]
fn test_repl_without_autoload_starts_empty() {
    let temp_dir = tempfile::tempdir().unwrap();
    phonebook(temp_dir.path())
        .args(["add", "jane", "9876543210"])
        .assert()
        .success();
    write_config(temp_dir.path(), r#"{"autoload": false}"#);

    phonebook(temp_dir.path())
        .write_stdin("find jane\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing was found for your request."))
        .stdout(predicate::str::contains("Phonebook loaded").not());
}

#[test]
fn test_repl_without_autosave_discards_changes() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_config(temp_dir.path(), r#"{"autosave": false}"#);

    phonebook(temp_dir.path())
        .write_stdin("add bob 1112223333\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Contact added"))
        .stdout(predicate::str::contains("Phonebook saved").not());

    assert!(!temp_dir.path().join("phone_book.bin").exists());
    phonebook(temp_dir.path())
        .args(["find", "bob"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing was found for your request."));
}

#[test]
fn test_configured_data_file_is_used() {
    let temp_dir = tempfile::tempdir().unwrap();
    write_config(temp_dir.path(), r#"{"data_file": "contacts.bin"}"#);

    phonebook(temp_dir.path())
        .args(["add", "john", "1234567890"])
        .assert()
        .success();

    assert!(temp_dir.path().join("contacts.bin").exists());
    assert!(!temp_dir.path().join("phone_book.bin").exists());
    phonebook(temp_dir.path())
        .args(["phone", "john"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1234567890"));
}

#[test]
fn test_repl_keeps_unreadable_book_intact() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("phone_book.bin");

    phonebook(temp_dir.path())
        .args(["add", "jane", "9876543210"])
        .assert()
        .success();
    let saved = fs::read(&data_file).unwrap();
    fs::write(&data_file, &saved[..20]).unwrap();
    let corrupted = fs::read(&data_file).unwrap();

    phonebook(temp_dir.path())
        .write_stdin("add bob 1112223333\nexit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Autosave is off"))
        .stdout(predicate::str::contains("Phonebook saved").not())
        .stdout(predicate::str::contains("Good bye!"));

    assert_eq!(fs::read(&data_file).unwrap(), corrupted);
}
