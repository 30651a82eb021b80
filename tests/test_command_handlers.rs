//! Integration tests for the command layer.
//!
//! These drive parsed command lines through `dispatch` and assert on the
//! exact reply strings, the contract the interactive loop depends on.

use chrono::NaiveDate;
use contact_book::{dispatch, parse_input, AddressBook, Command};

const REF_DATE: (i32, u32, u32) = (2024, 6, 10);

fn run(book: &mut AddressBook, line: &str) -> String {
    let parsed = parse_input(line).expect("non-empty command line");
    let reference = NaiveDate::from_ymd_opt(REF_DATE.0, REF_DATE.1, REF_DATE.2).unwrap();
    dispatch(&parsed.command, &parsed.args, book, 7, reference)
}

#[test]
fn test_add_new_and_existing_contact() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "add Alice 0501234567"), "Contact added.");
    assert_eq!(run(&mut book, "add Alice 0509999999"), "Contact updated.");
    assert_eq!(book.len(), 1);
    assert_eq!(book.find("Alice").unwrap().phones().len(), 2);
}

#[test]
fn test_add_with_birthday() {
    let mut book = AddressBook::new();
    assert_eq!(
        run(&mut book, "add Alice 0501234567 15.06.1990"),
        "Contact added."
    );
    assert_eq!(
        run(&mut book, "show-birthday Alice"),
        "Alice's birthday is on 15.06.1990."
    );
}

#[test]
fn test_add_invalid_phone_reports_and_inserts_nothing() {
    let mut book = AddressBook::new();
    assert_eq!(
        run(&mut book, "add Alice 12345"),
        "Invalid phone number: 12345. It should be exactly 10 digits."
    );
    assert!(book.is_empty());
}

#[test]
fn test_add_to_existing_is_all_or_nothing() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0501234567");
    assert_eq!(
        run(&mut book, "add Alice 0509999999 31.02.2020"),
        "Invalid date: 31.02.2020. Use DD.MM.YYYY"
    );

    // The bad birthday must not leave the new phone behind.
    let alice = book.find("Alice").unwrap();
    assert_eq!(alice.phones().len(), 1);
    assert!(alice.find_phone("0509999999").is_none());
    assert!(alice.birthday().is_none());
}

#[test]
fn test_change_phone() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0501234567");
    assert_eq!(
        run(&mut book, "change Alice 0501234567 0507654321"),
        "Phone number updated for contact Alice."
    );
    assert!(book.find("Alice").unwrap().find_phone("0507654321").is_some());
}

#[test]
fn test_change_unknown_contact() {
    let mut book = AddressBook::new();
    assert_eq!(
        run(&mut book, "change Ghost 0501234567 0507654321"),
        "Contact Ghost not found."
    );
}

#[test]
fn test_phone_lists_all_numbers() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0501234567");
    run(&mut book, "add Alice 0509999999");
    assert_eq!(
        run(&mut book, "phone Alice"),
        "Alice's phones: 0501234567, 0509999999"
    );
}

#[test]
fn test_all_lists_rendered_records_in_name_order() {
    let mut book = AddressBook::new();
    run(&mut book, "add Bob 0502222222");
    run(&mut book, "add Alice 0501111111 15.06.1990");
    assert_eq!(
        run(&mut book, "all"),
        "Contacts in address book:\n\
         Contact name: Alice, phones: 0501111111, birthday: 15.06.1990\n\
         Contact name: Bob, phones: 0502222222, birthday: N/A"
    );
}

#[test]
fn test_all_on_empty_book() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "all"), "Address book is empty.");
}

#[test]
fn test_add_birthday_and_overwrite() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0501234567");
    assert_eq!(
        run(&mut book, "add-birthday Alice 15.06.1990"),
        "Birthday added for contact Alice."
    );
    run(&mut book, "add-birthday Alice 16.07.1991");
    assert_eq!(
        run(&mut book, "show-birthday Alice"),
        "Alice's birthday is on 16.07.1991."
    );
}

#[test]
fn test_add_birthday_invalid_date() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0501234567");
    assert_eq!(
        run(&mut book, "add-birthday Alice 31.02.2020"),
        "Invalid date: 31.02.2020. Use DD.MM.YYYY"
    );
    assert!(book.find("Alice").unwrap().birthday().is_none());
}

#[test]
fn test_show_birthday_not_set() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0501234567");
    assert_eq!(
        run(&mut book, "show-birthday Alice"),
        "Birthday not set for contact Alice."
    );
}

#[test]
fn test_birthdays_within_default_window() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0501234567 15.06.1990");
    run(&mut book, "add Bob 0509999999 20.07.1985");
    assert_eq!(
        run(&mut book, "birthdays"),
        "Upcoming birthdays:\nAlice on 15.06.1990"
    );
}

#[test]
fn test_birthdays_with_explicit_window() {
    let mut book = AddressBook::new();
    run(&mut book, "add Bob 0509999999 20.07.1985");
    assert_eq!(
        run(&mut book, "birthdays 45"),
        "Upcoming birthdays:\nBob on 20.07.1985"
    );
}

#[test]
fn test_birthdays_none_upcoming() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0501234567 01.01.1990");
    assert_eq!(
        run(&mut book, "birthdays"),
        "No upcoming birthdays within the next 7 days."
    );
}

#[test]
fn test_birthdays_huge_day_count_still_replies() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0501234567 15.06.1990");
    assert_eq!(
        run(&mut book, "birthdays 100000000"),
        "Upcoming birthdays:\nAlice on 15.06.1990"
    );
}

#[test]
fn test_birthdays_bad_day_count() {
    let mut book = AddressBook::new();
    assert_eq!(
        run(&mut book, "birthdays soon"),
        "Invalid number of days: soon"
    );
}

#[test]
fn test_remove_contact() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0501234567");
    assert_eq!(
        run(&mut book, "remove Alice"),
        "Contact Alice removed successfully."
    );
    assert_eq!(run(&mut book, "remove Alice"), "Contact Alice not found.");
}

#[test]
fn test_aliases_hit_same_handlers() {
    let mut book = AddressBook::new();
    run(&mut book, "add Alice 0501234567");
    assert_eq!(
        run(&mut book, "edit Alice 0501234567 0507654321"),
        "Phone number updated for contact Alice."
    );
    assert_eq!(run(&mut book, "get Alice"), "Alice's phones: 0507654321");
    assert!(run(&mut book, "list").starts_with("Contacts in address book:"));
    assert_eq!(
        run(&mut book, "delete Alice"),
        "Contact Alice removed successfully."
    );
}

#[test]
fn test_usage_errors_are_one_liners() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "add"), "Usage: add <name> <phone> [birthday]");
    assert_eq!(
        run(&mut book, "change Alice"),
        "Usage: change <name> <old-phone> <new-phone>"
    );
    assert_eq!(run(&mut book, "phone"), "Usage: phone <name>");
}

#[test]
fn test_unknown_command() {
    let mut book = AddressBook::new();
    assert_eq!(run(&mut book, "frobnicate"), "Invalid command.");
}

#[test]
fn test_parse_exit_aliases() {
    assert_eq!(parse_input("exit").unwrap().command, Command::Exit);
    assert_eq!(parse_input("close").unwrap().command, Command::Exit);
}
