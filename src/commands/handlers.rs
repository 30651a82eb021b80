//! Command handlers: translate parsed commands into address book operations
//! and one-line results.
//!
//! Handlers return `CommandResult<String>`; [`dispatch`] renders any error
//! to its display string so nothing propagates past the command boundary.
//! A missing contact is a normal "not found" result, never an error.

use crate::book::AddressBook;
use crate::domain::Birthday;
use crate::error::{CommandError, CommandResult};
use crate::models::Record;
use chrono::NaiveDate;
use tracing::debug;

use super::parser::Command;

/// `add <name> <phone> [birthday]` - find-or-update.
///
/// An existing name gets the phone (and birthday, if given) appended to its
/// record; a new name gets a freshly built record. Both paths are
/// all-or-nothing: every argument is validated before the book or the
/// record is touched, so a bad phone or birthday changes nothing.
pub fn add_contact(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let (name, phone, birthday) = match args {
        [name, phone] => (name, phone, None),
        [name, phone, birthday] => (name, phone, Some(birthday.as_str())),
        _ => return Err(CommandError::Usage("add <name> <phone> [birthday]")),
    };
    let birthday = birthday.map(Birthday::new).transpose()?;

    if let Some(record) = book.find_mut(name) {
        record.add_phone(phone)?;
        if let Some(b) = birthday {
            record.set_birthday(b);
        }
        return Ok("Contact updated.".to_string());
    }

    let mut record = Record::new(name.as_str())?;
    record.add_phone(phone)?;
    if let Some(b) = birthday {
        record.set_birthday(b);
    }
    book.add_record(record);
    Ok("Contact added.".to_string())
}

/// `change <name> <old> <new>` - replace a phone number.
pub fn change_phone(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let [name, old, new] = args else {
        return Err(CommandError::Usage("change <name> <old-phone> <new-phone>"));
    };
    match book.find_mut(name) {
        Some(record) => {
            record.edit_phone(old, new)?;
            Ok(format!("Phone number updated for contact {}.", name))
        }
        None => Ok(not_found(name)),
    }
}

/// `phone <name>` - show a contact's phones.
pub fn show_phone(book: &AddressBook, args: &[String]) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::Usage("phone <name>"));
    };
    match book.find(name) {
        Some(record) => {
            let phones = record
                .phones()
                .iter()
                .map(|p| p.as_str())
                .collect::<Vec<_>>()
                .join(", ");
            Ok(format!("{}'s phones: {}", name, phones))
        }
        None => Ok(not_found(name)),
    }
}

/// `all` - list every contact, one rendered record per line.
pub fn list_contacts(book: &AddressBook) -> CommandResult<String> {
    if book.is_empty() {
        return Ok("Address book is empty.".to_string());
    }
    let mut lines = vec!["Contacts in address book:".to_string()];
    lines.extend(book.iter().map(|record| record.to_string()));
    Ok(lines.join("\n"))
}

/// `add-birthday <name> <DD.MM.YYYY>` - set (or overwrite) a birthday.
pub fn add_birthday(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let [name, birthday] = args else {
        return Err(CommandError::Usage("add-birthday <name> <DD.MM.YYYY>"));
    };
    match book.find_mut(name) {
        Some(record) => {
            record.add_birthday(birthday)?;
            Ok(format!("Birthday added for contact {}.", name))
        }
        None => Ok(not_found(name)),
    }
}

/// `show-birthday <name>` - show a contact's birthday.
pub fn show_birthday(book: &AddressBook, args: &[String]) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::Usage("show-birthday <name>"));
    };
    match book.find(name) {
        Some(record) => match record.birthday() {
            Some(birthday) => Ok(format!("{}'s birthday is on {}.", name, birthday)),
            None => Ok(format!("Birthday not set for contact {}.", name)),
        },
        None => Ok(not_found(name)),
    }
}

/// `birthdays [days]` - contacts whose birthday falls within `days` of
/// `reference` (inclusive on both ends). `days` defaults to the configured
/// window.
pub fn upcoming_birthdays(
    book: &AddressBook,
    args: &[String],
    default_window_days: u64,
    reference: NaiveDate,
) -> CommandResult<String> {
    let days = match args {
        [] => default_window_days,
        [raw] => raw
            .parse::<u64>()
            .map_err(|_| CommandError::InvalidDays(raw.clone()))?,
        _ => return Err(CommandError::Usage("birthdays [days]")),
    };

    let upcoming = book.upcoming_birthdays(days, reference);
    if upcoming.is_empty() {
        return Ok(format!(
            "No upcoming birthdays within the next {} days.",
            days
        ));
    }
    let mut lines = vec!["Upcoming birthdays:".to_string()];
    for record in upcoming {
        // Records in the result always carry a birthday.
        if let Some(birthday) = record.birthday() {
            lines.push(format!("{} on {}", record.name(), birthday));
        }
    }
    Ok(lines.join("\n"))
}

/// `remove <name>` - delete a contact.
pub fn remove_contact(book: &mut AddressBook, args: &[String]) -> CommandResult<String> {
    let [name] = args else {
        return Err(CommandError::Usage("remove <name>"));
    };
    match book.delete(name) {
        Some(_) => Ok(format!("Contact {} removed successfully.", name)),
        None => Ok(not_found(name)),
    }
}

fn not_found(name: &str) -> String {
    format!("Contact {} not found.", name)
}

/// Run one parsed command against the book and render the result line.
///
/// Validation and usage errors stop here: they come back as their display
/// string and the loop keeps going. `Command::Exit` is handled by the
/// caller, not here.
pub fn dispatch(
    command: &Command,
    args: &[String],
    book: &mut AddressBook,
    default_window_days: u64,
    reference: NaiveDate,
) -> String {
    debug!(?command, args = args.len(), "dispatching command");
    let result = match command {
        Command::Hello => Ok("How can I help you?".to_string()),
        Command::Add => add_contact(book, args),
        Command::Change => change_phone(book, args),
        Command::Phone => show_phone(book, args),
        Command::All => list_contacts(book),
        Command::AddBirthday => add_birthday(book, args),
        Command::ShowBirthday => show_birthday(book, args),
        Command::Birthdays => upcoming_birthdays(book, args, default_window_days, reference),
        Command::Remove => remove_contact(book, args),
        Command::Exit => Ok("Good bye!".to_string()),
        Command::Unknown(_) => Ok("Invalid command.".to_string()),
    };
    result.unwrap_or_else(|err| err.to_string())
}
