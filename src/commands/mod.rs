//! Command parsing and handling for the assistant bot.

pub mod handlers;
pub mod parser;

pub use handlers::{
    add_birthday, add_contact, change_phone, dispatch, list_contacts, remove_contact,
    show_birthday, show_phone, upcoming_birthdays,
};
pub use parser::{parse_input, Command, ParsedInput};
