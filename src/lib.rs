//! Contact Book - an in-memory contact directory behind a line-oriented
//! assistant bot.
//!
//! The core is the data model and its validation/query logic: validated
//! field values, contact records, the name-keyed address book, and the
//! upcoming-birthdays window query. The command layer on top translates
//! parsed input lines into book operations and one-line replies.
//!
//! # Architecture
//!
//! - **domain**: validated value objects (name, phone, birthday)
//! - **models**: the contact record built from domain values
//! - **book**: the address book container and the birthday-window query
//! - **commands**: line parsing and command handlers
//! - **repl**: the interactive loop over any reader/writer pair
//! - **error**: custom error types for precise error handling
//! - **config**: configuration management from environment variables

pub mod book;
pub mod commands;
pub mod config;
pub mod domain;
pub mod error;
pub mod models;
pub mod repl;

pub use book::AddressBook;
pub use commands::{dispatch, parse_input, Command, ParsedInput};
pub use config::Config;
pub use domain::{Birthday, ContactName, PhoneNumber, ValidationError};
pub use error::{CommandError, CommandResult, ConfigError, ConfigResult};
pub use models::Record;
