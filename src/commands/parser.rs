//! Command-line parsing for the assistant bot.

/// The closed set of commands the bot understands.
///
/// Several commands have aliases (`change`/`edit`, `phone`/`get`,
/// `all`/`list`, `remove`/`delete`, `exit`/`close`); the parser folds each
/// alias into one variant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `hello` - greeting
    Hello,
    /// `add <name> <phone> [birthday]` - add or update a contact
    Add,
    /// `change <name> <old> <new>` - replace a phone number
    Change,
    /// `phone <name>` - show a contact's phones
    Phone,
    /// `all` - list every contact
    All,
    /// `add-birthday <name> <DD.MM.YYYY>` - set a contact's birthday
    AddBirthday,
    /// `show-birthday <name>` - show a contact's birthday
    ShowBirthday,
    /// `birthdays [days]` - contacts with birthdays in the coming window
    Birthdays,
    /// `remove <name>` - delete a contact
    Remove,
    /// `exit` / `close` - leave the loop
    Exit,
    /// Anything else
    Unknown(String),
}

impl Command {
    fn from_token(token: &str) -> Self {
        match token {
            "hello" => Self::Hello,
            "add" => Self::Add,
            "change" | "edit" => Self::Change,
            "phone" | "get" => Self::Phone,
            "all" | "list" => Self::All,
            "add-birthday" => Self::AddBirthday,
            "show-birthday" => Self::ShowBirthday,
            "birthdays" => Self::Birthdays,
            "remove" | "delete" => Self::Remove,
            "exit" | "close" => Self::Exit,
            other => Self::Unknown(other.to_string()),
        }
    }
}

/// A parsed input line: the command plus its raw arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedInput {
    pub command: Command,
    pub args: Vec<String>,
}

/// Split an input line into a command and arguments.
///
/// The command token is matched case-insensitively; arguments keep their
/// original form. Returns `None` for blank lines.
pub fn parse_input(line: &str) -> Option<ParsedInput> {
    let mut parts = line.split_whitespace();
    let command = Command::from_token(&parts.next()?.to_lowercase());
    let args = parts.map(str::to_string).collect();
    Some(ParsedInput { command, args })
}
