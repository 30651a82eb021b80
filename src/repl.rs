//! The line-oriented command loop.
//!
//! Generic over reader and writer so tests can drive the loop with
//! in-memory buffers instead of stdin/stdout.

use crate::book::AddressBook;
use crate::commands::{dispatch, parse_input, Command};
use crate::config::Config;
use chrono::Local;
use std::io::{BufRead, Write};
use tracing::info;

const PROMPT: &str = "Enter a command: ";

/// Run the command loop until `exit`/`close` or end of input.
///
/// Each line is parsed, dispatched against the book, and answered with one
/// result block. Bad input never ends the loop; only `exit`, `close`, or
/// EOF do.
pub fn run<R: BufRead, W: Write>(
    book: &mut AddressBook,
    config: &Config,
    input: R,
    mut output: W,
) -> std::io::Result<()> {
    writeln!(output, "Welcome to the assistant bot!")?;

    write!(output, "{}", PROMPT)?;
    output.flush()?;
    for line in input.lines() {
        let line = line?;
        if let Some(parsed) = parse_input(&line) {
            if parsed.command == Command::Exit {
                writeln!(output, "Good bye!")?;
                info!("session closed by user");
                return Ok(());
            }
            let reference = Local::now().date_naive();
            let reply = dispatch(
                &parsed.command,
                &parsed.args,
                book,
                config.birthday_window_days,
                reference,
            );
            writeln!(output, "{}", reply)?;
        }
        write!(output, "{}", PROMPT)?;
        output.flush()?;
    }

    info!("input closed, leaving command loop");
    Ok(())
}
