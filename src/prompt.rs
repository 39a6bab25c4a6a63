//! Formatting and validated-input helpers shared by every game.

use std::fmt::Display;

use tracing::{debug, instrument};

use crate::console::{Console, ConsoleError};

/// Accepted answers to a yes/no question.
pub const YES_NO: [&str; 4] = ["y", "yes", "n", "no"];

/// Joins items for a prompt, e.g. `1, 2, or 3`.
///
/// One item is returned as-is and two items are joined with just the word.
pub fn joinor<T: Display>(items: &[T]) -> String {
    joinor_with(items, ",", "or")
}

/// Like [`joinor`] with a custom separator and final word.
pub fn joinor_with<T: Display>(items: &[T], separator: &str, word: &str) -> String {
    match items {
        [] => String::new(),
        [only] => only.to_string(),
        [first, second] => format!("{first} {word} {second}"),
        [head @ .., last] => {
            let head = head
                .iter()
                .map(|item| format!("{item}{separator}"))
                .collect::<Vec<_>>()
                .join(" ");
            format!("{head} {word} {last}")
        }
    }
}

/// Prompts until the answer matches one of `options`, case-insensitively.
///
/// Returns the trimmed answer, lowercased.
#[instrument(skip(console, error_msg))]
pub fn retrieve(
    console: &mut dyn Console,
    prompt: &str,
    options: &[&str],
    error_msg: &str,
) -> Result<String, ConsoleError> {
    loop {
        console.print(prompt);
        let answer = console.read_line()?.trim().to_lowercase();

        if options.iter().any(|option| option.eq_ignore_ascii_case(&answer)) {
            return Ok(answer);
        }

        debug!(%answer, "Rejected answer");
        console.print(error_msg);
    }
}

/// Asks a yes/no question and returns true for yes.
pub fn ask_yes_no(console: &mut dyn Console, prompt: &str) -> Result<bool, ConsoleError> {
    let answer = retrieve(console, prompt, &YES_NO, "You must enter y or n.")?;
    Ok(answer.starts_with('y'))
}

/// Prompts for a non-empty name.
///
/// `reject` may veto a name by returning the message to show the player.
#[instrument(skip(console, reject))]
pub fn ask_name<F>(
    console: &mut dyn Console,
    prompt: &str,
    reject: F,
) -> Result<String, ConsoleError>
where
    F: Fn(&str) -> Option<&'static str>,
{
    loop {
        console.print(prompt);
        let name = console.read_line()?.trim().to_string();

        if name.is_empty() {
            console.print("Sorry, you must enter a name.");
            continue;
        }

        match reject(&name) {
            Some(message) => {
                debug!(%name, "Rejected name");
                console.print(message);
            }
            None => return Ok(name),
        }
    }
}
