//! Terminal input and output collaborators.
//!
//! Games never touch stdin/stdout directly. They talk to a [`Console`],
//! which is [`StdConsole`] in the binary and [`ScriptedConsole`] in tests.

use std::collections::VecDeque;
use std::io::{BufRead, Write};

use derive_more::Display;
use tracing::{debug, instrument, trace};

/// Error raised by a console read.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum ConsoleError {
    /// Input reached end of file.
    #[display("Input closed")]
    Closed,

    /// The underlying stream failed.
    #[display("Console I/O failed: {} at {}:{}", message, file, line)]
    Io {
        /// Error message.
        message: String,
        /// Line number where error occurred.
        line: u32,
        /// Source file where error occurred.
        file: &'static str,
    },
}

impl ConsoleError {
    /// Creates an I/O error with caller location tracking.
    #[track_caller]
    pub fn io(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self::Io {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }

    /// Returns true if the error only means the player stopped typing.
    pub fn is_closed(&self) -> bool {
        matches!(self, Self::Closed)
    }
}

impl std::error::Error for ConsoleError {}

impl From<std::io::Error> for ConsoleError {
    #[track_caller]
    fn from(err: std::io::Error) -> Self {
        Self::io(err.to_string())
    }
}

/// Line-oriented terminal capability.
pub trait Console {
    /// Blocks until the next line of input arrives, without its line ending.
    fn read_line(&mut self) -> Result<String, ConsoleError>;

    /// Writes `text` followed by a newline.
    fn print(&mut self, text: &str);
}

/// Console bound to the process's stdin and stdout.
#[derive(Debug, Default)]
pub struct StdConsole;

impl StdConsole {
    /// Creates a new stdio console.
    pub fn new() -> Self {
        Self
    }
}

impl Console for StdConsole {
    #[instrument(skip(self))]
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        std::io::stdout().flush()?;

        let mut buf = String::new();
        let read = std::io::stdin().lock().read_line(&mut buf)?;
        if read == 0 {
            debug!("Stdin reached EOF");
            return Err(ConsoleError::Closed);
        }

        let line = buf.trim_end_matches(['\r', '\n']).to_string();
        trace!(%line, "Read line");
        Ok(line)
    }

    fn print(&mut self, text: &str) {
        println!("{text}");
    }
}

/// In-memory console fed from a fixed script of input lines.
///
/// Every printed line is captured so tests can inspect the transcript.
/// Reading past the end of the script yields [`ConsoleError::Closed`].
#[derive(Debug, Clone, Default)]
pub struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    /// Creates a console that will answer reads with `lines`, in order.
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: lines.into_iter().map(Into::into).collect(),
            output: Vec::new(),
        }
    }

    /// Returns every line printed so far.
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Returns the printed output joined by newlines.
    pub fn transcript(&self) -> String {
        self.output.join("\n")
    }

    /// Returns how many scripted input lines have not been consumed.
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    /// Returns true if any printed line contains `needle`.
    pub fn printed(&self, needle: &str) -> bool {
        self.output.iter().any(|line| line.contains(needle))
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> Result<String, ConsoleError> {
        self.input.pop_front().ok_or(ConsoleError::Closed)
    }

    fn print(&mut self, text: &str) {
        self.output.push(text.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scripted_reads_in_order() {
        let mut console = ScriptedConsole::new(["a", "b"]);
        assert_eq!(console.read_line().unwrap(), "a");
        assert_eq!(console.read_line().unwrap(), "b");
        assert_eq!(console.read_line(), Err(ConsoleError::Closed));
    }

    #[test]
    fn test_scripted_captures_output() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        console.print("hello");
        console.print("world");
        assert_eq!(console.output(), ["hello", "world"]);
        assert_eq!(console.transcript(), "hello\nworld");
        assert!(console.printed("wor"));
    }

    #[test]
    fn test_io_error_tracks_location() {
        let err = ConsoleError::io("broken pipe");
        assert!(!err.is_closed());
        assert!(err.to_string().contains("broken pipe"));
        assert!(err.to_string().contains("console.rs"));
    }
}
