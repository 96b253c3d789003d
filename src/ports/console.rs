//! Console port for line-oriented user interaction.
//!
//! The registration flow only ever asks for one trimmed line at a time and
//! writes whole lines back, so that is all this port offers. Adapters decide
//! where the text comes from (a terminal, a script in tests).

use async_trait::async_trait;
use thiserror::Error;

/// Port for reading answers and writing messages.
#[async_trait]
pub trait Console: Send {
    /// Shows `prompt` and waits for a single line.
    ///
    /// Returns the line with surrounding whitespace trimmed, or
    /// `ConsoleError::Cancelled` if the user interrupted or input ended.
    async fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError>;

    /// Writes `line` followed by a newline.
    async fn write_line(&mut self, line: &str) -> Result<(), ConsoleError>;
}

/// Errors raised while talking to the user.
#[derive(Debug, Error)]
pub enum ConsoleError {
    /// Interrupt signal or end of input. Ends the program, never retried.
    #[error("input cancelled")]
    Cancelled,

    /// The raw line was not text. An integration fault, not a user mistake.
    #[error("input is not valid UTF-8 text")]
    NotText,

    #[error("console I/O failed: {0}")]
    Io(#[from] std::io::Error),
}

impl ConsoleError {
    pub fn is_cancelled(&self) -> bool {
        matches!(self, ConsoleError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_cancelled_is_cancellation() {
        assert!(ConsoleError::Cancelled.is_cancelled());
        assert!(!ConsoleError::NotText.is_cancelled());
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed");
        assert!(!ConsoleError::from(io).is_cancelled());
    }

    #[test]
    fn messages_are_readable() {
        assert_eq!(ConsoleError::Cancelled.to_string(), "input cancelled");
        assert_eq!(ConsoleError::NotText.to_string(), "input is not valid UTF-8 text");
    }
}
