//! In-memory console for tests and demos.
//!
//! Answers come from a queue; everything shown is recorded the way a
//! terminal would display it, prompts and answers on the same line.

use async_trait::async_trait;
use std::collections::VecDeque;

use crate::ports::{Console, ConsoleError};

/// One queued reaction to a prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptedInput {
    Line(String),
    /// Behaves like Ctrl-C.
    Cancel,
    /// Behaves like a line of invalid UTF-8.
    NotText,
}

/// Console port that replays scripted answers.
///
/// Once the script runs dry every read is cancelled, like end of input.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    inputs: VecDeque<ScriptedInput>,
    transcript: Vec<String>,
    prompts_seen: usize,
}

impl ScriptedConsole {
    pub fn new<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            inputs: lines
                .into_iter()
                .map(|line| ScriptedInput::Line(line.into()))
                .collect(),
            ..Default::default()
        }
    }

    /// Queues a further reaction after the existing ones.
    pub fn then(mut self, input: ScriptedInput) -> Self {
        self.inputs.push_back(input);
        self
    }

    /// Everything shown so far, one entry per terminal line.
    pub fn transcript(&self) -> &[String] {
        &self.transcript
    }

    /// Transcript lines that start with `prefix`.
    pub fn lines_starting_with(&self, prefix: &str) -> Vec<&str> {
        self.transcript
            .iter()
            .map(String::as_str)
            .filter(|line| line.starts_with(prefix))
            .collect()
    }

    /// How many prompts were shown.
    pub fn prompts_seen(&self) -> usize {
        self.prompts_seen
    }

    /// Answers not yet consumed.
    pub fn remaining(&self) -> usize {
        self.inputs.len()
    }
}

#[async_trait]
impl Console for ScriptedConsole {
    async fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.prompts_seen += 1;
        match self.inputs.pop_front() {
            Some(ScriptedInput::Line(line)) => {
                self.transcript.push(format!("{}{}", prompt, line));
                Ok(line.trim().to_string())
            }
            Some(ScriptedInput::NotText) => {
                self.transcript.push(prompt.to_string());
                Err(ConsoleError::NotText)
            }
            Some(ScriptedInput::Cancel) | None => {
                self.transcript.push(prompt.to_string());
                Err(ConsoleError::Cancelled)
            }
        }
    }

    async fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.transcript.push(line.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_lines_trimmed_and_records_transcript() {
        let mut console = ScriptedConsole::new(["  Marie  "]);
        let answer = console.read_line("Name: ").await.unwrap();
        console.write_line("hello").await.unwrap();

        assert_eq!(answer, "Marie");
        assert_eq!(console.transcript(), ["Name:   Marie  ", "hello"]);
        assert_eq!(console.prompts_seen(), 1);
    }

    #[tokio::test]
    async fn cancels_once_script_is_exhausted() {
        let mut console = ScriptedConsole::new(Vec::<String>::new());
        let err = console.read_line("Name: ").await.unwrap_err();
        assert!(err.is_cancelled());
    }

    #[tokio::test]
    async fn replays_scripted_failures_in_order() {
        let mut console = ScriptedConsole::new(["first"])
            .then(ScriptedInput::NotText)
            .then(ScriptedInput::Cancel);

        assert_eq!(console.read_line("> ").await.unwrap(), "first");
        assert!(matches!(console.read_line("> ").await, Err(ConsoleError::NotText)));
        assert!(matches!(console.read_line("> ").await, Err(ConsoleError::Cancelled)));
        assert_eq!(console.remaining(), 0);
    }

    #[tokio::test]
    async fn filters_transcript_by_prefix() {
        let mut console = ScriptedConsole::default();
        console.write_line("Name : Marie").await.unwrap();
        console.write_line("Age  : 30").await.unwrap();
        assert_eq!(console.lines_starting_with("Name"), vec!["Name : Marie"]);
    }
}
