//! Terminal console on the process's stdin and stdout.
//!
//! Lines are read on a dedicated thread and handed over a channel, so a
//! pending read never keeps the runtime alive at shutdown and can be raced
//! against Ctrl-C.

use async_trait::async_trait;
use std::io::{self, BufRead};
use std::thread;
use tokio::io::{AsyncWriteExt, Stdout};
use tokio::sync::mpsc;

use crate::ports::{Console, ConsoleError};

type RawLine = io::Result<Vec<u8>>;

/// Console port backed by the real terminal.
pub struct StdioConsole {
    lines: Option<mpsc::Receiver<RawLine>>,
    stdout: Stdout,
}

impl StdioConsole {
    pub fn new() -> Self {
        Self {
            lines: None,
            stdout: tokio::io::stdout(),
        }
    }

    fn lines(&mut self) -> &mut mpsc::Receiver<RawLine> {
        self.lines.get_or_insert_with(spawn_stdin_reader)
    }
}

impl Default for StdioConsole {
    fn default() -> Self {
        Self::new()
    }
}

// Sends one message per line; an empty vector marks end of input.
fn spawn_stdin_reader() -> mpsc::Receiver<RawLine> {
    let (tx, rx) = mpsc::channel(1);
    thread::spawn(move || {
        let stdin = io::stdin();
        let mut handle = stdin.lock();
        loop {
            let mut buf = Vec::new();
            let result = handle.read_until(b'\n', &mut buf).map(|_| buf);
            let done = !matches!(&result, Ok(line) if !line.is_empty());
            if tx.blocking_send(result).is_err() || done {
                break;
            }
        }
    });
    rx
}

#[async_trait]
impl Console for StdioConsole {
    async fn read_line(&mut self, prompt: &str) -> Result<String, ConsoleError> {
        self.stdout.write_all(prompt.as_bytes()).await?;
        self.stdout.flush().await?;

        let received = tokio::select! {
            line = self.lines().recv() => line,
            _ = tokio::signal::ctrl_c() => {
                tracing::debug!("Interrupt received while waiting for input");
                return Err(ConsoleError::Cancelled);
            }
        };

        let raw = match received {
            Some(Ok(raw)) if !raw.is_empty() => raw,
            Some(Err(e)) => return Err(ConsoleError::Io(e)),
            _ => {
                tracing::debug!("End of input reached");
                return Err(ConsoleError::Cancelled);
            }
        };

        let line = String::from_utf8(raw).map_err(|_| ConsoleError::NotText)?;
        Ok(line.trim().to_string())
    }

    async fn write_line(&mut self, line: &str) -> Result<(), ConsoleError> {
        self.stdout.write_all(line.as_bytes()).await?;
        self.stdout.write_all(b"\n").await?;
        self.stdout.flush().await?;
        Ok(())
    }
}
