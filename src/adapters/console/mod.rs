//! Console adapters.
//!
//! Implementations of the Console port for different environments.
//!
//! ## Available Adapters
//!
//! - `StdioConsole` - Terminal on stdin/stdout, Ctrl-C cancels the pending read
//! - `ScriptedConsole` - Canned answers and a recorded transcript, for tests
//!
//! ## Usage
//!
//! ```ignore
//! use registration_flow::adapters::console::{ScriptedConsole, StdioConsole};
//!
//! // Interactive
//! let mut console = StdioConsole::new();
//!
//! // Scripted
//! let mut console = ScriptedConsole::new(["jean-luc", "2000-05-20", "n"]);
//! ```

mod scripted;
mod stdio;

pub use scripted::{ScriptedConsole, ScriptedInput};
pub use stdio::StdioConsole;
