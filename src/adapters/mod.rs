//! Adapters - Implementations of port interfaces.
//!
//! Adapters connect the application to the outside world:
//! - `console` - Terminal and scripted implementations of the Console port

pub mod console;

pub use console::{ScriptedConsole, ScriptedInput, StdioConsole};
