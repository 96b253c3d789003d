//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the application and the outside world. Adapters implement these ports.
//!
//! - `Console` - line-oriented prompt/answer interaction with the user

mod console;

pub use console::{Console, ConsoleError};
