//! Application layer - Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! The domain stays free of I/O; everything that talks to the user lives here.

pub mod handlers;

pub use handlers::{
    FlowError, FlowOutcome, FlowSettings, PromptOutcome, RegistrationFlow, RetryPrompt,
};
