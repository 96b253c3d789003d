//! Application handlers.
//!
//! Handlers that orchestrate domain operations over the ports.

pub mod registration;

pub use registration::{
    FlowError, FlowOutcome, FlowSettings, PromptOutcome, RegistrationFlow, RetryPrompt,
};
