//! Registration application handlers.
//!
//! The bounded prompt and the driver that runs the registration state
//! machine over the Console port.

pub mod messages;
mod register_user;
mod retry_prompt;

pub use register_user::{FlowError, FlowOutcome, FlowSettings, RegistrationFlow};
pub use retry_prompt::{PromptOutcome, RetryPrompt};
