//! Foundation module - Shared domain primitives.
//!
//! Contains the error taxonomy, identifiers and the state machine trait
//! used by the registration domain.

mod errors;
mod ids;
mod state_machine;

pub use errors::{DobError, ErrorCode, NameRuleViolation, ValidationError};
pub use ids::RegistrationId;
pub use state_machine::StateMachine;
