//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (errors, IDs, state machine trait)
//! - `registration` - Name and date-of-birth validation, retry budget and flow states

pub mod foundation;
pub mod registration;
