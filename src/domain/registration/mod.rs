//! Registration domain - validators, retry budget and flow states.
//!
//! Everything here is pure: no console access and no clock. The
//! application layer feeds in raw text and the reference date.

mod attempt;
mod date_of_birth;
mod name;
mod retry;
mod state;

pub use attempt::{RegistrationAttempt, RegistrationDraft};
pub use date_of_birth::{
    age_at, AgeBounds, DateFormat, DateOfBirth, DobValidator, DEFAULT_MAX_AGE, DEFAULT_MIN_AGE,
};
pub use name::{NameValidationPolicy, NameValidator, ValidatedName, DEFAULT_MAX_NAME_LENGTH};
pub use retry::{ExhaustionPolicy, RetryBudget, DEFAULT_MAX_ATTEMPTS};
pub use state::{RegistrationEvent, RegistrationState};
