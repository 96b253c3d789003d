//! Registration flow states and the pure transition function.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::{StateMachine, ValidationError};

/// Where a single registration pass currently is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RegistrationState {
    #[default]
    Start,
    GetName,
    GetDob,
    Process,
    End,
}

/// Something that happened while in a state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RegistrationEvent {
    /// The banner was shown.
    Began,
    NameAcquired,
    DobAcquired,
    /// A prompt used up its retry budget.
    AttemptsExhausted,
    /// The summary was shown.
    Summarized,
}

impl RegistrationEvent {
    /// The state this event leads to, wherever it is legal.
    pub fn target(&self) -> RegistrationState {
        use RegistrationState::*;
        match self {
            RegistrationEvent::Began => GetName,
            RegistrationEvent::NameAcquired => GetDob,
            RegistrationEvent::DobAcquired => Process,
            RegistrationEvent::AttemptsExhausted => Start,
            RegistrationEvent::Summarized => End,
        }
    }
}

impl RegistrationState {
    /// Applies `event`, failing if it cannot happen in this state.
    pub fn apply(self, event: RegistrationEvent) -> Result<Self, ValidationError> {
        self.transition_to(event.target())
    }
}

impl StateMachine for RegistrationState {
    fn can_transition_to(&self, target: &Self) -> bool {
        use RegistrationState::*;
        matches!(
            (self, target),
            (Start, GetName)
                | (GetName, GetDob)
                | (GetName, Start)
                | (GetDob, Process)
                | (GetDob, Start)
                | (Process, End)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use RegistrationState::*;
        match self {
            Start => vec![GetName],
            GetName => vec![GetDob, Start],
            GetDob => vec![Process, Start],
            Process => vec![End],
            End => vec![],
        }
    }
}

impl fmt::Display for RegistrationState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RegistrationState::Start => "START",
            RegistrationState::GetName => "GET_NAME",
            RegistrationState::GetDob => "GET_DOB",
            RegistrationState::Process => "PROCESS",
            RegistrationState::End => "END",
        };
        write!(f, "{}", s)
    }
}
