//! State machine trait for flow state enums.
//!
//! Gives every state enum the same checked transition API, so the driver
//! loop can never move a flow along an edge that does not exist.

use super::ValidationError;

/// Trait for enums that represent the states of a finite state machine.
///
/// Implementors list their edges; checked transitions come for free.
///
/// # Example
///
/// ```ignore
/// impl StateMachine for RegistrationState {
///     fn can_transition_to(&self, target: &Self) -> bool {
///         self.valid_transitions().contains(target)
///     }
///
///     fn valid_transitions(&self) -> Vec<Self> {
///         match self {
///             Start => vec![GetName],
///             GetName => vec![GetDob, Start],
///             // ...
///         }
///     }
/// }
///
/// let next = RegistrationState::Start.transition_to(RegistrationState::GetName)?;
/// ```
pub trait StateMachine: Sized + Copy + PartialEq + std::fmt::Debug {
    /// Returns true if moving from self to target is an edge of the machine.
    fn can_transition_to(&self, target: &Self) -> bool;

    /// Returns every state reachable in one step from the current state.
    fn valid_transitions(&self) -> Vec<Self>;

    /// Moves to `target`, failing if the edge does not exist.
    fn transition_to(&self, target: Self) -> Result<Self, ValidationError> {
        if self.can_transition_to(&target) {
            Ok(target)
        } else {
            Err(ValidationError::invalid_format(
                "state_transition",
                format!("Cannot transition from {:?} to {:?}", self, target),
            ))
        }
    }

    /// Checks if current state is terminal (no outgoing edges).
    fn is_terminal(&self) -> bool {
        self.valid_transitions().is_empty()
    }
}
