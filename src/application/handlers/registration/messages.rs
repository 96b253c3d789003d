//! Fixed console texts and the user-facing wording of rejections.

use crate::domain::foundation::{DobError, ValidationError};
use crate::domain::registration::DateFormat;

pub const BANNER: &str = "=== User Registration System ===";
pub const NAME_PROMPT: &str = "Enter full name: ";
pub const SUCCESS: &str = "Registration successful";
pub const ANOTHER_PROMPT: &str = "Do you want to register another user? (y/n): ";
pub const GOODBYE: &str = "Exiting program. Goodbye!";
pub const RESTARTING: &str = "Too many failed attempts. Restarting registration...";
pub const TERMINATING: &str = "Too many failed attempts. Exiting.";
pub const NEXT_REGISTRATION: &str = "Starting a new registration...";
pub const CANCELLED: &str = "Input cancelled. Exiting.";

pub fn dob_prompt() -> String {
    format!("Enter DOB ({}): ", DateFormat::accepted_labels())
}

/// Describes a rejected answer, naming the rule class that failed.
pub fn rejection(err: &ValidationError) -> String {
    match err {
        ValidationError::DateOfBirth(DobError::Empty | DobError::Format { .. }) => format!(
            "Invalid date format. Please use {}.",
            DateFormat::accepted_labels()
        ),
        ValidationError::DateOfBirth(DobError::InFuture { date }) => {
            format!("Date of birth {} is in the future.", date)
        }
        ValidationError::DateOfBirth(DobError::OutOfBounds { age, min, max }) => format!(
            "Age must be between {} and {} years; computed {}.",
            min, max, age
        ),
        other => format!("{}.", other),
    }
}

/// Rejection text plus the attempts still available.
pub fn rejection_with_remaining(err: &ValidationError, remaining: u32) -> String {
    format!("{} Attempts left: {}", rejection(err), remaining)
}

/// "yes", "y" or an empty answer mean another registration.
pub fn wants_another(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "" | "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::foundation::NameRuleViolation;

    #[test]
    fn format_and_bounds_are_worded_differently() {
        let format = rejection(&DobError::Format { input: "x".to_string() }.into());
        let bounds = rejection(&DobError::OutOfBounds { age: 12, min: 16, max: 70 }.into());

        assert_eq!(
            format,
            "Invalid date format. Please use YYYY-MM-DD, DD/MM/YYYY or DD-MM-YYYY."
        );
        assert_eq!(bounds, "Age must be between 16 and 70 years; computed 12.");
    }

    #[test]
    fn name_rejection_names_the_rule() {
        let err: ValidationError = NameRuleViolation::WordWithoutVowel {
            word: "Xkxkxk".to_string(),
        }
        .into();
        assert_eq!(
            rejection_with_remaining(&err, 2),
            "Invalid name: 'Xkxkxk' contains no vowel. Attempts left: 2"
        );
    }

    #[test]
    fn another_accepts_yes_forms_and_empty() {
        for answer in ["", "y", "Y", "yes", " YES "] {
            assert!(wants_another(answer), "{:?}", answer);
        }
        for answer in ["n", "no", "later"] {
            assert!(!wants_another(answer), "{:?}", answer);
        }
    }

    #[test]
    fn dob_prompt_lists_formats() {
        assert_eq!(dob_prompt(), "Enter DOB (YYYY-MM-DD, DD/MM/YYYY or DD-MM-YYYY): ");
    }
}
