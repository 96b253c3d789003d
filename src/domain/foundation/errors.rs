//! Error types for the domain layer.

use std::fmt;
use thiserror::Error;

/// A name rejected by one of the name rules, in rule order.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NameRuleViolation {
    #[error("name must not be empty")]
    Empty,

    #[error("name must be at most {max} characters, got {actual}")]
    TooLong { max: usize, actual: usize },

    #[error("invalid character in name: '{ch}'")]
    DisallowedCharacter { ch: char },

    #[error("each part of the name needs at least 2 letters, got '{word}'")]
    WordTooShort { word: String },

    #[error("'{word}' contains no vowel")]
    WordWithoutVowel { word: String },

    #[error("'{word}' has too many consonants to be a real name")]
    TooManyConsonants { word: String },

    #[error("'{word}' repeats the same letters too often")]
    TooManyRepeatedLetters { word: String },
}

impl NameRuleViolation {
    /// Returns true for the heuristic rules (as opposed to syntax rules).
    pub fn is_plausibility(&self) -> bool {
        matches!(
            self,
            NameRuleViolation::TooManyConsonants { .. }
                | NameRuleViolation::TooManyRepeatedLetters { .. }
        )
    }
}

/// A date of birth that could not be parsed or falls outside the age bounds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DobError {
    #[error("date of birth must not be empty")]
    Empty,

    #[error("invalid date format: '{input}'")]
    Format { input: String },

    #[error("date of birth {date} is in the future")]
    InFuture { date: String },

    #[error("age must be between {min} and {max} years; computed {age}")]
    OutOfBounds { age: i32, min: i32, max: i32 },
}

impl DobError {
    /// Returns true if the text itself was unusable, as opposed to a
    /// well-formed date that failed the bounds check.
    pub fn is_format(&self) -> bool {
        matches!(self, DobError::Empty | DobError::Format { .. })
    }
}

/// Errors that occur during value object construction.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Invalid name: {0}")]
    Name(#[from] NameRuleViolation),

    #[error("Invalid date of birth: {0}")]
    DateOfBirth(#[from] DobError),

    #[error("Field '{field}' has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

impl ValidationError {
    /// Creates an invalid format validation error.
    pub fn invalid_format(field: impl Into<String>, reason: impl Into<String>) -> Self {
        ValidationError::InvalidFormat {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Returns the rule class this error belongs to.
    pub fn code(&self) -> ErrorCode {
        match self {
            ValidationError::Name(v) if v.is_plausibility() => ErrorCode::NamePlausibility,
            ValidationError::Name(_) => ErrorCode::NameRule,
            ValidationError::DateOfBirth(e) if e.is_format() => ErrorCode::DateFormat,
            ValidationError::DateOfBirth(_) => ErrorCode::AgeBounds,
            ValidationError::InvalidFormat { .. } => ErrorCode::InvalidStateTransition,
        }
    }
}

/// Rule classes reported to the user and to the logs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    NameRule,
    NamePlausibility,
    DateFormat,
    AgeBounds,
    InvalidStateTransition,
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            ErrorCode::NameRule => "NAME_RULE",
            ErrorCode::NamePlausibility => "NAME_PLAUSIBILITY",
            ErrorCode::DateFormat => "DATE_FORMAT",
            ErrorCode::AgeBounds => "AGE_BOUNDS",
            ErrorCode::InvalidStateTransition => "INVALID_STATE_TRANSITION",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn name_violation_wraps_with_prefix() {
        let err: ValidationError = NameRuleViolation::DisallowedCharacter { ch: '1' }.into();
        assert_eq!(format!("{}", err), "Invalid name: invalid character in name: '1'");
    }

    #[test]
    fn out_of_bounds_displays_computed_age() {
        let err = DobError::OutOfBounds { age: 12, min: 16, max: 70 };
        assert_eq!(
            format!("{}", err),
            "age must be between 16 and 70 years; computed 12"
        );
    }

    #[test]
    fn invalid_format_displays_correctly() {
        let err = ValidationError::invalid_format("state_transition", "bad move");
        assert_eq!(
            format!("{}", err),
            "Field 'state_transition' has invalid format: bad move"
        );
    }

    #[test]
    fn code_distinguishes_rule_classes() {
        let syntax: ValidationError = NameRuleViolation::Empty.into();
        let heuristic: ValidationError = NameRuleViolation::TooManyConsonants {
            word: "Brrrt".to_string(),
        }
        .into();
        let format: ValidationError = DobError::Format { input: "x".to_string() }.into();
        let bounds: ValidationError = DobError::OutOfBounds { age: 90, min: 16, max: 70 }.into();
        let future: ValidationError = DobError::InFuture { date: "2099-01-01".to_string() }.into();

        assert_eq!(syntax.code(), ErrorCode::NameRule);
        assert_eq!(heuristic.code(), ErrorCode::NamePlausibility);
        assert_eq!(format.code(), ErrorCode::DateFormat);
        assert_eq!(bounds.code(), ErrorCode::AgeBounds);
        assert_eq!(future.code(), ErrorCode::AgeBounds);
    }

    #[test]
    fn error_code_display_formats_correctly() {
        assert_eq!(format!("{}", ErrorCode::DateFormat), "DATE_FORMAT");
        assert_eq!(format!("{}", ErrorCode::AgeBounds), "AGE_BOUNDS");
    }
}
