//! The data gathered during one registration pass.

use chrono::NaiveDate;

use super::{DateOfBirth, ValidatedName};
use crate::domain::foundation::RegistrationId;

/// Partially collected input, reset whenever the flow restarts.
#[derive(Debug, Clone, Default)]
pub struct RegistrationDraft {
    id: RegistrationId,
    name: Option<ValidatedName>,
    dob: Option<DateOfBirth>,
}

impl RegistrationDraft {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn id(&self) -> RegistrationId {
        self.id
    }

    pub fn set_name(&mut self, name: ValidatedName) {
        self.name = Some(name);
    }

    pub fn set_dob(&mut self, dob: DateOfBirth) {
        self.dob = Some(dob);
    }

    /// Turns the draft into a finished attempt once both fields are set.
    pub fn complete(self, reference: NaiveDate) -> Option<RegistrationAttempt> {
        Some(RegistrationAttempt {
            id: self.id,
            name: self.name?,
            dob: self.dob?,
            reference,
        })
    }
}

/// A successful registration, alive until its summary has been shown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RegistrationAttempt {
    id: RegistrationId,
    name: ValidatedName,
    dob: DateOfBirth,
    reference: NaiveDate,
}

impl RegistrationAttempt {
    pub fn id(&self) -> RegistrationId {
        self.id
    }

    pub fn name(&self) -> &ValidatedName {
        &self.name
    }

    /// Age on the reference date, recomputed from the DOB every call.
    pub fn age(&self) -> i32 {
        self.dob.age_on(self.reference)
    }

    pub fn birth_year(&self) -> i32 {
        self.dob.birth_year()
    }

    /// Labelled lines shown once registration succeeds.
    pub fn summary_lines(&self) -> Vec<String> {
        vec![
            format!("Name : {}", self.name),
            format!("Age  : {}", self.age()),
            format!("Born : {}", self.birth_year()),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::registration::{DobValidator, NameValidator};

    fn reference() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 2).unwrap()
    }

    fn filled_draft() -> RegistrationDraft {
        let mut draft = RegistrationDraft::new();
        draft.set_name(NameValidator::default().validate("jean-luc picard").unwrap());
        draft.set_dob(DobValidator::parse("20/05/2000").unwrap());
        draft
    }

    #[test]
    fn incomplete_draft_does_not_complete() {
        let mut draft = RegistrationDraft::new();
        assert!(draft.clone().complete(reference()).is_none());

        draft.set_name(NameValidator::default().validate("Marie").unwrap());
        assert!(draft.complete(reference()).is_none());
    }

    #[test]
    fn completed_attempt_keeps_draft_id() {
        let draft = filled_draft();
        let id = draft.id();
        let attempt = draft.complete(reference()).unwrap();
        assert_eq!(attempt.id(), id);
    }

    #[test]
    fn summary_shows_normalized_name_age_and_year() {
        let attempt = filled_draft().complete(reference()).unwrap();
        assert_eq!(
            attempt.summary_lines(),
            vec![
                "Name : Jean-Luc Picard".to_string(),
                "Age  : 25".to_string(),
                "Born : 2000".to_string(),
            ]
        );
    }
}
