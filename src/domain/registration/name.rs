//! Name validation: syntax rules, plausibility heuristic and normalization.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;

use crate::domain::foundation::NameRuleViolation;

/// Default maximum length of a name, in characters.
pub const DEFAULT_MAX_NAME_LENGTH: usize = 120;

/// Which characters a name may contain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum NameValidationPolicy {
    /// ASCII letters and spaces only.
    Strict,
    /// Latin-1 letters (accented included) plus space, hyphen and apostrophe.
    #[default]
    Extended,
}

impl NameValidationPolicy {
    /// Returns true if `ch` may appear in a name under this policy.
    pub fn allows(&self, ch: char) -> bool {
        match self {
            NameValidationPolicy::Strict => ch.is_ascii_alphabetic() || ch == ' ',
            NameValidationPolicy::Extended => {
                is_latin1_letter(ch) || matches!(ch, ' ' | '-' | '\'')
            }
        }
    }
}

impl fmt::Display for NameValidationPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            NameValidationPolicy::Strict => "strict",
            NameValidationPolicy::Extended => "extended",
        };
        write!(f, "{}", s)
    }
}

/// A name that passed every rule of the validator that produced it.
///
/// Holds the accepted (trimmed) input; the normalized form is derived on
/// demand so the two can never drift apart.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidatedName(String);

impl ValidatedName {
    /// Returns the accepted input as typed (trimmed).
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns the title-cased, whitespace-collapsed form.
    pub fn normalized(&self) -> String {
        NameValidator::normalize(&self.0)
    }
}

impl fmt::Display for ValidatedName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.normalized())
    }
}

/// Classifies candidate names as valid and plausible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NameValidator {
    policy: NameValidationPolicy,
    max_length: usize,
}

impl Default for NameValidator {
    fn default() -> Self {
        Self::new(NameValidationPolicy::default(), DEFAULT_MAX_NAME_LENGTH)
    }
}

impl NameValidator {
    pub fn new(policy: NameValidationPolicy, max_length: usize) -> Self {
        Self { policy, max_length }
    }

    pub fn policy(&self) -> NameValidationPolicy {
        self.policy
    }

    pub fn max_length(&self) -> usize {
        self.max_length
    }

    /// Validates a name, returning the first rule it breaks.
    ///
    /// Rules are applied in order: non-empty, length, allowed characters,
    /// word length, vowel presence, then the plausibility heuristic.
    pub fn validate(&self, name: &str) -> Result<ValidatedName, NameRuleViolation> {
        let trimmed = name.trim();
        if trimmed.is_empty() {
            return Err(NameRuleViolation::Empty);
        }

        let length = trimmed.chars().count();
        if length > self.max_length {
            return Err(NameRuleViolation::TooLong {
                max: self.max_length,
                actual: length,
            });
        }

        if let Some(ch) = trimmed.chars().find(|ch| !self.policy.allows(*ch)) {
            return Err(NameRuleViolation::DisallowedCharacter { ch });
        }

        for word in trimmed.split_whitespace() {
            if word.chars().count() < 2 {
                return Err(NameRuleViolation::WordTooShort {
                    word: word.to_string(),
                });
            }
            if !word.chars().any(is_vowel) {
                return Err(NameRuleViolation::WordWithoutVowel {
                    word: word.to_string(),
                });
            }
            check_word_plausibility(word)?;
        }

        Ok(ValidatedName(trimmed.to_string()))
    }

    /// Non-failing form of [`validate`](Self::validate).
    pub fn is_valid(&self, name: &str) -> bool {
        self.validate(name).is_ok()
    }

    /// Returns `(true, "")` for a valid name, `(false, reason)` otherwise.
    pub fn check(&self, name: &str) -> (bool, String) {
        match self.validate(name) {
            Ok(_) => (true, String::new()),
            Err(violation) => (false, violation.to_string()),
        }
    }

    /// Runs only the vowel/consonant and repetition heuristic on each word.
    ///
    /// Independent of the character policy: a name can be plausible and
    /// still contain characters the policy rejects.
    pub fn is_plausible(name: &str) -> bool {
        name.split_whitespace()
            .all(|word| check_word_plausibility(word).is_ok())
    }

    /// Collapses whitespace runs and title-cases every letter run.
    ///
    /// Hyphens and apostrophes act as run separators, so `o'connor`
    /// becomes `O'Connor` and `jean-luc` becomes `Jean-Luc`.
    pub fn normalize(name: &str) -> String {
        let collapsed = name.split_whitespace().collect::<Vec<_>>().join(" ");
        let mut out = String::with_capacity(collapsed.len());
        let mut run_start = true;
        for ch in collapsed.chars() {
            if ch.is_alphabetic() {
                if run_start {
                    push_single_mapped(&mut out, ch, ch.to_uppercase());
                } else {
                    push_single_mapped(&mut out, ch, ch.to_lowercase());
                }
                run_start = false;
            } else {
                out.push(ch);
                run_start = true;
            }
        }
        out
    }
}

fn check_word_plausibility(word: &str) -> Result<(), NameRuleViolation> {
    let vowels = word.chars().filter(|ch| is_vowel(*ch)).count();
    let consonants = word
        .chars()
        .filter(|ch| ch.is_alphabetic() && !is_vowel(*ch))
        .count();
    if consonants > vowels * 3 {
        return Err(NameRuleViolation::TooManyConsonants {
            word: word.to_string(),
        });
    }

    let length = word.chars().count();
    let distinct: HashSet<char> = word.chars().collect();
    if distinct.len() < length / 2 {
        return Err(NameRuleViolation::TooManyRepeatedLetters {
            word: word.to_string(),
        });
    }
    Ok(())
}

// Case mappings that expand to several characters (e.g. 'ß' -> "SS") keep
// the original character, otherwise normalization would not be idempotent.
fn push_single_mapped(out: &mut String, original: char, mut mapped: impl Iterator<Item = char>) {
    match (mapped.next(), mapped.next()) {
        (Some(single), None) => out.push(single),
        _ => out.push(original),
    }
}

fn fold_case(ch: char) -> char {
    let mut lower = ch.to_lowercase();
    match (lower.next(), lower.next()) {
        (Some(single), None) => single,
        _ => ch,
    }
}

/// a/e/i/o/u in either case, including their Latin-1 accented forms.
fn is_vowel(ch: char) -> bool {
    matches!(
        fold_case(ch),
        'a' | 'e' | 'i' | 'o' | 'u'
            | 'à'..='å'
            | 'è'..='ë'
            | 'ì'..='ï'
            | 'ò'..='ö'
            | 'ø'
            | 'ù'..='ü'
    )
}

/// ASCII letters plus the Latin-1 letter blocks (À-Ö, Ø-ö, ø-ÿ).
fn is_latin1_letter(ch: char) -> bool {
    ch.is_ascii_alphabetic()
        || ('\u{C0}'..='\u{D6}').contains(&ch)
        || ('\u{D8}'..='\u{F6}').contains(&ch)
        || ('\u{F8}'..='\u{FF}').contains(&ch)
}
