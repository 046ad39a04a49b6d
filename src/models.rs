// src/models.rs
use std::fmt;
use serde::{Serialize, Deserialize};

pub const MIN_PASSWORD_LENGTH: usize = 1;
pub const MAX_PASSWORD_LENGTH: usize = 64;

/// One of the four character classes a password can draw from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharacterClass {
    Lowercase,
    Uppercase,
    Digits,
    Symbols,
}

impl CharacterClass {
    /// Alphabet order: lowercase, uppercase, digits, symbols.
    pub const ALL: [CharacterClass; 4] = [
        CharacterClass::Lowercase,
        CharacterClass::Uppercase,
        CharacterClass::Digits,
        CharacterClass::Symbols,
    ];

    pub fn chars(&self) -> &'static [u8] {
        match self {
            CharacterClass::Lowercase => b"abcdefghijklmnopqrstuvwxyz",
            CharacterClass::Uppercase => b"ABCDEFGHIJKLMNOPQRSTUVWXYZ",
            CharacterClass::Digits => b"0123456789",
            CharacterClass::Symbols => b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
        }
    }

    pub fn contains(&self, c: char) -> bool {
        match self {
            CharacterClass::Lowercase => c.is_ascii_lowercase(),
            CharacterClass::Uppercase => c.is_ascii_uppercase(),
            CharacterClass::Digits => c.is_ascii_digit(),
            CharacterClass::Symbols => c.is_ascii_punctuation(),
        }
    }
}

impl fmt::Display for CharacterClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CharacterClass::Lowercase => write!(f, "lowercase (a-z)"),
            CharacterClass::Uppercase => write!(f, "uppercase (A-Z)"),
            CharacterClass::Digits => write!(f, "digits (0-9)"),
            CharacterClass::Symbols => write!(f, "symbols (!@#$)"),
        }
    }
}

// Password generation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRequest {
    pub length: usize,
    pub include_lower: bool,
    pub include_upper: bool,
    pub include_digits: bool,
    pub include_symbols: bool,
}

impl Default for GenerationRequest {
    fn default() -> Self {
        Self {
            length: 12,
            include_lower: true,
            include_upper: true,
            include_digits: true,
            include_symbols: false,
        }
    }
}

impl GenerationRequest {
    pub fn includes(&self, class: CharacterClass) -> bool {
        match class {
            CharacterClass::Lowercase => self.include_lower,
            CharacterClass::Uppercase => self.include_upper,
            CharacterClass::Digits => self.include_digits,
            CharacterClass::Symbols => self.include_symbols,
        }
    }

    /// Selected classes in alphabet order.
    pub fn classes(&self) -> Vec<CharacterClass> {
        CharacterClass::ALL
            .into_iter()
            .filter(|class| self.includes(*class))
            .collect()
    }
}

/// A generated password. `Debug` is redacted so it never ends up in logs.
///
/// Only the generator constructs one, so it is serializable but never
/// deserialized.
#[derive(Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Password(String);

impl Password {
    pub(crate) fn new(value: String) -> Self {
        Password(value)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// The password with every character replaced by a bullet.
    pub fn masked(&self) -> String {
        "•".repeat(self.len())
    }

    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Password(<{} chars>)", self.len())
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StrengthLabel {
    Weak,
    Moderate,
    Strong,
}

impl StrengthLabel {
    pub fn from_points(points: u8) -> Self {
        match points {
            0..=2 => StrengthLabel::Weak,
            3..=4 => StrengthLabel::Moderate,
            _ => StrengthLabel::Strong,
        }
    }
}

impl fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StrengthLabel::Weak => write!(f, "Weak"),
            StrengthLabel::Moderate => write!(f, "Moderate"),
            StrengthLabel::Strong => write!(f, "Strong"),
        }
    }
}

/// The individual checks that make up a strength score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct StrengthChecks {
    pub min_length: bool,
    pub long_length: bool,
    pub has_lowercase: bool,
    pub has_uppercase: bool,
    pub has_digit: bool,
    pub has_symbol: bool,
}

impl StrengthChecks {
    pub fn as_array(&self) -> [bool; 6] {
        [
            self.min_length,
            self.long_length,
            self.has_lowercase,
            self.has_uppercase,
            self.has_digit,
            self.has_symbol,
        ]
    }

    pub fn passed(&self) -> u8 {
        self.as_array().iter().filter(|passed| **passed).count() as u8
    }

    /// Human readable hints for every check that failed.
    pub fn hints(&self) -> Vec<&'static str> {
        let mut hints = Vec::new();
        if !self.min_length {
            hints.push("use at least 8 characters");
        }
        if !self.long_length {
            hints.push("use at least 11 characters");
        }
        if !self.has_lowercase {
            hints.push("add a lowercase letter");
        }
        if !self.has_uppercase {
            hints.push("add an uppercase letter");
        }
        if !self.has_digit {
            hints.push("add a digit");
        }
        if !self.has_symbol {
            hints.push("add a symbol");
        }
        hints
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StrengthScore {
    pub points: u8,
    pub label: StrengthLabel,
    pub checks: StrengthChecks,
}

impl From<StrengthChecks> for StrengthScore {
    fn from(checks: StrengthChecks) -> Self {
        let points = checks.passed();
        Self {
            points,
            label: StrengthLabel::from_points(points),
            checks,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_request_matches_initial_form() {
        let request = GenerationRequest::default();
        assert_eq!(request.length, 12);
        assert_eq!(
            request.classes(),
            vec![CharacterClass::Lowercase, CharacterClass::Uppercase, CharacterClass::Digits]
        );
    }

    #[test]
    fn symbol_class_is_ascii_punctuation() {
        let symbols = CharacterClass::Symbols.chars();
        assert_eq!(symbols.len(), 32);
        assert!(symbols.iter().all(|b| b.is_ascii_punctuation()));
    }

    #[test]
    fn label_thresholds() {
        assert_eq!(StrengthLabel::from_points(0), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_points(2), StrengthLabel::Weak);
        assert_eq!(StrengthLabel::from_points(3), StrengthLabel::Moderate);
        assert_eq!(StrengthLabel::from_points(4), StrengthLabel::Moderate);
        assert_eq!(StrengthLabel::from_points(5), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_points(6), StrengthLabel::Strong);
        assert_eq!(StrengthLabel::from_points(7), StrengthLabel::Strong);
        assert!(StrengthLabel::Weak < StrengthLabel::Moderate);
        assert!(StrengthLabel::Moderate < StrengthLabel::Strong);
    }

    #[test]
    fn password_debug_is_redacted() {
        let password = Password::new("hunter2".to_string());
        assert_eq!(format!("{:?}", password), "Password(<7 chars>)");
        assert_eq!(password.to_string(), "hunter2");
        assert_eq!(password.masked(), "•••••••");
    }

    #[test]
    fn password_serializes_as_plain_string() {
        let password = Password::new("s3cr3t!".to_string());
        assert_eq!(serde_json::to_string(&password).unwrap(), "\"s3cr3t!\"");
    }

    #[test]
    fn hints_cover_failed_checks() {
        let checks = StrengthChecks {
            min_length: true,
            has_lowercase: true,
            ..Default::default()
        };
        assert_eq!(checks.passed(), 2);
        assert_eq!(checks.hints().len(), 4);
    }
}
