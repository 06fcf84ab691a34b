//! Password strength results supplied by the password evaluator.

use serde::{Deserialize, Serialize};

/// Which requirements a password meets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PasswordStrengthResult {
    pub is_long_enough: bool,
    pub contains_number: bool,
    pub contains_special_char: bool,
}

impl PasswordStrengthResult {
    pub fn new(is_long_enough: bool, contains_number: bool, contains_special_char: bool) -> Self {
        Self {
            is_long_enough,
            contains_number,
            contains_special_char,
        }
    }

    /// Whether `criterion` is met.
    pub fn is_satisfied(&self, criterion: Criterion) -> bool {
        match criterion {
            Criterion::Length => self.is_long_enough,
            Criterion::Number => self.contains_number,
            Criterion::SpecialChar => self.contains_special_char,
        }
    }

    /// Whether every criterion is met.
    pub fn is_strong(&self) -> bool {
        Criterion::ALL.iter().all(|c| self.is_satisfied(*c))
    }
}

/// A single password requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Criterion {
    Length,
    Number,
    SpecialChar,
}

impl Criterion {
    /// Display order of the panel lines.
    pub const ALL: [Criterion; 3] = [Criterion::Length, Criterion::Number, Criterion::SpecialChar];
}
