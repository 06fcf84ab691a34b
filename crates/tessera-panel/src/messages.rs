//! Message lookup for panel strings.

use std::borrow::Cow;

use crate::strength::Criterion;

/// A panel string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageKey {
    Heading,
    Criterion(Criterion),
}

impl MessageKey {
    /// Identifier used by localization tables.
    pub fn id(self) -> &'static str {
        match self {
            MessageKey::Heading => "passwordStrengthTooltipHeading",
            MessageKey::Criterion(Criterion::Length) => "passwordStrengthTooltipIsLongEnough",
            MessageKey::Criterion(Criterion::Number) => "passwordStrengthTooltipContainsNumber",
            MessageKey::Criterion(Criterion::SpecialChar) => "passwordStrengthTooltipContainsSpecialChar",
        }
    }
}

/// Supplies localized panel strings.
pub trait Messages {
    fn message(&self, key: MessageKey) -> Cow<'_, str>;
}

/// Built-in English strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultMessages;

impl Messages for DefaultMessages {
    fn message(&self, key: MessageKey) -> Cow<'_, str> {
        Cow::Borrowed(match key {
            MessageKey::Heading => "At least:",
            MessageKey::Criterion(Criterion::Length) => "8 characters",
            MessageKey::Criterion(Criterion::Number) => "1 number",
            MessageKey::Criterion(Criterion::SpecialChar) => "1 special character",
        })
    }
}

impl<F> Messages for F
where
    F: Fn(MessageKey) -> String,
{
    fn message(&self, key: MessageKey) -> Cow<'_, str> {
        Cow::Owned(self(key))
    }
}
