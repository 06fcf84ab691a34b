//! Tooltip hosting the password strength panel.

use serde::Serialize;
use tracing::trace;

use crate::messages::Messages;
use crate::panel::{PanelView, PasswordStrengthPanel};
use crate::strength::PasswordStrengthResult;

/// Where a tooltip opens relative to its anchor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VerticalPosition {
    Above,
    Below,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HorizontalPosition {
    Left,
    Center,
    Right,
}

/// Anchoring requested from the tooltip host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TooltipPlacement {
    pub vertical: VerticalPosition,
    pub horizontal: HorizontalPosition,
    /// Position of the pointer arrow along the tooltip edge
    pub pointer: HorizontalPosition,
    /// Whether hovering the anchor shows the tooltip
    pub hover_events: bool,
}

/// Password strength feedback shown below and to the right of a password
/// field. Visibility is controlled by the caller, not by hover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PasswordStrengthTooltip {
    pub is_visible: bool,
    pub result: PasswordStrengthResult,
}

impl PasswordStrengthTooltip {
    pub const PLACEMENT: TooltipPlacement = TooltipPlacement {
        vertical: VerticalPosition::Below,
        horizontal: HorizontalPosition::Right,
        pointer: HorizontalPosition::Center,
        hover_events: false,
    };

    pub fn new(is_visible: bool, result: PasswordStrengthResult) -> Self {
        Self { is_visible, result }
    }

    pub fn placement(&self) -> TooltipPlacement {
        Self::PLACEMENT
    }

    /// Panel content to show, or `None` while hidden.
    pub fn content(&self, messages: &impl Messages) -> Option<PanelView> {
        trace!(visible = self.is_visible, "rendering password strength tooltip");
        self.is_visible
            .then(|| PasswordStrengthPanel::new(self.result).render(messages))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::messages::DefaultMessages;

    #[test]
    fn test_hidden_has_no_content() {
        let tooltip = PasswordStrengthTooltip::new(false, PasswordStrengthResult::new(true, true, true));
        assert!(tooltip.content(&DefaultMessages).is_none());
    }

    #[test]
    fn test_visible_content_tracks_result() {
        let mut tooltip = PasswordStrengthTooltip::new(true, PasswordStrengthResult::new(false, true, false));
        assert_eq!(tooltip.content(&DefaultMessages).unwrap().satisfied_count(), 1);

        tooltip.result.is_long_enough = true;
        assert_eq!(tooltip.content(&DefaultMessages).unwrap().satisfied_count(), 2);
    }

    #[test]
    fn test_placement() {
        let placement = PasswordStrengthTooltip::new(true, PasswordStrengthResult::default()).placement();
        assert_eq!(placement.vertical, VerticalPosition::Below);
        assert_eq!(placement.horizontal, HorizontalPosition::Right);
        assert_eq!(placement.pointer, HorizontalPosition::Center);
        assert!(!placement.hover_events);
    }
}
