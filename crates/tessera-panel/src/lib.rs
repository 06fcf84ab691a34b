//! Password strength feedback panel.
//!
//! The panel is a pure function of a [`PasswordStrengthResult`]: a heading
//! followed by one line per [`Criterion`], in a fixed order, each marked when
//! satisfied. Evaluating the password is left to the caller; showing and
//! anchoring the panel is left to the [`PasswordStrengthTooltip`] host.
//!
//! # Example
//!
//! ```
//! use tessera_panel::{DefaultMessages, PasswordStrengthPanel, PasswordStrengthResult};
//!
//! let result = PasswordStrengthResult::new(true, false, true);
//! let view = PasswordStrengthPanel::new(result).render(&DefaultMessages);
//! assert_eq!(view.satisfied_count(), 2);
//! ```

pub mod error;
pub mod messages;
pub mod panel;
pub mod strength;
pub mod tooltip;

pub use error::{PanelError, Result};
pub use messages::{DefaultMessages, MessageKey, Messages};
pub use panel::{CriterionLine, PanelRenderer, PanelView, PasswordStrengthPanel, SATISFIED_MARKER};
pub use strength::{Criterion, PasswordStrengthResult};
pub use tooltip::{HorizontalPosition, PasswordStrengthTooltip, TooltipPlacement, VerticalPosition};
