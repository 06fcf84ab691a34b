//! Core model for Tessera feed item layouts.
//!
//! A feed item is described by a [`Layout`]: a root [`Stack`] whose children
//! form a closed tree of [`LayoutNode`]s. The same description drives both
//! view construction and height estimation in `tessera-layout`.
//!
//! # Example
//!
//! ```
//! use tessera_core::{Axis, Layout, LayoutNode, Stack};
//!
//! let layout = Layout::new(
//!     Stack::new(Axis::Vertical)
//!         .with_spacing(6.0)
//!         .with_children(vec![LayoutNode::title(2), LayoutNode::Date]),
//! )?;
//! assert_eq!(layout.root().children.len(), 2);
//! # Ok::<(), tessera_core::LayoutError>(())
//! ```

pub mod error;
pub mod layout;
pub mod node;
pub mod typography;

pub use error::{LayoutError, Result};
pub use layout::{Layout, Preset};
pub use node::{Alignment, Axis, EdgeInsets, ImageSizing, LayoutNode, Size, Stack, DEFAULT_TITLE_LINES};
pub use typography::{FontWeight, TextStyle, Typography};
