//! View construction and sizing for Tessera feed items.
//!
//! # Architecture
//!
//! 1. **Compilation**: [`LayoutCompiler`] walks a [`tessera_core::LayoutNode`]
//!    tree and builds views in a [`ViewTree`], reusing an item's [`Slots`]
//! 2. **Estimation**: [`HeightEstimator`] predicts an item's height from the
//!    description alone, for list prefetch sizing
//! 3. **Resolution**: [`resolve_frames`] computes concrete frames for a
//!    compiled tree at a given width
//!
//! # Example
//!
//! ```
//! use tessera_core::Layout;
//! use tessera_layout::{estimate_layout_height, FeedItemView, SlotRole};
//!
//! let mut item = FeedItemView::new(Layout::vertical());
//! item.set_layout(Layout::basic());
//! assert!(item.slot(SlotRole::Title).is_some());
//!
//! let banner = estimate_layout_height(&Layout::banner_thumbnail(), 320.0);
//! assert_eq!(banner, 160.0);
//! ```

mod compile;
mod estimate;
mod item;
mod resolve;
mod slots;
mod text;
mod tree;

pub use compile::LayoutCompiler;
pub use estimate::{estimate_height, estimate_layout_height, HeightEstimator};
pub use item::FeedItemView;
pub use resolve::resolve_frames;
pub use slots::{SlotRole, Slots, HIDDEN_CONTENT_TEXT};
pub use text::{measure_text, TextMetrics};
pub use tree::{
    Bounds, ContentMode, ImageStyle, LabelStyle, StackStyle, ViewConstraint, ViewKind, ViewNode, ViewNodeId,
    ViewTree,
};
