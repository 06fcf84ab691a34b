//! Height estimation without building views.
//!
//! The estimate is meant for sizing list rows before they are laid out. It
//! is deliberately coarse:
//!
//! - stack spacing is not counted, only explicit custom spaces are;
//! - children of a stack are summed whatever the stack's axis;
//! - children are estimated against the stack's full width, not the width
//!   left after horizontal padding;
//! - flexible spaces count their minimum.

use tessera_core::{ImageSizing, Layout, LayoutNode, Stack, Typography};

/// Estimates rendered heights of layout descriptions.
#[derive(Debug, Clone, Default)]
pub struct HeightEstimator {
    typography: Typography,
}

impl HeightEstimator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Estimate with custom fonts and fixed heights.
    pub fn with_typography(typography: Typography) -> Self {
        Self { typography }
    }

    pub fn typography(&self) -> &Typography {
        &self.typography
    }

    /// Estimated height of `node` laid out at `width`.
    ///
    /// # Panics
    ///
    /// Panics when a thumbnail has an aspect ratio of zero.
    pub fn estimate(&self, node: &LayoutNode, width: f64) -> f64 {
        match node {
            LayoutNode::Stack(stack) => self.estimate_stack(stack, width),
            LayoutNode::CustomSpace { size } => *size,
            LayoutNode::FlexibleSpace { min_size } => *min_size,
            LayoutNode::Thumbnail { sizing } => match sizing {
                ImageSizing::FixedSize(size) => size.height,
                ImageSizing::AspectRatio(_) => sizing.height_for_width(width),
            },
            LayoutNode::Title { max_lines } => self.typography.title.line_height() * *max_lines as f64,
            LayoutNode::Date => self.typography.date.line_height(),
            LayoutNode::BrandImage => self.typography.brand_image_height,
            LayoutNode::BrandText => self.typography.brand_text.line_height(),
        }
    }

    /// Estimated height of a whole layout at `width`.
    pub fn estimate_layout(&self, layout: &Layout, width: f64) -> f64 {
        self.estimate_stack(layout.root(), width)
    }

    fn estimate_stack(&self, stack: &Stack, width: f64) -> f64 {
        let children: f64 = stack.children.iter().map(|child| self.estimate(child, width)).sum();
        children + stack.padding.top + stack.padding.bottom
    }
}

/// Estimated height of `node` at `width` with the default typography.
pub fn estimate_height(node: &LayoutNode, width: f64) -> f64 {
    HeightEstimator::new().estimate(node, width)
}

/// Estimated height of `layout` at `width` with the default typography.
pub fn estimate_layout_height(layout: &Layout, width: f64) -> f64 {
    HeightEstimator::new().estimate_layout(layout, width)
}
