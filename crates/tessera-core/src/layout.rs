//! Validated layouts and the built-in presets.

use crate::error::Result;
use crate::node::{Alignment, Axis, EdgeInsets, LayoutNode, Stack};

/// A complete feed item layout rooted at a single stack.
///
/// Every layout is validated, whether built through [`Layout::new`] or
/// deserialized: aspect ratios are finite and positive, titles show at least
/// one line, every dimension is finite and non-negative, and no stack starts
/// with a custom space.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawLayout"))]
pub struct Layout {
    root: Stack,
}

/// Unvalidated wire form of [`Layout`].
#[cfg(feature = "serde")]
#[derive(serde::Deserialize)]
struct RawLayout {
    root: Stack,
}

#[cfg(feature = "serde")]
impl TryFrom<RawLayout> for Layout {
    type Error = crate::LayoutError;

    fn try_from(raw: RawLayout) -> Result<Self> {
        Layout::new(raw.root)
    }
}

impl Layout {
    /// Validate a root stack and wrap it.
    pub fn new(root: Stack) -> Result<Self> {
        root.validate()?;
        Ok(Self { root })
    }

    /// Parse and validate a layout from its JSON description.
    ///
    /// The document is an object with a `root` stack, e.g.
    /// `{"root": {"axis": "vertical", "children": [{"type": "date"}]}}`.
    #[cfg(feature = "serde")]
    pub fn from_json(source: &str) -> Result<Self> {
        // Parse the raw form so validation errors keep their own variant
        let raw: RawLayout = serde_json::from_str(source)?;
        Layout::new(raw.root)
    }

    /// The root stack.
    pub fn root(&self) -> &Stack {
        &self.root
    }

    /// The root stack as a node, for tree walks.
    pub fn root_node(&self) -> LayoutNode {
        LayoutNode::Stack(self.root.clone())
    }

    /// Full-width thumbnail on top, then a padded stack with the title, the
    /// date and the brand image pushed to the bottom.
    ///
    /// ```text
    /// +-----------------+
    /// |                 |
    /// |      image      |
    /// |                 |
    /// +-----------------+
    /// | title           |
    /// | date            |
    /// | brand image     |
    /// +-----------------+
    /// ```
    pub fn branded_headline() -> Self {
        Self::preset(Stack::vertical().with_children(vec![
            LayoutNode::aspect_thumbnail(1.5),
            LayoutNode::Stack(
                Stack::vertical()
                    .with_spacing(4.0)
                    .with_padding(EdgeInsets::uniform(12.0))
                    .with_children(vec![
                        LayoutNode::title(2),
                        LayoutNode::Date,
                        LayoutNode::flexible_space(16.0),
                        LayoutNode::BrandImage,
                    ]),
            ),
        ]))
    }

    /// Square thumbnail, title and date. No outer padding.
    ///
    /// ```text
    /// +-----------+
    /// |    img    |
    /// +-----------+
    /// | title     |
    /// | date      |
    /// +-----------+
    /// ```
    pub fn vertical() -> Self {
        Self::preset(Stack::vertical().with_spacing(10.0).with_children(vec![
            LayoutNode::aspect_thumbnail(1.0),
            LayoutNode::title(4),
            LayoutNode::custom_space(4.0),
            LayoutNode::Date,
        ]))
    }

    /// Title and date only. No outer padding.
    pub fn basic() -> Self {
        Self::preset(
            Stack::vertical()
                .with_spacing(6.0)
                .with_children(vec![LayoutNode::title(2), LayoutNode::Date]),
        )
    }

    /// Brand, title and date on the left with a square thumbnail on the right.
    ///
    /// ```text
    /// +---------------------------+
    /// | brand             +-----+ |
    /// | title             | img | |
    /// | date              +-----+ |
    /// +---------------------------+
    /// ```
    pub fn horizontal() -> Self {
        Self::preset(
            Stack::horizontal()
                .with_spacing(10.0)
                .with_alignment(Alignment::Center)
                .with_children(vec![
                    LayoutNode::Stack(Stack::vertical().with_spacing(4.0).with_children(vec![
                        LayoutNode::BrandText,
                        LayoutNode::title(3),
                        LayoutNode::Date,
                    ])),
                    LayoutNode::fixed_thumbnail(98.0, 98.0),
                ]),
        )
    }

    /// A banner image half as tall as it is wide.
    pub fn banner_thumbnail() -> Self {
        Self::preset(Stack::new(Axis::Horizontal).with_child(LayoutNode::aspect_thumbnail(2.0)))
    }

    fn preset(root: Stack) -> Self {
        debug_assert!(root.validate().is_ok(), "built-in preset must validate");
        Self { root }
    }
}

/// Names of the built-in layouts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Preset {
    BrandedHeadline,
    Vertical,
    Basic,
    Horizontal,
    BannerThumbnail,
}

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::BrandedHeadline,
        Preset::Vertical,
        Preset::Basic,
        Preset::Horizontal,
        Preset::BannerThumbnail,
    ];

    /// Build the preset's layout.
    pub fn layout(self) -> Layout {
        match self {
            Preset::BrandedHeadline => Layout::branded_headline(),
            Preset::Vertical => Layout::vertical(),
            Preset::Basic => Layout::basic(),
            Preset::Horizontal => Layout::horizontal(),
            Preset::BannerThumbnail => Layout::banner_thumbnail(),
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Preset::BrandedHeadline => "branded_headline",
            Preset::Vertical => "vertical",
            Preset::Basic => "basic",
            Preset::Horizontal => "horizontal",
            Preset::BannerThumbnail => "banner_thumbnail",
        }
    }
}
