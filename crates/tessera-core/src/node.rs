//! Layout description nodes.
//!
//! The node set is intentionally closed: stacks, two kinds of filler, and the
//! fixed feed item roles (thumbnail, title, date, brand image, brand text).

/// Number of title lines shown when a layout does not say otherwise.
pub const DEFAULT_TITLE_LINES: u32 = 2;

/// Main axis of a stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// Children arranged left to right
    #[default]
    Horizontal,
    /// Children arranged top to bottom
    Vertical,
}

/// Alignment of stack children on the cross axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Alignment {
    /// Stretch children to fill the cross axis
    #[default]
    Fill,
    /// Align to the leading edge (left for vertical, top for horizontal)
    Leading,
    /// Center on the cross axis
    Center,
    /// Align to the trailing edge (right for vertical, bottom for horizontal)
    Trailing,
}

/// Insets on all four edges.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EdgeInsets {
    pub top: f64,
    pub left: f64,
    pub bottom: f64,
    pub right: f64,
}

impl EdgeInsets {
    pub const ZERO: Self = Self::uniform(0.0);

    pub const fn new(top: f64, left: f64, bottom: f64, right: f64) -> Self {
        Self { top, left, bottom, right }
    }

    /// Create uniform insets.
    pub const fn uniform(value: f64) -> Self {
        Self::new(value, value, value, value)
    }

    /// Total horizontal inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Total vertical inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }

    fn edges(&self) -> [f64; 4] {
        [self.top, self.left, self.bottom, self.right]
    }
}

/// A width and height pair.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// How a thumbnail is sized.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ImageSizing {
    /// Absolute width and height
    FixedSize(Size),
    /// Width divided by height. Height follows the resolved width.
    AspectRatio(f64),
}

impl ImageSizing {
    /// Height produced for a given width.
    ///
    /// # Panics
    ///
    /// Panics when the sizing is an aspect ratio of zero.
    pub fn height_for_width(&self, width: f64) -> f64 {
        match *self {
            ImageSizing::FixedSize(size) => size.height,
            ImageSizing::AspectRatio(ratio) => {
                assert!(ratio != 0.0, "Invalid aspect ratio of 0 for thumbnail");
                width / ratio
            }
        }
    }
}

/// A stack container and its ordered children.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Stack {
    #[cfg_attr(feature = "serde", serde(default))]
    pub axis: Axis,
    /// Space between adjacent children
    #[cfg_attr(feature = "serde", serde(default))]
    pub spacing: f64,
    #[cfg_attr(feature = "serde", serde(default))]
    pub padding: EdgeInsets,
    #[cfg_attr(feature = "serde", serde(default))]
    pub alignment: Alignment,
    pub children: Vec<LayoutNode>,
}

impl Stack {
    /// Create an empty stack along an axis.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            ..Default::default()
        }
    }

    pub fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    pub fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    /// Set the space between children.
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    pub fn with_padding(mut self, padding: EdgeInsets) -> Self {
        self.padding = padding;
        self
    }

    pub fn with_alignment(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Replace the children.
    pub fn with_children(mut self, children: Vec<LayoutNode>) -> Self {
        self.children = children;
        self
    }

    /// Append a child.
    pub fn with_child(mut self, child: LayoutNode) -> Self {
        self.children.push(child);
        self
    }

    /// Check this stack and every descendant.
    pub(crate) fn validate(&self) -> crate::Result<()> {
        if !is_dimension(self.spacing) {
            return Err(crate::LayoutError::NegativeDimension {
                dimension: "stack spacing",
                value: self.spacing,
            });
        }
        if let Some(&value) = self.padding.edges().iter().find(|v| !is_dimension(**v)) {
            return Err(crate::LayoutError::NegativeDimension {
                dimension: "stack padding",
                value,
            });
        }
        if let Some(LayoutNode::CustomSpace { size }) = self.children.first() {
            return Err(crate::LayoutError::LeadingCustomSpace { size: *size });
        }
        self.children.iter().try_for_each(LayoutNode::validate)
    }
}

/// Finite and not negative. NaN fails both.
fn is_dimension(value: f64) -> bool {
    value.is_finite() && value >= 0.0
}

/// A node in a feed item layout description.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "type", rename_all = "snake_case"))]
pub enum LayoutNode {
    Stack(Stack),
    /// Fixed space folded into the preceding sibling's trailing spacing
    CustomSpace { size: f64 },
    /// Space of at least `min_size` that expands to fill
    FlexibleSpace { min_size: f64 },
    Thumbnail { sizing: ImageSizing },
    Title {
        #[cfg_attr(feature = "serde", serde(default = "default_title_lines"))]
        max_lines: u32,
    },
    Date,
    BrandImage,
    BrandText,
}

#[cfg(feature = "serde")]
fn default_title_lines() -> u32 {
    DEFAULT_TITLE_LINES
}

impl LayoutNode {
    /// A title limited to `max_lines` lines.
    pub fn title(max_lines: u32) -> Self {
        LayoutNode::Title { max_lines }
    }

    pub fn custom_space(size: f64) -> Self {
        LayoutNode::CustomSpace { size }
    }

    pub fn flexible_space(min_size: f64) -> Self {
        LayoutNode::FlexibleSpace { min_size }
    }

    /// A thumbnail whose height is its width divided by `ratio`.
    pub fn aspect_thumbnail(ratio: f64) -> Self {
        LayoutNode::Thumbnail {
            sizing: ImageSizing::AspectRatio(ratio),
        }
    }

    pub fn fixed_thumbnail(width: f64, height: f64) -> Self {
        LayoutNode::Thumbnail {
            sizing: ImageSizing::FixedSize(Size::new(width, height)),
        }
    }

    /// Short name of the node kind, for diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            LayoutNode::Stack(_) => "stack",
            LayoutNode::CustomSpace { .. } => "custom_space",
            LayoutNode::FlexibleSpace { .. } => "flexible_space",
            LayoutNode::Thumbnail { .. } => "thumbnail",
            LayoutNode::Title { .. } => "title",
            LayoutNode::Date => "date",
            LayoutNode::BrandImage => "brand_image",
            LayoutNode::BrandText => "brand_text",
        }
    }

    pub(crate) fn validate(&self) -> crate::Result<()> {
        use crate::LayoutError;

        match self {
            LayoutNode::Stack(stack) => stack.validate(),
            LayoutNode::CustomSpace { size } if !is_dimension(*size) => Err(LayoutError::NegativeDimension {
                dimension: "custom space",
                value: *size,
            }),
            LayoutNode::FlexibleSpace { min_size } if !is_dimension(*min_size) => {
                Err(LayoutError::NegativeDimension {
                    dimension: "flexible space",
                    value: *min_size,
                })
            }
            LayoutNode::Thumbnail { sizing } => match *sizing {
                ImageSizing::AspectRatio(ratio) if !(ratio.is_finite() && ratio > 0.0) => {
                    Err(LayoutError::InvalidAspectRatio { ratio })
                }
                ImageSizing::FixedSize(size) if !is_dimension(size.width) => Err(LayoutError::NegativeDimension {
                    dimension: "thumbnail width",
                    value: size.width,
                }),
                ImageSizing::FixedSize(size) if !is_dimension(size.height) => Err(LayoutError::NegativeDimension {
                    dimension: "thumbnail height",
                    value: size.height,
                }),
                _ => Ok(()),
            },
            LayoutNode::Title { max_lines: 0 } => Err(LayoutError::InvalidLineCount),
            _ => Ok(()),
        }
    }
}
