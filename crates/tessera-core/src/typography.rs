//! Text styles and fixed element heights used for sizing feed items.

/// Font weight classes used by feed item text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FontWeight {
    #[default]
    Regular,
    Semibold,
    Bold,
}

/// A single text role's font.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TextStyle {
    /// Font size in points
    pub font_size: f64,
    pub weight: FontWeight,
    /// Line height as a multiple of the font size
    pub line_height: f64,
}

impl TextStyle {
    /// Line height of the system font, relative to its point size.
    pub const SYSTEM_LINE_HEIGHT: f64 = 1.193;

    pub const fn semibold(font_size: f64) -> Self {
        Self {
            font_size,
            weight: FontWeight::Semibold,
            line_height: Self::SYSTEM_LINE_HEIGHT,
        }
    }

    pub const fn regular(font_size: f64) -> Self {
        Self {
            font_size,
            weight: FontWeight::Regular,
            line_height: Self::SYSTEM_LINE_HEIGHT,
        }
    }

    /// Height of one line of text in points.
    pub fn line_height(&self) -> f64 {
        self.font_size * self.line_height
    }
}

/// Font and fixed-height configuration for a feed item.
///
/// The defaults match the feed's shipped styling. Hosts may deserialize an
/// override, e.g. for larger accessibility text sizes.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Typography {
    pub title: TextStyle,
    pub date: TextStyle,
    pub brand_text: TextStyle,
    /// Text on the hidden-content overlay
    pub overlay: TextStyle,
    /// Height of the brand image container
    pub brand_image_height: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            title: TextStyle::semibold(14.0),
            date: TextStyle::semibold(11.0),
            brand_text: TextStyle::semibold(13.0),
            overlay: TextStyle::regular(18.0),
            brand_image_height: 20.0,
        }
    }
}
