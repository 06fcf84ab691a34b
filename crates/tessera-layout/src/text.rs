//! Text measurement for label sizing.
//!
//! A character-width estimate stands in for real font shaping; line heights
//! come from the label's [`TextStyle`].

use tessera_core::TextStyle;

/// Measured text metrics.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TextMetrics {
    /// Width of the widest visible line
    pub width: f64,
    /// Height of the visible lines
    pub height: f64,
    /// Number of visible lines
    pub lines: u32,
}

/// Measure `text` wrapped to `max_width`, keeping at most `max_lines` lines
/// (0 for unlimited). Empty text measures as zero.
pub fn measure_text(text: &str, style: &TextStyle, max_width: Option<f64>, max_lines: u32) -> TextMetrics {
    if text.trim().is_empty() {
        return TextMetrics::default();
    }

    let avg_char_width = estimate_char_width(style);
    let line_widths = match max_width {
        Some(max_w) if max_w > 0.0 => wrap_lines(text, max_w, avg_char_width),
        _ => text
            .lines()
            .map(|line| line.chars().count() as f64 * avg_char_width)
            .collect(),
    };

    let visible = match max_lines {
        0 => line_widths.len(),
        n => line_widths.len().min(n as usize),
    }
    .max(1);
    let width = line_widths[..visible.min(line_widths.len())]
        .iter()
        .copied()
        .fold(0.0_f64, f64::max);

    TextMetrics {
        width,
        height: visible as f64 * style.line_height(),
        lines: visible as u32,
    }
}

fn estimate_char_width(style: &TextStyle) -> f64 {
    // Proportional fonts average roughly 0.55 of the point size
    style.font_size * 0.55
}

fn wrap_lines(text: &str, max_width: f64, avg_char_width: f64) -> Vec<f64> {
    let space_width = avg_char_width;
    let mut lines: Vec<f64> = Vec::new();

    for paragraph in text.lines() {
        let mut current_line_width = 0.0;
        for word in paragraph.split_whitespace() {
            let word_width = word.chars().count() as f64 * avg_char_width;

            if current_line_width == 0.0 {
                current_line_width = word_width;
            } else if current_line_width + space_width + word_width <= max_width {
                current_line_width += space_width + word_width;
            } else {
                lines.push(current_line_width);
                current_line_width = word_width;
            }
        }
        lines.push(current_line_width);
    }

    lines
}
