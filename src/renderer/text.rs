//! Label text layout — deterministic wrapping and centered placement.

use super::constants::*;
use super::svg_builder::SvgBuilder;

/// Greedy word wrap against a fixed average-character-width budget.
///
/// A single word longer than the budget is emitted unbroken on its own line.
pub(super) fn wrap_text(text: &str, box_width: f64, font_size: f64) -> Vec<String> {
    let max_chars = ((box_width / (font_size * CHAR_WIDTH_FACTOR)).floor() as usize).max(1);

    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current = word.to_string();
        } else if current.chars().count() + 1 + word.chars().count() <= max_chars {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(current);
            current = word.to_string();
        }
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Draw a wrapped text block vertically centered on (cx, cy).
pub(super) fn draw_text_block(
    svg: &mut SvgBuilder,
    cx: f64,
    cy: f64,
    box_width: f64,
    text: &str,
    font_size: f64,
    color: &str,
) {
    let lines = wrap_text(text, box_width, font_size);
    if lines.is_empty() {
        return;
    }

    let line_height = font_size * LINE_HEIGHT_FACTOR;
    let first_baseline =
        cy - (lines.len() as f64 - 1.0) * line_height / 2.0 + font_size * BASELINE_SHIFT_FACTOR;

    for (i, line) in lines.iter().enumerate() {
        svg.text(cx, first_baseline + i as f64 * line_height, line, font_size, color);
    }
}
