//! Page geometry and text wrapping for the certificate layout.
//!
//! The layout is authored in millimetres on a landscape A4 page with
//! the origin at the top left. [`y_pt`] converts into PDF space,
//! which measures points from the bottom left.

use crate::metrics::{self, Face};

/// Points per millimetre.
pub const MM: f32 = 72.0 / 25.4;

/// Landscape A4 width in millimetres.
pub const PAGE_WIDTH_MM: f32 = 297.0;

/// Landscape A4 height in millimetres.
pub const PAGE_HEIGHT_MM: f32 = 210.0;

/// Converts a horizontal position in millimetres to points.
pub fn x_pt(x_mm: f32) -> f32 {
    x_mm * MM
}

/// Converts a top-origin vertical position in millimetres into
/// bottom-origin points.
pub fn y_pt(y_mm: f32) -> f32 {
    (PAGE_HEIGHT_MM - y_mm) * MM
}

/// Width of `text` in millimetres at the given font size.
pub fn text_width_mm(face: Face, text: &str, size_pt: f32) -> f32 {
    metrics::text_width_pt(face, text, size_pt) / MM
}

/// Greedy word wrap against a millimetre width budget. Words wider
/// than the whole budget are split mid-word. Empty text still yields
/// one line so callers can count lines for vertical spacing.
pub fn wrap_text(face: Face, text: &str, size_pt: f32, max_width_mm: f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let candidate = if current.is_empty() {
            word.to_string()
        } else {
            format!("{current} {word}")
        };
        if text_width_mm(face, &candidate, size_pt) <= max_width_mm {
            current = candidate;
            continue;
        }
        if !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        if text_width_mm(face, word, size_pt) <= max_width_mm {
            current = word.to_string();
        } else {
            current = split_long_word(face, word, size_pt, max_width_mm, &mut lines);
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

/// Splits a word that alone exceeds the budget, pushing each full
/// line and returning the remainder.
fn split_long_word(
    face: Face,
    word: &str,
    size_pt: f32,
    max_width_mm: f32,
    lines: &mut Vec<String>,
) -> String {
    let mut current = String::new();
    for ch in word.chars() {
        let mut candidate = current.clone();
        candidate.push(ch);
        if !current.is_empty() && text_width_mm(face, &candidate, size_pt) > max_width_mm {
            lines.push(std::mem::take(&mut current));
            current.push(ch);
        } else {
            current = candidate;
        }
    }
    current
}
