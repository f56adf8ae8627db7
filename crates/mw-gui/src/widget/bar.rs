//! Stat bar widget for the water, oxygen and biomass readouts.

use macroquad::prelude::*;

use super::Rect2;
use super::label::{draw_label, draw_label_right};
use crate::theme::{CAPTION_SIZE, palette};

/// Height of the bar track below its caption.
const TRACK_HEIGHT: f32 = 4.0;

/// Total height a bar occupies.
pub const BAR_HEIGHT: f32 = CAPTION_SIZE + TRACK_HEIGHT + 4.0;

/// Fraction of a 0-100 stat, clamped to `0..=1`.
pub fn stat_fraction(value: f32) -> f32 {
    if value.is_finite() {
        (value / 100.0).clamp(0.0, 1.0)
    } else {
        0.0
    }
}

/// Draw `label` with its value on the right and a filled track below.
pub fn draw_bar(label: &str, value: f32, area: &Rect2, fill_color: Color) {
    draw_label(label, area.x, area.y, CAPTION_SIZE, palette::MUTED);
    let value_text = format!("{value:.0}");
    draw_label_right(&value_text, area.x, area.y, area.w, CAPTION_SIZE, fill_color);

    let track_y = area.y + CAPTION_SIZE + 2.0;
    draw_rectangle(area.x, track_y, area.w, TRACK_HEIGHT, palette::BORDER);
    let fill_w = area.w * stat_fraction(value);
    if fill_w > 0.0 {
        draw_rectangle(area.x, track_y, fill_w, TRACK_HEIGHT, fill_color);
    }
}
