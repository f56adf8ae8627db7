//! Single-line text label widget.

use macroquad::prelude::*;

fn font_size(size: f32) -> u16 {
    size.round().clamp(1.0, f32::from(u16::MAX)) as u16
}

/// Width of `text` at `size` pixels.
pub fn text_width(text: &str, size: f32) -> f32 {
    measure_text(text, None, font_size(size), 1.0).width
}

/// Draw a label with its top-left corner at `(x, y)`.
pub fn draw_label(text: &str, x: f32, y: f32, size: f32, color: Color) {
    let px = font_size(size);
    let dims = measure_text(text, None, px, 1.0);
    draw_text(text, x, y + dims.offset_y, f32::from(px), color);
}

/// Draw a label centered horizontally within a width.
pub fn draw_label_centered(text: &str, x: f32, y: f32, w: f32, size: f32, color: Color) {
    let cx = x + (w - text_width(text, size)) / 2.0;
    draw_label(text, cx.max(x), y, size, color);
}

/// Draw a label right-aligned within a width.
pub fn draw_label_right(text: &str, x: f32, y: f32, w: f32, size: f32, color: Color) {
    let rx = x + w - text_width(text, size);
    draw_label(text, rx.max(x), y, size, color);
}
