//! Clickable button widget with hover state.

use macroquad::prelude::*;

use super::Rect2;
use super::label::draw_label_centered;
use crate::theme::{TEXT_SIZE, palette};

/// Whether the pointer at `(mouse_x, mouse_y)` clicks `area` this frame.
pub fn button_clicked(area: &Rect2, mouse_x: f32, mouse_y: f32) -> bool {
    area.contains(mouse_x, mouse_y) && is_mouse_button_pressed(MouseButton::Left)
}

/// Draw a button.
pub fn draw_button(label: &str, area: &Rect2, hovered: bool) {
    let fill = if hovered {
        palette::BUTTON_HOVER
    } else {
        palette::BUTTON
    };
    draw_rectangle(area.x, area.y, area.w, area.h, fill);
    let ty = area.y + (area.h - TEXT_SIZE) / 2.0;
    draw_label_centered(label, area.x, ty, area.w, TEXT_SIZE, palette::BUTTON_TEXT);
}
