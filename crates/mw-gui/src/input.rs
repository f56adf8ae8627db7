//! Input abstraction for keyboard and mouse events.

use macroquad::prelude::*;
use mw_core::Point;

/// Wheel delta, in browser-style pixels, produced by one notch of scrolling.
const WHEEL_NOTCH: f32 = 100.0;

/// Current mouse position in window pixels.
pub fn mouse_point() -> Point {
    let (x, y) = mouse_position();
    Point::new(x, y)
}

/// Center of the window.
pub fn window_center() -> Point {
    Point::new(screen_width() / 2.0, screen_height() / 2.0)
}

/// Whether the mouse is inside the window.
pub fn mouse_in_window() -> bool {
    let p = mouse_point();
    p.x >= 0.0 && p.y >= 0.0 && p.x < screen_width() && p.y < screen_height()
}

/// Get the mouse scroll wheel Y delta this frame.
///
/// Positive = scroll up, negative = scroll down.
pub fn scroll_y() -> f32 {
    mouse_wheel().1
}

/// Scroll expressed as a zoom delta: positive zooms out.
pub fn wheel_delta() -> f32 {
    let notches = scroll_y().clamp(-1.0, 1.0);
    -notches * WHEEL_NOTCH
}

/// Check if the left mouse button went down this frame.
pub fn left_pressed() -> bool {
    is_mouse_button_pressed(MouseButton::Left)
}

/// Check if the left mouse button was released this frame.
pub fn left_released() -> bool {
    is_mouse_button_released(MouseButton::Left)
}

/// Check if the Escape key was pressed this frame.
pub fn escape_pressed() -> bool {
    is_key_pressed(KeyCode::Escape)
}

/// Check if Tab was pressed.
pub fn tab_pressed() -> bool {
    is_key_pressed(KeyCode::Tab)
}

/// World cycling: `]` moves forward, `[` backward.
pub fn world_step() -> i64 {
    if is_key_pressed(KeyCode::RightBracket) {
        1
    } else if is_key_pressed(KeyCode::LeftBracket) {
        -1
    } else {
        0
    }
}

/// Check if the view reset key (R) was pressed.
pub fn reset_pressed() -> bool {
    is_key_pressed(KeyCode::R)
}

/// Check if the next-day key (N or Space) was pressed.
pub fn next_day_pressed() -> bool {
    is_key_pressed(KeyCode::N) || is_key_pressed(KeyCode::Space)
}

/// Check if the quit key (Q) was pressed.
pub fn quit_pressed() -> bool {
    is_key_pressed(KeyCode::Q)
}
