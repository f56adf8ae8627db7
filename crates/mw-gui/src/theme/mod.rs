//! Visual theme: color palette, text sizes, and color conversion.

use macroquad::prelude::Color;
use mw_core::Rgba;

/// Body text size in pixels.
pub const TEXT_SIZE: f32 = 16.0;
/// Small caption size in pixels.
pub const CAPTION_SIZE: f32 = 13.0;
/// Heading size in pixels.
pub const HEADING_SIZE: f32 = 22.0;
/// Inner padding of panels.
pub const PADDING: f32 = 10.0;

/// Overlay palette.
pub mod palette {
    use macroquad::prelude::Color;

    /// Translucent black for panel fills.
    pub const PANEL: Color = Color::new(0.0, 0.0, 0.0, 0.8);
    /// Faint white for panel borders.
    pub const BORDER: Color = Color::new(1.0, 1.0, 1.0, 0.15);
    /// Primary text.
    pub const TEXT: Color = Color::new(0.95, 0.95, 0.95, 1.0);
    /// Secondary text.
    pub const MUTED: Color = Color::new(0.61, 0.64, 0.69, 1.0);
    /// Dim hint text.
    pub const HINT: Color = Color::new(0.42, 0.45, 0.5, 0.8);
    /// Terminal green of the graph HUD.
    pub const HUD_GREEN: Color = Color::new(0.29, 0.87, 0.5, 0.8);
    /// Water stat.
    pub const WATER: Color = Color::new(0.38, 0.65, 0.98, 1.0);
    /// Oxygen stat.
    pub const OXYGEN: Color = Color::new(0.13, 0.83, 0.93, 1.0);
    /// Button fill when enabled.
    pub const BUTTON: Color = Color::new(0.13, 0.77, 0.37, 1.0);
    /// Button fill under the pointer.
    pub const BUTTON_HOVER: Color = Color::new(0.29, 0.87, 0.5, 1.0);
    /// Button label.
    pub const BUTTON_TEXT: Color = Color::new(0.0, 0.0, 0.0, 1.0);
}

/// Convert an engine color to a macroquad color.
pub fn to_color(color: Rgba) -> Color {
    let [r, g, b, a] = color.to_unit();
    Color::new(r, g, b, a)
}
