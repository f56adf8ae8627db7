//! Translucent bordered panel.

use super::Rect2;
use crate::theme::palette;

/// Draw a panel backdrop.
pub fn draw_panel(area: &Rect2) {
    super::bordered_rect(area, palette::PANEL, palette::BORDER);
}
