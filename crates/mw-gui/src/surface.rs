//! [`Surface`] implementation drawing straight to the macroquad window.

use macroquad::prelude::{
    clear_background, draw_circle, draw_circle_lines, draw_line, draw_text, draw_triangle,
    draw_triangle_lines, measure_text, screen_height, screen_width, vec2,
};
use mw_core::{Glyph, Point, Rgba, Surface};

use crate::theme::to_color;

/// Draws onto the current macroquad frame.
///
/// Glyphs are drawn as vector shapes since the default font has no
/// pictogram characters.
#[derive(Debug, Default, Clone, Copy)]
pub struct MacroquadSurface;

impl Surface for MacroquadSurface {
    fn size(&self) -> (f32, f32) {
        (screen_width(), screen_height())
    }

    fn clear(&mut self, color: Rgba) {
        clear_background(to_color(color));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        let Some((first, rest)) = points.split_first() else {
            return;
        };
        let color = to_color(color);
        for pair in rest.windows(2) {
            draw_triangle(
                vec2(first.x, first.y),
                vec2(pair[0].x, pair[0].y),
                vec2(pair[1].x, pair[1].y),
                color,
            );
        }
    }

    fn stroke_polygon(&mut self, points: &[Point], width: f32, color: Rgba) {
        let color = to_color(color);
        for (from, to) in outline(points) {
            draw_line(from.x, from.y, to.x, to.y, width, color);
        }
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        draw_circle(center.x, center.y, radius, to_color(color));
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Rgba) {
        draw_circle_lines(center.x, center.y, radius, width, to_color(color));
    }

    fn line(&mut self, from: Point, to: Point, width: f32, color: Rgba) {
        draw_line(from.x, from.y, to.x, to.y, width, to_color(color));
    }

    fn text(&mut self, text: &str, center: Point, size: f32, color: Rgba) {
        let font_size = size.round().clamp(1.0, u16::MAX as f32) as u16;
        let dims = measure_text(text, None, font_size, 1.0);
        draw_text(
            text,
            center.x - dims.width / 2.0,
            center.y + dims.offset_y / 2.0,
            font_size as f32,
            to_color(color),
        );
    }

    fn glyph(&mut self, glyph: Glyph, center: Point, size: f32, color: Rgba) {
        let c = to_color(color);
        let h = size / 2.0;
        let (x, y) = (center.x, center.y);
        match glyph {
            Glyph::Crown => {
                let base = y + h * 0.6;
                let top = y - h * 0.7;
                draw_triangle(vec2(x - h, base), vec2(x - h * 0.8, top), vec2(x - h * 0.2, base), c);
                draw_triangle(vec2(x - h * 0.4, base), vec2(x, top - h * 0.2), vec2(x + h * 0.4, base), c);
                draw_triangle(vec2(x + h * 0.2, base), vec2(x + h * 0.8, top), vec2(x + h, base), c);
                draw_line(x - h, base, x + h, base, (size / 8.0).max(1.0), c);
            }
            Glyph::Crosshair => {
                let w = (size / 10.0).max(1.0);
                draw_circle_lines(x, y, h * 0.7, w, c);
                draw_line(x - h, y, x + h, y, w, c);
                draw_line(x, y - h, x, y + h, w, c);
            }
            Glyph::Triangle => {
                draw_triangle(vec2(x, y - h), vec2(x - h, y + h * 0.8), vec2(x + h, y + h * 0.8), c);
            }
            Glyph::Club => {
                let r = h * 0.4;
                draw_circle(x, y - r, r, c);
                draw_circle(x - r, y + r * 0.3, r, c);
                draw_circle(x + r, y + r * 0.3, r, c);
                draw_triangle(vec2(x, y), vec2(x - r * 0.7, y + h), vec2(x + r * 0.7, y + h), c);
            }
            Glyph::Peak => {
                draw_triangle_lines(
                    vec2(x, y - h),
                    vec2(x - h, y + h * 0.8),
                    vec2(x + h, y + h * 0.8),
                    (size / 8.0).max(1.0),
                    c,
                );
            }
            Glyph::Orb => draw_circle(x, y, h * 0.8, c),
            Glyph::Dot => draw_circle(x, y, h * 0.35, c),
        }
    }
}

/// Edges of the closed outline through `points`; nothing for fewer than two.
fn outline(points: &[Point]) -> impl Iterator<Item = (Point, Point)> + '_ {
    let closing = match points {
        [first, .., last] => Some((*last, *first)),
        _ => None,
    };
    points
        .windows(2)
        .map(|pair| (pair[0], pair[1]))
        .chain(closing.filter(|_| points.len() > 2))
}
