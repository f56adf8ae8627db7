//! The drawing contract between renderers and backends.
//!
//! Renderers in `mw-hexmap` and `mw-graph` only ever talk to a [`Surface`].
//! A host implements it for its graphics backend; [`Recorder`] implements it
//! by remembering every call, which is how renderers are tested without a
//! window.

use crate::color::Rgba;
use crate::geom::Point;

/// Number of rings used to approximate a radial gradient.
const GLOW_RINGS: usize = 8;

/// Directions used to stamp the outline of outlined text.
const OUTLINE_DIRECTIONS: [(f32, f32); 8] = [
    (-1.0, -1.0),
    (0.0, -1.0),
    (1.0, -1.0),
    (-1.0, 0.0),
    (1.0, 0.0),
    (-1.0, 1.0),
    (0.0, 1.0),
    (1.0, 1.0),
];

/// Small pictograms drawn on location hexes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Glyph {
    /// Capitals and palaces.
    Crown,
    /// Bases and stations.
    Crosshair,
    /// Temples and ruins.
    Triangle,
    /// Forests.
    Club,
    /// Mountains.
    Peak,
    /// Planets.
    Orb,
    /// Anything else.
    Dot,
}

impl Glyph {
    /// Unicode symbol for backends that draw glyphs as text.
    pub const fn symbol(self) -> char {
        match self {
            Self::Crown => '♕',
            Self::Crosshair => '⌖',
            Self::Triangle => '▲',
            Self::Club => '♣',
            Self::Peak => '◭',
            Self::Orb => '●',
            Self::Dot => '•',
        }
    }
}

/// A 2D drawing target of known pixel size.
///
/// Coordinates are pixels with the origin at the top-left corner. Text and
/// glyphs are centered on the given point.
pub trait Surface {
    /// Current width and height in pixels.
    fn size(&self) -> (f32, f32);

    /// Fill the whole surface.
    fn clear(&mut self, color: Rgba);

    /// Fill a convex polygon.
    fn fill_polygon(&mut self, points: &[Point], color: Rgba);

    /// Outline a closed polygon.
    fn stroke_polygon(&mut self, points: &[Point], width: f32, color: Rgba);

    /// Fill a disk.
    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba);

    /// Outline a circle.
    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Rgba);

    /// Draw a straight segment.
    fn line(&mut self, from: Point, to: Point, width: f32, color: Rgba);

    /// Draw text centered on `center`.
    fn text(&mut self, text: &str, center: Point, size: f32, color: Rgba);

    /// Draw a pictogram centered on `center`.
    fn glyph(&mut self, glyph: Glyph, center: Point, size: f32, color: Rgba) {
        let mut buf = [0u8; 4];
        self.text(glyph.symbol().encode_utf8(&mut buf), center, size, color);
    }

    /// A soft disk fading from `color` at the center to transparent at
    /// `radius`.
    fn radial_glow(&mut self, center: Point, radius: f32, color: Rgba) {
        let ring_alpha = 1.0 / GLOW_RINGS as f32;
        for i in 0..GLOW_RINGS {
            let fraction = 1.0 - i as f32 / GLOW_RINGS as f32;
            self.fill_circle(center, radius * fraction, color.fade(ring_alpha));
        }
    }

    /// Text with a contrasting outline for legibility over busy backgrounds.
    fn outlined_text(
        &mut self,
        text: &str,
        center: Point,
        size: f32,
        fill: Rgba,
        outline: Rgba,
    ) {
        let offset = (size / 12.0).max(1.0);
        for (dx, dy) in OUTLINE_DIRECTIONS {
            self.text(text, center + Point::new(dx, dy) * offset, size, outline);
        }
        self.text(text, center, size, fill);
    }
}

/// A single recorded drawing call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    /// [`Surface::clear`].
    Clear(Rgba),
    /// [`Surface::fill_polygon`].
    FillPolygon {
        /// Vertices.
        points: Vec<Point>,
        /// Fill color.
        color: Rgba,
    },
    /// [`Surface::stroke_polygon`].
    StrokePolygon {
        /// Vertices.
        points: Vec<Point>,
        /// Line width.
        width: f32,
        /// Line color.
        color: Rgba,
    },
    /// [`Surface::fill_circle`].
    FillCircle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f32,
        /// Fill color.
        color: Rgba,
    },
    /// [`Surface::stroke_circle`].
    StrokeCircle {
        /// Center.
        center: Point,
        /// Radius.
        radius: f32,
        /// Line width.
        width: f32,
        /// Line color.
        color: Rgba,
    },
    /// [`Surface::line`].
    Line {
        /// Start point.
        from: Point,
        /// End point.
        to: Point,
        /// Line width.
        width: f32,
        /// Line color.
        color: Rgba,
    },
    /// [`Surface::text`].
    Text {
        /// The text.
        text: String,
        /// Center point.
        center: Point,
        /// Font size.
        size: f32,
        /// Text color.
        color: Rgba,
    },
    /// [`Surface::glyph`].
    Glyph {
        /// The pictogram.
        glyph: Glyph,
        /// Center point.
        center: Point,
        /// Font size.
        size: f32,
        /// Glyph color.
        color: Rgba,
    },
    /// [`Surface::radial_glow`].
    Glow {
        /// Center.
        center: Point,
        /// Outer radius.
        radius: f32,
        /// Center color.
        color: Rgba,
    },
    /// [`Surface::outlined_text`].
    OutlinedText {
        /// The text.
        text: String,
        /// Center point.
        center: Point,
        /// Font size.
        size: f32,
        /// Fill color.
        fill: Rgba,
    },
}

/// A surface that records calls instead of drawing.
#[derive(Debug, Clone, Default)]
pub struct Recorder {
    width: f32,
    height: f32,
    /// Every call made so far, in order.
    pub commands: Vec<DrawCommand>,
}

impl Recorder {
    /// Create a recorder reporting the given size.
    pub fn new(width: f32, height: f32) -> Self {
        Self {
            width,
            height,
            commands: Vec::new(),
        }
    }

    /// Change the reported size, as a window resize would.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    /// Forget recorded calls.
    pub fn reset(&mut self) {
        self.commands.clear();
    }

    /// Count recorded calls matching a predicate.
    pub fn count(&self, predicate: impl Fn(&DrawCommand) -> bool) -> usize {
        self.commands.iter().filter(|c| predicate(c)).count()
    }

    /// All plain and outlined text drawn, in order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                DrawCommand::Text { text, .. } | DrawCommand::OutlinedText { text, .. } => {
                    Some(text.as_str())
                }
                _ => None,
            })
            .collect()
    }
}

impl Surface for Recorder {
    fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    fn clear(&mut self, color: Rgba) {
        self.commands.push(DrawCommand::Clear(color));
    }

    fn fill_polygon(&mut self, points: &[Point], color: Rgba) {
        self.commands.push(DrawCommand::FillPolygon {
            points: points.to_vec(),
            color,
        });
    }

    fn stroke_polygon(&mut self, points: &[Point], width: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokePolygon {
            points: points.to_vec(),
            width,
            color,
        });
    }

    fn fill_circle(&mut self, center: Point, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::FillCircle {
            center,
            radius,
            color,
        });
    }

    fn stroke_circle(&mut self, center: Point, radius: f32, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::StrokeCircle {
            center,
            radius,
            width,
            color,
        });
    }

    fn line(&mut self, from: Point, to: Point, width: f32, color: Rgba) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            width,
            color,
        });
    }

    fn text(&mut self, text: &str, center: Point, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            center,
            size,
            color,
        });
    }

    fn glyph(&mut self, glyph: Glyph, center: Point, size: f32, color: Rgba) {
        self.commands.push(DrawCommand::Glyph {
            glyph,
            center,
            size,
            color,
        });
    }

    fn radial_glow(&mut self, center: Point, radius: f32, color: Rgba) {
        self.commands.push(DrawCommand::Glow {
            center,
            radius,
            color,
        });
    }

    fn outlined_text(&mut self, text: &str, center: Point, size: f32, fill: Rgba, _outline: Rgba) {
        self.commands.push(DrawCommand::OutlinedText {
            text: text.to_string(),
            center,
            size,
            fill,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Surface that only counts the primitives it receives, so the provided
    /// methods can be observed.
    #[derive(Default)]
    struct Counting {
        circles: Vec<Rgba>,
        texts: Vec<(String, Rgba)>,
    }

    impl Surface for Counting {
        fn size(&self) -> (f32, f32) {
            (10.0, 10.0)
        }
        fn clear(&mut self, _: Rgba) {}
        fn fill_polygon(&mut self, _: &[Point], _: Rgba) {}
        fn stroke_polygon(&mut self, _: &[Point], _: f32, _: Rgba) {}
        fn fill_circle(&mut self, _: Point, _: f32, color: Rgba) {
            self.circles.push(color);
        }
        fn stroke_circle(&mut self, _: Point, _: f32, _: f32, _: Rgba) {}
        fn line(&mut self, _: Point, _: Point, _: f32, _: Rgba) {}
        fn text(&mut self, text: &str, _: Point, _: f32, color: Rgba) {
            self.texts.push((text.to_string(), color));
        }
    }

    #[test]
    fn default_glow_stacks_faint_rings() {
        let mut s = Counting::default();
        s.radial_glow(Point::ZERO, 30.0, Rgba::WHITE);
        assert_eq!(s.circles.len(), GLOW_RINGS);
        assert!(s.circles.iter().all(|c| c.a < 64));
    }

    #[test]
    fn default_outlined_text_draws_fill_last() {
        let mut s = Counting::default();
        s.outlined_text("MORDOR", Point::ZERO, 24.0, Rgba::WHITE, Rgba::BLACK);
        assert_eq!(s.texts.len(), 9);
        assert_eq!(s.texts.last().unwrap().1, Rgba::WHITE);
        assert!(s.texts[..8].iter().all(|(_, c)| *c == Rgba::BLACK));
    }

    #[test]
    fn default_glyph_falls_back_to_symbol_text() {
        let mut s = Counting::default();
        s.glyph(Glyph::Crown, Point::ZERO, 14.0, Rgba::WHITE);
        assert_eq!(s.texts[0].0, "♕");
    }

    #[test]
    fn recorder_tracks_calls_and_size() {
        let mut r = Recorder::new(800.0, 600.0);
        r.clear(Rgba::BLACK);
        r.text("hello", Point::new(1.0, 2.0), 10.0, Rgba::WHITE);
        r.outlined_text("REGION", Point::ZERO, 20.0, Rgba::WHITE, Rgba::BLACK);
        assert_eq!(r.size(), (800.0, 600.0));
        assert_eq!(r.texts(), vec!["hello", "REGION"]);
        assert_eq!(r.count(|c| matches!(c, DrawCommand::Clear(_))), 1);

        r.resize(10.0, 20.0);
        r.reset();
        assert_eq!(r.size(), (10.0, 20.0));
        assert!(r.commands.is_empty());
    }
}
