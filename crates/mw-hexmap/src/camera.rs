use mw_core::Point;

use crate::config::MapConfig;

/// Pan offset and zoom scale of the map view.
///
/// World coordinates map to the screen as
/// `screen = world * scale + canvas_center + offset`.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    scale: f32,
    offset: Point,
    initial_scale: f32,
    min_scale: f32,
    max_scale: f32,
    sensitivity: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::from_config(&MapConfig::default())
    }
}

impl Camera {
    /// A centered camera using the limits of `config`.
    ///
    /// Unusable limits (non-finite, non-positive or inverted) fall back to
    /// the defaults so the scale always stays positive and finite.
    pub fn from_config(config: &MapConfig) -> Self {
        let defaults = MapConfig::default();
        let min_scale = positive_or(config.min_scale, defaults.min_scale);
        let max_scale = positive_or(config.max_scale, defaults.max_scale).max(min_scale);
        let initial_scale =
            positive_or(config.initial_scale, defaults.initial_scale).clamp(min_scale, max_scale);
        let sensitivity = if config.zoom_sensitivity.is_finite() {
            config.zoom_sensitivity
        } else {
            defaults.zoom_sensitivity
        };
        Self {
            scale: initial_scale,
            offset: Point::ZERO,
            initial_scale,
            min_scale,
            max_scale,
            sensitivity,
        }
    }

    /// Zoom factor, always within the configured scale limits.
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Pan offset in screen pixels.
    pub fn offset(&self) -> Point {
        self.offset
    }

    /// Move the view by a screen-space delta.
    pub fn pan(&mut self, dx: f32, dy: f32) {
        if dx.is_finite() && dy.is_finite() {
            self.offset += Point::new(dx, dy);
        }
    }

    /// Apply a wheel delta; positive deltas zoom out.
    pub fn zoom(&mut self, wheel_delta: f32) {
        if !wheel_delta.is_finite() {
            return;
        }
        let scale = self.scale - wheel_delta * self.sensitivity;
        if scale.is_finite() {
            self.scale = scale.clamp(self.min_scale, self.max_scale);
        }
    }

    /// World position under a screen point.
    pub fn screen_to_world(&self, screen: Point, canvas_center: Point) -> Point {
        (screen - canvas_center - self.offset) / self.scale
    }

    /// Screen position of a world point.
    pub fn world_to_screen(&self, world: Point, canvas_center: Point) -> Point {
        world * self.scale + canvas_center + self.offset
    }

    /// Back to the initial scale with no pan.
    pub fn reset(&mut self) {
        self.scale = self.initial_scale;
        self.offset = Point::ZERO;
    }
}

fn positive_or(value: f32, fallback: f32) -> f32 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        fallback
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn starts_centered_at_initial_scale() {
        let camera = Camera::default();
        assert!((camera.scale() - 0.8).abs() < f32::EPSILON);
        assert_eq!(camera.offset(), Point::ZERO);
    }

    #[test]
    fn wheel_down_zooms_out() {
        let mut camera = Camera::default();
        camera.zoom(100.0);
        assert!((camera.scale() - 0.7).abs() < 1e-5);
        camera.zoom(-300.0);
        assert!((camera.scale() - 1.0).abs() < 1e-5);
    }

    #[test]
    fn zoom_ignores_non_finite_deltas() {
        let mut camera = Camera::default();
        camera.zoom(f32::NAN);
        camera.zoom(f32::INFINITY);
        assert!((camera.scale() - 0.8).abs() < f32::EPSILON);
    }

    #[test]
    fn screen_world_round_trip() {
        let mut camera = Camera::default();
        camera.pan(35.0, -12.0);
        camera.zoom(-500.0);
        let center = Point::new(400.0, 300.0);
        let world = Point::new(-120.0, 64.0);
        let back = camera.screen_to_world(camera.world_to_screen(world, center), center);
        assert!(back.distance(world) < 1e-3);
    }

    #[test]
    fn canvas_center_is_world_origin_without_pan() {
        let camera = Camera::default();
        let center = Point::new(512.0, 384.0);
        assert_eq!(camera.screen_to_world(center, center), Point::ZERO);
    }

    #[test]
    fn reset_restores_view() {
        let mut camera = Camera::default();
        camera.pan(10.0, 10.0);
        camera.zoom(-1000.0);
        camera.reset();
        assert_eq!(camera, Camera::default());
    }

    #[test]
    fn scale_cannot_leave_bounds() {
        let mut camera = Camera::default();
        camera.zoom(1.0e9);
        assert!((camera.scale() - 0.3).abs() < f32::EPSILON);
        camera.zoom(-1.0e9);
        assert!((camera.scale() - 3.0).abs() < f32::EPSILON);
        camera.zoom(f32::NEG_INFINITY);
        assert!((camera.scale() - 3.0).abs() < f32::EPSILON);
    }

    #[test]
    fn broken_limits_fall_back_to_defaults() {
        let config = MapConfig {
            min_scale: f32::NAN,
            max_scale: -2.0,
            initial_scale: f32::INFINITY,
            zoom_sensitivity: f32::NAN,
            ..MapConfig::default()
        };
        let mut camera = Camera::from_config(&config);
        assert_eq!(camera, Camera::default());
        camera.zoom(100.0);
        assert!((camera.scale() - 0.7).abs() < 1e-5);
    }

    #[test]
    fn inverted_limits_collapse_to_the_minimum() {
        let config = MapConfig {
            min_scale: 2.0,
            max_scale: 1.0,
            ..MapConfig::default()
        };
        let mut camera = Camera::from_config(&config);
        assert!((camera.scale() - 2.0).abs() < f32::EPSILON);
        camera.zoom(-500.0);
        assert!((camera.scale() - 2.0).abs() < f32::EPSILON);
    }

    proptest! {
        #[test]
        fn zoom_stays_clamped(deltas in proptest::collection::vec(-1.0e6f32..1.0e6, 1..20)) {
            let mut camera = Camera::default();
            for delta in deltas {
                camera.zoom(delta);
                prop_assert!((0.3..=3.0).contains(&camera.scale()));
            }
        }

        #[test]
        fn pans_are_additive_and_commutative(
            a in (-500i32..500, -500i32..500),
            b in (-500i32..500, -500i32..500),
        ) {
            let (ax, ay) = (a.0 as f32, a.1 as f32);
            let (bx, by) = (b.0 as f32, b.1 as f32);
            let mut first = Camera::default();
            first.pan(ax, ay);
            first.pan(bx, by);
            let mut second = Camera::default();
            second.pan(bx, by);
            second.pan(ax, ay);
            let mut once = Camera::default();
            once.pan(ax + bx, ay + by);
            prop_assert_eq!(first.offset(), second.offset());
            prop_assert_eq!(first.offset(), once.offset());
        }
    }
}
