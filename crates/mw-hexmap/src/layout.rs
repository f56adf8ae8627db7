//! Axial hex math for a pointy-top lattice.

use mw_core::{AxialCoord, Point};

const SQRT_3: f32 = 1.732_050_8;

/// Projection between axial coordinates and world pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HexLayout {
    /// Center-to-corner size of a hex.
    pub size: f32,
}

impl HexLayout {
    /// Create a layout for hexes of the given size.
    pub fn new(size: f32) -> Self {
        Self { size }
    }

    /// Center of `coord` in world pixels.
    pub fn hex_to_pixel(&self, coord: AxialCoord) -> Point {
        let q = coord.q as f32;
        let r = coord.r as f32;
        Point::new(
            self.size * (SQRT_3 * q + SQRT_3 / 2.0 * r),
            self.size * (1.5 * r),
        )
    }

    /// Fractional axial coordinates of a world point, before rounding.
    pub fn pixel_to_fractional(&self, point: Point) -> (f32, f32) {
        let q = (SQRT_3 / 3.0 * point.x - point.y / 3.0) / self.size;
        let r = (2.0 / 3.0 * point.y) / self.size;
        (q, r)
    }

    /// The hex whose center is nearest to a world point.
    pub fn pixel_to_hex(&self, point: Point) -> AxialCoord {
        let (q, r) = self.pixel_to_fractional(point);
        hex_round(q, r)
    }

    /// Corner points of a hex polygon of `radius` around `center`, at
    /// angles of `60° * i - 30°`.
    pub fn corners(center: Point, radius: f32) -> [Point; 6] {
        std::array::from_fn(|i| {
            let angle = (60.0 * i as f32 - 30.0).to_radians();
            center + Point::from_angle(angle, radius)
        })
    }
}

/// Snap fractional axial coordinates to the nearest lattice cell.
///
/// Rounds the three cube coordinates independently, then recomputes the one
/// with the largest rounding error from the other two so that `q + r + s`
/// stays zero.
pub fn hex_round(q: f32, r: f32) -> AxialCoord {
    let s = -q - r;
    let mut rq = q.round();
    let mut rr = r.round();
    let rs = s.round();

    let q_diff = (rq - q).abs();
    let r_diff = (rr - r).abs();
    let s_diff = (rs - s).abs();

    if q_diff > r_diff && q_diff > s_diff {
        rq = -rr - rs;
    } else if r_diff > s_diff {
        rr = -rq - rs;
    }
    AxialCoord::new(rq as i32, rr as i32)
}

/// Every cell within `radius` steps of the origin, column by column.
pub fn hexagon(radius: i32) -> impl Iterator<Item = AxialCoord> {
    let radius = radius.max(0);
    (-radius..=radius).flat_map(move |q| {
        let r1 = (-radius).max(-q - radius);
        let r2 = radius.min(-q + radius);
        (r1..=r2).map(move |r| AxialCoord::new(q, r))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn origin_maps_to_origin() {
        let layout = HexLayout::new(40.0);
        assert_eq!(layout.hex_to_pixel(AxialCoord::ORIGIN), Point::ZERO);
        assert_eq!(layout.pixel_to_hex(Point::ZERO), AxialCoord::ORIGIN);
    }

    #[test]
    fn neighbours_are_one_hex_width_apart() {
        let layout = HexLayout::new(40.0);
        let east = layout.hex_to_pixel(AxialCoord::new(1, 0));
        assert!((east.x - 40.0 * SQRT_3).abs() < 1e-3);
        assert!(east.y.abs() < 1e-6);
        let south = layout.hex_to_pixel(AxialCoord::new(0, 1));
        assert!((south.y - 60.0).abs() < 1e-3);
    }

    #[test]
    fn points_near_a_center_round_to_that_cell() {
        let layout = HexLayout::new(40.0);
        let center = layout.hex_to_pixel(AxialCoord::new(3, -2));
        for (dx, dy) in [(10.0, 0.0), (-15.0, 12.0), (0.0, -30.0), (25.0, 10.0)] {
            let hit = layout.pixel_to_hex(center + Point::new(dx, dy));
            assert_eq!(hit, AxialCoord::new(3, -2), "offset ({dx}, {dy})");
        }
    }

    #[test]
    fn rounding_keeps_cube_sum_zero() {
        // Naive rounding of (0.4, 0.4) gives (0, 0) with s = -1, an invalid cube.
        let c = hex_round(0.4, 0.4);
        assert_eq!(c.q + c.r + c.s(), 0);
        assert_eq!(c, AxialCoord::new(0, 1));
    }

    #[test]
    fn corners_sit_on_the_circle() {
        let corners = HexLayout::corners(Point::new(5.0, 5.0), 10.0);
        for corner in corners {
            assert!((corner.distance(Point::new(5.0, 5.0)) - 10.0).abs() < 1e-4);
        }
        // First corner at -30 degrees: right of and above the center.
        assert!(corners[0].x > 5.0 && corners[0].y < 5.0);
    }

    #[test]
    fn hexagon_counts_and_bounds() {
        assert_eq!(hexagon(0).count(), 1);
        assert_eq!(hexagon(1).count(), 7);
        assert_eq!(hexagon(15).count(), 3 * 15 * 16 + 1);
        assert!(hexagon(4).all(|c| c.within_radius(4)));
        assert_eq!(hexagon(-2).count(), 1);
    }

    proptest! {
        #[test]
        fn pixel_round_trip(q in -500i32..500, r in -500i32..500) {
            let layout = HexLayout::new(40.0);
            let coord = AxialCoord::new(q, r);
            prop_assert_eq!(layout.pixel_to_hex(layout.hex_to_pixel(coord)), coord);
        }

        #[test]
        fn rounding_always_yields_a_lattice_point(q in -100.0f32..100.0, r in -100.0f32..100.0) {
            let c = hex_round(q, r);
            prop_assert_eq!(c.q + c.r + c.s(), 0);
            prop_assert!((c.q as f32 - q).abs() <= 1.001);
            prop_assert!((c.r as f32 - r).abs() <= 1.001);
        }
    }
}
