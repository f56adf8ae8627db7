//! Pointer handling for the hex map.
//!
//! Dragging pans the camera. While not dragging, the pointer is hit-tested
//! against the grid and changes of the hovered location are reported. A
//! press released without noticeable travel counts as a click and selects
//! whatever location is under the pointer.

use mw_core::{AxialCoord, Point, WorldView};

use crate::camera::Camera;
use crate::config::MapConfig;
use crate::layout::HexLayout;

/// Something the host should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEvent {
    /// The location under the pointer changed.
    HoverChanged(Option<String>),
    /// The user clicked; carries the location under the pointer, if any.
    Selected(Option<String>),
}

#[derive(Debug, Clone, Copy)]
struct Drag {
    last: Point,
    travel: f32,
}

/// Camera plus pointer state of one map view.
#[derive(Debug, Clone)]
pub struct MapController {
    camera: Camera,
    layout: HexLayout,
    map_radius: i32,
    click_slop: f32,
    drag: Option<Drag>,
    hovered_cell: Option<AxialCoord>,
    hovered_location: Option<String>,
}

impl Default for MapController {
    fn default() -> Self {
        Self::new(&MapConfig::default())
    }
}

impl MapController {
    /// A controller with a fresh camera.
    pub fn new(config: &MapConfig) -> Self {
        Self {
            camera: Camera::from_config(config),
            layout: HexLayout::new(config.hex_size),
            map_radius: config.map_radius,
            click_slop: config.click_slop,
            drag: None,
            hovered_cell: None,
            hovered_location: None,
        }
    }

    /// The current view.
    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    /// Mutable access to the view, for keyboard shortcuts.
    pub fn camera_mut(&mut self) -> &mut Camera {
        &mut self.camera
    }

    /// Cell under the pointer, if inside the map.
    pub fn hovered_cell(&self) -> Option<AxialCoord> {
        self.hovered_cell
    }

    /// Id of the location under the pointer.
    pub fn hovered_location(&self) -> Option<&str> {
        self.hovered_location.as_deref()
    }

    /// Whether a drag is in progress.
    pub fn is_dragging(&self) -> bool {
        self.drag.is_some()
    }

    /// Map cell under a screen point, or `None` outside the map.
    pub fn hit_test(&self, pointer: Point, canvas_center: Point) -> Option<AxialCoord> {
        let world = self.camera.screen_to_world(pointer, canvas_center);
        if !world.is_finite() {
            return None;
        }
        let coord = self.layout.pixel_to_hex(world);
        coord.within_radius(self.map_radius).then_some(coord)
    }

    /// Start a drag.
    pub fn pointer_down(&mut self, pointer: Point) {
        self.drag = Some(Drag {
            last: pointer,
            travel: 0.0,
        });
    }

    /// Pan while dragging, otherwise update the hover.
    pub fn pointer_move(
        &mut self,
        pointer: Point,
        canvas_center: Point,
        world: &WorldView,
    ) -> Option<MapEvent> {
        if let Some(drag) = &mut self.drag {
            let delta = pointer - drag.last;
            drag.last = pointer;
            drag.travel += delta.length();
            self.camera.pan(delta.x, delta.y);
            return None;
        }
        self.hovered_cell = self.hit_test(pointer, canvas_center);
        let location = self.location_under(world);
        self.set_hovered_location(location)
    }

    /// End a drag; a release close to where it started is a click.
    pub fn pointer_up(
        &mut self,
        pointer: Point,
        canvas_center: Point,
        world: &WorldView,
    ) -> Option<MapEvent> {
        let drag = self.drag.take()?;
        if drag.travel + drag.last.distance(pointer) >= self.click_slop {
            return None;
        }
        self.hovered_cell = self.hit_test(pointer, canvas_center);
        let selected = self.location_under(world);
        tracing::debug!(location = ?selected, "map click");
        Some(MapEvent::Selected(selected))
    }

    /// The pointer left the canvas: stop dragging and clear the hover.
    pub fn pointer_leave(&mut self) -> Option<MapEvent> {
        self.drag = None;
        self.hovered_cell = None;
        self.set_hovered_location(None)
    }

    /// Zoom by a wheel delta (positive zooms out).
    pub fn wheel(&mut self, delta: f32) {
        self.camera.zoom(delta);
    }

    /// Forget hover state, for example after switching worlds.
    pub fn clear_hover(&mut self) {
        self.hovered_cell = None;
        self.hovered_location = None;
    }

    fn location_under(&self, world: &WorldView) -> Option<String> {
        self.hovered_cell
            .and_then(|coord| world.location_at(coord))
            .map(|location| location.id.clone())
    }

    fn set_hovered_location(&mut self, location: Option<String>) -> Option<MapEvent> {
        if self.hovered_location == location {
            return None;
        }
        self.hovered_location.clone_from(&location);
        Some(MapEvent::HoverChanged(location))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mw_core::{TerrainType, Theme, WorldLocation};

    const CENTER: Point = Point::new(400.0, 300.0);

    fn world() -> WorldView {
        WorldView::new("journey_west", "Journey to the West", Theme::Terrestrial).with_location(
            WorldLocation {
                id: "flower_fruit".into(),
                name: "Flower Fruit Mountain".into(),
                terrain: TerrainType::Mountain,
                description: String::new(),
                q: 1,
                r: 0,
            },
        )
    }

    fn screen_of(controller: &MapController, coord: AxialCoord) -> Point {
        let world = HexLayout::new(40.0).hex_to_pixel(coord);
        controller.camera().world_to_screen(world, CENTER)
    }

    #[test]
    fn hover_reports_changes_only() {
        let world = world();
        let mut c = MapController::default();
        let target = screen_of(&c, AxialCoord::new(1, 0));

        assert_eq!(
            c.pointer_move(target, CENTER, &world),
            Some(MapEvent::HoverChanged(Some("flower_fruit".into())))
        );
        assert_eq!(c.pointer_move(target + Point::new(2.0, 1.0), CENTER, &world), None);
        assert_eq!(c.hovered_cell(), Some(AxialCoord::new(1, 0)));

        assert_eq!(
            c.pointer_move(CENTER, CENTER, &world),
            Some(MapEvent::HoverChanged(None))
        );
        assert_eq!(c.hovered_cell(), Some(AxialCoord::ORIGIN));
    }

    #[test]
    fn outside_the_map_hits_nothing() {
        let c = MapController::default();
        assert_eq!(c.hit_test(Point::new(1.0e6, 0.0), CENTER), None);
        assert_eq!(c.hit_test(CENTER, CENTER), Some(AxialCoord::ORIGIN));
    }

    #[test]
    fn drag_pans_without_hover_testing() {
        let world = world();
        let mut c = MapController::default();
        c.pointer_down(CENTER);
        assert!(c.is_dragging());
        let target = screen_of(&c, AxialCoord::new(1, 0));
        assert_eq!(c.pointer_move(target, CENTER, &world), None);
        assert_eq!(c.hovered_location(), None);
        assert_eq!(c.camera().offset(), target - CENTER);

        assert_eq!(c.pointer_up(target, CENTER, &world), None);
        assert!(!c.is_dragging());
    }

    #[test]
    fn short_press_selects_location() {
        let world = world();
        let mut c = MapController::default();
        let target = screen_of(&c, AxialCoord::new(1, 0));
        c.pointer_down(target);
        c.pointer_move(target + Point::new(1.0, 1.0), CENTER, &world);
        assert_eq!(
            c.pointer_up(target + Point::new(1.0, 1.0), CENTER, &world),
            Some(MapEvent::Selected(Some("flower_fruit".into())))
        );

        c.pointer_down(CENTER);
        assert_eq!(
            c.pointer_up(CENTER, CENTER, &world),
            Some(MapEvent::Selected(None))
        );
    }

    #[test]
    fn release_without_press_is_ignored() {
        let world = world();
        let mut c = MapController::default();
        assert_eq!(c.pointer_up(CENTER, CENTER, &world), None);
    }

    #[test]
    fn leave_clears_drag_and_hover() {
        let world = world();
        let mut c = MapController::default();
        let target = screen_of(&c, AxialCoord::new(1, 0));
        c.pointer_move(target, CENTER, &world);
        c.pointer_down(target);
        assert_eq!(c.pointer_leave(), Some(MapEvent::HoverChanged(None)));
        assert!(!c.is_dragging());
        assert_eq!(c.hovered_cell(), None);
        assert_eq!(c.pointer_leave(), None);
    }

    #[test]
    fn wheel_zooms() {
        let mut c = MapController::default();
        c.wheel(-200.0);
        assert!((c.camera().scale() - 1.0).abs() < 1e-5);
        c.camera_mut().reset();
        assert!((c.camera().scale() - 0.8).abs() < 1e-5);
    }
}
