use mw_core::{GraphNode, NodeId, Point, Rgba, Surface};

use crate::config::ForceConfig;
use crate::layout::ForceLayout;
use crate::style::NodeStyle;

const GRID_SPACING: f32 = 50.0;
const EDGE_WIDTH: f32 = 2.0;
const HALO_SCALE: f32 = 3.0;
const HALO_ALPHA: f32 = 0.4;
const LABEL_SIZE: f32 = 10.0;
const LABEL_GAP: f32 = 15.0;

const BACKGROUND: Rgba = Rgba::rgb(0x0a, 0x0a, 0x0f);
const EDGE: Rgba = Rgba::new(0, 255, 200, 77);
const LABEL: Rgba = Rgba::rgb(0xee, 0xee, 0xee);

/// What to draw this frame.
#[derive(Debug, Clone, Copy)]
pub struct GraphFrame<'a> {
    /// Every node of the graph.
    pub nodes: &'a [GraphNode],
    /// Node under the pointer, always labelled.
    pub hovered: Option<&'a NodeId>,
}

/// Draws the node graph with the world origin at the canvas center.
#[derive(Debug, Clone)]
pub struct GraphRenderer {
    label_levels: u32,
}

impl Default for GraphRenderer {
    fn default() -> Self {
        Self::new(&ForceConfig::default())
    }
}

impl GraphRenderer {
    /// Create a renderer using the label settings of `config`.
    pub fn new(config: &ForceConfig) -> Self {
        Self {
            label_levels: config.label_levels,
        }
    }

    /// Draw one frame; returns the number of nodes drawn.
    pub fn draw(
        &self,
        surface: &mut impl Surface,
        layout: &ForceLayout,
        frame: &GraphFrame<'_>,
    ) -> usize {
        let (width, height) = surface.size();
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return 0;
        }
        surface.clear(BACKGROUND);
        draw_grid(surface, width, height);

        let center = Point::new(width / 2.0, height / 2.0);
        let screen = |id: &NodeId| layout.position(id).map(|p| p + center);

        for node in frame.nodes {
            let Some(parent) = &node.parent_id else {
                continue;
            };
            if let (Some(from), Some(to)) = (screen(parent), screen(&node.id)) {
                surface.line(from, to, EDGE_WIDTH, EDGE);
            }
        }

        let mut drawn = 0;
        for node in frame.nodes {
            let Some(pos) = screen(&node.id) else {
                continue;
            };
            let style = NodeStyle::for_node(node);
            surface.radial_glow(pos, style.radius * HALO_SCALE, style.color.fade(HALO_ALPHA));
            surface.fill_circle(pos, style.radius, style.color);
            if self.shows_label(node, frame.hovered) {
                let below = pos + Point::new(0.0, style.radius + LABEL_GAP);
                surface.text(&node.title, below, LABEL_SIZE, LABEL);
            }
            drawn += 1;
        }
        drawn
    }

    fn shows_label(&self, node: &GraphNode, hovered: Option<&NodeId>) -> bool {
        node.level < self.label_levels || node.is_root() || hovered == Some(&node.id)
    }
}

fn draw_grid(surface: &mut impl Surface, width: f32, height: f32) {
    let color = Rgba::WHITE.with_alpha(0.05);
    let x_shift = (width % GRID_SPACING) / 2.0;
    let mut x = -GRID_SPACING;
    while x < width + GRID_SPACING {
        let at = x + x_shift;
        surface.line(Point::new(at, 0.0), Point::new(at, height), 1.0, color);
        x += GRID_SPACING;
    }
    let y_shift = (height % GRID_SPACING) / 2.0;
    let mut y = 0.0;
    while y < height {
        let at = y + y_shift;
        surface.line(Point::new(0.0, at), Point::new(width, at), 1.0, color);
        y += GRID_SPACING;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mw_core::NodeKind;
    use mw_core::surface::{DrawCommand, Recorder};

    fn tree() -> Vec<GraphNode> {
        let root = GraphNode::root("root", "BIG BANG");
        let a = GraphNode::child_of(&root, "a", NodeKind::Splitter, "Fork");
        let b = GraphNode::child_of(&a, "b", NodeKind::Branch, "Deep Event");
        vec![root, a, b]
    }

    fn edges(r: &Recorder) -> usize {
        r.count(|c| matches!(c, DrawCommand::Line { width, .. } if *width == EDGE_WIDTH))
    }

    #[test]
    fn empty_surface_draws_nothing() {
        let nodes = tree();
        let mut layout = ForceLayout::default();
        layout.sync(&nodes);
        let mut surface = Recorder::new(0.0, 0.0);
        let frame = GraphFrame { nodes: &nodes, hovered: None };
        assert_eq!(GraphRenderer::default().draw(&mut surface, &layout, &frame), 0);
        assert!(surface.commands.is_empty());
    }

    #[test]
    fn grid_covers_the_canvas() {
        let layout = ForceLayout::default();
        let mut surface = Recorder::new(500.0, 200.0);
        let frame = GraphFrame { nodes: &[], hovered: None };
        GraphRenderer::default().draw(&mut surface, &layout, &frame);
        assert_eq!(surface.commands[0], DrawCommand::Clear(BACKGROUND));
        // 12 vertical lines from -50 to 500, 4 horizontal from 0 to 150.
        assert_eq!(surface.count(|c| matches!(c, DrawCommand::Line { .. })), 16);
    }

    #[test]
    fn edges_are_drawn_beneath_nodes() {
        let nodes = tree();
        let mut layout = ForceLayout::default();
        layout.sync(&nodes);
        let mut surface = Recorder::new(800.0, 600.0);
        let frame = GraphFrame { nodes: &nodes, hovered: None };
        let drawn = GraphRenderer::default().draw(&mut surface, &layout, &frame);
        assert_eq!(drawn, 3);
        assert_eq!(edges(&surface), 2);

        let last_edge = surface
            .commands
            .iter()
            .rposition(|c| matches!(c, DrawCommand::Line { width, .. } if *width == EDGE_WIDTH));
        let first_core = surface
            .commands
            .iter()
            .position(|c| matches!(c, DrawCommand::FillCircle { .. }));
        assert!(last_edge < first_core);
    }

    #[test]
    fn orphan_edges_are_skipped() {
        let orphan = GraphNode {
            parent_id: Some(NodeId::new("ghost")),
            ..GraphNode::root("orphan", "Lost")
        };
        let nodes = vec![orphan];
        let mut layout = ForceLayout::default();
        layout.sync(&nodes);
        let mut surface = Recorder::new(800.0, 600.0);
        let frame = GraphFrame { nodes: &nodes, hovered: None };
        GraphRenderer::default().draw(&mut surface, &layout, &frame);
        assert_eq!(edges(&surface), 0);
    }

    #[test]
    fn deep_nodes_are_labelled_only_when_hovered() {
        let nodes = tree();
        let mut layout = ForceLayout::default();
        layout.sync(&nodes);
        let renderer = GraphRenderer::default();

        let mut surface = Recorder::new(800.0, 600.0);
        let frame = GraphFrame { nodes: &nodes, hovered: None };
        renderer.draw(&mut surface, &layout, &frame);
        assert_eq!(surface.texts(), vec!["BIG BANG", "Fork"]);

        surface.reset();
        let hovered = NodeId::new("b");
        let frame = GraphFrame { nodes: &nodes, hovered: Some(&hovered) };
        renderer.draw(&mut surface, &layout, &frame);
        assert_eq!(surface.texts(), vec!["BIG BANG", "Fork", "Deep Event"]);
    }

    #[test]
    fn halo_and_core_sit_on_the_node() {
        let nodes = vec![GraphNode::root("root", "BIG BANG")];
        let mut layout = ForceLayout::default();
        layout.sync(&nodes);
        let mut surface = Recorder::new(800.0, 600.0);
        let frame = GraphFrame { nodes: &nodes, hovered: None };
        GraphRenderer::default().draw(&mut surface, &layout, &frame);

        let expected = layout.position(&nodes[0].id).unwrap() + Point::new(400.0, 300.0);
        let glow = surface.commands.iter().find_map(|c| match c {
            DrawCommand::Glow { center, radius, color } => Some((*center, *radius, *color)),
            _ => None,
        });
        let (center, radius, color) = glow.unwrap();
        assert_eq!(center, expected);
        assert!((radius - 45.0).abs() < f32::EPSILON);
        assert_eq!(color.a, 102);
    }
}
