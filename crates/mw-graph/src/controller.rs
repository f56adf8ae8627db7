use mw_core::{GraphNode, NodeId, Point};

use crate::config::ForceConfig;
use crate::layout::ForceLayout;

/// Something the host should react to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphEvent {
    /// The node under the pointer changed.
    HoverChanged(Option<NodeId>),
}

/// Pointer state of the graph view.
#[derive(Debug, Clone)]
pub struct GraphController {
    pick_radius: f32,
    hovered: Option<NodeId>,
}

impl Default for GraphController {
    fn default() -> Self {
        Self::new(&ForceConfig::default())
    }
}

impl GraphController {
    /// A controller picking within the radius of `config`.
    pub fn new(config: &ForceConfig) -> Self {
        Self {
            pick_radius: config.pick_radius,
            hovered: None,
        }
    }

    /// The hovered node, if any.
    pub fn hovered(&self) -> Option<&NodeId> {
        self.hovered.as_ref()
    }

    /// Re-pick the node under the pointer.
    pub fn pointer_move(
        &mut self,
        pointer: Point,
        canvas_center: Point,
        layout: &ForceLayout,
        nodes: &[GraphNode],
    ) -> Option<GraphEvent> {
        let picked = layout
            .pick(nodes, pointer - canvas_center, self.pick_radius)
            .map(|node| node.id.clone());
        self.set_hovered(picked)
    }

    /// A click dismisses the hover.
    pub fn click(&mut self) -> Option<GraphEvent> {
        self.set_hovered(None)
    }

    fn set_hovered(&mut self, hovered: Option<NodeId>) -> Option<GraphEvent> {
        if self.hovered == hovered {
            return None;
        }
        self.hovered.clone_from(&hovered);
        Some(GraphEvent::HoverChanged(hovered))
    }
}
