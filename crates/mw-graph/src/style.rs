use mw_core::{GraphNode, NodeKind, Rgba};

/// Color and core radius of a node.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NodeStyle {
    /// Core and halo color.
    pub color: Rgba,
    /// Core radius in pixels.
    pub radius: f32,
}

impl NodeStyle {
    /// Style for `node`, by kind. Branches blend green (biomass) and blue
    /// (water).
    pub fn for_node(node: &GraphNode) -> Self {
        match node.kind {
            NodeKind::Root => Self {
                color: Rgba::WHITE,
                radius: 15.0,
            },
            NodeKind::Splitter => Self {
                color: Rgba::rgb(0xd9, 0x46, 0xef),
                radius: 12.0,
            },
            NodeKind::Branch => Self {
                color: Rgba::rgb(
                    0,
                    channel(node.stats.biomass + 50.0),
                    channel(node.stats.water + 50.0),
                ),
                radius: 10.0,
            },
        }
    }
}

fn channel(value: f32) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.clamp(0.0, 255.0).round() as u8
}
