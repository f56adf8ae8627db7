use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Identifier of a graph node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(pub String);

impl NodeId {
    /// Create an id from any string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for NodeId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Role of a node in the universe tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeKind {
    /// The origin of the tree.
    Root,
    /// A divergence point where timelines fork.
    Splitter,
    /// An ordinary event on a timeline.
    #[default]
    Branch,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Root => write!(f, "root"),
            Self::Splitter => write!(f, "splitter"),
            Self::Branch => write!(f, "branch"),
        }
    }
}

/// Environmental readings attached to a node, each nominally 0-100.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NodeStats {
    /// Water coverage.
    pub water: f32,
    /// Atmospheric oxygen.
    pub oxygen: f32,
    /// Living matter.
    pub biomass: f32,
}

/// One node of the evolving universe tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Unique id.
    pub id: NodeId,
    /// Parent id; `None` for roots.
    pub parent_id: Option<NodeId>,
    /// Role in the tree.
    #[serde(rename = "type", default)]
    pub kind: NodeKind,
    /// Short label.
    pub title: String,
    /// Longer text for tooltips.
    #[serde(default)]
    pub description: String,
    /// Environmental readings.
    #[serde(default)]
    pub stats: NodeStats,
    /// Depth in the tree; roots are level 0.
    #[serde(default)]
    pub level: u32,
}

impl GraphNode {
    /// Create a root node.
    pub fn root(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: NodeId::new(id),
            parent_id: None,
            kind: NodeKind::Root,
            title: title.into(),
            description: String::new(),
            stats: NodeStats::default(),
            level: 0,
        }
    }

    /// Create a child of `parent`, one level deeper.
    pub fn child_of(
        parent: &GraphNode,
        id: impl Into<String>,
        kind: NodeKind,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: NodeId::new(id),
            parent_id: Some(parent.id.clone()),
            kind,
            title: title.into(),
            description: String::new(),
            stats: NodeStats::default(),
            level: parent.level + 1,
        }
    }

    /// Set the description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Set the stats.
    pub fn with_stats(mut self, stats: NodeStats) -> Self {
        self.stats = stats;
        self
    }

    /// Whether this node has no parent.
    pub fn is_root(&self) -> bool {
        self.parent_id.is_none()
    }
}

/// Nodes that no other node names as parent.
pub fn leaves(nodes: &[GraphNode]) -> Vec<&GraphNode> {
    let parents: HashSet<&NodeId> = nodes.iter().filter_map(|n| n.parent_id.as_ref()).collect();
    nodes.iter().filter(|n| !parents.contains(&n.id)).collect()
}

/// Level for a new child of `parent_id`: one below the parent, or 1 when the
/// parent is unknown.
pub fn level_for(nodes: &[GraphNode], parent_id: &NodeId) -> u32 {
    nodes
        .iter()
        .find(|n| &n.id == parent_id)
        .map_or(1, |parent| parent.level + 1)
}
