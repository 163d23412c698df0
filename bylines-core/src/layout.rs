//! What a force-layout renderer needs besides the graph itself: canvas and
//! force parameters, plus a radius and fill per node.

use crate::graph::{ArticleGraph, GraphEdge, GraphNode};
use serde::{Deserialize, Serialize};

pub const DOMAIN_FILL: &str = "rgb(0, 0, 255)";
pub const AUTHOR_FILL: &str = "rgb(0, 255, 0)";
pub const AUTHOR_RADIUS: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LayoutConfig {
    pub width: u32,
    pub height: u32,
    pub link_distance: f64,
    /// Negative values repel
    pub charge: f64,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            width: 800,
            height: 800,
            link_distance: 50.0,
            charge: -120.0,
        }
    }
}

impl LayoutConfig {
    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_link_distance(mut self, distance: f64) -> Self {
        self.link_distance = distance;
        self
    }

    pub fn with_charge(mut self, charge: f64) -> Self {
        self.charge = charge;
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStyle {
    pub radius: f64,
    pub fill: String,
}

/// Domains grow with the number of distinct people posting to them
pub fn node_style(node: &GraphNode) -> NodeStyle {
    match node {
        GraphNode::Domain(domain) => NodeStyle {
            radius: domain.authors.len() as f64 * 2.0,
            fill: DOMAIN_FILL.to_string(),
        },
        GraphNode::Author(_) => NodeStyle {
            radius: AUTHOR_RADIUS,
            fill: AUTHOR_FILL.to_string(),
        },
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StyledNode {
    #[serde(flatten)]
    pub node: GraphNode,
    pub style: NodeStyle,
}

/// Everything handed to the renderer, in one serializable value
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderScene {
    pub layout: LayoutConfig,
    pub nodes: Vec<StyledNode>,
    pub edges: Vec<GraphEdge>,
}

impl RenderScene {
    pub fn new(graph: &ArticleGraph, layout: LayoutConfig) -> Self {
        let nodes = graph
            .nodes()
            .iter()
            .map(|node| StyledNode {
                node: node.clone(),
                style: node_style(node),
            })
            .collect();

        Self {
            layout,
            nodes,
            edges: graph.edges().to_vec(),
        }
    }
}
