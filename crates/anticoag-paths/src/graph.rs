//! Directed path graph built from a fitted model and a node layout.

use std::collections::HashMap;

use anticoag_core::config::LayoutConfig;
use anticoag_core::errors::GraphError;
use anticoag_sem::FittedModel;
use petgraph::stable_graph::{NodeIndex, StableGraph};
use petgraph::visit::{EdgeRef, IntoEdgeReferences};
use petgraph::Directed;

/// A variable placed in the diagram, in layout units.
#[derive(Debug, Clone, PartialEq)]
pub struct PathNode {
    pub variable: String,
    pub label: String,
    pub x: f64,
    pub y: f64,
}

/// A regression path from predictor to outcome.
#[derive(Debug, Clone, PartialEq)]
pub struct PathEdge {
    /// The path coefficient.
    pub weight: f64,
    /// The coefficient with two decimals.
    pub label: String,
}

/// Stable directed graph plus a variable-name index.
#[derive(Debug, Clone, Default)]
pub struct PathGraph {
    pub graph: StableGraph<PathNode, PathEdge, Directed>,
    pub node_index: HashMap<String, NodeIndex>,
}

impl PathGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// One node per layout entry, one edge per regression row.
    pub fn from_fitted(model: &FittedModel, layout: &LayoutConfig) -> Result<Self, GraphError> {
        let mut graph = Self::new();
        for node in &layout.nodes {
            graph.add_node(PathNode {
                variable: node.variable.clone(),
                label: node.label.clone(),
                x: node.x,
                y: node.y,
            })?;
        }

        for row in model.regressions() {
            // Edges run predictor -> outcome.
            let source = graph.require(&row.rval)?;
            let target = graph.require(&row.lval)?;
            graph.graph.add_edge(
                source,
                target,
                PathEdge {
                    weight: row.estimate,
                    label: format!("{:.2}", row.estimate),
                },
            );
        }

        tracing::debug!(
            nodes = graph.node_count(),
            edges = graph.edge_count(),
            "path graph built"
        );
        Ok(graph)
    }

    pub fn add_node(&mut self, node: PathNode) -> Result<NodeIndex, GraphError> {
        if self.node_index.contains_key(&node.variable) {
            return Err(GraphError::DuplicateNode {
                variable: node.variable,
            });
        }
        let name = node.variable.clone();
        let idx = self.graph.add_node(node);
        self.node_index.insert(name, idx);
        Ok(idx)
    }

    pub fn get_node(&self, variable: &str) -> Option<NodeIndex> {
        self.node_index.get(variable).copied()
    }

    fn require(&self, variable: &str) -> Result<NodeIndex, GraphError> {
        self.get_node(variable).ok_or_else(|| GraphError::UnknownVariable {
            variable: variable.to_string(),
        })
    }

    pub fn node_count(&self) -> usize {
        self.graph.node_count()
    }

    pub fn edge_count(&self) -> usize {
        self.graph.edge_count()
    }

    pub fn nodes(&self) -> impl Iterator<Item = &PathNode> {
        self.graph.node_weights()
    }

    /// Edges as `(source, target, edge)` triples.
    pub fn edges(&self) -> impl Iterator<Item = (&PathNode, &PathNode, &PathEdge)> {
        self.graph.edge_references().filter_map(move |e| {
            Some((
                self.graph.node_weight(e.source())?,
                self.graph.node_weight(e.target())?,
                e.weight(),
            ))
        })
    }

    /// The edge from `source` to `target`, if present.
    pub fn edge(&self, source: &str, target: &str) -> Option<&PathEdge> {
        let s = self.get_node(source)?;
        let t = self.get_node(target)?;
        let idx = self.graph.find_edge(s, t)?;
        self.graph.edge_weight(idx)
    }
}
