use indexmap::IndexMap;
use serde::Serialize;

use crate::error::EngineError;

use super::{Graph, NodeId};

/// V×V weight matrix over the graph's nodes in insertion order.  A zero
/// entry means "no edge", so connectivity survives the conversion while an
/// explicit zero-weight edge does not; the traversal structures here never
/// need one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyMatrix {
    pub nodes: Vec<NodeId>,
    pub rows: Vec<Vec<f64>>,
}

impl AdjacencyMatrix {
    /// Wrap caller-supplied rows (an uploaded table); nodes are named by
    /// index.  Rejects ragged rows.
    pub fn from_rows(rows: Vec<Vec<f64>>) -> Result<Self, EngineError> {
        let n = rows.len();
        if rows.iter().any(|row| row.len() != n) {
            return Err(EngineError::InvalidInput(
                "adjacency matrix must be square".to_string(),
            ));
        }
        let nodes = (0..n).map(|i| i.to_string()).collect();
        Ok(Self { nodes, rows })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// Node → neighbor ids in insertion order; weights dropped.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AdjacencyList {
    pub neighbors: IndexMap<NodeId, Vec<NodeId>>,
}

/// Render the graph as an adjacency matrix.
pub fn to_matrix(graph: &Graph) -> AdjacencyMatrix {
    let nodes: Vec<NodeId> = graph.nodes().cloned().collect();
    let rows = nodes
        .iter()
        .map(|u| {
            nodes
                .iter()
                .map(|v| graph.weight(u, v).unwrap_or(0.0))
                .collect()
        })
        .collect();
    AdjacencyMatrix { nodes, rows }
}

/// Render the graph as an adjacency list.
pub fn to_list(graph: &Graph) -> AdjacencyList {
    let neighbors = graph
        .nodes()
        .map(|u| (u.clone(), graph.neighbors(u).map(|(v, _)| v.clone()).collect()))
        .collect();
    AdjacencyList { neighbors }
}
