//! Weighted/unweighted, directed/undirected graph model and the algorithms
//! that run over it.
//!
//! Adjacency is insertion-ordered (`IndexMap`), so neighbor enumeration,
//! and with it every recorded traversal, is deterministic across runs.

pub mod compare;
pub mod convert;
pub mod mst;
pub mod shortest_path;
pub mod traverse;

use indexmap::IndexMap;
use serde::Serialize;

use crate::error::EngineError;

/// Node identifier; any label the caller hands in.
pub type NodeId = String;

/// One logical edge.  For an undirected graph the edge is usable from
/// either endpoint even though `u`/`v` keep the insertion orientation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Edge {
    pub u: NodeId,
    pub v: NodeId,
    pub weight: f64,
}

/// Graph over string-labeled nodes with `f64` edge weights.
///
/// Endpoints referenced by an edge are inserted implicitly.  Re-adding an
/// existing edge (same orientation for directed graphs, either orientation
/// for undirected ones) overwrites its weight.
#[derive(Debug, Clone, Serialize)]
pub struct Graph {
    directed: bool,
    adjacency: IndexMap<NodeId, IndexMap<NodeId, f64>>,
    edges: Vec<Edge>,
}

impl Graph {
    pub fn undirected() -> Self {
        Self::new(false)
    }

    pub fn directed() -> Self {
        Self::new(true)
    }

    fn new(directed: bool) -> Self {
        Self {
            directed,
            adjacency: IndexMap::new(),
            edges: Vec::new(),
        }
    }

    /// Build a graph from `(u, v, weight)` triples.
    pub fn from_edges<S, I>(directed: bool, edges: I) -> Result<Self, EngineError>
    where
        S: Into<NodeId>,
        I: IntoIterator<Item = (S, S, f64)>,
    {
        let mut graph = Self::new(directed);
        for (u, v, w) in edges {
            graph.add_edge(u, v, w)?;
        }
        Ok(graph)
    }

    pub fn is_directed(&self) -> bool {
        self.directed
    }

    pub fn add_node(&mut self, id: impl Into<NodeId>) {
        self.adjacency.entry(id.into()).or_default();
    }

    /// Insert (or re-weight) an edge.  Weights must be finite.
    pub fn add_edge(
        &mut self,
        u: impl Into<NodeId>,
        v: impl Into<NodeId>,
        weight: f64,
    ) -> Result<(), EngineError> {
        if !weight.is_finite() {
            return Err(EngineError::InvalidInput(format!(
                "edge weight must be finite, got {weight}"
            )));
        }
        let u = u.into();
        let v = v.into();
        self.add_node(u.clone());
        self.add_node(v.clone());

        self.adjacency
            .get_mut(&u)
            .expect("endpoint just inserted")
            .insert(v.clone(), weight);
        if !self.directed {
            self.adjacency
                .get_mut(&v)
                .expect("endpoint just inserted")
                .insert(u.clone(), weight);
        }

        let directed = self.directed;
        let existing = self
            .edges
            .iter_mut()
            .find(|e| (e.u == u && e.v == v) || (!directed && e.u == v && e.v == u));
        match existing {
            Some(e) => e.weight = weight,
            None => self.edges.push(Edge { u, v, weight }),
        }
        Ok(())
    }

    /// Insert an edge with the default weight of 1.
    pub fn add_edge_unweighted(
        &mut self,
        u: impl Into<NodeId>,
        v: impl Into<NodeId>,
    ) -> Result<(), EngineError> {
        self.add_edge(u, v, 1.0)
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn contains_node(&self, id: &str) -> bool {
        self.adjacency.contains_key(id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeId> {
        self.adjacency.keys()
    }

    /// Neighbors of `id` with edge weights, in insertion order.  Empty for
    /// unknown nodes.
    pub fn neighbors(&self, id: &str) -> impl Iterator<Item = (&NodeId, f64)> {
        self.adjacency
            .get(id)
            .into_iter()
            .flat_map(|nbrs| nbrs.iter().map(|(n, &w)| (n, w)))
    }

    /// Logical edges in insertion order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Weight of the arc `u -> v`, if present.
    pub fn weight(&self, u: &str, v: &str) -> Option<f64> {
        self.adjacency.get(u).and_then(|nbrs| nbrs.get(v)).copied()
    }

    pub fn has_negative_edge(&self) -> bool {
        self.edges.iter().any(|e| e.weight < 0.0)
    }

    /// Position of `id` in node insertion order.
    pub(crate) fn node_index(&self, id: &str) -> Option<usize> {
        self.adjacency.get_index_of(id)
    }

    /// Directed arcs: each directed edge once, each undirected edge as two
    /// opposite arcs of equal weight.
    pub(crate) fn arcs(&self) -> impl Iterator<Item = (&NodeId, &NodeId, f64)> {
        self.adjacency
            .iter()
            .flat_map(|(u, nbrs)| nbrs.iter().map(move |(v, &w)| (u, v, w)))
    }
}
