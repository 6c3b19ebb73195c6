use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use indexmap::{IndexMap, IndexSet};
use serde::Serialize;

use crate::error::{EngineError, EngineWarning};

use super::{Graph, NodeId};

/// Single-source shortest paths: distance and path per reachable node, in
/// discovery order, plus any warnings about the run's reliability.
#[derive(Debug, Clone, Serialize)]
pub struct PathsRun {
    pub source: NodeId,
    pub distances: IndexMap<NodeId, f64>,
    pub paths: IndexMap<NodeId, Vec<NodeId>>,
    pub warnings: Vec<EngineWarning>,
}

/// Frontier entry ordered by distance (total order over `f64`), with the
/// node id as a deterministic tiebreak.
struct Frontier {
    dist: f64,
    node: NodeId,
}

impl PartialEq for Frontier {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Frontier {}

impl PartialOrd for Frontier {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Frontier {
    fn cmp(&self, other: &Self) -> Ordering {
        self.dist
            .total_cmp(&other.dist)
            .then_with(|| self.node.cmp(&other.node))
    }
}

/// Dijkstra's algorithm over a binary-heap frontier.
///
/// Defined for non-negative weights.  A graph carrying a negative edge is
/// still attempted (each node settles once, so the run terminates), but
/// the result is flagged with [`EngineWarning::NegativeWeightUnsupported`].
pub fn dijkstra(graph: &Graph, source: &str) -> Result<PathsRun, EngineError> {
    if !graph.contains_node(source) {
        return Err(EngineError::NodeNotFound(source.to_string()));
    }

    let mut warnings = Vec::new();
    if graph.has_negative_edge() {
        warnings.push(EngineWarning::NegativeWeightUnsupported);
    }

    let mut dist: IndexMap<NodeId, f64> = IndexMap::new();
    let mut prev: IndexMap<NodeId, NodeId> = IndexMap::new();
    let mut settled: IndexSet<NodeId> = IndexSet::new();
    let mut heap = BinaryHeap::new();

    dist.insert(source.to_string(), 0.0);
    heap.push(Reverse(Frontier {
        dist: 0.0,
        node: source.to_string(),
    }));

    while let Some(Reverse(Frontier { dist: d, node })) = heap.pop() {
        if !settled.insert(node.clone()) {
            continue;
        }
        for (nbr, w) in graph.neighbors(&node) {
            if settled.contains(nbr) {
                continue;
            }
            let candidate = d + w;
            let better = dist.get(nbr).map_or(true, |&cur| candidate < cur);
            if better {
                dist.insert(nbr.clone(), candidate);
                prev.insert(nbr.clone(), node.clone());
                heap.push(Reverse(Frontier {
                    dist: candidate,
                    node: nbr.clone(),
                }));
            }
        }
    }

    let paths = assemble_paths(source, &dist, &prev);
    Ok(PathsRun {
        source: source.to_string(),
        distances: dist,
        paths,
        warnings,
    })
}

/// Bellman-Ford over the directed arc expansion of the graph.
///
/// Runs up to V−1 relaxation rounds over every arc (undirected edges count
/// as two opposite arcs), stopping early once a round changes nothing.  A
/// final pass that still finds a relaxable arc proves a negative-weight
/// cycle reachable from the source: the run fails hard with
/// [`EngineError::NegativeCycleDetected`] and reports no distances.
pub fn bellman_ford(graph: &Graph, source: &str) -> Result<PathsRun, EngineError> {
    if !graph.contains_node(source) {
        return Err(EngineError::NodeNotFound(source.to_string()));
    }

    let mut dist: IndexMap<NodeId, f64> = IndexMap::new();
    let mut prev: IndexMap<NodeId, NodeId> = IndexMap::new();
    dist.insert(source.to_string(), 0.0);

    let rounds = graph.node_count().saturating_sub(1);
    for _ in 0..rounds {
        let mut changed = false;
        for (u, v, w) in graph.arcs() {
            let Some(&du) = dist.get(u) else {
                continue;
            };
            let candidate = du + w;
            if dist.get(v).map_or(true, |&dv| candidate < dv) {
                dist.insert(v.clone(), candidate);
                prev.insert(v.clone(), u.clone());
                changed = true;
            }
        }
        if !changed {
            break;
        }
    }

    for (u, v, w) in graph.arcs() {
        if let Some(&du) = dist.get(u) {
            if dist.get(v).map_or(true, |&dv| du + w < dv) {
                return Err(EngineError::NegativeCycleDetected);
            }
        }
    }

    let paths = assemble_paths(source, &dist, &prev);
    Ok(PathsRun {
        source: source.to_string(),
        distances: dist,
        paths,
        warnings: Vec::new(),
    })
}

/// Rebuild source→node paths by walking the predecessor tree.
fn assemble_paths(
    source: &str,
    dist: &IndexMap<NodeId, f64>,
    prev: &IndexMap<NodeId, NodeId>,
) -> IndexMap<NodeId, Vec<NodeId>> {
    let mut paths = IndexMap::new();
    for node in dist.keys() {
        let mut path = vec![node.clone()];
        let mut curr = node;
        while curr != source {
            match prev.get(curr) {
                Some(p) => {
                    path.push(p.clone());
                    curr = p;
                }
                None => break,
            }
        }
        path.reverse();
        paths.insert(node.clone(), path);
    }
    paths
}
