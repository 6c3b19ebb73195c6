use std::cmp::{Ordering, Reverse};
use std::collections::BinaryHeap;

use indexmap::IndexSet;
use serde::Serialize;

use crate::error::EngineError;

use super::{Edge, Graph, NodeId};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum MstMethod {
    Prim,
    Kruskal,
}

/// Minimum spanning tree (or forest, for disconnected input): the chosen
/// edges and their total weight.  A connected graph on V nodes yields
/// exactly V−1 edges.
#[derive(Debug, Clone, Serialize)]
pub struct MstRun {
    pub method: MstMethod,
    pub edges: Vec<Edge>,
    pub total_weight: f64,
}

/// Compute a minimum spanning tree of an undirected graph.
///
/// Directed graphs are rejected: the spanning-tree notion used here is the
/// undirected one.  On a disconnected graph both methods return a spanning
/// forest (Kruskal naturally, Prim by re-seeding at the next unvisited
/// node), so the two stay comparable on any input.
pub fn minimum_spanning_tree(graph: &Graph, method: MstMethod) -> Result<MstRun, EngineError> {
    if graph.is_directed() {
        return Err(EngineError::UnsupportedOperation(
            "minimum spanning tree requires an undirected graph".to_string(),
        ));
    }
    let edges = match method {
        MstMethod::Prim => prim(graph),
        MstMethod::Kruskal => kruskal(graph),
    };
    let total_weight = edges.iter().map(|e| e.weight).sum();
    Ok(MstRun {
        method,
        edges,
        total_weight,
    })
}

/// Crossing-edge candidate ordered by weight, endpoints as tiebreak.
struct Crossing {
    weight: f64,
    u: NodeId,
    v: NodeId,
}

impl PartialEq for Crossing {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Crossing {}

impl PartialOrd for Crossing {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Crossing {
    fn cmp(&self, other: &Self) -> Ordering {
        self.weight
            .total_cmp(&other.weight)
            .then_with(|| self.u.cmp(&other.u))
            .then_with(|| self.v.cmp(&other.v))
    }
}

/// Grow the tree from the first node, always taking the lightest edge that
/// crosses the cut.
fn prim(graph: &Graph) -> Vec<Edge> {
    let mut visited: IndexSet<NodeId> = IndexSet::new();
    let mut result = Vec::new();
    let mut heap: BinaryHeap<Reverse<Crossing>> = BinaryHeap::new();

    for seed in graph.nodes() {
        if visited.contains(seed) {
            continue;
        }
        visited.insert(seed.clone());
        for (nbr, w) in graph.neighbors(seed) {
            heap.push(Reverse(Crossing {
                weight: w,
                u: seed.clone(),
                v: nbr.clone(),
            }));
        }
        while let Some(Reverse(c)) = heap.pop() {
            if visited.contains(&c.v) {
                continue;
            }
            visited.insert(c.v.clone());
            for (nbr, w) in graph.neighbors(&c.v) {
                if !visited.contains(nbr) {
                    heap.push(Reverse(Crossing {
                        weight: w,
                        u: c.v.clone(),
                        v: nbr.clone(),
                    }));
                }
            }
            result.push(Edge {
                u: c.u,
                v: c.v,
                weight: c.weight,
            });
        }
    }
    result
}

/// Take edges in ascending weight order (insertion order breaks ties),
/// skipping any that would close a cycle.
fn kruskal(graph: &Graph) -> Vec<Edge> {
    let mut order: Vec<usize> = (0..graph.edges().len()).collect();
    order.sort_by(|&a, &b| {
        graph.edges()[a]
            .weight
            .total_cmp(&graph.edges()[b].weight)
    });

    let mut uf = UnionFind::new(graph.node_count());
    let mut result = Vec::new();
    for i in order {
        let e = &graph.edges()[i];
        let u = graph.node_index(&e.u).expect("edge endpoint exists");
        let v = graph.node_index(&e.v).expect("edge endpoint exists");
        if uf.union(u, v) {
            result.push(e.clone());
        }
    }
    result
}

/// Union-find with path halving and union by rank.
struct UnionFind {
    parent: Vec<usize>,
    rank: Vec<u32>,
}

impl UnionFind {
    fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
        }
    }

    fn find(&mut self, mut x: usize) -> usize {
        while self.parent[x] != x {
            self.parent[x] = self.parent[self.parent[x]];
            x = self.parent[x];
        }
        x
    }

    /// Merge the sets holding `a` and `b`; false if they were already one.
    fn union(&mut self, a: usize, b: usize) -> bool {
        let ra = self.find(a);
        let rb = self.find(b);
        if ra == rb {
            return false;
        }
        match self.rank[ra].cmp(&self.rank[rb]) {
            Ordering::Less => self.parent[ra] = rb,
            Ordering::Greater => self.parent[rb] = ra,
            Ordering::Equal => {
                self.parent[rb] = ra;
                self.rank[ra] += 1;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::UnionFind;

    #[test]
    fn union_find_merges_and_detects_cycles() {
        let mut uf = UnionFind::new(4);
        assert!(uf.union(0, 1));
        assert!(uf.union(2, 3));
        assert!(uf.union(1, 2));
        assert!(!uf.union(0, 3));
        assert_eq!(uf.find(0), uf.find(3));
    }
}
