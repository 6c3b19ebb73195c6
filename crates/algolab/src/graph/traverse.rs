use std::collections::VecDeque;

use indexmap::IndexSet;
use serde::Serialize;

use crate::error::EngineError;
use crate::step::StepLog;

use super::{Graph, NodeId};

/// Outcome of one recorded traversal: the final visit order and, per newly
/// visited node, a snapshot of the cumulative visited list.
#[derive(Debug, Clone, Serialize)]
pub struct TraversalRun {
    pub order: Vec<NodeId>,
    pub steps: StepLog<Vec<NodeId>>,
}

/// Breadth-first traversal from `start`.
///
/// Neighbors enqueue in adjacency insertion order.  The queue may hold a
/// node more than once; the visited check on dequeue keeps the visit
/// unique, and only a dequeue that actually visits records a snapshot.
pub fn bfs(graph: &Graph, start: &str) -> Result<TraversalRun, EngineError> {
    if !graph.contains_node(start) {
        return Err(EngineError::NodeNotFound(start.to_string()));
    }

    let mut visited: IndexSet<NodeId> = IndexSet::new();
    let mut steps = StepLog::new();
    let mut queue: VecDeque<NodeId> = VecDeque::new();
    queue.push_back(start.to_string());

    while let Some(node) = queue.pop_front() {
        if visited.contains(&node) {
            continue;
        }
        visited.insert(node.clone());
        for (nbr, _) in graph.neighbors(&node) {
            if !visited.contains(nbr) {
                queue.push_back(nbr.clone());
            }
        }
        steps.push(visited.iter().cloned().collect());
    }

    Ok(TraversalRun {
        order: visited.into_iter().collect(),
        steps,
    })
}

/// Depth-first traversal from `start`.
///
/// Unvisited neighbors are pushed in reverse insertion order so the first
/// neighbor is explored first, mirroring the recursive formulation.
pub fn dfs(graph: &Graph, start: &str) -> Result<TraversalRun, EngineError> {
    if !graph.contains_node(start) {
        return Err(EngineError::NodeNotFound(start.to_string()));
    }

    let mut visited: IndexSet<NodeId> = IndexSet::new();
    let mut steps = StepLog::new();
    let mut stack = vec![start.to_string()];

    while let Some(node) = stack.pop() {
        if visited.contains(&node) {
            continue;
        }
        visited.insert(node.clone());
        let unvisited: Vec<&NodeId> = graph
            .neighbors(&node)
            .map(|(n, _)| n)
            .filter(|n| !visited.contains(*n))
            .collect();
        for nbr in unvisited.into_iter().rev() {
            stack.push(nbr.clone());
        }
        steps.push(visited.iter().cloned().collect());
    }

    Ok(TraversalRun {
        order: visited.into_iter().collect(),
        steps,
    })
}
