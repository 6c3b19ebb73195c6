//! Representation comparator: the same traversal over an adjacency matrix
//! and an adjacency list, timed.
//!
//! These traversals record no snapshots: the comparison is about raw
//! representation cost, so the timing window brackets only the traversal
//! itself and both runs do identical logical work.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use serde::Serialize;

use crate::error::EngineError;

use super::convert::AdjacencyMatrix;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub enum TraversalAlgorithm {
    Bfs,
    Dfs,
}

impl TraversalAlgorithm {
    pub fn name(&self) -> &'static str {
        match self {
            TraversalAlgorithm::Bfs => "bfs",
            TraversalAlgorithm::Dfs => "dfs",
        }
    }
}

/// Timed matrix-vs-list comparison of one traversal from node 0.
#[derive(Debug, Clone, Serialize)]
pub struct ComparisonReport {
    pub algorithm: TraversalAlgorithm,
    pub matrix_time: Duration,
    pub list_time: Duration,
    /// Nodes reached from node 0; identical for both representations.
    pub visited_count: usize,
}

/// Run `algorithm` from node 0 over the matrix and over its derived
/// adjacency-list form, timing each.  The visited outcomes are checked
/// against each other; a divergence would mean the conversion lost
/// connectivity and is reported as [`EngineError::InvalidInput`].
pub fn compare(
    matrix: &AdjacencyMatrix,
    algorithm: TraversalAlgorithm,
) -> Result<ComparisonReport, EngineError> {
    if matrix.is_empty() {
        return Err(EngineError::InvalidInput(
            "adjacency matrix is empty".to_string(),
        ));
    }

    let list = matrix_to_index_list(&matrix.rows);

    let started = Instant::now();
    let matrix_visited = match algorithm {
        TraversalAlgorithm::Bfs => bfs_matrix(&matrix.rows, 0),
        TraversalAlgorithm::Dfs => dfs_matrix(&matrix.rows, 0),
    };
    let matrix_time = started.elapsed();

    let started = Instant::now();
    let list_visited = match algorithm {
        TraversalAlgorithm::Bfs => bfs_list(&list, 0),
        TraversalAlgorithm::Dfs => dfs_list(&list, 0),
    };
    let list_time = started.elapsed();

    if matrix_visited != list_visited {
        return Err(EngineError::InvalidInput(
            "matrix and list traversals disagree on the visited set".to_string(),
        ));
    }

    Ok(ComparisonReport {
        algorithm,
        matrix_time,
        list_time,
        visited_count: matrix_visited.iter().filter(|&&v| v).count(),
    })
}

/// Index adjacency list derived from the matrix: row i → the columns j
/// with a nonzero entry.
pub fn matrix_to_index_list(rows: &[Vec<f64>]) -> Vec<Vec<usize>> {
    rows.iter()
        .map(|row| {
            row.iter()
                .enumerate()
                .filter(|(_, &w)| w != 0.0)
                .map(|(j, _)| j)
                .collect()
        })
        .collect()
}

fn bfs_matrix(rows: &[Vec<f64>], start: usize) -> Vec<bool> {
    let mut visited = vec![false; rows.len()];
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);
    while let Some(node) = queue.pop_front() {
        for (i, &connected) in rows[node].iter().enumerate() {
            if connected != 0.0 && !visited[i] {
                visited[i] = true;
                queue.push_back(i);
            }
        }
    }
    visited
}

fn dfs_matrix(rows: &[Vec<f64>], start: usize) -> Vec<bool> {
    let mut visited = vec![false; rows.len()];
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        for (i, &connected) in rows[node].iter().enumerate().rev() {
            if connected != 0.0 && !visited[i] {
                stack.push(i);
            }
        }
    }
    visited
}

fn bfs_list(adj: &[Vec<usize>], start: usize) -> Vec<bool> {
    let mut visited = vec![false; adj.len()];
    let mut queue = VecDeque::new();
    visited[start] = true;
    queue.push_back(start);
    while let Some(node) = queue.pop_front() {
        for &nbr in &adj[node] {
            if !visited[nbr] {
                visited[nbr] = true;
                queue.push_back(nbr);
            }
        }
    }
    visited
}

fn dfs_list(adj: &[Vec<usize>], start: usize) -> Vec<bool> {
    let mut visited = vec![false; adj.len()];
    let mut stack = vec![start];
    while let Some(node) = stack.pop() {
        if visited[node] {
            continue;
        }
        visited[node] = true;
        for &nbr in adj[node].iter().rev() {
            if !visited[nbr] {
                stack.push(nbr);
            }
        }
    }
    visited
}
