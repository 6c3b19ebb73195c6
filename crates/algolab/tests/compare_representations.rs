use algolab::graph::compare::{self, matrix_to_index_list, TraversalAlgorithm};
use algolab::{to_matrix, AdjacencyMatrix, EngineError, Graph};

fn diamond() -> Graph {
    Graph::from_edges(
        false,
        [
            ("A", "B", 4.0),
            ("A", "C", 2.0),
            ("B", "C", 1.0),
            ("B", "D", 5.0),
            ("C", "D", 8.0),
        ],
    )
    .unwrap()
}

#[test]
fn both_representations_visit_the_same_nodes() {
    let matrix = to_matrix(&diamond());
    for algorithm in [TraversalAlgorithm::Bfs, TraversalAlgorithm::Dfs] {
        let report = compare::compare(&matrix, algorithm).unwrap();
        assert_eq!(report.visited_count, 4, "{algorithm:?}");
    }
}

#[test]
fn unreachable_nodes_stay_unvisited_in_both() {
    // Node 2 is disconnected from node 0.
    let matrix = AdjacencyMatrix::from_rows(vec![
        vec![0.0, 1.0, 0.0],
        vec![1.0, 0.0, 0.0],
        vec![0.0, 0.0, 0.0],
    ])
    .unwrap();
    for algorithm in [TraversalAlgorithm::Bfs, TraversalAlgorithm::Dfs] {
        let report = compare::compare(&matrix, algorithm).unwrap();
        assert_eq!(report.visited_count, 2, "{algorithm:?}");
    }
}

#[test]
fn empty_matrix_is_rejected() {
    let matrix = AdjacencyMatrix::from_rows(Vec::new()).unwrap();
    let err = compare::compare(&matrix, TraversalAlgorithm::Bfs).unwrap_err();
    assert!(matches!(err, EngineError::InvalidInput(_)));
}

#[test]
fn derived_index_list_matches_nonzero_entries() {
    let rows = vec![
        vec![0.0, 4.0, 2.0],
        vec![4.0, 0.0, 0.0],
        vec![2.0, 0.0, 0.0],
    ];
    let list = matrix_to_index_list(&rows);
    assert_eq!(list, vec![vec![1, 2], vec![0], vec![0]]);
}

#[test]
fn directed_matrix_traversal_respects_arc_direction() {
    // 0 -> 1, 1 -> 2, nothing back.
    let matrix = AdjacencyMatrix::from_rows(vec![
        vec![0.0, 1.0, 0.0],
        vec![0.0, 0.0, 1.0],
        vec![0.0, 0.0, 0.0],
    ])
    .unwrap();
    let report = compare::compare(&matrix, TraversalAlgorithm::Bfs).unwrap();
    assert_eq!(report.visited_count, 3);
}
