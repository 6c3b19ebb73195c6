//! Step-recording engine for classical algorithms.
//!
//! Every algorithm here does two jobs at once: compute its textbook result
//! and append frozen snapshots of its intermediate state to a [`StepLog`],
//! so a renderer can replay the run afterwards.  The engine is synchronous
//! and single-threaded; each call owns its input for the duration and
//! leaves nothing half-mutated behind an error.
//!
//! | Module | Contents |
//! |--------|----------|
//! [`sort`] | seven step-recording sorts behind [`SortAlgorithm`] |
//! [`graph`] | graph model, BFS/DFS, Dijkstra, Bellman-Ford, MST |
//! [`graph::compare`] | timed adjacency matrix vs list comparison |
//! [`tree`] | BST/AVL/red-black sessions over `step-forest` arenas |
//! [`step`] | the append-only snapshot log |
//! [`error`] | error taxonomy and run warnings |

pub mod error;
pub mod graph;
pub mod sort;
pub mod step;
pub mod tree;

pub use error::{EngineError, EngineWarning};
pub use graph::compare::{compare, ComparisonReport, TraversalAlgorithm};
pub use graph::convert::{to_list, to_matrix, AdjacencyList, AdjacencyMatrix};
pub use graph::mst::{minimum_spanning_tree, MstMethod, MstRun};
pub use graph::shortest_path::{bellman_ford, dijkstra, PathsRun};
pub use graph::traverse::{bfs, dfs, TraversalRun};
pub use graph::{Edge, Graph, NodeId};
pub use sort::{sort, SortAlgorithm, SortRun};
pub use step::StepLog;
pub use tree::{TraversalOrder, TreeKind, TreeLab, TreeSnapshot};
