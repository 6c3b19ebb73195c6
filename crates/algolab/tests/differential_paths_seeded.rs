//! Seeded differential checks: two independent algorithms must agree on
//! the same random graphs.  Integer-valued weights keep every distance sum
//! exact in `f64`, so agreement is literal equality.

use algolab::{bellman_ford, dijkstra, minimum_spanning_tree, Graph, MstMethod};
use algolab_util::Fuzzer;

const SEEDS: [u64; 5] = [
    0x5eed_c0de,
    0x0000_0001,
    0x0000_00ff,
    0x00c0_ffee,
    0x1234_5678,
];

#[test]
fn dijkstra_and_bellman_ford_agree_on_non_negative_graphs() {
    for seed in SEEDS {
        let fuzzer = Fuzzer::from_seed_u64(seed);
        for _ in 0..10 {
            let nodes = fuzzer.random_int(2, 12) as usize;
            let edges = fuzzer.random_connected_edges(nodes, 0.3, 1, 20);
            let graph = Graph::from_edges(false, edges).unwrap();

            let d = dijkstra(&graph, "0").unwrap();
            let bf = bellman_ford(&graph, "0").unwrap();

            assert_eq!(
                d.distances.len(),
                bf.distances.len(),
                "reachable sets differ (seed={seed})"
            );
            for (node, &dist) in &d.distances {
                assert_eq!(
                    bf.distances[node], dist,
                    "distance to {node} differs (seed={seed})"
                );
            }
        }
    }
}

#[test]
fn prim_and_kruskal_agree_on_total_weight() {
    for seed in SEEDS {
        let fuzzer = Fuzzer::from_seed_u64(seed);
        for _ in 0..10 {
            let nodes = fuzzer.random_int(2, 12) as usize;
            let edges = fuzzer.random_connected_edges(nodes, 0.3, 1, 20);
            let graph = Graph::from_edges(false, edges).unwrap();

            let prim = minimum_spanning_tree(&graph, MstMethod::Prim).unwrap();
            let kruskal = minimum_spanning_tree(&graph, MstMethod::Kruskal).unwrap();

            assert_eq!(prim.edges.len(), nodes - 1, "not spanning (seed={seed})");
            assert_eq!(kruskal.edges.len(), nodes - 1, "not spanning (seed={seed})");
            assert_eq!(
                prim.total_weight, kruskal.total_weight,
                "total weight differs (seed={seed})"
            );
        }
    }
}

#[test]
fn traversals_reach_the_same_nodes_as_shortest_paths() {
    use algolab::bfs;

    for seed in SEEDS {
        let fuzzer = Fuzzer::from_seed_u64(seed);
        let nodes = fuzzer.random_int(3, 15) as usize;
        // Not necessarily connected at this density.
        let edges = fuzzer.random_edges(nodes, 0.2, 1, 9);
        let mut graph = Graph::from_edges(false, edges).unwrap();
        graph.add_node("0");

        let reached = bfs(&graph, "0").unwrap().order;
        let distances = dijkstra(&graph, "0").unwrap().distances;
        assert_eq!(
            reached.len(),
            distances.len(),
            "BFS and Dijkstra disagree on reachability (seed={seed})"
        );
        for node in &reached {
            assert!(distances.contains_key(node), "missing {node} (seed={seed})");
        }
    }
}
