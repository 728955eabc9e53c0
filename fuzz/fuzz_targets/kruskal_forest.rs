// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]

//! Fuzz target for Kruskal spanning forests.
//!
//! The forest must keep every vertex, have |V| - c edges, only use input
//! edges at their input weights, and leave the input graph untouched.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wugraph::{spanning_forest, WeightedGraph};

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    vertices: u8,
    edges: Vec<(u8, u8, i16)>,
}

fuzz_target!(|input: FuzzInput| {
    let n = input.vertices % 64;
    let mut graph = WeightedGraph::new();
    for v in 0..n {
        graph.add_vertex(v);
    }
    for (u, v, w) in input.edges.into_iter().take(400) {
        if n > 0 {
            graph.add_edge(&(u % n), &(v % n), i32::from(w));
        }
    }
    let edges_before = graph.edge_count();

    let forest = spanning_forest(&graph);
    let tree = &forest.graph;

    assert_eq!(graph.edge_count(), edges_before);
    assert_eq!(tree.vertex_count(), graph.vertex_count());
    assert_eq!(tree.edge_count() + forest.tree_count, graph.vertex_count());
    assert_eq!(tree.total_weight(), forest.total_weight);
    for edge in tree.edges() {
        assert_ne!(edge.from, edge.to, "forest contains a self-loop");
        assert_eq!(graph.weight(&edge.from, &edge.to), edge.weight);
    }
});
