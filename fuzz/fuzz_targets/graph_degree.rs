// SPDX-License-Identifier: MIT OR Apache-2.0
#![no_main]

//! Fuzz target for graph degree and edge bookkeeping.
//!
//! Verifies that degree() == get_neighbors().len() for each vertex, that the
//! edge count matches the sum of degrees, and that removing a vertex drops
//! exactly degree() edges.

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use wugraph::WeightedGraph;

#[derive(Arbitrary, Debug)]
enum DegreeOp {
    AddVertex { label: u8 },
    RemoveVertex { label: u8 },
    AddEdge { u: u8, v: u8, weight: i32 },
    RemoveEdge { u: u8, v: u8 },
    CheckEdge { u: u8, v: u8 },
    VerifyDegreeInvariant { label: u8 },
}

#[derive(Arbitrary, Debug)]
struct FuzzInput {
    ops: Vec<DegreeOp>,
}

fn check_degree(graph: &WeightedGraph<u8>, label: u8) {
    let degree = graph.degree(&label);
    match graph.get_neighbors(&label) {
        Some(n) => {
            assert_eq!(degree, n.neighbor_list.len());
            assert_eq!(degree, n.weight_list.len());
            for (neighbor, weight) in n.iter() {
                assert!(graph.is_edge(neighbor, &label));
                assert_eq!(graph.weight(&label, neighbor), weight);
            }
        },
        None => assert_eq!(degree, 0),
    }
}

fuzz_target!(|input: FuzzInput| {
    let mut graph = WeightedGraph::new();

    for op in input.ops.into_iter().take(300) {
        match op {
            DegreeOp::AddVertex { label } => {
                graph.add_vertex(label);
                assert!(graph.is_vertex(&label));
            },
            DegreeOp::RemoveVertex { label } => {
                let before = graph.edge_count();
                let degree = graph.degree(&label);
                graph.remove_vertex(&label);
                assert_eq!(graph.edge_count(), before - degree);
                assert!(!graph.is_vertex(&label));
            },
            DegreeOp::AddEdge { u, v, weight } => {
                let both = graph.is_vertex(&u) && graph.is_vertex(&v);
                graph.add_edge(&u, &v, weight);
                assert_eq!(graph.is_edge(&u, &v), both);
                if both {
                    assert_eq!(graph.weight(&v, &u), weight);
                }
            },
            DegreeOp::RemoveEdge { u, v } => {
                graph.remove_edge(&u, &v);
                assert!(!graph.is_edge(&u, &v));
                assert!(!graph.is_edge(&v, &u));
            },
            DegreeOp::CheckEdge { u, v } => {
                assert_eq!(graph.is_edge(&u, &v), graph.is_edge(&v, &u));
                assert_eq!(graph.weight(&u, &v), graph.weight(&v, &u));
            },
            DegreeOp::VerifyDegreeInvariant { label } => check_degree(&graph, label),
        }
    }

    // Each non-loop edge contributes 2 to the degree sum, each loop 1.
    let vertices = graph.get_vertices();
    assert_eq!(vertices.len(), graph.vertex_count());
    let loops = vertices.iter().filter(|v| graph.is_edge(v, v)).count();
    let degree_sum: usize = vertices.iter().map(|v| graph.degree(v)).sum();
    assert_eq!(degree_sum, 2 * graph.edge_count() - loops);
    for v in vertices {
        check_degree(&graph, v);
    }
});
