// SPDX-License-Identifier: MIT OR Apache-2.0
//! Minimum spanning tree using Kruskal's algorithm.
//!
//! Computes the minimum spanning tree (or forest, for a disconnected input) of
//! a `WeightedGraph` and returns it as a new graph over the same vertices.

use chained_dict::{ChainedTable, HashCode};
use tracing::{debug, instrument};

use super::{edge_sort::quicksort, DisjointSets};
use crate::{GraphConfig, UnorderedPairKey, WeightedEdge, WeightedGraph};

/// Result of a spanning forest computation.
#[derive(Debug)]
pub struct SpanningForest<L> {
    /// Same vertices as the input, with only the forest's edges.
    pub graph: WeightedGraph<L>,
    /// Sum of the forest's edge weights.
    pub total_weight: i64,
    /// Number of trees (connected components, isolated vertices included).
    pub tree_count: usize,
}

impl<L> SpanningForest<L> {
    #[must_use]
    pub const fn is_connected(&self) -> bool {
        self.tree_count == 1
    }
}

/// Minimum spanning tree of `graph`, or a minimum spanning forest if `graph`
/// is disconnected. `graph` is not modified.
#[must_use]
pub fn min_span_tree<L: HashCode + Eq + Clone>(graph: &WeightedGraph<L>) -> WeightedGraph<L> {
    spanning_forest(graph).graph
}

/// Kruskal's algorithm with forest statistics.
///
/// Time complexity: O(V + E log E) expected, for sorting edges.
#[must_use]
#[instrument(skip(graph), fields(vertices = graph.vertex_count(), edges = graph.edge_count()))]
pub fn spanning_forest<L: HashCode + Eq + Clone>(graph: &WeightedGraph<L>) -> SpanningForest<L> {
    let all_vertices = graph.get_vertices();
    let mut result = WeightedGraph::with_config(
        &GraphConfig::new()
            .vertex_capacity(all_vertices.len())
            .edge_capacity(all_vertices.len()),
    );
    for vertex in &all_vertices {
        result.add_vertex(vertex.clone());
    }

    // Adjacency traversal sees every non-self edge from both ends.
    let mut all_edges: Vec<WeightedEdge<L>> = Vec::with_capacity(graph.edge_count());
    let mut seen = ChainedTable::with_size_estimate(graph.edge_count() * 2 + 1);
    for vertex in &all_vertices {
        let Some(neighbors) = graph.get_neighbors(vertex) else {
            continue;
        };
        for (neighbor, weight) in neighbors.iter() {
            let key = UnorderedPairKey::new(vertex.clone(), neighbor.clone());
            if !seen.contains_key(&key) {
                seen.insert(key, ());
                all_edges.push(WeightedEdge::new(vertex.clone(), neighbor.clone(), weight));
            }
        }
    }
    debug_assert_eq!(all_edges.len(), graph.edge_count());

    quicksort(&mut all_edges);

    let result_vertices = result.get_vertices();
    let mut ids = ChainedTable::with_size_estimate(result_vertices.len());
    for (id, vertex) in result_vertices.into_iter().enumerate() {
        ids.insert(vertex, id);
    }
    let mut sets = DisjointSets::new(ids.len());
    let id_of = |label: &L| match ids.get(label) {
        Some(&id) => id,
        None => unreachable!("edge endpoint missing from vertex id table"),
    };

    let mut total_weight = 0i64;
    for edge in &all_edges {
        let root_a = sets.find(id_of(&edge.from));
        let root_b = sets.find(id_of(&edge.to));
        if root_a != root_b {
            result.add_edge(&edge.from, &edge.to, edge.weight);
            sets.union(root_a, root_b);
            total_weight += i64::from(edge.weight);
        }
    }

    let tree_count = sets.set_count();
    debug!(
        forest_edges = result.edge_count(),
        total_weight, tree_count, "spanning forest computed"
    );

    SpanningForest {
        graph: result,
        total_weight,
        tree_count,
    }
}
