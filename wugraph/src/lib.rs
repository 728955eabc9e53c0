// SPDX-License-Identifier: MIT OR Apache-2.0
//! Weighted undirected graph with O(1) vertex and edge operations.
//!
//! Vertices are named by application labels. Each undirected edge is stored as
//! a pair of half-edges, one in each endpoint's adjacency list, linked as
//! partners; a self-loop is a single half-edge. Two [`ChainedTable`] indexes
//! map labels to vertices and [`UnorderedPairKey`]s to one representative
//! half-edge per edge, so lookups, weight updates and removals never scan.
//!
//! The API is tolerant: operations on missing vertices or edges are no-ops,
//! `weight` of a non-edge is 0 and `get_neighbors` of an isolated vertex is
//! `None`. [`WeightedGraph::edge_weight`] and [`WeightedGraph::neighbors_of`]
//! are the checked variants.

#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_panics_doc)] // panics only on broken internal invariants

use std::fmt;

use chained_dict::{ChainedTable, DList, HashCode, ListHandle};
use serde::{Deserialize, Serialize};
use tracing::trace;

pub mod algorithms;
mod config;
mod error;
mod pair_key;
mod vertex;

pub use algorithms::{min_span_tree, spanning_forest, DisjointSets, SpanningForest};
pub use config::GraphConfig;
pub use error::{GraphError, Result};
pub use pair_key::UnorderedPairKey;

use vertex::{HalfEdge, HalfEdgeRef, VertexNode};

/// Edge weight type.
pub type Weight = i32;

/// Neighbors of a vertex as two parallel sequences, in adjacency order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Neighbors<L> {
    pub neighbor_list: Vec<L>,
    pub weight_list: Vec<Weight>,
}

impl<L> Neighbors<L> {
    #[must_use]
    pub fn len(&self) -> usize {
        self.neighbor_list.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.neighbor_list.is_empty()
    }

    /// Iterate over `(neighbor, weight)` pairs.
    pub fn iter(&self) -> impl Iterator<Item = (&L, Weight)> + '_ {
        self.neighbor_list
            .iter()
            .zip(self.weight_list.iter().copied())
    }
}

impl<L> Default for Neighbors<L> {
    fn default() -> Self {
        Self {
            neighbor_list: Vec::new(),
            weight_list: Vec::new(),
        }
    }
}

/// An undirected edge by endpoint labels.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedEdge<L> {
    pub from: L,
    pub to: L,
    pub weight: Weight,
}

impl<L> WeightedEdge<L> {
    #[must_use]
    pub const fn new(from: L, to: L, weight: Weight) -> Self {
        Self { from, to, weight }
    }
}

/// Weighted undirected graph. Self-loops are allowed; parallel edges are not.
pub struct WeightedGraph<L> {
    /// Every vertex, newest first. A vertex's handle here is its identity.
    roster: DList<VertexNode<L>>,
    /// Label -> roster handle.
    vertices: ChainedTable<L, ListHandle>,
    /// Pair key -> one of the edge's half-edges.
    edges: ChainedTable<UnorderedPairKey<L>, HalfEdgeRef>,
}

impl<L> fmt::Debug for WeightedGraph<L> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WeightedGraph")
            .field("vertex_count", &self.roster.len())
            .field("edge_count", &self.edges.len())
            .finish_non_exhaustive()
    }
}

impl<L: HashCode + Eq + Clone> Default for WeightedGraph<L> {
    fn default() -> Self {
        Self::new()
    }
}

impl<L: HashCode + Eq + Clone> WeightedGraph<L> {
    /// Create a graph with no vertices or edges.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(&GraphConfig::default())
    }

    #[must_use]
    pub fn with_config(config: &GraphConfig) -> Self {
        Self {
            roster: DList::with_capacity(config.vertex_capacity),
            vertices: ChainedTable::with_size_estimate(config.vertex_capacity),
            edges: ChainedTable::with_size_estimate(config.edge_capacity),
        }
    }

    #[inline]
    #[must_use]
    pub const fn vertex_count(&self) -> usize {
        self.roster.len()
    }

    #[inline]
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Snapshot of every vertex label, newest first.
    #[must_use]
    pub fn get_vertices(&self) -> Vec<L> {
        self.roster.iter().map(|v| v.label.clone()).collect()
    }

    /// Add a vertex with no incident edges. No-op if `label` is already a vertex.
    pub fn add_vertex(&mut self, label: L) {
        if self.is_vertex(&label) {
            return;
        }
        let handle = self.roster.insert_front(VertexNode::new(label.clone()));
        self.vertices.insert(label, handle);
        trace!(vertex_count = self.vertex_count(), "vertex added");
    }

    /// Remove a vertex and every edge incident on it. No-op if absent.
    ///
    /// Runs in O(degree).
    pub fn remove_vertex(&mut self, label: &L) {
        let Some(handle) = self.vertex_handle(label) else {
            return;
        };
        let Some(vertex) = self.roster.remove(handle) else {
            unreachable!("vertex index points at a removed roster node");
        };

        let degree = vertex.degree();
        for half in &vertex.adjacency {
            let other = if half.is_self_loop() {
                vertex.label.clone()
            } else {
                let neighbor = &mut self.roster[half.vertex2];
                if let Some(partner) = half.partner {
                    neighbor.adjacency.remove(partner);
                }
                neighbor.label.clone()
            };
            self.edges
                .remove(&UnorderedPairKey::new(vertex.label.clone(), other));
        }
        self.vertices.remove(&vertex.label);
        trace!(
            degree,
            vertex_count = self.vertex_count(),
            edge_count = self.edge_count(),
            "vertex removed"
        );
    }

    #[inline]
    #[must_use]
    pub fn is_vertex(&self, label: &L) -> bool {
        self.vertices.contains_key(label)
    }

    /// Number of edges incident on `label`; a self-loop adds one. 0 for a
    /// non-vertex.
    #[must_use]
    pub fn degree(&self, label: &L) -> usize {
        self.vertex_handle(label)
            .map_or(0, |h| self.roster[h].degree())
    }

    /// Neighbors and edge weights of `label`.
    ///
    /// Returns `None` both when `label` is not a vertex and when it has degree
    /// zero.
    #[must_use]
    pub fn get_neighbors(&self, label: &L) -> Option<Neighbors<L>> {
        let vertex = &self.roster[self.vertex_handle(label)?];
        if vertex.degree() == 0 {
            return None;
        }
        let mut neighbors = Neighbors {
            neighbor_list: Vec::with_capacity(vertex.degree()),
            weight_list: Vec::with_capacity(vertex.degree()),
        };
        for half in &vertex.adjacency {
            neighbors
                .neighbor_list
                .push(self.roster[half.vertex2].label.clone());
            neighbors.weight_list.push(half.weight);
        }
        Some(neighbors)
    }

    /// Add edge `(u, v)` with `weight`, or update the weight if it exists.
    ///
    /// No-op if either endpoint is not a vertex. `u == v` makes a self-loop.
    pub fn add_edge(&mut self, u: &L, v: &L, weight: Weight) {
        let (Some(h1), Some(h2)) = (self.vertex_handle(u), self.vertex_handle(v)) else {
            return;
        };
        let key = UnorderedPairKey::new(u.clone(), v.clone());

        if let Some(&existing) = self.edges.get(&key) {
            self.set_weight(existing, weight);
            return;
        }

        let node = self.roster[h1]
            .adjacency
            .insert_back(HalfEdge::new(weight, h1, h2));
        if h1 != h2 {
            let mut mirror = HalfEdge::new(weight, h2, h1);
            mirror.partner = Some(node);
            let partner = self.roster[h2].adjacency.insert_back(mirror);
            self.roster[h1].adjacency[node].partner = Some(partner);
        }
        self.edges.insert(key, HalfEdgeRef { owner: h1, node });
        trace!(weight, edge_count = self.edge_count(), "edge added");
    }

    /// Remove edge `(u, v)`. No-op if it does not exist.
    pub fn remove_edge(&mut self, u: &L, v: &L) {
        if !self.is_vertex(u) || !self.is_vertex(v) {
            return;
        }
        let Some(entry) = self
            .edges
            .remove(&UnorderedPairKey::new(u.clone(), v.clone()))
        else {
            return;
        };
        let rep = *entry.value();
        let Some(half) = self.roster[rep.owner].adjacency.remove(rep.node) else {
            unreachable!("edge index points at a removed half-edge");
        };
        if let Some(partner) = half.partner {
            self.roster[half.vertex2].adjacency.remove(partner);
        }
        trace!(edge_count = self.edge_count(), "edge removed");
    }

    #[must_use]
    pub fn is_edge(&self, u: &L, v: &L) -> bool {
        self.find_edge(u, v).is_some()
    }

    /// Weight of `(u, v)`, or 0 if it is not an edge.
    ///
    /// A zero-weight edge and a missing edge look the same here; check
    /// [`Self::is_edge`] or use [`Self::edge_weight`] to tell them apart.
    #[must_use]
    pub fn weight(&self, u: &L, v: &L) -> Weight {
        self.find_edge(u, v).map_or(0, |half| half.weight)
    }

    /// Snapshot of every edge, one entry per undirected edge.
    #[must_use]
    pub fn edges(&self) -> Vec<WeightedEdge<L>> {
        self.edges
            .iter()
            .map(|entry| {
                let rep = entry.value();
                let half = &self.roster[rep.owner].adjacency[rep.node];
                WeightedEdge::new(
                    self.roster[half.vertex1].label.clone(),
                    self.roster[half.vertex2].label.clone(),
                    half.weight,
                )
            })
            .collect()
    }

    /// Sum of all edge weights, each undirected edge counted once.
    #[must_use]
    pub fn total_weight(&self) -> i64 {
        self.edges
            .iter()
            .map(|entry| {
                let rep = entry.value();
                i64::from(self.roster[rep.owner].adjacency[rep.node].weight)
            })
            .sum()
    }

    fn vertex_handle(&self, label: &L) -> Option<ListHandle> {
        self.vertices.get(label).copied()
    }

    fn find_edge(&self, u: &L, v: &L) -> Option<&HalfEdge> {
        if !self.is_vertex(u) || !self.is_vertex(v) {
            return None;
        }
        let rep = self
            .edges
            .get(&UnorderedPairKey::new(u.clone(), v.clone()))?;
        Some(&self.roster[rep.owner].adjacency[rep.node])
    }

    fn set_weight(&mut self, rep: HalfEdgeRef, weight: Weight) {
        let half = &mut self.roster[rep.owner].adjacency[rep.node];
        half.weight = weight;
        let (other, partner) = (half.vertex2, half.partner);
        if let Some(partner) = partner {
            self.roster[other].adjacency[partner].weight = weight;
        }
    }
}

impl<L: HashCode + Eq + Clone + fmt::Debug> WeightedGraph<L> {
    /// Weight of `(u, v)`, distinguishing a missing vertex from a missing edge.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if either endpoint is absent and
    /// [`GraphError::EdgeNotFound`] if both exist but are not adjacent.
    pub fn edge_weight(&self, u: &L, v: &L) -> Result<Weight> {
        for label in [u, v] {
            if !self.is_vertex(label) {
                return Err(GraphError::vertex_not_found(label));
            }
        }
        self.find_edge(u, v)
            .map(|half| half.weight)
            .ok_or_else(|| GraphError::edge_not_found(u, v))
    }

    /// Neighbors of `label`; empty (not an error) for an isolated vertex.
    ///
    /// # Errors
    ///
    /// Returns [`GraphError::VertexNotFound`] if `label` is not a vertex.
    pub fn neighbors_of(&self, label: &L) -> Result<Neighbors<L>> {
        if !self.is_vertex(label) {
            return Err(GraphError::vertex_not_found(label));
        }
        Ok(self.get_neighbors(label).unwrap_or_default())
    }
}
