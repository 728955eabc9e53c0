// SPDX-License-Identifier: MIT OR Apache-2.0
//! Graph algorithms module.
//!
//! - Minimum spanning tree / forest (Kruskal's algorithm)
//! - Midpoint-pivot quicksort over weighted edges
//! - Disjoint-set forest used for Kruskal's cycle check

mod disjoint_sets;
pub mod edge_sort;
mod kruskal;

pub use disjoint_sets::DisjointSets;
pub use kruskal::{min_span_tree, spanning_forest, SpanningForest};
