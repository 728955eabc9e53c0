// SPDX-License-Identifier: MIT OR Apache-2.0
//! Configuration for `WeightedGraph`.

use serde::{Deserialize, Serialize};

/// Initial sizing for the two internal hash indexes of a `WeightedGraph`.
///
/// Both indexes grow on demand; these values only pick the starting bucket
/// counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphConfig {
    /// Size estimate for the label -> vertex index.
    pub vertex_capacity: usize,
    /// Size estimate for the vertex pair -> edge index.
    pub edge_capacity: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            vertex_capacity: 10,
            edge_capacity: 10,
        }
    }
}

impl GraphConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn vertex_capacity(mut self, capacity: usize) -> Self {
        self.vertex_capacity = capacity;
        self
    }

    #[must_use]
    pub const fn edge_capacity(mut self, capacity: usize) -> Self {
        self.edge_capacity = capacity;
        self
    }
}
