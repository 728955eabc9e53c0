// SPDX-License-Identifier: MIT OR Apache-2.0
//! Error types for the checked graph accessors.
//!
//! The core graph API is tolerant: missing vertices and edges turn operations
//! into no-ops or sentinel returns. These errors back the strict accessors
//! that need to tell the two kinds of absence apart.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error type for checked graph lookups.
///
/// Labels are carried in their `Debug` rendering so the error type stays
/// independent of the graph's label type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GraphError {
    /// Vertex with the given label is not in the graph.
    VertexNotFound(String),
    /// Both endpoints exist but are not joined by an edge.
    EdgeNotFound { from: String, to: String },
}

impl GraphError {
    pub(crate) fn vertex_not_found<L: fmt::Debug>(label: &L) -> Self {
        Self::VertexNotFound(format!("{label:?}"))
    }

    pub(crate) fn edge_not_found<L: fmt::Debug>(from: &L, to: &L) -> Self {
        Self::EdgeNotFound {
            from: format!("{from:?}"),
            to: format!("{to:?}"),
        }
    }
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::VertexNotFound(label) => write!(f, "Vertex not found: {label}"),
            Self::EdgeNotFound { from, to } => write!(f, "Edge not found: {from} -- {to}"),
        }
    }
}

impl std::error::Error for GraphError {}

/// Result type alias for checked graph operations.
pub type Result<T> = std::result::Result<T, GraphError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        assert_eq!(
            GraphError::vertex_not_found(&"a").to_string(),
            "Vertex not found: \"a\""
        );
        assert_eq!(
            GraphError::edge_not_found(&1, &2).to_string(),
            "Edge not found: 1 -- 2"
        );
    }

    #[test]
    fn test_error_trait_object() {
        let err: Box<dyn std::error::Error> = Box::new(GraphError::vertex_not_found(&7u32));
        assert_eq!(err.to_string(), "Vertex not found: 7");
    }

    #[test]
    fn test_serde_roundtrip() {
        let err = GraphError::edge_not_found(&"x", &"y");
        let json = serde_json::to_string(&err).unwrap();
        let back: GraphError = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }
}
