// SPDX-License-Identifier: MIT OR Apache-2.0
//! Internal vertex and half-edge records.
//!
//! Vertices live in the graph's roster list and are addressed by their roster
//! [`ListHandle`]. Each vertex owns an adjacency list of [`HalfEdge`]s; a
//! half-edge is addressed by its owner's roster handle plus its own handle in
//! that adjacency list ([`HalfEdgeRef`]). None of these types leave the crate.

use chained_dict::{DList, ListHandle};

use crate::Weight;

/// One endpoint's view of an undirected edge.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HalfEdge {
    pub(crate) weight: Weight,
    /// Owning vertex; this half-edge sits in its adjacency list.
    pub(crate) vertex1: ListHandle,
    /// The other endpoint. Equal to `vertex1` for a self-loop.
    pub(crate) vertex2: ListHandle,
    /// Mirror half-edge in `vertex2`'s adjacency list. `None` for a self-loop.
    pub(crate) partner: Option<ListHandle>,
}

impl HalfEdge {
    pub(crate) const fn new(weight: Weight, vertex1: ListHandle, vertex2: ListHandle) -> Self {
        Self {
            weight,
            vertex1,
            vertex2,
            partner: None,
        }
    }

    pub(crate) fn is_self_loop(&self) -> bool {
        self.vertex1 == self.vertex2
    }
}

/// Location of a half-edge: owning vertex plus position in its adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HalfEdgeRef {
    pub(crate) owner: ListHandle,
    pub(crate) node: ListHandle,
}

/// A vertex: the application label and its adjacency list.
#[derive(Debug)]
pub(crate) struct VertexNode<L> {
    pub(crate) label: L,
    pub(crate) adjacency: DList<HalfEdge>,
}

impl<L> VertexNode<L> {
    pub(crate) const fn new(label: L) -> Self {
        Self {
            label,
            adjacency: DList::new(),
        }
    }

    /// Self-loops count once.
    pub(crate) const fn degree(&self) -> usize {
        self.adjacency.len()
    }
}
