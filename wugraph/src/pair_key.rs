// SPDX-License-Identifier: MIT OR Apache-2.0
//! Order-insensitive key for an undirected vertex pair.

use chained_dict::HashCode;

/// Canonical key for an undirected edge.
///
/// `(a, b)` and `(b, a)` compare equal and share a hash code. A self pair
/// `(a, a)` hashes to `hash(a) + 1` so it does not collide systematically with
/// distinct pairs whose codes sum to the same value.
#[derive(Debug, Clone, Copy)]
pub struct UnorderedPairKey<L> {
    first: L,
    second: L,
}

impl<L> UnorderedPairKey<L> {
    #[must_use]
    pub const fn new(first: L, second: L) -> Self {
        Self { first, second }
    }

    /// Endpoint given first at construction.
    #[must_use]
    pub const fn first(&self) -> &L {
        &self.first
    }

    #[must_use]
    pub const fn second(&self) -> &L {
        &self.second
    }

    #[must_use]
    pub fn into_inner(self) -> (L, L) {
        (self.first, self.second)
    }
}

impl<L: PartialEq> UnorderedPairKey<L> {
    #[must_use]
    pub fn is_self_pair(&self) -> bool {
        self.first == self.second
    }

    #[must_use]
    pub fn contains(&self, label: &L) -> bool {
        &self.first == label || &self.second == label
    }

    /// The endpoint opposite `label`, or `None` if `label` is not in the pair.
    #[must_use]
    pub fn other(&self, label: &L) -> Option<&L> {
        if &self.first == label {
            Some(&self.second)
        } else if &self.second == label {
            Some(&self.first)
        } else {
            None
        }
    }
}

impl<L: PartialEq> PartialEq for UnorderedPairKey<L> {
    fn eq(&self, other: &Self) -> bool {
        (self.first == other.first && self.second == other.second)
            || (self.first == other.second && self.second == other.first)
    }
}

impl<L: Eq> Eq for UnorderedPairKey<L> {}

impl<L: HashCode + PartialEq> HashCode for UnorderedPairKey<L> {
    fn hash_code(&self) -> i32 {
        if self.first == self.second {
            self.first.hash_code().wrapping_add(1)
        } else {
            self.first
                .hash_code()
                .wrapping_add(self.second.hash_code())
        }
    }
}
