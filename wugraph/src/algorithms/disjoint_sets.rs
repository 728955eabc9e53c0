// SPDX-License-Identifier: MIT OR Apache-2.0
//! Disjoint-set forest over the dense universe `[0, n)`.

/// Union-find with union by rank and path compression.
#[derive(Debug, Clone)]
pub struct DisjointSets {
    parent: Vec<usize>,
    rank: Vec<u8>,
    sets: usize,
}

impl DisjointSets {
    /// `n` singleton sets, one per element of `[0, n)`.
    #[must_use]
    pub fn new(n: usize) -> Self {
        Self {
            parent: (0..n).collect(),
            rank: vec![0; n],
            sets: n,
        }
    }

    /// Size of the universe.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parent.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parent.is_empty()
    }

    /// Number of disjoint sets currently in the partition.
    #[must_use]
    pub const fn set_count(&self) -> usize {
        self.sets
    }

    /// Representative of the set containing `x`.
    ///
    /// # Panics
    ///
    /// Panics if `x` is outside the universe.
    pub fn find(&mut self, x: usize) -> usize {
        let mut root = x;
        while self.parent[root] != root {
            root = self.parent[root];
        }
        let mut node = x;
        while self.parent[node] != root {
            let next = self.parent[node];
            self.parent[node] = root;
            node = next;
        }
        root
    }

    /// Merge the sets whose representatives are `root_a` and `root_b`.
    ///
    /// Both arguments must be representatives (results of [`Self::find`]).
    /// Merging a set with itself does nothing.
    pub fn union(&mut self, root_a: usize, root_b: usize) {
        debug_assert_eq!(self.parent[root_a], root_a, "union on non-root {root_a}");
        debug_assert_eq!(self.parent[root_b], root_b, "union on non-root {root_b}");
        if root_a == root_b {
            return;
        }
        match self.rank[root_a].cmp(&self.rank[root_b]) {
            std::cmp::Ordering::Less => {
                self.parent[root_a] = root_b;
            },
            std::cmp::Ordering::Greater => {
                self.parent[root_b] = root_a;
            },
            std::cmp::Ordering::Equal => {
                self.parent[root_b] = root_a;
                self.rank[root_a] += 1;
            },
        }
        self.sets -= 1;
    }

    /// Whether `a` and `b` are in the same set.
    pub fn same_set(&mut self, a: usize, b: usize) -> bool {
        self.find(a) == self.find(b)
    }
}
