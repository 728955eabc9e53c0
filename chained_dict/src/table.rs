// SPDX-License-Identifier: MIT OR Apache-2.0
//! Chained hash table with a prime-modulus compression function.
//!
//! Each bucket is a [`DList`] chain of [`Entry`] values. Keys supply a 32-bit
//! code through [`HashCode`]; the table maps it onto a bucket with
//!
//! ```text
//! ((6 * code + 29) mod p) mod buckets,   p = find_prime(buckets * 50000)
//! ```
//!
//! evaluated in 64-bit arithmetic. The bucket count is always a
//! [`find_prime`] result and the table doubles (to the nearest prime) as soon
//! as the load factor exceeds 1.0.
//!
//! Duplicate keys are allowed: `insert` never overwrites, and `find`/`remove`
//! act on the first match in chain order.

use std::{borrow::Borrow, fmt};

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::{
    dlist::{DList, ListHandle},
    hash_code::HashCode,
    prime::find_prime,
};

/// Bucket count used when no size estimate is given.
pub const DEFAULT_BUCKETS: usize = 101;

/// Factor applied to the bucket count to pick the compression modulus.
const PRIME_MULTIPLIER: u64 = 50_000;

/// Multiplier of the affine step in the compression function.
const COMP_SCALE: i64 = 6;

/// Offset of the affine step in the compression function.
const COMP_SHIFT: i64 = 29;

/// A key/value pair stored in a [`ChainedTable`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry<K, V> {
    key: K,
    value: V,
}

impl<K, V> Entry<K, V> {
    #[inline]
    #[must_use]
    pub const fn key(&self) -> &K {
        &self.key
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> &V {
        &self.value
    }

    #[inline]
    pub fn value_mut(&mut self) -> &mut V {
        &mut self.value
    }

    #[must_use]
    pub fn into_parts(self) -> (K, V) {
        (self.key, self.value)
    }
}

/// Sizing configuration for a [`ChainedTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TableConfig {
    /// Expected number of entries. `None` selects [`DEFAULT_BUCKETS`].
    pub size_estimate: Option<usize>,
}

impl TableConfig {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            size_estimate: None,
        }
    }

    #[must_use]
    pub const fn size_estimate(mut self, estimate: usize) -> Self {
        self.size_estimate = Some(estimate);
        self
    }

    /// Bucket count a table built from this config starts with.
    #[must_use]
    pub fn initial_buckets(&self) -> usize {
        self.size_estimate
            .map_or(DEFAULT_BUCKETS, buckets_for_estimate)
    }
}

/// Point-in-time diagnostics for a [`ChainedTable`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableStats {
    pub len: usize,
    pub buckets: usize,
    /// Inserts that landed in an already occupied bucket.
    pub collisions: usize,
    pub load_factor: f64,
    pub empty_buckets: usize,
    pub longest_chain: usize,
}

/// Chained hash table. See the module docs for the placement rules.
pub struct ChainedTable<K, V> {
    table: Vec<DList<Entry<K, V>>>,
    size: usize,
    buckets: usize,
    collisions: usize,
    /// Compression modulus, recomputed whenever `buckets` changes.
    prime: i64,
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn buckets_for_estimate(estimate: usize) -> usize {
    let n = estimate as u64;
    let mut buckets = find_prime(n * 100 / 77);
    if buckets > 0 && n > buckets {
        buckets = n * 20 / 17;
    }
    (buckets as usize).max(1)
}

#[allow(clippy::cast_possible_wrap)]
fn compression_prime(buckets: usize) -> i64 {
    find_prime(buckets as u64 * PRIME_MULTIPLIER) as i64
}

fn empty_chains<K, V>(buckets: usize) -> Vec<DList<Entry<K, V>>> {
    (0..buckets).map(|_| DList::new()).collect()
}

impl<K, V> Default for ChainedTable<K, V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K, V> fmt::Debug for ChainedTable<K, V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ChainedTable")
            .field("len", &self.size)
            .field("buckets", &self.buckets)
            .field("collisions", &self.collisions)
            .finish_non_exhaustive()
    }
}

impl<K, V> ChainedTable<K, V> {
    /// Create an empty table with [`DEFAULT_BUCKETS`] buckets.
    #[must_use]
    pub fn new() -> Self {
        Self::with_buckets(DEFAULT_BUCKETS)
    }

    /// Create an empty table sized for roughly `estimate` entries.
    ///
    /// Targets a load factor near 0.77 at that size.
    #[must_use]
    pub fn with_size_estimate(estimate: usize) -> Self {
        Self::with_buckets(buckets_for_estimate(estimate))
    }

    #[must_use]
    pub fn with_config(config: &TableConfig) -> Self {
        Self::with_buckets(config.initial_buckets())
    }

    fn with_buckets(buckets: usize) -> Self {
        Self {
            table: empty_chains(buckets),
            size: 0,
            buckets,
            collisions: 0,
            prime: compression_prime(buckets),
        }
    }

    /// Number of entries. Duplicate keys count separately.
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    #[inline]
    #[must_use]
    pub const fn bucket_count(&self) -> usize {
        self.buckets
    }

    #[inline]
    #[must_use]
    pub const fn collisions(&self) -> usize {
        self.collisions
    }

    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.buckets as f64
    }

    /// Map a hash code to a bucket index in `[0, bucket_count())`.
    #[must_use]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_possible_wrap)]
    pub fn comp_function(&self, code: i32) -> usize {
        let buckets = self.buckets as i64;
        let c = COMP_SCALE * i64::from(code) + COMP_SHIFT;
        let mut result = (c % self.prime) % buckets;
        if result < 0 {
            result += buckets;
        }
        result as usize
    }

    /// Chain length of every bucket, in bucket order.
    #[must_use]
    pub fn histogram(&self) -> Vec<usize> {
        self.table.iter().map(DList::len).collect()
    }

    #[must_use]
    pub fn stats(&self) -> TableStats {
        TableStats {
            len: self.size,
            buckets: self.buckets,
            collisions: self.collisions,
            load_factor: self.load_factor(),
            empty_buckets: self.table.iter().filter(|c| c.is_empty()).count(),
            longest_chain: self.table.iter().map(DList::len).max().unwrap_or(0),
        }
    }

    /// Iterate over all entries, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &Entry<K, V>> + '_ {
        self.table.iter().flat_map(DList::iter)
    }

    /// Drop every entry, keeping the current bucket count.
    pub fn make_empty(&mut self) {
        self.table = empty_chains(self.buckets);
        self.size = 0;
    }

    /// Grow to the prime nearest twice the bucket count and rehash every entry.
    pub fn resize(&mut self)
    where
        K: HashCode,
    {
        self.rehash(None);
    }

    /// Rehash into a doubled table. If `track` names an entry by its old
    /// location, returns that entry's new location.
    fn rehash(&mut self, track: Option<(usize, ListHandle)>) -> Option<(usize, ListHandle)>
    where
        K: HashCode,
    {
        let old_buckets = self.buckets;
        let doubled = find_prime(2 * old_buckets as u64) as usize;

        self.buckets = doubled;
        self.prime = compression_prime(doubled);

        let mut new_table = empty_chains(doubled);
        let old_table = std::mem::take(&mut self.table);
        let mut moved = None;

        for (old_index, mut chain) in old_table.into_iter().enumerate() {
            while let Some(old_handle) = chain.front() {
                let Some(entry) = chain.remove(old_handle) else {
                    break;
                };
                let index = self.comp_function(entry.key.hash_code());
                let new_handle = new_table[index].insert_back(entry);
                if track == Some((old_index, old_handle)) {
                    moved = Some((index, new_handle));
                }
            }
        }

        self.table = new_table;
        debug!(
            old_buckets,
            new_buckets = doubled,
            len = self.size,
            "chained table resized"
        );
        moved
    }
}

impl<K: HashCode + Eq, V> ChainedTable<K, V> {
    /// Append a new entry for `key` and return it.
    ///
    /// Never replaces an existing entry with an equal key. May trigger a
    /// resize; the returned reference points at the entry's final location.
    pub fn insert(&mut self, key: K, value: V) -> &mut Entry<K, V> {
        let index = self.comp_function(key.hash_code());
        let bucket = &mut self.table[index];
        if !bucket.is_empty() {
            self.collisions += 1;
        }
        let handle = bucket.insert_back(Entry { key, value });
        self.size += 1;

        let (index, handle) = if self.size > self.buckets {
            match self.rehash(Some((index, handle))) {
                Some(location) => location,
                None => unreachable!("inserted entry lost during rehash"),
            }
        } else {
            (index, handle)
        };
        &mut self.table[index][handle]
    }

    /// First entry whose key equals `key`, in chain order.
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Option<&Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: HashCode + Eq + ?Sized,
    {
        let index = self.comp_function(key.hash_code());
        self.table[index].iter().find(|e| e.key.borrow() == key)
    }

    pub fn find_mut<Q>(&mut self, key: &Q) -> Option<&mut Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: HashCode + Eq + ?Sized,
    {
        let index = self.comp_function(key.hash_code());
        let handle = self.locate(index, key)?;
        self.table[index].get_mut(handle)
    }

    /// Value of the first entry matching `key`.
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: HashCode + Eq + ?Sized,
    {
        self.find(key).map(Entry::value)
    }

    #[must_use]
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: HashCode + Eq + ?Sized,
    {
        self.find(key).is_some()
    }

    /// Remove and return the first entry matching `key`.
    pub fn remove<Q>(&mut self, key: &Q) -> Option<Entry<K, V>>
    where
        K: Borrow<Q>,
        Q: HashCode + Eq + ?Sized,
    {
        let index = self.comp_function(key.hash_code());
        let handle = self.locate(index, key)?;
        let entry = self.table[index].remove(handle)?;
        self.size -= 1;
        Some(entry)
    }

    fn locate<Q>(&self, index: usize, key: &Q) -> Option<ListHandle>
    where
        K: Borrow<Q>,
        Q: HashCode + Eq + ?Sized,
    {
        self.table[index]
            .handles()
            .find(|(_, e)| e.key.borrow() == key)
            .map(|(h, _)| h)
    }
}
