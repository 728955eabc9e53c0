// SPDX-License-Identifier: MIT OR Apache-2.0
//! Chained hash table and the generational linked list it chains with.
//!
//! - [`DList`]: doubly-linked list whose nodes are addressed by generational
//!   [`ListHandle`]s, giving O(1) removal without dangling references.
//! - [`ChainedTable`]: hash table with a prime-modulus compression function,
//!   duplicate keys, collision accounting and doubling resize.
//! - [`HashCode`]: the 32-bit hash code contract for table keys.

#![allow(clippy::module_name_repetitions)]

pub mod dlist;
pub mod hash_code;
pub mod prime;
pub mod table;

pub use dlist::{Cursor, DList, Iter, ListHandle};
pub use hash_code::{HashCode, Hashed};
pub use prime::{find_prime, is_prime};
pub use table::{ChainedTable, Entry, TableConfig, TableStats, DEFAULT_BUCKETS};

#[cfg(test)]
mod tests;
