// SPDX-License-Identifier: MIT OR Apache-2.0
//! Doubly-linked list stored in a generational arena.
//!
//! Every node lives in a slot of a backing `Vec`. A [`ListHandle`] names a slot
//! plus the generation the slot had when the node was inserted. Removing a node
//! bumps the slot's generation, so any handle captured before the removal stops
//! resolving instead of aliasing whatever node reuses the slot later. A slot
//! that reaches the last generation is retired rather than wrapped back to 0.
//!
//! # Performance
//!
//! - `insert_front` / `insert_back`: O(1)
//! - `remove(handle)`: O(1)
//! - `get` / `contains` / `next` / `prev`: O(1)
//! - iteration: O(n)

use std::{
    fmt,
    iter::FusedIterator,
    ops::{Index, IndexMut},
};

/// Stable reference to a node of a [`DList`].
///
/// Only the list that minted a handle can resolve it. Once the node is removed
/// the handle is stale and every lookup through it returns `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListHandle {
    index: u32,
    generation: u32,
}

impl ListHandle {
    /// Slot index inside the owning list's arena.
    #[must_use]
    pub const fn index(self) -> u32 {
        self.index
    }

    #[must_use]
    pub const fn generation(self) -> u32 {
        self.generation
    }
}

#[derive(Debug)]
struct Node<T> {
    item: T,
    prev: Option<u32>,
    next: Option<u32>,
}

#[derive(Debug)]
struct Slot<T> {
    generation: u32,
    node: Option<Node<T>>,
}

/// Doubly-linked list with O(1) removal through previously captured handles.
pub struct DList<T> {
    slots: Vec<Slot<T>>,
    free: Vec<u32>,
    head: Option<u32>,
    tail: Option<u32>,
    len: usize,
}

impl<T> Default for DList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for DList<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> DList<T> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            ..Self::new()
        }
    }

    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Insert `item` at the front and return its handle.
    pub fn insert_front(&mut self, item: T) -> ListHandle {
        let old_head = self.head;
        let handle = self.alloc(Node {
            item,
            prev: None,
            next: old_head,
        });
        match old_head {
            Some(h) => self.node_mut(h).prev = Some(handle.index),
            None => self.tail = Some(handle.index),
        }
        self.head = Some(handle.index);
        handle
    }

    /// Insert `item` at the back and return its handle.
    pub fn insert_back(&mut self, item: T) -> ListHandle {
        let old_tail = self.tail;
        let handle = self.alloc(Node {
            item,
            prev: old_tail,
            next: None,
        });
        match old_tail {
            Some(t) => self.node_mut(t).next = Some(handle.index),
            None => self.head = Some(handle.index),
        }
        self.tail = Some(handle.index);
        handle
    }

    #[must_use]
    pub fn front(&self) -> Option<ListHandle> {
        self.head.map(|i| self.handle_at(i))
    }

    #[must_use]
    pub fn back(&self) -> Option<ListHandle> {
        self.tail.map(|i| self.handle_at(i))
    }

    /// Handle of the node after `handle`, or `None` at the end or for a stale handle.
    #[must_use]
    pub fn next(&self, handle: ListHandle) -> Option<ListHandle> {
        self.node(handle)?.next.map(|i| self.handle_at(i))
    }

    #[must_use]
    pub fn prev(&self, handle: ListHandle) -> Option<ListHandle> {
        self.node(handle)?.prev.map(|i| self.handle_at(i))
    }

    /// Whether `handle` still names a live node of this list.
    #[inline]
    #[must_use]
    pub fn contains(&self, handle: ListHandle) -> bool {
        self.node(handle).is_some()
    }

    #[must_use]
    pub fn get(&self, handle: ListHandle) -> Option<&T> {
        self.node(handle).map(|n| &n.item)
    }

    pub fn get_mut(&mut self, handle: ListHandle) -> Option<&mut T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.node.as_mut().map(|n| &mut n.item)
    }

    /// Unlink the node named by `handle` and return its item.
    ///
    /// Returns `None` if the handle is stale. The slot's generation is bumped so
    /// `handle` (and every copy of it) stops resolving.
    pub fn remove(&mut self, handle: ListHandle) -> Option<T> {
        let slot = self.slots.get_mut(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        let node = slot.node.take()?;
        // A slot whose generation would wrap is retired, never reused.
        if let Some(next) = slot.generation.checked_add(1) {
            slot.generation = next;
            self.free.push(handle.index);
        }

        match node.prev {
            Some(p) => self.node_mut(p).next = node.next,
            None => self.head = node.next,
        }
        match node.next {
            Some(n) => self.node_mut(n).prev = node.prev,
            None => self.tail = node.prev,
        }
        self.len -= 1;
        Some(node.item)
    }

    /// Remove and return the front item.
    pub fn pop_front(&mut self) -> Option<T> {
        let front = self.front()?;
        self.remove(front)
    }

    /// Forward cursor starting at the front of the list.
    #[must_use]
    pub fn cursor(&self) -> Cursor<'_, T> {
        Cursor {
            list: self,
            current: self.front(),
        }
    }

    /// Iterate over items front to back.
    #[must_use]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            cursor: self.cursor(),
            remaining: self.len,
        }
    }

    /// Iterate over `(handle, item)` pairs front to back.
    pub fn handles(&self) -> impl Iterator<Item = (ListHandle, &T)> + '_ {
        let mut cursor = self.cursor();
        std::iter::from_fn(move || {
            let handle = cursor.handle()?;
            let item = cursor.item()?;
            cursor.advance();
            Some((handle, item))
        })
    }

    fn alloc(&mut self, node: Node<T>) -> ListHandle {
        self.len += 1;
        if let Some(index) = self.free.pop() {
            let slot = &mut self.slots[index as usize];
            slot.node = Some(node);
            return ListHandle {
                index,
                generation: slot.generation,
            };
        }
        let index = u32::try_from(self.slots.len()).unwrap_or_else(|_| {
            panic!("DList arena exceeded {} slots", u32::MAX);
        });
        self.slots.push(Slot {
            generation: 0,
            node: Some(node),
        });
        ListHandle {
            index,
            generation: 0,
        }
    }

    fn node(&self, handle: ListHandle) -> Option<&Node<T>> {
        let slot = self.slots.get(handle.index as usize)?;
        if slot.generation != handle.generation {
            return None;
        }
        slot.node.as_ref()
    }

    fn handle_at(&self, index: u32) -> ListHandle {
        ListHandle {
            index,
            generation: self.slots[index as usize].generation,
        }
    }

    // Link indices only ever point at occupied slots.
    fn node_mut(&mut self, index: u32) -> &mut Node<T> {
        match self.slots[index as usize].node.as_mut() {
            Some(node) => node,
            None => unreachable!("DList link points at vacant slot {index}"),
        }
    }
}

impl<T> Index<ListHandle> for DList<T> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `handle` is stale or was minted by another list.
    fn index(&self, handle: ListHandle) -> &T {
        match self.get(handle) {
            Some(item) => item,
            None => panic!("stale list handle {handle:?}"),
        }
    }
}

impl<T> IndexMut<ListHandle> for DList<T> {
    fn index_mut(&mut self, handle: ListHandle) -> &mut T {
        match self.get_mut(handle) {
            Some(item) => item,
            None => panic!("stale list handle {handle:?}"),
        }
    }
}

impl<T> Extend<T> for DList<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for item in iter {
            self.insert_back(item);
        }
    }
}

impl<T> FromIterator<T> for DList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut list = Self::new();
        list.extend(iter);
        list
    }
}

impl<'a, T> IntoIterator for &'a DList<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Forward cursor over a [`DList`].
///
/// A cursor positioned past the last node reports `is_valid() == false`.
#[derive(Debug)]
pub struct Cursor<'a, T> {
    list: &'a DList<T>,
    current: Option<ListHandle>,
}

impl<'a, T> Cursor<'a, T> {
    /// Whether the cursor still sits on a live node of its list.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.current.is_some_and(|h| self.list.contains(h))
    }

    /// Step to the next node. Advancing an invalid cursor keeps it invalid.
    pub fn advance(&mut self) {
        self.current = self.current.and_then(|h| self.list.next(h));
    }

    #[must_use]
    pub fn handle(&self) -> Option<ListHandle> {
        self.current.filter(|&h| self.list.contains(h))
    }

    #[must_use]
    pub fn item(&self) -> Option<&'a T> {
        self.current.and_then(|h| self.list.get(h))
    }
}

/// Iterator over the items of a [`DList`].
pub struct Iter<'a, T> {
    cursor: Cursor<'a, T>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cursor.item()?;
        self.cursor.advance();
        self.remaining -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect<T: Clone>(list: &DList<T>) -> Vec<T> {
        list.iter().cloned().collect()
    }

    #[test]
    fn test_insert_front_and_back() {
        let mut list = DList::new();
        list.insert_back(2);
        list.insert_front(1);
        list.insert_back(3);
        assert_eq!(collect(&list), vec![1, 2, 3]);
        assert_eq!(list.len(), 3);
        assert!(!list.is_empty());
    }

    #[test]
    fn test_remove_middle_by_handle() {
        let mut list = DList::new();
        let _a = list.insert_back('a');
        let b = list.insert_back('b');
        let _c = list.insert_back('c');

        assert_eq!(list.remove(b), Some('b'));
        assert_eq!(collect(&list), vec!['a', 'c']);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_remove_head_and_tail() {
        let mut list: DList<i32> = (1..=3).collect();
        let front = list.front().unwrap();
        let back = list.back().unwrap();
        assert_eq!(list.remove(front), Some(1));
        assert_eq!(list.remove(back), Some(3));
        assert_eq!(collect(&list), vec![2]);
        assert_eq!(list.front(), list.back());
    }

    #[test]
    fn test_stale_handle_after_remove() {
        let mut list = DList::new();
        let h = list.insert_back(10);
        assert!(list.contains(h));
        assert_eq!(list.remove(h), Some(10));

        assert!(!list.contains(h));
        assert_eq!(list.get(h), None);
        assert_eq!(list.remove(h), None);
        assert!(list.is_empty());
    }

    #[test]
    fn test_slot_reuse_does_not_revive_old_handle() {
        let mut list = DList::new();
        let old = list.insert_back("old");
        list.remove(old);
        let new = list.insert_back("new");

        assert_eq!(old.index(), new.index());
        assert_ne!(old.generation(), new.generation());
        assert_eq!(list.get(old), None);
        assert_eq!(list.get(new), Some(&"new"));
    }

    #[test]
    fn test_exhausted_slot_is_retired() {
        let mut list = DList::new();
        let first = list.insert_back(1);
        list.remove(first);
        list.slots[first.index() as usize].generation = u32::MAX;

        let last = list.insert_back(2);
        assert_eq!(last.index(), first.index());
        assert_eq!(last.generation(), u32::MAX);
        assert_eq!(list.remove(last), Some(2));

        let fresh = list.insert_back(3);
        assert_ne!(fresh.index(), last.index());
        assert_eq!(list.get(last), None);
        assert_eq!(list.remove(last), None);
        assert_eq!(list.get(fresh), Some(&3));
        assert_eq!(list.len(), 1);
    }

    #[test]
    fn test_cursor_walks_and_invalidates() {
        let list: DList<u8> = [1, 2].into_iter().collect();
        let mut cursor = list.cursor();
        assert!(cursor.is_valid());
        assert_eq!(cursor.item(), Some(&1));
        cursor.advance();
        assert_eq!(cursor.item(), Some(&2));
        cursor.advance();
        assert!(!cursor.is_valid());
        cursor.advance();
        assert!(!cursor.is_valid());
        assert_eq!(cursor.handle(), None);
    }

    #[test]
    fn test_cursor_on_empty_list() {
        let list: DList<u8> = DList::new();
        assert!(!list.cursor().is_valid());
        assert_eq!(list.iter().len(), 0);
    }

    #[test]
    fn test_next_prev_navigation() {
        let mut list = DList::new();
        let a = list.insert_back(1);
        let b = list.insert_back(2);
        assert_eq!(list.next(a), Some(b));
        assert_eq!(list.prev(b), Some(a));
        assert_eq!(list.prev(a), None);
        assert_eq!(list.next(b), None);
    }

    #[test]
    fn test_index_mut_updates_item() {
        let mut list = DList::new();
        let h = list.insert_back(String::from("x"));
        list[h].push('y');
        assert_eq!(list[h], "xy");
    }

    #[test]
    #[should_panic(expected = "stale list handle")]
    fn test_index_with_stale_handle_panics() {
        let mut list = DList::new();
        let h = list.insert_back(1);
        list.remove(h);
        let _ = list[h];
    }

    #[test]
    fn test_handles_iteration_allows_removal_later() {
        let mut list: DList<i32> = (0..6).collect();
        let odd: Vec<ListHandle> = list
            .handles()
            .filter(|(_, v)| **v % 2 == 1)
            .map(|(h, _)| h)
            .collect();
        for h in odd {
            list.remove(h);
        }
        assert_eq!(collect(&list), vec![0, 2, 4]);
    }

    #[test]
    fn test_pop_front_drains() {
        let mut list: DList<i32> = (0..3).collect();
        assert_eq!(list.pop_front(), Some(0));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_front(), None);
        assert!(list.front().is_none());
        assert!(list.back().is_none());
    }
}
