//! # Keyed List
//!
//! Ordered collection of backend items addressed by stable id.
//!
//! Lists keep the server's order, but every mutation goes through a key:
//! removals and insertions never use an index the caller computed, so a
//! concurrent refresh cannot make an edit land on the wrong item.
//!
//! ```rust,ignore
//! let mut events: KeyedList<Event> = KeyedList::from_items(fetched);
//! events.update(&event_id, Event::mark_registered);
//! let removed = events.remove(&event_id);
//! ```

use indexmap::IndexMap;
use std::fmt::Debug;
use std::hash::Hash;
use vms_core::{Event, Group, Notification, User, Volunteer};

/// Items with a stable identity.
pub trait Keyed {
    type Key: Eq + Hash + Clone + Debug + Send + Sync + 'static;

    fn key(&self) -> Self::Key;
}

impl Keyed for Event {
    type Key = vms_core::EventId;

    fn key(&self) -> Self::Key {
        self.id
    }
}

impl Keyed for Group {
    type Key = vms_core::GroupId;

    fn key(&self) -> Self::Key {
        self.id
    }
}

impl Keyed for User {
    type Key = vms_core::UserId;

    fn key(&self) -> Self::Key {
        self.id
    }
}

impl Keyed for Volunteer {
    type Key = vms_core::UserId;

    fn key(&self) -> Self::Key {
        self.id
    }
}

impl Keyed for Notification {
    type Key = vms_core::NotificationId;

    fn key(&self) -> Self::Key {
        self.id
    }
}

/// Server-ordered items keyed by id.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyedList<T: Keyed> {
    items: IndexMap<T::Key, T>,
}

impl<T: Keyed> Default for KeyedList<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Keyed> KeyedList<T> {
    pub fn new() -> Self {
        Self {
            items: IndexMap::new(),
        }
    }

    /// Build from a fetched list. A repeated id keeps its first position and
    /// its last value.
    pub fn from_items(items: impl IntoIterator<Item = T>) -> Self {
        let mut list = Self::new();
        list.extend(items);
        list
    }

    // ─── Queries ─────────────────────────────────────────────

    pub fn get(&self, key: &T::Key) -> Option<&T> {
        self.items.get(key)
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.items.contains_key(key)
    }

    /// Current position of `key`.
    pub fn position(&self, key: &T::Key) -> Option<usize> {
        self.items.get_index_of(key)
    }

    /// Items in server order.
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.items.values()
    }

    pub fn keys(&self) -> impl Iterator<Item = &T::Key> {
        self.items.keys()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    // ─── Mutations ───────────────────────────────────────────

    /// Replace an existing item or append a new one. Returns the previous
    /// value.
    pub fn upsert(&mut self, item: T) -> Option<T> {
        self.items.insert(item.key(), item)
    }

    /// Insert at `index` (clamped to the end). An existing item with the
    /// same key is moved there.
    pub fn insert_at(&mut self, index: usize, item: T) -> Option<T> {
        let index = index.min(self.items.len());
        self.items.shift_insert(index, item.key(), item)
    }

    /// Remove by key, preserving the order of the rest. Returns the item and
    /// the position it held.
    pub fn remove(&mut self, key: &T::Key) -> Option<(usize, T)> {
        self.items
            .shift_remove_full(key)
            .map(|(index, _, item)| (index, item))
    }

    /// Update in place. Returns `false` when the key is absent.
    pub fn update(&mut self, key: &T::Key, f: impl FnOnce(&mut T)) -> bool {
        match self.items.get_mut(key) {
            Some(item) => {
                f(item);
                true
            }
            None => false,
        }
    }

    pub fn extend(&mut self, items: impl IntoIterator<Item = T>) {
        for item in items {
            self.upsert(item);
        }
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T: Keyed + Clone> KeyedList<T> {
    /// Owned copy of the items in order.
    pub fn to_vec(&self) -> Vec<T> {
        self.items.values().cloned().collect()
    }
}

impl<T: Keyed> FromIterator<T> for KeyedList<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::from_items(iter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Clone, PartialEq)]
    struct Item {
        id: u32,
        label: &'static str,
    }

    impl Keyed for Item {
        type Key = u32;

        fn key(&self) -> u32 {
            self.id
        }
    }

    fn item(id: u32, label: &'static str) -> Item {
        Item { id, label }
    }

    fn labels(list: &KeyedList<Item>) -> Vec<&'static str> {
        list.iter().map(|i| i.label).collect()
    }

    #[test]
    fn test_keeps_server_order() {
        let list = KeyedList::from_items([item(3, "c"), item(1, "a"), item(2, "b")]);
        assert_eq!(labels(&list), vec!["c", "a", "b"]);
        assert_eq!(list.position(&1), Some(1));
    }

    #[test]
    fn test_duplicate_ids_collapse() {
        let list = KeyedList::from_items([item(1, "first"), item(2, "b"), item(1, "last")]);
        assert_eq!(labels(&list), vec!["last", "b"]);
    }

    #[test]
    fn test_remove_then_reinsert_restores_position() {
        let mut list = KeyedList::from_items([item(1, "a"), item(2, "b"), item(3, "c")]);
        let (index, removed) = list.remove(&2).unwrap();
        assert_eq!(labels(&list), vec!["a", "c"]);

        list.insert_at(index, removed);
        assert_eq!(labels(&list), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_insert_past_end_appends() {
        let mut list = KeyedList::from_items([item(1, "a")]);
        list.insert_at(10, item(2, "b"));
        assert_eq!(labels(&list), vec!["a", "b"]);
    }

    #[test]
    fn test_update_missing_key() {
        let mut list: KeyedList<Item> = KeyedList::new();
        assert!(!list.update(&9, |i| i.label = "x"));
    }
}
