//! Identity-keyed collection diff.
//!
//! Classifies the items of two ordered collections by a stable string key:
//! present only in the new collection, only in the old one, or in both.
//!
//! Duplicate keys within one collection resolve last-write-wins: the later
//! item replaces the earlier one in the index but keeps the earlier item's
//! position. Source documents are expected to be validated upstream, so this
//! is a tie-break rather than an error.

use std::collections::HashMap;

use stencil_types::{NavigationItem, Page, Section};

/// An item addressable by a stable string key.
pub trait Keyed {
    fn key(&self) -> &str;
}

impl Keyed for Page {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for Section {
    fn key(&self) -> &str {
        &self.id
    }
}

impl Keyed for NavigationItem {
    fn key(&self) -> &str {
        &self.href
    }
}

/// Insertion-ordered index over a borrowed collection.
#[derive(Debug)]
pub struct KeyedIndex<'a, T> {
    entries: Vec<&'a T>,
    positions: HashMap<&'a str, usize>,
}

impl<'a, T: Keyed> KeyedIndex<'a, T> {
    /// Index `items` in array order.
    pub fn build(items: &'a [T]) -> Self {
        let mut entries: Vec<&'a T> = Vec::with_capacity(items.len());
        let mut positions = HashMap::with_capacity(items.len());

        for item in items {
            match positions.get(item.key()) {
                Some(&pos) => entries[pos] = item,
                None => {
                    positions.insert(item.key(), entries.len());
                    entries.push(item);
                }
            }
        }

        Self { entries, positions }
    }

    pub fn get(&self, key: &str) -> Option<&'a T> {
        self.positions.get(key).map(|&pos| self.entries[pos])
    }

    pub fn contains(&self, key: &str) -> bool {
        self.positions.contains_key(key)
    }

    /// Indexed items in first-occurrence order.
    pub fn iter(&self) -> impl Iterator<Item = &'a T> + '_ {
        self.entries.iter().copied()
    }

    /// Number of distinct keys.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Result of a keyed diff. The three groups are disjoint by key.
#[derive(Debug)]
pub struct KeyedDiff<'a, T> {
    /// Only in the new collection, in new-collection order.
    pub added: Vec<&'a T>,
    /// Only in the old collection, in old-collection order.
    pub removed: Vec<&'a T>,
    /// In both, as `(old, new)` pairs in new-collection order.
    pub common: Vec<(&'a T, &'a T)>,
}

impl<'a, T: Keyed> KeyedDiff<'a, T> {
    /// Returns `true` if no key was added or removed.
    pub fn is_empty(&self) -> bool {
        self.added.is_empty() && self.removed.is_empty()
    }

    pub fn added_keys(&self) -> Vec<&'a str> {
        self.added.iter().map(|&item| item.key()).collect()
    }

    pub fn removed_keys(&self) -> Vec<&'a str> {
        self.removed.iter().map(|&item| item.key()).collect()
    }

    pub fn common_keys(&self) -> Vec<&'a str> {
        self.common.iter().map(|&(_, new)| new.key()).collect()
    }
}

/// Diff two collections by key.
pub fn diff_keyed<'a, T: Keyed>(old: &'a [T], new: &'a [T]) -> KeyedDiff<'a, T> {
    let old_index = KeyedIndex::build(old);
    let new_index = KeyedIndex::build(new);

    let mut added = Vec::new();
    let mut common = Vec::new();
    for new_item in new_index.iter() {
        match old_index.get(new_item.key()) {
            Some(old_item) => common.push((old_item, new_item)),
            None => added.push(new_item),
        }
    }

    let removed = old_index
        .iter()
        .filter(|&old_item| !new_index.contains(old_item.key()))
        .collect();

    KeyedDiff {
        added,
        removed,
        common,
    }
}
