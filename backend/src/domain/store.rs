//! In-memory record store for items.
//!
//! An ordered `Vec` scanned linearly plus a monotonically increasing
//! identifier counter. The store itself is single-threaded; callers
//! serialise access (the HTTP state wraps it in a mutex).

use crate::domain::item::{Item, ItemDraft};

/// Ordered collection of [`Item`] records and the next-id counter.
///
/// ## Invariants
/// - Every stored item has a unique `id`.
/// - Ids are assigned strictly increasing from 1 and never reused, even
///   after deletion.
/// - Iteration order is insertion order.
#[derive(Debug, Clone)]
pub struct ItemStore {
    items: Vec<Item>,
    next_id: u64,
}

impl Default for ItemStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ItemStore {
    /// Create an empty store with the id counter at 1.
    pub fn new() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }

    /// All items in insertion order.
    pub fn list(&self) -> &[Item] {
        &self.items
    }

    /// Find an item by id.
    pub fn get(&self, id: u64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Assign the next id to the draft, append it, and return the stored
    /// record.
    pub fn insert(&mut self, draft: ItemDraft) -> Item {
        let item = draft.into_item(self.next_id);
        self.next_id += 1;
        self.items.push(item.clone());
        item
    }

    /// Replace every field of the item with the given id except the id
    /// itself. Returns `None` when no item matches; nothing is inserted.
    pub fn replace(&mut self, id: u64, draft: ItemDraft) -> Option<Item> {
        let slot = self.items.iter_mut().find(|item| item.id == id)?;
        *slot = draft.into_item(id);
        Some(slot.clone())
    }

    /// Remove the item with the given id. Returns whether anything was
    /// removed; removing an absent id is not an error.
    pub fn remove(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|item| item.id != id);
        self.items.len() != before
    }
}
