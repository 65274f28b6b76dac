//! Registered patron record.

use crate::types::{ItemId, MemberId};

/// A registered patron eligible to borrow items.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    id: MemberId,
    name: String,
    borrowed: Vec<ItemId>,
}

impl Member {
    /// Creates a new member with nothing on loan.
    pub fn new(id: MemberId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            borrowed: Vec::new(),
        }
    }

    /// Rebuilds a member from snapshot state.
    pub(crate) fn restore(id: MemberId, name: String, borrowed: Vec<ItemId>) -> Self {
        Self { id, name, borrowed }
    }

    /// Returns the member identifier.
    #[must_use]
    pub fn id(&self) -> MemberId {
        self.id
    }

    /// Returns the member name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the borrowed item identifiers, ordered by borrow time.
    #[must_use]
    pub fn borrowed(&self) -> &[ItemId] {
        &self.borrowed
    }

    /// Appends an item to the borrowed list.
    pub(crate) fn record_borrow(&mut self, item: ItemId) {
        self.borrowed.push(item);
    }

    /// Removes an item from the borrowed list.
    pub(crate) fn record_return(&mut self, item: ItemId) {
        if let Some(pos) = self.borrowed.iter().position(|i| *i == item) {
            self.borrowed.remove(pos);
        }
    }
}
