//! Catalog context object.

use crate::index::ItemIndex;
use crate::member::Member;
use crate::registry::MembershipRegistry;
use crate::types::{ItemId, MemberId};

/// The combined in-memory catalog state.
///
/// `Catalog` is an explicit context object owned by the caller; there is
/// no process-wide catalog. It pairs the two stores that lending
/// operations must keep mutually consistent: the item index and the
/// membership registry. All mutation is serialized by `&mut` ownership,
/// so cross-store transitions (borrow, return) can never interleave.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    pub(crate) items: ItemIndex,
    pub(crate) members: MembershipRegistry,
}

impl Catalog {
    /// Creates an empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self {
            items: ItemIndex::new(),
            members: MembershipRegistry::new(),
        }
    }

    /// Returns the item index.
    #[must_use]
    pub fn items(&self) -> &ItemIndex {
        &self.items
    }

    /// Returns the membership registry.
    #[must_use]
    pub fn members(&self) -> &MembershipRegistry {
        &self.members
    }

    /// Adds an item to the catalog, returning its new identifier.
    pub fn add_item(&mut self, title: impl Into<String>, author: impl Into<String>) -> ItemId {
        let id = self.items.add(title, author);
        tracing::debug!(%id, "added item");
        id
    }

    /// Removes an item from the catalog by identifier.
    ///
    /// Not exercised by the default lending flows, but structurally
    /// supported. The item's waiting list goes with it; member borrow
    /// lists that reference the identifier are left untouched.
    pub fn remove_item(&mut self, id: ItemId) -> Option<crate::Item> {
        self.items.remove(id)
    }

    /// Registers a member, returning the new identifier.
    pub fn add_member(&mut self, name: impl Into<String>) -> MemberId {
        let id = self.members.add(name);
        tracing::debug!(%id, "added member");
        id
    }

    /// Deletes a member.
    ///
    /// Deletion does not force-return the member's borrowed items; their
    /// borrower fields keep pointing at the deleted identifier. This is
    /// an accepted caller-visible quirk of the system.
    pub fn delete_member(&mut self, id: MemberId) -> Option<Member> {
        self.members.remove(id)
    }

    /// Finds members whose identifier or name contains `query`,
    /// case-insensitively, sorted by identifier.
    #[must_use]
    pub fn search_members(&self, query: &str) -> Vec<&Member> {
        let needle = query.to_lowercase();
        self.members
            .sorted_by_id()
            .into_iter()
            .filter(|m| {
                m.id().to_string().contains(&needle) || m.name().to_lowercase().contains(&needle)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_and_member_namespaces_are_independent() {
        let mut catalog = Catalog::new();
        assert_eq!(catalog.add_item("Dune", "Herbert"), ItemId::new(1));
        assert_eq!(catalog.add_member("Alice"), MemberId::new(1));
        assert_eq!(catalog.add_item("Emma", "Austen"), ItemId::new(2));
        assert_eq!(catalog.add_member("Bob"), MemberId::new(2));
    }

    #[test]
    fn delete_member_does_not_touch_items() {
        let mut catalog = Catalog::new();
        catalog.add_item("Dune", "Herbert");
        let alice = catalog.add_member("Alice");
        catalog
            .borrow("Dune", alice, crate::DEFAULT_LOAN_DAYS)
            .unwrap();

        let removed = catalog.delete_member(alice).unwrap();
        assert_eq!(removed.name(), "Alice");
        // The loan record on the item survives the deletion.
        let item = catalog.items().in_order()[0];
        assert_eq!(item.borrower(), Some(alice));
    }

    #[test]
    fn search_members_matches_id_and_name() {
        let mut catalog = Catalog::new();
        catalog.add_member("Alice");
        catalog.add_member("Alicia");
        catalog.add_member("Bob");

        let hits = catalog.search_members("ali");
        assert_eq!(hits.len(), 2);

        let hits = catalog.search_members("3");
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name(), "Bob");

        assert_eq!(catalog.search_members("").len(), 3);
    }
}
