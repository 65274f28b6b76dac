//! Library facade: catalog plus snapshot persistence.

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::item::Item;
use crate::lending::{BorrowOutcome, ReturnOutcome, DEFAULT_LOAN_DAYS};
use crate::member::Member;
use crate::snapshot;
use crate::types::{ItemId, MemberId};
use biblio_store::SnapshotStore;
use std::path::Path;

/// A catalog bound to a snapshot store.
///
/// `Library` is the primary entry point for callers that want
/// durability: every mutating operation is applied in memory and then
/// written out as a whole-file snapshot. A failed save is surfaced to
/// the caller as a [`CatalogError::Store`] while the in-memory mutation
/// stands - at-least-applied-in-memory, never rolled back.
///
/// # Opening a Library
///
/// ```rust,no_run
/// use biblio_core::Library;
/// use std::path::Path;
///
/// let mut library = Library::open(Path::new("biblio_data")).unwrap();
/// let id = library.add_item("Dune", "Frank Herbert").unwrap();
/// println!("added item {id}");
/// ```
#[derive(Debug)]
pub struct Library {
    catalog: Catalog,
    store: SnapshotStore,
}

impl Library {
    /// Opens a library backed by snapshots in the given directory.
    ///
    /// Missing snapshot files mean an empty catalog, not an error. The
    /// identifier counters are recomputed as max(existing) + 1 while the
    /// tables load.
    ///
    /// # Errors
    ///
    /// Returns an error on snapshot I/O failure, identifier conflicts,
    /// or malformed records.
    pub fn open(dir: &Path) -> CatalogResult<Self> {
        let store = SnapshotStore::open(dir)?;
        let mut catalog = Catalog::new();

        for record in store.load_items()? {
            catalog.items.insert(snapshot::item_from_record(record)?);
        }
        for record in store.load_members()? {
            catalog.members.insert(snapshot::member_from_record(record)?);
        }

        tracing::info!(
            items = catalog.items().len(),
            members = catalog.members().len(),
            "opened library"
        );
        Ok(Self { catalog, store })
    }

    /// Returns the in-memory catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Adds an item and snapshots the item table.
    pub fn add_item(
        &mut self,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> CatalogResult<ItemId> {
        let id = self.catalog.add_item(title, author);
        self.save_items()?;
        Ok(id)
    }

    /// Registers a member and snapshots the member table.
    pub fn add_member(&mut self, name: impl Into<String>) -> CatalogResult<MemberId> {
        let id = self.catalog.add_member(name);
        self.save_members()?;
        Ok(id)
    }

    /// Borrows with the default loan period. See [`Catalog::borrow`].
    pub fn borrow(&mut self, title: &str, member_id: MemberId) -> CatalogResult<BorrowOutcome> {
        self.borrow_for(title, member_id, DEFAULT_LOAN_DAYS)
    }

    /// Borrows with an explicit loan period.
    ///
    /// Both tables are snapshotted only when a copy was actually
    /// borrowed; waitlist outcomes change no persisted state (waiting
    /// lists are not part of the snapshot format).
    pub fn borrow_for(
        &mut self,
        title: &str,
        member_id: MemberId,
        loan_days: u32,
    ) -> CatalogResult<BorrowOutcome> {
        let outcome = self.catalog.borrow(title, member_id, loan_days)?;
        if matches!(outcome, BorrowOutcome::Borrowed { .. }) {
            self.save_items()?;
            self.save_members()?;
        }
        Ok(outcome)
    }

    /// Returns an item and snapshots both tables. See
    /// [`Catalog::return_item`].
    pub fn return_item(
        &mut self,
        item_id: ItemId,
        member_id: MemberId,
    ) -> CatalogResult<ReturnOutcome> {
        let outcome = self.catalog.return_item(item_id, member_id)?;
        self.save_items()?;
        self.save_members()?;
        Ok(outcome)
    }

    /// Cancels a waiting-list hold and snapshots the item table.
    pub fn cancel_hold(&mut self, item_id: ItemId, member_id: MemberId) -> CatalogResult<bool> {
        let cancelled = self.catalog.cancel_hold(item_id, member_id)?;
        if cancelled {
            self.save_items()?;
        }
        Ok(cancelled)
    }

    /// Deletes a member and snapshots the member table.
    ///
    /// # Errors
    ///
    /// [`CatalogError::MemberNotFound`] if the member is not registered.
    pub fn delete_member(&mut self, member_id: MemberId) -> CatalogResult<Member> {
        let Some(member) = self.catalog.delete_member(member_id) else {
            return Err(CatalogError::member_not_found(member_id));
        };
        self.save_members()?;
        Ok(member)
    }

    /// Searches items by title substring. See [`crate::ItemIndex::search`].
    #[must_use]
    pub fn search_items(&self, query: &str) -> Vec<&Item> {
        self.catalog.items().search(query)
    }

    /// Lists all items in ascending title order.
    #[must_use]
    pub fn list_items(&self) -> Vec<&Item> {
        self.catalog.items().in_order()
    }

    /// Searches members by identifier or name substring.
    #[must_use]
    pub fn search_members(&self, query: &str) -> Vec<&Member> {
        self.catalog.search_members(query)
    }

    /// Lists all members sorted by identifier.
    #[must_use]
    pub fn list_members(&self) -> Vec<&Member> {
        self.catalog.members().sorted_by_id()
    }

    /// Returns the top `top_n` items by borrow count. See
    /// [`Catalog::most_borrowed`].
    #[must_use]
    pub fn most_borrowed(&self, top_n: usize) -> Vec<&Item> {
        self.catalog.most_borrowed(top_n)
    }

    fn save_items(&self) -> CatalogResult<()> {
        let records: Vec<_> = self
            .catalog
            .items()
            .in_order()
            .into_iter()
            .map(snapshot::item_to_record)
            .collect();
        self.store.save_items(&records)?;
        Ok(())
    }

    fn save_members(&self) -> CatalogResult<()> {
        let records: Vec<_> = self
            .catalog
            .members()
            .sorted_by_id()
            .into_iter()
            .map(snapshot::member_to_record)
            .collect();
        self.store.save_members(&records)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn open_with_no_snapshots_is_empty() {
        let temp = tempdir().unwrap();
        let library = Library::open(temp.path()).unwrap();
        assert!(library.catalog().items().is_empty());
        assert!(library.catalog().members().is_empty());
    }

    #[test]
    fn state_round_trips_across_reopen() {
        let temp = tempdir().unwrap();

        let (dune, emma, alice) = {
            let mut library = Library::open(temp.path()).unwrap();
            let dune = library.add_item("Dune", "Herbert").unwrap();
            let emma = library.add_item("Emma", "Austen").unwrap();
            let alice = library.add_member("Alice").unwrap();
            library.borrow("Dune", alice).unwrap();
            (dune, emma, alice)
        };

        let library = Library::open(temp.path()).unwrap();
        assert_eq!(library.list_items().len(), 2);

        let item = library.catalog().items().get(dune).unwrap();
        assert_eq!(item.title(), "Dune");
        assert_eq!(item.author(), "Herbert");
        assert_eq!(item.borrower(), Some(alice));
        assert!(item.due_date().is_some());
        assert_eq!(item.borrow_count(), 1);

        let spare = library.catalog().items().get(emma).unwrap();
        assert!(spare.is_available());

        let member = library.catalog().members().get(alice).unwrap();
        assert_eq!(member.name(), "Alice");
        assert_eq!(member.borrowed(), &[dune]);
    }

    #[test]
    fn reopen_recomputes_identifier_counters() {
        let temp = tempdir().unwrap();

        {
            let mut library = Library::open(temp.path()).unwrap();
            library.add_item("Dune", "Herbert").unwrap();
            library.add_item("Emma", "Austen").unwrap();
            library.add_member("Alice").unwrap();
        }

        let mut library = Library::open(temp.path()).unwrap();
        assert_eq!(library.add_item("Ubik", "Dick").unwrap(), ItemId::new(3));
        assert_eq!(library.add_member("Bob").unwrap(), MemberId::new(2));
    }

    #[test]
    fn delete_member_persists() {
        let temp = tempdir().unwrap();

        let alice = {
            let mut library = Library::open(temp.path()).unwrap();
            let alice = library.add_member("Alice").unwrap();
            library.add_member("Bob").unwrap();
            library.delete_member(alice).unwrap();
            alice
        };

        let mut library = Library::open(temp.path()).unwrap();
        assert_eq!(library.list_members().len(), 1);
        assert!(matches!(
            library.delete_member(alice).unwrap_err(),
            CatalogError::MemberNotFound { .. }
        ));
    }

    #[test]
    fn contended_borrow_does_not_rewrite_snapshots() {
        let temp = tempdir().unwrap();
        let mut library = Library::open(temp.path()).unwrap();
        library.add_item("Dune", "Herbert").unwrap();
        let alice = library.add_member("Alice").unwrap();
        let bob = library.add_member("Bob").unwrap();
        library.borrow("Dune", alice).unwrap();

        // Remove the snapshots; a save would recreate them.
        let items = temp.path().join("books.csv");
        let members = temp.path().join("members.csv");
        std::fs::remove_file(&items).unwrap();
        std::fs::remove_file(&members).unwrap();

        assert!(matches!(
            library.borrow("Dune", bob).unwrap(),
            BorrowOutcome::Waitlisted { .. }
        ));
        assert!(matches!(
            library.borrow("Dune", alice).unwrap(),
            BorrowOutcome::AlreadyBorrowed { .. }
        ));
        assert!(!items.exists());
        assert!(!members.exists());
    }

    #[test]
    fn full_lending_cycle_survives_reopen() {
        let temp = tempdir().unwrap();

        let (dune, alice, bob) = {
            let mut library = Library::open(temp.path()).unwrap();
            let dune = library.add_item("Dune", "Herbert").unwrap();
            let alice = library.add_member("Alice").unwrap();
            let bob = library.add_member("Bob").unwrap();
            library.borrow("Dune", alice).unwrap();
            library.borrow("Dune", bob).unwrap(); // waitlisted
            library.return_item(dune, alice).unwrap(); // promotes Bob
            (dune, alice, bob)
        };

        let library = Library::open(temp.path()).unwrap();
        let item = library.catalog().items().get(dune).unwrap();
        assert_eq!(item.borrower(), Some(bob));
        assert_eq!(item.borrow_count(), 2);
        assert!(library
            .catalog()
            .members()
            .get(alice)
            .unwrap()
            .borrowed()
            .is_empty());
    }
}
