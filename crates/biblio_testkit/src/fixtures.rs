//! Catalog and library fixtures.
//!
//! Provides convenience functions for setting up seeded catalogs
//! and temporary snapshot-backed libraries.

use biblio_core::{Catalog, Library, MemberId};
use tempfile::TempDir;

/// A snapshot-backed library with automatic cleanup.
pub struct TestLibrary {
    /// The library instance.
    pub library: Library,
    /// The temporary directory (kept alive to prevent cleanup).
    _temp_dir: TempDir,
}

impl TestLibrary {
    /// Creates a library backed by a fresh temporary directory.
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("failed to create temp directory");
        let library = Library::open(temp_dir.path()).expect("failed to open library");
        Self {
            library,
            _temp_dir: temp_dir,
        }
    }

    /// Reopens the library from the same directory, simulating a restart.
    pub fn reopen(self) -> Self {
        let Self {
            library, _temp_dir, ..
        } = self;
        drop(library);
        let reopened = Library::open(_temp_dir.path()).expect("failed to reopen library");
        Self {
            library: reopened,
            _temp_dir,
        }
    }
}

impl Default for TestLibrary {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Deref for TestLibrary {
    type Target = Library;

    fn deref(&self) -> &Self::Target {
        &self.library
    }
}

impl std::ops::DerefMut for TestLibrary {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.library
    }
}

/// Runs a test with a temporary snapshot-backed library.
pub fn with_temp_library<F>(f: F)
where
    F: FnOnce(&mut Library),
{
    let mut test = TestLibrary::new();
    f(&mut test.library);
}

/// Titles used by the seeded catalog, with a deliberate duplicate.
pub const SEED_TITLES: &[(&str, &str)] = &[
    ("Dune", "Frank Herbert"),
    ("Dune", "Frank Herbert"),
    ("Emma", "Jane Austen"),
    ("Moby Dick", "Herman Melville"),
    ("The Dispossessed", "Ursula K. Le Guin"),
    ("Ubik", "Philip K. Dick"),
];

/// Names used by the seeded catalog's members.
pub const SEED_MEMBERS: &[&str] = &["Alice", "Bob", "Carol", "Dave"];

/// Builds an in-memory catalog seeded with [`SEED_TITLES`] and
/// [`SEED_MEMBERS`].
pub fn seeded_catalog() -> Catalog {
    let mut catalog = Catalog::new();
    for (title, author) in SEED_TITLES {
        catalog.add_item(*title, *author);
    }
    for name in SEED_MEMBERS {
        catalog.add_member(*name);
    }
    catalog
}

/// Member ids of the seeded catalog, in registration order.
pub fn seeded_member_ids() -> Vec<MemberId> {
    (1..=SEED_MEMBERS.len() as u64).map(MemberId::new).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn seeded_catalog_shape() {
        let catalog = seeded_catalog();
        assert_eq!(catalog.items().len(), SEED_TITLES.len());
        assert_eq!(catalog.members().len(), SEED_MEMBERS.len());
        assert_eq!(catalog.items().search("dune").len(), 2);
    }

    #[test]
    fn reopen_preserves_state() {
        let mut test = TestLibrary::new();
        test.add_item("Dune", "Herbert").unwrap();
        let test = test.reopen();
        assert_eq!(test.list_items().len(), 1);
    }
}
