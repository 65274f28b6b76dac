//! Snapshot table reader/writer.

use crate::error::{StoreError, StoreResult};
use crate::records::{ItemRecord, MemberRecord};
use std::collections::HashSet;
use std::fs::File;
use std::path::{Path, PathBuf};

/// File name of the item table inside the data directory.
const ITEMS_FILE: &str = "books.csv";
/// File name of the member table inside the data directory.
const MEMBERS_FILE: &str = "members.csv";

/// Reads and writes whole-table CSV snapshots in a data directory.
///
/// Each save replaces the target file with a full export of the table.
/// Loads tolerate a missing file (empty table) and fail on identifier
/// conflicts.
///
/// # Example
///
/// ```no_run
/// use biblio_store::SnapshotStore;
/// use std::path::Path;
///
/// let store = SnapshotStore::open(Path::new("biblio_data")).unwrap();
/// assert!(store.load_members().unwrap().is_empty());
/// ```
#[derive(Debug)]
pub struct SnapshotStore {
    dir: PathBuf,
}

impl SnapshotStore {
    /// Opens a snapshot store rooted at the given directory.
    ///
    /// The directory is created if it does not exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created.
    pub fn open(dir: &Path) -> StoreResult<Self> {
        std::fs::create_dir_all(dir)?;
        Ok(Self {
            dir: dir.to_path_buf(),
        })
    }

    /// Returns the path of the item table.
    #[must_use]
    pub fn items_path(&self) -> PathBuf {
        self.dir.join(ITEMS_FILE)
    }

    /// Returns the path of the member table.
    #[must_use]
    pub fn members_path(&self) -> PathBuf {
        self.dir.join(MEMBERS_FILE)
    }

    /// Writes the full item table.
    pub fn save_items(&self, records: &[ItemRecord]) -> StoreResult<()> {
        self.save_table(&self.items_path(), records)?;
        tracing::debug!(count = records.len(), "saved item snapshot");
        Ok(())
    }

    /// Reads the full item table.
    ///
    /// A missing file yields an empty table. Duplicate identifiers are
    /// fatal to the load.
    pub fn load_items(&self) -> StoreResult<Vec<ItemRecord>> {
        let records: Vec<ItemRecord> = self.load_table(&self.items_path())?;
        Self::check_unique("item", records.iter().map(|r| r.id))?;
        tracing::debug!(count = records.len(), "loaded item snapshot");
        Ok(records)
    }

    /// Writes the full member table.
    pub fn save_members(&self, records: &[MemberRecord]) -> StoreResult<()> {
        self.save_table(&self.members_path(), records)?;
        tracing::debug!(count = records.len(), "saved member snapshot");
        Ok(())
    }

    /// Reads the full member table.
    ///
    /// A missing file yields an empty table. Duplicate identifiers are
    /// fatal to the load.
    pub fn load_members(&self) -> StoreResult<Vec<MemberRecord>> {
        let records: Vec<MemberRecord> = self.load_table(&self.members_path())?;
        Self::check_unique("member", records.iter().map(|r| r.id))?;
        tracing::debug!(count = records.len(), "loaded member snapshot");
        Ok(records)
    }

    fn save_table<T: serde::Serialize>(&self, path: &Path, records: &[T]) -> StoreResult<()> {
        let mut writer = csv::Writer::from_writer(File::create(path)?);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn load_table<T: serde::de::DeserializeOwned>(&self, path: &Path) -> StoreResult<Vec<T>> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let mut reader = csv::Reader::from_reader(File::open(path)?);
        let mut records = Vec::new();
        for record in reader.deserialize() {
            records.push(record?);
        }
        Ok(records)
    }

    fn check_unique(table: &'static str, ids: impl Iterator<Item = u64>) -> StoreResult<()> {
        let mut seen = HashSet::new();
        for id in ids {
            if !seen.insert(id) {
                return Err(StoreError::duplicate_identifier(table, id));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use tempfile::tempdir;

    fn item(id: u64, title: &str) -> ItemRecord {
        ItemRecord {
            id,
            title: title.to_string(),
            author: "Author".to_string(),
            available: true,
            borrowed_by: None,
            due_date: None,
            borrow_count: 0,
        }
    }

    #[test]
    fn missing_files_are_empty_tables() {
        let temp = tempdir().unwrap();
        let store = SnapshotStore::open(temp.path()).unwrap();

        assert!(store.load_items().unwrap().is_empty());
        assert!(store.load_members().unwrap().is_empty());
    }

    #[test]
    fn item_round_trip() {
        let temp = tempdir().unwrap();
        let store = SnapshotStore::open(temp.path()).unwrap();

        let records = vec![
            ItemRecord {
                id: 1,
                title: "Dune".to_string(),
                author: "Herbert".to_string(),
                available: false,
                borrowed_by: Some(2),
                due_date: NaiveDate::from_ymd_opt(2025, 3, 14),
                borrow_count: 3,
            },
            item(2, "Emma"),
        ];

        store.save_items(&records).unwrap();
        let loaded = store.load_items().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn member_round_trip() {
        let temp = tempdir().unwrap();
        let store = SnapshotStore::open(temp.path()).unwrap();

        let records = vec![
            MemberRecord {
                id: 1,
                name: "Alice".to_string(),
                borrowed_item_ids: "4,1".to_string(),
            },
            MemberRecord {
                id: 2,
                name: "Bob".to_string(),
                borrowed_item_ids: String::new(),
            },
        ];

        store.save_members(&records).unwrap();
        let loaded = store.load_members().unwrap();
        assert_eq!(loaded, records);
    }

    #[test]
    fn save_replaces_previous_snapshot() {
        let temp = tempdir().unwrap();
        let store = SnapshotStore::open(temp.path()).unwrap();

        store.save_items(&[item(1, "Dune"), item(2, "Emma")]).unwrap();
        store.save_items(&[item(3, "Ubik")]).unwrap();

        let loaded = store.load_items().unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, 3);
    }

    #[test]
    fn duplicate_item_identifier_is_fatal() {
        let temp = tempdir().unwrap();
        let store = SnapshotStore::open(temp.path()).unwrap();

        store.save_items(&[item(1, "Dune"), item(1, "Emma")]).unwrap();
        let err = store.load_items().unwrap_err();
        assert!(matches!(
            err,
            StoreError::DuplicateIdentifier { table: "item", id: 1 }
        ));
    }

    #[test]
    fn duplicate_member_identifier_is_fatal() {
        let temp = tempdir().unwrap();
        let store = SnapshotStore::open(temp.path()).unwrap();

        let records = vec![
            MemberRecord {
                id: 7,
                name: "Alice".to_string(),
                borrowed_item_ids: String::new(),
            },
            MemberRecord {
                id: 7,
                name: "Bob".to_string(),
                borrowed_item_ids: String::new(),
            },
        ];
        store.save_members(&records).unwrap();
        assert!(matches!(
            store.load_members().unwrap_err(),
            StoreError::DuplicateIdentifier { table: "member", id: 7 }
        ));
    }
}
