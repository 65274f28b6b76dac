//! Flat record types for the snapshot tables.

use crate::error::{StoreError, StoreResult};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One row of the item table.
///
/// Loan state is stored as the `(borrowed_by, due_date)` pair; both are
/// empty for an available item. The `available` column is redundant with
/// that pair and exists for human inspection of the snapshot file. The
/// waiting list is intentionally not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemRecord {
    /// Unique item identifier.
    pub id: u64,
    /// Item title.
    pub title: String,
    /// Item author.
    pub author: String,
    /// Whether the item is on the shelf.
    pub available: bool,
    /// Identifier of the current borrower, if any.
    pub borrowed_by: Option<u64>,
    /// Due date of the current loan (ISO date), if any.
    pub due_date: Option<NaiveDate>,
    /// Number of completed borrows over the item's lifetime.
    pub borrow_count: u64,
}

/// One row of the member table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MemberRecord {
    /// Unique member identifier.
    pub id: u64,
    /// Member name.
    pub name: String,
    /// Comma-delimited identifiers of currently borrowed items,
    /// ordered by borrow time. Empty when nothing is on loan.
    pub borrowed_item_ids: String,
}

impl MemberRecord {
    /// Parses the delimited borrowed-item list into identifiers.
    pub fn item_ids(&self) -> StoreResult<Vec<u64>> {
        if self.borrowed_item_ids.is_empty() {
            return Ok(Vec::new());
        }
        self.borrowed_item_ids
            .split(',')
            .map(|part| {
                part.parse::<u64>().map_err(|_| {
                    StoreError::invalid_record(format!(
                        "member {}: bad item id {part:?} in borrowed list",
                        self.id
                    ))
                })
            })
            .collect()
    }

    /// Joins item identifiers into the delimited on-disk form.
    pub fn join_ids(ids: impl IntoIterator<Item = u64>) -> String {
        ids.into_iter()
            .map(|id| id.to_string())
            .collect::<Vec<_>>()
            .join(",")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_ids_round_trip() {
        let record = MemberRecord {
            id: 3,
            name: "Alice".to_string(),
            borrowed_item_ids: MemberRecord::join_ids([7, 2, 19]),
        };
        assert_eq!(record.borrowed_item_ids, "7,2,19");
        assert_eq!(record.item_ids().unwrap(), vec![7, 2, 19]);
    }

    #[test]
    fn empty_borrowed_list() {
        let record = MemberRecord {
            id: 1,
            name: "Bob".to_string(),
            borrowed_item_ids: String::new(),
        };
        assert!(record.item_ids().unwrap().is_empty());
        assert_eq!(MemberRecord::join_ids([]), "");
    }

    #[test]
    fn malformed_borrowed_list() {
        let record = MemberRecord {
            id: 1,
            name: "Bob".to_string(),
            borrowed_item_ids: "4,oops".to_string(),
        };
        assert!(matches!(
            record.item_ids(),
            Err(StoreError::InvalidRecord { .. })
        ));
    }
}
