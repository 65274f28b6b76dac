//! Error types for catalog operations.

use crate::types::{ItemId, MemberId};
use biblio_store::StoreError;
use thiserror::Error;

/// Result type for catalog operations.
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Errors that can occur in catalog and lending operations.
///
/// Lending-path failures are always returned as values, never panics.
/// The engine performs no retries; a failed snapshot save is surfaced
/// while the in-memory mutation stands.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The member is not registered.
    #[error("member not found: {member_id}")]
    MemberNotFound {
        /// The identifier that was looked up.
        member_id: MemberId,
    },

    /// No item matched the query.
    #[error("no item matching {query:?}")]
    ItemNotFound {
        /// The title query or identifier that was searched.
        query: String,
    },

    /// The item is not on loan to this member.
    ///
    /// Deliberately covers both "not borrowed at all" and "borrowed by
    /// someone else"; the two are not distinguished.
    #[error("return mismatch: item {item_id} is not on loan to member {member_id}")]
    ReturnMismatch {
        /// The item being returned.
        item_id: ItemId,
        /// The member attempting the return.
        member_id: MemberId,
    },

    /// Snapshot store failure.
    #[error("snapshot store error: {0}")]
    Store(#[from] StoreError),
}

impl CatalogError {
    /// Creates a member-not-found error.
    pub fn member_not_found(member_id: MemberId) -> Self {
        Self::MemberNotFound { member_id }
    }

    /// Creates an item-not-found error.
    pub fn item_not_found(query: impl Into<String>) -> Self {
        Self::ItemNotFound {
            query: query.into(),
        }
    }

    /// Creates a return-mismatch error.
    pub fn return_mismatch(item_id: ItemId, member_id: MemberId) -> Self {
        Self::ReturnMismatch { item_id, member_id }
    }
}
