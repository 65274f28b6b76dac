//! Conversions between domain records and flat snapshot rows.

use crate::error::CatalogResult;
use crate::item::{Item, Loan};
use crate::member::Member;
use crate::types::{ItemId, MemberId};
use biblio_store::{ItemRecord, MemberRecord, StoreError};

/// Flattens an item into its snapshot row.
///
/// The waiting list is not part of the snapshot format and is dropped.
pub(crate) fn item_to_record(item: &Item) -> ItemRecord {
    ItemRecord {
        id: item.id().as_u64(),
        title: item.title().to_string(),
        author: item.author().to_string(),
        available: item.is_available(),
        borrowed_by: item.borrower().map(MemberId::as_u64),
        due_date: item.due_date(),
        borrow_count: item.borrow_count(),
    }
}

/// Rebuilds an item from its snapshot row.
///
/// Borrower and due date must be present together or absent together;
/// a half-set pair is a malformed record, surfaced rather than patched.
pub(crate) fn item_from_record(record: ItemRecord) -> CatalogResult<Item> {
    let loan = match (record.borrowed_by, record.due_date) {
        (Some(borrower), Some(due)) => Some(Loan {
            borrower: MemberId::new(borrower),
            due,
        }),
        (None, None) => None,
        _ => {
            return Err(StoreError::invalid_record(format!(
                "item {}: borrowed_by and due_date must be set together",
                record.id
            ))
            .into())
        }
    };
    Ok(Item::restore(
        ItemId::new(record.id),
        record.title,
        record.author,
        loan,
        record.borrow_count,
    ))
}

/// Flattens a member into its snapshot row.
pub(crate) fn member_to_record(member: &Member) -> MemberRecord {
    MemberRecord {
        id: member.id().as_u64(),
        name: member.name().to_string(),
        borrowed_item_ids: MemberRecord::join_ids(
            member.borrowed().iter().map(|id| id.as_u64()),
        ),
    }
}

/// Rebuilds a member from its snapshot row.
pub(crate) fn member_from_record(record: MemberRecord) -> CatalogResult<Member> {
    let borrowed = record
        .item_ids()?
        .into_iter()
        .map(ItemId::new)
        .collect();
    Ok(Member::restore(
        MemberId::new(record.id),
        record.name,
        borrowed,
    ))
}
