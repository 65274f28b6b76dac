//! Property-based test generators using proptest.
//!
//! Strategies draw from small identifier and query spaces so that
//! generated operation sequences actually collide: duplicate titles,
//! contended copies, repeated returns.

use biblio_core::{ItemId, MemberId};
use proptest::prelude::*;

/// One abstract lending operation.
#[derive(Debug, Clone)]
pub enum LendingOp {
    /// Borrow by title query on behalf of a member.
    Borrow {
        /// Title query (substring).
        query: String,
        /// Requesting member.
        member: MemberId,
    },
    /// Return an item on behalf of a member.
    Return {
        /// Item being returned.
        item: ItemId,
        /// Member returning it.
        member: MemberId,
    },
    /// Leave an item's waiting list.
    CancelHold {
        /// Item whose queue to leave.
        item: ItemId,
        /// Member leaving the queue.
        member: MemberId,
    },
}

/// Strategy for title queries that hit the seeded catalog.
pub fn query_strategy() -> impl Strategy<Value = String> {
    prop::sample::select(vec![
        "dune".to_string(),
        "Dune".to_string(),
        "emma".to_string(),
        "dis".to_string(),
        "ubik".to_string(),
        "moby".to_string(),
        "M".to_string(),
    ])
}

/// Strategy for member ids around the seeded registry (some invalid).
pub fn member_id_strategy() -> impl Strategy<Value = MemberId> {
    (1u64..=6).prop_map(MemberId::new)
}

/// Strategy for item ids around the seeded index (some invalid).
pub fn item_id_strategy() -> impl Strategy<Value = ItemId> {
    (1u64..=8).prop_map(ItemId::new)
}

/// Strategy for a single lending operation.
pub fn lending_op_strategy() -> impl Strategy<Value = LendingOp> {
    prop_oneof![
        (query_strategy(), member_id_strategy())
            .prop_map(|(query, member)| LendingOp::Borrow { query, member }),
        (item_id_strategy(), member_id_strategy())
            .prop_map(|(item, member)| LendingOp::Return { item, member }),
        (item_id_strategy(), member_id_strategy())
            .prop_map(|(item, member)| LendingOp::CancelHold { item, member }),
    ]
}

/// Strategy for a sequence of lending operations.
pub fn op_sequence_strategy(max_len: usize) -> impl Strategy<Value = Vec<LendingOp>> {
    prop::collection::vec(lending_op_strategy(), 0..max_len)
}
