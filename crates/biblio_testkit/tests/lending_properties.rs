//! Property tests over generated lending operation sequences.

use biblio_core::{BorrowOutcome, CatalogError, DEFAULT_LOAN_DAYS};
use biblio_testkit::prelude::*;
use proptest::prelude::*;

proptest! {
    /// Cross-store consistency holds after every operation, whatever
    /// mix of valid and invalid requests the sequence throws at it.
    #[test]
    fn consistency_survives_arbitrary_sequences(ops in op_sequence_strategy(40)) {
        let mut catalog = seeded_catalog();
        assert_consistent(&catalog);

        for op in ops {
            match op {
                LendingOp::Borrow { query, member } => {
                    match catalog.borrow(&query, member, DEFAULT_LOAN_DAYS) {
                        Ok(_) => {}
                        Err(CatalogError::MemberNotFound { .. })
                        | Err(CatalogError::ItemNotFound { .. }) => {}
                        Err(e) => panic!("unexpected borrow failure: {e}"),
                    }
                }
                LendingOp::Return { item, member } => {
                    match catalog.return_item(item, member) {
                        Ok(_) => {}
                        Err(CatalogError::ReturnMismatch { .. }) => {}
                        Err(e) => panic!("unexpected return failure: {e}"),
                    }
                }
                LendingOp::CancelHold { item, member } => {
                    match catalog.cancel_hold(item, member) {
                        Ok(_) => {}
                        Err(CatalogError::ItemNotFound { .. }) => {}
                        Err(e) => panic!("unexpected cancel failure: {e}"),
                    }
                }
            }
            assert_consistent(&catalog);
        }
    }

    /// Borrow counts never decrease, and only grow on Borrowed outcomes.
    #[test]
    fn borrow_counts_are_monotone(ops in op_sequence_strategy(40)) {
        let mut catalog = seeded_catalog();

        let total = |c: &biblio_core::Catalog| -> u64 {
            c.items().in_order().iter().map(|i| i.borrow_count()).sum()
        };

        let mut before = total(&catalog);
        for op in ops {
            let borrowed_now = match &op {
                LendingOp::Borrow { query, member } => matches!(
                    catalog.borrow(query, *member, DEFAULT_LOAN_DAYS),
                    Ok(BorrowOutcome::Borrowed { .. })
                ),
                LendingOp::Return { item, member } => {
                    // A return that promotes a queued member completes
                    // one borrow on their behalf.
                    matches!(
                        catalog.return_item(*item, *member),
                        Ok(outcome) if outcome.promoted.is_some()
                    )
                }
                LendingOp::CancelHold { item, member } => {
                    let _ = catalog.cancel_hold(*item, *member);
                    false
                }
            };

            let after = total(&catalog);
            if borrowed_now {
                prop_assert_eq!(after, before + 1);
            } else {
                prop_assert_eq!(after, before);
            }
            before = after;
        }
    }

    /// An empty search query always returns the whole catalog.
    #[test]
    fn empty_query_is_full_catalog(ops in op_sequence_strategy(15)) {
        let mut catalog = seeded_catalog();
        for op in ops {
            if let LendingOp::Borrow { query, member } = op {
                let _ = catalog.borrow(&query, member, DEFAULT_LOAN_DAYS);
            }
            prop_assert_eq!(catalog.items().search("").len(), catalog.items().len());
        }
    }
}
