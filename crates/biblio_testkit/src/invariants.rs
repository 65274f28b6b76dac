//! Shared consistency checks for catalog state.

use biblio_core::Catalog;

/// Asserts the cross-store consistency invariants of a catalog.
///
/// Panics (with a descriptive message) if any of these fail:
///
/// - availability mirrors the loan fields: an item is available exactly
///   when it has neither borrower nor due date
/// - item borrower and member borrowed-list agree in both directions
/// - a waiting list never contains its item's current borrower and
///   holds each member at most once
///
/// Intended for use after every step of a generated operation sequence.
/// Assumes members are not deleted mid-sequence (deletion intentionally
/// leaves dangling borrower references).
pub fn assert_consistent(catalog: &Catalog) {
    for item in catalog.items().in_order() {
        let id = item.id();

        assert_eq!(
            item.is_available(),
            item.borrower().is_none(),
            "item {id}: availability disagrees with borrower field"
        );
        assert_eq!(
            item.borrower().is_none(),
            item.due_date().is_none(),
            "item {id}: borrower and due date must be set together"
        );

        if let Some(borrower) = item.borrower() {
            let member = catalog
                .members()
                .get(borrower)
                .unwrap_or_else(|| panic!("item {id}: borrower {borrower} is not registered"));
            assert!(
                member.borrowed().contains(&id),
                "item {id}: borrower {borrower} does not list the loan"
            );
            assert!(
                item.hold_position(borrower).is_none(),
                "item {id}: current borrower {borrower} is in the waiting list"
            );
        }

        let queue = item.waiting_list();
        for (pos, waiting) in queue.iter().enumerate() {
            assert_eq!(
                item.hold_position(*waiting),
                Some(pos),
                "item {id}: member {waiting} queued more than once"
            );
        }
    }

    for member in catalog.members().iter() {
        for borrowed in member.borrowed() {
            let item = catalog
                .items()
                .get(*borrowed)
                .unwrap_or_else(|| panic!("member {} lists unknown item {borrowed}", member.id()));
            assert_eq!(
                item.borrower(),
                Some(member.id()),
                "member {} lists item {borrowed} it does not hold",
                member.id()
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures::seeded_catalog;
    use biblio_core::DEFAULT_LOAN_DAYS;

    #[test]
    fn seeded_catalog_is_consistent() {
        assert_consistent(&seeded_catalog());
    }

    #[test]
    fn consistency_holds_through_a_lending_cycle() {
        let mut catalog = seeded_catalog();
        let alice = crate::seeded_member_ids()[0];

        catalog.borrow("Emma", alice, DEFAULT_LOAN_DAYS).unwrap();
        assert_consistent(&catalog);

        let emma = catalog.items().search("Emma")[0].id();
        catalog.return_item(emma, alice).unwrap();
        assert_consistent(&catalog);
    }
}
