//! Catalog item and its lending state.

use crate::types::{ItemId, MemberId};
use chrono::NaiveDate;
use std::collections::VecDeque;

/// An active loan on an item.
///
/// Borrower and due date always travel together; an item either has a
/// full loan or none at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Loan {
    /// Member currently holding the item.
    pub borrower: MemberId,
    /// Date the item is due back.
    pub due: NaiveDate,
}

/// One circulating copy of a titled work.
///
/// Availability is derived from the loan field rather than stored as a
/// separate flag, so the "available iff no borrower iff no due date"
/// invariant cannot be violated by construction. The waiting list is a
/// FIFO queue of member identifiers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    id: ItemId,
    title: String,
    author: String,
    loan: Option<Loan>,
    waiting_list: VecDeque<MemberId>,
    borrow_count: u64,
}

impl Item {
    /// Creates a new available item with no lending history.
    pub fn new(id: ItemId, title: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            author: author.into(),
            loan: None,
            waiting_list: VecDeque::new(),
            borrow_count: 0,
        }
    }

    /// Rebuilds an item from snapshot state.
    ///
    /// The waiting list is not part of the snapshot format and starts
    /// empty after a load.
    pub(crate) fn restore(
        id: ItemId,
        title: String,
        author: String,
        loan: Option<Loan>,
        borrow_count: u64,
    ) -> Self {
        Self {
            id,
            title,
            author,
            loan,
            waiting_list: VecDeque::new(),
            borrow_count,
        }
    }

    /// Returns the item identifier.
    #[must_use]
    pub fn id(&self) -> ItemId {
        self.id
    }

    /// Returns the title.
    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Returns the author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Whether the item is on the shelf.
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.loan.is_none()
    }

    /// Returns the current loan, if any.
    #[must_use]
    pub fn loan(&self) -> Option<&Loan> {
        self.loan.as_ref()
    }

    /// Returns the current borrower, if any.
    #[must_use]
    pub fn borrower(&self) -> Option<MemberId> {
        self.loan.map(|loan| loan.borrower)
    }

    /// Returns the due date of the current loan, if any.
    #[must_use]
    pub fn due_date(&self) -> Option<NaiveDate> {
        self.loan.map(|loan| loan.due)
    }

    /// Returns the number of completed borrows.
    #[must_use]
    pub fn borrow_count(&self) -> u64 {
        self.borrow_count
    }

    /// Returns the waiting list in queue order.
    #[must_use]
    pub fn waiting_list(&self) -> &VecDeque<MemberId> {
        &self.waiting_list
    }

    /// Records a completed checkout.
    ///
    /// Sets borrower and due date together and bumps the borrow count by
    /// exactly one. Callers must only invoke this on an available item.
    pub(crate) fn check_out(&mut self, borrower: MemberId, due: NaiveDate) {
        debug_assert!(self.loan.is_none(), "checkout of an unavailable item");
        self.loan = Some(Loan { borrower, due });
        self.borrow_count += 1;
    }

    /// Clears the loan, returning it.
    pub(crate) fn check_in(&mut self) -> Option<Loan> {
        self.loan.take()
    }

    /// Appends a member to the waiting list and returns the 0-indexed
    /// queue position.
    pub(crate) fn enqueue_hold(&mut self, member: MemberId) -> usize {
        self.waiting_list.push_back(member);
        self.waiting_list.len() - 1
    }

    /// Returns a member's 0-indexed position in the waiting list.
    #[must_use]
    pub fn hold_position(&self, member: MemberId) -> Option<usize> {
        self.waiting_list.iter().position(|m| *m == member)
    }

    /// Removes a member from the waiting list.
    ///
    /// Returns `true` if the member was queued.
    pub(crate) fn cancel_hold(&mut self, member: MemberId) -> bool {
        match self.hold_position(member) {
            Some(pos) => {
                self.waiting_list.remove(pos);
                true
            }
            None => false,
        }
    }

    /// Pops the head of the waiting list.
    pub(crate) fn pop_hold(&mut self) -> Option<MemberId> {
        self.waiting_list.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Item {
        Item::new(ItemId::new(1), "Dune", "Herbert")
    }

    #[test]
    fn new_item_is_available() {
        let item = sample();
        assert!(item.is_available());
        assert!(item.borrower().is_none());
        assert!(item.due_date().is_none());
        assert_eq!(item.borrow_count(), 0);
    }

    #[test]
    fn check_out_sets_loan_fields_together() {
        let mut item = sample();
        let due = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        item.check_out(MemberId::new(2), due);

        assert!(!item.is_available());
        assert_eq!(item.borrower(), Some(MemberId::new(2)));
        assert_eq!(item.due_date(), Some(due));
        assert_eq!(item.borrow_count(), 1);
    }

    #[test]
    fn check_in_clears_loan_fields_together() {
        let mut item = sample();
        let due = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        item.check_out(MemberId::new(2), due);

        let loan = item.check_in().unwrap();
        assert_eq!(loan.borrower, MemberId::new(2));
        assert!(item.is_available());
        assert!(item.borrower().is_none());
        assert!(item.due_date().is_none());
        // History survives the return.
        assert_eq!(item.borrow_count(), 1);
    }

    #[test]
    fn waiting_list_is_fifo() {
        let mut item = sample();
        assert_eq!(item.enqueue_hold(MemberId::new(1)), 0);
        assert_eq!(item.enqueue_hold(MemberId::new(2)), 1);
        assert_eq!(item.hold_position(MemberId::new(2)), Some(1));

        assert_eq!(item.pop_hold(), Some(MemberId::new(1)));
        assert_eq!(item.hold_position(MemberId::new(2)), Some(0));
    }

    #[test]
    fn cancel_hold_removes_exactly_one_member() {
        let mut item = sample();
        item.enqueue_hold(MemberId::new(1));
        item.enqueue_hold(MemberId::new(2));
        item.enqueue_hold(MemberId::new(3));

        assert!(item.cancel_hold(MemberId::new(2)));
        assert!(!item.cancel_hold(MemberId::new(2)));
        assert_eq!(item.waiting_list().len(), 2);
        assert_eq!(item.hold_position(MemberId::new(3)), Some(1));
    }
}
