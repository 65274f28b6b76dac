//! Borrow, return, waitlist, and popularity transitions.

use crate::catalog::Catalog;
use crate::error::{CatalogError, CatalogResult};
use crate::item::Item;
use crate::types::{ItemId, MemberId};
use chrono::{Days, NaiveDate, Utc};

/// Loan period applied when the caller does not specify one.
pub const DEFAULT_LOAN_DAYS: u32 = 14;

/// Result of a borrow request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BorrowOutcome {
    /// A copy was available and is now on loan to the member.
    Borrowed {
        /// The borrowed copy.
        item_id: ItemId,
        /// Date the copy is due back.
        due: NaiveDate,
    },
    /// No copy was available; the member is queued on the first match.
    Waitlisted {
        /// The copy whose waiting list holds the member.
        item_id: ItemId,
        /// 0-indexed queue position.
        position: usize,
    },
    /// The member already holds the only matching copy; nothing changed.
    AlreadyBorrowed {
        /// The copy the member currently holds.
        item_id: ItemId,
    },
}

/// Result of a successful return.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReturnOutcome {
    /// The returned copy.
    pub item_id: ItemId,
    /// Head of the waiting list that was promoted onto the freed copy,
    /// if any.
    pub promoted: Option<MemberId>,
}

impl Catalog {
    /// Borrows the first available item matching `title`.
    ///
    /// Matches are scanned in search order (substring match, see
    /// [`crate::ItemIndex::search`]). If every match is on loan the
    /// member is appended to the waiting list of the FIRST match. A
    /// member already queued there, or already holding that copy, is
    /// not enqueued twice.
    ///
    /// # Errors
    ///
    /// [`CatalogError::MemberNotFound`] if the member is not registered,
    /// [`CatalogError::ItemNotFound`] if nothing matches the title.
    pub fn borrow(
        &mut self,
        title: &str,
        member_id: MemberId,
        loan_days: u32,
    ) -> CatalogResult<BorrowOutcome> {
        if !self.members.contains(member_id) {
            return Err(CatalogError::member_not_found(member_id));
        }

        let matches: Vec<ItemId> = self.items.search(title).iter().map(|i| i.id()).collect();
        let Some(&first) = matches.first() else {
            return Err(CatalogError::item_not_found(title));
        };

        for id in matches {
            let Some(item) = self.items.get_mut(id) else {
                continue;
            };
            if !item.is_available() {
                continue;
            }
            let due = Utc::now().date_naive() + Days::new(u64::from(loan_days));
            item.check_out(member_id, due);
            if let Some(member) = self.members.get_mut(member_id) {
                member.record_borrow(id);
            }
            tracing::info!(item = %id, member = %member_id, %due, "borrowed");
            return Ok(BorrowOutcome::Borrowed { item_id: id, due });
        }

        // Every match is on loan: queue on the first match. The waiting
        // list must never contain the copy's own borrower.
        let Some(item) = self.items.get_mut(first) else {
            return Err(CatalogError::item_not_found(title));
        };
        if item.borrower() == Some(member_id) {
            return Ok(BorrowOutcome::AlreadyBorrowed { item_id: first });
        }
        let position = match item.hold_position(member_id) {
            Some(existing) => existing,
            None => {
                let position = item.enqueue_hold(member_id);
                tracing::info!(item = %first, member = %member_id, position, "waitlisted");
                position
            }
        };
        Ok(BorrowOutcome::Waitlisted {
            item_id: first,
            position,
        })
    }

    /// Removes a member from an item's waiting list (the caller-level
    /// "decline waitlist" compensating action).
    ///
    /// Returns `true` if the member was queued on that exact item.
    ///
    /// # Errors
    ///
    /// [`CatalogError::ItemNotFound`] if the item does not exist.
    pub fn cancel_hold(&mut self, item_id: ItemId, member_id: MemberId) -> CatalogResult<bool> {
        let Some(item) = self.items.get_mut(item_id) else {
            return Err(CatalogError::item_not_found(item_id.to_string()));
        };
        Ok(item.cancel_hold(member_id))
    }

    /// Returns an item and promotes the head of its waiting list.
    ///
    /// The item is located by an in-order scan matching BOTH the
    /// identifier and the borrower; anything else is a
    /// [`CatalogError::ReturnMismatch`] (not-borrowed and wrong-borrower
    /// are deliberately not distinguished).
    ///
    /// Promotion re-invokes [`Catalog::borrow`] for the popped member
    /// against the same title. The just-returned copy is available at
    /// that point, so the promoted member borrows it instead of being
    /// re-queued. A promoted member that no longer exists is a soft
    /// failure: the hold is dropped and the copy stays available.
    pub fn return_item(
        &mut self,
        item_id: ItemId,
        member_id: MemberId,
    ) -> CatalogResult<ReturnOutcome> {
        let matched = self
            .items
            .in_order()
            .iter()
            .any(|i| i.id() == item_id && i.borrower() == Some(member_id));
        if !matched {
            return Err(CatalogError::return_mismatch(item_id, member_id));
        }

        // Identifiers are unique, so this reaches the item the scan matched.
        let Some(item) = self.items.get_mut(item_id) else {
            return Err(CatalogError::return_mismatch(item_id, member_id));
        };
        item.check_in();
        let title = item.title().to_string();
        let next = item.pop_hold();

        if let Some(member) = self.members.get_mut(member_id) {
            member.record_return(item_id);
        }
        tracing::info!(item = %item_id, member = %member_id, "returned");

        let mut promoted = None;
        if let Some(next_member) = next {
            match self.borrow(&title, next_member, DEFAULT_LOAN_DAYS) {
                Ok(_) => {
                    tracing::debug!(item = %item_id, member = %next_member, "promoted from waiting list");
                    promoted = Some(next_member);
                }
                Err(CatalogError::MemberNotFound { .. }) => {
                    tracing::debug!(member = %next_member, "dropping hold of vanished member");
                }
                Err(e) => return Err(e),
            }
        }

        Ok(ReturnOutcome { item_id, promoted })
    }

    /// Returns up to `top_n` items ranked by borrow count, descending.
    ///
    /// The sort is stable, so ties keep traversal (title) order. A
    /// `top_n` of zero yields nothing; one beyond the catalog size
    /// yields the whole catalog.
    #[must_use]
    pub fn most_borrowed(&self, top_n: usize) -> Vec<&Item> {
        let mut items = self.items.in_order();
        items.sort_by(|a, b| b.borrow_count().cmp(&a.borrow_count()));
        items.truncate(top_n);
        items
    }
}
