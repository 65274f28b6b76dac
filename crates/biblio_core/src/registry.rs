//! Membership registry.

use crate::member::Member;
use crate::types::MemberId;
use std::collections::HashMap;

/// A direct mapping from member identifier to member record.
///
/// Storage order is irrelevant; callers that need a deterministic
/// listing use [`MembershipRegistry::sorted_by_id`]. Like
/// [`crate::ItemIndex`], the registry owns identifier assignment for
/// its namespace and recomputes the counter as max(existing) + 1 when
/// members are inserted from a snapshot.
#[derive(Debug, Clone, Default)]
pub struct MembershipRegistry {
    members: HashMap<MemberId, Member>,
    next_id: u64,
}

impl MembershipRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            members: HashMap::new(),
            next_id: 1,
        }
    }

    /// Returns the number of registered members.
    #[must_use]
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns `true` if no members are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    /// Registers a new member under the next sequential identifier.
    pub fn add(&mut self, name: impl Into<String>) -> MemberId {
        let id = MemberId::new(self.next_id.max(1));
        self.next_id = id.as_u64() + 1;
        self.members.insert(id, Member::new(id, name));
        id
    }

    /// Inserts an existing member, advancing the identifier counter past it.
    pub fn insert(&mut self, member: Member) {
        self.next_id = self.next_id.max(member.id().as_u64() + 1);
        self.members.insert(member.id(), member);
    }

    /// Returns `true` if the member is registered.
    #[must_use]
    pub fn contains(&self, id: MemberId) -> bool {
        self.members.contains_key(&id)
    }

    /// Looks up a member by identifier.
    #[must_use]
    pub fn get(&self, id: MemberId) -> Option<&Member> {
        self.members.get(&id)
    }

    /// Looks up a member by identifier for mutation.
    pub fn get_mut(&mut self, id: MemberId) -> Option<&mut Member> {
        self.members.get_mut(&id)
    }

    /// Removes a member.
    ///
    /// Removal does not cascade: items the member still has on loan keep
    /// their borrower field, and any waiting-list entries remain. Both
    /// are tolerated downstream (promotion skips vanished members).
    pub fn remove(&mut self, id: MemberId) -> Option<Member> {
        self.members.remove(&id)
    }

    /// Iterates over members in storage order.
    pub fn iter(&self) -> impl Iterator<Item = &Member> {
        self.members.values()
    }

    /// Returns all members sorted by identifier, for deterministic listing.
    #[must_use]
    pub fn sorted_by_id(&self) -> Vec<&Member> {
        let mut members: Vec<&Member> = self.members.values().collect();
        members.sort_by_key(|m| m.id());
        members
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sequential_id_assignment() {
        let mut registry = MembershipRegistry::new();
        assert_eq!(registry.add("Alice"), MemberId::new(1));
        assert_eq!(registry.add("Bob"), MemberId::new(2));
        assert_eq!(registry.get(MemberId::new(2)).unwrap().name(), "Bob");
    }

    #[test]
    fn insert_advances_counter_past_loaded_ids() {
        let mut registry = MembershipRegistry::new();
        registry.insert(Member::new(MemberId::new(5), "Alice"));
        assert_eq!(registry.add("Bob"), MemberId::new(6));
    }

    #[test]
    fn remove_does_not_recycle_identifiers() {
        let mut registry = MembershipRegistry::new();
        let alice = registry.add("Alice");
        assert!(registry.remove(alice).is_some());
        assert!(registry.remove(alice).is_none());
        assert_eq!(registry.add("Bob"), MemberId::new(2));
    }

    #[test]
    fn sorted_listing_is_deterministic() {
        let mut registry = MembershipRegistry::new();
        registry.insert(Member::new(MemberId::new(3), "Carol"));
        registry.insert(Member::new(MemberId::new(1), "Alice"));
        registry.insert(Member::new(MemberId::new(2), "Bob"));

        let names: Vec<&str> = registry.sorted_by_id().iter().map(|m| m.name()).collect();
        assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
    }
}
