//! Core identifier types for Biblio.

use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// Unique identifier for a catalog item.
///
/// Item identifiers are monotonically assigned starting at 1 and never
/// reused. They render as plain decimal strings at the snapshot and
/// presentation boundaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ItemId(pub u64);

impl ItemId {
    /// Creates a new item ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for ItemId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

/// Unique identifier for a registered member.
///
/// Member identifiers form their own namespace, independent of item
/// identifiers, with the same monotone assignment rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MemberId(pub u64);

impl MemberId {
    /// Creates a new member ID.
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    /// Returns the raw ID value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

impl fmt::Display for MemberId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for MemberId {
    type Err = ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.parse::<u64>().map(Self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn item_id_ordering() {
        assert!(ItemId::new(1) < ItemId::new(2));
    }

    #[test]
    fn display_is_plain_decimal() {
        assert_eq!(ItemId::new(42).to_string(), "42");
        assert_eq!(MemberId::new(7).to_string(), "7");
    }

    #[test]
    fn parse_round_trip() {
        let id: ItemId = "19".parse().unwrap();
        assert_eq!(id, ItemId::new(19));
        assert!("x".parse::<MemberId>().is_err());
    }
}
