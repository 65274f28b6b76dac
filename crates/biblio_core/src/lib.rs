//! # Biblio Core
//!
//! Catalog index and lending engine for Biblio.
//!
//! This crate provides:
//! - [`ItemIndex`]: a title-ordered, substring-searchable index of
//!   catalog items
//! - [`MembershipRegistry`]: the member identifier namespace
//! - The lending state machine on [`Catalog`]: borrow, return, FIFO
//!   waiting lists, and popularity ranking
//! - [`Library`]: a catalog bound to CSV snapshot persistence
//!
//! The execution model is single-threaded and synchronous; a `Catalog`
//! is an explicit context object owned by the caller, and `&mut`
//! ownership serializes every cross-store transition.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod catalog;
mod error;
mod index;
mod item;
mod lending;
mod library;
mod member;
mod registry;
mod snapshot;
mod types;

pub use catalog::Catalog;
pub use error::{CatalogError, CatalogResult};
pub use index::ItemIndex;
pub use item::{Item, Loan};
pub use lending::{BorrowOutcome, ReturnOutcome, DEFAULT_LOAN_DAYS};
pub use library::Library;
pub use member::Member;
pub use registry::MembershipRegistry;
pub use types::{ItemId, MemberId};

/// Crate version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
