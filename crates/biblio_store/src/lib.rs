//! # Biblio Store
//!
//! Flat-record snapshot tables for Biblio.
//!
//! This crate provides the lowest-level persistence layer for Biblio.
//! Snapshots are **plain record tables** - this crate does not interpret
//! lending semantics, waiting lists, or identifier assignment.
//!
//! ## Design Principles
//!
//! - Records are flat CSV rows with typed columns
//! - No knowledge of the lending state machine or catalog indexes
//! - A missing snapshot file means an empty table, never an error
//! - Duplicate identifiers in a table are fatal to the load
//!
//! ## Example
//!
//! ```rust,no_run
//! use biblio_store::{ItemRecord, SnapshotStore};
//! use std::path::Path;
//!
//! let store = SnapshotStore::open(Path::new("biblio_data")).unwrap();
//! let items = store.load_items().unwrap(); // empty if the file is missing
//! store.save_items(&items).unwrap();
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod error;
mod records;
mod snapshot;

pub use error::{StoreError, StoreResult};
pub use records::{ItemRecord, MemberRecord};
pub use snapshot::SnapshotStore;
