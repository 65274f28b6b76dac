//! # Biblio Testkit
//!
//! Test utilities for Biblio.
//!
//! This crate provides:
//! - Catalog and library fixtures with automatic cleanup
//! - Property-based test generators using proptest
//! - Invariant checks shared by the workspace's property tests
//!
//! ## Usage
//!
//! ```rust,ignore
//! use biblio_testkit::prelude::*;
//!
//! #[test]
//! fn test_with_library() {
//!     with_temp_library(|library| {
//!         library.add_item("Dune", "Herbert").unwrap();
//!         // ... test operations
//!     });
//! }
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

pub mod fixtures;
pub mod generators;
pub mod invariants;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::fixtures::*;
    pub use crate::generators::*;
    pub use crate::invariants::*;
}

pub use fixtures::*;
pub use generators::*;
pub use invariants::*;
