//! Git operations abstraction layer
//!
//! This module provides a trait-based abstraction over reading tags,
//! allowing the version selector to run against a real repository or
//! against an in-memory tag list in tests.
//!
//! # Overview
//!
//! The primary abstraction is the [TagSource] trait. The concrete
//! implementations include:
//!
//! - [repository::Git2Repository]: A real implementation using the `git2` crate
//! - [mock::MockRepository]: A mock implementation for testing
//!
//! # Usage
//!
//! ```rust
//! # use git_semvers::git::MockRepository;
//! # use git_semvers::{versions, Config};
//! let repo = MockRepository::with_tags(["v0.9.0", "v0.10.0", "nightly"]);
//! let found = versions(&repo, &Config::default()).unwrap();
//! assert_eq!(found, vec!["v0.10.0", "v0.9.0"]);
//! ```

pub mod mock;
pub mod repository;

pub use mock::MockRepository;
pub use repository::Git2Repository;

use crate::error::Result;

/// Supplier of raw tag names.
///
/// The returned list is treated as opaque: it may hold duplicates and any
/// ordering. Implementations map underlying errors (like `git2::Error`) to
/// [crate::error::GitSemversError].
pub trait TagSource {
    /// Get all tag names in the repository
    ///
    /// # Returns
    /// * `Ok(Vec<String>)` - Tag names, one entry per tag
    /// * `Err` - If the tags cannot be read
    fn list_tags(&self) -> Result<Vec<String>>;
}

impl<T: TagSource + ?Sized> TagSource for &T {
    fn list_tags(&self) -> Result<Vec<String>> {
        (**self).list_tags()
    }
}
