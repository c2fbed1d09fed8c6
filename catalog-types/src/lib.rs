//! # shelfmark-types
//!
//! Record model and wire types for the Shelfmark book catalog.
//!
//! This crate provides the foundational types used across all Shelfmark crates:
//! - [`BookId`] - Opaque identifier assigned by the remote store
//! - [`BookRecord`], [`Edition`] - The book entity and its variants
//! - [`StoredBook`] - A record the remote store has assigned an identifier to
//! - [`ValidationError`] - What makes a submitted record unacceptable

#![warn(missing_docs)]
#![warn(clippy::all)]

mod book;
mod error;
mod ids;

pub use book::{BookRecord, Edition, StoredBook};
pub use error::ValidationError;
pub use ids::BookId;
