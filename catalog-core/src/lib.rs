//! # shelfmark-core
//!
//! Pure logic for Shelfmark (no I/O, instant tests).
//!
//! This crate implements the derived-field calculator, draft validation,
//! the edit-session state machine, and the query engine without any
//! network I/O, enabling fast unit tests.
//!
//! ## Design Philosophy
//!
//! All modules in this crate are **pure** - they take input and produce
//! output without side effects. Even "today" is an argument, never a clock
//! read. This enables:
//! - Instant unit tests (no mocks, no async)
//! - Deterministic behavior (same input → same output)
//! - Easy reasoning about state transitions
//!
//! The actual I/O (HTTP calls, cache mutation) is performed by
//! `catalog-client`, which acts on what these functions decide.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod derive;
pub mod draft;
pub mod query;
pub mod session;

pub use derive::{age, category, discounted_price, release_status, Category, ReleaseStatus};
pub use draft::BookDraft;
pub use query::{matches, search, sort_by_title, SortOrder};
pub use session::EditSession;
