//! Remote store abstraction for Shelfmark.
//!
//! This module provides a pluggable gateway to the remote catalog,
//! abstracting the underlying mechanism (HTTP, mock for testing) and, in
//! one configuration, layering a simulated unreliable channel on top.
//!
//! # Design
//!
//! The store trait is async and request/response-oriented, one method per
//! remote operation:
//! - `list()` fetches the full catalog
//! - `create()` persists a new record and returns it with its identifier
//! - `update()` replaces the record behind an identifier
//! - `delete()` removes a record
//!
//! # Example
//!
//! ```ignore
//! let store = MockStore::new();
//! let stored = store.create(&record).await?;
//! let all = store.list().await?;
//! store.delete(&stored.id).await?;
//! ```

mod flaky;
mod http;
mod mock;

pub use flaky::{
    FaultPolicy, FlakyStore, RandomFaults, ScriptedFaults, DEFAULT_DELAY,
    DEFAULT_FAULT_PROBABILITY,
};
pub use http::HttpStore;
pub use mock::{MockStore, StoreOp};

use async_trait::async_trait;
use catalog_types::{BookId, BookRecord, StoredBook};
use thiserror::Error;

/// Store errors.
///
/// Whatever the cause, state on both sides is left as it was before the
/// call, so a retry is always safe.
#[derive(Debug, Error)]
pub enum StoreError {
    /// The request never completed (connection refused, DNS, ...).
    #[error("request failed: {0}")]
    Request(String),

    /// The store answered with a non-success status.
    #[error("store rejected the request: HTTP {0}")]
    Status(u16),

    /// The response body could not be decoded.
    #[error("response could not be decoded: {0}")]
    Decode(String),

    /// Synthetic failure from the flaky channel.
    #[error("simulated network failure")]
    FaultInjected,
}

/// Gateway to the remote catalog store.
///
/// Implementations handle the underlying mechanism (HTTP, mock, a flaky
/// wrapper around either).
#[async_trait]
pub trait RemoteStore: Send + Sync {
    /// Fetch the full catalog.
    async fn list(&self) -> Result<Vec<StoredBook>, StoreError>;

    /// Persist a new record. The store assigns the identifier.
    async fn create(&self, record: &BookRecord) -> Result<StoredBook, StoreError>;

    /// Replace the record behind `id`.
    async fn update(&self, id: &BookId, record: &BookRecord) -> Result<StoredBook, StoreError>;

    /// Remove the record behind `id`.
    async fn delete(&self, id: &BookId) -> Result<(), StoreError>;
}
