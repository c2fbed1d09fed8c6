//! CatalogClient - the main interface for Shelfmark.
//!
//! This module provides [`CatalogClient`], the primary API for a UI layer
//! to work with a remote book catalog.
//!
//! # Architecture
//!
//! CatalogClient keeps all shared mutable state (the local mirror and the
//! edit session) behind one mutex and interprets the pure logic from
//! shelfmark-core to perform actual I/O via the [`RemoteStore`] trait.
//!
//! ```text
//! UI layer → CatalogClient → RemoteStore → Network
//!                 ↓
//!          shelfmark-core (pure validation/session/query logic)
//! ```
//!
//! The state lock is held across each store call. That serializes
//! mutating operations: a submit issued while another is in flight queues
//! behind it instead of interleaving, which keeps the mirror a
//! single-writer resource even on a multi-threaded runtime.
//!
//! # Example
//!
//! ```ignore
//! use catalog_client::{CatalogClient, MockStore};
//! use catalog_core::BookDraft;
//!
//! let client = CatalogClient::new(MockStore::new());
//! client.refresh().await?;
//! client.submit(&BookDraft::new("Dune", "Herbert", "123", "1965-01-01", "sci-fi")).await?;
//! ```

use std::sync::Arc;
use thiserror::Error;
use tokio::sync::Mutex;

use catalog_core::{query, BookDraft, EditSession, SortOrder};
use catalog_types::{StoredBook, ValidationError};

use crate::cache::CatalogCache;
use crate::store::{RemoteStore, StoreError};

/// Client errors.
#[derive(Debug, Error)]
pub enum ClientError {
    /// The submitted form was rejected before any network call.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// The remote store call failed; nothing was applied locally.
    #[error("store error: {0}")]
    Store(#[from] StoreError),

    /// The targeted cache position no longer holds a record.
    #[error("no record at position {0}")]
    NotFound(usize),
}

/// All shared mutable state, guarded as one unit.
#[derive(Debug, Default)]
struct CatalogState {
    cache: CatalogCache,
    session: EditSession,
}

/// The main catalog client.
///
/// Owns the local mirror, the edit session, and the gateway to the
/// remote store.
pub struct CatalogClient<S: RemoteStore> {
    store: S,
    state: Arc<Mutex<CatalogState>>,
}

impl<S: RemoteStore> CatalogClient<S> {
    /// Create a client over the given store. The mirror starts empty;
    /// call [`refresh`](Self::refresh) to load the catalog.
    pub fn new(store: S) -> Self {
        Self {
            store,
            state: Arc::new(Mutex::new(CatalogState::default())),
        }
    }

    /// Reload the whole mirror from the remote store.
    ///
    /// Returns the number of records fetched.
    pub async fn refresh(&self) -> Result<usize, ClientError> {
        let mut state = self.state.lock().await;
        let books = self.store.list().await?;
        let count = books.len();
        state.cache.replace_all(books);
        tracing::debug!(count, "catalog reloaded");
        Ok(count)
    }

    /// Snapshot of the cached catalog, in mirror order.
    pub async fn books(&self) -> Vec<StoredBook> {
        let state = self.state.lock().await;
        state.cache.books().to_vec()
    }

    /// The current add-vs-edit session state.
    pub async fn session(&self) -> EditSession {
        let state = self.state.lock().await;
        state.session
    }

    /// Label for the UI's submit control ("Add Book" / "Update Book").
    pub async fn action_label(&self) -> &'static str {
        self.session().await.action_label()
    }

    /// Start editing the record at `index`.
    ///
    /// Returns a clone of the record so the caller can populate its form.
    /// Touches neither the cache nor the remote store.
    pub async fn begin_edit(&self, index: usize) -> Result<StoredBook, ClientError> {
        let mut state = self.state.lock().await;
        let book = state
            .cache
            .get(index)
            .cloned()
            .ok_or(ClientError::NotFound(index))?;
        state.session = state.session.begin_edit(index);
        tracing::debug!(index, id = %book.id, "edit session opened");
        Ok(book)
    }

    /// Submit the form: create in Idle, update in Editing.
    ///
    /// Validation runs first; a rejected draft makes no network call and
    /// leaves the session as it was. A store failure also leaves session
    /// and cache untouched, so the operator can retry. On success the
    /// session is Idle and the returned record is what the store holds.
    pub async fn submit(&self, draft: &BookDraft) -> Result<StoredBook, ClientError> {
        let record = draft.validate()?;

        let mut state = self.state.lock().await;
        match state.session.editing_index() {
            Some(index) => {
                let current = state
                    .cache
                    .get(index)
                    .cloned()
                    .ok_or(ClientError::NotFound(index))?;
                let updated = self.store.update(&current.id, &record).await?;
                state.cache.replace(index, updated.clone());
                state.session = state.session.complete();
                tracing::debug!(id = %updated.id, "record updated");
                Ok(updated)
            }
            None => {
                let created = self.store.create(&record).await?;
                state.cache.push(created.clone());
                tracing::debug!(id = %created.id, "record created");
                Ok(created)
            }
        }
    }

    /// Delete the record at `index`, asking `confirm` first.
    ///
    /// A declined confirmation returns `Ok(None)` without any store call.
    /// On store failure the record stays in the mirror. A session editing
    /// this index is deliberately left alone - it then points at a stale
    /// position, and the caller decides how to recover.
    pub async fn delete<F>(&self, index: usize, confirm: F) -> Result<Option<StoredBook>, ClientError>
    where
        F: FnOnce(&StoredBook) -> bool + Send,
    {
        let mut state = self.state.lock().await;
        let book = state
            .cache
            .get(index)
            .cloned()
            .ok_or(ClientError::NotFound(index))?;

        if !confirm(&book) {
            tracing::debug!(index, "delete declined");
            return Ok(None);
        }

        self.store.delete(&book.id).await?;
        state.cache.remove(index);
        tracing::debug!(index, id = %book.id, "record deleted");
        Ok(Some(book))
    }

    /// Case-insensitive substring search over title and author.
    ///
    /// Read-only: never mutates the mirror or its order. The empty query
    /// returns the full catalog.
    pub async fn search(&self, query_text: &str) -> Vec<StoredBook> {
        let state = self.state.lock().await;
        query::search(state.cache.books(), query_text)
            .into_iter()
            .cloned()
            .collect()
    }

    /// Sort the mirror in place by title, A before Z.
    pub async fn sort_ascending(&self) -> Vec<StoredBook> {
        self.sort(SortOrder::Ascending).await
    }

    /// Sort the mirror in place by title, Z before A.
    pub async fn sort_descending(&self) -> Vec<StoredBook> {
        self.sort(SortOrder::Descending).await
    }

    async fn sort(&self, order: SortOrder) -> Vec<StoredBook> {
        let mut state = self.state.lock().await;
        state.cache.sort_by_title(order);
        state.cache.books().to_vec()
    }

    /// Get a reference to the underlying store (for testing).
    pub fn store(&self) -> &S {
        &self.store
    }
}
