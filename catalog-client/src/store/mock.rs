//! Mock store for testing.
//!
//! Keeps the catalog in memory, assigns sequential identifiers the way a
//! dev-server backend would, logs every operation for verification, and
//! lets tests force the next call of each kind to fail.

use super::{RemoteStore, StoreError};
use async_trait::async_trait;
use catalog_types::{BookId, BookRecord, StoredBook};
use std::sync::{Arc, Mutex};

/// One logged store operation, for test verification.
#[derive(Debug, Clone, PartialEq)]
pub enum StoreOp {
    /// `list()` was called.
    List,
    /// `create()` was called with a record carrying this title.
    Create {
        /// Title of the submitted record.
        title: String,
    },
    /// `update()` was called against this identifier.
    Update {
        /// Target identifier.
        id: BookId,
    },
    /// `delete()` was called against this identifier.
    Delete {
        /// Target identifier.
        id: BookId,
    },
}

/// Mock store for testing.
///
/// Clones share state, so a test can hold one handle while the client
/// under test holds another.
#[derive(Debug, Default)]
pub struct MockStore {
    inner: Arc<Mutex<MockStoreInner>>,
}

#[derive(Debug)]
struct MockStoreInner {
    books: Vec<StoredBook>,
    next_id: u64,
    operations: Vec<StoreOp>,
    fail_next_list: Option<StoreError>,
    fail_next_create: Option<StoreError>,
    fail_next_update: Option<StoreError>,
    fail_next_delete: Option<StoreError>,
}

impl Default for MockStoreInner {
    fn default() -> Self {
        Self {
            books: Vec::new(),
            next_id: 1,
            operations: Vec::new(),
            fail_next_list: None,
            fail_next_create: None,
            fail_next_update: None,
            fail_next_delete: None,
        }
    }
}

impl MockStore {
    /// Create an empty mock store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Preload records, assigning identifiers as a real store would.
    /// Returns the stored shapes for assertions.
    pub fn seed(&self, records: impl IntoIterator<Item = BookRecord>) -> Vec<StoredBook> {
        let mut inner = self.inner.lock().unwrap();
        let mut stored = Vec::new();
        for record in records {
            let id = BookId::new(inner.next_id.to_string());
            inner.next_id += 1;
            let book = StoredBook::new(id, record);
            inner.books.push(book.clone());
            stored.push(book);
        }
        stored
    }

    /// Snapshot of what the store currently holds.
    pub fn books(&self) -> Vec<StoredBook> {
        self.inner.lock().unwrap().books.clone()
    }

    /// All operations that reached the store, in call order.
    pub fn operations(&self) -> Vec<StoreOp> {
        self.inner.lock().unwrap().operations.clone()
    }

    /// Cause the next `list()` to fail with the given error.
    pub fn fail_next_list(&self, error: StoreError) {
        self.inner.lock().unwrap().fail_next_list = Some(error);
    }

    /// Cause the next `create()` to fail with the given error.
    pub fn fail_next_create(&self, error: StoreError) {
        self.inner.lock().unwrap().fail_next_create = Some(error);
    }

    /// Cause the next `update()` to fail with the given error.
    pub fn fail_next_update(&self, error: StoreError) {
        self.inner.lock().unwrap().fail_next_update = Some(error);
    }

    /// Cause the next `delete()` to fail with the given error.
    pub fn fail_next_delete(&self, error: StoreError) {
        self.inner.lock().unwrap().fail_next_delete = Some(error);
    }

    /// Clear all state (records, log, forced failures).
    pub fn reset(&self) {
        let mut inner = self.inner.lock().unwrap();
        *inner = MockStoreInner::default();
    }
}

impl Clone for MockStore {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
        }
    }
}

#[async_trait]
impl RemoteStore for MockStore {
    async fn list(&self) -> Result<Vec<StoredBook>, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(StoreOp::List);

        if let Some(error) = inner.fail_next_list.take() {
            return Err(error);
        }

        Ok(inner.books.clone())
    }

    async fn create(&self, record: &BookRecord) -> Result<StoredBook, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(StoreOp::Create {
            title: record.title.clone(),
        });

        if let Some(error) = inner.fail_next_create.take() {
            return Err(error);
        }

        let id = BookId::new(inner.next_id.to_string());
        inner.next_id += 1;
        let book = StoredBook::new(id, record.clone());
        inner.books.push(book.clone());
        Ok(book)
    }

    async fn update(&self, id: &BookId, record: &BookRecord) -> Result<StoredBook, StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(StoreOp::Update { id: id.clone() });

        if let Some(error) = inner.fail_next_update.take() {
            return Err(error);
        }

        let slot = inner
            .books
            .iter_mut()
            .find(|book| &book.id == id)
            .ok_or(StoreError::Status(404))?;
        slot.record = record.clone();
        Ok(slot.clone())
    }

    async fn delete(&self, id: &BookId) -> Result<(), StoreError> {
        let mut inner = self.inner.lock().unwrap();
        inner.operations.push(StoreOp::Delete { id: id.clone() });

        if let Some(error) = inner.fail_next_delete.take() {
            return Err(error);
        }

        let position = inner
            .books
            .iter()
            .position(|book| &book.id == id)
            .ok_or(StoreError::Status(404))?;
        inner.books.remove(position);
        Ok(())
    }
}
