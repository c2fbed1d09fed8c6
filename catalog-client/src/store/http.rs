//! HTTP implementation of the remote store contract.
//!
//! Speaks the catalog store's JSON API:
//!
//! - `GET /books` - full catalog
//! - `POST /books` - create, store assigns the identifier
//! - `PUT /books/{id}` - update
//! - `DELETE /books/{id}` - remove
//!
//! Any non-2xx response is a [`StoreError::Status`]. No client-side
//! timeout is enforced; a call resolves or hangs per the transport's own
//! behavior.

use super::{RemoteStore, StoreError};
use async_trait::async_trait;
use catalog_types::{BookId, BookRecord, StoredBook};

/// HTTP store backed by `reqwest`.
#[derive(Debug, Clone)]
pub struct HttpStore {
    base_url: String,
    http: reqwest::Client,
}

impl HttpStore {
    /// Create a store for the given base URL, e.g. `http://localhost:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self {
            base_url,
            http: reqwest::Client::new(),
        }
    }

    /// The base URL this store talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn books_url(&self) -> String {
        format!("{}/books", self.base_url)
    }

    fn book_url(&self, id: &BookId) -> String {
        format!("{}/books/{}", self.base_url, id)
    }
}

/// Reject non-success responses.
fn check_status(response: &reqwest::Response) -> Result<(), StoreError> {
    let status = response.status();
    if status.is_success() {
        Ok(())
    } else {
        Err(StoreError::Status(status.as_u16()))
    }
}

#[async_trait]
impl RemoteStore for HttpStore {
    async fn list(&self) -> Result<Vec<StoredBook>, StoreError> {
        let response = self
            .http
            .get(self.books_url())
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        check_status(&response)?;
        response
            .json::<Vec<StoredBook>>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn create(&self, record: &BookRecord) -> Result<StoredBook, StoreError> {
        let response = self
            .http
            .post(self.books_url())
            .json(record)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        check_status(&response)?;
        response
            .json::<StoredBook>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn update(&self, id: &BookId, record: &BookRecord) -> Result<StoredBook, StoreError> {
        let response = self
            .http
            .put(self.book_url(id))
            .json(record)
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        check_status(&response)?;
        response
            .json::<StoredBook>()
            .await
            .map_err(|e| StoreError::Decode(e.to_string()))
    }

    async fn delete(&self, id: &BookId) -> Result<(), StoreError> {
        let response = self
            .http
            .delete(self.book_url(id))
            .send()
            .await
            .map_err(|e| StoreError::Request(e.to_string()))?;
        check_status(&response)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_normalized() {
        let store = HttpStore::new("http://localhost:3000/");
        assert_eq!(store.base_url(), "http://localhost:3000");
        assert_eq!(store.books_url(), "http://localhost:3000/books");
    }

    #[test]
    fn book_url_embeds_the_id() {
        let store = HttpStore::new("http://localhost:3000");
        assert_eq!(
            store.book_url(&BookId::new("7")),
            "http://localhost:3000/books/7"
        );
    }
}
