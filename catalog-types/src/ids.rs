//! Identifier types for the Shelfmark catalog.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// An opaque identifier for a book record.
///
/// Assigned by the remote store when a record is first created; the client
/// never mints one. Once assigned it never changes. Stored as text because
/// the store's choice of representation is its own business - json-server
/// style backends hand out numbers, others hand out strings, and this type
/// accepts both on the wire.
#[derive(Clone, PartialEq, Eq, Hash, Serialize)]
pub struct BookId(String);

impl BookId {
    /// Create a BookId from a value the remote store assigned.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The identifier as text, for building request paths.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl fmt::Debug for BookId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "BookId({})", self.0)
    }
}

impl<'de> Deserialize<'de> for BookId {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        // Accept both `"id": "7"` and `"id": 7` from the wire.
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum Raw {
            Text(String),
            Number(u64),
        }

        Ok(match Raw::deserialize(deserializer)? {
            Raw::Text(s) => BookId(s),
            Raw::Number(n) => BookId(n.to_string()),
        })
    }
}
