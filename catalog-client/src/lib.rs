//! # shelfmark-client
//!
//! Client library for the Shelfmark book catalog.
//!
//! This is the crate applications use to work with a remote catalog.
//!
//! ## Features
//!
//! - **Remote Store Abstraction**: Pluggable store layer (HTTP, mock)
//! - **Local Mirror**: An ordered in-memory cache of the remote catalog
//! - **Pure Core**: Uses shelfmark-core for side-effect-free logic
//! - **Flaky Channel**: Opt-in simulated network unreliability for demos
//!   and failure-path testing
//!
//! ## Example
//!
//! ```ignore
//! use catalog_client::{CatalogClient, HttpStore};
//! use catalog_core::BookDraft;
//!
//! let client = CatalogClient::new(HttpStore::new("http://localhost:3000"));
//! client.refresh().await?;
//!
//! let draft = BookDraft::new("Dune", "Herbert", "123", "1965-01-01", "sci-fi");
//! let stored = client.submit(&draft).await?;
//! println!("created {}", stored.id);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cache;
pub mod client;
pub mod store;

pub use cache::CatalogCache;
pub use client::{CatalogClient, ClientError};
pub use store::{
    FaultPolicy, FlakyStore, HttpStore, MockStore, RandomFaults, RemoteStore, ScriptedFaults,
    StoreError, StoreOp, DEFAULT_DELAY, DEFAULT_FAULT_PROBABILITY,
};
