//! Infrastructure Storage Layer
//!
//! This crate provides durable storage for the claims desk. The claim
//! collection is saved as one JSON document under a single key, the way a
//! browser keeps application state in local storage.
//!
//! # Architecture
//!
//! Two layers:
//! - [`KeyValueStore`] adapters hold raw strings by key, either in memory or
//!   as one file per key in a directory
//! - [`JsonSnapshotStore`] encodes the claims into the persisted envelope and
//!   implements the domain's [`ClaimsSnapshotPort`](domain_claims::ClaimsSnapshotPort)
//!
//! # Example
//!
//! ```rust,ignore
//! use infra_storage::{FileKeyValueStore, JsonSnapshotStore, DEFAULT_STORAGE_KEY};
//!
//! let files = FileKeyValueStore::open(".claims-data")?;
//! let snapshots = JsonSnapshotStore::new(files, DEFAULT_STORAGE_KEY);
//! let claims = snapshots.load()?;
//! ```

pub mod error;
pub mod kv;
pub mod snapshot;

pub use error::StorageError;
pub use kv::{FileKeyValueStore, InMemoryKeyValueStore, KeyValueStore};
pub use snapshot::{JsonSnapshotStore, PersistedClaims, DEFAULT_STORAGE_KEY, SNAPSHOT_VERSION};
