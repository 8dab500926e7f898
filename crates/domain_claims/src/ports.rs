//! Claims Domain Ports
//!
//! The store itself is pure in-memory state. Durability is delegated to a
//! snapshot port that saves and restores the whole claim collection, so the
//! application can swap a file-backed adapter for an in-memory one in tests.
//!
//! # Usage
//!
//! ```rust,ignore
//! use domain_claims::ports::ClaimsSnapshotPort;
//! use std::sync::Arc;
//!
//! pub struct ClaimsService {
//!     snapshots: Arc<dyn ClaimsSnapshotPort>,
//! }
//!
//! impl ClaimsService {
//!     pub fn persist(&self, store: &ClaimsStore) -> Result<(), PortError> {
//!         self.snapshots.save(store.claims())
//!     }
//! }
//! ```

use std::sync::Arc;

use core_kernel::PortError;

use crate::claim::Claim;

/// Saves and restores the full claim collection
///
/// Only the claims are persisted. Filters and sorting are session state and
/// reset to their defaults on every start.
pub trait ClaimsSnapshotPort: Send + Sync {
    /// Returns the saved claims, or `None` when nothing has been saved yet
    fn load(&self) -> Result<Option<Vec<Claim>>, PortError>;

    /// Replaces the saved collection, preserving order
    fn save(&self, claims: &[Claim]) -> Result<(), PortError>;
}

impl<T: ClaimsSnapshotPort + ?Sized> ClaimsSnapshotPort for Arc<T> {
    fn load(&self) -> Result<Option<Vec<Claim>>, PortError> {
        (**self).load()
    }

    fn save(&self, claims: &[Claim]) -> Result<(), PortError> {
        (**self).save(claims)
    }
}
