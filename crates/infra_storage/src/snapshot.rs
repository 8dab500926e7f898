//! JSON snapshot of the claim collection
//!
//! The collection is stored as
//!
//! ```text
//! { "state": { "claims": [ ... ] }, "version": 0 }
//! ```
//!
//! under a single key. Only claims are kept; filters and sorting are
//! session state.

use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

use core_kernel::PortError;
use domain_claims::{Claim, ClaimsSnapshotPort};

use crate::error::StorageError;
use crate::kv::KeyValueStore;

/// Key the claims desk stores its collection under
pub const DEFAULT_STORAGE_KEY: &str = "zurich-claims-storage";

/// Envelope version written by this crate
pub const SNAPSHOT_VERSION: u32 = 0;

/// Stored envelope around the claim collection
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedClaims {
    pub state: PersistedState,
    pub version: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PersistedState {
    pub claims: Vec<Claim>,
}

#[derive(Serialize)]
struct EnvelopeRef<'a> {
    state: StateRef<'a>,
    version: u32,
}

#[derive(Serialize)]
struct StateRef<'a> {
    claims: &'a [Claim],
}

impl PersistedClaims {
    /// Encodes `claims` in stored form
    pub fn encode(claims: &[Claim]) -> Result<String, StorageError> {
        let envelope = EnvelopeRef {
            state: StateRef { claims },
            version: SNAPSHOT_VERSION,
        };
        Ok(serde_json::to_string(&envelope)?)
    }

    /// Decodes a stored envelope, rejecting other versions
    pub fn decode(text: &str) -> Result<Vec<Claim>, StorageError> {
        let envelope: PersistedClaims = serde_json::from_str(text)?;
        if envelope.version != SNAPSHOT_VERSION {
            return Err(StorageError::UnsupportedVersion {
                found: envelope.version,
                expected: SNAPSHOT_VERSION,
            });
        }
        Ok(envelope.state.claims)
    }
}

/// Saves the claim collection as JSON in a key-value store
#[derive(Debug)]
pub struct JsonSnapshotStore<S> {
    store: S,
    key: String,
}

impl<S: KeyValueStore> JsonSnapshotStore<S> {
    pub fn new(store: S, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// The underlying key-value store
    pub fn inner(&self) -> &S {
        &self.store
    }

    #[instrument(skip(self), fields(key = %self.key))]
    pub fn read(&self) -> Result<Option<Vec<Claim>>, StorageError> {
        match self.store.get(&self.key)? {
            Some(text) => {
                let claims = PersistedClaims::decode(&text)?;
                info!(count = claims.len(), "loaded claims snapshot");
                Ok(Some(claims))
            }
            None => Ok(None),
        }
    }

    #[instrument(skip(self, claims), fields(key = %self.key, count = claims.len()))]
    pub fn write(&self, claims: &[Claim]) -> Result<(), StorageError> {
        let text = PersistedClaims::encode(claims)?;
        self.store.set(&self.key, &text)?;
        info!("saved claims snapshot");
        Ok(())
    }

    /// Forgets the saved collection
    pub fn clear(&self) -> Result<(), StorageError> {
        self.store.remove(&self.key)
    }
}

impl<S: KeyValueStore> ClaimsSnapshotPort for JsonSnapshotStore<S> {
    fn load(&self) -> Result<Option<Vec<Claim>>, PortError> {
        Ok(self.read()?)
    }

    fn save(&self, claims: &[Claim]) -> Result<(), PortError> {
        Ok(self.write(claims)?)
    }
}
