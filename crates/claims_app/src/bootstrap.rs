//! Startup: restore the saved collection or seed a fresh one

use std::sync::Arc;

use anyhow::Context;
use chrono::Datelike;
use tracing::{info, warn};

use core_kernel::{Clock, PortError};
use domain_claims::{Claim, ClaimsSnapshotPort, ClaimsStore, MockClaimGenerator};
use infra_storage::{FileKeyValueStore, JsonSnapshotStore};

use crate::config::AppConfig;

/// Opens the snapshot store described by `config`
pub fn open_snapshots(config: &AppConfig) -> anyhow::Result<JsonSnapshotStore<FileKeyValueStore>> {
    let files = FileKeyValueStore::open(&config.storage_dir)
        .with_context(|| format!("opening storage directory {}", config.storage_dir.display()))?;
    Ok(JsonSnapshotStore::new(files, config.storage_key.clone()))
}

/// Builds the store for a new session
///
/// A saved collection is used as-is. When nothing is saved, or the saved
/// data cannot be read, a mock collection is generated and saved once.
/// Storage failures other than unreadable data abort startup.
pub fn bootstrap<P>(config: &AppConfig, port: &P, clock: Arc<dyn Clock>) -> anyhow::Result<ClaimsStore>
where
    P: ClaimsSnapshotPort + ?Sized,
{
    let timezone = config.timezone()?;
    let currency = config.currency()?;

    let claims = match port.load() {
        Ok(Some(claims)) => {
            info!(count = claims.len(), "restored saved claims");
            claims
        }
        Ok(None) => seed(config, port, timezone.to_local(clock.now()).year())?,
        Err(error @ PortError::Serialization { .. }) => {
            warn!(%error, "saved claims are unreadable, starting from seed data");
            seed(config, port, timezone.to_local(clock.now()).year())?
        }
        Err(error) => return Err(error).context("loading saved claims"),
    };

    Ok(ClaimsStore::with_claims(claims, clock)
        .with_timezone(timezone)
        .with_currency(currency))
}

/// Generates the mock collection for `year` and saves it
fn seed<P>(config: &AppConfig, port: &P, year: i32) -> anyhow::Result<Vec<Claim>>
where
    P: ClaimsSnapshotPort + ?Sized,
{
    let currency = config.currency()?;
    let claims = match config.seed {
        Some(seed) => MockClaimGenerator::seeded(seed, year),
        None => MockClaimGenerator::from_entropy(year),
    }
    .with_currency(currency)
    .generate(config.seed_count);

    port.save(&claims).context("saving seed claims")?;
    info!(count = claims.len(), seed = ?config.seed, "seeded claims");
    Ok(claims)
}
