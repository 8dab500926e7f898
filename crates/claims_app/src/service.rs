//! The claims service: the store plus a save after every change
//!
//! Mutations go to the in-memory store first and are then saved through
//! the snapshot port. A failed save is reported, but the in-memory change
//! stays; the next successful save writes it out. Operations on unknown
//! identifiers change nothing and save nothing.

use tracing::debug;

use chrono::NaiveDate;
use core_kernel::ClaimId;
use domain_claims::{
    export_csv, export_file_name, Claim, ClaimStatistics, ClaimStatus, ClaimUpdate,
    ClaimsSnapshotPort, ClaimsStore, FilterField, NewClaim, SortKey, SortOrder,
};

use crate::error::AppError;

/// A CSV export ready to be written out
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvExport {
    pub file_name: String,
    pub contents: String,
}

/// Claims store whose changes are saved as they happen
#[derive(Debug)]
pub struct ClaimsService<P> {
    store: ClaimsStore,
    snapshots: P,
}

impl<P: ClaimsSnapshotPort> ClaimsService<P> {
    pub fn new(store: ClaimsStore, snapshots: P) -> Self {
        Self { store, snapshots }
    }

    pub fn store(&self) -> &ClaimsStore {
        &self.store
    }

    pub fn snapshots(&self) -> &P {
        &self.snapshots
    }

    /// Gives back the store, dropping the port
    pub fn into_store(self) -> ClaimsStore {
        self.store
    }

    /// Saves the whole collection
    pub fn persist(&self) -> Result<(), AppError> {
        self.snapshots.save(self.store.claims())?;
        debug!(count = self.store.len(), "claims persisted");
        Ok(())
    }

    fn persisted(&self, changed: Option<Claim>) -> Result<Option<Claim>, AppError> {
        if changed.is_some() {
            self.persist()?;
        }
        Ok(changed)
    }

    pub fn add_claim(&mut self, draft: NewClaim) -> Result<Claim, AppError> {
        let claim = self.store.add_claim(draft).clone();
        self.persist()?;
        Ok(claim)
    }

    pub fn update_claim(&mut self, id: &ClaimId, update: ClaimUpdate) -> Result<Option<Claim>, AppError> {
        let changed = self.store.update_claim(id, update).cloned();
        self.persisted(changed)
    }

    pub fn delete_claim(&mut self, id: &ClaimId) -> Result<Option<Claim>, AppError> {
        let removed = self.store.delete_claim(id);
        self.persisted(removed)
    }

    pub fn change_status(&mut self, id: &ClaimId, status: ClaimStatus, actor: &str) -> Result<Option<Claim>, AppError> {
        let changed = self.store.change_status(id, status, actor).cloned();
        self.persisted(changed)
    }

    pub fn add_note(&mut self, id: &ClaimId, text: &str, actor: &str) -> Result<Option<Claim>, AppError> {
        let changed = self.store.add_note(id, text, actor).cloned();
        self.persisted(changed)
    }

    pub fn assign_adjuster(&mut self, id: &ClaimId, adjuster: &str, actor: &str) -> Result<Option<Claim>, AppError> {
        let changed = self.store.assign_adjuster(id, adjuster, actor).cloned();
        self.persisted(changed)
    }

    pub fn get_claim(&self, id: &ClaimId) -> Option<&Claim> {
        self.store.get_claim(id)
    }

    pub fn filtered_claims(&self) -> Vec<Claim> {
        self.store.filtered_claims()
    }

    pub fn statistics(&self) -> ClaimStatistics {
        self.store.statistics()
    }

    pub fn set_filter(&mut self, field: FilterField) {
        self.store.set_filter(field);
    }

    pub fn reset_filters(&mut self) {
        self.store.reset_filters();
    }

    pub fn set_sorting(&mut self, key: SortKey, order: SortOrder) {
        self.store.set_sorting(key, order);
    }

    /// Exports the filtered list in its current order
    pub fn export(&self, today: NaiveDate) -> Result<CsvExport, AppError> {
        let contents = export_csv(&self.store.filtered_claims(), &self.store.timezone())?;
        Ok(CsvExport {
            file_name: export_file_name(today),
            contents,
        })
    }
}
