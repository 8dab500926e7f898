//! Integration tests for claims_app

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::NaiveDate;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use claims_app::{bootstrap, open_snapshots, AppConfig, AppError, ClaimsService};
use core_kernel::{ClaimId, PortError};
use domain_claims::{
    Claim, ClaimStatus, ClaimType, ClaimUpdate, ClaimsSnapshotPort, FilterField, FilterValue,
    SortKey, SortOrder,
};
use infra_storage::{InMemoryKeyValueStore, JsonSnapshotStore, KeyValueStore};
use test_utils::{ClaimBuilder, NewClaimBuilder, TemporalFixtures};

/// Port that remembers every save
#[derive(Default)]
struct RecordingPort {
    stored: Mutex<Option<Vec<Claim>>>,
    saves: Mutex<usize>,
    fail_loads: bool,
}

impl RecordingPort {
    fn with(claims: Vec<Claim>) -> Self {
        Self {
            stored: Mutex::new(Some(claims)),
            ..Default::default()
        }
    }

    fn saves(&self) -> usize {
        *self.saves.lock().unwrap()
    }

    fn stored(&self) -> Option<Vec<Claim>> {
        self.stored.lock().unwrap().clone()
    }
}

impl ClaimsSnapshotPort for RecordingPort {
    fn load(&self) -> Result<Option<Vec<Claim>>, PortError> {
        if self.fail_loads {
            return Err(PortError::internal("disk on fire"));
        }
        Ok(self.stored())
    }

    fn save(&self, claims: &[Claim]) -> Result<(), PortError> {
        *self.stored.lock().unwrap() = Some(claims.to_vec());
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}

fn config() -> AppConfig {
    AppConfig {
        seed: Some(7),
        seed_count: 10,
        ..AppConfig::default()
    }
}

fn service_with(claims: Vec<Claim>) -> ClaimsService<RecordingPort> {
    let port = RecordingPort::with(claims);
    let store = bootstrap(&config(), &port, TemporalFixtures::fixed_clock()).unwrap();
    ClaimsService::new(store, port)
}

// ============================================================================
// Bootstrap Tests
// ============================================================================

mod bootstrap_tests {
    use super::*;

    #[test]
    fn test_empty_storage_is_seeded_and_saved_once() {
        let port = RecordingPort::default();
        let store = bootstrap(&config(), &port, TemporalFixtures::fixed_clock()).unwrap();

        assert_eq!(store.len(), 10);
        assert_eq!(port.saves(), 1);
        assert_eq!(port.stored().unwrap(), store.claims());
        assert!(store.claims().iter().all(|c| c.id.as_str().starts_with("CLM-2025-")));
    }

    #[test]
    fn test_fixed_seed_is_reproducible() {
        let a = bootstrap(&config(), &RecordingPort::default(), TemporalFixtures::fixed_clock()).unwrap();
        let b = bootstrap(&config(), &RecordingPort::default(), TemporalFixtures::fixed_clock()).unwrap();
        assert_eq!(a.claims(), b.claims());
    }

    #[test]
    fn test_saved_claims_are_restored_without_saving() {
        let saved = vec![ClaimBuilder::new(2024, 3).build()];
        let port = RecordingPort::with(saved.clone());
        let store = bootstrap(&config(), &port, TemporalFixtures::fixed_clock()).unwrap();

        assert_eq!(store.claims(), saved.as_slice());
        assert_eq!(port.saves(), 0);
    }

    #[test]
    fn test_saved_empty_collection_stays_empty() {
        let port = RecordingPort::with(Vec::new());
        let store = bootstrap(&config(), &port, TemporalFixtures::fixed_clock()).unwrap();
        assert!(store.is_empty());
    }

    #[test]
    fn test_unreadable_snapshot_falls_back_to_seed() {
        let snapshots = JsonSnapshotStore::new(InMemoryKeyValueStore::new(), "claims");
        snapshots.inner().set("claims", "{ broken").unwrap();

        let store = bootstrap(&config(), &snapshots, TemporalFixtures::fixed_clock()).unwrap();
        assert_eq!(store.len(), 10);
        assert_eq!(snapshots.load().unwrap().unwrap(), store.claims());
    }

    #[test]
    fn test_storage_failure_aborts_startup() {
        let port = RecordingPort {
            fail_loads: true,
            ..Default::default()
        };
        assert!(bootstrap(&config(), &port, TemporalFixtures::fixed_clock()).is_err());
        assert_eq!(port.saves(), 0);
    }

    #[test]
    fn test_file_storage_from_config() {
        let temp = TempDir::new().unwrap();
        let config = AppConfig::from_vars(HashMap::from([
            ("CLAIMS_STORAGE_DIR".to_string(), temp.path().display().to_string()),
            ("CLAIMS_SEED".to_string(), "3".to_string()),
            ("CLAIMS_SEED_COUNT".to_string(), "4".to_string()),
        ]))
        .unwrap();

        let first = bootstrap(&config, &open_snapshots(&config).unwrap(), TemporalFixtures::fixed_clock()).unwrap();
        let second = bootstrap(&config, &open_snapshots(&config).unwrap(), TemporalFixtures::fixed_clock()).unwrap();
        assert_eq!(first.claims(), second.claims());
        assert!(temp.path().join("zurich-claims-storage.json").exists());
    }
}

// ============================================================================
// Service Tests
// ============================================================================

mod service_tests {
    use super::*;

    #[test]
    fn test_every_mutation_is_saved() {
        let mut service = service_with(Vec::new());
        let id = service.add_claim(NewClaimBuilder::new().build()).unwrap().id;
        assert_eq!(service.snapshots().saves(), 1);

        service.update_claim(&id, ClaimUpdate::amount(test_utils::MoneyFixtures::cad(dec!(900)))).unwrap();
        service.change_status(&id, ClaimStatus::Approved, "Emily Davis").unwrap();
        service.add_note(&id, "Approved after review", "Emily Davis").unwrap();
        service.assign_adjuster(&id, "James Wilson", "Supervisor").unwrap();
        assert_eq!(service.snapshots().saves(), 5);
        assert_eq!(service.snapshots().stored().unwrap(), service.store().claims());

        service.delete_claim(&id).unwrap();
        assert_eq!(service.snapshots().saves(), 6);
        assert!(service.snapshots().stored().unwrap().is_empty());
    }

    #[test]
    fn test_unknown_identifier_saves_nothing() {
        let mut service = service_with(vec![ClaimBuilder::new(2025, 1).build()]);
        let missing = ClaimId::sequential(2025, 42);

        assert!(service.update_claim(&missing, ClaimUpdate::status(ClaimStatus::Paid)).unwrap().is_none());
        assert!(service.delete_claim(&missing).unwrap().is_none());
        assert!(service.add_note(&missing, "hello", "x").unwrap().is_none());
        assert_eq!(service.snapshots().saves(), 0);
    }

    #[test]
    fn test_list_settings_are_not_persisted() {
        let mut service = service_with(vec![ClaimBuilder::new(2025, 1).build()]);
        service.set_filter(FilterField::Status(FilterValue::Only(ClaimStatus::Paid)));
        service.set_sorting(SortKey::Amount, SortOrder::Ascending);
        assert_eq!(service.snapshots().saves(), 0);
        assert!(service.filtered_claims().is_empty());
        assert_eq!(service.statistics().total, 1);
    }

    #[test]
    fn test_export_uses_filtered_order() {
        let mut service = service_with(vec![
            ClaimBuilder::new(2025, 1).with_amount(dec!(300)).build(),
            ClaimBuilder::new(2025, 2).with_amount(dec!(100)).with_type(ClaimType::Life).build(),
            ClaimBuilder::new(2025, 3).with_amount(dec!(200)).build(),
        ]);
        service.set_filter(FilterField::Type(FilterValue::Only(ClaimType::Auto)));
        service.set_sorting(SortKey::Amount, SortOrder::Ascending);

        let export = service.export(NaiveDate::from_ymd_opt(2025, 6, 15).unwrap()).unwrap();
        assert_eq!(export.file_name, "claims-export-2025-06-15.csv");
        let ids: Vec<&str> = export
            .contents
            .lines()
            .skip(1)
            .map(|line| line.split(',').next().unwrap())
            .collect();
        assert_eq!(ids, ["CLM-2025-00003", "CLM-2025-00001"]);
    }

    #[test]
    fn test_config_errors_surface_as_app_errors() {
        let config = AppConfig {
            currency: "XYZ".to_string(),
            ..AppConfig::default()
        };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }
}
