//! End-to-end tests for the claims desk
//!
//! These tests drive the full stack: configuration, file storage,
//! bootstrap, the persisting service, and a restart.

use std::collections::HashMap;

use chrono::Duration;
use rust_decimal_macros::dec;
use tempfile::TempDir;

use claims_app::{bootstrap, open_snapshots, AppConfig, ClaimsService};
use core_kernel::Clock;
use domain_claims::{ClaimStatus, ClaimType, FilterField, FilterValue, SortKey, SortOrder};
use test_utils::{NewClaimBuilder, TemporalFixtures};

fn empty_desk_config(dir: &TempDir) -> AppConfig {
    AppConfig::from_vars(HashMap::from([
        ("CLAIMS_STORAGE_DIR".to_string(), dir.path().display().to_string()),
        ("CLAIMS_SEED_COUNT".to_string(), "0".to_string()),
        ("CLAIMS_TIMEZONE".to_string(), "America/Toronto".to_string()),
    ]))
    .unwrap()
}

#[test]
fn test_two_claim_scenario_survives_restart() {
    let dir = TempDir::new().unwrap();
    let config = empty_desk_config(&dir);
    let clock = TemporalFixtures::fixed_clock();

    let snapshots = open_snapshots(&config).unwrap();
    let store = bootstrap(&config, &snapshots, clock.clone()).unwrap();
    assert!(store.is_empty());
    let mut service = ClaimsService::new(store, snapshots);

    let a = service
        .add_claim(NewClaimBuilder::new().with_amount(dec!(1000)).with_type(ClaimType::Auto).build())
        .unwrap()
        .id;
    clock.advance(Duration::seconds(1));
    let b = service
        .add_claim(NewClaimBuilder::new().with_amount(dec!(2000)).with_type(ClaimType::Property).build())
        .unwrap()
        .id;

    service.set_filter(FilterField::Type(FilterValue::Only(ClaimType::Auto)));
    let autos: Vec<_> = service.filtered_claims().into_iter().map(|c| c.id).collect();
    assert_eq!(autos, vec![a.clone()]);

    service.reset_filters();
    service.set_sorting(SortKey::Amount, SortOrder::Descending);
    let by_amount: Vec<_> = service.filtered_claims().into_iter().map(|c| c.id).collect();
    assert_eq!(by_amount, vec![b.clone(), a.clone()]);

    service.delete_claim(&a).unwrap();
    assert!(service.get_claim(&a).is_none());
    assert_eq!(service.statistics().total, 1);

    clock.advance(Duration::hours(2));
    service.change_status(&b, ClaimStatus::UnderReview, "Sarah Johnson").unwrap();
    let before_restart = service.store().claims().to_vec();

    // Restart: list settings reset, claims come back from disk
    let restarted = bootstrap(&config, &open_snapshots(&config).unwrap(), clock.clone()).unwrap();
    assert_eq!(restarted.claims(), before_restart.as_slice());
    assert_eq!(restarted.sorting().key, SortKey::CreatedAt);
    assert!(restarted.filters().is_unfiltered());

    let restored = restarted.get_claim(&b).unwrap();
    assert_eq!(restored.status, ClaimStatus::UnderReview);
    assert_eq!(restored.updated_at, clock.now());
}

#[test]
fn test_export_dates_follow_reporting_timezone() {
    let dir = TempDir::new().unwrap();
    let config = empty_desk_config(&dir);
    // 02:00 UTC on June 15 is still June 14 in Toronto
    let clock = TemporalFixtures::clock_at(TemporalFixtures::reference_now() - Duration::hours(10));

    let snapshots = open_snapshots(&config).unwrap();
    let store = bootstrap(&config, &snapshots, clock.clone()).unwrap();
    let mut service = ClaimsService::new(store, snapshots);
    service.add_claim(NewClaimBuilder::new().build()).unwrap();

    let today = service.store().timezone().local_date(clock.now());
    let export = service.export(today).unwrap();
    assert_eq!(export.file_name, "claims-export-2025-06-14.csv");
    assert!(export.contents.lines().nth(1).unwrap().ends_with(",2025-06-14"));
}
