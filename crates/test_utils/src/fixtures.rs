//! Pre-built Test Fixtures
//!
//! Provides ready-to-use test data for the claims desk. These fixtures are
//! designed to be consistent and predictable for unit tests.

use std::sync::Arc;

use chrono::{DateTime, Duration, TimeZone, Utc};
use core_kernel::{Currency, FixedClock, Money, Timezone};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_claims::claim::Location;

/// Fixture for Money test data
pub struct MoneyFixtures;

impl MoneyFixtures {
    /// A CAD amount
    pub fn cad(amount: Decimal) -> Money {
        Money::new(amount, Currency::CAD)
    }

    /// A typical claimed amount
    pub fn cad_1500() -> Money {
        Money::new(dec!(1500.00), Currency::CAD)
    }
}

/// Fixture for temporal test data
pub struct TemporalFixtures;

impl TemporalFixtures {
    /// The instant every fixed clock starts at (June 15, 2025 12:00 UTC)
    pub fn reference_now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 6, 15, 12, 0, 0).unwrap()
    }

    /// A few days before the reference instant
    pub fn incident_date() -> DateTime<Utc> {
        Self::reference_now() - Duration::days(3)
    }

    /// A fixed clock at the reference instant
    pub fn fixed_clock() -> Arc<FixedClock> {
        Arc::new(FixedClock::new(Self::reference_now()))
    }

    /// A fixed clock at the given instant
    pub fn clock_at(instant: DateTime<Utc>) -> Arc<FixedClock> {
        Arc::new(FixedClock::new(instant))
    }

    /// The reporting timezone used in tests that care about local dates
    pub fn toronto() -> Timezone {
        "America/Toronto".parse().unwrap()
    }
}

/// Fixture for claim text fields
pub struct StringFixtures;

impl StringFixtures {
    pub fn policy_number() -> &'static str {
        "POL-123456"
    }

    pub fn customer_name() -> &'static str {
        "Jane Doe"
    }

    pub fn customer_email() -> &'static str {
        "jane.doe@example.com"
    }

    pub fn customer_phone() -> &'static str {
        "(416) 555-0199"
    }

    pub fn location() -> Location {
        Location {
            address: "100 King Street West".to_string(),
            city: "Toronto".to_string(),
            province: "ON".to_string(),
            postal_code: "M5X 1A9".to_string(),
        }
    }
}
