//! Mock claim generation for demo data
//!
//! The generator draws from any [`rand::Rng`], so a seeded generator gives
//! the same collection every time. Only the shape of the data matters; the
//! distribution is not a contract.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::info;

use core_kernel::{ClaimId, Currency, Money};
use crate::claim::{
    Claim, ClaimPriority, ClaimStatus, ClaimType, Location, TimelineEntry, CLAIM_SUBMITTED_EVENT,
};

/// Size of the collection a fresh installation starts with
pub const DEFAULT_SEED_COUNT: usize = 50;

const ADJUSTERS: [&str; 5] = [
    "Sarah Johnson",
    "Michael Chen",
    "Emily Davis",
    "James Wilson",
    "Maria Garcia",
];
const CITIES: [&str; 5] = ["Toronto", "Vancouver", "Montreal", "Calgary", "Ottawa"];
const PROVINCES: [&str; 5] = ["ON", "BC", "QC", "AB", "ON"];

/// Produces plausible claims filed during one calendar year
#[derive(Debug)]
pub struct MockClaimGenerator<R> {
    rng: R,
    year: i32,
    currency: Currency,
}

impl MockClaimGenerator<StdRng> {
    /// A deterministic generator
    pub fn seeded(seed: u64, year: i32) -> Self {
        Self::new(StdRng::seed_from_u64(seed), year)
    }

    /// A generator seeded from the operating system
    pub fn from_entropy(year: i32) -> Self {
        Self::new(StdRng::from_entropy(), year)
    }
}

impl<R: Rng> MockClaimGenerator<R> {
    pub fn new(rng: R, year: i32) -> Self {
        Self {
            rng,
            year,
            currency: Currency::default(),
        }
    }

    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    /// Generates `count` claims numbered from 1, in ascending order
    pub fn generate(&mut self, count: usize) -> Vec<Claim> {
        let claims: Vec<Claim> = (1..=count as u32).map(|n| self.claim(n)).collect();
        info!(count = claims.len(), year = self.year, "generated mock claims");
        claims
    }

    fn pick<'a>(&mut self, values: &[&'a str]) -> &'a str {
        values[self.rng.gen_range(0..values.len())]
    }

    fn pick_of<T: Copy>(&mut self, values: &[T]) -> T {
        values[self.rng.gen_range(0..values.len())]
    }

    fn letter(&mut self) -> char {
        char::from(b'A' + self.rng.gen_range(0..26u8))
    }

    fn created_at(&mut self) -> DateTime<Utc> {
        let month = self.rng.gen_range(1..=12);
        let day = self.rng.gen_range(1..=28);
        NaiveDate::from_ymd_opt(self.year, month, day)
            .and_then(|date| date.and_hms_opt(0, 0, 0))
            .map(|naive| naive.and_utc())
            .unwrap_or(DateTime::<Utc>::UNIX_EPOCH)
    }

    fn claim(&mut self, n: u32) -> Claim {
        let id = ClaimId::sequential(self.year, n);
        let created_at = self.created_at();
        let incident_date = created_at - Duration::milliseconds(self.rng.gen_range(0..7 * 86_400_000));
        let assigned_at = created_at + Duration::days(1);
        let reviewed_at = created_at + Duration::days(2);
        let updated_at = reviewed_at + Duration::milliseconds(self.rng.gen_range(0..12 * 86_400_000));

        let adjuster = self.pick(&ADJUSTERS).to_string();
        let reviewer = self.pick(&ADJUSTERS).to_string();
        let city_index = self.rng.gen_range(0..CITIES.len());
        let province_index = self.rng.gen_range(0..PROVINCES.len());

        let postal_code = format!(
            "{}{}{} {}{}{}",
            self.letter(),
            self.rng.gen_range(0..9),
            self.letter(),
            self.rng.gen_range(0..9),
            self.letter(),
            self.rng.gen_range(0..9),
        );

        Claim {
            claim_number: id.to_string(),
            id,
            policy_number: format!("POL-{}", self.rng.gen_range(100_000..1_000_000)),
            customer_name: format!("Customer {}", n),
            customer_email: format!("customer{}@email.com", n),
            customer_phone: format!(
                "({}) {}-{}",
                self.rng.gen_range(100..1000),
                self.rng.gen_range(100..1000),
                self.rng.gen_range(1000..10000)
            ),
            claim_type: self.pick_of(ClaimType::ALL),
            status: self.pick_of(ClaimStatus::ALL),
            priority: self.pick_of(ClaimPriority::ALL),
            amount: Money::from_major(self.rng.gen_range(1_000..51_000), self.currency),
            estimated_amount: Money::from_major(self.rng.gen_range(1_000..61_000), self.currency),
            adjuster,
            description: format!(
                "Claim description for claim {}. This is a detailed description of the incident and damage assessment.",
                n
            ),
            incident_date,
            created_at,
            updated_at,
            documents: self.rng.gen_range(1..=5),
            notes: self.rng.gen_range(0..10),
            location: Location {
                address: format!("{} Main Street", self.rng.gen_range(1..10_000)),
                city: CITIES[city_index].to_string(),
                province: PROVINCES[province_index].to_string(),
                postal_code,
            },
            timeline: vec![
                TimelineEntry::system(created_at, CLAIM_SUBMITTED_EVENT),
                TimelineEntry::system(assigned_at, "Assigned to Adjuster"),
                TimelineEntry::by(reviewed_at, "Initial Review Completed", reviewer),
            ],
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeded_generation_is_deterministic() {
        let a = MockClaimGenerator::seeded(7, 2025).generate(10);
        let b = MockClaimGenerator::seeded(7, 2025).generate(10);
        assert_eq!(a, b);

        let c = MockClaimGenerator::seeded(8, 2025).generate(10);
        assert_ne!(a, c);
    }

    #[test]
    fn test_generated_claims_are_well_formed() {
        let claims = MockClaimGenerator::seeded(42, 2025).generate(DEFAULT_SEED_COUNT);
        assert_eq!(claims.len(), DEFAULT_SEED_COUNT);
        assert_eq!(claims[0].id.as_str(), "CLM-2025-00001");
        assert_eq!(claims[49].id.as_str(), "CLM-2025-00050");

        for claim in &claims {
            assert!(claim.has_valid_chronology(), "{} out of order", claim.id);
            assert_eq!(claim.timeline.len(), 3);
            assert_eq!(claim.timeline[0].event, CLAIM_SUBMITTED_EVENT);
            assert!((1..=5).contains(&claim.documents));
            assert!(claim.notes < 10);
            assert!(!claim.amount.is_negative());
            assert_eq!(claim.location.postal_code.len(), 7);
        }
    }
}
