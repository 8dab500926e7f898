//! Test Data Builders
//!
//! Provides builder patterns for constructing test data with sensible defaults.
//! These builders allow tests to specify only the relevant fields while using
//! defaults for everything else.

use chrono::{DateTime, Duration, Utc};
use core_kernel::{ClaimId, Money};
use fake::faker::address::en::{CityName, StateAbbr, StreetName, ZipCode};
use fake::faker::internet::en::SafeEmail;
use fake::faker::lorem::en::Sentence;
use fake::faker::name::en::Name;
use fake::faker::phone_number::en::PhoneNumber;
use fake::Fake;
use rust_decimal::Decimal;

use domain_claims::claim::{
    Claim, ClaimPriority, ClaimStatus, ClaimType, Location, TimelineEntry, CLAIM_SUBMITTED_EVENT,
};
use domain_claims::draft::NewClaim;

use crate::fixtures::{MoneyFixtures, StringFixtures, TemporalFixtures};

/// Builder for intake payloads
#[derive(Debug, Clone)]
pub struct NewClaimBuilder {
    draft: NewClaim,
}

impl Default for NewClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl NewClaimBuilder {
    /// Creates a new builder with a complete, valid payload
    pub fn new() -> Self {
        let mut draft = NewClaim::new(
            ClaimType::Auto,
            MoneyFixtures::cad_1500(),
            TemporalFixtures::incident_date(),
        );
        draft.policy_number = StringFixtures::policy_number().to_string();
        draft.customer_name = StringFixtures::customer_name().to_string();
        draft.customer_email = StringFixtures::customer_email().to_string();
        draft.customer_phone = StringFixtures::customer_phone().to_string();
        draft.description = "Rear-ended at a stop light".to_string();
        draft.location = StringFixtures::location();
        Self { draft }
    }

    /// Creates a builder filled with fake customer details
    pub fn random() -> Self {
        let mut builder = Self::new();
        let draft = &mut builder.draft;
        draft.customer_name = Name().fake();
        draft.customer_email = SafeEmail().fake();
        draft.customer_phone = PhoneNumber().fake();
        draft.description = Sentence(4..10).fake();
        draft.location = Location {
            address: StreetName().fake(),
            city: CityName().fake(),
            province: StateAbbr().fake(),
            postal_code: ZipCode().fake(),
        };
        builder
    }

    pub fn with_customer(mut self, name: impl Into<String>) -> Self {
        self.draft.customer_name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.draft.customer_email = email.into();
        self
    }

    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.draft.customer_phone = phone.into();
        self
    }

    pub fn with_policy_number(mut self, number: impl Into<String>) -> Self {
        self.draft.policy_number = number.into();
        self
    }

    pub fn with_type(mut self, claim_type: ClaimType) -> Self {
        self.draft.claim_type = claim_type;
        self
    }

    pub fn with_priority(mut self, priority: ClaimPriority) -> Self {
        self.draft.priority = priority;
        self
    }

    /// Sets the claimed amount in CAD
    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.draft.amount = MoneyFixtures::cad(amount);
        self
    }

    pub fn with_money(mut self, amount: Money) -> Self {
        self.draft.amount = amount;
        self
    }

    pub fn with_estimate(mut self, estimate: Money) -> Self {
        self.draft.estimated_amount = Some(estimate);
        self
    }

    pub fn with_adjuster(mut self, adjuster: impl Into<String>) -> Self {
        self.draft.adjuster = adjuster.into();
        self
    }

    pub fn with_incident_date(mut self, date: DateTime<Utc>) -> Self {
        self.draft.incident_date = date;
        self
    }

    pub fn with_location(mut self, location: Location) -> Self {
        self.draft.location = location;
        self
    }

    pub fn build(self) -> NewClaim {
        self.draft
    }
}

/// Builder for stored claims, bypassing the store
///
/// Useful for loading a collection with chosen timestamps.
#[derive(Debug, Clone)]
pub struct ClaimBuilder {
    claim: Claim,
}

impl ClaimBuilder {
    /// A pending auto claim filed at the reference instant
    pub fn new(year: i32, sequence: u32) -> Self {
        let id = ClaimId::sequential(year, sequence);
        let created_at = TemporalFixtures::reference_now();
        let draft = NewClaimBuilder::new().build();
        let claim = Claim {
            claim_number: id.to_string(),
            id,
            estimated_amount: draft.effective_estimate(),
            policy_number: draft.policy_number,
            customer_name: draft.customer_name,
            customer_email: draft.customer_email,
            customer_phone: draft.customer_phone,
            claim_type: draft.claim_type,
            status: ClaimStatus::Pending,
            priority: draft.priority,
            amount: draft.amount,
            adjuster: draft.adjuster,
            description: draft.description,
            incident_date: draft.incident_date,
            created_at,
            updated_at: created_at,
            documents: draft.documents,
            notes: draft.notes,
            location: draft.location,
            timeline: vec![TimelineEntry::system(created_at, CLAIM_SUBMITTED_EVENT)],
        };
        Self { claim }
    }

    pub fn with_customer(mut self, name: impl Into<String>) -> Self {
        self.claim.customer_name = name.into();
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.claim.status = status;
        self
    }

    pub fn with_type(mut self, claim_type: ClaimType) -> Self {
        self.claim.claim_type = claim_type;
        self
    }

    pub fn with_amount(mut self, amount: Decimal) -> Self {
        self.claim.amount = MoneyFixtures::cad(amount);
        self
    }

    pub fn with_adjuster(mut self, adjuster: impl Into<String>) -> Self {
        self.claim.adjuster = adjuster.into();
        self
    }

    /// Moves creation (and the first timeline entry) to `instant`
    pub fn created_at(mut self, instant: DateTime<Utc>) -> Self {
        self.claim.created_at = instant;
        self.claim.updated_at = instant;
        self.claim.incident_date = instant - Duration::days(1);
        if let Some(first) = self.claim.timeline.first_mut() {
            first.date = instant;
        }
        self
    }

    pub fn updated_at(mut self, instant: DateTime<Utc>) -> Self {
        self.claim.updated_at = instant;
        self
    }

    pub fn build(self) -> Claim {
        self.claim
    }
}
