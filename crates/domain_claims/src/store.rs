//! The claims store
//!
//! Owns the claim collection and the list configuration, and derives the
//! filtered list and statistics on demand. Operations run to completion
//! synchronously; the store has a single owner.
//!
//! Mutations addressed to an unknown identifier are silent no-ops: the
//! plain methods return `None`, and the `try_` variants turn that into
//! [`ClaimError::ClaimNotFound`] for callers that need to know.

use chrono::Datelike;
use std::fmt;
use std::sync::Arc;
use tracing::debug;

use core_kernel::{ClaimId, Clock, Currency, Timezone};
use crate::claim::{Claim, ClaimStatus, TimelineEntry, CLAIM_SUBMITTED_EVENT};
use crate::draft::NewClaim;
use crate::error::ClaimError;
use crate::filter::{ClaimFilters, FilterField, SortKey, SortOrder, Sorting};
use crate::statistics::ClaimStatistics;
use crate::update::ClaimUpdate;

/// In-memory claims collection, most recent first
pub struct ClaimsStore {
    claims: Vec<Claim>,
    filters: ClaimFilters,
    sorting: Sorting,
    clock: Arc<dyn Clock>,
    timezone: Timezone,
    currency: Currency,
    next_sequence: u32,
}

impl fmt::Debug for ClaimsStore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClaimsStore")
            .field("claims", &self.claims.len())
            .field("filters", &self.filters)
            .field("sorting", &self.sorting)
            .field("timezone", &self.timezone)
            .field("currency", &self.currency)
            .field("next_sequence", &self.next_sequence)
            .finish_non_exhaustive()
    }
}

impl ClaimsStore {
    /// Creates an empty store
    pub fn new(clock: Arc<dyn Clock>) -> Self {
        Self::with_claims(Vec::new(), clock)
    }

    /// Creates a store seeded with an existing collection, kept in the given order
    pub fn with_claims(claims: Vec<Claim>, clock: Arc<dyn Clock>) -> Self {
        let next_sequence = claims
            .iter()
            .filter_map(|claim| claim.id.sequence())
            .max()
            .unwrap_or(0)
            .saturating_add(1);

        Self {
            claims,
            filters: ClaimFilters::default(),
            sorting: Sorting::default(),
            clock,
            timezone: Timezone::default(),
            currency: Currency::default(),
            next_sequence,
        }
    }

    /// Sets the timezone used for calendar questions
    pub fn with_timezone(mut self, timezone: Timezone) -> Self {
        self.timezone = timezone;
        self
    }

    /// Sets the currency statistics are totalled in
    pub fn with_currency(mut self, currency: Currency) -> Self {
        self.currency = currency;
        self
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }

    pub fn currency(&self) -> Currency {
        self.currency
    }

    /// Every claim in stored order
    pub fn claims(&self) -> &[Claim] {
        &self.claims
    }

    pub fn len(&self) -> usize {
        self.claims.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claims.is_empty()
    }

    pub(crate) fn now(&self) -> chrono::DateTime<chrono::Utc> {
        self.clock.now()
    }

    /// Files a new claim and returns it
    ///
    /// Assigns the next sequential identifier and stamps creation and update
    /// time. The claim starts Pending with a single submission entry on its
    /// timeline and goes to the front of the collection. Never fails.
    pub fn add_claim(&mut self, draft: NewClaim) -> &Claim {
        let now = self.clock.now();
        let year = self.timezone.to_local(now).year();
        let id = ClaimId::sequential(year, self.next_sequence);
        self.next_sequence = self.next_sequence.saturating_add(1);

        let estimated_amount = draft.effective_estimate();
        let NewClaim {
            policy_number,
            customer_name,
            customer_email,
            customer_phone,
            claim_type,
            priority,
            amount,
            estimated_amount: _,
            adjuster,
            description,
            incident_date,
            documents,
            notes,
            location,
        } = draft;

        let claim = Claim {
            claim_number: id.to_string(),
            id,
            policy_number,
            customer_name,
            customer_email,
            customer_phone,
            claim_type,
            status: ClaimStatus::Pending,
            priority,
            amount,
            estimated_amount,
            adjuster,
            description,
            incident_date,
            created_at: now,
            updated_at: now,
            documents,
            notes,
            location,
            timeline: vec![TimelineEntry::system(now, CLAIM_SUBMITTED_EVENT)],
        };

        debug!(claim_id = %claim.id, claim_type = %claim.claim_type, "claim added");
        self.claims.insert(0, claim);
        &self.claims[0]
    }

    /// Merges the overrides over the claim and refreshes its update time
    ///
    /// Returns `None`, changing nothing, when the identifier is unknown.
    pub fn update_claim(&mut self, id: &ClaimId, update: ClaimUpdate) -> Option<&Claim> {
        let now = self.clock.now();
        let claim = self.claim_mut(id)?;
        update.apply_to(claim);
        claim.updated_at = now;
        debug!(claim_id = %id, "claim updated");
        Some(&*claim)
    }

    /// Like [`update_claim`](Self::update_claim) but reports unknown identifiers
    pub fn try_update_claim(&mut self, id: &ClaimId, update: ClaimUpdate) -> Result<&Claim, ClaimError> {
        self.update_claim(id, update)
            .ok_or_else(|| ClaimError::ClaimNotFound(id.clone()))
    }

    /// Removes the claim and returns it; deleting an unknown identifier does nothing
    pub fn delete_claim(&mut self, id: &ClaimId) -> Option<Claim> {
        let index = self.claims.iter().position(|claim| &claim.id == id)?;
        let removed = self.claims.remove(index);
        debug!(claim_id = %id, "claim deleted");
        Some(removed)
    }

    /// Like [`delete_claim`](Self::delete_claim) but reports unknown identifiers
    pub fn try_delete_claim(&mut self, id: &ClaimId) -> Result<Claim, ClaimError> {
        self.delete_claim(id)
            .ok_or_else(|| ClaimError::ClaimNotFound(id.clone()))
    }

    pub fn get_claim(&self, id: &ClaimId) -> Option<&Claim> {
        self.claims.iter().find(|claim| &claim.id == id)
    }

    pub(crate) fn claim_mut(&mut self, id: &ClaimId) -> Option<&mut Claim> {
        self.claims.iter_mut().find(|claim| &claim.id == id)
    }

    /// Claims passing the active filters, in the active sort order
    ///
    /// Returns copies; the stored order is untouched.
    pub fn filtered_claims(&self) -> Vec<Claim> {
        let mut filtered: Vec<Claim> = self
            .claims
            .iter()
            .filter(|claim| self.filters.matches(claim, &self.timezone))
            .cloned()
            .collect();
        self.sorting.sort(&mut filtered);
        filtered
    }

    /// Statistics over the whole collection, ignoring filters
    pub fn statistics(&self) -> ClaimStatistics {
        ClaimStatistics::compute(&self.claims, self.clock.now(), &self.timezone, self.currency)
    }

    pub fn filters(&self) -> &ClaimFilters {
        &self.filters
    }

    pub fn set_filter(&mut self, field: FilterField) {
        self.filters.set(field);
    }

    pub fn reset_filters(&mut self) {
        self.filters = ClaimFilters::default();
    }

    pub fn sorting(&self) -> Sorting {
        self.sorting
    }

    pub fn set_sorting(&mut self, key: SortKey, order: SortOrder) {
        self.sorting = Sorting::new(key, order);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone, Utc};
    use core_kernel::{FixedClock, Money};
    use rust_decimal_macros::dec;
    use crate::claim::ClaimType;

    fn store_at(year: i32) -> (ClaimsStore, Arc<FixedClock>) {
        let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(year, 5, 10, 12, 0, 0).unwrap()));
        (ClaimsStore::new(clock.clone()), clock)
    }

    fn draft(amount: i64) -> NewClaim {
        NewClaim::new(
            ClaimType::Auto,
            Money::from_major(amount, Currency::CAD),
            Utc.with_ymd_and_hms(2025, 5, 1, 0, 0, 0).unwrap(),
        )
    }

    #[test]
    fn test_add_assigns_sequential_ids_newest_first() {
        let (mut store, _) = store_at(2025);
        store.add_claim(draft(100));
        store.add_claim(draft(200));

        let ids: Vec<&str> = store.claims().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["CLM-2025-00002", "CLM-2025-00001"]);
        assert_eq!(store.claims()[0].claim_number, "CLM-2025-00002");
    }

    #[test]
    fn test_ids_are_not_reused_after_delete() {
        let (mut store, _) = store_at(2025);
        store.add_claim(draft(100));
        let second = store.add_claim(draft(200)).id.clone();
        store.delete_claim(&second);

        let third = store.add_claim(draft(300)).id.clone();
        assert_eq!(third.as_str(), "CLM-2025-00003");
    }

    #[test]
    fn test_sequence_continues_from_loaded_claims() {
        let (mut seeded, _) = store_at(2025);
        seeded.add_claim(draft(1));
        seeded.add_claim(draft(2));
        let claims = seeded.claims().to_vec();

        let clock = Arc::new(FixedClock::new(Utc.with_ymd_and_hms(2026, 1, 2, 0, 0, 0).unwrap()));
        let mut store = ClaimsStore::with_claims(claims, clock);
        assert_eq!(store.add_claim(draft(3)).id.as_str(), "CLM-2026-00003");
    }

    #[test]
    fn test_update_refreshes_timestamp() {
        let (mut store, clock) = store_at(2025);
        let id = store.add_claim(draft(100)).id.clone();
        clock.advance(Duration::minutes(5));

        let updated = store
            .update_claim(&id, ClaimUpdate::status(ClaimStatus::Approved))
            .unwrap();
        assert_eq!(updated.status, ClaimStatus::Approved);
        assert_eq!(updated.updated_at - updated.created_at, Duration::minutes(5));
        assert_eq!(updated.timeline.len(), 1);
    }

    #[test]
    fn test_update_unknown_id_is_noop() {
        let (mut store, _) = store_at(2025);
        store.add_claim(draft(100));
        let before = store.claims().to_vec();

        let missing = ClaimId::from("CLM-2025-09999");
        assert!(store.update_claim(&missing, ClaimUpdate::amount(Money::from_major(1, Currency::CAD))).is_none());
        assert_eq!(store.claims(), before.as_slice());

        let err = store.try_update_claim(&missing, ClaimUpdate::default()).unwrap_err();
        assert!(err.is_not_found());
    }

    #[test]
    fn test_filtered_claims_do_not_reorder_store() {
        let (mut store, clock) = store_at(2025);
        store.add_claim(draft(300));
        clock.advance(Duration::seconds(1));
        store.add_claim(draft(100));
        store.set_sorting(SortKey::Amount, SortOrder::Ascending);

        let amounts: Vec<_> = store.filtered_claims().iter().map(|c| c.amount.amount()).collect();
        assert_eq!(amounts, vec![dec!(100), dec!(300)]);
        assert_eq!(store.claims()[0].amount.amount(), dec!(100));
        assert_eq!(store.claims()[1].amount.amount(), dec!(300));
    }
}
