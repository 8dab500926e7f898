//! Filter and sort configuration for the claims list
//!
//! All active predicates must hold for a claim to be listed. Sorting is
//! stable: claims that compare equal keep their stored order in both
//! directions.

use std::cmp::Ordering;
use serde::{Deserialize, Serialize};

use core_kernel::{DateRange, Timezone};
use crate::claim::{Claim, ClaimPriority, ClaimStatus, ClaimType};

/// Either every value or exactly one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FilterValue<T> {
    All,
    Only(T),
}

impl<T> Default for FilterValue<T> {
    fn default() -> Self {
        FilterValue::All
    }
}

impl<T: PartialEq> FilterValue<T> {
    pub fn accepts(&self, value: &T) -> bool {
        match self {
            FilterValue::All => true,
            FilterValue::Only(wanted) => wanted == value,
        }
    }

    pub fn is_all(&self) -> bool {
        matches!(self, FilterValue::All)
    }
}

impl<T> From<Option<T>> for FilterValue<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(FilterValue::All, FilterValue::Only)
    }
}

/// Active list filters
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimFilters {
    pub status: FilterValue<ClaimStatus>,
    pub claim_type: FilterValue<ClaimType>,
    pub priority: FilterValue<ClaimPriority>,
    /// Case-insensitive substring of claim number, customer name or policy number
    pub search: String,
    /// Inclusive range of creation dates in the reporting timezone
    pub created_range: Option<DateRange>,
}

/// One filter setting, as applied by `ClaimsStore::set_filter`
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FilterField {
    Status(FilterValue<ClaimStatus>),
    Type(FilterValue<ClaimType>),
    Priority(FilterValue<ClaimPriority>),
    Search(String),
    CreatedRange(Option<DateRange>),
}

impl ClaimFilters {
    pub fn set(&mut self, field: FilterField) {
        match field {
            FilterField::Status(value) => self.status = value,
            FilterField::Type(value) => self.claim_type = value,
            FilterField::Priority(value) => self.priority = value,
            FilterField::Search(value) => self.search = value,
            FilterField::CreatedRange(value) => self.created_range = value,
        }
    }

    /// True when nothing is filtered out
    pub fn is_unfiltered(&self) -> bool {
        *self == Self::default()
    }

    /// True when the claim passes every active predicate
    pub fn matches(&self, claim: &Claim, tz: &Timezone) -> bool {
        self.status.accepts(&claim.status)
            && self.claim_type.accepts(&claim.claim_type)
            && self.priority.accepts(&claim.priority)
            && self.matches_search(claim)
            && self
                .created_range
                .map_or(true, |range| range.contains(tz.local_date(claim.created_at)))
    }

    fn matches_search(&self, claim: &Claim) -> bool {
        if self.search.is_empty() {
            return true;
        }
        let needle = self.search.to_lowercase();
        [&claim.claim_number, &claim.customer_name, &claim.policy_number]
            .iter()
            .any(|haystack| haystack.to_lowercase().contains(&needle))
    }
}

/// Field the claims list is ordered by
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SortKey {
    ClaimNumber,
    CustomerName,
    Amount,
    #[default]
    CreatedAt,
    UpdatedAt,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SortOrder {
    #[serde(rename = "asc")]
    Ascending,
    #[default]
    #[serde(rename = "desc")]
    Descending,
}

/// Sort key plus direction; newest first by default
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sorting {
    pub key: SortKey,
    pub order: SortOrder,
}

impl Sorting {
    pub fn new(key: SortKey, order: SortOrder) -> Self {
        Self { key, order }
    }

    pub fn ascending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Ascending)
    }

    pub fn descending(key: SortKey) -> Self {
        Self::new(key, SortOrder::Descending)
    }

    pub fn compare(&self, a: &Claim, b: &Claim) -> Ordering {
        let ordering = match self.key {
            SortKey::ClaimNumber => compare_text(&a.claim_number, &b.claim_number),
            SortKey::CustomerName => compare_text(&a.customer_name, &b.customer_name),
            SortKey::Amount => a.amount.amount().cmp(&b.amount.amount()),
            SortKey::CreatedAt => a.created_at.cmp(&b.created_at),
            SortKey::UpdatedAt => a.updated_at.cmp(&b.updated_at),
        };
        match self.order {
            SortOrder::Ascending => ordering,
            SortOrder::Descending => ordering.reverse(),
        }
    }

    /// Sorts in place, keeping equal claims in their current order
    pub fn sort(&self, claims: &mut [Claim]) {
        claims.sort_by(|a, b| self.compare(a, b));
    }
}

/// Case-insensitive comparison with a byte-wise tie-break
fn compare_text(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}
