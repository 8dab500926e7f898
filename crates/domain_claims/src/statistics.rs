//! Dashboard statistics
//!
//! Recomputed over the full collection on every call; filters never apply.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use tracing::warn;

use core_kernel::{Currency, Money, Timezone};
use crate::claim::{Claim, ClaimStatus};

/// Shown as the average processing time; not derived from data
pub const PLACEHOLDER_AVG_PROCESSING_DAYS: Decimal = dec!(4.2);

/// Shown as the customer satisfaction rate; not derived from data
pub const PLACEHOLDER_SATISFACTION_RATE: Decimal = dec!(94.5);

const SECONDS_PER_DAY: i64 = 86_400;

/// Aggregate figures over every stored claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClaimStatistics {
    pub total: usize,
    pub pending: usize,
    pub under_review: usize,
    pub approved: usize,
    pub denied: usize,
    pub paid: usize,
    /// Claims created in the current calendar month of the reporting timezone
    pub this_month: usize,
    pub total_amount: Money,
    /// Placeholder, see [`PLACEHOLDER_AVG_PROCESSING_DAYS`]
    pub avg_processing_time: Decimal,
    /// Placeholder, see [`PLACEHOLDER_SATISFACTION_RATE`]
    pub satisfaction_rate: Decimal,
}

impl ClaimStatistics {
    /// Computes the statistics as of `now`
    ///
    /// Amounts in a currency other than `currency` are left out of
    /// `total_amount` and logged.
    pub fn compute(claims: &[Claim], now: DateTime<Utc>, tz: &Timezone, currency: Currency) -> Self {
        let mut stats = Self {
            total: claims.len(),
            pending: 0,
            under_review: 0,
            approved: 0,
            denied: 0,
            paid: 0,
            this_month: 0,
            total_amount: Money::zero(currency),
            avg_processing_time: PLACEHOLDER_AVG_PROCESSING_DAYS,
            satisfaction_rate: PLACEHOLDER_SATISFACTION_RATE,
        };

        for claim in claims {
            *stats.count_mut(claim.status) += 1;

            if tz.same_month(claim.created_at, now) {
                stats.this_month += 1;
            }

            match stats.total_amount.checked_add(&claim.amount) {
                Ok(sum) => stats.total_amount = sum,
                Err(error) => warn!(claim_id = %claim.id, %error, "amount left out of total"),
            }
        }

        stats
    }

    /// Number of claims with the given status
    pub fn count(&self, status: ClaimStatus) -> usize {
        match status {
            ClaimStatus::Pending => self.pending,
            ClaimStatus::UnderReview => self.under_review,
            ClaimStatus::Approved => self.approved,
            ClaimStatus::Denied => self.denied,
            ClaimStatus::Paid => self.paid,
        }
    }

    fn count_mut(&mut self, status: ClaimStatus) -> &mut usize {
        match status {
            ClaimStatus::Pending => &mut self.pending,
            ClaimStatus::UnderReview => &mut self.under_review,
            ClaimStatus::Approved => &mut self.approved,
            ClaimStatus::Denied => &mut self.denied,
            ClaimStatus::Paid => &mut self.paid,
        }
    }
}

/// Mean days from creation to last update over decided claims
///
/// A data-derived alternative to the processing-time placeholder. Returns
/// `None` when no claim has been decided.
pub fn average_resolution_days(claims: &[Claim]) -> Option<Decimal> {
    let seconds: Vec<i64> = claims
        .iter()
        .filter(|claim| claim.status.is_decided())
        .map(|claim| (claim.updated_at - claim.created_at).num_seconds().max(0))
        .collect();

    if seconds.is_empty() {
        return None;
    }

    let total: Decimal = seconds.iter().map(|s| Decimal::from(*s)).sum();
    let days = total / Decimal::from(SECONDS_PER_DAY) / Decimal::from(seconds.len());
    Some(days.round_dp(1))
}
