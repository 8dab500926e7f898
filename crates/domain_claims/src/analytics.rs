//! Roll-ups behind the customer, analytics and dashboard views

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::warn;

use core_kernel::{ClaimId, Money};
use crate::claim::{Claim, ClaimStatus, Location};

/// A customer as seen through their claims, keyed by email
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerSummary {
    pub email: String,
    pub name: String,
    pub phone: String,
    pub location: Location,
    pub claim_ids: Vec<ClaimId>,
    pub total_amount: Money,
}

/// Groups claims by customer email in first-seen order
///
/// Name, phone and location come from the first claim seen for the email.
pub fn customers(claims: &[Claim]) -> Vec<CustomerSummary> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut summaries: Vec<CustomerSummary> = Vec::new();

    for claim in claims {
        let slot = *index.entry(claim.customer_email.as_str()).or_insert_with(|| {
            summaries.push(CustomerSummary {
                email: claim.customer_email.clone(),
                name: claim.customer_name.clone(),
                phone: claim.customer_phone.clone(),
                location: claim.location.clone(),
                claim_ids: Vec::new(),
                total_amount: Money::zero(claim.amount.currency()),
            });
            summaries.len() - 1
        });

        let summary = &mut summaries[slot];
        summary.claim_ids.push(claim.id.clone());
        match summary.total_amount.checked_add(&claim.amount) {
            Ok(sum) => summary.total_amount = sum,
            Err(error) => warn!(claim_id = %claim.id, %error, "amount left out of customer total"),
        }
    }

    summaries
}

/// Customers whose name or email contains `query` (ignoring case) or whose
/// phone contains it verbatim
pub fn search_customers<'a>(customers: &'a [CustomerSummary], query: &str) -> Vec<&'a CustomerSummary> {
    if query.is_empty() {
        return customers.iter().collect();
    }
    let needle = query.to_lowercase();
    customers
        .iter()
        .filter(|c| {
            c.name.to_lowercase().contains(&needle)
                || c.email.to_lowercase().contains(&needle)
                || c.phone.contains(query)
        })
        .collect()
}

/// Claims handled by one adjuster
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdjusterWorkload {
    pub name: String,
    pub claims: usize,
    pub amount: Decimal,
}

/// Workload per adjuster, busiest first; ties keep first-seen order
pub fn adjuster_workload(claims: &[Claim]) -> Vec<AdjusterWorkload> {
    let mut index: HashMap<&str, usize> = HashMap::new();
    let mut rows: Vec<AdjusterWorkload> = Vec::new();

    for claim in claims {
        let slot = *index.entry(claim.adjuster.as_str()).or_insert_with(|| {
            rows.push(AdjusterWorkload {
                name: claim.adjuster.clone(),
                claims: 0,
                amount: Decimal::ZERO,
            });
            rows.len() - 1
        });
        rows[slot].claims += 1;
        rows[slot].amount += claim.amount.amount();
    }

    rows.sort_by(|a, b| b.claims.cmp(&a.claims));
    rows
}

/// One bar of the amount histogram; `max` is exclusive and open-ended when absent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AmountBucket {
    pub label: &'static str,
    pub min: Decimal,
    pub max: Option<Decimal>,
    pub count: usize,
}

impl AmountBucket {
    fn new(label: &'static str, min: Decimal, max: Option<Decimal>) -> Self {
        Self { label, min, max, count: 0 }
    }

    pub fn contains(&self, amount: Decimal) -> bool {
        amount >= self.min && self.max.map_or(true, |max| amount < max)
    }
}

/// Histogram of claimed amounts
///
/// Negative amounts fall in no bucket.
pub fn amount_distribution(claims: &[Claim]) -> Vec<AmountBucket> {
    let mut buckets = vec![
        AmountBucket::new("$0-5K", dec!(0), Some(dec!(5000))),
        AmountBucket::new("$5K-10K", dec!(5000), Some(dec!(10000))),
        AmountBucket::new("$10K-25K", dec!(10000), Some(dec!(25000))),
        AmountBucket::new("$25K-50K", dec!(25000), Some(dec!(50000))),
        AmountBucket::new("$50K+", dec!(50000), None),
    ];

    for claim in claims {
        let amount = claim.amount.amount();
        if let Some(bucket) = buckets.iter_mut().find(|b| b.contains(amount)) {
            bucket.count += 1;
        }
    }

    buckets
}

/// Claims still in progress (neither Paid nor Denied)
pub fn active_claims(claims: &[Claim]) -> Vec<&Claim> {
    claims.iter().filter(|c| c.status.is_active()).collect()
}

/// The first `limit` pending claims, which are waiting on the customer
pub fn needs_action(claims: &[Claim], limit: usize) -> Vec<&Claim> {
    claims
        .iter()
        .filter(|c| c.status == ClaimStatus::Pending)
        .take(limit)
        .collect()
}
