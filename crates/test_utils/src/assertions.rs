//! Custom Test Assertions
//!
//! Provides specialized assertion helpers for domain types that give
//! more meaningful error messages than standard assertions.

use core_kernel::Money;
use domain_claims::claim::Claim;
use chrono::{DateTime, Utc};
use domain_claims::filter::{SortKey, SortOrder, Sorting};
use rust_decimal::Decimal;

/// Asserts that a Money value has the expected amount and currency
pub fn assert_money_eq(actual: &Money, expected: &Money) {
    assert_eq!(
        actual.currency(),
        expected.currency(),
        "Currency mismatch: actual={}, expected={}",
        actual.currency(),
        expected.currency()
    );
    assert_eq!(
        actual.amount(),
        expected.amount(),
        "Money amounts differ: actual={}, expected={}",
        actual,
        expected
    );
}

/// Asserts that a Money value's amount equals `expected`, ignoring currency
pub fn assert_amount(actual: &Money, expected: Decimal) {
    assert_eq!(
        actual.amount(),
        expected,
        "Expected amount {}, got {}",
        expected,
        actual
    );
}

/// Raw value a listing is ordered by
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord)]
enum SortValue {
    /// Case-folded text, then the original text
    Text(String, String),
    Amount(Decimal),
    Instant(DateTime<Utc>),
}

fn sort_value(claim: &Claim, key: SortKey) -> SortValue {
    let text = |value: &str| SortValue::Text(value.to_lowercase(), value.to_string());
    match key {
        SortKey::ClaimNumber => text(&claim.claim_number),
        SortKey::CustomerName => text(&claim.customer_name),
        SortKey::Amount => SortValue::Amount(claim.amount.amount()),
        SortKey::CreatedAt => SortValue::Instant(claim.created_at),
        SortKey::UpdatedAt => SortValue::Instant(claim.updated_at),
    }
}

/// Asserts that `listed` is ordered by the raw `sorting` key and that
/// claims with equal keys keep their relative order from `stored`
pub fn assert_sorted(listed: &[Claim], stored: &[Claim], sorting: Sorting) {
    let position = |claim: &Claim| stored.iter().position(|c| c.id == claim.id);

    for pair in listed.windows(2) {
        let (first, second) = (sort_value(&pair[0], sorting.key), sort_value(&pair[1], sorting.key));
        let in_order = match sorting.order {
            SortOrder::Ascending => first <= second,
            SortOrder::Descending => first >= second,
        };
        assert!(
            in_order,
            "{} ({:?}) should not come before {} ({:?}) under {:?}",
            pair[0].id, first, pair[1].id, second, sorting
        );

        if first == second {
            assert!(
                position(&pair[0]) < position(&pair[1]),
                "{} and {} share a sort key but lost their stored order",
                pair[0].id,
                pair[1].id
            );
        }
    }
}

/// Asserts the claim identifiers, in order
pub fn assert_claim_ids(claims: &[Claim], expected: &[&str]) {
    let actual: Vec<&str> = claims.iter().map(|c| c.id.as_str()).collect();
    assert_eq!(actual, expected, "Claim identifiers differ");
}

/// Asserts incident <= created <= updated and timeline order
pub fn assert_chronology(claim: &Claim) {
    assert!(
        claim.has_valid_chronology(),
        "Claim {} has out-of-order timestamps: incident={}, created={}, updated={}",
        claim.id,
        claim.incident_date,
        claim.created_at,
        claim.updated_at
    );
}
