//! Property-Based Test Generators
//!
//! Provides proptest strategies for generating random test data
//! that maintains domain invariants.

use core_kernel::{Currency, Money};
use proptest::prelude::*;

use domain_claims::claim::{ClaimPriority, ClaimStatus, ClaimType};
use domain_claims::draft::NewClaim;
use domain_claims::filter::{SortKey, SortOrder, Sorting};
use domain_claims::update::ClaimUpdate;

use crate::builders::NewClaimBuilder;

pub fn claim_type_strategy() -> impl Strategy<Value = ClaimType> {
    prop::sample::select(ClaimType::ALL)
}

pub fn claim_status_strategy() -> impl Strategy<Value = ClaimStatus> {
    prop::sample::select(ClaimStatus::ALL)
}

pub fn claim_priority_strategy() -> impl Strategy<Value = ClaimPriority> {
    prop::sample::select(ClaimPriority::ALL)
}

/// Strategy for non-negative CAD amounts with cents
pub fn cad_money_strategy() -> impl Strategy<Value = Money> {
    (0i64..10_000_000i64).prop_map(|cents| Money::from_minor(cents, Currency::CAD))
}

/// Strategy for short customer names
pub fn customer_name_strategy() -> impl Strategy<Value = String> {
    "[A-Za-z]{1,8}( [A-Za-z]{1,10})?"
}

/// Strategy for complete intake payloads
pub fn new_claim_strategy() -> impl Strategy<Value = NewClaim> {
    (
        customer_name_strategy(),
        claim_type_strategy(),
        claim_priority_strategy(),
        cad_money_strategy(),
    )
        .prop_map(|(name, claim_type, priority, amount)| {
            NewClaimBuilder::new()
                .with_customer(name)
                .with_type(claim_type)
                .with_priority(priority)
                .with_money(amount)
                .build()
        })
}

/// Strategy for updates touching status, amount and adjuster
pub fn claim_update_strategy() -> impl Strategy<Value = ClaimUpdate> {
    (
        proptest::option::of(claim_status_strategy()),
        proptest::option::of(cad_money_strategy()),
        proptest::option::of("[A-Z][a-z]{2,8}"),
        proptest::option::of(0u32..20),
    )
        .prop_map(|(status, amount, adjuster, documents)| ClaimUpdate {
            status,
            amount,
            adjuster,
            documents,
            ..Default::default()
        })
}

pub fn sorting_strategy() -> impl Strategy<Value = Sorting> {
    let key = prop_oneof![
        Just(SortKey::ClaimNumber),
        Just(SortKey::CustomerName),
        Just(SortKey::Amount),
        Just(SortKey::CreatedAt),
        Just(SortKey::UpdatedAt),
    ];
    let order = prop_oneof![Just(SortOrder::Ascending), Just(SortOrder::Descending)];
    (key, order).prop_map(|(key, order)| Sorting::new(key, order))
}
