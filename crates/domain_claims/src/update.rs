//! Partial claim updates
//!
//! A [`ClaimUpdate`] lists field overrides; `None` leaves a field alone.
//! Location overrides merge field by field. Identity, creation time and the
//! timeline cannot be overridden: the timeline only grows through the
//! workflow operations.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use core_kernel::Money;
use crate::claim::{Claim, ClaimPriority, ClaimStatus, ClaimType, Location};

/// Overrides for a subset of a claim's fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClaimUpdate {
    pub policy_number: Option<String>,
    pub customer_name: Option<String>,
    pub customer_email: Option<String>,
    pub customer_phone: Option<String>,
    pub claim_type: Option<ClaimType>,
    pub status: Option<ClaimStatus>,
    pub priority: Option<ClaimPriority>,
    pub amount: Option<Money>,
    pub estimated_amount: Option<Money>,
    pub adjuster: Option<String>,
    pub description: Option<String>,
    pub incident_date: Option<DateTime<Utc>>,
    pub documents: Option<u32>,
    pub notes: Option<u32>,
    pub location: Option<LocationUpdate>,
}

/// Overrides for individual location fields
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LocationUpdate {
    pub address: Option<String>,
    pub city: Option<String>,
    pub province: Option<String>,
    pub postal_code: Option<String>,
}

impl LocationUpdate {
    fn apply_to(self, location: &mut Location) {
        let LocationUpdate { address, city, province, postal_code } = self;
        overwrite(&mut location.address, address);
        overwrite(&mut location.city, city);
        overwrite(&mut location.province, province);
        overwrite(&mut location.postal_code, postal_code);
    }
}

fn overwrite<T>(slot: &mut T, value: Option<T>) {
    if let Some(value) = value {
        *slot = value;
    }
}

impl ClaimUpdate {
    pub fn status(status: ClaimStatus) -> Self {
        Self {
            status: Some(status),
            ..Default::default()
        }
    }

    pub fn amount(amount: Money) -> Self {
        Self {
            amount: Some(amount),
            ..Default::default()
        }
    }

    pub fn adjuster(name: impl Into<String>) -> Self {
        Self {
            adjuster: Some(name.into()),
            ..Default::default()
        }
    }

    /// True when no field would change
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }

    /// Merges the overrides over the claim; timestamps are the caller's job
    pub fn apply_to(self, claim: &mut Claim) {
        let ClaimUpdate {
            policy_number,
            customer_name,
            customer_email,
            customer_phone,
            claim_type,
            status,
            priority,
            amount,
            estimated_amount,
            adjuster,
            description,
            incident_date,
            documents,
            notes,
            location,
        } = self;

        overwrite(&mut claim.policy_number, policy_number);
        overwrite(&mut claim.customer_name, customer_name);
        overwrite(&mut claim.customer_email, customer_email);
        overwrite(&mut claim.customer_phone, customer_phone);
        overwrite(&mut claim.claim_type, claim_type);
        overwrite(&mut claim.status, status);
        overwrite(&mut claim.priority, priority);
        overwrite(&mut claim.amount, amount);
        overwrite(&mut claim.estimated_amount, estimated_amount);
        overwrite(&mut claim.adjuster, adjuster);
        overwrite(&mut claim.description, description);
        overwrite(&mut claim.incident_date, incident_date);
        overwrite(&mut claim.documents, documents);
        overwrite(&mut claim.notes, notes);
        if let Some(location) = location {
            location.apply_to(&mut claim.location);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_update() {
        assert!(ClaimUpdate::default().is_empty());
        assert!(!ClaimUpdate::status(ClaimStatus::Paid).is_empty());
    }

    #[test]
    fn test_partial_json_deserializes() {
        let update: ClaimUpdate =
            serde_json::from_str(r#"{"status":"Approved","location":{"city":"Ottawa"}}"#).unwrap();
        assert_eq!(update.status, Some(ClaimStatus::Approved));
        assert_eq!(update.location.unwrap().city.as_deref(), Some("Ottawa"));
    }
}
