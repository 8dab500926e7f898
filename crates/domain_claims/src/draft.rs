//! New-claim payload and its validation rules
//!
//! A [`NewClaim`] is everything a claim needs except identity, status,
//! timestamps and timeline, which the store assigns. The store accepts any payload;
//! [`NewClaim::validate`] carries the intake form rules for callers that
//! want them:
//!
//! - customer name, phone, policy number and description are required
//! - email must be well formed
//! - every location field is required
//! - amounts must not be negative

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;

use core_kernel::Money;
use crate::claim::{ClaimPriority, ClaimType, Location, UNASSIGNED_ADJUSTER};

/// Payload for filing a claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewClaim {
    pub policy_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub claim_type: ClaimType,
    pub priority: ClaimPriority,
    pub amount: Money,
    /// Falls back to `amount` when absent
    pub estimated_amount: Option<Money>,
    pub adjuster: String,
    pub description: String,
    pub incident_date: DateTime<Utc>,
    pub documents: u32,
    pub notes: u32,
    pub location: Location,
}

impl NewClaim {
    /// A payload with intake defaults: Medium priority, unassigned, no
    /// documents or notes, and blank customer details
    pub fn new(claim_type: ClaimType, amount: Money, incident_date: DateTime<Utc>) -> Self {
        Self {
            policy_number: String::new(),
            customer_name: String::new(),
            customer_email: String::new(),
            customer_phone: String::new(),
            claim_type,
            priority: ClaimPriority::Medium,
            amount,
            estimated_amount: None,
            adjuster: UNASSIGNED_ADJUSTER.to_string(),
            description: String::new(),
            incident_date,
            documents: 0,
            notes: 0,
            location: Location::default(),
        }
    }

    /// The estimate, defaulting to the claimed amount
    pub fn effective_estimate(&self) -> Money {
        self.estimated_amount.unwrap_or(self.amount)
    }

    /// Checks the intake form rules; incidents after `now` only warn
    pub fn validate(&self, now: DateTime<Utc>) -> ValidationResult {
        let mut result = ValidationResult::ok();

        require(&mut result, "customerName", &self.customer_name, "Customer name is required");
        if self.customer_email.trim().is_empty() {
            result.add_error("customerEmail", "Email is required");
        } else if !self.customer_email.trim().validate_email() {
            result.add_error("customerEmail", "Invalid email format");
        }
        require(&mut result, "customerPhone", &self.customer_phone, "Phone is required");
        require(&mut result, "policyNumber", &self.policy_number, "Policy number is required");
        require(&mut result, "description", &self.description, "Description is required");

        if self.amount.is_negative() {
            result.add_error("amount", "Claim amount must not be negative");
        }
        if self.estimated_amount.is_some_and(|m| m.is_negative()) {
            result.add_error("estimatedAmount", "Estimated amount must not be negative");
        }

        require(&mut result, "address", &self.location.address, "Address is required");
        require(&mut result, "city", &self.location.city, "City is required");
        require(&mut result, "province", &self.location.province, "Province is required");
        require(&mut result, "postalCode", &self.location.postal_code, "Postal code is required");

        if self.incident_date > now {
            result.add_warning("incidentDate", "Incident date is in the future");
        }

        result
    }
}

fn require(result: &mut ValidationResult, field: &'static str, value: &str, message: &str) {
    if value.trim().is_empty() {
        result.add_error(field, message);
    }
}

/// A problem found with one field
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: &'static str,
    pub message: String,
}

/// Result of claim validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationResult {
    pub errors: Vec<FieldIssue>,
    /// Non-fatal issues
    pub warnings: Vec<FieldIssue>,
}

impl ValidationResult {
    pub fn ok() -> Self {
        Self::default()
    }

    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn add_error(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldIssue {
            field,
            message: message.into(),
        });
    }

    pub fn add_warning(&mut self, field: &'static str, message: impl Into<String>) {
        self.warnings.push(FieldIssue {
            field,
            message: message.into(),
        });
    }

    /// Returns the error message for a field, if any
    pub fn error_for(&self, field: &str) -> Option<&str> {
        self.errors
            .iter()
            .find(|issue| issue.field == field)
            .map(|issue| issue.message.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use core_kernel::Currency;
    use rust_decimal_macros::dec;

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 1, 9, 0, 0).unwrap()
    }

    fn complete() -> NewClaim {
        let mut draft = NewClaim::new(
            ClaimType::Auto,
            Money::new(dec!(1000), Currency::CAD),
            Utc.with_ymd_and_hms(2025, 2, 1, 10, 0, 0).unwrap(),
        );
        draft.customer_name = "Jane Roe".into();
        draft.customer_email = "jane@example.com".into();
        draft.customer_phone = "(416) 555-0199".into();
        draft.policy_number = "POL-123456".into();
        draft.description = "Rear-ended at a light".into();
        draft.location = Location {
            address: "1 Main Street".into(),
            city: "Toronto".into(),
            province: "ON".into(),
            postal_code: "M5V 2T6".into(),
        };
        draft
    }

    #[test]
    fn test_complete_payload_is_valid() {
        assert!(complete().validate(now()).is_valid());
    }

    #[test]
    fn test_blank_fields_are_required() {
        let mut draft = complete();
        draft.customer_name = "   ".into();
        draft.location.city.clear();

        let result = draft.validate(now());
        assert!(!result.is_valid());
        assert_eq!(result.error_for("customerName"), Some("Customer name is required"));
        assert_eq!(result.error_for("city"), Some("City is required"));
    }

    #[test]
    fn test_email_format() {
        let mut draft = complete();
        draft.customer_email = "not-an-email".into();
        assert_eq!(draft.validate(now()).error_for("customerEmail"), Some("Invalid email format"));
    }

    #[test]
    fn test_estimate_defaults_to_amount() {
        let draft = complete();
        assert_eq!(draft.effective_estimate(), draft.amount);
        assert_eq!(draft.adjuster, UNASSIGNED_ADJUSTER);
    }

    #[test]
    fn test_future_incident_only_warns() {
        let mut draft = complete();
        draft.incident_date = now() + chrono::Duration::days(1);

        let result = draft.validate(now());
        assert!(result.is_valid());
        assert!(result.warnings.iter().any(|w| w.field == "incidentDate"));
        assert!(complete().validate(now()).warnings.is_empty());
    }

    #[test]
    fn test_negative_amount_rejected() {
        let mut draft = complete();
        draft.amount = Money::new(dec!(-5), Currency::CAD);
        assert!(draft.validate(now()).error_for("amount").is_some());
    }
}
