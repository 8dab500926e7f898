//! Claim entity

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use core_kernel::{ClaimId, Money};
use crate::error::ClaimError;

/// Adjuster name used until someone is assigned
pub const UNASSIGNED_ADJUSTER: &str = "Unassigned";

/// Actor recorded on entries the system writes itself
pub const SYSTEM_ACTOR: &str = "System";

/// Event text of the entry every new claim starts with
pub const CLAIM_SUBMITTED_EVENT: &str = "Claim Submitted";

/// Declares a closed set of values that travel as their display label
macro_rules! labelled_enum {
    (
        $(#[$meta:meta])*
        $name:ident { $($variant:ident => $label:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every value, in declaration order
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label shown to users and stored in snapshots
            pub fn as_str(&self) -> &'static str {
                match self {
                    $($name::$variant => $label,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = ClaimError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted: String = s.chars().filter(|c| !c.is_whitespace() && *c != '_').collect();
                Self::ALL
                    .iter()
                    .copied()
                    .find(|v| {
                        v.as_str()
                            .chars()
                            .filter(|c| !c.is_whitespace())
                            .collect::<String>()
                            .eq_ignore_ascii_case(&wanted)
                    })
                    .ok_or_else(|| {
                        ClaimError::Validation(format!(
                            "unknown {} '{}'",
                            stringify!($name),
                            s
                        ))
                    })
            }
        }
    };
}

labelled_enum! {
    /// Line of business the claim is filed under
    ClaimType {
        Auto => "Auto",
        Property => "Property",
        Liability => "Liability",
        Health => "Health",
        Life => "Life",
        Travel => "Travel",
    }
}

labelled_enum! {
    /// Handling priority
    ClaimPriority {
        Low => "Low",
        Medium => "Medium",
        High => "High",
        Critical => "Critical",
    }
}

labelled_enum! {
    /// Claim status
    ///
    /// Any status may move to any other; there is no transition table.
    ClaimStatus {
        Pending => "Pending",
        UnderReview => "Under Review",
        Approved => "Approved",
        Denied => "Denied",
        Paid => "Paid",
    }
}

impl ClaimStatus {
    /// True once a decision has been reached
    pub fn is_decided(&self) -> bool {
        matches!(self, ClaimStatus::Approved | ClaimStatus::Denied | ClaimStatus::Paid)
    }

    /// True while the claim still needs work (not Paid and not Denied)
    pub fn is_active(&self) -> bool {
        !matches!(self, ClaimStatus::Paid | ClaimStatus::Denied)
    }
}

/// Where the incident happened
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Location {
    pub address: String,
    pub city: String,
    /// Province or region code, e.g. `ON`
    pub province: String,
    pub postal_code: String,
}

/// Distinguishes system events from notes people write
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimelineKind {
    System,
    Note,
}

/// One entry of a claim's audit trail
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimelineEntry {
    pub date: DateTime<Utc>,
    pub event: String,
    pub user: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<TimelineKind>,
}

impl TimelineEntry {
    /// An event recorded by the system
    pub fn system(date: DateTime<Utc>, event: impl Into<String>) -> Self {
        Self {
            date,
            event: event.into(),
            user: SYSTEM_ACTOR.to_string(),
            kind: Some(TimelineKind::System),
        }
    }

    /// An action performed by a person (status change, assignment)
    pub fn by(date: DateTime<Utc>, event: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            date,
            event: event.into(),
            user: user.into(),
            kind: None,
        }
    }

    /// A free-text note
    pub fn note(date: DateTime<Utc>, text: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            date,
            event: text.into(),
            user: user.into(),
            kind: Some(TimelineKind::Note),
        }
    }

    pub fn is_note(&self) -> bool {
        self.kind == Some(TimelineKind::Note)
    }
}

/// An insurance claim
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: ClaimId,
    pub claim_number: String,
    pub policy_number: String,
    pub customer_name: String,
    pub customer_email: String,
    pub customer_phone: String,
    pub claim_type: ClaimType,
    pub status: ClaimStatus,
    pub priority: ClaimPriority,
    /// Claimed amount
    pub amount: Money,
    /// Adjuster's estimate
    pub estimated_amount: Money,
    /// Assigned adjuster, or [`UNASSIGNED_ADJUSTER`]
    pub adjuster: String,
    pub description: String,
    pub incident_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Number of attached documents
    pub documents: u32,
    /// Number of notes
    pub notes: u32,
    pub location: Location,
    /// Append-only audit trail, oldest first
    pub timeline: Vec<TimelineEntry>,
}

impl Claim {
    /// Checks incident <= created <= updated
    ///
    /// Nothing enforces this; it is reported so callers can flag bad data.
    pub fn has_valid_chronology(&self) -> bool {
        self.incident_date <= self.created_at && self.created_at <= self.updated_at
    }

    pub fn is_unassigned(&self) -> bool {
        self.adjuster == UNASSIGNED_ADJUSTER
    }

    /// Appends an entry to the timeline and refreshes the update timestamp
    pub(crate) fn record(&mut self, entry: TimelineEntry) {
        self.updated_at = entry.date;
        self.timeline.push(entry);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_labels() {
        assert_eq!(ClaimStatus::UnderReview.as_str(), "Under Review");
        assert_eq!(
            serde_json::to_string(&ClaimStatus::UnderReview).unwrap(),
            "\"Under Review\""
        );
    }

    #[test]
    fn test_enum_parsing_is_lenient() {
        assert_eq!("under review".parse::<ClaimStatus>().unwrap(), ClaimStatus::UnderReview);
        assert_eq!("UNDER_REVIEW".parse::<ClaimStatus>().unwrap(), ClaimStatus::UnderReview);
        assert_eq!("auto".parse::<ClaimType>().unwrap(), ClaimType::Auto);
        assert!("Flood".parse::<ClaimType>().is_err());
    }

    #[test]
    fn test_all_lists_every_variant() {
        assert_eq!(ClaimType::ALL.len(), 6);
        assert_eq!(ClaimPriority::ALL.len(), 4);
        assert_eq!(ClaimStatus::ALL.len(), 5);
    }

    #[test]
    fn test_timeline_kind_serialization() {
        let note = TimelineEntry::note(Utc::now(), "Called customer", "Sarah Johnson");
        let json = serde_json::to_value(&note).unwrap();
        assert_eq!(json["type"], "note");

        let action = TimelineEntry::by(Utc::now(), "Status changed to Paid", "Current User");
        let json = serde_json::to_value(&action).unwrap();
        assert!(json.get("type").is_none());
    }

    #[test]
    fn test_active_and_decided() {
        assert!(ClaimStatus::Pending.is_active());
        assert!(!ClaimStatus::Denied.is_active());
        assert!(ClaimStatus::Paid.is_decided());
        assert!(!ClaimStatus::UnderReview.is_decided());
    }
}
