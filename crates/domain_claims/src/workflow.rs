//! Claim workflow: status changes, notes, and adjuster assignment
//!
//! Each action appends to the claim's timeline and refreshes its update
//! time. Status moves are unrestricted; any status may follow any other.

use serde::{Deserialize, Serialize};
use tracing::debug;

use core_kernel::ClaimId;
use crate::claim::{Claim, ClaimStatus, TimelineEntry};
use crate::store::ClaimsStore;

impl ClaimsStore {
    /// Moves the claim to `status`, recording who did it
    ///
    /// Returns `None`, changing nothing, when the identifier is unknown.
    pub fn change_status(&mut self, id: &ClaimId, status: ClaimStatus, actor: &str) -> Option<&Claim> {
        let now = self.now();
        let claim = self.claim_mut(id)?;
        let previous = claim.status;
        claim.status = status;
        claim.record(TimelineEntry::by(now, format!("Status changed to {}", status), actor));
        debug!(claim_id = %id, from = %previous, to = %status, "status changed");
        Some(&*claim)
    }

    /// Appends a note and bumps the claim's note count
    ///
    /// Blank notes are ignored. Returns `None` when nothing was recorded.
    pub fn add_note(&mut self, id: &ClaimId, text: &str, actor: &str) -> Option<&Claim> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        let now = self.now();
        let claim = self.claim_mut(id)?;
        claim.notes = claim.notes.saturating_add(1);
        claim.record(TimelineEntry::note(now, text, actor));
        debug!(claim_id = %id, "note added");
        Some(&*claim)
    }

    /// Hands the claim to an adjuster
    pub fn assign_adjuster(&mut self, id: &ClaimId, adjuster: &str, actor: &str) -> Option<&Claim> {
        let now = self.now();
        let claim = self.claim_mut(id)?;
        claim.adjuster = adjuster.to_string();
        claim.record(TimelineEntry::by(now, format!("Assigned to {}", adjuster), actor));
        debug!(claim_id = %id, adjuster, "adjuster assigned");
        Some(&*claim)
    }
}

/// Note entries of a claim, newest first
pub fn notes(claim: &Claim) -> Vec<&TimelineEntry> {
    claim.timeline.iter().rev().filter(|entry| entry.is_note()).collect()
}

/// Stages of the customer-facing progress tracker
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ProgressStep {
    Submitted = 1,
    UnderReview = 2,
    Decision = 3,
    Paid = 4,
}

impl ProgressStep {
    pub const ALL: [ProgressStep; 4] = [
        ProgressStep::Submitted,
        ProgressStep::UnderReview,
        ProgressStep::Decision,
        ProgressStep::Paid,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            ProgressStep::Submitted => "Submitted",
            ProgressStep::UnderReview => "Under Review",
            ProgressStep::Decision => "Decision",
            ProgressStep::Paid => "Paid",
        }
    }

    /// Position on the tracker, 1-based
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// Share of the tracker line that is filled, 0 to 100
    pub fn percent_complete(&self) -> u8 {
        let done = u16::from(self.number() - 1) * 100;
        let span = (ProgressStep::ALL.len() - 1) as u16;
        u8::try_from(done / span).unwrap_or(100)
    }
}

/// Where a claim in `status` sits on the progress tracker
pub fn progress_step(status: ClaimStatus) -> ProgressStep {
    match status {
        ClaimStatus::Pending => ProgressStep::Submitted,
        ClaimStatus::UnderReview => ProgressStep::UnderReview,
        ClaimStatus::Approved | ClaimStatus::Denied => ProgressStep::Decision,
        ClaimStatus::Paid => ProgressStep::Paid,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_mapping() {
        assert_eq!(progress_step(ClaimStatus::Pending), ProgressStep::Submitted);
        assert_eq!(progress_step(ClaimStatus::Denied), ProgressStep::Decision);
        assert_eq!(progress_step(ClaimStatus::Paid).number(), 4);
    }

    #[test]
    fn test_percent_complete() {
        assert_eq!(ProgressStep::Submitted.percent_complete(), 0);
        assert_eq!(ProgressStep::UnderReview.percent_complete(), 33);
        assert_eq!(ProgressStep::Decision.percent_complete(), 66);
        assert_eq!(ProgressStep::Paid.percent_complete(), 100);
    }

    #[test]
    fn test_percent_complete_rises_along_the_tracker() {
        let percents: Vec<u8> = ProgressStep::ALL.iter().map(|step| step.percent_complete()).collect();
        assert!(percents.windows(2).all(|pair| pair[0] < pair[1]));
        assert_eq!(percents.last(), Some(&100));
    }
}
