//! Claims Desk Domain
//!
//! This crate holds the claim records behind the claims desk and the
//! operations the desk performs on them: intake, partial updates, deletion,
//! filtered and sorted listing, statistics, and CSV export.
//!
//! # Claim Lifecycle
//!
//! ```text
//! Pending -> Under Review -> Approved/Denied -> Paid
//! ```
//!
//! Any status may be set at any time; the lifecycle is descriptive only.
//!
//! # Persistence
//!
//! [`ClaimsStore`] is plain in-memory state. Saving and restoring the
//! collection goes through [`ports::ClaimsSnapshotPort`].

pub mod claim;
pub mod draft;
pub mod update;
pub mod filter;
pub mod store;
pub mod workflow;
pub mod statistics;
pub mod analytics;
pub mod export;
pub mod seed;
pub mod ports;
pub mod error;

pub use claim::{Claim, ClaimPriority, ClaimStatus, ClaimType, Location, TimelineEntry, TimelineKind};
pub use draft::{NewClaim, ValidationResult};
pub use update::{ClaimUpdate, LocationUpdate};
pub use filter::{ClaimFilters, FilterField, FilterValue, SortKey, SortOrder, Sorting};
pub use store::ClaimsStore;
pub use workflow::{progress_step, ProgressStep};
pub use statistics::ClaimStatistics;
pub use export::{export_csv, export_file_name};
pub use seed::{MockClaimGenerator, DEFAULT_SEED_COUNT};
pub use ports::ClaimsSnapshotPort;
pub use error::ClaimError;
