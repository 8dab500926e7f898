//! Core Kernel - Foundational types for the claims desk
//!
//! This crate provides the building blocks shared by the domain and
//! infrastructure crates:
//! - Money types with precise decimal arithmetic
//! - Claim identifiers
//! - Clocks and the reporting timezone
//! - Port errors for swappable adapters

pub mod money;
pub mod temporal;
pub mod identifiers;
pub mod ports;
pub mod error;

pub use money::{Money, Currency, MoneyError};
pub use temporal::{Clock, SystemClock, FixedClock, Timezone, DateRange, TemporalError};
pub use identifiers::{ClaimId, CLAIM_ID_PREFIX};
pub use ports::PortError;
pub use error::CoreError;
