//! Claims Desk Application Layer
//!
//! Wires the domain store to durable storage and the process environment.
//!
//! # Architecture
//!
//! - **Configuration**: `CLAIMS_*` environment variables, with `.env` support
//! - **Telemetry**: `tracing` subscriber with pretty or JSON output
//! - **Bootstrap**: restores the saved collection or seeds a fresh one
//! - **Service**: the store plus a save after every change
//!
//! # Example
//!
//! ```rust,ignore
//! use claims_app::{bootstrap, open_snapshots, AppConfig, ClaimsService};
//!
//! let config = AppConfig::from_env()?;
//! let snapshots = open_snapshots(&config)?;
//! let store = bootstrap(&config, &snapshots, Arc::new(SystemClock))?;
//! let mut service = ClaimsService::new(store, snapshots);
//! ```

pub mod config;
pub mod error;
pub mod telemetry;
pub mod bootstrap;
pub mod service;

pub use config::{AppConfig, LogFormat};
pub use error::AppError;
pub use telemetry::init_tracing;
pub use bootstrap::{bootstrap, open_snapshots};
pub use service::{ClaimsService, CsvExport};
