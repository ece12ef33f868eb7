//! Radar experiment configuration
//!
//! ## Overview
//!
//! ```text
//! ExperimentCatalog (1) ──< ExperimentConfig (N)
//!                                │
//!                                └── ScanSchedule [derived, read-only]
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use radar_experiments::experiment::{presets, ScanDirection, ScanSchedule};
//!
//! let catalog = presets::builtin_catalog()?;
//! let normal = catalog.require(presets::NORMALSCAN16)?;
//! assert_eq!(normal.control_program_id(), 151);
//!
//! let schedule = ScanSchedule::new(normal);
//! assert_eq!(schedule.direction(), ScanDirection::Backward);
//! assert_eq!(schedule.integration_period_us(), 3_750_000);
//! # Ok::<(), radar_experiments::Error>(())
//! ```

mod catalog;
mod config;
pub mod presets;
mod schedule;

pub use catalog::ExperimentCatalog;
pub use config::{ExperimentConfig, ExperimentConfigBuilder};
pub use schedule::{ScanDirection, ScanSchedule};
