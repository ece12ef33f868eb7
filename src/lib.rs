//! # radar-experiments: Radar Experiment Configuration
//!
//! Typed, validated records describing how a radar runs a scan: control
//! program, scan boundary, pulse spacing, range gates, beam order and
//! carrier frequency. Records are collected in a name-keyed catalog that a
//! scan scheduler reads once at startup.
//!
//! ## Design Principles
//!
//! - **Fail fast**: every record is validated when built or loaded
//! - **Immutable**: no setters; a record never changes after construction
//! - **Explicit**: catalogs are built by the caller, never held in globals
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use radar_experiments::experiment::{ExperimentCatalog, ScanSchedule};
//!
//! let catalog = ExperimentCatalog::load("experiments.toml")?;
//! for experiment in &catalog {
//!     let schedule = ScanSchedule::new(experiment);
//!     println!("{}: {} beams", experiment.name(), experiment.beam_count());
//!     println!("  dwell {} us", schedule.integration_period_us());
//! }
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

pub mod error;
pub mod experiment;

pub use error::{Error, Result};
