//! Built-in experiments
//!
//! Both run the same timing (60 s scan, 2700 us pulse spacing, 210 gates at
//! 13.5 MHz) and differ in control program and beam sweep. Neither sets a
//! first range gate.

use super::{ExperimentCatalog, ExperimentConfig};
use crate::Result;

/// Name of the standard 16-beam sweep.
pub const NORMALSCAN16: &str = "Normalscan16";

/// Name of the ULF campaign sweep.
pub const ULFSCAN: &str = "ULFscan";

const SCAN_BOUNDARY_MS: u32 = 60_000;
const PULSE_SPACING_US: u32 = 2700;
const RANGE_GATES: u32 = 210;
const FREQUENCY_HZ: f64 = 13.5e6;

/// Standard sweep: beams 18 down to 3, control program 151.
///
/// # Errors
///
/// Never fails for the literal values; the `Result` mirrors the builder.
pub fn normalscan16() -> Result<ExperimentConfig> {
    ExperimentConfig::builder(NORMALSCAN16)
        .control_program_id(151)
        .scan_boundary_ms(SCAN_BOUNDARY_MS)
        .pulse_spacing_us(PULSE_SPACING_US)
        .range_gate_count(RANGE_GATES)
        .beam_order((3..=18).rev())
        .frequency_hz(FREQUENCY_HZ)
        .build()
}

/// ULF sweep: four beams cycled four times per scan, control program 8020.
///
/// # Errors
///
/// Never fails for the literal values; the `Result` mirrors the builder.
pub fn ulfscan() -> Result<ExperimentConfig> {
    const CYCLE: [u8; 4] = [12, 10, 8, 4];

    ExperimentConfig::builder(ULFSCAN)
        .control_program_id(8020)
        .scan_boundary_ms(SCAN_BOUNDARY_MS)
        .pulse_spacing_us(PULSE_SPACING_US)
        .range_gate_count(RANGE_GATES)
        .beam_order(CYCLE.iter().copied().cycle().take(CYCLE.len() * 4))
        .frequency_hz(FREQUENCY_HZ)
        .build()
}

/// Catalog holding every built-in experiment.
///
/// # Errors
///
/// Propagates construction or registration failures.
pub fn builtin_catalog() -> Result<ExperimentCatalog> {
    ExperimentCatalog::from_configs([normalscan16()?, ulfscan()?])
}
