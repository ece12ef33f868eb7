//! Experiment Config - the record a scan scheduler reads

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Radar experiment configuration.
///
/// A named, immutable bundle of scan parameters. Fields are private and
/// only readable through accessors; the only ways to obtain one are
/// [`ExperimentConfigBuilder::build`] and deserialization, both of which
/// validate every invariant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(try_from = "ExperimentConfigBuilder")]
pub struct ExperimentConfig {
    name: String,
    control_program_id: i32,
    scan_boundary_ms: u32,
    pulse_spacing_us: u32,
    range_gate_count: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    first_range_km: Option<u32>,
    beam_order: Vec<u8>,
    frequency_hz: f64,
}

impl ExperimentConfig {
    /// Create a builder for an experiment with the given name.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> ExperimentConfigBuilder {
        ExperimentConfigBuilder::new(name)
    }

    /// Get the experiment name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the control program identifier (`cp`).
    #[must_use]
    pub const fn control_program_id(&self) -> i32 {
        self.control_program_id
    }

    /// Get the scan boundary in milliseconds (`scanbound`).
    #[must_use]
    pub const fn scan_boundary_ms(&self) -> u32 {
        self.scan_boundary_ms
    }

    /// Get the scan boundary as a duration.
    #[must_use]
    pub fn scan_boundary(&self) -> Duration {
        Duration::from_millis(u64::from(self.scan_boundary_ms))
    }

    /// Get the multi-pulse increment in microseconds (`mpinc`).
    #[must_use]
    pub const fn pulse_spacing_us(&self) -> u32 {
        self.pulse_spacing_us
    }

    /// Get the multi-pulse increment as a duration.
    #[must_use]
    pub fn pulse_spacing(&self) -> Duration {
        Duration::from_micros(u64::from(self.pulse_spacing_us))
    }

    /// Get the number of range gates (`nrang`).
    #[must_use]
    pub const fn range_gate_count(&self) -> u32 {
        self.range_gate_count
    }

    /// Get the distance to the first range gate in km (`frang`).
    ///
    /// `None` means unset: the control program keeps its own default.
    #[must_use]
    pub const fn first_range_km(&self) -> Option<u32> {
        self.first_range_km
    }

    /// Get the beam order, exactly as declared.
    #[must_use]
    pub fn beam_order(&self) -> &[u8] {
        &self.beam_order
    }

    /// Number of beam slots in one scan (repeats included).
    #[must_use]
    pub fn beam_count(&self) -> usize {
        self.beam_order.len()
    }

    /// Get the carrier frequency in Hz.
    #[must_use]
    pub const fn frequency_hz(&self) -> f64 {
        self.frequency_hz
    }

    /// Get the carrier frequency in kHz, the unit control programs tune in.
    #[must_use]
    pub fn frequency_khz(&self) -> f64 {
        self.frequency_hz / 1000.0
    }

    /// Check every invariant, returning the first violation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] naming the offending field.
    pub fn validate(&self) -> Result<()> {
        let fail = |reason: &str| Err(Error::invalid(&self.name, reason));

        if self.name.trim().is_empty() {
            return fail("name must not be empty");
        }
        if self.name.trim() != self.name {
            return fail("name must not have leading or trailing whitespace");
        }
        if self.control_program_id <= 0 {
            return fail("control_program_id must be positive");
        }
        if self.scan_boundary_ms == 0 {
            return fail("scan_boundary_ms must be positive");
        }
        if self.pulse_spacing_us == 0 {
            return fail("pulse_spacing_us must be positive");
        }
        if self.range_gate_count == 0 {
            return fail("range_gate_count must be positive");
        }
        if self.first_range_km == Some(0) {
            return fail("first_range_km must be positive when set");
        }
        if self.beam_order.is_empty() {
            return fail("beam_order must not be empty");
        }
        if !(self.frequency_hz.is_finite() && self.frequency_hz > 0.0) {
            return fail("frequency_hz must be positive and finite");
        }
        Ok(())
    }
}

/// Builder for `ExperimentConfig`.
///
/// Also the deserialization shape of a record, which is why it accepts the
/// short control-program names (`cp`, `mpinc`, ...) as aliases.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ExperimentConfigBuilder {
    name: Option<String>,
    #[serde(alias = "cp")]
    control_program_id: Option<i32>,
    #[serde(alias = "scanbound")]
    scan_boundary_ms: Option<u32>,
    #[serde(alias = "mpinc")]
    pulse_spacing_us: Option<u32>,
    #[serde(alias = "nrang")]
    range_gate_count: Option<u32>,
    #[serde(alias = "frang")]
    first_range_km: Option<u32>,
    #[serde(alias = "beams")]
    beam_order: Option<Vec<u8>>,
    #[serde(alias = "frequency")]
    frequency_hz: Option<f64>,
}

impl ExperimentConfigBuilder {
    /// Create a new builder with the experiment name set.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Set the control program identifier.
    #[must_use]
    pub const fn control_program_id(mut self, cp: i32) -> Self {
        self.control_program_id = Some(cp);
        self
    }

    /// Set the scan boundary in milliseconds.
    #[must_use]
    pub const fn scan_boundary_ms(mut self, ms: u32) -> Self {
        self.scan_boundary_ms = Some(ms);
        self
    }

    /// Set the multi-pulse increment in microseconds.
    #[must_use]
    pub const fn pulse_spacing_us(mut self, us: u32) -> Self {
        self.pulse_spacing_us = Some(us);
        self
    }

    /// Set the number of range gates.
    #[must_use]
    pub const fn range_gate_count(mut self, count: u32) -> Self {
        self.range_gate_count = Some(count);
        self
    }

    /// Set the distance to the first range gate in km.
    #[must_use]
    pub const fn first_range_km(mut self, km: u32) -> Self {
        self.first_range_km = Some(km);
        self
    }

    /// Set the beam order. Order and repeats are kept as given.
    #[must_use]
    pub fn beam_order(mut self, beams: impl IntoIterator<Item = u8>) -> Self {
        self.beam_order = Some(beams.into_iter().collect());
        self
    }

    /// Set the carrier frequency in Hz.
    #[must_use]
    pub const fn frequency_hz(mut self, hz: f64) -> Self {
        self.frequency_hz = Some(hz);
        self
    }

    /// Build and validate the `ExperimentConfig`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfiguration`] if a required field was never
    /// set or any invariant fails.
    pub fn build(self) -> Result<ExperimentConfig> {
        let name = self.name.unwrap_or_default();
        let missing = |field: &str| Error::invalid(&name, format!("{field} is not set"));

        let config = ExperimentConfig {
            control_program_id: self
                .control_program_id
                .ok_or_else(|| missing("control_program_id"))?,
            scan_boundary_ms: self
                .scan_boundary_ms
                .ok_or_else(|| missing("scan_boundary_ms"))?,
            pulse_spacing_us: self
                .pulse_spacing_us
                .ok_or_else(|| missing("pulse_spacing_us"))?,
            range_gate_count: self
                .range_gate_count
                .ok_or_else(|| missing("range_gate_count"))?,
            first_range_km: self.first_range_km,
            beam_order: self.beam_order.ok_or_else(|| missing("beam_order"))?,
            frequency_hz: self.frequency_hz.ok_or_else(|| missing("frequency_hz"))?,
            name,
        };
        config.validate()?;

        tracing::trace!(
            experiment = %config.name,
            cp = config.control_program_id,
            beams = config.beam_order.len(),
            "experiment configuration built"
        );
        Ok(config)
    }
}

impl TryFrom<ExperimentConfigBuilder> for ExperimentConfig {
    type Error = Error;

    fn try_from(builder: ExperimentConfigBuilder) -> Result<Self> {
        builder.build()
    }
}
