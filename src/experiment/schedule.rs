//! Scan Schedule - beam timing derived from an experiment
//!
//! A scan of `scan_boundary_ms` is split into one equal integration period
//! per entry of the beam order. Control programs pick the beam to start on
//! from the wall clock, so a radar joining mid-scan lands on the same beam
//! as one that has been running since the boundary.

use chrono::{DateTime, Timelike, Utc};

use super::ExperimentConfig;

/// Control programs select slightly early so the integration starts on time.
const SELECTION_LEAD_US: i64 = 100_000;

const US_PER_MS: i64 = 1000;
const US_PER_SECOND: i64 = 1_000_000;

/// Sweep direction implied by a beam order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanDirection {
    /// Strictly increasing beam numbers
    Forward,
    /// Strictly decreasing beam numbers
    Backward,
    /// A single beam
    Camping,
    /// Anything else (repeats, cycles, interleaving)
    Custom,
}

impl ScanDirection {
    /// Classify a beam order.
    #[must_use]
    pub fn of(beams: &[u8]) -> Self {
        if beams.len() == 1 {
            Self::Camping
        } else if beams.windows(2).all(|w| w[0] < w[1]) {
            Self::Forward
        } else if beams.windows(2).all(|w| w[0] > w[1]) {
            Self::Backward
        } else {
            Self::Custom
        }
    }
}

/// Timing view over one experiment's scan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanSchedule {
    beams: Vec<u8>,
    scan_period_us: i64,
    integration_period_us: i64,
}

impl ScanSchedule {
    /// Derive the schedule for an experiment.
    #[must_use]
    pub fn new(config: &ExperimentConfig) -> Self {
        let scan_period_us = i64::from(config.scan_boundary_ms()) * US_PER_MS;
        let slots = i64::try_from(config.beam_count()).unwrap_or(i64::MAX);

        Self {
            beams: config.beam_order().to_vec(),
            scan_period_us,
            integration_period_us: (scan_period_us / slots).max(1),
        }
    }

    /// Length of one scan in microseconds.
    #[must_use]
    pub const fn scan_period_us(&self) -> i64 {
        self.scan_period_us
    }

    /// Dwell time per beam slot in microseconds.
    #[must_use]
    pub const fn integration_period_us(&self) -> i64 {
        self.integration_period_us
    }

    /// Sweep direction of the beam order.
    #[must_use]
    pub fn direction(&self) -> ScanDirection {
        ScanDirection::of(&self.beams)
    }

    /// Slot index to integrate at `offset_us` into the hour.
    ///
    /// Offsets before the first selectable point, offsets too large to
    /// shift by the selection lead, and the remainder left when the scan
    /// does not divide evenly all fall back to slot 0.
    #[must_use]
    pub fn slot_at_offset(&self, offset_us: i64) -> usize {
        let shift = self.integration_period_us / 2 - SELECTION_LEAD_US;
        let Some(tv) = offset_us.checked_add(shift).filter(|&tv| tv >= 0) else {
            return 0;
        };

        let skip = (tv % self.scan_period_us) / self.integration_period_us;
        usize::try_from(skip)
            .ok()
            .filter(|&slot| slot < self.beams.len())
            .unwrap_or(0)
    }

    /// Beam to integrate at `offset_us` into the hour.
    #[must_use]
    pub fn beam_at_offset(&self, offset_us: i64) -> u8 {
        self.beams[self.slot_at_offset(offset_us)]
    }

    /// Beam to integrate at a wall-clock instant.
    #[must_use]
    pub fn beam_at(&self, time: DateTime<Utc>) -> u8 {
        self.beam_at_offset(offset_into_hour(time))
    }

    /// Start offset and beam of every slot in one scan.
    pub fn slots(&self) -> impl Iterator<Item = (i64, u8)> + '_ {
        (0_i64..)
            .zip(self.beams.iter())
            .map(|(slot, &beam)| (slot * self.integration_period_us, beam))
    }
}

fn offset_into_hour(time: DateTime<Utc>) -> i64 {
    let seconds = i64::from(time.minute() * 60 + time.second());
    seconds * US_PER_SECOND + i64::from(time.nanosecond() / 1000)
}
