//! Catalog Overview Example
//!
//! Builds the built-in catalog (or loads one from the path given as the
//! first argument) and prints what a scheduler would run right now.
//!
//! Run with: RUST_LOG=debug cargo run --example catalog_overview [catalog.toml]

use anyhow::Context;
use chrono::Utc;
use radar_experiments::experiment::{presets, ExperimentCatalog, ScanSchedule};
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let catalog = match std::env::args().nth(1) {
        Some(path) => ExperimentCatalog::load(&path)
            .with_context(|| format!("failed to load catalog {path}"))?,
        None => presets::builtin_catalog().context("built-in catalog is invalid")?,
    };

    println!("=== Radar Experiment Catalog ({} experiments) ===\n", catalog.len());

    let now = Utc::now();
    for experiment in &catalog {
        let schedule = ScanSchedule::new(experiment);

        println!("{}", experiment.name());
        println!("   Control program: {}", experiment.control_program_id());
        println!("   Scan boundary:   {:?}", experiment.scan_boundary());
        println!("   Pulse spacing:   {} us", experiment.pulse_spacing_us());
        println!("   Range gates:     {}", experiment.range_gate_count());
        match experiment.first_range_km() {
            Some(km) => println!("   First range:     {km} km"),
            None => println!("   First range:     (control program default)"),
        }
        println!("   Frequency:       {} kHz", experiment.frequency_khz());
        println!("   Beams:           {:?} ({:?})", experiment.beam_order(), schedule.direction());
        println!("   Dwell per beam:  {} us", schedule.integration_period_us());
        println!("   Beam now:        {}\n", schedule.beam_at(now));
    }

    println!("TOML catalog:\n{}", catalog.to_toml_string()?);
    Ok(())
}
