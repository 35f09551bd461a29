//! slidedeck scenario replay.
//!
//! Builds an in-memory page with the requested number of slides, drives a
//! deck controller through the scenario's steps and prints the display
//! model after each one as a JSON line.
//!
//! Usage: `slidedeck-replay [SCENARIO.toml]` (default:
//! `scenarios/walkthrough.toml`, or `SLIDEDECK_SCENARIO`).

mod scenario;

use std::path::PathBuf;

use anyhow::{Context, Result};

use scenario::Scenario;

const DEFAULT_SCENARIO: &str = "scenarios/walkthrough.toml";

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let path = std::env::args()
        .nth(1)
        .or_else(|| std::env::var("SLIDEDECK_SCENARIO").ok())
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SCENARIO));

    let scenario = Scenario::load(&path)?;
    log::info!(
        "Replaying {} ({} slides, {} steps)",
        path.display(),
        scenario.slides,
        scenario.steps.len()
    );

    let frames = scenario::run(&scenario)?;
    for frame in &frames {
        let line = serde_json::to_string(frame).context("serializing frame")?;
        println!("{line}");
    }

    match frames.last().and_then(|f| f.model.as_ref()) {
        Some(model) => log::info!("Finished on slide {}", model.counter_label),
        None => log::info!("Finished with no active deck"),
    }
    Ok(())
}
