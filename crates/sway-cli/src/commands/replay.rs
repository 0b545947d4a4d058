//! `swayctl replay`

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use anyhow::Result;
use tracing::info;

use crate::config::load_config;
use crate::error::CliError;
use crate::output;
use crate::replay::replay;
use crate::trace::read_trace;

pub fn execute(
    trace: &Path,
    config: Option<&Path>,
    seed: u64,
    timeline: bool,
    json: bool,
) -> Result<()> {
    let config = load_config(config)?;
    let file =
        File::open(trace).map_err(|_| CliError::TraceNotFound(trace.display().to_string()))?;
    let events = read_trace(BufReader::new(file))?;
    info!("Loaded {} events from {}", events.len(), trace.display());

    let report = replay(&events, config, seed, timeline)?;
    output::print_report(&report, json);
    Ok(())
}
