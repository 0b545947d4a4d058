//! `swayctl generate`

use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use anyhow::Result;

use crate::output;
use crate::trace::{GenerateOptions, generate, write_trace};

pub fn execute(options: &GenerateOptions, output_path: Option<&Path>, json: bool) -> Result<()> {
    let events = generate(options)?;

    match output_path {
        Some(path) => {
            let file = File::create(path)?;
            write_trace(BufWriter::new(file), &events)?;
            output::print_success(
                &format!("Wrote {} events to {}", events.len(), path.display()),
                json,
            );
        }
        None => write_trace(BufWriter::new(io::stdout().lock()), &events)?,
    }
    Ok(())
}
