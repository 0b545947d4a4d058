//! `swayctl config`

use std::path::Path;

use anyhow::Result;

use crate::config::{ConfigFormat, load_config, render_config};

pub fn execute(config: Option<&Path>, format: ConfigFormat) -> Result<()> {
    let config = load_config(config)?;
    let rendered = render_config(&config, format)?;
    println!("{}", rendered.trim_end());
    Ok(())
}
