use std::path::Path;

use anyhow::Result;
use enaptar_core::EnaptarConfig;
use owo_colors::OwoColorize;

pub fn run(events_path: &Path) -> Result<()> {
    let config_path = EnaptarConfig::config_path()?;

    println!("{}", "Paths".bold());
    println!("  Config:  {}", config_path.display());
    println!("  Events:  {}", events_path.display());

    Ok(())
}
