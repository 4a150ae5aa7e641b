//! Descriptor output command.

use std::path::Path;

use anyhow::{Context, Result};
use docsite_config::SiteDescriptor;

/// Run the show command.
pub fn run(config: &Path, pretty: bool) -> Result<()> {
    let config_path = super::locate_config(config)?;

    let site = docsite_config::load_config(&config_path)
        .with_context(|| format!("{} is not a valid site configuration", config_path.display()))?;

    println!("{}", to_json(&site, pretty)?);

    Ok(())
}

fn to_json(site: &SiteDescriptor, pretty: bool) -> Result<String> {
    let json = if pretty {
        serde_json::to_string_pretty(site)
    } else {
        serde_json::to_string(site)
    };

    json.context("Failed to serialize site descriptor")
}
