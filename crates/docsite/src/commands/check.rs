//! Configuration validation command.

use std::path::Path;

use anyhow::{Context, Result};

/// Run the check command.
pub fn run(config: &Path) -> Result<()> {
    let config_path = super::locate_config(config)?;

    let site = docsite_config::load_config(&config_path)
        .with_context(|| format!("{} is not a valid site configuration", config_path.display()))?;

    let theme = site
        .theme()
        .context("Site configuration has no documentation theme")?;

    tracing::info!(
        "{} ({}{}): {} locale(s), {} social link(s), {} sidebar group(s)",
        theme.title,
        site.site(),
        site.base_path().trim_start_matches('/'),
        theme.locales.len(),
        theme.social.len(),
        theme.sidebar.len()
    );
    tracing::info!("Configuration is valid");

    Ok(())
}
