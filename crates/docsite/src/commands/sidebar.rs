//! Sidebar resolution command.

use std::path::Path;

use anyhow::{Context, Result};
use docsite_nav::{SidebarEntry, SidebarResolver};

/// Run the sidebar command.
pub fn run(config: &Path, json: bool) -> Result<()> {
    let config_path = super::locate_config(config)?;
    let project_root = super::project_root(&config_path);

    let site = docsite_config::load_config(&config_path)
        .with_context(|| format!("{} is not a valid site configuration", config_path.display()))?;

    let resolver = SidebarResolver::new(&site, &project_root)?;
    let sidebar = resolver.resolve().with_context(|| {
        format!("Failed to resolve sidebar in {}", resolver.locale_root().display())
    })?;

    let links: usize = sidebar.iter().map(SidebarEntry::link_count).sum();
    tracing::info!("Resolved {} sidebar group(s) with {} link(s)", sidebar.len(), links);

    if json {
        let output =
            serde_json::to_string_pretty(&sidebar).context("Failed to serialize sidebar")?;
        println!("{}", output);
    } else {
        print!("{}", render_tree(&sidebar));
    }

    Ok(())
}

/// Render entries as an indented text tree.
fn render_tree(entries: &[SidebarEntry]) -> String {
    let mut out = String::new();
    render_level(entries, 0, &mut out);
    out
}

fn render_level(entries: &[SidebarEntry], depth: usize, out: &mut String) {
    let indent = "  ".repeat(depth);

    for entry in entries {
        match entry {
            SidebarEntry::Group {
                label,
                collapsed,
                entries,
            } => {
                let marker = if *collapsed { " (collapsed)" } else { "" };
                out.push_str(&format!("{}{}{}\n", indent, label, marker));
                render_level(entries, depth + 1, out);
            }
            SidebarEntry::Link {
                label,
                href,
                external,
            } => {
                let marker = if *external { " ↗" } else { "" };
                out.push_str(&format!("{}- {} -> {}{}\n", indent, label, href, marker));
            }
        }
    }
}
