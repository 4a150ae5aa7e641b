//! Scaffold a documentation site.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

/// Files written by `init`, relative to the project root.
const SCAFFOLD: &[(&str, &str)] = &[
    ("src/assets/logo.svg", DEFAULT_LOGO),
    ("src/content/docs/index.md", DEFAULT_INDEX),
    ("src/content/docs/guides/getting-started.md", DEFAULT_GETTING_STARTED),
    ("src/content/docs/reference/configuration.md", DEFAULT_CONFIGURATION),
];

/// Run the init command.
pub fn run(config: &Path, yes: bool) -> Result<()> {
    tracing::info!("Initializing docsite...");

    let root = super::project_root(config);
    fs::create_dir_all(&root)
        .with_context(|| format!("Failed to create {}", root.display()))?;

    // Create default config
    if write_file(config, DEFAULT_CONFIG, yes)? {
        tracing::info!("Created {}", config.display());
    } else {
        tracing::warn!("{} already exists. Use --yes to overwrite.", config.display());
    }

    for (relative, content) in SCAFFOLD {
        let path = root.join(relative);
        if write_file(&path, content, yes)? {
            tracing::info!("Created {}", relative);
        } else {
            tracing::debug!("Kept existing {}", relative);
        }
    }

    tracing::info!("Initialization complete!");
    tracing::info!("Run 'docsite check' to validate the configuration.");

    Ok(())
}

/// Write `content` to `path` unless it exists and `overwrite` is off.
/// Returns whether the file was written.
fn write_file(path: &Path, content: &str, overwrite: bool) -> Result<bool> {
    if path.exists() && !overwrite {
        return Ok(false);
    }

    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }
    fs::write(path, content).with_context(|| format!("Failed to write {}", path.display()))?;

    Ok(true)
}

const DEFAULT_CONFIG: &str = r#"# docsite configuration

# Absolute origin URL of the deployed site
site = "https://example.org"

# URL prefix of every page
base = "/docs"

[theme]
title = "My Documentation"
default_locale = "root"

# Directory containing documentation pages
content_dir = "src/content/docs"

[theme.logo]
src = "./src/assets/logo.svg"

[theme.locales.root]
label = "English"
lang = "en"

[[theme.social]]
icon = "github"
label = "GitHub"
href = "https://github.com"

[[theme.sidebar]]
label = "Guides"
autogenerate = { directory = "guides" }

[[theme.sidebar]]
label = "Reference"
autogenerate = { directory = "reference" }
"#;

const DEFAULT_LOGO: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 32 32"><rect width="32" height="32" rx="6" fill="#0f172a"/><path d="M9 8h8a7 7 0 0 1 0 14h-4v2H9z" fill="#38bdf8"/></svg>
"##;

const DEFAULT_INDEX: &str = r#"---
title: Welcome
---

# Welcome to Your Documentation

This site is described by `docsite.toml`.

Start with the [Getting Started](guides/getting-started/) guide.
"#;

const DEFAULT_GETTING_STARTED: &str = r#"---
title: Getting Started
sidebar:
  order: 1
---

# Getting Started

Pages in `src/content/docs/guides/` show up in the **Guides** sidebar group.

## Ordering

Set `sidebar.order` in the frontmatter to control the position of a page.
Pages without an order follow, sorted by file name.

## Checking the configuration

```bash
docsite check
docsite sidebar
```
"#;

const DEFAULT_CONFIGURATION: &str = r#"---
title: Configuration
---

# Configuration

| Key | Meaning |
|---|---|
| `site` | Absolute origin URL |
| `base` | URL prefix of every page, starting with `/` |
| `theme.title` | Site title |
| `theme.default_locale` | Key into `theme.locales` |
| `theme.sidebar` | Sidebar groups, either `items` or `autogenerate` |
"#;
