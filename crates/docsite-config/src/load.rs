//! Loading `docsite.toml`.
//!
//! # Example
//!
//! ```toml
//! site = "https://henryypin.github.io"
//! base = "/my-flutter-notes"
//!
//! [theme]
//! title = "Flutter 筆記"
//! default_locale = "root"
//!
//! [theme.logo]
//! src = "./src/assets/logo.svg"
//!
//! [theme.locales.root]
//! label = "繁體中文"
//! lang = "zh-TW"
//!
//! [[theme.social]]
//! icon = "github"
//! label = "GitHub"
//! href = "https://github.com/henryypin/my-flutter-notes"
//!
//! [[theme.sidebar]]
//! label = "資源"
//! autogenerate = { directory = "resources" }
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::builder::SiteDescriptorBuilder;
use crate::descriptor::{Integration, SiteDescriptor};
use crate::error::ConfigError;
use crate::theme::ThemeIntegration;

/// Conventional configuration file name.
pub const CONFIG_FILE_NAME: &str = "docsite.toml";

/// Raw contents of `docsite.toml`, before validation.
#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    /// Absolute origin URL
    pub site: String,

    /// Base path
    #[serde(default = "default_base")]
    pub base: String,

    /// Documentation theme settings
    pub theme: ThemeIntegration,
}

fn default_base() -> String {
    "/".to_string()
}

impl ConfigFile {
    /// Validate into a descriptor, resolving assets against `project_root`.
    pub fn into_descriptor(self, project_root: &Path) -> Result<SiteDescriptor, ConfigError> {
        SiteDescriptorBuilder::new(self.site, self.base)
            .project_root(project_root)
            .integration(Integration::DocsTheme(self.theme))
            .build()
    }
}

/// Parse configuration source text. `path` is only used in error messages.
pub fn parse_config(source: &str, path: &Path) -> Result<ConfigFile, ConfigError> {
    toml::from_str(source).map_err(|e| ConfigError::Parse {
        path: path.display().to_string(),
        message: e.to_string(),
    })
}

/// Load, parse and validate a configuration file.
///
/// Relative asset paths resolve against the file's directory.
pub fn load_config(path: &Path) -> Result<SiteDescriptor, ConfigError> {
    let source = fs::read_to_string(path).map_err(|e| ConfigError::Read {
        path: path.display().to_string(),
        message: e.to_string(),
    })?;

    let file = parse_config(&source, path)?;

    let project_root = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let descriptor = file.into_descriptor(project_root)?;
    tracing::info!("Loaded config from {}", path.display());

    Ok(descriptor)
}

/// Find a config file by searching upward from the current directory.
///
/// An absolute `name` that exists is returned as is.
pub fn find_config_file(name: &Path) -> Option<PathBuf> {
    if name.is_absolute() {
        return name.exists().then(|| name.to_path_buf());
    }

    let cwd = std::env::current_dir().ok()?;
    find_config_file_from(&cwd, name)
}

fn find_config_file_from(start: &Path, name: &Path) -> Option<PathBuf> {
    start
        .ancestors()
        .map(|dir| dir.join(name))
        .find(|candidate| candidate.is_file())
}
