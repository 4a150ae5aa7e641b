//! Site descriptor construction.

use std::path::{Path, PathBuf};

use crate::descriptor::{Integration, SiteDescriptor};
use crate::error::{ConfigError, Problems};
use crate::theme::ThemeIntegration;
use crate::validate;

/// Builds a [`SiteDescriptor`], validating every field once.
///
/// ```
/// use docsite_config::{LocaleInfo, SiteDescriptorBuilder, ThemeIntegration, Integration};
///
/// let theme = ThemeIntegration::new("Docs")
///     .with_locale("root", LocaleInfo::new("English", "en"));
///
/// let site = SiteDescriptorBuilder::new("https://example.org", "/docs")
///     .integration(Integration::DocsTheme(theme))
///     .build()
///     .unwrap();
///
/// assert_eq!(site.base_path(), "/docs");
/// ```
#[derive(Debug, Clone)]
pub struct SiteDescriptorBuilder {
    site_url: String,
    base_path: String,
    project_root: PathBuf,
    integrations: Vec<Integration>,
}

impl SiteDescriptorBuilder {
    pub fn new(site_url: impl Into<String>, base_path: impl Into<String>) -> Self {
        Self {
            site_url: site_url.into(),
            base_path: base_path.into(),
            project_root: PathBuf::from("."),
            integrations: Vec::new(),
        }
    }

    /// Directory that relative asset paths (the logo) are resolved against.
    pub fn project_root(mut self, root: impl AsRef<Path>) -> Self {
        self.project_root = root.as_ref().to_path_buf();
        self
    }

    /// Append an integration. Order is kept.
    pub fn integration(mut self, integration: Integration) -> Self {
        self.integrations.push(integration);
        self
    }

    /// Validate all inputs and produce the descriptor.
    ///
    /// Every problem found is reported in one [`ConfigError::InvalidConfiguration`].
    pub fn build(self) -> Result<SiteDescriptor, ConfigError> {
        let mut problems = Problems::default();

        let site = validate::site_url(&self.site_url, &mut problems);
        validate::base_path(&self.base_path, &mut problems);

        if self.integrations.is_empty() {
            problems.push("integrations", "at least one integration is required");
        }

        let mut themes = 0;
        for integration in &self.integrations {
            match integration {
                Integration::DocsTheme(theme) => {
                    themes += 1;
                    validate::theme(theme, &self.project_root, &mut problems);
                }
            }
        }
        if themes > 1 {
            problems.push(
                "integrations",
                "only one documentation theme integration is allowed",
            );
        }

        // An unusable site URL always leaves a problem behind.
        let site = match site {
            Some(site) if problems.is_empty() => site,
            _ => {
                tracing::debug!("Site descriptor for {} failed validation", self.site_url);
                return Err(problems.into_error());
            }
        };

        tracing::debug!(
            "Built site descriptor for {}{} with {} integration(s)",
            site,
            self.base_path,
            self.integrations.len()
        );

        Ok(SiteDescriptor::new(site, self.base_path, self.integrations))
    }
}

/// Build a descriptor with one documentation theme, resolving assets against
/// the current directory.
pub fn build(
    site_url: &str,
    base_path: &str,
    theme: ThemeIntegration,
) -> Result<SiteDescriptor, ConfigError> {
    SiteDescriptorBuilder::new(site_url, base_path)
        .integration(Integration::DocsTheme(theme))
        .build()
}
