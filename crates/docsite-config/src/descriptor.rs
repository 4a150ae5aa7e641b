//! The validated site descriptor.

use serde::Serialize;
use url::Url;

use crate::theme::ThemeIntegration;

/// Complete, validated description of a documentation site build.
///
/// Only [`SiteDescriptorBuilder`](crate::SiteDescriptorBuilder) can create one,
/// so every descriptor in circulation has passed validation. Fields are read
/// through accessors; there is no way to mutate a descriptor after it is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SiteDescriptor {
    site: Url,
    base_path: String,
    integrations: Vec<Integration>,
}

/// A plugin wired into the site build.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum Integration {
    /// Documentation theme
    DocsTheme(ThemeIntegration),
}

impl Integration {
    pub fn as_theme(&self) -> Option<&ThemeIntegration> {
        match self {
            Self::DocsTheme(theme) => Some(theme),
        }
    }
}

impl SiteDescriptor {
    pub(crate) fn new(site: Url, base_path: String, integrations: Vec<Integration>) -> Self {
        Self {
            site,
            base_path,
            integrations,
        }
    }

    /// Absolute origin URL of the deployed site.
    pub fn site(&self) -> &Url {
        &self.site
    }

    /// URL prefix of every generated route.
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    pub fn integrations(&self) -> &[Integration] {
        &self.integrations
    }

    /// The first documentation theme integration.
    pub fn theme(&self) -> Option<&ThemeIntegration> {
        self.integrations.iter().find_map(Integration::as_theme)
    }

    /// Route for a page slug, prefixed with the base path and ending in `/`.
    ///
    /// `route("guides/intro")` on base `/docs` gives `/docs/guides/intro/`;
    /// an empty slug gives the site root under the base path.
    pub fn route(&self, slug: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        let slug = slug.trim_matches('/');

        if slug.is_empty() {
            format!("{}/", base)
        } else {
            format!("{}/{}/", base, slug)
        }
    }

    /// Prefix a site-internal link (starting with `/`) with the base path.
    pub fn link(&self, path: &str) -> String {
        let base = self.base_path.trim_end_matches('/');
        format!("{}{}", base, path)
    }

    /// Absolute URL of a page slug on the deployed site.
    pub fn canonical_url(&self, slug: &str) -> Result<Url, url::ParseError> {
        self.site.join(&self.route(slug))
    }
}
