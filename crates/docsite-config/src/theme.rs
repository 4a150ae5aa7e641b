//! Documentation theme integration settings.

use std::collections::BTreeMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::locale::{LocaleInfo, ROOT_LOCALE};
use crate::sidebar::SidebarGroup;
use crate::social::SocialLink;

/// Default directory holding documentation pages, relative to the project root.
pub const DEFAULT_CONTENT_DIR: &str = "src/content/docs";

/// Sub-configuration of the documentation theme: title, locales and navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ThemeIntegration {
    /// Site display name
    pub title: String,

    /// Logo shown in the header
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub logo: Option<Logo>,

    /// Key into `locales` used when no locale is selected
    #[serde(default = "default_locale_key")]
    pub default_locale: String,

    /// Available languages by locale key
    #[serde(default)]
    pub locales: BTreeMap<String, LocaleInfo>,

    /// Header social links, in display order
    #[serde(default)]
    pub social: Vec<SocialLink>,

    /// Sidebar groups, in display order
    #[serde(default)]
    pub sidebar: Vec<SidebarGroup>,

    /// Directory containing documentation pages
    #[serde(default = "default_content_dir")]
    pub content_dir: PathBuf,
}

/// Header logo.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Logo {
    /// Image path relative to the project root
    pub src: PathBuf,

    #[serde(default)]
    pub alt: String,

    /// Hide the text title next to the logo
    #[serde(default)]
    pub replaces_title: bool,
}

impl Logo {
    pub fn new(src: impl Into<PathBuf>) -> Self {
        Self {
            src: src.into(),
            alt: String::new(),
            replaces_title: false,
        }
    }
}

impl ThemeIntegration {
    /// Create a theme with only a title set. Locales must still be added.
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            logo: None,
            default_locale: default_locale_key(),
            locales: BTreeMap::new(),
            social: Vec::new(),
            sidebar: Vec::new(),
            content_dir: default_content_dir(),
        }
    }

    pub fn with_logo(mut self, logo: Logo) -> Self {
        self.logo = Some(logo);
        self
    }

    pub fn with_default_locale(mut self, key: impl Into<String>) -> Self {
        self.default_locale = key.into();
        self
    }

    pub fn with_locale(mut self, key: impl Into<String>, info: LocaleInfo) -> Self {
        self.locales.insert(key.into(), info);
        self
    }

    pub fn with_social(mut self, link: SocialLink) -> Self {
        self.social.push(link);
        self
    }

    pub fn with_sidebar_group(mut self, group: SidebarGroup) -> Self {
        self.sidebar.push(group);
        self
    }

    pub fn with_content_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.content_dir = dir.into();
        self
    }

    /// Locale settings for the default locale, if it is defined.
    pub fn default_locale_info(&self) -> Option<&LocaleInfo> {
        self.locales.get(&self.default_locale)
    }
}

fn default_locale_key() -> String {
    ROOT_LOCALE.to_string()
}

fn default_content_dir() -> PathBuf {
    PathBuf::from(DEFAULT_CONTENT_DIR)
}
