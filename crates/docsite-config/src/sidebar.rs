//! Sidebar navigation groups.
//!
//! A group either lists its pages explicitly or asks the resolver to discover
//! them from a content directory:
//!
//! ```toml
//! [[theme.sidebar]]
//! label = "Guides"
//! items = [{ label = "Intro", link = "/guides/intro/" }]
//!
//! [[theme.sidebar]]
//! label = "Reference"
//! autogenerate = { directory = "reference" }
//! ```

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// One top-level navigation section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSidebarGroup")]
pub struct SidebarGroup {
    /// Section heading
    pub label: String,

    /// Where the section's pages come from
    #[serde(flatten)]
    pub source: SidebarSource,

    /// Start collapsed
    #[serde(default, skip_serializing_if = "is_false")]
    pub collapsed: bool,
}

impl SidebarGroup {
    /// A group with an explicit, ordered page list.
    pub fn explicit(label: impl Into<String>, items: Vec<PageRef>) -> Self {
        Self {
            label: label.into(),
            source: SidebarSource::Explicit(items),
            collapsed: false,
        }
    }

    /// A group whose pages are discovered from `directory`.
    pub fn autogenerate(label: impl Into<String>, directory: impl Into<PathBuf>) -> Self {
        Self {
            label: label.into(),
            source: SidebarSource::AutoDiscover(AutoGenerate {
                directory: directory.into(),
            }),
            collapsed: false,
        }
    }

    pub fn collapsed(mut self, collapsed: bool) -> Self {
        self.collapsed = collapsed;
        self
    }
}

/// A group as written in the config file, before its source is checked.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSidebarGroup {
    label: String,
    #[serde(default)]
    items: Option<Vec<PageRef>>,
    #[serde(default)]
    autogenerate: Option<AutoGenerate>,
    #[serde(default)]
    collapsed: bool,
}

impl TryFrom<RawSidebarGroup> for SidebarGroup {
    type Error = String;

    fn try_from(raw: RawSidebarGroup) -> Result<Self, Self::Error> {
        let source = match (raw.items, raw.autogenerate) {
            (Some(items), None) => SidebarSource::Explicit(items),
            (None, Some(directive)) => SidebarSource::AutoDiscover(directive),
            (Some(_), Some(_)) => {
                return Err(format!(
                    "sidebar group '{}' sets both `items` and `autogenerate`",
                    raw.label
                ))
            }
            (None, None) => {
                return Err(format!(
                    "sidebar group '{}' needs either `items` or `autogenerate`",
                    raw.label
                ))
            }
        };

        Ok(Self {
            label: raw.label,
            source,
            collapsed: raw.collapsed,
        })
    }
}

/// Source of a sidebar group's entries.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum SidebarSource {
    /// Pages listed in order
    #[serde(rename = "items")]
    Explicit(Vec<PageRef>),

    /// Pages discovered from a content directory
    #[serde(rename = "autogenerate")]
    AutoDiscover(AutoGenerate),
}

/// Auto-generation directive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AutoGenerate {
    /// Directory relative to the locale's content root
    pub directory: PathBuf,
}

/// A single page reference in an explicit group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PageRef {
    pub label: String,

    /// Site-internal path starting with `/`, or an absolute external URL
    pub link: String,
}

impl PageRef {
    pub fn new(label: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            link: link.into(),
        }
    }

    /// Whether the link points inside the site.
    pub fn is_internal(&self) -> bool {
        self.link.starts_with('/')
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}
