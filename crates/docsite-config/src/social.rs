//! Social links shown in the site header.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// A link to an external profile or repository.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SocialLink {
    /// Icon identifier understood by the theme (e.g. `github`)
    pub icon: String,

    /// Accessible label
    pub label: String,

    /// Absolute target URL
    pub href: String,
}

impl SocialLink {
    pub fn new(icon: impl Into<String>, label: impl Into<String>, href: impl Into<String>) -> Self {
        Self {
            icon: icon.into(),
            label: label.into(),
            href: href.into(),
        }
    }
}

static ICON_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-z][A-Za-z0-9.-]*$").expect("Invalid icon id regex"));

/// Check that `icon` looks like a theme icon identifier.
pub fn is_valid_icon(icon: &str) -> bool {
    ICON_RE.is_match(icon)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn icon_ids() {
        assert!(is_valid_icon("github"));
        assert!(is_valid_icon("x.com"));
        assert!(is_valid_icon("blueSky"));
        assert!(!is_valid_icon(""));
        assert!(!is_valid_icon("GitHub"));
        assert!(!is_valid_icon("git hub"));
    }
}
