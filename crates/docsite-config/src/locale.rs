//! Locale definitions.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

/// Locale key whose pages are served without a locale prefix.
pub const ROOT_LOCALE: &str = "root";

/// A language the documentation is available in.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LocaleInfo {
    /// Human-readable language name, shown in the language picker
    pub label: String,

    /// BCP-47 language tag (e.g. `zh-TW`)
    pub lang: String,

    /// Writing direction
    #[serde(default)]
    pub dir: TextDirection,
}

impl LocaleInfo {
    pub fn new(label: impl Into<String>, lang: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            lang: lang.into(),
            dir: TextDirection::default(),
        }
    }

    pub fn with_dir(mut self, dir: TextDirection) -> Self {
        self.dir = dir;
        self
    }
}

/// Writing direction of a locale.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TextDirection {
    #[default]
    Ltr,
    Rtl,
}

// language[-extlang][-script][-region][-variant]*[-extension]*[-privateuse]
static LANG_TAG_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^(?:[A-Za-z]{2,3}(?:-[A-Za-z]{3}){0,3}|[A-Za-z]{4,8})(?:-[A-Za-z]{4})?(?:-(?:[A-Za-z]{2}|[0-9]{3}))?(?:-(?:[A-Za-z0-9]{5,8}|[0-9][A-Za-z0-9]{3}))*(?:-[0-9A-WY-Za-wy-z](?:-[A-Za-z0-9]{2,8})+)*(?:-[xX](?:-[A-Za-z0-9]{1,8})+)?$",
    )
    .expect("Invalid language tag regex")
});

static LOCALE_KEY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9_-]*$").expect("Invalid locale key regex")
});

/// Check that `tag` is a well-formed BCP-47 language tag.
pub fn is_valid_lang_tag(tag: &str) -> bool {
    LANG_TAG_RE.is_match(tag)
}

/// Check that `key` can be used as a locale route prefix.
pub fn is_valid_locale_key(key: &str) -> bool {
    LOCALE_KEY_RE.is_match(key)
}

/// Route prefix for a locale key (`None` for the root locale).
pub fn route_prefix(key: &str) -> Option<&str> {
    if key == ROOT_LOCALE {
        None
    } else {
        Some(key)
    }
}
