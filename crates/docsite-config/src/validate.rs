//! Field-level validation, run once when a descriptor is built.

use std::collections::HashSet;
use std::path::{Component, Path};

use url::Url;

use crate::error::Problems;
use crate::locale::{is_valid_lang_tag, is_valid_locale_key};
use crate::sidebar::{SidebarGroup, SidebarSource};
use crate::social::is_valid_icon;
use crate::theme::{Logo, ThemeIntegration};

const IMAGE_EXTENSIONS: &[&str] = &["svg", "png", "jpg", "jpeg", "webp", "gif", "avif"];

pub(crate) fn site_url(raw: &str, problems: &mut Problems) -> Option<Url> {
    match Url::parse(raw) {
        Ok(url) => {
            if !matches!(url.scheme(), "http" | "https") {
                problems.push(
                    "site",
                    format!("scheme '{}' not supported, must be http or https", url.scheme()),
                );
                return None;
            }
            if url.host_str().is_none() {
                problems.push("site", "URL must have a host");
                return None;
            }
            Some(url)
        }
        Err(e) => {
            problems.push("site", format!("invalid URL '{}': {}", raw, e));
            None
        }
    }
}

pub(crate) fn base_path(raw: &str, problems: &mut Problems) {
    if !raw.starts_with('/') {
        problems.push("base", format!("'{}' must start with '/'", raw));
        return;
    }
    if raw.contains("//") {
        problems.push("base", format!("'{}' contains an empty path segment", raw));
    } else if raw.len() > 1 && raw.ends_with('/') {
        problems.push("base", format!("'{}' must not end with '/'", raw));
    }
    if raw.chars().any(|c| c.is_whitespace() || c == '?' || c == '#') {
        problems.push(
            "base",
            format!("'{}' must be a plain path without spaces, query or fragment", raw),
        );
    }
}

pub(crate) fn theme(theme: &ThemeIntegration, project_root: &Path, problems: &mut Problems) {
    if theme.title.trim().is_empty() {
        problems.push("theme.title", "must not be empty");
    }

    locales(theme, problems);

    if let Some(logo) = &theme.logo {
        logo_asset(logo, project_root, problems);
    }

    if theme.content_dir.as_os_str().is_empty() {
        problems.push("theme.content_dir", "must not be empty");
    } else if !is_relative_inside(&theme.content_dir) {
        problems.push(
            "theme.content_dir",
            format!(
                "'{}' must be a relative path inside the project",
                theme.content_dir.display()
            ),
        );
    }

    for (i, link) in theme.social.iter().enumerate() {
        let field = format!("theme.social[{}]", i);
        if !is_valid_icon(&link.icon) {
            problems.push(
                format!("{}.icon", field),
                format!("'{}' is not a valid icon id", link.icon),
            );
        }
        if link.label.trim().is_empty() {
            problems.push(format!("{}.label", field), "must not be empty");
        }
        if let Err(e) = Url::parse(&link.href) {
            problems.push(
                format!("{}.href", field),
                format!("'{}' is not an absolute URL: {}", link.href, e),
            );
        }
    }

    for (i, group) in theme.sidebar.iter().enumerate() {
        sidebar_group(group, &format!("theme.sidebar[{}]", i), problems);
    }

    for label in duplicate_labels(&theme.sidebar) {
        tracing::warn!("Sidebar label '{}' is used by more than one group", label);
    }
}

/// Labels shared by more than one group, each listed once.
fn duplicate_labels(groups: &[SidebarGroup]) -> Vec<&str> {
    let mut seen = HashSet::new();
    let mut duplicates = Vec::new();
    for group in groups {
        let label = group.label.as_str();
        if !seen.insert(label) && !duplicates.contains(&label) {
            duplicates.push(label);
        }
    }
    duplicates
}

fn locales(theme: &ThemeIntegration, problems: &mut Problems) {
    if theme.locales.is_empty() {
        problems.push("theme.locales", "at least one locale is required");
    }

    for (key, info) in &theme.locales {
        let field = format!("theme.locales.{}", key);
        if !is_valid_locale_key(key) {
            problems.push(field.clone(), "locale key must be a plain path segment");
        }
        if info.label.trim().is_empty() {
            problems.push(format!("{}.label", field), "must not be empty");
        }
        if !is_valid_lang_tag(&info.lang) {
            problems.push(
                format!("{}.lang", field),
                format!("'{}' is not a BCP-47 language tag", info.lang),
            );
        }
    }

    if !theme.locales.contains_key(&theme.default_locale) {
        let defined = theme
            .locales
            .keys()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ");
        problems.push(
            "theme.default_locale",
            format!(
                "'{}' is not defined in theme.locales (defined: [{}])",
                theme.default_locale, defined
            ),
        );
    }
}

fn logo_asset(logo: &Logo, project_root: &Path, problems: &mut Problems) {
    let path = project_root.join(&logo.src);

    if !path.is_file() {
        problems.push(
            "theme.logo.src",
            format!("'{}' does not reference an existing file", logo.src.display()),
        );
        return;
    }

    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();
    if !IMAGE_EXTENSIONS.contains(&ext.as_str()) {
        problems.push(
            "theme.logo.src",
            format!(
                "'{}' is not an image (expected one of: {})",
                logo.src.display(),
                IMAGE_EXTENSIONS.join(", ")
            ),
        );
    }
}

fn sidebar_group(group: &SidebarGroup, field: &str, problems: &mut Problems) {
    if group.label.trim().is_empty() {
        problems.push(format!("{}.label", field), "must not be empty");
    }

    match &group.source {
        SidebarSource::Explicit(items) => {
            if items.is_empty() {
                problems.push(format!("{}.items", field), "page list must not be empty");
            }
            for (i, item) in items.iter().enumerate() {
                let item_field = format!("{}.items[{}]", field, i);
                if item.label.trim().is_empty() {
                    problems.push(format!("{}.label", item_field), "must not be empty");
                }
                if !item.is_internal() && Url::parse(&item.link).is_err() {
                    problems.push(
                        format!("{}.link", item_field),
                        format!(
                            "'{}' must start with '/' or be an absolute URL",
                            item.link
                        ),
                    );
                }
            }
        }
        SidebarSource::AutoDiscover(directive) => {
            let dir_field = format!("{}.autogenerate.directory", field);
            if directive.directory.as_os_str().is_empty() {
                problems.push(dir_field, "must not be empty");
            } else if !is_relative_inside(&directive.directory) {
                problems.push(
                    dir_field,
                    format!(
                        "'{}' must be a relative path inside the content directory",
                        directive.directory.display()
                    ),
                );
            }
        }
    }
}

/// Relative path that cannot climb out of its base directory.
fn is_relative_inside(path: &Path) -> bool {
    path.components()
        .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
