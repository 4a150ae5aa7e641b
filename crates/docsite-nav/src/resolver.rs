//! Sidebar resolution.
//!
//! Turns the descriptor's sidebar groups into concrete navigation entries:
//! explicit groups are passed through with base-path-prefixed links, and
//! auto-generated groups are discovered from the content directory.

use std::cmp::Ordering;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Serialize;
use walkdir::WalkDir;

use docsite_config::locale::route_prefix;
use docsite_config::{PageRef, SidebarGroup, SidebarSource, SiteDescriptor};

use crate::frontmatter::FrontmatterError;
use crate::page::{is_page, PageInfo};

/// A resolved sidebar entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SidebarEntry {
    /// A page or external link
    Link {
        label: String,
        href: String,
        #[serde(skip_serializing_if = "is_false")]
        external: bool,
    },

    /// A labelled section containing more entries
    Group {
        label: String,
        #[serde(skip_serializing_if = "is_false")]
        collapsed: bool,
        entries: Vec<SidebarEntry>,
    },
}

impl SidebarEntry {
    pub fn label(&self) -> &str {
        match self {
            Self::Link { label, .. } | Self::Group { label, .. } => label,
        }
    }

    /// Number of links in this entry and all nested groups.
    pub fn link_count(&self) -> usize {
        match self {
            Self::Link { .. } => 1,
            Self::Group { entries, .. } => entries.iter().map(Self::link_count).sum(),
        }
    }
}

/// Errors that can occur while resolving the sidebar.
#[derive(Debug, thiserror::Error)]
pub enum NavError {
    #[error("Site descriptor has no documentation theme integration")]
    MissingTheme,

    #[error("Sidebar directory not found: {0}")]
    DirectoryNotFound(String),

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Invalid frontmatter in {path}: {source}")]
    Frontmatter {
        path: String,
        #[source]
        source: FrontmatterError,
    },
}

/// Resolves sidebar groups for the default locale of a site.
#[derive(Debug)]
pub struct SidebarResolver<'a> {
    site: &'a SiteDescriptor,
    groups: &'a [SidebarGroup],
    locale_root: PathBuf,
    locale_prefix: Option<&'a str>,
}

impl<'a> SidebarResolver<'a> {
    /// Create a resolver. Content paths resolve against `project_root`.
    pub fn new(site: &'a SiteDescriptor, project_root: &Path) -> Result<Self, NavError> {
        let theme = site.theme().ok_or(NavError::MissingTheme)?;
        let locale_prefix = route_prefix(&theme.default_locale);

        let mut locale_root = project_root.join(&theme.content_dir);
        if let Some(prefix) = locale_prefix {
            locale_root.push(prefix);
        }

        Ok(Self {
            site,
            groups: &theme.sidebar,
            locale_root,
            locale_prefix,
        })
    }

    /// Directory that page slugs are relative to.
    pub fn locale_root(&self) -> &Path {
        &self.locale_root
    }

    /// Resolve every sidebar group, keeping their configured order.
    pub fn resolve(&self) -> Result<Vec<SidebarEntry>, NavError> {
        self.groups.iter().map(|g| self.resolve_group(g)).collect()
    }

    fn resolve_group(&self, group: &SidebarGroup) -> Result<SidebarEntry, NavError> {
        let entries = match &group.source {
            SidebarSource::Explicit(items) => items.iter().map(|i| self.page_link(i)).collect(),
            SidebarSource::AutoDiscover(directive) => {
                let dir = self.locale_root.join(&directive.directory);
                if !dir.is_dir() {
                    return Err(NavError::DirectoryNotFound(dir.display().to_string()));
                }
                let entries = self.discover(&dir)?;
                tracing::debug!(
                    "Discovered {} entries for '{}' in {}",
                    entries.len(),
                    group.label,
                    dir.display()
                );
                entries
            }
        };

        Ok(SidebarEntry::Group {
            label: group.label.clone(),
            collapsed: group.collapsed,
            entries,
        })
    }

    fn page_link(&self, item: &PageRef) -> SidebarEntry {
        if item.is_internal() {
            SidebarEntry::Link {
                label: item.label.clone(),
                href: self.site.link(&item.link),
                external: false,
            }
        } else {
            SidebarEntry::Link {
                label: item.label.clone(),
                href: item.link.clone(),
                external: true,
            }
        }
    }

    /// Discover pages and subdirectories directly inside `dir`.
    fn discover(&self, dir: &Path) -> Result<Vec<SidebarEntry>, NavError> {
        let mut found: Vec<(SortKey, SidebarEntry)> = Vec::new();

        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.loop_ancestor().is_some() => {
                    tracing::warn!("Skipping symlink loop: {}", e);
                    continue;
                }
                Err(e) => {
                    return Err(NavError::Read {
                        path: e.path().unwrap_or(dir).display().to_string(),
                        message: e.to_string(),
                    })
                }
            };
            let path = entry.path();
            let name = entry.file_name().to_string_lossy().to_string();

            if name.starts_with('.') || name.starts_with('_') {
                continue;
            }

            if path.is_dir() {
                let entries = self.discover(path)?;
                if entries.is_empty() {
                    continue;
                }
                found.push((
                    SortKey { order: None, name: name.clone() },
                    SidebarEntry::Group {
                        label: name,
                        collapsed: false,
                        entries,
                    },
                ));
                continue;
            }

            if !is_page(path) {
                continue;
            }

            let page = self.read_page(path)?;
            if page.is_hidden() {
                tracing::debug!("Skipping hidden page {}", path.display());
                continue;
            }

            let prefixed_slug = match self.locale_prefix {
                Some(prefix) => format!("{}/{}", prefix, page.slug()),
                None => page.slug(),
            };

            let stem = path
                .file_stem()
                .map(|s| s.to_string_lossy().to_string())
                .unwrap_or(name);

            found.push((
                SortKey {
                    order: page.order(),
                    name: stem,
                },
                SidebarEntry::Link {
                    label: page.label(),
                    href: self.site.route(&prefixed_slug),
                    external: false,
                },
            ));
        }

        found.sort_by(|(a, _), (b, _)| a.cmp(b));
        Ok(found.into_iter().map(|(_, entry)| entry).collect())
    }

    fn read_page(&self, path: &Path) -> Result<PageInfo, NavError> {
        let source = fs::read_to_string(path).map_err(|e| NavError::Read {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let relative = path.strip_prefix(&self.locale_root).unwrap_or(path).to_path_buf();

        PageInfo::parse(relative, &source).map_err(|source| NavError::Frontmatter {
            path: path.display().to_string(),
            source,
        })
    }
}

/// Entries with an explicit order come first (ascending), then by name.
/// Pages are named by file stem, directories by their full name.
#[derive(Debug, PartialEq, Eq)]
struct SortKey {
    order: Option<i32>,
    name: String,
}

impl Ord for SortKey {
    fn cmp(&self, other: &Self) -> Ordering {
        let order = match (self.order, other.order) {
            (Some(a), Some(b)) => a.cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        };
        order.then_with(|| self.name.cmp(&other.name))
    }
}

impl PartialOrd for SortKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Resolve the sidebar of `site`, with content paths relative to `project_root`.
pub fn resolve_sidebar(
    site: &SiteDescriptor,
    project_root: &Path,
) -> Result<Vec<SidebarEntry>, NavError> {
    SidebarResolver::new(site, project_root)?.resolve()
}

#[cfg(test)]
mod tests {
    use super::*;
    use docsite_config::{LocaleInfo, SiteDescriptorBuilder, ThemeIntegration, Integration};
    use pretty_assertions::assert_eq;
    use tempfile::{tempdir, TempDir};

    fn write(root: &Path, relative: &str, content: &str) {
        let path = root.join(relative);
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, content).unwrap();
    }

    fn link(label: &str, href: &str) -> SidebarEntry {
        SidebarEntry::Link {
            label: label.to_string(),
            href: href.to_string(),
            external: false,
        }
    }

    fn group(label: &str, entries: Vec<SidebarEntry>) -> SidebarEntry {
        SidebarEntry::Group {
            label: label.to_string(),
            collapsed: false,
            entries,
        }
    }

    fn site(root: &TempDir, theme: ThemeIntegration) -> SiteDescriptor {
        SiteDescriptorBuilder::new("https://henryypin.github.io", "/my-flutter-notes")
            .project_root(root.path())
            .integration(Integration::DocsTheme(theme))
            .build()
            .unwrap()
    }

    fn notes_theme() -> ThemeIntegration {
        ThemeIntegration::new("Flutter 筆記")
            .with_locale("root", LocaleInfo::new("繁體中文", "zh-TW"))
            .with_sidebar_group(SidebarGroup::autogenerate("資源", "resources"))
            .with_sidebar_group(SidebarGroup::autogenerate("基礎", "foundations"))
    }

    #[test]
    fn resolves_autogenerated_groups_in_order() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("src/content/docs");
        write(&docs, "resources/links.md", "---\ntitle: 連結\n---\n");
        write(&docs, "foundations/widgets.md", "---\ntitle: Widgets\nsidebar:\n  order: 2\n---\n");
        write(&docs, "foundations/dart.md", "---\ntitle: Dart\nsidebar:\n  order: 1\n---\n");
        write(&docs, "foundations/appendix.md", "# Appendix");

        let site = site(&temp, notes_theme());
        let sidebar = resolve_sidebar(&site, temp.path()).unwrap();

        assert_eq!(
            sidebar,
            vec![
                group("資源", vec![link("連結", "/my-flutter-notes/resources/links/")]),
                group(
                    "基礎",
                    vec![
                        link("Dart", "/my-flutter-notes/foundations/dart/"),
                        link("Widgets", "/my-flutter-notes/foundations/widgets/"),
                        link("Appendix", "/my-flutter-notes/foundations/appendix/"),
                    ]
                ),
            ]
        );
    }

    #[test]
    fn nests_subdirectories_and_skips_hidden() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("src/content/docs");
        write(&docs, "resources/index.md", "---\ntitle: Overview\n---\n");
        write(&docs, "resources/tools/devtools.md", "# DevTools");
        write(&docs, "resources/secret.md", "---\nsidebar:\n  hidden: true\n---\n");
        write(&docs, "resources/wip.mdx", "---\ndraft: true\n---\n");
        write(&docs, "resources/logo.png", "png");
        write(&docs, "resources/empty/notes.txt", "not a page");
        write(&docs, "foundations/a.md", "# A");

        let site = site(&temp, notes_theme());
        let sidebar = resolve_sidebar(&site, temp.path()).unwrap();

        assert_eq!(
            sidebar[0],
            group(
                "資源",
                vec![
                    link("Overview", "/my-flutter-notes/resources/"),
                    group("tools", vec![link("DevTools", "/my-flutter-notes/resources/tools/devtools/")]),
                ]
            )
        );
    }

    #[test]
    fn explicit_groups_prefix_internal_links() {
        let temp = tempdir().unwrap();
        let theme = ThemeIntegration::new("Docs")
            .with_locale("root", LocaleInfo::new("English", "en"))
            .with_sidebar_group(SidebarGroup::explicit(
                "Start",
                vec![
                    PageRef::new("Home", "/"),
                    PageRef::new("Flutter", "https://flutter.dev"),
                ],
            ));

        let site = site(&temp, theme);
        let sidebar = resolve_sidebar(&site, temp.path()).unwrap();

        assert_eq!(
            sidebar,
            vec![group(
                "Start",
                vec![
                    link("Home", "/my-flutter-notes/"),
                    SidebarEntry::Link {
                        label: "Flutter".to_string(),
                        href: "https://flutter.dev".to_string(),
                        external: true,
                    },
                ]
            )]
        );
    }

    #[test]
    fn non_root_default_locale_prefixes_routes() {
        let temp = tempdir().unwrap();
        write(&temp.path().join("docs/zh-tw"), "guides/intro.md", "# 介紹");
        let theme = ThemeIntegration::new("Docs")
            .with_content_dir("docs")
            .with_default_locale("zh-tw")
            .with_locale("zh-tw", LocaleInfo::new("繁體中文", "zh-TW"))
            .with_sidebar_group(SidebarGroup::autogenerate("指南", "guides"));

        let site = site(&temp, theme);
        let sidebar = resolve_sidebar(&site, temp.path()).unwrap();

        assert_eq!(
            sidebar,
            vec![group("指南", vec![link("介紹", "/my-flutter-notes/zh-tw/guides/intro/")])]
        );
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = tempdir().unwrap();
        write(&temp.path().join("src/content/docs"), "resources/a.md", "# A");

        let site = site(&temp, notes_theme());
        let err = resolve_sidebar(&site, temp.path()).unwrap_err();

        assert!(matches!(err, NavError::DirectoryNotFound(ref dir) if dir.ends_with("foundations")));
    }

    #[test]
    fn bad_frontmatter_reports_path() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("src/content/docs");
        write(&docs, "resources/broken.md", "---\ntitle: [oops\n---\n");
        write(&docs, "foundations/a.md", "# A");

        let site = site(&temp, notes_theme());
        let err = resolve_sidebar(&site, temp.path()).unwrap_err();

        match err {
            NavError::Frontmatter { path, .. } => assert!(path.ends_with("broken.md")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unordered_pages_sort_by_stem() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("src/content/docs");
        write(&docs, "resources/a-b.md", "# A-B");
        write(&docs, "resources/a.md", "# A");
        write(&docs, "resources/b.mdx", "# B");
        write(&docs, "foundations/a.md", "# A");

        let site = site(&temp, notes_theme());
        let sidebar = resolve_sidebar(&site, temp.path()).unwrap();

        let SidebarEntry::Group { entries, .. } = &sidebar[0] else {
            panic!("expected a group");
        };
        let labels: Vec<&str> = entries.iter().map(SidebarEntry::label).collect();
        assert_eq!(labels, vec!["A", "A-B", "B"]);
    }

    #[cfg(unix)]
    #[test]
    fn dangling_page_link_is_a_read_error() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("src/content/docs");
        write(&docs, "resources/a.md", "# A");
        write(&docs, "foundations/a.md", "# A");
        std::os::unix::fs::symlink(
            docs.join("resources/missing.md"),
            docs.join("resources/broken.md"),
        )
        .unwrap();

        let site = site(&temp, notes_theme());
        let err = resolve_sidebar(&site, temp.path()).unwrap_err();

        match err {
            NavError::Read { path, .. } => assert!(path.ends_with("broken.md")),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[cfg(unix)]
    #[test]
    fn symlink_loops_are_skipped() {
        let temp = tempdir().unwrap();
        let docs = temp.path().join("src/content/docs");
        write(&docs, "resources/a.md", "# A");
        write(&docs, "foundations/a.md", "# A");
        std::os::unix::fs::symlink(docs.join("resources"), docs.join("resources/again")).unwrap();

        let site = site(&temp, notes_theme());
        let sidebar = resolve_sidebar(&site, temp.path()).unwrap();

        assert_eq!(
            sidebar[0],
            group("資源", vec![link("A", "/my-flutter-notes/resources/a/")])
        );
    }

    #[test]
    fn serializes_entries() {
        let entry = group("Start", vec![link("Home", "/docs/")]);

        assert_eq!(
            serde_json::to_value(&entry).unwrap(),
            serde_json::json!({
                "type": "group",
                "label": "Start",
                "entries": [{ "type": "link", "label": "Home", "href": "/docs/" }]
            })
        );
        assert_eq!(entry.link_count(), 1);
    }
}
