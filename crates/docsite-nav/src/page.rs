//! Documentation page discovery data.

use std::path::{Path, PathBuf};

use pulldown_cmark::{Event, Parser, Tag, TagEnd};

use crate::frontmatter::{extract_frontmatter, Frontmatter, FrontmatterError};

/// File extensions treated as documentation pages.
pub const PAGE_EXTENSIONS: &[&str] = &["md", "mdx"];

/// A page found while resolving an auto-generated sidebar group.
#[derive(Debug, Clone)]
pub struct PageInfo {
    /// Path relative to the locale content root
    pub relative_path: PathBuf,

    /// Parsed frontmatter (if present)
    pub frontmatter: Option<Frontmatter>,

    /// First heading in the markdown body
    pub heading: Option<String>,
}

impl PageInfo {
    /// Parse page source.
    pub fn parse(relative_path: PathBuf, source: &str) -> Result<Self, FrontmatterError> {
        let (frontmatter, content) = extract_frontmatter(source)?;

        Ok(Self {
            relative_path,
            frontmatter,
            heading: first_heading(content),
        })
    }

    /// Sidebar label: `sidebar.label`, then `title`, then the first heading, then the file stem.
    pub fn label(&self) -> String {
        let fm = self.frontmatter.as_ref();

        fm.and_then(|f| f.sidebar.label.clone())
            .or_else(|| fm.and_then(|f| f.title.clone()))
            .or_else(|| self.heading.clone())
            .unwrap_or_else(|| {
                self.relative_path
                    .file_stem()
                    .and_then(|s| s.to_str())
                    .unwrap_or("Untitled")
                    .to_string()
            })
    }

    /// Explicit sidebar order, if any.
    pub fn order(&self) -> Option<i32> {
        self.frontmatter.as_ref().and_then(|f| f.sidebar.order)
    }

    /// Whether the page should be left out of the sidebar.
    pub fn is_hidden(&self) -> bool {
        self.frontmatter
            .as_ref()
            .is_some_and(|f| f.sidebar.hidden || f.draft)
    }

    /// URL slug, without base path or locale prefix.
    pub fn slug(&self) -> String {
        if let Some(slug) = self.frontmatter.as_ref().and_then(|f| f.slug.as_deref()) {
            return slug.trim_matches('/').to_string();
        }
        path_slug(&self.relative_path)
    }
}

/// Whether `path` has a documentation page extension.
pub fn is_page(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|ext| PAGE_EXTENSIONS.contains(&ext))
}

/// Slug for a page path: each segment slugified, `index` files mapped to their directory.
///
/// `guides/Getting Started.md` becomes `guides/getting-started`;
/// `guides/index.md` becomes `guides`.
pub fn path_slug(relative: &Path) -> String {
    let mut segments: Vec<String> = relative
        .parent()
        .map(|p| {
            p.components()
                .filter_map(|c| c.as_os_str().to_str())
                .map(slugify)
                .filter(|s| !s.is_empty())
                .collect()
        })
        .unwrap_or_default();

    let stem = relative
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("index");
    if stem != "index" {
        segments.push(slugify(stem));
    }

    segments.join("/")
}

/// Text of the first heading in a markdown body.
fn first_heading(content: &str) -> Option<String> {
    let mut current: Option<String> = None;

    for event in Parser::new(content) {
        match event {
            Event::Start(Tag::Heading { .. }) => {
                current = Some(String::new());
            }
            Event::Text(text) | Event::Code(text) => {
                if let Some(heading) = current.as_mut() {
                    heading.push_str(&text);
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(heading) = current.take() {
                    let heading = heading.trim().to_string();
                    if !heading.is_empty() {
                        return Some(heading);
                    }
                }
            }
            _ => {}
        }
    }

    None
}

/// Convert text to a URL-safe slug.
pub fn slugify(text: &str) -> String {
    text.to_lowercase()
        .chars()
        .map(|c| {
            if c.is_alphanumeric() {
                c
            } else if c.is_whitespace() || c == '-' || c == '_' || c == '.' {
                '-'
            } else {
                '\0'
            }
        })
        .filter(|c| *c != '\0')
        .collect::<String>()
        .split('-')
        .filter(|s| !s.is_empty())
        .collect::<Vec<_>>()
        .join("-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn label_prefers_sidebar_label() {
        let page = PageInfo::parse(
            PathBuf::from("resources/links.md"),
            "---\ntitle: Useful Links\nsidebar:\n  label: Links\n---\n# Heading",
        )
        .unwrap();

        assert_eq!(page.label(), "Links");
    }

    #[test]
    fn label_falls_back_to_title_heading_and_stem() {
        let titled =
            PageInfo::parse(PathBuf::from("a.md"), "---\ntitle: Title\n---\n# Heading").unwrap();
        let headed = PageInfo::parse(PathBuf::from("a.md"), "Intro\n\n## The `Widget` tree").unwrap();
        let bare = PageInfo::parse(PathBuf::from("dart-basics.md"), "No headings.").unwrap();

        assert_eq!(titled.label(), "Title");
        assert_eq!(headed.label(), "The Widget tree");
        assert_eq!(bare.label(), "dart-basics");
    }

    #[test]
    fn hidden_and_draft_pages() {
        let hidden =
            PageInfo::parse(PathBuf::from("a.md"), "---\nsidebar:\n  hidden: true\n---\n").unwrap();
        let draft = PageInfo::parse(PathBuf::from("b.md"), "---\ndraft: true\n---\n").unwrap();
        let plain = PageInfo::parse(PathBuf::from("c.md"), "# C").unwrap();

        assert!(hidden.is_hidden());
        assert!(draft.is_hidden());
        assert!(!plain.is_hidden());
    }

    #[test]
    fn slugs_from_paths() {
        assert_eq!(path_slug(Path::new("index.md")), "");
        assert_eq!(path_slug(Path::new("guides/index.mdx")), "guides");
        assert_eq!(path_slug(Path::new("guides/Getting Started.md")), "guides/getting-started");
        assert_eq!(path_slug(Path::new("基礎/狀態管理.md")), "基礎/狀態管理");
    }

    #[test]
    fn frontmatter_slug_overrides_path() {
        let page =
            PageInfo::parse(PathBuf::from("guides/a.md"), "---\nslug: /custom/path/\n---\n").unwrap();

        assert_eq!(page.slug(), "custom/path");
    }

    #[test]
    fn page_extensions() {
        assert!(is_page(Path::new("a.md")));
        assert!(is_page(Path::new("a.mdx")));
        assert!(!is_page(Path::new("a.png")));
        assert!(!is_page(Path::new("README")));
    }

    #[test]
    fn slugify_works() {
        assert_eq!(slugify("Hello World"), "hello-world");
        assert_eq!(slugify("API Reference"), "api-reference");
        assert_eq!(slugify("Button (Primary)"), "button-primary");
        assert_eq!(slugify("  Multiple   Spaces  "), "multiple-spaces");
        assert_eq!(slugify("v1.2_notes"), "v1-2-notes");
    }
}
