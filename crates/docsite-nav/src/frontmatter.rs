//! Frontmatter extraction and parsing.

use serde::Deserialize;

/// Parsed frontmatter from a documentation page.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct Frontmatter {
    /// Page title
    pub title: Option<String>,

    /// Page description for SEO
    pub description: Option<String>,

    /// Custom slug override
    pub slug: Option<String>,

    /// Drafts are left out of the sidebar
    pub draft: bool,

    /// Sidebar-specific overrides
    pub sidebar: SidebarMeta,
}

/// Per-page sidebar settings.
#[derive(Debug, Clone, Default, Deserialize, PartialEq)]
#[serde(default)]
pub struct SidebarMeta {
    /// Label to use instead of the title
    pub label: Option<String>,

    /// Order in navigation (lower = first)
    pub order: Option<i32>,

    /// Whether to hide the page from navigation
    pub hidden: bool,
}

/// Extract frontmatter from page source.
///
/// The block opens and closes on lines that are exactly `---`, so a page
/// starting with a `----` thematic break has no frontmatter.
///
/// Returns the parsed frontmatter and the remaining content after the frontmatter block.
pub fn extract_frontmatter(source: &str) -> Result<(Option<Frontmatter>, &str), FrontmatterError> {
    let trimmed = source.trim_start();

    let (opening, after_open) = trimmed.split_once('\n').unwrap_or((trimmed, ""));
    if !is_fence(opening) {
        return Ok((None, source));
    }

    // Find the closing ---
    let mut offset = 0;
    for line in after_open.split_inclusive('\n') {
        if is_fence(line) {
            let yaml_content = after_open[..offset].trim();
            let remaining = &after_open[offset + line.len()..];

            let frontmatter = if yaml_content.is_empty() {
                Frontmatter::default()
            } else {
                serde_yaml::from_str(yaml_content)
                    .map_err(|e| FrontmatterError::InvalidYaml(e.to_string()))?
            };

            return Ok((Some(frontmatter), remaining.trim_start()));
        }
        offset += line.len();
    }

    Err(FrontmatterError::Unclosed)
}

fn is_fence(line: &str) -> bool {
    line.trim_end() == "---"
}

/// Errors that can occur when parsing frontmatter.
#[derive(Debug, thiserror::Error)]
pub enum FrontmatterError {
    #[error("Unclosed frontmatter block - missing closing ---")]
    Unclosed,

    #[error("Invalid YAML in frontmatter: {0}")]
    InvalidYaml(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_valid_frontmatter() {
        let source = r#"---
title: Widget 生命週期
description: StatelessWidget 與 StatefulWidget
sidebar:
  label: 生命週期
  order: 2
---

# Widget 生命週期
"#;

        let (fm, content) = extract_frontmatter(source).unwrap();
        let fm = fm.unwrap();

        assert_eq!(fm.title.as_deref(), Some("Widget 生命週期"));
        assert_eq!(fm.sidebar.label.as_deref(), Some("生命週期"));
        assert_eq!(fm.sidebar.order, Some(2));
        assert!(!fm.sidebar.hidden);
        assert!(content.starts_with("# Widget 生命週期"));
    }

    #[test]
    fn handles_no_frontmatter() {
        let source = "# Just Markdown\n\nNo frontmatter here.";

        let (fm, content) = extract_frontmatter(source).unwrap();

        assert!(fm.is_none());
        assert_eq!(content, source);
    }

    #[test]
    fn empty_block_gives_defaults() {
        let (fm, content) = extract_frontmatter("---\n---\nBody").unwrap();

        assert_eq!(fm, Some(Frontmatter::default()));
        assert_eq!(content, "Body");
    }

    #[test]
    fn errors_on_unclosed_frontmatter() {
        let source = "---\ntitle: Test\n# No closing";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::Unclosed)));
    }

    #[test]
    fn thematic_break_is_not_frontmatter() {
        let source = "----\n\n# Changelog\n\n---\n\nOlder entries.";

        let (fm, content) = extract_frontmatter(source).unwrap();

        assert!(fm.is_none());
        assert_eq!(content, source);
    }

    #[test]
    fn only_an_exact_fence_closes_the_block() {
        let source = "---\ntitle: Rules\n----\n---foo\nBody";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::Unclosed)));
    }

    #[test]
    fn fences_may_carry_trailing_whitespace() {
        let source = "---  \r\ntitle: Spaced\r\n--- \r\nBody";

        let (fm, content) = extract_frontmatter(source).unwrap();

        assert_eq!(fm.unwrap().title.as_deref(), Some("Spaced"));
        assert_eq!(content, "Body");
    }

    #[test]
    fn errors_on_invalid_yaml() {
        let source = "---\ntitle: [invalid yaml\n---\n";

        let result = extract_frontmatter(source);

        assert!(matches!(result, Err(FrontmatterError::InvalidYaml(_))));
    }
}
