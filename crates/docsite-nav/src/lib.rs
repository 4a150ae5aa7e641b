//! Sidebar resolution for docsite.
//!
//! Resolves the auto-discovery directives of a site descriptor by walking the
//! content directory, reading page frontmatter, and producing ordered sidebar
//! entries whose routes carry the site's base path.

pub mod frontmatter;
pub mod page;
pub mod resolver;

pub use frontmatter::{Frontmatter, FrontmatterError, SidebarMeta};
pub use page::{path_slug, slugify, PageInfo};
pub use resolver::{resolve_sidebar, NavError, SidebarEntry, SidebarResolver};
