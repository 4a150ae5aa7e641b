//! Site descriptor for docsite documentation builds.
//!
//! This crate defines the typed, validated value that describes a documentation
//! site: its origin URL, base path, and the documentation theme integration
//! (title, logo, locales, social links and sidebar). A descriptor is built once,
//! either in code through [`SiteDescriptorBuilder`] or from a `docsite.toml`
//! file through [`load_config`], and then handed to whatever consumes it.

pub mod builder;
pub mod descriptor;
pub mod error;
pub mod load;
pub mod locale;
pub mod sidebar;
pub mod social;
pub mod theme;

mod validate;

pub use builder::{build, SiteDescriptorBuilder};
pub use descriptor::{Integration, SiteDescriptor};
pub use error::{ConfigError, Problem};
pub use load::{find_config_file, load_config, parse_config, ConfigFile, CONFIG_FILE_NAME};
pub use locale::{LocaleInfo, TextDirection, ROOT_LOCALE};
pub use sidebar::{AutoGenerate, PageRef, SidebarGroup, SidebarSource};
pub use social::SocialLink;
pub use theme::{Logo, ThemeIntegration, DEFAULT_CONTENT_DIR};
