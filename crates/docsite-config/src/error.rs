//! Configuration errors.

use std::fmt;

/// A single validation failure, tied to the field that caused it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Problem {
    /// Dotted path of the offending field, e.g. `theme.sidebar[1].label`
    pub field: String,
    /// What is wrong with the field
    pub message: String,
}

impl Problem {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Errors that can occur while loading or building a site descriptor.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid configuration:\n{}", format_problems(.problems))]
    InvalidConfiguration { problems: Vec<Problem> },

    #[error("Failed to read {path}: {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse {path}: {message}")]
    Parse { path: String, message: String },
}

impl ConfigError {
    /// Validation problems carried by this error (empty for I/O and parse errors).
    pub fn problems(&self) -> &[Problem] {
        match self {
            Self::InvalidConfiguration { problems } => problems,
            _ => &[],
        }
    }

    /// Whether any reported problem concerns `field`.
    pub fn mentions(&self, field: &str) -> bool {
        self.problems().iter().any(|p| p.field == field)
    }
}

fn format_problems(problems: &[Problem]) -> String {
    problems
        .iter()
        .map(|p| format!("  - {}", p))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Collects validation problems so all of them can be reported at once.
#[derive(Debug, Default)]
pub(crate) struct Problems {
    items: Vec<Problem>,
}

impl Problems {
    pub(crate) fn push(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.items.push(Problem::new(field, message));
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub(crate) fn into_error(self) -> ConfigError {
        ConfigError::InvalidConfiguration {
            problems: self.items,
        }
    }
}
