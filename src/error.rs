//! Error types for styled text construction, interpolation and configuration.

use std::path::PathBuf;

/// Errors surfaced by `colorstr` operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Invalid style name(s): {}", .names.join(", "))]
    InvalidStyle { names: Vec<String> },

    #[error(transparent)]
    Format(#[from] FormatError),

    #[error("Unsupported operation: {operation}")]
    UnsupportedOperation { operation: &'static str },

    #[error("Color output was already configured for this process")]
    ColorAlreadyConfigured,

    #[error("Invalid config file {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Failed to read config: {0}")]
    Io(#[from] std::io::Error),
}

impl Error {
    /// Names rejected by the registry, if this is an invalid-style error.
    pub fn invalid_names(&self) -> Option<&[String]> {
        match self {
            Self::InvalidStyle { names } => Some(names),
            _ => None,
        }
    }
}

/// Template substitution failures.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FormatError {
    #[error("Missing positional argument {index}")]
    MissingPositional { index: usize },

    #[error("Missing named argument '{name}'")]
    MissingNamed { name: String },

    #[error("Unmatched '{brace}' at byte {position}")]
    UnmatchedBrace { brace: char, position: usize },

    #[error("Incomplete format specifier at byte {position}")]
    IncompleteSpecifier { position: usize },

    #[error("Unsupported format character '{conversion}' at byte {position}")]
    UnsupportedConversion { conversion: char, position: usize },

    #[error("Not all arguments converted: {unused} left over")]
    UnusedArguments { unused: usize },

    #[error("Cannot switch between automatic and manual field numbering")]
    MixedNumbering,
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
