//! Style name registry.
//!
//! Maps case-insensitive style names to SGR (Select Graphic Rendition)
//! attribute codes. The table is fixed at startup:
//! - Attributes: normal (0), bright/bold (1), dark (2), underline (4), reverse (7)
//! - Colors: black..white (30-37)
//! - `f_<color>` foreground aliases share the color code
//! - `b_<color>` background aliases use the color code + 10

use std::collections::HashMap;

use once_cell::sync::Lazy;

use crate::error::{Error, Result};

/// Start of an SGR escape sequence.
pub const ESCAPE_START: &str = "\x1b[";

/// ANSI reset sequence
pub const RESET: &str = "\x1b[0m";

const ATTRIBUTES: [(&str, u8); 6] = [
    ("normal", 0),
    ("bright", 1),
    ("bold", 1),
    ("dark", 2),
    ("underline", 4),
    ("reverse", 7),
];

const COLORS: [(&str, u8); 8] = [
    ("black", 30),
    ("red", 31),
    ("green", 32),
    ("yellow", 33),
    ("blue", 34),
    ("magenta", 35),
    ("cyan", 36),
    ("white", 37),
];

/// Offset from a foreground color code to its background counterpart.
const BACKGROUND_OFFSET: u8 = 10;

/// Every registered name with its code, in listing order.
static ENTRIES: Lazy<Vec<(String, u8)>> = Lazy::new(|| {
    let mut entries: Vec<(String, u8)> = ATTRIBUTES
        .iter()
        .chain(COLORS.iter())
        .map(|&(name, code)| (name.to_string(), code))
        .collect();
    for &(name, code) in COLORS.iter() {
        entries.push((format!("f_{}", name), code));
    }
    for &(name, code) in COLORS.iter() {
        entries.push((format!("b_{}", name), code + BACKGROUND_OFFSET));
    }
    entries
});

static REGISTRY: Lazy<HashMap<&'static str, u8>> = Lazy::new(|| {
    ENTRIES
        .iter()
        .map(|(name, code)| (name.as_str(), *code))
        .collect()
});

/// Look up the SGR code for a style name, ignoring case.
pub fn lookup(name: &str) -> Option<u8> {
    REGISTRY.get(name.to_ascii_lowercase().as_str()).copied()
}

/// All registered names with their codes.
///
/// Base names come first, followed by the `f_` and `b_` aliases.
pub fn names() -> impl Iterator<Item = (&'static str, u8)> {
    ENTRIES.iter().map(|(name, code)| (name.as_str(), *code))
}

/// An ordered, validated list of style names and their resolved codes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct StyleSpec {
    names: Vec<String>,
    codes: Vec<u8>,
}

impl StyleSpec {
    /// Resolve style names against the registry.
    ///
    /// Every unknown name is collected before failing, so the error lists
    /// all of them. Names are stored lowercased.
    pub fn resolve<I, S>(names: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut spec = Self::default();
        let mut invalid = Vec::new();

        for name in names {
            let name = name.as_ref();
            match lookup(name) {
                Some(code) => {
                    spec.names.push(name.to_ascii_lowercase());
                    spec.codes.push(code);
                }
                None => invalid.push(name.to_string()),
            }
        }

        if invalid.is_empty() {
            Ok(spec)
        } else {
            tracing::debug!(names = ?invalid, "rejected unknown style names");
            Err(Error::InvalidStyle { names: invalid })
        }
    }

    /// Resolved style names, lowercased, in request order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Resolved SGR codes, in request order.
    pub fn codes(&self) -> &[u8] {
        &self.codes
    }

    /// Whether no style was requested.
    pub fn is_empty(&self) -> bool {
        self.codes.is_empty()
    }

    /// Build the escape prefix for this style.
    ///
    /// An empty spec renders as the reset token.
    pub fn render_code(&self) -> String {
        if self.codes.is_empty() {
            return RESET.to_string();
        }
        let joined = self
            .codes
            .iter()
            .map(|code| code.to_string())
            .collect::<Vec<_>>()
            .join(";");
        format!("{}{}m", ESCAPE_START, joined)
    }
}
