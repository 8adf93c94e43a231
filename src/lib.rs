//! Colored strings for ANSI terminals.
//!
//! [`StyledText`] pairs a plain payload with a flat terminal style. The
//! styling only shows up when the value is rendered for output; equality,
//! ordering, length and search all operate on the plain text.
//!
//! ```
//! use colorstr::StyledText;
//!
//! let warning = StyledText::new("careful", ["yellow", "bold"])?;
//! assert_eq!(warning.render(), "\x1b[33;1mcareful\x1b[0m");
//! assert_eq!(warning, "careful");
//! assert_eq!(warning.len(), 7);
//! # Ok::<(), colorstr::Error>(())
//! ```
//!
//! # Module Structure
//!
//! - [`registry`] - Style names and their SGR codes
//! - [`styled`] - The [`StyledText`] value type
//! - [`interpolate`] - `%`-style and `{}`-style template substitution
//! - [`strip`] - Removal of SGR sequences from arbitrary text
//! - [`config`] - The process-wide color switch and config file
//! - [`cli`] - Command line definitions for the demo binary

pub mod cli;
pub mod config;
pub mod error;
pub mod interpolate;
pub mod registry;
pub mod strip;
pub mod styled;

pub use config::{color_enabled, set_color_enabled, ColorMode, Config};
pub use error::{Error, FormatError, Result};
pub use interpolate::{Arg, Args};
pub use registry::{StyleSpec, RESET};
pub use strip::{get_plain, strip_styling};
pub use styled::StyledText;
