//! The styled text value type.
//!
//! A [`StyledText`] keeps its plain payload and its style apart. Escape
//! sequences only appear when the value is rendered for output; every
//! predicate and string algorithm sees the plain text.
//!
//! Operations fall into three groups:
//! - Style-preserving: [`StyledText::repeat`], [`StyledText::replace`]
//!   return a new `StyledText` with the same style.
//! - Rendering: concatenation (`+`), [`StyledText::replace_escorted`] and
//!   interpolation produce frozen `String` output containing escape codes.
//! - Plain fallback: comparison, length, search, iteration, trimming, case
//!   folding and splitting work on the payload and return plain results.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::{Add, Mul};
use std::str::{Chars, Lines, Split, SplitWhitespace};

use once_cell::sync::OnceCell;
use unicode_width::UnicodeWidthStr;

use crate::config::color_enabled;
use crate::error::Result;
use crate::interpolate::{self, Arg, Args, Syntax};
use crate::registry::{StyleSpec, RESET};

/// Text decorated with a single flat terminal style.
#[derive(Debug, Clone, Default)]
pub struct StyledText {
    plain: String,
    style: StyleSpec,
    /// Escape prefix, computed on first use
    render_code: OnceCell<String>,
}

impl StyledText {
    /// Create styled text from a payload and style names.
    ///
    /// Fails with [`Error::InvalidStyle`](crate::Error::InvalidStyle) naming
    /// every unknown style; no value is produced in that case.
    pub fn new<I, S>(plain: impl Into<String>, styles: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let style = StyleSpec::resolve(styles)?;
        Ok(Self::with_style(plain, style))
    }

    /// Create styled text from an already resolved style.
    pub fn with_style(plain: impl Into<String>, style: StyleSpec) -> Self {
        Self {
            plain: plain.into(),
            style,
            render_code: OnceCell::new(),
        }
    }

    /// Create text without any style. Renders reset-wrapped.
    pub fn unstyled(plain: impl Into<String>) -> Self {
        Self::with_style(plain, StyleSpec::default())
    }

    /// The stored payload, exactly as given at construction.
    pub fn plain(&self) -> &str {
        &self.plain
    }

    /// Consume the value, returning its payload.
    pub fn into_plain(self) -> String {
        self.plain
    }

    /// The resolved style.
    pub fn style(&self) -> &StyleSpec {
        &self.style
    }

    /// Escape prefix for this value's style.
    pub fn render_code(&self) -> &str {
        self.render_code.get_or_init(|| {
            let code = self.style.render_code();
            tracing::trace!(codes = ?self.style.codes(), "computed render code");
            code
        })
    }

    /// Render for terminal output.
    ///
    /// Returns `render_code + plain + RESET`, or the bare payload when
    /// color output is disabled for the process.
    pub fn render(&self) -> String {
        if !color_enabled() {
            return self.plain.clone();
        }
        format!("{}{}{}", self.render_code(), self.plain, RESET)
    }

    // Style-preserving operations

    /// Repeat the payload `count` times under a single wrap.
    #[must_use]
    pub fn repeat(&self, count: usize) -> Self {
        self.derive(self.plain.repeat(count))
    }

    /// Replace literal occurrences of `from` in the payload.
    #[must_use]
    pub fn replace(&self, from: &str, to: &str) -> Self {
        self.derive(self.plain.replace(from, to))
    }

    /// Replace occurrences of `from` and render the result.
    ///
    /// Each inserted fragment is escorted: preceded by a reset and followed
    /// by this value's render code, so a styled replacement keeps its own
    /// style and an unstyled one shows without the surrounding style.
    pub fn replace_escorted<'a>(&self, from: &str, to: impl Into<Arg<'a>>) -> String {
        let to = to.into();
        if !color_enabled() {
            return self.plain.replace(from, to.plain());
        }
        let escorted = self.escort(&to.rendered());
        format!(
            "{}{}{}",
            self.render_code(),
            self.plain.replace(from, &escorted),
            RESET
        )
    }

    fn derive(&self, plain: String) -> Self {
        Self::with_style(plain, self.style.clone())
    }

    /// Bracket an already rendered fragment with reset and this style.
    pub(crate) fn escort(&self, fragment: &str) -> String {
        format!("{}{}{}", RESET, fragment, self.render_code())
    }

    // Interpolation

    /// Substitute `{}`-style slots (`{}`, `{0}`, `{name}`).
    ///
    /// Each argument is escorted so the template style resumes right after
    /// it. Field specs (`{0:>8}`) and conversions (`{0!r}`) are rejected
    /// with [`Error::UnsupportedOperation`](crate::Error::UnsupportedOperation).
    pub fn interpolate<'a>(&self, args: impl Into<Args<'a>>) -> Result<String> {
        interpolate::interpolate(self, Syntax::Brace, &args.into())
    }

    /// Substitute `%`-style slots (`%s`, `%(name)s`, `%%`).
    pub fn interpolate_percent<'a>(&self, args: impl Into<Args<'a>>) -> Result<String> {
        interpolate::interpolate(self, Syntax::Percent, &args.into())
    }

    // Plain fallbacks

    /// Length of the payload in bytes.
    pub fn len(&self) -> usize {
        self.plain.len()
    }

    pub fn is_empty(&self) -> bool {
        self.plain.is_empty()
    }

    /// Display width of the payload in terminal columns.
    pub fn width(&self) -> usize {
        self.plain.width()
    }

    pub fn contains(&self, needle: &str) -> bool {
        self.plain.contains(needle)
    }

    pub fn starts_with(&self, prefix: &str) -> bool {
        self.plain.starts_with(prefix)
    }

    pub fn ends_with(&self, suffix: &str) -> bool {
        self.plain.ends_with(suffix)
    }

    /// Byte offset of the first occurrence of `needle` in the payload.
    pub fn find(&self, needle: &str) -> Option<usize> {
        self.plain.find(needle)
    }

    pub fn chars(&self) -> Chars<'_> {
        self.plain.chars()
    }

    pub fn lines(&self) -> Lines<'_> {
        self.plain.lines()
    }

    pub fn split<'a>(&'a self, separator: &'a str) -> Split<'a, &'a str> {
        self.plain.split(separator)
    }

    pub fn split_whitespace(&self) -> SplitWhitespace<'_> {
        self.plain.split_whitespace()
    }

    pub fn trim(&self) -> &str {
        self.plain.trim()
    }

    pub fn trim_start(&self) -> &str {
        self.plain.trim_start()
    }

    pub fn trim_end(&self) -> &str {
        self.plain.trim_end()
    }

    pub fn to_lowercase(&self) -> String {
        self.plain.to_lowercase()
    }

    pub fn to_uppercase(&self) -> String {
        self.plain.to_uppercase()
    }
}

impl fmt::Display for StyledText {
    /// Writes the rendered form. Width, fill and precision flags are ignored.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl From<&str> for StyledText {
    fn from(value: &str) -> Self {
        Self::unstyled(value)
    }
}

impl From<String> for StyledText {
    fn from(value: String) -> Self {
        Self::unstyled(value)
    }
}

// Equality, ordering and hashing only look at the payload

impl PartialEq for StyledText {
    fn eq(&self, other: &Self) -> bool {
        self.plain == other.plain
    }
}

impl Eq for StyledText {}

impl Hash for StyledText {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.plain.hash(state);
    }
}

impl PartialOrd for StyledText {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for StyledText {
    fn cmp(&self, other: &Self) -> Ordering {
        self.plain.cmp(&other.plain)
    }
}

macro_rules! impl_plain_comparisons {
    ($($other:ty),*) => {
        $(
            impl PartialEq<$other> for StyledText {
                fn eq(&self, other: &$other) -> bool {
                    self.plain.as_str() == AsRef::<str>::as_ref(other)
                }
            }

            impl PartialEq<StyledText> for $other {
                fn eq(&self, other: &StyledText) -> bool {
                    AsRef::<str>::as_ref(self) == other.plain.as_str()
                }
            }

            impl PartialOrd<$other> for StyledText {
                fn partial_cmp(&self, other: &$other) -> Option<Ordering> {
                    Some(self.plain.as_str().cmp(AsRef::<str>::as_ref(other)))
                }
            }

            impl PartialOrd<StyledText> for $other {
                fn partial_cmp(&self, other: &StyledText) -> Option<Ordering> {
                    Some(AsRef::<str>::as_ref(self).cmp(other.plain.as_str()))
                }
            }
        )*
    };
}

impl_plain_comparisons!(str, &str, String);

// Concatenation renders the styled side and yields plain output

impl Add<&str> for &StyledText {
    type Output = String;

    fn add(self, rhs: &str) -> String {
        let mut out = self.render();
        out.push_str(rhs);
        out
    }
}

impl Add<&str> for StyledText {
    type Output = String;

    fn add(self, rhs: &str) -> String {
        &self + rhs
    }
}

impl Add<&StyledText> for &StyledText {
    type Output = String;

    fn add(self, rhs: &StyledText) -> String {
        format!("{}{}", self.render(), rhs.render())
    }
}

impl Add<&StyledText> for &str {
    type Output = String;

    fn add(self, rhs: &StyledText) -> String {
        format!("{}{}", self, rhs.render())
    }
}

impl Mul<usize> for &StyledText {
    type Output = StyledText;

    fn mul(self, count: usize) -> StyledText {
        self.repeat(count)
    }
}

impl Mul<usize> for StyledText {
    type Output = StyledText;

    fn mul(self, count: usize) -> StyledText {
        self.repeat(count)
    }
}
