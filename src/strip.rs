//! Removal of SGR escape sequences.
//!
//! Stripping is grammar based (`ESC [ digits (; digits)* m`), so it also
//! cleans text that was colored by other tools.

use std::borrow::Cow;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::styled::StyledText;

static SGR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\x1b\[(?:\d+;)*\d+m").expect("SGR pattern should be valid"));

/// Remove every SGR sequence from `text`.
///
/// Sequences outside the grammar (cursor movement, `ESC[m`) are kept.
/// Returns the input borrowed when nothing was removed.
pub fn strip_styling(text: &str) -> Cow<'_, str> {
    SGR_PATTERN.replace_all(text, "")
}

/// Something plain text can be recovered from.
#[derive(Debug, Clone, Copy)]
pub enum PlainSource<'a> {
    Styled(&'a StyledText),
    Text(&'a str),
}

impl<'a> From<&'a StyledText> for PlainSource<'a> {
    fn from(value: &'a StyledText) -> Self {
        Self::Styled(value)
    }
}

impl<'a> From<&'a str> for PlainSource<'a> {
    fn from(value: &'a str) -> Self {
        Self::Text(value)
    }
}

impl<'a> From<&'a String> for PlainSource<'a> {
    fn from(value: &'a String) -> Self {
        Self::Text(value.as_str())
    }
}

/// Recover the plain text of a styled value or of arbitrary text.
///
/// Styled values hand back their stored payload; anything else is
/// stripped with [`strip_styling`].
pub fn get_plain<'a>(source: impl Into<PlainSource<'a>>) -> Cow<'a, str> {
    match source.into() {
        PlainSource::Styled(styled) => Cow::Borrowed(styled.plain()),
        PlainSource::Text(text) => strip_styling(text),
    }
}
