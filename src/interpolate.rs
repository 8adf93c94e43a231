//! Template substitution for styled text.
//!
//! Two substitution syntaxes are supported:
//! - `%`-style: `%s` (next positional), `%(name)s` (named), `%%` (literal `%`)
//! - `{}`-style: `{}` (next positional), `{0}` (index), `{name}` (named),
//!   `{{` and `}}` (literal braces)
//!
//! Each substituted argument is escorted by the template's style: a reset
//! before it and the template's render code after it. Styled arguments are
//! rendered first, so their own style applies inside their span and the
//! template style resumes right after.

use std::borrow::Cow;
use std::collections::BTreeMap;
use std::iter::Peekable;
use std::str::CharIndices;

use crate::config::color_enabled;
use crate::error::{Error, FormatError, Result};
use crate::registry::RESET;
use crate::styled::StyledText;

/// Characters that start a printf-style width, precision or flag.
const PRINTF_MODIFIERS: &str = "-+ #0123456789*.";

/// A single substitution argument.
#[derive(Debug, Clone)]
pub enum Arg<'a> {
    /// Text inserted as-is
    Plain(Cow<'a, str>),
    /// Styled text inserted in its rendered form
    Styled(Cow<'a, StyledText>),
}

impl Arg<'_> {
    /// The argument's text without any styling.
    pub fn plain(&self) -> &str {
        match self {
            Self::Plain(text) => text.as_ref(),
            Self::Styled(styled) => styled.plain(),
        }
    }

    /// The argument's text as it appears in terminal output.
    pub fn rendered(&self) -> Cow<'_, str> {
        match self {
            Self::Plain(text) => Cow::Borrowed(text.as_ref()),
            Self::Styled(styled) => Cow::Owned(styled.render()),
        }
    }
}

impl<'a> From<&'a str> for Arg<'a> {
    fn from(value: &'a str) -> Self {
        Self::Plain(Cow::Borrowed(value))
    }
}

impl<'a> From<&'a String> for Arg<'a> {
    fn from(value: &'a String) -> Self {
        Self::Plain(Cow::Borrowed(value.as_str()))
    }
}

impl From<String> for Arg<'_> {
    fn from(value: String) -> Self {
        Self::Plain(Cow::Owned(value))
    }
}

impl<'a> From<&'a StyledText> for Arg<'a> {
    fn from(value: &'a StyledText) -> Self {
        Self::Styled(Cow::Borrowed(value))
    }
}

impl From<StyledText> for Arg<'_> {
    fn from(value: StyledText) -> Self {
        Self::Styled(Cow::Owned(value))
    }
}

/// Arguments for a template, resolved once per call.
#[derive(Debug, Clone)]
pub enum Args<'a> {
    /// Ordered arguments for `%s`, `{}` and `{0}` slots
    Positional(Vec<Arg<'a>>),
    /// Keyed arguments for `%(name)s` and `{name}` slots
    Named(BTreeMap<String, Arg<'a>>),
    /// One argument, treated as a single positional value
    Single(Arg<'a>),
}

impl<'a> Args<'a> {
    /// Build positional arguments.
    pub fn positional<I, A>(values: I) -> Self
    where
        I: IntoIterator<Item = A>,
        A: Into<Arg<'a>>,
    {
        Self::Positional(values.into_iter().map(Into::into).collect())
    }

    /// Build named arguments from key/value pairs.
    pub fn named<I, K, A>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, A)>,
        K: Into<String>,
        A: Into<Arg<'a>>,
    {
        Self::Named(
            pairs
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        )
    }

    /// Build a single argument.
    pub fn single(value: impl Into<Arg<'a>>) -> Self {
        Self::Single(value.into())
    }

    fn positional_slice(&self) -> &[Arg<'a>] {
        match self {
            Self::Positional(values) => values.as_slice(),
            Self::Single(value) => std::slice::from_ref(value),
            Self::Named(_) => &[],
        }
    }

    fn lookup(&self, slot: &Slot, next: &mut usize) -> std::result::Result<&Arg<'a>, FormatError> {
        match slot {
            Slot::Next => {
                let index = *next;
                *next += 1;
                self.positional_slice()
                    .get(index)
                    .ok_or(FormatError::MissingPositional { index })
            }
            Slot::Index(index) => self
                .positional_slice()
                .get(*index)
                .ok_or(FormatError::MissingPositional { index: *index }),
            Slot::Name(name) => match self {
                Self::Named(values) => values.get(name),
                _ => None,
            }
            .ok_or_else(|| FormatError::MissingNamed { name: name.clone() }),
        }
    }
}

impl<'a> From<Arg<'a>> for Args<'a> {
    fn from(value: Arg<'a>) -> Self {
        Self::Single(value)
    }
}

impl<'a> From<&'a str> for Args<'a> {
    fn from(value: &'a str) -> Self {
        Self::single(value)
    }
}

impl From<String> for Args<'_> {
    fn from(value: String) -> Self {
        Self::single(value)
    }
}

impl<'a> From<&'a StyledText> for Args<'a> {
    fn from(value: &'a StyledText) -> Self {
        Self::single(value)
    }
}

impl From<StyledText> for Args<'_> {
    fn from(value: StyledText) -> Self {
        Self::single(value)
    }
}

impl<'a> From<Vec<Arg<'a>>> for Args<'a> {
    fn from(values: Vec<Arg<'a>>) -> Self {
        Self::Positional(values)
    }
}

impl<'a, A, const N: usize> From<[A; N]> for Args<'a>
where
    A: Into<Arg<'a>>,
{
    fn from(values: [A; N]) -> Self {
        Self::positional(values)
    }
}

impl<'a> From<BTreeMap<String, Arg<'a>>> for Args<'a> {
    fn from(values: BTreeMap<String, Arg<'a>>) -> Self {
        Self::Named(values)
    }
}

/// Template syntax to parse.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Syntax {
    /// `%s`, `%(name)s`, `%%`
    Percent,
    /// `{}`, `{0}`, `{name}`, `{{`, `}}`
    Brace,
}

/// Where a substituted value comes from.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Slot {
    Next,
    Index(usize),
    Name(String),
}

/// A segment of a parsed template.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    Slot(Slot),
}

/// A parsed substitution template.
#[derive(Debug, Clone)]
struct Template {
    segments: Vec<Segment>,
}

impl Template {
    fn parse(text: &str, syntax: Syntax) -> Result<Self> {
        match syntax {
            Syntax::Percent => Self::parse_percent(text),
            Syntax::Brace => Self::parse_brace(text),
        }
    }

    fn parse_brace(text: &str) -> Result<Self> {
        let mut builder = Builder::default();
        let mut chars = text.char_indices().peekable();
        let mut automatic = false;
        let mut manual = false;

        while let Some((position, c)) = chars.next() {
            match c {
                '{' => {
                    if chars.next_if(|&(_, next)| next == '{').is_some() {
                        builder.literal.push('{');
                        continue;
                    }

                    let field = read_until(&mut chars, '}', '{', position)?;
                    let slot = parse_field(&field)?;
                    match slot {
                        Slot::Next => automatic = true,
                        Slot::Index(_) => manual = true,
                        Slot::Name(_) => {}
                    }
                    if automatic && manual {
                        return Err(FormatError::MixedNumbering.into());
                    }
                    builder.slot(slot);
                }
                '}' => {
                    if chars.next_if(|&(_, next)| next == '}').is_none() {
                        return Err(FormatError::UnmatchedBrace { brace: '}', position }.into());
                    }
                    builder.literal.push('}');
                }
                _ => builder.literal.push(c),
            }
        }

        Ok(builder.finish())
    }

    fn parse_percent(text: &str) -> Result<Self> {
        let mut builder = Builder::default();
        let mut chars = text.char_indices().peekable();

        while let Some((position, c)) = chars.next() {
            if c != '%' {
                builder.literal.push(c);
                continue;
            }

            match chars.next() {
                None => return Err(FormatError::IncompleteSpecifier { position }.into()),
                Some((_, '%')) => builder.literal.push('%'),
                Some((_, 's')) => builder.slot(Slot::Next),
                Some((_, '(')) => {
                    let name = read_until(&mut chars, ')', '(', position)
                        .map_err(|_| FormatError::IncompleteSpecifier { position })?;
                    match chars.next() {
                        Some((_, 's')) => builder.slot(Slot::Name(name)),
                        Some((at, conversion)) => return Err(conversion_error(conversion, at)),
                        None => return Err(FormatError::IncompleteSpecifier { position }.into()),
                    }
                }
                Some((at, conversion)) => return Err(conversion_error(conversion, at)),
            }
        }

        Ok(builder.finish())
    }
}

/// Accumulates literal text between slots.
#[derive(Default)]
struct Builder {
    segments: Vec<Segment>,
    literal: String,
}

impl Builder {
    fn slot(&mut self, slot: Slot) {
        self.flush();
        self.segments.push(Segment::Slot(slot));
    }

    fn flush(&mut self) {
        if !self.literal.is_empty() {
            self.segments
                .push(Segment::Literal(std::mem::take(&mut self.literal)));
        }
    }

    fn finish(mut self) -> Template {
        self.flush();
        Template {
            segments: self.segments,
        }
    }
}

/// Collect characters up to `close`. A nested `open` or end of input is an
/// unmatched `open` at `start`.
fn read_until(
    chars: &mut Peekable<CharIndices<'_>>,
    close: char,
    open: char,
    start: usize,
) -> Result<String> {
    let mut content = String::new();
    for (position, c) in chars.by_ref() {
        if c == close {
            return Ok(content);
        }
        if c == open {
            return Err(FormatError::UnmatchedBrace { brace: open, position }.into());
        }
        content.push(c);
    }
    Err(FormatError::UnmatchedBrace {
        brace: open,
        position: start,
    }
    .into())
}

/// Parse the inside of a `{...}` field.
fn parse_field(field: &str) -> Result<Slot> {
    if field.contains(':') || field.contains('!') {
        return Err(Error::UnsupportedOperation {
            operation: "format spec or conversion in template field",
        });
    }
    if field.contains('.') || field.contains('[') {
        return Err(Error::UnsupportedOperation {
            operation: "attribute or index access in template field",
        });
    }
    if field.is_empty() {
        return Ok(Slot::Next);
    }
    if field.bytes().all(|b| b.is_ascii_digit()) {
        if let Ok(index) = field.parse() {
            return Ok(Slot::Index(index));
        }
    }
    Ok(Slot::Name(field.to_string()))
}

fn conversion_error(conversion: char, position: usize) -> Error {
    if PRINTF_MODIFIERS.contains(conversion) {
        Error::UnsupportedOperation {
            operation: "printf-style width, precision or flags",
        }
    } else {
        FormatError::UnsupportedConversion {
            conversion,
            position,
        }
        .into()
    }
}

/// Substitute `args` into the template's payload and render the result.
pub(crate) fn interpolate(template: &StyledText, syntax: Syntax, args: &Args<'_>) -> Result<String> {
    let parsed = Template::parse(template.plain(), syntax)?;
    let colored = color_enabled();

    let mut out = String::with_capacity(template.len() * 2);
    if colored {
        out.push_str(template.render_code());
    }

    let mut next = 0;
    let mut uses_names = false;
    for segment in &parsed.segments {
        match segment {
            Segment::Literal(text) => out.push_str(text),
            Segment::Slot(slot) => {
                uses_names |= matches!(slot, Slot::Name(_));
                let arg = args.lookup(slot, &mut next)?;
                if colored {
                    out.push_str(&template.escort(&arg.rendered()));
                } else {
                    out.push_str(arg.plain());
                }
            }
        }
    }

    if syntax == Syntax::Percent && !uses_names {
        let supplied = args.positional_slice().len();
        if next < supplied {
            return Err(FormatError::UnusedArguments {
                unused: supplied - next,
            }
            .into());
        }
    }

    if colored {
        out.push_str(RESET);
    }
    Ok(out)
}
