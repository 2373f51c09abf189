use std::cmp::max;
use std::fmt;
use std::ops::Range;
use std::str::Utf8Error;

/// An error that can occur while building an automaton or decoding a
/// haystack.
///
/// The alternate `Display` format (`{:#}`) and the `Debug` format render a
/// snippet of the offending input with the invalid part underlined.
#[derive(Clone)]
pub struct Error {
    kind: ErrorKind,
    msg: String,
    span: Option<(String, Span)>,
}

/// The kind of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[non_exhaustive]
pub enum ErrorKind {
    /// A pattern could not be decoded as a sequence of symbols.
    InvalidPattern {
        /// The index of the offending pattern.
        index: usize,
    },

    /// A haystack could not be decoded as a sequence of symbols.
    InvalidText,

    /// The automaton would need more states than can be addressed.
    TooManyStates,
}

/// The location of an error in the input.
#[derive(Debug, Clone)]
struct Span {
    /// The byte offset of the error in the input bytes.
    offset: usize,
    /// The range to underline in the rendered source.
    range: Range<usize>,
}

impl Error {
    pub(crate) fn invalid_pattern(index: usize, pattern: &[u8], err: Utf8Error) -> Self {
        Self::utf8(
            ErrorKind::InvalidPattern { index },
            format!("invalid UTF-8 in pattern {index}"),
            pattern,
            err,
        )
    }

    pub(crate) fn invalid_text(text: &[u8], err: Utf8Error) -> Self {
        Self::utf8(
            ErrorKind::InvalidText,
            "invalid UTF-8 in search text".into(),
            text,
            err,
        )
    }

    pub(crate) fn too_many_states(msg: &str) -> Self {
        Self {
            kind: ErrorKind::TooManyStates,
            msg: format!("too many states: {msg}"),
            span: None,
        }
    }

    fn utf8(kind: ErrorKind, msg: String, input: &[u8], err: Utf8Error) -> Self {
        // The lossy conversion keeps the valid prefix as is and replaces the
        // invalid sequence with a single replacement character.
        let offset = err.valid_up_to();
        let source = String::from_utf8_lossy(input).into_owned();
        let range = offset..offset + char::REPLACEMENT_CHARACTER.len_utf8();
        Self {
            kind,
            msg,
            span: Some((source, Span { offset, range })),
        }
    }

    /// Returns the kind of this error.
    #[inline]
    pub fn kind(&self) -> ErrorKind {
        self.kind
    }
}

impl std::error::Error for Error {}

impl fmt::Debug for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.span {
            Some((source, span)) => fmt_pretty(&self.msg, source, &span.range, f),
            None => write!(f, "{}", self.msg),
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.span {
            Some((source, span)) => {
                if f.alternate() {
                    fmt_pretty(&self.msg, source, &span.range, f)
                } else {
                    write!(f, "{} at byte {}", self.msg, span.offset)
                }
            }
            None => write!(f, "{}", self.msg),
        }
    }
}

fn fmt_pretty(
    msg: &str,
    source: &str,
    span: &Range<usize>,
    f: &mut fmt::Formatter<'_>,
) -> fmt::Result {
    let (line, col) = to_line_col(source, span.start);
    let width = max(1, display_width(&source[span.clone()]));

    let num = (line.number + 1).to_string();
    let pad = display_width(&num);
    let pipe = "|";
    let underline = "^".repeat(width);

    write!(
        f,
        "\n \
        {0:pad$} {pipe}\n \
        {num:>} {pipe} {code}\n \
        {0:pad$} {pipe} {underline:>width$} {msg}\n",
        "",
        pad = pad,
        pipe = pipe,
        num = num,
        code = line.text,
        underline = underline,
        width = col + width,
        msg = msg
    )
}

struct Line<'a> {
    number: usize,
    text: &'a str,
}

/// Returns the line containing the byte offset and the display column of
/// the offset within that line.
fn to_line_col(source: &str, offset: usize) -> (Line<'_>, usize) {
    let mut start = 0;
    for (number, text) in source.split_terminator('\n').enumerate() {
        let end = start + text.len();
        if offset <= end {
            let col = display_width(&text[..offset - start]);
            return (Line { number, text }, col);
        }
        start = end + 1;
    }
    let number = source.split_terminator('\n').count().saturating_sub(1);
    let text = source.split_terminator('\n').last().unwrap_or("");
    (Line { number, text }, display_width(text))
}

#[cfg(feature = "unicode")]
fn display_width(s: &str) -> usize {
    use unicode_width::UnicodeWidthStr;
    s.width()
}

#[cfg(not(feature = "unicode"))]
fn display_width(s: &str) -> usize {
    s.chars().count()
}
