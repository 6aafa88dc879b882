//! Generated lines: content, terminator and outcome.

use crate::fault::LineOutcome;
use std::borrow::Cow;
use std::io::{self, Read, Write};

/// Literal written for malformed lines: an unterminated JSON object.
pub const MALFORMED_LINE: &str = r#"{"a": 1"#;

/// Opening character of an oversized line.
pub const OVERSIZE_PREFIX: &str = "{";

/// Character repeated after [`OVERSIZE_PREFIX`] in an oversized line.
pub const OVERSIZE_FILLER: u8 = b'x';

/// Line terminator chosen per line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Terminator {
    #[default]
    Lf,
    Crlf,
}

impl Terminator {
    pub fn as_str(&self) -> &'static str {
        match self {
            Terminator::Lf => "\n",
            Terminator::Crlf => "\r\n",
        }
    }

    pub fn as_bytes(&self) -> &'static [u8] {
        self.as_str().as_bytes()
    }
}

/// Literal content of a line, without its terminator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LineContent {
    Empty,
    /// `{` followed by `filler_len` filler bytes.
    Oversized { filler_len: u64 },
    Malformed,
    /// Compact JSON encoding of a record.
    Json(String),
}

impl LineContent {
    /// Length of the content in bytes.
    pub fn byte_len(&self) -> u64 {
        match self {
            LineContent::Empty => 0,
            LineContent::Oversized { filler_len } => {
                (OVERSIZE_PREFIX.len() as u64).saturating_add(*filler_len)
            }
            LineContent::Malformed => MALFORMED_LINE.len() as u64,
            LineContent::Json(json) => json.len() as u64,
        }
    }

    /// Write the content. Oversized filler is streamed, never materialized.
    pub fn write_to<W: Write>(&self, writer: &mut W) -> io::Result<()> {
        match self {
            LineContent::Empty => Ok(()),
            LineContent::Oversized { filler_len } => {
                writer.write_all(OVERSIZE_PREFIX.as_bytes())?;
                let mut filler = io::repeat(OVERSIZE_FILLER).take(*filler_len);
                io::copy(&mut filler, writer)?;
                Ok(())
            }
            LineContent::Malformed => writer.write_all(MALFORMED_LINE.as_bytes()),
            LineContent::Json(json) => writer.write_all(json.as_bytes()),
        }
    }

    /// The content as text. Allocates for oversized lines.
    pub fn to_text(&self) -> Cow<'_, str> {
        match self {
            LineContent::Empty => Cow::Borrowed(""),
            LineContent::Oversized { filler_len } => {
                let filler = char::from(OVERSIZE_FILLER)
                    .to_string()
                    .repeat(*filler_len as usize);
                Cow::Owned(format!("{OVERSIZE_PREFIX}{filler}"))
            }
            LineContent::Malformed => Cow::Borrowed(MALFORMED_LINE),
            LineContent::Json(json) => Cow::Borrowed(json),
        }
    }
}

/// One line produced by the generator.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratedLine {
    /// Zero-based line index, also the record `id`.
    pub index: u64,
    pub outcome: LineOutcome,
    pub terminator: Terminator,
    pub content: LineContent,
    /// Whether this is the final line of the corpus.
    pub is_last: bool,
}
