//! Splicing generated code between marker comments.
//!
//! The runtime's dispatch function carries a region delimited by two marker
//! lines:
//!
//! ```text
//!       // BEGIN automatically generated by dtc
//!       ...generated...
//!       // END automatically generated by dtc
//! ```
//!
//! Only the lines strictly between the markers are replaced. The BEGIN
//! line's leading whitespace becomes the margin of the generated block, and
//! its line ending (`\n` or `\r\n`) is used for every generated line.

use std::borrow::Cow;
use std::ops::Range;

use thiserror::Error;

/// Start of the BEGIN marker line, after leading whitespace.
pub const BEGIN_MARKER: &str = "// BEGIN automatically generated";
/// Start of the END marker line, after leading whitespace.
pub const END_MARKER: &str = "// END automatically generated";

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SpliceError {
    #[error("no `// BEGIN automatically generated` marker line")]
    MissingBegin,

    #[error("no `// END automatically generated` marker line after the BEGIN marker on line {begin_line}")]
    MissingEnd { begin_line: usize },

    #[error("more than one BEGIN marker (lines {first} and {second})")]
    DuplicateBegin { first: usize, second: usize },
}

/// The replaceable region of a source file.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MarkerRegion {
    /// Byte range of the lines between the markers.
    body: Range<usize>,
    /// Leading whitespace of the BEGIN line.
    margin: String,
    /// Line terminator of the BEGIN line.
    line_ending: &'static str,
}

impl MarkerRegion {
    /// Locate the marker region in `source`.
    pub fn find(source: &str) -> Result<Self, SpliceError> {
        let mut begin: Option<(usize, usize, String, &'static str)> = None; // (line, body start, margin, ending)
        let mut end: Option<usize> = None;
        let mut offset = 0;

        for (index, line) in source.split_inclusive('\n').enumerate() {
            let line_no = index + 1;
            let trimmed = line.trim_start();

            if trimmed.starts_with(BEGIN_MARKER) {
                if let Some((first, ..)) = begin {
                    return Err(SpliceError::DuplicateBegin {
                        first,
                        second: line_no,
                    });
                }
                let margin = line[..line.len() - trimmed.len()].to_string();
                let ending = if line.ends_with("\r\n") { "\r\n" } else { "\n" };
                begin = Some((line_no, offset + line.len(), margin, ending));
            } else if begin.is_some() && end.is_none() && trimmed.starts_with(END_MARKER) {
                end = Some(offset);
            }

            offset += line.len();
        }

        let Some((begin_line, start, margin, line_ending)) = begin else {
            return Err(SpliceError::MissingBegin);
        };
        let Some(end) = end else {
            return Err(SpliceError::MissingEnd { begin_line });
        };

        Ok(MarkerRegion {
            body: start..end,
            margin,
            line_ending,
        })
    }

    /// Leading whitespace to put in front of every generated line.
    pub fn margin(&self) -> &str {
        &self.margin
    }

    /// `\r\n` when the BEGIN line uses CRLF, `\n` otherwise.
    pub fn line_ending(&self) -> &'static str {
        self.line_ending
    }

    /// `generated` with every line terminated by [`line_ending`](Self::line_ending).
    /// Lines already ending in `\r\n` are not doubled.
    pub fn adapt_line_endings<'g>(&self, generated: &'g str) -> Cow<'g, str> {
        if self.line_ending == "\n" && !generated.contains('\r') {
            return Cow::Borrowed(generated);
        }
        let mut out = String::with_capacity(generated.len() + generated.len() / 16);
        for line in generated.split_inclusive('\n') {
            match line.strip_suffix('\n') {
                Some(content) => {
                    out.push_str(content.strip_suffix('\r').unwrap_or(content));
                    out.push_str(self.line_ending);
                }
                None => out.push_str(line),
            }
        }
        Cow::Owned(out)
    }

    /// The text currently between the markers.
    pub fn current<'s>(&self, source: &'s str) -> &'s str {
        &source[self.body.clone()]
    }

    /// `source` with the region's body replaced by `generated`.
    ///
    /// Line endings are adapted to the file's, and a trailing one is added
    /// when missing so the END marker keeps its own line.
    pub fn replace(&self, source: &str, generated: &str) -> String {
        let generated = self.adapt_line_endings(generated);
        let mut out = String::with_capacity(source.len() + generated.len());
        out.push_str(&source[..self.body.start]);
        out.push_str(&generated);
        if !generated.is_empty() && !generated.ends_with('\n') {
            out.push_str(self.line_ending);
        }
        out.push_str(&source[self.body.end..]);
        out
    }
}
