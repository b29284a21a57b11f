//! Comment extraction primitives.
//!
//! `CommentSyntax` is the per-language configuration: a pattern recognizing
//! one line of a line comment and, optionally, a pattern recognizing a
//! block comment. Everything else in this module is derived from those two
//! primitives.
//!
//! The extractor also reports a third kind of occurrence, the blank-line
//! sentinel. It is structural rather than a comment: chunk grouping uses it
//! to force a boundary between two runs of comments separated by an empty
//! line (see `chunk.rs`).
//!
//! Malformed input never raises here. An unterminated block marker simply
//! produces no further occurrences.

use crate::{CommentKind, Occurrence};
use regex::Regex;

/// Comment syntax for one language.
///
/// Each pattern must capture the comment body (the comment with its marker
/// stripped) as group 1. Line-comment patterns are expected to match one
/// full line including its trailing newline, anchored with `(?m)^`. A
/// language without block comments leaves `block` unset; a language without
/// comments at all (see `langs::unknown`) leaves both unset.
#[derive(Debug, Clone, Copy)]
pub struct CommentSyntax {
    pub line: Option<&'static Regex>,
    pub block: Option<&'static Regex>,
}

impl CommentSyntax {
    fn search(re: &Regex, text: &str, start: usize, kind: CommentKind) -> Option<Occurrence> {
        if start > text.len() {
            return None;
        }
        let caps = re.captures_at(text, start)?;
        let m = caps.get(0)?;
        let body = caps.get(1).map(|g| g.as_str().to_string()).unwrap_or_default();
        Some(Occurrence { kind, start: m.start(), end: m.end(), body })
    }

    /// Next line-comment occurrence at or after `start`, or none.
    pub(crate) fn line_comment(&self, text: &str, start: usize) -> Option<Occurrence> {
        self.line.and_then(|re| Self::search(re, text, start, CommentKind::Line))
    }

    /// Next block-comment occurrence at or after `start`, or none. Always
    /// none for a language without block comments.
    pub(crate) fn block_comment(&self, text: &str, start: usize) -> Option<Occurrence> {
        self.block.and_then(|re| Self::search(re, text, start, CommentKind::Block))
    }

    /// Next blank-line sentinel at or after `start`. Zero-width.
    fn blank_line(text: &str, start: usize) -> Option<Occurrence> {
        Self::search(regex!(r"(?m)^$"), text, start, CommentKind::Blank)
    }

    /// Earliest of the next line comment, block comment, or blank-line
    /// sentinel at or after `start`. Ties resolve line, then block, then
    /// blank.
    pub(crate) fn next_comment(&self, text: &str, start: usize) -> Option<Occurrence> {
        [self.line_comment(text, start), self.block_comment(text, start), Self::blank_line(text, start)]
            .into_iter()
            .flatten()
            .min_by_key(|o| o.start)
    }

    /// Earliest actual comment at or after `start`; never a sentinel.
    pub(crate) fn next_code_comment(&self, text: &str, start: usize) -> Option<Occurrence> {
        [self.line_comment(text, start), self.block_comment(text, start)]
            .into_iter()
            .flatten()
            .min_by_key(|o| o.start)
    }

    /// `text` with every comment occurrence removed. Blank lines stay.
    ///
    /// This is the scanning universe for triggers: patterns found in
    /// comments (the directive itself included) must never count as code.
    pub fn code(&self, text: &str) -> String {
        let mut out = String::with_capacity(text.len());
        let mut pos = 0;
        let mut search = 0;
        while let Some(occ) = self.next_code_comment(text, search) {
            if occ.end > occ.start {
                out.push_str(&text[pos..occ.start]);
                pos = occ.end;
                search = occ.end;
            } else {
                // Zero-width match from a degenerate pattern; step one
                // character to guarantee progress.
                match text[occ.start..].chars().next() {
                    Some(c) => search = occ.start + c.len_utf8(),
                    None => break,
                }
            }
        }
        out.push_str(&text[pos..]);
        out
    }
}
