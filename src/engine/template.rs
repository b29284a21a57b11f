//! Structured output templates.
//!
//! A directive's output template is parsed once, when the rule matches,
//! into literal runs interleaved with capture-group references. Rendering
//! is then plain substitution against a trigger occurrence's captures,
//! with no string-formatting or escaping edge cases left for render time.

use crate::Error;
use regex::Captures;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    Literal(String),
    /// Backreference to a capture group of the trigger occurrence.
    Group(usize),
}

/// A parsed output template.
///
/// Backreference syntax follows the directives themselves: `\1`..`\99` and
/// `\g<N>` reference capture groups of the trigger occurrence, with group 0
/// the whole match. `\\` is a literal backslash and `\n`/`\t` the usual
/// escapes; any other backslash sequence is kept literally.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Template {
    segments: Vec<Segment>,
}

impl Template {
    /// Parse a template source string.
    ///
    /// Returns `None` for malformed backreference syntax (an unterminated
    /// or empty `\g<>`), which makes the surrounding directive a non-match
    /// rather than an error.
    pub fn parse(src: &str) -> Option<Template> {
        let mut segments = Vec::new();
        let mut lit = String::new();
        let mut chars = src.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '\\' {
                lit.push(c);
                continue;
            }
            match chars.peek().copied() {
                Some('\\') => {
                    chars.next();
                    lit.push('\\');
                }
                Some('n') => {
                    chars.next();
                    lit.push('\n');
                }
                Some('t') => {
                    chars.next();
                    lit.push('\t');
                }
                Some('g') => {
                    chars.next();
                    if chars.next() != Some('<') {
                        return None;
                    }
                    let mut digits = String::new();
                    loop {
                        match chars.next() {
                            Some('>') => break,
                            Some(d) if d.is_ascii_digit() => digits.push(d),
                            _ => return None,
                        }
                    }
                    let group = digits.parse().ok()?;
                    Self::flush(&mut segments, &mut lit);
                    segments.push(Segment::Group(group));
                }
                Some(d) if d.is_ascii_digit() => {
                    // \N with one or two digits.
                    let mut digits = String::new();
                    digits.push(d);
                    chars.next();
                    if let Some(d2) = chars.peek().copied() {
                        if d2.is_ascii_digit() {
                            chars.next();
                            digits.push(d2);
                        }
                    }
                    let group = digits.parse().ok()?;
                    Self::flush(&mut segments, &mut lit);
                    segments.push(Segment::Group(group));
                }
                _ => lit.push('\\'),
            }
        }
        Self::flush(&mut segments, &mut lit);
        Some(Template { segments })
    }

    fn flush(segments: &mut Vec<Segment>, lit: &mut String) {
        if !lit.is_empty() {
            segments.push(Segment::Literal(std::mem::take(lit)));
        }
    }

    /// Render this template against one trigger occurrence.
    pub fn render(&self, caps: &Captures<'_>) -> Result<String, Error> {
        let whole = caps.get(0).map(|m| m.as_str()).unwrap_or("");
        let mut out = String::new();
        for seg in &self.segments {
            match seg {
                Segment::Literal(s) => out.push_str(s),
                Segment::Group(n) => match caps.get(*n) {
                    Some(m) => out.push_str(m.as_str()),
                    None => {
                        return Err(Error::MissingGroup { group: *n, trigger: whole.to_string() });
                    }
                },
            }
        }
        Ok(out)
    }
}
