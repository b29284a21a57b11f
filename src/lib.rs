extern crate self as txt2boil;

use regex::Regex;

#[macro_use]
mod macros;
mod api;
mod engine;
mod error;
pub mod langs;
mod rules;

pub use api::{UpdateResult, comments, update, update_verbose};
pub use engine::{CommentSyntax, PassMetrics, RewriteMetrics, Template};
pub use error::Error;
pub use langs::Language;
pub use rules::{line_code_gen, match_chain, racket_constant_gen};

// --- Internal types ---------------------------------------------------------

/// Kind of an occurrence reported by the comment extractor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum CommentKind {
    Line,
    Block,
    /// Structural blank-line sentinel. Not a comment; it exists only to
    /// force chunk boundaries and is zero-width.
    Blank,
}

/// A located comment (or blank-line sentinel) within a text buffer.
///
/// `start`/`end` are byte offsets into the buffer the occurrence was found
/// in. `body` is the comment with its marker stripped (capture group 1 of
/// the syntax pattern); sentinels have an empty body.
#[derive(Debug, Clone)]
pub(crate) struct Occurrence {
    pub kind: CommentKind,
    /// Start byte index (inclusive).
    pub start: usize,
    /// End byte index (exclusive).
    pub end: usize,
    pub body: String,
}

impl Occurrence {
    /// Classification used for chunk grouping: line comments group with
    /// other line comments, everything else groups apart.
    pub fn is_line(&self) -> bool {
        self.kind == CommentKind::Line
    }

    pub fn is_blank(&self) -> bool {
        self.kind == CommentKind::Blank
    }
}

/// A maximal contiguous run of same-kind comment occurrences, unbroken by
/// blank lines or intervening non-comment text.
///
/// Invariant: `occurrences` is non-empty and each occurrence starts exactly
/// where the previous one ends, so the chunk's span is contiguous in the
/// source text.
#[derive(Debug, Clone)]
pub(crate) struct Chunk {
    pub occurrences: Vec<Occurrence>,
}

impl Chunk {
    pub fn start(&self) -> usize {
        self.occurrences.first().map(|o| o.start).unwrap_or(0)
    }

    pub fn end(&self) -> usize {
        self.occurrences.last().map(|o| o.end).unwrap_or(0)
    }

    /// The chunk's logical text: the stripped body of every occurrence,
    /// concatenated in order.
    pub fn content(&self) -> String {
        self.occurrences.iter().map(|o| o.body.as_str()).collect()
    }

    pub fn is_blank(&self) -> bool {
        self.occurrences.iter().all(Occurrence::is_blank)
    }
}

// --- Rules ------------------------------------------------------------------

/// A matcher function: decides whether a chunk's content is a generation
/// directive and, if so, produces the trigger/template pair for it.
///
/// Returning `Err` signals a directive whose trigger pattern does not
/// compile; that is a rule-authoring mistake and is propagated rather than
/// swallowed.
pub type Matcher = Box<dyn Fn(&str) -> Result<Option<RuleMatch>, Error> + Send + Sync>;

/// A generation rule: a name and a matcher over chunk content.
///
/// Rules carry no language state of their own; a language is an ordered
/// list of rules plus a comment syntax (see [`Language`]).
pub struct Rule {
    pub name: &'static str,
    matcher: Matcher,
}

impl Rule {
    pub fn new(name: &'static str, matcher: Matcher) -> Self {
        Rule { name, matcher }
    }

    /// Build a rule from a directive pattern and a wrapper template.
    ///
    /// The directive pattern must match at the very start of the chunk
    /// content and capture the trigger pattern as group 1 and the template
    /// payload as group 2. The wrapper is the output template with `{}`
    /// standing in for the payload; backreferences in the composed template
    /// are resolved against trigger occurrences at render time.
    pub fn hooked(name: &'static str, directive: &'static Regex, wrapper: &'static str) -> Self {
        Rule::new(
            name,
            Box::new(move |content: &str| {
                let Some(caps) = directive.captures(content) else {
                    return Ok(None);
                };
                // Directives are anchored to the start of the chunk content.
                if caps.get(0).map(|m| m.start()) != Some(0) {
                    return Ok(None);
                }
                let (Some(trigger), Some(payload)) = (caps.get(1), caps.get(2)) else {
                    return Ok(None);
                };
                let trigger = Regex::new(trigger.as_str()).map_err(|source| Error::Trigger {
                    pattern: trigger.as_str().to_string(),
                    source,
                })?;
                let Some(template) = Template::parse(&wrapper.replace("{}", payload.as_str()))
                else {
                    // An unparsable template makes the whole directive
                    // malformed; it falls through the chain as a non-match.
                    return Ok(None);
                };
                Ok(Some(RuleMatch { name, trigger, template }))
            }),
        )
    }

    /// Evaluate this rule against a chunk's content.
    pub fn match_comment(&self, content: &str) -> Result<Option<RuleMatch>, Error> {
        (self.matcher)(content)
    }
}

impl std::fmt::Debug for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rule").field("name", &self.name).field("matcher", &"<function>").finish()
    }
}

/// A matched generation directive: the trigger pattern to scan the code
/// for and the template each distinct trigger occurrence is rendered
/// through. Created per chunk evaluation and consumed immediately.
#[derive(Debug, Clone)]
pub struct RuleMatch {
    /// Name of the rule that produced this match (used in traces).
    pub name: &'static str,
    pub trigger: Regex,
    pub template: Template,
}
