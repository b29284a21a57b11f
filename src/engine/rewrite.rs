//! Fixed-point rewrite driver.
//!
//! The driver walks the buffer as a small state machine:
//!
//! ```text
//! SCANNING(pos) ──chunk matches chain──> MATCHED(chunk, rule_match)
//!      │                                        │
//!      │ no chunk matches                       v
//!      v                                   REWRITING
//!    DONE                              delete stale block
//!                                      render against code view
//!                                      insert fresh output
//!                                           │
//!                                           v
//!                                 SCANNING(after insertion)
//! ```
//!
//! Two details make the loop convergent and idempotent:
//!
//! - Scanning resumes strictly after the freshly inserted output, so
//!   generated text is never re-scanned for chunks within a run.
//! - Rendering is a pure function of the trigger pattern, the template,
//!   and the comment-stripped code view of the buffer with the stale block
//!   already deleted, so the previous generation can never influence the
//!   next one.
//!
//! Each pass builds a new buffer instead of splicing in place; offsets are
//! only ever interpreted against the buffer they were computed from.

use crate::engine::chunks;
use crate::engine::metrics::{PassMetrics, RewriteMetrics};
use crate::engine::triggers::render_triggers;
use crate::langs::Language;
use crate::rules::match_chain;
use crate::{Chunk, Error, RuleMatch};
use std::time::Instant;

/// What a rewrite run produced. When `error` is set, `text` reflects all
/// work completed before the run stopped.
#[derive(Debug)]
pub(crate) struct RewriteOutcome {
    pub text: String,
    pub error: Option<Error>,
    pub metrics: RewriteMetrics,
}

/// Drives a single buffer to its rewrite fixed point.
pub(crate) struct Rewriter<'a> {
    lang: &'a Language,
    text: String,
    /// Scan cursor; chunks strictly before it are settled.
    pos: usize,
    metrics: RewriteMetrics,
    debug: bool,
}

impl<'a> Rewriter<'a> {
    pub fn new(text: &str, lang: &'a Language) -> Self {
        Rewriter {
            lang,
            text: text.to_string(),
            pos: 0,
            metrics: RewriteMetrics::default(),
            debug: std::env::var_os("TXT2BOIL_DEBUG").is_some(),
        }
    }

    /// First chunk at or after the cursor whose content matches the
    /// language's rule chain.
    fn next_match(&self) -> Result<Option<(Chunk, RuleMatch)>, Error> {
        for chunk in chunks(&self.lang.syntax, &self.text, self.pos) {
            if let Some(m) = match_chain(&self.lang.rules, &chunk.content())? {
                return Ok(Some((chunk, m)));
            }
        }
        Ok(None)
    }

    /// End of the generated block that follows a chunk ending at `end`:
    /// everything up to and including the first newline of the next blank
    /// line, or end-of-file when no blank line follows.
    ///
    /// The search starts one byte early so that a blank line immediately
    /// after the chunk yields an empty block.
    fn generated_block_end(&self, end: usize) -> usize {
        let from = end.saturating_sub(1);
        match self.text[from..].find("\n\n") {
            Some(i) => from + i + 1,
            None => self.text.len(),
        }
    }

    pub fn run(mut self) -> RewriteOutcome {
        let total_start = Instant::now();
        loop {
            let pass_start = Instant::now();
            let (chunk, m) = match self.next_match() {
                Ok(Some(hit)) => hit,
                Ok(None) => break,
                Err(e) => return self.stop(total_start, Some(e)),
            };
            let end = chunk.end();
            if self.debug {
                eprintln!("[chunk:match] rule=\"{}\" span={}..{}", m.name, chunk.start(), end);
            }

            // Delete the stale block before computing the code view, so
            // previously generated output can never feed new triggers.
            let block_end = self.generated_block_end(end);
            let mut stripped = String::with_capacity(self.text.len());
            stripped.push_str(&self.text[..end]);
            stripped.push_str(&self.text[block_end..]);

            let code = self.lang.syntax.code(&stripped);
            let rendered = render_triggers(&code, &m);
            if self.debug {
                eprintln!(
                    "[triggers] rule=\"{}\" distinct={} bytes={}",
                    m.name,
                    rendered.triggers,
                    rendered.text.len()
                );
            }

            let mut next = String::with_capacity(stripped.len() + rendered.text.len());
            next.push_str(&stripped[..end]);
            next.push_str(&rendered.text);
            next.push_str(&stripped[end..]);
            self.text = next;
            self.pos = end + rendered.text.len();

            self.metrics.passes.push(PassMetrics {
                duration: pass_start.elapsed(),
                rule: m.name,
                chunk_start: chunk.start(),
                chunk_end: end,
                triggers: rendered.triggers,
                rendered_bytes: rendered.text.len(),
            });

            if rendered.error.is_some() {
                return self.stop(total_start, rendered.error);
            }
        }
        self.stop(total_start, None)
    }

    fn stop(mut self, total_start: Instant, error: Option<Error>) -> RewriteOutcome {
        self.metrics.total = total_start.elapsed();
        RewriteOutcome { text: self.text, error, metrics: self.metrics }
    }
}
