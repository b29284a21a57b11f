//! Public library API.
//!
//! The engine takes one text buffer in and hands one text buffer back;
//! reading files, writing files, and choosing a [`Language`] are the
//! caller's business (the bundled CLI does exactly that and nothing more).

use crate::engine::{self, RewriteMetrics, Rewriter};
use crate::langs::Language;
use crate::Error;

/// Result of a best-effort rewrite run.
#[derive(Debug)]
pub struct UpdateResult {
    /// The rewritten text. When `error` is set this reflects all work
    /// completed before the run stopped; partial output beats losing the
    /// buffer for a text-rewriting tool.
    pub text: String,
    /// First configuration or rendering error encountered, if any.
    pub error: Option<Error>,
    /// Per-pass timing and counts.
    pub metrics: RewriteMetrics,
}

/// Rewrite `text`, regenerating the block after every generation
/// directive, and fail on the first error.
///
/// Running the result through `update` again returns it byte-identical.
///
/// # Example
/// ```
/// use txt2boil::{langs, update};
///
/// let src = ";; Constant Gen: r(\\d+)/(\\d+) (make-rat \\1 \\2)\n\nr5/7\n";
/// let out = update(src, &langs::racket()).unwrap();
/// assert!(out.contains("(define r5/7 (make-rat 5 7))"));
/// ```
pub fn update(text: &str, lang: &Language) -> Result<String, Error> {
    let out = update_verbose(text, lang);
    match out.error {
        Some(e) => Err(e),
        None => Ok(out.text),
    }
}

/// Best-effort variant of [`update`]: always returns the rewritten text,
/// together with the first error encountered (if any) and run metrics.
pub fn update_verbose(text: &str, lang: &Language) -> UpdateResult {
    let outcome = Rewriter::new(text, lang).run();
    UpdateResult { text: outcome.text, error: outcome.error, metrics: outcome.metrics }
}

/// The logical content of every comment chunk in `text`, in order.
pub fn comments(text: &str, lang: &Language) -> Vec<String> {
    engine::chunks(&lang.syntax, text, 0).iter().map(|c| c.content()).collect()
}
