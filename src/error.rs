//! Error surface of the rewrite engine.
//!
//! Almost everything in the engine is total: non-directive comments are
//! skipped, malformed directives degrade to non-matches, and malformed
//! input text never raises. The two conditions that do surface as errors
//! are rule-authoring mistakes:
//!
//! - a directive trigger pattern that fails to compile (scanning with an
//!   ill-defined pattern would be worse than stopping), and
//! - a template backreference to a group the trigger occurrence does not
//!   have, reported at the point the trigger is actually rendered.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    /// A directive's trigger pattern failed to compile. Configuration
    /// error: the directive author has to fix the pattern.
    #[error("invalid trigger pattern `{pattern}`: {source}")]
    Trigger {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// A template referenced a capture group that the matched trigger
    /// occurrence does not provide. Rendering error: output rendered
    /// earlier in the same pass is kept.
    #[error("template references group {group}, which trigger match `{trigger}` does not have")]
    MissingGroup { group: usize, trigger: String },
}
