//! Comment extraction and fixed-point rewriting engine.
//!
//! This module is the operational core of the crate. Rewriting a text
//! buffer is a pipeline:
//!
//! ```text
//! raw text ── CommentSyntax::next_comment ──┐   (extract.rs)
//!                                           │
//!                                           v
//!                               chunks()  groups occurrences   (chunk.rs)
//!                                           │
//!                                           v
//!                               rule chain  first Some wins    (rules.rs)
//!                                           │
//!                     (trigger, template) or fall through
//!                                           │
//!                                           v
//!                 render_triggers  scans CommentSyntax::code   (triggers.rs)
//!                   - dedup by matched text
//!                   - sort by matched text
//!                   - substitute groups into Template          (template.rs)
//!                                           │
//!                                           v
//!                     Rewriter  splices output after the chunk (rewrite.rs)
//!                       - delete stale generated block
//!                       - insert fresh output
//!                       - resume past the insertion, repeat
//! ```
//!
//! The driver leans on a **fixed point**: each pass rewrites exactly one
//! matched chunk and resumes scanning strictly after the inserted output,
//! so generated text is never re-scanned and re-running the driver on its
//! own output is byte-identical.
//!
//! ## Responsibilities by module
//!
//! - `extract.rs`: `CommentSyntax` plus the primitives that locate line
//!   comments, block comments, and blank-line sentinels, and the
//!   comment-stripped code view.
//! - `chunk.rs`: grouping contiguous occurrences into `Chunk`s.
//! - `template.rs`: structured output templates (literal runs interleaved
//!   with capture-group references).
//! - `triggers.rs`: trigger collection, deduplication, ordering, rendering.
//! - `rewrite.rs`: the SCANNING/MATCHED/REWRITING driver loop.
//! - `metrics.rs`: optional per-pass timing and counts.
//!
//! ## Debugging
//!
//! Set `TXT2BOIL_DEBUG=1` to print chunk-match and trigger traces to
//! stderr.

#[path = "engine/chunk.rs"]
mod chunk;
#[path = "engine/extract.rs"]
mod extract;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/rewrite.rs"]
mod rewrite;
#[path = "engine/template.rs"]
mod template;
#[path = "engine/triggers.rs"]
mod triggers;

pub use extract::CommentSyntax;
pub use metrics::{PassMetrics, RewriteMetrics};
pub use template::Template;

pub(crate) use chunk::chunks;
pub(crate) use rewrite::Rewriter;
