//! Rewrite run metrics.
//!
//! A small set of structs used to observe what a rewrite run did and how
//! long it took. Collection is cheap and always on; the detailed values are
//! only surfaced by the verbose API, so the common path pays for a handful
//! of counters and nothing else.

use std::time::Duration;

/// Timing and per-pass details for one rewrite run.
#[derive(Debug, Default, Clone)]
pub struct RewriteMetrics {
    /// Total elapsed time for the run.
    pub total: Duration,
    /// One entry per rewritten chunk, in rewrite order.
    pub passes: Vec<PassMetrics>,
}

/// Details of a single rewrite pass (one matched chunk).
#[derive(Debug, Default, Clone)]
pub struct PassMetrics {
    /// Elapsed time for the pass.
    pub duration: Duration,
    /// Name of the rule that matched the chunk.
    pub rule: &'static str,
    /// Chunk span (byte offsets) in the buffer as it was when the pass
    /// started.
    pub chunk_start: usize,
    pub chunk_end: usize,
    /// Distinct trigger texts rendered.
    pub triggers: usize,
    /// Bytes of generated output inserted after the chunk.
    pub rendered_bytes: usize,
}
