//! Chunk grouping.
//!
//! A chunk is the unit a rule sees: a maximal contiguous run of same-kind
//! comment occurrences. Two things break a run:
//!
//! - a blank line (the extractor's sentinel classifies differently from a
//!   line comment, so the grouping splits around it), and
//! - any gap between occurrences, which means non-comment text intervened.
//!
//! Runs consisting solely of sentinels are dropped; they carry no content.

use crate::engine::CommentSyntax;
use crate::{Chunk, Occurrence};

/// Group the comment occurrences of `text`, from `start` onward, into
/// chunks.
///
/// Collection advances one character past each occurrence's start, so a
/// zero-width sentinel cannot be found twice and overlapping matches are
/// impossible.
pub(crate) fn chunks(syntax: &CommentSyntax, text: &str, start: usize) -> Vec<Chunk> {
    let mut occs: Vec<Occurrence> = Vec::new();
    let mut pos = start;
    while let Some(occ) = syntax.next_comment(text, pos) {
        pos = bump(text, occ.start);
        occs.push(occ);
        if pos > text.len() {
            break;
        }
    }

    let mut out: Vec<Chunk> = Vec::new();
    let mut run: Vec<Occurrence> = Vec::new();
    for occ in occs {
        let breaks = match run.last() {
            Some(prev) => prev.is_line() != occ.is_line() || occ.start != prev.end,
            None => false,
        };
        if breaks {
            out.push(Chunk { occurrences: std::mem::take(&mut run) });
        }
        run.push(occ);
    }
    if !run.is_empty() {
        out.push(Chunk { occurrences: run });
    }

    out.retain(|c| !c.is_blank());
    out
}

/// The next char boundary strictly after `i`.
fn bump(text: &str, i: usize) -> usize {
    let mut next = i + 1;
    while next < text.len() && !text.is_char_boundary(next) {
        next += 1;
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::CommentSyntax;

    fn lisp() -> CommentSyntax {
        CommentSyntax { line: Some(regex!(r"(?m)^;; (.*\n)")), block: None }
    }

    fn contents(text: &str) -> Vec<String> {
        chunks(&lisp(), text, 0).iter().map(|c| c.content()).collect()
    }

    #[test]
    fn consecutive_line_comments_form_one_chunk() {
        assert_eq!(contents(";; foo\n;; bar\n"), vec!["foo\nbar\n"]);
    }

    #[test]
    fn blank_line_splits_a_run() {
        assert_eq!(contents(";; foo\n\n;; bar\n"), vec!["foo\n", "bar\n"]);
    }

    #[test]
    fn removing_the_blank_line_merges_again() {
        let split = contents(";; foo\n\n;; bar\n");
        let merged = contents(";; foo\n;; bar\n");
        assert_eq!(split.len(), 2);
        assert_eq!(merged.len(), 1);
        assert_eq!(merged[0], split.concat());
    }

    #[test]
    fn intervening_code_splits_a_run() {
        assert_eq!(contents(";; foo\n(code)\n;; bar\n"), vec!["foo\n", "bar\n"]);
    }

    #[test]
    fn sentinel_only_runs_are_dropped() {
        assert!(contents("\n\nplain text\n\n").is_empty());
    }

    #[test]
    fn chunk_span_is_contiguous() {
        let text = "x\n;; a\n;; b\nrest\n";
        let cs = chunks(&lisp(), text, 0);
        assert_eq!(cs.len(), 1);
        assert_eq!(&text[cs[0].start()..cs[0].end()], ";; a\n;; b\n");
    }

    #[test]
    fn start_offset_skips_earlier_comments() {
        let text = ";; a\n\n;; b\n";
        let cs = chunks(&lisp(), text, 5);
        assert_eq!(cs.len(), 1);
        assert_eq!(cs[0].content(), "b\n");
    }

    #[test]
    fn block_comment_is_its_own_chunk() {
        let cxx = CommentSyntax {
            line: Some(regex!(r"(?m)^// (.*\n)")),
            block: Some(regex!(r"(?s)/\*(.*?)\*/")),
        };
        let text = "// a\n/*b*/\n/*c*/\n";
        let got: Vec<String> = chunks(&cxx, text, 0).iter().map(|c| c.content()).collect();
        assert_eq!(got, vec!["a\n", "b", "c"]);
    }
}
