//! Trigger collection and rendering.
//!
//! Given the comment-stripped code view and a matched directive, this pass
//! decides what gets generated. Deduplication is by exact matched literal
//! text: a trigger normally names a symbol that should be defined once, so
//! two occurrences with identical text produce a single rendering. Output
//! order is ascending lexicographic by matched text, not source order, so
//! re-runs are stable no matter where triggers physically appear.

use crate::{Error, RuleMatch};
use std::collections::BTreeMap;

/// Concatenated renderings for one directive, plus the first rendering
/// error if one occurred. `text` holds everything rendered before the
/// error; it is kept, not rolled back.
#[derive(Debug)]
pub(crate) struct Rendered {
    pub text: String,
    /// Distinct trigger texts found.
    pub triggers: usize,
    pub error: Option<Error>,
}

/// Find every non-overlapping occurrence of the trigger pattern in `code`,
/// deduplicate and order them, and render each through the template.
///
/// The first occurrence of a given matched text is its representative;
/// later duplicates fold in silently. Zero occurrences renders to the
/// empty string.
pub(crate) fn render_triggers(code: &str, m: &RuleMatch) -> Rendered {
    let mut reps: BTreeMap<&str, regex::Captures<'_>> = BTreeMap::new();
    for caps in m.trigger.captures_iter(code) {
        let Some(whole) = caps.get(0) else { continue };
        reps.entry(whole.as_str()).or_insert(caps);
    }

    let triggers = reps.len();
    let mut text = String::new();
    for caps in reps.values() {
        match m.template.render(caps) {
            Ok(s) => text.push_str(&s),
            Err(e) => return Rendered { text, triggers, error: Some(e) },
        }
    }
    Rendered { text, triggers, error: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Template;
    use regex::Regex;

    fn rule_match(trigger: &str, template: &str) -> RuleMatch {
        RuleMatch {
            name: "test",
            trigger: Regex::new(trigger).unwrap(),
            template: Template::parse(template).unwrap(),
        }
    }

    #[test]
    fn duplicate_trigger_text_renders_once() {
        let m = rule_match(r"r(\d+)/(\d+)", "(define \\g<0> (make-rat \\1 \\2))\n");
        let out = render_triggers("r5/7 and again r5/7\n", &m);
        assert!(out.error.is_none());
        assert_eq!(out.triggers, 1);
        assert_eq!(out.text, "(define r5/7 (make-rat 5 7))\n");
    }

    #[test]
    fn distinct_triggers_sort_by_matched_text() {
        let m = rule_match(r"r(\d+)/(\d+)", "\\g<0>\n");
        // Source order is deliberately descending.
        let out = render_triggers("r9/2 r10/3 r1/4\n", &m);
        assert_eq!(out.triggers, 3);
        assert_eq!(out.text, "r1/4\nr10/3\nr9/2\n");
    }

    #[test]
    fn zero_occurrences_render_empty() {
        let m = rule_match(r"never", "\\g<0>\n");
        let out = render_triggers("nothing here\n", &m);
        assert_eq!(out.triggers, 0);
        assert_eq!(out.text, "");
        assert!(out.error.is_none());
    }

    #[test]
    fn render_error_keeps_earlier_output() {
        // Group 2 exists only when the optional suffix matched; "x1" sorts
        // before "z", so the first rendering lands before the error.
        let m = rule_match(r"(x|z)(1)?", "\\g<0>:\\2\n");
        let out = render_triggers("z x1\n", &m);
        assert_eq!(out.text, "x1:1\n");
        assert!(matches!(out.error, Some(Error::MissingGroup { group: 2, .. })));
    }
}
