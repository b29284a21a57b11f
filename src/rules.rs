//! Built-in generation rules and rule-chain evaluation.
//!
//! A language activates an ordered list of rules (its chain). Evaluation is
//! an explicit chain of responsibility: try each rule top to bottom and
//! take the first match. A language extension that wants its own directive
//! to win simply places its rule ahead of the shared ones in the list;
//! there is no dispatch mechanism beyond the ordering.
//!
//! Both built-in rules are instances of [`Rule::hooked`]: a directive
//! pattern that captures the trigger pattern (group 1) and the template
//! payload (group 2), plus a wrapper that splices the payload into the
//! final output template at `{}`.

use crate::{Error, Rule, RuleMatch};

/// Evaluate `rules` in declared order against a chunk's content and return
/// the first match. Configuration errors propagate immediately; scanning
/// with an ill-defined trigger would be worse than stopping.
pub fn match_chain(rules: &[Rule], content: &str) -> Result<Option<RuleMatch>, Error> {
    for rule in rules {
        if let Some(m) = rule.match_comment(content)? {
            return Ok(Some(m));
        }
    }
    Ok(None)
}

/// Line-by-line generation, available to every language.
///
/// Directive format, as chunk content:
///
/// ```text
/// Line Gen:
/// <trigger pattern>
/// <template line>
/// ```
///
/// Each distinct trigger occurrence renders the template line plus a
/// trailing newline.
pub fn line_code_gen() -> Rule {
    Rule::hooked("line code gen", regex!(r"^Line Gen:\n(.+)\n(.+)\n"), "{}\n")
}

/// Constant generation for Racket: `Constant Gen: <trigger> <expr>` emits
/// one `(define <match> <expr>)` line per distinct trigger occurrence.
pub fn racket_constant_gen() -> Rule {
    Rule::hooked(
        "racket constant gen",
        regex!(r"^Constant Gen: (\S+) (.*)\n"),
        "(define \\g<0> {})\n",
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn line_code_gen_parses_its_directive() {
        let m = line_code_gen()
            .match_comment("Line Gen:\nr(\\d+)/(\\d+)\n(define \\g<0> (make-rat \\1 \\2))\n")
            .unwrap()
            .unwrap();
        assert_eq!(m.name, "line code gen");
        assert!(m.trigger.is_match("r5/7"));
    }

    #[test]
    fn plain_comment_is_not_a_directive() {
        assert!(line_code_gen().match_comment("blah\n").unwrap().is_none());
        assert!(racket_constant_gen().match_comment("blah\n").unwrap().is_none());
    }

    #[test]
    fn header_must_sit_at_the_start() {
        let content = "note\nLine Gen:\np\nt\n";
        assert!(line_code_gen().match_comment(content).unwrap().is_none());
    }

    #[test]
    fn malformed_directive_falls_through() {
        // Header matches but the template line is missing.
        assert!(line_code_gen().match_comment("Line Gen:\nonly-a-pattern\n").unwrap().is_none());
    }

    #[test]
    fn invalid_trigger_pattern_is_a_configuration_error() {
        let err = racket_constant_gen().match_comment("Constant Gen: a( x\n").unwrap_err();
        assert!(matches!(err, Error::Trigger { .. }));
    }

    #[test]
    fn chain_returns_the_first_match() {
        let both = "Constant Gen: a(\\d+) (box \\1)\n";
        let first = Rule::hooked("first", regex!(r"^Constant Gen: (\S+) (.*)\n"), "one {}\n");
        let second = Rule::hooked("second", regex!(r"^Constant Gen: (\S+) (.*)\n"), "two {}\n");
        let m = match_chain(&[first, second], both).unwrap().unwrap();
        assert_eq!(m.name, "first");
    }

    #[test]
    fn chain_falls_through_to_the_second_rule() {
        let rules = [racket_constant_gen(), line_code_gen()];
        let m = match_chain(&rules, "Line Gen:\np(\\d)\nq\\1\n").unwrap().unwrap();
        assert_eq!(m.name, "line code gen");
    }

    #[test]
    fn empty_chain_never_matches() {
        assert!(match_chain(&[], "Line Gen:\np\nt\n").unwrap().is_none());
    }
}
