//! Language catalogue.
//!
//! A language is one configuration value: a comment syntax plus the
//! ordered rule chain active for that language. New languages are
//! assembled by composition; nothing here subclasses anything.

use crate::engine::CommentSyntax;
use crate::rules::{line_code_gen, racket_constant_gen};
use crate::Rule;
use std::path::Path;

/// A language configuration.
///
/// `rules` is evaluated in order; language-specific rules come first so
/// they win over the shared ones (see `rules::match_chain`).
#[derive(Debug)]
pub struct Language {
    pub name: &'static str,
    pub syntax: CommentSyntax,
    pub rules: Vec<Rule>,
}

pub fn racket() -> Language {
    Language {
        name: "racket",
        syntax: CommentSyntax { line: Some(regex!(r"(?m)^;; (.*\n)")), block: None },
        rules: vec![racket_constant_gen(), line_code_gen()],
    }
}

pub fn python() -> Language {
    Language {
        name: "python",
        syntax: CommentSyntax { line: Some(regex!(r"(?m)^# (.*\n)")), block: None },
        rules: vec![line_code_gen()],
    }
}

pub fn shell() -> Language {
    Language { name: "shell", ..python() }
}

pub fn c() -> Language {
    Language {
        name: "c",
        syntax: CommentSyntax { line: None, block: Some(regex!(r"(?s)/\*(.*?)\*/")) },
        rules: vec![line_code_gen()],
    }
}

pub fn cxx() -> Language {
    Language {
        name: "c++",
        syntax: CommentSyntax {
            line: Some(regex!(r"(?m)^// (.*\n)")),
            block: Some(regex!(r"(?s)/\*(.*?)\*/")),
        },
        rules: vec![line_code_gen()],
    }
}

pub fn java() -> Language {
    Language { name: "java", ..cxx() }
}

/// The inert language: no comment syntax, no rules. Updating with it is
/// the identity function.
pub fn unknown() -> Language {
    Language { name: "unknown", syntax: CommentSyntax { line: None, block: None }, rules: Vec::new() }
}

/// Look up a preset language by name.
pub fn by_name(name: &str) -> Option<Language> {
    match name {
        "racket" | "rkt" | "scheme" => Some(racket()),
        "python" | "py" => Some(python()),
        "shell" | "sh" => Some(shell()),
        "c" => Some(c()),
        "c++" | "cpp" | "cxx" => Some(cxx()),
        "java" => Some(java()),
        "unknown" => Some(unknown()),
        _ => None,
    }
}

/// Pick a preset language from a file's extension.
pub fn for_path(path: &Path) -> Option<Language> {
    match path.extension()?.to_str()? {
        "rkt" | "scm" | "ss" => Some(racket()),
        "py" => Some(python()),
        "sh" | "bash" => Some(shell()),
        "c" | "h" => Some(c()),
        "cc" | "cpp" | "cxx" | "hh" | "hpp" => Some(cxx()),
        "java" => Some(java()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{comments, update};

    // End-to-end cases for the preset languages. Every generation case is
    // also run on its own output to hold the idempotence contract.
    fn check_generates(lang: &Language, src: &str, out: &str) {
        assert_eq!(update(src, lang).unwrap(), out);
        assert_eq!(update(out, lang).unwrap(), out);
    }

    const RACKET_CONSTANT_TEXT: &str = "
;; Constant Gen: r(\\d+)/(\\d+) (make-my-rational \\1 \\2)

r5/7
";

    const RACKET_CONSTANT_ANSWER: &str = "
;; Constant Gen: r(\\d+)/(\\d+) (make-my-rational \\1 \\2)
(define r5/7 (make-my-rational 5 7))

r5/7
";

    #[test]
    fn racket_constant_generation() {
        check_generates(&racket(), RACKET_CONSTANT_TEXT, RACKET_CONSTANT_ANSWER);
    }

    #[test]
    fn racket_constant_generation_with_other_comments() {
        let src = format!("\n;; blah\n{RACKET_CONSTANT_TEXT}");
        let out = format!("\n;; blah\n{RACKET_CONSTANT_ANSWER}");
        check_generates(&racket(), &src, &out);
    }

    #[test]
    fn racket_line_generation() {
        let src = "
;; Line Gen:
;; r(\\d+)/(\\d+)
;; (define \\g<0> (make-my-rational \\1 \\2))

r5/7
";
        let out = "
;; Line Gen:
;; r(\\d+)/(\\d+)
;; (define \\g<0> (make-my-rational \\1 \\2))
(define r5/7 (make-my-rational 5 7))

r5/7
";
        check_generates(&racket(), src, out);
    }

    #[test]
    fn python_line_generation() {
        let src = "
# Line Gen:
# g(\\d+)_(\\d+)
# \\g<0> = divmod(\\1, \\2)

print g9_7
";
        let out = "
# Line Gen:
# g(\\d+)_(\\d+)
# \\g<0> = divmod(\\1, \\2)
g9_7 = divmod(9, 7)

print g9_7
";
        check_generates(&python(), src, out);
    }

    #[test]
    fn duplicate_triggers_define_once() {
        let src = format!("{RACKET_CONSTANT_TEXT}r5/7\n");
        let expected = format!("{RACKET_CONSTANT_ANSWER}r5/7\n");
        check_generates(&racket(), &src, &expected);
    }

    #[test]
    fn comment_extraction_across_blank_lines() {
        let got = comments("\n;; foo\n\n;; bar\n", &racket());
        assert_eq!(got, vec!["foo\n", "bar\n"]);
    }

    #[test]
    fn comment_extraction_sees_only_the_directive() {
        let got = comments(RACKET_CONSTANT_ANSWER, &racket());
        assert_eq!(got, vec!["Constant Gen: r(\\d+)/(\\d+) (make-my-rational \\1 \\2)\n"]);
    }

    #[test]
    fn cxx_line_generation_in_block_comment() {
        // The generated block starts immediately after `*/`, so the first
        // newline there belongs to the block and is regenerated with it.
        let src = "/*Line Gen:\nport_(\\d+)\nconst int \\g<0> = \\1;\n*/\n\nport_80\n";
        let out = update(src, &cxx()).unwrap();
        assert_eq!(
            out,
            "/*Line Gen:\nport_(\\d+)\nconst int \\g<0> = \\1;\n*/const int port_80 = 80;\n\nport_80\n"
        );
        assert_eq!(update(&out, &cxx()).unwrap(), out);
    }

    #[test]
    fn unknown_language_is_identity() {
        let src = "# Line Gen:\n# p\n# t\n\nanything\n";
        assert_eq!(update(src, &unknown()).unwrap(), src);
    }

    #[test]
    fn lookup_by_name_and_path() {
        assert_eq!(by_name("racket").unwrap().name, "racket");
        assert_eq!(by_name("cpp").unwrap().name, "c++");
        assert!(by_name("cobol").is_none());
        assert_eq!(for_path(Path::new("x/y.py")).unwrap().name, "python");
        assert_eq!(for_path(Path::new("lib.rkt")).unwrap().name, "racket");
        assert!(for_path(Path::new("README")).is_none());
    }
}
