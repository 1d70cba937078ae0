use regex_fsm::{accepts, build};

use crate::init_logging;

/// Each entry is (pattern, input, expected verdict).
const TESTS: &[(&str, &str, bool)] = &[
    // literals
    ("abc", "abc", true),
    ("abc", "ab", false),
    ("abc", "abcd", false),
    ("abc", "abd", false),
    ("abc", "", false),
    // wildcard
    ("a.c", "abc", true),
    ("a.c", "axc", true),
    ("a.c", "a.c", true),
    ("a.c", "ac", false),
    ("...", "xyz", true),
    ("...", "xy", false),
    // zero or more
    ("a*b", "b", true),
    ("a*b", "ab", true),
    ("a*b", "aaab", true),
    ("a*b", "aaa", false),
    ("a*b", "bb", false),
    ("a*b", "", false),
    // one or more
    ("a+b", "b", false),
    ("a+b", "ab", true),
    ("a+b", "aaab", true),
    ("a+b", "aaa", false),
    ("a+", "", false),
    ("a+", "a", true),
    ("a+", "aaaa", true),
    ("a+", "aab", false),
    // empty pattern
    ("", "", true),
    ("", "a", false),
    // trailing quantifier
    ("a*", "", true),
    ("a*", "a", true),
    ("a*", "aaaa", true),
    ("a*", "aaab", false),
    ("a*", "b", false),
    // quantified wildcard
    (".*", "", true),
    (".*", "anything at all", true),
    ("x.*", "x", true),
    ("x.*", "xyz", true),
    ("x.*", "yz", false),
    (".+", "", false),
    (".+", "q", true),
    // quantifier in the middle
    ("xa*y", "xy", true),
    ("xa*y", "xaaay", true),
    ("xa*y", "xaaby", false),
    ("xa+y", "xy", false),
    ("xa+y", "xay", true),
    ("ha+.", "haz", true),
    // every ASCII character that is not '.', '*' or '+' is a literal
    ("(a)", "(a)", true),
    ("a?b", "a?b", true),
    ("a?b", "ab", false),
    ("[ab]", "[ab]", true),
    ("^a$", "^a$", true),
    ("a b", "a b", true),
];

#[test]
fn suite() {
    init_logging();
    for &(pattern, input, expected) in TESTS {
        let fsm = build(pattern).unwrap();
        assert_eq!(
            expected,
            accepts(&fsm, input),
            "pattern: {:?}, input: {:?}\n{:?}",
            pattern,
            input,
            fsm,
        );
    }
}

/// Inputs in these patterns would be accepted by a backtracking engine, but
/// the greedy walk commits too early. They pin down current behavior.
#[test]
fn greedy_walk_limitations() {
    init_logging();
    let fsm = build("a*b*").unwrap();
    assert!(!accepts(&fsm, ""));
    assert!(!accepts(&fsm, "a"));
    assert!(accepts(&fsm, "b"));
    assert!(accepts(&fsm, "bb"));

    let fsm = build("a*a").unwrap();
    assert!(accepts(&fsm, "a"));
    assert!(!accepts(&fsm, "aa"));

    // The wildcard after the '+' takes the second 'a'.
    let fsm = build("ha+.").unwrap();
    assert!(!accepts(&fsm, "haaz"));
}

#[test]
fn unsupported_tokens() {
    for pattern in ["é", "aé", "a*ü", "日本", "a+\u{1F600}"] {
        let err = build(pattern).unwrap_err();
        assert!(!err.token().is_ascii(), "{:?}", pattern);
        assert_eq!(pattern[err.offset()..].chars().next(), Some(err.token()));
    }
}

#[test]
fn non_ascii_input_is_rejected_not_an_error() {
    let fsm = build("a.c").unwrap();
    assert!(accepts(&fsm, "aéc"));
    let fsm = build("abc").unwrap();
    assert!(!accepts(&fsm, "äbc"));
}
