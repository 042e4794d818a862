// Tests for case-insensitive matching
use crate::{CompFlags, Regex};

fn icase(pattern: &str) -> Regex {
    Regex::with_flags(pattern, CompFlags::IGNORE_CASE).unwrap()
}

#[test]
fn test_ignore_case_literals() {
    let re = icase("ABC");
    assert!(re.is_match("abc"));
    assert!(re.is_match("AbC"));

    let re = icase("abc");
    assert!(re.is_match("ABC"));
    assert!(!re.is_match("abd"));
}

#[test]
fn test_ignore_case_back_reference() {
    let re = Regex::with_flags(
        r"(ab)\1",
        CompFlags::EXTENDED | CompFlags::IGNORE_CASE,
    )
    .unwrap();
    // The reference re-matches the captured text case-insensitively.
    assert!(re.is_match("abAB"));
    assert!(!re.is_match("abba"));
}

#[test]
fn test_ignore_case_bracket_characters() {
    let re = icase("[abc]");
    assert!(re.is_match("B"));
    assert!(!re.is_match("d"));
}

#[test]
fn test_ignore_case_widens_case_classes() {
    let re = icase("[[:lower:]]");
    assert!(re.is_match("a"));
    assert!(re.is_match("A"));
    assert!(!re.is_match("1"));

    let re = icase("[[:upper:]]");
    assert!(re.is_match("a"));
    assert!(re.is_match("A"));
}

#[test]
fn test_ignore_case_does_not_widen_ranges() {
    // Ranges are compared byte for byte even when case is ignored.
    let re = icase("[a-c]");
    assert!(re.is_match("b"));
    assert!(!re.is_match("B"));
}

#[test]
fn test_case_sensitive_by_default() {
    let re = Regex::new("ABC").unwrap();
    assert!(!re.is_match("abc"));
}
