// Tests for basic (BRE) syntax matching
use crate::Regex;

#[test]
fn test_empty_pattern_matches_everywhere() {
    let re = Regex::new("").unwrap();
    assert_eq!(re.find("anything"), Some((0, 0)));
    assert_eq!(re.find(""), Some((0, 0)));
}

#[test]
fn test_plain_string() {
    let re = Regex::new("abc").unwrap();
    assert_eq!(re.find("xxabcxx"), Some((2, 5)));
    assert!(!re.is_match("xxabxcx"));
    assert!(!re.is_match(""));
}

#[test]
fn test_star_is_greedy() {
    let re = Regex::new("a*").unwrap();
    assert_eq!(re.find("aaab"), Some((0, 3)));
    // Zero occurrences still match, with zero width.
    assert_eq!(re.find("bbb"), Some((0, 0)));
}

#[test]
fn test_any_character() {
    let re = Regex::new("a.c").unwrap();
    assert!(re.is_match("abc"));
    assert!(re.is_match("a-c"));
    assert!(!re.is_match("ac"));
    // The dot needs a real byte to consume.
    assert!(!re.is_match("ab"));
}

#[test]
fn test_escaped_group_and_duplication() {
    let re = Regex::new(r"x\(ab\)*y").unwrap();
    assert!(re.is_match("xy"));
    assert!(re.is_match("xaby"));
    assert!(re.is_match("xababy"));
    assert!(!re.is_match("xaiby"));
}

#[test]
fn test_escaped_braces() {
    let re = Regex::new(r"a\{2,4\}").unwrap();
    assert!(!re.is_match("a"));
    assert!(re.is_match("aa"));
    assert_eq!(re.find("aaaaa"), Some((0, 4)));

    let re = Regex::new(r"ba\{2\}").unwrap();
    assert!(re.is_match("xbaa"));
    assert!(!re.is_match("xba"));
}

#[test]
fn test_leading_star_is_literal() {
    let re = Regex::new("*ab").unwrap();
    assert_eq!(re.find("x*ab"), Some((1, 4)));
    assert!(!re.is_match("xab"));
}

#[test]
fn test_dollar_in_the_middle_is_literal() {
    let re = Regex::new("a$b").unwrap();
    assert_eq!(re.find("xa$b"), Some((1, 4)));
    assert!(!re.is_match("ab"));
}

#[test]
fn test_quoted_characters() {
    let re = Regex::new(r"a\.b").unwrap();
    assert!(re.is_match("a.b"));
    assert!(!re.is_match("axb"));

    let re = Regex::new(r"\\").unwrap();
    assert!(re.is_match(r"x\y"));
}

#[test]
fn test_back_reference() {
    let re = Regex::new(r"\(ab\)\1").unwrap();
    assert!(re.is_match("abab"));
    assert!(!re.is_match("abac"));

    let re = Regex::new(r"\(a*\)-\1").unwrap();
    assert!(re.is_match("aa-aa"));
    // An empty capture re-matches as the empty string.
    assert!(re.is_match("-"));
    assert!(!re.is_match("aaxaa"));
}

#[test]
fn test_plus_is_not_special_in_basic_mode() {
    let re = Regex::new("a+").unwrap();
    assert!(re.is_match("a+"));
    assert!(!re.is_match("aa"));
}
