// Tests for capture reporting
use crate::{CompFlags, ExecFlags, Regex, RegexError, Span};

fn ere(pattern: &str) -> Regex {
    Regex::with_flags(pattern, CompFlags::EXTENDED).unwrap()
}

#[test]
fn test_whole_match_and_groups() {
    let re = ere("(a)(b)");
    let spans = re.captures("ab").unwrap();
    assert_eq!(spans[0], Span { start: 0, end: 2 });
    assert_eq!(spans[1], Span { start: 0, end: 1 });
    assert_eq!(spans[2], Span { start: 1, end: 2 });
}

#[test]
fn test_captures_off_the_match_start() {
    let re = ere("(b)(c)");
    let spans = re.captures("abcd").unwrap();
    assert_eq!(spans[0].range(), Some(1..3));
    assert_eq!(spans[1].range(), Some(1..2));
    assert_eq!(spans[2].range(), Some(2..3));
}

#[test]
fn test_execute_with_short_array() {
    // Fewer slots than groups: the higher groups just go unreported.
    let re = ere("(a)(b)(c)");
    let mut spans = [Span::UNSET; 2];
    re.execute("abc", &mut spans, ExecFlags::empty()).unwrap();
    assert_eq!(spans[0].range(), Some(0..3));
    assert_eq!(spans[1].range(), Some(0..1));

    // No slots at all still matches.
    re.execute("abc", &mut [], ExecFlags::empty()).unwrap();
}

#[test]
fn test_no_match_leaves_slots_unset() {
    let re = ere("(a)(b)");
    let mut spans = [Span { start: 7, end: 7 }; 3];
    let result = re.execute("xyz", &mut spans, ExecFlags::empty());
    assert_eq!(result, Err(RegexError::NoMatch));
    assert!(spans.iter().all(|span| *span == Span::UNSET));
}

#[test]
fn test_no_captures_flag() {
    let re = Regex::with_flags("(a)(b)", CompFlags::EXTENDED | CompFlags::NO_CAPTURES).unwrap();
    let mut spans = [Span { start: 7, end: 7 }; 3];
    re.execute("ab", &mut spans, ExecFlags::empty()).unwrap();
    // The slots are not even blanked when captures are off.
    assert!(spans.iter().all(|span| span.start == 7));

    // Back-references still work without caller captures.
    let re = Regex::with_flags(r"(ab)\1", CompFlags::EXTENDED | CompFlags::NO_CAPTURES).unwrap();
    assert!(re.is_match("abab"));
    assert!(!re.is_match("abxx"));
}

#[test]
fn test_unmatched_group_is_unset() {
    let re = ere("(a)|(b)");
    let spans = re.captures("b").unwrap();
    assert_eq!(spans[0].range(), Some(0..1));
    assert!(!spans[1].is_set());
    assert_eq!(spans[2].range(), Some(0..1));
}

#[test]
fn test_repeated_group_keeps_last_iteration() {
    let re = ere("(a|b)*");
    let spans = re.captures("ab").unwrap();
    assert_eq!(spans[0].range(), Some(0..2));
    assert_eq!(spans[1].range(), Some(1..2));
}

#[test]
fn test_branch_failure_restores_captures() {
    let re = ere("(ab)c|(a)b");
    let spans = re.captures("ab").unwrap();
    // The first alternative got as far as capturing before failing; its
    // group must come back unset.
    assert!(!spans[1].is_set());
    assert_eq!(spans[2].range(), Some(0..1));
}

#[test]
fn test_back_reference_beyond_internal_slots() {
    // Group 10 captures fine; only back-references stop at \9.
    let re = ere("(a)(b)(c)(d)(e)(f)(g)(h)(i)(j)");
    assert_eq!(re.subexpr_count(), 10);
    let spans = re.captures("abcdefghij").unwrap();
    assert_eq!(spans[10].range(), Some(9..10));

    let re = ere(r"(a)(b)(c)(d)(e)(f)(g)(h)(i)\9");
    assert!(re.is_match("abcdefghii"));
    assert!(!re.is_match("abcdefghix"));
}
