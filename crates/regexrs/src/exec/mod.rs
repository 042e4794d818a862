// Pattern execution
//
// The driver tries the compiled tree at each start offset in turn,
// honoring the whole-pattern anchors, and reports capture offsets on
// the first success.

pub(crate) mod ctype;
mod matcher;

use crate::error::{RegexError, RegexResult};
use crate::flags::{CompFlags, ExecFlags};
use crate::pattern::Regex;
use matcher::MatchState;

/// A pair of byte offsets delimiting a match or capture.
///
/// An unset span is `(-1, -1)`, matching the convention of the POSIX
/// `regmatch_t` structure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Span {
    pub start: isize,
    pub end: isize,
}

impl Span {
    /// The unset sentinel.
    pub const UNSET: Span = Span { start: -1, end: -1 };

    /// Whether this span holds real offsets.
    pub fn is_set(&self) -> bool {
        self.start >= 0 && self.end >= 0
    }

    /// The span as an index range, when set.
    pub fn range(&self) -> Option<std::ops::Range<usize>> {
        if self.is_set() {
            Some(self.start as usize..self.end as usize)
        } else {
            None
        }
    }
}

impl Default for Span {
    fn default() -> Span {
        Span::UNSET
    }
}

/// Execute `re` against `input`, filling `captures` on success.
pub(crate) fn execute(
    re: &Regex,
    input: &str,
    captures: &mut [Span],
    flags: ExecFlags,
) -> RegexResult<()> {
    let text = input.as_bytes();
    let report = !re.flags.contains(CompFlags::NO_CAPTURES);
    if report {
        captures.fill(Span::UNSET);
    }

    let mut state = MatchState::new(re, text, captures, flags);
    match drive(re, text, flags, &mut state) {
        Some((start, end)) => {
            if report && !captures.is_empty() {
                captures[0] = Span {
                    start: start as isize,
                    end: end as isize,
                };
            }
            Ok(())
        }
        None => {
            // Blank out whatever intermediate attempts wrote.
            if report {
                captures.fill(Span::UNSET);
            }
            Err(RegexError::NoMatch)
        }
    }
}

/// Find the leftmost match, reporting only its bounds.
pub(crate) fn search(re: &Regex, text: &[u8], flags: ExecFlags) -> Option<(usize, usize)> {
    let mut none: [Span; 0] = [];
    let mut state = MatchState::new(re, text, &mut none, flags);
    drive(re, text, flags, &mut state)
}

/// Try the pattern at each start offset, up to and including the end of
/// the input so a zero-length match can land there.
fn drive(
    re: &Regex,
    text: &[u8],
    flags: ExecFlags,
    state: &mut MatchState,
) -> Option<(usize, usize)> {
    let newline = re.flags.contains(CompFlags::NEWLINE);
    for start in 0..=text.len() {
        // A left-anchored pattern only matches at the true start, or
        // right after a newline in newline-sensitive mode.
        if re.anchored_left {
            let at_start = start == 0 && !flags.contains(ExecFlags::NOT_LINE_START);
            let after_newline = newline && start != 0 && text[start - 1] == b'\n';
            if !at_start && !after_newline {
                continue;
            }
        }

        state.next = start;
        if state.run_match() {
            // A right-anchored pattern must also end at the true end,
            // or right before a newline in newline-sensitive mode.
            if re.anchored_right {
                let end = state.next;
                let at_end = end == text.len() && !flags.contains(ExecFlags::NOT_LINE_END);
                let before_newline = newline && end < text.len() && text[end] == b'\n';
                if !at_end && !before_newline {
                    continue;
                }
            }
            return Some((start, state.next));
        }
    }
    None
}

/// Iterator over the non-overlapping matches in a string, as returned
/// by [`Regex::find_iter`].
///
/// A zero-length match advances the scan by one byte so the iteration
/// always terminates.
#[derive(Debug)]
pub struct Matches<'r, 't> {
    re: &'r Regex,
    input: &'t str,
    pos: usize,
    done: bool,
}

impl<'r, 't> Matches<'r, 't> {
    pub(crate) fn new(re: &'r Regex, input: &'t str) -> Matches<'r, 't> {
        Matches {
            re,
            input,
            pos: 0,
            done: false,
        }
    }
}

impl Iterator for Matches<'_, '_> {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<(usize, usize)> {
        if self.done || self.pos > self.input.len() {
            return None;
        }

        // Past the first position the slice no longer starts a line.
        let flags = if self.pos == 0 {
            ExecFlags::empty()
        } else {
            ExecFlags::NOT_LINE_START
        };

        let Some((from, to)) = search(self.re, &self.input.as_bytes()[self.pos..], flags)
        else {
            self.done = true;
            return None;
        };

        let start = self.pos + from;
        let end = self.pos + to;
        self.pos = if start == end { end + 1 } else { end };
        Some((start, end))
    }
}
