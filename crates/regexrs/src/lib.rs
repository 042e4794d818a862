//! POSIX regular expressions: a compiler for the basic (BRE) and
//! extended (ERE) syntaxes and a backtracking matcher over the compiled
//! expression tree.
//!
//! Patterns support ordinary characters, `.`, bracket expressions with
//! ranges and named classes, anchors, grouping with capture offsets,
//! alternation (extended syntax), duplication with `*` `+` `?` `{m,n}`,
//! back-references `\1`..`\9`, and the `[[:<:]]` / `[[:>:]]` word
//! boundary markers.
//!
//! ```
//! use regexrs::{CompFlags, Regex, Span};
//!
//! let re = Regex::with_flags("(a+)(b)", CompFlags::EXTENDED).unwrap();
//! let spans = re.captures("xaab").unwrap();
//! assert_eq!(spans[0], Span { start: 1, end: 4 });
//! assert_eq!(spans[1], Span { start: 1, end: 3 });
//! assert_eq!(spans[2], Span { start: 3, end: 4 });
//! ```
//!
//! Matching is the usual backtracking search: worst-case exponential on
//! pathological patterns, with no timeout mechanism. Input is treated
//! as a sequence of single bytes.

#[cfg(test)]
mod test;

mod compiler;
mod error;
mod exec;
mod flags;
mod pattern;

pub use error::{RegexError, RegexResult};
pub use exec::{Matches, Span};
pub use flags::{CompFlags, ExecFlags};
pub use pattern::Regex;
