// Compiled pattern representation
//
// The parser builds an arena-backed expression tree: every node lives in
// one Vec owned by the compiled pattern, children and parents are plain
// indices. Dropping the pattern frees the whole tree at once.

use crate::compiler;
use crate::error::RegexResult;
use crate::exec::{self, Matches, Span};
use crate::flags::{CompFlags, ExecFlags};

pub(crate) type NodeId = usize;

/// The root node: the subexpression covering the whole pattern.
pub(crate) const ROOT: NodeId = 0;

/// One node of the compiled expression tree.
#[derive(Debug)]
pub(crate) struct Node {
    pub(crate) kind: NodeKind,
    /// Minimum repeat count.
    pub(crate) min: usize,
    /// Maximum repeat count, `None` meaning unbounded.
    pub(crate) max: Option<usize>,
    pub(crate) parent: Option<NodeId>,
    pub(crate) children: Vec<NodeId>,
}

#[derive(Debug)]
pub(crate) enum NodeKind {
    /// A run of ordinary characters, compared byte for byte.
    Literal(Vec<u8>),
    /// `.`: any single byte.
    AnyChar,
    /// A `[...]` character set.
    Bracket(BracketSet),
    /// A capturing group. Index 0 is the whole pattern.
    Subexpr { index: usize },
    /// An alternation; children are the branch options.
    Branch,
    /// One alternative of a branch.
    BranchOption,
    /// `\1`..`\9`: re-match the text of a previous capture.
    BackRef(usize),
    /// `^` in extended syntax.
    LineStart,
    /// `$` in extended syntax.
    LineEnd,
    /// `[[:<:]]`.
    WordStart,
    /// `[[:>:]]`.
    WordEnd,
}

/// The contents of a bracket expression.
#[derive(Debug, Default)]
pub(crate) struct BracketSet {
    /// Plain characters listed in the set.
    pub(crate) chars: Vec<u8>,
    /// Ranges and named classes, in source order.
    pub(crate) items: Vec<BracketItem>,
    /// `[^...]`: the set matches bytes *not* described by it.
    pub(crate) negated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BracketItem {
    /// An inclusive `a-z` range.
    Range(u8, u8),
    /// A `[:class:]` named class.
    Class(CharClass),
}

/// The named character classes, plus the `name` class
/// (alphanumeric or underscore) used by the word boundary nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum CharClass {
    Alnum,
    Alpha,
    Blank,
    Cntrl,
    Digit,
    Graph,
    Lower,
    Print,
    Punct,
    Space,
    Upper,
    Xdigit,
    Name,
}

/// Arena holding every node of one compiled tree.
#[derive(Debug)]
pub(crate) struct ExprTree {
    nodes: Vec<Node>,
}

impl ExprTree {
    /// Create a tree holding only the root subexpression.
    pub(crate) fn new() -> ExprTree {
        let mut tree = ExprTree { nodes: Vec::new() };
        tree.alloc(NodeKind::Subexpr { index: 0 });
        tree
    }

    /// Allocate a detached node with the default repeat range of
    /// exactly one occurrence.
    pub(crate) fn alloc(&mut self, kind: NodeKind) -> NodeId {
        self.nodes.push(Node {
            kind,
            min: 1,
            max: Some(1),
            parent: None,
            children: Vec::new(),
        });
        self.nodes.len() - 1
    }

    /// Drop a node that was just allocated and never attached. Used when
    /// a literal run gets merged into its predecessor.
    pub(crate) fn discard_last(&mut self, id: NodeId) {
        debug_assert_eq!(id, self.nodes.len() - 1);
        debug_assert!(self.nodes[id].children.is_empty());
        self.nodes.pop();
    }

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id]
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        &mut self.nodes[id]
    }

    /// Append `child` to `parent`'s child list.
    pub(crate) fn attach(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[child].parent = Some(parent);
        self.nodes[parent].children.push(child);
    }

    pub(crate) fn first_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].children.first().copied()
    }

    /// The sibling following `id` in its parent's child list.
    pub(crate) fn next_sibling(&self, id: NodeId) -> Option<NodeId> {
        let parent = self.nodes[id].parent?;
        let siblings = &self.nodes[parent].children;
        let at = siblings.iter().position(|&c| c == id)?;
        siblings.get(at + 1).copied()
    }
}

/// A compiled regular expression.
///
/// Compilation happens once, in [`Regex::new`] or [`Regex::with_flags`];
/// the compiled form is immutable afterwards, so one `Regex` may be
/// shared freely between threads as long as every call supplies its own
/// capture buffer.
///
/// ```
/// use regexrs::Regex;
///
/// let re = Regex::new("abc").unwrap();
/// assert_eq!(re.find("xxabcxx"), Some((2, 5)));
/// ```
#[derive(Debug)]
pub struct Regex {
    pub(crate) tree: ExprTree,
    pub(crate) flags: CompFlags,
    pub(crate) subexpr_count: usize,
    /// `^` at the start of a basic pattern.
    pub(crate) anchored_left: bool,
    /// `$` at the end of a basic pattern.
    pub(crate) anchored_right: bool,
}

impl Regex {
    /// Compile `pattern` as a basic (BRE) regular expression with no
    /// extra flags.
    pub fn new(pattern: &str) -> RegexResult<Regex> {
        compiler::compile(pattern, CompFlags::empty())
    }

    /// Compile `pattern` with the given flags.
    ///
    /// ```
    /// use regexrs::{CompFlags, Regex};
    ///
    /// let re = Regex::with_flags("cat|dog", CompFlags::EXTENDED).unwrap();
    /// assert!(re.is_match("I have a dog"));
    /// ```
    pub fn with_flags(pattern: &str, flags: CompFlags) -> RegexResult<Regex> {
        compiler::compile(pattern, flags)
    }

    /// The number of capturing subexpressions in the pattern.
    pub fn subexpr_count(&self) -> usize {
        self.subexpr_count
    }

    /// Search `input` for a match, filling `captures` with the offsets
    /// of the overall match (slot 0) and each subexpression.
    ///
    /// `captures` may be any length; slots past its end are silently not
    /// reported, and nothing is reported when the pattern was compiled
    /// with [`CompFlags::NO_CAPTURES`]. Returns `Err(RegexError::NoMatch)`
    /// when the input does not match.
    pub fn execute(
        &self,
        input: &str,
        captures: &mut [Span],
        flags: ExecFlags,
    ) -> RegexResult<()> {
        exec::execute(self, input, captures, flags)
    }

    /// Whether `input` contains a match.
    pub fn is_match(&self, input: &str) -> bool {
        exec::search(self, input.as_bytes(), ExecFlags::empty()).is_some()
    }

    /// The byte offsets of the leftmost match, if any.
    pub fn find(&self, input: &str) -> Option<(usize, usize)> {
        exec::search(self, input.as_bytes(), ExecFlags::empty())
    }

    /// Run the pattern and return one span per capture slot (slot 0 is
    /// the whole match). `None` when there is no match.
    pub fn captures(&self, input: &str) -> Option<Vec<Span>> {
        let mut spans = vec![Span::UNSET; self.subexpr_count + 1];
        self.execute(input, &mut spans, ExecFlags::empty()).ok()?;
        Some(spans)
    }

    /// Iterate over the non-overlapping matches in `input`, leftmost
    /// first.
    pub fn find_iter<'r, 't>(&'r self, input: &'t str) -> Matches<'r, 't> {
        Matches::new(self, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tree_siblings() {
        let mut tree = ExprTree::new();
        let a = tree.alloc(NodeKind::AnyChar);
        let b = tree.alloc(NodeKind::LineStart);
        tree.attach(ROOT, a);
        tree.attach(ROOT, b);
        assert_eq!(tree.first_child(ROOT), Some(a));
        assert_eq!(tree.next_sibling(a), Some(b));
        assert_eq!(tree.next_sibling(b), None);
        assert_eq!(tree.next_sibling(ROOT), None);
    }
}
