// Backtracking matcher
//
// One loop walks the expression tree with a current node and an
// iteration count. Decision points (repeats, alternations, group
// entries) push frames onto a stack; popping the newest frame first
// reproduces the deepest-choice-first backtracking order. Frames keep a
// parent index so a popped repeat can resynchronize with the tree walk.

use crate::exec::Span;
use crate::exec::ctype;
use crate::flags::{CompFlags, ExecFlags};
use crate::pattern::{self, BracketItem, BracketSet, NodeId, NodeKind, Regex};

/// Internal capture slots: the whole match plus back-references 1-9.
const INTERNAL_SPANS: usize = 11;

pub(super) struct MatchState<'a, 'c> {
    re: &'a Regex,
    text: &'a [u8],
    /// Offset of the next input byte to examine.
    pub(super) next: usize,
    flags: ExecFlags,
    /// Caller-visible capture slots.
    captures: &'c mut [Span],
    /// Whether the caller slots are filled in at all.
    report: bool,
    /// Captures kept regardless of the caller's wishes, to resolve
    /// back-references.
    internal: [Span; INTERNAL_SPANS],
    frames: Vec<Frame>,
}

/// One decision point recorded while matching.
struct Frame {
    node: NodeId,
    /// Index of the enclosing frame.
    parent: Option<usize>,
    /// Input offset when the choice was made, for rewinding.
    saved_input: usize,
    data: FrameData,
}

#[derive(Clone, Copy)]
enum FrameData {
    /// A repeatable leaf; which iteration this frame begins.
    Repeat { iteration: usize },
    /// A subexpression entry; remembers the capture bounds to restore
    /// if this attempt is abandoned.
    Group { iteration: usize, saved: Span },
    /// An alternation; which option is currently selected.
    Branch { option: NodeId },
}

impl Frame {
    fn iteration(&self) -> usize {
        match self.data {
            FrameData::Repeat { iteration } | FrameData::Group { iteration, .. } => iteration,
            FrameData::Branch { .. } => 0,
        }
    }
}

impl<'a, 'c> MatchState<'a, 'c> {
    pub(super) fn new(
        re: &'a Regex,
        text: &'a [u8],
        captures: &'c mut [Span],
        flags: ExecFlags,
    ) -> MatchState<'a, 'c> {
        MatchState {
            re,
            text,
            next: 0,
            flags,
            captures,
            report: !re.flags.contains(CompFlags::NO_CAPTURES),
            internal: [Span::UNSET; INTERNAL_SPANS],
            frames: Vec::new(),
        }
    }

    /// Try to match the whole tree at the current input offset. On
    /// failure every frame is unwound, which also puts the capture
    /// arrays back the way they were.
    pub(super) fn run_match(&mut self) -> bool {
        let re = self.re;
        let mut entry: Option<NodeId> = Some(pattern::ROOT);
        let mut iteration: usize = 0;
        let mut cursor: Option<usize> = None;
        let mut matched_all = false;

        'outer: while let Some(current) = entry {
            let node = re.tree.node(current);
            let dup_min = node.min;
            let mut dup_max = node.max;
            let attempt: bool;

            if dup_max.is_none_or(|max| iteration < max) {
                match &node.kind {
                    NodeKind::Subexpr { index } => {
                        let index = *index;

                        // Record a choice even for an empty group, so
                        // the capture bounds can be rebuilt if this
                        // choice is jumped back to later.
                        let saved = self.current_span(index);
                        let frame = self.push_frame(
                            current,
                            cursor,
                            iteration,
                            FrameData::Group { iteration, saved },
                        );
                        cursor = Some(frame);
                        self.start_capture(index);

                        if let Some(first) = re.tree.first_child(current) {
                            entry = Some(first);
                            iteration = 0;
                            continue 'outer;
                        }
                        attempt = true;
                    }
                    NodeKind::Branch => {
                        // Take the first option and remember the choice.
                        if let Some(option) = re.tree.first_child(current) {
                            let frame = self.push_frame(
                                current,
                                cursor,
                                0,
                                FrameData::Branch { option },
                            );
                            cursor = Some(frame);
                            entry = Some(option);
                            continue 'outer;
                        }
                        attempt = true;
                    }
                    NodeKind::BranchOption => {
                        // Just step into the option's contents.
                        if let Some(first) = re.tree.first_child(current) {
                            entry = Some(first);
                            continue 'outer;
                        }
                        attempt = true;
                    }
                    _ => {
                        // A leaf. Record a choice when the repeat range
                        // leaves a decision to revisit.
                        let repeatable = match dup_max {
                            None => true,
                            Some(max) => dup_min != max,
                        };
                        if repeatable {
                            let frame = self.push_frame(
                                current,
                                cursor,
                                iteration,
                                FrameData::Repeat { iteration },
                            );
                            cursor = Some(frame);
                        }
                        attempt = self.match_single(current);
                    }
                }
            } else {
                // The entry already has all the iterations it wants.
                attempt = true;
            }

            if attempt {
                // Move on to the next node, which may pop up several
                // levels.
                let mut current = current;
                loop {
                    iteration += 1;

                    // An iteration that consumed nothing would repeat
                    // forever; clamp the maximum to where we are now.
                    if let Some(at) = cursor {
                        if self.next == self.frames[at].saved_input && dup_max != Some(1) {
                            dup_max = Some(iteration);
                        }
                    }

                    // More duplicates of this entry wanted.
                    if dup_max.is_none_or(|max| iteration < max) {
                        entry = Some(current);
                        continue 'outer;
                    }

                    self.end_capture(current);

                    // Whether the next entry is the sibling or the
                    // parent, the cursor moves up past this entry's
                    // frame (the frame itself stays live).
                    if let Some(at) = cursor {
                        if self.frames[at].node == current {
                            cursor = self.frames[at].parent;
                        }
                    }

                    if let Some(sibling) = re.tree.next_sibling(current) {
                        entry = Some(sibling);
                        iteration = 0;
                        continue 'outer;
                    }

                    let Some(mut parent) = re.tree.node(current).parent else {
                        // Nothing left: the whole expression matches.
                        matched_all = true;
                        break 'outer;
                    };

                    if matches!(re.tree.node(parent).kind, NodeKind::BranchOption) {
                        match re.tree.node(parent).parent {
                            Some(branch) => parent = branch,
                            None => {
                                matched_all = true;
                                break 'outer;
                            }
                        }
                    }

                    current = parent;
                    if matches!(re.tree.node(current).kind, NodeKind::Branch) {
                        iteration = 0;
                        dup_max = Some(1);
                    } else {
                        iteration = match cursor {
                            Some(at) => self.frames[at].iteration(),
                            None => 0,
                        };
                        dup_max = re.tree.node(current).max;
                    }
                }
            } else {
                // No match here: re-evaluate the newest decision still
                // standing.
                loop {
                    if self.frames.is_empty() {
                        // Every choice is exhausted.
                        break 'outer;
                    }
                    let at = self.frames.len() - 1;
                    let frame_node = self.frames[at].node;

                    // Put the capture bounds back the way they were
                    // before the choice.
                    if let FrameData::Group { saved, .. } = self.frames[at].data {
                        if let NodeKind::Subexpr { index } = &re.tree.node(frame_node).kind {
                            self.restore_capture(*index, saved);
                        }
                    }

                    match self.frames[at].data {
                        FrameData::Branch { option } => {
                            // Move to the next option, rewinding the
                            // input to where the branch was entered.
                            if let Some(next_option) = re.tree.next_sibling(option) {
                                self.frames[at].data = FrameData::Branch {
                                    option: next_option,
                                };
                                self.next = self.frames[at].saved_input;
                                cursor = Some(at);
                                entry = Some(next_option);
                                iteration = 0;
                                continue 'outer;
                            }
                        }
                        FrameData::Repeat { iteration: done }
                        | FrameData::Group { iteration: done, .. } => {
                            // Pop the newest iteration if the minimum
                            // still holds, then proceed as if the entry
                            // completed with one fewer occurrence.
                            if done + 1 > re.tree.node(frame_node).min {
                                self.next = self.frames[at].saved_input;

                                // Walk to the entry that has a sibling
                                // to continue with, closing out the
                                // subexpressions passed on the way at
                                // the rewound offset.
                                let mut walk = frame_node;
                                let mut next_cursor = Some(at);
                                loop {
                                    let Some(up) = re.tree.node(walk).parent else {
                                        break;
                                    };
                                    if matches!(
                                        re.tree.node(walk).kind,
                                        NodeKind::BranchOption
                                    ) {
                                        walk = up;
                                        continue;
                                    }
                                    if re.tree.next_sibling(walk).is_some() {
                                        break;
                                    }
                                    self.end_capture(walk);
                                    walk = up;
                                    next_cursor =
                                        next_cursor.and_then(|i| self.frames[i].parent);
                                }
                                self.end_capture(walk);

                                let finished = re.tree.node(walk).parent.is_none();
                                cursor = next_cursor.and_then(|i| self.frames[i].parent);
                                self.frames.pop();
                                iteration = 0;

                                if finished {
                                    // Dropping the failing iteration
                                    // makes the whole expression pass.
                                    matched_all = true;
                                    break 'outer;
                                }
                                entry = re.tree.next_sibling(walk);
                                continue 'outer;
                            }
                        }
                    }

                    // This choice cannot recover; discard it and look
                    // at the one made before it.
                    self.frames.pop();
                }
            }
        }

        // The stack keeps its storage for the next start offset.
        self.frames.clear();
        matched_all
    }

    /// Match a single occurrence of a leaf entry at the current offset.
    fn match_single(&mut self, id: NodeId) -> bool {
        let re = self.re;
        match &re.tree.node(id).kind {
            NodeKind::Literal(bytes) => self.match_bytes(bytes),
            NodeKind::AnyChar => {
                let ok = self.next < self.text.len()
                    && (self.text[self.next] != b'\n'
                        || !re.flags.contains(CompFlags::NEWLINE));
                if ok {
                    self.next += 1;
                }
                ok
            }
            NodeKind::Bracket(set) => self.match_bracket(set),
            NodeKind::BackRef(number) => {
                // Re-match whatever the referenced group last captured;
                // a group that never matched cannot be referenced.
                let span = self.internal[*number];
                if span.start < 0 || span.end < 0 {
                    return false;
                }
                let text = self.text;
                self.match_bytes(&text[span.start as usize..span.end as usize])
            }
            NodeKind::LineStart => {
                (!self.flags.contains(ExecFlags::NOT_LINE_START) && self.next == 0)
                    || (re.flags.contains(CompFlags::NEWLINE)
                        && self.next != 0
                        && self.text[self.next - 1] == b'\n')
            }
            NodeKind::LineEnd => {
                (!self.flags.contains(ExecFlags::NOT_LINE_END)
                    && self.next >= self.text.len())
                    || (re.flags.contains(CompFlags::NEWLINE)
                        && self.next < self.text.len()
                        && self.text[self.next] == b'\n')
            }
            NodeKind::WordStart => {
                // Zero width: the following byte is a word byte, the
                // preceding one (if any) is not.
                self.next < self.text.len()
                    && ctype::is_name(self.text[self.next])
                    && (self.next == 0 || !ctype::is_name(self.text[self.next - 1]))
            }
            NodeKind::WordEnd => {
                self.next != 0
                    && ctype::is_name(self.text[self.next - 1])
                    && (self.next >= self.text.len()
                        || !ctype::is_name(self.text[self.next]))
            }
            // Composite nodes are stepped through by the match loop,
            // never matched directly.
            NodeKind::Subexpr { .. } | NodeKind::Branch | NodeKind::BranchOption => false,
        }
    }

    /// Compare a byte run against the input at the current offset,
    /// advancing past it on success.
    fn match_bytes(&mut self, bytes: &[u8]) -> bool {
        if self.text.len() - self.next < bytes.len() {
            return false;
        }
        let ignore_case = self.re.flags.contains(CompFlags::IGNORE_CASE);
        for (offset, &expected) in bytes.iter().enumerate() {
            let got = self.text[self.next + offset];
            if got != expected
                && (!ignore_case
                    || got.to_ascii_lowercase() != expected.to_ascii_lowercase())
            {
                return false;
            }
        }
        self.next += bytes.len();
        true
    }

    /// Match one byte against a bracket set: plain characters first,
    /// then ranges and classes, negation applied last.
    fn match_bracket(&mut self, set: &BracketSet) -> bool {
        if self.next >= self.text.len() {
            return false;
        }
        let byte = self.text[self.next];
        let ignore_case = self.re.flags.contains(CompFlags::IGNORE_CASE);

        let mut hit = set.chars.iter().any(|&c| {
            c == byte || (ignore_case && c.to_ascii_lowercase() == byte.to_ascii_lowercase())
        });
        if !hit {
            for item in &set.items {
                hit = match *item {
                    BracketItem::Range(low, high) => byte >= low && byte <= high,
                    BracketItem::Class(class) => ctype::class_matches(class, byte, ignore_case),
                };
                if hit {
                    break;
                }
            }
        }

        if set.negated {
            hit = !hit;
        }
        if hit {
            self.next += 1;
        }
        hit
    }

    fn push_frame(
        &mut self,
        node: NodeId,
        cursor: Option<usize>,
        iteration: usize,
        data: FrameData,
    ) -> usize {
        // Later iterations become siblings of the first one, so popping
        // them walks the repeats backwards.
        let parent = match (iteration, cursor) {
            (0, at) => at,
            (_, Some(at)) => self.frames[at].parent,
            (_, None) => None,
        };
        self.frames.push(Frame {
            node,
            parent,
            saved_input: self.next,
            data,
        });
        self.frames.len() - 1
    }

    /// The capture bounds currently on record for a subexpression.
    fn current_span(&self, index: usize) -> Span {
        if index < INTERNAL_SPANS {
            self.internal[index]
        } else if self.report && index < self.captures.len() {
            self.captures[index]
        } else {
            Span::UNSET
        }
    }

    /// Mark a subexpression as starting (and so far ending) here.
    fn start_capture(&mut self, index: usize) {
        let here = self.next as isize;
        let span = Span {
            start: here,
            end: here,
        };
        if self.report && index < self.captures.len() {
            self.captures[index] = span;
        }
        if index < INTERNAL_SPANS {
            self.internal[index] = span;
        }
    }

    fn restore_capture(&mut self, index: usize, saved: Span) {
        if self.report && index < self.captures.len() {
            self.captures[index] = saved;
        }
        if index < INTERNAL_SPANS {
            self.internal[index] = saved;
        }
    }

    /// Mark the end of a subexpression that just finished matching.
    fn end_capture(&mut self, id: NodeId) {
        let re = self.re;
        let NodeKind::Subexpr { index } = &re.tree.node(id).kind else {
            return;
        };
        let index = *index;
        if self.report && index < self.captures.len() {
            self.captures[index].end = self.next as isize;
        }
        if index < INTERNAL_SPANS {
            self.internal[index].end = self.next as isize;
        }
    }
}
