// Bracket expression parsing
//
// Consumes bracket-lexer tokens into a character set: plain characters,
// ranges, named classes, optional negation. The word boundary
// shorthands [[:<:]] and [[:>:]] are recognized up front by literal
// prefix match. Collating elements and equivalence classes are
// recognized syntactically but not implemented; their contents are
// skipped with a diagnostic.

use super::Parser;
use super::lexer::BracketToken;
use crate::error::{RegexError, RegexResult};
use crate::pattern::{BracketItem, BracketSet, CharClass, NodeId, NodeKind};

/// The recognized class names, in lookup order.
const CLASS_NAMES: [(&[u8], CharClass); 13] = [
    (b"alnum", CharClass::Alnum),
    (b"alpha", CharClass::Alpha),
    (b"blank", CharClass::Blank),
    (b"cntrl", CharClass::Cntrl),
    (b"digit", CharClass::Digit),
    (b"graph", CharClass::Graph),
    (b"lower", CharClass::Lower),
    (b"print", CharClass::Print),
    (b"punct", CharClass::Punct),
    (b"space", CharClass::Space),
    (b"upper", CharClass::Upper),
    (b"xdigit", CharClass::Xdigit),
    (b"name", CharClass::Name),
];

impl Parser<'_> {
    /// Parse a bracket expression. The current token is the opening
    /// bracket; the closing bracket is left as the current token for the
    /// caller to swallow.
    pub(super) fn parse_bracket(&mut self) -> RegexResult<NodeId> {
        // A start-of-word or end-of-word marker is not actually a
        // bracket expression.
        let ahead = self.lexer.rest_back(1);
        if ahead.starts_with(b"[[:<:]]") {
            self.lexer.advance_by(6);
            return Ok(self.tree.alloc(NodeKind::WordStart));
        } else if ahead.starts_with(b"[[:>:]]") {
            self.lexer.advance_by(6);
            return Ok(self.tree.alloc(NodeKind::WordEnd));
        }

        let mut set = BracketSet::default();

        // Swallow the open bracket.
        let mut token = self.lexer.next_bracket_token()?;

        // A circumflex negates the whole expression.
        if token == BracketToken::Char(b'^') {
            set.negated = true;
            token = self.lexer.next_bracket_token()?;
        }

        // A closing bracket or minus right here is an ordinary
        // character, not a terminator or range operator.
        if let BracketToken::Char(c @ (b']' | b'-')) = token {
            set.chars.push(c);
            token = self.lexer.next_bracket_token()?;
        }

        let mut previous: u8 = 0;
        loop {
            match token {
                BracketToken::ClassOpen => {
                    let class = self.class_name()?;
                    set.items.push(BracketItem::Class(class));

                    // Swallow up the colon close.
                    token = self.lexer.next_bracket_token()?;
                    if token != BracketToken::Char(b':') {
                        return Err(RegexError::BadPattern);
                    }
                    token = self.lexer.next_bracket_token()?;
                    if token != BracketToken::Char(b']') {
                        return Err(RegexError::BadPattern);
                    }
                }
                BracketToken::CollatingOpen => {
                    eprintln!("regex: collating element support not implemented");
                    token = self.skip_unimplemented(b'.', token)?;
                }
                BracketToken::EquivalenceOpen => {
                    eprintln!("regex: equivalence class support not implemented");
                    token = self.skip_unimplemented(b'=', token)?;
                }
                BracketToken::Char(b']') => break,
                BracketToken::End => return Err(RegexError::BracketImbalance),
                BracketToken::Char(c) => {
                    // A pending minus makes this a range: pull the dash
                    // and the range start back off the character list.
                    if previous == b'-' && set.chars.len() >= 2 {
                        let start = set.chars[set.chars.len() - 2];
                        set.chars.truncate(set.chars.len() - 2);
                        set.items.push(BracketItem::Range(start, c));
                    } else {
                        set.chars.push(c);
                    }
                }
            }

            if let BracketToken::Char(c) = token {
                previous = c;
            }
            token = self.lexer.next_bracket_token()?;
        }

        Ok(self.tree.alloc(NodeKind::Bracket(set)))
    }

    /// Resolve the class name at the cursor, directly from the input.
    fn class_name(&mut self) -> RegexResult<CharClass> {
        let rest = self.lexer.rest();
        for (name, class) in CLASS_NAMES {
            if rest.starts_with(name) {
                self.lexer.advance_by(name.len());
                return Ok(class);
            }
        }
        Err(RegexError::BadCharacterClass)
    }

    /// Spin past an unimplemented collating or equivalence construct,
    /// up to and including its `.]` or `=]` terminator.
    fn skip_unimplemented(
        &mut self,
        terminator: u8,
        mut token: BracketToken,
    ) -> RegexResult<BracketToken> {
        let mut previous: u8 = 0;
        loop {
            if previous == terminator && token == BracketToken::Char(b']') {
                return Ok(token);
            }
            if token == BracketToken::End {
                return Err(RegexError::BracketImbalance);
            }
            previous = match token {
                BracketToken::Char(c) => c,
                _ => 0,
            };
            token = self.lexer.next_bracket_token()?;
        }
    }
}
