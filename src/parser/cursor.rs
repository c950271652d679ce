//! Read position over the source text
//!
//! The [`Cursor`] replaces a separate tokenizer: grammar rules look at the
//! characters directly and move the position forward themselves. The source
//! is treated as a sequence of single-byte code units; every decision the
//! grammar makes is on ASCII bytes, so slices taken between two such
//! decisions always fall on `char` boundaries.
//!
//! A [`Position`] is a plain `Copy` value. Saving one before trying a rule and
//! writing it back on soft failure is the whole backtracking mechanism.

/// A saved read position. Cheap to copy, compare and restore.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Position(usize);

impl Position {
    /// Byte offset into the source text.
    pub fn offset(self) -> usize {
        self.0
    }
}

/// Returns true for the whitespace bytes the grammar skips between tokens.
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r' | '\x0C' | '\x0B')
}

/// Returns true for characters allowed in an identifier: `[A-Za-z0-9_]`.
pub fn is_symbol_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

#[derive(Debug, Clone)]
pub struct Cursor<'src> {
    source: &'src str,
    pos: usize,
}

impl<'src> Cursor<'src> {
    pub fn new(source: &'src str) -> Self {
        Self { source, pos: 0 }
    }

    pub fn source(&self) -> &'src str {
        self.source
    }

    pub fn checkpoint(&self) -> Position {
        Position(self.pos)
    }

    pub fn restore(&mut self, position: Position) {
        debug_assert!(position.0 <= self.source.len());
        self.pos = position.0;
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.source.len()
    }

    /// Character at the current position, if any.
    pub fn current(&self) -> Option<char> {
        self.source.as_bytes().get(self.pos).map(|&b| b as char)
    }

    /// True iff a character exists here and satisfies `predicate`. Never advances.
    pub fn peek(&self, predicate: impl Fn(char) -> bool) -> bool {
        self.current().is_some_and(predicate)
    }

    pub fn peek_char(&self, expected: char) -> bool {
        self.current() == Some(expected)
    }

    /// True iff the remaining input starts with `text`. Never advances.
    pub fn peek_literal(&self, text: &str) -> bool {
        self.source.as_bytes()[self.pos..].starts_with(text.as_bytes())
    }

    /// Move forward by one character. Stays put at end of input.
    pub fn advance(&mut self) {
        if !self.is_at_end() {
            self.pos += 1;
        }
    }

    pub fn advance_by(&mut self, n: usize) {
        self.pos = (self.pos + n).min(self.source.len());
    }

    /// Advance while `predicate` holds; returns the consumed text.
    pub fn take_while(&mut self, predicate: impl Fn(char) -> bool) -> &'src str {
        let start = self.pos;
        while self.peek(&predicate) {
            self.pos += 1;
        }
        &self.source[start..self.pos]
    }

    pub fn skip_whitespace(&mut self) {
        self.take_while(is_whitespace);
    }

    /// Text between two saved positions.
    pub fn slice(&self, from: Position, to: Position) -> &'src str {
        &self.source[from.0..to.0]
    }

    /// Scan forward from the current position for the `close` that balances
    /// the brackets opened along the way, counting depth. The cursor itself
    /// does not move. Returns `None` if input ends first.
    ///
    /// Quotes are not special here: a `close` inside a string literal counts.
    pub fn find_closing(&self, open: char, close: char) -> Option<Position> {
        let mut depth = 0usize;
        for (offset, &b) in self.source.as_bytes()[self.pos..].iter().enumerate() {
            let c = b as char;
            if c == open {
                depth += 1;
            } else if c == close {
                depth = depth.saturating_sub(1);
                if depth == 0 {
                    return Some(Position(self.pos + offset));
                }
            }
        }
        None
    }
}
