use lazy_static::lazy_static;
use std::collections::HashSet;

use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::{
    cursor::Cursor,
    lexer::Lexer,
    tokens::{Token, TokenKind},
};

/// Bytes that start an operator. `/` is handled by the dispatch loop because it may
/// also open a comment.
pub const SINGLE_OPERATORS: &[u8] = b"+-*%=<>!&|~^.";

/// Always a one-byte `Delimiter`, whatever follows.
pub const DELIMITERS: &[u8] = b"(){}[];,";

lazy_static! {
    pub static ref TRIPLE_OPERATORS: HashSet<&'static [u8]> = {
        let mut set: HashSet<&'static [u8]> = HashSet::new();
        set.insert(b"<<=");
        set.insert(b">>=");
        set
    };
    pub static ref DOUBLE_OPERATORS: HashSet<&'static [u8]> = {
        let mut set: HashSet<&'static [u8]> = HashSet::new();
        for op in [
            "==", "<=", ">=", "!=", "&&", "||", "++", "--", "+=", "-=", "*=", "%=", "&=", "|=",
            "^=", "<<", ">>", "->",
        ] {
            set.insert(op.as_bytes());
        }
        set
    };
}

pub fn is_operator_start(byte: u8) -> bool {
    SINGLE_OPERATORS.contains(&byte) || DELIMITERS.contains(&byte)
}

/// Width of the longest operator at the start of `rest`, checking 3, then 2, then 1 bytes.
pub fn operator_width(rest: &[u8]) -> usize {
    if rest.len() >= 3 && TRIPLE_OPERATORS.contains(&rest[..3]) {
        3
    } else if rest.len() >= 2 && DOUBLE_OPERATORS.contains(&rest[..2]) {
        2
    } else {
        1
    }
}

impl<'src> Lexer<'src> {
    pub(super) fn scan_operator(&mut self, cursor: &mut Cursor<'src>) -> Token<'src> {
        let start = cursor.position();

        if cursor.current().is_some_and(|b| DELIMITERS.contains(&b)) {
            cursor.advance();
            return MK_TOKEN!(TokenKind::Delimiter, cursor, start);
        }

        cursor.advance_n(operator_width(cursor.rest()));
        MK_TOKEN!(TokenKind::Operator, cursor, start)
    }

    /// A byte outside every token class. It becomes a one-byte `Empty` token.
    pub(super) fn scan_unrecognised(&mut self, cursor: &mut Cursor<'src>) -> Token<'src> {
        let start = cursor.position();
        if let Some(byte) = cursor.advance() {
            self.report(Error::new(
                ErrorImpl::UnrecognisedCharacter {
                    character: byte as char,
                },
                start,
            ));
        }
        MK_TOKEN!(TokenKind::Empty, cursor, start)
    }
}

#[cfg(test)]
mod tests {
    use super::{is_operator_start, operator_width};

    #[test]
    fn test_operator_width_prefers_longest() {
        assert_eq!(operator_width(b"<<=1"), 3);
        assert_eq!(operator_width(b"<<1"), 2);
        assert_eq!(operator_width(b"<1"), 1);
        assert_eq!(operator_width(b"->x"), 2);
        assert_eq!(operator_width(b"-"), 1);
    }

    #[test]
    fn test_operator_start_bytes() {
        for byte in b"+-*%=<>!&|~^.(){}[];," {
            assert!(is_operator_start(*byte), "{}", *byte as char);
        }
        for byte in b"/@#$:?\\`" {
            assert!(!is_operator_start(*byte), "{}", *byte as char);
        }
    }
}
