use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::{errors::errors::Error, MK_TOKEN};

use super::{
    cursor::Cursor,
    lexer::Lexer,
    tokens::{lookup_keyword, Token, TokenKind},
};

lazy_static! {
    static ref IDENTIFIER_RUN: Regex = Regex::new(r"^[A-Za-z0-9_]+").expect("identifier run pattern");
}

/// Which structural form, if any, follows an identifier: `[` or `(`, either directly or
/// after exactly one space.
fn structural_opener(cursor: &Cursor<'_>) -> Option<u8> {
    match (cursor.current(), cursor.peek()) {
        (Some(open @ (b'[' | b'(')), _) => Some(open),
        (Some(b' '), Some(open @ (b'[' | b'('))) => Some(open),
        _ => None,
    }
}

impl<'src> Lexer<'src> {
    /// Identifier run, classified as array form, function form, boolean, keyword or
    /// plain identifier, in that order.
    pub(super) fn scan_identifier(&mut self, cursor: &mut Cursor<'src>) -> Result<Token<'src>, Error> {
        let start = cursor.position();
        let run = IDENTIFIER_RUN.find(cursor.rest()).map_or(0, |m| m.end());
        cursor.advance_n(run);

        let word = cursor.slice_from(start.offset);
        let keyword = lookup_keyword(word);

        match structural_opener(cursor) {
            // Even a keyword becomes part of an array form (`int[4]`).
            Some(b'[') => {
                cursor.eat_while(|b| b == b' ');
                return Ok(self.scan_array(cursor, start));
            }
            Some(b'(') if keyword.is_none() => {
                cursor.eat_while(|b| b == b' ');
                return self.scan_function(cursor, start);
            }
            _ => {}
        }

        let kind = if word == b"true" || word == b"false" {
            TokenKind::BoolLiteral
        } else if let Some(keyword) = keyword {
            TokenKind::Keyword(keyword)
        } else {
            TokenKind::Identifier
        };

        Ok(MK_TOKEN!(kind, cursor, start))
    }
}
