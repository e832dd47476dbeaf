//! Array forms (`grid[10][20]`) and function forms (`add(a, b)`).
//!
//! Both fold a name and its bracketed part into one token. Array dimensions are
//! kept opaque. Function arguments are additionally re-tokenized by running the
//! ordinary dispatch loop over a cursor bounded to the argument bytes, so the
//! stream for `foo(1,2)` reads:
//!
//! ```text
//! Delimiter "("  IntLiteral "1"  Delimiter ","  IntLiteral "2"  FunctionForm "foo(1,2)"
//! ```
//!
//! The opening paren and the arguments come first; the closing paren only
//! appears inside the `FunctionForm` span. Parens inside literals and comments
//! do not count towards the match.

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    cursor::Cursor,
    lexer::{skip_comment, Lexer},
    literals::skip_quoted,
    tokens::{Token, TokenKind},
};

/// Moves `cursor` from a `[` to just past its matching `]`. Returns `false` if the input
/// ends first.
fn skip_dimension(cursor: &mut Cursor<'_>) -> bool {
    let mut depth = 1usize;
    cursor.advance();

    while let Some(byte) = cursor.advance() {
        match byte {
            b'[' => depth += 1,
            b']' => {
                depth -= 1;
                if depth == 0 {
                    return true;
                }
            }
            _ => {}
        }
    }
    false
}

impl<'src> Lexer<'src> {
    /// Entered on the first `[`; `start` is where the name began.
    pub(super) fn scan_array(&mut self, cursor: &mut Cursor<'src>, start: Position) -> Token<'src> {
        loop {
            if !skip_dimension(cursor) {
                self.report(Error::new(ErrorImpl::UnterminatedBracket, start));
                return MK_TOKEN!(TokenKind::Empty, cursor, start);
            }

            let closed = cursor.clone();
            cursor.eat_while(|b| b == b' ');

            if cursor.current() != Some(b'[') {
                return MK_TOKEN!(TokenKind::ArrayForm, closed, start);
            }
        }
    }

    /// Entered on the `(`; `start` is where the name began. Emits the `(` delimiter and
    /// the argument tokens, then returns the `FunctionForm` for the caller to emit.
    pub(super) fn scan_function(
        &mut self,
        cursor: &mut Cursor<'src>,
        start: Position,
    ) -> Result<Token<'src>, Error> {
        let paren = cursor.position();
        cursor.advance();
        self.stream.push(MK_TOKEN!(TokenKind::Delimiter, cursor, paren));

        let arguments = cursor.clone();
        let mut depth = 1usize;

        loop {
            match cursor.current() {
                None => {
                    self.report(Error::new(ErrorImpl::UnterminatedParen, paren));
                    return Ok(MK_TOKEN!(TokenKind::Empty, cursor, start));
                }
                Some(quote @ (b'"' | b'\'')) => {
                    let literal = cursor.position();
                    if !skip_quoted(cursor, quote) {
                        self.report(Error::new(
                            ErrorImpl::UnterminatedLiteral {
                                delimiter: quote as char,
                            },
                            literal,
                        ));
                        return Ok(MK_TOKEN!(TokenKind::Empty, cursor, start));
                    }
                }
                Some(b'/') if matches!(cursor.peek(), Some(b'/' | b'*')) => {
                    skip_comment(cursor)?;
                }
                Some(b'(') => {
                    depth += 1;
                    cursor.advance();
                }
                Some(b')') => {
                    depth -= 1;
                    if depth == 0 {
                        break;
                    }
                    cursor.advance();
                }
                Some(_) => {
                    cursor.advance();
                }
            }
        }

        let mut interior = arguments.bounded(cursor.pos());
        tracing::trace!(
            from = interior.pos(),
            to = interior.end(),
            line = interior.line(),
            "re-tokenizing arguments"
        );
        self.lex_range(&mut interior)?;

        cursor.advance();
        let function = MK_TOKEN!(TokenKind::FunctionForm, cursor, start);
        cursor.eat_while(|b| b == b' ');

        Ok(function)
    }
}
