//! Token reader for the parser.
//!
//! Borrows the tokens produced by [`tokenize`](crate::lexer::lexer::tokenize), so the
//! `SourceText` they point into must stay alive for as long as the reader is in use.

use crate::{
    errors::errors::{Error, ErrorImpl},
    lexer::tokens::{Token, TokenKind},
    Position,
};

/// Cursor over a token slice with one token of lookahead.
pub struct Parser<'t, 'src> {
    /// The tokens to read, normally ending in `EndOfFile`
    tokens: &'t [Token<'src>],
    /// Index of the current token
    pos: usize,
    /// Number of failed expectations so far
    error_count: usize,
}

impl<'t, 'src> Parser<'t, 'src> {
    pub fn new(tokens: &'t [Token<'src>]) -> Self {
        Parser {
            tokens,
            pos: 0,
            error_count: 0,
        }
    }

    /// Returns the current token without advancing.
    pub fn current_token(&self) -> Option<&'t Token<'src>> {
        self.tokens.get(self.pos)
    }

    /// Returns the kind of the current token, `EndOfFile` once the tokens run out.
    pub fn current_token_kind(&self) -> TokenKind {
        self.current_token()
            .map_or(TokenKind::EndOfFile, |token| token.kind)
    }

    /// Returns the token after the current one, or the last token when there is none.
    pub fn peek_next(&self) -> Option<&'t Token<'src>> {
        self.tokens.get(self.pos + 1).or_else(|| self.tokens.last())
    }

    /// Consumes and returns the current token. Stays put on `EndOfFile`.
    pub fn advance(&mut self) -> Option<&'t Token<'src>> {
        let token = self.current_token()?;
        if token.kind != TokenKind::EndOfFile {
            self.pos += 1;
        }
        Some(token)
    }

    /// Whether the reader has reached `EndOfFile` or the end of the tokens.
    pub fn is_at_end(&self) -> bool {
        self.current_token_kind() == TokenKind::EndOfFile
    }

    /// Consumes the current token if it has kind `expected`, otherwise counts an error and
    /// leaves the position unchanged.
    pub fn expect(&mut self, expected: TokenKind) -> Result<&'t Token<'src>, Error> {
        match self.current_token() {
            Some(token) if token.kind == expected => {
                if token.kind != TokenKind::EndOfFile {
                    self.pos += 1;
                }
                Ok(token)
            }
            found => {
                self.error_count += 1;
                let (text, position) = found.map_or_else(
                    || (String::new(), Position::null()),
                    |token| (token.text(), token.position()),
                );
                Err(Error::new(
                    ErrorImpl::UnexpectedToken {
                        expected: expected.to_string(),
                        token: text,
                    },
                    position,
                ))
            }
        }
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn error_count(&self) -> usize {
        self.error_count
    }
}
