use crate::{
    errors::errors::{Error, ErrorImpl},
    MK_TOKEN,
};

use super::{
    cursor::Cursor,
    operators::is_operator_start,
    source::SourceText,
    tokens::{TokenKind, TokenStream},
};

/// Mutable state for lexing one [`SourceText`].
///
/// A fresh session is created by every [`tokenize`] call; the stream it builds
/// is handed back by value once the input is exhausted.
pub struct Lexer<'src> {
    source: &'src SourceText,
    pub(super) stream: TokenStream<'src>,
}

/// Moves `cursor` past a `//` or `/*` comment starting at the current byte. A line
/// comment stops before its newline.
pub(super) fn skip_comment(cursor: &mut Cursor<'_>) -> Result<(), Error> {
    let start = cursor.position();

    if cursor.starts_with(b"//") {
        cursor.eat_while(|b| b != b'\n');
        return Ok(());
    }

    cursor.advance_n(2);
    loop {
        if cursor.starts_with(b"*/") {
            cursor.advance_n(2);
            return Ok(());
        }
        if cursor.advance().is_none() {
            return Err(Error::new(ErrorImpl::UnterminatedComment, start));
        }
    }
}

impl<'src> Lexer<'src> {
    pub fn new(source: &'src SourceText) -> Lexer<'src> {
        Lexer {
            source,
            stream: TokenStream::new(),
        }
    }

    /// Records a recoverable error; lexing carries on after it.
    pub(super) fn report(&mut self, error: Error) {
        tracing::warn!(
            file = self.source.name(),
            line = error.get_position().line,
            column = error.get_position().column,
            "{}",
            error.get_kind()
        );
        self.stream.report(error);
    }

    /// Tokenizes everything between the cursor and its end, skipping whitespace and
    /// comments. Also used on the argument range of a function form.
    pub(super) fn lex_range(&mut self, cursor: &mut Cursor<'src>) -> Result<(), Error> {
        while let Some(byte) = cursor.current() {
            let before = cursor.pos();

            match byte {
                b' ' | b'\t' | b'\n' => {
                    cursor.eat_while(|b| matches!(b, b' ' | b'\t' | b'\n'));
                }
                b'/' => self.slash(cursor)?,
                _ => self.scan_token(cursor)?,
            }

            // Never spin on a byte no scanner consumed.
            if cursor.pos() == before {
                cursor.advance();
            }
        }

        Ok(())
    }

    /// Comments, `/=` and `/`.
    fn slash(&mut self, cursor: &mut Cursor<'src>) -> Result<(), Error> {
        let start = cursor.position();

        match cursor.peek() {
            Some(b'/') | Some(b'*') => skip_comment(cursor)?,
            Some(b'=') => {
                cursor.advance_n(2);
                self.stream.push(MK_TOKEN!(TokenKind::Operator, cursor, start));
            }
            _ => {
                cursor.advance();
                self.stream.push(MK_TOKEN!(TokenKind::Operator, cursor, start));
            }
        }

        Ok(())
    }

    /// Routes the byte under the cursor to the scanner for its class and emits the result.
    fn scan_token(&mut self, cursor: &mut Cursor<'src>) -> Result<(), Error> {
        let token = match cursor.current() {
            Some(b'0'..=b'9') => self.scan_number(cursor),
            Some(b'.') if cursor.peek().is_some_and(|b| b.is_ascii_digit()) => {
                let start = cursor.position();
                self.scan_float(cursor, start)
            }
            Some(b'"') => self.scan_quoted(cursor, b'"'),
            Some(b'\'') => self.scan_quoted(cursor, b'\''),
            Some(b) if b.is_ascii_alphabetic() || b == b'_' => self.scan_identifier(cursor)?,
            Some(b) if is_operator_start(b) => self.scan_operator(cursor),
            Some(_) => self.scan_unrecognised(cursor),
            None => return Ok(()),
        };

        self.stream.push(token);
        Ok(())
    }
}

/// Lexes `source` into a [`TokenStream`] ending in exactly one `EndOfFile` token.
///
/// Malformed literals, brackets and stray bytes become `Empty` tokens and are listed in
/// [`TokenStream::diagnostics`]. An unterminated block comment aborts the run.
#[tracing::instrument(level = "debug", skip_all, fields(file = source.name(), bytes = source.len()))]
pub fn tokenize(source: &SourceText) -> Result<TokenStream<'_>, Error> {
    let mut lex = Lexer::new(source);
    let mut cursor = source.cursor();

    lex.lex_range(&mut cursor)?;

    let eof = cursor.position();
    lex.stream.push(MK_TOKEN!(TokenKind::EndOfFile, cursor, eof));

    tracing::debug!(
        tokens = lex.stream.len(),
        diagnostics = lex.stream.diagnostics().len(),
        "tokenized"
    );
    Ok(lex.stream)
}
