use lazy_static::lazy_static;
use regex::bytes::Regex;

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, MK_TOKEN,
};

use super::{
    cursor::Cursor,
    lexer::Lexer,
    tokens::{LiteralValue, Token, TokenKind},
};

lazy_static! {
    static ref DIGIT_RUN: Regex = Regex::new(r"^[0-9]+").expect("digit run pattern");
}

fn digit_run(rest: &[u8]) -> usize {
    DIGIT_RUN.find(rest).map_or(0, |m| m.end())
}

/// Folds decimal digits into a `u64`, saturating at `u64::MAX`.
/// Returns the value and whether it overflowed.
pub fn fold_decimal(digits: &[u8]) -> (u64, bool) {
    let mut value: u64 = 0;
    for &digit in digits {
        match value
            .checked_mul(10)
            .and_then(|v| v.checked_add(u64::from(digit - b'0')))
        {
            Some(next) => value = next,
            None => return (u64::MAX, true),
        }
    }
    (value, false)
}

/// Moves `cursor` from an opening `delimiter` to just past the matching closing one.
///
/// A backslash skips the byte after it, so `\"` never closes a string. Returns `false`
/// if the input ends first, leaving the cursor at the end.
pub fn skip_quoted(cursor: &mut Cursor<'_>, delimiter: u8) -> bool {
    cursor.advance();
    while let Some(byte) = cursor.advance() {
        if byte == delimiter {
            return true;
        }
        if byte == b'\\' {
            cursor.advance();
        }
    }
    false
}

impl<'src> Lexer<'src> {
    /// Integer literal, handing over to [`Lexer::scan_float`] at a `.`.
    pub(super) fn scan_number(&mut self, cursor: &mut Cursor<'src>) -> Token<'src> {
        let start = cursor.position();
        cursor.advance_n(digit_run(cursor.rest()));

        if cursor.current() == Some(b'.') {
            return self.scan_float(cursor, start);
        }

        let digits = cursor.slice_from(start.offset);
        let (value, overflowed) = fold_decimal(digits);
        if overflowed {
            self.report(Error::new(
                ErrorImpl::IntegerOverflow {
                    token: String::from_utf8_lossy(digits).into_owned(),
                },
                start,
            ));
        }

        MK_TOKEN!(TokenKind::IntLiteral, cursor, start, Some(LiteralValue::Int(value)))
    }

    /// Fractional part and optional `f`/`F` suffix. `start` may precede the cursor when an
    /// integer part was already consumed.
    pub(super) fn scan_float(&mut self, cursor: &mut Cursor<'src>, start: Position) -> Token<'src> {
        cursor.advance();
        cursor.advance_n(digit_run(cursor.rest()));

        let text = cursor.slice_from(start.offset);
        let value = std::str::from_utf8(text)
            .ok()
            .and_then(|text| text.parse::<f64>().ok());

        if matches!(cursor.current(), Some(b'f' | b'F')) {
            cursor.advance();
        }

        match value {
            Some(value) => {
                MK_TOKEN!(TokenKind::FloatLiteral, cursor, start, Some(LiteralValue::Float(value)))
            }
            None => {
                self.report(Error::new(
                    ErrorImpl::MalformedFloat {
                        token: String::from_utf8_lossy(text).into_owned(),
                    },
                    start,
                ));
                MK_TOKEN!(TokenKind::Empty, cursor, start)
            }
        }
    }

    /// Char (`'`) or string (`"`) literal, escapes kept verbatim in the lexeme.
    pub(super) fn scan_quoted(&mut self, cursor: &mut Cursor<'src>, delimiter: u8) -> Token<'src> {
        let start = cursor.position();
        let kind = if delimiter == b'"' {
            TokenKind::StringLiteral
        } else {
            TokenKind::CharLiteral
        };

        if skip_quoted(cursor, delimiter) {
            return MK_TOKEN!(kind, cursor, start);
        }

        self.report(Error::new(
            ErrorImpl::UnterminatedLiteral {
                delimiter: delimiter as char,
            },
            start,
        ));
        MK_TOKEN!(TokenKind::Empty, cursor, start)
    }
}

#[cfg(test)]
mod tests {
    use super::{fold_decimal, skip_quoted};
    use crate::lexer::cursor::Cursor;

    #[test]
    fn test_fold_decimal() {
        assert_eq!(fold_decimal(b"0"), (0, false));
        assert_eq!(fold_decimal(b"007"), (7, false));
        assert_eq!(fold_decimal(b"18446744073709551615"), (u64::MAX, false));
    }

    #[test]
    fn test_fold_decimal_saturates() {
        assert_eq!(fold_decimal(b"18446744073709551616"), (u64::MAX, true));
        assert_eq!(fold_decimal(b"99999999999999999999999"), (u64::MAX, true));
    }

    #[test]
    fn test_skip_quoted_honours_escapes() {
        let mut cursor = Cursor::new(br#""a\"b" rest"#);
        assert!(skip_quoted(&mut cursor, b'"'));
        assert_eq!(cursor.slice_from(0), br#""a\"b""#);
    }

    #[test]
    fn test_skip_quoted_escaped_backslash_closes() {
        let mut cursor = Cursor::new(br"'\\' x");
        assert!(skip_quoted(&mut cursor, b'\''));
        assert_eq!(cursor.rest(), b" x");
    }

    #[test]
    fn test_skip_quoted_runs_to_end() {
        let mut cursor = Cursor::new(br#""abc\"#);
        assert!(!skip_quoted(&mut cursor, b'"'));
        assert!(cursor.is_eof());
    }
}
