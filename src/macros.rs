//! Utility macros for the lexer.
//!
//! - `MK_TOKEN!` - Creates a Token covering everything a cursor consumed since a start position
//!
//! This keeps span, lexeme and line/column bookkeeping in one place for every scanner.

/// Creates a Token spanning from `$start` up to the current position of `$cursor`.
///
/// # Arguments
///
/// * `$kind` - The TokenKind
/// * `$cursor` - The cursor that scanned the token, positioned just past it
/// * `$start` - The cursor's `Position` where the token began
/// * `$value` - Optional decoded `LiteralValue` (defaults to `None`)
///
/// # Example
///
/// ```ignore
/// let start = cursor.position();
/// cursor.advance();
/// let token = MK_TOKEN!(TokenKind::Delimiter, cursor, start);
/// ```
#[macro_export]
macro_rules! MK_TOKEN {
    ($kind:expr, $cursor:expr, $start:expr) => {
        $crate::MK_TOKEN!($kind, $cursor, $start, None)
    };
    ($kind:expr, $cursor:expr, $start:expr, $value:expr) => {{
        let start: $crate::Position = $start;
        $crate::lexer::tokens::Token {
            kind: $kind,
            lexeme: $cursor.slice_from(start.offset),
            span: $crate::Span::new(start.offset, $cursor.pos()),
            line: start.line,
            column: start.column,
            value: $value,
        }
    }};
}
