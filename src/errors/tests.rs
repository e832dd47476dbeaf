//! Unit tests for error handling.
//!
//! This module contains tests for error types and error reporting.

use crate::errors::errors::{Error, ErrorImpl, ErrorTip};
use crate::Position;

fn at(offset: usize, line: u32, column: u32) -> Position {
    Position {
        offset,
        line,
        column,
    }
}

#[test]
fn test_error_creation() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '@' },
        at(10, 1, 10),
    );

    assert_eq!(error.get_error_name(), "UnrecognisedCharacter");
    assert_eq!(
        error.get_kind(),
        &ErrorImpl::UnrecognisedCharacter { character: '@' }
    );
}

#[test]
fn test_error_position() {
    let error = Error::new(ErrorImpl::UnterminatedParen, at(42, 3, 7));

    assert_eq!(error.get_position().offset, 42);
    assert_eq!(error.get_position().line, 3);
    assert_eq!(error.get_position().column, 7);
}

#[test]
fn test_unterminated_comment_is_fatal() {
    let error = Error::new(ErrorImpl::UnterminatedComment, Position::null());

    assert!(error.is_fatal());
    assert_eq!(error.get_error_name(), "UnterminatedComment");
}

#[test]
fn test_source_read_is_fatal() {
    let error = Error::new(
        ErrorImpl::SourceRead {
            path: "missing.sc".to_string(),
            message: "No such file or directory".to_string(),
        },
        Position::null(),
    );

    assert!(error.is_fatal());
    assert_eq!(
        error.get_tip().to_string(),
        "Could not read `missing.sc`: No such file or directory"
    );
}

#[test]
fn test_local_errors_are_recoverable() {
    let recoverable = [
        ErrorImpl::UnterminatedLiteral { delimiter: '"' },
        ErrorImpl::UnterminatedBracket,
        ErrorImpl::UnterminatedParen,
        ErrorImpl::UnrecognisedCharacter { character: '#' },
        ErrorImpl::IntegerOverflow {
            token: "99999999999999999999".to_string(),
        },
        ErrorImpl::MalformedFloat {
            token: "1.".to_string(),
        },
    ];

    for kind in recoverable {
        assert!(!Error::new(kind, Position::null()).is_fatal());
    }
}

#[test]
fn test_literal_tip_names_delimiter() {
    let string = Error::new(ErrorImpl::UnterminatedLiteral { delimiter: '"' }, Position::null());
    let character = Error::new(ErrorImpl::UnterminatedLiteral { delimiter: '\'' }, Position::null());

    assert_eq!(
        string.get_tip().to_string(),
        "String literal is missing its closing `\"`"
    );
    assert_eq!(
        character.get_tip().to_string(),
        "Char literal is missing its closing `'`"
    );
}

#[test]
fn test_unrecognised_character_has_no_tip() {
    let error = Error::new(
        ErrorImpl::UnrecognisedCharacter { character: '$' },
        Position::null(),
    );

    assert!(matches!(error.get_tip(), ErrorTip::None));
    assert_eq!(error.get_tip().to_string(), "");
}

#[test]
fn test_error_display_includes_coordinates() {
    let error = Error::new(ErrorImpl::UnterminatedBracket, at(5, 2, 4));

    assert_eq!(
        error.to_string(),
        "unterminated array dimension, expected `]` at 2:4"
    );
}

#[test]
fn test_error_impl_display() {
    let error = ErrorImpl::UnterminatedLiteral { delimiter: '\'' };
    assert_eq!(error.to_string(), "unterminated literal, expected closing '\\''");

    let error = ErrorImpl::IntegerOverflow {
        token: "123".to_string(),
    };
    assert_eq!(error.to_string(), "integer literal out of range: \"123\"");
}
