use std::fmt::Display;

use thiserror::Error;

use crate::Position;

#[derive(Debug, Clone, PartialEq)]
pub struct Error {
    internal_error: ErrorImpl,
    position: Position,
}

impl Error {
    pub fn new(error_impl: ErrorImpl, position: Position) -> Self {
        Error {
            internal_error: error_impl,
            position,
        }
    }

    pub fn get_position(&self) -> &Position {
        &self.position
    }

    pub fn get_kind(&self) -> &ErrorImpl {
        &self.internal_error
    }

    /// Fatal errors abort the lexing run; everything else degrades to an `Empty` token.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self.internal_error,
            ErrorImpl::UnterminatedComment | ErrorImpl::SourceRead { .. }
        )
    }

    pub fn get_error_name(&self) -> &str {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment => "UnterminatedComment",
            ErrorImpl::UnterminatedLiteral { .. } => "UnterminatedLiteral",
            ErrorImpl::UnterminatedBracket => "UnterminatedBracket",
            ErrorImpl::UnterminatedParen => "UnterminatedParen",
            ErrorImpl::UnrecognisedCharacter { .. } => "UnrecognisedCharacter",
            ErrorImpl::IntegerOverflow { .. } => "IntegerOverflow",
            ErrorImpl::MalformedFloat { .. } => "MalformedFloat",
            ErrorImpl::SourceRead { .. } => "SourceRead",
            ErrorImpl::UnexpectedToken { .. } => "UnexpectedToken",
        }
    }

    pub fn get_tip(&self) -> ErrorTip {
        match &self.internal_error {
            ErrorImpl::UnterminatedComment => ErrorTip::Suggestion(String::from(
                "Block comment is never closed, add a matching `*/`",
            )),
            ErrorImpl::UnterminatedLiteral { delimiter } => {
                let kind = if *delimiter == '"' { "String" } else { "Char" };
                ErrorTip::Suggestion(format!(
                    "{} literal is missing its closing `{}`",
                    kind, delimiter
                ))
            }
            ErrorImpl::UnterminatedBracket => ErrorTip::Suggestion(String::from(
                "Array dimension is missing its closing `]`",
            )),
            ErrorImpl::UnterminatedParen => ErrorTip::Suggestion(String::from(
                "Argument list is missing its closing `)`",
            )),
            ErrorImpl::UnrecognisedCharacter { .. } => ErrorTip::None,
            ErrorImpl::IntegerOverflow { token } => ErrorTip::Suggestion(format!(
                "Integer `{}` is above the integer limit and was clamped to {}",
                token,
                u64::MAX
            )),
            ErrorImpl::MalformedFloat { token } => {
                ErrorTip::Suggestion(format!("Invalid float: `{}`", token))
            }
            ErrorImpl::SourceRead { path, message } => {
                ErrorTip::Suggestion(format!("Could not read `{}`: {}", path, message))
            }
            ErrorImpl::UnexpectedToken { expected, token } => ErrorTip::Suggestion(format!(
                "Expected {}, found `{}`",
                expected, token
            )),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at {}:{}",
            self.internal_error, self.position.line, self.position.column
        )
    }
}

impl std::error::Error for Error {}

pub enum ErrorTip {
    None,
    Suggestion(String),
}

impl Display for ErrorTip {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ErrorTip::None => write!(f, ""),
            ErrorTip::Suggestion(suggestion) => write!(f, "{}", suggestion),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ErrorImpl {
    #[error("unterminated block comment")]
    UnterminatedComment,
    #[error("unterminated literal, expected closing {delimiter:?}")]
    UnterminatedLiteral { delimiter: char },
    #[error("unterminated array dimension, expected `]`")]
    UnterminatedBracket,
    #[error("unterminated argument list, expected `)`")]
    UnterminatedParen,
    #[error("unrecognised character: {character:?}")]
    UnrecognisedCharacter { character: char },
    #[error("integer literal out of range: {token:?}")]
    IntegerOverflow { token: String },
    #[error("error parsing float: {token:?}")]
    MalformedFloat { token: String },
    #[error("failed to read {path:?}: {message}")]
    SourceRead { path: String, message: String },
    #[error("unexpected token {token:?}, expected {expected}")]
    UnexpectedToken { expected: String, token: String },
}
