//! Error types and error handling for the lexer.
//!
//! This module defines the errors a lexing run can produce:
//!
//! - Error structures carrying the source position they refer to
//! - Fatal variants that abort the run (unterminated comments, unreadable input)
//! - Recoverable variants recorded alongside an `Empty` marker token
//! - Suggestions shown to the user when the error is displayed

pub mod errors;

#[cfg(test)]
mod tests;
