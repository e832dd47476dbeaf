//! Lexical analysis module for the S-C language.
//!
//! This module contains the lexer (tokenizer) that converts source bytes
//! into a stream of tokens for parsing. It handles:
//!
//! - Whitespace, `//` line comments and `/* */` block comments
//! - Integer, float, char, string and boolean literals
//! - Keyword and identifier classification
//! - Array forms (`grid[10][20]`) and function forms (`add(a, b)`) as single tokens
//! - Maximal-munch operators and single-byte delimiters
//! - Token position tracking (line/column) for error reporting

pub mod cursor;
pub mod identifiers;
pub mod lexer;
pub mod literals;
pub mod operators;
pub mod source;
pub mod structural;
pub mod tokens;
