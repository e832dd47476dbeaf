//! Parser-side access to a lexed token stream.
//!
//! Statement and expression parsing are not implemented yet. This module holds
//! the token reader the parser is built on: it walks a `TokenStream` strictly
//! left to right and never moves past the final `EndOfFile` token.

pub mod parser;
