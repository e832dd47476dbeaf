use lazy_static::lazy_static;
use std::{collections::HashMap, fmt::Display, ops::Deref};

use crate::{errors::errors::Error, Position, Span};

/// Length of the longest reserved word (`continue`). Longer identifier runs are never
/// looked up in [`KEYWORD_LOOKUP`].
pub const MAX_KEYWORD_LEN: usize = 8;

lazy_static! {
    pub static ref KEYWORD_LOOKUP: HashMap<&'static [u8], Keyword> = {
        let mut map: HashMap<&'static [u8], Keyword> = HashMap::new();
        map.insert(b"int", Keyword::Int);
        map.insert(b"float", Keyword::Float);
        map.insert(b"char", Keyword::Char);
        map.insert(b"bool", Keyword::Bool);
        map.insert(b"void", Keyword::Void);
        map.insert(b"if", Keyword::If);
        map.insert(b"else", Keyword::Else);
        map.insert(b"for", Keyword::For);
        map.insert(b"while", Keyword::While);
        map.insert(b"break", Keyword::Break);
        map.insert(b"continue", Keyword::Continue);
        map.insert(b"return", Keyword::Return);
        map.insert(b"const", Keyword::Const);
        map.insert(b"static", Keyword::Static);
        map.insert(b"nullptr", Keyword::Nullptr);
        map.insert(b"NULL", Keyword::Null);
        map
    };
}

/// Looks up a reserved word, skipping the table entirely for runs longer than
/// [`MAX_KEYWORD_LEN`].
pub fn lookup_keyword(word: &[u8]) -> Option<Keyword> {
    if word.len() > MAX_KEYWORD_LEN {
        return None;
    }
    KEYWORD_LOOKUP.get(word).copied()
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Keyword {
    Int,
    Float,
    Char,
    Bool,
    Void,
    If,
    Else,
    For,
    While,
    Break,
    Continue,
    Return,
    Const,
    Static,
    Nullptr,
    Null,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    IntLiteral,
    FloatLiteral,
    CharLiteral,
    StringLiteral,
    BoolLiteral,
    Identifier,

    /// `name(args)`, spanning the name through the closing paren.
    FunctionForm,
    /// `name[dim]...`, spanning the name through the last closing bracket.
    ArrayForm,

    Keyword(Keyword),
    Operator,
    Delimiter,

    /// Marks a construct that could not be scanned.
    Empty,
    EndOfFile,
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

/// Decoded value of a numeric literal.
#[derive(Debug, PartialEq, Clone, Copy)]
pub enum LiteralValue {
    Int(u64),
    Float(f64),
}

impl Display for LiteralValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LiteralValue::Int(value) => write!(f, "{}", value),
            LiteralValue::Float(value) => write!(f, "{:?}", value),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src [u8],
    pub span: Span,
    pub line: u32,
    pub column: u32,
    /// Only set for `IntLiteral` and `FloatLiteral`.
    pub value: Option<LiteralValue>,
}

impl Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Token {{")?;
        writeln!(f, "  kind: {}", self.kind)?;
        writeln!(f, "  lexeme: {:?}", self.text())?;
        if let Some(value) = self.value {
            writeln!(f, "  value: {}", value)?;
        }
        writeln!(f, "  line: {}, column: {}", self.line, self.column)?;
        writeln!(f, "  length: {}", self.len())?;
        write!(f, "}}")
    }
}

impl Token<'_> {
    /// The lexeme as text, with any invalid UTF-8 replaced.
    pub fn text(&self) -> String {
        String::from_utf8_lossy(self.lexeme).into_owned()
    }

    pub fn len(&self) -> usize {
        self.span.len()
    }

    pub fn is_empty(&self) -> bool {
        self.span.is_empty()
    }

    pub fn position(&self) -> Position {
        Position {
            offset: self.span.start,
            line: self.line,
            column: self.column,
        }
    }
}

const INITIAL_CAPACITY: usize = 128;

/// The ordered output of one lexing run.
///
/// Append-only while the lexer owns it; afterwards it derefs to a read-only
/// `[Token]` slice whose last element is the single `EndOfFile` token. Growth
/// is the `Vec` doubling strategy, and an allocation failure aborts the process.
#[derive(Debug, Clone)]
pub struct TokenStream<'src> {
    tokens: Vec<Token<'src>>,
    diagnostics: Vec<Error>,
}

impl<'src> TokenStream<'src> {
    pub(crate) fn new() -> Self {
        TokenStream {
            tokens: Vec::with_capacity(INITIAL_CAPACITY),
            diagnostics: vec![],
        }
    }

    pub(crate) fn push(&mut self, token: Token<'src>) {
        tracing::trace!(kind = %token.kind, line = token.line, column = token.column, "emit");
        self.tokens.push(token);
    }

    pub(crate) fn report(&mut self, error: Error) {
        self.diagnostics.push(error);
    }

    pub fn tokens(&self) -> &[Token<'src>] {
        &self.tokens
    }

    /// Recoverable errors met while lexing, in source order of discovery.
    pub fn diagnostics(&self) -> &[Error] {
        &self.diagnostics
    }

    pub fn into_tokens(self) -> Vec<Token<'src>> {
        self.tokens
    }
}

impl<'src> Deref for TokenStream<'src> {
    type Target = [Token<'src>];

    fn deref(&self) -> &Self::Target {
        &self.tokens
    }
}

impl<'a, 'src> IntoIterator for &'a TokenStream<'src> {
    type Item = &'a Token<'src>;
    type IntoIter = std::slice::Iter<'a, Token<'src>>;

    fn into_iter(self) -> Self::IntoIter {
        self.tokens.iter()
    }
}
