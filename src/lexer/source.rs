use std::{fs, path::Path};

use crate::{
    errors::errors::{Error, ErrorImpl},
    Position, Span,
};

use super::cursor::Cursor;

/// The raw bytes of one compilation unit and the name used when reporting errors.
///
/// Tokens borrow their lexemes from here, so a `SourceText` must outlive every
/// `TokenStream` produced from it. The bytes are never validated as UTF-8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceText {
    name: String,
    bytes: Box<[u8]>,
}

impl SourceText {
    pub fn new(name: impl Into<String>, bytes: impl Into<Vec<u8>>) -> Self {
        SourceText {
            name: name.into(),
            bytes: bytes.into().into_boxed_slice(),
        }
    }

    pub fn from_file(path: &Path) -> Result<Self, Error> {
        let bytes = fs::read(path).map_err(|err| {
            Error::new(
                ErrorImpl::SourceRead {
                    path: path.display().to_string(),
                    message: err.to_string(),
                },
                Position::null(),
            )
        })?;

        tracing::debug!(path = %path.display(), bytes = bytes.len(), "loaded source");
        Ok(SourceText::new(path.display().to_string(), bytes))
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Returns the bytes covered by `span`, or `None` if it reaches past the end.
    pub fn slice(&self, span: Span) -> Option<&[u8]> {
        self.bytes.get(span.start..span.end)
    }

    pub fn cursor(&self) -> Cursor<'_> {
        Cursor::new(&self.bytes)
    }
}
