#![allow(clippy::module_inception)]

use std::sync::Once;

use crate::{
    errors::errors::{Error, ErrorTip},
    lexer::source::SourceText,
};

pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;

/// A location in a [`SourceText`]: byte offset plus 1-based line and 0-based column.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Position {
    pub offset: usize,
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn null() -> Self {
        Position {
            offset: 0,
            line: 1,
            column: 0,
        }
    }
}

/// Half-open byte range `start..end` into a [`SourceText`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Span { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }
}

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=sclex=debug` or `RUST_LOG=sclex=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            tracing_subscriber::registry()
                .with(fmt::layer().with_writer(std::io::stderr).with_target(true).with_level(true))
                .with(filter)
                .init();
        }
    });
}

/// Returns the 1-based line number, the text of that line, and the offset within the line
/// for the byte at `position`, or `None` when `position` lies past the end of the source.
pub fn get_line_at_position(source: &SourceText, position: usize) -> Option<(usize, String, usize)> {
    if position >= source.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in source.bytes().split_inclusive(|&byte| byte == b'\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            let line_pos = position - start;
            return Some((line_number, String::from_utf8_lossy(line).into_owned(), line_pos));
        }

        start = end;
        line_number += 1;
    }

    None
}

#[cfg(test)]
mod tests {
    use crate::lexer::source::SourceText;

    #[test]
    fn test_get_line_at_position() {
        let source = SourceText::new("test_file.sc", "Hello, world!\nint x;\n\nTesting { }\n");

        let (line_number, line, line_pos) = super::get_line_at_position(&source, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(&source, 30).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_past_end() {
        let source = SourceText::new("test_file.sc", "abc");
        assert!(super::get_line_at_position(&source, 3).is_none());
    }
}

/// Prints `error` to stderr, pointing at the offending byte of `source`.
pub fn display_error(error: &Error, source: &SourceText) {
    /*
        Error: UnterminatedLiteral (String literal is missing its closing `"`)
        -> main.sc
           |
        20 | char* s = "abc;
           | ----------^
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {}", error.get_error_name());
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", source.name());

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().offset) else {
        eprintln!("   | {}", error);
        return;
    };

    let line_str = line.to_string();
    let padding = line_str.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_str, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let mut start = 0;
    for c in string.chars() {
        if c == ' ' || c == '\t' {
            start += 1;
        } else {
            break;
        }
    }

    (String::from(&string[start..]), start)
}
