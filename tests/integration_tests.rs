//! Integration tests for lexing files from disk.
//!
//! These tests load real source files through `SourceText::from_file`, run the
//! lexer end to end, and drive the `sclex` binary the way a user would.

use pretty_assertions::assert_eq;
use sclex::{
    lexer::{
        lexer::tokenize,
        source::SourceText,
        tokens::{Keyword, LiteralValue, TokenKind},
    },
    parser::parser::Parser,
};
use std::{path::PathBuf, process::Command};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests").join(name)
}

#[test]
fn test_lex_sample_file() {
    let source = SourceText::from_file(&fixture("sample.sc")).unwrap();
    let tokens = tokenize(&source).unwrap();

    assert!(tokens.diagnostics().is_empty());
    assert_eq!(tokens.last().unwrap().kind, TokenKind::EndOfFile);

    let arrays: Vec<_> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::ArrayForm)
        .map(|token| token.text())
        .collect();
    assert_eq!(arrays, vec!["grid[3][3]", "grid[i][i]"]);

    let functions: Vec<_> = tokens
        .iter()
        .filter(|token| token.kind == TokenKind::FunctionForm)
        .map(|token| (token.text(), token.line))
        .collect();
    assert_eq!(functions, vec![("trace(int n)".to_string(), 6)]);

    let string = tokens
        .iter()
        .find(|token| token.kind == TokenKind::StringLiteral)
        .unwrap();
    assert_eq!(string.text(), r#""tr\"ace""#);
    assert_eq!(string.line, 15);

    let float = tokens
        .iter()
        .find(|token| token.kind == TokenKind::FloatLiteral)
        .unwrap();
    assert_eq!(float.value, Some(LiteralValue::Float(0.5)));

    assert!(tokens
        .iter()
        .any(|token| token.kind == TokenKind::Keyword(Keyword::For) && token.line == 8));
    assert!(tokens.iter().any(|token| token.kind == TokenKind::BoolLiteral));
}

#[test]
fn test_parser_reads_sample_to_end() {
    let source = SourceText::from_file(&fixture("sample.sc")).unwrap();
    let tokens = tokenize(&source).unwrap();
    let mut parser = Parser::new(&tokens);

    assert_eq!(parser.current_token_kind(), TokenKind::Keyword(Keyword::Int));

    let mut read = 0;
    while !parser.is_at_end() {
        parser.advance();
        read += 1;
    }
    assert_eq!(read, tokens.len() - 1);
}

#[test]
fn test_missing_file_is_reported() {
    let error = SourceText::from_file(&fixture("does_not_exist.sc")).unwrap_err();

    assert_eq!(error.get_error_name(), "SourceRead");
    assert!(error.is_fatal());
}

#[test]
fn test_unterminated_comment_file_is_fatal() {
    let source = SourceText::from_file(&fixture("unterminated.sc")).unwrap();
    let error = tokenize(&source).unwrap_err();

    assert_eq!(error.get_error_name(), "UnterminatedComment");
    assert_eq!(error.get_position().line, 2);
}

#[test]
fn test_cli_dumps_tokens() {
    let output = Command::new(env!("CARGO_BIN_EXE_sclex"))
        .arg(fixture("sample.sc"))
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.contains("kind: FunctionForm\n  lexeme: \"trace(int n)\""));
    assert!(stdout.contains("kind: FloatLiteral\n  lexeme: \"0.5f\"\n  value: 0.5"));
    assert!(!stdout.contains("EndOfFile"));
}

#[test]
fn test_cli_fails_on_fatal_error() {
    let output = Command::new(env!("CARGO_BIN_EXE_sclex"))
        .arg(fixture("unterminated.sc"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("Error: UnterminatedComment"));
}

#[test]
fn test_cli_fails_on_missing_file() {
    let output = Command::new(env!("CARGO_BIN_EXE_sclex"))
        .arg(fixture("does_not_exist.sc"))
        .output()
        .unwrap();

    assert!(!output.status.success());
    assert!(String::from_utf8(output.stderr).unwrap().contains("SourceRead"));
}

#[test]
fn test_cli_requires_a_path() {
    let output = Command::new(env!("CARGO_BIN_EXE_sclex")).output().unwrap();
    assert!(!output.status.success());
}
