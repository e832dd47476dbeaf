use std::{env, path::PathBuf, process::ExitCode, time::Instant};

use sclex::{
    display_error, init_tracing,
    lexer::{lexer::tokenize, source::SourceText},
    parser::parser::Parser,
};

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: sclex <file>");
        return ExitCode::FAILURE;
    }

    let file_path = PathBuf::from(&args[1]);

    let source = match SourceText::from_file(&file_path) {
        Ok(source) => source,
        Err(error) => {
            eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
            return ExitCode::FAILURE;
        }
    };

    let start = Instant::now();

    let tokens = match tokenize(&source) {
        Ok(tokens) => tokens,
        Err(error) => {
            display_error(&error, &source);
            return ExitCode::FAILURE;
        }
    };

    tracing::info!(elapsed = ?start.elapsed(), tokens = tokens.len(), "tokenized");

    for error in tokens.diagnostics() {
        display_error(error, &source);
    }

    let mut parser = Parser::new(&tokens);
    while !parser.is_at_end() {
        if let Some(token) = parser.advance() {
            println!("{}", token);
        }
    }

    ExitCode::SUCCESS
}
