//! A command-line wrapper around the `quill-json` library.
//!
//! Reads a document from the file named by the first argument, or from
//! standard input when no argument is given, echoes the token sequence,
//! and pretty-prints the parsed value. Exits non-zero on any failure.

use quill_json::{Parser, Token, Tokenizer, DEFAULT_MAX_DEPTH};
use std::env;
use std::fs;
use std::io::{self, Read};
use std::process::ExitCode;

fn read_input() -> io::Result<String> {
    match env::args().nth(1) {
        Some(path) => fs::read_to_string(path),
        None => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn main() -> ExitCode {
    let input = match read_input() {
        Ok(input) => input,
        Err(e) => {
            eprintln!("error: could not read input: {}", e);
            return ExitCode::FAILURE;
        }
    };

    // Materialize the token sequence so it can be echoed before parsing;
    // the parser runs unchanged over the buffered tokens.
    let tokens: Vec<Token> = Tokenizer::new(&input).collect();
    println!("Tokens:");
    for token in &tokens {
        println!("  {:?}", token);
    }

    match Parser::new(tokens.into_iter(), DEFAULT_MAX_DEPTH).parse() {
        Ok(value) => match value.to_text_pretty() {
            Ok(text) => {
                println!("Parsed:");
                println!("{}", text);
                ExitCode::SUCCESS
            }
            Err(_) => {
                eprintln!("error: parsed value contains content the output grammar cannot express");
                ExitCode::FAILURE
            }
        },
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}
