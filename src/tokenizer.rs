//! The byte-based tokenizer (lexer).
//!
//! This module consumes the raw input `&str` (as `&[u8]`) and produces a
//! lazy sequence of `Token`s, one logical unit at a time, never looking
//! back. Lexical failures are signaled structurally: the tokenizer emits
//! a single `Invalid` token and closes the sequence instead of panicking
//! or returning an error type.

use crate::error::LexicalErrorKind;
use crate::token::{Token, TokenKind};
use crate::value::Number;
use memchr::memchr;
use std::str;

// --- The Lookup Table (LUT) ---
// A 256-entry array lets us classify any byte with a single,
// branchless lookup.
pub(crate) const W: u8 = 1; // Whitespace
pub(crate) const S: u8 = 2; // Structural
pub(crate) const L: u8 = 3; // Keyword
pub(crate) const D: u8 = 4; // Digit
pub(crate) const Q: u8 = 5; // Quote

static BYTE_PROPERTIES: [u8; 256] = {
    let mut table = [0; 256];
    // 1: Whitespace (the ASCII whitespace set)
    table[b' ' as usize] = W;
    table[b'\n' as usize] = W;
    table[b'\r' as usize] = W;
    table[b'\t' as usize] = W;
    table[0x0b] = W; // vertical tab
    table[0x0c] = W; // form feed

    // 2: Structural
    table[b'{' as usize] = S;
    table[b'}' as usize] = S;
    table[b'[' as usize] = S;
    table[b']' as usize] = S;
    table[b':' as usize] = S;
    table[b',' as usize] = S;

    // 3: Keyword (true, false, null)
    table[b't' as usize] = L;
    table[b'f' as usize] = L;
    table[b'n' as usize] = L;

    // 5: Quote
    table[b'"' as usize] = Q;

    // 4: Digit (and '-')
    table[b'-' as usize] = D;
    table[b'0' as usize] = D;
    table[b'1' as usize] = D;
    table[b'2' as usize] = D;
    table[b'3' as usize] = D;
    table[b'4' as usize] = D;
    table[b'5' as usize] = D;
    table[b'6' as usize] = D;
    table[b'7' as usize] = D;
    table[b'8' as usize] = D;
    table[b'9' as usize] = D;

    // 0: All other bytes cannot start a token
    table
};

/// The tokenizer (lexer).
///
/// An `Iterator<Item = Token>` over the input text. The sequence is
/// finite and ends with exactly one of two terminal tokens: `EndOfInput`
/// when the text is exhausted cleanly, or `Invalid` on the first lexical
/// error. After either, the iterator only returns `None`; a fresh
/// `Tokenizer` is required to re-scan.
///
/// It operates on raw bytes (`&[u8]`), using a lookup table
/// (`BYTE_PROPERTIES`) to classify bytes and `memchr` for fast
/// string scanning.
pub struct Tokenizer<'a> {
    /// The raw byte slice of the input text.
    bytes: &'a [u8],
    /// The current position (index) in the `bytes` slice.
    cursor: usize,
    /// The current line number (1-indexed) for error reporting.
    line: usize,
    /// The current column number (1-indexed) for error reporting.
    column: usize,
    /// Set once a terminal token (`EndOfInput` or `Invalid`) has been
    /// emitted.
    done: bool,
}

impl<'a> Tokenizer<'a> {
    /// Creates a new `Tokenizer` over an input string.
    pub fn new(input: &'a str) -> Self {
        Tokenizer {
            bytes: input.as_bytes(),
            cursor: 0,
            line: 1,
            column: 1,
            done: false,
        }
    }

    /// The performance-critical whitespace skipping function.
    /// Uses the LUT to check byte properties in a branchless way.
    #[inline]
    fn skip_whitespace(&mut self) {
        while let Some(&byte) = self.bytes.get(self.cursor) {
            // This is the hot loop: a single array lookup and comparison.
            if BYTE_PROPERTIES[byte as usize] != W {
                break;
            }

            if byte == b'\n' {
                self.line += 1;
                self.column = 1;
            } else {
                self.column += 1;
            }
            self.cursor += 1;
        }
    }

    /// Advances the cursor by one byte, updating line/col.
    /// Assumes the cursor is not at the end.
    #[inline]
    fn advance_byte(&mut self) {
        if self.bytes[self.cursor] == b'\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        self.cursor += 1;
    }

    /// Advances the cursor by `n` bytes, updating line/col for each.
    #[inline]
    fn advance_by(&mut self, n: usize) {
        for _ in 0..n {
            self.advance_byte();
        }
    }

    /// Consumes a run of ASCII digits and returns how many were consumed.
    fn consume_digits(&mut self) -> usize {
        let mut count = 0;
        while let Some(&byte) = self.bytes.get(self.cursor) {
            if !byte.is_ascii_digit() {
                break;
            }
            self.advance_byte();
            count += 1;
        }
        count
    }

    /// Lexes a keyword (`true`, `false`, `null`) by exact match.
    ///
    /// A partial match is a lexical error; no prefix is consumed.
    fn lex_keyword(&mut self, expected: &'static str, kind: TokenKind) -> TokenKind {
        let end = self.cursor + expected.len();
        if self.bytes.get(self.cursor..end) == Some(expected.as_bytes()) {
            self.advance_by(expected.len());
            kind
        } else {
            TokenKind::Invalid(LexicalErrorKind::MalformedKeyword(expected))
        }
    }

    /// Lexes a string literal: the shortest run of bytes between the
    /// opening quote and the next quote, scanned with `memchr`.
    ///
    /// No escape sequences are interpreted. A backslash is ordinary
    /// content, which means a backslash-escaped quote terminates the
    /// literal early; the bytes after it are lexed as whatever they look
    /// like on their own.
    fn lex_string(&mut self) -> TokenKind {
        self.advance_byte(); // Consume the opening '"'

        match memchr(b'"', &self.bytes[self.cursor..]) {
            Some(len) => {
                let content = &self.bytes[self.cursor..self.cursor + len];
                // The input came from a &str and '"' is ASCII, so the
                // slice between two quotes is always valid UTF-8.
                let text = unsafe { str::from_utf8_unchecked(content) }.to_owned();
                self.advance_by(len); // Walk the content to count newlines
                self.advance_byte(); // Consume the closing '"'
                TokenKind::String(text)
            }
            None => {
                self.cursor = self.bytes.len();
                TokenKind::Invalid(LexicalErrorKind::UnterminatedString)
            }
        }
    }

    /// Lexes a number literal: an optional `-`, one or more digits, then
    /// optionally a `.` followed by one or more digits. No exponents.
    ///
    /// The integer/float tag is decided purely by the presence of the
    /// decimal point. A `.` not followed by a digit is not part of the
    /// number; the number ends before it.
    fn lex_number(&mut self) -> TokenKind {
        let start = self.cursor;
        if self.bytes.get(self.cursor) == Some(&b'-') {
            self.advance_byte();
        }
        if self.consume_digits() == 0 {
            return TokenKind::Invalid(LexicalErrorKind::MalformedNumber);
        }

        let mut is_fractional = false;
        if self.bytes.get(self.cursor) == Some(&b'.')
            && self.bytes.get(self.cursor + 1).is_some_and(|b| b.is_ascii_digit())
        {
            self.advance_byte(); // Consume the '.'
            self.consume_digits();
            is_fractional = true;
        }

        // The slice is pure ASCII ('-', '.', digits).
        let text = unsafe { str::from_utf8_unchecked(&self.bytes[start..self.cursor]) };

        if is_fractional {
            match text.parse::<f64>() {
                Ok(n) => TokenKind::Number(Number::Float(n)),
                Err(_) => TokenKind::Invalid(LexicalErrorKind::MalformedNumber),
            }
        } else {
            match text.parse::<i64>() {
                Ok(n) => TokenKind::Number(Number::Int(n)),
                // An integer literal too large for i64 keeps its value as
                // closely as f64 allows.
                Err(_) => match text.parse::<f64>() {
                    Ok(n) => TokenKind::Number(Number::Float(n)),
                    Err(_) => TokenKind::Invalid(LexicalErrorKind::MalformedNumber),
                },
            }
        }
    }
}

impl<'a> Iterator for Tokenizer<'a> {
    type Item = Token;

    /// Produces the next `Token` from the input.
    fn next(&mut self) -> Option<Token> {
        if self.done {
            return None;
        }

        // 1. Skip all insignificant whitespace.
        self.skip_whitespace();

        // 2. Record the token's start position.
        let (line, column) = (self.line, self.column);

        // 3. Peek at the next byte to decide what to lex.
        let byte = match self.bytes.get(self.cursor) {
            Some(&b) => b,
            None => {
                // Clean end of input: exactly one EndOfInput token.
                self.done = true;
                return Some(Token {
                    kind: TokenKind::EndOfInput,
                    line,
                    column,
                });
            }
        };

        // 4. Use the LUT to dispatch to the right lexer.
        let kind = match BYTE_PROPERTIES[byte as usize] {
            S => {
                self.advance_byte();
                match byte {
                    b'{' => TokenKind::LeftBrace,
                    b'}' => TokenKind::RightBrace,
                    b'[' => TokenKind::LeftBracket,
                    b']' => TokenKind::RightBracket,
                    b':' => TokenKind::Colon,
                    b',' => TokenKind::Comma,
                    _ => unreachable!(), // LUT guarantees this
                }
            }
            L => match byte {
                b't' => self.lex_keyword("true", TokenKind::Boolean(true)),
                b'f' => self.lex_keyword("false", TokenKind::Boolean(false)),
                b'n' => self.lex_keyword("null", TokenKind::Null),
                _ => unreachable!(), // LUT guarantees this
            },
            D => self.lex_number(),
            Q => self.lex_string(),
            // Whitespace was skipped above, so class 0 is the only
            // remaining possibility: a byte that cannot start a token.
            _ => TokenKind::Invalid(LexicalErrorKind::UnexpectedCharacter(byte as char)),
        };

        // 5. An Invalid token closes the sequence.
        if matches!(kind, TokenKind::Invalid(_)) {
            self.done = true;
        }

        Some(Token { kind, line, column })
    }
}
