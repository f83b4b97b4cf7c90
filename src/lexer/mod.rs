// SSLC - A compiler for a simple scripting language targeting x86-64 assembly
// Copyright (C) 2026  Marcel Joachim Kloubert <marcel@kloubert.dev>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU Affero General Public License for more details.
//
// You should have received a copy of the GNU Affero General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

//! Lexer module for the SSLC compiler.
//!
//! The lexer hands out one token per [`Lexer::next_token`] call, so the
//! parser pulls tokens lazily. It handles:
//! - Keywords and one-letter variables
//! - Integer, float and string literals
//! - Operators
//! - Comments (starting with #)

mod helpers;
mod identifiers;
mod numbers;
mod operators;
mod strings;
mod tokens;

pub use tokens::{Keyword, Symbol, Token, TokenKind};

use helpers::LexerHelpers;
use identifiers::IdentifierScanner;
use numbers::NumberScanner;
use operators::OperatorScanner;
use strings::StringScanner;

use crate::error::CompileError;

/// The lexer state for tokenizing source code.
pub struct Lexer<'source> {
    /// The source code being tokenized.
    source: &'source str,
    /// Current byte position in the source.
    position: usize,
    /// Current line number (1-indexed).
    line: usize,
    /// Current column number (1-indexed).
    column: usize,
}

impl<'source> Lexer<'source> {
    /// Create a new lexer for the given source code.
    pub fn new(source: &'source str) -> Self {
        Self {
            source,
            position: 0,
            line: 1,
            column: 1,
        }
    }

    /// Get the current byte position in the source.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Get the current line number.
    pub fn line(&self) -> usize {
        self.line
    }

    /// Get the current column number.
    pub fn column(&self) -> usize {
        self.column
    }

    /// Get the next token from the source.
    ///
    /// Once the input is exhausted every call returns an end-of-file token.
    pub fn next_token(&mut self) -> Result<Token, CompileError> {
        self.skip_whitespace_and_comments();

        let Some(c) = self.peek() else {
            return Ok(Token::eof(self.position));
        };

        let token = if c.is_ascii_digit() {
            self.scan_number()?
        } else if c.is_ascii_alphabetic() {
            self.scan_word()?
        } else if c == '"' {
            self.scan_string()?
        } else {
            self.scan_symbol()?
        };

        log::trace!("{}:{} {}", self.line, self.column, token);
        Ok(token)
    }
}

/// Tokenize source code into a vector of tokens.
///
/// The returned vector always ends with the end-of-file token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, CompileError> {
    let mut lexer = Lexer::new(source);
    let mut tokens = Vec::new();

    loop {
        let token = lexer.next_token()?;
        let done = token.is_eof();
        tokens.push(token);
        if done {
            break;
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ast::VarType;
    use crate::error::{ErrorCode, Span};

    fn kinds(source: &str) -> Vec<TokenKind> {
        tokenize(source)
            .unwrap()
            .into_iter()
            .map(|t| t.kind)
            .collect()
    }

    // ========================================
    // Basic Token Tests
    // ========================================

    #[test]
    fn test_empty_source() {
        assert_eq!(kinds(""), vec![TokenKind::EndOfFile]);
        assert_eq!(kinds("   \n\t  "), vec![TokenKind::EndOfFile]);
    }

    #[test]
    fn test_eof_repeats() {
        let mut lexer = Lexer::new("i");
        assert_eq!(lexer.next_token().unwrap().kind, TokenKind::Var(VarType::Int));
        for _ in 0..3 {
            assert!(lexer.next_token().unwrap().is_eof());
        }
    }

    #[test]
    fn test_arithmetic_operators() {
        assert_eq!(
            kinds("+ - * /"),
            vec![
                TokenKind::Symbol(Symbol::Plus),
                TokenKind::Symbol(Symbol::Minus),
                TokenKind::Symbol(Symbol::Mult),
                TokenKind::Symbol(Symbol::Div),
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_comparison_operators() {
        assert_eq!(
            kinds("== != < > <= >= ="),
            vec![
                TokenKind::Symbol(Symbol::EqEq),
                TokenKind::Symbol(Symbol::Neq),
                TokenKind::Symbol(Symbol::Lt),
                TokenKind::Symbol(Symbol::Gt),
                TokenKind::Symbol(Symbol::Leq),
                TokenKind::Symbol(Symbol::Geq),
                TokenKind::Symbol(Symbol::Eq),
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_two_char_symbols_not_split() {
        assert_eq!(
            kinds("i<=j"),
            vec![
                TokenKind::Var(VarType::Int),
                TokenKind::Symbol(Symbol::Leq),
                TokenKind::Var(VarType::Int),
                TokenKind::EndOfFile,
            ]
        );
        // `===` is `==` followed by `=`
        assert_eq!(
            kinds("==="),
            vec![
                TokenKind::Symbol(Symbol::EqEq),
                TokenKind::Symbol(Symbol::Eq),
                TokenKind::EndOfFile,
            ]
        );
    }

    // ========================================
    // Literal Tests
    // ========================================

    #[test]
    fn test_integer_literal() {
        let tokens = tokenize("123").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Const(VarType::Int));
        assert_eq!(tokens[0].text, "123");
        assert_eq!(tokens[0].span, Span::new(0, 3));
    }

    #[test]
    fn test_float_literals() {
        let tokens = tokenize("123.0 3.14159 7.").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Const(VarType::Float));
        assert_eq!(tokens[0].text, "123.0");
        assert_eq!(tokens[1].text, "3.14159");
        assert_eq!(tokens[2].kind, TokenKind::Const(VarType::Float));
        assert_eq!(tokens[2].text, "7.");
    }

    #[test]
    fn test_quoted_digits_are_a_string() {
        let tokens = tokenize("\"123\"").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Const(VarType::Str));
        assert_eq!(tokens[0].text, "123");
        assert_eq!(tokens[0].span, Span::new(0, 5));
    }

    #[test]
    fn test_string_has_no_escapes() {
        let tokens = tokenize(r#""a\nb" "line one
line two""#)
        .unwrap();
        assert_eq!(tokens[0].text, r"a\nb");
        assert_eq!(tokens[1].text, "line one\nline two");
    }

    #[test]
    fn test_empty_string() {
        let tokens = tokenize("\"\"").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Const(VarType::Str));
        assert_eq!(tokens[0].text, "");
    }

    #[test]
    fn test_integer_limits() {
        assert!(tokenize("2147483647").is_ok());
        let err = tokenize("2147483648").unwrap_err();
        assert_eq!(err.code, ErrorCode::IntegerOutOfRange);
    }

    // ========================================
    // Variable and Keyword Tests
    // ========================================

    #[test]
    fn test_variable_types() {
        assert_eq!(
            kinds("a h i n o z"),
            vec![
                TokenKind::Var(VarType::Float),
                TokenKind::Var(VarType::Float),
                TokenKind::Var(VarType::Int),
                TokenKind::Var(VarType::Int),
                TokenKind::Var(VarType::Str),
                TokenKind::Var(VarType::Str),
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_uppercase_variables() {
        let tokens = tokenize("A J Q").unwrap();
        assert_eq!(tokens[0].kind, TokenKind::Var(VarType::Float));
        assert_eq!(tokens[0].text, "A");
        assert_eq!(tokens[1].kind, TokenKind::Var(VarType::Int));
        assert_eq!(tokens[2].kind, TokenKind::Var(VarType::Str));
    }

    #[test]
    fn test_variable_followed_by_digit() {
        assert_eq!(
            kinds("i1"),
            vec![
                TokenKind::Var(VarType::Int),
                TokenKind::Const(VarType::Int),
                TokenKind::EndOfFile,
            ]
        );
    }

    #[test]
    fn test_keywords_any_case() {
        for kw in Keyword::ALL {
            let lower = kw.as_str().to_lowercase();
            let tokens = tokenize(&lower).unwrap();
            assert!(tokens[0].is_keyword(kw), "{} did not lex", lower);
            assert_eq!(tokens[0].text, lower);
        }
        assert!(tokenize("pRiNtLn").unwrap()[0].is_keyword(Keyword::Println));
    }

    #[test]
    fn test_unknown_keyword() {
        let err = tokenize("i = 1 printf i").unwrap_err();
        assert_eq!(err.code, ErrorCode::UnknownKeyword);
        assert_eq!(err.span, Span::new(6, 12));
    }

    // ========================================
    // Whitespace and Comment Tests
    // ========================================

    #[test]
    fn test_comments_are_skipped() {
        assert_eq!(
            kinds("# a comment\ni # trailing\n# last"),
            vec![TokenKind::Var(VarType::Int), TokenKind::EndOfFile]
        );
    }

    #[test]
    fn test_comment_ends_at_carriage_return() {
        assert_eq!(
            kinds("# comment\rj"),
            vec![TokenKind::Var(VarType::Int), TokenKind::EndOfFile]
        );
    }

    #[test]
    fn test_statement_sequence() {
        assert_eq!(
            kinds("i=1 PRINTLN i"),
            vec![
                TokenKind::Var(VarType::Int),
                TokenKind::Symbol(Symbol::Eq),
                TokenKind::Const(VarType::Int),
                TokenKind::Keyword(Keyword::Println),
                TokenKind::Var(VarType::Int),
                TokenKind::EndOfFile,
            ]
        );
    }

    // ========================================
    // Error Tests
    // ========================================

    #[test]
    fn test_unterminated_string() {
        let mut lexer = Lexer::new("\"abc");
        let err = lexer.next_token().unwrap_err();
        assert_eq!(err.code, ErrorCode::UnterminatedString);
        assert_eq!(err.span, Span::new(0, 4));
    }

    #[test]
    fn test_unknown_symbols() {
        for source in ["!", "@", "(", "%", "é"] {
            let err = tokenize(source).unwrap_err();
            assert_eq!(err.code, ErrorCode::UnknownSymbol, "source {:?}", source);
        }
    }

    #[test]
    fn test_position_tracking() {
        let mut lexer = Lexer::new("i = 1\nj = 2");
        for _ in 0..4 {
            lexer.next_token().unwrap();
        }
        assert_eq!(lexer.line(), 2);
        assert_eq!(lexer.column(), 2);
        assert_eq!(lexer.position(), 7);
    }
}
