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

//! Variable and keyword scanning for the lexer.
//!
//! A lone letter is a variable. Two or more letters in a row must spell a
//! keyword.

use super::helpers::LexerHelpers;
use super::tokens::{Keyword, Token, TokenKind};
use super::Lexer;
use crate::ast::VarType;
use crate::error::{CompileError, ErrorCode};

/// Trait for variable and keyword scanning operations.
pub trait IdentifierScanner<'source> {
    /// Scan a one-letter variable or a keyword.
    fn scan_word(&mut self) -> Result<Token, CompileError>;
}

impl<'source> IdentifierScanner<'source> for Lexer<'source> {
    fn scan_word(&mut self) -> Result<Token, CompileError> {
        let start = self.position;
        let first = self.advance().unwrap_or_default();

        if !self.peek().is_some_and(|c| c.is_ascii_alphabetic()) {
            let var_type = VarType::from_letter(first);
            return Ok(Token::new(
                TokenKind::Var(var_type),
                first.to_string(),
                self.span_from(start),
            ));
        }

        self.advance_while(|c| c.is_ascii_alphabetic());
        let word = self.lexeme_from(start);
        let span = self.span_from(start);

        match Keyword::from_word(word) {
            Some(keyword) => Ok(Token::new(TokenKind::Keyword(keyword), word, span)),
            None => Err(CompileError::new(
                ErrorCode::UnknownKeyword,
                format!("Unknown keyword '{}'", word),
                span,
            )
            .with_hint("Variable names are a single letter")),
        }
    }
}
