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

//! Number scanning for the lexer.
//!
//! Numbers are a run of digits, optionally followed by `.` and a second
//! (possibly empty) run of digits. The first form is an integer, the second a
//! float. The token text is the lexeme itself.

use super::helpers::LexerHelpers;
use super::tokens::{Token, TokenKind};
use super::Lexer;
use crate::ast::VarType;
use crate::error::{CompileError, ErrorCode};

/// Trait for number scanning operations.
pub trait NumberScanner<'source> {
    /// Scan an integer or float literal.
    fn scan_number(&mut self) -> Result<Token, CompileError>;
}

impl<'source> NumberScanner<'source> for Lexer<'source> {
    fn scan_number(&mut self) -> Result<Token, CompileError> {
        let start = self.position;
        self.advance_while(|c| c.is_ascii_digit());

        if self.peek() == Some('.') {
            self.advance();
            self.advance_while(|c| c.is_ascii_digit());
            let text = self.lexeme_from(start);
            return Ok(Token::new(
                TokenKind::Const(VarType::Float),
                text,
                self.span_from(start),
            ));
        }

        let text = self.lexeme_from(start);
        let span = self.span_from(start);

        // Integers are loaded as 32-bit immediates.
        if text.parse::<i32>().is_err() {
            return Err(CompileError::new(
                ErrorCode::IntegerOutOfRange,
                format!("Integer constant {} does not fit in 32 bits", text),
                span,
            )
            .with_hint(format!("The largest integer constant is {}", i32::MAX)));
        }

        Ok(Token::new(TokenKind::Const(VarType::Int), text, span))
    }
}
