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

//! String literal scanning for the lexer.
//!
//! Strings run from one `"` to the next. There are no escape sequences, and
//! a literal may span several lines.

use super::helpers::LexerHelpers;
use super::tokens::{Token, TokenKind};
use super::Lexer;
use crate::ast::VarType;
use crate::error::{CompileError, ErrorCode};

/// Trait for string scanning operations.
pub trait StringScanner<'source> {
    /// Scan a string literal.
    fn scan_string(&mut self) -> Result<Token, CompileError>;
}

impl<'source> StringScanner<'source> for Lexer<'source> {
    fn scan_string(&mut self) -> Result<Token, CompileError> {
        let start = self.position;
        self.advance(); // consume opening "

        let content_start = self.position;
        self.advance_while(|c| c != '"');
        let value = self.lexeme_from(content_start);

        if self.is_at_end() {
            return Err(CompileError::new(
                ErrorCode::UnterminatedString,
                "Unterminated string literal",
                self.span_from(start),
            )
            .with_hint("Add a closing '\"'"));
        }

        self.advance(); // consume closing "

        Ok(Token::new(
            TokenKind::Const(VarType::Str),
            value,
            self.span_from(start),
        ))
    }
}
