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

//! Operator scanning for the lexer.
//!
//! This module handles scanning of:
//! - Arithmetic operators (+, -, *, /)
//! - Comparison operators (==, !=, <, >, <=, >=)
//! - Assignment (=)

use super::helpers::LexerHelpers;
use super::tokens::{Symbol, Token, TokenKind};
use super::Lexer;
use crate::error::{CompileError, ErrorCode};

/// Trait for operator scanning operations.
pub trait OperatorScanner<'source> {
    /// Scan an operator.
    fn scan_symbol(&mut self) -> Result<Token, CompileError>;
}

impl<'source> OperatorScanner<'source> for Lexer<'source> {
    fn scan_symbol(&mut self) -> Result<Token, CompileError> {
        let start = self.position;
        let source = self.source;
        let rest = &source[start..];

        // Two-character symbols win over their one-character prefixes.
        let symbol = [2, 1]
            .into_iter()
            .filter_map(|len| rest.get(..len))
            .find_map(Symbol::from_lexeme);

        let Some(symbol) = symbol else {
            let c = self.advance().unwrap_or_default();
            let error = CompileError::new(
                ErrorCode::UnknownSymbol,
                format!("Unknown symbol '{}'", c),
                self.span_from(start),
            );
            return Err(if c == '!' {
                error.with_hint("Use '!=' to compare for inequality")
            } else {
                error
            });
        };

        for _ in 0..symbol.as_str().len() {
            self.advance();
        }

        Ok(Token::new(
            TokenKind::Symbol(symbol),
            symbol.as_str(),
            self.span_from(start),
        ))
    }
}
