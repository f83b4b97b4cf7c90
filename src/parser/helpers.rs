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

//! Parser helper methods for token stream navigation and error handling.
//!
//! This module provides utility methods for the parser including:
//! - Advancing the single token of lookahead
//! - Token expectation
//! - Error creation

use super::Parser;
use crate::ast::VarType;
use crate::error::{CompileError, ErrorCode, Span};
use crate::lexer::{Keyword, Symbol, Token, TokenKind};

/// A variable named in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VarRef {
    /// The letter as written.
    pub name: char,
    /// The type derived from the letter.
    pub var_type: VarType,
    /// Where the variable appears.
    pub span: Span,
}

/// Trait for parser helper operations.
pub trait ParserHelpers {
    /// Replace the lookahead with the next token and return the old one.
    fn advance(&mut self) -> Result<Token, CompileError>;

    /// Consume the given keyword or fail.
    fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token, CompileError>;

    /// Consume the given symbol or fail.
    fn expect_symbol(&mut self, symbol: Symbol) -> Result<Token, CompileError>;

    /// Consume a variable or fail.
    fn expect_variable(&mut self) -> Result<VarRef, CompileError>;

    /// Create an error at the current token.
    ///
    /// At end of input the code becomes `UnexpectedEndOfFile`, since
    /// whatever was expected can no longer follow.
    fn error(&self, code: ErrorCode, expected: &str) -> CompileError;
}

impl<'source> ParserHelpers for Parser<'source> {
    fn advance(&mut self) -> Result<Token, CompileError> {
        let next = self.lexer.next_token()?;
        Ok(std::mem::replace(&mut self.token, next))
    }

    fn expect_keyword(&mut self, keyword: Keyword) -> Result<Token, CompileError> {
        if self.token.is_keyword(keyword) {
            self.advance()
        } else {
            Err(self.error(ErrorCode::ExpectedToken, &format!("keyword {}", keyword)))
        }
    }

    fn expect_symbol(&mut self, symbol: Symbol) -> Result<Token, CompileError> {
        if self.token.is_symbol(symbol) {
            self.advance()
        } else {
            Err(self.error(ErrorCode::ExpectedToken, &format!("'{}'", symbol)))
        }
    }

    fn expect_variable(&mut self) -> Result<VarRef, CompileError> {
        let TokenKind::Var(var_type) = self.token.kind else {
            return Err(self.error(ErrorCode::ExpectedVariable, "a variable"));
        };

        let token = self.advance()?;
        Ok(VarRef {
            name: token.text.chars().next().unwrap_or_default(),
            var_type,
            span: token.span,
        })
    }

    fn error(&self, code: ErrorCode, expected: &str) -> CompileError {
        let code = if self.token.is_eof() {
            ErrorCode::UnexpectedEndOfFile
        } else {
            code
        };
        CompileError::new(
            code,
            format!("Expected {}, found {}", expected, self.token.describe()),
            self.token.span,
        )
    }
}
