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

//! Statement parsing for the parser.
//!
//! This module provides statement parsing:
//! - Statement dispatch
//! - Assignments
//! - PRINT and PRINTLN
//! - Statement sequences closed by a keyword

use super::control_flow::ControlFlowParser;
use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::Parser;
use crate::codegen::StatementEmitter;
use crate::error::{CompileError, ErrorCode};
use crate::lexer::{Keyword, Symbol, TokenKind};

/// Extension trait for statement parsing.
pub trait StatementParser {
    /// Parse a single statement.
    fn parse_statement(&mut self) -> Result<(), CompileError>;

    /// Parse an assignment.
    fn parse_assignment(&mut self) -> Result<(), CompileError>;

    /// Parse a PRINT or PRINTLN statement.
    fn parse_print_statement(&mut self) -> Result<(), CompileError>;

    /// Parse statements until one of the closing keywords, which is
    /// returned but not consumed.
    fn parse_block(&mut self, closers: &[Keyword]) -> Result<Keyword, CompileError>;
}

impl<'source> StatementParser for Parser<'source> {
    fn parse_statement(&mut self) -> Result<(), CompileError> {
        match self.token.kind {
            TokenKind::Var(_) => self.parse_assignment(),
            TokenKind::Keyword(Keyword::Print | Keyword::Println) => {
                self.parse_print_statement()
            }
            TokenKind::Keyword(Keyword::If) => self.parse_if_statement(),
            TokenKind::Keyword(Keyword::For) => self.parse_for_statement(),
            _ => Err(self.error(ErrorCode::UnexpectedToken, "a statement")),
        }
    }

    fn parse_assignment(&mut self) -> Result<(), CompileError> {
        let target = self.expect_variable()?;
        self.expect_symbol(Symbol::Eq)?;
        let value = self.parse_expression()?;

        if value.var_type != target.var_type {
            return Err(CompileError::new(
                ErrorCode::TypeMismatch,
                format!(
                    "Cannot assign {} to {} variable '{}'",
                    value.var_type, target.var_type, target.name
                ),
                target.span.merge(&value.span),
            )
            .with_hint("a-h are float, i-n are int, other letters are string"));
        }

        self.codegen.emit_store(target.name, target.var_type);
        Ok(())
    }

    fn parse_print_statement(&mut self) -> Result<(), CompileError> {
        let newline = self.advance()?.is_keyword(Keyword::Println);
        let value = self.parse_expression()?;
        self.codegen.emit_print(value.var_type, newline);
        Ok(())
    }

    fn parse_block(&mut self, closers: &[Keyword]) -> Result<Keyword, CompileError> {
        loop {
            if let Some(keyword) = self.token.keyword().filter(|k| closers.contains(k)) {
                return Ok(keyword);
            }
            if self.token.is_eof() {
                let expected: Vec<_> = closers.iter().map(Keyword::as_str).collect();
                return Err(self.error(ErrorCode::UnexpectedEndOfFile, &expected.join(" or ")));
            }
            self.parse_statement()?;
        }
    }
}
