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

//! Expression parsing for the parser.
//!
//! Expressions are flat: an atom, optionally followed by one binary
//! operator and a second atom. Code is emitted as the atoms are read.

use super::helpers::ParserHelpers;
use super::Parser;
use crate::ast::{Atom, AtomKind, VarType};
use crate::codegen::ExpressionEmitter;
use crate::error::{CompileError, ErrorCode, Span};
use crate::lexer::TokenKind;

/// The result of a parsed expression. Its value is in the accumulator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExprInfo {
    /// The type of the value.
    pub var_type: VarType,
    /// The source range of the whole expression.
    pub span: Span,
}

/// Extension trait for expression parsing.
pub trait ExpressionParser {
    /// Parse an expression and emit code leaving its value in the
    /// accumulator.
    fn parse_expression(&mut self) -> Result<ExprInfo, CompileError>;

    /// Parse a constant or variable.
    fn parse_atom(&mut self) -> Result<Atom, CompileError>;
}

impl<'source> ExpressionParser for Parser<'source> {
    fn parse_expression(&mut self) -> Result<ExprInfo, CompileError> {
        let left = self.parse_atom()?;
        let left_type = left.var_type();
        self.codegen.emit_atom(&left);

        let Some(op) = self.token.symbol().and_then(|s| s.binary_op()) else {
            return Ok(ExprInfo {
                var_type: left_type,
                span: left.span,
            });
        };
        let op_span = self.advance()?.span;

        self.codegen.emit_push_operand(left_type);
        let right = self.parse_atom()?;
        let span = left.span.merge(&right.span);

        if right.var_type() != left_type {
            return Err(CompileError::new(
                ErrorCode::TypeMismatch,
                format!(
                    "Type mismatch: {} cannot work with {}",
                    left_type,
                    right.var_type()
                ),
                span,
            )
            .with_hint("a-h are float, i-n are int, other letters are string"));
        }

        self.codegen.emit_atom(&right);
        self.codegen.emit_pop_operand(left_type);
        let var_type = self.codegen.emit_binary_op(op, left_type, op_span)?;

        Ok(ExprInfo { var_type, span })
    }

    fn parse_atom(&mut self) -> Result<Atom, CompileError> {
        let kind = match self.token.kind {
            TokenKind::Const(VarType::Int) => AtomKind::Int(self.token.text.clone()),
            TokenKind::Const(VarType::Float) => AtomKind::Float(self.token.text.clone()),
            TokenKind::Const(_) => AtomKind::Str(self.token.text.clone()),
            TokenKind::Var(var_type) => AtomKind::Var {
                name: self.token.text.chars().next().unwrap_or_default(),
                var_type,
            },
            _ => {
                return Err(self.error(ErrorCode::ExpectedExpression, "a constant or variable"))
            }
        };

        let token = self.advance()?;
        Ok(Atom::new(kind, token.span))
    }
}
