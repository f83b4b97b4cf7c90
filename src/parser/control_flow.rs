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

//! Control flow statement parsing for the parser.
//!
//! This module provides control flow statement parsing:
//! - IF/THEN/ELSE/ENDIF
//! - FOR/TO/ENDFOR counting loops

use super::expressions::ExpressionParser;
use super::helpers::ParserHelpers;
use super::statements::StatementParser;
use super::Parser;
use crate::ast::VarType;
use crate::codegen::{
    ControlFlowEmitter, EmitHelpers, LabelManager, StatementEmitter, ELSE_PREFIX, ENDFOR_PREFIX,
    ENDIF_PREFIX, FOR_PREFIX,
};
use crate::error::{CompileError, ErrorCode};
use crate::lexer::{Keyword, Symbol};

/// Extension trait for control flow parsing.
pub trait ControlFlowParser {
    /// Parse an if statement.
    fn parse_if_statement(&mut self) -> Result<(), CompileError>;

    /// Parse a for statement.
    fn parse_for_statement(&mut self) -> Result<(), CompileError>;
}

impl<'source> ControlFlowParser for Parser<'source> {
    fn parse_if_statement(&mut self) -> Result<(), CompileError> {
        self.expect_keyword(Keyword::If)?;

        let condition = self.parse_expression()?;
        if condition.var_type != VarType::Bool {
            return Err(CompileError::new(
                ErrorCode::ConditionNotBool,
                format!("IF condition must be bool, found {}", condition.var_type),
                condition.span,
            )
            .with_hint("Use a comparison such as 'i == 0'"));
        }

        let else_label = self.codegen.make_label(ELSE_PREFIX);
        self.codegen.emit_branch_if_false(&else_label);

        self.expect_keyword(Keyword::Then)?;

        let closer = self.parse_block(&[Keyword::Else, Keyword::EndIf])?;
        if closer == Keyword::Else {
            self.advance()?;
            let endif_label = self.codegen.make_label(ENDIF_PREFIX);
            self.codegen.emit_jmp(&endif_label);
            self.codegen.emit_label(&else_label);

            self.parse_block(&[Keyword::EndIf])?;
            self.advance()?;
            self.codegen.emit_label(&endif_label);
        } else {
            self.advance()?;
            self.codegen.emit_label(&else_label);
        }

        Ok(())
    }

    fn parse_for_statement(&mut self) -> Result<(), CompileError> {
        self.expect_keyword(Keyword::For)?;

        let counter = self.expect_variable()?;
        if counter.var_type != VarType::Int {
            return Err(CompileError::new(
                ErrorCode::ForVariableNotInt,
                format!(
                    "FOR variable must be int, '{}' is {}",
                    counter.name, counter.var_type
                ),
                counter.span,
            )
            .with_hint("Use one of the letters i-n"));
        }

        self.expect_symbol(Symbol::Eq)?;
        let start = self.parse_expression()?;
        if start.var_type != VarType::Int {
            return Err(CompileError::new(
                ErrorCode::ForBoundNotInt,
                format!("FOR start value must be int, found {}", start.var_type),
                start.span,
            ));
        }
        self.codegen.emit_store(counter.name, VarType::Int);

        self.expect_keyword(Keyword::To)?;

        let loop_label = self.codegen.make_label(FOR_PREFIX);
        let exit_label = self.codegen.make_label(ENDFOR_PREFIX);
        self.codegen.emit_label(&loop_label);

        let bound = self.parse_expression()?;
        if bound.var_type != VarType::Int {
            return Err(CompileError::new(
                ErrorCode::ForBoundNotInt,
                format!("FOR end value must be int, found {}", bound.var_type),
                bound.span,
            ));
        }
        self.codegen.emit_loop_test(counter.name, &exit_label);

        self.parse_block(&[Keyword::EndFor])?;
        self.advance()?;

        self.codegen.emit_loop_increment(counter.name, &loop_label);
        self.codegen.emit_label(&exit_label);

        Ok(())
    }
}
