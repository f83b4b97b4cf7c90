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

//! Expression code generation.
//!
//! This module handles:
//! - Loading constants and variables into the accumulator
//! - Saving and restoring the left operand of a binary operation
//! - Arithmetic and comparison operators

use super::constants::ConstantPool;
use super::emit::EmitHelpers;
use super::x86_64::{self, RegisterClass};
use super::CodeGenerator;
use crate::ast::{Atom, AtomKind, BinaryOp, VarType};
use crate::error::{CompileError, ErrorCode, Span};

/// Extension trait for expression code generation.
pub trait ExpressionEmitter {
    /// Load an atom into the accumulator of its type.
    fn emit_atom(&mut self, atom: &Atom);

    /// Save the accumulator before the right operand is evaluated.
    fn emit_push_operand(&mut self, var_type: VarType);

    /// Restore the saved left operand into the operand register.
    fn emit_pop_operand(&mut self, var_type: VarType);

    /// Apply a binary operator to the popped left operand and the
    /// accumulator, returning the result type.
    fn emit_binary_op(
        &mut self,
        op: BinaryOp,
        operand: VarType,
        span: Span,
    ) -> Result<VarType, CompileError>;
}

impl ExpressionEmitter for CodeGenerator {
    fn emit_atom(&mut self, atom: &Atom) {
        match &atom.kind {
            AtomKind::Int(text) => self.emit(format!("mov EAX, {}", text)),
            AtomKind::Float(text) => {
                let label = self.float_constant(text);
                self.emit(format!("movq XMM0, [{}]", label));
            }
            AtomKind::Str(value) => {
                let label = self.string_constant(value);
                self.emit(format!("mov RAX, {}", label));
            }
            AtomKind::Var { name, var_type } => {
                let slot = self.declare_variable(*name, *var_type);
                let class = RegisterClass::of(*var_type);
                self.emit(format!(
                    "{} {}, [{}]",
                    class.mov(),
                    class.accumulator(),
                    slot
                ));
            }
        }
    }

    fn emit_push_operand(&mut self, var_type: VarType) {
        self.emit_all(RegisterClass::of(var_type).push());
    }

    fn emit_pop_operand(&mut self, var_type: VarType) {
        self.emit_all(RegisterClass::of(var_type).pop());
    }

    fn emit_binary_op(
        &mut self,
        op: BinaryOp,
        operand: VarType,
        span: Span,
    ) -> Result<VarType, CompileError> {
        let unsupported = || {
            CompileError::new(
                ErrorCode::UnsupportedOperation,
                format!("Operator '{}' is not supported for {} operands", op, operand),
                span,
            )
        };

        let result = VarType::binary_result_type(op, operand).ok_or_else(unsupported)?;

        if op.is_comparison() {
            let code = x86_64::comparison(op, operand).ok_or_else(unsupported)?;
            self.emit_all(&code);
        } else {
            let code = x86_64::arithmetic(op, operand).ok_or_else(unsupported)?;
            self.emit_all(code);
        }

        Ok(result)
    }
}
