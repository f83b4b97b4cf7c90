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

//! Type definitions for the SSLC compiler.

use super::BinaryOp;

/// A value type in the SSLC language.
///
/// `Bool` is only ever the result of a comparison; no literal or variable
/// carries it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum VarType {
    /// 32-bit signed integer.
    Int,
    /// 64-bit IEEE-754 double.
    Float,
    /// Pointer to a NUL-terminated string.
    Str,
    /// Comparison result held in `AL`.
    Bool,
}

impl VarType {
    /// Derive a variable's type from its one-letter name.
    ///
    /// `a`-`h` are floats, `i`-`n` are integers and every other letter is a
    /// string. Case is ignored.
    pub fn from_letter(letter: char) -> VarType {
        match letter.to_ascii_lowercase() {
            'a'..='h' => VarType::Float,
            'i'..='n' => VarType::Int,
            _ => VarType::Str,
        }
    }

    /// Check if arithmetic and comparisons are defined for this type.
    pub fn is_numeric(&self) -> bool {
        matches!(self, VarType::Int | VarType::Float)
    }

    /// Get the result type of `operand op operand`, if the operation exists.
    pub fn binary_result_type(op: BinaryOp, operand: VarType) -> Option<VarType> {
        if !operand.is_numeric() {
            return None;
        }
        if op.is_comparison() {
            Some(VarType::Bool)
        } else {
            Some(operand)
        }
    }

    /// Get a human-readable name for this type.
    pub fn name(&self) -> &'static str {
        match self {
            VarType::Int => "int",
            VarType::Float => "float",
            VarType::Str => "string",
            VarType::Bool => "bool",
        }
    }
}

impl std::fmt::Display for VarType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}
