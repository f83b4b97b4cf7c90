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

//! Expression operand nodes.

use super::VarType;
use crate::error::Span;

/// A single operand of an expression: a literal or a variable.
#[derive(Debug, Clone, PartialEq)]
pub enum AtomKind {
    /// Integer literal, kept as its source text.
    Int(String),
    /// Float literal, kept as its source text.
    Float(String),
    /// String literal contents without the quotes.
    Str(String),
    /// A one-letter variable, normalized to lowercase.
    Var { name: char, var_type: VarType },
}

/// An operand with its location in the source.
#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
    pub kind: AtomKind,
    pub span: Span,
}

impl Atom {
    /// Create a new atom.
    pub fn new(kind: AtomKind, span: Span) -> Self {
        Self { kind, span }
    }

    /// The type of the value this atom loads.
    pub fn var_type(&self) -> VarType {
        match &self.kind {
            AtomKind::Int(_) => VarType::Int,
            AtomKind::Float(_) => VarType::Float,
            AtomKind::Str(_) => VarType::Str,
            AtomKind::Var { var_type, .. } => *var_type,
        }
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Equal,
    NotEqual,
    Less,
    Greater,
    LessEqual,
    GreaterEqual,
}

impl BinaryOp {
    /// Check if this is a comparison operator.
    pub fn is_comparison(&self) -> bool {
        matches!(
            self,
            BinaryOp::Equal
                | BinaryOp::NotEqual
                | BinaryOp::Less
                | BinaryOp::Greater
                | BinaryOp::LessEqual
                | BinaryOp::GreaterEqual
        )
    }
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
            BinaryOp::Equal => "==",
            BinaryOp::NotEqual => "!=",
            BinaryOp::Less => "<",
            BinaryOp::Greater => ">",
            BinaryOp::LessEqual => "<=",
            BinaryOp::GreaterEqual => ">=",
        };
        write!(f, "{}", s)
    }
}
