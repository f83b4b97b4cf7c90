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

//! x86-64 instruction templates for the SSLC compiler.
//!
//! Register convention:
//! - The current value lives in `EAX` (int, bool in `AL`), `RAX` (string
//!   pointer) or `XMM0` (float).
//! - The left operand of a binary operation is popped into `EBX`/`RBX` or
//!   `XMM1`.
//! - C library calls follow the Microsoft x64 convention: arguments in `RCX`
//!   and `RDX`, with 0x20 bytes of shadow space.
//! - `main` is entered with `RSP` 8 bytes off a 16-byte boundary, and
//!   expression pushes are balanced before any call. Each call therefore
//!   reserves 0x28 bytes so `RSP` is aligned at the `call`.

use crate::ast::{BinaryOp, VarType};

/// The register file a value of a given type travels through.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegisterClass {
    /// 32-bit general purpose register (ints, and bools in the low byte).
    Dword,
    /// 64-bit general purpose register (string pointers).
    Qword,
    /// SSE register holding a double.
    Xmm,
}

impl RegisterClass {
    /// Get the register class for a value type.
    pub fn of(var_type: VarType) -> Self {
        match var_type {
            VarType::Int | VarType::Bool => RegisterClass::Dword,
            VarType::Str => RegisterClass::Qword,
            VarType::Float => RegisterClass::Xmm,
        }
    }

    /// The register holding the current value.
    pub fn accumulator(&self) -> &'static str {
        match self {
            RegisterClass::Dword => "EAX",
            RegisterClass::Qword => "RAX",
            RegisterClass::Xmm => "XMM0",
        }
    }

    /// The move mnemonic between this register class and memory.
    pub fn mov(&self) -> &'static str {
        match self {
            RegisterClass::Dword | RegisterClass::Qword => "mov",
            RegisterClass::Xmm => "movq",
        }
    }

    /// The data directive declaring a zeroed storage slot.
    pub fn slot_directive(&self) -> &'static str {
        match self {
            RegisterClass::Dword => "dd 0",
            RegisterClass::Qword => "dq 0",
            RegisterClass::Xmm => "dq 0.0",
        }
    }

    /// Instructions saving the accumulator on the stack.
    pub fn push(&self) -> &'static [&'static str] {
        match self {
            RegisterClass::Dword | RegisterClass::Qword => &["push RAX"],
            RegisterClass::Xmm => &["sub RSP, 0x08", "movq [RSP], XMM0"],
        }
    }

    /// Instructions restoring the saved value into the operand register.
    pub fn pop(&self) -> &'static [&'static str] {
        match self {
            RegisterClass::Dword | RegisterClass::Qword => &["pop RBX"],
            RegisterClass::Xmm => &["movq XMM1, [RSP]", "add RSP, 0x08"],
        }
    }
}

/// Instructions computing `left op right` with the left operand in
/// `EBX`/`XMM1` and the right one in `EAX`/`XMM0`. The result lands in the
/// accumulator.
pub fn arithmetic(op: BinaryOp, operand: VarType) -> Option<&'static [&'static str]> {
    let code: &'static [&'static str] = match (operand, op) {
        (VarType::Int, BinaryOp::Add) => &["add EAX, EBX"],
        (VarType::Int, BinaryOp::Mul) => &["imul EAX, EBX"],
        (VarType::Int, BinaryOp::Sub) => &["xchg EAX, EBX", "sub EAX, EBX"],
        (VarType::Int, BinaryOp::Div) => &["xchg EAX, EBX", "cdq", "idiv EBX"],

        (VarType::Float, BinaryOp::Add) => &["addsd XMM0, XMM1"],
        (VarType::Float, BinaryOp::Mul) => &["mulsd XMM0, XMM1"],
        (VarType::Float, BinaryOp::Sub) => &["subsd XMM1, XMM0", "movq XMM0, XMM1"],
        (VarType::Float, BinaryOp::Div) => &["divsd XMM1, XMM0", "movq XMM0, XMM1"],

        _ => return None,
    };
    Some(code)
}

/// Instructions comparing `left op right`, leaving 1 or 0 in `AL`.
pub fn comparison(op: BinaryOp, operand: VarType) -> Option<[&'static str; 2]> {
    let compare = match operand {
        VarType::Int => "cmp EBX, EAX",
        VarType::Float => "comisd XMM1, XMM0",
        _ => return None,
    };

    // comisd sets the unsigned flags.
    let set = match (operand, op) {
        (_, BinaryOp::Equal) => "setz AL",
        (_, BinaryOp::NotEqual) => "setnz AL",
        (VarType::Int, BinaryOp::Less) => "setl AL",
        (VarType::Int, BinaryOp::Greater) => "setg AL",
        (VarType::Int, BinaryOp::LessEqual) => "setle AL",
        (VarType::Int, BinaryOp::GreaterEqual) => "setge AL",
        (_, BinaryOp::Less) => "setb AL",
        (_, BinaryOp::Greater) => "seta AL",
        (_, BinaryOp::LessEqual) => "setbe AL",
        (_, BinaryOp::GreaterEqual) => "setae AL",
        _ => return None,
    };

    Some([compare, set])
}
