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

//! Assignment and print code generation.

use super::constants::{ConstantPool, FALSE_TEXT, FLOAT_FMT, INT_FMT, TRUE_TEXT};
use super::emit::EmitHelpers;
use super::x86_64::RegisterClass;
use super::CodeGenerator;
use crate::ast::VarType;

/// Extension trait for statement code generation.
pub trait StatementEmitter {
    /// Store the accumulator into a variable.
    fn emit_store(&mut self, name: char, var_type: VarType);

    /// Print the accumulator with `printf`, optionally followed by a newline.
    fn emit_print(&mut self, var_type: VarType, newline: bool);
}

impl StatementEmitter for CodeGenerator {
    fn emit_store(&mut self, name: char, var_type: VarType) {
        let slot = self.declare_variable(name, var_type);
        let class = RegisterClass::of(var_type);
        self.emit(format!(
            "{} [{}], {}",
            class.mov(),
            slot,
            class.accumulator()
        ));
    }

    fn emit_print(&mut self, var_type: VarType, newline: bool) {
        match var_type {
            VarType::Int => {
                self.add_data(INT_FMT);
                self.emit_all(&["mov RCX, INT_FMT", "mov EDX, EAX"]);
            }
            VarType::Float => {
                self.add_data(FLOAT_FMT);
                self.emit_all(&["mov RCX, FLOAT_FMT", "movq RDX, XMM0"]);
            }
            // The string itself is the format.
            VarType::Str => self.emit("mov RCX, RAX"),
            VarType::Bool => {
                self.add_data(TRUE_TEXT);
                self.add_data(FALSE_TEXT);
                self.emit_all(&[
                    "cmp AL, 1",
                    "mov RCX, FALSE",
                    "mov RDX, TRUE",
                    "cmovz RCX, RDX",
                ]);
            }
        }

        // Shadow space plus realignment, see `x86_64`.
        self.emit_all(&["sub RSP, 0x28", "extern printf", "call printf"]);
        if newline {
            self.emit_all(&["extern putchar", "mov RCX, 10", "call putchar"]);
        }
        self.emit("add RSP, 0x28");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_int() {
        let mut gen = CodeGenerator::new();
        gen.emit_store('i', VarType::Int);
        assert_eq!(gen.instructions(), &["  mov [_i], EAX"]);
        assert!(gen.data_entries().any(|e| e == "  _i: dd 0"));
    }

    #[test]
    fn test_store_float_and_string() {
        let mut gen = CodeGenerator::new();
        gen.emit_store('a', VarType::Float);
        gen.emit_store('S', VarType::Str);
        assert_eq!(gen.instructions(), &["  movq [_a], XMM0", "  mov [_s], RAX"]);
    }

    #[test]
    fn test_print_int() {
        let mut gen = CodeGenerator::new();
        gen.emit_print(VarType::Int, false);
        assert_eq!(
            gen.instructions(),
            &[
                "  mov RCX, INT_FMT",
                "  mov EDX, EAX",
                "  sub RSP, 0x28",
                "  extern printf",
                "  call printf",
                "  add RSP, 0x28",
            ]
        );
        assert!(gen.data_entries().any(|e| e == "  INT_FMT: db '%d', 0"));
    }

    #[test]
    fn test_println_float() {
        let mut gen = CodeGenerator::new();
        gen.emit_print(VarType::Float, true);
        assert_eq!(
            gen.instructions(),
            &[
                "  mov RCX, FLOAT_FMT",
                "  movq RDX, XMM0",
                "  sub RSP, 0x28",
                "  extern printf",
                "  call printf",
                "  extern putchar",
                "  mov RCX, 10",
                "  call putchar",
                "  add RSP, 0x28",
            ]
        );
    }

    #[test]
    fn test_print_string_adds_no_format() {
        let mut gen = CodeGenerator::new();
        gen.emit_print(VarType::Str, false);
        assert_eq!(gen.instructions()[0], "  mov RCX, RAX");
        assert_eq!(gen.data_entries().count(), 0);
    }

    #[test]
    fn test_print_bool_selects_text() {
        let mut gen = CodeGenerator::new();
        gen.emit_print(VarType::Bool, false);
        assert_eq!(gen.instructions()[3], "  cmovz RCX, RDX");
        let data: Vec<_> = gen.data_entries().collect();
        assert_eq!(data, vec!["  FALSE: db 'false', 0", "  TRUE: db 'true', 0"]);
    }
}
