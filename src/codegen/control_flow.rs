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

//! Control flow code generation.
//!
//! This module handles the jumps of IF and FOR statements. The labels
//! themselves are allocated by the parser, since their numbering follows
//! the order in which the statements are recognized.

use super::constants::slot_name;
use super::emit::EmitHelpers;
use super::CodeGenerator;

/// Extension trait for control flow code generation.
pub trait ControlFlowEmitter {
    /// Jump to `label` unless the bool in `AL` is true.
    fn emit_branch_if_false(&mut self, label: &str);

    /// Unconditional jump.
    fn emit_jmp(&mut self, label: &str);

    /// Leave the loop once the counter reaches the bound in `EAX`.
    fn emit_loop_test(&mut self, counter: char, exit_label: &str);

    /// Increment the counter and jump back to the loop test.
    fn emit_loop_increment(&mut self, counter: char, loop_label: &str);
}

impl ControlFlowEmitter for CodeGenerator {
    fn emit_branch_if_false(&mut self, label: &str) {
        self.emit("cmp AL, 0x01");
        self.emit(format!("jne {}", label));
    }

    fn emit_jmp(&mut self, label: &str) {
        self.emit(format!("jmp {}", label));
    }

    fn emit_loop_test(&mut self, counter: char, exit_label: &str) {
        self.emit(format!("cmp [{}], EAX", slot_name(counter)));
        self.emit(format!("jge {}", exit_label));
    }

    fn emit_loop_increment(&mut self, counter: char, loop_label: &str) {
        self.emit(format!("inc DWORD [{}]", slot_name(counter)));
        self.emit_jmp(loop_label);
    }
}
