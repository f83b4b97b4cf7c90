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

//! Emit helper methods for code generation.
//!
//! This module provides the low-level line emission utilities:
//! - Indented instruction lines
//! - Label definitions
//! - Data section entries

use super::CodeGenerator;

/// Indentation for instruction and data lines.
pub const INDENT: &str = "  ";

/// Extension trait for low-level line emission.
///
/// Implemented for `CodeGenerator`, so the statement and expression
/// emitters never touch the instruction buffer directly.
pub trait EmitHelpers {
    /// Emit an indented instruction line.
    fn emit(&mut self, instruction: impl Into<String>);

    /// Emit a sequence of instruction lines.
    fn emit_all(&mut self, instructions: &[&str]);

    /// Emit an unindented label definition.
    fn emit_label(&mut self, label: &str);

    /// Add an entry to the data section. Duplicates are ignored.
    fn add_data(&mut self, entry: impl Into<String>) -> bool;
}

impl EmitHelpers for CodeGenerator {
    fn emit(&mut self, instruction: impl Into<String>) {
        let line = format!("{}{}", INDENT, instruction.into());
        log::trace!("{}", line);
        self.code.push(line);
    }

    fn emit_all(&mut self, instructions: &[&str]) {
        for instruction in instructions {
            self.emit(*instruction);
        }
    }

    fn emit_label(&mut self, label: &str) {
        log::trace!("{}:", label);
        self.code.push(format!("{}:", label));
    }

    fn add_data(&mut self, entry: impl Into<String>) -> bool {
        self.data.insert(format!("{}{}", INDENT, entry.into()))
    }
}
