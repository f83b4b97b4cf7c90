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

//! Code generation module for the SSLC compiler.
//!
//! This module generates NASM x86-64 assembly text while the parser
//! recognizes the program. It handles:
//! - Instruction and label emission
//! - The data section (variable slots, constant pool, print formats)
//! - Expression evaluation
//! - Assignments and printing
//! - Control flow

mod constants;
mod control_flow;
mod emit;
mod expressions;
mod labels;
mod statements;
pub mod x86_64;

pub use constants::{
    encode_db_string, float_literal, slot_name, ConstantPool, DATA_SECTION, PROGRAM_HEADER,
    PROGRAM_TRAILER,
};
pub use control_flow::ControlFlowEmitter;
pub use emit::{EmitHelpers, INDENT};
pub use expressions::ExpressionEmitter;
pub use labels::{
    LabelManager, ELSE_PREFIX, ENDFOR_PREFIX, ENDIF_PREFIX, FLOAT_PREFIX, FOR_PREFIX, STR_PREFIX,
};
pub use statements::StatementEmitter;

use crate::ast::VarType;
use std::collections::{BTreeSet, HashMap};

/// The compilation context collecting the generated program.
///
/// One generator is created per compilation. Instructions are appended in
/// order; data entries are deduplicated and emitted sorted.
#[derive(Debug, Default)]
pub struct CodeGenerator {
    /// The generated instruction and label lines.
    code: Vec<String>,
    /// Unique data section entries.
    data: BTreeSet<String>,
    /// Constant pool: literal text to label.
    constants: HashMap<(VarType, String), String>,
    /// Label counter for generating unique labels.
    label_counter: u32,
}

impl CodeGenerator {
    /// Create a new code generator.
    pub fn new() -> Self {
        Self::default()
    }

    /// The instruction lines emitted so far.
    pub fn instructions(&self) -> &[String] {
        &self.code
    }

    /// The data section entries collected so far, in output order.
    pub fn data_entries(&self) -> impl Iterator<Item = &str> {
        self.data.iter().map(String::as_str)
    }

    /// Number of labels allocated so far.
    pub fn label_count(&self) -> u32 {
        self.label_counter
    }

    /// Assemble the complete listing.
    ///
    /// The listing is the header, the instructions, the exit trailer and,
    /// if any entries exist, the data section.
    pub fn finish(self) -> Vec<String> {
        let mut lines = Vec::with_capacity(
            PROGRAM_HEADER.len() + self.code.len() + PROGRAM_TRAILER.len() + self.data.len() + 1,
        );

        lines.extend(PROGRAM_HEADER.iter().map(|line| line.to_string()));
        lines.extend(self.code);
        lines.extend(
            PROGRAM_TRAILER
                .iter()
                .map(|line| format!("{}{}", INDENT, line)),
        );

        if !self.data.is_empty() {
            lines.push(DATA_SECTION.to_string());
            lines.extend(self.data);
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_program() {
        let lines = CodeGenerator::new().finish();
        assert_eq!(
            lines,
            vec![
                "global main",
                "section .text",
                "main:",
                "  extern exit",
                "  sub RSP, 0x28",
                "  mov RCX, 0",
                "  call exit",
            ]
        );
    }

    #[test]
    fn test_data_section_follows_trailer() {
        let mut gen = CodeGenerator::new();
        gen.emit("mov EAX, 1");
        gen.emit_store('i', VarType::Int);
        let lines = gen.finish();
        assert_eq!(lines[3], "  mov EAX, 1");
        assert_eq!(lines[4], "  mov [_i], EAX");
        assert_eq!(lines[8], "  call exit");
        assert_eq!(lines[9], "section .data");
        assert_eq!(lines[10], "  _i: dd 0");
        assert_eq!(lines.len(), 11);
    }

    #[test]
    fn test_data_section_is_sorted() {
        let mut gen = CodeGenerator::new();
        gen.declare_variable('z', VarType::Str);
        gen.string_constant("x");
        gen.emit_print(VarType::Int, false);
        let data: Vec<_> = gen.data_entries().collect();
        let mut sorted = data.clone();
        sorted.sort();
        assert_eq!(data, sorted);
    }

    #[test]
    fn test_label_count() {
        let mut gen = CodeGenerator::new();
        gen.make_label(FOR_PREFIX);
        gen.make_label(ENDFOR_PREFIX);
        assert_eq!(gen.label_count(), 2);
    }
}
