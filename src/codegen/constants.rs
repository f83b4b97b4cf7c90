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

//! Program layout constants and the constant pool.
//!
//! This module defines the fixed lines surrounding every listing, the data
//! entries used by `printf`, and the storage of variables and literals in
//! the data section.

use super::emit::EmitHelpers;
use super::labels::{LabelManager, FLOAT_PREFIX, STR_PREFIX};
use super::x86_64::RegisterClass;
use super::CodeGenerator;
use crate::ast::VarType;

/// Lines opening every listing.
pub const PROGRAM_HEADER: [&str; 3] = ["global main", "section .text", "main:"];

/// Instructions closing every listing.
pub const PROGRAM_TRAILER: [&str; 4] = [
    "extern exit",
    "sub RSP, 0x28",
    "mov RCX, 0",
    "call exit",
];

/// Directive opening the data section.
pub const DATA_SECTION: &str = "section .data";

/// `printf` format for ints.
pub const INT_FMT: &str = "INT_FMT: db '%d', 0";
/// `printf` format for floats.
pub const FLOAT_FMT: &str = "FLOAT_FMT: db '%.16g', 0";
/// Text printed for a true bool.
pub const TRUE_TEXT: &str = "TRUE: db 'true', 0";
/// Text printed for a false bool.
pub const FALSE_TEXT: &str = "FALSE: db 'false', 0";

/// Name of the storage slot for a variable.
///
/// Variables are case-insensitive, so `A` and `a` share `_a`.
pub fn slot_name(name: char) -> String {
    format!("_{}", name.to_ascii_lowercase())
}

/// Encode string contents as NASM `db` operands.
///
/// Printable runs are quoted; control characters and double quotes become
/// numeric bytes. The terminating zero is always appended.
pub fn encode_db_string(value: &str) -> String {
    let mut parts = Vec::new();
    let mut run = String::new();

    for c in value.chars() {
        if c.is_control() || c == '"' {
            if !run.is_empty() {
                parts.push(format!("\"{}\"", run));
                run.clear();
            }
            let mut buf = [0u8; 4];
            for byte in c.encode_utf8(&mut buf).bytes() {
                parts.push(byte.to_string());
            }
        } else {
            run.push(c);
        }
    }
    if !run.is_empty() {
        parts.push(format!("\"{}\"", run));
    }
    parts.push("0".to_string());

    parts.join(", ")
}

/// Normalize float literal text for a `dq` directive.
///
/// NASM rejects a trailing `.`, so `7.` becomes `7.0`.
pub fn float_literal(text: &str) -> String {
    if text.ends_with('.') {
        format!("{}0", text)
    } else {
        text.to_string()
    }
}

/// Extension trait for the data section.
pub trait ConstantPool {
    /// Declare the storage slot of a variable and return its name.
    fn declare_variable(&mut self, name: char, var_type: VarType) -> String;

    /// Get the label of a string constant, adding it on first use.
    fn string_constant(&mut self, value: &str) -> String;

    /// Get the label of a float constant, adding it on first use.
    fn float_constant(&mut self, text: &str) -> String;
}

impl ConstantPool for CodeGenerator {
    fn declare_variable(&mut self, name: char, var_type: VarType) -> String {
        let slot = slot_name(name);
        let directive = RegisterClass::of(var_type).slot_directive();
        if self.add_data(format!("{}: {}", slot, directive)) {
            log::debug!("declared {} {}", var_type, slot);
        }
        slot
    }

    fn string_constant(&mut self, value: &str) -> String {
        let key = (VarType::Str, value.to_string());
        if let Some(label) = self.constants.get(&key) {
            return label.clone();
        }

        let label = self.make_label(STR_PREFIX);
        self.add_data(format!("{}: db {}", label, encode_db_string(value)));
        log::debug!("string constant {} = {:?}", label, value);
        self.constants.insert(key, label.clone());
        label
    }

    fn float_constant(&mut self, text: &str) -> String {
        let key = (VarType::Float, text.to_string());
        if let Some(label) = self.constants.get(&key) {
            return label.clone();
        }

        let label = self.make_label(FLOAT_PREFIX);
        self.add_data(format!("{}: dq {}", label, float_literal(text)));
        log::debug!("float constant {} = {}", label, text);
        self.constants.insert(key, label.clone());
        label
    }
}
