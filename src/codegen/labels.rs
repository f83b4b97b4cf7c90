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

//! Label management for code generation.
//!
//! Jump targets and constant pool entries share one counter, so every
//! generated name is unique within a compilation. NASM resolves the
//! references itself.

use super::CodeGenerator;

/// Label prefix for the false branch of an IF.
pub const ELSE_PREFIX: &str = "else";
/// Label prefix for the end of an IF with an ELSE branch.
pub const ENDIF_PREFIX: &str = "endif";
/// Label prefix for the loop test of a FOR.
pub const FOR_PREFIX: &str = "for";
/// Label prefix for the exit of a FOR.
pub const ENDFOR_PREFIX: &str = "endfor";
/// Label prefix for string constants.
pub const STR_PREFIX: &str = "STR";
/// Label prefix for float constants.
pub const FLOAT_PREFIX: &str = "FLOAT";

/// Extension trait for label creation.
pub trait LabelManager {
    /// Generate a unique label with the given prefix.
    fn make_label(&mut self, prefix: &str) -> String;
}

impl LabelManager for CodeGenerator {
    fn make_label(&mut self, prefix: &str) -> String {
        let label = format!("{}_{}", prefix, self.label_counter);
        self.label_counter += 1;
        log::debug!("allocated label {}", label);
        label
    }
}
