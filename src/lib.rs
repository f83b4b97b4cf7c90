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

//! SSLC Compiler Library
//!
//! This library compiles programs in a tiny scripting language (one-letter
//! variables, `PRINT`, `IF` and `FOR`) into NASM x86-64 assembly for Windows.
//!
//! # Modules
//!
//! - [`error`] - Error types and error reporting
//! - [`lexer`] - Tokenization of source code
//! - [`ast`] - Value types and expression operands
//! - [`parser`] - Recursive-descent parsing driving code generation
//! - [`codegen`] - x86-64 assembly generation
//! - [`output`] - Listing rendering and writing
//! - [`runner`] - File watching and assembler integration
//!
//! # Example
//!
//! ```no_run
//! use std::path::Path;
//!
//! fn build(source: &str, listing: &Path) -> Result<(), Box<dyn std::error::Error>> {
//!     let lines = sslc::compile(source)?;
//!     sslc::output::write_listing(&lines, Some(listing))?;
//!     Ok(())
//! }
//! ```

pub mod ast;
pub mod codegen;
pub mod error;
pub mod lexer;
pub mod output;
pub mod parser;
pub mod runner;

// Re-export commonly used types
pub use ast::VarType;
pub use error::{
    format_error, render_report, CompileError, ErrorCategory, ErrorCode, Result, SourceLocation,
    Span,
};
pub use lexer::{tokenize, Token, TokenKind};

/// The version of the SSLC compiler.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// The name of the compiler.
pub const NAME: &str = "SSLC";

/// Compile source code to an assembly listing.
///
/// Lexing, parsing, type checking and code generation happen in a single
/// pass; the first error aborts compilation.
///
/// # Example
///
/// ```
/// let lines = sslc::compile("i = 42\nPRINTLN i").unwrap();
/// assert_eq!(lines[0], "global main");
/// assert!(lines.contains(&"  mov [_i], EAX".to_string()));
/// ```
pub fn compile(source: &str) -> Result<Vec<String>> {
    parser::parse(source)
}

/// Compile source code to the text of an assembly listing.
///
/// Lines are joined with `\n` and the text ends with a newline.
pub fn compile_to_string(source: &str) -> Result<String> {
    Ok(output::render_listing(&compile(source)?))
}
