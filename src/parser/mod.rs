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

//! Parser module for the SSLC compiler.
//!
//! A recursive-descent parser with one token of lookahead. There is no
//! syntax tree: every rule type-checks its operands and emits code into a
//! [`CodeGenerator`] as soon as it is recognized.
//!
//! # Module Structure
//!
//! - `control_flow` - IF and FOR statements (ControlFlowParser trait)
//! - `expressions` - Flat expressions (ExpressionParser trait)
//! - `helpers` - Lookahead and expectation (ParserHelpers trait)
//! - `statements` - Statements and blocks (StatementParser trait)

pub mod control_flow;
pub mod expressions;
pub mod helpers;
pub mod statements;

use helpers::ParserHelpers;
use statements::StatementParser;

use crate::codegen::CodeGenerator;
use crate::error::CompileError;
use crate::lexer::{Lexer, Token};

/// The parser state.
pub struct Parser<'source> {
    /// The token source.
    pub(crate) lexer: Lexer<'source>,
    /// The current lookahead token.
    pub(crate) token: Token,
    /// Receives the generated code.
    pub(crate) codegen: CodeGenerator,
}

impl<'source> Parser<'source> {
    /// Create a new parser for the given source code.
    ///
    /// No token is read until parsing starts.
    pub fn new(source: &'source str) -> Self {
        Self {
            lexer: Lexer::new(source),
            token: Token::eof(0),
            codegen: CodeGenerator::new(),
        }
    }

    // ========================================
    // Program Parsing
    // ========================================

    /// Parse the complete program and return the generated code.
    pub fn parse_program(mut self) -> Result<CodeGenerator, CompileError> {
        self.advance()?;

        while !self.token.is_eof() {
            self.parse_statement()?;
        }

        log::debug!(
            "parsed program: {} instructions, {} labels",
            self.codegen.instructions().len(),
            self.codegen.label_count()
        );
        Ok(self.codegen)
    }

    /// Parse the complete program and return the assembly listing.
    pub fn parse(self) -> Result<Vec<String>, CompileError> {
        Ok(self.parse_program()?.finish())
    }
}

/// Parse source code into an assembly listing.
pub fn parse(source: &str) -> Result<Vec<String>, CompileError> {
    Parser::new(source).parse()
}
