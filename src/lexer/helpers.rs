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

//! Lexer helper methods for character navigation and span creation.
//!
//! This module provides utility methods for the lexer including:
//! - Character stream navigation (peek, advance)
//! - Whitespace and comment skipping
//! - Span creation

use super::Lexer;
use crate::error::Span;

/// Trait for lexer helper operations.
pub trait LexerHelpers<'source> {
    /// Check if we've reached the end of the source.
    fn is_at_end(&self) -> bool;

    /// Peek at the current character without advancing.
    fn peek(&self) -> Option<char>;

    /// Advance to the next character and return it.
    fn advance(&mut self) -> Option<char>;

    /// Consume characters while the predicate holds.
    fn advance_while(&mut self, predicate: impl Fn(char) -> bool);

    /// Skip whitespace and `#` comments.
    fn skip_whitespace_and_comments(&mut self);

    /// Create a span from start position to current position.
    fn span_from(&self, start: usize) -> Span;

    /// The source text between `start` and the current position.
    fn lexeme_from(&self, start: usize) -> &'source str;
}

impl<'source> LexerHelpers<'source> for Lexer<'source> {
    fn is_at_end(&self) -> bool {
        self.position >= self.source.len()
    }

    fn peek(&self) -> Option<char> {
        self.source[self.position..].chars().next()
    }

    fn advance(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.position += c.len_utf8();
        if c == '\n' {
            self.line += 1;
            self.column = 1;
        } else {
            self.column += 1;
        }
        Some(c)
    }

    fn advance_while(&mut self, predicate: impl Fn(char) -> bool) {
        while self.peek().is_some_and(&predicate) {
            self.advance();
        }
    }

    fn skip_whitespace_and_comments(&mut self) {
        loop {
            // Everything up to and including the space character is blank.
            self.advance_while(|c| c <= ' ');
            if self.peek() != Some('#') {
                break;
            }
            self.advance_while(|c| c != '\n' && c != '\r');
        }
    }

    fn span_from(&self, start: usize) -> Span {
        Span::new(start, self.position)
    }

    fn lexeme_from(&self, start: usize) -> &'source str {
        let source = self.source;
        &source[start..self.position]
    }
}
