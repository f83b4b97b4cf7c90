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

//! Token definitions for the SSLC language.

use crate::ast::{BinaryOp, VarType};
use crate::error::Span;

/// Reserved words. Matching is case-insensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Keyword {
    /// `FOR` - start of a counted loop.
    For,
    /// `TO` - separates the loop start from its bound.
    To,
    /// `STEP` - reserved; loops always count up by one.
    Step,
    /// `ENDFOR` - end of a loop body.
    EndFor,
    /// `IF` - conditional statement.
    If,
    /// `THEN` - start of the true branch.
    Then,
    /// `ELSE` - start of the false branch.
    Else,
    /// `ENDIF` - end of a conditional.
    EndIf,
    /// `PRINT` - print without newline.
    Print,
    /// `PRINTLN` - print followed by a newline.
    Println,
}

impl Keyword {
    /// Every keyword, in declaration order.
    pub const ALL: [Keyword; 10] = [
        Keyword::For,
        Keyword::To,
        Keyword::Step,
        Keyword::EndFor,
        Keyword::If,
        Keyword::Then,
        Keyword::Else,
        Keyword::EndIf,
        Keyword::Print,
        Keyword::Println,
    ];

    /// The canonical upper-case spelling.
    pub fn as_str(&self) -> &'static str {
        match self {
            Keyword::For => "FOR",
            Keyword::To => "TO",
            Keyword::Step => "STEP",
            Keyword::EndFor => "ENDFOR",
            Keyword::If => "IF",
            Keyword::Then => "THEN",
            Keyword::Else => "ELSE",
            Keyword::EndIf => "ENDIF",
            Keyword::Print => "PRINT",
            Keyword::Println => "PRINTLN",
        }
    }

    /// Look up a word, ignoring case.
    pub fn from_word(word: &str) -> Option<Keyword> {
        let upper = word.to_ascii_uppercase();
        Keyword::ALL.into_iter().find(|kw| kw.as_str() == upper)
    }
}

impl std::fmt::Display for Keyword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Operator and punctuation symbols.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Symbol {
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Mult,
    /// `/`
    Div,
    /// `==`
    EqEq,
    /// `=` - assignment only.
    Eq,
    /// `!=`
    Neq,
    /// `<=`
    Leq,
    /// `<`
    Lt,
    /// `>=`
    Geq,
    /// `>`
    Gt,
}

impl Symbol {
    /// Every symbol, two-character lexemes first.
    pub const ALL: [Symbol; 11] = [
        Symbol::EqEq,
        Symbol::Neq,
        Symbol::Leq,
        Symbol::Geq,
        Symbol::Plus,
        Symbol::Minus,
        Symbol::Mult,
        Symbol::Div,
        Symbol::Eq,
        Symbol::Lt,
        Symbol::Gt,
    ];

    /// The source lexeme of this symbol.
    pub fn as_str(&self) -> &'static str {
        match self {
            Symbol::Plus => "+",
            Symbol::Minus => "-",
            Symbol::Mult => "*",
            Symbol::Div => "/",
            Symbol::EqEq => "==",
            Symbol::Eq => "=",
            Symbol::Neq => "!=",
            Symbol::Leq => "<=",
            Symbol::Lt => "<",
            Symbol::Geq => ">=",
            Symbol::Gt => ">",
        }
    }

    /// Look up an exact lexeme.
    pub fn from_lexeme(lexeme: &str) -> Option<Symbol> {
        Symbol::ALL.into_iter().find(|sym| sym.as_str() == lexeme)
    }

    /// The binary operator this symbol denotes inside an expression.
    ///
    /// `=` is assignment and has no operator meaning.
    pub fn binary_op(&self) -> Option<BinaryOp> {
        match self {
            Symbol::Plus => Some(BinaryOp::Add),
            Symbol::Minus => Some(BinaryOp::Sub),
            Symbol::Mult => Some(BinaryOp::Mul),
            Symbol::Div => Some(BinaryOp::Div),
            Symbol::EqEq => Some(BinaryOp::Equal),
            Symbol::Neq => Some(BinaryOp::NotEqual),
            Symbol::Leq => Some(BinaryOp::LessEqual),
            Symbol::Lt => Some(BinaryOp::Less),
            Symbol::Geq => Some(BinaryOp::GreaterEqual),
            Symbol::Gt => Some(BinaryOp::Greater),
            Symbol::Eq => None,
        }
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// The classification of a token.
///
/// Only constants and variables carry a type, only keywords carry a keyword
/// and only symbols carry a symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    /// End of input. Repeats forever once reached.
    EndOfFile,
    /// A literal. The type is `Int`, `Float` or `Str`.
    Const(VarType),
    /// A one-letter variable. The type follows from the letter.
    Var(VarType),
    /// A reserved word.
    Keyword(Keyword),
    /// An operator or `=`.
    Symbol(Symbol),
}

/// A token in the SSLC language.
#[derive(Debug, Clone, PartialEq)]
pub struct Token {
    /// What the token is.
    pub kind: TokenKind,
    /// The lexeme. String constants hold their contents without quotes.
    pub text: String,
    /// Where the lexeme sits in the source.
    pub span: Span,
}

impl Token {
    /// Create a new token.
    pub fn new(kind: TokenKind, text: impl Into<String>, span: Span) -> Self {
        Self {
            kind,
            text: text.into(),
            span,
        }
    }

    /// Create an end-of-file token at the given offset.
    pub fn eof(offset: usize) -> Self {
        Self::new(TokenKind::EndOfFile, "", Span::new(offset, offset))
    }

    /// Check if this is the end of input.
    pub fn is_eof(&self) -> bool {
        self.kind == TokenKind::EndOfFile
    }

    /// Check if this token is the given keyword.
    pub fn is_keyword(&self, keyword: Keyword) -> bool {
        self.kind == TokenKind::Keyword(keyword)
    }

    /// Check if this token is the given symbol.
    pub fn is_symbol(&self, symbol: Symbol) -> bool {
        self.kind == TokenKind::Symbol(symbol)
    }

    /// The type of a constant or variable token.
    pub fn var_type(&self) -> Option<VarType> {
        match self.kind {
            TokenKind::Const(t) | TokenKind::Var(t) => Some(t),
            _ => None,
        }
    }

    /// The keyword of a keyword token.
    pub fn keyword(&self) -> Option<Keyword> {
        match self.kind {
            TokenKind::Keyword(kw) => Some(kw),
            _ => None,
        }
    }

    /// The symbol of a symbol token.
    pub fn symbol(&self) -> Option<Symbol> {
        match self.kind {
            TokenKind::Symbol(sym) => Some(sym),
            _ => None,
        }
    }

    /// A short description for error messages.
    pub fn describe(&self) -> String {
        match self.kind {
            TokenKind::EndOfFile => "end of file".to_string(),
            TokenKind::Const(VarType::Str) => format!("string constant \"{}\"", self.text),
            TokenKind::Const(t) => format!("{} constant {}", t, self.text),
            TokenKind::Var(_) => format!("variable '{}'", self.text),
            TokenKind::Keyword(kw) => format!("keyword {}", kw),
            TokenKind::Symbol(sym) => format!("'{}'", sym),
        }
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.kind {
            TokenKind::EndOfFile => write!(f, "EndOfFile"),
            TokenKind::Const(VarType::Str) => write!(f, "Const(Str) \"{}\"", self.text),
            TokenKind::Const(t) => write!(f, "Const({:?}) {}", t, self.text),
            TokenKind::Var(t) => write!(f, "Var({:?}) {}", t, self.text),
            TokenKind::Keyword(kw) => write!(f, "Keyword({})", kw),
            TokenKind::Symbol(sym) => write!(f, "Symbol({})", sym),
        }
    }
}
