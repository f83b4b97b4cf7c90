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

//! Error types for the SSLC compiler.
//!
//! Compilation is fail-fast: the first lexical, syntax or semantic error
//! aborts the whole run and is returned to the caller as a [`CompileError`].

use std::ops::Range;

use ariadne::{Color, Config, Label, Report, ReportKind, Source};
use thiserror::Error;

/// A source span representing a range in the source code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Span {
    /// Start byte offset (inclusive)
    pub start: usize,
    /// End byte offset (exclusive)
    pub end: usize,
}

impl Span {
    /// Create a new span.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Get the length of this span.
    pub fn len(&self) -> usize {
        self.end - self.start
    }

    /// Check if the span is empty.
    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    /// Merge two spans into one that covers both.
    pub fn merge(&self, other: &Span) -> Span {
        Span {
            start: self.start.min(other.start),
            end: self.end.max(other.end),
        }
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

impl From<Span> for Range<usize> {
    fn from(span: Span) -> Self {
        span.start..span.end
    }
}

/// The stage of compilation an error belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Lexical,
    Syntax,
    Semantic,
}

/// Error codes for the compiler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCode {
    // Lexical errors (E001-E020)
    UnknownSymbol,
    UnknownKeyword,
    UnterminatedString,
    IntegerOutOfRange,

    // Syntax errors (E100-E104)
    UnexpectedToken,
    UnexpectedEndOfFile,
    ExpectedToken,
    ExpectedVariable,
    ExpectedExpression,

    // Semantic errors (E210-E214)
    TypeMismatch,
    ConditionNotBool,
    UnsupportedOperation,
    ForVariableNotInt,
    ForBoundNotInt,
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl ErrorCode {
    /// Get the numeric code for this error.
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::UnknownSymbol => "E001",
            ErrorCode::UnknownKeyword => "E002",
            ErrorCode::UnterminatedString => "E010",
            ErrorCode::IntegerOutOfRange => "E020",

            ErrorCode::UnexpectedToken => "E100",
            ErrorCode::UnexpectedEndOfFile => "E101",
            ErrorCode::ExpectedToken => "E102",
            ErrorCode::ExpectedVariable => "E103",
            ErrorCode::ExpectedExpression => "E104",

            ErrorCode::TypeMismatch => "E210",
            ErrorCode::ConditionNotBool => "E211",
            ErrorCode::UnsupportedOperation => "E212",
            ErrorCode::ForVariableNotInt => "E213",
            ErrorCode::ForBoundNotInt => "E214",
        }
    }

    /// Get the compilation stage this code belongs to.
    pub fn category(&self) -> ErrorCategory {
        match self {
            ErrorCode::UnknownSymbol
            | ErrorCode::UnknownKeyword
            | ErrorCode::UnterminatedString
            | ErrorCode::IntegerOutOfRange => ErrorCategory::Lexical,

            ErrorCode::UnexpectedToken
            | ErrorCode::UnexpectedEndOfFile
            | ErrorCode::ExpectedToken
            | ErrorCode::ExpectedVariable
            | ErrorCode::ExpectedExpression => ErrorCategory::Syntax,

            ErrorCode::TypeMismatch
            | ErrorCode::ConditionNotBool
            | ErrorCode::UnsupportedOperation
            | ErrorCode::ForVariableNotInt
            | ErrorCode::ForBoundNotInt => ErrorCategory::Semantic,
        }
    }
}

/// A compiler error with source location.
#[derive(Debug, Error)]
#[error("[{code}] {message}")]
pub struct CompileError {
    /// The error code.
    pub code: ErrorCode,
    /// The error message.
    pub message: String,
    /// The source span where the error occurred.
    pub span: Span,
    /// Optional hint for fixing the error.
    pub hint: Option<String>,
}

impl CompileError {
    /// Create a new compile error.
    pub fn new(code: ErrorCode, message: impl Into<String>, span: Span) -> Self {
        Self {
            code,
            message: message.into(),
            span,
            hint: None,
        }
    }

    /// Add a hint to this error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    /// Get the error code string.
    pub fn code_str(&self) -> &'static str {
        self.code.code()
    }

    /// Get the compilation stage that produced this error.
    pub fn category(&self) -> ErrorCategory {
        self.code.category()
    }
}

/// Result type for compiler operations.
pub type Result<T> = std::result::Result<T, CompileError>;

/// Source location with line and column information.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed).
    pub line: usize,
    /// Column number (1-indexed).
    pub column: usize,
    /// The content of the line.
    pub line_content: String,
}

impl SourceLocation {
    /// Calculate line and column from a byte offset in source code.
    pub fn from_offset(source: &str, offset: usize) -> Self {
        let mut offset = offset.min(source.len());
        while !source.is_char_boundary(offset) {
            offset -= 1;
        }
        let before = &source[..offset];

        let line = before.chars().filter(|&c| c == '\n').count() + 1;

        let last_newline = before.rfind('\n').map(|i| i + 1).unwrap_or(0);
        let column = before[last_newline..].chars().count() + 1;

        let line_end = source[offset..]
            .find('\n')
            .map(|i| offset + i)
            .unwrap_or(source.len());
        let line_content = source[last_newline..line_end].trim_end_matches('\r').to_string();

        Self {
            line,
            column,
            line_content,
        }
    }
}

/// Format an error with source context as plain text.
pub fn format_error(error: &CompileError, source: &str, filename: Option<&str>) -> String {
    let loc = SourceLocation::from_offset(source, error.span.start);
    let filename = filename.unwrap_or("<input>");

    let mut output = String::new();

    output.push_str(&format!("error[{}]: {}\n", error.code_str(), error.message));
    output.push_str(&format!("  --> {}:{}:{}\n", filename, loc.line, loc.column));

    let line_num_width = loc.line.to_string().len();
    output.push_str(&format!("{:>width$} |\n", "", width = line_num_width));
    output.push_str(&format!(
        "{:>width$} | {}\n",
        loc.line,
        loc.line_content,
        width = line_num_width
    ));

    let underline_start = loc.column - 1;
    let underline_len = error
        .span
        .len()
        .max(1)
        .min(loc.line_content.len().saturating_sub(underline_start).max(1));
    output.push_str(&format!(
        "{:>width$} | {:>start$}{}\n",
        "",
        "",
        "^".repeat(underline_len),
        width = line_num_width,
        start = underline_start
    ));

    if let Some(hint) = &error.hint {
        output.push_str(&format!(
            "{:>width$} = hint: {}\n",
            "",
            hint,
            width = line_num_width
        ));
    }

    output
}

/// Render an error as an `ariadne` report.
///
/// ariadne counts characters rather than bytes, so the byte span is converted
/// first. Empty spans (such as end of file) are widened onto the last
/// character so the label always has something to point at.
pub fn render_report(
    error: &CompileError,
    source: &str,
    filename: Option<&str>,
    color: bool,
) -> String {
    let filename = filename.unwrap_or("<input>");
    let char_len = source.chars().count();
    let to_chars = |byte: usize| {
        let mut byte = byte.min(source.len());
        while !source.is_char_boundary(byte) {
            byte -= 1;
        }
        source[..byte].chars().count()
    };

    let mut start = to_chars(error.span.start);
    let mut end = to_chars(error.span.end).max(start);
    if start == end {
        if end < char_len {
            end += 1;
        } else if char_len > 0 {
            start = char_len - 1;
        }
    }

    let mut builder = Report::build(ReportKind::Error, filename, start)
        .with_code(error.code_str())
        .with_message(&error.message)
        .with_config(Config::default().with_color(color));

    if char_len > 0 {
        builder = builder.with_label(
            Label::new((filename, start..end))
                .with_message(&error.message)
                .with_color(Color::Red),
        );
    }
    if let Some(hint) = &error.hint {
        builder = builder.with_help(hint);
    }

    let mut buffer = Vec::new();
    if builder
        .finish()
        .write((filename, Source::from(source.to_string())), &mut buffer)
        .is_err()
    {
        return format_error(error, source, Some(filename));
    }
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_span_creation() {
        let span = Span::new(10, 20);
        assert_eq!(span.start, 10);
        assert_eq!(span.end, 20);
        assert_eq!(span.len(), 10);
        assert!(!span.is_empty());
    }

    #[test]
    fn test_span_merge() {
        let merged = Span::new(5, 10).merge(&Span::new(15, 20));
        assert_eq!(merged, Span::new(5, 20));
    }

    #[test]
    fn test_error_code() {
        assert_eq!(ErrorCode::UnknownSymbol.code(), "E001");
        assert_eq!(ErrorCode::UnexpectedToken.code(), "E100");
        assert_eq!(ErrorCode::TypeMismatch.code(), "E210");
    }

    #[test]
    fn test_error_categories() {
        assert_eq!(
            ErrorCode::UnterminatedString.category(),
            ErrorCategory::Lexical
        );
        assert_eq!(
            ErrorCode::UnexpectedEndOfFile.category(),
            ErrorCategory::Syntax
        );
        assert_eq!(
            ErrorCode::ConditionNotBool.category(),
            ErrorCategory::Semantic
        );
    }

    #[test]
    fn test_compile_error_display() {
        let error = CompileError::new(ErrorCode::TypeMismatch, "Type mismatch", Span::new(0, 1))
            .with_hint("Variables i-n hold integers");
        assert_eq!(error.to_string(), "[E210] Type mismatch");
        assert_eq!(error.code_str(), "E210");
        assert!(error.hint.is_some());
    }

    #[test]
    fn test_source_location() {
        let loc = SourceLocation::from_offset("i=1\nprintln x", 12);
        assert_eq!(loc.line, 2);
        assert_eq!(loc.column, 9);
        assert_eq!(loc.line_content, "println x");
    }

    #[test]
    fn test_format_error() {
        let source = "i = \"abc\"";
        let error = CompileError::new(
            ErrorCode::TypeMismatch,
            "Cannot assign string to int variable 'i'",
            Span::new(4, 9),
        );
        let text = format_error(&error, source, Some("test.ssl"));
        assert!(text.starts_with("error[E210]: Cannot assign string"));
        assert!(text.contains("--> test.ssl:1:5"));
        assert!(text.contains("^^^^^"));
    }

    #[test]
    fn test_render_report_at_end_of_input() {
        let source = "IF 1==1 THEN";
        let error = CompileError::new(
            ErrorCode::UnexpectedEndOfFile,
            "Expected ELSE or ENDIF, found end of file",
            Span::new(source.len(), source.len()),
        );
        let text = render_report(&error, source, Some("test.ssl"), false);
        assert!(text.contains("E101"));
        assert!(text.contains("Expected ELSE or ENDIF"));
    }

    #[test]
    fn test_render_report_empty_source() {
        let error = CompileError::new(ErrorCode::ExpectedToken, "nothing", Span::new(0, 0));
        let text = render_report(&error, "", None, false);
        assert!(text.contains("nothing"));
    }
}
