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

//! Property-based tests for the SSLC compiler.
//!
//! These tests verify important invariants and properties that should
//! hold for all inputs, using proptest for random input generation.

use proptest::prelude::*;
use sslc::{compile, lexer, Token, TokenKind, VarType};
use std::collections::HashSet;

/// Label definitions in a listing (lines ending with ':' at column 0).
fn defined_labels(lines: &[String]) -> Vec<&str> {
    lines
        .iter()
        .filter(|line| !line.starts_with(' ') && line.ends_with(':'))
        .map(|line| line.trim_end_matches(':'))
        .collect()
}

/// Numbered labels (`else_3`, `STR_4`, ...) in order of first mention in
/// the code section.
fn labels_by_first_mention(lines: &[String]) -> Vec<(String, u32)> {
    let code_end = lines
        .iter()
        .position(|l| l == "section .data")
        .unwrap_or(lines.len());

    let mut seen: Vec<(String, u32)> = Vec::new();
    for line in &lines[..code_end] {
        for word in line.split(|c: char| !c.is_ascii_alphanumeric() && c != '_') {
            let Some((prefix, number)) = word.rsplit_once('_') else {
                continue;
            };
            if prefix.is_empty() {
                continue;
            }
            let Ok(number) = number.parse::<u32>() else {
                continue;
            };
            if !seen.iter().any(|(p, n): &(String, u32)| p == prefix && *n == number) {
                seen.push((prefix.to_string(), number));
            }
        }
    }
    seen
}

/// Count the source lines starting with a keyword.
fn count_lines_starting(source: &str, keyword: &str) -> usize {
    source
        .lines()
        .filter(|line| line.trim_start().starts_with(keyword))
        .count()
}

/// Stack depth below the 16-byte boundary `main` was called from, at each
/// `call`. `main` starts 8 bytes deep because of its return address.
fn stack_depths_at_calls(lines: &[String]) -> Vec<i64> {
    let immediate = |operand: &str| {
        i64::from_str_radix(operand.trim_start_matches("0x"), 16).unwrap()
    };

    let mut depth = 8;
    let mut depths = Vec::new();
    for line in lines.iter().map(|l| l.trim_start()) {
        if line.starts_with("push ") {
            depth += 8;
        } else if line.starts_with("pop ") {
            depth -= 8;
        } else if let Some(n) = line.strip_prefix("sub RSP, ") {
            depth += immediate(n);
        } else if let Some(n) = line.strip_prefix("add RSP, ") {
            depth -= immediate(n);
        } else if line.starts_with("call ") {
            depths.push(depth);
        }
    }
    depths
}

/// A statement that always compiles, as source text.
fn statement() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (0i32..1000).prop_map(|n| format!("i = {}", n)),
        (0u32..100, 0u32..100).prop_map(|(a, b)| format!("a = {}.{}", a, b)),
        "[a-z ]{0,12}".prop_map(|s| format!("z = \"{}\"", s)),
        Just("PRINTLN j + 1".to_string()),
        Just("PRINT b / c".to_string()),
    ];

    leaf.prop_recursive(3, 24, 4, |inner| {
        prop_oneof![
            prop::collection::vec(inner.clone(), 0..4)
                .prop_map(|body| format!("IF i < 10 THEN\n{}\nENDIF", body.join("\n"))),
            (
                prop::collection::vec(inner.clone(), 0..3),
                prop::collection::vec(inner.clone(), 0..3)
            )
                .prop_map(|(then, other)| format!(
                    "IF a >= 1.5 THEN\n{}\nELSE\n{}\nENDIF",
                    then.join("\n"),
                    other.join("\n")
                )),
            prop::collection::vec(inner, 0..4)
                .prop_map(|body| format!("FOR k = 0 TO 5\n{}\nENDFOR", body.join("\n"))),
        ]
    })
}

fn program() -> impl Strategy<Value = String> {
    prop::collection::vec(statement(), 0..8).prop_map(|stmts| stmts.join("\n"))
}

// ============================================================================
// Lexer Property Tests
// ============================================================================

proptest! {
    /// Property: The lexer never panics, on any input.
    #[test]
    fn prop_lexer_never_panics(source in "\\PC{0,200}") {
        let _ = lexer::tokenize(&source);
    }

    /// Property: A successful token stream ends with exactly one end-of-file token.
    #[test]
    fn prop_lexer_ends_with_eof(source in "[a-zA-Z0-9 +\\-*/=<>!.\"#\\n]{0,200}") {
        if let Ok(tokens) = lexer::tokenize(&source) {
            let eofs = tokens.iter().filter(|t| t.is_eof()).count();
            prop_assert_eq!(eofs, 1);
            prop_assert!(tokens.last().is_some_and(Token::is_eof));
        }
    }

    /// Property: Token spans are ordered, non-overlapping and in bounds.
    #[test]
    fn prop_lexer_spans_ordered(source in "[a-z0-9 +\\-*/=<>.\\n]{0,200}") {
        if let Ok(tokens) = lexer::tokenize(&source) {
            for token in &tokens {
                prop_assert!(token.span.start <= token.span.end);
                prop_assert!(token.span.end <= source.len());
            }
            for pair in tokens.windows(2) {
                prop_assert!(
                    pair[0].span.end <= pair[1].span.start,
                    "{} overlaps {}", pair[0], pair[1]
                );
            }
        }
    }

    /// Property: A single letter is a variable typed by its letter, in any case.
    #[test]
    fn prop_letter_typing(letter in "[a-zA-Z]") {
        let tokens = lexer::tokenize(&letter).unwrap();
        let c = letter.chars().next().unwrap().to_ascii_lowercase();
        let expected = if ('a'..='h').contains(&c) {
            VarType::Float
        } else if ('i'..='n').contains(&c) {
            VarType::Int
        } else {
            VarType::Str
        };
        prop_assert_eq!(tokens[0].kind, TokenKind::Var(expected));
    }

    /// Property: Any digit run within i32 range is an int constant with the same text.
    #[test]
    fn prop_int_constants(n in 0i32..=i32::MAX) {
        let text = n.to_string();
        let tokens = lexer::tokenize(&text).unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::Const(VarType::Int));
        prop_assert_eq!(&tokens[0].text, &text);
    }

    /// Property: String constants keep their contents verbatim.
    #[test]
    fn prop_string_contents_verbatim(contents in "[^\"]{0,40}") {
        let source = format!("\"{}\"", contents);
        let tokens = lexer::tokenize(&source).unwrap();
        prop_assert_eq!(tokens[0].kind, TokenKind::Const(VarType::Str));
        prop_assert_eq!(&tokens[0].text, &contents);
    }
}

// ============================================================================
// Compiler Property Tests
// ============================================================================

proptest! {
    /// Property: The compiler never panics, on any input.
    #[test]
    fn prop_compiler_never_panics(source in "[a-zA-Z0-9 +\\-*/=<>.\"\\n]{0,120}") {
        let _ = compile(&source);
    }

    /// Property: Well-formed programs always compile.
    #[test]
    fn prop_valid_programs_compile(source in program()) {
        let result = compile(&source);
        prop_assert!(result.is_ok(), "{:?} failed: {:?}", source, result.err());
    }

    /// Property: Every label is defined once, and every jump target is defined.
    #[test]
    fn prop_labels_unique_and_resolved(source in program()) {
        let lines = compile(&source).unwrap();
        let labels = defined_labels(&lines);

        let unique: HashSet<_> = labels.iter().copied().collect();
        prop_assert_eq!(unique.len(), labels.len(), "duplicate label in {:?}", labels);

        for line in &lines {
            let trimmed = line.trim_start();
            if let Some(target) = trimmed
                .strip_prefix("jmp ")
                .or_else(|| trimmed.strip_prefix("jne "))
                .or_else(|| trimmed.strip_prefix("jge "))
            {
                prop_assert!(unique.contains(target), "undefined jump target {}", target);
            }
        }
    }

    /// Property: IFs take one label plus one per ELSE, FORs take two, and
    /// numbers grow in allocation order.
    #[test]
    fn prop_label_counts_and_order(source in program()) {
        let lines = compile(&source).unwrap();
        let labels = labels_by_first_mention(&lines);
        let count = |prefix: &str| labels.iter().filter(|(p, _)| p == prefix).count();

        let ifs = count_lines_starting(&source, "IF ");
        let elses = count_lines_starting(&source, "ELSE");
        let fors = count_lines_starting(&source, "FOR ");
        prop_assert_eq!(count("else"), ifs);
        prop_assert_eq!(count("endif"), elses);
        prop_assert_eq!(count("for"), fors);
        prop_assert_eq!(count("endfor"), fors);

        let numbers: Vec<u32> = labels.iter().map(|(_, n)| *n).collect();
        prop_assert!(
            numbers.windows(2).all(|w| w[0] < w[1]),
            "labels out of order: {:?}", labels
        );
    }

    /// Property: RSP is 16-byte aligned at every C library call.
    #[test]
    fn prop_calls_stack_aligned(source in program()) {
        let lines = compile(&source).unwrap();
        let depths = stack_depths_at_calls(&lines);
        prop_assert!(!depths.is_empty());
        prop_assert!(depths.iter().all(|d| d % 16 == 0), "misaligned calls: {:?}", depths);
    }

    /// Property: Every listing has the fixed frame and a sorted data section.
    #[test]
    fn prop_listing_frame(source in program()) {
        let lines = compile(&source).unwrap();
        prop_assert_eq!(&lines[..3], &["global main", "section .text", "main:"]);

        let data_start = lines.iter().position(|l| l == "section .data");
        let code_end = data_start.unwrap_or(lines.len());
        prop_assert_eq!(&lines[code_end - 1], "  call exit");

        if let Some(start) = data_start {
            let data = &lines[start + 1..];
            prop_assert!(!data.is_empty());
            prop_assert!(data.windows(2).all(|w| w[0] < w[1]), "data not sorted and unique");
        }
    }

    /// Property: Compilation is deterministic.
    #[test]
    fn prop_compile_deterministic(source in program()) {
        prop_assert_eq!(compile(&source).unwrap(), compile(&source).unwrap());
    }
}
