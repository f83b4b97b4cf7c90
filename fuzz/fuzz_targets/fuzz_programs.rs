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

//! Structured fuzz target for SSLC programs.
//!
//! Builds syntactically plausible programs from arbitrary input so the
//! fuzzer spends its time in the parser and code generator instead of
//! the lexer's error paths. Type errors are expected; panics are not.
//!
//! Run with:
//!   cargo +nightly fuzz run fuzz_programs

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;

#[derive(Debug, Arbitrary)]
enum Atom {
    Int(u16),
    Float(u16, u8),
    Str(u8),
    Var(u8),
}

#[derive(Debug, Arbitrary)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
}

#[derive(Debug, Arbitrary)]
struct Expr {
    left: Atom,
    rest: Option<(Op, Atom)>,
}

#[derive(Debug, Arbitrary)]
enum Statement {
    Assign(u8, Expr),
    Print(bool, Expr),
    If(Expr, Vec<Statement>, Option<Vec<Statement>>),
    For(u8, Expr, Expr, Vec<Statement>),
}

fn letter(n: u8) -> char {
    (b'a' + n % 26) as char
}

fn render_atom(atom: &Atom, out: &mut String) {
    match atom {
        Atom::Int(n) => out.push_str(&n.to_string()),
        Atom::Float(whole, frac) => out.push_str(&format!("{}.{}", whole, frac)),
        Atom::Str(n) => out.push_str(&format!("\"s{}\"", n)),
        Atom::Var(n) => out.push(letter(*n)),
    }
}

fn render_expr(expr: &Expr, out: &mut String) {
    render_atom(&expr.left, out);
    if let Some((op, right)) = &expr.rest {
        let op = match op {
            Op::Add => " + ",
            Op::Sub => " - ",
            Op::Mul => " * ",
            Op::Div => " / ",
            Op::Eq => " == ",
            Op::Ne => " != ",
            Op::Lt => " < ",
            Op::Gt => " > ",
            Op::Le => " <= ",
            Op::Ge => " >= ",
        };
        out.push_str(op);
        render_atom(right, out);
    }
}

fn render(statements: &[Statement], out: &mut String) {
    for statement in statements {
        match statement {
            Statement::Assign(var, expr) => {
                out.push(letter(*var));
                out.push_str(" = ");
                render_expr(expr, out);
            }
            Statement::Print(newline, expr) => {
                out.push_str(if *newline { "PRINTLN " } else { "PRINT " });
                render_expr(expr, out);
            }
            Statement::If(cond, then_body, else_body) => {
                out.push_str("IF ");
                render_expr(cond, out);
                out.push_str(" THEN\n");
                render(then_body, out);
                if let Some(else_body) = else_body {
                    out.push_str("ELSE\n");
                    render(else_body, out);
                }
                out.push_str("ENDIF");
            }
            Statement::For(var, from, to, body) => {
                out.push_str("FOR ");
                out.push(letter(*var));
                out.push_str(" = ");
                render_expr(from, out);
                out.push_str(" TO ");
                render_expr(to, out);
                out.push('\n');
                render(body, out);
                out.push_str("ENDFOR");
            }
        }
        out.push('\n');
    }
}

fuzz_target!(|program: Vec<Statement>| {
    let mut source = String::new();
    render(&program, &mut source);

    if let Ok(lines) = sslc::compile(&source) {
        let labels: Vec<_> = lines.iter().filter(|l| l.ends_with(':')).collect();
        let mut unique = labels.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(labels.len(), unique.len(), "duplicate label in {:?}", source);
    }
});
