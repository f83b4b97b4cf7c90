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

//! SSLC Compiler CLI
//!
//! Compiles a simple scripting language into NASM x86-64 assembly.

use clap::Parser;
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use sslc::error::render_report;
use sslc::output::{format_token_dump, write_listing};
use sslc::runner::{Assembler, RunnerError, SourceWatcher};

/// Exit code for compile errors.
const EXIT_COMPILE_ERROR: u8 = 1;
/// Exit code for invalid command lines.
const EXIT_USAGE: u8 = 2;
/// Exit code for unreadable input or unwritable output.
const EXIT_IO: u8 = 3;
/// Exit code when NASM cannot be found.
const EXIT_NASM_NOT_FOUND: u8 = 4;
/// Exit code when NASM fails.
const EXIT_ASSEMBLY_FAILED: u8 = 5;
/// Exit code when the file watcher fails.
const EXIT_WATCH_FAILED: u8 = 6;

/// SSLC - A compiler for a simple scripting language
#[derive(Parser, Debug)]
#[command(name = "sslc")]
#[command(author = "Marcel Joachim Kloubert <marcel@kloubert.dev>")]
#[command(version)]
#[command(about = "Compiles a simple scripting language into NASM x86-64 assembly")]
#[command(long_about = r#"
SSLC compiles programs written in a tiny scripting language into NASM
assembly for 64-bit Windows. Variables are single letters whose type
follows from the letter: a-h are floats, i-n are ints, all others are
strings.

Example usage:
  sslc hello.ssl -o hello.asm
  sslc < hello.ssl > hello.asm
  sslc hello.ssl --tokens-only

Assemble with NASM:
  sslc hello.ssl -o hello.asm --assemble

Watch mode:
  sslc hello.ssl -o hello.asm --watch
"#)]
struct Cli {
    /// Source file to compile; reads standard input when absent or "-"
    input: Option<PathBuf>,

    /// Output listing; writes standard output when absent
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Print the token stream instead of compiling
    #[arg(long)]
    tokens_only: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Recompile whenever the source file changes
    #[arg(short, long, requires = "output", requires = "input")]
    watch: bool,

    /// Run NASM on the written listing
    #[arg(short, long, requires = "output")]
    assemble: bool,

    /// Path to the NASM binary (looked up on PATH if not specified)
    #[arg(long)]
    nasm_path: Option<PathBuf>,
}

impl Cli {
    /// The source file, unless input comes from standard input.
    fn source_path(&self) -> Option<&Path> {
        self.input
            .as_deref()
            .filter(|path| path.as_os_str() != "-")
    }

    /// Name used for the source in diagnostics.
    fn source_name(&self) -> String {
        self.source_path()
            .and_then(|path| path.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "<stdin>".to_string())
    }
}

/// Map `-v` occurrences to a log level. `RUST_LOG` takes precedence.
fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => log::LevelFilter::Warn,
        1 => log::LevelFilter::Info,
        2 => log::LevelFilter::Debug,
        _ => log::LevelFilter::Trace,
    };

    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

fn read_source(path: Option<&Path>) -> std::io::Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path),
        None => {
            let mut source = String::new();
            std::io::stdin().read_to_string(&mut source)?;
            Ok(source)
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if cli.watch && cli.source_path().is_none() {
        eprintln!("Error: --watch needs a source file, not standard input");
        return ExitCode::from(EXIT_USAGE);
    }

    let source = match read_source(cli.source_path()) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error: Cannot read {}: {}", cli.source_name(), e);
            return ExitCode::from(EXIT_IO);
        }
    };

    if cli.tokens_only {
        return dump_tokens(&cli, &source);
    }

    // Resolve NASM before compiling so a missing assembler fails fast.
    let assembler = if cli.assemble {
        match resolve_assembler(&cli) {
            Ok(assembler) => Some(assembler),
            Err(e) => {
                eprintln!("Error: {}", e);
                return ExitCode::from(EXIT_NASM_NOT_FOUND);
            }
        }
    } else {
        None
    };

    let result = build(&cli, &source, assembler.as_ref());
    if !cli.watch {
        return match result {
            Ok(()) => ExitCode::SUCCESS,
            Err(code) => ExitCode::from(code),
        };
    }

    run_watch_loop(&cli, assembler.as_ref())
}

/// Print the token stream of the source.
fn dump_tokens(cli: &Cli, source: &str) -> ExitCode {
    match sslc::tokenize(source) {
        Ok(tokens) => {
            print!("{}", format_token_dump(&tokens));
            ExitCode::SUCCESS
        }
        Err(e) => {
            report_error(cli, &e, source);
            ExitCode::from(EXIT_COMPILE_ERROR)
        }
    }
}

fn resolve_assembler(cli: &Cli) -> Result<Assembler, RunnerError> {
    match &cli.nasm_path {
        Some(path) => Assembler::new(path.clone()),
        None => Assembler::detect(),
    }
}

fn report_error(cli: &Cli, error: &sslc::CompileError, source: &str) {
    let color = std::io::stderr().is_terminal();
    eprint!(
        "{}",
        render_report(error, source, Some(&cli.source_name()), color)
    );
}

/// Compile, write and optionally assemble once, returning the exit code on
/// failure.
fn build(cli: &Cli, source: &str, assembler: Option<&Assembler>) -> Result<(), u8> {
    log::info!("compiling {}", cli.source_name());

    let lines = match sslc::compile(source) {
        Ok(lines) => lines,
        Err(e) => {
            report_error(cli, &e, source);
            return Err(EXIT_COMPILE_ERROR);
        }
    };
    log::info!("generated {} lines", lines.len());

    if let Err(e) = write_listing(&lines, cli.output.as_deref()) {
        let target = cli
            .output
            .as_ref()
            .map_or("standard output".to_string(), |p| p.display().to_string());
        eprintln!("Error: Cannot write {}: {}", target, e);
        return Err(EXIT_IO);
    }

    if let (Some(assembler), Some(output)) = (assembler, &cli.output) {
        match assembler.assemble(output) {
            Ok(object) => log::info!("wrote {}", object.display()),
            Err(e) => {
                eprintln!("Error: {}", e);
                return Err(EXIT_ASSEMBLY_FAILED);
            }
        }
    }

    if let Some(output) = &cli.output {
        println!("Compiled {} -> {}", cli.source_name(), output.display());
    }
    Ok(())
}

/// Recompile on every change of the source file until interrupted.
fn run_watch_loop(cli: &Cli, assembler: Option<&Assembler>) -> ExitCode {
    let Some(path) = cli.source_path() else {
        return ExitCode::from(EXIT_USAGE);
    };

    let watcher = match SourceWatcher::new(path) {
        Ok(w) => w,
        Err(e) => {
            eprintln!("Error: Failed to create file watcher: {}", e);
            return ExitCode::from(EXIT_WATCH_FAILED);
        }
    };

    println!();
    println!("Watching for changes... (Press Ctrl+C to stop)");

    loop {
        if let Err(e) = watcher.wait_for_change() {
            eprintln!("Watch error: {}", e);
            return ExitCode::from(EXIT_WATCH_FAILED);
        }

        println!();
        println!("Recompiling...");

        let source = match read_source(Some(path)) {
            Ok(source) => source,
            Err(e) => {
                eprintln!("Error: Cannot read {}: {}", path.display(), e);
                println!("Fix errors and save to retry.");
                continue;
            }
        };

        if build(cli, &source, assembler).is_err() {
            println!("Fix errors and save to retry.");
        }
    }
}
