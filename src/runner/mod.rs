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

//! Support for running the compiler as a development tool.
//!
//! This module provides functionality to:
//! - Watch a source file and recompile when it changes
//! - Locate NASM and assemble a written listing

mod assembler;
mod watcher;

pub use assembler::{find_nasm, object_path_for, Assembler, NASM_BINARY, OBJECT_FORMAT};
pub use watcher::SourceWatcher;

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur outside of compilation proper.
#[derive(Debug, Error)]
pub enum RunnerError {
    /// NASM was not found on the system.
    #[error("NASM not found. Install NASM or specify its path with --nasm-path")]
    NasmNotFound,

    /// The specified NASM path does not exist.
    #[error("NASM path does not exist: {0}")]
    InvalidNasmPath(PathBuf),

    /// NASM could not be started.
    #[error("Failed to start NASM: {0}")]
    NasmStartFailed(#[from] io::Error),

    /// NASM ran but rejected the listing.
    #[error("NASM failed with {status}: {stderr}")]
    AssemblyFailed {
        status: std::process::ExitStatus,
        stderr: String,
    },

    /// Error watching files.
    #[error("File watch error: {0}")]
    WatchError(String),
}
