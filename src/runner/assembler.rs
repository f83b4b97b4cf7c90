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

//! NASM detection and invocation.

use std::path::{Path, PathBuf};
use std::process::{Command, Stdio};

use super::RunnerError;

/// Name of the assembler binary.
pub const NASM_BINARY: &str = "nasm";

/// Object format matching the calling convention of the generated code.
pub const OBJECT_FORMAT: &str = "win64";

/// Find NASM on the system `PATH`.
///
/// # Example
///
/// ```no_run
/// use sslc::runner::find_nasm;
///
/// match find_nasm() {
///     Some(path) => println!("Found NASM: {}", path.display()),
///     None => println!("NASM not found"),
/// }
/// ```
pub fn find_nasm() -> Option<PathBuf> {
    which::which(NASM_BINARY).ok()
}

/// The object file written next to a listing (`prog.asm` -> `prog.obj`).
pub fn object_path_for(listing: &Path) -> PathBuf {
    listing.with_extension("obj")
}

/// Runs NASM on written listings.
#[derive(Debug, Clone)]
pub struct Assembler {
    /// Path to the NASM binary.
    nasm_path: PathBuf,
}

impl Assembler {
    /// Create an assembler for the given NASM binary.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::InvalidNasmPath` if the binary does not exist.
    pub fn new(nasm_path: PathBuf) -> Result<Self, RunnerError> {
        if !nasm_path.exists() {
            return Err(RunnerError::InvalidNasmPath(nasm_path));
        }
        Ok(Self { nasm_path })
    }

    /// Create an assembler for the NASM found on `PATH`.
    pub fn detect() -> Result<Self, RunnerError> {
        let nasm_path = find_nasm().ok_or(RunnerError::NasmNotFound)?;
        Ok(Self { nasm_path })
    }

    /// Get the NASM binary path.
    pub fn nasm_path(&self) -> &Path {
        &self.nasm_path
    }

    /// Build the NASM command line for a listing.
    pub fn command(&self, listing: &Path, object: &Path) -> Command {
        let mut command = Command::new(&self.nasm_path);
        command
            .arg("-f")
            .arg(OBJECT_FORMAT)
            .arg(listing)
            .arg("-o")
            .arg(object);
        command
    }

    /// Assemble a listing into an object file and return its path.
    ///
    /// # Errors
    ///
    /// Returns `RunnerError::NasmStartFailed` if NASM cannot be started and
    /// `RunnerError::AssemblyFailed` if it exits unsuccessfully.
    pub fn assemble(&self, listing: &Path) -> Result<PathBuf, RunnerError> {
        let object = object_path_for(listing);
        log::info!(
            "assembling {} -> {}",
            listing.display(),
            object.display()
        );

        let output = self
            .command(listing, &object)
            .stdin(Stdio::null())
            .output()?;

        if !output.status.success() {
            return Err(RunnerError::AssemblyFailed {
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(object)
    }
}
