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

//! Listing writer for the SSLC compiler.
//!
//! A listing is plain text, one assembly line per text line, ending with
//! a newline. Without a path it goes to standard output.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use super::render_listing;

/// Write a listing to a file, or to standard output when `path` is `None`.
pub fn write_listing(lines: &[String], path: Option<&Path>) -> io::Result<()> {
    match path {
        Some(path) => {
            let mut file = BufWriter::new(File::create(path)?);
            write_listing_to(lines, &mut file)?;
            file.flush()
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_listing_to(lines, &mut handle)?;
            handle.flush()
        }
    }
}

/// Write a listing to any writer.
pub fn write_listing_to(lines: &[String], writer: &mut impl Write) -> io::Result<()> {
    writer.write_all(render_listing(lines).as_bytes())
}
