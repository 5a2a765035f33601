//! Two-pass assembler for the 8-bit accumulator machine.
//!
//! Pass 1 assigns an address to every line and collects symbols, pass 2
//! resolves operands against the finished table and emits the image.

pub mod emit;
pub mod error;
pub mod lexer;
pub mod msg;
pub mod operand;
pub mod pass1;
pub mod pass2;
pub mod symbol;

use std::{fs, path::Path};

use error::{Error, ErrorKind};
use pass1::Placement;
use pass2::{Entry, Image};
use symbol::Symbols;

/// Sources must stay below this many lines.
pub const MAX_LINES: usize = 2000;

/// Result of a successful run.
#[derive(Debug)]
pub struct Assembly {
    pub symbols: Symbols,
    pub image: Image,
    pub listing: Vec<Entry>,
    /// Addresses assigned by pass 1, one per statement line
    pub placements: Vec<Placement>,
}

/// Read a source file. Bytes that are not UTF-8 (say, Latin-1 in a comment)
/// are replaced rather than rejected.
pub fn read_source(path: &Path) -> Result<String, Error> {
    let bytes =
        fs::read(path).map_err(|e| ErrorKind::FileOpen(path.display().to_string(), e))?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Split source text into raw lines, enforcing the line limit.
pub fn source_lines(text: &str) -> Result<Vec<&str>, Error> {
    let raw: Vec<&str> = text.lines().collect();
    if raw.len() >= MAX_LINES {
        return Err(ErrorKind::TooManyLines(raw.len()).into());
    }
    Ok(raw)
}

pub fn assemble(text: &str) -> Result<Assembly, Error> {
    let raw = source_lines(text)?;
    let layout = pass1::run(&raw)?;
    let output = pass2::run(&layout.lines, &layout.symbols)?;
    Ok(Assembly {
        symbols: layout.symbols,
        image: output.image,
        listing: output.listing,
        placements: layout.placements,
    })
}
