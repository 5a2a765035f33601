//! Code generation: re-walks the lines with the finished symbol table and
//! writes bytes into the memory image.

use arch::{Directive, MEM_SIZE};
use tracing::{debug, trace};

use crate::{
    error::{Error, ErrorKind},
    lexer::{byte_values, Line, Stmt},
    operand::{org_target, resolve},
    symbol::Symbols,
};

// ----------------------------------------------------------------------------
// Memory image

/// The 256 byte output image with a marker per written address.
#[derive(Debug, Clone)]
pub struct Image {
    mem: [u8; MEM_SIZE],
    used: [bool; MEM_SIZE],
}

impl Default for Image {
    fn default() -> Self {
        Image {
            mem: [0; MEM_SIZE],
            used: [false; MEM_SIZE],
        }
    }
}

impl Image {
    pub fn new() -> Self {
        Self::default()
    }

    /// Later writes to the same address overwrite earlier ones.
    pub fn write(&mut self, addr: usize, byte: u8) -> Result<(), ErrorKind> {
        if addr >= MEM_SIZE {
            return Err(ErrorKind::AddressOutOfRange(addr));
        }
        trace!(addr, byte, "emit");
        self.mem[addr] = byte;
        self.used[addr] = true;
        Ok(())
    }

    pub fn get(&self, addr: usize) -> u8 {
        self.mem.get(addr).copied().unwrap_or(0)
    }

    pub fn is_used(&self, addr: usize) -> bool {
        self.used.get(addr).copied().unwrap_or(false)
    }

    /// Highest written address, or 0 when nothing was written.
    pub fn last_used(&self) -> usize {
        self.used.iter().rposition(|&u| u).unwrap_or(0)
    }

    /// Bytes from address 0 through `last_used`. Gaps read as zero.
    pub fn bytes(&self) -> &[u8] {
        &self.mem[..=self.last_used()]
    }
}

// ----------------------------------------------------------------------------
// Listing

/// One listing row: start address, emitted bytes and the cleaned source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub line: usize,
    pub addr: usize,
    /// Total number of bytes emitted by the line
    pub count: usize,
    /// The first two emitted bytes, for display
    pub bytes: [u8; 2],
    pub source: String,
}

impl Entry {
    fn new(line: &Line, addr: usize) -> Self {
        Entry {
            line: line.no,
            addr,
            count: 0,
            bytes: [0; 2],
            source: line.source.to_string(),
        }
    }

    fn push(&mut self, byte: u8) {
        if let Some(slot) = self.bytes.get_mut(self.count) {
            *slot = byte;
        }
        self.count += 1;
    }

    /// The bytes shown in the listing row.
    pub fn shown(&self) -> &[u8] {
        &self.bytes[..self.count.min(2)]
    }
}

// ----------------------------------------------------------------------------
// Pass 2

#[derive(Debug)]
pub struct Output {
    pub image: Image,
    pub listing: Vec<Entry>,
}

pub fn run(lines: &[Line], symbols: &Symbols) -> Result<Output, Error> {
    let mut image = Image::new();
    let mut listing = vec![];
    let mut pc: usize = 0;

    for line in lines {
        let Some(stmt) = line.stmt().map_err(|e| e.at(line.no))? else {
            continue;
        };
        let mut entry = Entry::new(line, pc);
        let args = line.args();

        match stmt {
            Stmt::Directive(Directive::Org) => {
                pc = org_target(args).map_err(|e| e.at(line.no))?;
            }
            Stmt::Directive(Directive::Byte) => {
                for value in byte_values(args) {
                    let byte = resolve(value, symbols)
                        .ok_or_else(|| ErrorKind::UnknownByteSymbol(value.to_string()).at(line.no))?;
                    image.write(pc, byte).map_err(|e| e.at(line.no))?;
                    entry.push(byte);
                    pc += 1;
                }
            }
            // Registered by pass 1.
            Stmt::Directive(Directive::Equ) => {}
            Stmt::Op(op) => {
                let operand = match (op.has_operand(), args.first()) {
                    (false, _) => None,
                    (true, Some(arg)) => Some(*arg),
                    (true, None) => {
                        return Err(ErrorKind::MissingOperand(op.to_string()).at(line.no))
                    }
                };
                if pc + op.size() as usize > MEM_SIZE {
                    return Err(ErrorKind::AddressOutOfRange(pc).at(line.no));
                }
                image.write(pc, op.opcode()).map_err(|e| e.at(line.no))?;
                entry.push(op.opcode());
                pc += 1;
                if let Some(arg) = operand {
                    let byte = resolve(arg, symbols)
                        .ok_or_else(|| ErrorKind::UndefinedOperand(arg.to_string()).at(line.no))?;
                    image.write(pc, byte).map_err(|e| e.at(line.no))?;
                    entry.push(byte);
                    pc += 1;
                }
            }
        }
        listing.push(entry);
    }

    debug!(
        entries = listing.len(),
        last = image.last_used(),
        "pass 2 complete"
    );
    Ok(Output { image, listing })
}
