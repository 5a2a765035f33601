use std::io;
use thiserror::Error;

use crate::symbol::SymbolKind;

#[derive(Error, Debug)]
pub enum ErrorKind {
    #[error("Failed to open file: {0}: {1}")]
    FileOpen(String, #[source] io::Error),

    #[error("Too many lines: {0} (limit is {max})", max = crate::MAX_LINES - 1)]
    TooManyLines(usize),

    #[error("Empty label")]
    EmptyLabel,

    #[error("Symbol redefinition: `{name}` ({kind} first defined at line {first})")]
    RedefinedSymbol {
        name: String,
        kind: SymbolKind,
        first: usize,
    },

    #[error("Symbol table full")]
    SymbolTableFull,

    #[error("Unknown directive: `{0}`")]
    UnknownDirective(String),

    #[error("Unknown mnemonic: `{0}`")]
    UnknownMnemonic(String),

    #[error("Missing operand for `{0}`")]
    MissingOperand(String),

    #[error(".org value invalid or out of range: `{0}`")]
    InvalidOrg(String),

    #[error(".equ value must be numeric: `{0}`")]
    NonNumericEqu(String),

    #[error("Undefined operand: `{0}`")]
    UndefinedOperand(String),

    #[error("Unknown symbol in .byte: `{0}`")]
    UnknownByteSymbol(String),

    #[error("Address out of range: 0x{0:04X}")]
    AddressOutOfRange(usize),

    #[error("Failed to create file: {0}: {1}")]
    FileCreate(String, #[source] io::Error),

    #[error("Failed to write file: {0}: {1}")]
    FileWrite(String, #[source] io::Error),
}

impl ErrorKind {
    /// Attach the 1-based source line the error was detected on.
    pub fn at(self, line: usize) -> Error {
        Error {
            kind: self,
            line: Some(line),
        }
    }
}

/// A fatal assembler error, optionally tied to a source line.
#[derive(Error, Debug)]
#[error("{kind}")]
pub struct Error {
    kind: ErrorKind,
    line: Option<usize>,
}

impl Error {
    pub fn kind(&self) -> &ErrorKind {
        &self.kind
    }

    pub fn line(&self) -> Option<usize> {
        self.line
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Error { kind, line: None }
    }
}
