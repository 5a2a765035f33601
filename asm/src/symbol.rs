use std::fmt;

use indexmap::IndexMap;
use tracing::trace;

use crate::error::ErrorKind;

pub const MAX_SYMBOLS: usize = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SymbolKind {
    /// Address of a `name:` definition
    Label,
    /// Value of a `.equ` constant
    Const,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Label => write!(f, "label"),
            SymbolKind::Const => write!(f, "constant"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Symbol {
    pub kind: SymbolKind,
    pub value: u8,
    /// Line of the definition (1-based)
    pub line: usize,
}

/// Symbols in definition order. Names are case-sensitive and defined once.
#[derive(Debug, Default)]
pub struct Symbols(IndexMap<String, Symbol>);

impl Symbols {
    pub fn new() -> Self {
        Symbols(IndexMap::new())
    }

    pub fn define(
        &mut self,
        name: &str,
        kind: SymbolKind,
        value: u8,
        line: usize,
    ) -> Result<(), ErrorKind> {
        if let Some(prev) = self.0.get(name) {
            return Err(ErrorKind::RedefinedSymbol {
                name: name.to_string(),
                kind: prev.kind,
                first: prev.line,
            });
        }
        if self.0.len() >= MAX_SYMBOLS {
            return Err(ErrorKind::SymbolTableFull);
        }
        trace!(name, value, ?kind, line, "define symbol");
        self.0.insert(name.to_string(), Symbol { kind, value, line });
        Ok(())
    }

    pub fn get(&self, name: &str) -> Option<u8> {
        self.0.get(name).map(|sym| sym.value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Symbols ordered by name (byte-wise), as printed in the listing.
    pub fn sorted(&self) -> Vec<(&str, &Symbol)> {
        let mut syms: Vec<_> = self.0.iter().map(|(k, v)| (k.as_str(), v)).collect();
        syms.sort_by(|a, b| a.0.cmp(b.0));
        syms
    }
}
