//! Address assignment: lexes and walks every line once, places labels at the
//! location counter and registers `.equ` constants.

use arch::{Directive, MEM_SIZE};
use tracing::debug;

use crate::{
    error::Error,
    lexer::{byte_values, Line, Stmt},
    operand::{equ_value, org_target},
    symbol::{SymbolKind, Symbols},
};

/// Start address assigned to a statement line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Placement {
    pub line: usize,
    pub addr: usize,
}

#[derive(Debug)]
pub struct Layout<'a> {
    pub symbols: Symbols,
    pub placements: Vec<Placement>,
    /// Lexed lines, walked again by pass 2
    pub lines: Vec<Line<'a>>,
}

/// Lines are lexed as they are reached, so the first error in source order wins.
pub fn run<'a>(raw: &[&'a str]) -> Result<Layout<'a>, Error> {
    let mut symbols = Symbols::new();
    let mut placements = vec![];
    let mut lines = Vec::with_capacity(raw.len());
    let mut pc: usize = 0;

    for (idx, raw) in raw.iter().copied().enumerate() {
        let line = Line::parse(idx + 1, raw).map_err(|e| e.at(idx + 1))?;
        if let Some(label) = line.label {
            symbols
                .define(label, SymbolKind::Label, (pc % MEM_SIZE) as u8, line.no)
                .map_err(|e| e.at(line.no))?;
        }

        let Some(stmt) = line.stmt().map_err(|e| e.at(line.no))? else {
            lines.push(line);
            continue;
        };
        placements.push(Placement {
            line: line.no,
            addr: pc,
        });

        match stmt {
            Stmt::Directive(Directive::Org) => {
                pc = org_target(line.args()).map_err(|e| e.at(line.no))?;
            }
            Stmt::Directive(Directive::Byte) => {
                // Values may be forward references; only count them here.
                pc += byte_values(line.args()).count();
            }
            Stmt::Directive(Directive::Equ) => {
                let (name, value) = equ_value(line.args()).map_err(|e| e.at(line.no))?;
                symbols
                    .define(name, SymbolKind::Const, value, line.no)
                    .map_err(|e| e.at(line.no))?;
            }
            Stmt::Op(op) => pc += op.size() as usize,
        }
        lines.push(line);
    }

    debug!(symbols = symbols.len(), end = pc, "pass 1 complete");
    Ok(Layout {
        symbols,
        placements,
        lines,
    })
}
