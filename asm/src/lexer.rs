use arch::{Directive, Mnemonic};

use crate::error::ErrorKind;

pub const COMMENT: char = ';';
pub const LABEL: char = ':';

// ----------------------------------------------------------------------------
// Line

/// One source line split into label, cleaned text and tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line<'a> {
    /// 1-based line number
    pub no: usize,
    pub raw: &'a str,
    pub label: Option<&'a str>,
    /// Text after the label with the comment stripped
    pub source: &'a str,
    pub tokens: Vec<&'a str>,
}

impl<'a> Line<'a> {
    pub fn parse(no: usize, raw: &'a str) -> Result<Line<'a>, ErrorKind> {
        let code = strip_comment(raw);
        let (label, rest) = match code.split_once(LABEL) {
            Some((label, rest)) => {
                let label = label.trim();
                if label.is_empty() {
                    return Err(ErrorKind::EmptyLabel);
                }
                (Some(label), rest)
            }
            None => (None, code),
        };
        let source = rest.trim();
        Ok(Line {
            no,
            raw,
            label,
            source,
            tokens: source.split_whitespace().collect(),
        })
    }

    /// No directive or mnemonic on this line (blank, comment or label only).
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn args(&self) -> &[&'a str] {
        self.tokens.get(1..).unwrap_or(&[])
    }

    /// Classify the first token.
    pub fn stmt(&self) -> Result<Option<Stmt>, ErrorKind> {
        let Some(head) = self.tokens.first() else {
            return Ok(None);
        };
        if head.starts_with('.') {
            match Directive::parse(head) {
                Ok(d) => Ok(Some(Stmt::Directive(d))),
                Err(_) => Err(ErrorKind::UnknownDirective(head.to_string())),
            }
        } else {
            match Mnemonic::parse(head) {
                Ok(m) => Ok(Some(Stmt::Op(m))),
                Err(_) => Err(ErrorKind::UnknownMnemonic(head.to_string())),
            }
        }
    }
}

// ----------------------------------------------------------------------------
// Statement

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stmt {
    Directive(Directive),
    Op(Mnemonic),
}

pub fn strip_comment(raw: &str) -> &str {
    match raw.split_once(COMMENT) {
        Some((code, _)) => code,
        None => raw,
    }
    .trim_end()
}

/// Comma separated `.byte` values, which may span several tokens.
pub fn byte_values<'a, 's>(args: &'s [&'a str]) -> impl Iterator<Item = &'a str> + 's {
    args.iter()
        .copied()
        .flat_map(|arg| arg.split(','))
        .filter(|v| !v.is_empty())
}
