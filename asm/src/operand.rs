use arch::MEM_SIZE;

use crate::{error::ErrorKind, symbol::Symbols};

/// Parse an integer literal: `0x` hex, `0b` binary or (optionally negative) decimal.
///
/// Returns the unreduced value; anything else is `None` and may still be a symbol.
pub fn parse_number(tok: &str) -> Option<i64> {
    if let Some(hex) = tok.strip_prefix("0x") {
        return parse_radix(hex, 16);
    }
    if let Some(bin) = tok.strip_prefix("0b") {
        return parse_radix(bin, 2);
    }
    let digits = tok.strip_prefix('-').unwrap_or(tok);
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    tok.parse::<i64>().ok()
}

fn parse_radix(digits: &str, radix: u32) -> Option<i64> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    i64::from_str_radix(digits, radix).ok()
}

/// Two's complement wrap into a byte: `-1` becomes `0xFF`.
pub fn to_byte(value: i64) -> u8 {
    value.rem_euclid(256) as u8
}

/// Resolve an operand as a literal first, then as a symbol.
pub fn resolve(tok: &str, symbols: &Symbols) -> Option<u8> {
    match parse_number(tok) {
        Some(v) => Some(to_byte(v)),
        None => symbols.get(tok),
    }
}

/// Target of `.org`: a literal inside the address space.
pub fn org_target(args: &[&str]) -> Result<usize, ErrorKind> {
    let arg = args
        .first()
        .ok_or_else(|| ErrorKind::MissingOperand(".org".to_string()))?;
    match parse_number(arg) {
        Some(v) if (0..MEM_SIZE as i64).contains(&v) => Ok(v as usize),
        _ => Err(ErrorKind::InvalidOrg(arg.to_string())),
    }
}

/// Name and value of `.equ NAME VALUE`. The value must already be a literal.
pub fn equ_value<'a>(args: &[&'a str]) -> Result<(&'a str, u8), ErrorKind> {
    match args {
        [name, value, ..] => match parse_number(value) {
            Some(v) => Ok((*name, to_byte(v))),
            None => Err(ErrorKind::NonNumericEqu(value.to_string())),
        },
        _ => Err(ErrorKind::MissingOperand(".equ".to_string())),
    }
}
