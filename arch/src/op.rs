use num_enum::{IntoPrimitive, TryFromPrimitive};
use strum::{Display, EnumString};

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    IntoPrimitive,
    TryFromPrimitive,
    EnumString,
    Display,
)]
#[repr(u8)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Mnemonic {
    /// acc <- mem[addr]
    Load = 0x01,
    /// acc <- acc + mem[addr]
    Add = 0x02,
    /// mem[addr] <- acc
    Store = 0x03,
    /// pc <- addr
    Jmp = 0x04,
    /// if acc == 0 { pc <- addr }
    Jz = 0x05,
    Halt = 0xFF,
}

impl Mnemonic {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(m) => Ok(m),
            Err(_) => Err(format!("Unknown mnemonic: {s}")),
        }
    }

    /// Decode an opcode byte. Unassigned opcodes yield `None`.
    pub fn decode(opcode: u8) -> Option<Self> {
        Self::try_from(opcode).ok()
    }

    pub fn opcode(self) -> u8 {
        self.into()
    }

    pub fn has_operand(self) -> bool {
        !matches!(self, Mnemonic::Halt)
    }

    /// Encoded size in bytes: the opcode plus an optional one-byte operand.
    pub fn size(self) -> u8 {
        if self.has_operand() {
            2
        } else {
            1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! test_op {
        ($($name:ident: $text:expr => $op:expr, $opcode:expr, $size:expr,)*) => {
            $(
                #[test]
                fn $name() {
                    let op = Mnemonic::parse($text).unwrap();
                    assert_eq!(op, $op);
                    assert_eq!(op.opcode(), $opcode);
                    assert_eq!(op.size(), $size);
                    assert_eq!(Mnemonic::decode($opcode), Some($op));
                }
            )*
        }
    }

    test_op! {
        test_load: "load" => Mnemonic::Load, 0x01, 2,
        test_add: "ADD" => Mnemonic::Add, 0x02, 2,
        test_store: "Store" => Mnemonic::Store, 0x03, 2,
        test_jmp: "jmp" => Mnemonic::Jmp, 0x04, 2,
        test_jz: "jZ" => Mnemonic::Jz, 0x05, 2,
        test_halt: "halt" => Mnemonic::Halt, 0xFF, 1,
    }

    #[test]
    fn unknown() {
        assert!(Mnemonic::parse("nop").is_err());
        assert!(Mnemonic::parse("jump").is_err());
        assert_eq!(Mnemonic::decode(0x00), None);
        assert_eq!(Mnemonic::decode(0x06), None);
    }

    #[test]
    fn display_is_lowercase() {
        assert_eq!(Mnemonic::Halt.to_string(), "halt");
        assert_eq!(Mnemonic::Jz.to_string(), "jz");
    }
}
