use strum::{Display, EnumString};

/// Assembler directives. Names are matched case-sensitively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumString, Display)]
pub enum Directive {
    #[strum(serialize = ".org")]
    Org,
    #[strum(serialize = ".byte")]
    Byte,
    #[strum(serialize = ".equ")]
    Equ,
}

impl Directive {
    pub fn parse(s: &str) -> Result<Self, String> {
        match s.parse::<Self>() {
            Ok(d) => Ok(d),
            Err(_) => Err(format!("Unknown directive: {s}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_directives() {
        assert_eq!(Directive::parse(".org"), Ok(Directive::Org));
        assert_eq!(Directive::parse(".byte"), Ok(Directive::Byte));
        assert_eq!(Directive::parse(".equ"), Ok(Directive::Equ));
        assert_eq!(Directive::Byte.to_string(), ".byte");
    }

    #[test]
    fn directive_names_are_case_sensitive() {
        assert!(Directive::parse(".ORG").is_err());
        assert!(Directive::parse(".word").is_err());
    }
}
