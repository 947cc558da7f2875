//! Code module - `BCS####` identifiers and their structured addresses

use std::fmt;
use thiserror::Error;

/// Prefix carried by canonical BCS codes
pub const CODE_PREFIX: &str = "BCS";

/// Errors produced while parsing a BCS code
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Token does not match the `[BCS]NN[NN[NN]]` grammar
    #[error("Malformed BCS code: '{0}'")]
    MalformedCode(String),
}

/// Granularity of a code address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Granularity {
    /// Whole section (`BCS01`)
    Section,
    /// Rule within a section (`BCS0102`)
    Rule,
    /// Subrule within a rule (`BCS010203`)
    Subrule,
}

/// Structured address of a section, rule or subrule
///
/// Ordering is `(section, rule, subrule)` ascending, with absent components
/// sorting before present ones, so a section precedes its rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CodeAddress {
    section: u8,
    rule: Option<u8>,
    subrule: Option<u8>,
}

impl CodeAddress {
    /// Address of a whole section
    pub fn section(section: u8) -> Self {
        Self {
            section,
            rule: None,
            subrule: None,
        }
    }

    /// Address of a rule within a section
    pub fn rule(section: u8, rule: u8) -> Self {
        Self {
            section,
            rule: Some(rule),
            subrule: None,
        }
    }

    /// Address of a subrule
    pub fn subrule(section: u8, rule: u8, subrule: u8) -> Self {
        Self {
            section,
            rule: Some(rule),
            subrule: Some(subrule),
        }
    }

    /// Parse a code such as `BCS0102`, `0102` or `BCS010201`
    ///
    /// The `BCS` prefix is optional and case-sensitive. The remaining digits
    /// must be zero-padded pairs: 2, 4 or 6 of them.
    ///
    /// # Examples
    ///
    /// ```
    /// use bcs_domain::CodeAddress;
    ///
    /// let addr = CodeAddress::parse("BCS0102").unwrap();
    /// assert_eq!(addr, CodeAddress::rule(1, 2));
    /// assert_eq!(addr.to_string(), "BCS0102");
    /// assert!(CodeAddress::parse("BCS102").is_err());
    /// ```
    pub fn parse(token: &str) -> Result<Self, ParseError> {
        let malformed = || ParseError::MalformedCode(token.to_string());

        let digits = token.strip_prefix(CODE_PREFIX).unwrap_or(token);
        if !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(malformed());
        }

        let pair = |i: usize| -> u8 {
            let bytes = digits.as_bytes();
            (bytes[i] - b'0') * 10 + (bytes[i + 1] - b'0')
        };

        match digits.len() {
            2 => Ok(Self::section(pair(0))),
            4 => Ok(Self::rule(pair(0), pair(2))),
            6 => Ok(Self::subrule(pair(0), pair(2), pair(4))),
            _ => Err(malformed()),
        }
    }

    /// Section number
    pub fn section_number(&self) -> u8 {
        self.section
    }

    /// Rule number, if this is a rule or subrule address
    pub fn rule_number(&self) -> Option<u8> {
        self.rule
    }

    /// Subrule number, if this is a subrule address
    pub fn subrule_number(&self) -> Option<u8> {
        self.subrule
    }

    /// Granularity of this address
    pub fn granularity(&self) -> Granularity {
        match (self.rule, self.subrule) {
            (None, _) => Granularity::Section,
            (Some(_), None) => Granularity::Rule,
            (Some(_), Some(_)) => Granularity::Subrule,
        }
    }

    /// The section this address belongs to
    pub fn section_address(&self) -> Self {
        Self::section(self.section)
    }

    /// Whether `other` is this address or nested beneath it
    pub fn contains(&self, other: &CodeAddress) -> bool {
        if self.section != other.section {
            return false;
        }
        match (self.rule, self.subrule) {
            (None, _) => true,
            (Some(rule), None) => other.rule == Some(rule),
            (Some(_), Some(_)) => self == other,
        }
    }

    /// Zero-padded digits without the `BCS` prefix (`0102`)
    pub fn digits(&self) -> String {
        let mut out = format!("{:02}", self.section);
        if let Some(rule) = self.rule {
            out.push_str(&format!("{:02}", rule));
        }
        if let Some(subrule) = self.subrule {
            out.push_str(&format!("{:02}", subrule));
        }
        out
    }
}

impl fmt::Display for CodeAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", CODE_PREFIX, self.digits())
    }
}

impl std::str::FromStr for CodeAddress {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
