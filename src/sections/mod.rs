//! Password requirement sections
//!
//! Each section checks one criterion of the policy and reports it as a
//! displayable requirement.

mod length;
mod variety;

use std::fmt;

pub use length::{char_len, length_section};
pub use variety::{
    capital_section, has_capital, has_digit, has_special, numeric_section, special_section,
    SPECIAL_CHARACTERS,
};

/// Result type for section functions.
/// - `Some(requirement)` - Criterion is enabled, with its current state
/// - `None` - Criterion is disabled by the policy
pub type SectionResult = Option<Requirement>;

/// One independently togglable password requirement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Criterion {
    Length,
    CapitalLetter,
    Numeric,
    SpecialCharacter,
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Criterion::Length => "length",
            Criterion::CapitalLetter => "capital letter",
            Criterion::Numeric => "numeric",
            Criterion::SpecialCharacter => "special character",
        };
        f.write_str(name)
    }
}

/// A requirement line as shown under the strength meter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Requirement {
    pub criterion: Criterion,
    pub description: String,
    pub satisfied: bool,
}
