//! Character variety sections - capital letters, digits and special characters.

use secrecy::{ExposeSecret, SecretString};

use super::{Criterion, Requirement, SectionResult};
use crate::policy::Policy;

/// Characters that count as special.
pub const SPECIAL_CHARACTERS: &str = "!@#$%^&*()_+-=[]{};':\"\\|,.<>/?";

pub fn has_capital(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_uppercase())
}

pub fn has_digit(password: &str) -> bool {
    password.chars().any(|c| c.is_ascii_digit())
}

pub fn has_special(password: &str) -> bool {
    password.chars().any(|c| SPECIAL_CHARACTERS.contains(c))
}

fn check(
    enabled: bool,
    criterion: Criterion,
    description: &str,
    predicate: fn(&str) -> bool,
    password: &SecretString,
) -> SectionResult {
    enabled.then(|| Requirement {
        criterion,
        description: description.to_string(),
        satisfied: predicate(password.expose_secret()),
    })
}

/// Checks for at least one capital letter, if the policy requires it.
pub fn capital_section(password: &SecretString, policy: &Policy) -> SectionResult {
    check(
        policy.capital_letter,
        Criterion::CapitalLetter,
        "At least one capital letter",
        has_capital,
        password,
    )
}

/// Checks for at least one digit, if the policy requires it.
pub fn numeric_section(password: &SecretString, policy: &Policy) -> SectionResult {
    check(
        policy.numeric,
        Criterion::Numeric,
        "At least one numeric character",
        has_digit,
        password,
    )
}

/// Checks for at least one special character, if the policy requires it.
pub fn special_section(password: &SecretString, policy: &Policy) -> SectionResult {
    check(
        policy.special_character,
        Criterion::SpecialCharacter,
        "At least one special character",
        has_special,
        password,
    )
}
