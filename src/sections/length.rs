//! Length section - checks password minimum length.

use secrecy::{ExposeSecret, SecretString};

use super::{Criterion, Requirement, SectionResult};
use crate::policy::Policy;

/// Password length in characters, not bytes.
pub fn char_len(password: &str) -> usize {
    password.chars().count()
}

/// Checks the password against the policy minimum length.
///
/// The length criterion is always enabled, so this never returns `None`.
pub fn length_section(password: &SecretString, policy: &Policy) -> SectionResult {
    let min_length = policy.min_length.get();
    Some(Requirement {
        criterion: Criterion::Length,
        description: format!("At least {} characters long", min_length),
        satisfied: char_len(password.expose_secret()) >= min_length,
    })
}
