//! Password scoring strategies.
//!
//! Two interchangeable algorithms turn a password into a score in `[0, 100]`.
//! Their labels are not compatible with each other, so the label is always
//! derived through the algorithm that produced the score.

use std::fmt;

use secrecy::{ExposeSecret, SecretString};

use crate::policy::Policy;
use crate::sections::{char_len, has_capital, has_digit, has_special};

/// Passwords shorter than this get no baseline in the length-multiplier
/// algorithm.
const MULTIPLIER_MIN_LENGTH: usize = 6;
const MULTIPLIER_BASELINE: f64 = 10.0;
const MULTIPLIER_POINTS_PER_CHAR: f64 = 5.0;
const MULTIPLIER_CLASS_BONUS: f64 = 0.5;

/// Scoring strategy selected by the policy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Algorithm {
    /// Fraction of enabled criteria met, with partial credit for length.
    #[default]
    WeightedCriteria,
    /// Length baseline multiplied by the number of character classes present.
    LengthMultiplier,
}

impl Algorithm {
    /// Scores `password` with this algorithm.
    pub fn score(self, password: &SecretString, policy: &Policy) -> PasswordScore {
        let pwd = password.expose_secret();
        let raw = match self {
            Algorithm::WeightedCriteria => weighted_criteria_score(pwd, policy),
            Algorithm::LengthMultiplier => length_multiplier_score(pwd),
        };
        PasswordScore::new(raw)
    }

    /// Discrete label for a score produced by this algorithm.
    pub fn label(self, score: PasswordScore) -> PasswordStrength {
        let value = score.value();
        match self {
            Algorithm::WeightedCriteria if value >= 100.0 => PasswordStrength::Strong,
            Algorithm::WeightedCriteria => PasswordStrength::Weak,
            Algorithm::LengthMultiplier if value >= 80.0 => PasswordStrength::Strong,
            Algorithm::LengthMultiplier if value >= 50.0 => PasswordStrength::Good,
            Algorithm::LengthMultiplier => PasswordStrength::Weak,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Algorithm::WeightedCriteria => "weighted-criteria",
            Algorithm::LengthMultiplier => "length-multiplier",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Strength score, always within `[0, 100]`.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default)]
pub struct PasswordScore(f64);

impl PasswordScore {
    pub const MAX: f64 = 100.0;

    /// Creates a score, clamping into `[0, 100]`. NaN becomes 0.
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self(0.0);
        }
        Self(value.clamp(0.0, Self::MAX))
    }

    pub fn value(self) -> f64 {
        self.0
    }

    /// Score as a fraction of the maximum, for progress bars.
    pub fn fraction(self) -> f64 {
        self.0 / Self::MAX
    }
}

impl fmt::Display for PasswordScore {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PasswordStrength {
    NotEvaluated,
    Weak,
    Good,
    Strong,
}

impl fmt::Display for PasswordStrength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PasswordStrength::NotEvaluated => "Not evaluated",
            PasswordStrength::Weak => "Weak",
            PasswordStrength::Good => "Good",
            PasswordStrength::Strong => "Strong",
        };
        f.write_str(label)
    }
}

/// Weighted-criteria score: `met / enabled * 100`.
///
/// The length criterion counts fully once `min_length` is reached and gives
/// partial credit `len / min_length` below it.
pub fn weighted_criteria_score(password: &str, policy: &Policy) -> f64 {
    let len = char_len(password);
    let min_length = policy.min_length.get();

    let mut met = if len >= min_length {
        1.0
    } else {
        len as f64 / min_length as f64
    };
    if policy.capital_letter && has_capital(password) {
        met += 1.0;
    }
    if policy.numeric && has_digit(password) {
        met += 1.0;
    }
    if policy.special_character && has_special(password) {
        met += 1.0;
    }

    met / policy.enabled_count() as f64 * 100.0
}

/// Length-multiplier score.
///
/// Character classes raise the multiplier whether or not the policy requires
/// them.
pub fn length_multiplier_score(password: &str) -> f64 {
    let len = char_len(password);
    let baseline = if len < MULTIPLIER_MIN_LENGTH {
        0.0
    } else {
        MULTIPLIER_BASELINE + (len - MULTIPLIER_MIN_LENGTH) as f64 * MULTIPLIER_POINTS_PER_CHAR
    };

    let classes = [has_capital(password), has_digit(password), has_special(password)]
        .iter()
        .filter(|&&b| b)
        .count();
    let multiplier = 1.0 + MULTIPLIER_CLASS_BONUS * classes as f64;

    (baseline * multiplier).round().min(PasswordScore::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::num::NonZeroUsize;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn capital_special_policy() -> Policy {
        Policy::new(NonZeroUsize::new(8).unwrap())
            .capital_letter(true)
            .special_character(true)
    }

    #[test]
    fn test_weighted_all_criteria_met() {
        let policy = capital_special_policy();
        let score = Algorithm::WeightedCriteria.score(&secret("Abcdef1!"), &policy);
        assert_eq!(score.value(), 100.0);
        assert_eq!(Algorithm::WeightedCriteria.label(score), PasswordStrength::Strong);
    }

    #[test]
    fn test_weighted_partial_length_credit() {
        let policy = capital_special_policy();
        let score = Algorithm::WeightedCriteria.score(&secret("abc"), &policy);
        assert!((score.value() - 12.5).abs() < 1e-9, "got {}", score.value());
        assert_eq!(Algorithm::WeightedCriteria.label(score), PasswordStrength::Weak);
    }

    #[test]
    fn test_weighted_ignores_disabled_criteria() {
        let policy = capital_special_policy();
        // The digit is present but numeric is not enabled.
        let with_digit = weighted_criteria_score("abcdefg1", &policy);
        let without = weighted_criteria_score("abcdefgh", &policy);
        assert_eq!(with_digit, without);
        assert!((with_digit - 100.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_weighted_empty_password() {
        let policy = capital_special_policy();
        assert_eq!(weighted_criteria_score("", &policy), 0.0);
    }

    #[test]
    fn test_weighted_length_only_policy() {
        let policy = Policy::new(NonZeroUsize::new(4).unwrap());
        assert_eq!(weighted_criteria_score("ab", &policy), 50.0);
        assert_eq!(weighted_criteria_score("abcdef", &policy), 100.0);
    }

    #[test]
    fn test_length_multiplier_all_classes() {
        let policy = Policy::default().algorithm(Algorithm::LengthMultiplier);
        let score = Algorithm::LengthMultiplier.score(&secret("Password1!"), &policy);
        assert_eq!(score.value(), 75.0);
        assert_eq!(Algorithm::LengthMultiplier.label(score), PasswordStrength::Good);
    }

    #[test]
    fn test_length_multiplier_short_password() {
        assert_eq!(length_multiplier_score("Ab1!x"), 0.0);
        assert_eq!(length_multiplier_score(""), 0.0);
    }

    #[test]
    fn test_length_multiplier_baseline_only() {
        assert_eq!(length_multiplier_score("abcdef"), 10.0);
        assert_eq!(length_multiplier_score("abcdefgh"), 20.0);
    }

    #[test]
    fn test_length_multiplier_clamped() {
        let long = "Aa1!".repeat(10);
        assert_eq!(length_multiplier_score(&long), 100.0);
        let score = PasswordScore::new(length_multiplier_score(&long));
        assert_eq!(Algorithm::LengthMultiplier.label(score), PasswordStrength::Strong);
    }

    #[test]
    fn test_length_multiplier_labels() {
        let algo = Algorithm::LengthMultiplier;
        assert_eq!(algo.label(PasswordScore::new(49.0)), PasswordStrength::Weak);
        assert_eq!(algo.label(PasswordScore::new(50.0)), PasswordStrength::Good);
        assert_eq!(algo.label(PasswordScore::new(79.0)), PasswordStrength::Good);
        assert_eq!(algo.label(PasswordScore::new(80.0)), PasswordStrength::Strong);
    }

    #[test]
    fn test_weighted_label_is_binary() {
        let algo = Algorithm::WeightedCriteria;
        assert_eq!(algo.label(PasswordScore::new(99.9)), PasswordStrength::Weak);
        assert_eq!(algo.label(PasswordScore::new(80.0)), PasswordStrength::Weak);
        assert_eq!(algo.label(PasswordScore::new(100.0)), PasswordStrength::Strong);
    }

    #[test]
    fn test_password_score_clamps() {
        assert_eq!(PasswordScore::new(-5.0).value(), 0.0);
        assert_eq!(PasswordScore::new(150.0).value(), 100.0);
        assert_eq!(PasswordScore::new(f64::NAN).value(), 0.0);
        assert_eq!(PasswordScore::new(25.0).fraction(), 0.25);
    }

    #[test]
    fn test_algorithm_display_round_trips() {
        for algo in [Algorithm::WeightedCriteria, Algorithm::LengthMultiplier] {
            assert_eq!(algo.to_string().parse::<Algorithm>(), Ok(algo));
        }
    }

    proptest! {
        #[test]
        fn prop_length_multiplier_bounded(password in ".{0,64}") {
            let score = length_multiplier_score(&password);
            prop_assert!((0.0..=100.0).contains(&score), "score {} for {:?}", score, password);
        }

        /// Adding a required character class never lowers the weighted score.
        #[test]
        fn prop_weighted_monotonic_in_criteria(
            base in "[a-z]{3,12}",
            min_length in 1usize..16,
            capital in any::<bool>(),
            numeric in any::<bool>(),
            special in any::<bool>(),
        ) {
            let policy = Policy::new(NonZeroUsize::new(min_length).unwrap())
                .capital_letter(capital)
                .numeric(numeric)
                .special_character(special);

            let mut password = base.clone();
            let mut previous = weighted_criteria_score(&password, &policy);
            prop_assert!((0.0..=100.0).contains(&previous));

            // Replace letters in place so the length stays fixed.
            for class_char in ['A', '7', '#'] {
                password.pop();
                password.insert(0, class_char);
                let current = weighted_criteria_score(&password, &policy);
                prop_assert!(current >= previous, "{} < {} for {:?}", current, previous, password);
                previous = current;
            }
        }
    }
}
