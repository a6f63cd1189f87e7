//! Password evaluator - runs the requirement sections and scores the password.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

use crate::policy::Policy;
use crate::scoring::{Algorithm, PasswordScore, PasswordStrength};
use crate::sections::{
    capital_section, length_section, numeric_section, special_section, Requirement, SectionResult,
};

/// Delay before an async evaluation starts, so that fast typing only
/// evaluates the last keystroke.
#[cfg(feature = "async")]
pub const DEBOUNCE: std::time::Duration = std::time::Duration::from_millis(300);

/// Outcome of evaluating one password against a policy.
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordEvaluation {
    /// `None` if the evaluation was cancelled.
    pub score: Option<PasswordScore>,
    pub algorithm: Algorithm,
    /// Enabled requirements in display order.
    pub requirements: Vec<Requirement>,
}

impl PasswordEvaluation {
    /// Strength label derived through the algorithm that produced the score.
    pub fn strength(&self) -> PasswordStrength {
        match self.score {
            Some(score) => self.algorithm.label(score),
            None => PasswordStrength::NotEvaluated,
        }
    }

    /// Requirements that are enabled but not yet met.
    pub fn unmet(&self) -> impl Iterator<Item = &Requirement> {
        self.requirements.iter().filter(|r| !r.satisfied)
    }
}

/// Evaluates password strength against `policy`.
///
/// # Arguments
/// * `password` - The password to evaluate
/// * `policy` - Enabled criteria and scoring algorithm
/// * `token` - Optional cancellation token (async feature only)
///
/// # Returns
/// A `PasswordEvaluation` with score and requirement states.
pub fn evaluate_password(
    password: &SecretString,
    policy: &Policy,
    #[cfg(feature = "async")] token: Option<CancellationToken>,
) -> PasswordEvaluation {
    let mut requirements = Vec::new();

    let sections: [(&str, fn(&SecretString, &Policy) -> SectionResult); 4] = [
        ("length", length_section),
        ("capital", capital_section),
        ("numeric", numeric_section),
        ("special", special_section),
    ];

    for (_section_name, section_fn) in sections {
        #[cfg(feature = "async")]
        {
            if token.as_ref().is_some_and(|t| t.is_cancelled()) {
                #[cfg(feature = "tracing")]
                tracing::debug!("Password evaluation cancelled before section: {}", _section_name);
                return PasswordEvaluation {
                    score: None,
                    algorithm: policy.algorithm,
                    requirements,
                };
            }
        }

        if let Some(requirement) = section_fn(password, policy) {
            requirements.push(requirement);
        }
    }

    let score = policy.algorithm.score(password, policy);

    #[cfg(feature = "tracing")]
    tracing::debug!(
        "Password evaluated with {}: score {}, {} unmet requirement(s)",
        policy.algorithm,
        score,
        requirements.iter().filter(|r| !r.satisfied).count()
    );

    PasswordEvaluation {
        score: Some(score),
        algorithm: policy.algorithm,
        requirements,
    }
}

/// Async version that debounces, then sends the evaluation via channel.
///
/// The receiver typically drives the meter's progress-bar animation.
#[cfg(feature = "async")]
pub async fn evaluate_password_tx(
    password: &SecretString,
    policy: &Policy,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::info!("evaluation is about to start...");

    tokio::time::sleep(DEBOUNCE).await;
    let evaluation = evaluate_password(password, policy, Some(token));

    if let Err(_e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", _e);
    }
}
