//! Password strength meter and carousel selection logic
//!
//! This library provides the pure logic behind two screen widgets: a
//! password strength meter with configurable policy, and a carousel that
//! shows a circular window over its items.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! Read by [`Policy::from_env`]:
//!
//! - `PWD_MIN_LENGTH`: Minimum password length (default: 8)
//! - `PWD_REQUIRE_CAPITAL`: Require a capital letter (default: true)
//! - `PWD_REQUIRE_NUMERIC`: Require a digit (default: false)
//! - `PWD_REQUIRE_SPECIAL`: Require a special character (default: true)
//! - `PWD_ALGORITHM`: `weighted-criteria` (default) or `length-multiplier`
//!
//! # Example
//!
//! ```rust,no_run
//! use pwd_checker::{evaluate_password, select_window, Policy};
//! use secrecy::SecretString;
//!
//! let policy = Policy::from_env().expect("Invalid password policy");
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//!
//! #[cfg(feature = "async")]
//! let evaluation = evaluate_password(&password, &policy, None);
//!
//! #[cfg(not(feature = "async"))]
//! let evaluation = evaluate_password(&password, &policy);
//!
//! println!("Score: {:?}", evaluation.score);
//! println!("Strength: {}", evaluation.strength());
//!
//! let colors = ["red", "green", "blue", "yellow"];
//! let visible = select_window(&colors, 2, 3).expect("Carousel has items");
//! println!("Visible: {:?}", visible);
//! ```

// Internal modules
mod carousel;
mod evaluator;
mod policy;
mod scoring;
mod sections;

// Public API
pub use carousel::{
    advance, focal_index, retreat, select_window, wrap_index, Carousel, CarouselError,
    CarouselStyle, ItemEmphasis, DEFAULT_VISIBLE_COUNT,
};
pub use evaluator::{evaluate_password, PasswordEvaluation};
pub use policy::{Policy, PolicyError};
pub use scoring::{
    length_multiplier_score, weighted_criteria_score, Algorithm, PasswordScore, PasswordStrength,
};
pub use sections::{has_capital, has_digit, has_special, Criterion, Requirement, SPECIAL_CHARACTERS};

#[cfg(feature = "async")]
pub use evaluator::{evaluate_password_tx, DEBOUNCE};
