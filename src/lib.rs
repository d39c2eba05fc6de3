//! Credential feedback library
//!
//! This library provides the decision logic behind an interactive login
//! form: a six-rule password strength meter and an email format check.
//! Rendering the results is left to the caller.
//!
//! # Features
//!
//! - `async` (default): Enables debounced async evaluation with cancellation support
//! - `tracing`: Enables logging via tracing crate
//!
//! # Environment Variables
//!
//! - `CREDENTIAL_METER_DEBOUNCE_MS`: Debounce delay for async evaluation
//!   (default: `300`)
//!
//! # Example
//!
//! ```rust
//! use credential_meter::{is_valid_email, score_strength, StrengthLevel};
//! use secrecy::SecretString;
//!
//! assert!(is_valid_email("user@example.com"));
//!
//! let password = SecretString::new("MyP@ssw0rd!".to_string().into());
//! let level = score_strength(&password);
//!
//! assert_eq!(level, StrengthLevel::VeryStrong);
//! println!("{} ({})", level.label(), level.color());
//! ```

// Internal modules
mod config;
mod criteria;
mod email;
mod evaluator;
mod level;

// Public API
pub use config::{ConfigError, DEBOUNCE_ENV, DEFAULT_DEBOUNCE, MeterConfig};
pub use criteria::{CriteriaSet, Criterion, EXTENDED_LENGTH, MIN_LENGTH};
pub use email::{
    EmailFeedback, INVALID_BORDER_COLOR, VALID_BORDER_COLOR, email_feedback, is_valid_email,
};
pub use evaluator::{PasswordEvaluation, evaluate_password_strength, score_strength};
pub use level::{LevelError, StrengthLevel};

#[cfg(feature = "async")]
pub use evaluator::evaluate_password_strength_tx;
