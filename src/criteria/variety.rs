//! Character variety criteria - uppercase, lowercase, digits, symbols.
//!
//! Classes are ASCII: a non-ASCII letter such as `é` counts as a symbol.

use secrecy::{ExposeSecret, SecretString};

pub fn uppercase_criterion(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_uppercase())
}

pub fn lowercase_criterion(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_lowercase())
}

pub fn digit_criterion(password: &SecretString) -> bool {
    password.expose_secret().chars().any(|c| c.is_ascii_digit())
}

/// Satisfied by any character outside `A-Z`, `a-z` and `0-9`.
pub fn symbol_criterion(password: &SecretString) -> bool {
    password
        .expose_secret()
        .chars()
        .any(|c| !c.is_ascii_alphanumeric())
}
