//! Length criteria - the two length milestones.

use secrecy::{ExposeSecret, SecretString};

/// First length milestone.
pub const MIN_LENGTH: usize = 6;

/// Second length milestone.
pub const EXTENDED_LENGTH: usize = 10;

/// Length in UTF-16 code units, the unit browser form fields report.
fn field_length(password: &SecretString) -> usize {
    password.expose_secret().encode_utf16().count()
}

/// Satisfied when the password has at least [`MIN_LENGTH`] characters.
pub fn min_length_criterion(password: &SecretString) -> bool {
    field_length(password) >= MIN_LENGTH
}

/// Satisfied when the password has at least [`EXTENDED_LENGTH`] characters.
pub fn extended_length_criterion(password: &SecretString) -> bool {
    field_length(password) >= EXTENDED_LENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    #[test]
    fn test_min_length_boundary() {
        assert!(!min_length_criterion(&secret("abcde")));
        assert!(min_length_criterion(&secret("abcdef")));
    }

    #[test]
    fn test_extended_length_boundary() {
        assert!(!extended_length_criterion(&secret("abcdefghi")));
        assert!(extended_length_criterion(&secret("abcdefghij")));
    }

    #[test]
    fn test_empty_password_meets_neither() {
        let pwd = secret("");
        assert!(!min_length_criterion(&pwd));
        assert!(!extended_length_criterion(&pwd));
    }

    #[test]
    fn test_astral_characters_count_twice() {
        // Three emoji are six UTF-16 code units.
        assert!(min_length_criterion(&secret("😀😀😀")));
        assert!(!min_length_criterion(&secret("😀😀")));
    }
}
