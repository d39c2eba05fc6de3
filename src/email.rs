//! Email format check.
//!
//! Purely syntactic: `local@domain.tld` where no part contains white space
//! or `@`. Deliverability is not checked.

use regex::Regex;
use std::sync::LazyLock;

/// Browser `\s`: Unicode white space without U+0085, plus U+FEFF.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^[^@\x{FEFF}[\s--\x{0085}]]+",
        r"@[^@\x{FEFF}[\s--\x{0085}]]+",
        r"\.[^@\x{FEFF}[\s--\x{0085}]]+$",
    ))
    .expect("email pattern is a valid regex")
});

/// Border colour for a field holding a malformed address.
pub const INVALID_BORDER_COLOR: &str = "#f56565";

/// Border colour for a field holding a well-formed address.
pub const VALID_BORDER_COLOR: &str = "#48bb78";

/// Returns `true` if `candidate` has the shape `local@domain.tld`.
///
/// Exactly one `@` is allowed. The domain may contain further dots and any
/// part may contain non-ASCII letters.
pub fn is_valid_email(candidate: &str) -> bool {
    EMAIL_PATTERN.is_match(candidate)
}

/// Verdict rendered on the email field after a change or blur.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmailFeedback {
    /// Nothing typed yet; the field is left unmarked.
    Empty,
    Invalid,
    Valid,
}

impl EmailFeedback {
    /// Border colour token, `None` for an empty field.
    pub fn border_color(self) -> Option<&'static str> {
        match self {
            EmailFeedback::Empty => None,
            EmailFeedback::Invalid => Some(INVALID_BORDER_COLOR),
            EmailFeedback::Valid => Some(VALID_BORDER_COLOR),
        }
    }

    /// Whether the field should carry the error styling.
    pub fn is_error(self) -> bool {
        self == EmailFeedback::Invalid
    }
}

/// Classifies the current content of an email field.
pub fn email_feedback(candidate: &str) -> EmailFeedback {
    if candidate.is_empty() {
        EmailFeedback::Empty
    } else if is_valid_email(candidate) {
        EmailFeedback::Valid
    } else {
        EmailFeedback::Invalid
    }
}
