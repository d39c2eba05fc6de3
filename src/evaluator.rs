//! Password strength evaluator - main scoring logic.

use secrecy::SecretString;

#[cfg(feature = "async")]
use tokio::sync::mpsc;

#[cfg(feature = "async")]
use tokio_util::sync::CancellationToken;

#[cfg(feature = "async")]
use crate::config::MeterConfig;

use crate::criteria::{CriteriaSet, Criterion};
use crate::level::StrengthLevel;

/// Outcome of scoring one password.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PasswordEvaluation {
    pub level: StrengthLevel,
    pub satisfied: CriteriaSet,
}

impl PasswordEvaluation {
    /// Number of satisfied criteria, in `0..=6`.
    pub fn score(&self) -> u8 {
        self.satisfied.len()
    }

    /// Criteria the password does not meet yet.
    pub fn missing(&self) -> impl Iterator<Item = Criterion> + '_ {
        self.satisfied.missing()
    }

    /// One piece of advice per unmet criterion.
    pub fn hints(&self) -> Vec<String> {
        self.missing().map(Criterion::hint).collect()
    }
}

/// Evaluates password strength and returns the detailed evaluation.
///
/// Every criterion is checked independently; the level is
/// `StrengthLevel::from_score(number of satisfied criteria)`. Total over all
/// inputs: the empty password scores 0 (`VeryWeak`).
pub fn evaluate_password_strength(password: &SecretString) -> PasswordEvaluation {
    let mut satisfied = CriteriaSet::new();

    for criterion in Criterion::ALL {
        let check = criterion.check();
        if check(password) {
            satisfied.insert(criterion);
        }
    }

    let level = StrengthLevel::from_score(satisfied.len());

    #[cfg(feature = "tracing")]
    tracing::trace!(
        "Password scored {} ({}), missing: {:?}",
        satisfied.len(),
        level,
        satisfied.missing().map(Criterion::name).collect::<Vec<_>>()
    );

    PasswordEvaluation { level, satisfied }
}

/// Scores a password into one of the six strength levels.
pub fn score_strength(password: &SecretString) -> StrengthLevel {
    evaluate_password_strength(password).level
}

/// Async version for keystroke-driven callers.
///
/// Waits `config.debounce`, then evaluates and sends the result via `tx`.
/// Nothing is sent if `token` is cancelled before or during the wait, which
/// is how a newer keystroke supersedes this one.
#[cfg(feature = "async")]
pub async fn evaluate_password_strength_tx(
    password: &SecretString,
    config: &MeterConfig,
    token: CancellationToken,
    tx: mpsc::Sender<PasswordEvaluation>,
) {
    #[cfg(feature = "tracing")]
    tracing::debug!("evaluation is about to start...");

    if token.is_cancelled() {
        #[cfg(feature = "tracing")]
        tracing::debug!("Evaluation cancelled before debounce");
        return;
    }

    tokio::select! {
        _ = token.cancelled() => {
            #[cfg(feature = "tracing")]
            tracing::debug!("Evaluation cancelled during debounce");
            return;
        }
        _ = tokio::time::sleep(config.debounce) => {}
    }

    let evaluation = evaluate_password_strength(password);

    if let Err(e) = tx.send(evaluation).await {
        #[cfg(feature = "tracing")]
        tracing::error!("Failed to send password evaluation result: {}", e);
        #[cfg(not(feature = "tracing"))]
        let _ = e;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secret(s: &str) -> SecretString {
        SecretString::new(s.to_string().into())
    }

    fn rank_of(s: &str) -> u8 {
        score_strength(&secret(s)).rank()
    }

    #[test]
    fn test_evaluate_empty_password() {
        let evaluation = evaluate_password_strength(&secret(""));
        assert_eq!(evaluation.level, StrengthLevel::VeryWeak);
        assert_eq!(evaluation.score(), 0);
        assert_eq!(evaluation.hints().len(), 6);
    }

    #[test]
    fn test_evaluate_lowercase_six_chars() {
        // length >= 6 and lowercase
        let evaluation = evaluate_password_strength(&secret("abcdef"));
        assert_eq!(evaluation.score(), 2);
        assert_eq!(evaluation.level, StrengthLevel::Fair);
    }

    #[test]
    fn test_evaluate_five_criteria_saturates() {
        // every criterion except length >= 10
        let evaluation = evaluate_password_strength(&secret("Abcdef1!"));
        assert_eq!(evaluation.score(), 5);
        assert_eq!(evaluation.level, StrengthLevel::VeryStrong);
        let missing: Vec<_> = evaluation.missing().collect();
        assert_eq!(missing, vec![Criterion::ExtendedLength]);
    }

    #[test]
    fn test_evaluate_all_criteria() {
        let evaluation = evaluate_password_strength(&secret("Abcdefghij1!"));
        assert_eq!(evaluation.score(), 6);
        assert_eq!(evaluation.level, StrengthLevel::VeryStrong);
        assert!(evaluation.hints().is_empty());
    }

    #[test]
    fn test_evaluate_each_rank_reachable() {
        assert_eq!(rank_of(""), 0);
        assert_eq!(rank_of("a"), 1);
        assert_eq!(rank_of("aB"), 2);
        assert_eq!(rank_of("aB3"), 3);
        assert_eq!(rank_of("aB3$"), 4);
        assert_eq!(rank_of("aB3$xy"), 5);
    }

    #[test]
    fn test_evaluate_length_boundaries() {
        assert_eq!(rank_of("aaaaa"), 1);
        assert_eq!(rank_of("aaaaaa"), 2);
        assert_eq!(rank_of("aaaaaaaaa"), 2);
        assert_eq!(rank_of("aaaaaaaaaa"), 3);
    }

    #[test]
    fn test_evaluate_non_ascii_counts_as_symbol() {
        let evaluation = evaluate_password_strength(&secret("é"));
        assert!(evaluation.satisfied.contains(Criterion::Symbol));
        assert!(!evaluation.satisfied.contains(Criterion::Lowercase));
    }

    #[test]
    fn test_appending_never_lowers_rank() {
        let bases = ["", "a", "abcdef", "ABCDEFGHI", "123456789", "Abcdef1!", "éé"];
        let extras = ['a', 'Z', '7', '#', ' ', 'ß', '😀'];

        for base in bases {
            let before = rank_of(base);
            for extra in extras {
                let extended = format!("{base}{extra}");
                let after = rank_of(&extended);
                assert!(
                    after >= before,
                    "Rank dropped from {} to {} when appending {:?}",
                    before,
                    after,
                    extra
                );
            }
        }
    }

    #[test]
    fn test_appending_new_class_raises_rank_below_cap() {
        assert!(rank_of("abcd1") > rank_of("abcd"));
        assert!(rank_of("ABCDa") > rank_of("ABCD"));
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        for pwd_str in ["", "a", "password", "MyPass123!", "VeryStrongPassword123!@#"] {
            let pwd = secret(pwd_str);
            assert_eq!(
                evaluate_password_strength(&pwd),
                evaluate_password_strength(&pwd)
            );
        }
    }

    #[test]
    fn test_score_strength_matches_evaluation() {
        let pwd = secret("MyPass123!");
        assert_eq!(score_strength(&pwd), evaluate_password_strength(&pwd).level);
    }
}
