//! Scoring criteria
//!
//! Each criterion is an independent yes/no rule; the strength score is the
//! number of rules a password satisfies.

mod length;
mod variety;

pub use length::{EXTENDED_LENGTH, MIN_LENGTH, extended_length_criterion, min_length_criterion};
pub use variety::{digit_criterion, lowercase_criterion, symbol_criterion, uppercase_criterion};

use secrecy::SecretString;

/// Signature shared by every criterion check.
pub type CriterionCheck = fn(&SecretString) -> bool;

/// One of the six scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Criterion {
    MinLength,
    ExtendedLength,
    Uppercase,
    Lowercase,
    Digit,
    Symbol,
}

impl Criterion {
    /// All criteria in evaluation order.
    pub const ALL: [Criterion; 6] = [
        Criterion::MinLength,
        Criterion::ExtendedLength,
        Criterion::Uppercase,
        Criterion::Lowercase,
        Criterion::Digit,
        Criterion::Symbol,
    ];

    /// The check implementing this criterion.
    pub fn check(self) -> CriterionCheck {
        match self {
            Criterion::MinLength => min_length_criterion,
            Criterion::ExtendedLength => extended_length_criterion,
            Criterion::Uppercase => uppercase_criterion,
            Criterion::Lowercase => lowercase_criterion,
            Criterion::Digit => digit_criterion,
            Criterion::Symbol => symbol_criterion,
        }
    }

    /// Short name, used in logs.
    pub fn name(self) -> &'static str {
        match self {
            Criterion::MinLength => "min_length",
            Criterion::ExtendedLength => "extended_length",
            Criterion::Uppercase => "uppercase",
            Criterion::Lowercase => "lowercase",
            Criterion::Digit => "digit",
            Criterion::Symbol => "symbol",
        }
    }

    /// Advice shown to the user while the criterion is unmet.
    pub fn hint(self) -> String {
        match self {
            Criterion::MinLength => format!("Use at least {} characters", MIN_LENGTH),
            Criterion::ExtendedLength => format!("Use {} or more characters", EXTENDED_LENGTH),
            Criterion::Uppercase => "Add an uppercase letter".to_string(),
            Criterion::Lowercase => "Add a lowercase letter".to_string(),
            Criterion::Digit => "Add a number".to_string(),
            Criterion::Symbol => "Add a symbol".to_string(),
        }
    }

    fn bit(self) -> u8 {
        1 << (self as u8)
    }
}

/// Set of satisfied criteria.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct CriteriaSet(u8);

impl CriteriaSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, criterion: Criterion) {
        self.0 |= criterion.bit();
    }

    pub fn contains(&self, criterion: Criterion) -> bool {
        self.0 & criterion.bit() != 0
    }

    /// Number of satisfied criteria, in `0..=6`.
    pub fn len(&self) -> u8 {
        self.0.count_ones() as u8
    }

    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Unsatisfied criteria in evaluation order.
    pub fn missing(&self) -> impl Iterator<Item = Criterion> + '_ {
        Criterion::ALL.into_iter().filter(|c| !self.contains(*c))
    }
}

impl FromIterator<Criterion> for CriteriaSet {
    fn from_iter<I: IntoIterator<Item = Criterion>>(iter: I) -> Self {
        let mut set = CriteriaSet::new();
        for criterion in iter {
            set.insert(criterion);
        }
        set
    }
}
