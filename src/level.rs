//! Strength levels - the fixed, ordered table shown by the strength meter.

use std::fmt;
use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LevelError {
    #[error("Strength rank out of range: {0} (expected 0..=5)")]
    RankOutOfRange(u8),
}

/// Password strength category.
///
/// Variants are declared weakest first, so the derived `Ord` is the
/// meter's ordering.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum StrengthLevel {
    VeryWeak,
    Weak,
    Fair,
    Good,
    Strong,
    VeryStrong,
}

impl StrengthLevel {
    /// All levels, weakest first. Indexed by rank.
    pub const ALL: [StrengthLevel; 6] = [
        StrengthLevel::VeryWeak,
        StrengthLevel::Weak,
        StrengthLevel::Fair,
        StrengthLevel::Good,
        StrengthLevel::Strong,
        StrengthLevel::VeryStrong,
    ];

    /// Highest rank in the table.
    pub const MAX_RANK: u8 = 5;

    /// Maps a raw criteria score to its level.
    ///
    /// Scores above [`Self::MAX_RANK`] saturate at `VeryStrong`.
    pub fn from_score(score: u8) -> Self {
        Self::ALL[usize::from(score.min(Self::MAX_RANK))]
    }

    /// Position in the table, `0` for `VeryWeak` up to `5` for `VeryStrong`.
    pub fn rank(self) -> u8 {
        self as u8
    }

    /// Display label.
    pub fn label(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "Very Weak",
            StrengthLevel::Weak => "Weak",
            StrengthLevel::Fair => "Fair",
            StrengthLevel::Good => "Good",
            StrengthLevel::Strong => "Strong",
            StrengthLevel::VeryStrong => "Very Strong",
        }
    }

    /// CSS colour token used to render the label.
    pub fn color(self) -> &'static str {
        match self {
            StrengthLevel::VeryWeak => "#f56565",
            StrengthLevel::Weak => "#f6ad55",
            StrengthLevel::Fair => "#f6e05e",
            StrengthLevel::Good => "#68d391",
            StrengthLevel::Strong => "#38a169",
            StrengthLevel::VeryStrong => "#276749",
        }
    }
}

impl TryFrom<u8> for StrengthLevel {
    type Error = LevelError;

    fn try_from(rank: u8) -> Result<Self, Self::Error> {
        Self::ALL
            .get(usize::from(rank))
            .copied()
            .ok_or(LevelError::RankOutOfRange(rank))
    }
}

impl fmt::Display for StrengthLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
