//! Scoring systems for sequence alignment.

use serde::{Deserialize, Serialize};

/// Linear scoring parameters: one substitution score for identical symbols,
/// one for differing symbols, and a constant per-position gap penalty.
///
/// Symbols are compared byte for byte. Callers normalize case beforehand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScoringConfig {
    pub match_score: i32,
    pub mismatch_score: i32,
    pub gap: i32,
}

impl ScoringConfig {
    /// Local (Smith-Waterman) parameters: match +2, mismatch -1, gap -1.
    pub const LOCAL: Self = Self::linear(2, -1, -1);

    /// Global (Needleman-Wunsch) parameters: match +1, mismatch -1, gap -2.
    pub const GLOBAL: Self = Self::linear(1, -1, -2);

    pub const fn linear(match_score: i32, mismatch_score: i32, gap: i32) -> Self {
        Self {
            match_score,
            mismatch_score,
            gap,
        }
    }

    pub const fn local() -> Self {
        Self::LOCAL
    }

    pub const fn global() -> Self {
        Self::GLOBAL
    }

    #[inline]
    pub fn substitution_score(&self, a: u8, b: u8) -> i32 {
        if a == b {
            self.match_score
        } else {
            self.mismatch_score
        }
    }

    /// Total penalty for a run of `length` gap positions.
    pub fn gap_penalty(&self, length: usize) -> i32 {
        self.gap.saturating_mul(length as i32)
    }
}
