//! Pairwise alignment algorithms.

use log::debug;

use crate::alignment::{Aligner, Alignment, Cell, DPMatrix, Direction, fill_matrix_linear, traceback};
use crate::scoring::ScoringConfig;

/// Global alignment algorithm (Needleman-Wunsch).
#[derive(Debug, Clone)]
pub struct GlobalAligner {
    scoring: ScoringConfig,
}

impl Default for GlobalAligner {
    fn default() -> Self {
        Self::new(ScoringConfig::global())
    }
}

impl GlobalAligner {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    fn initialize_matrix(&self, n: usize, m: usize) -> DPMatrix {
        let mut matrix = DPMatrix::new(n + 1, m + 1);
        matrix.set(0, 0, Cell::new(0));

        for i in 1..=n {
            let score = self.scoring.gap_penalty(i);
            matrix.set(i, 0, Cell::with_direction(score, Direction::Up));
        }

        for j in 1..=m {
            let score = self.scoring.gap_penalty(j);
            matrix.set(0, j, Cell::with_direction(score, Direction::Left));
        }

        matrix
    }
}

impl Aligner for GlobalAligner {
    fn align(&self, seq1: &[u8], seq2: &[u8]) -> Alignment {
        let n = seq1.len();
        let m = seq2.len();
        debug!("global alignment: {}x{} matrix", n + 1, m + 1);

        let mut matrix = self.initialize_matrix(n, m);
        let fill = fill_matrix_linear(&mut matrix, seq1, seq2, &self.scoring, false);

        let (alignment1, alignment2) =
            traceback(&matrix, seq1, seq2, fill.best_position, |i, j, _| i == 0 && j == 0);

        debug!("global alignment: score {}", fill.best_score);

        Alignment {
            score: fill.best_score,
            alignment1,
            alignment2,
        }
    }
}


/// Local alignment algorithm (Smith-Waterman).
#[derive(Debug, Clone)]
pub struct LocalAligner {
    scoring: ScoringConfig,
}

impl Default for LocalAligner {
    fn default() -> Self {
        Self::new(ScoringConfig::local())
    }
}

impl LocalAligner {
    pub fn new(scoring: ScoringConfig) -> Self {
        Self { scoring }
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }

    fn initialize_matrix(&self, n: usize, m: usize) -> DPMatrix {
        // First row and column stay at 0: an alignment may start anywhere
        let mut matrix = DPMatrix::new(n + 1, m + 1);

        for i in 0..=n {
            matrix.set(i, 0, Cell::new(0));
        }
        for j in 0..=m {
            matrix.set(0, j, Cell::new(0));
        }

        matrix
    }
}

impl Aligner for LocalAligner {
    fn align(&self, seq1: &[u8], seq2: &[u8]) -> Alignment {
        let n = seq1.len();
        let m = seq2.len();
        debug!("local alignment: {}x{} matrix", n + 1, m + 1);

        let mut matrix = self.initialize_matrix(n, m);
        let fill = fill_matrix_linear(&mut matrix, seq1, seq2, &self.scoring, true);

        // Stops on the first zero cell, which also covers row and column 0
        let (alignment1, alignment2) = traceback(&matrix, seq1, seq2, fill.best_position, |i, j, cell| {
            i == 0 || j == 0 || cell.score <= 0
        });

        debug!(
            "local alignment: score {} ending at ({}, {})",
            fill.best_score, fill.best_position.0, fill.best_position.1
        );

        Alignment {
            score: fill.best_score,
            alignment1,
            alignment2,
        }
    }
}
