//! Core alignment data structures and algorithm trait.

use log::trace;
use serde::{Deserialize, Serialize};

use crate::scoring::ScoringConfig;

/// Gap symbol used in aligned rows.
pub const GAP: char = '-';

/// Traceback direction recorded for each DP cell.
///
/// When several predecessors reach the same score the first one in
/// declaration order wins: `Diagonal`, then `Up`, then `Left`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Start of an alignment (origin, or a local cell floored at 0)
    #[default]
    None,
    /// Match or mismatch, from `(i-1, j-1)`
    Diagonal,
    /// Gap in the second sequence, from `(i-1, j)`
    Up,
    /// Gap in the first sequence, from `(i, j-1)`
    Left,
}

impl Direction {
    /// Picks the direction of the first candidate equal to `score`.
    #[inline]
    pub fn select(score: i32, diag: i32, up: i32, left: i32) -> Self {
        if score == diag {
            Direction::Diagonal
        } else if score == up {
            Direction::Up
        } else if score == left {
            Direction::Left
        } else {
            Direction::None
        }
    }
}

/// A cell in the dynamic programming matrix.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    pub score: i32,
    pub direction: Direction,
}

impl Cell {
    pub fn new(score: i32) -> Self {
        Self {
            score,
            direction: Direction::None,
        }
    }

    pub fn with_direction(score: i32, direction: Direction) -> Self {
        Self { score, direction }
    }
}

/// The dynamic programming matrix, holding scores and traceback tags.
#[derive(Debug, Clone)]
pub struct DPMatrix {
    pub rows: usize,
    pub cols: usize,
    pub cells: Vec<Cell>,
}

impl DPMatrix {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::default(); rows * cols],
        }
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> &Cell {
        &self.cells[i * self.cols + j]
    }

    #[inline]
    pub fn set(&mut self, i: usize, j: usize, cell: Cell) {
        self.cells[i * self.cols + j] = cell;
    }
}

/// The outcome of a pairwise alignment.
///
/// `alignment1` and `alignment2` always have the same number of characters,
/// one per column. Each is the corresponding input (or, for local alignment,
/// a substring of it) with [`GAP`] symbols inserted. Every input byte is one
/// symbol and becomes one character (`char::from`), so ASCII input reads back
/// unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Alignment {
    pub score: i32,
    pub alignment1: String,
    pub alignment2: String,
}

impl Alignment {
    /// Number of alignment columns.
    pub fn len(&self) -> usize {
        self.alignment1.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.alignment1.is_empty()
    }

    /// Iterates over the aligned columns as symbol pairs.
    pub fn columns(&self) -> impl Iterator<Item = (char, char)> + '_ {
        self.alignment1.chars().zip(self.alignment2.chars())
    }
}

/// Trait for sequence alignment algorithms.
///
/// Implementations are total: every pair of byte strings, including empty
/// ones, produces an alignment.
pub trait Aligner {
    fn align(&self, seq1: &[u8], seq2: &[u8]) -> Alignment;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct FillResult {
    pub best_score: i32,
    pub best_position: (usize, usize),
}

/// Fills the interior of an initialized matrix.
///
/// With `local` set, cell scores are floored at 0 and the first maximal cell
/// in row-major order is reported. Otherwise the bottom-right cell is.
pub(crate) fn fill_matrix_linear(
    matrix: &mut DPMatrix,
    seq1: &[u8],
    seq2: &[u8],
    scoring: &ScoringConfig,
    local: bool,
) -> FillResult {
    let n = seq1.len();
    let m = seq2.len();
    let gap = scoring.gap;

    let mut best_score = 0;
    let mut best_position = (0, 0);

    for i in 1..=n {
        for j in 1..=m {
            let s = scoring.substitution_score(seq1[i - 1], seq2[j - 1]);
            let diag_score = matrix.get(i - 1, j - 1).score.saturating_add(s);
            let up_score = matrix.get(i - 1, j).score.saturating_add(gap);
            let left_score = matrix.get(i, j - 1).score.saturating_add(gap);

            let mut cell_score = diag_score.max(up_score).max(left_score);
            if local {
                cell_score = cell_score.max(0);
            }

            let direction = Direction::select(cell_score, diag_score, up_score, left_score);
            matrix.set(i, j, Cell::with_direction(cell_score, direction));

            // Strict comparison keeps the first maximum in scan order.
            if local && cell_score > best_score {
                best_score = cell_score;
                best_position = (i, j);
            }
        }
    }

    if local {
        FillResult {
            best_score,
            best_position,
        }
    } else {
        FillResult {
            best_score: matrix.get(n, m).score,
            best_position: (n, m),
        }
    }
}

/// Walks traceback tags from `start` until `stop_condition` holds, building
/// the aligned rows with one character per consumed byte.
pub(crate) fn traceback(
    matrix: &DPMatrix,
    seq1: &[u8],
    seq2: &[u8],
    start: (usize, usize),
    stop_condition: impl Fn(usize, usize, &Cell) -> bool,
) -> (String, String) {
    let capacity = seq1.len() + seq2.len();
    let mut aln1: Vec<char> = Vec::with_capacity(capacity);
    let mut aln2: Vec<char> = Vec::with_capacity(capacity);

    let (mut i, mut j) = start;
    trace!("traceback start at ({}, {})", i, j);

    loop {
        let cell = matrix.get(i, j);
        if stop_condition(i, j, cell) {
            break;
        }

        match cell.direction {
            Direction::Diagonal => {
                aln1.push(char::from(seq1[i - 1]));
                aln2.push(char::from(seq2[j - 1]));
                i -= 1;
                j -= 1;
            }
            Direction::Up => {
                aln1.push(char::from(seq1[i - 1]));
                aln2.push(GAP);
                i -= 1;
            }
            Direction::Left => {
                aln1.push(GAP);
                aln2.push(char::from(seq2[j - 1]));
                j -= 1;
            }
            Direction::None => break,
        }
    }

    trace!("traceback stop at ({}, {})", i, j);

    (aln1.into_iter().rev().collect(), aln2.into_iter().rev().collect())
}
