//! JSON output serialization for alignment results.

use serde::Serialize;

use crate::alignment::{Alignment, GAP};
use crate::config::AlignmentMode;

/// Column counts derived from an alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct AlignmentSummary {
    pub length: usize,
    pub matches: usize,
    pub mismatches: usize,
    pub gaps: usize,
    /// Share of columns that are matches, in percent
    pub identity: f64,
}

impl From<&Alignment> for AlignmentSummary {
    fn from(alignment: &Alignment) -> Self {
        let mut summary = AlignmentSummary {
            length: alignment.len(),
            ..Default::default()
        };

        for (a, b) in alignment.columns() {
            if a == GAP || b == GAP {
                summary.gaps += 1;
            } else if a == b {
                summary.matches += 1;
            } else {
                summary.mismatches += 1;
            }
        }

        if summary.length > 0 {
            summary.identity = summary.matches as f64 / summary.length as f64 * 100.0;
        }
        summary
    }
}

/// Complete JSON output for an alignment result.
#[derive(Debug, Serialize)]
pub struct AlignmentOutput {
    pub algorithm: &'static str,
    pub algorithm_name: &'static str,
    pub scope: &'static str,
    pub score: i32,
    pub alignment1: String,
    pub alignment2: String,
    pub summary: AlignmentSummary,
}

impl AlignmentOutput {
    pub fn new(mode: AlignmentMode, alignment: &Alignment) -> Self {
        Self {
            algorithm: mode.id(),
            algorithm_name: mode.algorithm_name(),
            scope: mode.scope(),
            score: alignment.score,
            alignment1: alignment.alignment1.clone(),
            alignment2: alignment.alignment2.clone(),
            summary: AlignmentSummary::from(alignment),
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }
}

pub fn result_to_json(mode: AlignmentMode, alignment: &Alignment) -> Result<String, serde_json::Error> {
    AlignmentOutput::new(mode, alignment).to_json()
}
