//! Basic sequence statistics: composition, GC content, molecular weight,
//! residue categories and motif search.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    Dna,
    Protein,
}

impl SequenceKind {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "dna" | "nucleotide" => Some(Self::Dna),
            "protein" | "amino" => Some(Self::Protein),
            _ => None,
        }
    }
}

/// Approximate nucleotide weights in daltons.
const DNA_WEIGHTS: [(char, f64); 4] = [('A', 313.2), ('T', 304.2), ('G', 329.2), ('C', 289.2)];

/// Approximate amino acid weights in daltons.
const PROTEIN_WEIGHTS: [(char, f64); 20] = [
    ('A', 89.1),
    ('R', 174.2),
    ('N', 132.1),
    ('D', 133.1),
    ('C', 121.2),
    ('E', 147.1),
    ('Q', 146.2),
    ('G', 75.1),
    ('H', 155.2),
    ('I', 131.2),
    ('L', 131.2),
    ('K', 146.2),
    ('M', 149.2),
    ('F', 165.2),
    ('P', 115.1),
    ('S', 105.1),
    ('T', 119.1),
    ('W', 204.2),
    ('Y', 181.2),
    ('V', 117.1),
];

/// Weight of a single residue, or 0 for symbols outside the alphabet.
pub fn residue_weight(symbol: char, kind: SequenceKind) -> f64 {
    let table: &[(char, f64)] = match kind {
        SequenceKind::Dna => &DNA_WEIGHTS,
        SequenceKind::Protein => &PROTEIN_WEIGHTS,
    };
    let symbol = symbol.to_ascii_uppercase();
    table
        .iter()
        .find(|(s, _)| *s == symbol)
        .map_or(0.0, |(_, w)| *w)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResidueCategory {
    Purine,
    Pyrimidine,
    Basic,
    Acidic,
    Polar,
    Hydrophobic,
    Special,
}

/// Physico-chemical class of a base or residue, for color-coding by the host.
pub fn residue_category(symbol: char, kind: SequenceKind) -> Option<ResidueCategory> {
    use ResidueCategory::*;

    match (kind, symbol.to_ascii_uppercase()) {
        (SequenceKind::Dna, 'A' | 'G') => Some(Purine),
        (SequenceKind::Dna, 'T' | 'C') => Some(Pyrimidine),
        (SequenceKind::Protein, 'R' | 'H' | 'K') => Some(Basic),
        (SequenceKind::Protein, 'D' | 'E') => Some(Acidic),
        (SequenceKind::Protein, 'S' | 'T' | 'N' | 'Q') => Some(Polar),
        (SequenceKind::Protein, 'A' | 'V' | 'L' | 'I' | 'M' | 'F' | 'Y' | 'W') => Some(Hydrophobic),
        (SequenceKind::Protein, 'P' | 'G' | 'C') => Some(Special),
        _ => None,
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SequenceStats {
    pub kind: SequenceKind,
    pub length: usize,
    pub composition: BTreeMap<char, usize>,
    pub percentages: BTreeMap<char, f64>,
    /// GC percentage; only reported for DNA
    #[serde(skip_serializing_if = "Option::is_none")]
    pub gc_content: Option<f64>,
    pub molecular_weight: f64,
}

/// Computes statistics over the uppercased sequence, one entry per
/// character. Whitespace is ignored.
pub fn sequence_stats(sequence: &str, kind: SequenceKind) -> SequenceStats {
    let mut composition: BTreeMap<char, usize> = BTreeMap::new();
    for c in sequence.chars().filter(|c| !c.is_whitespace()).flat_map(char::to_uppercase) {
        *composition.entry(c).or_insert(0) += 1;
    }

    let length: usize = composition.values().sum();
    let percent = |count: usize| {
        if length == 0 {
            0.0
        } else {
            count as f64 / length as f64 * 100.0
        }
    };

    let percentages = composition.iter().map(|(&c, &n)| (c, percent(n))).collect();

    let gc_content = match kind {
        SequenceKind::Dna => {
            let gc = composition.get(&'G').copied().unwrap_or(0) + composition.get(&'C').copied().unwrap_or(0);
            Some(percent(gc))
        }
        SequenceKind::Protein => None,
    };

    let molecular_weight = composition
        .iter()
        .map(|(&c, &n)| residue_weight(c, kind) * n as f64)
        .sum();

    SequenceStats {
        kind,
        length,
        composition,
        percentages,
        gc_content,
        molecular_weight,
    }
}

/// A motif occurrence, in character positions; `end` is inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MotifMatch {
    pub start: usize,
    pub end: usize,
    pub text: String,
}

/// Finds all (possibly overlapping) case-insensitive occurrences of
/// `pattern`. Matched text keeps the sequence's original casing.
pub fn find_motif(sequence: &str, pattern: &str) -> Vec<MotifMatch> {
    let sequence: Vec<char> = sequence.chars().collect();
    let pattern: Vec<char> = pattern.chars().collect();
    if pattern.is_empty() || pattern.len() > sequence.len() {
        return Vec::new();
    }

    sequence
        .windows(pattern.len())
        .enumerate()
        .filter(|(_, window)| window.iter().zip(&pattern).all(|(&a, &b)| same_symbol(a, b)))
        .map(|(start, window)| MotifMatch {
            start,
            end: start + pattern.len() - 1,
            text: window.iter().collect(),
        })
        .collect()
}

fn same_symbol(a: char, b: char) -> bool {
    a == b || a.to_uppercase().eq(b.to_uppercase())
}
