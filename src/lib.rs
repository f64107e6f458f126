//! pairwise-align: Smith-Waterman and Needleman-Wunsch pairwise alignment
//!
//! The crate builds as a WebAssembly plugin exposing JSON entry points and as
//! a plain Rust library.
//!
//! ```
//! use pairwise_align::{align_global, align_local};
//!
//! let local = align_local(b"ACACACTA", b"AGCACACA");
//! assert_eq!(local.score, 12);
//! assert_eq!(local.alignment1, "A-CACACTA");
//! assert_eq!(local.alignment2, "AGCACAC-A");
//!
//! let global = align_global(b"", b"ACG");
//! assert_eq!(global.score, -6);
//! assert_eq!(global.alignment1, "---");
//! ```

pub mod aligners;
pub mod alignment;
pub mod config;
pub mod error;
pub mod output;
pub mod scoring;
pub mod stats;

use log::debug;
#[cfg(target_arch = "wasm32")]
use wasm_minimal_protocol::*;

// Re-export main types
pub use aligners::{GlobalAligner, LocalAligner};
pub use alignment::{Aligner, Alignment, Cell, DPMatrix, Direction, GAP};
pub use config::{AlignConfig, AlignmentMode, StatsConfig};
pub use error::AlignmentError;
pub use output::{AlignmentOutput, AlignmentSummary};
pub use scoring::ScoringConfig;
pub use stats::{MotifMatch, ResidueCategory, SequenceKind, SequenceStats};

use error::decode_utf8;

#[cfg(target_arch = "wasm32")]
initiate_protocol!();

/// Local alignment (Smith-Waterman) with match +2, mismatch -1, gap -1.
///
/// Inputs are compared byte for byte; uppercase them first.
pub fn align_local(seq1: &[u8], seq2: &[u8]) -> Alignment {
    LocalAligner::default().align(seq1, seq2)
}

/// Global alignment (Needleman-Wunsch) with match +1, mismatch -1, gap -2.
///
/// Inputs are compared byte for byte; uppercase them first.
pub fn align_global(seq1: &[u8], seq2: &[u8]) -> Alignment {
    GlobalAligner::default().align(seq1, seq2)
}

/// Decodes, validates and aligns host input, returning JSON bytes of
/// [`AlignmentOutput`].
pub fn run_alignment(seq1: &[u8], seq2: &[u8], config: &[u8]) -> error::Result<Vec<u8>> {
    let seq1 = decode_utf8("seq1", seq1)?;
    let seq2 = decode_utf8("seq2", seq2)?;

    let config = AlignConfig::from_json(config)?;
    let mode = config.validate()?;
    let seq1 = config.prepare("seq1", seq1)?;
    let seq2 = config.prepare("seq2", seq2)?;

    debug!("running {} alignment", mode.algorithm_name());
    let alignment = mode.align(&seq1, &seq2);

    output::result_to_json(mode, &alignment)
        .map(String::into_bytes)
        .map_err(AlignmentError::Serialization)
}

/// Computes [`SequenceStats`] for host input, returning JSON bytes.
pub fn run_sequence_stats(sequence: &[u8], config: &[u8]) -> error::Result<Vec<u8>> {
    let sequence = decode_utf8("sequence", sequence)?;
    let kind = StatsConfig::from_json(config)?.validate()?;

    let stats = stats::sequence_stats(sequence, kind);
    serde_json::to_vec(&stats).map_err(AlignmentError::Serialization)
}

/// Searches `sequence` for `pattern`, returning JSON bytes with the matches.
pub fn run_find_motif(sequence: &[u8], pattern: &[u8]) -> error::Result<Vec<u8>> {
    let sequence = decode_utf8("sequence", sequence)?;
    let pattern = decode_utf8("pattern", pattern)?.trim();
    if pattern.is_empty() {
        return Err(AlignmentError::EmptyPattern);
    }

    let matches = stats::find_motif(sequence, pattern);
    let result = serde_json::json!({ "matches": matches });
    serde_json::to_vec(&result).map_err(AlignmentError::Serialization)
}

/// Describes the available alignment algorithms as JSON bytes.
pub fn run_list_algorithms() -> error::Result<Vec<u8>> {
    let algorithms: Vec<_> = AlignmentMode::ALL
        .iter()
        .map(|mode| {
            serde_json::json!({
                "id": mode.id(),
                "name": mode.algorithm_name(),
                "scope": mode.scope(),
            })
        })
        .collect();
    let result = serde_json::json!({ "algorithms": algorithms });
    serde_json::to_vec(&result).map_err(AlignmentError::Serialization)
}

#[cfg(target_arch = "wasm32")]
fn to_host_error(e: AlignmentError) -> String {
    log::warn!("rejected plugin call: {}", e);
    e.to_string()
}

/// WASM entry point for sequence alignment (supports both global and local).
///
/// # Arguments
/// * `seq1` - First sequence as UTF-8 bytes
/// * `seq2` - Second sequence as UTF-8 bytes
/// * `config` - JSON-encoded configuration object, e.g. `{"mode": "local"}`
///
/// # Returns
/// JSON bytes of AlignmentOutput or an error string.
#[cfg(target_arch = "wasm32")]
#[wasm_func]
pub fn align(seq1: &[u8], seq2: &[u8], config: &[u8]) -> Result<Vec<u8>, String> {
    run_alignment(seq1, seq2, config).map_err(to_host_error)
}

/// WASM entry point for sequence statistics.
///
/// # Arguments
/// * `sequence` - Sequence as UTF-8 bytes
/// * `config` - JSON-encoded configuration, e.g. `{"kind": "protein"}`
#[cfg(target_arch = "wasm32")]
#[wasm_func]
pub fn sequence_stats(sequence: &[u8], config: &[u8]) -> Result<Vec<u8>, String> {
    run_sequence_stats(sequence, config).map_err(to_host_error)
}

/// WASM entry point for case-insensitive motif search.
#[cfg(target_arch = "wasm32")]
#[wasm_func]
pub fn find_motif(sequence: &[u8], pattern: &[u8]) -> Result<Vec<u8>, String> {
    run_find_motif(sequence, pattern).map_err(to_host_error)
}

/// WASM entry point for listing the available alignment algorithms.
///
/// # Returns
/// JSON bytes with an array of `{id, name, scope}` objects.
#[cfg(target_arch = "wasm32")]
#[wasm_func]
pub fn list_algorithms() -> Result<Vec<u8>, String> {
    run_list_algorithms().map_err(to_host_error)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;

    fn parse(bytes: Vec<u8>) -> Value {
        serde_json::from_slice(&bytes).unwrap()
    }

    #[test]
    fn test_run_alignment_global() {
        let out = parse(run_alignment(b"gattaca", b"GCATGCU", br#"{"mode": "global"}"#).unwrap());

        assert_eq!(out["algorithm"], "needleman-wunsch");
        assert_eq!(out["score"], -1);
        assert_eq!(out["alignment1"], "GATTACA");
        assert_eq!(out["alignment2"], "GCATGCU");
        assert_eq!(out["summary"]["matches"], 3);
    }

    #[test]
    fn test_run_alignment_local() {
        let out = parse(
            run_alignment(b"ACACACTA", b"AGCACACA", br#"{"mode": "smith-waterman"}"#).unwrap(),
        );

        assert_eq!(out["scope"], "local");
        assert_eq!(out["score"], 12);
        assert_eq!(out["alignment1"], "A-CACACTA");
    }

    #[test]
    fn test_run_alignment_without_case_normalization() {
        let config = br#"{"mode": "local", "normalize_case": false}"#;
        let out = parse(run_alignment(b"acgt", b"ACGT", config).unwrap());
        assert_eq!(out["score"], 0);
    }

    #[test]
    fn test_run_alignment_rejects_missing_sequence() {
        let err = run_alignment(b"ACGT", b"", br#"{"mode": "local"}"#).unwrap_err();
        assert!(matches!(err, AlignmentError::MissingSequence("seq2")));
    }

    #[test]
    fn test_run_alignment_rejects_bad_input() {
        let err = run_alignment(&[0xc3, 0x28], b"ACGT", br#"{"mode": "local"}"#).unwrap_err();
        assert!(matches!(err, AlignmentError::InvalidUtf8 { field: "seq1", .. }));

        let err = run_alignment(b"A", b"A", br#"{"mode": "semiglobal"}"#).unwrap_err();
        assert!(matches!(err, AlignmentError::UnknownMode(_)));

        let err = run_alignment(b"A", b"A", b"not json").unwrap_err();
        assert!(matches!(err, AlignmentError::InvalidConfig(_)));
    }

    #[test]
    fn test_run_alignment_rejects_non_ascii() {
        let config = br#"{"mode": "global"}"#;

        let err = run_alignment("Ñ".as_bytes(), b"", config).unwrap_err();
        assert!(matches!(
            err,
            AlignmentError::NonAsciiSequence {
                field: "seq1",
                symbol: 'Ñ'
            }
        ));

        let err = run_alignment(b"E", "é".as_bytes(), config).unwrap_err();
        assert!(matches!(
            err,
            AlignmentError::NonAsciiSequence {
                field: "seq2",
                symbol: 'é'
            }
        ));
    }

    #[test]
    fn test_run_sequence_stats() {
        let out = parse(run_sequence_stats(b"GGCC", br#"{"kind": "dna"}"#).unwrap());
        assert_eq!(out["length"], 4);
        assert_eq!(out["gc_content"], 100.0);
        assert_eq!(out["composition"]["G"], 2);

        let out = parse(run_sequence_stats(b"MK", br#"{"kind": "protein"}"#).unwrap());
        assert!(out.get("gc_content").is_none());

        let out = parse(run_sequence_stats("ñ".as_bytes(), b"").unwrap());
        assert_eq!(out["length"], 1);
        assert_eq!(out["composition"]["Ñ"], 1);
    }

    #[test]
    fn test_run_find_motif() {
        let out = parse(run_find_motif(b"GATTACATTA", b"tta").unwrap());
        let matches = out["matches"].as_array().unwrap();
        assert_eq!(matches.len(), 2);
        assert_eq!(matches[0]["start"], 2);
        assert_eq!(matches[1]["end"], 9);

        let err = run_find_motif(b"ACGT", b" ").unwrap_err();
        assert!(matches!(err, AlignmentError::EmptyPattern));
    }

    #[test]
    fn test_list_algorithms() {
        let out = parse(run_list_algorithms().unwrap());
        let algorithms = out["algorithms"].as_array().unwrap();
        assert_eq!(algorithms.len(), 2);
        assert_eq!(algorithms[0]["name"], "Smith-Waterman");
        assert_eq!(algorithms[1]["scope"], "global");
    }
}
