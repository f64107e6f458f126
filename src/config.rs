//! Plugin configuration, deserialized from JSON.

use serde::Deserialize;

use crate::aligners::{GlobalAligner, LocalAligner};
use crate::alignment::{Aligner, Alignment};
use crate::error::{AlignmentError, Result};
use crate::stats::SequenceKind;

/// Which alignment algorithm to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlignmentMode {
    /// Smith-Waterman
    Local,
    /// Needleman-Wunsch
    Global,
}

impl AlignmentMode {
    pub const ALL: [AlignmentMode; 2] = [AlignmentMode::Local, AlignmentMode::Global];

    /// Parses a mode name. Accepts the scope ("local", "global") or the
    /// algorithm name ("smith-waterman", "needleman-wunsch"), in any case.
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "local" | "smith-waterman" | "smith_waterman" => Some(Self::Local),
            "global" | "needleman-wunsch" | "needleman_wunsch" => Some(Self::Global),
            _ => None,
        }
    }

    pub fn id(&self) -> &'static str {
        match self {
            Self::Local => "smith-waterman",
            Self::Global => "needleman-wunsch",
        }
    }

    pub fn algorithm_name(&self) -> &'static str {
        match self {
            Self::Local => "Smith-Waterman",
            Self::Global => "Needleman-Wunsch",
        }
    }

    pub fn scope(&self) -> &'static str {
        match self {
            Self::Local => "local",
            Self::Global => "global",
        }
    }

    /// Aligner with this mode's fixed scoring parameters.
    pub fn aligner(&self) -> Box<dyn Aligner> {
        match self {
            Self::Local => Box::new(LocalAligner::default()),
            Self::Global => Box::new(GlobalAligner::default()),
        }
    }

    pub fn align(&self, seq1: &[u8], seq2: &[u8]) -> Alignment {
        self.aligner().align(seq1, seq2)
    }
}

fn default_true() -> bool {
    true
}

/// Configuration for the `align` entry point.
#[derive(Debug, Deserialize)]
pub struct AlignConfig {
    pub mode: String,
    /// Uppercase both sequences before aligning
    #[serde(default = "default_true")]
    pub normalize_case: bool,
}

impl AlignConfig {
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        serde_json::from_slice(bytes).map_err(AlignmentError::InvalidConfig)
    }

    pub fn validate(&self) -> Result<AlignmentMode> {
        AlignmentMode::from_str(&self.mode).ok_or_else(|| AlignmentError::UnknownMode(self.mode.clone()))
    }

    /// Turns host text into engine input.
    ///
    /// Surrounding whitespace (including a trailing newline) is trimmed
    /// first, so it is neither aligned nor counted as content: an empty or
    /// whitespace-only sequence is rejected with
    /// [`AlignmentError::MissingSequence`]. Sequences must be ASCII, since the
    /// engine scores one byte per symbol; anything else is rejected with
    /// [`AlignmentError::NonAsciiSequence`]. The result is uppercased unless
    /// `normalize_case` is off.
    pub fn prepare(&self, field: &'static str, sequence: &str) -> Result<Vec<u8>> {
        let trimmed = sequence.trim();
        if trimmed.is_empty() {
            return Err(AlignmentError::MissingSequence(field));
        }
        if let Some(symbol) = trimmed.chars().find(|c| !c.is_ascii()) {
            return Err(AlignmentError::NonAsciiSequence { field, symbol });
        }
        if self.normalize_case {
            Ok(trimmed.to_ascii_uppercase().into_bytes())
        } else {
            Ok(trimmed.as_bytes().to_vec())
        }
    }
}

fn default_kind() -> String {
    "dna".to_string()
}

/// Configuration for the `sequence_stats` entry point.
#[derive(Debug, Deserialize)]
pub struct StatsConfig {
    #[serde(default = "default_kind")]
    pub kind: String,
}

impl StatsConfig {
    /// Empty input is treated as `{}`.
    pub fn from_json(bytes: &[u8]) -> Result<Self> {
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Self { kind: default_kind() });
        }
        serde_json::from_slice(bytes).map_err(AlignmentError::InvalidConfig)
    }

    pub fn validate(&self) -> Result<SequenceKind> {
        SequenceKind::from_str(&self.kind).ok_or_else(|| AlignmentError::UnknownKind(self.kind.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mode_aliases() {
        assert_eq!(AlignmentMode::from_str("local"), Some(AlignmentMode::Local));
        assert_eq!(AlignmentMode::from_str("Smith-Waterman"), Some(AlignmentMode::Local));
        assert_eq!(AlignmentMode::from_str("GLOBAL"), Some(AlignmentMode::Global));
        assert_eq!(AlignmentMode::from_str("needleman-wunsch"), Some(AlignmentMode::Global));
        assert_eq!(AlignmentMode::from_str("semiglobal"), None);
    }

    #[test]
    fn test_mode_dispatch() {
        assert_eq!(AlignmentMode::Local.align(b"AAAAA", b"TTTTT").score, 0);
        assert_eq!(AlignmentMode::Global.align(b"AAAAA", b"TTTTT").score, -5);
    }

    #[test]
    fn test_align_config_defaults() {
        let config = AlignConfig::from_json(br#"{"mode": "global"}"#).unwrap();
        assert!(config.normalize_case);
        assert_eq!(config.validate().unwrap(), AlignmentMode::Global);
    }

    #[test]
    fn test_align_config_unknown_mode() {
        let config = AlignConfig::from_json(br#"{"mode": "banded"}"#).unwrap();
        assert!(matches!(config.validate(), Err(AlignmentError::UnknownMode(m)) if m == "banded"));
    }

    #[test]
    fn test_align_config_invalid_json() {
        let res = AlignConfig::from_json(b"{mode: local}");
        assert!(matches!(res, Err(AlignmentError::InvalidConfig(_))));
    }

    #[test]
    fn test_prepare_normalizes_case() {
        let config = AlignConfig::from_json(br#"{"mode": "local"}"#).unwrap();
        assert_eq!(config.prepare("seq1", " acgT\n").unwrap(), b"ACGT".to_vec());

        let config =
            AlignConfig::from_json(br#"{"mode": "local", "normalize_case": false}"#).unwrap();
        assert_eq!(config.prepare("seq1", "acgT").unwrap(), b"acgT".to_vec());
    }

    #[test]
    fn test_prepare_rejects_empty() {
        let config = AlignConfig::from_json(br#"{"mode": "local"}"#).unwrap();
        let err = config.prepare("seq2", "  \n").unwrap_err();
        assert!(matches!(err, AlignmentError::MissingSequence("seq2")));
    }

    #[test]
    fn test_prepare_rejects_non_ascii() {
        let config = AlignConfig::from_json(br#"{"mode": "global"}"#).unwrap();
        let err = config.prepare("seq1", "ACÉT").unwrap_err();
        assert!(matches!(
            err,
            AlignmentError::NonAsciiSequence {
                field: "seq1",
                symbol: 'É'
            }
        ));

        // Only the trimmed text is checked
        assert_eq!(config.prepare("seq2", "\tacgt ").unwrap(), b"ACGT".to_vec());
    }

    #[test]
    fn test_stats_config() {
        assert_eq!(StatsConfig::from_json(b"").unwrap().validate().unwrap(), SequenceKind::Dna);
        let config = StatsConfig::from_json(br#"{"kind": "Protein"}"#).unwrap();
        assert_eq!(config.validate().unwrap(), SequenceKind::Protein);
        let config = StatsConfig::from_json(br#"{"kind": "rna"}"#).unwrap();
        assert!(matches!(config.validate(), Err(AlignmentError::UnknownKind(_))));
    }
}
