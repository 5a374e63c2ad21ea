use serde::{Deserialize, Serialize};

/// Validated output of one scoring round.
///
/// `overall_score` is always present and always within 0..=10: the field
/// that gates the whole pipeline must never be absent, so an unparseable
/// reply defaults it to 0 rather than dropping it. The list fields carry at
/// most one element under the current prompt contract, which caps strength,
/// weakness, and suggestions to a single quoted value each; they stay lists
/// so the contract can widen without a schema break.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisResult {
    /// Candidate name as reported by the oracle; empty when not extracted.
    pub name: String,
    /// Candidate email as reported by the oracle; empty when not extracted.
    pub email: String,
    /// Score on a 0..=10 scale; 0 when unparseable.
    pub overall_score: u8,
    pub strengths: Vec<String>,
    pub weaknesses: Vec<String>,
    pub suggestions: Vec<String>,
}

impl AnalysisResult {
    /// The fail-closed default: what an entirely unparseable reply yields.
    pub fn unparsed() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            overall_score: 0,
            strengths: Vec::new(),
            weaknesses: Vec::new(),
            suggestions: Vec::new(),
        }
    }
}
