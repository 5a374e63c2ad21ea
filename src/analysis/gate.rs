//! Submission gating: converts a numeric score into an eligibility decision
//! and a qualitative bucket. Pure functions of their inputs, no side effects.

use serde::{Deserialize, Serialize};

use crate::analysis::result::AnalysisResult;

/// Minimum score (on the 0..=10 scale) for an application to be submittable.
pub const SUBMISSION_THRESHOLD: u8 = 5;

/// Whether the analysis runs against a specific job posting or as a general
/// advisory review with no posting attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateContext {
    JobApplication,
    Advisory,
}

/// Submission eligibility. Advisory analyses report `NotApplicable` rather
/// than `Ineligible`: "not tested" is not the same as "failed the test".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Eligibility {
    Eligible,
    Ineligible,
    NotApplicable,
}

impl Eligibility {
    pub fn is_eligible(self) -> bool {
        matches!(self, Eligibility::Eligible)
    }
}

/// Qualitative range for a percent score. Boundaries are inclusive on the
/// lower bound of each named range and are reproduced from the source
/// product verbatim; do not renormalize them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScoreBucket {
    Poor,
    BelowThreshold,
    Good,
    VeryGood,
    Excellent,
}

impl ScoreBucket {
    /// `< 31` poor, `31..=49` below-threshold, `50..=70` good,
    /// `71..=85` very-good, `86..=100` excellent.
    pub fn from_percent(percent: u8) -> Self {
        match percent {
            0..=30 => ScoreBucket::Poor,
            31..=49 => ScoreBucket::BelowThreshold,
            50..=70 => ScoreBucket::Good,
            71..=85 => ScoreBucket::VeryGood,
            _ => ScoreBucket::Excellent,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScoreBucket::Poor => "poor",
            ScoreBucket::BelowThreshold => "below-threshold",
            ScoreBucket::Good => "good",
            ScoreBucket::VeryGood => "very-good",
            ScoreBucket::Excellent => "excellent",
        }
    }
}

/// The gate's output. Derived purely from `AnalysisResult::overall_score`
/// and the context; never persisted independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionDecision {
    pub eligibility: Eligibility,
    /// `overall_score * 10`, i.e. the 0..=100 form shown to users and sent
    /// to the submission collaborator.
    pub score_percent: u8,
    pub bucket: ScoreBucket,
}

/// Applies the threshold policy to one analysis result.
pub fn decide(result: &AnalysisResult, context: GateContext) -> SubmissionDecision {
    // overall_score is clamped to 0..=10 at parse time; min() keeps the
    // multiplication total even for hand-built results outside that range.
    let score_percent = result.overall_score.min(10) * 10;
    let eligibility = match context {
        GateContext::JobApplication => {
            if result.overall_score >= SUBMISSION_THRESHOLD {
                Eligibility::Eligible
            } else {
                Eligibility::Ineligible
            }
        }
        GateContext::Advisory => Eligibility::NotApplicable,
    };

    SubmissionDecision {
        eligibility,
        score_percent,
        bucket: ScoreBucket::from_percent(score_percent),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result_with_score(overall_score: u8) -> AnalysisResult {
        AnalysisResult {
            overall_score,
            ..AnalysisResult::unparsed()
        }
    }

    #[test]
    fn test_threshold_score_is_eligible() {
        let decision = decide(&result_with_score(5), GateContext::JobApplication);
        assert_eq!(decision.eligibility, Eligibility::Eligible);
        assert_eq!(decision.score_percent, 50);
        assert_eq!(decision.bucket, ScoreBucket::Good);
    }

    #[test]
    fn test_below_threshold_score_is_ineligible() {
        let decision = decide(&result_with_score(4), GateContext::JobApplication);
        assert_eq!(decision.eligibility, Eligibility::Ineligible);
        assert_eq!(decision.score_percent, 40);
        assert_eq!(decision.bucket, ScoreBucket::BelowThreshold);
    }

    #[test]
    fn test_advisory_context_reports_not_applicable() {
        let decision = decide(&result_with_score(9), GateContext::Advisory);
        assert_eq!(decision.eligibility, Eligibility::NotApplicable);
        assert!(!decision.eligibility.is_eligible());
        // Score and bucket are still meaningful in advisory mode.
        assert_eq!(decision.score_percent, 90);
        assert_eq!(decision.bucket, ScoreBucket::Excellent);
    }

    #[test]
    fn test_bucket_boundaries() {
        assert_eq!(ScoreBucket::from_percent(0), ScoreBucket::Poor);
        assert_eq!(ScoreBucket::from_percent(30), ScoreBucket::Poor);
        assert_eq!(ScoreBucket::from_percent(31), ScoreBucket::BelowThreshold);
        assert_eq!(ScoreBucket::from_percent(49), ScoreBucket::BelowThreshold);
        assert_eq!(ScoreBucket::from_percent(50), ScoreBucket::Good);
        assert_eq!(ScoreBucket::from_percent(70), ScoreBucket::Good);
        assert_eq!(ScoreBucket::from_percent(71), ScoreBucket::VeryGood);
        assert_eq!(ScoreBucket::from_percent(85), ScoreBucket::VeryGood);
        assert_eq!(ScoreBucket::from_percent(86), ScoreBucket::Excellent);
        assert_eq!(ScoreBucket::from_percent(100), ScoreBucket::Excellent);
    }

    #[test]
    fn test_bucket_string_forms() {
        assert_eq!(ScoreBucket::Poor.as_str(), "poor");
        assert_eq!(ScoreBucket::BelowThreshold.as_str(), "below-threshold");
        assert_eq!(ScoreBucket::Good.as_str(), "good");
        assert_eq!(ScoreBucket::VeryGood.as_str(), "very-good");
        assert_eq!(ScoreBucket::Excellent.as_str(), "excellent");
    }

    #[test]
    fn test_bucket_serde_uses_kebab_case() {
        let json = serde_json::to_string(&ScoreBucket::VeryGood).unwrap();
        assert_eq!(json, "\"very-good\"");
        let json = serde_json::to_string(&Eligibility::NotApplicable).unwrap();
        assert_eq!(json, "\"not-applicable\"");
    }

    #[test]
    fn test_unparseable_reply_fails_closed() {
        // Score defaults to 0, so garbage oracle output can never gate open.
        let decision = decide(&AnalysisResult::unparsed(), GateContext::JobApplication);
        assert_eq!(decision.eligibility, Eligibility::Ineligible);
        assert_eq!(decision.bucket, ScoreBucket::Poor);
    }
}
