use serde::Serialize;
use uuid::Uuid;

use crate::analysis::result::AnalysisResult;
use crate::analysis::SubmissionDecision;

/// Payload handed to the application-submission collaborator when the gate
/// reports eligible and the caller chooses to submit. New applications are
/// always created in `pending` status.
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationSubmission {
    pub candidate_name: String,
    pub candidate_email: String,
    pub job_id: Uuid,
    pub match_score_percent: u8,
    pub status: &'static str,
}

impl ApplicationSubmission {
    /// Builds the payload for an eligible decision; `None` otherwise, so an
    /// ineligible or advisory analysis can never be submitted by accident.
    pub fn for_eligible(
        analysis: &AnalysisResult,
        decision: &SubmissionDecision,
        job_id: Uuid,
    ) -> Option<Self> {
        if !decision.eligibility.is_eligible() {
            return None;
        }
        Some(Self {
            candidate_name: analysis.name.clone(),
            candidate_email: analysis.email.clone(),
            job_id,
            match_score_percent: decision.score_percent,
            status: "pending",
        })
    }
}
