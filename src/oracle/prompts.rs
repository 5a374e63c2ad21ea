//! Reviewer persona and request composition for the scoring oracle.

use crate::oracle::{OracleMessage, ScoringRequest};

/// System prompt establishing the reviewer persona plus the strict
/// output-format directive.
///
/// The single-quoted literal format is load-bearing: the response parser
/// extracts fields against exactly this shape. Deviations from it are
/// expected (the oracle's output format is a convention, not a schema) and
/// are tolerated downstream, never assumed absent.
pub const REVIEW_SYSTEM_PROMPT: &str =
    "You are an expert resume reviewer. Carefully analyze the candidate's resume and job \
     description. Provide a summarized feedback focusing on education and experience. Avoid \
     making assumptions about the candidate's qualifications.\n\n\
     Provide the response in **this exact format**:\n\
     \"name: 'name here', email:'email goes here', score: 8/10, strength: 'strength here', \
     weakness: 'weakness here', suggestions: 'suggestions here'\"";

/// Builds the deterministic instruction payload for one scoring call.
///
/// `resume_text` must be non-empty after trimming; the pipeline enforces
/// that before this point. The job description, when present, rides as a
/// second user message so the oracle weighs it separately from the resume.
pub fn build_scoring_request(resume_text: &str, job_description: Option<&str>) -> ScoringRequest {
    let mut messages = vec![OracleMessage {
        role: "user",
        content: format!("Resume:\n{resume_text}"),
    }];

    if let Some(jd) = job_description {
        messages.push(OracleMessage {
            role: "user",
            content: format!("Job Description:\n{jd}"),
        });
    }

    ScoringRequest {
        system: REVIEW_SYSTEM_PROMPT,
        messages,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_without_job_description_has_single_user_message() {
        let request = build_scoring_request("resume body", None);
        assert_eq!(request.messages.len(), 1);
        assert_eq!(request.messages[0].role, "user");
        assert_eq!(request.messages[0].content, "Resume:\nresume body");
    }

    #[test]
    fn test_request_with_job_description_appends_second_user_message() {
        let request = build_scoring_request("resume body", Some("Frontend developer"));
        assert_eq!(request.messages.len(), 2);
        assert_eq!(
            request.messages[1].content,
            "Job Description:\nFrontend developer"
        );
    }

    #[test]
    fn test_system_prompt_carries_format_directive() {
        let request = build_scoring_request("resume body", None);
        assert!(request.system.contains("this exact format"));
        assert!(request.system.contains("score: 8/10"));
    }

    #[test]
    fn test_request_building_is_deterministic() {
        let a = build_scoring_request("text", Some("jd"));
        let b = build_scoring_request("text", Some("jd"));
        assert_eq!(a.messages.len(), b.messages.len());
        for (left, right) in a.messages.iter().zip(&b.messages) {
            assert_eq!(left.content, right.content);
        }
    }
}
