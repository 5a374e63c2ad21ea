//! Oracle reply parsing and the threshold-gated submission decision.

pub mod gate;
pub mod parser;
pub mod result;

pub use gate::{decide, Eligibility, GateContext, ScoreBucket, SubmissionDecision};
pub use parser::parse_reply;
pub use result::AnalysisResult;
