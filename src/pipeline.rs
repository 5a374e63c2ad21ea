//! Upload intake orchestration: accept bytes, assemble text, score, parse,
//! gate. Strictly linear and single-pass; a failure at any stage aborts the
//! invocation and the caller starts over with a fresh upload.
//!
//! The pipeline is stateless across invocations. Concurrent uploads share
//! nothing but the injected collaborators, both of which are `Send + Sync`,
//! so invocations are safe to run in parallel with no coordination. Nothing
//! extracted from the document and no oracle reply outlives the invocation.

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, info};

use crate::analysis::{decide, parse_reply, AnalysisResult, GateContext, SubmissionDecision};
use crate::errors::AnalysisError;
use crate::extract::{DocumentTextAssembler, StructuredPdfReader};
use crate::oracle::prompts::build_scoring_request;
use crate::oracle::ScoringOracle;

/// Aggregate output of one successful pipeline run.
#[derive(Debug, Clone)]
pub struct AnalysisReport {
    pub analysis: AnalysisResult,
    pub decision: SubmissionDecision,
}

/// The orchestrator. Holds the document assembler and the scoring oracle;
/// both seams are trait objects so tests run fully deterministic stubs.
pub struct UploadIntakePipeline {
    assembler: DocumentTextAssembler,
    oracle: Arc<dyn ScoringOracle>,
}

impl UploadIntakePipeline {
    pub fn new(reader: Arc<dyn StructuredPdfReader>, oracle: Arc<dyn ScoringOracle>) -> Self {
        Self {
            assembler: DocumentTextAssembler::new(reader),
            oracle,
        }
    }

    /// Runs the full intake: extract, empty-check, score, parse, gate.
    ///
    /// Failure modes, in pipeline order:
    /// - undecodable bytes yield [`AnalysisError::DocumentDecode`];
    /// - a decoded document with no reconstructed text yields
    ///   [`AnalysisError::EmptyExtraction`] without ever calling the oracle;
    /// - an unreachable oracle yields [`AnalysisError::OracleUnavailable`].
    ///
    /// Parsing and gating cannot fail: malformed oracle text degrades to
    /// field defaults and gates closed.
    pub async fn analyze(
        &self,
        resume_bytes: &[u8],
        job_description: Option<&str>,
        context: GateContext,
    ) -> Result<AnalysisReport, AnalysisError> {
        let document = self.assembler.assemble(resume_bytes)?;

        if !document.has_text() {
            // Decodes fine but nothing to read: a scanned-image-only PDF
            // lands here. Distinct from a decode failure by contract.
            return Err(AnalysisError::EmptyExtraction);
        }

        let request = build_scoring_request(&document.plain_text, job_description);
        debug!(
            messages = request.messages.len(),
            "submitting scoring request"
        );

        let reply = self
            .oracle
            .score(&request)
            .await
            .map_err(AnalysisError::OracleUnavailable)?;

        let analysis = parse_reply(&reply);
        let decision = decide(&analysis, context);

        info!(
            score = analysis.overall_score,
            bucket = decision.bucket.as_str(),
            "analysis complete"
        );

        Ok(AnalysisReport { analysis, decision })
    }

    /// Like [`analyze`](Self::analyze), but bounds the whole invocation.
    ///
    /// The oracle call is the single suspension point with external latency,
    /// so in practice the bound constrains it. An elapsed deadline maps to
    /// [`AnalysisError::Cancelled`]; no partial result is ever returned.
    pub async fn analyze_with_timeout(
        &self,
        resume_bytes: &[u8],
        job_description: Option<&str>,
        context: GateContext,
        deadline: Duration,
    ) -> Result<AnalysisReport, AnalysisError> {
        match tokio::time::timeout(deadline, self.analyze(resume_bytes, job_description, context))
            .await
        {
            Ok(outcome) => outcome,
            Err(_elapsed) => Err(AnalysisError::Cancelled),
        }
    }
}
