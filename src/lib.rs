//! Resume-to-job matching core.
//!
//! Four stages make up the pipeline:
//!
//! 1. **Extraction** ([`extract`]): layout-aware PDF text reconstruction.
//!    Positioned fragments are bucketed into reading-order lines, headings
//!    are classified by font size, and the pages are serialized into one
//!    normalized text blob.
//! 2. **Scoring** ([`oracle`]): the blob plus an optional job description is
//!    composed into a fixed instruction payload and submitted to an opaque
//!    text-completion service with bounded output and low temperature.
//! 3. **Parsing** ([`analysis::parser`]): the untrusted text reply is
//!    reduced to a strict result schema. Total by contract: malformed
//!    replies degrade field-by-field instead of erroring.
//! 4. **Gating** ([`analysis::gate`]): the numeric score becomes an
//!    eligibility decision and a qualitative bucket.
//!
//! [`pipeline::UploadIntakePipeline`] wires the stages together. Everything
//! the embedding application persists or renders (HTTP, storage, auth, UI)
//! lives outside this crate; the seams are the [`extract::StructuredPdfReader`]
//! and [`oracle::ScoringOracle`] traits plus the error taxonomy in [`errors`].

pub mod analysis;
pub mod config;
pub mod errors;
pub mod extract;
pub mod models;
pub mod oracle;
pub mod pipeline;

pub use analysis::{
    decide, parse_reply, AnalysisResult, Eligibility, GateContext, ScoreBucket, SubmissionDecision,
};
pub use config::Config;
pub use errors::AnalysisError;
pub use extract::{
    AssembledDocument, DocumentTextAssembler, PageContent, PdfExtractReader,
    PositionedTextFragment, StructuredPdfReader, TextLine,
};
pub use models::ApplicationSubmission;
pub use oracle::{OracleClient, OracleError, ScoringOracle, ScoringRequest};
pub use pipeline::{AnalysisReport, UploadIntakePipeline};
