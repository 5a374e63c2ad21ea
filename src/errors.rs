use thiserror::Error;

use crate::oracle::OracleError;

/// Pipeline-level error taxonomy.
///
/// The three document/oracle kinds map to distinct user-facing messages in
/// the embedding application ("could not read file" vs "no extractable text"
/// vs a retryable service failure), so they must stay distinguishable here.
/// Malformed oracle text is deliberately NOT represented: the response parser
/// degrades field-by-field instead of erroring.
#[derive(Debug, Error)]
pub enum AnalysisError {
    /// The uploaded bytes could not be decoded as a PDF (corrupt, encrypted,
    /// or not a PDF at all). Fatal to the invocation; the underlying cause is
    /// preserved for logging.
    #[error("could not read file: {0}")]
    DocumentDecode(#[source] anyhow::Error),

    /// The document decoded successfully but yielded zero usable text.
    /// A scanned-image-only PDF lands here, not in `DocumentDecode`.
    #[error("no extractable text in document")]
    EmptyExtraction,

    /// The scoring oracle could not be reached or replied with a failure.
    /// Retryable by the caller; this crate performs no retries itself.
    #[error("scoring service unavailable: {0}")]
    OracleUnavailable(#[source] OracleError),

    /// The caller-supplied time bound elapsed before the oracle replied.
    /// No partial result is ever returned for a cancelled invocation.
    #[error("analysis cancelled before completion")]
    Cancelled,
}
