//! Layout-aware PDF text reconstruction.
//!
//! `fragments` owns the structural reader seam, `clusterer` rebuilds
//! reading-order lines per page, and `assembler` serializes the whole
//! document into the normalized blob the scoring oracle receives.

pub mod assembler;
pub mod clusterer;
pub mod fragments;

pub use assembler::{AssembledDocument, DocumentTextAssembler, PageContent};
pub use clusterer::{cluster_page, TextLine, HEADING_FONT_SIZE_PT, LINE_BUCKET_HEIGHT};
pub use fragments::{PageFragments, PdfExtractReader, PositionedTextFragment, StructuredPdfReader};
