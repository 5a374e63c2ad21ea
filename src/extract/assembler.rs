//! Document assembly: drives the page clusterer across all pages and
//! serializes the result into the single normalized text blob that is
//! forwarded to the scoring oracle.

use std::fmt::Write as _;
use std::sync::Arc;

use tracing::debug;

use crate::errors::AnalysisError;
use crate::extract::clusterer::{cluster_page, TextLine};
use crate::extract::fragments::StructuredPdfReader;

/// One page's reconstructed lines, ordered top-to-bottom.
#[derive(Debug, Clone)]
pub struct PageContent {
    /// 1-based page number.
    pub page_number: usize,
    pub lines: Vec<TextLine>,
}

/// The assembled document: structural per-page data plus the canonical
/// plain-text serialization.
///
/// Only `plain_text` is ever forwarded to the oracle; the structured pages
/// exist for display purposes in the embedding application.
#[derive(Debug, Clone)]
pub struct AssembledDocument {
    pub pages: Vec<PageContent>,
    pub plain_text: String,
}

impl AssembledDocument {
    /// True iff at least one page produced at least one line. The page
    /// markers in `plain_text` are present even for textless documents, so
    /// emptiness is judged on reconstructed lines, not on the serialization.
    pub fn has_text(&self) -> bool {
        self.pages.iter().any(|p| !p.lines.is_empty())
    }
}

/// Drives the page clusterer across a whole document.
///
/// The structural reader is an explicit constructor-injected dependency.
/// Output is deterministic for identical input bytes: no randomness and no
/// wall-clock dependence anywhere in the extraction path.
pub struct DocumentTextAssembler {
    reader: Arc<dyn StructuredPdfReader>,
}

impl DocumentTextAssembler {
    pub fn new(reader: Arc<dyn StructuredPdfReader>) -> Self {
        Self { reader }
    }

    /// Decodes and assembles the document, or fails with `DocumentDecode`.
    ///
    /// A reader failure aborts the whole document; no partial assembly is
    /// ever returned across a decode failure.
    pub fn assemble(&self, bytes: &[u8]) -> Result<AssembledDocument, AnalysisError> {
        let raw_pages = self
            .reader
            .read(bytes)
            .map_err(AnalysisError::DocumentDecode)?;

        let mut pages = Vec::with_capacity(raw_pages.len());
        for (index, raw) in raw_pages.into_iter().enumerate() {
            let lines = cluster_page(raw.fragments, raw.page_height);
            pages.push(PageContent {
                page_number: index + 1,
                lines,
            });
        }

        let plain_text = serialize_pages(&pages);
        debug!(
            pages = pages.len(),
            chars = plain_text.len(),
            "assembled document text"
        );

        Ok(AssembledDocument { pages, plain_text })
    }
}

/// Canonical serialization: per page a `"Page {n}:\n"` marker, then each
/// line's text (headings upper-cased) followed by a newline, then one blank
/// line separating pages. An empty page contributes exactly `"Page {n}:\n\n"`.
fn serialize_pages(pages: &[PageContent]) -> String {
    let mut out = String::new();
    for page in pages {
        let _ = writeln!(out, "Page {}:", page.page_number);
        for line in &page.lines {
            if line.is_heading {
                out.push_str(&line.text.to_uppercase());
            } else {
                out.push_str(&line.text);
            }
            out.push('\n');
        }
        out.push('\n');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::fragments::{PageFragments, PositionedTextFragment};

    /// Reader stub that replays canned pages regardless of input bytes.
    struct FixedReader {
        pages: Vec<PageFragments>,
    }

    impl StructuredPdfReader for FixedReader {
        fn read(&self, _bytes: &[u8]) -> Result<Vec<PageFragments>, anyhow::Error> {
            Ok(self.pages.clone())
        }
    }

    struct FailingReader;

    impl StructuredPdfReader for FailingReader {
        fn read(&self, _bytes: &[u8]) -> Result<Vec<PageFragments>, anyhow::Error> {
            Err(anyhow::anyhow!("bad xref table"))
        }
    }

    fn fragment(text: &str, x: f64, y: f64, font_size: f64) -> PositionedTextFragment {
        PositionedTextFragment {
            text: text.to_string(),
            x,
            y,
            font_size,
            font_family: "unknown".to_string(),
        }
    }

    fn assembler_with(pages: Vec<PageFragments>) -> DocumentTextAssembler {
        DocumentTextAssembler::new(Arc::new(FixedReader { pages }))
    }

    #[test]
    fn test_empty_page_contributes_marker_and_blank_line() {
        let assembler = assembler_with(vec![PageFragments {
            fragments: Vec::new(),
            page_height: 200.0,
        }]);
        let doc = assembler.assemble(b"ignored").unwrap();
        assert_eq!(doc.plain_text, "Page 1:\n\n");
        assert_eq!(doc.pages.len(), 1);
        assert!(doc.pages[0].lines.is_empty());
        assert!(!doc.has_text());
    }

    #[test]
    fn test_heading_lines_are_uppercased_in_plain_text() {
        let assembler = assembler_with(vec![PageFragments {
            fragments: vec![
                fragment("Work Experience", 0.0, 180.0, 16.0),
                fragment("built things", 0.0, 150.0, 10.0),
            ],
            page_height: 200.0,
        }]);
        let doc = assembler.assemble(b"ignored").unwrap();
        assert_eq!(doc.plain_text, "Page 1:\nWORK EXPERIENCE\nbuilt things\n\n");
        assert!(doc.has_text());
    }

    #[test]
    fn test_pages_are_serialized_in_ascending_order() {
        let page = |y: f64, text: &str| PageFragments {
            fragments: vec![fragment(text, 0.0, y, 10.0)],
            page_height: 200.0,
        };
        let assembler = assembler_with(vec![page(100.0, "one"), page(100.0, "two")]);
        let doc = assembler.assemble(b"ignored").unwrap();
        assert_eq!(doc.plain_text, "Page 1:\none\n\nPage 2:\ntwo\n\n");
        assert_eq!(doc.pages[0].page_number, 1);
        assert_eq!(doc.pages[1].page_number, 2);
    }

    #[test]
    fn test_bottom_left_origin_fragments_serialize_top_down() {
        // Raw coordinates as a PDF text layer emits them: larger y means
        // higher on the page. The y-inversion during clustering must put
        // the visually topmost line first in the serialization.
        let assembler = assembler_with(vec![PageFragments {
            fragments: vec![
                fragment("bottom line", 10.0, 80.0, 10.0),
                fragment("Header", 10.0, 700.0, 16.0),
                fragment("middle", 10.0, 400.0, 10.0),
            ],
            page_height: 792.0,
        }]);
        let doc = assembler.assemble(b"ignored").unwrap();
        assert_eq!(doc.plain_text, "Page 1:\nHEADER\nmiddle\nbottom line\n\n");
    }

    #[test]
    fn test_assembly_is_deterministic() {
        let pages = vec![PageFragments {
            fragments: vec![
                fragment("alpha", 10.0, 100.0, 10.0),
                fragment("beta", 50.0, 100.0, 10.0),
            ],
            page_height: 200.0,
        }];
        let assembler = assembler_with(pages);
        let first = assembler.assemble(b"same").unwrap();
        let second = assembler.assemble(b"same").unwrap();
        assert_eq!(first.plain_text, second.plain_text);
    }

    #[test]
    fn test_reader_failure_surfaces_as_document_decode() {
        let assembler = DocumentTextAssembler::new(Arc::new(FailingReader));
        let err = assembler.assemble(b"whatever").unwrap_err();
        assert!(matches!(err, AnalysisError::DocumentDecode(_)));
        assert!(err.to_string().contains("could not read file"));
    }
}
