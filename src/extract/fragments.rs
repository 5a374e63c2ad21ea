//! Positioned text fragments and the structural PDF reader seam.
//!
//! The reader is an injected capability, not a lazily discovered global:
//! `DocumentTextAssembler` receives an `Arc<dyn StructuredPdfReader>` at
//! construction and never bootstraps a PDF library at call time.

use anyhow::anyhow;
use lopdf::Document;
use pdf_extract::{output_doc, MediaBox, OutputDev, OutputError, Transform};

/// One atomic run of extracted text with its position and font metadata,
/// as emitted by the underlying PDF text layer.
///
/// `y` is the vertical position in the source coordinate space, whose origin
/// may be at the bottom-left. Normalization to top-down coordinates happens
/// during clustering, where the page height is known.
#[derive(Debug, Clone)]
pub struct PositionedTextFragment {
    pub text: String,
    pub x: f64,
    pub y: f64,
    pub font_size: f64,
    pub font_family: String,
}

/// One page's worth of raw reader output.
#[derive(Debug, Clone)]
pub struct PageFragments {
    /// Fragments in the order the text layer emitted them. Order matters:
    /// it is the tie-break for same-x fragments during clustering.
    pub fragments: Vec<PositionedTextFragment>,
    /// Page height in source units, used for y-axis inversion.
    pub page_height: f64,
}

/// Structural PDF reader: raw bytes in, ordered per-page fragments out.
///
/// Implementations must preserve fragment emission order and must fail (not
/// return partial pages) when the document cannot be decoded.
pub trait StructuredPdfReader: Send + Sync {
    fn read(&self, bytes: &[u8]) -> Result<Vec<PageFragments>, anyhow::Error>;
}

/// Production reader backed by the `pdf-extract` interpreter.
///
/// Drives the document through a fragment-collecting output device: the
/// interpreter reports each character with its text rendering matrix and
/// device font size, and word boundaries group characters into fragments.
/// The device interface does not expose the font name, so `font_family` is
/// always `"unknown"` here.
pub struct PdfExtractReader;

impl PdfExtractReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for PdfExtractReader {
    fn default() -> Self {
        Self::new()
    }
}

impl StructuredPdfReader for PdfExtractReader {
    fn read(&self, bytes: &[u8]) -> Result<Vec<PageFragments>, anyhow::Error> {
        let document = Document::load_mem(bytes)
            .map_err(|e| anyhow!("failed to decode PDF structure: {e}"))?;

        let mut collector = FragmentCollector::new();
        output_doc(&document, &mut collector)
            .map_err(|e| anyhow!("failed to interpret PDF content: {e}"))?;

        Ok(collector.into_pages())
    }
}

/// Output device that accumulates one `PositionedTextFragment` per word.
struct FragmentCollector {
    pages: Vec<PageFragments>,
    current: Option<PageFragments>,
    word: String,
    word_origin: Option<(f64, f64, f64)>, // x, y, font_size of the first char
}

impl FragmentCollector {
    fn new() -> Self {
        Self {
            pages: Vec::new(),
            current: None,
            word: String::new(),
            word_origin: None,
        }
    }

    fn into_pages(mut self) -> Vec<PageFragments> {
        self.flush_page();
        self.pages
    }

    fn flush_word(&mut self) {
        let text = self.word.trim().to_string();
        if let (Some((x, y, font_size)), Some(page)) = (self.word_origin, self.current.as_mut()) {
            if !text.is_empty() {
                page.fragments.push(PositionedTextFragment {
                    text,
                    x,
                    y,
                    font_size,
                    font_family: "unknown".to_string(),
                });
            }
        }
        self.word.clear();
        self.word_origin = None;
    }

    fn flush_page(&mut self) {
        self.flush_word();
        if let Some(page) = self.current.take() {
            self.pages.push(page);
        }
    }
}

impl OutputDev for FragmentCollector {
    fn begin_page(
        &mut self,
        _page_num: u32,
        media_box: &MediaBox,
        _art_box: Option<(f64, f64, f64, f64)>,
    ) -> Result<(), OutputError> {
        self.flush_page();
        self.current = Some(PageFragments {
            fragments: Vec::new(),
            page_height: media_box.ury - media_box.lly,
        });
        Ok(())
    }

    fn end_page(&mut self) -> Result<(), OutputError> {
        self.flush_page();
        Ok(())
    }

    fn output_character(
        &mut self,
        trm: &Transform,
        _width: f64,
        _spacing: f64,
        font_size: f64,
        char: &str,
    ) -> Result<(), OutputError> {
        if self.word_origin.is_none() {
            self.word_origin = Some((trm.m31, trm.m32, font_size));
        }
        self.word.push_str(char);
        Ok(())
    }

    fn begin_word(&mut self) -> Result<(), OutputError> {
        self.flush_word();
        Ok(())
    }

    fn end_word(&mut self) -> Result<(), OutputError> {
        self.flush_word();
        Ok(())
    }

    fn end_line(&mut self) -> Result<(), OutputError> {
        self.flush_word();
        Ok(())
    }
}
