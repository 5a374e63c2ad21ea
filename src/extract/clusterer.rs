//! Page text clustering: rebuilds reading-order lines from positioned
//! fragments and classifies probable headings by font size.

use std::cmp::Ordering;
use std::collections::BTreeMap;

use crate::extract::fragments::PositionedTextFragment;

/// Vertical bucket height, in page units, used as the line-grouping key.
///
/// Two fragments whose normalized `y_top` values fall in the same bucket are
/// always merged into one line, regardless of font. The value must be large
/// enough to absorb sub/superscript jitter within one visual line, but small
/// enough not to merge adjacent lines of normal (>= 10pt) body text.
pub const LINE_BUCKET_HEIGHT: f64 = 10.0;

/// Font size above which a line is classified as a heading.
///
/// Strictly greater-than: a line averaging exactly 12pt is body text.
pub const HEADING_FONT_SIZE_PT: f64 = 12.0;

/// One reconstructed horizontal line of text.
///
/// Ephemeral: rebuilt per page, never persisted.
#[derive(Debug, Clone)]
pub struct TextLine {
    /// Fragments in left-to-right reading order.
    pub fragments: Vec<PositionedTextFragment>,
    /// The line-grouping key: `floor(y_top / LINE_BUCKET_HEIGHT)`.
    pub y_bucket: i64,
    /// Mean font size across the line's fragments.
    pub average_font_size: f64,
    /// True when `average_font_size > HEADING_FONT_SIZE_PT`.
    pub is_heading: bool,
    /// Fragment texts joined with single spaces and trimmed. Never empty;
    /// lines whose joined text trims to nothing are not emitted.
    pub text: String,
}

/// Clusters one page's fragments into ordered text lines.
///
/// `page_height` drives the y-axis inversion: source coordinate systems may
/// place the origin at the bottom-left, so each fragment is normalized to a
/// top-down `y_top = page_height - y` before bucketing.
///
/// Total over its inputs: malformed geometry (NaN coordinates, negative
/// heights) degrades the grouping but never fails.
pub fn cluster_page(fragments: Vec<PositionedTextFragment>, page_height: f64) -> Vec<TextLine> {
    // BTreeMap keeps buckets in ascending (top-to-bottom) order; pushing in
    // input order preserves the reader's fragment order within each bucket.
    let mut buckets: BTreeMap<i64, Vec<PositionedTextFragment>> = BTreeMap::new();

    for fragment in fragments {
        let y_top = page_height - fragment.y;
        let y_bucket = (y_top / LINE_BUCKET_HEIGHT).floor() as i64;
        buckets.entry(y_bucket).or_default().push(fragment);
    }

    let mut lines = Vec::with_capacity(buckets.len());

    for (y_bucket, mut members) in buckets {
        // Stable sort: fragments sharing an x coordinate keep reader order.
        members.sort_by(|a, b| a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal));

        let average_font_size =
            members.iter().map(|f| f.font_size).sum::<f64>() / members.len() as f64;

        let text = members
            .iter()
            .map(|f| f.text.as_str())
            .collect::<Vec<_>>()
            .join(" ")
            .trim()
            .to_string();

        if text.is_empty() {
            continue;
        }

        lines.push(TextLine {
            fragments: members,
            y_bucket,
            average_font_size,
            is_heading: average_font_size > HEADING_FONT_SIZE_PT,
            text,
        });
    }

    lines
}
