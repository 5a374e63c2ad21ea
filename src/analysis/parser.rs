//! Response parsing: turns the oracle's loosely structured text reply into
//! a strict [`AnalysisResult`].
//!
//! This is a total function by contract. Every field is extracted
//! independently, so a reply that matches only some labels still yields its
//! parseable fields, and a reply that matches nothing yields the fail-closed
//! defaults (empty strings, score 0, empty lists). A format change upstream
//! degrades analysis quality; it must never crash an upload.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::analysis::result::AnalysisResult;

static NAME_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"name:\s*'([^']+)'").unwrap());
static EMAIL_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"email:\s*'([^']+)'").unwrap());
static SCORE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"score:\s*(\d+)/10").unwrap());
static STRENGTH_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"strength:\s*'([^']+)'").unwrap());
static WEAKNESS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"weakness:\s*'([^']+)'").unwrap());
static SUGGESTIONS_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"suggestions:\s*'([^']+)'").unwrap());

/// Parses one raw oracle reply. Total: never fails, never panics.
pub fn parse_reply(reply: &str) -> AnalysisResult {
    AnalysisResult {
        name: capture_text(&NAME_RE, reply),
        email: capture_text(&EMAIL_RE, reply),
        overall_score: capture_score(reply),
        strengths: capture_list(&STRENGTH_RE, reply),
        weaknesses: capture_list(&WEAKNESS_RE, reply),
        suggestions: capture_list(&SUGGESTIONS_RE, reply),
    }
}

fn capture_text(re: &Regex, reply: &str) -> String {
    re.captures(reply)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().to_string())
        .unwrap_or_default()
}

/// A non-matching list field is an empty list, never a list holding an
/// empty string.
fn capture_list(re: &Regex, reply: &str) -> Vec<String> {
    re.captures(reply)
        .and_then(|c| c.get(1))
        .map(|m| vec![m.as_str().to_string()])
        .unwrap_or_default()
}

/// Extracts the integer preceding the literal `/10`, clamped into 0..=10.
/// Clamping upholds the data-model invariant even against replies like
/// `score: 12/10`.
fn capture_score(reply: &str) -> u8 {
    SCORE_RE
        .captures(reply)
        .and_then(|c| c.get(1))
        .and_then(|m| m.as_str().parse::<u32>().ok())
        .map(|n| n.min(10) as u8)
        .unwrap_or(0)
}
