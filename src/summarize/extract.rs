use std::sync::LazyLock;

use regex::Regex;

use crate::core::models::SummaryResult;
use crate::errors::NotifierError;

pub const SUMMARY_TAG: &str = "summary";
pub const DETAIL_TAG: &str = "thinking";
pub const SOCIAL_TAG: &str = "twitter";

// Non-greedy across lines so the first closing tag wins
const SUMMARY_PATTERN: &str = r"<summary>([\s\S]*?)</summary>";
const DETAIL_PATTERN: &str = r"<thinking>([\s\S]*?)</thinking>";
const SOCIAL_PATTERN: &str = r"<twitter>([\s\S]*?)</twitter>";

static SUMMARY_RE: LazyLock<Regex> = LazyLock::new(|| compile(SUMMARY_PATTERN));
static DETAIL_RE: LazyLock<Regex> = LazyLock::new(|| compile(DETAIL_PATTERN));
static SOCIAL_RE: LazyLock<Regex> = LazyLock::new(|| compile(SOCIAL_PATTERN));

fn compile(pattern: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|_| Regex::new(r"$^").expect("fallback regex compiles"))
}

fn section_regex(tag: &str) -> Option<&'static Regex> {
    match tag {
        SUMMARY_TAG => Some(&*SUMMARY_RE),
        DETAIL_TAG => Some(&*DETAIL_RE),
        SOCIAL_TAG => Some(&*SOCIAL_RE),
        _ => None,
    }
}

/// Content of the first `<tag>...</tag>` section, if any.
///
/// Only the `summary`, `thinking` and `twitter` sections are recognised.
#[must_use]
pub fn extract_tagged(text: &str, tag: &str) -> Option<String> {
    section_regex(tag)?
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

fn required(text: &str, tag: &str) -> Result<String, NotifierError> {
    extract_tagged(text, tag)
        .filter(|section| !section.trim().is_empty())
        .ok_or_else(|| NotifierError::ExtractionError(tag.to_string()))
}

/// Pull the summary, detail and social sections out of a model response.
///
/// # Errors
///
/// Returns `ExtractionError` naming the first section that is missing or empty.
pub fn parse_summary_response(text: &str) -> Result<SummaryResult, NotifierError> {
    Ok(SummaryResult {
        summary: required(text, SUMMARY_TAG)?,
        detail: required(text, DETAIL_TAG)?,
        social_text: required(text, SOCIAL_TAG)?,
    })
}
