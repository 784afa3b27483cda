//! Public Suffix List text parsing.
//!
//! The upstream list (<https://publicsuffix.org/list/public_suffix_list.dat>)
//! is line-oriented: one rule per line, `//` comments, blank lines, and two
//! marker-delimited sections (ICANN and PRIVATE). Parsing is pure text work
//! with no I/O; downloading lives in the updater.

use crate::error::{ListErrorKind, Result, TldError};

pub(crate) const ICANN_START_MARKER: &str = "// ===BEGIN ICANN DOMAINS===";
pub(crate) const ICANN_END_MARKER: &str = "// ===END ICANN DOMAINS===";
pub(crate) const PRIVATE_START_MARKER: &str = "// ===BEGIN PRIVATE DOMAINS===";
pub(crate) const PRIVATE_END_MARKER: &str = "// ===END PRIVATE DOMAINS===";

/// Parse list text into rule strings.
///
/// Skips blank lines and `//` comments. Anything after the first whitespace
/// on a rule line is ignored, per the upstream list format.
pub fn parse_psl_text(text: &str) -> Vec<String> {
    let mut rules = Vec::new();

    for line in text.lines() {
        let line = line.trim();
        if line.is_empty() || line.starts_with("//") {
            continue;
        }
        // A rule ends at the first whitespace
        let rule = line.split_whitespace().next().unwrap_or("");
        if !rule.is_empty() {
            rules.push(rule.to_lowercase());
        }
    }

    rules
}

/// Extract the section between two markers, error if either is missing.
pub(crate) fn extract_by_markers<'a>(
    text: &'a str,
    start_marker: &str,
    end_marker: &str,
) -> Result<&'a str> {
    let start = text.find(start_marker).ok_or_else(|| TldError::ListError {
        kind: ListErrorKind::MissingMarker,
        message: format!("Missing start marker {} in public suffix list", start_marker),
    })?;
    let end = text.find(end_marker).ok_or_else(|| TldError::ListError {
        kind: ListErrorKind::MissingMarker,
        message: format!("Missing end marker {} in public suffix list", end_marker),
    })?;
    Ok(&text[start..end])
}

/// Parse list text into its (icann, private) rule partitions.
pub fn parse_psl_sections(text: &str) -> Result<(Vec<String>, Vec<String>)> {
    let icann = extract_by_markers(text, ICANN_START_MARKER, ICANN_END_MARKER)?;
    let private = extract_by_markers(text, PRIVATE_START_MARKER, PRIVATE_END_MARKER)?;
    Ok((parse_psl_text(icann), parse_psl_text(private)))
}
