use scraper::{Html, Selector};
use tracing::{debug, trace};

use crate::error::{ExtractionError, Result};

/// Attribute that marks which `application/json` block carries the listing
/// payload. Fixed by the page format; only the value is configurable.
pub(crate) const MARKER_ATTR: &str = "data-hypernova-key";

/// Locate the embedded data block whose marker attribute equals `marker` and
/// return its raw text. Pages carry several `application/json` blocks; only
/// the marked one holds the listing payload, and there is no fallback.
pub(crate) fn find_payload(html: &str, marker: &str) -> Result<String> {
    let document = Html::parse_document(html);
    let selector =
        Selector::parse("script[type='application/json']").map_err(|e| {
            ExtractionError::malformed(format!("invalid selector: {e}"))
        })?;

    let mut candidates = 0usize;
    for script in document.select(&selector) {
        candidates += 1;
        if script.value().attr(MARKER_ATTR) == Some(marker) {
            debug!(candidates, marker, "located marked payload block");
            return Ok(script.text().collect());
        }
    }

    debug!(candidates, marker, "no embedded data block carries the marker");
    Err(ExtractionError::PayloadNotFound {
        marker: marker.to_string(),
    })
}

/// Strip the fixed-length comment wrapper and parse the remainder as JSON.
/// Lengths are counted in characters, matching how the page embeds the
/// payload between `<!--` and `-->`.
pub(crate) fn parse_payload(raw: &str, prefix: usize, suffix: usize) -> Result<serde_json::Value> {
    let stripped = strip_wrapper(raw, prefix, suffix)?;
    trace!(len = stripped.len(), "stripped payload wrapper");
    serde_json::from_str(stripped)
        .map_err(|e| ExtractionError::malformed(format!("invalid payload JSON: {e}")))
}

fn strip_wrapper(raw: &str, prefix: usize, suffix: usize) -> Result<&str> {
    let total = raw.chars().count();
    if total < prefix + suffix {
        return Err(ExtractionError::malformed(format!(
            "payload text too short for wrapper: {total} chars, expected at least {}",
            prefix + suffix
        )));
    }

    let start = raw
        .char_indices()
        .nth(prefix)
        .map_or(raw.len(), |(i, _)| i);
    let end = raw
        .char_indices()
        .nth(total - suffix)
        .map_or(raw.len(), |(i, _)| i);
    Ok(&raw[start..end])
}

/// Walk a fixed key path through the decoded payload, failing with the
/// deepest dotted path reached when a key is absent.
pub(crate) fn navigate<'a>(
    document: &'a serde_json::Value,
    path: &[&str],
) -> Result<&'a serde_json::Value> {
    let mut current = document;
    let mut walked = Vec::with_capacity(path.len());
    for key in path {
        walked.push(*key);
        current = current.get(key).ok_or_else(|| {
            ExtractionError::malformed(format!("missing field: {}", walked.join(".")))
        })?;
    }
    Ok(current)
}
