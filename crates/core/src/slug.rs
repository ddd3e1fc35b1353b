//! Service slug normalization and validation.
//!
//! Slugs appear in public URLs (`/services/{slug}`), so they are restricted
//! to lowercase ASCII alphanumerics separated by single hyphens.

use std::sync::LazyLock;

use regex::Regex;

use crate::error::CoreError;

/// Pattern a saved slug must match.
pub const SLUG_PATTERN: &str = "^[a-z0-9]+(-[a-z0-9]+)*$";

static SLUG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(SLUG_PATTERN).expect("slug pattern must compile"));

static INVALID_CHARS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new("[^a-z0-9]+").expect("invalid-chars pattern must compile"));

/// Normalize arbitrary input into slug form: lowercase, runs of invalid
/// characters collapsed to a single `-`, leading/trailing `-` trimmed.
///
/// Normalization is lossy; input with no usable characters normalizes to the
/// empty string (which then fails [`validate_slug`]).
pub fn normalize_slug(input: &str) -> String {
    let lowered = input.trim().to_lowercase();
    let dashed = INVALID_CHARS_RE.replace_all(&lowered, "-");
    dashed.trim_matches('-').to_string()
}

/// Validate a slug after normalization.
pub fn validate_slug(slug: &str) -> Result<(), CoreError> {
    if SLUG_RE.is_match(slug) {
        Ok(())
    } else {
        Err(CoreError::Validation(format!(
            "slug must match {SLUG_PATTERN}, got {slug:?}"
        )))
    }
}
