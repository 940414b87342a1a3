//! Slug and display-name derivation for works and creators.
//!
//! Writes may omit `slug` (and, for creators, `name_display` / `name_sort`);
//! the missing values are derived from the title or full name.

use std::sync::LazyLock;

use unicode_normalization::UnicodeNormalization;

use crate::error::CoreError;

/// Runs of anything that is not an ASCII letter or digit.
static NON_SLUG_RE: LazyLock<regex::Regex> =
    LazyLock::new(|| regex::Regex::new(r"[^a-z0-9]+").expect("valid regex"));

/// Maximum slug length, matching the `VARCHAR(255)` slug columns.
pub const MAX_SLUG_LEN: usize = 255;

/// Lowercase, hyphen-separated ASCII slug.
///
/// Accents are folded through NFKD decomposition; characters with no ASCII
/// form are dropped, so text in a non-Latin script can slug to `""`.
///
/// ```
/// use collections_core::naming::slugify;
///
/// assert_eq!(slugify("The Third Man"), "the-third-man");
/// assert_eq!(slugify("  Rock 'n' Roll!  "), "rock-n-roll");
/// assert_eq!(slugify("Amélie"), "amelie");
/// ```
pub fn slugify(text: &str) -> String {
    let folded: String = text.nfkd().filter(char::is_ascii).collect();
    let lowered = folded.to_lowercase();
    let slug = NON_SLUG_RE.replace_all(&lowered, "-");
    let slug = slug.trim_matches('-');
    match slug.char_indices().nth(MAX_SLUG_LEN) {
        Some((cut, _)) => slug[..cut].trim_end_matches('-').to_string(),
        None => slug.to_string(),
    }
}

/// `slug` if given and non-blank, otherwise the slug of `source`.
///
/// `None` when neither yields any slug characters.
pub fn slug_or_derive(slug: Option<&str>, source: &str) -> Option<String> {
    let slug = match slug.map(str::trim) {
        Some(s) if !s.is_empty() => s.to_string(),
        _ => slugify(source),
    };
    (!slug.is_empty()).then_some(slug)
}

/// [`slug_or_derive`], failing with a validation error naming `source_field`
/// when no slug can be derived.
pub fn require_slug(
    slug: Option<&str>,
    source_field: &str,
    source: &str,
) -> Result<String, CoreError> {
    slug_or_derive(slug, source).ok_or_else(|| {
        CoreError::Validation(format!(
            "slug: cannot be derived from {source_field} '{source}', give one explicitly"
        ))
    })
}

/// `value` if given and non-blank, otherwise `name_full`.
pub fn name_or_full(value: Option<&str>, name_full: &str) -> String {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => v.to_string(),
        _ => name_full.trim().to_string(),
    }
}
