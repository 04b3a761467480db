// crates/citysuggest-core/src/text.rs

/// Normalize a string for matching: trims surrounding whitespace and
/// lower-cases it.
///
/// This is deliberately not accent-folding: `"Montréal"` folds to
/// `"montréal"`, so a query must carry the same diacritics (or hit the ASCII
/// name instead).
///
/// # Examples
///
/// ```rust
/// use citysuggest_core::text::fold_key;
///
/// assert_eq!(fold_key("  Toronto "), "toronto");
/// assert_eq!(fold_key("QUÉBEC"), "québec");
/// ```
pub fn fold_key(s: &str) -> String {
    s.trim().to_lowercase()
}

/// Case-insensitive substring test against an already folded query.
///
/// Only the haystack is lower-cased here; callers fold the query once and
/// reuse it across every candidate.
#[inline]
pub fn contains_folded(haystack: &str, folded_query: &str) -> bool {
    haystack.to_lowercase().contains(folded_query)
}
