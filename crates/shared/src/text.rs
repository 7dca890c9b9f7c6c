//! Text matching helpers.

/// Returns `true` if `haystack` contains `needle`, ignoring case.
///
/// `needle` must already be lowercased.
pub fn contains_folded(haystack: &str, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    haystack.to_lowercase().contains(needle)
}

/// Returns `true` if any of `fields` contains `needle`, ignoring case.
///
/// `needle` must already be lowercased.
pub fn any_contains_folded(fields: &[&str], needle: &str) -> bool {
    fields.iter().any(|field| contains_folded(field, needle))
}
