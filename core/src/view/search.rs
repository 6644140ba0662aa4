use crate::record::Record;

/// Lowercased search term, or `None` when the search box is blank.
pub fn normalize_term(search: &str) -> Option<String> {
    let term = search.trim();
    (!term.is_empty()).then(|| term.to_lowercase())
}

/// At least one search field contains `term` (already lowercased).
/// Null fields never match.
pub fn matches_search(record: &Record, fields: &[String], term: &str) -> bool {
    fields.iter().any(|field| match record.get(field) {
        Some(value) if !value.is_null() => value.to_display_string().to_lowercase().contains(term),
        _ => false,
    })
}
