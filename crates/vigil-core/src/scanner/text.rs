//! Matching-policy text normalization.
//!
//! Marker text in a live tree is frequently split across nodes or padded
//! with inconsistent spacing, so all comparisons lowercase both sides and
//! collapse whitespace runs to a single space first.

/// Lowercase and collapse every whitespace run to one space
pub fn normalize(input: &str) -> String {
    input
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Case-insensitive, whitespace-normalized substring test
pub fn contains_normalized(haystack: &str, needle: &str) -> bool {
    normalize(haystack).contains(&normalize(needle))
}
