//! Slug validation for text primary keys such as table template IDs.

/// Checks whether `value` is a lowercase slug.
///
/// A slug is non-empty, made of ASCII lowercase letters, digits and dashes, and neither
/// starts nor ends with a dash.
///
/// # Example
/// ```ignore
/// assert!(is_valid_slug("round-60"));
/// assert!(!is_valid_slug("Round 60"));
/// ```
pub fn is_valid_slug(value: &str) -> bool {
    !value.is_empty()
        && !value.starts_with('-')
        && !value.ends_with('-')
        && value
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-')
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Expect seeded template IDs to be accepted
    #[test]
    fn accepts_template_ids() {
        assert!(is_valid_slug("round-60"));
        assert!(is_valid_slug("rect-8ft"));
        assert!(is_valid_slug("serpentine"));
    }

    /// Expect uppercase, whitespace and edge dashes to be rejected
    #[test]
    fn rejects_malformed_ids() {
        assert!(!is_valid_slug(""));
        assert!(!is_valid_slug("Round-60"));
        assert!(!is_valid_slug("round 60"));
        assert!(!is_valid_slug("-round"));
        assert!(!is_valid_slug("round-"));
        assert!(!is_valid_slug("round_60"));
    }
}
