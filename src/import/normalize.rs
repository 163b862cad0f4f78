//! Header and field normalization rules.

/// Normalize a header token: trim, lowercase, collapse internal whitespace
/// runs to a single underscore.
///
/// `" Section Name "` and `"SECTION_NAME"` both normalize to `section_name`.
pub fn normalize_header(raw: &str) -> String {
    raw.trim()
        .to_lowercase()
        .split_whitespace()
        .collect::<Vec<_>>()
        .join("_")
}

/// Clean one field value: absent or empty-after-trim becomes `None`,
/// otherwise the trimmed text.
pub fn clean_field(raw: Option<&str>) -> Option<String> {
    let trimmed = raw?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

/// Parse a price string into a finite `f64`.
///
/// Every character that is not an ASCII digit or a decimal point is stripped
/// first, so currency symbols and surrounding whitespace are tolerated:
/// `"$8.99"`, `" 8.99 "`, and `"8.99"` all yield `8.99`. Returns `None` when
/// nothing numeric remains or the result is not finite.
pub fn parse_price(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();
    cleaned.parse::<f64>().ok().filter(|p| p.is_finite())
}
