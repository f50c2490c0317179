//! Helpers for substring search and list pagination.
//!
//! Search across the archive is case-insensitive substring matching
//! (`ILIKE`), so user-supplied terms must have LIKE metacharacters escaped
//! before being embedded in a pattern.

/// Default page size for list endpoints.
pub const DEFAULT_LIST_LIMIT: i64 = 100;

/// Hard cap on page size regardless of what the client asks for.
pub const MAX_LIST_LIMIT: i64 = 500;

/// Clamp a requested limit into `[1, max]`, falling back to `default`.
pub fn clamp_limit(requested: Option<i64>, default: i64, max: i64) -> i64 {
    match requested {
        Some(n) if n >= 1 => n.min(max),
        _ => default,
    }
}

/// Clamp a requested offset to be non-negative.
pub fn clamp_offset(requested: Option<i64>) -> i64 {
    requested.unwrap_or(0).max(0)
}

/// Escape LIKE/ILIKE metacharacters (`\`, `%`, `_`) in a user-supplied term.
///
/// PostgreSQL's default escape character for LIKE is the backslash, so the
/// output is safe to embed directly in an `ILIKE` pattern.
pub fn escape_like(term: &str) -> String {
    term.replace('\\', "\\\\")
        .replace('%', "\\%")
        .replace('_', "\\_")
}

/// Build an `ILIKE` pattern matching `term` anywhere inside a column.
///
/// Leading/trailing whitespace in the term is ignored.
pub fn contains_pattern(term: &str) -> String {
    format!("%{}%", escape_like(term.trim()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_limit_defaults_and_caps() {
        assert_eq!(clamp_limit(None, 100, 500), 100);
        assert_eq!(clamp_limit(Some(0), 100, 500), 100);
        assert_eq!(clamp_limit(Some(-5), 100, 500), 100);
        assert_eq!(clamp_limit(Some(50), 100, 500), 50);
        assert_eq!(clamp_limit(Some(9999), 100, 500), 500);
    }

    #[test]
    fn test_clamp_offset_never_negative() {
        assert_eq!(clamp_offset(None), 0);
        assert_eq!(clamp_offset(Some(-1)), 0);
        assert_eq!(clamp_offset(Some(25)), 25);
    }

    #[test]
    fn test_escape_like_metacharacters() {
        assert_eq!(escape_like("100%"), "100\\%");
        assert_eq!(escape_like("a_b"), "a\\_b");
        assert_eq!(escape_like("back\\slash"), "back\\\\slash");
        assert_eq!(escape_like("plain"), "plain");
    }

    #[test]
    fn test_contains_pattern_trims_and_wraps() {
        assert_eq!(contains_pattern("  electronica "), "%electronica%");
        assert_eq!(contains_pattern("50%"), "%50\\%%");
    }
}
