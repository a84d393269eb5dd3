//! Keyword search helpers shared by the repository layer.

/// Escape `LIKE` pattern metacharacters so a user-supplied keyword
/// matches as a literal substring.
///
/// Postgres uses `\` as the default escape character; `%` and `_` are
/// wildcards. An empty keyword escapes to an empty string, which the
/// repository wraps as `%%` (matches everything).
pub fn escape_like(keyword: &str) -> String {
    let mut escaped = String::with_capacity(keyword.len());
    for c in keyword.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_keyword_is_unchanged() {
        assert_eq!(escape_like("Intro"), "Intro");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(escape_like("100%_done"), "100\\%\\_done");
    }

    #[test]
    fn backslash_is_escaped() {
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }

    #[test]
    fn empty_keyword_stays_empty() {
        assert_eq!(escape_like(""), "");
    }
}
