//! URL and keyword predicates.

/// Check if a string is an HTTP(S) URL.
///
/// Only the `http://` and `https://` schemes count.
///
/// # Examples
/// ```
/// use utilx::url::is_url;
/// assert!(is_url("http://a.com"));
/// assert!(is_url("https://a.com"));
/// assert!(!is_url("a.com"));
/// assert!(!is_url(""));
/// ```
#[inline]
pub fn is_url(s: &str) -> bool {
    s.starts_with("http://") || s.starts_with("https://")
}

/// Check if a string is a bare keyword: non-empty, no path separator, and
/// not a URL.
///
/// # Examples
/// ```
/// use utilx::url::is_keyword;
/// assert!(is_keyword("abc"));
/// assert!(!is_keyword("a/b/c"));
/// assert!(!is_keyword("http://a.com"));
/// assert!(!is_keyword(""));
/// ```
#[inline]
pub fn is_keyword(s: &str) -> bool {
    !s.is_empty() && !s.contains('/') && !is_url(s)
}
