//! String utilities: comma-list splitting and camelCase conversion.

use serde_json::Value;

/// Input accepted by [`split`].
///
/// Explicit tagged form of the loosely-shaped values callers pass to a
/// list option: a comma-delimited string, an already-built list, or
/// anything else (absent, boolean, non-list value), which yields an empty
/// list. Built via `From`, so call sites stay short:
///
/// ```
/// use utilx::string::split;
/// assert_eq!(split("a,b"), vec!["a", "b"]);
/// assert_eq!(split(None::<&str>), Vec::<String>::new());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SplitInput {
    /// A comma-delimited string.
    Text(String),
    /// An existing list, passed through unchanged.
    Items(Vec<String>),
    /// Any other shape; splits to an empty list.
    Other,
}

impl From<&str> for SplitInput {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<String> for SplitInput {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}

impl From<Vec<String>> for SplitInput {
    fn from(items: Vec<String>) -> Self {
        Self::Items(items)
    }
}

impl From<bool> for SplitInput {
    fn from(_: bool) -> Self {
        Self::Other
    }
}

impl<T: Into<SplitInput>> From<Option<T>> for SplitInput {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Other, Into::into)
    }
}

impl From<&Value> for SplitInput {
    fn from(value: &Value) -> Self {
        match value {
            Value::String(s) => Self::Text(s.clone()),
            // Arrays pass through element-for-element; non-string elements
            // keep their compact JSON rendering.
            Value::Array(items) => Self::Items(
                items
                    .iter()
                    .map(|item| match item {
                        Value::String(s) => s.clone(),
                        other => other.to_string(),
                    })
                    .collect(),
            ),
            _ => Self::Other,
        }
    }
}

/// Split a comma-delimited string into its ordered substrings.
///
/// A string with no comma yields a single-element list. Lists are returned
/// unchanged, and any other input shape yields an empty list. Never errors.
pub fn split(input: impl Into<SplitInput>) -> Vec<String> {
    match input.into() {
        SplitInput::Text(s) => s.split(',').map(str::to_string).collect(),
        SplitInput::Items(items) => items,
        SplitInput::Other => Vec::new(),
    }
}

/// Convert a hyphen-separated name to camelCase.
///
/// # Examples
/// ```
/// use utilx::string::camelize;
/// assert_eq!(camelize("totoro"), "totoro");
/// assert_eq!(camelize("totoro-server"), "totoroServer");
/// ```
pub fn camelize(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut chars = s.chars().peekable();
    while let Some(c) = chars.next() {
        // A hyphen only acts as a separator when a word character follows.
        if c == '-'
            && chars
                .peek()
                .is_some_and(|next| next.is_ascii_alphanumeric() || *next == '_')
        {
            if let Some(next) = chars.next() {
                out.push(next.to_ascii_uppercase());
            }
        } else {
            out.push(c);
        }
    }
    out
}

/// Convert a camelCase name back to hyphen-separated form.
///
/// Inserts a hyphen before each ASCII uppercase letter and lowercases it.
/// A leading uppercase letter therefore produces a leading hyphen
/// (`TotoroServer` -> `-totoro-server`); kept for compatibility with the
/// historical behavior.
///
/// # Examples
/// ```
/// use utilx::string::decamelize;
/// assert_eq!(decamelize("totoroServer"), "totoro-server");
/// ```
pub fn decamelize(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for c in s.chars() {
        if c.is_ascii_uppercase() {
            out.push('-');
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}
