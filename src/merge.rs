//! Mapping merge with a configurable overwrite policy.

use serde_json::Value;

/// Plain string-keyed mapping, as produced by [`crate::json::read_json`].
pub type JsonMap = serde_json::Map<String, Value>;

/// Merge `sources` into `target`, left to right.
///
/// For each key of each source: set it if absent from `target`; if already
/// present, replace it only when `overwrite` is `true`. `None` sources are
/// skipped silently.
pub fn mix_into<'a, I>(target: &mut JsonMap, sources: I, overwrite: bool)
where
    I: IntoIterator<Item = Option<&'a JsonMap>>,
{
    for source in sources.into_iter().flatten() {
        for (key, value) in source {
            if overwrite || !target.contains_key(key) {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}

/// Merge `sources` into `target` and return the accumulated mapping.
///
/// A `None` target starts from an empty mapping. With `overwrite = false`
/// (the historical default) the first source to supply a key wins; with
/// `overwrite = true` the last one wins.
pub fn mix<'a, I>(target: Option<JsonMap>, sources: I, overwrite: bool) -> JsonMap
where
    I: IntoIterator<Item = Option<&'a JsonMap>>,
{
    let mut acc = target.unwrap_or_default();
    mix_into(&mut acc, sources, overwrite);
    acc
}
