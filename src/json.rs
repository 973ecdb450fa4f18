//! JSON file persistence helpers.

use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::path::Path;

use crate::error::{Error, Result};
use crate::fs::write_file;
use crate::merge::JsonMap;

/// Read and parse a JSON object file.
///
/// On any failure (missing file, unreadable file, invalid JSON, or a JSON
/// document that is not an object) returns an empty mapping rather than
/// erroring. The swallowed cause is logged.
pub fn read_json(path: impl AsRef<Path>) -> JsonMap {
    let path = path.as_ref();
    let Ok(text) = fs::read_to_string(path) else {
        tracing::debug!(path = %path.display(), "no readable JSON file, using empty mapping");
        return JsonMap::new();
    };
    match serde_json::from_str(&text) {
        Ok(map) => map,
        Err(e) => {
            tracing::warn!(path = %path.display(), error = %e, "invalid JSON, using empty mapping");
            JsonMap::new()
        }
    }
}

/// Serialize `value` as JSON text and write it to `path`.
///
/// Uses the same directory-creating write as [`write_file`] and fully
/// overwrites any prior content.
pub fn write_json<T: Serialize + ?Sized>(path: impl AsRef<Path>, value: &T) -> Result<()> {
    let path = path.as_ref();
    let json =
        serde_json::to_string_pretty(value).map_err(|e| Error::Json(path.to_path_buf(), e))?;
    write_file(path, json)
}

/// Load the JSON value at `path`, fresh from disk.
///
/// Re-reads and re-parses on every call; no result is ever cached, so
/// repeated calls observe changes made to the file in between. Errors
/// (missing file, invalid JSON) propagate.
pub fn load_value(path: impl AsRef<Path>) -> Result<Value> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|e| Error::Io(path.to_path_buf(), e))?;
    serde_json::from_str(&text).map_err(|e| Error::Json(path.to_path_buf(), e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn test_read_json_missing_file() {
        let dir = TempDir::new().unwrap();
        let map = read_json(dir.path().join("path/to/not-existing.json"));
        assert!(map.is_empty());
    }

    #[test]
    fn test_read_json_invalid_content() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("not-json.txt");
        fs::write(&file, "some text").unwrap();
        assert!(read_json(&file).is_empty());
    }

    #[test]
    fn test_read_json_non_object_document() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("list.json");
        fs::write(&file, "[1, 2, 3]").unwrap();
        assert!(read_json(&file).is_empty());
    }

    #[test]
    fn test_read_json_valid_object() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("proper.json");
        fs::write(&file, r#"{"nick": "fool2fish", "job": "web developer"}"#).unwrap();

        let map = read_json(&file);
        assert_eq!(map.len(), 2);
        assert_eq!(map["nick"], "fool2fish");
        assert_eq!(map["job"], "web developer");
    }

    #[test]
    fn test_write_json_creates_parents_and_round_trips() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("path/to/config.json");
        let original = json!({"nick": "fool2fish", "blog": "fool2fish.cn"});

        write_json(&file, &original).unwrap();
        let map = read_json(&file);
        assert_eq!(map.len(), 2);
        assert_eq!(Value::Object(map), original);
    }

    #[test]
    fn test_write_json_overwrites_old_content() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("config.json");
        fs::write(&file, r#"{"nick": "fool2fish", "job": "web developer"}"#).unwrap();

        write_json(&file, &json!({"nick": "fool2fish", "twitter": "fool2fish"})).unwrap();

        let map = read_json(&file);
        assert_eq!(map.len(), 2);
        assert_eq!(map["twitter"], "fool2fish");
        assert!(!map.contains_key("job"));
    }

    #[test]
    fn test_write_json_typed_value() {
        #[derive(serde::Serialize)]
        struct Profile {
            nick: String,
            blog: String,
        }

        let dir = TempDir::new().unwrap();
        let file = dir.path().join("profile.json");
        let profile = Profile {
            nick: "fool2fish".to_string(),
            blog: "fool2fish.cn".to_string(),
        };

        write_json(&file, &profile).unwrap();
        let map = read_json(&file);
        assert_eq!(map["nick"], "fool2fish");
        assert_eq!(map["blog"], "fool2fish.cn");
    }

    #[test]
    fn test_load_value_sees_fresh_content() {
        let dir = TempDir::new().unwrap();
        let file = dir.path().join("fixture.json");

        fs::write(&file, "0").unwrap();
        assert_eq!(load_value(&file).unwrap(), json!(0));

        fs::write(&file, "1").unwrap();
        assert_eq!(load_value(&file).unwrap(), json!(1));
    }

    #[test]
    fn test_load_value_propagates_errors() {
        let dir = TempDir::new().unwrap();
        assert!(load_value(dir.path().join("missing.json")).is_err());

        let file = dir.path().join("broken.json");
        fs::write(&file, "{nope").unwrap();
        assert!(load_value(&file).is_err());
    }
}
