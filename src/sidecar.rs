//! JSON sidecar persistence of the flat tag map.
//!
//! The sidecar format is simply the flat map serialized as JSON, keyed by
//! the canonical English field names. Loading also accepts the
//! array-of-objects shape exiftool emits with `-j`; scalar values
//! (numbers, booleans) stringify, arrays become ordered sequences, and
//! nested objects are skipped with a warning.

use anyhow::{Context, Result};
use serde_json::Value;
use std::path::Path;

use crate::value::{TagMap, TagValue};

/// Parse sidecar JSON into one tag map per contained object.
///
/// A top-level object yields one map; a top-level array (exiftool `-j`)
/// yields one per element. Anything else is an error.
pub fn parse(json: &str) -> Result<Vec<TagMap>> {
    let value: Value = serde_json::from_str(json).context("Failed to parse sidecar JSON")?;

    match value {
        Value::Object(map) => Ok(vec![object_to_tags(map)]),
        Value::Array(items) => Ok(items
            .into_iter()
            .filter_map(|item| match item {
                Value::Object(map) => Some(object_to_tags(map)),
                other => {
                    log::warn!("skipping non-object sidecar entry: {other}");
                    None
                }
            })
            .collect()),
        _ => anyhow::bail!("Sidecar JSON must be an object or an array of objects"),
    }
}

/// Load and parse a sidecar file.
pub fn load(path: &Path) -> Result<Vec<TagMap>> {
    let contents = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read sidecar {}", path.display()))?;
    parse(&contents)
}

/// Serialize a tag map as pretty-printed sidecar JSON.
pub fn to_json(map: &TagMap) -> Result<String> {
    serde_json::to_string_pretty(map).context("Failed to serialize sidecar JSON")
}

/// Write a tag map to a sidecar file.
pub fn save(map: &TagMap, path: &Path) -> Result<()> {
    let contents = to_json(map)?;
    std::fs::write(path, contents)
        .with_context(|| format!("Failed to write sidecar {}", path.display()))?;
    log::debug!("Sidecar written: {}", path.display());
    Ok(())
}

fn object_to_tags(object: serde_json::Map<String, Value>) -> TagMap {
    let mut tags = TagMap::new();
    for (key, value) in object {
        match value_to_tag(value) {
            Some(tag) => {
                tags.insert(key, tag);
            }
            None => log::warn!("skipping nested sidecar value under {key:?}"),
        }
    }
    tags
}

fn value_to_tag(value: Value) -> Option<TagValue> {
    match value {
        Value::String(s) => Some(TagValue::Single(s)),
        Value::Number(n) => Some(TagValue::Single(n.to_string())),
        Value::Bool(b) => Some(TagValue::Single(if b { "True" } else { "False" }.into())),
        Value::Null => Some(TagValue::Single(String::new())),
        Value::Array(items) => Some(TagValue::Many(
            items.into_iter().filter_map(scalar_to_string).collect(),
        )),
        Value::Object(_) => None,
    }
}

fn scalar_to_string(value: Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(if b { "True" } else { "False" }.into()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn object_shape() {
        let maps = parse(r#"{"Make": "Canon", "ISO": 400}"#).unwrap();
        assert_eq!(maps.len(), 1);
        assert_eq!(maps[0].get("Make").and_then(TagValue::as_str), Some("Canon"));
        // Numbers stringify.
        assert_eq!(maps[0].get("ISO").and_then(TagValue::as_str), Some("400"));
    }

    #[test]
    fn exiftool_array_shape() {
        let maps = parse(r#"[{"Make": "Canon"}, {"Make": "Nikon"}]"#).unwrap();
        assert_eq!(maps.len(), 2);
        assert_eq!(maps[1].get("Make").and_then(TagValue::as_str), Some("Nikon"));
    }

    #[test]
    fn array_value_becomes_sequence() {
        let maps = parse(r#"{"Keywords": ["Beach", "Sun"]}"#).unwrap();
        assert_eq!(
            maps[0].get("Keywords"),
            Some(&TagValue::Many(vec!["Beach".into(), "Sun".into()]))
        );
    }

    #[test]
    fn booleans_stringify_like_the_flag_field() {
        let maps = parse(r#"{"Copyright Flag": true}"#).unwrap();
        assert_eq!(
            maps[0].get("Copyright Flag").and_then(TagValue::as_str),
            Some("True")
        );
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(parse("not json").is_err());
        assert!(parse("42").is_err());
    }

    #[test]
    fn save_and_load_round_trip() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("photo.json");

        let mut map = TagMap::new();
        map.insert("Make".into(), TagValue::from("Canon"));
        map.insert(
            "Keywords".into(),
            TagValue::Many(vec!["Beach".into(), "Sun".into()]),
        );

        save(&map, &path).unwrap();
        let loaded = load(&path).unwrap();
        assert_eq!(loaded, vec![map]);
    }
}
