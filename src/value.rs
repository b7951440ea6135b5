//! The flat tag map exchanged with metadata extraction tools.
//!
//! Extraction tools (exiftool, exiv2, libexif wrappers) all emit the same
//! basic shape: a single-level map from an English field name to either one
//! string or, for repeatable fields like keywords, an ordered list of
//! strings. [`TagMap`] is that shape; [`TagValue`] is one entry.
//!
//! The same field frequently arrives under several synonym keys
//! (`Creator` / `Artist` / `By-line`). [`first_filled`] is the single
//! precedence rule used everywhere: the first candidate key with a
//! non-empty value wins.

use serde::Serialize;
use std::collections::BTreeMap;

/// One value in the flat map: a single string, or an ordered sequence for
/// repeatable fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TagValue {
    Single(String),
    Many(Vec<String>),
}

/// The flat key/value map produced by extraction tools and re-emitted by
/// [`ImageInfo::to_tags`](crate::info::ImageInfo::to_tags).
pub type TagMap = BTreeMap<String, TagValue>;

impl TagValue {
    /// The value as a single string slice, if it is one and non-empty.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            TagValue::Single(s) if !s.trim().is_empty() => Some(s),
            _ => None,
        }
    }

    /// The value as a list of items.
    ///
    /// A `Many` value yields its items as-is; a `Single` value yields one
    /// item. Empty strings yield nothing.
    pub fn items(&self) -> Vec<&str> {
        match self {
            TagValue::Single(s) if !s.trim().is_empty() => vec![s.as_str()],
            TagValue::Single(_) => Vec::new(),
            TagValue::Many(v) => v
                .iter()
                .map(|s| s.as_str())
                .filter(|s| !s.trim().is_empty())
                .collect(),
        }
    }

    /// Whether the value carries no usable content.
    pub fn is_empty(&self) -> bool {
        match self {
            TagValue::Single(s) => s.trim().is_empty(),
            TagValue::Many(v) => v.iter().all(|s| s.trim().is_empty()),
        }
    }
}

impl From<&str> for TagValue {
    fn from(s: &str) -> Self {
        TagValue::Single(s.to_string())
    }
}

impl From<String> for TagValue {
    fn from(s: String) -> Self {
        TagValue::Single(s)
    }
}

impl From<Vec<String>> for TagValue {
    fn from(v: Vec<String>) -> Self {
        TagValue::Many(v)
    }
}

/// Look up `key` and return its value as a string slice if present and
/// non-empty.
pub fn filled<'a>(map: &'a TagMap, key: &str) -> Option<&'a str> {
    map.get(key).and_then(TagValue::as_str)
}

/// First non-empty value among the candidate keys, evaluated left to right.
///
/// This is the synonym-precedence rule of the whole crate: every canonical
/// field that can arrive under several keys resolves through this one
/// helper.
///
/// # Example
///
/// ```rust
/// use metamerge::value::{first_filled, TagMap};
///
/// let mut map = TagMap::new();
/// map.insert("Artist".into(), "A. Adams".into());
///
/// let author = first_filled(&map, &["Creator", "Artist", "By-line"]);
/// assert_eq!(author, Some("A. Adams"));
/// ```
pub fn first_filled<'a>(map: &'a TagMap, candidates: &[&str]) -> Option<&'a str> {
    candidates.iter().find_map(|key| filled(map, key))
}

/// Same as [`first_filled`] but returns an owned `String`.
pub fn first_filled_owned(map: &TagMap, candidates: &[&str]) -> Option<String> {
    first_filled(map, candidates).map(str::to_string)
}
