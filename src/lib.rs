//! # metamerge
//!
//! Consolidate the flat key/value metadata of an image — the overlapping
//! EXIF, IPTC, and XMP fields a tool like exiftool reports — into one
//! canonical, strongly-typed record, and flatten it back out again.
//!
//! Extraction tools expose the same fact under several names (`Creator`,
//! `Artist`, `By-line`), in several formats, and with conflicting values.
//! [`ImageInfo`](info::ImageInfo) resolves each fact once, by fixed
//! precedence rules, and re-emits it under every synonym so any consumer
//! finds it under the key it expects.
//!
//! ## Quick Start
//!
//! Build a record from an exiftool JSON sidecar:
//!
//! ```rust,no_run
//! use metamerge::info::ImageInfo;
//! use metamerge::probe::FsProbe;
//! use std::path::Path;
//!
//! let json = std::fs::read_to_string("photo.json").unwrap();
//! let info = ImageInfo::from_json(&json, Path::new("photo.jpg"), &FsProbe)
//!     .expect("malformed sidecar");
//!
//! println!("{}", info.copyright_text());
//! for (label, value) in info.summary(true, "%Y-%m-%d %H:%M") {
//!     println!("{label}: {value}");
//! }
//! ```
//!
//! Or from a flat map you already hold, and flatten it back:
//!
//! ```rust
//! use metamerge::info::ImageInfo;
//! use metamerge::probe::NullProbe;
//! use metamerge::value::{TagMap, TagValue};
//! use std::path::Path;
//!
//! let mut tags = TagMap::new();
//! tags.insert("Creator".into(), TagValue::from("A. Adams"));
//! tags.insert("Keywords".into(), TagValue::from("Beach, beach, Sun"));
//!
//! let info = ImageInfo::from_tags(&tags, Path::new("photo.jpg"), None, &NullProbe);
//! assert_eq!(info.keywords, vec!["Beach", "Sun"]);
//!
//! let flat = info.to_tags();
//! assert_eq!(flat.get("Artist"), flat.get("By-line"));
//! ```
//!
//! ## Localized keys
//!
//! [`LocaleTable`](locale::LocaleTable) renames the flat map's English
//! keys into a display language and back:
//!
//! ```rust
//! use metamerge::locale::LocaleTable;
//! use metamerge::value::{TagMap, TagValue};
//!
//! let mut tags = TagMap::new();
//! tags.insert("Creator".into(), TagValue::from("A. Adams"));
//!
//! let table = LocaleTable::builtin();
//! let german = table.convert_to(&tags, "de");
//! assert!(german.contains_key("Autor"));
//! assert_eq!(table.convert_from(&german, "de"), tags);
//! ```

pub mod config;
pub mod coord;
pub mod info;
pub mod locale;
pub mod probe;
pub mod sidecar;
pub mod tags;
pub mod value;
pub mod web;

pub use info::ImageInfo;
pub use value::{TagMap, TagValue};
