//! The canonical image record.
//!
//! [`ImageInfo`] consolidates the flat key/value output of a metadata
//! extraction tool into one strongly-typed record, and can re-flatten
//! itself into an equivalent flat map. Construction never fails: absent
//! keys become defaults, malformed values degrade to `None`, and probe
//! failures are logged and treated as "field unavailable".
//!
//! The round-trip contract: flattening a record and rebuilding from the
//! result yields an equivalent record. The flat map is not byte-identical
//! to an arbitrary input map — every populated field re-emits *all* of its
//! synonym keys, and empty fields are omitted entirely.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::probe::FileProbe;
use crate::sidecar;
use crate::tags::{Contact, Copyright, Dates, Gps, Labels, Photo, PictureLocation, Workflow};
use crate::value::{filled, first_filled_owned, TagMap, TagValue};
use crate::web::Url;

/// One image's consolidated metadata. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageInfo {
    /// The image file path (`Image-File` from the map, else the caller's).
    pub file: PathBuf,
    /// Optional source URL the image came from.
    pub url: Option<Url>,
    /// File modification timestamp, from the probe.
    pub file_date: Option<NaiveDateTime>,
    /// Pixel width (`Image Width`, else probed; 0 when unavailable).
    pub width: u32,
    /// Pixel height (`Image Height`, else probed; 0 when unavailable).
    pub height: u32,
    /// `MIME Type`, `Format`, or extension-based lookup.
    pub mime_type: Option<String>,
    /// `Description`, `Image Description`, or `Caption-Abstract`.
    pub description: Option<String>,
    /// `Keywords` + `Subject`, deduplicated case-insensitively with
    /// first-occurrence order and casing preserved.
    pub keywords: Vec<String>,
    /// `Headline`.
    pub headline: Option<String>,
    /// `Category`.
    pub category: Option<String>,
    /// `Supplemental Categories`.
    pub other_categories: Vec<String>,
    /// `Caption Writer` or `Writer-Editor`.
    pub caption_writer: Option<String>,
    pub contact: Contact,
    pub copyright: Copyright,
    pub dates: Dates,
    pub gps: Gps,
    pub labels: Labels,
    pub location: PictureLocation,
    pub photo: Photo,
    pub workflow: Workflow,
}

impl ImageInfo {
    /// Build the canonical record from a flat tag map.
    ///
    /// `file` names the backing image; the probe supplies dimensions, MIME
    /// type, and the file timestamp when the map does not. Construction
    /// cannot fail — see the module docs for the degradation rules.
    pub fn from_tags(
        data: &TagMap,
        file: &Path,
        url: Option<Url>,
        probe: &dyn FileProbe,
    ) -> Self {
        let file_date = match probe.modified(file) {
            Ok(dt) => Some(dt),
            Err(e) => {
                log::debug!("no file timestamp for {}: {e}", file.display());
                None
            }
        };

        let explicit_dimensions = match (
            filled(data, "Image Width").and_then(|w| w.trim().parse::<u32>().ok()),
            filled(data, "Image Height").and_then(|h| h.trim().parse::<u32>().ok()),
        ) {
            (Some(w), Some(h)) => Some((w, h)),
            _ => None,
        };
        let (width, height) = explicit_dimensions.unwrap_or_else(|| {
            probe.dimensions(file).unwrap_or_else(|e| {
                log::debug!("no dimensions for {}: {e}", file.display());
                (0, 0)
            })
        });

        let mime_type = first_filled_owned(data, &["MIME Type", "Format"])
            .or_else(|| probe.mime_type(file));

        ImageInfo {
            file: filled(data, "Image-File")
                .map(PathBuf::from)
                .unwrap_or_else(|| file.to_path_buf()),
            url,
            file_date,
            width,
            height,
            mime_type,
            description: first_filled_owned(
                data,
                &["Description", "Image Description", "Caption-Abstract"],
            ),
            keywords: resolve_keywords(data),
            headline: first_filled_owned(data, &["Headline"]),
            category: first_filled_owned(data, &["Category"]),
            other_categories: resolve_categories(data),
            caption_writer: first_filled_owned(data, &["Caption Writer", "Writer-Editor"]),
            contact: Contact::from_tags(data),
            copyright: Copyright::from_tags(data),
            dates: Dates::from_tags(data),
            gps: Gps::from_tags(data),
            labels: Labels::from_tags(data),
            location: PictureLocation::from_tags(data),
            photo: Photo::from_tags(data),
            workflow: Workflow::from_tags(data),
        }
    }

    /// Build from sidecar JSON. `None` when the JSON is malformed or
    /// contains no object — never an error.
    pub fn from_json(json: &str, file: &Path, probe: &dyn FileProbe) -> Option<Self> {
        let maps = match sidecar::parse(json) {
            Ok(maps) => maps,
            Err(e) => {
                log::debug!("unusable sidecar JSON: {e}");
                return None;
            }
        };
        maps.into_iter()
            .next()
            .map(|map| Self::from_tags(&map, file, None, probe))
    }

    /// Re-flatten the record.
    ///
    /// Every populated canonical field is emitted under all of its synonym
    /// keys with identical values; empty fields are omitted (except the
    /// copyright notice, which is canonical and always present).
    pub fn to_tags(&self) -> TagMap {
        let mut out = TagMap::new();

        out.insert("Image Width".into(), TagValue::from(self.width.to_string()));
        out.insert(
            "Image Height".into(),
            TagValue::from(self.height.to_string()),
        );

        if let Some(mime) = &self.mime_type {
            out.insert("MIME Type".into(), TagValue::from(mime.clone()));
            out.insert("Format".into(), TagValue::from(mime.clone()));
        }

        if let Some(description) = &self.description {
            for key in ["Description", "Image Description", "Caption-Abstract"] {
                out.insert(key.into(), TagValue::from(description.clone()));
            }
        }

        if !self.keywords.is_empty() {
            let joined = self.keywords.join(", ");
            out.insert("Keywords".into(), TagValue::from(joined.clone()));
            out.insert("Subject".into(), TagValue::from(joined));
        }

        out.insert(
            "Image-File".into(),
            TagValue::from(self.file.display().to_string()),
        );

        self.contact.add_to_tags(&mut out);
        self.copyright.add_to_tags(&mut out);
        self.location.add_to_tags(&mut out);
        self.dates.add_to_tags(&mut out);
        self.workflow.add_to_tags(&mut out);
        self.gps.add_to_tags(&mut out);
        self.labels.add_to_tags(&mut out);

        if let Some(headline) = &self.headline {
            out.insert("Headline".into(), TagValue::from(headline.clone()));
        }

        if let Some(category) = &self.category {
            out.insert("Category".into(), TagValue::from(category.clone()));
        }

        if !self.other_categories.is_empty() {
            out.insert(
                "Supplemental Categories".into(),
                TagValue::from(self.other_categories.join(", ")),
            );
        }

        self.photo.add_to_tags(&mut out);

        if let Some(writer) = &self.caption_writer {
            out.insert("Caption Writer".into(), TagValue::from(writer.clone()));
            out.insert("Writer-Editor".into(), TagValue::from(writer.clone()));
        }

        out
    }

    /// A short display summary: author, date, and the key camera facts.
    ///
    /// The author falls back to the caption writer, the date to the file
    /// timestamp, and the camera model to the make. `date_format` is a
    /// chrono format string.
    pub fn summary(&self, show_model: bool, date_format: &str) -> Vec<(&'static str, String)> {
        let mut rows = Vec::new();

        if let Some(author) = self.contact.author.as_ref().or(self.caption_writer.as_ref()) {
            rows.push(("Author", author.clone()));
        }

        if let Some(date) = self.dates.oldest().or(self.file_date) {
            rows.push(("Date", date.format(date_format).to_string()));
        }

        if show_model {
            if let Some(camera) = self.photo.camera_model.as_ref().or(self.photo.make.as_ref()) {
                rows.push(("Camera", camera.clone()));
            }
        }

        if let Some(lens) = &self.photo.lens_id {
            rows.push(("Lens", lens.clone()));
        }
        if let Some(aperture) = &self.photo.aperture {
            rows.push(("Aperture", format!("f/{aperture}")));
        }
        if let Some(focal) = &self.photo.focal_length {
            rows.push(("Focal length", focal.clone()));
        }
        if self.photo.iso > 0 {
            rows.push(("ISO", self.photo.iso.to_string()));
        }
        if let Some(exposure) = &self.photo.exposure {
            rows.push(("Exposure", format!("{exposure} s")));
        }

        rows
    }

    /// The copyright line for this image: the notice when present, else
    /// `©<year>` from the oldest known date plus the first available of
    /// mail address, author, and caption writer.
    pub fn copyright_text(&self) -> String {
        if !self.copyright.notice.is_empty() {
            return self.copyright.notice.clone();
        }

        let mut text = String::from("©");
        if let Some(date) = self.dates.oldest().or(self.file_date) {
            text.push_str(&date.format("%Y").to_string());
        }

        let holder = self
            .contact
            .email
            .as_ref()
            .map(|mail| mail.to_string())
            .or_else(|| self.contact.author.clone())
            .or_else(|| self.caption_writer.clone());

        if let Some(holder) = holder {
            text.push(' ');
            text.push_str(&holder);
        }

        text
    }
}

/// Merge `Keywords` and `Subject`, splitting comma-separated strings,
/// trimming, dropping empties, and deduplicating case-insensitively while
/// keeping the first occurrence's position and casing.
fn resolve_keywords(data: &TagMap) -> Vec<String> {
    let mut keywords: Vec<String> = Vec::new();
    let mut seen: Vec<String> = Vec::new();

    for key in ["Keywords", "Subject"] {
        let Some(value) = data.get(key) else { continue };
        for item in value.items() {
            for keyword in item.split(',') {
                let keyword = keyword.trim();
                if keyword.is_empty() {
                    continue;
                }
                let folded = keyword.to_lowercase();
                if seen.contains(&folded) {
                    continue;
                }
                seen.push(folded);
                keywords.push(keyword.to_string());
            }
        }
    }

    keywords
}

/// `Supplemental Categories`, split on `", "` and trimmed.
fn resolve_categories(data: &TagMap) -> Vec<String> {
    let Some(value) = data.get("Supplemental Categories") else {
        return Vec::new();
    };
    value
        .items()
        .iter()
        .flat_map(|item| item.split(", "))
        .map(str::trim)
        .filter(|c| !c.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::probe::NullProbe;
    use anyhow::Result;

    /// Probe with canned answers, standing in for a real image file.
    struct StubProbe;

    impl FileProbe for StubProbe {
        fn dimensions(&self, _path: &Path) -> Result<(u32, u32)> {
            Ok((640, 480))
        }

        fn mime_type(&self, _path: &Path) -> Option<String> {
            Some("image/jpeg".to_string())
        }

        fn modified(&self, _path: &Path) -> Result<NaiveDateTime> {
            Ok(crate::tags::parse_datetime("2022-03-01 12:00:00").unwrap())
        }
    }

    fn map(entries: &[(&str, &str)]) -> TagMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), TagValue::from(*v)))
            .collect()
    }

    fn build(entries: &[(&str, &str)]) -> ImageInfo {
        ImageInfo::from_tags(&map(entries), Path::new("photo.jpg"), None, &StubProbe)
    }

    // ── construction ─────────────────────────────────────────────────

    #[test]
    fn empty_map_degrades_to_probe_and_defaults() {
        let info = build(&[]);
        assert_eq!((info.width, info.height), (640, 480));
        assert_eq!(info.mime_type.as_deref(), Some("image/jpeg"));
        assert_eq!(info.description, None);
        assert!(info.keywords.is_empty());
        assert_eq!(info.category, None);
        assert_eq!(info.gps.coordinate, None);
        assert!(!info.dates.has_value());
        assert_eq!(info.copyright.notice, "");
    }

    #[test]
    fn explicit_dimensions_beat_the_probe() {
        let info = build(&[("Image Width", "800"), ("Image Height", "600")]);
        assert_eq!((info.width, info.height), (800, 600));
    }

    #[test]
    fn half_missing_dimensions_fall_back_to_probe() {
        let info = build(&[("Image Width", "800")]);
        assert_eq!((info.width, info.height), (640, 480));
    }

    #[test]
    fn failing_probe_never_fails_construction() {
        let info = ImageInfo::from_tags(&TagMap::new(), Path::new("gone.jpg"), None, &NullProbe);
        assert_eq!((info.width, info.height), (0, 0));
        assert_eq!(info.mime_type, None);
        assert_eq!(info.file_date, None);
    }

    #[test]
    fn description_precedence() {
        let info = build(&[
            ("Caption-Abstract", "c"),
            ("Image Description", "i"),
            ("Description", "d"),
        ]);
        assert_eq!(info.description.as_deref(), Some("d"));
    }

    #[test]
    fn mime_precedence() {
        let info = build(&[("Format", "image/png")]);
        assert_eq!(info.mime_type.as_deref(), Some("image/png"));
        let info = build(&[("MIME Type", "image/tiff"), ("Format", "image/png")]);
        assert_eq!(info.mime_type.as_deref(), Some("image/tiff"));
    }

    #[test]
    fn image_file_key_overrides_path() {
        let info = build(&[("Image-File", "/archive/photo.jpg")]);
        assert_eq!(info.file, PathBuf::from("/archive/photo.jpg"));
    }

    // ── keywords ─────────────────────────────────────────────────────

    #[test]
    fn keyword_dedup_is_case_insensitive_order_preserving() {
        let info = build(&[("Keywords", "Beach, beach, Sun")]);
        assert_eq!(info.keywords, vec!["Beach", "Sun"]);
    }

    #[test]
    fn keywords_merge_with_subject() {
        let info = build(&[("Keywords", "Beach, Sun"), ("Subject", "sun, Sea")]);
        assert_eq!(info.keywords, vec!["Beach", "Sun", "Sea"]);
    }

    #[test]
    fn keyword_sequences_accepted() {
        let mut data = map(&[]);
        data.insert(
            "Subject".into(),
            TagValue::Many(vec!["Beach".into(), "Sun".into()]),
        );
        let info = ImageInfo::from_tags(&data, Path::new("p.jpg"), None, &StubProbe);
        assert_eq!(info.keywords, vec!["Beach", "Sun"]);
    }

    #[test]
    fn supplemental_categories_split() {
        let info = build(&[("Supplemental Categories", "Nature, Travel")]);
        assert_eq!(info.other_categories, vec!["Nature", "Travel"]);
    }

    // ── flattening ───────────────────────────────────────────────────

    #[test]
    fn flatten_emits_all_synonyms_of_populated_fields() {
        let info = build(&[
            ("Description", "A sunset"),
            ("Creator", "A. Adams"),
            ("Keywords", "Beach, Sun"),
        ]);
        let out = info.to_tags();

        for key in ["Description", "Image Description", "Caption-Abstract"] {
            assert_eq!(out.get(key).and_then(TagValue::as_str), Some("A sunset"));
        }
        for key in ["Creator", "Artist", "By-line"] {
            assert_eq!(out.get(key).and_then(TagValue::as_str), Some("A. Adams"));
        }
        assert_eq!(out.get("Subject").and_then(TagValue::as_str), Some("Beach, Sun"));
    }

    #[test]
    fn flatten_omits_empty_fields() {
        let out = build(&[]).to_tags();
        assert!(!out.contains_key("Description"));
        assert!(!out.contains_key("Keywords"));
        assert!(!out.contains_key("Headline"));
        assert!(!out.contains_key("GPS Position"));
        // Dimensions and the copyright notice are canonical — always there.
        assert!(out.contains_key("Image Width"));
        assert!(out.contains_key("Copyright"));
    }

    #[test]
    fn round_trip_is_equivalent() {
        let info = build(&[
            ("Image Width", "800"),
            ("Image Height", "600"),
            ("Description", "A sunset"),
            ("Keywords", "Beach, Sun"),
            ("Creator", "A. Adams"),
            ("Copyright", "© 2019 A. Adams"),
            ("City", "Vienna"),
            ("Create Date", "2019:06:01 10:00:00"),
            ("GPS Latitude", "48.25 N"),
            ("GPS Longitude", "16.5 E"),
            ("Make", "Canon"),
            ("ISO", "400"),
            ("Credit", "Agency"),
            ("Source", "Archive"),
            ("Label", "Best of"),
            ("Headline", "Evening light"),
            ("Category", "NAT"),
            ("Caption Writer", "B. Editor"),
        ]);

        let flattened = info.to_tags();
        let rebuilt = ImageInfo::from_tags(&flattened, Path::new("photo.jpg"), None, &StubProbe);
        assert_eq!(rebuilt, info);

        // And flattening again is idempotent.
        assert_eq!(rebuilt.to_tags(), flattened);
    }

    // ── from_json ────────────────────────────────────────────────────

    #[test]
    fn from_json_object() {
        let info = ImageInfo::from_json(
            r#"{"Make": "Canon", "ISO": 400}"#,
            Path::new("p.jpg"),
            &StubProbe,
        )
        .unwrap();
        assert_eq!(info.photo.make.as_deref(), Some("Canon"));
        // Numeric JSON values stringify on load and still reach the
        // integer field.
        assert_eq!(info.photo.iso, 400);
    }

    #[test]
    fn from_json_malformed_is_none() {
        assert!(ImageInfo::from_json("nope", Path::new("p.jpg"), &StubProbe).is_none());
        assert!(ImageInfo::from_json("[]", Path::new("p.jpg"), &StubProbe).is_none());
    }

    // ── display helpers ──────────────────────────────────────────────

    #[test]
    fn summary_author_falls_back_to_caption_writer() {
        let info = build(&[("Writer-Editor", "B. Editor")]);
        let rows = info.summary(true, "%Y-%m-%d %H:%M");
        assert!(rows.contains(&("Author", "B. Editor".to_string())));
    }

    #[test]
    fn summary_date_falls_back_to_file_timestamp() {
        let info = build(&[]);
        let rows = info.summary(true, "%Y-%m-%d");
        assert!(rows.contains(&("Date", "2022-03-01".to_string())));
    }

    #[test]
    fn summary_camera_model_beats_make() {
        let info = build(&[("Make", "Canon"), ("Camera Model Name", "EOS R5")]);
        let rows = info.summary(true, "%Y-%m-%d");
        assert!(rows.contains(&("Camera", "EOS R5".to_string())));

        let rows = info.summary(false, "%Y-%m-%d");
        assert!(!rows.iter().any(|(k, _)| *k == "Camera"));
    }

    #[test]
    fn copyright_text_prefers_notice() {
        let info = build(&[("Copyright", "© 2019 Someone")]);
        assert_eq!(info.copyright_text(), "© 2019 Someone");
    }

    #[test]
    fn copyright_text_derives_year_and_holder() {
        let info = build(&[
            ("Create Date", "2019:06:01 10:00:00"),
            ("Creator", "A. Adams"),
            ("Creator Work Email", "a@example.com"),
        ]);
        assert_eq!(info.copyright_text(), "©2019 a@example.com");

        let info = build(&[("Create Date", "2019:06:01 10:00:00"), ("Creator", "A. Adams")]);
        assert_eq!(info.copyright_text(), "©2019 A. Adams");
    }
}
