//! Date reconciliation.
//!
//! Extraction tools report up to seven overlapping date fields. They merge
//! into three canonical timestamps:
//!
//! - **last_modified** ← `Modify Date`
//! - **created** ← earliest successfully parsed of `Create Date`,
//!   `Date Created`, `Date/Time Created`, `Date/Time Original`
//! - **digitized** ← earliest of `Digital Creation Date/Time`, the
//!   concatenation `Digital Creation Date` + `Digital Creation Time`, and
//!   the already-resolved created value
//!
//! After the candidates resolve, missing slots inherit from the others, so
//! one populated source group populates all three, biased toward the
//! earliest known instant.

use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::value::{filled, TagMap, TagValue};

const CREATED_KEYS: [&str; 4] = [
    "Create Date",
    "Date Created",
    "Date/Time Created",
    "Date/Time Original",
];

/// The three reconciled timestamps.
///
/// Invariant: after construction, either all three are `None` (no source
/// group yielded a value) or all three are `Some`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Dates {
    /// Last change of the image. (`Modify Date`)
    pub last_modified: Option<NaiveDateTime>,
    /// When the image was created/shot.
    pub created: Option<NaiveDateTime>,
    /// When the image was digitized.
    pub digitized: Option<NaiveDateTime>,
}

impl Dates {
    /// Resolve the three timestamps from the flat map.
    pub fn from_tags(data: &TagMap) -> Self {
        let last_modified = filled(data, "Modify Date").and_then(parse_datetime);

        // Earliest successfully parsed creation candidate wins, not simply
        // the first key present.
        let created = CREATED_KEYS
            .iter()
            .filter_map(|key| filled(data, key).and_then(parse_datetime))
            .min();

        let mut digitized_candidates: Vec<NaiveDateTime> = Vec::new();
        if let Some(dt) = filled(data, "Digital Creation Date/Time").and_then(parse_datetime) {
            digitized_candidates.push(dt);
        }
        if let (Some(date), Some(time)) = (
            filled(data, "Digital Creation Date"),
            filled(data, "Digital Creation Time"),
        ) {
            if let Some(dt) = parse_datetime(&format!("{date} {time}")) {
                digitized_candidates.push(dt);
            }
        }
        if let Some(dt) = created {
            digitized_candidates.push(dt);
        }
        let digitized = digitized_candidates.into_iter().min();

        // Cross-fill: once any slot has a value, all three end up set.
        let created = created.or(digitized).or(last_modified);
        let digitized = digitized.or(created);
        let last_modified = last_modified.or(created);

        Dates {
            last_modified,
            created,
            digitized,
        }
    }

    /// Re-emit every populated timestamp under all of its synonym keys,
    /// in the exif string format (`2020:05:01 10:30:00`).
    pub fn add_to_tags(&self, out: &mut TagMap) {
        if let Some(dt) = self.last_modified {
            out.insert(
                "Modify Date".into(),
                TagValue::from(format_exif(&dt)),
            );
        }

        if let Some(dt) = self.created {
            let formatted = format_exif(&dt);
            for key in CREATED_KEYS {
                out.insert(key.into(), TagValue::from(formatted.clone()));
            }
        }

        if let Some(dt) = self.digitized {
            out.insert(
                "Digital Creation Date/Time".into(),
                TagValue::from(format_exif(&dt)),
            );
            out.insert(
                "Digital Creation Date".into(),
                TagValue::from(dt.format("%Y:%m:%d").to_string()),
            );
            out.insert(
                "Digital Creation Time".into(),
                TagValue::from(dt.format("%H:%M:%S").to_string()),
            );
        }
    }

    /// The chronologically earliest of the populated timestamps.
    pub fn oldest(&self) -> Option<NaiveDateTime> {
        [self.last_modified, self.created, self.digitized]
            .into_iter()
            .flatten()
            .min()
    }

    /// Whether any timestamp is set.
    pub fn has_value(&self) -> bool {
        self.last_modified.is_some() || self.created.is_some() || self.digitized.is_some()
    }
}

fn format_exif(dt: &NaiveDateTime) -> String {
    dt.format("%Y:%m:%d %H:%M:%S").to_string()
}

/// Parse a tool-reported date string.
///
/// Handles the exif colon-delimited date (`2020:05:01 10:30:00`), the ISO
/// dashed form, an optional trailing fractional-seconds suffix, and a
/// date without a time part (taken as midnight). Anything else is `None`.
pub fn parse_datetime(s: &str) -> Option<NaiveDateTime> {
    let mut s = s.trim();
    if s.is_empty() {
        return None;
    }

    // "2020:05:01 10:30:00.123" → drop the fractional suffix.
    if let Some((head, tail)) = s.rsplit_once('.') {
        if !tail.is_empty() && tail.chars().all(|c| c.is_ascii_digit()) {
            s = head.trim_end();
        }
    }

    let (date_part, time_part) = match s.split_once(' ') {
        Some((d, t)) => (d, Some(t.trim())),
        None => (s, None),
    };

    // Exif dates delimit with ':'; rewrite to the dashed form.
    let date_part = date_part.replace(':', "-");
    let date = NaiveDate::parse_from_str(&date_part, "%Y-%m-%d").ok()?;

    let time = match time_part {
        None => chrono::NaiveTime::MIN,
        Some(t) => chrono::NaiveTime::parse_from_str(t, "%H:%M:%S")
            .or_else(|_| chrono::NaiveTime::parse_from_str(t, "%H:%M"))
            .ok()?,
    };

    Some(date.and_time(time))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(entries: &[(&str, &str)]) -> TagMap {
        entries
            .iter()
            .map(|(k, v)| (k.to_string(), TagValue::from(*v)))
            .collect()
    }

    fn dt(s: &str) -> NaiveDateTime {
        parse_datetime(s).unwrap()
    }

    // ── parse_datetime ───────────────────────────────────────────────

    #[test]
    fn parses_exif_colon_format() {
        let v = dt("2020:05:01 10:30:00");
        assert_eq!(v.format("%Y-%m-%d %H:%M:%S").to_string(), "2020-05-01 10:30:00");
    }

    #[test]
    fn parses_dashed_format() {
        assert_eq!(dt("2020-05-01 10:30:00"), dt("2020:05:01 10:30:00"));
    }

    #[test]
    fn drops_fractional_seconds() {
        assert_eq!(dt("2020:05:01 10:30:00.123"), dt("2020:05:01 10:30:00"));
    }

    #[test]
    fn date_only_is_midnight() {
        let v = dt("2020-05-01");
        assert_eq!(v.format("%H:%M:%S").to_string(), "00:00:00");
    }

    #[test]
    fn rejects_malformed() {
        assert!(parse_datetime("").is_none());
        assert!(parse_datetime("yesterday").is_none());
        assert!(parse_datetime("2020:13:99 10:00:00").is_none());
        assert!(parse_datetime("2020:05:01 26:00:00").is_none());
    }

    // ── reconciliation ───────────────────────────────────────────────

    #[test]
    fn earliest_created_candidate_wins() {
        let dates = Dates::from_tags(&map(&[
            ("Create Date", "2020-05-01"),
            ("Date Created", "2019-01-01"),
            ("Date/Time Original", "2021-01-01"),
        ]));
        assert_eq!(dates.created, Some(dt("2019-01-01")));
        // Both other slots inherit the created value.
        assert_eq!(dates.last_modified, Some(dt("2019-01-01")));
        assert_eq!(dates.digitized, Some(dt("2019-01-01")));
    }

    #[test]
    fn digitized_from_split_date_and_time() {
        let dates = Dates::from_tags(&map(&[
            ("Digital Creation Date", "2018:06:01"),
            ("Digital Creation Time", "12:00:00"),
        ]));
        assert_eq!(dates.digitized, Some(dt("2018-06-01 12:00:00")));
        assert_eq!(dates.created, Some(dt("2018-06-01 12:00:00")));
        assert_eq!(dates.last_modified, Some(dt("2018-06-01 12:00:00")));
    }

    #[test]
    fn digitized_prefers_earliest_of_candidates() {
        let dates = Dates::from_tags(&map(&[
            ("Digital Creation Date/Time", "2020:01:01 00:00:00"),
            ("Create Date", "2019:01:01 00:00:00"),
        ]));
        // The already-resolved created value is a digitized candidate too.
        assert_eq!(dates.digitized, Some(dt("2019-01-01")));
    }

    #[test]
    fn modify_date_alone_fills_everything() {
        let dates = Dates::from_tags(&map(&[("Modify Date", "2020:06:01 08:00:00")]));
        assert_eq!(dates.created, dates.last_modified);
        assert_eq!(dates.digitized, dates.last_modified);
        assert!(dates.has_value());
    }

    #[test]
    fn unparsable_candidate_is_skipped() {
        let dates = Dates::from_tags(&map(&[
            ("Create Date", "not a date"),
            ("Date Created", "2019-01-01"),
        ]));
        assert_eq!(dates.created, Some(dt("2019-01-01")));
    }

    #[test]
    fn empty_map_stays_empty() {
        let dates = Dates::from_tags(&TagMap::new());
        assert!(!dates.has_value());
        assert_eq!(dates.oldest(), None);
    }

    // ── oldest ───────────────────────────────────────────────────────

    #[test]
    fn oldest_of_three() {
        let dates = Dates {
            last_modified: Some(dt("2020-06-01")),
            created: Some(dt("2019-01-01")),
            digitized: Some(dt("2019-06-01")),
        };
        assert_eq!(dates.oldest(), Some(dt("2019-01-01")));
    }

    // ── re-flattening ────────────────────────────────────────────────

    #[test]
    fn emits_all_synonyms() {
        let dates = Dates::from_tags(&map(&[("Create Date", "2019:03:01 10:00:00")]));
        let mut out = TagMap::new();
        dates.add_to_tags(&mut out);

        for key in CREATED_KEYS {
            assert_eq!(
                out.get(key).and_then(TagValue::as_str),
                Some("2019:03:01 10:00:00"),
                "missing synonym {key}"
            );
        }
        assert_eq!(
            out.get("Digital Creation Date").and_then(TagValue::as_str),
            Some("2019:03:01")
        );
        assert_eq!(
            out.get("Digital Creation Time").and_then(TagValue::as_str),
            Some("10:00:00")
        );
    }

    #[test]
    fn flatten_then_rebuild_is_equivalent() {
        let dates = Dates::from_tags(&map(&[
            ("Modify Date", "2020:06:01 08:00:00"),
            ("Create Date", "2019:01:01 09:30:00"),
        ]));
        let mut out = TagMap::new();
        dates.add_to_tags(&mut out);
        let rebuilt = Dates::from_tags(&out);
        assert_eq!(rebuilt, dates);
    }
}
