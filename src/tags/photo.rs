//! Technical photo tag group — camera and exposure details.
//!
//! Exposure and aperture keep the literal source string (`1/250`, `5.6`);
//! reparsing them into fractions loses the tool's original rendering and
//! buys nothing.

use serde::{Deserialize, Serialize};

use crate::value::{filled, first_filled_owned, TagMap, TagValue};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Photo {
    /// `Make`.
    pub make: Option<String>,
    /// `Camera Model Name`.
    pub camera_model: Option<String>,
    /// `Exposure Time`, `Shutter Speed Value`, or `Shutter Speed` — the
    /// literal source string, typically `1/nnn`.
    pub exposure: Option<String>,
    /// `F Number` or `Aperture Value` — literal source string.
    pub aperture: Option<String>,
    /// `ISO`. 0 when absent or unparsable.
    pub iso: u32,
    /// `Lens ID`, falling back to `Lens Info` when the ID is missing or a
    /// bare numeric placeholder.
    pub lens_id: Option<String>,
    /// `Exposure Program`.
    pub exposure_program: Option<String>,
    /// `Exposure Compensation`.
    pub exposure_compensation: Option<String>,
    /// `Metering Mode`.
    pub metering_mode: Option<String>,
    /// `Flash`.
    pub flash: Option<String>,
    /// `Focal Length`.
    pub focal_length: Option<String>,
    /// `Exposure Mode`.
    pub exposure_mode: Option<String>,
}

impl Photo {
    pub fn from_tags(data: &TagMap) -> Self {
        let mut lens_id = first_filled_owned(data, &["Lens ID"]);
        let numeric_placeholder = lens_id
            .as_deref()
            .is_some_and(|s| s.chars().all(|c| c.is_ascii_digit()));
        if lens_id.is_none() || numeric_placeholder {
            if let Some(info) = filled(data, "Lens Info") {
                lens_id = Some(info.to_string());
            }
        }

        Photo {
            make: first_filled_owned(data, &["Make"]),
            camera_model: first_filled_owned(data, &["Camera Model Name"]),
            exposure: first_filled_owned(
                data,
                &["Exposure Time", "Shutter Speed Value", "Shutter Speed"],
            ),
            aperture: first_filled_owned(data, &["F Number", "Aperture Value"]),
            iso: filled(data, "ISO").map(parse_iso).unwrap_or(0),
            lens_id,
            exposure_program: first_filled_owned(data, &["Exposure Program"]),
            exposure_compensation: first_filled_owned(data, &["Exposure Compensation"]),
            metering_mode: first_filled_owned(data, &["Metering Mode"]),
            flash: first_filled_owned(data, &["Flash"]),
            focal_length: first_filled_owned(data, &["Focal Length"]),
            exposure_mode: first_filled_owned(data, &["Exposure Mode"]),
        }
    }

    pub fn add_to_tags(&self, out: &mut TagMap) {
        if let Some(make) = &self.make {
            out.insert("Make".into(), TagValue::from(make.clone()));
        }
        if let Some(model) = &self.camera_model {
            out.insert("Camera Model Name".into(), TagValue::from(model.clone()));
        }

        if let Some(exposure) = &self.exposure {
            for key in ["Exposure Time", "Shutter Speed Value", "Shutter Speed"] {
                out.insert(key.into(), TagValue::from(exposure.clone()));
            }
        }

        if let Some(aperture) = &self.aperture {
            out.insert("F Number".into(), TagValue::from(aperture.clone()));
            out.insert("Aperture Value".into(), TagValue::from(aperture.clone()));
        }

        if self.iso > 0 {
            out.insert("ISO".into(), TagValue::from(self.iso.to_string()));
        }

        if let Some(lens) = &self.lens_id {
            out.insert("Lens ID".into(), TagValue::from(lens.clone()));
        }

        let singles = [
            ("Exposure Program", &self.exposure_program),
            ("Exposure Compensation", &self.exposure_compensation),
            ("Metering Mode", &self.metering_mode),
            ("Flash", &self.flash),
            ("Focal Length", &self.focal_length),
            ("Exposure Mode", &self.exposure_mode),
        ];
        for (key, value) in singles {
            if let Some(v) = value {
                out.insert(key.into(), TagValue::from(v.clone()));
            }
        }
    }
}

/// `intval`-style ISO parse: leading integer digits count, the rest is
/// ignored; no digits means 0.
fn parse_iso(s: &str) -> u32 {
    let digits: String = s.trim().chars().take_while(|c| c.is_ascii_digit()).collect();
    digits.parse().unwrap_or(0)
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

    #[test]
    fn exposure_precedence() {
        let p = Photo::from_tags(&map(&[
            ("Shutter Speed", "1/125"),
            ("Shutter Speed Value", "1/250"),
        ]));
        assert_eq!(p.exposure.as_deref(), Some("1/250"));
    }

    #[test]
    fn exposure_keeps_literal_string() {
        let p = Photo::from_tags(&map(&[("Exposure Time", "1/250")]));
        assert_eq!(p.exposure.as_deref(), Some("1/250"));
    }

    #[test]
    fn iso_parses_leading_digits() {
        assert_eq!(parse_iso("400"), 400);
        assert_eq!(parse_iso("400 (auto)"), 400);
        assert_eq!(parse_iso("auto"), 0);
    }

    #[test]
    fn iso_defaults_to_zero() {
        let p = Photo::from_tags(&TagMap::new());
        assert_eq!(p.iso, 0);
    }

    #[test]
    fn numeric_lens_id_falls_back_to_lens_info() {
        let p = Photo::from_tags(&map(&[
            ("Lens ID", "142"),
            ("Lens Info", "24-70mm f/2.8"),
        ]));
        assert_eq!(p.lens_id.as_deref(), Some("24-70mm f/2.8"));

        let p = Photo::from_tags(&map(&[("Lens ID", "EF 50mm f/1.8")]));
        assert_eq!(p.lens_id.as_deref(), Some("EF 50mm f/1.8"));
    }

    #[test]
    fn lens_info_when_id_missing() {
        let p = Photo::from_tags(&map(&[("Lens Info", "24-70mm f/2.8")]));
        assert_eq!(p.lens_id.as_deref(), Some("24-70mm f/2.8"));
    }

    #[test]
    fn zero_iso_not_emitted() {
        let mut out = TagMap::new();
        Photo::default().add_to_tags(&mut out);
        assert!(!out.contains_key("ISO"));
    }

    #[test]
    fn round_trip_is_equivalent() {
        let p = Photo::from_tags(&map(&[
            ("Make", "Canon"),
            ("Camera Model Name", "EOS R5"),
            ("Exposure Time", "1/250"),
            ("F Number", "5.6"),
            ("ISO", "400"),
            ("Lens ID", "RF 24-70mm"),
            ("Focal Length", "35.0 mm"),
        ]));
        let mut out = TagMap::new();
        p.add_to_tags(&mut out);
        assert_eq!(Photo::from_tags(&out), p);
    }
}
