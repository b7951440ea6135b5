//! Geographic coordinate parsing, validation, and formatting.
//!
//! Extraction tools expose GPS data in two shapes: a separate
//! latitude/longitude pair, or a combined position string. Each axis value
//! may be a signed decimal (`48.2`, `-16.37`), a decimal with a hemisphere
//! suffix (`48.2 N`), or the exiftool degrees/minutes/seconds form
//! (`48 deg 12' 30.00" N`). All three parse to signed decimal degrees.
//!
//! A coordinate is usable only when both axes fall inside the valid
//! latitude/longitude ranges; out-of-range input is discarded by the
//! caller, not clamped.

use serde::{Deserialize, Serialize};

/// Which axis a value belongs to. Decides the valid range and the
/// hemisphere letters used when formatting.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Latitude,
    Longitude,
}

impl Axis {
    /// Positive/negative hemisphere letter for this axis.
    fn hemispheres(self) -> (char, char) {
        match self {
            Axis::Latitude => ('N', 'S'),
            Axis::Longitude => ('E', 'W'),
        }
    }

    /// Whether `value` lies inside the valid range for this axis.
    pub fn in_range(self, value: f64) -> bool {
        match self {
            Axis::Latitude => (-90.0..=90.0).contains(&value),
            Axis::Longitude => (-180.0..=180.0).contains(&value),
        }
    }
}

/// A geographic coordinate in signed decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    /// Parse a separate latitude/longitude value pair.
    pub fn parse_pair(latitude: &str, longitude: &str) -> Option<Self> {
        Some(Coordinate {
            latitude: parse_angle(latitude, Axis::Latitude)?,
            longitude: parse_angle(longitude, Axis::Longitude)?,
        })
    }

    /// Parse a combined position string (`"<latitude>, <longitude>"`).
    pub fn parse_position(position: &str) -> Option<Self> {
        let (lat, lon) = position.split_once(',')?;
        Self::parse_pair(lat, lon)
    }

    /// Both axes inside their valid ranges.
    pub fn is_valid(&self) -> bool {
        Axis::Latitude.in_range(self.latitude) && Axis::Longitude.in_range(self.longitude)
    }

    /// The exiftool-style rendering of one axis, e.g. `48 deg 12' 30.00" N`.
    pub fn format_axis(&self, axis: Axis) -> String {
        let value = match axis {
            Axis::Latitude => self.latitude,
            Axis::Longitude => self.longitude,
        };
        format_angle(value, axis)
    }

    /// The combined exiftool-style position string.
    pub fn format_position(&self) -> String {
        format!(
            "{}, {}",
            self.format_axis(Axis::Latitude),
            self.format_axis(Axis::Longitude)
        )
    }
}

/// Parse one axis value to signed decimal degrees.
///
/// Accepted forms: signed decimal, decimal with hemisphere letter or word
/// suffix, and exiftool DMS (`48 deg 12' 30.00" N`). Returns `None` for
/// anything else; the range is not checked here.
pub fn parse_angle(s: &str, axis: Axis) -> Option<f64> {
    let mut s = s.trim();
    if s.is_empty() {
        return None;
    }

    // Split off a hemisphere suffix ("N", "north", …) if present.
    let mut sign = 1.0;
    if let Some(last) = s.rsplit_once(char::is_whitespace).map(|(_, t)| t).or(Some(s)) {
        let hemisphere = match last.to_ascii_uppercase().as_str() {
            "N" | "NORTH" if axis == Axis::Latitude => Some(1.0),
            "S" | "SOUTH" if axis == Axis::Latitude => Some(-1.0),
            "E" | "EAST" if axis == Axis::Longitude => Some(1.0),
            "W" | "WEST" if axis == Axis::Longitude => Some(-1.0),
            _ => None,
        };
        if let Some(h) = hemisphere {
            sign = h;
            s = s[..s.len() - last.len()].trim_end();
            if s.is_empty() {
                return None;
            }
        }
    }

    let magnitude = if s.contains("deg") {
        parse_dms(s)?
    } else {
        s.parse::<f64>().ok()?
    };

    Some(sign * magnitude)
}

/// Parse the exiftool DMS body: `48 deg 12' 30.00"`.
fn parse_dms(s: &str) -> Option<f64> {
    let mut parts = s.split_whitespace();
    let degrees: f64 = parts.next()?.parse().ok()?;
    if parts.next()? != "deg" {
        return None;
    }
    let minutes: f64 = match parts.next() {
        Some(tok) => tok.trim_end_matches('\'').parse().ok()?,
        None => 0.0,
    };
    let seconds: f64 = match parts.next() {
        Some(tok) => tok.trim_end_matches('"').parse().ok()?,
        None => 0.0,
    };
    if parts.next().is_some() {
        return None;
    }
    Some(degrees + minutes / 60.0 + seconds / 3600.0)
}

/// Format a signed decimal angle in the exiftool DMS shape.
fn format_angle(value: f64, axis: Axis) -> String {
    let (positive, negative) = axis.hemispheres();
    let hemisphere = if value < 0.0 { negative } else { positive };
    let magnitude = value.abs();
    let degrees = magnitude.floor();
    let minutes_full = (magnitude - degrees) * 60.0;
    let minutes = minutes_full.floor();
    let seconds = (minutes_full - minutes) * 60.0;
    format!("{degrees:.0} deg {minutes:.0}' {seconds:.2}\" {hemisphere}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-6
    }

    // ── parse_angle ──────────────────────────────────────────────────

    #[test]
    fn decimal_with_hemisphere() {
        assert!(close(parse_angle("48.2 N", Axis::Latitude).unwrap(), 48.2));
        assert!(close(parse_angle("48.2 S", Axis::Latitude).unwrap(), -48.2));
        assert!(close(parse_angle("16.3 E", Axis::Longitude).unwrap(), 16.3));
        assert!(close(parse_angle("16.3 W", Axis::Longitude).unwrap(), -16.3));
    }

    #[test]
    fn plain_signed_decimal() {
        assert!(close(parse_angle("-48.2", Axis::Latitude).unwrap(), -48.2));
        assert!(close(parse_angle("16.37", Axis::Longitude).unwrap(), 16.37));
    }

    #[test]
    fn exiftool_dms() {
        let v = parse_angle("48 deg 12' 30.00\" N", Axis::Latitude).unwrap();
        assert!(close(v, 48.0 + 12.0 / 60.0 + 30.0 / 3600.0));

        let v = parse_angle("16 deg 22' 30.00\" W", Axis::Longitude).unwrap();
        assert!(close(v, -(16.0 + 22.0 / 60.0 + 30.0 / 3600.0)));
    }

    #[test]
    fn hemisphere_must_match_axis() {
        // "E" is not a latitude hemisphere, so the whole token must parse
        // as a number — it does not, so the value is rejected.
        assert!(parse_angle("48.2 E", Axis::Latitude).is_none());
    }

    #[test]
    fn garbage_rejected() {
        assert!(parse_angle("", Axis::Latitude).is_none());
        assert!(parse_angle("north", Axis::Latitude).is_none());
        assert!(parse_angle("48 deg x", Axis::Latitude).is_none());
    }

    // ── Coordinate ───────────────────────────────────────────────────

    #[test]
    fn pair_and_position_agree() {
        let a = Coordinate::parse_pair("48.2 N", "16.3 E").unwrap();
        let b = Coordinate::parse_position("48.2 N, 16.3 E").unwrap();
        assert!(close(a.latitude, b.latitude));
        assert!(close(a.longitude, b.longitude));
        assert!(a.is_valid());
    }

    #[test]
    fn out_of_range_is_invalid() {
        let c = Coordinate::parse_position("200, 16.3").unwrap();
        assert!(!c.is_valid());
        let c = Coordinate::parse_pair("48.2", "-181").unwrap();
        assert!(!c.is_valid());
    }

    #[test]
    fn format_round_trips_through_parse() {
        let c = Coordinate {
            latitude: 48.208333,
            longitude: -16.375,
        };
        let lat = c.format_axis(Axis::Latitude);
        let lon = c.format_axis(Axis::Longitude);
        assert!(close(parse_angle(&lat, Axis::Latitude).unwrap(), c.latitude));
        assert!(close(parse_angle(&lon, Axis::Longitude).unwrap(), c.longitude));
    }

    #[test]
    fn position_string_round_trips() {
        let c = Coordinate {
            latitude: 48.2,
            longitude: 16.3,
        };
        let parsed = Coordinate::parse_position(&c.format_position()).unwrap();
        assert!(close(parsed.latitude, 48.2));
        assert!(close(parsed.longitude, 16.3));
    }
}
