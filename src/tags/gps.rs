//! GPS tag group.

use serde::{Deserialize, Serialize};

use crate::coord::{Axis, Coordinate};
use crate::value::{filled, TagMap, TagValue};

/// The validated GPS position of the image, if any.
///
/// Resolution: the explicit `GPS Latitude` + `GPS Longitude` pair wins;
/// a combined `GPS Position` string is the fallback. A candidate is kept
/// only when both axes parse and pass range validation — out-of-range or
/// malformed input leaves the coordinate unset.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Gps {
    pub coordinate: Option<Coordinate>,
}

impl Gps {
    /// Resolve the coordinate from the flat map.
    pub fn from_tags(data: &TagMap) -> Self {
        let pair = match (filled(data, "GPS Latitude"), filled(data, "GPS Longitude")) {
            (Some(lat), Some(lon)) => Coordinate::parse_pair(lat, lon),
            _ => None,
        };

        let coordinate = pair
            .or_else(|| filled(data, "GPS Position").and_then(Coordinate::parse_position))
            .filter(|c| {
                if c.is_valid() {
                    true
                } else {
                    log::debug!(
                        "discarding out-of-range coordinate ({}, {})",
                        c.latitude,
                        c.longitude
                    );
                    false
                }
            });

        Gps { coordinate }
    }

    /// Re-emit the coordinate under every GPS key, hemisphere refs
    /// included. Nothing is emitted without a valid coordinate.
    pub fn add_to_tags(&self, out: &mut TagMap) {
        let Some(c) = self.coordinate.filter(Coordinate::is_valid) else {
            return;
        };

        out.insert(
            "GPS Latitude".into(),
            TagValue::from(c.format_axis(Axis::Latitude)),
        );
        out.insert(
            "GPS Longitude".into(),
            TagValue::from(c.format_axis(Axis::Longitude)),
        );
        out.insert("GPS Position".into(), TagValue::from(c.format_position()));
        out.insert(
            "GPS Latitude Ref".into(),
            TagValue::from(if c.latitude < 0.0 { "South" } else { "North" }),
        );
        out.insert(
            "GPS Longitude Ref".into(),
            TagValue::from(if c.longitude < 0.0 { "West" } else { "East" }),
        );
    }
}
