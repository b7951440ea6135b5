//! Picture location tag group — where the picture was taken, as opposed
//! to the creator's postal address in [`Contact`](super::Contact).

use serde::{Deserialize, Serialize};

use crate::value::{first_filled_owned, TagMap, TagValue};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PictureLocation {
    /// `Location` or `Sub-location` — the spot within the city.
    pub region: Option<String>,
    /// `State` or `Province-State`.
    pub state: Option<String>,
    /// `Country Code` or `Country-Primary Location Code` — 2-letter code.
    pub country_code: Option<String>,
    /// `City`.
    pub city: Option<String>,
    /// `Country` or `Country-Primary Location Name`.
    pub country: Option<String>,
    /// `Intellectual Genre`.
    pub genre: Option<String>,
    /// `Scene`.
    pub scene: Option<String>,
}

impl PictureLocation {
    pub fn from_tags(data: &TagMap) -> Self {
        PictureLocation {
            region: first_filled_owned(data, &["Location", "Sub-location"]),
            state: first_filled_owned(data, &["State", "Province-State"]),
            country_code: first_filled_owned(
                data,
                &["Country Code", "Country-Primary Location Code"],
            ),
            city: first_filled_owned(data, &["City"]),
            country: first_filled_owned(data, &["Country", "Country-Primary Location Name"]),
            genre: first_filled_owned(data, &["Intellectual Genre"]),
            scene: first_filled_owned(data, &["Scene"]),
        }
    }

    pub fn add_to_tags(&self, out: &mut TagMap) {
        let groups: [(&[&str], &Option<String>); 7] = [
            (&["Location", "Sub-location"], &self.region),
            (&["State", "Province-State"], &self.state),
            (
                &["Country Code", "Country-Primary Location Code"],
                &self.country_code,
            ),
            (&["City"], &self.city),
            (
                &["Country", "Country-Primary Location Name"],
                &self.country,
            ),
            (&["Intellectual Genre"], &self.genre),
            (&["Scene"], &self.scene),
        ];

        for (keys, value) in groups {
            if let Some(v) = value {
                for key in keys {
                    out.insert((*key).into(), TagValue::from(v.clone()));
                }
            }
        }
    }
}
