//! Creator contact tag group.

use serde::{Deserialize, Serialize};

use crate::value::{filled, first_filled_owned, TagMap, TagValue};
use crate::web::MailAddress;

/// Who made the picture and how to reach them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Contact {
    /// `Creator`, `Artist`, `By-line`, or `Owner Name` as a last resort.
    pub author: Option<String>,
    /// `Authors Position` or `By-line Title`.
    pub job_title: Option<String>,
    /// `Creator Address` — typically street and house number.
    pub address: Option<String>,
    pub city: Option<String>,
    pub region: Option<String>,
    pub postal_code: Option<String>,
    pub country: Option<String>,
    pub telephone: Option<String>,
    /// `Creator Work Email`, kept only when it parses.
    pub email: Option<MailAddress>,
    /// `Creator Work URL` — whitespace-separated, each entry trimmed of
    /// surrounding whitespace and `;` `.` `:` punctuation.
    pub urls: Vec<String>,
}

impl Contact {
    pub fn from_tags(data: &TagMap) -> Self {
        let email = filled(data, "Creator Work Email").and_then(|raw| {
            let parsed = MailAddress::parse(raw);
            if parsed.is_none() {
                log::debug!("unparsable creator mail address: {raw:?}");
            }
            parsed
        });

        let urls = filled(data, "Creator Work URL")
            .map(|raw| {
                raw.split_whitespace()
                    .map(|u| u.trim_matches(|c: char| c.is_whitespace() || ";.:".contains(c)))
                    .filter(|u| !u.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default();

        Contact {
            author: first_filled_owned(data, &["Creator", "Artist", "By-line", "Owner Name"]),
            job_title: first_filled_owned(data, &["Authors Position", "By-line Title"]),
            address: first_filled_owned(data, &["Creator Address"]),
            city: first_filled_owned(data, &["Creator City"]),
            region: first_filled_owned(data, &["Creator Region"]),
            postal_code: first_filled_owned(data, &["Creator Postal Code"]),
            country: first_filled_owned(data, &["Creator Country"]),
            telephone: first_filled_owned(data, &["Creator Work Telephone"]),
            email,
            urls,
        }
    }

    pub fn add_to_tags(&self, out: &mut TagMap) {
        if let Some(author) = &self.author {
            for key in ["Creator", "Artist", "By-line"] {
                out.insert(key.into(), TagValue::from(author.clone()));
            }
        }

        if let Some(title) = &self.job_title {
            out.insert("Authors Position".into(), TagValue::from(title.clone()));
            out.insert("By-line Title".into(), TagValue::from(title.clone()));
        }

        let singles = [
            ("Creator Address", &self.address),
            ("Creator City", &self.city),
            ("Creator Region", &self.region),
            ("Creator Postal Code", &self.postal_code),
            ("Creator Country", &self.country),
            ("Creator Work Telephone", &self.telephone),
        ];
        for (key, value) in singles {
            if let Some(v) = value {
                out.insert(key.into(), TagValue::from(v.clone()));
            }
        }

        if let Some(email) = &self.email {
            out.insert(
                "Creator Work Email".into(),
                TagValue::from(email.to_string()),
            );
        }

        if !self.urls.is_empty() {
            out.insert(
                "Creator Work URL".into(),
                TagValue::from(self.urls.join(" ")),
            );
        }
    }
}
