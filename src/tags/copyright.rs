//! Copyright tag group.

use serde::{Deserialize, Serialize};

use crate::value::{filled, first_filled_owned, TagMap, TagValue};
use crate::web::Url;

/// Copyright information.
///
/// The notice is the one canonical field that is never optional: it
/// defaults to the empty string and is always re-emitted under all three
/// of its synonym keys.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Copyright {
    /// `Copyright`, `Copyright Notice`, or `Rights`.
    pub notice: String,
    /// `URL`, kept only when it parses.
    pub info_url: Option<Url>,
    /// `Usage Terms`.
    pub usage_terms: Option<String>,
    /// `Copyright Flag` — set when the source value is exactly `True`.
    pub flag: bool,
}

impl Copyright {
    pub fn from_tags(data: &TagMap) -> Self {
        let info_url = filled(data, "URL").and_then(|raw| {
            let parsed = Url::parse(raw);
            if parsed.is_none() {
                log::debug!("unparsable copyright URL: {raw:?}");
            }
            parsed
        });

        Copyright {
            notice: first_filled_owned(data, &["Copyright", "Copyright Notice", "Rights"])
                .unwrap_or_default(),
            info_url,
            usage_terms: first_filled_owned(data, &["Usage Terms"]),
            flag: filled(data, "Copyright Flag") == Some("True"),
        }
    }

    pub fn add_to_tags(&self, out: &mut TagMap) {
        // The notice is canonical: emitted even when empty.
        for key in ["Copyright", "Copyright Notice", "Rights"] {
            out.insert(key.into(), TagValue::from(self.notice.clone()));
        }

        if let Some(url) = &self.info_url {
            out.insert("URL".into(), TagValue::from(url.to_string()));
        }

        if let Some(terms) = &self.usage_terms {
            out.insert("Usage Terms".into(), TagValue::from(terms.clone()));
        }

        if self.flag {
            out.insert("Copyright Flag".into(), TagValue::from("True"));
        }
    }
}
