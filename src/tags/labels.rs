//! Label tag group.
//!
//! EXIF and IPTC offer three competing "name this picture" fields; this
//! group keeps all three and resolves one display string through an
//! explicit preference order.

use serde::{Deserialize, Serialize};

use crate::value::{first_filled_owned, TagMap, TagValue};

/// One of the three label fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LabelKind {
    ObjectName,
    Label,
    Title,
}

/// The default preference order when the caller states none.
pub const DEFAULT_PREFERENCE: [LabelKind; 3] =
    [LabelKind::Label, LabelKind::Title, LabelKind::ObjectName];

/// The three label/title possibilities from EXIF + IPTC.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Labels {
    /// `Object-Name` or `Object Name`.
    pub object_name: Option<String>,
    pub label: Option<String>,
    pub title: Option<String>,
}

impl Labels {
    pub fn from_tags(data: &TagMap) -> Self {
        Labels {
            object_name: first_filled_owned(data, &["Object-Name", "Object Name"]),
            label: first_filled_owned(data, &["Label"]),
            title: first_filled_owned(data, &["Title"]),
        }
    }

    /// Resolve one display string, trying `preference` first and then the
    /// default order. Empty string when no label is set at all.
    pub fn preferred(&self, preference: &[LabelKind]) -> String {
        let order = if preference.is_empty() {
            &DEFAULT_PREFERENCE[..]
        } else {
            preference
        };

        order
            .iter()
            .chain(DEFAULT_PREFERENCE.iter())
            .find_map(|kind| self.get(*kind))
            .cloned()
            .unwrap_or_default()
    }

    fn get(&self, kind: LabelKind) -> Option<&String> {
        match kind {
            LabelKind::ObjectName => self.object_name.as_ref(),
            LabelKind::Label => self.label.as_ref(),
            LabelKind::Title => self.title.as_ref(),
        }
        .filter(|s| !s.is_empty())
    }

    pub fn add_to_tags(&self, out: &mut TagMap) {
        if let Some(label) = &self.label {
            out.insert("Label".into(), TagValue::from(label.clone()));
        }
        if let Some(title) = &self.title {
            out.insert("Title".into(), TagValue::from(title.clone()));
        }
        if let Some(name) = &self.object_name {
            out.insert("Object-Name".into(), TagValue::from(name.clone()));
            out.insert("Object Name".into(), TagValue::from(name.clone()));
        }
    }
}
