//! Agency workflow tag group.

use serde::{Deserialize, Serialize};

use crate::value::{first_filled_owned, TagMap, TagValue};

/// Editorial workflow fields. `credit` and `source` are independent —
/// neither ever stands in for the other.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Workflow {
    /// `Instructions` or `Special Instructions`.
    pub instructions: Option<String>,
    /// `Transmission Reference` or `Original Transmission Reference`.
    pub transmission_reference: Option<String>,
    /// `Credit`.
    pub credit: Option<String>,
    /// `Source`.
    pub source: Option<String>,
}

impl Workflow {
    pub fn from_tags(data: &TagMap) -> Self {
        Workflow {
            instructions: first_filled_owned(data, &["Instructions", "Special Instructions"]),
            transmission_reference: first_filled_owned(
                data,
                &["Transmission Reference", "Original Transmission Reference"],
            ),
            credit: first_filled_owned(data, &["Credit"]),
            source: first_filled_owned(data, &["Source"]),
        }
    }

    pub fn add_to_tags(&self, out: &mut TagMap) {
        if let Some(instructions) = &self.instructions {
            out.insert("Instructions".into(), TagValue::from(instructions.clone()));
            out.insert(
                "Special Instructions".into(),
                TagValue::from(instructions.clone()),
            );
        }

        if let Some(reference) = &self.transmission_reference {
            out.insert(
                "Transmission Reference".into(),
                TagValue::from(reference.clone()),
            );
            out.insert(
                "Original Transmission Reference".into(),
                TagValue::from(reference.clone()),
            );
        }

        if let Some(credit) = &self.credit {
            out.insert("Credit".into(), TagValue::from(credit.clone()));
        }

        if let Some(source) = &self.source {
            out.insert("Source".into(), TagValue::from(source.clone()));
        }
    }
}
