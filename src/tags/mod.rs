//! Field-group normalizers.
//!
//! Each group resolves a small cluster of synonymous flat-map keys into one
//! canonical sub-record (`from_tags`) and can re-flatten itself
//! (`add_to_tags`). Re-flattening always emits every synonym key of a
//! populated field with the same value; empty fields are omitted.
//!
//! - [`Contact`] — author, job title, postal address, phone, mail, URLs
//! - [`Copyright`] — notice, info URL, usage terms, flag
//! - [`Dates`] — last-modified / created / digitized reconciliation
//! - [`Gps`] — validated geographic coordinate
//! - [`Labels`] — object name / label / title with preference lookup
//! - [`PictureLocation`] — where the picture was taken
//! - [`Photo`] — camera and exposure details
//! - [`Workflow`] — agency workflow fields

mod contact;
mod copyright;
mod dates;
mod gps;
mod labels;
mod location;
mod photo;
mod workflow;

pub use contact::Contact;
pub use copyright::Copyright;
pub use dates::{parse_datetime, Dates};
pub use gps::Gps;
pub use labels::{LabelKind, Labels};
pub use location::PictureLocation;
pub use photo::Photo;
pub use workflow::Workflow;
