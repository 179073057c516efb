//! Built-in lint rules.
//!
//! Rules come in three groups:
//!
//! - [`structure`] - delimiters, emptiness and YAML validity (`FML0xx`)
//! - [`created`] - the `created` field against the file's birthtime
//! - [`modified`] - the `modified` field against the file's mtime

pub mod created;
pub mod modified;
pub mod structure;

pub use created::{
    created_is_consistent, CreatedMatterOlderThanBirthtimeRule, HasCreatedMatterRule,
    HasValidCreatedMatterDateRule, CREATED_FIELD,
};
pub use modified::{
    modified_is_consistent, HasModifiedMatterRule, HasValidModifiedMatterDateRule,
    ModifiedMatterNewerThanMtimeRule, MODIFIED_FIELD,
};
pub use structure::{
    HasMatterMarkersRule, HasValidYamlRule, MatterDelimitersMatchRule, NonEmptyMatterRule,
};

use chrono::{DateTime, Utc};

use crate::matter::{parse_timestamp, Document};

/// The parsed timestamp stored under `field`, if present and valid.
pub(crate) fn stored_timestamp(doc: &Document, field: &str) -> Option<DateTime<Utc>> {
    doc.field(field).and_then(parse_timestamp)
}
