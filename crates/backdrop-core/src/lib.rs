#![forbid(unsafe_code)]

//! Field-group data model and classification for the backdrop formatter.
//!
//! Design goals:
//! - total display-path inputs: malformed or stale host data degrades to
//!   "absent" for the affected role instead of failing the render
//! - explicit collaborator traits instead of ambient host service lookups
//! - deterministic, testable outputs (ordered maps, no hidden state)

pub mod classify;
pub mod error;
pub mod fields;
pub mod host;
pub mod sanitize;
pub mod settings;

pub use classify::{FieldClassification, FieldRole, classify_fields, describe_fields};
pub use error::{Error, Result};
pub use fields::{
    EntityFieldSnapshot, FieldDefinition, FieldKind, FieldValue, FileEntity, LinkValue,
    MediaEntity, MediaField,
};
pub use host::{DerivativeUrls, FieldMetadata, ReferenceResolver};
pub use settings::FieldGroupConfig;
