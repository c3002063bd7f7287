//! Collaborator interfaces provided by the host framework.
//!
//! These replace ambient service lookups with explicit injection. All calls
//! are synchronous, cheap, idempotent reads; a failed lookup is reported as
//! `None` and must degrade the affected role to "absent", never fail a render.

use crate::fields::{FieldDefinition, FileEntity, MediaEntity};

/// Field metadata lookups for an entity type + bundle (admin path).
pub trait FieldMetadata {
    fn field_definitions(&self, entity_type: &str, bundle: &str) -> Vec<FieldDefinition>;
}

/// Loads referenced media and file entities (display path).
pub trait ReferenceResolver {
    fn load_media(&self, id: u64) -> Option<MediaEntity>;
    fn load_file(&self, id: u64) -> Option<FileEntity>;
}

/// Image-derivative and file-URL transforms provided by the host.
pub trait DerivativeUrls {
    /// URL of the named derivative (resized/processed variant) of `file_uri`.
    fn derivative_url(&self, style_id: &str, file_uri: &str) -> String;

    /// Absolute URL serving the raw file.
    fn absolute_url(&self, file_uri: &str) -> String;

    /// Root-relative form of an absolute URL on the host's own domain. URLs on
    /// other domains come back unchanged.
    fn relative_url(&self, absolute_url: &str) -> String;
}
