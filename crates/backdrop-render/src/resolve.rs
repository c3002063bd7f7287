//! Field-value resolution for the display path.
//!
//! Every function here is total: unknown field names, unloadable reference
//! targets, and malformed values all resolve to `None`. The display path must
//! stay resilient to partially-migrated or corrupted content, so degradations
//! are logged at debug level and never surfaced as errors.

use backdrop_core::{
    EntityFieldSnapshot, FieldKind, FieldValue, FileEntity, LinkValue, MediaField,
    ReferenceResolver,
};
use tracing::debug;

/// Resolves the configured image field to the storage URI of its backing file.
///
/// Direct file/image references dereference once to the file. Media
/// references load the media item and pick its qualifying image sub-field
/// (last one in definition order wins, `thumbnail` excluded).
pub fn resolve_image(
    snapshot: &EntityFieldSnapshot,
    field: &str,
    resolver: &dyn ReferenceResolver,
) -> Option<String> {
    resolve_referenced_file(snapshot, field, resolver, true).map(|file| file.uri)
}

/// Resolves a file-capable field to its backing file.
///
/// Same dereference chain as [`resolve_image`], but any file-bearing media
/// sub-field qualifies, not just image sub-fields.
pub fn resolve_file(
    snapshot: &EntityFieldSnapshot,
    field: &str,
    resolver: &dyn ReferenceResolver,
) -> Option<FileEntity> {
    resolve_referenced_file(snapshot, field, resolver, false)
}

fn resolve_referenced_file(
    snapshot: &EntityFieldSnapshot,
    field: &str,
    resolver: &dyn ReferenceResolver,
    images_only: bool,
) -> Option<FileEntity> {
    let Some(definition) = snapshot.definition(field) else {
        debug!(field, "configured field does not exist on this bundle");
        return None;
    };

    let target_id = match snapshot.first_value(field) {
        Some(FieldValue::Reference { target_id }) => *target_id,
        Some(other) => {
            debug!(field, value = ?other, "field value is not a reference");
            return None;
        }
        None => return None,
    };

    if definition.kind.is_media_reference() {
        let Some(media) = resolver.load_media(target_id) else {
            debug!(field, media = target_id, "referenced media item could not be loaded");
            return None;
        };

        // Last qualifying sub-field in definition order wins, even when an
        // earlier one also carries a value.
        let chosen = media
            .fields
            .iter()
            .filter(|f| qualifies_as_file_source(f, images_only))
            .last();
        let Some(chosen) = chosen else {
            debug!(field, media = media.id, "media item has no qualifying file sub-field");
            return None;
        };

        let file_id = match chosen.first_value() {
            Some(FieldValue::Reference { target_id }) => *target_id,
            _ => {
                debug!(
                    field,
                    media = media.id,
                    sub_field = chosen.definition.name.as_str(),
                    "qualifying media sub-field holds no file reference"
                );
                return None;
            }
        };

        load_file_logged(resolver, field, file_id)
    } else {
        load_file_logged(resolver, field, target_id)
    }
}

fn qualifies_as_file_source(field: &MediaField, images_only: bool) -> bool {
    // `thumbnail` is the host-generated preview field; never a source.
    if field.definition.name == "thumbnail" {
        return false;
    }
    match field.definition.kind {
        FieldKind::Image => true,
        FieldKind::File => !images_only,
        _ => false,
    }
}

fn load_file_logged(
    resolver: &dyn ReferenceResolver,
    field: &str,
    file_id: u64,
) -> Option<FileEntity> {
    let file = resolver.load_file(file_id);
    if file.is_none() {
        debug!(field, file = file_id, "referenced file could not be loaded");
    }
    file
}

/// Resolves the configured color field to its color code.
pub fn resolve_color(snapshot: &EntityFieldSnapshot, field: &str) -> Option<String> {
    match snapshot.first_value(field)? {
        FieldValue::Color(code) if !code.trim().is_empty() => Some(code.clone()),
        FieldValue::Color(_) => None,
        other => {
            debug!(field, value = ?other, "field value has no color component");
            None
        }
    }
}

/// Resolves the configured link field to its structured link value.
pub fn resolve_link(snapshot: &EntityFieldSnapshot, field: &str) -> Option<LinkValue> {
    match snapshot.first_value(field)? {
        FieldValue::Link(link) if !link.uri.is_empty() => Some(link.clone()),
        FieldValue::Link(_) => {
            debug!(field, "link value is missing its uri");
            None
        }
        other => {
            debug!(field, value = ?other, "field value is not a link");
            None
        }
    }
}
