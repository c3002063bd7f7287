//! Partitions a bundle's field definitions into the roles the formatter can
//! be configured with. Used to populate the admin configuration dropdowns and
//! to silently reject stale configuration at display time.

use crate::fields::{FieldDefinition, FieldKind};
use crate::host::FieldMetadata;
use indexmap::IndexMap;

/// The four configurable roles a field can serve in a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Image,
    Color,
    Link,
    File,
}

/// Role maps (machine name -> human label), in field-definition order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldClassification {
    pub image: IndexMap<String, String>,
    pub color: IndexMap<String, String>,
    pub link: IndexMap<String, String>,
    pub file: IndexMap<String, String>,
}

impl FieldClassification {
    pub fn role(&self, role: FieldRole) -> &IndexMap<String, String> {
        match role {
            FieldRole::Image => &self.image,
            FieldRole::Color => &self.color,
            FieldRole::Link => &self.link,
            FieldRole::File => &self.file,
        }
    }

    /// Whether `name` is still a valid choice for `role`. Configured field
    /// names that fail this check are ignored, not reported.
    pub fn accepts(&self, role: FieldRole, name: &str) -> bool {
        self.role(role).contains_key(name)
    }

    pub fn label(&self, role: FieldRole, name: &str) -> Option<&str> {
        self.role(role).get(name).map(String::as_str)
    }
}

/// Pure classification over a bundle's field definitions.
///
/// Image-capable: image fields and media references. Color-capable: color
/// fields. Link-capable: link fields. File-capable: file fields and media
/// references. A media reference is listed under both image and file.
pub fn classify_fields(definitions: &[FieldDefinition]) -> FieldClassification {
    let mut out = FieldClassification::default();
    for def in definitions {
        let media_ref = def.kind.is_media_reference();
        if def.kind == FieldKind::Image || media_ref {
            out.image.insert(def.name.clone(), def.label.clone());
        }
        if def.kind == FieldKind::Color {
            out.color.insert(def.name.clone(), def.label.clone());
        }
        if def.kind == FieldKind::Link {
            out.link.insert(def.name.clone(), def.label.clone());
        }
        if def.kind == FieldKind::File || media_ref {
            out.file.insert(def.name.clone(), def.label.clone());
        }
    }
    out
}

/// Admin entry point: classification for an entity type + bundle.
pub fn describe_fields(
    metadata: &dyn FieldMetadata,
    entity_type: &str,
    bundle: &str,
) -> FieldClassification {
    classify_fields(&metadata.field_definitions(entity_type, bundle))
}

/// Advisory settings-form hints for roles with no candidate fields on the
/// bundle. These are display strings, not errors.
pub fn missing_role_hints(classification: &FieldClassification) -> Vec<String> {
    let mut hints = Vec::new();
    if classification.image.is_empty() {
        hints.push("No qualifying image field found on this bundle.".to_string());
    }
    if classification.color.is_empty() {
        hints.push("No qualifying color field found on this bundle.".to_string());
    }
    if classification.link.is_empty() {
        hints.push("No qualifying link field found on this bundle.".to_string());
    }
    if classification.file.is_empty() {
        hints.push("No qualifying file field found on this bundle.".to_string());
    }
    hints
}
