//! Read-only views of the host's field metadata and field values.
//!
//! Everything here is supplied fresh by the host per render and never mutated
//! by this crate. Values are already normalized by the host's field storage;
//! anything that does not fit the expected shape simply resolves to "absent"
//! further down the pipeline.

use indexmap::IndexMap;
use rustc_hash::FxHashMap;

/// Declared type of an entity field, as reported by the host's field metadata.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldKind {
    Image,
    Color,
    Link,
    File,
    /// A reference field; `target` is the referenced entity type (e.g. `"media"`).
    EntityReference { target: String },
    Other(String),
}

impl FieldKind {
    /// Maps the host's machine type string (plus the `target_type` setting for
    /// reference fields) into a kind.
    pub fn from_type_str(field_type: &str, target_type: Option<&str>) -> Self {
        match field_type {
            "image" => Self::Image,
            "color_field_type" => Self::Color,
            "link" => Self::Link,
            "file" => Self::File,
            "entity_reference" => Self::EntityReference {
                target: target_type.unwrap_or_default().to_string(),
            },
            other => Self::Other(other.to_string()),
        }
    }

    pub fn is_media_reference(&self) -> bool {
        matches!(self, Self::EntityReference { target } if target == "media")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDefinition {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
}

impl FieldDefinition {
    pub fn new(name: impl Into<String>, label: impl Into<String>, kind: FieldKind) -> Self {
        Self {
            name: name.into(),
            label: label.into(),
            kind,
        }
    }
}

/// A structured link value: a URI plus the link's stored HTML attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LinkValue {
    pub uri: String,
    pub attributes: IndexMap<String, String>,
}

impl LinkValue {
    pub fn new(uri: impl Into<String>) -> Self {
        Self {
            uri: uri.into(),
            attributes: IndexMap::new(),
        }
    }

    pub fn with_attribute(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(name.into(), value.into());
        self
    }
}

/// One stored item of a field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldValue {
    /// A file or media reference; which one is decided by the field's kind.
    Reference { target_id: u64 },
    Color(String),
    Link(LinkValue),
    Scalar(String),
}

/// Read-only view of one content entity's fields, keyed by field name.
#[derive(Debug, Clone, Default)]
pub struct EntityFieldSnapshot {
    pub entity_type: String,
    pub bundle: String,
    /// Canonical URL of the entity itself, when the host can produce one.
    pub canonical_url: Option<String>,
    definitions: Vec<FieldDefinition>,
    values: FxHashMap<String, Vec<FieldValue>>,
}

impl EntityFieldSnapshot {
    pub fn new(entity_type: impl Into<String>, bundle: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            bundle: bundle.into(),
            canonical_url: None,
            definitions: Vec::new(),
            values: FxHashMap::default(),
        }
    }

    pub fn with_canonical_url(mut self, url: impl Into<String>) -> Self {
        self.canonical_url = Some(url.into());
        self
    }

    /// Appends a field with its stored values. Declaration order is preserved
    /// and observable through [`definitions`](Self::definitions).
    pub fn push_field(&mut self, definition: FieldDefinition, values: Vec<FieldValue>) {
        self.values.insert(definition.name.clone(), values);
        self.definitions.push(definition);
    }

    pub fn definitions(&self) -> &[FieldDefinition] {
        &self.definitions
    }

    pub fn definition(&self, name: &str) -> Option<&FieldDefinition> {
        self.definitions.iter().find(|d| d.name == name)
    }

    /// First stored value of a field, or `None` when the field is unknown or empty.
    pub fn first_value(&self, name: &str) -> Option<&FieldValue> {
        self.values.get(name).and_then(|v| v.first())
    }
}

/// One sub-field of a loaded media entity, in field-definition order.
#[derive(Debug, Clone)]
pub struct MediaField {
    pub definition: FieldDefinition,
    pub values: Vec<FieldValue>,
}

impl MediaField {
    pub fn new(definition: FieldDefinition, values: Vec<FieldValue>) -> Self {
        Self { definition, values }
    }

    pub fn first_value(&self) -> Option<&FieldValue> {
        self.values.first()
    }
}

/// A media entity loaded through [`crate::host::ReferenceResolver`].
#[derive(Debug, Clone)]
pub struct MediaEntity {
    pub id: u64,
    pub fields: Vec<MediaField>,
}

/// A file entity; `uri` is the host's internal storage URI (e.g. `public://a.png`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileEntity {
    pub id: u64,
    pub uri: String,
}
