//! Persisted plugin settings for one configured field group.
//!
//! The host stores formatter settings as an opaque JSON map. Deserialization
//! normalizes the host's storage quirks: unselected dropdowns arrive as empty
//! strings, checkboxes as `0`/`1` (sometimes as strings), and the inherited
//! class list either as an array or as one space-separated string.

use crate::error::Result;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct FieldGroupConfig {
    /// Field supplying the background image (image field or media reference).
    #[serde(deserialize_with = "empty_as_none")]
    pub image: Option<String>,
    /// Named image-derivative style applied to the background image.
    #[serde(deserialize_with = "empty_as_none")]
    pub image_style: Option<String>,
    /// Field supplying the background color.
    #[serde(deserialize_with = "empty_as_none")]
    pub color: Option<String>,
    /// Link field turning the container into an anchor.
    #[serde(deserialize_with = "empty_as_none")]
    pub link: Option<String>,
    /// Fallback: link to the rendered entity's canonical URL.
    #[serde(deserialize_with = "flag")]
    pub link_to_entity: bool,
    /// Fallback: field whose referenced file becomes the link target.
    #[serde(deserialize_with = "empty_as_none")]
    pub link_to_file: Option<String>,
    /// `target` attribute for the file link (e.g. `_blank`).
    #[serde(deserialize_with = "empty_as_none")]
    pub link_target: Option<String>,
    /// HTML id for the container element.
    #[serde(deserialize_with = "empty_as_none")]
    pub id: Option<String>,
    /// Class list inherited from the generic field-group formatter settings.
    #[serde(deserialize_with = "class_list")]
    pub classes: Vec<String>,
    #[serde(deserialize_with = "flag")]
    pub hide_if_missing_image: bool,
    #[serde(deserialize_with = "flag")]
    pub hide_if_missing_color: bool,
    #[serde(deserialize_with = "flag")]
    pub hide_if_missing_link: bool,
    #[serde(deserialize_with = "flag")]
    pub hide_if_missing_file: bool,
}

impl FieldGroupConfig {
    /// Loads settings from the host's raw settings blob. Unknown keys are
    /// ignored; the host persists bookkeeping entries next to ours.
    pub fn from_value(value: Value) -> Result<Self> {
        Ok(serde_json::from_value(value)?)
    }
}

fn empty_as_none<'de, D>(de: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(de)?;
    Ok(raw.filter(|s| !s.trim().is_empty()))
}

fn flag<'de, D>(de: D) -> std::result::Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::Bool(b) => b,
        Value::Number(n) => n.as_i64().unwrap_or(0) != 0,
        Value::String(s) => !(s.is_empty() || s == "0"),
        _ => false,
    })
}

fn class_list<'de, D>(de: D) -> std::result::Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(de)? {
        Value::String(s) => s.split_whitespace().map(str::to_string).collect(),
        Value::Array(items) => items
            .into_iter()
            .filter_map(|item| match item {
                Value::String(s) if !s.is_empty() => Some(s),
                _ => None,
            })
            .collect(),
        _ => Vec::new(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn from_value_treats_empty_strings_as_unset() {
        let config = FieldGroupConfig::from_value(json!({
            "image": "field_hero",
            "image_style": "",
            "color": "  ",
            "link": "",
            "id": "hero",
        }))
        .expect("valid settings");

        assert_eq!(config.image.as_deref(), Some("field_hero"));
        assert_eq!(config.image_style, None);
        assert_eq!(config.color, None);
        assert_eq!(config.link, None);
        assert_eq!(config.id.as_deref(), Some("hero"));
    }

    #[test]
    fn from_value_accepts_checkbox_storage_variants() {
        let config = FieldGroupConfig::from_value(json!({
            "link_to_entity": 1,
            "hide_if_missing_image": "1",
            "hide_if_missing_color": true,
            "hide_if_missing_link": "0",
            "hide_if_missing_file": 0,
        }))
        .expect("valid settings");

        assert!(config.link_to_entity);
        assert!(config.hide_if_missing_image);
        assert!(config.hide_if_missing_color);
        assert!(!config.hide_if_missing_link);
        assert!(!config.hide_if_missing_file);
    }

    #[test]
    fn from_value_reads_classes_as_array_or_string() {
        let config = FieldGroupConfig::from_value(json!({
            "classes": ["group-hero", "wide"],
        }))
        .expect("valid settings");
        assert_eq!(config.classes, vec!["group-hero", "wide"]);

        let config = FieldGroupConfig::from_value(json!({
            "classes": "group-hero  wide",
        }))
        .expect("valid settings");
        assert_eq!(config.classes, vec!["group-hero", "wide"]);
    }

    #[test]
    fn from_value_ignores_unknown_keys_and_defaults_everything() {
        let config = FieldGroupConfig::from_value(json!({
            "format_type": "background_and_link",
            "weight": 3,
        }))
        .expect("valid settings");
        assert_eq!(config, FieldGroupConfig::default());
    }

    #[test]
    fn from_value_rejects_non_object_blobs() {
        assert!(FieldGroupConfig::from_value(json!([1, 2, 3])).is_err());
    }
}
