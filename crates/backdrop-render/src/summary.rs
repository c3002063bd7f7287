//! Human-readable active-settings lines for the host's group-settings listing.

use backdrop_core::{FieldClassification, FieldGroupConfig, FieldRole};

/// Describes the active settings, one line per configured option.
///
/// Field labels come from the classification maps; when a configured field no
/// longer exists on the bundle, the stored machine name is shown instead.
pub fn summarize(config: &FieldGroupConfig, classification: &FieldClassification) -> Vec<String> {
    let label = |role: FieldRole, name: &str| -> String {
        classification.label(role, name).unwrap_or(name).to_string()
    };

    let mut summary = Vec::new();
    if let Some(image) = config.image.as_deref() {
        summary.push(format!("Image field: {}", label(FieldRole::Image, image)));
    }
    if let Some(style) = config.image_style.as_deref() {
        summary.push(format!("Image style: {style}"));
    }
    if let Some(color) = config.color.as_deref() {
        summary.push(format!("Color field: {}", label(FieldRole::Color, color)));
    }
    if let Some(link) = config.link.as_deref() {
        summary.push(format!("Link field: {}", label(FieldRole::Link, link)));
    }
    if config.link_to_entity {
        summary.push("Linked to the entity".to_string());
    }
    if let Some(file) = config.link_to_file.as_deref() {
        summary.push(format!("Linked to the file: {}", label(FieldRole::File, file)));
    }
    if let Some(target) = config.link_target.as_deref() {
        summary.push(format!("Link target: {target}"));
    }
    summary
}
