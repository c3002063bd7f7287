//! The decorate step: turns plugin settings plus one entity snapshot into the
//! final element decoration (tag, attributes, visibility).

use crate::model::{Attributes, RenderDecoration, Tag};
use crate::resolve;
use crate::style;
use backdrop_core::{
    DerivativeUrls, EntityFieldSnapshot, FieldClassification, FieldGroupConfig, FieldRole,
    ReferenceResolver, classify_fields, sanitize,
};
use tracing::debug;
use url::Url;

/// Marker class present on every element this formatter emits.
pub const MARKER_CLASS: &str = "field-group-backdrop";

/// Decorates one entity render.
///
/// Total over all input combinations: stale settings, missing referenced
/// content, and malformed values only make the affected role absent. The link
/// branches are mutually exclusive, first applicable wins: explicit link
/// field, then link-to-entity, then link-to-file, then a plain `div`.
pub fn decorate(
    config: &FieldGroupConfig,
    snapshot: &EntityFieldSnapshot,
    resolver: &dyn ReferenceResolver,
    urls: &dyn DerivativeUrls,
) -> RenderDecoration {
    let classification = classify_fields(snapshot.definitions());

    let mut attributes = Attributes::new();
    if let Some(id) = config.id.as_deref() {
        attributes.set("id", sanitize::escape_id(id));
    }
    attributes.set("class", element_classes(config).join(" "));

    let style = background_style(config, snapshot, &classification, resolver, urls);
    if !style.is_empty() {
        attributes.set("style", &*style);
    }

    let mut tag = Tag::Div;

    let link = config
        .link
        .as_deref()
        .and_then(|field| resolve::resolve_link(snapshot, field));
    // Resolved up front so the hide-if-missing-file check stays independent of
    // which link branch actually wins.
    let file = config
        .link_to_file
        .as_deref()
        .map(|field| resolve::resolve_file(snapshot, field, resolver));

    if let Some(link) = &link {
        tag = Tag::Anchor;
        attributes.set("href", href_from_uri(&link.uri));
        attributes.merge(&link.attributes);
    } else if config.link_to_entity {
        if let Some(entity_url) = snapshot.canonical_url.as_deref() {
            tag = Tag::Anchor;
            attributes.set("href", href_from_uri(entity_url));
        } else {
            debug!(
                entity_type = snapshot.entity_type.as_str(),
                "entity has no canonical URL; link_to_entity ignored"
            );
        }
    } else if let Some(Some(file)) = &file {
        tag = Tag::Anchor;
        attributes.set("href", urls.absolute_url(&file.uri));
        if let Some(target) = config.link_target.as_deref() {
            attributes.set("target", target);
        }
    }

    // The suppression checks are independent; either one firing is enough.
    let mut suppressed = false;
    if style.is_empty() && (config.hide_if_missing_image || config.hide_if_missing_color) {
        suppressed = true;
    }
    if link.is_none() && config.hide_if_missing_link {
        suppressed = true;
    }
    if matches!(file, Some(None)) && config.hide_if_missing_file {
        suppressed = true;
    }

    RenderDecoration {
        tag,
        attributes,
        suppressed,
    }
}

/// Base field-group classes plus the fixed marker class, each cleaned for
/// HTML output.
fn element_classes(config: &FieldGroupConfig) -> Vec<String> {
    config
        .classes
        .iter()
        .map(String::as_str)
        .chain(std::iter::once(MARKER_CLASS))
        .map(sanitize::escape_class)
        .collect()
}

fn background_style(
    config: &FieldGroupConfig,
    snapshot: &EntityFieldSnapshot,
    classification: &FieldClassification,
    resolver: &dyn ReferenceResolver,
    urls: &dyn DerivativeUrls,
) -> String {
    let image_field = validated_field(config.image.as_deref(), FieldRole::Image, classification);
    let color_field = validated_field(config.color.as_deref(), FieldRole::Color, classification);

    let image_url = image_field
        .and_then(|field| resolve::resolve_image(snapshot, field, resolver))
        .map(|uri| style::image_url(urls, &uri, config.image_style.as_deref()));
    let color = color_field.and_then(|field| resolve::resolve_color(snapshot, field));

    style::compose_style(image_url.as_deref(), color.as_deref())
}

/// Silently drops a configured field name that no longer belongs to its
/// expected role (renamed field, changed type, removed bundle field).
fn validated_field<'a>(
    configured: Option<&'a str>,
    role: FieldRole,
    classification: &FieldClassification,
) -> Option<&'a str> {
    let name = configured?;
    if classification.accepts(role, name) {
        Some(name)
    } else {
        debug!(field = name, ?role, "configured field no longer matches its role; ignored");
        None
    }
}

/// Renders a stored link URI as an `href` value.
///
/// CMS-internal URI schemes map to root-relative paths, well-formed absolute
/// URLs are normalized, and anything else (already-relative paths, fragments)
/// passes through untouched.
fn href_from_uri(uri: &str) -> String {
    if let Some(path) = uri.strip_prefix("internal:") {
        return path.to_string();
    }
    if let Some(rest) = uri.strip_prefix("entity:") {
        return format!("/{rest}");
    }
    match Url::parse(uri) {
        Ok(url) => url.to_string(),
        Err(_) => uri.to_string(),
    }
}
