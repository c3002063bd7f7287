//! Inline background style composition.

use backdrop_core::DerivativeUrls;

/// Builds the final background URL for a stored file URI: the named
/// derivative variant when a style id is configured, the original file
/// otherwise, always mapped back to a root-relative URL.
pub fn image_url(urls: &dyn DerivativeUrls, file_uri: &str, style_id: Option<&str>) -> String {
    let absolute = match style_id {
        Some(style) => urls.derivative_url(style, file_uri),
        None => urls.absolute_url(file_uri),
    };
    urls.relative_url(&absolute)
}

/// Composes the inline style string from the resolved parts.
///
/// Clauses are space-joined in image-then-color order; either side may be
/// absent. The URL is wrapped in single quotes without further escaping (the
/// host sanitizes file URLs). An empty string means "no background styling".
pub fn compose_style(image_url: Option<&str>, color: Option<&str>) -> String {
    let mut clauses = Vec::with_capacity(2);
    if let Some(url) = image_url {
        clauses.push(format!("background-image: url('{url}');"));
    }
    if let Some(color) = color {
        clauses.push(format!("background-color: {color};"));
    }
    clauses.join(" ")
}
