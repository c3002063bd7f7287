//! ASCII-safe transforms for HTML `id` and `class` values.
//!
//! These mirror the usual CMS identifier cleaning: lowercase, common
//! separators become dashes, everything else outside the safe set is dropped.
//! They are deliberately lossy; the input is operator-entered configuration,
//! not user content.

use regex::Regex;
use std::sync::OnceLock;

fn invalid_id_chars() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^a-z0-9\-_]").expect("valid regex"))
}

fn dash_runs() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\-+").expect("valid regex"))
}

/// Cleans a raw setting into a usable HTML `id` value.
///
/// Spaces, underscores, and `[` become dashes, `]` is dropped, remaining
/// characters outside `[a-z0-9-_]` are dropped, and dash runs collapse.
pub fn escape_id(raw: &str) -> String {
    let mut id = raw.to_ascii_lowercase();
    id = id.replace([' ', '_', '['], "-");
    id = id.replace(']', "");
    let id = invalid_id_chars().replace_all(&id, "");
    dash_runs().replace_all(&id, "-").to_string()
}

/// Cleans a raw class name. Same rules as [`escape_id`], except BEM-style
/// double underscores survive.
pub fn escape_class(raw: &str) -> String {
    raw.to_ascii_lowercase()
        .split("__")
        .map(|part| {
            let part = part.replace([' ', '_', '/', '['], "-");
            let part = part.replace(']', "");
            let part = invalid_id_chars().replace_all(&part, "");
            dash_runs().replace_all(&part, "-").to_string()
        })
        .collect::<Vec<_>>()
        .join("__")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escape_id_normalizes_separators_and_case() {
        assert_eq!(escape_id("Hero Banner"), "hero-banner");
        assert_eq!(escape_id("field_group[0]"), "field-group-0");
        assert_eq!(escape_id("a  --  b"), "a-b");
        assert_eq!(escape_id("plain-id"), "plain-id");
    }

    #[test]
    fn escape_id_drops_unsafe_characters() {
        assert_eq!(escape_id("a<b>\"c\""), "abc");
        assert_eq!(escape_id("héllo"), "hllo");
        assert_eq!(escape_id(""), "");
    }

    #[test]
    fn escape_class_keeps_double_underscores() {
        assert_eq!(escape_class("block__element"), "block__element");
        assert_eq!(escape_class("Block Name__el em"), "block-name__el-em");
        assert_eq!(escape_class("nav/main"), "nav-main");
    }
}
