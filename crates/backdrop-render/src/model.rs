//! Output model handed back to the host render pipeline.

use indexmap::IndexMap;
use std::fmt;
use std::fmt::Write as _;

/// Tag of the emitted container element.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tag {
    #[default]
    Div,
    Anchor,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Anchor => "a",
        }
    }
}

/// Ordered, unique-key HTML attribute map.
///
/// Re-setting an existing key overwrites the value but keeps the key's
/// original position, so attribute order in the emitted HTML stays stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes(IndexMap<String, String>);

impl Attributes {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.0.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.0.get(name).map(String::as_str)
    }

    /// Merges `other` in verbatim; later keys overwrite earlier ones.
    pub fn merge(&mut self, other: &IndexMap<String, String>) {
        for (name, value) in other {
            self.0.insert(name.clone(), value.clone());
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

fn escape_attr_value(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '"' => out.push_str("&quot;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

impl fmt::Display for Attributes {
    /// Serializes as ` name="value"` pairs in insertion order, values
    /// entity-escaped. Mainly for tests and debug output; the host pipeline
    /// consumes the map directly.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (name, value) in &self.0 {
            write!(f, r#" {name}="{}""#, escape_attr_value(value))?;
        }
        Ok(())
    }
}

/// The decorated element for one entity render.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RenderDecoration {
    pub tag: Tag,
    pub attributes: Attributes,
    /// When set, the caller drops the element from the render tree entirely.
    pub suppressed: bool,
}

impl RenderDecoration {
    /// Opening tag as an HTML string, e.g. `<a href="/about">`.
    pub fn opening_tag(&self) -> String {
        let mut out = String::new();
        let _ = write!(&mut out, "<{}{}>", self.tag.as_str(), self.attributes);
        out
    }
}
