#![forbid(unsafe_code)]

//! Display-path rendering for the backdrop field-group formatter.
//!
//! One render is a single stateless pass: resolve the configured field values
//! (image, color, link, file), compose the inline background style, then
//! decorate the output element (tag, attributes, visibility). The whole path
//! is total; malformed or missing host data degrades role by role to "absent".

pub mod decorate;
pub mod model;
pub mod resolve;
pub mod style;
pub mod summary;

pub use decorate::{MARKER_CLASS, decorate};
pub use model::{Attributes, RenderDecoration, Tag};
pub use summary::summarize;
