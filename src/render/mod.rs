//! Rendering module for converting documents to output formats.

mod docx;
mod json;
mod options;
mod stats;
mod styles;
mod text;

pub use self::docx::{to_docx_bytes, write_docx, DocxRenderer};
pub use json::{to_json, JsonFormat};
pub use options::{RenderOptions, DEFAULT_RULE_TEXT};
pub use stats::ConversionStats;
pub use styles::{Alignment, StyleDescriptor, StyleKind, StyleSheet};
pub use text::to_text;
