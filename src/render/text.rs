//! Plain text rendering of converted documents.

use crate::model::Document;

/// Convert a document to plain text, one line per text-bearing block.
///
/// Markup is removed: heading and bullet markers, bold delimiters, rules
/// and page breaks produce no text.
pub fn to_text(doc: &Document) -> String {
    doc.plain_text()
}
