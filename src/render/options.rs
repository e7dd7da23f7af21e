//! Rendering options and configuration.

use super::StyleSheet;

/// Default text of a horizontal rule paragraph.
pub const DEFAULT_RULE_TEXT: &str = "__________________________________________________";

/// Options for rendering a document to DOCX.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Style configuration
    pub styles: StyleSheet,

    /// Emit a cover page built from the document metadata
    pub cover_page: bool,

    /// Emit a table of contents page listing titled sections
    pub table_of_contents: bool,

    /// Paragraph text used for horizontal rules
    pub rule_text: String,

    /// Center level-1 headings in flat-pages mode
    pub center_flat_titles: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the style sheet.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.styles = styles;
        self
    }

    /// Enable or disable the cover page.
    pub fn with_cover_page(mut self, include: bool) -> Self {
        self.cover_page = include;
        self
    }

    /// Enable or disable the table of contents.
    pub fn with_table_of_contents(mut self, include: bool) -> Self {
        self.table_of_contents = include;
        self
    }

    /// Set the horizontal rule text.
    pub fn with_rule_text(mut self, text: impl Into<String>) -> Self {
        self.rule_text = text.into();
        self
    }

    /// Enable or disable centering of flat-pages titles.
    pub fn with_centered_titles(mut self, center: bool) -> Self {
        self.center_flat_titles = center;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            styles: StyleSheet::default(),
            cover_page: false,
            table_of_contents: false,
            rule_text: DEFAULT_RULE_TEXT.to_string(),
            center_flat_titles: true,
        }
    }
}
