//! Parsing options and configuration.

use crate::model::LayoutMode;

/// Literal marker separating pages in flat-pages mode.
pub const DEFAULT_PAGE_DELIMITER: &str = r#"<div style="page-break-after: always;"></div>"#;

/// Lines starting a top-level section in hierarchical mode (`## 1. Title`).
pub const DEFAULT_SECTION_PATTERN: &str = r"^## \d+\.\s*(.*)$";

/// Lines starting a subsection in hierarchical mode (`### Title`).
pub const DEFAULT_SUBSECTION_PATTERN: &str = r"^### (.*)$";

/// Options for parsing source documents.
#[derive(Debug, Clone)]
pub struct ParseOptions {
    /// Layout mode (`None` = detect from content)
    pub mode: Option<LayoutMode>,

    /// Page delimiter for flat-pages mode
    pub page_delimiter: String,

    /// Section heading pattern for hierarchical mode
    pub section_pattern: String,

    /// Subsection heading pattern for hierarchical mode
    pub subsection_pattern: String,

    /// Normalize Unicode to NFC before classification
    pub normalize_unicode: bool,

    /// Drop text before the first section heading (hierarchical mode)
    pub skip_preamble: bool,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout mode.
    pub fn with_mode(mut self, mode: LayoutMode) -> Self {
        self.mode = Some(mode);
        self
    }

    /// Use flat-pages mode.
    pub fn flat_pages(self) -> Self {
        self.with_mode(LayoutMode::FlatPages)
    }

    /// Use hierarchical mode.
    pub fn hierarchical(self) -> Self {
        self.with_mode(LayoutMode::Hierarchical)
    }

    /// Detect the layout mode from content.
    pub fn auto_detect(mut self) -> Self {
        self.mode = None;
        self
    }

    /// Set the page delimiter.
    pub fn with_page_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.page_delimiter = delimiter.into();
        self
    }

    /// Set the section heading pattern.
    pub fn with_section_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.section_pattern = pattern.into();
        self
    }

    /// Set the subsection heading pattern.
    pub fn with_subsection_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.subsection_pattern = pattern.into();
        self
    }

    /// Enable or disable Unicode normalization.
    pub fn with_unicode_normalization(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Drop the text preceding the first section heading.
    pub fn skip_preamble(mut self) -> Self {
        self.skip_preamble = true;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            mode: None,
            page_delimiter: DEFAULT_PAGE_DELIMITER.to_string(),
            section_pattern: DEFAULT_SECTION_PATTERN.to_string(),
            subsection_pattern: DEFAULT_SUBSECTION_PATTERN.to_string(),
            normalize_unicode: true,
            skip_preamble: false,
        }
    }
}
