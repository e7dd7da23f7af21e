//! Document-level types.

use super::{Block, Section};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

static PAGE_BREAK: Block = Block::PageBreak;

/// How the source text is partitioned into sections.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LayoutMode {
    /// Split on a literal page-break marker; a page break precedes every page after the first
    #[default]
    FlatPages,
    /// Split on `## N.` / `###` headings; a page break follows every section
    Hierarchical,
}

impl LayoutMode {
    /// Short name used in logs and on the command line.
    pub fn name(&self) -> &'static str {
        match self {
            LayoutMode::FlatPages => "flat",
            LayoutMode::Hierarchical => "hierarchical",
        }
    }
}

/// A converted document: an ordered sequence of sections.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Document {
    /// Document metadata (title, author, etc.)
    pub metadata: Metadata,

    /// Layout mode the document was produced with
    pub mode: LayoutMode,

    /// Sections in source order
    pub sections: Vec<Section>,
}

impl Document {
    /// Create a new empty document.
    pub fn new(mode: LayoutMode) -> Self {
        Self {
            metadata: Metadata::default(),
            mode,
            sections: Vec::new(),
        }
    }

    /// Get the number of sections in the document.
    pub fn section_count(&self) -> usize {
        self.sections.len()
    }

    /// Add a section to the document.
    pub fn add_section(&mut self, section: Section) {
        self.sections.push(section);
    }

    /// Check if the document has any sections.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Every block in final order, including the page breaks implied by section boundaries.
    pub fn blocks(&self) -> Vec<&Block> {
        let mut blocks = Vec::new();
        for (index, section) in self.sections.iter().enumerate() {
            if self.mode == LayoutMode::FlatPages && index > 0 {
                blocks.push(&PAGE_BREAK);
            }
            blocks.extend(section.iter_blocks());
            if self.mode == LayoutMode::Hierarchical {
                blocks.push(&PAGE_BREAK);
            }
        }
        blocks
    }

    /// Titles of all titled sections, in order.
    pub fn section_titles(&self) -> Vec<&str> {
        self.sections
            .iter()
            .filter_map(|s| s.title.as_deref())
            .collect()
    }

    /// Get plain text content of the entire document, one line per text-bearing block.
    pub fn plain_text(&self) -> String {
        self.blocks()
            .into_iter()
            .filter_map(Block::plain_text)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Document metadata.
///
/// Fixed external configuration; never derived from content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Metadata {
    /// Document title
    pub title: Option<String>,

    /// Document author
    pub author: Option<String>,

    /// Document subject
    pub subject: Option<String>,

    /// Document version shown on the cover page
    pub version: Option<String>,

    /// Creation date
    pub created: Option<DateTime<Utc>>,
}

impl Metadata {
    /// Create metadata with a title.
    pub fn with_title(title: impl Into<String>) -> Self {
        Self {
            title: Some(title.into()),
            ..Default::default()
        }
    }

    /// Set the author.
    pub fn author(mut self, author: impl Into<String>) -> Self {
        self.author = Some(author.into());
        self
    }

    /// Set the document version shown on the cover page.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Set the creation date.
    pub fn created(mut self, created: DateTime<Utc>) -> Self {
        self.created = Some(created);
        self
    }

    /// Stamp the creation date with the current time.
    pub fn created_now(self) -> Self {
        self.created(Utc::now())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Subsection;

    fn sample(mode: LayoutMode) -> Document {
        let mut doc = Document::new(mode);
        doc.add_section(Section::untitled(vec![Block::plain("A")]));
        doc.add_section(Section::untitled(vec![Block::plain("B")]));
        doc
    }

    #[test]
    fn test_document_new() {
        let doc = Document::new(LayoutMode::FlatPages);
        assert!(doc.is_empty());
        assert_eq!(doc.section_count(), 0);
        assert!(doc.blocks().is_empty());
    }

    #[test]
    fn test_flat_pages_break_before_following_sections() {
        let doc = sample(LayoutMode::FlatPages);
        let blocks = doc.blocks();
        assert_eq!(
            blocks,
            vec![&Block::plain("A"), &Block::PageBreak, &Block::plain("B")]
        );
    }

    #[test]
    fn test_hierarchical_break_after_every_section() {
        let doc = sample(LayoutMode::Hierarchical);
        let blocks = doc.blocks();
        assert_eq!(
            blocks,
            vec![
                &Block::plain("A"),
                &Block::PageBreak,
                &Block::plain("B"),
                &Block::PageBreak
            ]
        );
    }

    #[test]
    fn test_section_titles_and_plain_text() {
        let mut doc = Document::new(LayoutMode::Hierarchical);
        let mut section = Section::titled("Scope");
        section.add_subsection(Subsection::new("Details"));
        doc.add_section(Section::untitled(vec![Block::plain("preamble")]));
        doc.add_section(section);

        assert_eq!(doc.section_titles(), vec!["Scope"]);
        assert_eq!(doc.plain_text(), "preamble\nScope\nDetails");
    }

    #[test]
    fn test_metadata_builder() {
        let meta = Metadata::with_title("Release Notes").author("Docs Team");
        assert_eq!(meta.title.as_deref(), Some("Release Notes"));
        assert_eq!(meta.author.as_deref(), Some("Docs Team"));
        assert!(meta.created.is_none());

        let meta = meta.version("2.1");
        assert_eq!(meta.version.as_deref(), Some("2.1"));
    }
}
