//! Conversion statistics.

use crate::model::{Block, Document};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Block counts for a converted document.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionStats {
    /// Number of sections
    pub section_count: u32,

    /// Number of subsections
    pub subsection_count: u32,

    /// Number of headings (all levels)
    pub heading_count: u32,

    /// Number of paragraphs
    pub paragraph_count: u32,

    /// Number of bullet items (all levels)
    pub bullet_count: u32,

    /// Number of horizontal rules
    pub rule_count: u32,

    /// Number of page breaks
    pub page_break_count: u32,

    /// Number of blank lines
    pub blank_line_count: u32,

    /// Number of bold runs inside paragraphs
    pub bold_run_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,
}

impl ConversionStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect statistics for a document.
    pub fn from_document(doc: &Document) -> Self {
        let mut stats = Self::new();
        stats.section_count = doc.sections.len() as u32;
        stats.subsection_count = doc
            .sections
            .iter()
            .map(|s| s.subsections.len() as u32)
            .sum();

        for block in doc.blocks() {
            stats.add_block(block);
        }
        stats
    }

    /// Count one block.
    pub fn add_block(&mut self, block: &Block) {
        match block {
            Block::Heading { .. } => self.heading_count += 1,
            Block::Paragraph { runs } => {
                self.paragraph_count += 1;
                self.bold_run_count += runs.iter().filter(|r| r.bold).count() as u32;
            }
            Block::BulletItem { .. } => self.bullet_count += 1,
            Block::Rule => self.rule_count += 1,
            Block::PageBreak => self.page_break_count += 1,
            Block::BlankLine => self.blank_line_count += 1,
        }
        if let Some(text) = block.plain_text() {
            self.word_count += text.split_whitespace().count() as u32;
        }
    }

    /// Total number of blocks counted.
    pub fn block_count(&self) -> u32 {
        self.heading_count
            + self.paragraph_count
            + self.bullet_count
            + self.rule_count
            + self.page_break_count
            + self.blank_line_count
    }
}

impl fmt::Display for ConversionStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Sections:     {}", self.section_count)?;
        writeln!(f, "Subsections:  {}", self.subsection_count)?;
        writeln!(f, "Headings:     {}", self.heading_count)?;
        writeln!(f, "Paragraphs:   {}", self.paragraph_count)?;
        writeln!(f, "Bullets:      {}", self.bullet_count)?;
        writeln!(f, "Rules:        {}", self.rule_count)?;
        writeln!(f, "Page breaks:  {}", self.page_break_count)?;
        writeln!(f, "Blank lines:  {}", self.blank_line_count)?;
        writeln!(f, "Bold runs:    {}", self.bold_run_count)?;
        write!(f, "Words:        {}", self.word_count)
    }
}
