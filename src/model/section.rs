//! Section-level types.

use super::Block;
use serde::{Deserialize, Serialize};

/// One page (flat-pages mode) or one numbered heading chunk (hierarchical mode).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Section title, taken from the delimiting heading line
    pub title: Option<String>,

    /// Blocks preceding the first subsection
    pub blocks: Vec<Block>,

    /// Subsections bounded by `###` headings
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub subsections: Vec<Subsection>,
}

impl Section {
    /// Create a section without a title.
    pub fn untitled(blocks: Vec<Block>) -> Self {
        Self {
            title: None,
            blocks,
            subsections: Vec::new(),
        }
    }

    /// Create a titled section. Its level-1 heading is the first block.
    pub fn titled(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            blocks: vec![Block::heading(1, title.clone())],
            title: Some(title),
            subsections: Vec::new(),
        }
    }

    /// Add a block before any subsection.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Add a subsection.
    pub fn add_subsection(&mut self, subsection: Subsection) {
        self.subsections.push(subsection);
    }

    /// Iterate over every block in the section, subsections included, in source order.
    pub fn iter_blocks(&self) -> impl Iterator<Item = &Block> + '_ {
        self.blocks
            .iter()
            .chain(self.subsections.iter().flat_map(|s| s.blocks.iter()))
    }

    /// Number of blocks in the section, subsections included.
    pub fn block_count(&self) -> usize {
        self.blocks.len() + self.subsections.iter().map(|s| s.blocks.len()).sum::<usize>()
    }

    /// Check if the section holds no blocks.
    pub fn is_empty(&self) -> bool {
        self.block_count() == 0
    }
}

/// A `###`-bounded chunk of a hierarchical section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subsection {
    /// Subsection title
    pub title: String,

    /// Blocks, starting with the level-2 heading for the title
    pub blocks: Vec<Block>,
}

impl Subsection {
    /// Create a subsection whose first block is its level-2 heading.
    pub fn new(title: impl Into<String>) -> Self {
        let title = title.into();
        Self {
            blocks: vec![Block::heading(2, title.clone())],
            title,
        }
    }

    /// Add a block.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }
}
