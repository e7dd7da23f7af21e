//! Block-level types.

use super::{runs_text, Run};
use serde::{Deserialize, Serialize};

/// One discrete unit of output document content.
///
/// Blocks are immutable once emitted by the transcoder.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A heading (level 1-3)
    Heading {
        /// Heading level
        level: u8,
        /// Heading text without the `#` markers
        text: String,
    },

    /// A paragraph made of bold / non-bold runs
    Paragraph {
        /// Runs in source order
        runs: Vec<Run>,
    },

    /// A bullet list item (level 1-2)
    BulletItem {
        /// Nesting level
        level: u8,
        /// Item text without the bullet marker
        text: String,
        /// Whether the previous block was a bullet of the same list
        continues_list: bool,
    },

    /// Horizontal separator
    Rule,

    /// Page break
    PageBreak,

    /// Empty line
    BlankLine,
}

impl Block {
    /// Create a heading block. The level is clamped to 1-3.
    pub fn heading(level: u8, text: impl Into<String>) -> Self {
        Block::Heading {
            level: level.clamp(1, 3),
            text: text.into(),
        }
    }

    /// Create a paragraph block from runs.
    pub fn paragraph(runs: Vec<Run>) -> Self {
        Block::Paragraph { runs }
    }

    /// Create a paragraph holding a single non-bold run.
    pub fn plain(text: impl Into<String>) -> Self {
        Block::Paragraph {
            runs: vec![Run::plain(text)],
        }
    }

    /// Create a bullet item that starts a list. The level is clamped to 1-2.
    pub fn bullet(level: u8, text: impl Into<String>) -> Self {
        Block::BulletItem {
            level: level.clamp(1, 2),
            text: text.into(),
            continues_list: false,
        }
    }

    /// Text carried by the block with all markup removed.
    ///
    /// Returns `None` for blocks that are pure markup (rules, page breaks).
    pub fn plain_text(&self) -> Option<String> {
        match self {
            Block::Heading { text, .. } | Block::BulletItem { text, .. } => Some(text.clone()),
            Block::Paragraph { runs } => Some(runs_text(runs)),
            Block::BlankLine => Some(String::new()),
            Block::Rule | Block::PageBreak => None,
        }
    }

    /// Check if this is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading { .. })
    }

    /// Check if this is a bullet item.
    pub fn is_bullet(&self) -> bool {
        matches!(self, Block::BulletItem { .. })
    }
}

/// Whether the classification loop is currently inside a bullet list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListState {
    /// Not inside a list
    #[default]
    NoList,
    /// The previous content block was a bullet item
    InBulletList,
}

impl ListState {
    /// State after emitting `block`.
    ///
    /// Blank lines keep the current state; any other non-bullet block ends the list.
    pub fn next(self, block: &Block) -> Self {
        match block {
            Block::BulletItem { .. } => ListState::InBulletList,
            Block::BlankLine => self,
            _ => ListState::NoList,
        }
    }

    /// Check if a list is open.
    pub fn is_in_list(self) -> bool {
        self == ListState::InBulletList
    }
}
