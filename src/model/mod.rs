//! Document model types for converted content.
//!
//! This module defines the intermediate representation (IR) that bridges
//! line classification and DOCX rendering. Blocks are produced once by the
//! transcoder and never mutated afterwards.

mod block;
mod document;
mod paragraph;
mod section;

pub use block::{Block, ListState};
pub use document::{Document, LayoutMode, Metadata};
pub use paragraph::{runs_text, Run};
pub use section::{Section, Subsection};
