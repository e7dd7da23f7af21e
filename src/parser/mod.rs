//! Source parsing: structural splitting and line classification.

mod classify;
mod normalize;
mod options;
mod split;
mod transcoder;

pub use classify::{classify_line, classify_lines, split_bold_runs};
pub use normalize::normalize_source;
pub use options::{
    ParseOptions, DEFAULT_PAGE_DELIMITER, DEFAULT_SECTION_PATTERN, DEFAULT_SUBSECTION_PATTERN,
};
pub use split::{
    split_lines_on_boundary, split_on_literal_marker, split_on_pattern_boundary, trim_blank_lines,
    Chunk,
};
pub use transcoder::Transcoder;
