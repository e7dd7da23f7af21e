//! # md2docx
//!
//! Line-oriented Markdown to DOCX transcoder for Rust.
//!
//! This library reads structured text / Markdown documents, classifies each
//! line (headings, bullets, bold markers, rules, page breaks) and renders
//! the result as a word-processor document.
//!
//! ## Quick Start
//!
//! ```no_run
//! use md2docx::{parse_file, render, ParseOptions};
//!
//! fn main() -> md2docx::Result<()> {
//!     // Parse a Markdown file
//!     let doc = parse_file("requirements.md", &ParseOptions::default())?;
//!
//!     // Convert to DOCX
//!     let options = render::RenderOptions::default();
//!     let bytes = render::to_docx_bytes(&doc, &options)?;
//!     std::fs::write("requirements.docx", bytes)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Layout modes
//!
//! - **Flat pages**: the text is split on a literal page-break marker and
//!   every line is classified independently.
//! - **Hierarchical**: the text is split at `## N. Title` and `### Title`
//!   headings into sections and subsections, each section ending on a page
//!   break.

pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use detect::{detect_mode, read_source};
pub use error::{Error, Result};
pub use model::{Block, Document, LayoutMode, ListState, Metadata, Run, Section, Subsection};
pub use parser::{classify_line, split_bold_runs, ParseOptions, Transcoder};
pub use render::{
    Alignment, ConversionStats, DocxRenderer, JsonFormat, RenderOptions, StyleDescriptor,
    StyleKind, StyleSheet,
};

use std::fs;
use std::path::Path;

/// Parse source text into a structured document.
///
/// # Arguments
///
/// * `text` - Full source document content
/// * `options` - Parsing options
///
/// # Example
///
/// ```
/// use md2docx::{parse_str, Block, ParseOptions};
///
/// let doc = parse_str("- Item one", &ParseOptions::new().flat_pages()).unwrap();
/// assert_eq!(doc.sections[0].blocks, vec![Block::bullet(1, "Item one")]);
/// ```
pub fn parse_str(text: &str, options: &ParseOptions) -> Result<Document> {
    let transcoder = Transcoder::new(options.clone())?;
    Ok(transcoder.transcode(text))
}

/// Parse a source file into a structured document.
///
/// # Example
///
/// ```no_run
/// use md2docx::{parse_file, ParseOptions};
///
/// let doc = parse_file("notes.md", &ParseOptions::new().hierarchical()).unwrap();
/// println!("Sections: {}", doc.section_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P, options: &ParseOptions) -> Result<Document> {
    let text = read_source(path)?;
    parse_str(&text, options)
}

/// Convert a source file to a DOCX file.
///
/// Input-read and output-write failures are returned unchanged; no partial
/// output is produced when parsing fails.
///
/// # Example
///
/// ```no_run
/// use md2docx::{convert_file, ParseOptions, RenderOptions};
///
/// convert_file("notes.md", "notes.docx", &ParseOptions::default(), &RenderOptions::default())?;
/// # Ok::<(), md2docx::Error>(())
/// ```
pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    parse_options: &ParseOptions,
    render_options: &RenderOptions,
) -> Result<Document> {
    let doc = parse_file(input, parse_options)?;
    save_docx(&doc, output, render_options)?;
    Ok(doc)
}

/// Render a document and save it as a DOCX file.
pub fn save_docx<P: AsRef<Path>>(
    doc: &Document,
    path: P,
    options: &RenderOptions,
) -> Result<()> {
    let bytes = render::to_docx_bytes(doc, options)?;
    fs::write(path.as_ref(), &bytes)?;
    log::info!("Saved {} bytes to {}", bytes.len(), path.as_ref().display());
    Ok(())
}

/// Builder for parsing and converting documents.
///
/// # Example
///
/// ```no_run
/// use md2docx::Md2Docx;
///
/// Md2Docx::new()
///     .hierarchical()
///     .with_title("Release Notes Requirements")
///     .with_author("Docs Team")
///     .with_cover_page()
///     .with_table_of_contents()
///     .parse_file("release_notes.md")?
///     .save("release_notes.docx")?;
/// # Ok::<(), md2docx::Error>(())
/// ```
pub struct Md2Docx {
    parse_options: ParseOptions,
    render_options: RenderOptions,
    metadata: Metadata,
}

impl Md2Docx {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
            metadata: Metadata::default(),
        }
    }

    /// Use flat-pages mode.
    pub fn flat_pages(mut self) -> Self {
        self.parse_options = self.parse_options.flat_pages();
        self
    }

    /// Use hierarchical mode.
    pub fn hierarchical(mut self) -> Self {
        self.parse_options = self.parse_options.hierarchical();
        self
    }

    /// Set the page delimiter.
    pub fn with_page_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.parse_options = self.parse_options.with_page_delimiter(delimiter);
        self
    }

    /// Replace the parse options.
    pub fn with_parse_options(mut self, options: ParseOptions) -> Self {
        self.parse_options = options;
        self
    }

    /// Replace the render options.
    pub fn with_render_options(mut self, options: RenderOptions) -> Self {
        self.render_options = options;
        self
    }

    /// Set the style sheet.
    pub fn with_styles(mut self, styles: StyleSheet) -> Self {
        self.render_options = self.render_options.with_styles(styles);
        self
    }

    /// Enable the cover page.
    pub fn with_cover_page(mut self) -> Self {
        self.render_options = self.render_options.with_cover_page(true);
        self
    }

    /// Enable the table of contents.
    pub fn with_table_of_contents(mut self) -> Self {
        self.render_options = self.render_options.with_table_of_contents(true);
        self
    }

    /// Set the document metadata.
    pub fn with_metadata(mut self, metadata: Metadata) -> Self {
        self.metadata = metadata;
        self
    }

    /// Set the document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.metadata.title = Some(title.into());
        self
    }

    /// Set the document author.
    pub fn with_author(mut self, author: impl Into<String>) -> Self {
        self.metadata.author = Some(author.into());
        self
    }

    /// Set the document version shown on the cover page.
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.metadata.version = Some(version.into());
        self
    }

    /// Parse source text and return a result wrapper.
    pub fn parse_str(self, text: &str) -> Result<ConversionResult> {
        let mut document = parse_str(text, &self.parse_options)?;
        document.metadata = self.metadata;
        Ok(ConversionResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse a source file and return a result wrapper.
    pub fn parse_file<P: AsRef<Path>>(self, path: P) -> Result<ConversionResult> {
        let text = read_source(path)?;
        self.parse_str(&text)
    }
}

impl Default for Md2Docx {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a source document.
pub struct ConversionResult {
    /// The parsed document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl ConversionResult {
    /// Render to an in-memory DOCX archive.
    pub fn to_docx_bytes(&self) -> Result<Vec<u8>> {
        render::to_docx_bytes(&self.document, &self.render_options)
    }

    /// Render and save to a DOCX file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        save_docx(&self.document, path, &self.render_options)
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> String {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Block statistics.
    pub fn stats(&self) -> ConversionStats {
        ConversionStats::from_document(&self.document)
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}
