//! DOCX rendering via `docx-rs`.
//!
//! Every block becomes exactly one paragraph. Paragraph blocks get one run
//! per model run with the bold attribute applied.

use std::io::{Cursor, Seek, Write};

use chrono::SecondsFormat;
use docx_rs::{
    AbstractNumbering, AlignmentType, BreakType, Docx, IndentLevel, Level, LevelJc, LevelText,
    LineSpacing, NumberFormat, Numbering, NumberingId, Paragraph, Run as DocxRun, RunFonts,
    SpecialIndentType, Start, Style, StyleType,
};

use crate::error::{Error, Result};
use crate::model::{Block, Document, LayoutMode, Metadata, Run};

use super::{Alignment, RenderOptions, StyleKind};

const BULLET_NUMBERING_ID: usize = 1;

/// Render a document into an in-memory DOCX archive.
pub fn to_docx_bytes(doc: &Document, options: &RenderOptions) -> Result<Vec<u8>> {
    let mut cursor = Cursor::new(Vec::new());
    write_docx(doc, options, &mut cursor)?;
    Ok(cursor.into_inner())
}

/// Render a document and write the DOCX archive to `writer`.
pub fn write_docx<W: Write + Seek>(doc: &Document, options: &RenderOptions, writer: W) -> Result<()> {
    let renderer = DocxRenderer::new(options.clone());
    renderer
        .render(doc)
        .build()
        .pack(writer)
        .map_err(|e| Error::Docx(e.to_string()))
}

/// DOCX renderer.
pub struct DocxRenderer {
    options: RenderOptions,
}

impl DocxRenderer {
    /// Create a new DOCX renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self { options }
    }

    /// Build the `docx-rs` document for `doc`.
    pub fn render(&self, doc: &Document) -> Docx {
        let mut docx = self.base_document(&doc.metadata);

        if self.options.cover_page {
            docx = self
                .cover_page(&doc.metadata)
                .into_iter()
                .fold(docx, Docx::add_paragraph);
        }
        if self.options.table_of_contents {
            docx = self
                .table_of_contents(&doc.section_titles())
                .into_iter()
                .fold(docx, Docx::add_paragraph);
        }

        let blocks = doc.blocks();
        log::debug!("Rendering {} blocks to DOCX", blocks.len());
        blocks
            .into_iter()
            .fold(docx, |docx, block| docx.add_paragraph(self.render_block(block, doc.mode)))
    }

    /// Map a single block to its paragraph.
    pub fn render_block(&self, block: &Block, mode: LayoutMode) -> Paragraph {
        match block {
            Block::Heading { level, text } => {
                let paragraph = self
                    .styled(StyleKind::for_heading(*level))
                    .add_run(DocxRun::new().add_text(text.as_str()));
                if mode == LayoutMode::FlatPages && *level == 1 && self.options.center_flat_titles
                {
                    paragraph.align(AlignmentType::Center)
                } else {
                    paragraph
                }
            }
            Block::Paragraph { runs } => runs
                .iter()
                .fold(self.styled(StyleKind::Normal), |paragraph, run| {
                    paragraph.add_run(text_run(run))
                }),
            Block::BulletItem {
                level,
                text,
                continues_list,
            } => {
                let paragraph = self
                    .styled(StyleKind::for_bullet(*level))
                    .numbering(
                        NumberingId::new(BULLET_NUMBERING_ID),
                        IndentLevel::new(usize::from(level.saturating_sub(1))),
                    )
                    .add_run(DocxRun::new().add_text(text.as_str()));
                if *continues_list {
                    paragraph.line_spacing(LineSpacing::new().before(0))
                } else {
                    paragraph
                }
            }
            Block::Rule => self
                .styled(StyleKind::Normal)
                .add_run(DocxRun::new().add_text(self.options.rule_text.as_str())),
            Block::PageBreak => page_break(),
            Block::BlankLine => self.styled(StyleKind::Normal),
        }
    }

    fn base_document(&self, metadata: &Metadata) -> Docx {
        let mut docx = StyleKind::ALL
            .iter()
            .fold(Docx::new(), |docx, &kind| docx.add_style(self.style(kind)))
            .add_abstract_numbering(bullet_numbering())
            .add_numbering(Numbering::new(BULLET_NUMBERING_ID, BULLET_NUMBERING_ID));

        if let Some(created) = metadata.created {
            docx = docx.created_at(&created.to_rfc3339_opts(SecondsFormat::Secs, true));
        }
        docx
    }

    fn style(&self, kind: StyleKind) -> Style {
        let descriptor = self.options.styles.get(kind);
        let font = descriptor.font.as_str();
        let style = Style::new(kind.style_id(), StyleType::Paragraph)
            .name(kind.display_name())
            .size(descriptor.half_points())
            .color(descriptor.color.as_str())
            .fonts(
                RunFonts::new()
                    .ascii(font)
                    .hi_ansi(font)
                    .east_asia(font)
                    .cs(font),
            );
        if descriptor.bold {
            style.bold()
        } else {
            style
        }
    }

    fn styled(&self, kind: StyleKind) -> Paragraph {
        let paragraph = Paragraph::new().style(kind.style_id());
        match self.options.styles.get(kind).alignment {
            Alignment::Left => paragraph,
            other => paragraph.align(alignment_type(other)),
        }
    }

    fn cover_page(&self, metadata: &Metadata) -> Vec<Paragraph> {
        let title = metadata.title.as_deref().unwrap_or("Untitled");
        let mut paragraphs = vec![self
            .styled(StyleKind::Title)
            .add_run(DocxRun::new().add_text(title))];

        let mut subtitles = Vec::new();
        if let Some(ref version) = metadata.version {
            subtitles.push(format!("Document Version: {}", version));
        }
        if let Some(ref created) = metadata.created {
            subtitles.push(format!("Date: {}", created.format("%B %-d, %Y")));
        }
        if let Some(ref author) = metadata.author {
            subtitles.push(format!("Author: {}", author));
        }
        paragraphs.extend(subtitles.into_iter().map(|line| {
            self.styled(StyleKind::Subtitle)
                .add_run(DocxRun::new().add_text(line))
        }));

        paragraphs.push(page_break());
        paragraphs
    }

    fn table_of_contents(&self, titles: &[&str]) -> Vec<Paragraph> {
        let mut paragraphs = vec![
            self.styled(StyleKind::Title)
                .add_run(DocxRun::new().add_text("Table of Contents")),
            self.styled(StyleKind::Normal)
                .add_run(DocxRun::new().add_text("This document contains the following sections:")),
        ];
        paragraphs.extend(titles.iter().enumerate().map(|(i, title)| {
            self.styled(StyleKind::Normal)
                .add_run(DocxRun::new().add_text(format!("{}. {}", i + 1, title)))
        }));
        paragraphs.push(page_break());
        paragraphs
    }
}

fn text_run(run: &Run) -> DocxRun {
    let docx_run = DocxRun::new().add_text(run.text.as_str());
    if run.bold {
        docx_run.bold()
    } else {
        docx_run
    }
}

fn page_break() -> Paragraph {
    Paragraph::new().add_run(DocxRun::new().add_break(BreakType::Page))
}

fn alignment_type(alignment: Alignment) -> AlignmentType {
    match alignment {
        Alignment::Left => AlignmentType::Left,
        Alignment::Center => AlignmentType::Center,
        Alignment::Right => AlignmentType::Right,
        Alignment::Justify => AlignmentType::Both,
    }
}

fn bullet_numbering() -> AbstractNumbering {
    let level = |index: usize, glyph: &str, left: i32| {
        Level::new(
            index,
            Start::new(1),
            NumberFormat::new("bullet"),
            LevelText::new(glyph),
            LevelJc::new("left"),
        )
        .indent(Some(left), Some(SpecialIndentType::Hanging(360)), None, None)
    };
    AbstractNumbering::new(BULLET_NUMBERING_ID)
        .add_level(level(0, "\u{2022}", 720))
        .add_level(level(1, "\u{25E6}", 1440))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Section;

    fn sample() -> Document {
        let mut doc = Document::new(LayoutMode::FlatPages);
        doc.metadata = Metadata::with_title("Sample").author("Docs");
        doc.add_section(Section::untitled(vec![
            Block::heading(1, "Title"),
            Block::paragraph(vec![Run::plain("a "), Run::bold("b")]),
            Block::bullet(1, "item"),
            Block::bullet(2, "sub item"),
            Block::Rule,
            Block::BlankLine,
        ]));
        doc.add_section(Section::untitled(vec![Block::plain("second page")]));
        doc
    }

    #[test]
    fn test_to_docx_bytes_is_zip() {
        let bytes = to_docx_bytes(&sample(), &RenderOptions::default()).unwrap();
        assert!(bytes.starts_with(b"PK"));
    }

    #[test]
    fn test_cover_and_toc_render() {
        let options = RenderOptions::new()
            .with_cover_page(true)
            .with_table_of_contents(true);
        let bytes = to_docx_bytes(&sample(), &options).unwrap();
        assert!(bytes.len() > 100);
    }

    #[test]
    fn test_write_docx_to_cursor() {
        let mut cursor = Cursor::new(Vec::new());
        write_docx(&sample(), &RenderOptions::default(), &mut cursor).unwrap();
        assert!(!cursor.into_inner().is_empty());
    }

    #[test]
    fn test_alignment_mapping() {
        assert!(matches!(
            alignment_type(Alignment::Justify),
            AlignmentType::Both
        ));
        assert!(matches!(
            alignment_type(Alignment::Center),
            AlignmentType::Center
        ));
    }
}
