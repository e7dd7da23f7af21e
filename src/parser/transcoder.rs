//! Markup-to-document transcoder.

use regex::Regex;

use crate::detect;
use crate::error::Result;
use crate::model::{Document, LayoutMode, Section, Subsection};

use super::classify::classify_lines;
use super::normalize::normalize_source;
use super::split::{
    split_lines_on_boundary, split_on_literal_marker, split_on_pattern_boundary, trim_blank_lines,
};
use super::ParseOptions;

/// Converts source text into a [`Document`].
///
/// Performs no I/O; patterns are compiled once at construction.
#[derive(Debug, Clone)]
pub struct Transcoder {
    options: ParseOptions,
    section_pattern: Regex,
    subsection_pattern: Regex,
}

impl Transcoder {
    /// Create a transcoder, compiling the section patterns in `options`.
    pub fn new(options: ParseOptions) -> Result<Self> {
        let section_pattern = Regex::new(&options.section_pattern)?;
        let subsection_pattern = Regex::new(&options.subsection_pattern)?;
        Ok(Self {
            options,
            section_pattern,
            subsection_pattern,
        })
    }

    /// Get the parse options.
    pub fn options(&self) -> &ParseOptions {
        &self.options
    }

    /// Layout mode that will be used for `text`.
    pub fn resolve_mode(&self, text: &str) -> LayoutMode {
        self.options.mode.unwrap_or_else(|| {
            detect::detect_mode_with(text, &self.options.page_delimiter, &self.section_pattern)
        })
    }

    /// Transcode the full source text.
    pub fn transcode(&self, text: &str) -> Document {
        let text = normalize_source(text, self.options.normalize_unicode);
        let mode = self.resolve_mode(&text);
        log::debug!("Transcoding {} bytes in {} mode", text.len(), mode.name());

        let mut doc = Document::new(mode);
        let sections = match mode {
            LayoutMode::FlatPages => self.transcode_flat(&text),
            LayoutMode::Hierarchical => self.transcode_hierarchical(&text),
        };
        for section in sections {
            doc.add_section(section);
        }

        log::debug!("Produced {} sections", doc.section_count());
        doc
    }

    fn transcode_flat(&self, text: &str) -> Vec<Section> {
        split_on_literal_marker(text, &self.options.page_delimiter)
            .into_iter()
            .enumerate()
            .map(|(index, page)| {
                let lines: Vec<&str> = page.lines().collect();
                let blocks = classify_lines(trim_blank_lines(&lines), LayoutMode::FlatPages);
                log::debug!("Page {}: {} blocks", index + 1, blocks.len());
                Section::untitled(blocks)
            })
            .collect()
    }

    fn transcode_hierarchical(&self, text: &str) -> Vec<Section> {
        let chunks = split_on_pattern_boundary(text, |line| self.section_pattern.is_match(line));
        let mut sections = Vec::with_capacity(chunks.len());

        for chunk in chunks {
            let mut section = match chunk.heading {
                Some(heading) => Section::titled(heading_title(&self.section_pattern, heading)),
                None if self.options.skip_preamble => {
                    log::debug!("Skipping {} preamble lines", chunk.body.len());
                    continue;
                }
                None => Section::default(),
            };
            self.fill_section(&mut section, &chunk.body);
            log::debug!(
                "Section {:?}: {} blocks in {} subsections",
                section.title,
                section.block_count(),
                section.subsections.len()
            );
            sections.push(section);
        }

        sections
    }

    fn fill_section(&self, section: &mut Section, body: &[&str]) {
        let chunks = split_lines_on_boundary(body.iter().copied(), |line| {
            self.subsection_pattern.is_match(line)
        });

        for chunk in chunks {
            let blocks = classify_lines(trim_blank_lines(&chunk.body), LayoutMode::Hierarchical);
            match chunk.heading {
                Some(heading) => {
                    let mut subsection =
                        Subsection::new(heading_title(&self.subsection_pattern, heading));
                    subsection.blocks.extend(blocks);
                    section.add_subsection(subsection);
                }
                None => section.blocks.extend(blocks),
            }
        }
    }
}

/// Title carried by a boundary line: capture group 1 if the pattern has one,
/// otherwise the whole trimmed line.
fn heading_title(pattern: &Regex, line: &str) -> String {
    pattern
        .captures(line)
        .and_then(|caps| caps.get(1))
        .map_or(line, |m| m.as_str())
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Run};

    fn flat() -> Transcoder {
        Transcoder::new(ParseOptions::new().flat_pages().with_page_delimiter("<PB>")).unwrap()
    }

    fn hierarchical() -> Transcoder {
        Transcoder::new(ParseOptions::new().hierarchical()).unwrap()
    }

    #[test]
    fn test_flat_section_count() {
        let doc = flat().transcode("A\n<PB>\nB\n<PB>\nC");
        assert_eq!(doc.section_count(), 3);
        let contents: Vec<_> = doc
            .sections
            .iter()
            .map(|s| s.blocks.clone())
            .collect();
        assert_eq!(
            contents,
            vec![
                vec![Block::plain("A")],
                vec![Block::plain("B")],
                vec![Block::plain("C")]
            ]
        );
    }

    #[test]
    fn test_flat_page_breaks_between_pages() {
        let doc = flat().transcode("# Title\n<PB>\n- item");
        assert_eq!(
            doc.blocks(),
            vec![
                &Block::heading(1, "Title"),
                &Block::PageBreak,
                &Block::bullet(1, "item")
            ]
        );
    }

    #[test]
    fn test_flat_interior_blank_lines_kept() {
        let doc = flat().transcode("\n\na\n\nb\n\n");
        assert_eq!(
            doc.sections[0].blocks,
            vec![Block::plain("a"), Block::BlankLine, Block::plain("b")]
        );
    }

    #[test]
    fn test_hierarchical_structure() {
        let text = "# Release Notes\n\
                    intro\n\
                    ## 1. Overview\n\
                    Summary with **bold** text.\n\
                    ### Goals\n\
                    **Implementation Requirements:**\n\
                    - one\n\
                    - two\n\
                    ## 2. Scope\n\
                    ### Limits\n\
                    none\n";
        let doc = hierarchical().transcode(text);

        assert_eq!(doc.mode, LayoutMode::Hierarchical);
        assert_eq!(doc.section_count(), 3);
        assert_eq!(doc.section_titles(), vec!["Overview", "Scope"]);

        let preamble = &doc.sections[0];
        assert_eq!(preamble.title, None);
        assert_eq!(
            preamble.blocks,
            vec![Block::heading(1, "Release Notes"), Block::plain("intro")]
        );

        let overview = &doc.sections[1];
        assert_eq!(
            overview.blocks,
            vec![
                Block::heading(1, "Overview"),
                Block::paragraph(vec![
                    Run::plain("Summary with "),
                    Run::bold("bold"),
                    Run::plain(" text.")
                ])
            ]
        );
        assert_eq!(overview.subsections.len(), 1);
        assert_eq!(
            overview.subsections[0].blocks,
            vec![
                Block::heading(2, "Goals"),
                Block::heading(3, "Implementation Requirements"),
                Block::bullet(1, "one"),
                Block::BulletItem {
                    level: 1,
                    text: "two".to_string(),
                    continues_list: true
                }
            ]
        );

        let scope = &doc.sections[2];
        assert_eq!(scope.blocks, vec![Block::heading(1, "Scope")]);
        assert_eq!(scope.subsections[0].title, "Limits");
    }

    #[test]
    fn test_hierarchical_page_break_after_each_section() {
        let doc = hierarchical().transcode("## 1. A\na\n## 2. B\nb");
        let breaks = doc
            .blocks()
            .iter()
            .filter(|b| ***b == Block::PageBreak)
            .count();
        assert_eq!(breaks, 2);
        assert_eq!(doc.blocks().last(), Some(&&Block::PageBreak));
    }

    #[test]
    fn test_skip_preamble() {
        let transcoder =
            Transcoder::new(ParseOptions::new().hierarchical().skip_preamble()).unwrap();
        let doc = transcoder.transcode("# Title\nmeta\n## 1. First\nbody");
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].title.as_deref(), Some("First"));
    }

    #[test]
    fn test_unnumbered_level_two_heading_stays_inline() {
        let doc = hierarchical().transcode("## 1. A\n## Notes\ntext");
        assert_eq!(doc.section_count(), 1);
        assert_eq!(doc.sections[0].blocks[1], Block::heading(2, "Notes"));
    }

    #[test]
    fn test_pattern_without_capture_group() {
        let options = ParseOptions::new()
            .hierarchical()
            .with_section_pattern(r"^== .* ==$");
        let doc = Transcoder::new(options).unwrap().transcode("== Part ==\nx");
        assert_eq!(doc.section_titles(), vec!["== Part =="]);
    }

    #[test]
    fn test_invalid_pattern() {
        let options = ParseOptions::new().with_section_pattern("(");
        assert!(Transcoder::new(options).is_err());
    }

    #[test]
    fn test_auto_detect_mode() {
        let transcoder = Transcoder::new(ParseOptions::new()).unwrap();
        assert_eq!(
            transcoder.resolve_mode("## 1. Intro\ntext"),
            LayoutMode::Hierarchical
        );
        assert_eq!(transcoder.resolve_mode("# Plain"), LayoutMode::FlatPages);
    }

    #[test]
    fn test_crlf_input() {
        let doc = flat().transcode("- a\r\n- b\r\n");
        assert_eq!(
            doc.sections[0].blocks,
            vec![Block::bullet(1, "a"), Block::bullet(1, "b")]
        );
    }
}
