//! Source reading and layout detection.

use crate::error::{Error, Result};
use crate::model::LayoutMode;
use crate::parser::ParseOptions;
use regex::Regex;
use std::fs;
use std::path::Path;

/// Read a source document, requiring valid UTF-8.
///
/// # Arguments
/// * `path` - Path to the Markdown / text file
///
/// # Returns
/// * `Ok(String)` with the full file content
/// * `Err(Error::Io)` if the file cannot be read
/// * `Err(Error::Encoding)` if the content is not UTF-8
///
/// # Example
/// ```no_run
/// use md2docx::detect::read_source;
///
/// let text = read_source("notes.md").unwrap();
/// println!("{} bytes", text.len());
/// ```
pub fn read_source<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = fs::read(path)?;
    String::from_utf8(bytes)
        .map_err(|e| Error::Encoding(format!("{} is not valid UTF-8: {}", path.display(), e)))
}

/// Detect the layout mode of `text`.
///
/// Flat pages when the page delimiter occurs anywhere; hierarchical when
/// any line matches the section pattern; flat pages otherwise.
pub fn detect_mode(text: &str, options: &ParseOptions) -> Result<LayoutMode> {
    let section_pattern = Regex::new(&options.section_pattern)?;
    Ok(detect_mode_with(
        text,
        &options.page_delimiter,
        &section_pattern,
    ))
}

pub(crate) fn detect_mode_with(
    text: &str,
    page_delimiter: &str,
    section_pattern: &Regex,
) -> LayoutMode {
    if !page_delimiter.is_empty() && text.contains(page_delimiter) {
        return LayoutMode::FlatPages;
    }
    if text.lines().any(|line| section_pattern.is_match(line)) {
        return LayoutMode::Hierarchical;
    }
    LayoutMode::FlatPages
}

/// Check if a path has a Markdown or plain-text extension.
pub fn is_markdown_path<P: AsRef<Path>>(path: P) -> bool {
    path.as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| matches!(e.to_ascii_lowercase().as_str(), "md" | "markdown" | "txt"))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_detect_flat_by_delimiter() {
        let options = ParseOptions::default();
        let text = format!("## 1. A\n{}\nB", options.page_delimiter);
        assert_eq!(detect_mode(&text, &options).unwrap(), LayoutMode::FlatPages);
    }

    #[test]
    fn test_detect_hierarchical() {
        let options = ParseOptions::default();
        let text = "# Title\n\n## 1. Introduction\ntext";
        assert_eq!(
            detect_mode(text, &options).unwrap(),
            LayoutMode::Hierarchical
        );
    }

    #[test]
    fn test_detect_default_flat() {
        let options = ParseOptions::default();
        assert_eq!(
            detect_mode("## Unnumbered\n- item", &options).unwrap(),
            LayoutMode::FlatPages
        );
    }

    #[test]
    fn test_detect_invalid_pattern() {
        let options = ParseOptions::default().with_section_pattern("[");
        assert!(matches!(
            detect_mode("x", &options),
            Err(Error::InvalidPattern(_))
        ));
    }

    #[test]
    fn test_read_source_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all("# Café".as_bytes()).unwrap();
        assert_eq!(read_source(file.path()).unwrap(), "# Café");
    }

    #[test]
    fn test_read_source_invalid_utf8() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x23, 0x20, 0xff, 0xfe]).unwrap();
        assert!(matches!(read_source(file.path()), Err(Error::Encoding(_))));
    }

    #[test]
    fn test_read_source_missing() {
        assert!(matches!(
            read_source("/nonexistent/notes.md"),
            Err(Error::Io(_))
        ));
    }

    #[test]
    fn test_is_markdown_path() {
        assert!(is_markdown_path("notes.md"));
        assert!(is_markdown_path("NOTES.MD"));
        assert!(is_markdown_path("requirements.txt"));
        assert!(!is_markdown_path("report.docx"));
        assert!(!is_markdown_path("README"));
    }
}
