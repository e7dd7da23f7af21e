//! Structural splitting primitives.
//!
//! The two ways a source document is cut into chunks: on a literal marker
//! anywhere in the text, or at every line a boundary predicate accepts.

/// A run of lines started by an optional boundary line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Chunk<'a> {
    /// The boundary line that opened the chunk (`None` for leading text)
    pub heading: Option<&'a str>,

    /// Lines following the boundary line
    pub body: Vec<&'a str>,
}

impl Chunk<'_> {
    /// Check if the chunk has no heading and only blank lines.
    pub fn is_blank(&self) -> bool {
        self.heading.is_none() && self.body.iter().all(|line| line.trim().is_empty())
    }
}

/// Split `text` on every literal occurrence of `marker`.
///
/// An empty marker yields the whole text as a single chunk.
pub fn split_on_literal_marker<'a>(text: &'a str, marker: &str) -> Vec<&'a str> {
    if marker.is_empty() {
        return vec![text];
    }
    text.split(marker).collect()
}

/// Split `text` into chunks, opening a new chunk at each line for which
/// `is_boundary` returns true. The boundary line becomes the chunk heading.
///
/// Text before the first boundary forms a heading-less leading chunk, which
/// is omitted when it holds only blank lines.
pub fn split_on_pattern_boundary<'a, F>(text: &'a str, is_boundary: F) -> Vec<Chunk<'a>>
where
    F: FnMut(&str) -> bool,
{
    split_lines_on_boundary(text.lines(), is_boundary)
}

/// Line-slice form of [`split_on_pattern_boundary`].
pub fn split_lines_on_boundary<'a, I, F>(lines: I, mut is_boundary: F) -> Vec<Chunk<'a>>
where
    I: IntoIterator<Item = &'a str>,
    F: FnMut(&str) -> bool,
{
    let mut chunks = Vec::new();
    let mut current = Chunk::default();

    for line in lines {
        if is_boundary(line) {
            let finished = std::mem::replace(
                &mut current,
                Chunk {
                    heading: Some(line),
                    body: Vec::new(),
                },
            );
            if !finished.is_blank() {
                chunks.push(finished);
            }
        } else {
            current.body.push(line);
        }
    }

    if !current.is_blank() {
        chunks.push(current);
    }
    chunks
}

/// Strip leading and trailing blank lines.
pub fn trim_blank_lines<'s, 'a>(lines: &'s [&'a str]) -> &'s [&'a str] {
    let start = lines
        .iter()
        .position(|line| !line.trim().is_empty())
        .unwrap_or(lines.len());
    let end = lines
        .iter()
        .rposition(|line| !line.trim().is_empty())
        .map_or(start, |i| i + 1);
    &lines[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_literal_marker_split() {
        let chunks = split_on_literal_marker("A\n<PB>\nB\n<PB>\nC", "<PB>");
        assert_eq!(chunks, vec!["A\n", "\nB\n", "\nC"]);
    }

    #[test]
    fn test_literal_marker_absent() {
        assert_eq!(split_on_literal_marker("only", "<PB>"), vec!["only"]);
        assert_eq!(split_on_literal_marker("x<PB>", ""), vec!["x<PB>"]);
    }

    #[test]
    fn test_literal_marker_mid_line() {
        let chunks = split_on_literal_marker("before<PB>after", "<PB>");
        assert_eq!(chunks, vec!["before", "after"]);
    }

    #[test]
    fn test_pattern_boundary_split() {
        let text = "intro\n## 1. One\na\n## 2. Two\nb\nc";
        let chunks = split_on_pattern_boundary(text, |l| l.starts_with("## "));

        assert_eq!(chunks.len(), 3);
        assert_eq!(chunks[0].heading, None);
        assert_eq!(chunks[0].body, vec!["intro"]);
        assert_eq!(chunks[1].heading, Some("## 1. One"));
        assert_eq!(chunks[1].body, vec!["a"]);
        assert_eq!(chunks[2].heading, Some("## 2. Two"));
        assert_eq!(chunks[2].body, vec!["b", "c"]);
    }

    #[test]
    fn test_blank_leading_chunk_omitted() {
        let chunks = split_on_pattern_boundary("\n  \n### A\n", |l| l.starts_with("### "));
        assert_eq!(chunks.len(), 1);
        assert_eq!(chunks[0].heading, Some("### A"));
    }

    #[test]
    fn test_heading_without_body_kept() {
        let chunks = split_on_pattern_boundary("### A\n### B", |l| l.starts_with("### "));
        assert_eq!(chunks.len(), 2);
        assert!(chunks[0].body.is_empty());
    }

    #[test]
    fn test_trim_blank_lines() {
        let lines = vec!["", " ", "a", "", "b", "  "];
        assert_eq!(trim_blank_lines(&lines), &["a", "", "b"]);

        let blank = vec!["", "   "];
        assert!(trim_blank_lines(&blank).is_empty());
    }
}
