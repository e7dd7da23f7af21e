//! Line classification.
//!
//! Rules are tried top to bottom and the first match wins. Several prefixes
//! are textual subsets of each other (`#`, `##`, `###`), so the order is
//! part of the contract.

use std::sync::OnceLock;

use regex::Regex;

use crate::model::{Block, LayoutMode, ListState, Run};

fn bold_pattern() -> &'static Regex {
    static BOLD: OnceLock<Regex> = OnceLock::new();
    BOLD.get_or_init(|| Regex::new(r"\*\*(.*?)\*\*").expect("bold pattern is valid"))
}

/// Classify one source line into a block.
///
/// Pure function of the line text and the mode; never fails. Leading and
/// trailing whitespace is ignored except for the `"  * "` sub-bullet prefix,
/// which is matched against the raw line.
pub fn classify_line(line: &str, mode: LayoutMode) -> Block {
    let trimmed = line.trim();

    if let Some(text) = trimmed.strip_prefix("### ") {
        return Block::heading(3, text);
    }
    if let Some(text) = trimmed.strip_prefix("## ") {
        return Block::heading(2, text);
    }
    if let Some(text) = trimmed.strip_prefix("# ") {
        return Block::heading(1, text);
    }
    if let Some(text) = mini_heading_text(trimmed, mode) {
        return Block::heading(3, text);
    }
    if let Some(text) = trimmed.strip_prefix("- ") {
        return Block::bullet(1, text);
    }
    if mode == LayoutMode::FlatPages {
        if let Some(text) = line.strip_prefix("  * ") {
            return Block::bullet(2, text.trim_end());
        }
    }
    if trimmed.starts_with("---") {
        return Block::Rule;
    }
    if trimmed.is_empty() {
        return Block::BlankLine;
    }
    let runs = split_bold_runs(trimmed);
    if runs.is_empty() {
        // Only empty bold spans, e.g. `****`: keep the line as written.
        return Block::plain(trimmed);
    }
    Block::paragraph(runs)
}

/// Classify a sequence of lines, threading list-continuation state.
///
/// List state is only tracked in hierarchical mode; flat-pages bullets
/// never continue a list.
pub fn classify_lines(lines: &[&str], mode: LayoutMode) -> Vec<Block> {
    let mut state = ListState::NoList;
    lines
        .iter()
        .map(|line| {
            let mut block = classify_line(line, mode);
            if mode == LayoutMode::Hierarchical {
                if let Block::BulletItem { continues_list, .. } = &mut block {
                    *continues_list = state.is_in_list();
                }
                state = state.next(&block);
            }
            block
        })
        .collect()
}

/// Text of a bold "mini-heading" line such as `**Requirements:**`.
///
/// Hierarchical mode additionally requires the `:**` ending. Unlike a plain
/// starts-and-ends-with-`**` test, a line with inner `**` markers such as
/// `**a** and **b**` is an inline-bold paragraph, not a mini-heading.
fn mini_heading_text(trimmed: &str, mode: LayoutMode) -> Option<&str> {
    if trimmed.len() < 4 || !trimmed.starts_with("**") || !trimmed.ends_with("**") {
        return None;
    }
    if mode == LayoutMode::Hierarchical && !trimmed.ends_with(":**") {
        return None;
    }

    let inner = &trimmed[2..trimmed.len() - 2];
    if inner.contains("**") {
        return None;
    }
    let text = inner.trim_end_matches(':').trim();
    if text.is_empty() {
        None
    } else {
        Some(text)
    }
}

/// Split `text` into runs alternating non-bold / bold at `**...**` spans.
///
/// Spans are matched left to right without overlap. Zero-length runs are
/// omitted and an unmatched `**` stays literal in the final run.
pub fn split_bold_runs(text: &str) -> Vec<Run> {
    let mut runs = Vec::new();
    let mut last = 0;

    for caps in bold_pattern().captures_iter(text) {
        let Some(span) = caps.get(0) else {
            continue;
        };
        push_run(&mut runs, &text[last..span.start()], false);
        push_run(&mut runs, caps.get(1).map_or("", |m| m.as_str()), true);
        last = span.end();
    }

    let tail = &text[last..];
    if tail.contains("**") {
        log::warn!("Unbalanced bold marker kept as literal text: {:?}", tail);
    }
    push_run(&mut runs, tail, false);
    runs
}

fn push_run(runs: &mut Vec<Run>, text: &str, bold: bool) {
    if text.is_empty() {
        return;
    }
    runs.push(Run {
        text: text.to_string(),
        bold,
    });
}
