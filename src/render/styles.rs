//! Style configuration passed to the DOCX renderer.

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Paragraph style a block is rendered with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum StyleKind {
    /// Cover page and table-of-contents title
    Title,
    /// Cover page subtitle lines
    Subtitle,
    /// Level-1 heading
    Heading1,
    /// Level-2 heading
    Heading2,
    /// Level-3 heading and bold mini-headings
    Heading3,
    /// Body text
    Normal,
    /// First-level bullet
    ListBullet,
    /// Second-level bullet
    ListBullet2,
}

impl StyleKind {
    /// All style kinds, in declaration order.
    pub const ALL: [StyleKind; 8] = [
        StyleKind::Title,
        StyleKind::Subtitle,
        StyleKind::Heading1,
        StyleKind::Heading2,
        StyleKind::Heading3,
        StyleKind::Normal,
        StyleKind::ListBullet,
        StyleKind::ListBullet2,
    ];

    /// Style identifier written to `styles.xml`.
    pub fn style_id(&self) -> &'static str {
        match self {
            StyleKind::Title => "Title",
            StyleKind::Subtitle => "Subtitle",
            StyleKind::Heading1 => "Heading1",
            StyleKind::Heading2 => "Heading2",
            StyleKind::Heading3 => "Heading3",
            StyleKind::Normal => "Normal",
            StyleKind::ListBullet => "ListBullet",
            StyleKind::ListBullet2 => "ListBullet2",
        }
    }

    /// Display name shown in the word processor.
    pub fn display_name(&self) -> &'static str {
        match self {
            StyleKind::Title => "Title",
            StyleKind::Subtitle => "Subtitle",
            StyleKind::Heading1 => "Heading 1",
            StyleKind::Heading2 => "Heading 2",
            StyleKind::Heading3 => "Heading 3",
            StyleKind::Normal => "Normal",
            StyleKind::ListBullet => "List Bullet",
            StyleKind::ListBullet2 => "List Bullet 2",
        }
    }

    /// Heading style for a heading level.
    pub fn for_heading(level: u8) -> Self {
        match level {
            0 | 1 => StyleKind::Heading1,
            2 => StyleKind::Heading2,
            _ => StyleKind::Heading3,
        }
    }

    /// Bullet style for a bullet level.
    pub fn for_bullet(level: u8) -> Self {
        if level >= 2 {
            StyleKind::ListBullet2
        } else {
            StyleKind::ListBullet
        }
    }
}

/// Paragraph alignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Alignment {
    /// Left alignment (default)
    #[default]
    Left,
    /// Center alignment
    Center,
    /// Right alignment
    Right,
    /// Justified alignment
    Justify,
}

/// Font and paragraph settings for one style.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleDescriptor {
    /// Font family
    pub font: String,

    /// Font size in points
    pub size_pt: f32,

    /// Text color as hex RGB without `#` (e.g. "003366")
    pub color: String,

    /// Bold text
    #[serde(default)]
    pub bold: bool,

    /// Paragraph alignment
    #[serde(default)]
    pub alignment: Alignment,
}

impl StyleDescriptor {
    /// Create a descriptor.
    pub fn new(font: impl Into<String>, size_pt: f32, color: impl Into<String>) -> Self {
        Self {
            font: font.into(),
            size_pt,
            color: color.into(),
            bold: false,
            alignment: Alignment::Left,
        }
    }

    /// Make the style bold.
    pub fn bold(mut self) -> Self {
        self.bold = true;
        self
    }

    /// Set the alignment.
    pub fn aligned(mut self, alignment: Alignment) -> Self {
        self.alignment = alignment;
        self
    }

    /// Font size in half-points, as used by WordprocessingML.
    pub fn half_points(&self) -> usize {
        (self.size_pt * 2.0).round().max(1.0) as usize
    }
}

/// Mapping from style kind to style descriptor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleSheet {
    styles: BTreeMap<StyleKind, StyleDescriptor>,
}

impl StyleSheet {
    /// Create a style sheet with the default styles.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the descriptor for a style kind.
    pub fn get(&self, kind: StyleKind) -> StyleDescriptor {
        self.styles
            .get(&kind)
            .cloned()
            .unwrap_or_else(|| default_descriptor(kind))
    }

    /// Replace the descriptor for a style kind.
    pub fn set(&mut self, kind: StyleKind, descriptor: StyleDescriptor) {
        self.styles.insert(kind, descriptor);
    }

    /// Builder form of [`StyleSheet::set`].
    pub fn with_style(mut self, kind: StyleKind, descriptor: StyleDescriptor) -> Self {
        self.set(kind, descriptor);
        self
    }

    /// Parse a style sheet from JSON. Kinds missing from the JSON keep their defaults.
    pub fn from_json(json: &str) -> Result<Self> {
        let parsed: StyleSheet =
            serde_json::from_str(json).map_err(|e| Error::StyleSheet(e.to_string()))?;
        let mut sheet = StyleSheet::default();
        sheet.styles.extend(parsed.styles);
        Ok(sheet)
    }

    /// Load a style sheet from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serialize the style sheet as pretty JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| Error::StyleSheet(e.to_string()))
    }

    /// Save the style sheet to a JSON file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        fs::write(path, self.to_json()?)?;
        Ok(())
    }
}

impl Default for StyleSheet {
    fn default() -> Self {
        Self {
            styles: StyleKind::ALL
                .iter()
                .map(|&kind| (kind, default_descriptor(kind)))
                .collect(),
        }
    }
}

fn default_descriptor(kind: StyleKind) -> StyleDescriptor {
    const FONT: &str = "Calibri";
    match kind {
        StyleKind::Title => StyleDescriptor::new(FONT, 24.0, "000000").bold(),
        StyleKind::Subtitle => StyleDescriptor::new(FONT, 13.0, "595959"),
        StyleKind::Heading1 => StyleDescriptor::new(FONT, 18.0, "003366").bold(),
        StyleKind::Heading2 => StyleDescriptor::new(FONT, 16.0, "006699").bold(),
        StyleKind::Heading3 => StyleDescriptor::new(FONT, 14.0, "0066CC").bold(),
        StyleKind::Normal | StyleKind::ListBullet | StyleKind::ListBullet2 => {
            StyleDescriptor::new(FONT, 11.0, "000000")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_styles() {
        let sheet = StyleSheet::default();
        let h1 = sheet.get(StyleKind::Heading1);
        assert_eq!(h1.font, "Calibri");
        assert_eq!(h1.size_pt, 18.0);
        assert_eq!(h1.color, "003366");
        assert!(h1.bold);
        assert!(!sheet.get(StyleKind::Normal).bold);
    }

    #[test]
    fn test_half_points() {
        assert_eq!(StyleDescriptor::new("Arial", 11.0, "000000").half_points(), 22);
        assert_eq!(StyleDescriptor::new("Arial", 10.5, "000000").half_points(), 21);
    }

    #[test]
    fn test_style_lookup_by_level() {
        assert_eq!(StyleKind::for_heading(1), StyleKind::Heading1);
        assert_eq!(StyleKind::for_heading(3), StyleKind::Heading3);
        assert_eq!(StyleKind::for_bullet(1), StyleKind::ListBullet);
        assert_eq!(StyleKind::for_bullet(2), StyleKind::ListBullet2);
        assert_eq!(StyleKind::ListBullet2.display_name(), "List Bullet 2");
    }

    #[test]
    fn test_json_partial_override() {
        let json = r#"{"styles":{"Heading1":{"font":"Georgia","size_pt":20.0,"color":"112233","bold":true}}}"#;
        let sheet = StyleSheet::from_json(json).unwrap();
        assert_eq!(sheet.get(StyleKind::Heading1).font, "Georgia");
        assert_eq!(sheet.get(StyleKind::Heading2).color, "006699");
    }

    #[test]
    fn test_json_round_trip() {
        let sheet = StyleSheet::default().with_style(
            StyleKind::Normal,
            StyleDescriptor::new("Arial", 12.0, "222222").aligned(Alignment::Justify),
        );
        let back = StyleSheet::from_json(&sheet.to_json().unwrap()).unwrap();
        assert_eq!(back, sheet);
    }

    #[test]
    fn test_json_invalid() {
        assert!(matches!(
            StyleSheet::from_json("{not json"),
            Err(Error::StyleSheet(_))
        ));
    }
}
