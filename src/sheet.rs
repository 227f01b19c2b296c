//! # Chord Sheet
//!
//! Reads a chord sheet: one chord per line, optionally followed by ` - lyrics`,
//! with optional YAML frontmatter.
//!
//! ```text
//! ---
//! title: Let It Be
//! octave: 4
//! keyboard-octaves: 2
//! ---
//! C - When I find myself
//! G/B - in times of trouble
//! Am
//! F - Mother Mary
//! ```
//!
//! ## Frontmatter
//! - `title` - shown above the diagrams
//! - `octave` - octave shift applied when placing chords on the keyboard (default 4, range 0-8)
//! - `keyboard-octaves` - keyboard width (default 2, range 1-4)
//!
//! ## Lines
//! Blank lines are ignored. A line whose chord does not parse is not an error:
//! it is left out of [`ChordSheet::entries`] and recorded in
//! [`ChordSheet::skipped`].

use crate::chord::{parse, ParsedChord};
use crate::error::{LayoutError, SheetError};
use crate::keyboard::{KeyboardLayout, KeyboardView};
use serde::{Deserialize, Serialize};
use tracing::debug;

const FRONTMATTER_MARKER: &str = "---";

/// Raw frontmatter for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawSheetMetadata {
    pub title: Option<String>,
    pub octave: Option<i32>,
    pub keyboard_octaves: Option<u8>,
}

/// Validated sheet settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetMetadata {
    pub title: Option<String>,
    pub octave: i32,
    pub keyboard_octaves: u8,
}

impl Default for SheetMetadata {
    fn default() -> Self {
        Self {
            title: None,
            octave: 4,
            keyboard_octaves: KeyboardLayout::DEFAULT_OCTAVES,
        }
    }
}

impl SheetMetadata {
    fn from_raw(raw: RawSheetMetadata) -> Result<Self, SheetError> {
        let defaults = Self::default();
        Self::validated(
            raw.title,
            raw.octave.unwrap_or(defaults.octave),
            raw.keyboard_octaves.unwrap_or(defaults.keyboard_octaves),
        )
    }

    /// Replace `octave` and `keyboard_octaves` where given, with the same
    /// range checks as the frontmatter.
    ///
    /// # Example
    /// ```
    /// use chordsheet::{SheetError, SheetMetadata};
    ///
    /// let metadata = SheetMetadata::default().with_overrides(Some(3), None)?;
    /// assert_eq!(metadata.octave, 3);
    /// assert!(SheetMetadata::default().with_overrides(None, Some(9)).is_err());
    /// # Ok::<(), SheetError>(())
    /// ```
    pub fn with_overrides(
        self,
        octave: Option<i32>,
        keyboard_octaves: Option<u8>,
    ) -> Result<Self, SheetError> {
        Self::validated(
            self.title,
            octave.unwrap_or(self.octave),
            keyboard_octaves.unwrap_or(self.keyboard_octaves),
        )
    }

    fn validated(title: Option<String>, octave: i32, keyboard_octaves: u8) -> Result<Self, SheetError> {
        let octave_range = KeyboardLayout::OCTAVE_RANGE;
        if !octave_range.contains(&octave) {
            return Err(SheetError::MetadataError(format!(
                "octave must be between {} and {}, got {}",
                octave_range.start(),
                octave_range.end(),
                octave
            )));
        }

        if !(1..=KeyboardLayout::MAX_OCTAVES).contains(&keyboard_octaves) {
            return Err(SheetError::MetadataError(format!(
                "keyboard-octaves must be between 1 and {}, got {}",
                KeyboardLayout::MAX_OCTAVES,
                keyboard_octaves
            )));
        }

        Ok(Self {
            title,
            octave,
            keyboard_octaves,
        })
    }

    pub fn layout(&self) -> KeyboardLayout {
        KeyboardLayout::new(self.keyboard_octaves)
    }
}

/// A parsed sheet line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SheetEntry {
    /// 1-based line number in the source.
    pub line: usize,
    /// The chord text as written.
    pub symbol: String,
    pub lyrics: Option<String>,
    pub chord: ParsedChord,
}

/// A line that was left out because its chord did not parse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedLine {
    pub line: usize,
    pub text: String,
    pub reason: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ChordSheet {
    pub metadata: SheetMetadata,
    pub entries: Vec<SheetEntry>,
    pub skipped: Vec<SkippedLine>,
}

impl ChordSheet {
    /// Keyboard diagrams for every entry, using the sheet's settings.
    ///
    /// # Errors
    /// [`LayoutError::OctaveOutOfRange`] if `metadata.octave` was set outside
    /// the accepted range after parsing.
    pub fn views(&self) -> Result<Vec<KeyboardView>, LayoutError> {
        let layout = self.metadata.layout();
        self.entries
            .iter()
            .map(|entry| layout.place(&entry.chord, self.metadata.octave))
            .collect()
    }
}

/// Parse a chord sheet.
///
/// # Example
/// ```rust
/// use chordsheet::parse_sheet;
///
/// let sheet = parse_sheet("---\ntitle: Demo\n---\nC - hello\nXyz\nAm/F\n")?;
/// assert_eq!(sheet.metadata.title.as_deref(), Some("Demo"));
/// assert_eq!(sheet.entries.len(), 2);
/// assert_eq!(sheet.entries[0].lyrics.as_deref(), Some("hello"));
/// assert_eq!(sheet.skipped[0].line, 5);
/// # Ok::<(), chordsheet::SheetError>(())
/// ```
///
/// # Errors
/// Returns [`SheetError::MetadataError`] for unterminated or invalid frontmatter.
pub fn parse_sheet(source: &str) -> Result<ChordSheet, SheetError> {
    let (frontmatter, body, first_body_line) = split_frontmatter(source)?;

    let metadata = match frontmatter {
        Some(content) => parse_metadata(content)?,
        None => SheetMetadata::default(),
    };

    let mut entries = Vec::new();
    let mut skipped = Vec::new();

    for (index, raw_line) in body.lines().enumerate() {
        let line = first_body_line + index;
        if raw_line.trim().is_empty() {
            continue;
        }

        let (symbol, lyrics) = split_line(raw_line);
        match parse(symbol) {
            Ok(chord) => entries.push(SheetEntry {
                line,
                symbol: symbol.to_string(),
                lyrics,
                chord,
            }),
            Err(e) => {
                debug!(line, text = raw_line, error = %e, "skipping line");
                skipped.push(SkippedLine {
                    line,
                    text: raw_line.to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    Ok(ChordSheet {
        metadata,
        entries,
        skipped,
    })
}

/// `"Am - lyrics"` to `("Am", Some("lyrics"))`. Hyphens after the first stay in the lyrics.
fn split_line(line: &str) -> (&str, Option<String>) {
    match line.split_once('-') {
        Some((chord, lyrics)) => {
            let lyrics = lyrics.trim();
            (chord.trim(), (!lyrics.is_empty()).then(|| lyrics.to_string()))
        }
        None => (line.trim(), None),
    }
}

/// Returns the frontmatter content (if any), the body, and the 1-based line
/// number the body starts at.
fn split_frontmatter(source: &str) -> Result<(Option<&str>, &str, usize), SheetError> {
    let Some(rest) = source.strip_prefix(FRONTMATTER_MARKER) else {
        return Ok((None, source, 1));
    };
    let Some(rest) = rest.strip_prefix('\n').or_else(|| rest.strip_prefix("\r\n")) else {
        return Ok((None, source, 1));
    };

    let mut offset = 0;
    for (index, line) in rest.split_inclusive('\n').enumerate() {
        if line.trim_end() == FRONTMATTER_MARKER {
            let content = &rest[..offset];
            let body = &rest[offset + line.len()..];
            // Opening marker, content lines, closing marker.
            return Ok((Some(content), body, index + 3));
        }
        offset += line.len();
    }

    Err(SheetError::MetadataError(
        "frontmatter is missing its closing ---".to_string(),
    ))
}

fn parse_metadata(content: &str) -> Result<SheetMetadata, SheetError> {
    if content.trim().is_empty() {
        return Ok(SheetMetadata::default());
    }
    let raw: RawSheetMetadata =
        serde_yaml::from_str(content).map_err(|e| SheetError::MetadataError(e.to_string()))?;
    SheetMetadata::from_raw(raw)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_lines() {
        let sheet = parse_sheet("C\nAm - sing along\n\nG7\n").unwrap();
        assert_eq!(sheet.metadata, SheetMetadata::default());
        let symbols: Vec<&str> = sheet.entries.iter().map(|e| e.symbol.as_str()).collect();
        assert_eq!(symbols, vec!["C", "Am", "G7"]);
        assert_eq!(sheet.entries[1].lyrics.as_deref(), Some("sing along"));
        assert_eq!(sheet.entries[2].line, 4);
        assert!(sheet.skipped.is_empty());
    }

    #[test]
    fn test_frontmatter() {
        let source = "---\ntitle: Demo Song\noctave: 3\nkeyboard-octaves: 3\n---\nDm7 - one\n";
        let sheet = parse_sheet(source).unwrap();
        assert_eq!(sheet.metadata.title.as_deref(), Some("Demo Song"));
        assert_eq!(sheet.metadata.octave, 3);
        assert_eq!(sheet.metadata.keyboard_octaves, 3);
        assert_eq!(sheet.entries[0].line, 6);
        assert_eq!(sheet.entries[0].chord.voicing, vec![2, 5, 9, 12]);
    }

    #[test]
    fn test_empty_frontmatter_uses_defaults() {
        let sheet = parse_sheet("---\n---\nC\n").unwrap();
        assert_eq!(sheet.metadata, SheetMetadata::default());
        assert_eq!(sheet.entries[0].line, 3);
    }

    #[test]
    fn test_unparseable_lines_are_skipped() {
        let sheet = parse_sheet("C\nXyz - nope\nCb\nAm/F\n- lyrics only\n").unwrap();
        assert_eq!(sheet.entries.len(), 2);
        let lines: Vec<usize> = sheet.skipped.iter().map(|s| s.line).collect();
        assert_eq!(lines, vec![2, 3, 5]);
        assert_eq!(sheet.skipped[1].reason, "Unknown root note: Cb");
    }

    #[test]
    fn test_lyrics_keep_later_hyphens() {
        let (chord, lyrics) = split_line("  G/B - twenty-one  ");
        assert_eq!(chord, "G/B");
        assert_eq!(lyrics.as_deref(), Some("twenty-one"));

        let (chord, lyrics) = split_line("F -");
        assert_eq!(chord, "F");
        assert_eq!(lyrics, None);
    }

    #[test]
    fn test_unterminated_frontmatter() {
        let err = parse_sheet("---\ntitle: x\nC\n").unwrap_err();
        assert!(matches!(err, SheetError::MetadataError(_)));
    }

    #[test]
    fn test_invalid_metadata_values() {
        assert!(matches!(
            parse_sheet("---\noctave: 12\n---\nC\n"),
            Err(SheetError::MetadataError(_))
        ));
        assert!(matches!(
            parse_sheet("---\nkeyboard-octaves: 0\n---\nC\n"),
            Err(SheetError::MetadataError(_))
        ));
        assert!(matches!(
            parse_sheet("---\ntempo: 120\n---\nC\n"),
            Err(SheetError::MetadataError(_))
        ));
    }

    #[test]
    fn test_overrides_are_validated() {
        let sheet = parse_sheet("---\noctave: 3\n---\nC\n").unwrap();

        let metadata = sheet.metadata.clone().with_overrides(None, Some(4)).unwrap();
        assert_eq!(metadata.octave, 3);
        assert_eq!(metadata.keyboard_octaves, 4);

        for (octave, keyboard_octaves) in [(Some(50), None), (Some(-1), None), (None, Some(9)), (None, Some(0))] {
            let result = sheet.metadata.clone().with_overrides(octave, keyboard_octaves);
            assert!(
                matches!(result, Err(SheetError::MetadataError(_))),
                "{:?} {:?}",
                octave,
                keyboard_octaves
            );
        }
    }

    #[test]
    fn test_views_reject_octave_set_out_of_range() {
        let mut sheet = parse_sheet("C\n").unwrap();
        sheet.metadata.octave = 200_000_000;
        assert_eq!(
            sheet.views(),
            Err(LayoutError::OctaveOutOfRange { octave: 200_000_000 })
        );
    }

    #[test]
    fn test_dashes_not_at_start_are_not_frontmatter() {
        let sheet = parse_sheet("C\n---\n").unwrap();
        assert_eq!(sheet.entries.len(), 1);
        assert_eq!(sheet.skipped.len(), 1);
    }

    #[test]
    fn test_views_use_sheet_settings() {
        let sheet = parse_sheet("---\noctave: 5\nkeyboard-octaves: 1\n---\nC\nA13\n").unwrap();
        let views = sheet.views().unwrap();
        assert_eq!(views[0].start_pitch, 60);
        assert_eq!(views[0].octaves, 1);
        assert!(!views[1].clipped.is_empty());
    }
}
