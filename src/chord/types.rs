//! Resolved chord types
//!
//! [`ParsedChord`] is the value handed to renderers. Its serialized form is the
//! output contract:
//!
//! ```text
//! { "root": "C", "type": "maj7", "bassNote": "E" | null,
//!   "voicing": [-8, 0, 7, 11], "bassValue": -8 | null }
//! ```

use crate::symbols::PitchClass;
use serde::Serialize;

/// How a slash bass relates to the chord above it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum BassRole {
    /// The bass was already a chord tone and was moved to the bottom.
    Inversion,
    /// The bass is not a chord tone and was added underneath.
    Added,
}

/// A chord symbol resolved to an absolute-pitch voicing.
///
/// # Fields
/// - `root`: Canonical root spelling (`"C#"`, `"Bb"`)
/// - `chord_type`: Canonical type key; `""` for major and for unrecognized suffixes
/// - `bass_note`: Canonical slash-bass spelling, if one was given
/// - `voicing`: Absolute pitches, lowest first, C of the reference octave = 0
/// - `bass_value`: `voicing[0]` when a slash bass was given
///
/// Without a bass the voicing is ascending. With a bass, `voicing[0]` is the
/// bass and is strictly below every other entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedChord {
    pub root: String,
    #[serde(rename = "type")]
    pub chord_type: String,
    pub bass_note: Option<String>,
    pub voicing: Vec<i32>,
    pub bass_value: Option<i32>,
    #[serde(skip)]
    pub bass_role: Option<BassRole>,
}

impl ParsedChord {
    /// The voicing reduced to pitch classes, in voicing order.
    pub fn pitch_classes(&self) -> Vec<PitchClass> {
        self.voicing.iter().map(|&p| PitchClass::of(p)).collect()
    }

    pub fn is_inversion(&self) -> bool {
        self.bass_role == Some(BassRole::Inversion)
    }

    /// Canonical symbol: `root + type`, plus `/bass` when present.
    ///
    /// # Example
    /// ```
    /// let chord = chordsheet::parse("c#M7/g#").unwrap();
    /// assert_eq!(chord.symbol(), "C#maj7/G#");
    /// ```
    pub fn symbol(&self) -> String {
        match &self.bass_note {
            Some(bass) => format!("{}{}/{}", self.root, self.chord_type, bass),
            None => format!("{}{}", self.root, self.chord_type),
        }
    }

    /// A copy with every absolute pitch moved by whole octaves.
    ///
    /// Returns `None` if any pitch would overflow `i32`.
    pub fn shifted(&self, octaves: i32) -> Option<ParsedChord> {
        let offset = octaves.checked_mul(12)?;
        let voicing = self
            .voicing
            .iter()
            .map(|p| p.checked_add(offset))
            .collect::<Option<Vec<i32>>>()?;
        let bass_value = match self.bass_value {
            Some(b) => Some(b.checked_add(offset)?),
            None => None,
        };
        Some(ParsedChord {
            voicing,
            bass_value,
            ..self.clone()
        })
    }
}
