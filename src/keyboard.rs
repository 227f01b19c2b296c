//! # Keyboard Layout
//!
//! Places a [`ParsedChord`] on a fixed-width piano keyboard diagram.
//!
//! The keyboard is `octaves * 12` keys wide and always starts at a C. The
//! window starts at the C at or below the lowest voiced note, so the bass is
//! always on screen; upper extensions that run past the right edge are
//! reported in [`KeyboardView::clipped`].
//!
//! ## Slots
//! Positions are given in white-key widths from the left edge, as a canvas
//! renderer draws them:
//! - a white key at slot `n` spans `[n, n + 1)`
//! - a black key at slot `n` is centered on the boundary at `n`
//!
//! ## Example
//! ```rust
//! use chordsheet::{parse, KeyboardLayout};
//!
//! let chord = parse("C/E").unwrap();
//! let view = KeyboardLayout::default().place(&chord, 4).unwrap();
//!
//! assert_eq!(view.start_pitch, 36);
//! assert_eq!(view.keys[0].pitch, 40);
//! assert!(view.keys[0].bass);
//! ```

use crate::chord::ParsedChord;
use crate::error::LayoutError;
use crate::symbols::PitchClass;
use serde::Serialize;
use std::ops::RangeInclusive;

/// Slot of each white pitch class within an octave.
const WHITE_SLOTS: [(u8, u32); 7] = [(0, 0), (2, 1), (4, 2), (5, 3), (7, 4), (9, 5), (11, 6)];

/// Boundary slot each black pitch class is centered on.
const BLACK_SLOTS: [(u8, u32); 5] = [(1, 1), (3, 2), (6, 4), (8, 5), (10, 6)];

const KEY_LABELS: [char; 12] = ['C', '#', 'D', '#', 'E', 'F', '#', 'G', '#', 'A', '#', 'B'];

/// A keyboard diagram of a fixed number of octaves.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KeyboardLayout {
    octaves: u8,
}

impl Default for KeyboardLayout {
    fn default() -> Self {
        Self {
            octaves: Self::DEFAULT_OCTAVES,
        }
    }
}

impl KeyboardLayout {
    pub const DEFAULT_OCTAVES: u8 = 2;
    pub const MAX_OCTAVES: u8 = 4;
    /// Accepted `base_octave` values for [`KeyboardLayout::place`].
    pub const OCTAVE_RANGE: RangeInclusive<i32> = 0..=8;

    /// Width in octaves, clamped to `1..=MAX_OCTAVES`.
    pub fn new(octaves: u8) -> Self {
        Self {
            octaves: octaves.clamp(1, Self::MAX_OCTAVES),
        }
    }

    pub fn octaves(&self) -> u8 {
        self.octaves
    }

    pub fn width(&self) -> i32 {
        i32::from(self.octaves) * 12
    }

    /// Place a chord's voicing on the keyboard.
    ///
    /// `base_octave` moves the voicing by whole octaves first (4 puts the
    /// root near middle C).
    ///
    /// # Errors
    /// [`LayoutError::OctaveOutOfRange`] when `base_octave` is outside
    /// [`KeyboardLayout::OCTAVE_RANGE`].
    pub fn place(&self, chord: &ParsedChord, base_octave: i32) -> Result<KeyboardView, LayoutError> {
        let out_of_range = LayoutError::OctaveOutOfRange {
            octave: base_octave,
        };
        if !Self::OCTAVE_RANGE.contains(&base_octave) {
            return Err(out_of_range);
        }
        let shifted = chord.shifted(base_octave).ok_or(out_of_range)?;
        let lowest = shifted.voicing.first().copied().unwrap_or(0);
        let start_pitch = lowest.div_euclid(12) * 12;

        let mut keys = Vec::with_capacity(shifted.voicing.len());
        let mut clipped = Vec::new();

        for (index, &pitch) in shifted.voicing.iter().enumerate() {
            let offset = pitch - start_pitch;
            if offset >= self.width() {
                clipped.push(pitch);
                continue;
            }

            let pitch_class = PitchClass::of(pitch);
            let octave = offset.div_euclid(12) as u32;
            let in_octave = slot_in_octave(pitch_class);

            keys.push(PlacedKey {
                pitch,
                key_index: offset as usize,
                pitch_class,
                black: pitch_class.is_black_key(),
                slot: in_octave + octave * 7,
                bass: index == 0 && shifted.bass_value == Some(pitch),
            });
        }

        Ok(KeyboardView {
            symbol: shifted.symbol(),
            start_pitch,
            octaves: self.octaves,
            keys,
            clipped,
        })
    }
}

fn slot_in_octave(pitch_class: PitchClass) -> u32 {
    let table: &[(u8, u32)] = if pitch_class.is_black_key() {
        &BLACK_SLOTS
    } else {
        &WHITE_SLOTS
    };
    table
        .iter()
        .find(|(pc, _)| *pc == pitch_class.value())
        .map(|&(_, slot)| slot)
        .unwrap_or(0)
}

/// One highlighted key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlacedKey {
    /// Absolute pitch after the octave shift (MIDI numbering when `base_octave` is 4 or 5).
    pub pitch: i32,
    /// Semitones from the left edge of the keyboard.
    pub key_index: usize,
    pub pitch_class: PitchClass,
    pub black: bool,
    pub slot: u32,
    /// Drawn in the bass color.
    pub bass: bool,
}

/// A chord placed on a keyboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KeyboardView {
    pub symbol: String,
    /// Absolute pitch of the leftmost key (always a C).
    pub start_pitch: i32,
    pub octaves: u8,
    pub keys: Vec<PlacedKey>,
    /// Voiced pitches beyond the right edge.
    pub clipped: Vec<i32>,
}

impl KeyboardView {
    /// Two-row text diagram: markers above, key labels below.
    ///
    /// `o` marks a chord tone and `B` the slash bass; `#` labels black keys.
    ///
    /// ```text
    /// B   o  o
    /// C#D#EF#G#A#BC#D#EF#G#A#B
    /// ```
    pub fn render_text(&self) -> String {
        let width = usize::from(self.octaves) * 12;
        let mut markers = vec![' '; width];
        for key in &self.keys {
            markers[key.key_index] = if key.bass { 'B' } else { 'o' };
        }

        let markers: String = markers.into_iter().collect();
        let labels: String = (0..width).map(|i| KEY_LABELS[i % 12]).collect();

        let mut out = format!("{}\n{}", markers.trim_end(), labels);
        if !self.clipped.is_empty() {
            out.push_str(&format!("\n(+{} above)", self.clipped.len()));
        }
        out
    }
}
