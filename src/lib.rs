pub mod chord;
pub mod error;
pub mod keyboard;
pub mod sheet;
pub mod symbols;

pub use chord::{parse, BassRole, ParsedChord};
pub use error::*;
pub use keyboard::{KeyboardLayout, KeyboardView, PlacedKey};
pub use sheet::{parse_sheet, ChordSheet, SheetEntry, SheetMetadata, SkippedLine};
pub use symbols::{lookup_chord_type, lookup_note, ChordType, PitchClass};

/// Parse a chord symbol and place it on a keyboard of `keyboard_octaves` octaves,
/// shifted up by `octave` octaves.
///
/// # Errors
/// [`LayoutError::Chord`] when the symbol does not parse,
/// [`LayoutError::OctaveOutOfRange`] when `octave` is outside
/// [`KeyboardLayout::OCTAVE_RANGE`].
pub fn place_chord(
    symbol: &str,
    octave: i32,
    keyboard_octaves: u8,
) -> Result<KeyboardView, LayoutError> {
    let chord = parse(symbol)?;
    KeyboardLayout::new(keyboard_octaves).place(&chord, octave)
}
