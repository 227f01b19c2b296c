//! # Chord Module
//!
//! Resolve chord symbols (`C`, `Am`, `G7`, `C#maj7/G`) into absolute-pitch voicings.
//!
//! ## Sub-modules
//! - `grammar` - Splits a symbol into root, suffix and slash bass
//! - `voicing` - Stacks intervals on the root and places the slash bass
//! - `types` - [`ParsedChord`] and [`BassRole`]
//!
//! ## Pipeline
//! 1. Split `ROOT TYPE [/BASS]`; anything else is [`ChordError::MalformedSymbol`]
//! 2. Look up root and bass spellings in the note table
//! 3. Canonicalize the suffix and look it up; unknown suffixes become major
//! 4. Stack the intervals on the root
//! 5. Move (inversion) or add the slash bass at the bottom
//!
//! ## Example
//! ```rust
//! use chordsheet::parse;
//!
//! let chord = parse("Am/F").unwrap();
//! assert_eq!(chord.root, "A");
//! assert_eq!(chord.chord_type, "m");
//! assert_eq!(chord.voicing, vec![5, 9, 12, 16]);
//! assert_eq!(chord.bass_value, Some(5));
//! ```
//!
//! ## Leniency
//! A suffix that is not in the chord-type table is not an error. `Cxyz`, `C`
//! and `Cmaj` all resolve to the C major triad with type `""`.

mod grammar;
mod types;
mod voicing;


pub use types::{BassRole, ParsedChord};

use crate::error::ChordError;
use crate::symbols::{self, lookup_note};
use tracing::{debug, trace};

/// Parse a chord symbol into a [`ParsedChord`].
///
/// Matching is case-insensitive for root, suffix and bass independently.
/// Surrounding whitespace is not trimmed.
///
/// # Examples
/// ```
/// use chordsheet::{parse, ChordError};
///
/// // C major: C, E, G
/// assert_eq!(parse("C").unwrap().voicing, vec![0, 4, 7]);
///
/// // G7: G, B, D, F
/// assert_eq!(parse("G7").unwrap().voicing, vec![7, 11, 14, 17]);
///
/// // First inversion of C: E under C and G
/// let c_over_e = parse("C/E").unwrap();
/// assert_eq!(c_over_e.voicing, vec![-8, 0, 7]);
/// assert_eq!(c_over_e.bass_value, Some(-8));
///
/// assert!(matches!(parse("Xyz"), Err(ChordError::MalformedSymbol { .. })));
/// ```
///
/// # Errors
/// - [`ChordError::MalformedSymbol`] when the input is not `ROOT[TYPE][/BASS]`
/// - [`ChordError::UnknownRoot`] for spellings such as `Cb` or `E#`
/// - [`ChordError::UnknownBassNote`] for the same in the bass
pub fn parse(input: &str) -> Result<ParsedChord, ChordError> {
    let symbol = grammar::split_symbol(input)?;

    let root_pc =
        lookup_note(&symbol.root).ok_or_else(|| ChordError::UnknownRoot(symbol.root.clone()))?;
    let bass_pc = match &symbol.bass {
        Some(bass) => {
            Some(lookup_note(bass).ok_or_else(|| ChordError::UnknownBassNote(bass.clone()))?)
        }
        None => None,
    };

    let key = symbols::canonical_type_key(symbol.suffix);
    let chord_type = match symbols::lookup_chord_type(&key) {
        Some(chord_type) => chord_type,
        None => {
            trace!(suffix = symbol.suffix, "unrecognized chord type, using major");
            symbols::major()
        }
    };

    debug!(
        root = %symbol.root,
        chord_type = chord_type.key,
        bass = ?symbol.bass,
        "parsed chord components"
    );

    let mut voicing = voicing::stack(root_pc, chord_type.intervals);
    let (bass_value, bass_role) = match bass_pc {
        Some(bass_pc) => {
            let (value, role) = voicing::place_bass(&mut voicing, bass_pc);
            (Some(value), Some(role))
        }
        None => (None, None),
    };

    debug!(input, ?voicing, ?bass_value, "resolved voicing");

    Ok(ParsedChord {
        root: symbol.root,
        chord_type: chord_type.key.to_string(),
        bass_note: symbol.bass,
        voicing,
        bass_value,
        bass_role,
    })
}
