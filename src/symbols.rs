//! # Symbol Table
//!
//! Static lookup tables for note spellings and chord types.
//!
//! - 17 note spellings (naturals plus the sharp and flat of every black key),
//!   each mapped to a [`PitchClass`] with C = 0.
//! - 19 chord-type keys, each mapped to an ordered interval list in semitones
//!   above the root.
//!
//! Interval lists start at 0, are strictly increasing and are never reduced
//! modulo 12: a ninth is 14, an eleventh 17, a thirteenth 21. The voicing step
//! relies on that to keep extended tones above the octave.
//!
//! Both tables are `static` data; nothing here allocates or mutates.

use serde::Serialize;
use std::fmt;

/// A note's identity modulo 12, C = 0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    /// Pitch class of an arbitrary absolute pitch, wrapping negatives upward.
    pub fn of(pitch: i32) -> Self {
        PitchClass(pitch.rem_euclid(12) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Black keys on a piano keyboard: C#, D#, F#, G#, A#.
    pub fn is_black_key(self) -> bool {
        matches!(self.0, 1 | 3 | 6 | 8 | 10)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Canonical spellings: uppercase letter, accidental `#` or `b`.
static NOTE_TABLE: [(&str, u8); 17] = [
    ("C", 0),
    ("C#", 1),
    ("Db", 1),
    ("D", 2),
    ("D#", 3),
    ("Eb", 3),
    ("E", 4),
    ("F", 5),
    ("F#", 6),
    ("Gb", 6),
    ("G", 7),
    ("G#", 8),
    ("Ab", 8),
    ("A", 9),
    ("A#", 10),
    ("Bb", 10),
    ("B", 11),
];

/// Look up the pitch class of a canonically spelled note (`"C#"`, `"Bb"`).
///
/// Spellings outside the table (`"Cb"`, `"E#"`, `"c"`) return `None`.
///
/// # Example
/// ```
/// use chordsheet::symbols::lookup_note;
///
/// assert_eq!(lookup_note("Db").map(|pc| pc.value()), Some(1));
/// assert_eq!(lookup_note("C#"), lookup_note("Db"));
/// assert!(lookup_note("Fb").is_none());
/// ```
pub fn lookup_note(name: &str) -> Option<PitchClass> {
    NOTE_TABLE
        .iter()
        .find(|(spelling, _)| *spelling == name)
        .map(|&(_, pc)| PitchClass(pc))
}

/// Every note spelling in the table, in chromatic order.
pub fn note_spellings() -> impl Iterator<Item = &'static str> {
    NOTE_TABLE.iter().map(|(spelling, _)| *spelling)
}

/// A chord type: its canonical suffix key, a readable name and its intervals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ChordType {
    pub key: &'static str,
    pub name: &'static str,
    pub intervals: &'static [u8],
}

static CHORD_TYPES: [ChordType; 19] = [
    // Triads
    ChordType { key: "", name: "major", intervals: &[0, 4, 7] },
    ChordType { key: "m", name: "minor", intervals: &[0, 3, 7] },
    ChordType { key: "dim", name: "diminished", intervals: &[0, 3, 6] },
    ChordType { key: "aug", name: "augmented", intervals: &[0, 4, 8] },
    ChordType { key: "sus2", name: "suspended 2nd", intervals: &[0, 2, 7] },
    ChordType { key: "sus4", name: "suspended 4th", intervals: &[0, 5, 7] },
    ChordType { key: "5", name: "power", intervals: &[0, 7] },
    // Sixths and sevenths
    ChordType { key: "6", name: "major 6th", intervals: &[0, 4, 7, 9] },
    ChordType { key: "m6", name: "minor 6th", intervals: &[0, 3, 7, 9] },
    ChordType { key: "7", name: "dominant 7th", intervals: &[0, 4, 7, 10] },
    ChordType { key: "maj7", name: "major 7th", intervals: &[0, 4, 7, 11] },
    ChordType { key: "m7", name: "minor 7th", intervals: &[0, 3, 7, 10] },
    ChordType { key: "m7b5", name: "half-diminished", intervals: &[0, 3, 6, 10] },
    ChordType { key: "dim7", name: "diminished 7th", intervals: &[0, 3, 6, 9] },
    // Extended
    ChordType { key: "9", name: "dominant 9th", intervals: &[0, 4, 7, 10, 14] },
    ChordType { key: "m9", name: "minor 9th", intervals: &[0, 3, 7, 10, 14] },
    ChordType { key: "11", name: "dominant 11th", intervals: &[0, 4, 7, 10, 14, 17] },
    ChordType { key: "13", name: "dominant 13th", intervals: &[0, 4, 7, 10, 14, 17, 21] },
    ChordType { key: "add9", name: "add 9", intervals: &[0, 4, 7, 14] },
];

/// Case-sensitive spellings checked before the suffix is lower-cased.
/// `M7` would otherwise collide with `m7`.
static TYPE_ALIASES: [(&str, &str); 1] = [("M7", "maj7")];

/// The major triad, used when a suffix is not recognized.
pub fn major() -> &'static ChordType {
    &CHORD_TYPES[0]
}

/// Look up a chord type by its canonical (lower-case) key.
///
/// # Example
/// ```
/// use chordsheet::symbols::lookup_chord_type;
///
/// assert_eq!(lookup_chord_type("maj7").map(|t| t.intervals), Some(&[0u8, 4, 7, 11][..]));
/// assert_eq!(lookup_chord_type("13").map(|t| t.intervals.len()), Some(7));
/// assert!(lookup_chord_type("xyz").is_none());
/// ```
pub fn lookup_chord_type(key: &str) -> Option<&'static ChordType> {
    CHORD_TYPES.iter().find(|t| t.key == key)
}

/// Canonical key for a raw suffix as typed: aliases first, then lower case.
pub fn canonical_type_key(raw: &str) -> String {
    TYPE_ALIASES
        .iter()
        .find(|(alias, _)| *alias == raw)
        .map(|(_, key)| (*key).to_string())
        .unwrap_or_else(|| raw.to_lowercase())
}

/// Every chord type in the table.
pub fn chord_types() -> &'static [ChordType] {
    &CHORD_TYPES
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_note_is_a_pitch_class() {
        let spellings: Vec<&str> = note_spellings().collect();
        assert_eq!(spellings.len(), 17);
        for name in spellings {
            let pc = lookup_note(name).unwrap();
            assert!(pc.value() < 12, "{} out of range", name);
        }
    }

    #[test]
    fn test_enharmonic_pairs_share_pitch_class() {
        let pairs = [("C#", "Db"), ("D#", "Eb"), ("F#", "Gb"), ("G#", "Ab"), ("A#", "Bb")];
        for (sharp, flat) in pairs {
            assert_eq!(lookup_note(sharp), lookup_note(flat), "{} vs {}", sharp, flat);
        }
    }

    #[test]
    fn test_naturals() {
        let expected = [("C", 0), ("D", 2), ("E", 4), ("F", 5), ("G", 7), ("A", 9), ("B", 11)];
        for (name, pc) in expected {
            assert_eq!(lookup_note(name).unwrap().value(), pc);
        }
    }

    #[test]
    fn test_unlisted_spellings_not_found() {
        for name in ["Cb", "Fb", "E#", "B#", "c", "C##", "", "H"] {
            assert!(lookup_note(name).is_none(), "{} should not resolve", name);
        }
    }

    #[test]
    fn test_interval_lists_well_formed() {
        for chord_type in chord_types() {
            let iv = chord_type.intervals;
            assert_eq!(iv[0], 0, "{:?} must start at the root", chord_type.key);
            assert!(
                iv.windows(2).all(|w| w[0] < w[1]),
                "{:?} must be strictly increasing",
                chord_type.key
            );
            assert!(iv.len() <= 7);
        }
    }

    #[test]
    fn test_keys_are_unique_and_lowercase() {
        let types = chord_types();
        for (i, a) in types.iter().enumerate() {
            assert_eq!(a.key, a.key.to_lowercase());
            for b in &types[i + 1..] {
                assert_ne!(a.key, b.key);
            }
        }
    }

    #[test]
    fn test_extended_intervals_not_wrapped() {
        assert_eq!(lookup_chord_type("9").unwrap().intervals, &[0, 4, 7, 10, 14]);
        assert_eq!(lookup_chord_type("11").unwrap().intervals[5], 17);
        assert_eq!(lookup_chord_type("13").unwrap().intervals[6], 21);
    }

    #[test]
    fn test_canonical_type_key() {
        assert_eq!(canonical_type_key("M7"), "maj7");
        assert_eq!(canonical_type_key("MAJ7"), "maj7");
        assert_eq!(canonical_type_key("Maj7"), "maj7");
        assert_eq!(canonical_type_key("m7"), "m7");
        assert_eq!(canonical_type_key("SUS4"), "sus4");
        assert_eq!(canonical_type_key(""), "");
    }

    #[test]
    fn test_pitch_class_of_negative() {
        assert_eq!(PitchClass::of(-8).value(), 4);
        assert_eq!(PitchClass::of(-12).value(), 0);
        assert_eq!(PitchClass::of(30).value(), 6);
    }

    #[test]
    fn test_black_keys() {
        let black: Vec<u8> = (0..12).filter(|&n| PitchClass(n).is_black_key()).collect();
        assert_eq!(black, vec![1, 3, 6, 8, 10]);
    }
}
