//! # Error Types
//!
//! This module defines all error types for chordsheet.
//!
//! ## Error Types
//! - [`ChordError`] - A single chord symbol could not be resolved
//! - [`SheetError`] - A chord sheet could not be read (bad frontmatter, unreadable file)
//! - [`LayoutError`] - A chord could not be placed on a keyboard
//!
//! An unrecognized chord-type suffix is never an error: `Cxyz` resolves to a
//! C major triad.
//!
//! ## Usage
//! ```rust
//! use chordsheet::{parse, ChordError};
//!
//! match parse("H7") {
//!     Ok(chord) => println!("{:?}", chord.voicing),
//!     Err(ChordError::MalformedSymbol { input }) => eprintln!("not a chord: {}", input),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChordError {
    /// The input does not have the shape `ROOT[TYPE][/BASS]`.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordError;
    /// let err = ChordError::MalformedSymbol { input: "C##".to_string() };
    /// assert_eq!(err.to_string(), "Malformed chord symbol: 'C##'");
    /// ```
    #[error("Malformed chord symbol: '{input}'")]
    MalformedSymbol { input: String },

    /// The root spelling is not in the note table (e.g. `Cb`, `E#`).
    ///
    /// # Example
    /// ```
    /// # use chordsheet::ChordError;
    /// let err = ChordError::UnknownRoot("Fb".to_string());
    /// assert_eq!(err.to_string(), "Unknown root note: Fb");
    /// ```
    #[error("Unknown root note: {0}")]
    UnknownRoot(String),

    /// The bass spelling after `/` is not in the note table.
    #[error("Unknown bass note: {0}")]
    UnknownBassNote(String),
}

#[derive(Error, Debug)]
pub enum SheetError {
    /// Invalid YAML frontmatter, or a frontmatter value out of range.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::SheetError;
    /// let err = SheetError::MetadataError("keyboard-octaves must be between 1 and 4".to_string());
    /// assert_eq!(err.to_string(), "Invalid metadata: keyboard-octaves must be between 1 and 4");
    /// ```
    #[error("Invalid metadata: {0}")]
    MetadataError(String),

    #[error("Error reading '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LayoutError {
    /// The octave shift is outside `KeyboardLayout::OCTAVE_RANGE`.
    ///
    /// # Example
    /// ```
    /// # use chordsheet::LayoutError;
    /// let err = LayoutError::OctaveOutOfRange { octave: 12 };
    /// assert_eq!(err.to_string(), "Octave must be between 0 and 8, got 12");
    /// ```
    #[error("Octave must be between 0 and 8, got {octave}")]
    OctaveOutOfRange { octave: i32 },

    #[error(transparent)]
    Chord(#[from] ChordError),
}
