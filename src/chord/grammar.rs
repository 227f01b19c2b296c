//! Chord symbol grammar
//!
//! ```text
//! SYMBOL := ROOT TYPE ( "/" BASS )?
//! ROOT   := LETTER ACCIDENTAL?
//! BASS   := LETTER ACCIDENTAL?
//! TYPE   := any run of characters except '/'
//! LETTER := A-G | a-g
//! ACCIDENTAL := '#' | 'b'
//! ```
//!
//! The whole input must match. Letters are upper-cased; the accidental is kept
//! exactly as typed.

use crate::error::ChordError;

/// The three pieces of a chord symbol, before any table lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ChordSymbol<'a> {
    /// Canonical spelling, e.g. `"C#"`.
    pub root: String,
    /// Raw suffix between root and slash, e.g. `"maj7"`.
    pub suffix: &'a str,
    /// Canonical bass spelling after `/`, if any.
    pub bass: Option<String>,
}

fn is_accidental(c: char) -> bool {
    c == '#' || c == 'b'
}

/// Read `LETTER ACCIDENTAL?` from the front of `text`.
///
/// Returns the canonical spelling and the unread remainder, or `None` when the
/// text does not start with a note letter or carries a doubled accidental.
fn read_note(text: &str) -> Option<(String, &str)> {
    let letter = text.chars().next()?.to_ascii_uppercase();
    if !matches!(letter, 'A'..='G') {
        return None;
    }

    let mut spelling = String::with_capacity(2);
    spelling.push(letter);
    let mut rest = &text[1..];

    if let Some(accidental) = rest.chars().next().filter(|&c| is_accidental(c)) {
        spelling.push(accidental);
        rest = &rest[1..];
        // `##`, `bb`, `#b`
        if rest.chars().next().is_some_and(is_accidental) {
            return None;
        }
    }

    Some((spelling, rest))
}

/// Split a chord symbol into root, suffix and optional bass.
pub(crate) fn split_symbol(input: &str) -> Result<ChordSymbol<'_>, ChordError> {
    let malformed = || ChordError::MalformedSymbol {
        input: input.to_string(),
    };

    let (head, bass_text) = match input.split_once('/') {
        Some((head, bass)) => (head, Some(bass)),
        None => (input, None),
    };

    let (root, suffix) = read_note(head).ok_or_else(malformed)?;

    let bass = match bass_text {
        Some(text) => match read_note(text) {
            Some((spelling, "")) => Some(spelling),
            _ => return Err(malformed()),
        },
        None => None,
    };

    Ok(ChordSymbol { root, suffix, bass })
}
