//! Voicing construction
//!
//! Turns a root pitch class and an interval list into absolute pitches, then
//! applies a slash bass.
//!
//! Absolute pitches are semitones above the C of the reference octave, so
//! `C = 0`, `A = 9`, and the ninth of C is `14`. A slash bass may fall below
//! zero: `C/E` puts E at `-8`.

use super::types::BassRole;
use crate::symbols::PitchClass;

/// Stack the intervals on the root. Intervals are strictly increasing, so the
/// result is already ascending.
pub(crate) fn stack(root: PitchClass, intervals: &[u8]) -> Vec<i32> {
    let root = i32::from(root.value());
    intervals.iter().map(|&iv| root + i32::from(iv)).collect()
}

/// Move or add the bass at index 0, strictly below every other entry.
///
/// If a voiced note already has the bass's pitch class the chord is an
/// inversion: that note is taken out and the bass goes underneath the rest.
/// Otherwise the bass is added under the whole chord. Returns the final bass
/// value and which case applied.
pub(crate) fn place_bass(voicing: &mut Vec<i32>, bass: PitchClass) -> (i32, BassRole) {
    let role = match voicing.iter().position(|&p| PitchClass::of(p) == bass) {
        Some(index) => {
            voicing.remove(index);
            BassRole::Inversion
        }
        None => BassRole::Added,
    };

    let mut value = i32::from(bass.value());
    if let Some(&lowest) = voicing.first() {
        // One octave is always enough: the lowest voice is never below 0.
        while value >= lowest {
            value -= 12;
        }
    }

    voicing.insert(0, value);
    (value, role)
}
