//! Integration tests for chordsheet
//!
//! Tests the public API end to end: symbol to voicing, sheet to keyboard views.

use chordsheet::{parse, parse_sheet, place_chord, ChordError, LayoutError, PitchClass};

#[test]
fn test_slash_chord_from_overview() {
    let chord = parse("C#maj7/G").unwrap();
    assert_eq!(chord.root, "C#");
    assert_eq!(chord.chord_type, "maj7");
    assert_eq!(chord.bass_note.as_deref(), Some("G"));
    // G is not in C#maj7 (C# F G# C): added below the root.
    assert_eq!(chord.voicing, vec![-5, 1, 5, 8, 12]);
    assert_eq!(chord.bass_value, Some(-5));
}

#[test]
fn test_bass_value_is_first_voicing_entry() {
    for input in ["C/E", "Am/F", "G7/F", "Dm7/C", "Bb/D", "F#m/A", "Eb13/Db", "C5/G"] {
        let chord = parse(input).unwrap();
        assert_eq!(chord.bass_value, chord.voicing.first().copied(), "{}", input);
        let bass = chord.bass_value.unwrap();
        assert!(chord.voicing.iter().skip(1).all(|&p| p > bass), "{}", input);
    }
}

#[test]
fn test_voicing_never_empty() {
    for input in ["C", "C5", "C5/G", "Cfoo", "B13/C"] {
        assert!(!parse(input).unwrap().voicing.is_empty(), "{}", input);
    }
}

#[test]
fn test_failures_are_typed() {
    assert!(matches!(parse("Xyz"), Err(ChordError::MalformedSymbol { .. })));
    assert!(matches!(parse("B#7"), Err(ChordError::UnknownRoot(_))));
    assert!(matches!(parse("C/Cb"), Err(ChordError::UnknownBassNote(_))));
}

#[test]
fn test_pitch_classes_of_extended_chord() {
    let chord = parse("C13").unwrap();
    let pcs: Vec<u8> = chord.pitch_classes().into_iter().map(PitchClass::value).collect();
    assert_eq!(pcs, vec![0, 4, 7, 10, 2, 5, 9]);
}

#[test]
fn test_place_chord() {
    let view = place_chord("G/B", 4, 2).unwrap();
    // G/B: B (47) under G (55) and D (62)
    let pitches: Vec<i32> = view.keys.iter().map(|k| k.pitch).collect();
    assert_eq!(pitches, vec![47, 55, 62]);
    assert_eq!(view.start_pitch, 36);
    assert!(view.keys[0].bass);

    assert!(matches!(
        place_chord("H", 4, 2),
        Err(LayoutError::Chord(ChordError::MalformedSymbol { .. }))
    ));
}

#[test]
fn test_place_chord_rejects_out_of_range_octave() {
    assert_eq!(
        place_chord("C", 200_000_000, 2),
        Err(LayoutError::OctaveOutOfRange { octave: 200_000_000 })
    );
    assert_eq!(
        place_chord("C/E", -3, 2),
        Err(LayoutError::OctaveOutOfRange { octave: -3 })
    );
}

#[test]
fn test_sheet_to_json() {
    let source = r#"---
title: Progression
---
C - first
Am/F - second
Zz - skipped
"#;
    let sheet = parse_sheet(source).unwrap();
    let json = serde_json::to_value(&sheet).unwrap();

    assert_eq!(json["metadata"]["title"], "Progression");
    assert_eq!(json["metadata"]["keyboardOctaves"], 2);
    assert_eq!(json["entries"][1]["chord"]["bassValue"], 5);
    assert_eq!(json["entries"][1]["chord"]["type"], "m");
    assert_eq!(json["skipped"][0]["line"], 6);
}

#[test]
fn test_sheet_views_render() {
    let sheet = parse_sheet("Am/F\n").unwrap();
    let text = sheet.views().unwrap()[0].render_text();
    assert!(text.starts_with("     B   o"));
    assert!(text.ends_with("C#D#EF#G#A#BC#D#EF#G#A#B"));
}
