use serde::Serialize;
use wasm_bindgen::prelude::*;

#[derive(Serialize)]
struct ChordFailure {
    kind: &'static str,
    message: String,
}

fn chord_failure(e: chordsheet::ChordError) -> ChordFailure {
    let kind = match &e {
        chordsheet::ChordError::MalformedSymbol { .. } => "malformedSymbol",
        chordsheet::ChordError::UnknownRoot(_) => "unknownRoot",
        chordsheet::ChordError::UnknownBassNote(_) => "unknownBassNote",
    };
    ChordFailure {
        kind,
        message: e.to_string(),
    }
}

fn layout_failure(e: chordsheet::LayoutError) -> ChordFailure {
    match e {
        chordsheet::LayoutError::Chord(e) => chord_failure(e),
        chordsheet::LayoutError::OctaveOutOfRange { .. } => ChordFailure {
            kind: "octaveOutOfRange",
            message: e.to_string(),
        },
    }
}

fn sheet_failure(e: chordsheet::SheetError) -> ChordFailure {
    ChordFailure {
        kind: "metadata",
        message: e.to_string(),
    }
}

fn to_js_error(failure: ChordFailure) -> JsValue {
    let json = serde_json::to_string(&failure).unwrap_or_else(|_| failure.message.clone());
    JsValue::from_str(&json)
}

fn to_json<T: Serialize>(value: &T) -> Result<String, JsValue> {
    serde_json::to_string(value).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Parse a chord symbol (surrounding whitespace ignored); returns the parsed chord as JSON
#[wasm_bindgen]
pub fn parse_chord(symbol: &str) -> Result<String, JsValue> {
    let chord = chordsheet::parse(symbol.trim()).map_err(|e| to_js_error(chord_failure(e)))?;
    to_json(&chord)
}

/// Parse a whole chord sheet; unparseable lines are reported under `skipped`
#[wasm_bindgen]
pub fn parse_sheet(source: &str) -> Result<String, JsValue> {
    let sheet = chordsheet::parse_sheet(source).map_err(|e| to_js_error(sheet_failure(e)))?;
    to_json(&sheet)
}

/// Parse a chord symbol and place it on a keyboard diagram
#[wasm_bindgen]
pub fn place_chord(symbol: &str, octave: i32, keyboard_octaves: u8) -> Result<String, JsValue> {
    let view = chordsheet::place_chord(symbol.trim(), octave, keyboard_octaves)
        .map_err(|e| to_js_error(layout_failure(e)))?;
    to_json(&view)
}

/// True when the text parses as a chord symbol
#[wasm_bindgen]
pub fn is_chord(symbol: &str) -> bool {
    chordsheet::parse(symbol.trim()).is_ok()
}
