//! Pitch classes and printable note names.

use serde::{Deserialize, Serialize};

pub const SEMITONES_PER_OCTAVE: u8 = 12;

/// Sharp-preferring spellings for the twelve pitch classes (♯ U+266F).
pub const NOTE_NAMES_SHARP: [&str; 12] = [
    "C", "C♯", "D", "D♯", "E", "F", "F♯", "G", "G♯", "A", "A♯", "B",
];

/// Flat-preferring spellings for the twelve pitch classes (♭ U+266D).
pub const NOTE_NAMES_FLAT: [&str; 12] = [
    "C", "D♭", "D", "E♭", "E", "F", "G♭", "G", "A♭", "A", "B♭", "B",
];

/// Which accidental spelling to use when printing note names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccidentalNotation {
    Sharp,
    Flat,
}

impl Default for AccidentalNotation {
    fn default() -> Self {
        AccidentalNotation::Sharp
    }
}

impl AccidentalNotation {
    pub const ALL: [AccidentalNotation; 2] = [AccidentalNotation::Sharp, AccidentalNotation::Flat];

    pub fn name(&self) -> &'static str {
        match self {
            AccidentalNotation::Sharp => "sharp",
            AccidentalNotation::Flat => "flat",
        }
    }

    /// The pitch-class → name table for this notation.
    pub fn note_names(&self) -> &'static [&'static str; 12] {
        match self {
            AccidentalNotation::Sharp => &NOTE_NAMES_SHARP,
            AccidentalNotation::Flat => &NOTE_NAMES_FLAT,
        }
    }
}

/// Printable name for a pitch class (0-11, values reduced mod 12).
pub fn note_name(pc: u8, notation: AccidentalNotation) -> &'static str {
    notation.note_names()[(pc % SEMITONES_PER_OCTAVE) as usize]
}

/// Parse a note name back to its pitch class.
///
/// Case-insensitive; accepts both ASCII (`#`, `b`) and Unicode (`♯`, `♭`)
/// accidentals, stacked if need be (`"C##"` is D). Returns `None` for
/// anything that is not a letter A-G followed by accidentals only.
pub fn note_to_pc(name: &str) -> Option<u8> {
    let lower = name.trim().to_lowercase();
    let mut chars = lower.chars();
    let base: i16 = match chars.next()? {
        'c' => 0,
        'd' => 2,
        'e' => 4,
        'f' => 5,
        'g' => 7,
        'a' => 9,
        'b' => 11,
        _ => return None,
    };
    let mut pc = base;
    for c in chars {
        match c {
            '#' | '♯' => pc += 1,
            'b' | '♭' => pc -= 1,
            _ => return None,
        }
    }
    Some(((pc % 12 + 12) % 12) as u8)
}

/// Note name with octave for a MIDI number, e.g. `"C4"` for 60.
/// Octave numbering follows the MIDI convention (C4 = middle C).
pub fn midi_to_note_name(midi: u8, notation: AccidentalNotation) -> String {
    let octave = (midi / SEMITONES_PER_OCTAVE) as i8 - 1;
    format!("{}{}", note_name(midi % SEMITONES_PER_OCTAVE, notation), octave)
}
