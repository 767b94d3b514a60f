//! Chord detection from a set of sounding pitches.
//!
//! The pipeline: normalize the pitch set to a bass-relative note-name
//! sequence, search all three lookup tables for candidates (direct,
//! bass-removed, and rotation passes), group the candidates by score, and
//! return the best group — optionally canonicalizing tension parentheticals.

pub mod generator;
pub mod maps;
pub mod scoring;
pub mod search;

pub use maps::{ChordMap, ChordTables};
pub use search::find_candidates;

use sonant_types::{note_name, AccidentalNotation, DetectOptions, Detection};

use crate::notation::merge_parentheses;

/// Detect the chord(s) named by a set of MIDI pitches.
///
/// Input is treated as a set: duplicates and octave ordering never affect the
/// result. Returns `Detection::None` / an empty `Many` when the input names
/// no chord — that is a normal outcome, not an error.
pub fn detect_chord(tables: &ChordTables, pitches: &[u8], options: &DetectOptions) -> Detection {
    let note_names = normalize_pitch_classes(pitches, options.accidental_notation);

    // A single tone implies no chord.
    if note_names.len() <= 1 {
        return empty(options.return_all);
    }

    // Two distinct pitch classes: only the power-chord shape is named.
    if note_names.len() == 2 {
        if search::to_intervals(&note_names) == [0, 7] {
            let chord = format!("{}5", note_names[0]);
            return single_or_all(vec![chord], options.return_all);
        }
        return empty(options.return_all);
    }

    let bass = note_names[0].clone();
    let candidates = search::find_candidates(tables, &note_names, &bass);
    if candidates.is_empty() {
        return empty(options.return_all);
    }

    let groups = scoring::group_candidates_by_score(candidates);
    let mut result = Vec::new();
    if let Some(top) = groups.first() {
        for name in top {
            if options.merge_parentheses {
                result.push(merge_parentheses(name));
            } else {
                result.push(name.clone());
            }
        }
    }
    single_or_all(result, options.return_all)
}

/// Reduce a raw pitch set to printable pitch-class names: bass first, the
/// rest ordered by ascending chromatic distance from the bass.
pub fn normalize_pitch_classes(pitches: &[u8], notation: AccidentalNotation) -> Vec<String> {
    let mut sorted: Vec<u8> = pitches.to_vec();
    sorted.sort_unstable();
    sorted.dedup();

    let bass_pc = match sorted.first() {
        Some(&lowest) => lowest % 12,
        None => return Vec::new(),
    };

    let mut pitch_classes: Vec<u8> = Vec::new();
    for &pitch in &sorted {
        let pc = pitch % 12;
        if !pitch_classes.contains(&pc) {
            pitch_classes.push(pc);
        }
    }
    pitch_classes.sort_by_key(|&pc| (pc + 12 - bass_pc) % 12);

    pitch_classes
        .into_iter()
        .map(|pc| note_name(pc, notation).to_string())
        .collect()
}

fn empty(return_all: bool) -> Detection {
    if return_all {
        Detection::Many(Vec::new())
    } else {
        Detection::None
    }
}

fn single_or_all(names: Vec<String>, return_all: bool) -> Detection {
    if return_all {
        Detection::Many(names)
    } else {
        match names.into_iter().next() {
            Some(first) => Detection::One(first),
            None => Detection::None,
        }
    }
}
