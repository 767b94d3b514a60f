//! Candidate search: direct, bass-removed, and rotation passes.
//!
//! Every pass runs against every map, in map priority order; the union of all
//! hits (deduplicated by exact name) goes to scoring.

use std::collections::HashSet;

use sonant_types::note_to_pc;

use super::maps::{interval_key, ChordMap, ChordTables};

/// Find every plausible chord name for an ordered note sequence.
///
/// `note_names` is the normalized pitch-class sequence (bass first); `bass`
/// is the printable name of the lowest sounding pitch, used to label slash
/// chords found by the bass-removed and rotation passes.
pub fn find_candidates(tables: &ChordTables, note_names: &[String], bass: &str) -> Vec<String> {
    let mut candidates: Vec<String> = Vec::new();

    for map in tables.in_priority_order() {
        search_direct(note_names, map, &mut candidates);
        search_bass_removed(note_names, bass, map, &mut candidates);
        search_inversions(note_names, bass, map, &mut candidates);
    }

    dedup_preserving_order(candidates)
}

/// Pass 1: look the full sequence up as-is.
fn search_direct(note_names: &[String], map: &ChordMap, out: &mut Vec<String>) {
    if let Some(chords) = find(note_names, map) {
        out.extend(chords);
    }
}

/// Pass 2: drop the bass and search the remainder. A hit means the bass is
/// not a chord tone of the remainder's shape — a slash chord. The remainder
/// also gets a rotation search, to catch non-root inversions over the bass.
fn search_bass_removed(note_names: &[String], bass: &str, map: &ChordMap, out: &mut Vec<String>) {
    let without_bass = &note_names[1..];

    if let Some(chords) = find(without_bass, map) {
        out.extend(chords.into_iter().map(|chord| slash_chord(&chord, bass)));
    }

    find_with_rotations(without_bass, bass, map, out);
}

/// Pass 3: rotate the full sequence so that each chord member takes a turn as
/// root; hits are spelled over the *original* bass.
fn search_inversions(note_names: &[String], bass: &str, map: &ChordMap, out: &mut Vec<String>) {
    find_with_rotations(note_names, bass, map, out);
}

fn find_with_rotations(note_names: &[String], bass: &str, map: &ChordMap, out: &mut Vec<String>) {
    for i in 1..note_names.len() {
        let rotated: Vec<String> = note_names[i..]
            .iter()
            .chain(&note_names[..i])
            .cloned()
            .collect();
        if let Some(chords) = find(&rotated, map) {
            out.extend(chords.into_iter().map(|chord| slash_chord(&chord, bass)));
        }
    }
}

/// Look up a note sequence in one map, prefixing hits with the root name.
fn find(note_names: &[String], map: &ChordMap) -> Option<Vec<String>> {
    let root = note_names.first()?;
    let intervals = to_intervals(note_names);
    let suffixes = map.get(&interval_key(&intervals))?;
    Some(
        suffixes
            .iter()
            .map(|suffix| format!("{}{}", root, suffix))
            .collect(),
    )
}

/// `"Dm9(omit5)"` over bass `"C"` → `"Dm9(omit5)/C"`.
fn slash_chord(chord: &str, bass: &str) -> String {
    format!("{}/{}", chord, bass.to_uppercase())
}

/// Semitone distances of each note from the sequence's first element.
///
/// Unmappable note names degrade to pitch class 0 with a diagnostic rather
/// than aborting the search; the resulting vector simply misses the tables.
pub(crate) fn to_intervals(note_names: &[String]) -> Vec<u8> {
    let root_pc = match note_names.first().map(|n| note_to_pc(n)) {
        Some(Some(pc)) => pc,
        Some(None) => {
            log::warn!(
                target: "chord",
                "unknown root note {:?}, assuming pitch class 0",
                note_names.first()
            );
            0
        }
        None => return Vec::new(),
    };

    note_names
        .iter()
        .map(|name| {
            let pc = match note_to_pc(name) {
                Some(pc) => pc,
                None => {
                    log::warn!(
                        target: "chord",
                        "unknown note {:?} in {:?}, assuming pitch class 0",
                        name,
                        note_names
                    );
                    0
                }
            };
            (pc + 12 - root_pc) % 12
        })
        .collect()
}

fn dedup_preserving_order(candidates: Vec<String>) -> Vec<String> {
    let mut seen = HashSet::new();
    candidates
        .into_iter()
        .filter(|c| seen.insert(c.clone()))
        .collect()
}
