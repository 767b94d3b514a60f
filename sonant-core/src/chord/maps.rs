//! Chord lookup tables.
//!
//! Three maps keyed by comma-joined interval vectors: a curated static table
//! for idioms the generator cannot reach (or spells less conventionally), and
//! the two generated tables (without and with omission spellings). All three
//! are built eagerly by [`ChordTables::new`] and never mutated afterwards, so
//! a `ChordTables` value can be shared freely across readers.

use std::collections::HashMap;

use sonant_types::NameSet;

use super::generator::{generate_chord_map, generate_chord_map_with_omit};

/// Interval-vector key → accepted chord-name suffixes.
pub type ChordMap = HashMap<String, NameSet>;

/// Serialize an interval vector as a map key, e.g. `[0, 4, 7]` → `"0,4,7"`.
pub fn interval_key(intervals: &[u8]) -> String {
    intervals
        .iter()
        .map(u8::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

/// The three lookup tables, in search priority order.
pub struct ChordTables {
    standard: ChordMap,
    generated: ChordMap,
    generated_with_omit: ChordMap,
}

impl ChordTables {
    /// Build all tables. Done once at startup; detection calls only read.
    pub fn new() -> Self {
        Self {
            standard: standard_chord_map(),
            generated: generate_chord_map(),
            generated_with_omit: generate_chord_map_with_omit(),
        }
    }

    /// Maps in search priority order: curated names first, then generated,
    /// then generated-with-omission as a last resort.
    pub fn in_priority_order(&self) -> [&ChordMap; 3] {
        [&self.standard, &self.generated, &self.generated_with_omit]
    }

    pub fn standard(&self) -> &ChordMap {
        &self.standard
    }

    pub fn generated(&self) -> &ChordMap {
        &self.generated
    }

    pub fn generated_with_omit(&self) -> &ChordMap {
        &self.generated_with_omit
    }
}

impl Default for ChordTables {
    fn default() -> Self {
        Self::new()
    }
}

/// Hand-curated idioms. Alternate historically-used spellings share an entry;
/// the first listed name is the preferred one.
fn standard_chord_map() -> ChordMap {
    const ENTRIES: &[(&[u8], &[&str])] = &[
        (&[0, 3, 6], &["dim", "m(♭5)"]),
        (&[0, 4, 8], &["aug", "(♯5)"]),
        (&[0, 3, 6, 9], &["dim7"]),
        (&[0, 4, 8, 10], &["aug7", "7(♯5)"]),
        (&[0, 4, 8, 11], &["augM7", "M7(♯5)"]),
        (&[0, 2, 4, 7], &["add9", "(9)"]),
        (&[0, 2, 3, 7], &["madd9", "m(9)"]),
        (&[0, 2, 4, 7, 9], &["69", "6(9)"]),
        (&[0, 2, 3, 7, 9], &["m69", "m6(9)"]),
    ];

    let mut map = ChordMap::new();
    for (intervals, names) in ENTRIES {
        let value = match names {
            [only] => NameSet::One(only.to_string()),
            many => NameSet::Many(many.iter().map(|n| n.to_string()).collect()),
        };
        map.insert(interval_key(intervals), value);
    }
    map
}
