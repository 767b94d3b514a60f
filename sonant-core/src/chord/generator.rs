//! Procedural chord-name generation.
//!
//! Chord shapes are built combinatorially from compositional axes — third,
//! seventh, fifth, and eight optional tensions. Each axis choice contributes
//! a semitone interval (or omits one) and a name fragment; combining choices
//! whose intervals collide is discarded, since a pitch class cannot appear
//! twice in one chord.

use sonant_types::NameSet;

use super::maps::{interval_key, ChordMap};

/// One choice on an axis.
#[derive(Clone, Copy)]
struct Choice {
    /// Semitone above the root contributed by this choice; `None` omits the tone.
    interval: Option<u8>,
    /// Name fragment appended when this choice is taken.
    fragment: &'static str,
    /// Optional rewrite applied to the combined name, emitting an extra spelling.
    rewrite: Option<Rewrite>,
}

/// Tension-specific rewrite: adding a higher tension re-spells the implicit
/// lower one (a dominant 7 with an added 9 is also a 9th chord). The rewritten
/// name is an additional candidate, never a replacement — both spellings are
/// musically valid.
#[derive(Clone, Copy)]
struct Rewrite {
    from: &'static str,
    to: &'static str,
    /// Only rewrite occurrences not already inside a finished parenthetical.
    bare_only: bool,
}

const THIRDS: &[Choice] = &[
    Choice { interval: None, fragment: "(omit3)", rewrite: None },
    Choice { interval: Some(2), fragment: "sus2", rewrite: None },
    Choice { interval: Some(3), fragment: "m", rewrite: None },
    Choice { interval: Some(4), fragment: "", rewrite: None },
    Choice { interval: Some(5), fragment: "sus4", rewrite: None },
];

const FIFTHS: &[Choice] = &[
    Choice { interval: None, fragment: "(omit5)", rewrite: None },
    Choice { interval: Some(6), fragment: "(♭5)", rewrite: None },
    Choice { interval: Some(7), fragment: "", rewrite: None },
    Choice { interval: Some(8), fragment: "(♯5)", rewrite: None },
];

const SEVENTHS: &[Choice] = &[
    Choice { interval: None, fragment: "", rewrite: None },
    Choice { interval: Some(9), fragment: "6", rewrite: None },
    Choice { interval: Some(10), fragment: "7", rewrite: None },
    Choice { interval: Some(11), fragment: "M7", rewrite: None },
];

const TENSIONS: &[Choice] = &[
    Choice { interval: Some(1), fragment: "(♭9)", rewrite: None },
    Choice {
        interval: Some(2),
        fragment: "(9)",
        rewrite: Some(Rewrite { from: "7", to: "9", bare_only: false }),
    },
    Choice { interval: Some(3), fragment: "(♯9)", rewrite: None },
    Choice {
        interval: Some(5),
        fragment: "(11)",
        rewrite: Some(Rewrite { from: "9", to: "11", bare_only: true }),
    },
    Choice { interval: Some(6), fragment: "(♯11)", rewrite: None },
    Choice { interval: Some(8), fragment: "(♭13)", rewrite: None },
    Choice {
        interval: Some(9),
        fragment: "(13)",
        rewrite: Some(Rewrite { from: "11", to: "13", bare_only: true }),
    },
    Choice { interval: Some(10), fragment: "(♯13)", rewrite: None },
];

/// A partially built chord: accumulated intervals (ascending, root included)
/// and the name assembled so far.
#[derive(Clone)]
struct Partial {
    intervals: Vec<u8>,
    name: String,
}

/// Generated table without omission spellings.
pub fn generate_chord_map() -> ChordMap {
    generate(false)
}

/// Generated table including omission spellings.
pub fn generate_chord_map_with_omit() -> ChordMap {
    generate(true)
}

fn generate(include_omit: bool) -> ChordMap {
    let mut partials = vec![Partial { intervals: vec![0], name: String::new() }];

    partials = product(partials, THIRDS);
    partials = product(partials, SEVENTHS);
    // "sus47" reads as nonsense; the sus fragment belongs after the seventh.
    for p in &mut partials {
        p.name = relocate_fragments(&p.name, sus_fragment_len);
    }
    partials = product(partials, FIFTHS);
    for tension in TENSIONS {
        const SKIP: Choice = Choice { interval: None, fragment: "", rewrite: None };
        partials = product(partials, &[SKIP, *tension]);
    }
    // Omission markers always display last.
    for p in &mut partials {
        p.name = relocate_fragments(&p.name, omit_fragment_len);
    }

    let mut map = ChordMap::new();
    for partial in partials {
        if !include_omit && partial.name.contains("omit") {
            continue;
        }
        let key = interval_key(&partial.intervals);
        let simplified = absorb_implied_tensions(&partial.name);
        let differs = simplified != partial.name;
        insert_name(&mut map, &key, partial.name);
        if differs {
            insert_name(&mut map, &key, simplified);
        }
    }
    map
}

/// Cartesian product of the partials so far with one axis, discarding
/// interval collisions and applying rewrite rules.
fn product(partials: Vec<Partial>, axis: &[Choice]) -> Vec<Partial> {
    let mut out = Vec::new();
    for partial in &partials {
        for choice in axis {
            let intervals = match choice.interval {
                None => partial.intervals.clone(),
                Some(iv) => {
                    if partial.intervals.contains(&iv) {
                        continue;
                    }
                    let mut v = partial.intervals.clone();
                    v.push(iv);
                    v.sort_unstable();
                    v
                }
            };
            let name = format!("{}{}", partial.name, choice.fragment);
            let rewritten = choice.rewrite.as_ref().and_then(|rw| rewrite_name(&name, rw));
            out.push(Partial { intervals: intervals.clone(), name });
            if let Some(extra) = rewritten {
                out.push(Partial { intervals, name: extra });
            }
        }
    }
    out
}

fn rewrite_name(name: &str, rw: &Rewrite) -> Option<String> {
    let at = find_occurrence(name, rw.from, rw.bare_only)?;
    let mut rewritten = String::with_capacity(name.len());
    rewritten.push_str(&name[..at]);
    rewritten.push_str(rw.to);
    rewritten.push_str(&name[at + rw.from.len()..]);
    Some(rewritten)
}

/// First occurrence of `needle` in `name`. With `bare_only`, occurrences
/// immediately followed by `)` (i.e. closing a parenthetical) don't count.
fn find_occurrence(name: &str, needle: &str, bare_only: bool) -> Option<usize> {
    let mut start = 0;
    while let Some(pos) = name[start..].find(needle) {
        let at = start + pos;
        let after = at + needle.len();
        if !bare_only || !name[after..].starts_with(')') {
            return Some(at);
        }
        start = at + 1;
    }
    None
}

fn has_bare(name: &str, needle: &str) -> bool {
    find_occurrence(name, needle, true).is_some()
}

/// A name carrying a bare 13 implies the 9 and 11; a bare 11 implies the 9.
/// Drop the now-redundant parenthetical markers from the display name.
fn absorb_implied_tensions(name: &str) -> String {
    if has_bare(name, "13") {
        name.replace("(9)", "").replace("(11)", "").replace("(13)", "")
    } else if has_bare(name, "11") {
        name.replace("(9)", "").replace("(11)", "")
    } else if has_bare(name, "9") {
        name.replace("(9)", "")
    } else {
        name.to_string()
    }
}

/// Move every fragment recognized by `fragment_len` to the end of the name,
/// preserving the relative order of both the kept and the moved parts.
fn relocate_fragments(name: &str, fragment_len: fn(&str) -> Option<usize>) -> String {
    let mut kept = String::with_capacity(name.len());
    let mut moved = String::new();
    let mut rest = name;
    while !rest.is_empty() {
        if let Some(len) = fragment_len(rest) {
            moved.push_str(&rest[..len]);
            rest = &rest[len..];
        } else {
            let mut chars = rest.chars();
            if let Some(c) = chars.next() {
                kept.push(c);
            }
            rest = chars.as_str();
        }
    }
    kept.push_str(&moved);
    kept
}

/// Length of a leading `sus<digit>` fragment.
fn sus_fragment_len(s: &str) -> Option<usize> {
    let rest = s.strip_prefix("sus")?;
    let digit = rest.chars().next()?;
    digit.is_ascii_digit().then_some(3 + digit.len_utf8())
}

/// Length of a leading `(omit<digit>)` fragment.
fn omit_fragment_len(s: &str) -> Option<usize> {
    let rest = s.strip_prefix("(omit")?;
    let mut chars = rest.chars();
    let digit = chars.next()?;
    (digit.is_ascii_digit() && chars.next() == Some(')')).then_some(7)
}

fn insert_name(map: &mut ChordMap, key: &str, name: String) {
    match map.get_mut(key) {
        Some(set) => {
            if !set.contains(&name) {
                set.push(name);
            }
        }
        None => {
            map.insert(key.to_string(), NameSet::One(name));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names_for<'a>(map: &'a ChordMap, key: &str) -> Vec<&'a str> {
        map.get(key).map(|set| set.iter().collect()).unwrap_or_default()
    }

    #[test]
    fn major_triad() {
        let map = generate_chord_map();
        assert!(names_for(&map, "0,4,7").contains(&""));
    }

    #[test]
    fn minor_triad() {
        let map = generate_chord_map();
        assert!(names_for(&map, "0,3,7").contains(&"m"));
    }

    #[test]
    fn dominant_and_major_sevenths() {
        let map = generate_chord_map();
        assert!(names_for(&map, "0,4,7,10").contains(&"7"));
        assert!(names_for(&map, "0,4,7,11").contains(&"M7"));
        assert!(names_for(&map, "0,4,7,9").contains(&"6"));
    }

    #[test]
    fn sus_fragment_moves_after_seventh() {
        let map = generate_chord_map();
        assert!(names_for(&map, "0,5,7,10").contains(&"7sus4"));
        assert!(names_for(&map, "0,2,7").contains(&"sus2"));
    }

    #[test]
    fn ninth_rewrite_adds_both_spellings() {
        let map = generate_chord_map();
        let names = names_for(&map, "0,2,4,7,10");
        assert!(names.contains(&"7(9)"), "un-rewritten spelling kept: {:?}", names);
        assert!(names.contains(&"9"), "rewritten + simplified spelling added: {:?}", names);
    }

    #[test]
    fn thirteenth_absorbs_lower_tensions() {
        let map = generate_chord_map();
        // C13: root, 3rd, 5th, b7, 9, 11, 13
        let names = names_for(&map, "0,2,4,5,7,9,10");
        assert!(names.contains(&"13"), "got {:?}", names);
        assert!(!names.iter().any(|n| *n == "13(9)(11)"));
    }

    #[test]
    fn omit_names_only_in_omit_table() {
        let plain = generate_chord_map();
        let with_omit = generate_chord_map_with_omit();
        assert!(plain.values().all(|set| set.iter().all(|n| !n.contains("omit"))));
        assert!(with_omit
            .values()
            .any(|set| set.iter().any(|n| n.contains("omit"))));
    }

    #[test]
    fn omit_fragment_relocated_to_tail() {
        let map = generate_chord_map_with_omit();
        // m7 with no fifth, plus a 9: the omit marker must trail the tension.
        let names = names_for(&map, "0,2,3,10");
        assert!(
            names.iter().any(|n| n.ends_with("(omit5)")),
            "expected trailing omit marker in {:?}",
            names
        );
    }

    #[test]
    fn keys_are_canonical_interval_vectors() {
        let map = generate_chord_map();
        for key in map.keys() {
            let intervals: Vec<u8> = key.split(',').map(|s| s.parse().unwrap()).collect();
            assert_eq!(intervals[0], 0, "key {} does not start at the root", key);
            assert!(
                intervals.windows(2).all(|w| w[0] < w[1]),
                "key {} is not strictly ascending",
                key
            );
        }
    }

    #[test]
    fn find_occurrence_skips_parenthesized() {
        assert_eq!(find_occurrence("M9(♭9)", "9", true), Some(1));
        assert_eq!(find_occurrence("(♭9)", "9", true), None);
        assert_eq!(find_occurrence("(♭9)", "9", false), Some(3));
    }

    #[test]
    fn relocate_preserves_other_fragments() {
        assert_eq!(relocate_fragments("sus47", sus_fragment_len), "7sus4");
        assert_eq!(
            relocate_fragments("(omit3)7(9)", omit_fragment_len),
            "7(9)(omit3)"
        );
        assert_eq!(relocate_fragments("m7", sus_fragment_len), "m7");
    }

    #[test]
    fn absorb_keeps_unrelated_parentheticals() {
        assert_eq!(absorb_implied_tensions("9(♭13)"), "9(♭13)");
        assert_eq!(absorb_implied_tensions("9(9)"), "9");
        assert_eq!(absorb_implied_tensions("7(9)"), "7(9)");
    }
}
