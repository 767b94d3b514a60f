//! End-to-end detection scenarios.

use sonant_core::{chord_to_degree, detect_chord, format_chord_name, merge_parentheses, ChordTables};
use sonant_types::{AccidentalNotation, DetectOptions, Detection, KeyMode, TonicNote};

fn detect(tables: &ChordTables, pitches: &[u8]) -> String {
    detect_chord(tables, pitches, &DetectOptions::default())
        .first()
        .unwrap_or_default()
        .to_string()
}

#[test]
fn literal_scenarios() {
    let tables = ChordTables::new();
    assert_eq!(detect(&tables, &[60, 64, 67]), "C");
    assert_eq!(detect(&tables, &[60, 63, 67]), "Cm");
    assert_eq!(detect(&tables, &[60, 64, 67, 70]), "C7");
    assert_eq!(detect(&tables, &[60, 67]), "C5");
    assert_eq!(detect(&tables, &[60]), "");
}

#[test]
fn common_shapes() {
    let tables = ChordTables::new();
    assert_eq!(detect(&tables, &[60, 64, 67, 71]), "CM7");
    assert_eq!(detect(&tables, &[57, 60, 64, 67]), "Am7");
    assert_eq!(detect(&tables, &[60, 65, 67]), "Csus4");
    assert_eq!(detect(&tables, &[60, 62, 67]), "Csus2");
    assert_eq!(detect(&tables, &[60, 63, 66]), "Cdim");
    assert_eq!(detect(&tables, &[60, 63, 66, 69]), "Cdim7");
    assert_eq!(detect(&tables, &[60, 64, 68]), "Caug");
    assert_eq!(detect(&tables, &[60, 64, 67, 69]), "C6");
    assert_eq!(detect(&tables, &[60, 62, 64, 67, 70]), "C9");
}

#[test]
fn roots_other_than_c() {
    let tables = ChordTables::new();
    assert_eq!(detect(&tables, &[67, 71, 74]), "G");
    assert_eq!(detect(&tables, &[62, 65, 69]), "Dm");
    assert_eq!(detect(&tables, &[66, 70, 73]), "F♯");
}

#[test]
fn order_independence_over_all_permutations() {
    let tables = ChordTables::new();
    let reference = detect(&tables, &[60, 64, 67, 70]);
    let pitches = [60u8, 64, 67, 70];
    // All 24 orderings of the four pitches.
    for a in 0..4 {
        for b in 0..4 {
            for c in 0..4 {
                for d in 0..4 {
                    let idx = [a, b, c, d];
                    let mut seen = [false; 4];
                    if idx.iter().any(|&i| std::mem::replace(&mut seen[i], true)) {
                        continue;
                    }
                    let perm: Vec<u8> = idx.iter().map(|&i| pitches[i]).collect();
                    assert_eq!(detect(&tables, &perm), reference, "permutation {:?}", perm);
                }
            }
        }
    }
}

#[test]
fn two_pitch_classes_gate_on_the_perfect_fifth() {
    let tables = ChordTables::new();
    for interval in 1..12u8 {
        let result = detect(&tables, &[60, 60 + interval]);
        if interval == 7 {
            assert_eq!(result, "C5");
        } else {
            assert_eq!(result, "", "interval {} should not name a chord", interval);
        }
    }
}

#[test]
fn slash_chord_over_foreign_bass() {
    let tables = ChordTables::new();
    assert_eq!(detect(&tables, &[48, 62, 65, 69]), "Dm/C");
}

#[test]
fn flat_notation_changes_spelling_not_shape() {
    let tables = ChordTables::new();
    let flat = DetectOptions {
        accidental_notation: AccidentalNotation::Flat,
        ..Default::default()
    };
    assert_eq!(
        detect_chord(&tables, &[63, 67, 70], &flat),
        Detection::One("E♭".to_string())
    );
    assert_eq!(detect(&tables, &[63, 67, 70]), "D♯");
}

#[test]
fn detection_to_degree_round_trip() {
    let tables = ChordTables::new();
    let name = detect(&tables, &[62, 65, 69, 72]);
    assert_eq!(name, "Dm7");
    assert_eq!(
        chord_to_degree(&name, Some(TonicNote::C), KeyMode::Major),
        Some("IIm7".to_string())
    );
}

#[test]
fn detection_to_markup() {
    let tables = ChordTables::new();
    let name = detect(&tables, &[60, 64, 67, 71]);
    assert_eq!(format_chord_name(&name), "C<span class=\"quality\">M7</span>");
}

#[test]
fn merge_parentheses_spec_examples() {
    assert_eq!(merge_parentheses("C(9)(13)"), "C(9, 13)");
    let merged = merge_parentheses("C(9)(13)");
    assert_eq!(merge_parentheses(&merged), merged);
}

#[test]
fn tables_are_shareable_across_threads() {
    let tables = std::sync::Arc::new(ChordTables::new());
    let handles: Vec<_> = (0..4)
        .map(|_| {
            let tables = std::sync::Arc::clone(&tables);
            std::thread::spawn(move || {
                detect_chord(&tables, &[60, 64, 67], &DetectOptions::default())
            })
        })
        .collect();
    for handle in handles {
        let result = handle.join().expect("worker panicked");
        assert_eq!(result, Detection::One("C".to_string()));
    }
}
