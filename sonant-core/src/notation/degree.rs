//! Degree notation: absolute chord names expressed as roman numerals
//! relative to a chosen tonic and mode, e.g. `"Dm7"` in C major → `"IIm7"`.

use sonant_types::{note_to_pc, KeyMode, TonicNote};

const DEGREE_NUMERALS: [&str; 7] = ["I", "II", "III", "IV", "V", "VI", "VII"];

/// Convert a chord name to degree notation.
///
/// Returns `None` when no tonic is supplied or when the root (or slash bass)
/// cannot be resolved to a pitch class — an unrepresentable degree is an
/// absent result, not an error.
pub fn chord_to_degree(
    chord_name: &str,
    tonic: Option<TonicNote>,
    key_mode: KeyMode,
) -> Option<String> {
    let tonic = tonic?;
    let root = extract_root(chord_name)?;
    let prefer_sharp = has_sharp(root);

    let root_semitone = note_to_pc(root)?;
    let degree = (root_semitone + 12 - tonic.semitone()) % 12;
    let quality = extract_quality(chord_name, root);

    let roman = degree_to_roman(degree, key_mode, prefer_sharp)?;

    if let Some(slash) = chord_name.find('/') {
        let bass = &chord_name[slash + 1..];
        let bass_degree = note_to_degree(bass, tonic, key_mode, has_sharp(bass))?;
        return Some(format!("{}{}/{}", roman, quality, bass_degree));
    }

    Some(format!("{}{}", roman, quality))
}

fn has_sharp(token: &str) -> bool {
    token.contains('♯') || token.contains('#')
}

/// Degree spelling for a single note name (slash-bass case).
fn note_to_degree(
    note: &str,
    tonic: TonicNote,
    key_mode: KeyMode,
    prefer_sharp: bool,
) -> Option<String> {
    let semitone = note_to_pc(note)?;
    let degree = (semitone + 12 - tonic.semitone()) % 12;
    degree_to_roman(degree, key_mode, prefer_sharp)
}

/// Map a semitone offset from the tonic onto the seven-step ladder. Offsets
/// off the ladder borrow the nearest step with a leading accidental; the
/// sharp-below spelling is tried first when the original name used a sharp,
/// the flat-above spelling otherwise.
fn degree_to_roman(degree: u8, key_mode: KeyMode, prefer_sharp: bool) -> Option<String> {
    let ladder = key_mode.degree_offsets();
    let step = |offset: u8| ladder.iter().position(|&d| d == offset);

    if let Some(i) = step(degree) {
        return Some(DEGREE_NUMERALS[i].to_string());
    }

    let flat_of_above = (degree + 1) % 12;
    let sharp_of_below = (degree + 11) % 12;
    let attempts = if prefer_sharp {
        [('♯', sharp_of_below), ('♭', flat_of_above)]
    } else {
        [('♭', flat_of_above), ('♯', sharp_of_below)]
    };
    for (glyph, offset) in attempts {
        if let Some(i) = step(offset) {
            return Some(format!("{}{}", glyph, DEGREE_NUMERALS[i]));
        }
    }
    None
}

/// Leading root token: a letter A-G plus at most one accidental.
fn extract_root(chord_name: &str) -> Option<&str> {
    let part = match chord_name.find('/') {
        Some(i) => &chord_name[..i],
        None => chord_name,
    };
    let mut chars = part.char_indices();
    let (_, first) = chars.next()?;
    if !matches!(first, 'A'..='G') {
        return None;
    }
    match chars.next() {
        Some((i, c)) if matches!(c, '♯' | '♭' | '#') => Some(&part[..i + c.len_utf8()]),
        Some((i, _)) => Some(&part[..i]),
        None => Some(part),
    }
}

/// Everything between the root token and the slash bass (if any).
fn extract_quality<'a>(chord_name: &'a str, root: &str) -> &'a str {
    let part = match chord_name.find('/') {
        Some(i) => &chord_name[..i],
        None => chord_name,
    };
    &part[root.len()..]
}
