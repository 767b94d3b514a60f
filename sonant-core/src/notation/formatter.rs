//! Display markup for chord names.
//!
//! A purely presentational transform: accidentals and parentheticals become
//! superscript elements and the quality portion is wrapped in a span the
//! display layer renders at reduced size. No music theory lives here.

/// Split a chord name into root and quality.
///
/// Handles both degree-notation roots (`♯I`, `♭VII`, `II`) and letter roots
/// (`C`, `D♭`). Anything that doesn't start with a root token is returned
/// whole as the "root" with an empty quality.
pub fn extract_chord_parts(chord_name: &str) -> (&str, &str) {
    match root_token_len(chord_name) {
        Some(len) => chord_name.split_at(len),
        None => (chord_name, ""),
    }
}

/// Byte length of a leading root token: `[♯♭]?[IVX]+` or `[A-G][♯♭]?`.
fn root_token_len(s: &str) -> Option<usize> {
    let mut chars = s.char_indices();
    let (_, first) = chars.next()?;
    match first {
        '♯' | '♭' => {
            let start = first.len_utf8();
            let numerals = numeral_run(&s[start..]);
            (numerals > 0).then_some(start + numerals)
        }
        'I' | 'V' | 'X' => Some(numeral_run(s)),
        'A'..='G' => match chars.next() {
            Some((i, c)) if matches!(c, '♯' | '♭') => Some(i + c.len_utf8()),
            Some((i, _)) => Some(i),
            None => Some(s.len()),
        },
        _ => None,
    }
}

fn numeral_run(s: &str) -> usize {
    s.chars()
        .take_while(|c| matches!(c, 'I' | 'V' | 'X'))
        .map(|c| c.len_utf8())
        .sum()
}

/// Wrap each accidental glyph in its own superscript element.
pub fn format_accidentals(text: &str) -> String {
    text.replace('♭', "<sup class=\"flat\">♭</sup>")
        .replace('♯', "<sup class=\"sharp\">♯</sup>")
}

/// Wrap each parenthetical group in a superscript element.
pub fn format_brackets(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')').map(|c| open + c) else {
            break;
        };
        out.push_str(&rest[..open]);
        out.push_str("<sup>");
        out.push_str(&rest[open..=close]);
        out.push_str("</sup>");
        rest = &rest[close + 1..];
    }
    out.push_str(rest);
    out
}

/// Format a single chord name as display markup: accidentals and
/// parentheticals superscripted, the quality portion wrapped in a
/// size-reducing span. Empty input yields empty output.
pub fn format_chord_name(chord_name: &str) -> String {
    if chord_name.is_empty() {
        return String::new();
    }
    let (root, quality) = extract_chord_parts(chord_name);
    let formatted_root = format_accidentals(root);
    let formatted_quality = format_brackets(&format_accidentals(quality));
    if formatted_quality.is_empty() {
        formatted_root
    } else {
        format!(
            "{}<span class=\"quality\">{}</span>",
            formatted_root, formatted_quality
        )
    }
}

/// Format a comma-joined list of chord names, preserving the separator.
pub fn format_chord_list(chord_names: &str) -> String {
    if chord_names.is_empty() {
        return String::new();
    }
    chord_names
        .split(", ")
        .map(|chord| format_chord_name(chord.trim()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_letter_roots() {
        assert_eq!(extract_chord_parts("CM7"), ("C", "M7"));
        assert_eq!(extract_chord_parts("C♯dim7"), ("C♯", "dim7"));
        assert_eq!(extract_chord_parts("D♭"), ("D♭", ""));
    }

    #[test]
    fn splits_degree_roots() {
        assert_eq!(extract_chord_parts("♭IIm7"), ("♭II", "m7"));
        assert_eq!(extract_chord_parts("VII7"), ("VII", "7"));
        assert_eq!(extract_chord_parts("♯V"), ("♯V", ""));
    }

    #[test]
    fn unparseable_input_is_all_root() {
        assert_eq!(extract_chord_parts("?x"), ("?x", ""));
    }

    #[test]
    fn quality_span_wraps_everything_after_the_root() {
        assert_eq!(
            format_chord_name("CM7"),
            "C<span class=\"quality\">M7</span>"
        );
    }

    #[test]
    fn bare_root_gets_no_quality_span() {
        assert_eq!(format_chord_name("C"), "C");
        assert_eq!(format_chord_name(""), "");
    }

    #[test]
    fn accidentals_become_superscripts() {
        assert_eq!(
            format_chord_name("♭IIm7"),
            "<sup class=\"flat\">♭</sup>II<span class=\"quality\">m7</span>"
        );
    }

    #[test]
    fn tension_parentheticals_become_superscripts() {
        assert_eq!(
            format_chord_name("C♯m7(9)"),
            "C<sup class=\"sharp\">♯</sup><span class=\"quality\">m7<sup>(9)</sup></span>"
        );
    }

    #[test]
    fn quality_accidentals_are_superscripted_inside_brackets() {
        assert_eq!(
            format_chord_name("C7(♭9)"),
            "C<span class=\"quality\">7<sup>(<sup class=\"flat\">♭</sup>9)</sup></span>"
        );
    }

    #[test]
    fn list_formats_each_name() {
        assert_eq!(
            format_chord_list("CM7, Caug"),
            "C<span class=\"quality\">M7</span>, C<span class=\"quality\">aug</span>"
        );
        assert_eq!(format_chord_list(""), "");
    }
}
