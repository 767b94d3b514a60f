//! Parenthetical tension merging.

/// Merge every parenthetical group of a chord name into one ordered,
/// comma-joined group: `"C7(13)(9)"` → `"C7(9, 13)"`.
///
/// Only the portion before a slash bass is touched; the bass suffix is
/// reattached unchanged. A name without parentheticals passes through as-is,
/// which also makes the transform idempotent.
pub fn merge_parentheses(chord_name: &str) -> String {
    let (chord_part, bass_part) = match chord_name.find('/') {
        Some(i) => (&chord_name[..i], &chord_name[i..]),
        None => (chord_name, ""),
    };

    let mut base = String::with_capacity(chord_part.len());
    let mut tokens: Vec<&str> = Vec::new();
    let mut rest = chord_part;
    while let Some(open) = rest.find('(') {
        let Some(close) = rest[open..].find(')').map(|c| open + c) else {
            break;
        };
        base.push_str(&rest[..open]);
        tokens.push(&rest[open + 1..close]);
        rest = &rest[close + 1..];
    }
    base.push_str(rest);

    if tokens.is_empty() {
        return chord_name.to_string();
    }

    tokens.sort_by_key(|t| token_order(t));
    format!("{}({}){}", base, tokens.join(", "), bass_part)
}

/// Display precedence inside a merged parenthetical: altered fifths first,
/// then the 9 family, 11, the 13 family, ♯11, and omissions last.
/// Unrecognized tokens keep their relative order at the very end.
fn token_order(token: &str) -> u8 {
    match token {
        "♭5" | "♯5" => 0,
        "♭9" | "9" | "♯9" => 1,
        "11" => 2,
        "♭13" | "13" | "♯13" => 3,
        "♯11" => 4,
        "omit3" => 5,
        "omit5" => 6,
        _ => 99,
    }
}
