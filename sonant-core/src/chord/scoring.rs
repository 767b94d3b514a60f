//! Candidate ranking.
//!
//! Policy (documented decision): plain spellings beat slash-chord spellings,
//! any spelling that needs an explicit omission loses to one that does not,
//! and lighter parenthetical tension loads win ties. Grouping is stable, so
//! names tied on score keep the search's map-priority order (curated names
//! surface first).

use std::cmp::Reverse;

/// Score a single candidate name. Higher is better.
fn score(name: &str) -> i32 {
    let mut score = 0;
    if name.contains('/') {
        score -= 20;
    }
    score -= 30 * name.matches("omit").count() as i32;
    score -= 2 * name.matches('(').count() as i32;
    score
}

/// Group candidates by score, best group first.
pub fn group_candidates_by_score(candidates: Vec<String>) -> Vec<Vec<String>> {
    let mut scored: Vec<(i32, String)> = candidates
        .into_iter()
        .map(|name| (score(&name), name))
        .collect();
    scored.sort_by_key(|(s, _)| Reverse(*s));

    let mut groups: Vec<Vec<String>> = Vec::new();
    let mut current_score = None;
    for (s, name) in scored {
        if current_score != Some(s) {
            groups.push(Vec::new());
            current_score = Some(s);
        }
        if let Some(group) = groups.last_mut() {
            group.push(name);
        }
    }
    groups
}

#[cfg(test)]
mod tests {
    use super::*;

    fn names(v: &[&str]) -> Vec<String> {
        v.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn plain_beats_slash() {
        let groups = group_candidates_by_score(names(&["Em(♯5)", "C/E"]));
        assert_eq!(groups[0], names(&["Em(♯5)"]));
        assert_eq!(groups[1], names(&["C/E"]));
    }

    #[test]
    fn omission_loses_to_slash() {
        let groups = group_candidates_by_score(names(&["C6sus2(omit5)", "Dm/C"]));
        assert_eq!(groups[0], names(&["Dm/C"]));
    }

    #[test]
    fn lighter_tension_load_wins() {
        let groups = group_candidates_by_score(names(&["C9(9)", "C9"]));
        assert_eq!(groups[0], names(&["C9"]));
    }

    #[test]
    fn ties_preserve_input_order() {
        let groups = group_candidates_by_score(names(&["Caug", "C7", "C(♯5)"]));
        // Caug and C7 tie at the top; C(♯5) pays the parenthetical penalty.
        assert_eq!(groups[0], names(&["Caug", "C7"]));
        assert_eq!(groups[1], names(&["C(♯5)"]));
    }

    #[test]
    fn empty_input_yields_no_groups() {
        assert!(group_candidates_by_score(Vec::new()).is_empty());
    }
}
