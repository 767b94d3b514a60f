//! Chord detection options and result shapes.

use serde::{Deserialize, Serialize};

use crate::note::AccidentalNotation;

/// Accepted spellings for one chord shape. A single interval vector may have
/// several equally valid names (enharmonic or omission-simplified), so map
/// values carry one-or-many explicitly instead of a string-or-array union.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum NameSet {
    One(String),
    Many(Vec<String>),
}

impl NameSet {
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        match self {
            NameSet::One(name) => std::slice::from_ref(name).iter(),
            NameSet::Many(names) => names.iter(),
        }
        .map(|s| s.as_str())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.iter().any(|n| n == name)
    }

    pub fn len(&self) -> usize {
        match self {
            NameSet::One(_) => 1,
            NameSet::Many(names) => names.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Append another accepted spelling.
    pub fn push(&mut self, name: String) {
        match self {
            NameSet::One(first) => {
                *self = NameSet::Many(vec![std::mem::take(first), name]);
            }
            NameSet::Many(names) => names.push(name),
        }
    }
}

/// Result of a detection call. `One` when the caller asked for a single
/// answer, `Many` (possibly empty) when all co-equal best names were
/// requested, `None` when nothing was recognized.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Detection {
    None,
    One(String),
    Many(Vec<String>),
}

impl Detection {
    pub fn is_none(&self) -> bool {
        match self {
            Detection::None => true,
            Detection::One(_) => false,
            Detection::Many(names) => names.is_empty(),
        }
    }

    /// The best-ranked name, if any.
    pub fn first(&self) -> Option<&str> {
        match self {
            Detection::None => None,
            Detection::One(name) => Some(name),
            Detection::Many(names) => names.first().map(|s| s.as_str()),
        }
    }

    /// All returned names in rank order.
    pub fn names(&self) -> Vec<&str> {
        match self {
            Detection::None => Vec::new(),
            Detection::One(name) => vec![name.as_str()],
            Detection::Many(names) => names.iter().map(|s| s.as_str()).collect(),
        }
    }
}

/// Options for a detection call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DetectOptions {
    /// Which note-naming table to use for roots and basses.
    pub accidental_notation: AccidentalNotation,
    /// Return every co-equal best-group name instead of just the first.
    pub return_all: bool,
    /// Canonicalize `(9)(13)` style tension markers into `(9, 13)`.
    pub merge_parentheses: bool,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            accidental_notation: AccidentalNotation::Sharp,
            return_all: false,
            merge_parentheses: true,
        }
    }
}
