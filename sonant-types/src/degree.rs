//! Key-relative notation types: tonic spellings and key modes.

use serde::{Deserialize, Serialize};

use crate::note::note_to_pc;

/// The twelve tonic spellings selectable for degree notation, using the
/// conventional mix of sharp and flat names (C♯ but E♭, A♭, B♭).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TonicNote {
    C,
    Cs,
    D,
    Eb,
    E,
    F,
    Fs,
    G,
    Ab,
    A,
    Bb,
    B,
}

impl TonicNote {
    pub const ALL: [TonicNote; 12] = [
        TonicNote::C,
        TonicNote::Cs,
        TonicNote::D,
        TonicNote::Eb,
        TonicNote::E,
        TonicNote::F,
        TonicNote::Fs,
        TonicNote::G,
        TonicNote::Ab,
        TonicNote::A,
        TonicNote::Bb,
        TonicNote::B,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            TonicNote::C => "C",
            TonicNote::Cs => "C♯",
            TonicNote::D => "D",
            TonicNote::Eb => "E♭",
            TonicNote::E => "E",
            TonicNote::F => "F",
            TonicNote::Fs => "F♯",
            TonicNote::G => "G",
            TonicNote::Ab => "A♭",
            TonicNote::A => "A",
            TonicNote::Bb => "B♭",
            TonicNote::B => "B",
        }
    }

    /// Semitone offset from C (0-11).
    pub fn semitone(&self) -> u8 {
        match self {
            TonicNote::C => 0,
            TonicNote::Cs => 1,
            TonicNote::D => 2,
            TonicNote::Eb => 3,
            TonicNote::E => 4,
            TonicNote::F => 5,
            TonicNote::Fs => 6,
            TonicNote::G => 7,
            TonicNote::Ab => 8,
            TonicNote::A => 9,
            TonicNote::Bb => 10,
            TonicNote::B => 11,
        }
    }

    /// Canonical tonic spelling for a pitch class.
    pub fn from_pitch_class(pc: u8) -> TonicNote {
        Self::ALL[(pc % 12) as usize]
    }

    /// Parse any recognizable spelling (`"C#"`, `"c♯"`, `"Db"`) to its tonic.
    pub fn from_name(name: &str) -> Option<TonicNote> {
        note_to_pc(name).map(Self::from_pitch_class)
    }
}

impl std::fmt::Display for TonicNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Major or minor key context for degree notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeyMode {
    Major,
    Minor,
}

impl KeyMode {
    pub const ALL: [KeyMode; 2] = [KeyMode::Major, KeyMode::Minor];

    pub fn name(&self) -> &'static str {
        match self {
            KeyMode::Major => "major",
            KeyMode::Minor => "minor",
        }
    }

    /// The seven-step degree ladder: semitone offsets of I..VII from the tonic.
    pub fn degree_offsets(&self) -> &'static [u8; 7] {
        match self {
            KeyMode::Major => &[0, 2, 4, 5, 7, 9, 11],
            KeyMode::Minor => &[0, 2, 3, 5, 7, 8, 10],
        }
    }
}

impl Default for KeyMode {
    fn default() -> Self {
        KeyMode::Major
    }
}
