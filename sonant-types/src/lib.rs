//! # sonant-types
//!
//! Shared type definitions for the sonant chord-recognition ecosystem.
//! Pure data: note-name tables, detection options and results, and the
//! key-relative notation types. No algorithms live here — see sonant-core.

pub mod chord;
pub mod degree;
pub mod note;

pub use chord::{DetectOptions, Detection, NameSet};
pub use degree::{KeyMode, TonicNote};
pub use note::{
    midi_to_note_name, note_name, note_to_pc, AccidentalNotation, NOTE_NAMES_FLAT,
    NOTE_NAMES_SHARP, SEMITONES_PER_OCTAVE,
};
