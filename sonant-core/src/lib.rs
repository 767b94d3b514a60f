//! # sonant-core
//!
//! Chord recognition and notation engine — a pure computation library,
//! independent of any UI or MIDI transport.
//!
//! ## Quick Start
//!
//! ```rust
//! use sonant_core::{detect_chord, ChordTables};
//! use sonant_types::DetectOptions;
//!
//! // Build the lookup tables once at startup; they are immutable afterwards.
//! let tables = ChordTables::new();
//!
//! let result = detect_chord(&tables, &[60, 64, 67], &DetectOptions::default());
//! assert_eq!(result.first(), Some("C"));
//! ```
//!
//! ## Module Overview
//!
//! - [`chord`] — detection pipeline: pitch-class normalization, the chord
//!   lookup tables (curated + generated), candidate search, and scoring
//! - [`notation`] — name transforms: parenthetical merging, degree notation,
//!   display markup
//! - [`config`] — TOML configuration for default detection options
//!   (embedded defaults + user override)

pub mod chord;
pub mod config;
pub mod notation;

pub use chord::{detect_chord, ChordTables};
pub use notation::{chord_to_degree, format_chord_list, format_chord_name, merge_parentheses};
