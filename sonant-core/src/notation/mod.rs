//! Chord-name notation transforms: parenthetical merging, degree notation,
//! and display markup.

pub mod degree;
pub mod formatter;
pub mod merge;

pub use degree::chord_to_degree;
pub use formatter::{extract_chord_parts, format_chord_list, format_chord_name};
pub use merge::merge_parentheses;
