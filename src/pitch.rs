//! # Pitch Classes and Enharmonic Spelling
//!
//! Every note is reduced to one of 12 pitch classes (0 = C). Each pitch class has
//! exactly one sharp spelling and one flat spelling:
//!
//! ```text
//!  pc  sharp  flat
//!   0  C      C
//!   1  C#     Db
//!   2  D      D
//!   3  D#     Eb
//!   4  E      E
//!   5  F      F
//!   6  F#     Gb
//!   7  G      G
//!   8  G#     Ab
//!   9  A      A
//!  10  A#     Bb
//!  11  B      B
//! ```
//!
//! Both spellings map back to the same pitch class, so `C#` and `Db` are the same note
//! everywhere in this crate.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::TheoryError;

/// All notes in chromatic order, sharp spelling
pub const SHARP_NAMES: [&str; 12] = ["C", "C#", "D", "D#", "E", "F", "F#", "G", "G#", "A", "A#", "B"];

/// All notes in chromatic order, flat spelling
pub const FLAT_NAMES: [&str; 12] = ["C", "Db", "D", "Eb", "E", "F", "Gb", "G", "Ab", "A", "Bb", "B"];

/// Number of semitones in an octave
pub const SEMITONES: u8 = 12;

/// One of the 12 equal-tempered pitch classes, always in 0..=11
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize)]
#[serde(transparent)]
pub struct PitchClass(u8);

impl PitchClass {
    pub const C: PitchClass = PitchClass(0);

    /// Wrap any semitone count into a pitch class
    pub fn new(semitone: u32) -> Self {
        Self((semitone % SEMITONES as u32) as u8)
    }

    pub fn value(self) -> u8 {
        self.0
    }

    /// Move up by `semitones`, wrapping at the octave
    pub fn transpose(self, semitones: u32) -> Self {
        Self::new(self.0 as u32 + semitones % SEMITONES as u32)
    }

    /// Ascending distance from `root` to this pitch class, in 0..=11
    pub fn interval_from(self, root: PitchClass) -> u8 {
        (self.0 + SEMITONES - root.0) % SEMITONES
    }

    /// Iterate all 12 pitch classes starting at C
    pub fn all() -> impl Iterator<Item = PitchClass> {
        (0..SEMITONES).map(PitchClass)
    }
}

impl fmt::Display for PitchClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Enharmonic convention used when turning a pitch class back into a name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Spelling {
    #[default]
    Sharp,
    Flat,
}

impl Spelling {
    pub fn from_flag(use_flat: bool) -> Self {
        if use_flat {
            Spelling::Flat
        } else {
            Spelling::Sharp
        }
    }

    fn table(self) -> &'static [&'static str; 12] {
        match self {
            Spelling::Sharp => &SHARP_NAMES,
            Spelling::Flat => &FLAT_NAMES,
        }
    }
}

/// Look up a note name in the sharp and flat tables.
///
/// Matching is exact: `"c"`, `"C##"` and `"Cb"` are all unknown.
///
/// # Example
/// ```
/// use fretboard::pitch_class_of;
///
/// assert_eq!(pitch_class_of("D#")?.value(), 3);
/// assert_eq!(pitch_class_of("Eb")?.value(), 3);
/// assert!(pitch_class_of("H").is_err());
/// # Ok::<(), fretboard::TheoryError>(())
/// ```
///
/// # Errors
/// Returns [`TheoryError::UnknownNote`] when the name is in neither table.
pub fn pitch_class_of(note: &str) -> Result<PitchClass, TheoryError> {
    SHARP_NAMES
        .iter()
        .position(|&name| name == note)
        .or_else(|| FLAT_NAMES.iter().position(|&name| name == note))
        .map(|index| PitchClass(index as u8))
        .ok_or_else(|| TheoryError::UnknownNote(note.to_string()))
}

/// Name a pitch class in the given convention
pub fn spell(pitch_class: PitchClass, spelling: Spelling) -> &'static str {
    spelling.table()[pitch_class.value() as usize]
}
