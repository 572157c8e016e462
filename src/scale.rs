//! # Scales
//!
//! A scale is a root note plus an interval pattern (semitone offsets from the root).
//! The four supported scale types:
//!
//! ```text
//! major             0 2 4 5 7 9 11   sharp spelling
//! minor             0 2 3 5 7 8 10   flat spelling
//! major-pentatonic  0 2 4 7 9        sharp spelling
//! minor-pentatonic  0 3 5 7 10       flat spelling
//! ```
//!
//! Spelling follows the scale family, not the key signature. F major is spelled with
//! `A#`, not `Bb`.
//!
//! Membership tests compare pitch classes, never strings, so `D#` is found in a scale
//! spelled with `Eb`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::debug;

use crate::error::TheoryError;
use crate::pitch::{pitch_class_of, spell, Spelling};

const MAJOR_INTERVALS: [u8; 7] = [0, 2, 4, 5, 7, 9, 11];
const MINOR_INTERVALS: [u8; 7] = [0, 2, 3, 5, 7, 8, 10];
const MAJOR_PENTATONIC_INTERVALS: [u8; 5] = [0, 2, 4, 7, 9];
const MINOR_PENTATONIC_INTERVALS: [u8; 5] = [0, 3, 5, 7, 10];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ScaleType {
    #[default]
    Major,
    Minor,
    MajorPentatonic,
    MinorPentatonic,
}

impl ScaleType {
    pub const ALL: [ScaleType; 4] = [
        ScaleType::Major,
        ScaleType::Minor,
        ScaleType::MajorPentatonic,
        ScaleType::MinorPentatonic,
    ];

    /// Semitone offsets from the root, ascending, starting at 0
    pub fn intervals(self) -> &'static [u8] {
        match self {
            ScaleType::Major => &MAJOR_INTERVALS,
            ScaleType::Minor => &MINOR_INTERVALS,
            ScaleType::MajorPentatonic => &MAJOR_PENTATONIC_INTERVALS,
            ScaleType::MinorPentatonic => &MINOR_PENTATONIC_INTERVALS,
        }
    }

    /// Major family spells with sharps, minor family with flats
    pub fn spelling(self) -> Spelling {
        match self {
            ScaleType::Major | ScaleType::MajorPentatonic => Spelling::Sharp,
            ScaleType::Minor | ScaleType::MinorPentatonic => Spelling::Flat,
        }
    }

    pub fn uses_flats(self) -> bool {
        self.spelling() == Spelling::Flat
    }

    pub fn as_str(self) -> &'static str {
        match self {
            ScaleType::Major => "major",
            ScaleType::Minor => "minor",
            ScaleType::MajorPentatonic => "major-pentatonic",
            ScaleType::MinorPentatonic => "minor-pentatonic",
        }
    }

    /// Human readable name, e.g. "Minor Pentatonic"
    pub fn display_name(self) -> &'static str {
        match self {
            ScaleType::Major => "Major",
            ScaleType::Minor => "Minor",
            ScaleType::MajorPentatonic => "Major Pentatonic",
            ScaleType::MinorPentatonic => "Minor Pentatonic",
        }
    }
}

impl fmt::Display for ScaleType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for ScaleType {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScaleType::ALL
            .into_iter()
            .find(|scale| scale.as_str() == s.trim())
            .ok_or_else(|| TheoryError::InvalidSelection(format!("unknown scale type: {}", s)))
    }
}

/// Spell the notes of a scale in scale-degree order.
///
/// # Example
/// ```
/// use fretboard::{scale_notes, ScaleType};
///
/// let notes = scale_notes("A", ScaleType::MinorPentatonic)?;
/// assert_eq!(notes, vec!["A", "C", "D", "E", "G"]);
/// # Ok::<(), fretboard::TheoryError>(())
/// ```
///
/// # Errors
/// Returns [`TheoryError::UnknownNote`] if `root` is not a known note name.
pub fn scale_notes(root: &str, scale: ScaleType) -> Result<Vec<&'static str>, TheoryError> {
    let root_pc = pitch_class_of(root)?;
    let spelling = scale.spelling();
    let notes: Vec<&'static str> = scale
        .intervals()
        .iter()
        .map(|&offset| spell(root_pc.transpose(offset as u32), spelling))
        .collect();
    debug!(root, scale = %scale, ?notes, "derived scale");
    Ok(notes)
}

/// Whether `note` shares a pitch class with any note of `scale_notes`.
///
/// ```
/// use fretboard::{is_in_scale, scale_notes, ScaleType};
///
/// let c_minor = scale_notes("C", ScaleType::Minor)?;
/// assert!(c_minor.contains(&"Eb"));
/// assert!(is_in_scale("D#", &c_minor)?);
/// # Ok::<(), fretboard::TheoryError>(())
/// ```
pub fn is_in_scale<S: AsRef<str>>(note: &str, scale_notes: &[S]) -> Result<bool, TheoryError> {
    let target = pitch_class_of(note)?;
    for member in scale_notes {
        if pitch_class_of(member.as_ref())? == target {
            return Ok(true);
        }
    }
    Ok(false)
}

/// Pitch-class equality between `note` and `root`
pub fn is_root(note: &str, root: &str) -> Result<bool, TheoryError> {
    Ok(pitch_class_of(note)? == pitch_class_of(root)?)
}
