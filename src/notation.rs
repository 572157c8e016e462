//! # Notation Labels
//!
//! Turns a note name into the string shown on a fretboard marker or scale chip.
//!
//! ## Modes
//! - `alphabetical` - the note name itself
//! - `syllabic-fixed` - absolute solfège, C is always Do (root ignored)
//! - `syllabic-movable` - solfège relative to the root, the root is always Do
//! - `intervals` - scale-degree numeral relative to the root (1, b2, 2, ... 7)
//!
//! Solfège can be written in Latin syllables or Hangul, see [`Syllables`].

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::trace;

use crate::error::TheoryError;
use crate::pitch::pitch_class_of;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum NotationMode {
    #[default]
    Alphabetical,
    SyllabicFixed,
    SyllabicMovable,
    Intervals,
}

impl NotationMode {
    pub const ALL: [NotationMode; 4] = [
        NotationMode::Alphabetical,
        NotationMode::SyllabicFixed,
        NotationMode::SyllabicMovable,
        NotationMode::Intervals,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            NotationMode::Alphabetical => "alphabetical",
            NotationMode::SyllabicFixed => "syllabic-fixed",
            NotationMode::SyllabicMovable => "syllabic-movable",
            NotationMode::Intervals => "intervals",
        }
    }
}

impl fmt::Display for NotationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for NotationMode {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        NotationMode::ALL
            .into_iter()
            .find(|mode| mode.as_str() == s.trim())
            .ok_or_else(|| TheoryError::InvalidSelection(format!("unknown notation mode: {}", s)))
    }
}

/// Script used for solfège syllables
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Syllables {
    #[default]
    Latin,
    Hangul,
}

impl Syllables {
    pub fn as_str(self) -> &'static str {
        match self {
            Syllables::Latin => "latin",
            Syllables::Hangul => "hangul",
        }
    }
}

impl fmt::Display for Syllables {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Syllables {
    type Err = TheoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "latin" => Ok(Syllables::Latin),
            "hangul" => Ok(Syllables::Hangul),
            other => Err(TheoryError::InvalidSelection(format!("unknown syllables: {}", other))),
        }
    }
}

// Relative solfège, indexed by semitones above the root
const MOVABLE_LATIN: [&str; 12] = ["Do", "Di", "Re", "Ri", "Mi", "Fa", "Fi", "Sol", "Si", "La", "Li", "Ti"];
const MOVABLE_HANGUL: [&str; 12] = ["도", "도#", "레", "레#", "미", "파", "파#", "솔", "솔#", "라", "라#", "시"];

// Absolute solfège, keyed by spelling so C# and Db read differently
const FIXED_LATIN: [(&str, &str); 17] = [
    ("C", "Do"),
    ("C#", "Do#"),
    ("Db", "Reb"),
    ("D", "Re"),
    ("D#", "Re#"),
    ("Eb", "Mib"),
    ("E", "Mi"),
    ("F", "Fa"),
    ("F#", "Fa#"),
    ("Gb", "Solb"),
    ("G", "Sol"),
    ("G#", "Sol#"),
    ("Ab", "Lab"),
    ("A", "La"),
    ("A#", "La#"),
    ("Bb", "Tib"),
    ("B", "Ti"),
];
const FIXED_HANGUL: [(&str, &str); 17] = [
    ("C", "도"),
    ("C#", "도#"),
    ("Db", "레b"),
    ("D", "레"),
    ("D#", "레#"),
    ("Eb", "미b"),
    ("E", "미"),
    ("F", "파"),
    ("F#", "파#"),
    ("Gb", "솔b"),
    ("G", "솔"),
    ("G#", "솔#"),
    ("Ab", "라b"),
    ("A", "라"),
    ("A#", "라#"),
    ("Bb", "시b"),
    ("B", "시"),
];

const DEGREES: [&str; 12] = ["1", "b2", "2", "b3", "3", "4", "b5", "5", "b6", "6", "b7", "7"];

/// Label a note under a notation mode using Latin solfège.
///
/// # Example
/// ```
/// use fretboard::{label_for, NotationMode};
///
/// assert_eq!(label_for("G", "C", NotationMode::Intervals)?, "5");
/// assert_eq!(label_for("Db", "C", NotationMode::Intervals)?, "b2");
/// assert_eq!(label_for("A", "A", NotationMode::SyllabicMovable)?, "Do");
/// # Ok::<(), fretboard::TheoryError>(())
/// ```
///
/// # Errors
/// Returns [`TheoryError::UnknownNote`] when a note the mode needs is unknown.
pub fn label_for(note: &str, root: &str, mode: NotationMode) -> Result<String, TheoryError> {
    label_with(note, root, mode, Syllables::Latin)
}

/// Label a note under a notation mode and solfège script
pub fn label_with(
    note: &str,
    root: &str,
    mode: NotationMode,
    syllables: Syllables,
) -> Result<String, TheoryError> {
    let label = match mode {
        NotationMode::Alphabetical => return Ok(note.to_string()),
        NotationMode::SyllabicFixed => {
            pitch_class_of(note)?;
            let table = match syllables {
                Syllables::Latin => &FIXED_LATIN,
                Syllables::Hangul => &FIXED_HANGUL,
            };
            table.iter().find(|(name, _)| *name == note).map(|(_, syllable)| *syllable)
        }
        NotationMode::SyllabicMovable => {
            let interval = relative_interval(note, root)?;
            let table = match syllables {
                Syllables::Latin => &MOVABLE_LATIN,
                Syllables::Hangul => &MOVABLE_HANGUL,
            };
            table.get(interval as usize).copied()
        }
        NotationMode::Intervals => DEGREES.get(relative_interval(note, root)? as usize).copied(),
    };

    Ok(match label {
        Some(label) => label.to_string(),
        None => {
            trace!(note, mode = %mode, "no label entry, using note name");
            note.to_string()
        }
    })
}

/// Semitones from `root` up to `note`, in 0..=11
pub fn relative_interval(note: &str, root: &str) -> Result<u8, TheoryError> {
    Ok(pitch_class_of(note)?.interval_from(pitch_class_of(root)?))
}
