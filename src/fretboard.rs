//! # Fretboard Model
//!
//! Maps (open string, fret) coordinates to notes and builds the full grid a renderer
//! needs for one [`Selection`].
//!
//! ## Layout
//! ```text
//! Fretboard
//!   ├── root, scale, notation, frets (copied from the Selection)
//!   ├── scale_notes: spelled scale, degree order
//!   └── Vec<GuitarString> (high E first)
//!         ├── open: open string note
//!         └── Vec<FretPosition> (fret 1..=frets)
//!               ├── note (spelled with the scale family's convention)
//!               ├── in_scale / is_root (pitch-class comparisons)
//!               └── label: Some(..) only for in-scale positions
//! ```
//!
//! Fret 0 (the open string) is addressable with [`note_from_fret`] but is not part of
//! the grid; the grid starts at fret 1.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::TheoryError;
use crate::notation::{label_with, NotationMode};
use crate::pitch::{pitch_class_of, spell, Spelling};
use crate::scale::{is_in_scale, is_root, scale_notes, ScaleType};
use crate::selection::Selection;

/// Standard six-string tuning, high to low
pub const STANDARD_TUNING: [&str; 6] = ["E", "B", "G", "D", "A", "E"];

pub const MIN_FRETS: u8 = 5;
pub const MAX_FRETS: u8 = 22;
pub const DEFAULT_FRETS: u8 = 17;

/// Octave appended to a note name for audio playback
pub const PLAYBACK_OCTAVE: u8 = 4;

const SINGLE_MARKERS: [u32; 8] = [3, 5, 7, 9, 15, 17, 19, 21];
const DOUBLE_MARKERS: [u32; 1] = [12];

/// Note sounding at `fret` on a string tuned to `open_string`.
///
/// # Example
/// ```
/// use fretboard::note_from_fret;
///
/// assert_eq!(note_from_fret("E", 3, false)?, "G");
/// assert_eq!(note_from_fret("A", 1, true)?, "Bb");
/// assert_eq!(note_from_fret("A", 13, false)?, "A#");
/// # Ok::<(), fretboard::TheoryError>(())
/// ```
///
/// # Errors
/// Returns [`TheoryError::UnknownNote`] if `open_string` is not a known note name.
pub fn note_from_fret(
    open_string: &str,
    fret: u32,
    use_flat: bool,
) -> Result<&'static str, TheoryError> {
    let open = pitch_class_of(open_string)?;
    Ok(spell(open.transpose(fret), Spelling::from_flag(use_flat)))
}

/// Clamp a requested fret count into [`MIN_FRETS`]..=[`MAX_FRETS`]
pub fn clamp_fret_count(requested: i64) -> u8 {
    let clamped = requested.clamp(MIN_FRETS as i64, MAX_FRETS as i64) as u8;
    if clamped as i64 != requested {
        warn!(requested, clamped, "fret count out of range");
    }
    clamped
}

/// Read a fret count typed as free text.
///
/// Non-numeric input keeps `previous`; numbers are clamped.
///
/// ```
/// use fretboard::parse_fret_count;
///
/// assert_eq!(parse_fret_count("12", 17), 12);
/// assert_eq!(parse_fret_count("40", 17), 22);
/// assert_eq!(parse_fret_count("abc", 17), 17);
/// ```
pub fn parse_fret_count(input: &str, previous: u8) -> u8 {
    match input.trim().parse::<i64>() {
        Ok(value) => clamp_fret_count(value),
        Err(_) => {
            warn!(input, previous, "ignoring non-numeric fret count");
            previous
        }
    }
}

/// Note name with the playback octave appended, e.g. `"C"` -> `"C4"`
pub fn playback_pitch(note: &str) -> Result<String, TheoryError> {
    pitch_class_of(note)?;
    Ok(format!("{}{}", note, PLAYBACK_OCTAVE))
}

/// Inlay marker drawn on the fretboard
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Marker {
    Single,
    Double,
}

pub fn fret_marker(fret: u32) -> Option<Marker> {
    if DOUBLE_MARKERS.contains(&fret) {
        Some(Marker::Double)
    } else if SINGLE_MARKERS.contains(&fret) {
        Some(Marker::Single)
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretPosition {
    pub fret: u32,
    pub note: &'static str,
    pub in_scale: bool,
    pub is_root: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GuitarString {
    pub open: &'static str,
    pub positions: Vec<FretPosition>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FretMarker {
    pub fret: u32,
    pub marker: Marker,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Fretboard {
    pub root: String,
    pub scale: ScaleType,
    pub notation: NotationMode,
    pub frets: u8,
    pub scale_notes: Vec<&'static str>,
    pub strings: Vec<GuitarString>,
}

impl Fretboard {
    /// Build the grid for a selection.
    ///
    /// ```
    /// use fretboard::{Fretboard, ScaleType, Selection};
    ///
    /// let selection = Selection::new("C", ScaleType::Major)?.with_frets(12);
    /// let board = Fretboard::build(&selection)?;
    /// let g = &board.strings[0].positions[2]; // high E, fret 3
    /// assert_eq!(g.note, "G");
    /// assert!(g.in_scale);
    /// assert!(!g.is_root);
    /// # Ok::<(), fretboard::TheoryError>(())
    /// ```
    pub fn build(selection: &Selection) -> Result<Self, TheoryError> {
        let root = selection.root();
        let scale = selection.scale();
        let notes = scale_notes(root, scale)?;
        let use_flat = scale.uses_flats();

        let mut strings = Vec::with_capacity(STANDARD_TUNING.len());
        for open in STANDARD_TUNING {
            let mut positions = Vec::with_capacity(selection.frets() as usize);
            for fret in 1..=selection.frets() as u32 {
                let note = note_from_fret(open, fret, use_flat)?;
                let in_scale = is_in_scale(note, &notes)?;
                let label = if in_scale {
                    Some(label_with(note, root, selection.notation(), selection.syllables())?)
                } else {
                    None
                };
                positions.push(FretPosition {
                    fret,
                    note,
                    in_scale,
                    is_root: is_root(note, root)?,
                    label,
                });
            }
            strings.push(GuitarString { open, positions });
        }

        debug!(
            root,
            scale = %scale,
            notation = %selection.notation(),
            frets = selection.frets(),
            "built fretboard"
        );

        Ok(Self {
            root: root.to_string(),
            scale,
            notation: selection.notation(),
            frets: selection.frets(),
            scale_notes: notes,
            strings,
        })
    }

    /// Inlay markers within this board's fret range
    pub fn markers(&self) -> Vec<FretMarker> {
        (1..=self.frets as u32)
            .filter_map(|fret| fret_marker(fret).map(|marker| FretMarker { fret, marker }))
            .collect()
    }

    /// Every (string index, fret) sounding the same pitch class as `note`
    pub fn positions_of(&self, note: &str) -> Result<Vec<(usize, u32)>, TheoryError> {
        let target = pitch_class_of(note)?;
        let mut found = Vec::new();
        for (index, string) in self.strings.iter().enumerate() {
            for position in &string.positions {
                if pitch_class_of(position.note)? == target {
                    found.push((index, position.fret));
                }
            }
        }
        Ok(found)
    }

    /// Positions that get a marker drawn, with their string index
    pub fn highlighted(&self) -> impl Iterator<Item = (usize, &FretPosition)> {
        self.strings.iter().enumerate().flat_map(|(index, string)| {
            string
                .positions
                .iter()
                .filter(|position| position.in_scale)
                .map(move |position| (index, position))
        })
    }
}
