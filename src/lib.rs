//! Music theory engine behind a guitar fretboard scale visualizer.
//!
//! Pure functions over a 12 pitch-class model: scale derivation, enharmonic
//! spelling, fret-to-note mapping and notation labels. Presentation layers hold the
//! current [`Selection`] and call in on every render.
//!
//! ```rust
//! use fretboard::{is_in_scale, is_root, note_from_fret, scale_notes, ScaleType};
//!
//! let c_major = scale_notes("C", ScaleType::Major)?;
//! assert_eq!(c_major, vec!["C", "D", "E", "F", "G", "A", "B"]);
//!
//! let note = note_from_fret("E", 3, false)?;
//! assert_eq!(note, "G");
//! assert!(is_in_scale(note, &c_major)?);
//! assert!(!is_root(note, "C")?);
//! # Ok::<(), fretboard::TheoryError>(())
//! ```

pub mod error;
pub mod fretboard;
pub mod notation;
pub mod pitch;
pub mod render;
pub mod scale;
pub mod selection;

pub use error::*;
pub use fretboard::{
    clamp_fret_count, fret_marker, note_from_fret, parse_fret_count, playback_pitch, FretMarker,
    FretPosition, Fretboard, GuitarString, Marker, DEFAULT_FRETS, MAX_FRETS, MIN_FRETS,
    PLAYBACK_OCTAVE, STANDARD_TUNING,
};
pub use notation::{label_for, label_with, NotationMode, Syllables};
pub use pitch::{pitch_class_of, spell, PitchClass, Spelling, FLAT_NAMES, SHARP_NAMES};
pub use render::{render_text, scale_chips, ScaleChip};
pub use scale::{is_in_scale, is_root, scale_notes, ScaleType};
pub use selection::Selection;

/// Build the fretboard and scale chips for a selection and draw them as text.
pub fn render(selection: &Selection) -> Result<String, TheoryError> {
    let board = Fretboard::build(selection)?;
    let chips = scale_chips(selection)?;
    Ok(render_text(&board, &chips))
}

/// Build the fretboard and scale chips for a selection as a JSON document.
pub fn render_json(selection: &Selection) -> Result<String, TheoryError> {
    #[derive(serde::Serialize)]
    #[serde(rename_all = "camelCase")]
    struct View<'a> {
        selection: &'a Selection,
        chips: Vec<ScaleChip>,
        markers: Vec<FretMarker>,
        fretboard: Fretboard,
    }

    let fretboard = Fretboard::build(selection)?;
    let view = View {
        selection,
        chips: scale_chips(selection)?,
        markers: fretboard.markers(),
        fretboard,
    };
    serde_json::to_string_pretty(&view).map_err(|e| TheoryError::Serialization(e.to_string()))
}
