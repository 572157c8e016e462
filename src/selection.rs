//! # Selection
//!
//! The user's current choices (root note, scale, notation, fret count) as one
//! immutable value. Presentation layers own the current `Selection` and replace it
//! when the user picks something else; the theory functions never hold state.
//!
//! ## YAML
//! A selection can be read from a kebab-case YAML document. Every key is optional:
//!
//! ```yaml
//! root: A
//! scale: minor-pentatonic
//! notation: intervals
//! syllables: latin
//! frets: 12
//! ```

use serde::{Deserialize, Serialize};

use crate::error::TheoryError;
use crate::fretboard::{clamp_fret_count, DEFAULT_FRETS};
use crate::notation::{NotationMode, Syllables};
use crate::pitch::pitch_class_of;
use crate::scale::ScaleType;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Selection {
    root: String,
    scale: ScaleType,
    notation: NotationMode,
    syllables: Syllables,
    frets: u8,
}

/// Raw selection for YAML deserialization
#[derive(Deserialize, Debug, Default)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct RawSelection {
    pub root: Option<String>,
    pub scale: Option<String>,
    pub notation: Option<String>,
    pub syllables: Option<String>,
    pub frets: Option<i64>,
}

impl Default for Selection {
    fn default() -> Self {
        Self {
            root: "C".to_string(),
            scale: ScaleType::Major,
            notation: NotationMode::Alphabetical,
            syllables: Syllables::Latin,
            frets: DEFAULT_FRETS,
        }
    }
}

impl Selection {
    /// Start a selection on `root`, with default notation and fret count.
    ///
    /// # Errors
    /// Returns [`TheoryError::UnknownNote`] if `root` is not a known note name.
    pub fn new(root: &str, scale: ScaleType) -> Result<Self, TheoryError> {
        pitch_class_of(root)?;
        Ok(Self {
            root: root.to_string(),
            scale,
            ..Self::default()
        })
    }

    /// Parse a YAML selection document.
    ///
    /// ```
    /// use fretboard::{NotationMode, ScaleType, Selection};
    ///
    /// let err = Selection::from_yaml("root: A\nframes: 12").unwrap_err();
    /// assert!(err.to_string().starts_with("Invalid selection"));
    ///
    /// let selection = Selection::from_yaml("root: A\nscale: minor-pentatonic\nnotation: intervals")?;
    /// assert_eq!(selection.scale(), ScaleType::MinorPentatonic);
    /// assert_eq!(selection.notation(), NotationMode::Intervals);
    /// assert_eq!(selection.frets(), 17);
    /// # Ok::<(), fretboard::TheoryError>(())
    /// ```
    pub fn from_yaml(content: &str) -> Result<Self, TheoryError> {
        // An empty document deserializes as unit, not as an empty map.
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let raw: RawSelection = serde_yaml::from_str(content)
            .map_err(|e| TheoryError::InvalidSelection(e.to_string()))?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawSelection) -> Result<Self, TheoryError> {
        let defaults = Self::default();

        let root = match raw.root {
            Some(root) => {
                let root = root.trim().to_string();
                pitch_class_of(&root)?;
                root
            }
            None => defaults.root,
        };

        let scale = match raw.scale {
            Some(ref s) => s.parse()?,
            None => defaults.scale,
        };

        let notation = match raw.notation {
            Some(ref s) => s.parse()?,
            None => defaults.notation,
        };

        let syllables = match raw.syllables {
            Some(ref s) => s.parse()?,
            None => defaults.syllables,
        };

        let frets = raw.frets.map(clamp_fret_count).unwrap_or(defaults.frets);

        Ok(Self { root, scale, notation, syllables, frets })
    }

    pub fn root(&self) -> &str {
        &self.root
    }

    pub fn scale(&self) -> ScaleType {
        self.scale
    }

    pub fn notation(&self) -> NotationMode {
        self.notation
    }

    pub fn syllables(&self) -> Syllables {
        self.syllables
    }

    pub fn frets(&self) -> u8 {
        self.frets
    }

    /// Same selection on a different root
    pub fn with_root(self, root: &str) -> Result<Self, TheoryError> {
        pitch_class_of(root)?;
        Ok(Self { root: root.to_string(), ..self })
    }

    pub fn with_scale(self, scale: ScaleType) -> Self {
        Self { scale, ..self }
    }

    pub fn with_notation(self, notation: NotationMode) -> Self {
        Self { notation, ..self }
    }

    pub fn with_syllables(self, syllables: Syllables) -> Self {
        Self { syllables, ..self }
    }

    /// Fret count, clamped into the supported range
    pub fn with_frets(self, frets: i64) -> Self {
        Self { frets: clamp_fret_count(frets), ..self }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fretboard::{MAX_FRETS, MIN_FRETS};

    #[test]
    fn test_default_selection() {
        let selection = Selection::default();
        assert_eq!(selection.root(), "C");
        assert_eq!(selection.scale(), ScaleType::Major);
        assert_eq!(selection.notation(), NotationMode::Alphabetical);
        assert_eq!(selection.syllables(), Syllables::Latin);
        assert_eq!(selection.frets(), 17);
    }

    #[test]
    fn test_new_rejects_unknown_root() {
        assert_eq!(
            Selection::new("H", ScaleType::Major),
            Err(TheoryError::UnknownNote("H".to_string()))
        );
    }

    #[test]
    fn test_builders_do_not_share_state() {
        let base = Selection::new("E", ScaleType::Minor).unwrap();
        let changed = base.clone().with_frets(30).with_notation(NotationMode::SyllabicMovable);
        assert_eq!(base.frets(), 17);
        assert_eq!(base.notation(), NotationMode::Alphabetical);
        assert_eq!(changed.frets(), MAX_FRETS);
        assert_eq!(changed.notation(), NotationMode::SyllabicMovable);
        assert_eq!(changed.root(), "E");
    }

    #[test]
    fn test_with_root() {
        let selection = Selection::default().with_root("F#").unwrap();
        assert_eq!(selection.root(), "F#");
        assert!(Selection::default().with_root("F##").is_err());
    }

    #[test]
    fn test_from_yaml_full() {
        let yaml = r#"
root: D
scale: minor
notation: syllabic-fixed
syllables: hangul
frets: 3
"#;
        let selection = Selection::from_yaml(yaml).unwrap();
        assert_eq!(selection.root(), "D");
        assert_eq!(selection.scale(), ScaleType::Minor);
        assert_eq!(selection.notation(), NotationMode::SyllabicFixed);
        assert_eq!(selection.syllables(), Syllables::Hangul);
        assert_eq!(selection.frets(), MIN_FRETS);
    }

    #[test]
    fn test_from_yaml_empty() {
        assert_eq!(Selection::from_yaml("").unwrap(), Selection::default());
        assert_eq!(Selection::from_yaml("{}").unwrap(), Selection::default());
    }

    #[test]
    fn test_from_yaml_errors() {
        assert!(matches!(
            Selection::from_yaml("scale: lydian"),
            Err(TheoryError::InvalidSelection(_))
        ));
        assert!(matches!(
            Selection::from_yaml("notation: syllabic"),
            Err(TheoryError::InvalidSelection(_))
        ));
        assert!(matches!(
            Selection::from_yaml("frets: many"),
            Err(TheoryError::InvalidSelection(_))
        ));
        assert_eq!(
            Selection::from_yaml("root: H"),
            Err(TheoryError::UnknownNote("H".to_string()))
        );
    }
}
