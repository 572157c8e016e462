//! # Error Types
//!
//! All fallible operations in this crate return [`TheoryError`].
//!
//! ## Error Types
//! - `UnknownNote` - A note name that is in neither the sharp nor the flat spelling table
//! - `InvalidSelection` - A selection value (config file or CLI flag) that cannot be understood
//! - `Serialization` - The JSON view of a fretboard could not be encoded
//!
//! The theory operations themselves only ever produce `UnknownNote`. `InvalidSelection`
//! comes from reading user configuration, `Serialization` from `render_json`.
//!
//! ## Usage
//! ```rust
//! use fretboard::{pitch_class_of, TheoryError};
//!
//! match pitch_class_of("H") {
//!     Ok(pc) => println!("pitch class {}", pc),
//!     Err(TheoryError::UnknownNote(name)) => eprintln!("no such note: {}", name),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TheoryError {
    /// Note name not present in either spelling table.
    ///
    /// # Example
    /// ```
    /// # use fretboard::TheoryError;
    /// let err = TheoryError::UnknownNote("C##".to_string());
    /// assert_eq!(err.to_string(), "Unknown note name: 'C##'");
    /// ```
    #[error("Unknown note name: '{0}'")]
    UnknownNote(String),

    /// Invalid selection value.
    ///
    /// Occurs when a YAML selection file or a command line flag names a scale,
    /// notation mode or fret count that does not exist.
    ///
    /// # Example
    /// ```
    /// # use fretboard::TheoryError;
    /// let err = TheoryError::InvalidSelection("unknown scale type: dorian".to_string());
    /// assert_eq!(err.to_string(), "Invalid selection: unknown scale type: dorian");
    /// ```
    #[error("Invalid selection: {0}")]
    InvalidSelection(String),

    /// Fretboard view could not be encoded as JSON.
    ///
    /// # Example
    /// ```
    /// # use fretboard::TheoryError;
    /// let err = TheoryError::Serialization("key must be a string".to_string());
    /// assert_eq!(err.to_string(), "Failed to serialize fretboard view: key must be a string");
    /// ```
    #[error("Failed to serialize fretboard view: {0}")]
    Serialization(String),
}
