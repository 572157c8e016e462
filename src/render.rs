//! Text output: scale chips and an ASCII fretboard.

use serde::Serialize;

use crate::error::TheoryError;
use crate::fretboard::{fret_marker, FretPosition, Fretboard, Marker};
use crate::notation::label_with;
use crate::scale::scale_notes;
use crate::selection::Selection;

const CELL_WIDTH: usize = 6;

/// One note of the scale as shown in the chip strip above the fretboard
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScaleChip {
    /// 1-based position in the scale
    pub degree: usize,
    pub note: &'static str,
    pub label: String,
}

/// Scale notes of a selection with their labels, in scale order.
///
/// ```
/// use fretboard::{scale_chips, NotationMode, ScaleType, Selection};
///
/// let selection = Selection::new("C", ScaleType::Major)?
///     .with_notation(NotationMode::SyllabicMovable);
/// let chips = scale_chips(&selection)?;
/// assert_eq!(chips[4].note, "G");
/// assert_eq!(chips[4].label, "Sol");
/// # Ok::<(), fretboard::TheoryError>(())
/// ```
pub fn scale_chips(selection: &Selection) -> Result<Vec<ScaleChip>, TheoryError> {
    scale_notes(selection.root(), selection.scale())?
        .into_iter()
        .enumerate()
        .map(|(index, note)| -> Result<ScaleChip, TheoryError> {
            Ok(ScaleChip {
                degree: index + 1,
                note,
                label: label_with(note, selection.root(), selection.notation(), selection.syllables())?,
            })
        })
        .collect()
}

/// Draw a fretboard as text.
///
/// In-scale positions show their label, the root in parentheses. Other positions are
/// bare string.
pub fn render_text(board: &Fretboard, chips: &[ScaleChip]) -> String {
    let mut out = String::new();

    out.push_str(&format!("{} {}\n", board.root, board.scale.display_name()));
    out.push_str(&format!("notation: {}\n\n", board.notation));

    let notes: Vec<String> = chips.iter().map(|chip| format!("{:^5}", chip.note)).collect();
    out.push_str(&notes.join(" "));
    out.push('\n');
    if chips.iter().any(|chip| chip.label != chip.note) {
        let labels: Vec<String> = chips.iter().map(|chip| format!("{:^5}", chip.label)).collect();
        out.push_str(&labels.join(" "));
        out.push('\n');
    }
    out.push('\n');

    for string in &board.strings {
        out.push_str(&format!("{:>3} |", string.open));
        for position in &string.positions {
            out.push_str(&cell(position));
            out.push('|');
        }
        out.push('\n');
    }

    out.push_str("     ");
    for fret in 1..=board.frets as u32 {
        out.push_str(&format!("{:^width$} ", fret, width = CELL_WIDTH));
    }
    out.push('\n');

    out.push_str("     ");
    for fret in 1..=board.frets as u32 {
        let marker = match fret_marker(fret) {
            Some(Marker::Single) => "*",
            Some(Marker::Double) => "**",
            None => "",
        };
        out.push_str(&format!("{:^width$} ", marker, width = CELL_WIDTH));
    }
    out.truncate(out.trim_end().len());
    out.push('\n');

    out
}

fn cell(position: &FretPosition) -> String {
    match &position.label {
        Some(label) if position.is_root => {
            format!("{:-^width$}", format!("({})", label), width = CELL_WIDTH)
        }
        Some(label) => format!("{:-^width$}", label, width = CELL_WIDTH),
        None => "-".repeat(CELL_WIDTH),
    }
}
