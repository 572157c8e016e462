//! Integration tests for the fretboard theory engine
//!
//! Exercises the public API the way a presentation layer would.

use ::fretboard::*;

#[test]
fn test_every_scale_starts_on_root() {
    for root in SHARP_NAMES {
        for scale in ScaleType::ALL {
            let notes = scale_notes(root, scale).unwrap();
            assert_eq!(notes.len(), scale.intervals().len());
            assert_eq!(pitch_class_of(notes[0]).unwrap(), pitch_class_of(root).unwrap());
        }
    }
}

#[test]
fn test_enharmonic_round_trip() {
    for pc in PitchClass::all() {
        assert_eq!(pitch_class_of(spell(pc, Spelling::Sharp)).unwrap(), pc);
        assert_eq!(pitch_class_of(spell(pc, Spelling::Flat)).unwrap(), pc);
    }
}

#[test]
fn test_c_major_scenario() {
    let notes = scale_notes("C", ScaleType::Major).unwrap();
    assert_eq!(notes, vec!["C", "D", "E", "F", "G", "A", "B"]);

    let g = note_from_fret("E", 3, false).unwrap();
    assert_eq!(g, "G");
    assert!(is_in_scale(g, &notes).unwrap());
    assert!(!is_root(g, "C").unwrap());
}

#[test]
fn test_a_minor_pentatonic_scenario() {
    let notes = scale_notes("A", ScaleType::MinorPentatonic).unwrap();
    let pcs: Vec<u8> = notes.iter().map(|n| pitch_class_of(n).unwrap().value()).collect();
    assert_eq!(pcs, vec![9, 0, 2, 4, 7]);
    assert_eq!(notes, vec!["A", "C", "D", "E", "G"]);
}

#[test]
fn test_membership_ignores_spelling() {
    let notes = scale_notes("C", ScaleType::Minor).unwrap();
    assert!(notes.contains(&"Eb"));
    assert!(is_in_scale("D#", &notes).unwrap());
}

#[test]
fn test_interval_labels() {
    assert_eq!(label_for("G", "C", NotationMode::Intervals).unwrap(), "5");
    assert_eq!(label_for("Db", "C", NotationMode::Intervals).unwrap(), "b2");
}

#[test]
fn test_fixed_solfege_independent_of_root() {
    let labels: Vec<String> = SHARP_NAMES
        .iter()
        .map(|root| label_for("F#", root, NotationMode::SyllabicFixed).unwrap())
        .collect();
    assert!(labels.iter().all(|l| l == &labels[0]));
}

#[test]
fn test_octave_equivalence_on_standard_tuning() {
    for open in STANDARD_TUNING {
        for fret in 0..=MAX_FRETS as u32 {
            assert_eq!(
                note_from_fret(open, fret, true).unwrap(),
                note_from_fret(open, fret + 12, true).unwrap()
            );
        }
    }
}

#[test]
fn test_fret_bound_only_by_u32() {
    assert_eq!(note_from_fret("E", u32::MAX, false).unwrap(), "G");
    assert_eq!(note_from_fret("A", u32::MAX - 2, true).unwrap(), "Bb");
}

#[test]
fn test_unknown_note_error() {
    for bad in ["H", "Cb2", ""] {
        assert_eq!(pitch_class_of(bad), Err(TheoryError::UnknownNote(bad.to_string())));
        assert!(scale_notes(bad, ScaleType::Major).is_err());
        assert!(note_from_fret(bad, 1, false).is_err());
    }
}

#[test]
fn test_fretboard_matches_free_functions() {
    let selection = Selection::new("E", ScaleType::Minor)
        .unwrap()
        .with_notation(NotationMode::SyllabicMovable)
        .with_frets(DEFAULT_FRETS as i64);
    let board = Fretboard::build(&selection).unwrap();
    let notes = scale_notes("E", ScaleType::Minor).unwrap();

    for (string, open) in board.strings.iter().zip(STANDARD_TUNING) {
        assert_eq!(string.open, open);
        for position in &string.positions {
            assert_eq!(position.note, note_from_fret(open, position.fret, true).unwrap());
            assert_eq!(position.in_scale, is_in_scale(position.note, &notes).unwrap());
            assert_eq!(position.is_root, is_root(position.note, "E").unwrap());
            if position.in_scale {
                let expected = label_for(position.note, "E", NotationMode::SyllabicMovable).unwrap();
                assert_eq!(position.label.as_deref(), Some(expected.as_str()));
            }
        }
    }
}

#[test]
fn test_render_from_yaml() {
    let selection = Selection::from_yaml(
        r#"
root: G
scale: major
notation: intervals
frets: 12
"#,
    )
    .unwrap();
    let text = render(&selection).unwrap();
    assert!(text.starts_with("G Major\n"));
    assert!(text.contains("notation: intervals"));
    // Chip labels differ from note names, so both rows are present.
    assert!(text.contains("  1  "));
    assert!(text.contains("(1)"));
}

#[test]
fn test_render_json_shape() {
    let selection = Selection::new("A", ScaleType::MinorPentatonic).unwrap().with_frets(5);
    let json = render_json(&selection).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["selection"]["root"], "A");
    assert_eq!(value["selection"]["scale"], "minor-pentatonic");
    assert_eq!(value["chips"].as_array().unwrap().len(), 5);
    assert_eq!(value["fretboard"]["strings"].as_array().unwrap().len(), 6);
    assert_eq!(value["markers"][0]["fret"], 3);

    // Low E, fret 5 is the root A.
    let position = &value["fretboard"]["strings"][5]["positions"][4];
    assert_eq!(position["note"], "A");
    assert_eq!(position["isRoot"], true);
    assert_eq!(position["inScale"], true);
}

#[test]
fn test_playback_pitch_for_highlighted_positions() {
    let selection = Selection::new("D", ScaleType::Major).unwrap();
    let board = Fretboard::build(&selection).unwrap();
    for (_, position) in board.highlighted() {
        let pitch = playback_pitch(position.note).unwrap();
        assert_eq!(pitch, format!("{}4", position.note));
    }
}
