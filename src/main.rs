use std::env;
use std::fs;
use std::process;

use fretboard::{NotationMode, ScaleType, Selection, Syllables, TheoryError};
use tracing::{debug, Level};

const USAGE: &str = "Usage: fretboard [--config <selection.yaml>] [--root <note>] [--scale <scale>]
                 [--notation <mode>] [--syllables latin|hangul] [--frets <n>]
                 [--json] [--verbose]";

#[derive(Default)]
struct Args {
    config: Option<String>,
    root: Option<String>,
    scale: Option<String>,
    notation: Option<String>,
    syllables: Option<String>,
    frets: Option<String>,
    json: bool,
    verbose: bool,
}

fn parse_args(raw: &[String]) -> Result<Args, String> {
    let mut args = Args::default();
    let mut iter = raw.iter();

    while let Some(flag) = iter.next() {
        let slot = match flag.as_str() {
            "--json" => {
                args.json = true;
                continue;
            }
            "--verbose" | "-v" => {
                args.verbose = true;
                continue;
            }
            "--help" | "-h" => return Err(USAGE.to_string()),
            "--config" => &mut args.config,
            "--root" => &mut args.root,
            "--scale" => &mut args.scale,
            "--notation" => &mut args.notation,
            "--syllables" => &mut args.syllables,
            "--frets" => &mut args.frets,
            other => return Err(format!("Unknown argument '{}'\n{}", other, USAGE)),
        };
        match iter.next() {
            Some(value) => *slot = Some(value.clone()),
            None => return Err(format!("Missing value for '{}'\n{}", flag, USAGE)),
        }
    }

    Ok(args)
}

fn build_selection(args: &Args) -> Result<Selection, TheoryError> {
    let mut selection = match &args.config {
        Some(path) => {
            let content = fs::read_to_string(path).map_err(|e| {
                TheoryError::InvalidSelection(format!("cannot read '{}': {}", path, e))
            })?;
            Selection::from_yaml(&content)?
        }
        None => Selection::default(),
    };

    if let Some(root) = &args.root {
        selection = selection.with_root(root)?;
    }
    if let Some(scale) = &args.scale {
        selection = selection.with_scale(scale.parse::<ScaleType>()?);
    }
    if let Some(notation) = &args.notation {
        selection = selection.with_notation(notation.parse::<NotationMode>()?);
    }
    if let Some(syllables) = &args.syllables {
        selection = selection.with_syllables(syllables.parse::<Syllables>()?);
    }
    if let Some(frets) = &args.frets {
        let frets = frets
            .trim()
            .parse::<i64>()
            .map_err(|_| TheoryError::InvalidSelection(format!("invalid fret count: {}", frets)))?;
        selection = selection.with_frets(frets);
    }

    Ok(selection)
}

fn main() {
    let raw: Vec<String> = env::args().skip(1).collect();

    let args = match parse_args(&raw) {
        Ok(args) => args,
        Err(message) => {
            eprintln!("{}", message);
            process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(if args.verbose { Level::DEBUG } else { Level::INFO })
        .init();

    let selection = match build_selection(&args) {
        Ok(selection) => selection,
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
    debug!(?selection, "resolved selection");

    let result = if args.json {
        fretboard::render_json(&selection)
    } else {
        fretboard::render(&selection)
    };

    match result {
        Ok(output) => println!("{}", output),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(args: &[&str]) -> Vec<String> {
        args.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_parse_args_flags() {
        let args = parse_args(&strings(&["--root", "A", "--scale", "minor", "--json"])).unwrap();
        assert_eq!(args.root.as_deref(), Some("A"));
        assert_eq!(args.scale.as_deref(), Some("minor"));
        assert!(args.json);
        assert!(!args.verbose);
    }

    #[test]
    fn test_parse_args_errors() {
        assert!(parse_args(&strings(&["--root"])).is_err());
        assert!(parse_args(&strings(&["--bogus"])).is_err());
    }

    #[test]
    fn test_build_selection_from_flags() {
        let args = parse_args(&strings(&[
            "--root", "G", "--scale", "major-pentatonic", "--notation", "intervals", "--frets", "30",
        ]))
        .unwrap();
        let selection = build_selection(&args).unwrap();
        assert_eq!(selection.root(), "G");
        assert_eq!(selection.scale(), ScaleType::MajorPentatonic);
        assert_eq!(selection.notation(), NotationMode::Intervals);
        assert_eq!(selection.frets(), 22);
    }

    #[test]
    fn test_build_selection_rejects_bad_values() {
        let args = parse_args(&strings(&["--root", "H"])).unwrap();
        assert_eq!(build_selection(&args), Err(TheoryError::UnknownNote("H".to_string())));

        let args = parse_args(&strings(&["--frets", "lots"])).unwrap();
        assert!(matches!(build_selection(&args), Err(TheoryError::InvalidSelection(_))));
    }
}
