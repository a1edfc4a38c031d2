use std::path::Path;

use anyhow::{Context, Result};

use super::arff::parse_arff;
use super::csv_reader::parse_csv;
use super::error::ParseError;
use super::model::Dataset;

// ---------------------------------------------------------------------------
// File kind – chosen by extension
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Arff,
    Csv,
    Unsupported,
}

impl FileKind {
    /// Classify a file by its final extension, ignoring case.
    pub fn from_path(path: &Path) -> Self {
        match extension_of(path).as_str() {
            "arff" => FileKind::Arff,
            "csv" => FileKind::Csv,
            _ => FileKind::Unsupported,
        }
    }
}

fn extension_of(path: &Path) -> String {
    path.extension()
        .and_then(|e| e.to_str())
        .unwrap_or("")
        .to_ascii_lowercase()
}

fn unsupported(path: &Path) -> ParseError {
    ParseError::UnsupportedFileType {
        extension: extension_of(path),
    }
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse already-loaded file contents, choosing the parser from the
/// extension of `file_name`.
///
/// * `.arff` – ARFF document; the name comes from `@relation`
/// * `.csv`  – CSV document with a header row; the name is the file stem
pub fn parse_document(file_name: &str, text: &str) -> Result<Dataset, ParseError> {
    let path = Path::new(file_name);
    match FileKind::from_path(path) {
        FileKind::Arff => parse_arff(text),
        FileKind::Csv => {
            let name = path
                .file_stem()
                .and_then(|s| s.to_str())
                .unwrap_or("");
            parse_csv(text, name)
        }
        FileKind::Unsupported => Err(unsupported(path)),
    }
}

/// Read a dataset file from disk and parse it.
///
/// Unsupported extensions are rejected before the file is opened; the
/// returned error then wraps [`ParseError::UnsupportedFileType`].
pub fn load_file(path: &Path) -> Result<Dataset> {
    if FileKind::from_path(path) == FileKind::Unsupported {
        return Err(unsupported(path).into());
    }

    let text = std::fs::read_to_string(path)
        .with_context(|| format!("reading {}", path.display()))?;
    let file_name = path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    let dataset = parse_document(file_name, &text)
        .with_context(|| format!("parsing {}", path.display()))?;

    log::info!(
        "Loaded '{}': {} records, {} attributes",
        dataset.name(),
        dataset.len(),
        dataset.num_attributes()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn kind_by_extension() {
        assert_eq!(FileKind::from_path(Path::new("iris.ARFF")), FileKind::Arff);
        assert_eq!(FileKind::from_path(Path::new("a.b.csv")), FileKind::Csv);
        assert_eq!(FileKind::from_path(Path::new("notes.txt")), FileKind::Unsupported);
        assert_eq!(FileKind::from_path(Path::new("README")), FileKind::Unsupported);
    }

    #[test]
    fn csv_name_is_the_file_stem() {
        let ds = parse_document("cars.csv", "make,mpg\nvw,30\n").unwrap();
        assert_eq!(ds.name(), "cars");
    }

    #[test]
    fn unknown_extension_is_reported() {
        match parse_document("notes.txt", "@relation r").unwrap_err() {
            ParseError::UnsupportedFileType { extension } => assert_eq!(extension, "txt"),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn load_arff_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tiny.arff");
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(file, "@relation Tiny\n@attribute a numeric\n@data\n1\n2").unwrap();
        drop(file);

        let ds = load_file(&path).unwrap();
        assert_eq!(ds.name(), "tiny");
        assert_eq!(ds.len(), 2);
    }

    #[test]
    fn load_unsupported_does_not_touch_the_file() {
        let err = load_file(Path::new("/does/not/exist.txt")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::UnsupportedFileType { .. })
        ));
    }

    #[test]
    fn load_missing_file_fails_with_context() {
        let err = load_file(Path::new("/does/not/exist.csv")).unwrap_err();
        assert!(format!("{err:#}").starts_with("reading /does/not/exist.csv"));
    }

    #[test]
    fn parse_failures_keep_the_parse_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.arff");
        std::fs::write(&path, "@relation r\n@attribute a numeric\n").unwrap();

        let err = load_file(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::MalformedDocument { .. })
        ));
    }
}
