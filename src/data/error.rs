use std::fmt;

// ---------------------------------------------------------------------------
// Section – a required part of a dataset document
// ---------------------------------------------------------------------------

/// The document sections a parser has to find before it can build a dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Relation,
    Attribute,
    Data,
    /// CSV header row.
    Header,
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Section::Relation => write!(f, "@relation"),
            Section::Attribute => write!(f, "@attribute"),
            Section::Data => write!(f, "@data"),
            Section::Header => write!(f, "header row"),
        }
    }
}

// ---------------------------------------------------------------------------
// ParseError
// ---------------------------------------------------------------------------

/// Everything that can go wrong while turning dataset text into a
/// [`Dataset`](super::model::Dataset).
///
/// Line numbers are 1-based.
#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    /// A required section was never found before the end of input.
    #[error("malformed document: no {section} section found")]
    MalformedDocument { section: Section },

    /// An `@attribute` line whose type is neither numeric nor a `{...}` domain.
    #[error("line {line}: unrecognised attribute type in `{declaration}`")]
    UnrecognizedAttributeType { line: usize, declaration: String },

    /// File extension is neither `.arff` nor `.csv`.
    #[error("filetype not recognised: {extension:?}")]
    UnsupportedFileType { extension: String },

    /// A data row with a different number of values than there are attributes.
    #[error("line {line}: expected {expected} values but found {found}")]
    RowArityMismatch {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("CSV reader: {0}")]
    Csv(#[from] csv::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_problem() {
        let err = ParseError::MalformedDocument {
            section: Section::Data,
        };
        assert_eq!(err.to_string(), "malformed document: no @data section found");

        let err = ParseError::RowArityMismatch {
            line: 7,
            expected: 3,
            found: 2,
        };
        assert_eq!(err.to_string(), "line 7: expected 3 values but found 2");

        let err = ParseError::UnsupportedFileType {
            extension: "txt".into(),
        };
        assert_eq!(err.to_string(), "filetype not recognised: \"txt\"");
    }
}
