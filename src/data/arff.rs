use super::error::{ParseError, Section};
use super::model::{Attribute, Dataset, Record};

/// Type keywords (lower-case prefixes) that declare a numeric attribute.
const NUMERIC_TYPES: [&str; 3] = ["numeric", "real", "integer"];

// ---------------------------------------------------------------------------
// Options
// ---------------------------------------------------------------------------

/// What to do with a blank line inside the `@data` block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlankLines {
    /// Ignore it and keep reading records.
    #[default]
    Skip,
    /// Treat it as the end of the data block.
    Terminate,
}

#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    pub blank_lines: BlankLines,
}

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Parse a complete ARFF document with default options.
pub fn parse_arff(text: &str) -> Result<Dataset, ParseError> {
    parse_arff_with(text, &ParseOptions::default())
}

/// Parse a complete ARFF document.
///
/// The document is scanned forward once, in three stages:
/// `@relation` → contiguous `@attribute` block → `@data` block.
/// Keywords are matched case-insensitively. Every stage that runs out of
/// lines before finding its keyword fails with
/// [`ParseError::MalformedDocument`].
pub fn parse_arff_with(text: &str, options: &ParseOptions) -> Result<Dataset, ParseError> {
    // Byte-order mark left by some Windows editors.
    let text = text.strip_prefix('\u{feff}').unwrap_or(text);
    let mut lines = text
        .lines()
        .enumerate()
        .map(|(i, line)| (i + 1, line))
        .peekable();

    // ---- @relation ----
    let (_, relation) = find_section(&mut lines, Section::Relation, |l| {
        declaration(l, "@relation")
    })?;
    let name = relation_name(relation);
    log::debug!("ARFF relation: {name}");

    // ---- @attribute block ----
    let (line_no, first) = find_section(&mut lines, Section::Attribute, |l| {
        declaration(l, "@attribute")
    })?;
    let mut attributes = vec![parse_attribute(line_no, first)?];

    while let Some(&(line_no, line)) = lines.peek() {
        if let Some(rest) = declaration(line, "@attribute") {
            attributes.push(parse_attribute(line_no, rest)?);
        } else if !is_ignorable(line) {
            break;
        }
        lines.next();
    }
    log::debug!("ARFF attributes: {}", attributes.len());

    // ---- @data block ----
    find_section(&mut lines, Section::Data, data_marker)?;

    let expected = attributes.len();
    let mut records = Vec::new();
    for (line_no, line) in lines {
        let compact: String = line.chars().filter(|c| !c.is_whitespace()).collect();
        if compact.is_empty() {
            match options.blank_lines {
                BlankLines::Skip => continue,
                BlankLines::Terminate => break,
            }
        }
        if compact.starts_with('%') {
            continue;
        }

        let values: Vec<String> = compact.split(',').map(str::to_string).collect();
        if values.len() != expected {
            return Err(ParseError::RowArityMismatch {
                line: line_no,
                expected,
                found: values.len(),
            });
        }
        records.push(Record::new(values));
    }
    log::debug!("ARFF records: {}", records.len());

    Ok(Dataset::new(name, records, attributes))
}

// ---------------------------------------------------------------------------
// Line scanning helpers
// ---------------------------------------------------------------------------

/// Consume lines until `matches` accepts one; return its line number and
/// whatever `matches` extracted.
fn find_section<'a, I>(
    lines: &mut I,
    section: Section,
    mut matches: impl FnMut(&'a str) -> Option<&'a str>,
) -> Result<(usize, &'a str), ParseError>
where
    I: Iterator<Item = (usize, &'a str)>,
{
    lines
        .find_map(|(line_no, line)| matches(line).map(|rest| (line_no, rest)))
        .ok_or(ParseError::MalformedDocument { section })
}

/// Text following `keyword` when the line starts with it (any case) and the
/// keyword is followed by whitespace.
fn declaration<'a>(line: &'a str, keyword: &str) -> Option<&'a str> {
    let rest = strip_prefix_ignore_case(line.trim_start(), keyword)?;
    rest.starts_with(char::is_whitespace).then_some(rest)
}

fn data_marker(line: &str) -> Option<&str> {
    strip_prefix_ignore_case(line.trim_start(), "@data")
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    head.eq_ignore_ascii_case(prefix)
        .then(|| &s[prefix.len()..])
}

/// Blank lines and `%` comments.
fn is_ignorable(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('%')
}

fn relation_name(rest: &str) -> String {
    unquote(rest.trim()).to_lowercase()
}

fn unquote(s: &str) -> &str {
    for quote in ['\'', '"'] {
        if let Some(inner) = s
            .strip_prefix(quote)
            .and_then(|s| s.strip_suffix(quote))
        {
            return inner;
        }
    }
    s
}

// ---------------------------------------------------------------------------
// @attribute declarations
// ---------------------------------------------------------------------------

fn parse_attribute(line: usize, rest: &str) -> Result<Attribute, ParseError> {
    let decl = rest.trim();
    let (name, type_part) = split_name(decl).ok_or_else(|| unrecognised(line, decl))?;
    let type_part = type_part.trim_start();

    if let Some(body) = type_part.strip_prefix('{') {
        let close = body.find('}').ok_or_else(|| unrecognised(line, decl))?;
        // Labels are kept in their original case; whitespace carries no meaning.
        let compact: String = body[..close]
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let domain: Vec<String> = compact
            .split(',')
            .filter(|v| !v.is_empty())
            .map(str::to_string)
            .collect();
        if domain.is_empty() {
            return Err(unrecognised(line, decl));
        }
        return Ok(Attribute::categorical(name, domain));
    }

    let type_token = type_part
        .split_whitespace()
        .next()
        .unwrap_or("")
        .to_ascii_lowercase();
    if NUMERIC_TYPES.iter().any(|t| type_token.starts_with(t)) {
        Ok(Attribute::numeric(name))
    } else {
        Err(unrecognised(line, decl))
    }
}

/// Split a declaration into its name and the type text that follows.
/// The name may be quoted, in which case it can contain spaces.
fn split_name(decl: &str) -> Option<(&str, &str)> {
    let first = decl.chars().next()?;
    if first == '\'' || first == '"' {
        let end = decl[1..].find(first)? + 1;
        return Some((&decl[1..end], &decl[end + 1..]));
    }
    let end = decl.find(|c: char| c.is_whitespace() || c == '{')?;
    (end > 0).then(|| (&decl[..end], &decl[end..]))
}

fn unrecognised(line: usize, decl: &str) -> ParseError {
    ParseError::UnrecognizedAttributeType {
        line,
        declaration: decl.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::AttributeType;

    const WEATHER: &str = "\
% The weather data
@relation Weather

@attribute outlook {sunny, overcast, rainy}
@attribute temperature numeric
@attribute humidity REAL
@attribute windy { TRUE , FALSE }
@attribute play {yes,no}

@data
sunny,85,85,FALSE,no
overcast, 83, 86, FALSE, yes
% a comment row
rainy,70,96,FALSE,yes
";

    #[test]
    fn minimal_document() {
        let text = "@relation D\n@attribute a1 numeric\n@attribute a2 {x,y}\n@data\n1,x\n";
        let ds = parse_arff(text).unwrap();
        assert_eq!(ds.name(), "d");
        assert_eq!(
            ds.attribute_types(),
            &[AttributeType::Numeric, AttributeType::Categorical]
        );
        assert_eq!(ds.categorical_values(1).unwrap(), &["x", "y"]);
        assert_eq!(ds.record(0).unwrap().get_value(0), Some("1"));
        assert_eq!(ds.record(0).unwrap().get_value(1), Some("x"));
    }

    #[test]
    fn every_categorical_attribute_keeps_its_domain() {
        let ds = parse_arff(WEATHER).unwrap();
        assert_eq!(ds.name(), "weather");
        assert_eq!(ds.num_attributes(), 5);
        assert_eq!(ds.attribute_types().len(), 5);
        assert_eq!(
            ds.categorical_values(0).unwrap(),
            &["sunny", "overcast", "rainy"]
        );
        assert!(ds.categorical_values(1).unwrap().is_empty());
        assert_eq!(ds.categorical_values(3).unwrap(), &["TRUE", "FALSE"]);
        assert_eq!(ds.categorical_values(4).unwrap(), &["yes", "no"]);
    }

    #[test]
    fn data_rows_are_whitespace_stripped() {
        let ds = parse_arff(WEATHER).unwrap();
        assert_eq!(ds.len(), 3);
        assert_eq!(
            ds.record(1).unwrap().values(),
            &["overcast", "83", "86", "FALSE", "yes"]
        );
        assert_eq!(ds.min_numeric_value(1), Some(70.0));
        assert_eq!(ds.max_numeric_value(2), Some(96.0));
    }

    #[test]
    fn domain_whitespace_is_stripped() {
        let text = "@relation r\n@attribute c { x , y }\n@data\nx\n";
        let ds = parse_arff(text).unwrap();
        assert_eq!(ds.categorical_values(0).unwrap(), &["x", "y"]);
    }

    #[test]
    fn keywords_are_case_insensitive() {
        let text = "@RELATION Iris\r\n@ATTRIBUTE petal NUMERIC\r\n@DATA\r\n1.4\r\n";
        let ds = parse_arff(text).unwrap();
        assert_eq!(ds.name(), "iris");
        assert_eq!(ds.attribute_name(0), Some("petal"));
        assert_eq!(ds.record(0).unwrap().get_value(0), Some("1.4"));
    }

    #[test]
    fn leading_byte_order_mark_is_ignored() {
        let text = "\u{feff}@relation r\n@attribute a numeric\n@data\n1\n";
        let ds = parse_arff(text).unwrap();
        assert_eq!(ds.name(), "r");
        assert_eq!(ds.record(0).unwrap().get_value(0), Some("1"));
    }

    #[test]
    fn blank_and_comment_lines_inside_attribute_block() {
        let text = "@relation r\n@attribute a numeric\n\n% c\n@attribute b numeric\n@data\n1,2\n";
        let ds = parse_arff(text).unwrap();
        assert_eq!(ds.num_attributes(), 2);
        assert_eq!(ds.attribute_name(1), Some("b"));
        assert_eq!(ds.record(0).unwrap().values(), &["1", "2"]);
    }

    #[test]
    fn empty_domain_is_rejected() {
        let text = "@relation r\n@attribute a { }\n@data\n";
        assert!(matches!(
            parse_arff(text),
            Err(ParseError::UnrecognizedAttributeType { line: 2, .. })
        ));
    }

    #[test]
    fn quoted_names() {
        let text = "@relation 'My Data'\n@attribute 'petal length' integer\n@data\n3\n";
        let ds = parse_arff(text).unwrap();
        assert_eq!(ds.name(), "my data");
        assert_eq!(ds.attribute_name(0), Some("petal length"));
        assert_eq!(ds.attribute_type(0), Some(AttributeType::Numeric));
    }

    #[test]
    fn missing_data_section() {
        let text = "@relation r\n@attribute a numeric\n1\n2\n";
        let err = parse_arff(text).unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedDocument {
                section: Section::Data
            }
        ));
    }

    #[test]
    fn missing_relation_and_attribute_sections() {
        let err = parse_arff("@attribute a numeric\n@data\n1\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedDocument {
                section: Section::Relation
            }
        ));

        let err = parse_arff("@relation r\n@data\n1\n").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedDocument {
                section: Section::Attribute
            }
        ));

        assert!(parse_arff("").is_err());
    }

    #[test]
    fn unrecognised_attribute_type() {
        let text = "@relation r\n@attribute a numeric\n@attribute b string\n@data\n";
        match parse_arff(text).unwrap_err() {
            ParseError::UnrecognizedAttributeType { line, declaration } => {
                assert_eq!(line, 3);
                assert_eq!(declaration, "b string");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn unterminated_domain_is_rejected() {
        let text = "@relation r\n@attribute a {x,y\n@data\n";
        assert!(matches!(
            parse_arff(text),
            Err(ParseError::UnrecognizedAttributeType { line: 2, .. })
        ));
    }

    #[test]
    fn row_arity_is_checked() {
        let text = "@relation r\n@attribute a numeric\n@attribute b numeric\n@data\n1,2\n3\n";
        match parse_arff(text).unwrap_err() {
            ParseError::RowArityMismatch {
                line,
                expected,
                found,
            } => assert_eq!((line, expected, found), (6, 2, 1)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn blank_line_policy() {
        let text = "@relation r\n@attribute a numeric\n@data\n1\n\n2\n\n";

        let ds = parse_arff(text).unwrap();
        assert_eq!(ds.len(), 2);

        let options = ParseOptions {
            blank_lines: BlankLines::Terminate,
        };
        let ds = parse_arff_with(text, &options).unwrap();
        assert_eq!(ds.len(), 1);
        assert_eq!(ds.record(0).unwrap().get_value(0), Some("1"));
    }

    #[test]
    fn attribute_block_ends_at_first_other_line() {
        // The stray line closes the block; the later declaration is not read.
        let text = "@relation r\n@attribute a numeric\nstray\n@attribute b numeric\n@data\n1\n";
        let ds = parse_arff(text).unwrap();
        assert_eq!(ds.num_attributes(), 1);
    }
}
