use std::collections::HashSet;

use csv::{ErrorKind, ReaderBuilder};

use super::error::{ParseError, Section};
use super::infer::predict_attribute_type;
use super::model::{Attribute, AttributeType, Dataset, Record};

/// Parse a complete CSV document into a dataset called `name`.
///
/// Layout: one header row with the attribute names, then one record per row.
/// Values are kept exactly as written (no trimming); quoted fields may contain
/// commas. Attribute types are inferred per column with
/// [`predict_attribute_type`], and categorical columns get the distinct values
/// in the order they first appear as their domain.
pub fn parse_csv(text: &str, name: &str) -> Result<Dataset, ParseError> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .from_reader(text.as_bytes());

    let attribute_names: Vec<String> = reader
        .headers()
        .map_err(into_parse_error)?
        .iter()
        .map(str::to_string)
        .collect();
    if attribute_names.is_empty() {
        return Err(ParseError::MalformedDocument {
            section: Section::Header,
        });
    }

    let mut records = Vec::new();
    for result in reader.records() {
        let row = result.map_err(into_parse_error)?;
        records.push(row.iter().collect::<Record>());
    }

    let attributes = attribute_names
        .into_iter()
        .enumerate()
        .map(|(i, attr_name)| {
            match predict_attribute_type(column(&records, i)) {
                AttributeType::Numeric => Attribute::numeric(attr_name),
                AttributeType::Categorical => {
                    Attribute::categorical(attr_name, distinct_values(column(&records, i)))
                }
            }
        })
        .collect::<Vec<_>>();

    log::debug!(
        "CSV {name}: {} attributes, {} records",
        attributes.len(),
        records.len()
    );

    Ok(Dataset::new(name, records, attributes))
}

fn column(records: &[Record], index: usize) -> impl Iterator<Item = &str> {
    records.iter().map(move |r| r.get_value(index).unwrap_or(""))
}

/// Distinct non-empty values in first-seen order.
fn distinct_values<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    let mut seen = HashSet::new();
    values
        .filter(|v| !v.is_empty() && seen.insert(*v))
        .map(str::to_string)
        .collect()
}

fn into_parse_error(err: csv::Error) -> ParseError {
    if let ErrorKind::UnequalLengths {
        pos,
        expected_len,
        len,
    } = err.kind()
    {
        return ParseError::RowArityMismatch {
            line: pos.as_ref().map_or(0, |p| p.line() as usize),
            expected: *expected_len as usize,
            found: *len as usize,
        };
    }
    ParseError::Csv(err)
}
