use std::fmt;

use serde::Serialize;

use super::infer::parse_number;

// ---------------------------------------------------------------------------
// AttributeType – numeric or categorical column
// ---------------------------------------------------------------------------

/// The two kinds of attribute a dataset column can have.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AttributeType {
    Numeric,
    Categorical,
}

impl fmt::Display for AttributeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttributeType::Numeric => write!(f, "NUMERIC"),
            AttributeType::Categorical => write!(f, "CATEGORICAL"),
        }
    }
}

// ---------------------------------------------------------------------------
// Attribute – one column declaration, as produced by a parser
// ---------------------------------------------------------------------------

/// A column declaration handed to [`Dataset::new`].
#[derive(Debug, Clone, PartialEq)]
pub struct Attribute {
    pub name: String,
    pub kind: AttributeType,
    /// Allowed values; empty for numeric attributes.
    pub categorical_values: Vec<String>,
}

impl Attribute {
    pub fn numeric(name: impl Into<String>) -> Self {
        Attribute {
            name: name.into(),
            kind: AttributeType::Numeric,
            categorical_values: Vec::new(),
        }
    }

    pub fn categorical(name: impl Into<String>, values: Vec<String>) -> Self {
        Attribute {
            name: name.into(),
            kind: AttributeType::Categorical,
            categorical_values: values,
        }
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the file
// ---------------------------------------------------------------------------

/// A single row of raw attribute values, in column order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    values: Vec<String>,
}

impl Record {
    pub fn new(values: Vec<String>) -> Self {
        Record { values }
    }

    /// The raw value of the attribute at `index`, if the row has one.
    pub fn get_value(&self, index: usize) -> Option<&str> {
        self.values.get(index).map(String::as_str)
    }

    pub fn values(&self) -> &[String] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for Record {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Record::new(iter.into_iter().map(Into::into).collect())
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete parsed file
// ---------------------------------------------------------------------------

/// A parsed dataset: records plus per-attribute metadata.
///
/// All per-attribute vectors are indexed by attribute position and share the
/// same length. A dataset is built once by a parser and is read-only after
/// that.
#[derive(Debug, Clone)]
pub struct Dataset {
    name: String,
    records: Vec<Record>,
    attribute_names: Vec<String>,
    attribute_types: Vec<AttributeType>,
    categorical_values: Vec<Vec<String>>,
    /// `NaN` for categorical attributes and numeric ones without a parseable value.
    min_numeric_values: Vec<f64>,
    max_numeric_values: Vec<f64>,
}

impl Dataset {
    /// Assemble a dataset and compute the numeric bounds of every numeric
    /// attribute from the records.
    pub fn new(name: impl Into<String>, records: Vec<Record>, attributes: Vec<Attribute>) -> Self {
        let n = attributes.len();
        let mut attribute_names = Vec::with_capacity(n);
        let mut attribute_types = Vec::with_capacity(n);
        let mut categorical_values = Vec::with_capacity(n);
        for attr in attributes {
            attribute_names.push(attr.name);
            attribute_types.push(attr.kind);
            categorical_values.push(attr.categorical_values);
        }

        let (min_numeric_values, max_numeric_values) = attribute_types
            .iter()
            .enumerate()
            .map(|(i, kind)| match kind {
                AttributeType::Numeric => numeric_bounds(&records, i),
                AttributeType::Categorical => (f64::NAN, f64::NAN),
            })
            .unzip();

        Dataset {
            name: name.into(),
            records,
            attribute_names,
            attribute_types,
            categorical_values,
            min_numeric_values,
            max_numeric_values,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn record(&self, index: usize) -> Option<&Record> {
        self.records.get(index)
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn num_attributes(&self) -> usize {
        self.attribute_names.len()
    }

    pub fn attribute_names(&self) -> &[String] {
        &self.attribute_names
    }

    pub fn attribute_name(&self, index: usize) -> Option<&str> {
        self.attribute_names.get(index).map(String::as_str)
    }

    pub fn attribute_types(&self) -> &[AttributeType] {
        &self.attribute_types
    }

    pub fn attribute_type(&self, index: usize) -> Option<AttributeType> {
        self.attribute_types.get(index).copied()
    }

    /// The domain of the attribute at `index`; empty for numeric attributes.
    pub fn categorical_values(&self, index: usize) -> Option<&[String]> {
        self.categorical_values.get(index).map(Vec::as_slice)
    }

    pub fn min_numeric_value(&self, index: usize) -> Option<f64> {
        self.min_numeric_values.get(index).copied()
    }

    pub fn max_numeric_value(&self, index: usize) -> Option<f64> {
        self.max_numeric_values.get(index).copied()
    }

    /// Raw values of one attribute across all records. Rows that are too
    /// short yield `""`.
    pub fn column(&self, index: usize) -> impl Iterator<Item = &str> + '_ {
        self.records
            .iter()
            .map(move |r| r.get_value(index).unwrap_or(""))
    }

    /// Indices of all attributes of the given type, in column order.
    pub fn attributes_of_type(&self, kind: AttributeType) -> Vec<usize> {
        self.attribute_types
            .iter()
            .enumerate()
            .filter(|(_, t)| **t == kind)
            .map(|(i, _)| i)
            .collect()
    }

    /// Per-attribute summary without the records, ready for serialisation.
    pub fn schema(&self) -> Vec<AttributeSummary<'_>> {
        (0..self.num_attributes())
            .map(|i| AttributeSummary {
                name: &self.attribute_names[i],
                kind: self.attribute_types[i],
                categorical_values: &self.categorical_values[i],
                min: Some(self.min_numeric_values[i]).filter(|v| !v.is_nan()),
                max: Some(self.max_numeric_values[i]).filter(|v| !v.is_nan()),
            })
            .collect()
    }
}

/// Min and max of the values in column `index` that parse as numbers.
fn numeric_bounds(records: &[Record], index: usize) -> (f64, f64) {
    records
        .iter()
        .filter_map(|r| r.get_value(index).and_then(parse_number))
        .fold((f64::NAN, f64::NAN), |(lo, hi), v| (lo.min(v), hi.max(v)))
}

// ---------------------------------------------------------------------------
// AttributeSummary – serialisable schema entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AttributeSummary<'a> {
    pub name: &'a str,
    #[serde(rename = "type")]
    pub kind: AttributeType,
    pub categorical_values: &'a [String],
    pub min: Option<f64>,
    pub max: Option<f64>,
}
