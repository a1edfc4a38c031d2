//! Attribute type inference for sources that carry no type declarations.

use super::model::AttributeType;

/// Parse a raw value as a number.
///
/// Surrounding whitespace is ignored, but the value must contain at least one
/// ASCII digit, so blank strings and words like `inf` or `NaN` are not numbers.
pub fn parse_number(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if !trimmed.bytes().any(|b| b.is_ascii_digit()) {
        return None;
    }
    trimmed.parse::<f64>().ok()
}

pub fn looks_numeric(value: &str) -> bool {
    parse_number(value).is_some()
}

/// Predict whether an attribute is numeric or categorical from its observed
/// values by majority vote.
///
/// Values are scanned in order up to the end of input or the first empty
/// value. The attribute is [`AttributeType::Numeric`] only when strictly more
/// values look numeric than not; a tie is categorical.
pub fn predict_attribute_type<I, S>(values: I) -> AttributeType
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut numeric = 0usize;
    let mut categorical = 0usize;

    for value in values {
        let value = value.as_ref();
        if value.is_empty() {
            break;
        }
        if looks_numeric(value) {
            numeric += 1;
        } else {
            categorical += 1;
        }
    }

    log::trace!("type vote: {numeric} numeric / {categorical} categorical");

    if numeric > categorical {
        AttributeType::Numeric
    } else {
        AttributeType::Categorical
    }
}
