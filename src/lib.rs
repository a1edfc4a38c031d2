//! ARFF and CSV dataset parsing.
//!
//! The [`data`] module turns the text of an ARFF or CSV file into a
//! [`data::Dataset`]: attribute names and types, categorical domains,
//! numeric bounds and the raw records.

pub mod data;
