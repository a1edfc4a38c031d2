//! End-to-end loading of ARFF and CSV files from disk.

use rusty_dataset::data::{load_file, AttributeType, ParseError};

const ARFF: &str = "% flowers
@relation Flowers

@attribute petal_length numeric
@attribute petal_width numeric
@attribute species {setosa, versicolor}

@data
1.4,0.2,setosa
4.7,1.4,versicolor
1.3,0.2,setosa
";

const CSV: &str = "petal_length,petal_width,species
1.4,0.2,setosa
4.7,1.4,versicolor
1.3,0.2,setosa
";

#[test]
fn both_formats_describe_the_same_table() {
    let dir = tempfile::tempdir().expect("tempdir");
    let arff_path = dir.path().join("flowers.arff");
    let csv_path = dir.path().join("Flowers.CSV");
    std::fs::write(&arff_path, ARFF).unwrap();
    std::fs::write(&csv_path, CSV).unwrap();

    let from_arff = load_file(&arff_path).unwrap();
    let from_csv = load_file(&csv_path).unwrap();

    assert_eq!(from_arff.name(), "flowers");
    assert_eq!(from_csv.name(), "Flowers");

    assert_eq!(from_arff.attribute_names(), from_csv.attribute_names());
    assert_eq!(from_arff.attribute_types(), from_csv.attribute_types());
    assert_eq!(
        from_arff.attribute_types(),
        &[
            AttributeType::Numeric,
            AttributeType::Numeric,
            AttributeType::Categorical
        ]
    );
    assert_eq!(from_arff.categorical_values(2), from_csv.categorical_values(2));
    assert_eq!(from_arff.records(), from_csv.records());
    assert_eq!(from_arff.min_numeric_value(0), Some(1.3));
    assert_eq!(from_csv.max_numeric_value(0), Some(4.7));
}

#[test]
fn unknown_extension_produces_no_dataset() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("flowers.txt");
    std::fs::write(&path, CSV).unwrap();

    let err = load_file(&path).unwrap_err();
    match err.downcast_ref::<ParseError>() {
        Some(ParseError::UnsupportedFileType { extension }) => assert_eq!(extension, "txt"),
        other => panic!("unexpected error: {other:?}"),
    }
}
