//! Data layer: core types, parsing and file loading.
//!
//! Architecture:
//! ```text
//!   .arff / .csv
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader  │  pick parser by extension
//!   └──────────┘
//!     │      │
//!     ▼      ▼
//!  ┌──────┐ ┌────────────┐
//!  │ arff │ │ csv_reader │──▶ infer (numeric vs categorical)
//!  └──────┘ └────────────┘
//!        │
//!        ▼
//!   ┌─────────┐
//!   │ Dataset │  records + attribute names, types, domains, bounds
//!   └─────────┘
//! ```

pub mod arff;
pub mod csv_reader;
pub mod error;
pub mod infer;
pub mod loader;
pub mod model;

pub use arff::{parse_arff, parse_arff_with, BlankLines, ParseOptions};
pub use csv_reader::parse_csv;
pub use error::{ParseError, Section};
pub use infer::predict_attribute_type;
pub use loader::{load_file, parse_document, FileKind};
pub use model::{Attribute, AttributeType, Dataset, Record};
