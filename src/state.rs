use std::path::Path;

use rusty_dataset::data::{load_file, AttributeType, Dataset, ParseError};

use crate::color::ColorMap;

/// Shown when the user picks a file that is neither ARFF nor CSV.
pub const UNSUPPORTED_MESSAGE: &str = "Filetype not recognised.";

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// What the central panel shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CentralView {
    #[default]
    Table,
    Plot,
}

/// The full UI state, independent of rendering.
#[derive(Default)]
pub struct AppState {
    /// Loaded dataset (None until user loads a file).
    pub dataset: Option<Dataset>,

    pub view: CentralView,

    /// Numeric attributes on the scatter plot axes.
    pub x_attribute: Option<usize>,
    pub y_attribute: Option<usize>,

    /// Categorical attribute used for colouring.
    pub color_attribute: Option<usize>,

    /// Active colour map.
    pub color_map: Option<ColorMap>,

    /// Status / error message shown in the UI.
    pub status_message: Option<String>,
}

impl AppState {
    /// Ingest a newly loaded dataset and pick default plot axes and colour.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        let numeric = dataset.attributes_of_type(AttributeType::Numeric);
        self.x_attribute = numeric.first().copied();
        self.y_attribute = numeric.get(1).or(numeric.first()).copied();

        // The class attribute is conventionally the last categorical one.
        self.color_attribute = dataset
            .attributes_of_type(AttributeType::Categorical)
            .last()
            .copied();

        self.dataset = Some(dataset);
        self.rebuild_color_map();
        self.status_message = None;
    }

    /// Rebuild the colour map from the current `color_attribute`.
    pub fn rebuild_color_map(&mut self) {
        self.color_map = match (&self.dataset, self.color_attribute) {
            (Some(ds), Some(index)) => ds
                .categorical_values(index)
                .map(|domain| ColorMap::new(index, domain)),
            _ => None,
        };
    }

    pub fn set_color_attribute(&mut self, index: Option<usize>) {
        self.color_attribute = index;
        self.rebuild_color_map();
    }

    /// Load a file picked by the user. Failures end up in `status_message`.
    pub fn load_path(&mut self, path: &Path) {
        match load_file(path) {
            Ok(dataset) => {
                log::info!(
                    "Loaded {} records with attributes {:?}",
                    dataset.len(),
                    dataset.attribute_names()
                );
                self.set_dataset(dataset);
            }
            Err(e) => self.report_load_error(&e),
        }
    }

    pub fn report_load_error(&mut self, err: &anyhow::Error) {
        let unsupported = matches!(
            err.downcast_ref::<ParseError>(),
            Some(ParseError::UnsupportedFileType { .. })
        );
        if unsupported {
            log::warn!("{err}");
            self.status_message = Some(UNSUPPORTED_MESSAGE.to_string());
        } else {
            log::error!("Failed to load file: {err:#}");
            self.status_message = Some(format!("Error: {err:#}"));
        }
    }

    /// The loaded dataset's schema as pretty JSON.
    pub fn schema_json(&self) -> Option<String> {
        let ds = self.dataset.as_ref()?;
        serde_json::to_string_pretty(&ds.schema())
            .map_err(|e| log::error!("Serialising schema: {e}"))
            .ok()
    }
}
