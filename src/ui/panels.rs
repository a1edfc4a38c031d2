use eframe::egui::{self, Color32, RichText, ScrollArea, Ui};
use rusty_dataset::data::AttributeType;

use crate::state::{AppState, CentralView};

// ---------------------------------------------------------------------------
// Left side panel – dataset summary and view settings
// ---------------------------------------------------------------------------

/// Render the left panel.
pub fn side_panel(ui: &mut Ui, state: &mut AppState) {
    ui.heading("Dataset");
    ui.separator();

    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.label("No dataset loaded.");
            return;
        }
    };

    ui.label(RichText::new(dataset.name()).strong());
    ui.label(format!(
        "{} records, {} attributes",
        dataset.len(),
        dataset.num_attributes()
    ));

    // Copy what the selectors need so state can be mutated below.
    let names = dataset.attribute_names().to_vec();
    let numeric = dataset.attributes_of_type(AttributeType::Numeric);
    let categorical = dataset.attributes_of_type(AttributeType::Categorical);

    ui.separator();

    // ---- Plot settings ----
    attribute_combo(ui, "X axis", &mut state.x_attribute, &names, &numeric, false);
    attribute_combo(ui, "Y axis", &mut state.y_attribute, &names, &numeric, false);

    let mut color = state.color_attribute;
    attribute_combo(ui, "Color by", &mut color, &names, &categorical, true);
    if color != state.color_attribute {
        state.set_color_attribute(color);
    }

    if ui.button("Copy schema as JSON").clicked() {
        if let Some(json) = state.schema_json() {
            ui.ctx().copy_text(json);
        }
    }

    ui.separator();

    ScrollArea::vertical()
        .auto_shrink([false, false])
        .show(ui, |ui: &mut Ui| attribute_list(ui, state));
}

fn attribute_combo(
    ui: &mut Ui,
    label: &str,
    selected: &mut Option<usize>,
    names: &[String],
    choices: &[usize],
    allow_none: bool,
) {
    let current = selected
        .and_then(|i| names.get(i))
        .map_or("None", String::as_str)
        .to_string();

    egui::ComboBox::from_label(label)
        .selected_text(current)
        .show_ui(ui, |ui: &mut Ui| {
            if allow_none {
                ui.selectable_value(selected, None, "None");
            }
            for &i in choices {
                ui.selectable_value(selected, Some(i), names[i].as_str());
            }
        });
}

/// One collapsible entry per attribute: type plus domain or bounds.
fn attribute_list(ui: &mut Ui, state: &AppState) {
    let Some(dataset) = &state.dataset else {
        return;
    };

    for (i, name) in dataset.attribute_names().iter().enumerate() {
        let Some(kind) = dataset.attribute_type(i) else {
            continue;
        };

        egui::CollapsingHeader::new(RichText::new(format!("{name}  [{kind}]")).strong())
            .id_salt(i)
            .default_open(false)
            .show(ui, |ui: &mut Ui| match kind {
                AttributeType::Numeric => {
                    let min = dataset.min_numeric_value(i).unwrap_or(f64::NAN);
                    let max = dataset.max_numeric_value(i).unwrap_or(f64::NAN);
                    if min.is_nan() {
                        ui.label("no numeric values");
                    } else {
                        ui.label(format!("min {min}"));
                        ui.label(format!("max {max}"));
                    }
                }
                AttributeType::Categorical => {
                    let color_map = state.color_map.as_ref().filter(|cm| cm.attribute == i);
                    for value in dataset.categorical_values(i).unwrap_or_default() {
                        let mut text = RichText::new(value);
                        if let Some(cm) = color_map {
                            text = text.color(cm.color_for(value));
                        }
                        ui.label(text);
                    }
                }
            });
    }
}

// ---------------------------------------------------------------------------
// Top bar
// ---------------------------------------------------------------------------

/// Render the top menu / toolbar.
pub fn top_bar(ui: &mut Ui, state: &mut AppState) {
    egui::menu::bar(ui, |ui: &mut Ui| {
        ui.menu_button("File", |ui: &mut Ui| {
            if ui.button("Open…").clicked() {
                open_file_dialog(state);
                ui.close_menu();
            }
        });

        ui.separator();

        ui.selectable_value(&mut state.view, CentralView::Table, "Table");
        ui.selectable_value(&mut state.view, CentralView::Plot, "Plot");

        ui.separator();

        if let Some(ds) = &state.dataset {
            ui.label(format!("{}: {} records loaded", ds.name(), ds.len()));
        }

        if let Some(msg) = &state.status_message {
            ui.label(RichText::new(msg).color(Color32::RED));
        }
    });
}

// ---------------------------------------------------------------------------
// File dialog
// ---------------------------------------------------------------------------

pub fn open_file_dialog(state: &mut AppState) {
    let file = rfd::FileDialog::new()
        .set_title("Open dataset")
        .add_filter("Supported files", &["arff", "csv"])
        .add_filter("ARFF", &["arff"])
        .add_filter("CSV", &["csv"])
        .add_filter("All files", &["*"])
        .pick_file();

    if let Some(path) = file {
        state.load_path(&path);
    }
}
