use eframe::egui::{self, RichText, Ui};
use egui_extras::{Column, TableBuilder};

use crate::state::AppState;

const ROW_HEIGHT: f32 = 18.0;

// ---------------------------------------------------------------------------
// Records table (central panel)
// ---------------------------------------------------------------------------

/// Render every record as one table row, columns in attribute order.
pub fn records_table(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open an ARFF or CSV file  (File → Open…)");
            });
            return;
        }
    };

    let n_columns = dataset.num_attributes();
    let color_map = state.color_map.as_ref();

    egui::ScrollArea::horizontal().show(ui, |ui: &mut Ui| {
        TableBuilder::new(ui)
            .striped(true)
            .resizable(true)
            .column(Column::auto())
            .columns(Column::initial(90.0).at_least(40.0).clip(true), n_columns)
            .header(ROW_HEIGHT + 2.0, |mut header| {
                header.col(|ui| {
                    ui.strong("#");
                });
                let columns = dataset.attribute_names().iter().zip(dataset.attribute_types());
                for (name, kind) in columns {
                    header.col(|ui| {
                        ui.strong(name.as_str()).on_hover_text(kind.to_string());
                    });
                }
            })
            .body(|body| {
                body.rows(ROW_HEIGHT, dataset.len(), |mut row| {
                    let index = row.index();
                    let Some(record) = dataset.record(index) else {
                        return;
                    };
                    row.col(|ui| {
                        ui.label(index.to_string());
                    });
                    for column in 0..n_columns {
                        let value = record.get_value(column).unwrap_or("");
                        row.col(|ui| {
                            let mut text = RichText::new(value);
                            if let Some(cm) = color_map.filter(|cm| cm.attribute == column) {
                                text = text.color(cm.color_for(value));
                            }
                            ui.label(text);
                        });
                    }
                });
            });
    });
}
