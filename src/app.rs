use eframe::egui;

use crate::state::{AppState, CentralView};
use crate::ui::{panels, plot, table};

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

#[derive(Default)]
pub struct RustyDatasetApp {
    pub state: AppState,
}

impl eframe::App for RustyDatasetApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // ---- Top panel: menu bar ----
        egui::TopBottomPanel::top("top_bar").show(ctx, |ui| {
            panels::top_bar(ui, &mut self.state);
        });

        // ---- Left side panel: attributes and view settings ----
        egui::SidePanel::left("attribute_panel")
            .default_width(240.0)
            .resizable(true)
            .show(ctx, |ui| {
                panels::side_panel(ui, &mut self.state);
            });

        // ---- Central panel: records table or scatter plot ----
        egui::CentralPanel::default().show(ctx, |ui| match self.state.view {
            CentralView::Table => table::records_table(ui, &self.state),
            CentralView::Plot => plot::scatter_plot(ui, &self.state),
        });
    }
}
