use eframe::egui::{Color32, Ui};
use egui_plot::{Legend, Plot, PlotPoints, Points};
use rusty_dataset::data::infer::parse_number;
use rusty_dataset::data::Dataset;

use crate::color::ColorMap;
use crate::state::AppState;

/// Points sharing one colour (one categorical value, or everything else).
#[derive(Debug, Clone, PartialEq)]
pub struct PointGroup {
    pub name: String,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// Split the records into coloured point groups for attributes `x` / `y`.
///
/// Records where either value is not a number are left out. With a colour
/// map, one group per domain value is returned in domain order, followed by
/// an "other" group for values outside the domain.
pub fn point_groups(
    dataset: &Dataset,
    x: usize,
    y: usize,
    color_map: Option<&ColorMap>,
) -> Vec<PointGroup> {
    let mut groups: Vec<PointGroup> = color_map
        .map(|cm| {
            cm.legend_entries()
                .iter()
                .map(|(value, color)| PointGroup {
                    name: value.clone(),
                    color: *color,
                    points: Vec::new(),
                })
                .collect()
        })
        .unwrap_or_default();
    let mut rest = PointGroup {
        name: (if color_map.is_some() { "other" } else { "records" }).to_string(),
        color: Color32::LIGHT_BLUE,
        points: Vec::new(),
    };

    for record in dataset.records() {
        let px = record.get_value(x).and_then(parse_number);
        let py = record.get_value(y).and_then(parse_number);
        let (Some(px), Some(py)) = (px, py) else {
            continue;
        };

        let group = color_map
            .and_then(|cm| record.get_value(cm.attribute))
            .and_then(|value| groups.iter().position(|g| g.name == value));
        match group {
            Some(i) => groups[i].points.push([px, py]),
            None => rest.points.push([px, py]),
        }
    }

    groups.push(rest);
    groups.retain(|g| !g.points.is_empty());
    groups
}

// ---------------------------------------------------------------------------
// Scatter plot (central panel)
// ---------------------------------------------------------------------------

/// Render a scatter plot of the two selected numeric attributes.
pub fn scatter_plot(ui: &mut Ui, state: &AppState) {
    let dataset = match &state.dataset {
        Some(ds) => ds,
        None => {
            ui.centered_and_justified(|ui: &mut Ui| {
                ui.heading("Open an ARFF or CSV file  (File → Open…)");
            });
            return;
        }
    };

    let (Some(x), Some(y)) = (state.x_attribute, state.y_attribute) else {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading("No numeric attributes to plot");
        });
        return;
    };

    let groups = point_groups(dataset, x, y, state.color_map.as_ref());

    Plot::new("scatter_plot")
        .legend(Legend::default())
        .x_axis_label(dataset.attribute_name(x).unwrap_or_default())
        .y_axis_label(dataset.attribute_name(y).unwrap_or_default())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
        .show(ui, |plot_ui| {
            for group in groups {
                let points = Points::new(PlotPoints::from(group.points))
                    .name(&group.name)
                    .color(group.color)
                    .radius(3.0);
                plot_ui.points(points);
            }
        });
}
