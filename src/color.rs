use std::collections::HashMap;

use eframe::egui::Color32;
use palette::{Hsl, IntoColor, Srgb};

// ---------------------------------------------------------------------------
// Color palette generator
// ---------------------------------------------------------------------------

/// Generates `n` visually distinct colours using evenly spaced hues.
pub fn generate_palette(n: usize) -> Vec<Color32> {
    (0..n)
        .map(|i| {
            let hue = (i as f32 / n as f32) * 360.0;
            let rgb: Srgb = Hsl::new(hue, 0.75, 0.55).into_color();
            Color32::from_rgb(
                (rgb.red * 255.0) as u8,
                (rgb.green * 255.0) as u8,
                (rgb.blue * 255.0) as u8,
            )
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Color mapping: categorical value → Color32
// ---------------------------------------------------------------------------

/// Maps the domain of one categorical attribute to distinct colours.
#[derive(Debug, Clone)]
pub struct ColorMap {
    /// Index of the attribute the map was built for.
    pub attribute: usize,
    /// Domain order is kept so the legend reads like the declaration.
    entries: Vec<(String, Color32)>,
    lookup: HashMap<String, Color32>,
    default_color: Color32,
}

impl ColorMap {
    pub fn new(attribute: usize, domain: &[String]) -> Self {
        let entries: Vec<(String, Color32)> = domain
            .iter()
            .cloned()
            .zip(generate_palette(domain.len()))
            .collect();
        let lookup = entries.iter().cloned().collect();

        ColorMap {
            attribute,
            entries,
            lookup,
            default_color: Color32::GRAY,
        }
    }

    /// Colour for a raw value; values outside the domain (e.g. `?`) are grey.
    pub fn color_for(&self, value: &str) -> Color32 {
        self.lookup
            .get(value)
            .copied()
            .unwrap_or(self.default_color)
    }

    pub fn legend_entries(&self) -> &[(String, Color32)] {
        &self.entries
    }
}
