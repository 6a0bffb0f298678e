use std::collections::HashMap;

use eframe::egui::Color32;
use palette::Srgb;

// ---------------------------------------------------------------------------
// Categorical palette
// ---------------------------------------------------------------------------

/// The ten-colour categorical palette ("category10").
pub const CATEGORY10: [&str; 10] = [
    "#1f77b4", "#ff7f0e", "#2ca02c", "#d62728", "#9467bd",
    "#8c564b", "#e377c2", "#7f7f7f", "#bcbd22", "#17becf",
];

/// Parse [`CATEGORY10`] into egui colours.
pub fn category10() -> Vec<Color32> {
    CATEGORY10
        .iter()
        .map(|hex| {
            hex.parse::<Srgb<u8>>()
                .map(|c| Color32::from_rgb(c.red, c.green, c.blue))
                .unwrap_or(Color32::GRAY)
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Ordinal scale: value → palette slot
// ---------------------------------------------------------------------------

/// Assigns palette slots to values in first-seen order, cycling when the
/// palette runs out. Equal values always share a slot.
#[derive(Debug, Clone)]
pub struct OrdinalColorScale {
    palette: Vec<Color32>,
    slots: HashMap<u64, usize>,
}

impl OrdinalColorScale {
    pub fn new(palette: Vec<Color32>) -> Self {
        OrdinalColorScale {
            palette,
            slots: HashMap::new(),
        }
    }

    /// Palette slot for `value`, allocating one on first sight.
    /// All `NaN`s share one key.
    pub fn slot(&mut self, value: f64) -> usize {
        let key = if value.is_nan() {
            f64::NAN.to_bits()
        } else {
            // +0.0 and -0.0 are the same category
            (value + 0.0).to_bits()
        };
        let next = self.slots.len();
        *self.slots.entry(key).or_insert(next) % self.palette.len().max(1)
    }

    /// Colour of a palette slot.
    pub fn color(&self, slot: usize) -> Color32 {
        self.palette.get(slot).copied().unwrap_or(Color32::GRAY)
    }
}

impl Default for OrdinalColorScale {
    fn default() -> Self {
        Self::new(category10())
    }
}
