use eframe::egui::Color32;

use super::scale::{display_domain, extent};
use crate::color::OrdinalColorScale;

// ---------------------------------------------------------------------------
// Scatter plot model
// ---------------------------------------------------------------------------

/// One point per row, coloured by its X value.
#[derive(Debug, Clone)]
pub struct ScatterChart {
    pub x_attr: String,
    pub y_attr: String,
    /// Projected X values, one per row (`NaN` = missing).
    pub xs: Vec<f64>,
    /// Projected Y values, one per row.
    pub ys: Vec<f64>,
    groups: Vec<(Color32, Vec<[f64; 2]>)>,
}

impl ScatterChart {
    pub const WIDTH: f32 = 800.0;
    pub const HEIGHT: f32 = 500.0;
    pub const POINT_RADIUS: f32 = 3.0;

    pub fn new(x_attr: &str, y_attr: &str, xs: Vec<f64>, ys: Vec<f64>) -> Self {
        let mut colors = OrdinalColorScale::default();
        let slots: Vec<usize> = xs.iter().map(|&x| colors.slot(x)).collect();
        let groups = group_by_color(&xs, &ys, &slots, &colors);
        ScatterChart {
            x_attr: x_attr.to_string(),
            y_attr: y_attr.to_string(),
            xs,
            ys,
            groups,
        }
    }

    /// Number of data slots (rows), drawable or not.
    pub fn row_count(&self) -> usize {
        self.xs.len()
    }

    /// Number of points that have both coordinates.
    pub fn drawn_count(&self) -> usize {
        self.groups.iter().map(|(_, pts)| pts.len()).sum()
    }

    /// X axis domain, widened when degenerate.
    pub fn x_domain(&self) -> Option<(f64, f64)> {
        extent(&self.xs).map(|(lo, hi)| display_domain(lo, hi))
    }

    /// Y axis domain, widened when degenerate.
    pub fn y_domain(&self) -> Option<(f64, f64)> {
        extent(&self.ys).map(|(lo, hi)| display_domain(lo, hi))
    }

    /// Drawable points grouped by colour.
    pub fn series(&self) -> &[(Color32, Vec<[f64; 2]>)] {
        &self.groups
    }
}

/// Rows with a missing coordinate keep their slot in `xs`/`ys` but have no
/// position, so they are left out here.
fn group_by_color(
    xs: &[f64],
    ys: &[f64],
    slots: &[usize],
    colors: &OrdinalColorScale,
) -> Vec<(Color32, Vec<[f64; 2]>)> {
    let mut groups: Vec<Vec<[f64; 2]>> = Vec::new();
    for ((&x, &y), &slot) in xs.iter().zip(ys).zip(slots) {
        if x.is_nan() || y.is_nan() {
            continue;
        }
        if groups.len() <= slot {
            groups.resize_with(slot + 1, Vec::new);
        }
        groups[slot].push([x, y]);
    }
    groups
        .into_iter()
        .enumerate()
        .filter(|(_, pts)| !pts.is_empty())
        .map(|(slot, pts)| (colors.color(slot), pts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::category10;

    #[test]
    fn domains_follow_extent() {
        let chart = ScatterChart::new("a", "b", vec![1.0, f64::NAN, 5.0], vec![2.0, 2.0, 2.0]);
        assert_eq!(chart.x_domain(), Some((1.0, 5.0)));
        assert_eq!(chart.y_domain(), Some((1.5, 2.5)));
    }

    #[test]
    fn missing_rows_keep_their_slot() {
        let chart = ScatterChart::new(
            "temperature",
            "summary",
            vec![36.1, 35.9, 36.1],
            vec![f64::NAN, f64::NAN, f64::NAN],
        );
        assert_eq!(chart.row_count(), 3);
        assert!(chart.series().is_empty());
        assert_eq!(chart.drawn_count(), 0);
        assert_eq!(chart.y_domain(), None);
    }

    #[test]
    fn points_grouped_by_x_value() {
        let chart = ScatterChart::new(
            "x",
            "y",
            vec![1.0, 2.0, 1.0, 3.0],
            vec![10.0, 20.0, 30.0, f64::NAN],
        );
        let palette = category10();
        let series = chart.series();
        assert_eq!(series.len(), 2);
        assert_eq!(series[0], (palette[0], vec![[1.0, 10.0], [1.0, 30.0]]));
        assert_eq!(series[1], (palette[1], vec![[2.0, 20.0]]));
        assert_eq!(chart.drawn_count(), 3);
        assert_eq!(chart.row_count(), 4);
    }
}
