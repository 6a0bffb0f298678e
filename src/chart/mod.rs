/// Chart models: everything needed to draw a plot, computed once per
/// "Plot" click and independent of egui.
///
/// ```text
///   (x, y) selection ──► ChartKind::select ──┬─► ScatterChart
///                                             └─► AreaChart (+ ZoomView)
/// ```

pub mod area;
pub mod scale;
pub mod scatter;
pub mod zoom;

use crate::data::attributes::is_time;

pub use area::AreaChart;
pub use scatter::ScatterChart;

/// Which renderer a selection pair goes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartKind {
    /// Time on X, something else on Y: zoomable step area chart.
    TimeSeries,
    /// Every other combination, including time on both axes.
    Scatter,
}

impl ChartKind {
    pub fn select(x_attr: &str, y_attr: &str) -> Self {
        if is_time(x_attr) && !is_time(y_attr) {
            ChartKind::TimeSeries
        } else {
            ChartKind::Scatter
        }
    }
}

/// A built chart, ready for the plot panel.
#[derive(Debug, Clone)]
pub enum Chart {
    Scatter(ScatterChart),
    Area(AreaChart),
}

impl Chart {
    pub fn kind(&self) -> ChartKind {
        match self {
            Chart::Scatter(_) => ChartKind::Scatter,
            Chart::Area(_) => ChartKind::TimeSeries,
        }
    }
}
