use std::sync::mpsc::{Receiver, TryRecvError};

use anyhow::Result;

use crate::chart::{AreaChart, Chart, ChartKind, ScatterChart};
use crate::data::attributes::ATTRIBUTES;
use crate::data::model::Dataset;
use crate::data::stats::{compute_attribute_stats, Statistics};

// ---------------------------------------------------------------------------
// Application state
// ---------------------------------------------------------------------------

/// What the plot panel currently shows.
#[derive(Debug, Clone, Default)]
pub enum ChartView {
    /// Nothing plotted yet.
    #[default]
    Idle,
    Plotted(Chart),
}

/// The full UI state, independent of rendering.
pub struct AppState {
    /// Loaded dataset (None until the background load succeeds).
    pub dataset: Option<Dataset>,

    /// Pending background load, taken once it delivers.
    pending: Option<Receiver<Result<Dataset>>>,

    /// Attribute selected for the X axis.
    pub x_attr: String,

    /// Attribute selected for the Y axis.
    pub y_attr: String,

    pub x_stats: Statistics,
    pub y_stats: Statistics,

    pub chart: ChartView,

    /// Bumped on every plot so the widget forgets the previous chart.
    pub generation: u64,
}

impl Default for AppState {
    fn default() -> Self {
        Self {
            dataset: None,
            pending: None,
            x_attr: ATTRIBUTES[0].to_string(),
            y_attr: ATTRIBUTES[0].to_string(),
            x_stats: Statistics::default(),
            y_stats: Statistics::default(),
            chart: ChartView::Idle,
            generation: 0,
        }
    }
}

impl AppState {
    /// State waiting on a background load.
    pub fn loading(rx: Receiver<Result<Dataset>>) -> Self {
        Self {
            pending: Some(rx),
            ..Self::default()
        }
    }

    /// Whether the background load is still running.
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// Collect the background load result if it has arrived. A failed load
    /// is logged and leaves the state without a dataset for good.
    pub fn poll_load(&mut self) {
        let Some(rx) = &self.pending else {
            return;
        };
        match rx.try_recv() {
            Ok(Ok(dataset)) => self.set_dataset(dataset),
            Ok(Err(e)) => {
                log::error!("Error loading or parsing data: {e:#}");
                self.pending = None;
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                log::error!("Error loading or parsing data: loader exited without a result");
                self.pending = None;
            }
        }
    }

    /// Ingest a dataset directly.
    pub fn set_dataset(&mut self, dataset: Dataset) {
        self.dataset = Some(dataset);
        self.pending = None;
    }

    /// Whether the "Plot" button does anything.
    pub fn can_plot(&self) -> bool {
        self.dataset.is_some()
    }

    /// Handle a "Plot" click: replace the current chart and statistics with
    /// ones built from the selected attributes.
    pub fn plot(&mut self) {
        let Some(ds) = &self.dataset else {
            log::debug!("Plot requested before the dataset loaded");
            return;
        };
        let (x_attr, y_attr) = (self.x_attr.clone(), self.y_attr.clone());
        log::info!("Selected X attribute: {x_attr}, Y attribute: {y_attr}");

        self.chart = ChartView::Idle;
        self.generation += 1;

        self.x_stats = compute_attribute_stats(ds, &x_attr);
        self.y_stats = compute_attribute_stats(ds, &y_attr);

        let xs = ds.project_attribute(&x_attr);
        let ys = ds.project_attribute(&y_attr);
        let chart = match ChartKind::select(&x_attr, &y_attr) {
            ChartKind::TimeSeries => Chart::Area(AreaChart::new(&y_attr, &xs, &ys)),
            ChartKind::Scatter => Chart::Scatter(ScatterChart::new(&x_attr, &y_attr, xs, ys)),
        };
        log::info!("{:?} chart created for {x_attr} / {y_attr}", chart.kind());
        self.chart = ChartView::Plotted(chart);
    }
}
