use eframe::egui::{Ui, Vec2b};
use egui_plot::{Line, Plot, PlotBounds, PlotPoints, Points};

use crate::chart::{AreaChart, Chart, ScatterChart};
use crate::data::attributes::TIME_ATTRIBUTE;
use crate::data::time::format_tick;
use crate::state::{AppState, ChartView};

// ---------------------------------------------------------------------------
// Chart panel (central panel)
// ---------------------------------------------------------------------------

/// Render the current chart in the central panel.
pub fn chart_panel(ui: &mut Ui, state: &mut AppState) {
    let generation = state.generation;
    match &mut state.chart {
        ChartView::Idle => {
            ui.centered_and_justified(|ui: &mut Ui| {
                if state.dataset.is_some() {
                    ui.heading("Pick two attributes and press Plot");
                } else {
                    ui.heading("No data");
                }
            });
        }
        ChartView::Plotted(Chart::Scatter(chart)) => scatter_plot(ui, chart, generation),
        ChartView::Plotted(Chart::Area(chart)) => area_chart(ui, chart, generation),
    }
}

// ---------------------------------------------------------------------------
// Scatter plot – fixed view, no interaction
// ---------------------------------------------------------------------------

fn scatter_plot(ui: &mut Ui, chart: &ScatterChart, generation: u64) {
    let bounds = match (chart.x_domain(), chart.y_domain()) {
        (Some((x0, x1)), Some((y0, y1))) => Some(PlotBounds::from_min_max([x0, y0], [x1, y1])),
        _ => None,
    };

    ui.label(format!("{} vs {}", chart.y_attr, chart.x_attr));
    ui.weak(format!("{} of {} rows drawn", chart.drawn_count(), chart.row_count()));

    Plot::new(("scatter_plot", generation))
        .width(ScatterChart::WIDTH)
        .height(ScatterChart::HEIGHT)
        .allow_drag(false)
        .allow_zoom(false)
        .allow_scroll(false)
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .show_x(false)
        .show_y(false)
        .show(ui, |plot_ui| {
            if let Some(bounds) = bounds {
                plot_ui.set_plot_bounds(bounds);
            }
            for (color, pts) in chart.series() {
                let points = Points::new(PlotPoints::from(pts.clone()))
                    .radius(ScatterChart::POINT_RADIUS)
                    .color(*color);
                plot_ui.points(points);
            }
        });
}

// ---------------------------------------------------------------------------
// Zoomable step-area chart – x-only pan/zoom
// ---------------------------------------------------------------------------

fn area_chart(ui: &mut Ui, chart: &mut AreaChart, generation: u64) {
    if let Some(reason) = chart.empty_reason() {
        ui.centered_and_justified(|ui: &mut Ui| {
            ui.heading(reason);
        });
        return;
    }

    let now = ui.input(|i| i.time);
    if chart.tick(now) {
        ui.ctx().request_repaint();
    }

    let (Some(zoom), Some((y0, y1))) = (chart.zoom, chart.y_domain) else {
        return;
    };
    let (x0, x1) = zoom.view();
    let span = x1 - x0;
    let animating = chart.animation.is_some();

    ui.label(format!("{} over {TIME_ATTRIBUTE}", chart.y_attr));
    ui.weak(format!("zoom {:.1}×", zoom.scale()));

    let response = Plot::new(("area_chart", generation))
        .width(AreaChart::WIDTH)
        .height(AreaChart::HEIGHT)
        .y_axis_label(AreaChart::Y_LABEL)
        .allow_drag(Vec2b::new(!animating, false))
        .allow_zoom(Vec2b::new(!animating, false))
        .allow_scroll(Vec2b::new(!animating, false))
        .allow_boxed_zoom(false)
        .allow_double_click_reset(false)
        .x_axis_formatter(move |mark, _range| format_tick(mark.value, span))
        .label_formatter(|name, value| {
            let when = format_tick(value.x, 86_400.0);
            if name.is_empty() {
                format!("{when}\n{:.3}", value.y)
            } else {
                format!("{name}\n{when}\n{:.3}", value.y)
            }
        })
        .show(ui, |plot_ui| {
            plot_ui.set_plot_bounds(PlotBounds::from_min_max([x0, y0], [x1, y1]));
            for seg in &chart.segments {
                let line = Line::new(PlotPoints::from(seg.clone()))
                    .name(&chart.y_attr)
                    .color(chart.fill)
                    .fill(0.0_f32);
                plot_ui.line(line);
            }
        });

    // Pan/zoom gestures show up as a changed window on the next frame.
    let bounds = response.transform.bounds();
    let (lo, hi) = (bounds.min()[0], bounds.max()[0]);
    if !animating && (lo != x0 || hi != x1) {
        chart.user_view(lo, hi);
        ui.ctx().request_repaint();
    }
}
