use eframe::egui::Color32;

use super::scale::{display_domain, extent, max, nice};
use super::zoom::{initial_zoom, ZoomAnimation, ZoomView};
use crate::color::category10;
use crate::data::attributes::TIME_ATTRIBUTE;

// ---------------------------------------------------------------------------
// Zoomable step-area chart model
// ---------------------------------------------------------------------------

/// Time on X (Unix seconds), one numeric attribute on Y, drawn as a filled
/// step-after area from zero.
#[derive(Debug, Clone)]
pub struct AreaChart {
    pub y_attr: String,
    /// Contiguous staircase polylines; a missing sample breaks the area.
    pub segments: Vec<Vec<[f64; 2]>>,
    /// `[0, nice(max)]`, `None` when Y has no numeric value.
    pub y_domain: Option<(f64, f64)>,
    pub fill: Color32,
    /// `None` when the time column has no usable value.
    pub zoom: Option<ZoomView>,
    /// Initial transition, dropped once finished.
    pub animation: Option<ZoomAnimation>,
}

impl AreaChart {
    pub const WIDTH: f32 = 928.0;
    pub const HEIGHT: f32 = 500.0;
    pub const Y_LABEL: &'static str = "Value";

    pub fn new(y_attr: &str, times: &[f64], ys: &[f64]) -> Self {
        let y_domain = max(ys).map(|hi| {
            let (lo, hi) = nice(0.0, hi, 10);
            display_domain(lo, hi)
        });
        let (zoom, animation) = match extent(times) {
            Some((lo, hi)) => {
                let (view, anim) = initial_zoom(display_domain(lo, hi));
                (Some(view), Some(anim))
            }
            None => (None, None),
        };
        AreaChart {
            y_attr: y_attr.to_string(),
            segments: step_after_segments(times, ys),
            y_domain,
            fill: category10()[0],
            zoom,
            animation,
        }
    }

    /// Why there is nothing to fill, if so.
    pub fn empty_reason(&self) -> Option<String> {
        if self.y_domain.is_none() {
            Some(format!("'{}' has no numeric values to plot over time", self.y_attr))
        } else if self.zoom.is_none() {
            Some(format!("'{TIME_ATTRIBUTE}' has no readable timestamps"))
        } else {
            None
        }
    }

    /// Advance the initial transition to clock time `now`. Returns whether
    /// another frame is needed.
    pub fn tick(&mut self, now: f64) -> bool {
        let (Some(zoom), Some(anim)) = (self.zoom.as_mut(), self.animation.as_mut()) else {
            return false;
        };
        let ((lo, hi), done) = anim.sample(now);
        zoom.set_view(lo, hi);
        if done {
            self.animation = None;
        }
        !done
    }

    /// Apply a window produced by user pan/zoom. Ignored while the initial
    /// transition is running.
    pub fn user_view(&mut self, lo: f64, hi: f64) {
        if self.animation.is_some() {
            return;
        }
        if let Some(zoom) = self.zoom.as_mut() {
            zoom.set_view(lo, hi);
        }
    }
}

/// Staircase polylines holding each value until the next sample.
/// Rows with a missing time or value split the line.
pub fn step_after_segments(xs: &[f64], ys: &[f64]) -> Vec<Vec<[f64; 2]>> {
    let mut segments = Vec::new();
    let mut current: Vec<[f64; 2]> = Vec::new();
    for (&x, &y) in xs.iter().zip(ys) {
        if x.is_nan() || y.is_nan() {
            if !current.is_empty() {
                segments.push(std::mem::take(&mut current));
            }
            continue;
        }
        if let Some(&[_, prev_y]) = current.last() {
            current.push([x, prev_y]);
        }
        current.push([x, y]);
    }
    if !current.is_empty() {
        segments.push(current);
    }
    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::chart::zoom::INITIAL_ZOOM_DURATION;

    #[test]
    fn staircase_holds_previous_value() {
        let segs = step_after_segments(&[0.0, 1.0, 2.0], &[5.0, 7.0, 6.0]);
        assert_eq!(
            segs,
            vec![vec![[0.0, 5.0], [1.0, 5.0], [1.0, 7.0], [2.0, 7.0], [2.0, 6.0]]]
        );
    }

    #[test]
    fn missing_samples_split_the_area() {
        let segs = step_after_segments(&[0.0, 1.0, 2.0, 3.0], &[1.0, f64::NAN, 2.0, 3.0]);
        assert_eq!(
            segs,
            vec![vec![[0.0, 1.0]], vec![[2.0, 2.0], [3.0, 2.0], [3.0, 3.0]]]
        );
    }

    #[test]
    fn y_domain_starts_at_zero_and_rounds_up() {
        let chart = AreaChart::new("use [kW]", &[0.0, 60.0, 120.0], &[0.9, 3.7, 1.2]);
        assert_eq!(chart.y_domain, Some((0.0, 4.0)));
        assert_eq!(chart.empty_reason(), None);
    }

    #[test]
    fn textual_y_has_no_area() {
        let nan = f64::NAN;
        let chart = AreaChart::new("icon", &[0.0, 60.0], &[nan, nan]);
        assert_eq!(chart.y_domain, None);
        assert!(chart.segments.is_empty());
        assert_eq!(
            chart.empty_reason().as_deref(),
            Some("'icon' has no numeric values to plot over time")
        );
    }

    #[test]
    fn unreadable_time_is_reported_as_such() {
        let nan = f64::NAN;
        let chart = AreaChart::new("use [kW]", &[nan, nan], &[0.93, 0.71]);
        assert!(chart.y_domain.is_some());
        assert!(chart.zoom.is_none());
        assert_eq!(
            chart.empty_reason().as_deref(),
            Some("'time' has no readable timestamps")
        );
    }

    #[test]
    fn user_zoom_waits_for_initial_transition() {
        let mut chart = AreaChart::new("use [kW]", &[0.0, 3200.0], &[1.0, 2.0]);
        chart.user_view(0.0, 100.0);
        assert_eq!(chart.zoom.map(|z| z.view()), Some((0.0, 3200.0)));

        assert!(chart.tick(5.0));
        assert!(!chart.tick(5.0 + INITIAL_ZOOM_DURATION));
        assert!(chart.animation.is_none());
        let scale = chart.zoom.map(|z| z.scale()).unwrap_or_default();
        assert!((scale - 4.0).abs() < 1e-9);

        chart.user_view(0.0, 1.0);
        let scale = chart.zoom.map(|z| z.scale()).unwrap_or_default();
        assert!((scale - 32.0).abs() < 1e-9);
    }
}
