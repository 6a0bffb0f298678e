// ---------------------------------------------------------------------------
// X-only zoom / pan model for the time-series chart
// ---------------------------------------------------------------------------

/// Allowed zoom factors relative to the full extent.
pub const SCALE_EXTENT: (f64, f64) = (1.0, 32.0);

/// Length of the initial zoom transition, in seconds.
pub const INITIAL_ZOOM_DURATION: f64 = 0.75;

/// Zoom factor of the initial view.
pub const INITIAL_ZOOM_SCALE: f64 = 4.0;

/// 2001-09-01T00:00:00Z, the fixed point of the initial zoom.
pub const INITIAL_ZOOM_ANCHOR: f64 = 999_302_400.0;

/// Visible window `[lo, hi]` over a full domain. Every mutation keeps the
/// zoom factor inside [`SCALE_EXTENT`] and the window inside the domain.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomView {
    full: (f64, f64),
    view: (f64, f64),
}

impl ZoomView {
    /// Start fully zoomed out. `full` must be ordered and non-empty.
    pub fn new(full: (f64, f64)) -> Self {
        ZoomView { full, view: full }
    }

    pub fn view(&self) -> (f64, f64) {
        self.view
    }

    fn full_width(&self) -> f64 {
        self.full.1 - self.full.0
    }

    /// Current zoom factor.
    pub fn scale(&self) -> f64 {
        self.full_width() / (self.view.1 - self.view.0)
    }

    /// Replace the window by `[lo, hi]`, constrained.
    pub fn set_view(&mut self, lo: f64, hi: f64) {
        self.view = self.constrain(lo, hi);
    }

    /// Zoom to factor `k` keeping `anchor` at the same place on screen.
    pub fn scale_to(&mut self, k: f64, anchor: f64) {
        let k = k.clamp(SCALE_EXTENT.0, SCALE_EXTENT.1);
        let (lo, hi) = self.view;
        let frac = (anchor - lo) / (hi - lo);
        let width = self.full_width() / k;
        let new_lo = anchor - frac * width;
        self.view = self.constrain(new_lo, new_lo + width);
    }

    fn constrain(&self, lo: f64, hi: f64) -> (f64, f64) {
        let full_w = self.full_width();
        let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
        let width = if (hi - lo).is_finite() {
            (hi - lo).clamp(full_w / SCALE_EXTENT.1, full_w / SCALE_EXTENT.0)
        } else {
            full_w
        };
        let center = (lo + hi) / 2.0;
        let mut new_lo = if center.is_finite() {
            center - width / 2.0
        } else {
            self.full.0
        };
        new_lo = new_lo.min(self.full.1 - width).max(self.full.0);
        (new_lo, new_lo + width)
    }
}

// ---------------------------------------------------------------------------
// Timed transition between two windows
// ---------------------------------------------------------------------------

/// Cubic in-out easing on `t ∈ [0, 1]`.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t.clamp(0.0, 1.0) * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomAnimation {
    from: (f64, f64),
    to: (f64, f64),
    duration: f64,
    started: Option<f64>,
}

impl ZoomAnimation {
    pub fn new(from: (f64, f64), to: (f64, f64), duration: f64) -> Self {
        ZoomAnimation {
            from,
            to,
            duration,
            started: None,
        }
    }

    /// Window at clock time `now` (seconds). The first call starts the clock.
    /// Returns the window and whether the transition has finished.
    pub fn sample(&mut self, now: f64) -> ((f64, f64), bool) {
        let start = *self.started.get_or_insert(now);
        let t = if self.duration > 0.0 {
            (now - start) / self.duration
        } else {
            1.0
        };
        let e = ease_cubic_in_out(t);
        let lerp = |a: f64, b: f64| a + (b - a) * e;
        (
            (lerp(self.from.0, self.to.0), lerp(self.from.1, self.to.1)),
            t >= 1.0,
        )
    }
}

/// The initial view: full extent animating to 4× around the fixed anchor.
pub fn initial_zoom(full: (f64, f64)) -> (ZoomView, ZoomAnimation) {
    let view = ZoomView::new(full);
    let mut target = view;
    target.scale_to(INITIAL_ZOOM_SCALE, INITIAL_ZOOM_ANCHOR);
    let animation = ZoomAnimation::new(view.view(), target.view(), INITIAL_ZOOM_DURATION);
    (view, animation)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn anchor_is_september_2001() {
        let anchor = chrono::NaiveDate::from_ymd_opt(2001, 9, 1)
            .and_then(|d| d.and_hms_opt(0, 0, 0))
            .map(|dt| dt.and_utc().timestamp() as f64);
        assert_eq!(anchor, Some(INITIAL_ZOOM_ANCHOR));
    }

    #[test]
    fn scale_is_clamped() {
        let mut z = ZoomView::new((0.0, 320.0));
        z.scale_to(100.0, 160.0);
        assert!(approx(z.scale(), 32.0));
        z.scale_to(0.1, 160.0);
        assert!(approx(z.scale(), 1.0));
        assert_eq!(z.view(), (0.0, 320.0));
    }

    #[test]
    fn scale_to_keeps_anchor_fraction() {
        let mut z = ZoomView::new((0.0, 400.0));
        z.scale_to(4.0, 100.0);
        // anchor at 25% of the screen stays at 25%
        assert!(approx(z.view().0, 75.0));
        assert!(approx(z.view().1, 175.0));
    }

    #[test]
    fn pan_stays_inside_domain() {
        let mut z = ZoomView::new((0.0, 100.0));
        z.set_view(90.0, 110.0);
        assert_eq!(z.view(), (80.0, 100.0));
        z.set_view(-30.0, -10.0);
        assert_eq!(z.view(), (0.0, 20.0));
        z.set_view(-500.0, 500.0);
        assert_eq!(z.view(), (0.0, 100.0));
    }

    #[test]
    fn anchor_outside_domain_pins_to_edge() {
        // 2016 data: the 2001 anchor lies far to the left
        let full = (1_451_624_400.0, 1_483_228_800.0);
        let (view, mut anim) = initial_zoom(full);
        assert_eq!(view.view(), full);
        let ((lo, hi), _) = anim.sample(0.0);
        assert_eq!((lo, hi), full);
        let ((lo, hi), done) = anim.sample(INITIAL_ZOOM_DURATION);
        assert!(done);
        assert!(approx(lo, full.0));
        assert!(approx((full.1 - full.0) / (hi - lo), INITIAL_ZOOM_SCALE));
    }

    #[test]
    fn animation_progresses() {
        let mut anim = ZoomAnimation::new((0.0, 100.0), (50.0, 60.0), 0.75);
        let (start, done) = anim.sample(10.0);
        assert_eq!(start, (0.0, 100.0));
        assert!(!done);
        let (mid, done) = anim.sample(10.375);
        assert!(!done);
        assert!(approx(mid.0, 25.0) && approx(mid.1, 80.0));
        let (end, done) = anim.sample(11.0);
        assert!(done);
        assert_eq!(end, (50.0, 60.0));
    }

    #[test]
    fn easing_endpoints() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert_eq!(ease_cubic_in_out(2.0), 1.0);
    }
}
