/// `[min, max]` of the non-`NaN` values, or `None` when there are none.
pub fn extent(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

/// Largest non-`NaN` value.
pub fn max(values: &[f64]) -> Option<f64> {
    extent(values).map(|(_, hi)| hi)
}

/// Order a domain and widen a zero-width one so it can be drawn.
pub fn display_domain(lo: f64, hi: f64) -> (f64, f64) {
    let (lo, hi) = if lo <= hi { (lo, hi) } else { (hi, lo) };
    if hi - lo > 0.0 {
        (lo, hi)
    } else {
        (lo - 0.5, hi + 0.5)
    }
}

const E10: f64 = 7.071_067_811_865_475; // sqrt(50)
const E5: f64 = 3.162_277_660_168_379_5; // sqrt(10)
const E2: f64 = std::f64::consts::SQRT_2;

/// Tick step for roughly `count` ticks over `[start, stop]`.
///
/// Positive results are the step itself; negative results `-n` stand for a
/// step of `1 / n`, which keeps fractional steps exact.
fn tick_increment(start: f64, stop: f64, count: usize) -> f64 {
    let step = (stop - start) / count.max(1) as f64;
    let power = step.log10().floor();
    let error = step / 10f64.powf(power);
    let factor = if error >= E10 {
        10.0
    } else if error >= E5 {
        5.0
    } else if error >= E2 {
        2.0
    } else {
        1.0
    };
    if power >= 0.0 {
        factor * 10f64.powf(power)
    } else {
        -(10f64.powf(-power)) / factor
    }
}

/// Extend `[lo, hi]` outwards to round tick values.
pub fn nice(lo: f64, hi: f64, count: usize) -> (f64, f64) {
    let (mut start, mut stop) = (lo, hi);
    if !(start.is_finite() && stop.is_finite()) || stop <= start {
        return (lo, hi);
    }
    let mut prestep = f64::NAN;
    for _ in 0..10 {
        let step = tick_increment(start, stop, count);
        if step == prestep {
            break;
        } else if step > 0.0 {
            start = (start / step).floor() * step;
            stop = (stop / step).ceil() * step;
        } else if step < 0.0 {
            let inv = -step;
            start = (start * inv).floor() / inv;
            stop = (stop * inv).ceil() / inv;
        } else {
            break;
        }
        prestep = step;
    }
    (start, stop)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extent_skips_missing() {
        assert_eq!(extent(&[f64::NAN, 3.0, -1.0, 2.0]), Some((-1.0, 3.0)));
        assert_eq!(extent(&[f64::NAN]), None);
        assert_eq!(extent(&[]), None);
        assert_eq!(max(&[0.2, f64::NAN, 0.9]), Some(0.9));
    }

    #[test]
    fn degenerate_domain_is_widened() {
        assert_eq!(display_domain(2.0, 2.0), (1.5, 2.5));
        assert_eq!(display_domain(3.0, 1.0), (1.0, 3.0));
    }

    #[test]
    fn nice_rounds_up() {
        assert_eq!(nice(0.0, 3.7, 10), (0.0, 4.0));
        assert_eq!(nice(0.0, 0.93, 10), (0.0, 1.0));
        assert_eq!(nice(0.0, 87.0, 10), (0.0, 90.0));
        assert_eq!(nice(0.0, 1234.0, 10), (0.0, 1300.0));
    }

    #[test]
    fn nice_leaves_empty_ranges() {
        assert_eq!(nice(0.0, 0.0, 10), (0.0, 0.0));
        assert_eq!(nice(0.0, -2.0, 10), (0.0, -2.0));
    }
}
