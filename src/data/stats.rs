use super::model::Dataset;

/// Summary statistics for one attribute. `None` means "not applicable".
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Statistics {
    pub mean: Option<f64>,
    pub median: Option<f64>,
    /// Sample (n − 1) standard deviation.
    pub std_dev: Option<f64>,
}

impl Statistics {
    /// Display strings, two decimals or `N/A`.
    pub fn labels(&self) -> [String; 3] {
        [
            format!("Mean: {}", fmt_stat(self.mean)),
            format!("Median: {}", fmt_stat(self.median)),
            format!("Standard Deviation: {}", fmt_stat(self.std_dev)),
        ]
    }
}

fn fmt_stat(v: Option<f64>) -> String {
    match v {
        Some(v) => format!("{v:.2}"),
        None => "N/A".to_string(),
    }
}

/// Compute statistics over `values`, ignoring `NaN` entries. Results that
/// cannot be represented as finite numbers are `None`.
pub fn compute_stats(values: &[f64]) -> Statistics {
    let mut vals: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    let n = vals.len();
    if n == 0 {
        return Statistics::default();
    }

    vals.sort_by(f64::total_cmp);
    let (min, max) = (vals[0], vals[n - 1]);
    let median = if n % 2 == 0 {
        vals[n / 2 - 1] / 2.0 + vals[n / 2] / 2.0
    } else {
        vals[n / 2]
    };

    // Two passes over values scaled into [-1, 1] so no intermediate overflows.
    let scale = min.abs().max(max.abs());
    let (mean, std_dev) = if !scale.is_finite() {
        (f64::NAN, None)
    } else if scale == 0.0 {
        (0.0, (n > 1).then_some(0.0))
    } else {
        let scaled_mean = vals.iter().map(|v| v / scale / n as f64).sum::<f64>();
        let std_dev = (n > 1).then(|| {
            let ss: f64 = vals.iter().map(|v| (v / scale - scaled_mean).powi(2)).sum();
            scale * (ss / (n - 1) as f64).sqrt()
        });
        // rounding can push the mean just past the extent
        ((scaled_mean * scale).clamp(min, max), std_dev)
    };

    Statistics {
        mean: finite(mean),
        median: finite(median),
        std_dev: std_dev.and_then(finite),
    }
}

fn finite(v: f64) -> Option<f64> {
    v.is_finite().then_some(v)
}

/// Statistics of one attribute of the dataset, over the same projection the
/// charts use.
pub fn compute_attribute_stats(dataset: &Dataset, name: &str) -> Statistics {
    compute_stats(&dataset.project_attribute(name))
}
