use csv::StringRecord;
use thiserror::Error;

use super::attributes::is_time;
use super::time::coerce_time;

// ---------------------------------------------------------------------------
// Errors
// ---------------------------------------------------------------------------

#[derive(Debug, Error, PartialEq)]
pub enum DataError {
    #[error("attribute '{0}' is not a column of the loaded dataset")]
    UnknownAttribute(String),
}

// ---------------------------------------------------------------------------
// Numeric coercion
// ---------------------------------------------------------------------------

/// Interpret a raw cell as a number.
///
/// Blank cells, text and non-finite spellings (`inf`, `NaN`) all map to the
/// missing sentinel `NaN`.
pub fn coerce_number(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return f64::NAN;
    }
    match trimmed.parse::<f64>() {
        Ok(v) if v.is_finite() => v,
        _ => f64::NAN,
    }
}

// ---------------------------------------------------------------------------
// Dataset – the loaded CSV, kept as text
// ---------------------------------------------------------------------------

/// The parsed CSV. Rows stay textual; numeric views are derived on demand
/// with [`Dataset::project`] so the loaded data is never rewritten.
#[derive(Debug, Clone, Default)]
pub struct Dataset {
    /// Column names in file order.
    pub headers: Vec<String>,
    /// One record per data row.
    pub rows: Vec<StringRecord>,
}

impl Dataset {
    pub fn new(headers: Vec<String>, rows: Vec<StringRecord>) -> Self {
        Dataset { headers, rows }
    }

    /// Number of rows.
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Index of the column called `name`.
    pub fn column(&self, name: &str) -> Result<usize, DataError> {
        self.headers
            .iter()
            .position(|h| h == name)
            .ok_or_else(|| DataError::UnknownAttribute(name.to_string()))
    }

    /// Raw text of `name` in row `row`, if both exist.
    #[cfg(test)]
    pub fn cell(&self, row: usize, name: &str) -> Option<&str> {
        let col = self.column(name).ok()?;
        self.rows.get(row)?.get(col)
    }

    /// Numeric projection of one attribute: one slot per row, `NaN` where the
    /// cell is missing or not a number.
    pub fn project(&self, name: &str) -> Vec<f64> {
        self.project_with(name, coerce_number)
    }

    /// Projection of a time attribute to Unix seconds.
    pub fn project_time(&self, name: &str) -> Vec<f64> {
        self.project_with(name, coerce_time)
    }

    /// Projection used by both charts and statistics: the time attribute
    /// reads as Unix seconds, everything else as plain numbers.
    pub fn project_attribute(&self, name: &str) -> Vec<f64> {
        if is_time(name) {
            self.project_time(name)
        } else {
            self.project(name)
        }
    }

    fn project_with(&self, name: &str, coerce: fn(&str) -> f64) -> Vec<f64> {
        let col = match self.column(name) {
            Ok(col) => col,
            Err(e) => {
                log::warn!("{e}; projecting as missing");
                return vec![f64::NAN; self.rows.len()];
            }
        };
        self.rows
            .iter()
            .map(|rec| rec.get(col).map_or(f64::NAN, coerce))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        Dataset::new(
            vec!["time".into(), "use [kW]".into(), "summary".into()],
            vec![
                StringRecord::from(vec!["1451624400", "0.93", "Clear"]),
                StringRecord::from(vec!["1451624401", "", "Clear"]),
                StringRecord::from(vec!["1451624402", "1.5", "Partly Cloudy"]),
            ],
        )
    }

    #[test]
    fn coerce_number_accepts_numbers() {
        assert_eq!(coerce_number("0.5"), 0.5);
        assert_eq!(coerce_number(" -3 "), -3.0);
        assert_eq!(coerce_number("1e3"), 1000.0);
    }

    #[test]
    fn coerce_number_maps_text_to_missing() {
        assert!(coerce_number("Clear").is_nan());
        assert!(coerce_number("").is_nan());
        assert!(coerce_number("   ").is_nan());
        assert!(coerce_number("inf").is_nan());
        assert!(coerce_number("NaN").is_nan());
    }

    #[test]
    fn projection_keeps_one_slot_per_row() {
        let ds = sample();
        let values = ds.project("use [kW]");
        assert_eq!(values.len(), 3);
        assert_eq!(values[0], 0.93);
        assert!(values[1].is_nan());
        assert_eq!(values[2], 1.5);
    }

    #[test]
    fn text_column_projects_to_missing() {
        let ds = sample();
        let values = ds.project("summary");
        assert_eq!(values.len(), ds.len());
        assert!(values.iter().all(|v| v.is_nan()));
    }

    #[test]
    fn projection_leaves_rows_untouched() {
        let ds = sample();
        let _ = ds.project("use [kW]");
        let _ = ds.project("summary");
        assert_eq!(ds.cell(0, "use [kW]"), Some("0.93"));
        assert_eq!(ds.cell(2, "summary"), Some("Partly Cloudy"));
    }

    #[test]
    fn unknown_attribute() {
        let ds = sample();
        assert_eq!(
            ds.column("Solar [kW]"),
            Err(DataError::UnknownAttribute("Solar [kW]".to_string()))
        );
        assert!(ds.project("Solar [kW]").iter().all(|v| v.is_nan()));
    }

    #[test]
    fn time_projection_reads_unix_seconds() {
        let ds = sample();
        assert_eq!(ds.project_time("time"), vec![1451624400.0, 1451624401.0, 1451624402.0]);
    }

    #[test]
    fn attribute_projection_reads_iso_time() {
        let ds = Dataset::new(
            vec!["time".into(), "use [kW]".into()],
            vec![
                StringRecord::from(vec!["2016-01-01T05:00:00Z", "0.93"]),
                StringRecord::from(vec!["2016-01-01 05:01:00", "0.71"]),
            ],
        );
        assert!(ds.project("time").iter().all(|v| v.is_nan()));
        assert_eq!(ds.project_attribute("time"), vec![1451624400.0, 1451624460.0]);
        assert_eq!(ds.project_attribute("use [kW]"), vec![0.93, 0.71]);
    }
}
