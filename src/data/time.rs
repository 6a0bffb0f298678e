use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

/// Layouts tried (after plain Unix seconds and RFC 3339) when reading the
/// time column.
pub const DATE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S",
    "%Y-%m-%dT%H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y/%m/%d %H:%M:%S",
    "%Y-%m-%d",
];

/// Interpret a raw time cell as Unix seconds (UTC).
///
/// HomeC stores epoch seconds; ISO-style timestamps are accepted as well.
/// Anything else is the missing sentinel `NaN`.
pub fn coerce_time(text: &str) -> f64 {
    let s = text.trim();
    if s.is_empty() {
        return f64::NAN;
    }
    if let Ok(v) = s.parse::<f64>() {
        return if v.is_finite() { v } else { f64::NAN };
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return dt.timestamp_millis() as f64 / 1000.0;
    }
    for &fmt in DATE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(s, fmt) {
            return dt.and_utc().timestamp_millis() as f64 / 1000.0;
        }
        if let Some(dt) = NaiveDate::parse_from_str(s, fmt)
            .ok()
            .and_then(|d| d.and_hms_opt(0, 0, 0))
        {
            return dt.and_utc().timestamp() as f64;
        }
    }
    f64::NAN
}

/// Format Unix seconds for an axis tick. `span` is the visible range in
/// seconds and picks the granularity.
pub fn format_tick(ts: f64, span: f64) -> String {
    let Some(dt) = DateTime::<Utc>::from_timestamp(ts.floor() as i64, 0) else {
        return format!("{ts:.0}");
    };
    if span > 60.0 * 86_400.0 {
        dt.format("%Y-%m").to_string()
    } else if span > 2.0 * 86_400.0 {
        dt.format("%b %d").to_string()
    } else if span > 3_600.0 {
        dt.format("%b %d %H:%M").to_string()
    } else {
        dt.format("%H:%M:%S").to_string()
    }
}
