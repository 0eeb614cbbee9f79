//! Radar series mini-format.
//!
//! Catalog records encode chart data as `label:value` pairs joined by
//! semicolons, e.g. `"Theory:4;Practice:3.5"`.

use serde::Serialize;

/// One parsed entry of a radar series.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RadarPoint {
    pub label: String,
    pub value: f64,
}

/// Parses a semicolon-delimited `label:value` string.
///
/// Order is preserved and nothing is deduplicated. Each pair splits on its
/// first `:`; a missing or unparseable value yields `f64::NAN` rather than
/// an error, so malformed input never fails the caller.
pub fn parse_radar_series(text: &str) -> Vec<RadarPoint> {
    if text.is_empty() {
        return Vec::new();
    }
    text.split(';')
        .map(|pair| {
            let (label, value) = match pair.split_once(':') {
                Some((label, value)) => (label, value.parse::<f64>().unwrap_or(f64::NAN)),
                None => (pair, f64::NAN),
            };
            RadarPoint {
                label: label.to_string(),
                value,
            }
        })
        .collect()
}
