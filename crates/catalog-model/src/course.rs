//! Course and module record models.
//!
//! A catalog document is an ordered JSON array of [`CourseRecord`]s. Each
//! course keys its modules by a year label (`year_1`, `year_2`, ...); the
//! label order of the source document is preserved, which is why the map is
//! an `IndexMap` rather than a sorted map.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One academic program: metadata plus its modules-by-year mapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    /// Short identifier, unique within a loaded catalog (assumed, not enforced).
    pub acronym: String,
    pub course_name: String,
    #[serde(default)]
    pub overview: String,
    #[serde(default)]
    pub short_overview: String,
    /// Year label -> ordered module list, in document order.
    #[serde(default)]
    pub modules: IndexMap<String, Vec<ModuleRecord>>,
    /// Raw radar series, e.g. `"Theory:4;Practice:3.5"`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub radar_data: Option<String>,
}

/// One unit of study. The catalog does not fix a module schema, so the
/// fields are carried through verbatim.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ModuleRecord(pub serde_json::Map<String, serde_json::Value>);

/// A module annotated with the bare year it belongs to (`"year_2"` -> `"2"`).
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CourseModule {
    #[serde(flatten)]
    pub fields: ModuleRecord,
    pub year: String,
}

impl CourseRecord {
    /// Flattens the year-keyed module map into a single list.
    ///
    /// Year labels are visited in document order (not numerically sorted), so
    /// all modules of one year stay contiguous. Per-year module order is
    /// preserved. A `year` field carried by the module itself is replaced by
    /// the annotation.
    pub fn flattened_modules(&self) -> Vec<CourseModule> {
        let mut flat = Vec::new();
        for (label, modules) in &self.modules {
            let year = label.strip_prefix("year_").unwrap_or(label);
            for module in modules {
                let mut fields = module.clone();
                fields.0.shift_remove("year");
                flat.push(CourseModule {
                    fields,
                    year: year.to_string(),
                });
            }
        }
        flat
    }

    /// The module list stored under `year_<N>`, or empty if absent.
    pub fn modules_for_year(&self, year: u32) -> &[ModuleRecord] {
        self.modules
            .get(&year_key(year))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// True when the course has at least one module in `year_<N>`.
    pub fn offers_year(&self, year: u32) -> bool {
        self.modules
            .get(&year_key(year))
            .is_some_and(|modules| !modules.is_empty())
    }

    /// Parses this course's own `radar_data` field, if present.
    pub fn radar_points(&self) -> Vec<crate::radar::RadarPoint> {
        self.radar_data
            .as_deref()
            .map(crate::radar::parse_radar_series)
            .unwrap_or_default()
    }
}

fn year_key(year: u32) -> String {
    format!("year_{year}")
}
