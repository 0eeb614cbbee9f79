#![deny(unsafe_code)]

//! In-memory catalog store.
//!
//! [`CatalogStore`] loads a JSON catalog once and answers every query from
//! the in-memory copy. Queries are pure projections: nothing mutates the
//! loaded records, and a query before a successful load degrades to an empty
//! result with a warning rather than an error.

use std::path::{Path, PathBuf};

use tracing::{info, warn};

use catalog_model::{CourseModule, CourseRecord, ModuleRecord};

use crate::error::CatalogError;
use crate::paths::resolve_catalog_path;

/// Read-mostly accessor over a loaded course catalog.
///
/// `load` and `try_load` take `&mut self`, so overlapping loads cannot be
/// expressed; the exclusive borrow is the single-flight discipline. A failed
/// load leaves any previously loaded records untouched.
#[derive(Debug, Clone)]
pub struct CatalogStore {
    source: PathBuf,
    courses: Option<Vec<CourseRecord>>,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new(resolve_catalog_path(None))
    }
}

impl CatalogStore {
    pub fn new(source: impl Into<PathBuf>) -> Self {
        Self {
            source: source.into(),
            courses: None,
        }
    }

    /// Builds a store from `COURSE_CATALOG_PATH` or the default file name.
    pub fn from_env() -> Self {
        Self::default()
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    /// True once a catalog document has been decoded successfully.
    pub fn is_loaded(&self) -> bool {
        self.courses.is_some()
    }

    /// Number of loaded courses (zero when not loaded).
    pub fn course_count(&self) -> usize {
        self.courses.as_ref().map_or(0, Vec::len)
    }

    /// Reads and decodes the catalog, replacing the in-memory copy on
    /// success only.
    pub fn try_load(&mut self) -> Result<&[CourseRecord], CatalogError> {
        self.refresh()?;
        Ok(self.courses.as_deref().unwrap_or(&[]))
    }

    /// Loads the catalog, converting any failure into `None`.
    ///
    /// Read or decode errors are logged and swallowed; callers that need the
    /// underlying error use [`CatalogStore::try_load`].
    pub fn load(&mut self) -> Option<&[CourseRecord]> {
        match self.refresh() {
            Ok(_) => self.courses.as_deref(),
            Err(error) => {
                tracing::error!(
                    source = %self.source.display(),
                    %error,
                    "failed to load course catalog"
                );
                None
            }
        }
    }

    fn refresh(&mut self) -> Result<usize, CatalogError> {
        let bytes = std::fs::read(&self.source).map_err(|e| CatalogError::io(&self.source, e))?;
        let courses: Vec<CourseRecord> =
            serde_json::from_slice(&bytes).map_err(|e| CatalogError::json(&self.source, e))?;
        info!(
            source = %self.source.display(),
            course_count = courses.len(),
            "loaded course catalog"
        );
        let count = courses.len();
        self.courses = Some(courses);
        Ok(count)
    }

    /// All loaded courses in document order.
    pub fn all_courses(&self) -> &[CourseRecord] {
        match &self.courses {
            Some(courses) => courses,
            None => {
                warn!("course catalog not loaded; call load() first");
                &[]
            }
        }
    }

    /// First course whose acronym matches exactly (case-sensitive).
    pub fn course_by_acronym(&self, acronym: &str) -> Option<&CourseRecord> {
        let Some(courses) = &self.courses else {
            warn!("course catalog not loaded; call load() first");
            return None;
        };
        courses.iter().find(|course| course.acronym == acronym)
    }

    /// Courses whose name or overview texts contain the query,
    /// case-insensitively. An empty query matches nothing.
    pub fn search(&self, query: &str) -> Vec<&CourseRecord> {
        let Some(courses) = &self.courses else {
            return Vec::new();
        };
        if query.is_empty() {
            return Vec::new();
        }
        let needle = query.to_lowercase();
        courses
            .iter()
            .filter(|course| {
                course.course_name.to_lowercase().contains(&needle)
                    || course.overview.to_lowercase().contains(&needle)
                    || course.short_overview.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Courses with at least one module in `year_<N>`, in document order.
    pub fn courses_by_year(&self, year: u32) -> Vec<&CourseRecord> {
        let Some(courses) = &self.courses else {
            return Vec::new();
        };
        courses
            .iter()
            .filter(|course| course.offers_year(year))
            .collect()
    }

    /// Every module of the course, flattened across years and annotated
    /// with its bare year label.
    pub fn modules_for_course(&self, acronym: &str) -> Vec<CourseModule> {
        self.course_by_acronym(acronym)
            .map(CourseRecord::flattened_modules)
            .unwrap_or_default()
    }

    /// The course's module list for one year, without the year annotation.
    pub fn modules_for_year(&self, acronym: &str, year: u32) -> &[ModuleRecord] {
        self.course_by_acronym(acronym)
            .map(|course| course.modules_for_year(year))
            .unwrap_or(&[])
    }
}
