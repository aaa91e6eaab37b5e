//! Course catalog: the set of courses the engines work over
//!
//! A catalog file is TOML with one `[[course]]` table per course:
//!
//! ```toml
//! [[course]]
//! name = "Computer Science - UCD"
//! university = "University College Dublin"
//! tuition_per_year = 3000
//! course_length = 4
//! starting_salary = 45000
//! salary_5_years = 70000
//!
//! [course.extended]
//! employment_rate = 94.0
//! ```

use crate::core::error::{EngineError, EngineResult};
use crate::core::models::{CourseAttributes, ProjectionResult};
use crate::core::projection::{project_with, Overrides, ProjectionPolicy};
use crate::{debug, warn};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Ordered collection of course attributes
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Catalog {
    /// Courses in file order
    #[serde(rename = "course", default)]
    pub courses: Vec<CourseAttributes>,
}

impl Catalog {
    /// Build a catalog from courses already in memory
    #[must_use]
    pub const fn new(courses: Vec<CourseAttributes>) -> Self {
        Self { courses }
    }

    /// Parse a catalog from TOML text
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CatalogParse`] if the text is not a valid catalog.
    pub fn from_toml(content: &str) -> EngineResult<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Load a catalog file
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::CatalogIo`] if the file cannot be read and
    /// [`EngineError::CatalogParse`] if it is not a valid catalog.
    pub fn load(path: &Path) -> EngineResult<Self> {
        let content = fs::read_to_string(path).map_err(|source| EngineError::CatalogIo {
            path: path.display().to_string(),
            source,
        })?;
        let catalog = Self::from_toml(&content)?;
        debug!(
            "Loaded {} courses from {}",
            catalog.courses.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Number of courses
    #[must_use]
    pub fn len(&self) -> usize {
        self.courses.len()
    }

    /// True when the catalog has no courses
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.courses.is_empty()
    }

    /// Display names in catalog order
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        self.courses
            .iter()
            .map(|c| c.name.as_str().to_string())
            .collect()
    }

    /// Course with exactly this display name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&CourseAttributes> {
        self.courses.iter().find(|c| c.name.as_str() == name)
    }

    /// Like [`Catalog::get`], but a missing course is an error
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownCourse`] when no course has this name.
    pub fn require(&self, name: &str) -> EngineResult<&CourseAttributes> {
        self.get(name).ok_or_else(|| EngineError::UnknownCourse {
            name: name.to_string(),
        })
    }

    /// Look up and project one course
    ///
    /// # Errors
    ///
    /// Returns [`EngineError::UnknownCourse`] for a missing name, or any
    /// projection error for the course.
    pub fn project_named(
        &self,
        name: &str,
        overrides: &Overrides,
        policy: &ProjectionPolicy,
    ) -> EngineResult<ProjectionResult> {
        project_with(self.require(name)?, overrides, policy)
    }

    /// Project every course without overrides
    ///
    /// Courses that fail are returned alongside the successes rather than
    /// dropped. A repeated display name keeps the first entry and reports
    /// the later ones as [`EngineError::DuplicateCourse`].
    #[must_use]
    pub fn project_all(
        &self,
        policy: &ProjectionPolicy,
    ) -> (BTreeMap<String, ProjectionResult>, Vec<(String, EngineError)>) {
        let mut projected = BTreeMap::new();
        let mut failures: Vec<(String, EngineError)> = Vec::new();
        for course in &self.courses {
            let name = course.name.as_str().to_string();
            if projected.contains_key(&name) || failures.iter().any(|(seen, _)| *seen == name) {
                warn!("Duplicate course '{}' in catalog", name);
                failures.push((name.clone(), EngineError::DuplicateCourse { name }));
                continue;
            }
            match project_with(course, &Overrides::none(), policy) {
                Ok(result) => {
                    projected.insert(name, result);
                }
                Err(e) => failures.push((name, e)),
            }
        }
        (projected, failures)
    }

    /// Successful projections in catalog order; failures are logged as warnings
    #[must_use]
    pub fn projections_in_order(&self, policy: &ProjectionPolicy) -> Vec<ProjectionResult> {
        self.courses
            .iter()
            .filter_map(|course| match project_with(course, &Overrides::none(), policy) {
                Ok(result) => Some(result),
                Err(e) => {
                    warn!("Skipping '{}': {}", course.name, e);
                    None
                }
            })
            .collect()
    }
}
