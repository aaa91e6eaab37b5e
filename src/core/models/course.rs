//! Course model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Separator between field and university in a course display name
pub const NAME_SEPARATOR: &str = " - ";

/// A course display name parsed once into its field and university parts
///
/// Display names look like `"Computer Science - UCD"`. The raw string is kept
/// so filters that match against the full name see exactly what the data
/// service sent.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct CourseName {
    display: String,
    field: String,
    university: String,
}

impl CourseName {
    /// Parse a display name
    ///
    /// Splits on the first `" - "`. A name without the separator is all field
    /// and has an empty university.
    #[must_use]
    pub fn parse(display: &str) -> Self {
        let (field, university) = display
            .split_once(NAME_SEPARATOR)
            .unwrap_or((display, ""));
        Self {
            display: display.to_string(),
            field: field.trim().to_string(),
            university: university.trim().to_string(),
        }
    }

    /// Full display name as received
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.display
    }

    /// Field of study (the part before `" - "`)
    #[must_use]
    pub fn field(&self) -> &str {
        &self.field
    }

    /// University abbreviation (the part after `" - "`)
    #[must_use]
    pub fn university(&self) -> &str {
        &self.university
    }
}

impl From<String> for CourseName {
    fn from(display: String) -> Self {
        Self::parse(&display)
    }
}

impl From<&str> for CourseName {
    fn from(display: &str) -> Self {
        Self::parse(display)
    }
}

impl From<CourseName> for String {
    fn from(name: CourseName) -> Self {
        name.display
    }
}

impl fmt::Display for CourseName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display)
    }
}

/// Published salary band for graduates of a course
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SalaryRange {
    /// Lower bound
    pub min: f64,
    /// Upper bound
    pub max: f64,
}

/// Descriptive metrics the data service may attach to a course
///
/// None of these feed the financial projection; they are carried through so
/// a display layer can show them next to the numbers.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtendedMetrics {
    /// Share of graduates employed, in percent
    pub employment_rate: Option<f64>,
    /// Graduate satisfaction score
    pub graduate_satisfaction: Option<f64>,
    /// Job security label (e.g. "High")
    pub job_security: Option<String>,
    /// Work-life balance label
    pub work_life_balance: Option<String>,
    /// Average class size
    pub avg_class_size: Option<u32>,
    /// Industry growth rate, in percent
    pub industry_growth_rate: Option<f64>,
    /// Internship availability label
    pub internship_opportunities: Option<String>,
    /// Salary band
    pub salary_range: Option<SalaryRange>,
    /// Notable employers of graduates
    pub top_employers: Vec<String>,
    /// Typical graduate roles
    pub typical_roles: Vec<String>,
}

/// Raw attributes of a course as supplied by the data service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseAttributes {
    /// Display name (`"<Field> - <UniversityAbbrev>"`)
    pub name: CourseName,

    /// Full university name
    #[serde(default)]
    pub university: String,

    /// Annual tuition in euro
    pub tuition_per_year: f64,

    /// Course length in years
    pub course_length: f64,

    /// Gross starting salary
    pub starting_salary: f64,

    /// Gross salary five years after graduation
    pub salary_5_years: f64,

    /// Net annual income, when the data service supplies it directly
    #[serde(default)]
    pub annual_net_income: Option<f64>,

    /// Optional descriptive metrics
    #[serde(default)]
    pub extended: ExtendedMetrics,
}

impl CourseAttributes {
    /// Create a course with the required financial attributes
    ///
    /// # Arguments
    /// * `name` - Display name, parsed into field and university
    /// * `tuition_per_year` - Annual tuition
    /// * `course_length` - Length in years
    /// * `starting_salary` - Gross starting salary
    /// * `salary_5_years` - Gross salary after five years
    #[must_use]
    pub fn new(
        name: &str,
        tuition_per_year: f64,
        course_length: f64,
        starting_salary: f64,
        salary_5_years: f64,
    ) -> Self {
        Self {
            name: CourseName::parse(name),
            university: String::new(),
            tuition_per_year,
            course_length,
            starting_salary,
            salary_5_years,
            annual_net_income: None,
            extended: ExtendedMetrics::default(),
        }
    }

    /// Set the full university name
    #[must_use]
    pub fn with_university(mut self, university: &str) -> Self {
        self.university = university.to_string();
        self
    }

    /// Use a net income supplied by the data service instead of deriving it
    #[must_use]
    pub const fn with_net_income(mut self, annual_net_income: f64) -> Self {
        self.annual_net_income = Some(annual_net_income);
        self
    }

    /// Attach descriptive metrics
    #[must_use]
    pub fn with_extended(mut self, extended: ExtendedMetrics) -> Self {
        self.extended = extended;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_field_and_university() {
        let name = CourseName::parse("Computer Science - UCD");
        assert_eq!(name.field(), "Computer Science");
        assert_eq!(name.university(), "UCD");
        assert_eq!(name.to_string(), "Computer Science - UCD");
    }

    #[test]
    fn name_without_separator_is_all_field() {
        let name = CourseName::parse("Medicine");
        assert_eq!(name.field(), "Medicine");
        assert_eq!(name.university(), "");
        assert_eq!(name.as_str(), "Medicine");
    }

    #[test]
    fn splits_on_first_separator_only() {
        let name = CourseName::parse("Arts - Joint Honours - NUIG");
        assert_eq!(name.field(), "Arts");
        assert_eq!(name.university(), "Joint Honours - NUIG");
        assert_eq!(name.as_str(), "Arts - Joint Honours - NUIG");
    }

    #[test]
    fn course_name_serializes_as_plain_string() {
        let name = CourseName::parse("Law - TCD");
        let json = serde_json::to_string(&name).expect("serialize");
        assert_eq!(json, "\"Law - TCD\"");

        let back: CourseName = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(back.field(), "Law");
    }

    #[test]
    fn deserializes_with_optional_sections_missing() {
        let course: CourseAttributes = toml::from_str(
            r#"
name = "Nursing - DCU"
tuition_per_year = 3000
course_length = 4
starting_salary = 35000
salary_5_years = 45000
"#,
        )
        .expect("parse course");

        assert_eq!(course.name.university(), "DCU");
        assert!(course.annual_net_income.is_none());
        assert_eq!(course.extended, ExtendedMetrics::default());
        assert!((course.course_length - 4.0).abs() < f64::EPSILON);
    }
}
