//! Configuration module for `CourseRoi`

use crate::core::projection::{
    ProjectionPolicy, DEFAULT_CAREER_YEARS, DEFAULT_TAX_RATE, DEFAULT_WEEKS_PER_YEAR,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::PathBuf;

/// Default CLI configuration loaded based on build profile.
/// Uses release defaults in release mode, debug defaults in debug mode.
#[cfg(not(debug_assertions))]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigRelease.toml");

#[cfg(debug_assertions)]
const CONFIG_DEFAULTS: &str = include_str!("../../assets/DefaultCLIConfigDebug.toml");

#[cfg(not(debug_assertions))]
const CONFIG_FILE_NAME: &str = "config.toml";

#[cfg(debug_assertions)]
const CONFIG_FILE_NAME: &str = "dconfig.toml";

/// Placeholder expanded to the application config directory
const DIR_VARIABLE: &str = "$COURSE_ROI";

/// Logging configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level (error, warn, info, debug)
    #[serde(default)]
    pub level: String,
    /// Log file path
    #[serde(default)]
    pub file: String,
    /// Enable verbose output
    #[serde(default)]
    pub verbose: bool,
}

/// Paths configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PathsConfig {
    /// Course catalog file (TOML, one `[[course]]` table per course)
    #[serde(default)]
    pub catalog: String,
    /// Directory for report output files
    #[serde(default)]
    pub reports_dir: String,
}

/// Projection policy configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionConfig {
    /// Effective tax rate used to derive net income from a starting salary
    #[serde(default = "default_tax_rate")]
    pub tax_rate: f64,
    /// Working weeks per academic year for part-time income
    #[serde(default = "default_weeks_per_year")]
    pub weeks_per_year: f64,
    /// Career length used for lifetime earnings
    #[serde(default = "default_career_years")]
    pub career_years: f64,
}

const fn default_tax_rate() -> f64 {
    DEFAULT_TAX_RATE
}

const fn default_weeks_per_year() -> f64 {
    DEFAULT_WEEKS_PER_YEAR
}

const fn default_career_years() -> f64 {
    DEFAULT_CAREER_YEARS
}

impl Default for ProjectionConfig {
    fn default() -> Self {
        Self {
            tax_rate: DEFAULT_TAX_RATE,
            weeks_per_year: DEFAULT_WEEKS_PER_YEAR,
            career_years: DEFAULT_CAREER_YEARS,
        }
    }
}

impl ProjectionConfig {
    /// Build the engine policy described by this section
    #[must_use]
    pub const fn policy(&self) -> ProjectionPolicy {
        ProjectionPolicy {
            tax_rate: self.tax_rate,
            weeks_per_year: self.weeks_per_year,
            career_years: self.career_years,
        }
    }
}

/// Main configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Logging settings
    pub logging: LoggingConfig,
    /// Path settings
    #[serde(default)]
    pub paths: PathsConfig,
    /// Projection policy settings
    #[serde(default)]
    pub projection: ProjectionConfig,
}

/// Optional CLI overrides for configuration values
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Override logging level
    pub level: Option<String>,
    /// Override log file path
    pub file: Option<String>,
    /// Override verbose flag
    pub verbose: Option<bool>,
    /// Override catalog path
    pub catalog: Option<String>,
    /// Override reports output directory
    pub reports_dir: Option<String>,
    /// Override tax rate
    pub tax_rate: Option<f64>,
}

impl Config {
    /// Get the `$COURSE_ROI` directory path
    ///
    /// Returns:
    /// - Linux: `~/.config/courseroi`
    /// - macOS: `~/Library/Application Support/courseroi`
    /// - Windows: `%APPDATA%\courseroi`
    #[must_use]
    pub fn get_app_dir() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("courseroi")
    }

    /// Merge missing fields from defaults into this config
    ///
    /// Only string fields that are empty here and non-empty in `defaults` are
    /// filled in. Numeric projection fields always carry a serde default.
    ///
    /// # Returns
    ///
    /// `true` if any fields were added/changed, `false` otherwise
    #[allow(clippy::useless_let_if_seq)]
    pub fn merge_defaults(&mut self, defaults: &Self) -> bool {
        let mut changed = false;

        if self.logging.level.is_empty() && !defaults.logging.level.is_empty() {
            self.logging.level.clone_from(&defaults.logging.level);
            changed = true;
        }
        if self.logging.file.is_empty() && !defaults.logging.file.is_empty() {
            self.logging.file.clone_from(&defaults.logging.file);
            changed = true;
        }

        if self.paths.catalog.is_empty() && !defaults.paths.catalog.is_empty() {
            self.paths.catalog.clone_from(&defaults.paths.catalog);
            changed = true;
        }
        if self.paths.reports_dir.is_empty() && !defaults.paths.reports_dir.is_empty() {
            self.paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir);
            changed = true;
        }

        changed
    }

    /// Apply CLI-provided overrides onto the loaded configuration
    ///
    /// Only non-`None` values replace config values, and nothing is persisted.
    pub fn apply_overrides(&mut self, overrides: &ConfigOverrides) {
        if let Some(level) = &overrides.level {
            self.logging.level.clone_from(level);
        }
        if let Some(file) = &overrides.file {
            self.logging.file.clone_from(file);
        }
        if let Some(verbose) = overrides.verbose {
            self.logging.verbose = verbose;
        }

        if let Some(catalog) = &overrides.catalog {
            self.paths.catalog.clone_from(catalog);
        }
        if let Some(reports_dir) = &overrides.reports_dir {
            self.paths.reports_dir.clone_from(reports_dir);
        }

        if let Some(tax_rate) = overrides.tax_rate {
            self.projection.tax_rate = tax_rate;
        }
    }

    /// Get the user config file path
    ///
    /// `config.toml` for release builds, `dconfig.toml` for debug builds,
    /// inside [`get_app_dir`](Self::get_app_dir).
    #[must_use]
    pub fn get_config_file_path() -> PathBuf {
        Self::get_app_dir().join(CONFIG_FILE_NAME)
    }

    /// Expand `$COURSE_ROI` in a string to the application directory
    #[must_use]
    fn expand_variables(value: &str) -> String {
        if value.contains(DIR_VARIABLE) {
            let app_dir = Self::get_app_dir();
            value.replace(DIR_VARIABLE, app_dir.to_str().unwrap_or("."))
        } else {
            value.to_string()
        }
    }

    /// Initialize config from a TOML string
    ///
    /// Missing fields use their serde defaults and `$COURSE_ROI` is expanded
    /// in path values.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML cannot be parsed or doesn't match the expected schema
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let config = Config::from_toml(r#"
    /// [logging]
    /// level = "info"
    /// file = "$COURSE_ROI/app.log"
    /// "#)?;
    /// ```
    pub fn from_toml(toml_str: &str) -> Result<Self, toml::de::Error> {
        let mut config: Self = toml::from_str(toml_str)?;

        config.logging.file = Self::expand_variables(&config.logging.file);
        config.paths.catalog = Self::expand_variables(&config.paths.catalog);
        config.paths.reports_dir = Self::expand_variables(&config.paths.reports_dir);

        Ok(config)
    }

    /// Load configuration from the embedded defaults
    ///
    /// # Panics
    /// Panics if the embedded default configuration is invalid TOML.
    /// The defaults are compiled into the binary, so this indicates a build defect.
    #[must_use]
    pub fn from_defaults() -> Self {
        Self::from_toml(CONFIG_DEFAULTS).expect("Failed to parse compiled-in default configuration")
    }

    /// Load configuration from file, or create it from defaults on first run
    ///
    /// An existing file gets any newly added fields merged in from defaults
    /// and is saved back. Any read or parse failure falls back to defaults.
    #[must_use]
    pub fn load() -> Self {
        let config_file = Self::get_config_file_path();
        let defaults = Self::from_defaults();

        if config_file.exists() {
            if let Ok(content) = fs::read_to_string(&config_file) {
                if let Ok(mut config) = Self::from_toml(&content) {
                    if config.merge_defaults(&defaults) {
                        let _ = config.save();
                    }
                    return config;
                }
            }
        } else {
            if let Some(parent) = config_file.parent() {
                let _ = fs::create_dir_all(parent);
            }
            let _ = defaults.save();
            return defaults;
        }

        defaults
    }

    /// Save configuration to the user config file
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be created or the
    /// file cannot be written.
    pub fn save(&self) -> Result<(), Box<dyn std::error::Error>> {
        let config_file = Self::get_config_file_path();
        if let Some(parent) = config_file.parent() {
            fs::create_dir_all(parent)?;
        }
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(&config_file, toml_str)?;
        Ok(())
    }

    /// Get a configuration value by key
    ///
    /// Supported keys: `level`, `file`, `verbose`, `catalog`, `reports_dir`,
    /// `tax_rate`, `weeks_per_year`, `career_years` (dashes are accepted in
    /// place of underscores).
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "level" => Some(self.logging.level.clone()),
            "file" => Some(self.logging.file.clone()),
            "verbose" => Some(self.logging.verbose.to_string()),
            "catalog" => Some(self.paths.catalog.clone()),
            "reports_dir" | "reports-dir" => Some(self.paths.reports_dir.clone()),
            "tax_rate" | "tax-rate" => Some(self.projection.tax_rate.to_string()),
            "weeks_per_year" | "weeks-per-year" => {
                Some(self.projection.weeks_per_year.to_string())
            }
            "career_years" | "career-years" => Some(self.projection.career_years.to_string()),
            _ => None,
        }
    }

    /// Set a configuration value by key
    ///
    /// Updates the in-memory config only; call [`save()`](Config::save) to persist.
    ///
    /// # Errors
    /// Returns an error if the key is not recognized or the value cannot be parsed.
    /// `tax_rate` must lie in `[0, 1)`; `weeks_per_year` must lie in `[0, 52]`;
    /// `career_years` must be positive.
    pub fn set(&mut self, key: &str, value: &str) -> Result<(), String> {
        match key {
            "level" => self.logging.level = value.to_string(),
            "file" => self.logging.file = value.to_string(),
            "verbose" => {
                self.logging.verbose = value
                    .parse::<bool>()
                    .map_err(|_| format!("Invalid boolean value for 'verbose': '{value}'"))?;
            }
            "catalog" => self.paths.catalog = value.to_string(),
            "reports_dir" | "reports-dir" => self.paths.reports_dir = value.to_string(),
            "tax_rate" | "tax-rate" => {
                self.projection.tax_rate =
                    parse_bounded(key, value, |v| (0.0..1.0).contains(&v), "[0, 1)")?;
            }
            "weeks_per_year" | "weeks-per-year" => {
                self.projection.weeks_per_year =
                    parse_bounded(key, value, |v| (0.0..=52.0).contains(&v), "[0, 52]")?;
            }
            "career_years" | "career-years" => {
                self.projection.career_years = parse_bounded(key, value, |v| v > 0.0, "> 0")?;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Unset a configuration value by key (reset to the value in `defaults`)
    ///
    /// # Errors
    /// Returns an error if the key is not recognized.
    pub fn unset(&mut self, key: &str, defaults: &Self) -> Result<(), String> {
        match key {
            "level" => self.logging.level.clone_from(&defaults.logging.level),
            "file" => self.logging.file.clone_from(&defaults.logging.file),
            "verbose" => self.logging.verbose = defaults.logging.verbose,
            "catalog" => self.paths.catalog.clone_from(&defaults.paths.catalog),
            "reports_dir" | "reports-dir" => self
                .paths
                .reports_dir
                .clone_from(&defaults.paths.reports_dir),
            "tax_rate" | "tax-rate" => self.projection.tax_rate = defaults.projection.tax_rate,
            "weeks_per_year" | "weeks-per-year" => {
                self.projection.weeks_per_year = defaults.projection.weeks_per_year;
            }
            "career_years" | "career-years" => {
                self.projection.career_years = defaults.projection.career_years;
            }
            _ => return Err(format!("Unknown config key: '{key}'")),
        }
        Ok(())
    }

    /// Reset all configuration to defaults by deleting the config file
    ///
    /// The next [`load()`](Config::load) recreates it. Succeeds when no file exists.
    ///
    /// # Errors
    /// Returns an error if the config file exists but cannot be deleted.
    pub fn reset() -> Result<(), std::io::Error> {
        let config_file = Self::get_config_file_path();
        if config_file.exists() {
            fs::remove_file(config_file)?;
        }
        Ok(())
    }
}

fn parse_bounded(
    key: &str,
    value: &str,
    accept: impl Fn(f64) -> bool,
    range: &str,
) -> Result<f64, String> {
    let parsed = value
        .parse::<f64>()
        .map_err(|_| format!("Invalid number for '{key}': '{value}'"))?;
    if parsed.is_finite() && accept(parsed) {
        Ok(parsed)
    } else {
        Err(format!("Value for '{key}' must be in {range}, got '{value}'"))
    }
}

impl fmt::Display for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "[logging]")?;
        writeln!(f, "  level = \"{}\"", self.logging.level)?;
        writeln!(f, "  file = \"{}\"", self.logging.file)?;
        writeln!(f, "  verbose = {}", self.logging.verbose)?;

        writeln!(f, "\n[paths]")?;
        writeln!(f, "  catalog = \"{}\"", self.paths.catalog)?;
        writeln!(f, "  reports_dir = \"{}\"", self.paths.reports_dir)?;

        writeln!(f, "\n[projection]")?;
        writeln!(f, "  tax_rate = {}", self.projection.tax_rate)?;
        writeln!(f, "  weeks_per_year = {}", self.projection.weeks_per_year)?;
        writeln!(f, "  career_years = {}", self.projection.career_years)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_section_defaults_when_missing() {
        let config = Config::from_toml("[logging]\nlevel = \"warn\"\n").expect("parse");
        assert!((config.projection.tax_rate - DEFAULT_TAX_RATE).abs() < f64::EPSILON);
        assert!((config.projection.weeks_per_year - 30.0).abs() < f64::EPSILON);
        assert!((config.projection.career_years - 30.0).abs() < f64::EPSILON);
    }

    #[test]
    fn set_rejects_out_of_range_tax_rate() {
        let mut config = Config::from_defaults();
        assert!(config.set("tax_rate", "1.5").is_err());
        assert!(config.set("tax_rate", "abc").is_err());
        config.set("tax-rate", "0.3").expect("valid rate");
        assert_eq!(config.get("tax_rate").as_deref(), Some("0.3"));
    }

    #[test]
    fn policy_reflects_section() {
        let mut config = Config::from_defaults();
        config.set("weeks_per_year", "40").expect("weeks");
        let policy = config.projection.policy();
        assert!((policy.weeks_per_year - 40.0).abs() < f64::EPSILON);
    }
}
