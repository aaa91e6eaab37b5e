//! CLI argument definitions for `courseroi`

use clap::{builder::BoolishValueParser, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

use course_roi::config::ConfigOverrides;
use course_roi::core::filter::SortKey;
use course_roi::core::report::ReportFormat;
use course_roi::logger::Level;

/// CLI log level argument
///
/// Represents log levels that can be passed via CLI arguments. Converts to lowercase
/// strings for config storage and to `Level` for runtime use.
#[derive(Copy, Clone, Debug, ValueEnum, PartialEq, Eq)]
pub enum LogLevelArg {
    /// Error-level logging
    Error,
    /// Warning-level logging
    Warn,
    /// Info-level logging
    Info,
    /// Debug-level logging
    Debug,
}

impl From<LogLevelArg> for Level {
    fn from(arg: LogLevelArg) -> Self {
        match arg {
            LogLevelArg::Error => Self::Error,
            LogLevelArg::Warn => Self::Warn,
            LogLevelArg::Info => Self::Info,
            LogLevelArg::Debug => Self::Debug,
        }
    }
}

impl std::fmt::Display for LogLevelArg {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let as_str = match self {
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
        };
        write!(f, "{as_str}")
    }
}

/// Output format argument
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum FormatArg {
    /// Plain text
    #[default]
    Text,
    /// Markdown tables
    #[value(alias = "md")]
    Markdown,
    /// JSON
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Markdown => Self::Markdown,
            FormatArg::Json => Self::Json,
        }
    }
}

/// Sort order argument for `rank`
#[derive(Copy, Clone, Debug, Default, ValueEnum, PartialEq, Eq)]
pub enum SortArg {
    /// Highest ROI first
    #[default]
    RoiDesc,
    /// Lowest ROI first
    RoiAsc,
    /// Shortest payback first
    PaybackAsc,
    /// Longest payback first
    PaybackDesc,
    /// Cheapest first
    CostAsc,
    /// Most expensive first
    CostDesc,
    /// Alphabetical
    Name,
}

impl From<SortArg> for SortKey {
    fn from(arg: SortArg) -> Self {
        match arg {
            SortArg::RoiDesc => Self::RoiDesc,
            SortArg::RoiAsc => Self::RoiAsc,
            SortArg::PaybackAsc => Self::PaybackAsc,
            SortArg::PaybackDesc => Self::PaybackDesc,
            SortArg::CostAsc => Self::CostAsc,
            SortArg::CostDesc => Self::CostDesc,
            SortArg::Name => Self::Name,
        }
    }
}

#[derive(Debug, Subcommand)]
pub enum ConfigSubcommand {
    /// Display configuration values.
    ///
    /// If a KEY is provided, displays only that configuration value.
    /// If no KEY is provided, displays all configuration values.
    Get {
        /// Optional configuration key to display (e.g., `level`, `catalog`, `tax_rate`)
        #[arg(value_name = "KEY")]
        key: Option<String>,
    },
    /// Set a configuration value.
    Set {
        /// Configuration key to set
        #[arg(value_name = "KEY")]
        key: String,
        /// Value to set
        #[arg(value_name = "VALUE")]
        value: String,
    },
    /// Unset a configuration value.
    Unset {
        /// Configuration key to unset
        #[arg(value_name = "KEY")]
        key: String,
    },
    /// Reset configuration to defaults (requires confirmation).
    Reset,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Manage configuration.
    ///
    /// If no subcommand is provided, displays all configuration values.
    Config {
        #[command(subcommand)]
        subcommand: Option<ConfigSubcommand>,
    },
    /// Project cost, payback and ROI for one course.
    ///
    /// The course is looked up by its display name in the catalog.
    Project {
        /// Course display name, e.g. "Computer Science - UCD"
        #[arg(value_name = "NAME")]
        name: String,

        /// Custom annual tuition (ignored unless positive)
        #[arg(long, value_name = "EUR")]
        tuition: Option<f64>,

        /// Part-time hours worked per week during the course
        #[arg(long, value_name = "HOURS", requires = "hourly_rate")]
        part_time_hours: Option<f64>,

        /// Hourly rate for part-time work
        #[arg(long, value_name = "EUR", requires = "part_time_hours")]
        hourly_rate: Option<f64>,

        /// Part-time working weeks per year (default from config)
        #[arg(long, value_name = "WEEKS", requires = "part_time_hours")]
        weeks: Option<f64>,

        /// Skip the comparison against catalog averages
        #[arg(long)]
        no_benchmark: bool,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: FormatArg,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Compare 2 to 5 courses side by side.
    Compare {
        /// Course display names
        #[arg(value_name = "NAMES", num_args = 1..)]
        names: Vec<String>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: FormatArg,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Filter and rank the catalog.
    Rank {
        /// Keep courses from this university abbreviation (repeatable)
        #[arg(short, long = "university", value_name = "ABBREV")]
        universities: Vec<String>,

        /// Keep courses in this field (repeatable, loose match)
        #[arg(long = "field", value_name = "FIELD")]
        fields: Vec<String>,

        /// Sort order
        #[arg(short, long, value_enum, default_value_t)]
        sort: SortArg,

        /// Show only the first N courses
        #[arg(short = 'n', long, value_name = "N")]
        top: Option<usize>,

        /// Output format
        #[arg(short, long, value_enum, default_value_t)]
        format: FormatArg,

        /// Write the report to a file instead of stdout
        #[arg(short, long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
    /// Search course names in the catalog.
    Search {
        /// Case-insensitive text to look for
        #[arg(value_name = "QUERY")]
        query: String,
    },
}

#[derive(Parser, Debug)]
#[command(
    name = "courseroi",
    about = "Course return-on-investment calculator",
    version = env!("CARGO_PKG_VERSION")
)]
pub struct Cli {
    /// Set the runtime log level (error|warn|info|debug). Falls back to config if omitted.
    #[arg(long, value_enum)]
    pub log_level: Option<LogLevelArg>,

    /// Enable verbose output (runtime only)
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,

    /// Enable debug-level logging and runtime debug flag (shorthand)
    #[arg(long = "debug")]
    pub debug_flag: bool,

    /// Write runtime logs to a file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    // --- Config overrides ---
    /// Override config logging level (stored in config file)
    #[arg(long = "config-level", value_enum)]
    pub config_level: Option<LogLevelArg>,

    /// Override config log file path
    #[arg(long = "config-log-file", value_name = "PATH")]
    pub config_log_file: Option<PathBuf>,

    /// Override config verbose flag (true/false)
    #[arg(long = "config-verbose", value_parser = BoolishValueParser::new())]
    pub config_verbose: Option<bool>,

    /// Override config catalog path
    #[arg(long = "config-catalog", value_name = "FILE")]
    pub config_catalog: Option<PathBuf>,

    /// Override config catalog path (short form)
    #[arg(long = "catalog", value_name = "FILE")]
    pub catalog: Option<PathBuf>,

    /// Override config reports directory
    #[arg(long = "config-reports-dir", value_name = "DIR")]
    pub config_reports_dir: Option<PathBuf>,

    /// Override config reports directory (short form)
    #[arg(long = "reports-dir", value_name = "DIR")]
    pub reports_dir: Option<PathBuf>,

    /// Override the tax rate used to derive net income
    #[arg(long = "tax-rate", value_name = "RATE")]
    pub tax_rate: Option<f64>,

    /// Subcommand to execute.
    /// A subcommand is required to run the CLI.
    #[command(subcommand)]
    pub command: Command,
}

impl Cli {
    /// Convert CLI flags into config overrides
    ///
    /// Short-form flags (e.g., `--catalog`) take precedence over long-form
    /// flags (e.g., `--config-catalog`) when both are provided.
    pub fn to_config_overrides(&self) -> ConfigOverrides {
        let path_string = |p: &PathBuf| p.to_string_lossy().to_string();
        ConfigOverrides {
            level: self.config_level.map(|lvl| lvl.to_string()),
            file: self.config_log_file.as_ref().map(path_string),
            verbose: self.config_verbose,
            catalog: self
                .catalog
                .as_ref()
                .or(self.config_catalog.as_ref())
                .map(path_string),
            reports_dir: self
                .reports_dir
                .as_ref()
                .or(self.config_reports_dir.as_ref())
                .map(path_string),
            tax_rate: self.tax_rate,
        }
    }
}
