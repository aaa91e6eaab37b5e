//! Command-line interface entry point for `courseroi`

mod args;
mod commands;

use args::{Cli, Command};
use clap::Parser;
use course_roi::config::Config;
use course_roi::core::projection::{Overrides, PartTimeWork};
use course_roi::info;
use course_roi::logger::{enable_debug, enable_verbose, init_file_logging, set_level, Level};
use std::path::PathBuf;

fn main() {
    let args = Cli::parse();

    // Load configuration once at startup and apply CLI overrides to it
    let mut config = Config::load();
    let defaults = Config::from_defaults();
    config.apply_overrides(&args.to_config_overrides());

    // CLI flag overrides config logging.level; fallback warn
    let effective_level = args
        .log_level
        .map(Level::from)
        .or_else(|| config.logging.level.parse::<Level>().ok())
        .unwrap_or(Level::Warn);

    let mut level = effective_level;
    if args.debug_flag || level == Level::Debug {
        level = Level::Debug;
        enable_debug();
    }

    let verbose = args.verbose || config.logging.verbose;
    if verbose {
        enable_verbose();
    }
    set_level(level);

    // CLI flag wins, otherwise use config logging.file if set
    let config_log_path: Option<PathBuf> = if config.logging.file.is_empty() {
        None
    } else {
        Some(PathBuf::from(&config.logging.file))
    };

    if let Some(log_path) = args.log_file.as_ref().or(config_log_path.as_ref()) {
        if let Some(parent) = log_path.parent() {
            let _ = std::fs::create_dir_all(parent);
        }
        let display_path = log_path.to_string_lossy();
        if init_file_logging(log_path) {
            if verbose {
                eprintln!("✓ File logging initialized at: {display_path}");
            } else {
                info!("File logging initialized at: {display_path}");
            }
        } else {
            eprintln!("✗ Failed to initialize file logging at: {display_path}");
        }
    }

    match args.command {
        Command::Config { subcommand } => {
            commands::config::run(subcommand, &mut config, &defaults);
        }
        Command::Project {
            name,
            tuition,
            part_time_hours,
            hourly_rate,
            weeks,
            no_benchmark,
            format,
            output,
        } => {
            let mut overrides = Overrides::none();
            if let Some(tuition) = tuition {
                overrides = overrides.with_tuition(tuition);
            }
            if let (Some(hours), Some(rate)) = (part_time_hours, hourly_rate) {
                let mut work = PartTimeWork::new(hours, rate);
                if let Some(weeks) = weeks {
                    work = work.with_weeks(weeks);
                }
                overrides = overrides.with_part_time(work);
            }
            commands::project::run(
                &name,
                &overrides,
                !no_benchmark,
                format.into(),
                output.as_deref(),
                &config,
            );
        }
        Command::Compare {
            names,
            format,
            output,
        } => {
            commands::compare::run(&names, format.into(), output.as_deref(), &config);
        }
        Command::Rank {
            universities,
            fields,
            sort,
            top,
            format,
            output,
        } => {
            let criteria = course_roi::core::FilterCriteria {
                universities,
                fields,
                sort_by: sort.into(),
            };
            commands::rank::run(&criteria, top, format.into(), output.as_deref(), &config);
        }
        Command::Search { query } => {
            commands::search::run(&query, &config);
        }
    }
}
