//! CLI command handlers for `courseroi`.
//!
//! Each command is implemented in its own submodule. Handlers print `✓`/`✗`
//! status lines and never panic on bad input.

pub mod compare;
pub mod config;
pub mod project;
pub mod rank;
pub mod search;

use course_roi::config::Config;
use course_roi::core::report::write_report;
use course_roi::core::Catalog;
use course_roi::{error, info};
use std::path::{Path, PathBuf};

/// Load the catalog named by `paths.catalog`
fn load_catalog(config: &Config) -> Result<Catalog, String> {
    if config.paths.catalog.is_empty() {
        return Err(
            "✗ No catalog configured. Set one with `courseroi config set catalog <FILE>` or pass --catalog."
                .to_string(),
        );
    }
    let path = Path::new(&config.paths.catalog);
    let catalog = Catalog::load(path).map_err(|e| {
        error!("Failed to load catalog {}: {e}", path.display());
        format!("✗ {e}")
    })?;
    info!("Catalog loaded: {} ({} courses)", path.display(), catalog.len());
    Ok(catalog)
}

/// Resolve a report path: bare file names land in `paths.reports_dir`
fn resolve_output(output: &Path, config: &Config) -> PathBuf {
    let bare = output.parent().map_or(true, |p| p.as_os_str().is_empty());
    if bare && !output.is_absolute() && !config.paths.reports_dir.is_empty() {
        PathBuf::from(&config.paths.reports_dir).join(output)
    } else {
        output.to_path_buf()
    }
}

/// Print rendered content, or write it to `output` when given
fn emit(content: &str, output: Option<&Path>, config: &Config) -> Result<(), String> {
    match output {
        None => {
            print!("{content}");
            if !content.ends_with('\n') {
                println!();
            }
            Ok(())
        }
        Some(output) => {
            let path = resolve_output(output, config);
            write_report(&path, content).map_err(|e| {
                error!("Failed to write report {}: {e}", path.display());
                format!("✗ Failed to write {}: {e}", path.display())
            })?;
            println!("✓ Report written: {}", path.display());
            Ok(())
        }
    }
}
