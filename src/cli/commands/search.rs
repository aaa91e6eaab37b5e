//! Search command handler

use super::load_catalog;
use course_roi::config::Config;
use course_roi::core::filter::search;
use course_roi::error;

/// Run the search command, printing one matching course name per line
pub fn run(query: &str, config: &Config) {
    let catalog = match load_catalog(config) {
        Ok(catalog) => catalog,
        Err(err) => {
            error!("Search failed: {err}");
            eprintln!("{err}");
            return;
        }
    };

    let matches = search(&catalog.names(), query);
    if matches.is_empty() {
        println!("✗ No courses match '{query}'");
        return;
    }
    for name in matches {
        println!("{name}");
    }
}
