use std::path::Path;

use crate::cli::output;
use crate::config::Config;
use crate::error::Result;

/// Validate the configuration file and summarize the effective tables.
pub fn execute_config(config_path: Option<&Path>) -> Result<()> {
    let config = match config_path {
        Some(path) => {
            output::note(&format!("Checking configuration: {}", path.display()));
            let config = Config::load(path)?;
            output::ok("Configuration file is valid");
            config
        }
        None => {
            output::note("No configuration file given, using built-in defaults");
            Config::default()
        }
    };

    let transformer = config.transformer();
    let lookup = transformer.lookup();

    output::section("Logging");
    output::key_value("Level", &config.logging.level);
    output::key_value("Format", &config.logging.format);

    output::section("Sports");
    let mut sports: Vec<_> = lookup.sports().iter().collect();
    sports.sort();
    for (sport, display) in sports {
        output::key_value(sport, display);
    }

    output::section("Bookmaker links");
    let mut urls: Vec<_> = lookup.bookmaker_urls().iter().collect();
    urls.sort();
    for (bookmaker, url) in urls {
        output::key_value(bookmaker, url);
    }

    Ok(())
}
