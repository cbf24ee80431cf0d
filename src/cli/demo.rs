//! Handler for the `demo` command.

use crate::cli::output;
use crate::config::Config;
use crate::transform::EXAMPLE_ALERT;

/// Transform the built-in example alert and print it before and after.
pub fn execute(config: &Config) {
    let transformed = config.transformer().transform(EXAMPLE_ALERT);

    output::note("Original:");
    output::note(EXAMPLE_ALERT);
    output::rule();
    output::note("Transformed:");
    output::note(&transformed);
}
