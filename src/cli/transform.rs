//! Handler for the `transform` command.

use crate::cli::{input, InputArgs};
use crate::config::Config;

/// Execute the transform command.
pub fn execute(config: &Config, args: &InputArgs) -> anyhow::Result<()> {
    let text = input::read(args.file.as_deref())?;
    println!("{}", config.transformer().transform(&text));
    Ok(())
}
