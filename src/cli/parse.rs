//! Handler for the `parse` command.

use crate::cli::{input, InputArgs};
use crate::config::Config;
use crate::error::Error;

/// Execute the parse command.
pub fn execute(config: &Config, args: &InputArgs) -> anyhow::Result<()> {
    let text = input::read(args.file.as_deref())?;
    let record = config.transformer().parse(&text)?;
    let json = serde_json::to_string_pretty(&record).map_err(Error::from)?;
    println!("{json}");
    Ok(())
}
