//! Alert input for commands that take a file or stdin.

use anyhow::Context;
use std::io;
use std::path::Path;

/// Read the whole alert from `file`, or from stdin when it is `None` or `-`.
pub fn read(file: Option<&Path>) -> anyhow::Result<String> {
    match file {
        Some(path) if path != Path::new("-") => std::fs::read_to_string(path)
            .with_context(|| format!("failed to read alert from {}", path.display())),
        _ => io::read_to_string(io::stdin()).context("failed to read alert from stdin"),
    }
}
