//! Command implementations for the mdsection CLI
//!
//! Each command module handles the CLI interface and delegates to
//! mdsection-core for the actual work.

use std::path::Path;

use anyhow::{Context, Result};
use mdsection_ast::Node;
use mdsection_core::Diagnostic;

pub mod toc;
pub mod transform;

/// Name used for `input` in messages.
pub fn display_name(input: &str) -> &str {
    if input == "-" { "<stdin>" } else { input }
}

/// Read the whole input, `-` meaning stdin.
pub fn read_input(input: &str) -> Result<String> {
    if input == "-" {
        return std::io::read_to_string(std::io::stdin()).context("Failed to read stdin");
    }
    std::fs::read_to_string(input).with_context(|| format!("Failed to read input file: {input}"))
}

/// Read and decode an mdast JSON tree.
pub fn read_tree(input: &str) -> Result<Node> {
    let json = read_input(input)?;
    serde_json::from_str(&json)
        .with_context(|| format!("Failed to parse mdast JSON from {}", display_name(input)))
}

/// Write `json` to `output`, or to stdout when no path is given.
pub fn write_output(output: Option<&Path>, json: &str) -> Result<()> {
    match output {
        Some(path) => {
            std::fs::write(path, format!("{json}\n"))
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            tracing::info!("Output: {}", path.display());
        }
        None => println!("{json}"),
    }
    Ok(())
}

pub fn report_warnings(warnings: &[Diagnostic], quiet: bool) {
    if quiet {
        return;
    }
    for warning in warnings {
        eprintln!("{}", warning.to_text());
    }
}
