/*
 * toc.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Toc command implementation
 */

use std::path::PathBuf;

use anyhow::{Context, Result};

use mdsection_core::sectionize;

use super::{display_name, read_tree, report_warnings, write_output};

/// Arguments for the toc command
#[derive(Debug)]
pub struct TocArgs {
    pub input: String,
    pub output: Option<PathBuf>,
    pub quiet: bool,
}

/// Print the nested ToC of the input document.
pub fn execute(args: TocArgs) -> Result<()> {
    let tree = read_tree(&args.input)?;

    let sectionized = sectionize(tree).with_context(|| {
        format!("Failed to build table of contents for {}", display_name(&args.input))
    })?;
    report_warnings(&sectionized.warnings, args.quiet);

    let json = serde_json::to_string_pretty(&sectionized.toc)?;
    write_output(args.output.as_deref(), &json)
}
