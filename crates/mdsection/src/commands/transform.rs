/*
 * transform.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform command implementation
 */

//! Transform command implementation.
//!
//! Reads an mdast JSON tree, runs the configured pipeline and writes
//! `{"tree": ..., "metadata": ...}` as pretty-printed JSON.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;

use mdsection_core::{BuildMetadata, MdsectionConfig, process_document};

use super::{display_name, read_tree, report_warnings, write_output};

/// Arguments for the transform command
#[derive(Debug)]
pub struct TransformArgs {
    /// Input file, or `-` for stdin
    pub input: String,
    pub output: Option<PathBuf>,
    /// Build metadata JSON file
    pub meta: Option<PathBuf>,
    /// YAML config file
    pub config: Option<PathBuf>,
    /// Suppress warnings
    pub quiet: bool,
}

/// Execute the transform command
pub fn execute(args: TransformArgs) -> Result<()> {
    let config = match &args.config {
        Some(path) => MdsectionConfig::load(path)?,
        None => MdsectionConfig::default(),
    };

    let metadata = match &args.meta {
        Some(path) => {
            let json = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read metadata file: {}", path.display()))?;
            serde_json::from_str::<BuildMetadata>(&json)
                .with_context(|| format!("Failed to parse metadata JSON: {}", path.display()))?
        }
        None => BuildMetadata::default(),
    };

    let tree = read_tree(&args.input)?;
    debug!(input = display_name(&args.input), ?config, "Transforming document");

    let processed = process_document(tree, metadata, &config)
        .with_context(|| format!("Failed to transform {}", display_name(&args.input)))?;
    report_warnings(&processed.warnings, args.quiet);

    let json = serde_json::to_string_pretty(&processed)?;
    write_output(args.output.as_deref(), &json)
}
