//! Sectionize and code-block transforms for mdast document trees
//!
//! This crate turns a parsed Markdown document into the shape a
//! component-based renderer expects: flat section elements instead of
//! headings, boxed-code elements instead of fenced code, and a nested table
//! of contents stored in the document's build metadata.
//!
//! # Architecture
//!
//! - [`AstTransform`] - One pass over the tree
//! - [`TransformPipeline`] - Ordered transforms, built from [`MdsectionConfig`]
//! - [`TransformContext`] - Build metadata and warnings for one document
//! - [`nest_toc`] - Flat section records to a nested ToC
//!
//! # Example
//!
//! ```ignore
//! use mdsection_core::{BuildMetadata, MdsectionConfig, process_document};
//!
//! let tree = serde_json::from_str(&json)?;
//! let processed = process_document(tree, BuildMetadata::default(), &MdsectionConfig::default())?;
//! for warning in &processed.warnings {
//!     eprintln!("{}", warning.to_text());
//! }
//! ```

pub mod config;
pub mod diagnostic;
pub mod error;
pub mod heading_id;
pub mod metadata;
pub mod pipeline;
pub mod toc;
pub mod transform;
pub mod transforms;

pub use config::{ConfigError, MdsectionConfig};
pub use diagnostic::{Diagnostic, DiagnosticCollector, DiagnosticKind};
pub use error::{MdsectionError, Result};
pub use heading_id::{HeadingText, kebab_case, parse_heading_text};
pub use metadata::BuildMetadata;
pub use pipeline::{ProcessedDocument, build_pipeline, process_document};
pub use toc::{SectionRecord, TocError, TocNode, nest_toc};
pub use transform::{AstTransform, TransformContext, TransformPipeline};
pub use transforms::{
    CodeBlockTransform, SectionizeError, SectionizeTransform, Sectionized, sectionize,
};
