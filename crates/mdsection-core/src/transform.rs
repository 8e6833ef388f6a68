/*
 * transform.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Tree transformation pipeline infrastructure.
 */

//! Tree transformation pipeline infrastructure.
//!
//! This module provides the core abstractions for tree transformations:
//!
//! - [`AstTransform`] - The trait implemented by all transformations
//! - [`TransformContext`] - Per-document state shared by the transforms
//! - [`TransformPipeline`] - Ordered collection of transforms to execute
//!
//! # Architecture
//!
//! Transforms are run in a flat, ordered sequence (insertion order).
//! Each transform can:
//! - Mutate the document tree (replace, remove or wrap nodes)
//! - Write into the document's [`BuildMetadata`]
//! - Report non-fatal warnings through the context
//!
//! # Example
//!
//! ```ignore
//! use mdsection_core::transform::{AstTransform, TransformContext, TransformPipeline};
//!
//! struct MyTransform;
//!
//! impl AstTransform for MyTransform {
//!     fn name(&self) -> &str { "my-transform" }
//!
//!     fn transform(&self, tree: &mut Node, ctx: &mut TransformContext) -> Result<()> {
//!         // Modify the tree...
//!         Ok(())
//!     }
//! }
//!
//! let mut pipeline = TransformPipeline::new();
//! pipeline.push(Box::new(MyTransform));
//! pipeline.execute(&mut tree, &mut ctx)?;
//! ```

use mdsection_ast::Node;

use crate::Result;
use crate::diagnostic::Diagnostic;
use crate::metadata::BuildMetadata;

/// Per-document state passed through the pipeline.
#[derive(Debug, Default)]
pub struct TransformContext {
    /// Build metadata for the document being transformed
    pub metadata: BuildMetadata,

    /// Non-fatal warnings collected during transforms
    pub warnings: Vec<Diagnostic>,
}

impl TransformContext {
    pub fn new(metadata: BuildMetadata) -> Self {
        Self {
            metadata,
            warnings: Vec::new(),
        }
    }
}

/// Trait for tree transformations.
///
/// # Thread Safety
///
/// Transforms must be `Send + Sync` so that one pipeline can serve
/// documents processed on different threads.
pub trait AstTransform: Send + Sync {
    /// Human-readable name for this transform.
    ///
    /// Used for logging and for tagging diagnostics.
    fn name(&self) -> &str;

    /// Apply the transformation to the tree.
    ///
    /// # Errors
    ///
    /// Returns an error if the document violates a contract the transform
    /// depends on. The document should then be discarded.
    fn transform(&self, tree: &mut Node, ctx: &mut TransformContext) -> Result<()>;
}

/// A pipeline of tree transforms to execute in order.
pub struct TransformPipeline {
    transforms: Vec<Box<dyn AstTransform>>,
}

impl TransformPipeline {
    /// Create a new empty pipeline.
    pub fn new() -> Self {
        Self {
            transforms: Vec::new(),
        }
    }

    /// Add a transform to the pipeline.
    ///
    /// Transforms run in the order they are added.
    pub fn push(&mut self, transform: Box<dyn AstTransform>) {
        self.transforms.push(transform);
    }

    /// Add multiple transforms to the pipeline.
    pub fn extend(&mut self, transforms: impl IntoIterator<Item = Box<dyn AstTransform>>) {
        self.transforms.extend(transforms);
    }

    pub fn len(&self) -> usize {
        self.transforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transforms.is_empty()
    }

    /// Execute all transforms in insertion order.
    ///
    /// # Errors
    ///
    /// Returns the first error encountered. Execution stops on error.
    pub fn execute(&self, tree: &mut Node, ctx: &mut TransformContext) -> Result<()> {
        for transform in &self.transforms {
            tracing::debug!(transform = transform.name(), "Running transform");
            transform.transform(tree, ctx)?;
        }

        Ok(())
    }

    /// List the names of all transforms in execution order.
    pub fn transform_names(&self) -> Vec<&str> {
        self.transforms.iter().map(|t| t.name()).collect()
    }
}

impl Default for TransformPipeline {
    fn default() -> Self {
        Self::new()
    }
}
