/*
 * transforms/mod.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document tree transforms.
 */

//! Document tree transforms.
//!
//! - [`CodeBlockTransform`] - Converts fenced code blocks to boxed-code elements
//! - [`SectionizeTransform`] - Replaces headings with section elements and stores the ToC
//!
//! These transforms implement [`AstTransform`](crate::transform::AstTransform) and
//! can be added to a [`TransformPipeline`](crate::transform::TransformPipeline).

mod code_block;
mod sectionize;

pub use code_block::{CodeBlockTransform, DEFAULT_CODE_BLOCK_COMPONENT, parse_code_meta};
pub use sectionize::{
    MAX_SECTION_DEPTH, SectionizeError, SectionizeTransform, Sectionized, is_section_boundary,
    section_component, sectionize,
};
