/*
 * pipeline.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Pipeline assembly and the per-document entry point.
 */

//! Pipeline assembly and the per-document entry point.
//!
//! The enabled transforms always run in this order:
//!
//! 1. `code-blocks` - so that sections absorb already converted code
//! 2. `sectionize` - which also stores the ToC in the build metadata

use mdsection_ast::Node;
use serde::Serialize;

use crate::Result;
use crate::config::MdsectionConfig;
use crate::diagnostic::Diagnostic;
use crate::metadata::BuildMetadata;
use crate::transform::{TransformContext, TransformPipeline};
use crate::transforms::{CodeBlockTransform, SectionizeTransform};

/// A document after the pipeline has run.
#[derive(Debug, Serialize)]
pub struct ProcessedDocument {
    pub tree: Node,
    pub metadata: BuildMetadata,

    /// Not serialized; callers decide how to report them
    #[serde(skip)]
    pub warnings: Vec<Diagnostic>,
}

/// Build the transform pipeline for `config`.
pub fn build_pipeline(config: &MdsectionConfig) -> TransformPipeline {
    let mut pipeline = TransformPipeline::new();

    if config.code_blocks {
        pipeline.push(Box::new(CodeBlockTransform::new(
            config.code_block_component.as_str(),
        )));
    }
    if config.sectionize {
        pipeline.push(Box::new(SectionizeTransform::new()));
    }

    pipeline
}

/// Run the configured transforms over one document.
///
/// # Errors
///
/// Fails when a transform rejects the document, for example when its
/// headings do not contain exactly one page title. No partial output is
/// returned in that case.
pub fn process_document(
    mut tree: Node,
    metadata: BuildMetadata,
    config: &MdsectionConfig,
) -> Result<ProcessedDocument> {
    let pipeline = build_pipeline(config);
    let mut ctx = TransformContext::new(metadata);

    tracing::debug!(transforms = ?pipeline.transform_names(), "Processing document");
    pipeline.execute(&mut tree, &mut ctx)?;

    Ok(ProcessedDocument {
        tree,
        metadata: ctx.metadata,
        warnings: ctx.warnings,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use mdsection_ast::Code;
    use serde_json::json;

    fn make_document() -> Node {
        Node::root(vec![
            Node::heading(1, vec![Node::text("Guide")]),
            Node::heading(2, vec![Node::text("Install")]),
            Node::Code(Code::new("cargo install mdsection").with_lang("sh")),
        ])
    }

    #[test]
    fn test_default_pipeline_order() {
        let pipeline = build_pipeline(&MdsectionConfig::default());
        assert_eq!(pipeline.transform_names(), vec!["code-blocks", "sectionize"]);
    }

    #[test]
    fn test_disabled_transforms_are_skipped() {
        let config = MdsectionConfig {
            code_blocks: false,
            ..MdsectionConfig::default()
        };
        assert_eq!(build_pipeline(&config).transform_names(), vec!["sectionize"]);

        let config = MdsectionConfig {
            code_blocks: false,
            sectionize: false,
            ..MdsectionConfig::default()
        };
        assert!(build_pipeline(&config).is_empty());
    }

    #[test]
    fn test_sections_absorb_converted_code() {
        let processed = process_document(
            make_document(),
            BuildMetadata::default(),
            &MdsectionConfig::default(),
        )
        .unwrap();

        let blocks = processed.tree.children().unwrap();
        assert_eq!(blocks.len(), 2);
        let install = blocks[1].as_element().unwrap();
        assert_eq!(install.name, "SubSection");
        assert_eq!(install.children[0].as_element().unwrap().name, "BoxedCode");

        assert_eq!(processed.warnings.len(), 1);
        assert_eq!(
            processed.metadata.toc().unwrap().map(|toc| toc.len()),
            Some(1)
        );
    }

    #[test]
    fn test_sectionize_disabled_leaves_metadata_alone() {
        let config = MdsectionConfig {
            sectionize: false,
            ..MdsectionConfig::default()
        };
        let processed =
            process_document(make_document(), BuildMetadata::default(), &config).unwrap();

        assert_eq!(processed.tree.children().unwrap().len(), 3);
        assert_eq!(processed.metadata, BuildMetadata::default());
        assert!(processed.warnings.is_empty());
    }

    #[test]
    fn test_serialized_output_skips_warnings() {
        let processed = process_document(
            Node::root(vec![]),
            BuildMetadata::default(),
            &MdsectionConfig::default(),
        )
        .unwrap();

        assert_eq!(
            serde_json::to_value(&processed).unwrap(),
            json!({
                "tree": {"type": "root", "children": []},
                "metadata": {"frontmatter": {"toc": []}}
            })
        );
    }
}
