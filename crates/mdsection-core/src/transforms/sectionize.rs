/*
 * sectionize.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that replaces headings with section elements and builds the ToC.
 */

//! Sectionize transform.
//!
//! Each heading of depth 1-4, together with the content that follows it, is
//! replaced by a single section element. The same pass records every
//! heading's title and id, and those records are nested into the table of
//! contents once the walk is done.
//!
//! ## Section boundaries
//!
//! A section absorbs the siblings after its heading up to, but not
//! including, the next heading of depth 1-4 or the next `export` node.
//! Heading depth never nests content: a depth-3 heading closes a depth-2
//! section just like another depth-2 heading would. Nesting only exists in
//! the ToC.
//!
//! ## Example
//!
//! Input:
//! ```markdown
//! # Guide
//! Intro.
//! ## Setup (#install)
//! Steps.
//! ### Linux
//! More steps.
//! ```
//!
//! Output structure:
//! ```text
//! Section(title="Guide", id="guide")
//!   Para "Intro."
//! SubSection(title="Setup", id="install")
//!   Para "Steps."
//! SubSubSection(title="Linux", id="linux")
//!   Para "More steps."
//! ```
//!
//! ## Traversal
//!
//! The walk is a single forward pass. Each container is rebuilt into a fresh
//! child list, so collapsing a heading and its span into one element never
//! invalidates the iteration. The walk resumes at the boundary that ended
//! the span; absorbed content is not visited.

use mdsection_ast::{Element, Heading, Node};
use thiserror::Error;

use crate::Result;
use crate::diagnostic::{Diagnostic, DiagnosticCollector};
use crate::heading_id::{HeadingText, parse_heading_text};
use crate::toc::{SectionRecord, TocNode, nest_toc};
use crate::transform::{AstTransform, TransformContext};

/// Deepest heading that opens a section.
pub const MAX_SECTION_DEPTH: u8 = 4;

const TRANSFORM_NAME: &str = "sectionize";

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SectionizeError {
    #[error("Unsupported heading depth {depth}: section components exist for depths 1-4 only")]
    UnsupportedDepth { depth: u8 },
}

/// Element name for the section opened by a heading of `depth`.
pub fn section_component(depth: u8) -> std::result::Result<&'static str, SectionizeError> {
    match depth {
        1 => Ok("Section"),
        2 => Ok("SubSection"),
        3 => Ok("SubSubSection"),
        4 => Ok("SubSubSubSection"),
        depth => Err(SectionizeError::UnsupportedDepth { depth }),
    }
}

fn opens_section(heading: &Heading) -> bool {
    (1..=MAX_SECTION_DEPTH).contains(&heading.depth)
}

/// Whether `node` ends the content span of the section before it.
pub fn is_section_boundary(node: &Node) -> bool {
    match node {
        Node::Heading(heading) => opens_section(heading),
        Node::Export(_) => true,
        _ => false,
    }
}

/// The outputs of one sectionize pass.
#[derive(Debug)]
pub struct Sectionized {
    /// The rewritten tree
    pub tree: Node,

    /// Nested table of contents, page title excluded
    pub toc: Vec<TocNode>,

    /// Flat section records in document order
    pub records: Vec<SectionRecord>,

    /// Non-fatal warnings, one per depth-1 heading
    pub warnings: Vec<Diagnostic>,
}

/// Sectionize a document tree and build its table of contents.
///
/// This is the metadata-free form of [`SectionizeTransform`]: the ToC is
/// returned next to the tree instead of being stored anywhere.
pub fn sectionize(mut tree: Node) -> Result<Sectionized> {
    let (records, warnings) = sectionize_tree(&mut tree)?;
    let toc = nest_toc(records.clone())?;
    Ok(Sectionized {
        tree,
        toc,
        records,
        warnings,
    })
}

/// Rewrite `tree` in place, returning the section records and warnings.
fn sectionize_tree(
    tree: &mut Node,
) -> std::result::Result<(Vec<SectionRecord>, Vec<Diagnostic>), SectionizeError> {
    let mut sectionizer = Sectionizer {
        records: Vec::new(),
        diagnostics: DiagnosticCollector::new(TRANSFORM_NAME),
    };
    sectionizer.visit(tree)?;
    Ok((sectionizer.records, sectionizer.diagnostics.into_diagnostics()))
}

struct Sectionizer {
    /// ToC accumulator, in document order
    records: Vec<SectionRecord>,
    diagnostics: DiagnosticCollector,
}

impl Sectionizer {
    fn visit(&mut self, node: &mut Node) -> std::result::Result<(), SectionizeError> {
        match node.children_mut() {
            Some(children) => {
                let (rebuilt, result) = self.rebuild(std::mem::take(children));
                *children = rebuilt;
                result
            }
            None => Ok(()),
        }
    }

    /// Rebuild one child list, replacing each heading span with a section.
    ///
    /// Every input node ends up in the returned list, also when an error
    /// stops the rewrite part way.
    fn rebuild(
        &mut self,
        input: Vec<Node>,
    ) -> (Vec<Node>, std::result::Result<(), SectionizeError>) {
        let mut output = Vec::with_capacity(input.len());
        let mut rest = input.into_iter().peekable();

        while let Some(node) = rest.next() {
            match node {
                Node::Heading(heading) if opens_section(&heading) => {
                    let component = match section_component(heading.depth) {
                        Ok(component) => component,
                        Err(err) => {
                            output.push(Node::Heading(heading));
                            output.extend(rest);
                            return (output, Err(err));
                        }
                    };

                    let mut content = Vec::new();
                    while let Some(next) = rest.next_if(|n| !is_section_boundary(n)) {
                        content.push(next);
                    }
                    output.push(self.section(component, heading, content));
                }
                mut other => {
                    let result = self.visit(&mut other);
                    output.push(other);
                    if let Err(err) = result {
                        output.extend(rest);
                        return (output, Err(err));
                    }
                }
            }
        }

        (output, Ok(()))
    }

    fn section(&mut self, component: &'static str, heading: Heading, content: Vec<Node>) -> Node {
        let text = heading.plain_text();
        let HeadingText { title, id } = parse_heading_text(text.trim_end());

        if heading.depth == 1 {
            self.diagnostics.warn(format!(
                "Page title \"{title}\" has id \"{id}\", which will be overridden: \
                 the page-level Section is always rendered with a fixed id"
            ));
        }

        tracing::debug!(
            component,
            id = %id,
            absorbed = content.len(),
            "Emitting section"
        );
        self.records
            .push(SectionRecord::new(heading.depth, title.clone(), id.clone()));

        Node::Element(
            Element::new(component)
                .with_attribute("title", title)
                .with_attribute("id", id)
                .with_children(content),
        )
    }
}

/// Transform that replaces headings with section elements.
///
/// After the walk the nested ToC is stored at `frontmatter.toc` in the
/// document's build metadata; other metadata fields are left alone.
pub struct SectionizeTransform;

impl SectionizeTransform {
    /// Create a new sectionize transform.
    pub fn new() -> Self {
        Self
    }
}

impl Default for SectionizeTransform {
    fn default() -> Self {
        Self::new()
    }
}

impl AstTransform for SectionizeTransform {
    fn name(&self) -> &str {
        TRANSFORM_NAME
    }

    fn transform(&self, tree: &mut Node, ctx: &mut TransformContext) -> Result<()> {
        let (records, warnings) = sectionize_tree(tree)?;
        ctx.warnings.extend(warnings);

        let toc = nest_toc(records)?;
        tracing::debug!(entries = toc.len(), "Storing table of contents");
        ctx.metadata.set_toc(&toc)?;

        Ok(())
    }
}
