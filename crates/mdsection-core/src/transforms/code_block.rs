/*
 * code_block.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Transform that converts fenced code blocks to boxed-code elements.
 */

//! Code block conversion transform.
//!
//! Every `code` node in the tree is replaced by an element that the
//! rendering layer draws as a framed code listing.
//!
//! ## Input Structure
//!
//! ````markdown
//! ```rust id=main title="Entry point"
//! fn main() {}
//! ```
//! ````
//!
//! is parsed as a `code` node with `lang: "rust"` and
//! `meta: "id=main title=\"Entry point\""`.
//!
//! ## Output Structure
//!
//! ```json
//! {
//!   "type": "element",
//!   "name": "BoxedCode",
//!   "attributes": {"code": "fn main() {}", "lang": "rust", "id": "main"},
//!   "children": []
//! }
//! ```
//!
//! `lang` and `id` are only set when present. Other meta keys are dropped.

use hashlink::LinkedHashMap;
use mdsection_ast::{Code, Element, Node};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::Result;
use crate::transform::{AstTransform, TransformContext};

/// Element name emitted for code blocks unless configured otherwise.
pub const DEFAULT_CODE_BLOCK_COMPONENT: &str = "BoxedCode";

static META_PAIR: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"([^\s="]+)=(?:"([^"]*)"|(\S*))"#).expect("meta pair pattern is valid")
});

/// Parse a fence meta string into its `key=value` pairs.
///
/// Values may be double-quoted to include whitespace. Words without `=` are
/// ignored. A repeated key keeps its first position and its last value.
pub fn parse_code_meta(meta: &str) -> LinkedHashMap<String, String> {
    let mut pairs = LinkedHashMap::new();
    for captures in META_PAIR.captures_iter(meta) {
        let value = captures
            .get(2)
            .or_else(|| captures.get(3))
            .map_or("", |m| m.as_str());
        let key = captures[1].to_string();
        match pairs.get_mut(&key) {
            Some(existing) => *existing = value.to_string(),
            None => {
                pairs.insert(key, value.to_string());
            }
        }
    }
    pairs
}

/// Transform that converts `code` nodes to boxed-code elements.
pub struct CodeBlockTransform {
    component: String,
}

impl CodeBlockTransform {
    /// Create a transform that emits elements named `component`.
    pub fn new(component: impl Into<String>) -> Self {
        Self {
            component: component.into(),
        }
    }

    pub fn component(&self) -> &str {
        &self.component
    }

    fn boxed_code(&self, code: &Code) -> Element {
        let mut element =
            Element::new(self.component.as_str()).with_attribute("code", code.value.as_str());
        if let Some(lang) = &code.lang {
            element = element.with_attribute("lang", lang.as_str());
        }
        let id = code
            .meta
            .as_deref()
            .and_then(|meta| parse_code_meta(meta).remove("id"));
        if let Some(id) = id {
            element = element.with_attribute("id", id);
        }
        element
    }

    /// Convert `node` or its descendants, returning how many were converted.
    fn transform_node(&self, node: &mut Node) -> usize {
        if let Node::Code(code) = node {
            let element = self.boxed_code(code);
            *node = Node::Element(element);
            return 1;
        }

        match node.children_mut() {
            Some(children) => children
                .iter_mut()
                .map(|child| self.transform_node(child))
                .sum(),
            None => 0,
        }
    }
}

impl Default for CodeBlockTransform {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_BLOCK_COMPONENT)
    }
}

impl AstTransform for CodeBlockTransform {
    fn name(&self) -> &str {
        "code-blocks"
    }

    fn transform(&self, tree: &mut Node, _ctx: &mut TransformContext) -> Result<()> {
        let converted = self.transform_node(tree);
        tracing::debug!(converted, component = %self.component, "Converted code blocks");
        Ok(())
    }
}
