/*
 * node.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Document tree nodes.
 */

//! Document tree nodes.
//!
//! Nodes use the mdast JSON shape: every node is an object with a `type`
//! tag, and container nodes carry an ordered `children` array.
//!
//! Only the node types the transforms care about are modelled as typed
//! structs. Every other node type is kept as an [`OtherNode`], which
//! preserves all of its fields and still exposes `children` so that the
//! transforms can walk into it.
//!
//! ## Example
//!
//! ```json
//! {"type": "heading", "depth": 2, "children": [{"type": "text", "value": "Intro"}]}
//! ```

use hashlink::LinkedHashMap;
use serde::de::{self, Deserializer};
use serde::ser::{self, Serializer};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Fields of a node that are carried through untouched (`position`, `data`, ...).
pub type Fields = Map<String, Value>;

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Root(Root),
    Heading(Heading),
    Text(Text),
    Code(Code),
    Export(Export),
    Element(Element),
    Other(OtherNode),
}

/// The document root.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Root {
    #[serde(default)]
    pub children: Vec<Node>,

    #[serde(flatten)]
    pub extra: Fields,
}

/// A Markdown heading. `children` holds the inline content.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    pub depth: u8,

    #[serde(default)]
    pub children: Vec<Node>,

    #[serde(flatten)]
    pub extra: Fields,
}

/// A run of plain text.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Text {
    #[serde(default)]
    pub value: String,

    #[serde(flatten)]
    pub extra: Fields,
}

/// A fenced code block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Code {
    /// Language named after the opening fence (e.g. `rust`)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub lang: Option<String>,

    /// Everything after the language on the opening fence line
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub meta: Option<String>,

    #[serde(default)]
    pub value: String,

    #[serde(flatten)]
    pub extra: Fields,
}

/// A module-level declaration embedded in the document (`export const x = 1`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Export {
    #[serde(default)]
    pub value: String,

    #[serde(flatten)]
    pub extra: Fields,
}

/// A named component element consumed by the rendering layer.
///
/// Attribute order is preserved, which keeps serialized output stable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    pub name: String,

    #[serde(default)]
    pub attributes: LinkedHashMap<String, String>,

    #[serde(default)]
    pub children: Vec<Node>,
}

/// Any node type without a dedicated struct (`paragraph`, `emphasis`, `list`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OtherNode {
    #[serde(skip)]
    pub node_type: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<Node>>,

    #[serde(flatten)]
    pub fields: Fields,
}

impl Node {
    /// Create a document root.
    pub fn root(children: Vec<Node>) -> Self {
        Node::Root(Root {
            children,
            extra: Fields::new(),
        })
    }

    /// Create a heading node.
    pub fn heading(depth: u8, children: Vec<Node>) -> Self {
        Node::Heading(Heading::new(depth, children))
    }

    /// Create a text node.
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text(Text {
            value: value.into(),
            extra: Fields::new(),
        })
    }

    /// Create an export node.
    pub fn export(value: impl Into<String>) -> Self {
        Node::Export(Export {
            value: value.into(),
            extra: Fields::new(),
        })
    }

    /// Create a generic container node such as `paragraph` or `emphasis`.
    pub fn parent(node_type: impl Into<String>, children: Vec<Node>) -> Self {
        Node::Other(OtherNode {
            node_type: node_type.into(),
            children: Some(children),
            fields: Fields::new(),
        })
    }

    /// Create a generic leaf node carrying a `value`, such as `inlineCode`.
    pub fn literal(node_type: impl Into<String>, value: impl Into<String>) -> Self {
        let mut fields = Fields::new();
        fields.insert("value".to_string(), Value::String(value.into()));
        Node::Other(OtherNode {
            node_type: node_type.into(),
            children: None,
            fields,
        })
    }

    /// Shorthand for a paragraph containing a single text node.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Node::parent("paragraph", vec![Node::text(text)])
    }

    /// The node's `type` tag.
    pub fn node_type(&self) -> &str {
        match self {
            Node::Root(_) => "root",
            Node::Heading(_) => "heading",
            Node::Text(_) => "text",
            Node::Code(_) => "code",
            Node::Export(_) => "export",
            Node::Element(_) => "element",
            Node::Other(other) => &other.node_type,
        }
    }

    /// Child nodes, if this node is a container.
    pub fn children(&self) -> Option<&[Node]> {
        match self {
            Node::Root(root) => Some(&root.children),
            Node::Heading(heading) => Some(&heading.children),
            Node::Element(element) => Some(&element.children),
            Node::Other(other) => other.children.as_deref(),
            Node::Text(_) | Node::Code(_) | Node::Export(_) => None,
        }
    }

    /// Mutable child nodes, if this node is a container.
    pub fn children_mut(&mut self) -> Option<&mut Vec<Node>> {
        match self {
            Node::Root(root) => Some(&mut root.children),
            Node::Heading(heading) => Some(&mut heading.children),
            Node::Element(element) => Some(&mut element.children),
            Node::Other(other) => other.children.as_mut(),
            Node::Text(_) | Node::Code(_) | Node::Export(_) => None,
        }
    }

    pub fn as_heading(&self) -> Option<&Heading> {
        match self {
            Node::Heading(heading) => Some(heading),
            _ => None,
        }
    }

    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Decode a node from its JSON value.
    pub fn from_value(value: Value) -> Result<Node, serde_json::Error> {
        let Value::Object(mut map) = value else {
            return Err(de::Error::custom("node must be a JSON object"));
        };
        let node_type = match map.remove("type") {
            Some(Value::String(node_type)) => node_type,
            Some(_) => return Err(de::Error::custom("node `type` must be a string")),
            None => return Err(de::Error::missing_field("type")),
        };
        let rest = Value::Object(map);

        let node = match node_type.as_str() {
            "root" => Node::Root(serde_json::from_value(rest)?),
            "heading" => Node::Heading(serde_json::from_value(rest)?),
            "text" => Node::Text(serde_json::from_value(rest)?),
            "code" => Node::Code(serde_json::from_value(rest)?),
            "export" => Node::Export(serde_json::from_value(rest)?),
            "element" => Node::Element(serde_json::from_value(rest)?),
            _ => {
                let mut other: OtherNode = serde_json::from_value(rest)?;
                other.node_type = node_type.clone();
                Node::Other(other)
            }
        };
        Ok(node)
    }

    /// Encode this node as a JSON value, `type` tag included.
    pub fn to_value(&self) -> Result<Value, serde_json::Error> {
        let body = match self {
            Node::Root(root) => serde_json::to_value(root)?,
            Node::Heading(heading) => serde_json::to_value(heading)?,
            Node::Text(text) => serde_json::to_value(text)?,
            Node::Code(code) => serde_json::to_value(code)?,
            Node::Export(export) => serde_json::to_value(export)?,
            Node::Element(element) => serde_json::to_value(element)?,
            Node::Other(other) => serde_json::to_value(other)?,
        };

        let mut map = Map::new();
        map.insert(
            "type".to_string(),
            Value::String(self.node_type().to_string()),
        );
        if let Value::Object(fields) = body {
            map.extend(fields);
        }
        Ok(Value::Object(map))
    }
}

impl Serialize for Node {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_value()
            .map_err(ser::Error::custom)?
            .serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Node {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = Value::deserialize(deserializer)?;
        Node::from_value(value).map_err(de::Error::custom)
    }
}

impl Heading {
    pub fn new(depth: u8, children: Vec<Node>) -> Self {
        Heading {
            depth,
            children,
            extra: Fields::new(),
        }
    }

    /// Concatenate the heading's direct `text` children.
    ///
    /// Emphasis, links, math and any other inline node are skipped, along
    /// with the text they contain.
    pub fn plain_text(&self) -> String {
        self.children
            .iter()
            .filter_map(|child| match child {
                Node::Text(text) => Some(text.value.as_str()),
                _ => None,
            })
            .collect()
    }
}

impl Code {
    pub fn new(value: impl Into<String>) -> Self {
        Code {
            lang: None,
            meta: None,
            value: value.into(),
            extra: Fields::new(),
        }
    }

    pub fn with_lang(mut self, lang: impl Into<String>) -> Self {
        self.lang = Some(lang.into());
        self
    }

    pub fn with_meta(mut self, meta: impl Into<String>) -> Self {
        self.meta = Some(meta.into());
        self
    }
}

impl Element {
    /// Create an element with no attributes and no children.
    pub fn new(name: impl Into<String>) -> Self {
        Element {
            name: name.into(),
            attributes: LinkedHashMap::new(),
            children: Vec::new(),
        }
    }

    /// Set an attribute, keeping the position of an existing key.
    pub fn with_attribute(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.attributes.insert(key.into(), value.into());
        self
    }

    pub fn with_children(mut self, children: Vec<Node>) -> Self {
        self.children = children;
        self
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_heading_from_json() {
        let node: Node = serde_json::from_value(json!({
            "type": "heading",
            "depth": 2,
            "children": [{"type": "text", "value": "Intro"}]
        }))
        .unwrap();

        let heading = node.as_heading().expect("expected heading");
        assert_eq!(heading.depth, 2);
        assert_eq!(heading.plain_text(), "Intro");
    }

    #[test]
    fn test_unknown_node_keeps_fields() {
        let input = json!({
            "type": "list",
            "ordered": true,
            "start": 3,
            "children": [{
                "type": "listItem",
                "children": [{"type": "paragraph", "children": [{"type": "text", "value": "a"}]}]
            }]
        });

        let node: Node = serde_json::from_value(input.clone()).unwrap();
        assert_eq!(node.node_type(), "list");
        assert_eq!(node.children().map(<[Node]>::len), Some(1));
        assert_eq!(serde_json::to_value(&node).unwrap(), input);
    }

    #[test]
    fn test_position_is_preserved_on_known_nodes() {
        let input = json!({
            "type": "text",
            "value": "x",
            "position": {"start": {"line": 1, "column": 1}, "end": {"line": 1, "column": 2}}
        });

        let node: Node = serde_json::from_value(input.clone()).unwrap();
        let Node::Text(text) = &node else {
            panic!("Expected Text, got {:?}", node);
        };
        assert!(text.extra.contains_key("position"));
        assert_eq!(serde_json::to_value(&node).unwrap(), input);
    }

    #[test]
    fn test_missing_type_is_an_error() {
        let result: Result<Node, _> = serde_json::from_value(json!({"value": "x"}));
        assert!(result.is_err());
    }

    #[test]
    fn test_non_string_type_is_an_error() {
        let result: Result<Node, _> = serde_json::from_value(json!({"type": 3}));
        assert!(result.is_err());
    }

    #[test]
    fn test_leaf_other_node_has_no_children() {
        let node: Node =
            serde_json::from_value(json!({"type": "thematicBreak"})).unwrap();
        assert!(node.children().is_none());
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"type": "thematicBreak"})
        );
    }

    #[test]
    fn test_plain_text_skips_inline_formatting() {
        let heading = Heading::new(
            2,
            vec![
                Node::text("Hello "),
                Node::parent("emphasis", vec![Node::text("big")]),
                Node::text(" world"),
                Node::literal("inlineMath", "x^2"),
            ],
        );

        assert_eq!(heading.plain_text(), "Hello  world");
    }

    #[test]
    fn test_element_serialization_shape() {
        let node = Node::Element(
            Element::new("Section")
                .with_attribute("title", "Intro")
                .with_attribute("id", "intro")
                .with_children(vec![Node::paragraph("Body.")]),
        );

        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({
                "type": "element",
                "name": "Section",
                "attributes": {"title": "Intro", "id": "intro"},
                "children": [
                    {"type": "paragraph", "children": [{"type": "text", "value": "Body."}]}
                ]
            })
        );
    }

    #[test]
    fn test_code_optional_fields_are_omitted() {
        let node = Node::Code(Code::new("fn main() {}"));
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"type": "code", "value": "fn main() {}"})
        );

        let node = Node::Code(Code::new("x").with_lang("rust").with_meta("id=a"));
        assert_eq!(
            serde_json::to_value(&node).unwrap(),
            json!({"type": "code", "lang": "rust", "meta": "id=a", "value": "x"})
        );
    }

    #[test]
    fn test_children_mut_on_root() {
        let mut root = Node::root(vec![Node::paragraph("a")]);
        root.children_mut().unwrap().push(Node::paragraph("b"));
        assert_eq!(root.children().unwrap().len(), 2);
    }
}
