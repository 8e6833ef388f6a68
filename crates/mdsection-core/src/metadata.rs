/*
 * metadata.rs
 * Copyright (c) 2025 Posit, PBC
 *
 * Per-document build metadata.
 */

//! Per-document build metadata.
//!
//! The metadata object travels next to the tree through one document's
//! build. Earlier build steps may already have filled it in; the transforms
//! here only ever set `frontmatter.toc` and leave every other field alone.
//!
//! ```json
//! {
//!   "frontmatter": {
//!     "title": "Guide",
//!     "toc": [{"depth": 2, "title": "Intro", "id": "intro", "children": []}]
//!   }
//! }
//! ```

use mdsection_ast::Fields;
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::toc::TocNode;

/// Key of the nested ToC inside the frontmatter.
pub const TOC_KEY: &str = "toc";

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BuildMetadata {
    /// Document frontmatter, created on first write
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub frontmatter: Option<Fields>,

    /// Any other build state, carried through untouched
    #[serde(flatten)]
    pub extra: Fields,
}

impl BuildMetadata {
    /// The frontmatter map, initialized empty if absent.
    pub fn frontmatter_mut(&mut self) -> &mut Fields {
        self.frontmatter.get_or_insert_with(Fields::new)
    }

    /// Store the nested ToC at `frontmatter.toc`, replacing any previous value.
    pub fn set_toc(&mut self, toc: &[TocNode]) -> Result<()> {
        let value = serde_json::to_value(toc)?;
        self.frontmatter_mut().insert(TOC_KEY.to_string(), value);
        Ok(())
    }

    /// Read the ToC back from `frontmatter.toc`, if one is stored.
    pub fn toc(&self) -> Result<Option<Vec<TocNode>>> {
        let Some(value) = self.frontmatter.as_ref().and_then(|f| f.get(TOC_KEY)) else {
            return Ok(None);
        };
        Ok(Some(serde_json::from_value(value.clone())?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn toc_entry(id: &str) -> TocNode {
        TocNode {
            depth: 2,
            title: id.to_uppercase(),
            id: id.to_string(),
            children: vec![],
        }
    }

    #[test]
    fn test_set_toc_initializes_frontmatter() {
        let mut metadata = BuildMetadata::default();
        assert!(metadata.frontmatter.is_none());

        metadata.set_toc(&[toc_entry("a")]).unwrap();

        assert_eq!(
            serde_json::to_value(&metadata).unwrap(),
            json!({"frontmatter": {"toc": [{"depth": 2, "title": "A", "id": "a", "children": []}]}})
        );
    }

    #[test]
    fn test_set_toc_preserves_existing_fields() {
        let mut metadata: BuildMetadata = serde_json::from_value(json!({
            "frontmatter": {"title": "Guide", "toc": "stale"},
            "slug": "guide"
        }))
        .unwrap();

        metadata.set_toc(&[]).unwrap();

        assert_eq!(
            serde_json::to_value(&metadata).unwrap(),
            json!({
                "frontmatter": {"title": "Guide", "toc": []},
                "slug": "guide"
            })
        );
    }

    #[test]
    fn test_toc_roundtrip() {
        let mut metadata = BuildMetadata::default();
        assert_eq!(metadata.toc().unwrap(), None);

        let toc = vec![TocNode {
            children: vec![toc_entry("b")],
            ..toc_entry("a")
        }];
        metadata.set_toc(&toc).unwrap();

        assert_eq!(metadata.toc().unwrap(), Some(toc));
    }

    #[test]
    fn test_null_frontmatter_is_absent() {
        let metadata: BuildMetadata =
            serde_json::from_value(json!({"frontmatter": null})).unwrap();
        assert!(metadata.frontmatter.is_none());
    }
}
