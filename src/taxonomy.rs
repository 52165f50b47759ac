// Copyright 2025 Cowboy AI, LLC.

//! Taxonomy — nested category tree terminating in word lists
//!
//! A taxonomy is a mapping of category names to either further mappings
//! (subcategories) or ordered word lists. The shape of every node is decided
//! once, when the document is decoded, so traversal dispatches on the
//! variant instead of inspecting raw JSON.
//!
//! Key order is the order of the source document and is preserved; it
//! decides which branch is visited first during classification.

use indexmap::IndexMap;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use tracing::warn;

use crate::errors::{LexiconError, LexiconResult};

/// Deepest level a classification may target
pub const MAX_DEPTH: usize = 4;

/// A single node of the taxonomy tree
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum TaxonomyNode {
    /// Internal node: category name to child node
    Category(IndexMap<String, TaxonomyNode>),
    /// Leaf node: literal words, in source order
    WordList(Vec<String>),
}

impl TaxonomyNode {
    /// Build a word list from anything yielding strings
    pub fn words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        TaxonomyNode::WordList(words.into_iter().map(Into::into).collect())
    }

    /// Children of a category node, `None` for word lists
    pub fn as_category(&self) -> Option<&IndexMap<String, TaxonomyNode>> {
        match self {
            TaxonomyNode::Category(children) => Some(children),
            TaxonomyNode::WordList(_) => None,
        }
    }

    /// Words of a leaf node, `None` for categories
    pub fn as_word_list(&self) -> Option<&[String]> {
        match self {
            TaxonomyNode::WordList(words) => Some(words),
            TaxonomyNode::Category(_) => None,
        }
    }

    /// Number of key levels below and including this node
    pub fn depth(&self) -> usize {
        match self {
            TaxonomyNode::WordList(_) => 0,
            TaxonomyNode::Category(children) => {
                1 + children.values().map(TaxonomyNode::depth).max().unwrap_or(0)
            }
        }
    }
}

impl From<Value> for TaxonomyNode {
    /// Lenient decoding: scalars become empty word lists and non-string
    /// words are dropped, both with a warning.
    fn from(value: Value) -> Self {
        match value {
            Value::Object(map) => TaxonomyNode::Category(
                map.into_iter()
                    .map(|(key, child)| (key, TaxonomyNode::from(child)))
                    .collect(),
            ),
            Value::Array(items) => TaxonomyNode::WordList(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(word) => Some(word),
                        other => {
                            warn!(element = %other, "skipping non-string word list element");
                            None
                        }
                    })
                    .collect(),
            ),
            other => {
                warn!(value = %other, "scalar taxonomy node treated as an empty word list");
                TaxonomyNode::WordList(Vec::new())
            }
        }
    }
}

impl<'de> Deserialize<'de> for TaxonomyNode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Value::deserialize(deserializer).map(TaxonomyNode::from)
    }
}

/// A loaded, immutable taxonomy whose root is always a category
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Taxonomy {
    root: TaxonomyNode,
}

impl Taxonomy {
    /// Create a taxonomy from its top-level categories
    pub fn new(groups: IndexMap<String, TaxonomyNode>) -> Self {
        Self {
            root: TaxonomyNode::Category(groups),
        }
    }

    /// Decode a taxonomy from a JSON value; the root must be an object
    pub fn from_json_value(source_id: &str, value: Value) -> LexiconResult<Self> {
        match TaxonomyNode::from(value) {
            root @ TaxonomyNode::Category(_) => Ok(Self { root }),
            TaxonomyNode::WordList(_) => Err(LexiconError::data_source(
                source_id,
                "taxonomy root must be a JSON object",
            )),
        }
    }

    /// Parse a taxonomy from JSON text
    pub fn from_json_str(source_id: &str, json: &str) -> LexiconResult<Self> {
        let value: Value = serde_json::from_str(json)
            .map_err(|e| LexiconError::data_source(source_id, e.to_string()))?;
        Self::from_json_value(source_id, value)
    }

    /// The root node (always a [`TaxonomyNode::Category`])
    pub fn root(&self) -> &TaxonomyNode {
        &self.root
    }

    /// Top-level category names, in source order
    pub fn groups(&self) -> impl Iterator<Item = &str> {
        self.root
            .as_category()
            .into_iter()
            .flat_map(|children| children.keys().map(String::as_str))
    }

    /// Look up a top-level category
    pub fn get(&self, group: &str) -> Option<&TaxonomyNode> {
        self.root.as_category().and_then(|children| children.get(group))
    }

    /// Deepest level at which a category key appears
    pub fn depth(&self) -> usize {
        self.root.depth()
    }

    /// True when the taxonomy has no categories at all
    pub fn is_empty(&self) -> bool {
        self.root.as_category().map_or(true, IndexMap::is_empty)
    }
}

impl<'de> Deserialize<'de> for Taxonomy {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = Value::deserialize(deserializer)?;
        Taxonomy::from_json_value("<deserializer>", value).map_err(serde::de::Error::custom)
    }
}
