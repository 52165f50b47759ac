// Copyright 2025 Cowboy AI, LLC.

//! # CIM Lexicon
//!
//! Depth-bounded classification of phrase words against a nested category
//! taxonomy.
//!
//! A taxonomy maps category names to subcategories or to word lists. Given a
//! phrase and a depth, the classifier reports every word found at that depth
//! with its occurrence count and the group it is attributed to, and the
//! aggregator sums those counts per group.
//!
//! - **Taxonomy**: tagged tree of categories and word lists, key order kept
//! - **Phrase**: lower-cased, punctuation-free, space-separated tokens
//! - **GroupNameSet**: every category name, kept out of word-list matches
//! - **Classifier**: level-order walk to the target depth
//! - **Aggregator**: totals per group
//! - **Loader**: async sources decoding JSON taxonomies
//!
//! ```
//! use cim_lexicon::{classify_text, Depth, Taxonomy};
//!
//! let taxonomy = Taxonomy::from_json_str(
//!     "inline",
//!     r#"{"animals": {"wild": ["tiger", "lion"]}, "plants": {"trees": ["oak"]}}"#,
//! )
//! .unwrap();
//! let result = classify_text("I love tiger and lion", Depth::new(2).unwrap(), &taxonomy);
//! assert_eq!(result.get("tiger").unwrap().count, 1);
//! assert_eq!(result.get("lion").unwrap().group, "wild");
//! ```

#![warn(missing_docs)]

mod aggregate;
mod classifier;
mod depth;
mod errors;
mod group_names;
mod phrase;
mod taxonomy;
pub mod loader;
pub mod pipeline;
pub mod report;

pub use aggregate::group_totals;
pub use classifier::{classify, classify_text, Classification, MatchRecord};
pub use depth::Depth;
pub use errors::{LexiconError, LexiconResult};
pub use group_names::GroupNameSet;
pub use loader::{
    resolve_against, InlineJsonSource, JsonFileSource, TaxonomySource, DEFAULT_TAXONOMY_PATH,
};
pub use phrase::{Phrase, PUNCTUATION};
pub use taxonomy::{Taxonomy, TaxonomyNode, MAX_DEPTH};
