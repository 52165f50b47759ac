// Copyright 2025 Cowboy AI, LLC.

//! Group-name collection
//!
//! Every category key of a taxonomy, at any depth, lower-cased. The
//! classifier uses this set to keep a token that names a category from being
//! counted as a word-list match.

use std::collections::HashSet;

use crate::taxonomy::TaxonomyNode;

/// Case-folded set of every category name in a taxonomy
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GroupNameSet {
    names: HashSet<String>,
}

impl GroupNameSet {
    /// Collect the keys of every mapping reachable from `node`, pre-order.
    ///
    /// Word lists hold literal words, so they are never entered.
    pub fn collect(node: &TaxonomyNode) -> Self {
        let mut names = HashSet::new();
        let mut stack = vec![node];

        while let Some(current) = stack.pop() {
            let Some(children) = current.as_category() else {
                continue;
            };
            for key in children.keys() {
                names.insert(key.to_lowercase());
            }
            // reversed so the leftmost child is visited first
            stack.extend(
                children
                    .values()
                    .rev()
                    .filter(|child| child.as_category().is_some()),
            );
        }

        Self { names }
    }

    /// Whether `token` (already lower-cased) names a category
    pub fn contains(&self, token: &str) -> bool {
        self.names.contains(token)
    }

    /// Number of distinct names
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// True for a taxonomy without categories
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate names in no particular order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }
}
