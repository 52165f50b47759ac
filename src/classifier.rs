// Copyright 2025 Cowboy AI, LLC.

//! Depth-bounded classifier
//!
//! Walks a [`Taxonomy`] level by level down to a target depth and records,
//! for every node found at that depth, which phrase tokens it contains:
//!
//! - a word list matches tokens among its words (lexical matches);
//! - a category matches tokens equal to its own keys (category matches) and
//!   tokens among the words of its direct word-list children.
//!
//! Tokens that name a category anywhere in the taxonomy never count as
//! lexical matches. Category matches at the target depth always count.
//!
//! Group attribution follows the traversal: children of the root carry their
//! own key as group, deeper nodes inherit it, and a word list directly under
//! a target-depth category carries its own key. When a token matches several
//! nodes the counts are summed and the first node visited (source key order)
//! decides the group.

use std::collections::{HashSet, VecDeque};

use indexmap::IndexMap;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::depth::Depth;
use crate::group_names::GroupNameSet;
use crate::phrase::Phrase;
use crate::taxonomy::{Taxonomy, TaxonomyNode};

/// Occurrences of one matched word and the group it is attributed to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct MatchRecord {
    /// Number of matches, at least 1
    pub count: usize,
    /// Attributed category name; empty when matched at the top level
    pub group: String,
}

/// Result of a classification: matched word to record, in first-match order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(transparent)]
pub struct Classification {
    matches: IndexMap<String, MatchRecord>,
}

impl Classification {
    /// Record one match; the first recorded group sticks
    fn record(&mut self, word: &str, group: &str) {
        self.matches
            .entry(word.to_string())
            .or_insert_with(|| MatchRecord {
                count: 0,
                group: group.to_string(),
            })
            .count += 1;
    }

    /// Record for a single word
    pub fn get(&self, word: &str) -> Option<&MatchRecord> {
        self.matches.get(word)
    }

    /// Iterate matches in first-match order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &MatchRecord)> {
        self.matches.iter().map(|(word, record)| (word.as_str(), record))
    }

    /// Number of distinct matched words
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// True when nothing matched
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// Sum of all match counts
    pub fn total_count(&self) -> usize {
        self.matches.values().map(|record| record.count).sum()
    }
}

impl<'a> IntoIterator for &'a Classification {
    type Item = (&'a String, &'a MatchRecord);
    type IntoIter = indexmap::map::Iter<'a, String, MatchRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.iter()
    }
}

/// One pending node of the level-order walk
struct Frame<'a> {
    node: &'a TaxonomyNode,
    depth: usize,
    group: &'a str,
}

/// Classify already normalized tokens against `taxonomy` at `depth`.
///
/// Depths beyond [`crate::MAX_DEPTH`] yield an empty classification.
pub fn classify(phrase: &Phrase, depth: Depth, taxonomy: &Taxonomy) -> Classification {
    let mut result = Classification::default();
    if depth.exceeds_max() {
        debug!(depth = depth.get(), "depth beyond maximum, nothing to match");
        return result;
    }

    let group_names = GroupNameSet::collect(taxonomy.root());
    let target = depth.get();
    let mut visited = 0usize;
    let mut queue = VecDeque::from([Frame {
        node: taxonomy.root(),
        depth: 1,
        group: "",
    }]);

    while let Some(frame) = queue.pop_front() {
        if frame.depth == target {
            visited += 1;
            match_node(&frame, phrase, &group_names, &mut result);
            continue;
        }

        let Some(children) = frame.node.as_category() else {
            continue;
        };
        for (key, child) in children {
            let group = if frame.depth == 1 { key.as_str() } else { frame.group };
            queue.push_back(Frame {
                node: child,
                depth: frame.depth + 1,
                group,
            });
        }
    }

    debug!(
        depth = target,
        tokens = phrase.len(),
        group_names = group_names.len(),
        nodes = visited,
        matches = result.len(),
        "classification finished"
    );
    result
}

/// Normalize `raw` and classify it
pub fn classify_text(raw: &str, depth: Depth, taxonomy: &Taxonomy) -> Classification {
    classify(&Phrase::normalize(raw), depth, taxonomy)
}

/// Key matches here are category matches and bypass `group_names`; only
/// word-list (lexical) matches are filtered by it.
fn match_node(
    frame: &Frame<'_>,
    phrase: &Phrase,
    group_names: &GroupNameSet,
    result: &mut Classification,
) {
    match frame.node {
        TaxonomyNode::WordList(words) => {
            match_words(words, frame.group, phrase, group_names, result);
        }
        TaxonomyNode::Category(children) => {
            let keys = fold(children.keys());
            for token in phrase.iter().filter(|token| keys.contains(*token)) {
                result.record(token, frame.group);
            }
            for (key, child) in children {
                if let TaxonomyNode::WordList(words) = child {
                    match_words(words, key, phrase, group_names, result);
                }
            }
        }
    }
}

fn match_words(
    words: &[String],
    group: &str,
    phrase: &Phrase,
    group_names: &GroupNameSet,
    result: &mut Classification,
) {
    let words = fold(words);
    for token in phrase.iter() {
        if !group_names.contains(token) && words.contains(token) {
            result.record(token, group);
        }
    }
}

fn fold<'a>(items: impl IntoIterator<Item = &'a String>) -> HashSet<String> {
    items.into_iter().map(|item| item.to_lowercase()).collect()
}
