// Copyright 2025 Cowboy AI, LLC.

//! Report rendering
//!
//! Text form: one line of `word = count` pairs and one line of
//! `group = count` pairs, each joined with `; `. A classification without
//! matches renders as the sentinel `0`.

use indexmap::IndexMap;
use schemars::schema::RootSchema;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};

use crate::classifier::{classify, Classification};
use crate::depth::Depth;
use crate::errors::LexiconResult;
use crate::phrase::Phrase;
use crate::taxonomy::Taxonomy;

/// Rendered for a classification with no matches
pub const NO_MATCHES: &str = "0";

/// Display label for matches made at the top level (empty group)
pub const TOP_LEVEL_LABEL: &str = "(top level)";

fn join_pairs<'a>(pairs: impl Iterator<Item = (&'a str, usize)>) -> String {
    let rendered: Vec<String> = pairs
        .map(|(name, count)| format!("{name} = {count}"))
        .collect();
    if rendered.is_empty() {
        NO_MATCHES.to_string()
    } else {
        rendered.join("; ")
    }
}

/// `word = count; ...` in first-match order
pub fn render_word_counts(classification: &Classification) -> String {
    join_pairs(classification.iter().map(|(word, record)| (word, record.count)))
}

/// `group = count; ...` in first-appearance order
pub fn render_group_totals(totals: &IndexMap<String, usize>) -> String {
    join_pairs(totals.iter().map(|(group, count)| {
        let label = if group.is_empty() { TOP_LEVEL_LABEL } else { group.as_str() };
        (label, *count)
    }))
}

/// Everything a caller needs to present one classification
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
pub struct ClassificationReport {
    /// The phrase as given
    pub phrase: String,
    /// Requested depth
    pub depth: usize,
    /// Normalized tokens
    pub tokens: Vec<String>,
    /// Matched words
    pub matches: Classification,
    /// Match counts per group
    pub group_totals: IndexMap<String, usize>,
    /// Sum of all match counts
    pub total: usize,
}

impl ClassificationReport {
    /// Normalize, classify and aggregate `phrase`
    pub fn new(phrase: &str, depth: Depth, taxonomy: &Taxonomy) -> Self {
        let normalized = Phrase::normalize(phrase);
        let matches = classify(&normalized, depth, taxonomy);
        Self::from_parts(phrase, depth, &normalized, matches)
    }

    /// Assemble a report from an existing classification
    pub fn from_parts(
        phrase: &str,
        depth: Depth,
        normalized: &Phrase,
        matches: Classification,
    ) -> Self {
        Self {
            phrase: phrase.to_string(),
            depth: depth.get(),
            tokens: normalized.tokens().to_vec(),
            group_totals: matches.group_totals(),
            total: matches.total_count(),
            matches,
        }
    }

    /// True when nothing matched
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The word line of the text form
    pub fn word_line(&self) -> String {
        render_word_counts(&self.matches)
    }

    /// The group line of the text form
    pub fn group_line(&self) -> String {
        render_group_totals(&self.group_totals)
    }

    /// Both lines of the text form, or just the sentinel when empty
    pub fn render_text(&self) -> String {
        if self.is_empty() {
            return NO_MATCHES.to_string();
        }
        format!("{}\n{}", self.word_line(), self.group_line())
    }

    /// Pretty JSON form
    pub fn to_json_pretty(&self) -> LexiconResult<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// JSON Schema of the JSON form
    pub fn json_schema() -> RootSchema {
        schema_for!(ClassificationReport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    fn taxonomy() -> Taxonomy {
        Taxonomy::from_json_value(
            "test",
            json!({
                "animals": {"wild": ["tiger", "lion"], "farm": ["cow"]},
                "plants": {"trees": ["oak"]}
            }),
        )
        .unwrap()
    }

    #[test]
    fn renders_word_and_group_lines() {
        let report = ClassificationReport::new("Tiger, lion and a tiger; cow!", Depth::new(2).unwrap(), &taxonomy());
        assert_eq!(report.word_line(), "tiger = 2; lion = 1; cow = 1");
        assert_eq!(report.group_line(), "wild = 3; farm = 1");
        assert_eq!(report.render_text(), "tiger = 2; lion = 1; cow = 1\nwild = 3; farm = 1");
        assert_eq!(report.total, 4);
    }

    #[test]
    fn no_matches_render_the_sentinel() {
        let report = ClassificationReport::new("nothing here", Depth::new(2).unwrap(), &taxonomy());
        assert!(report.is_empty());
        assert_eq!(report.render_text(), NO_MATCHES);
        assert_eq!(report.word_line(), NO_MATCHES);
        assert_eq!(report.group_line(), NO_MATCHES);
    }

    #[test]
    fn top_level_group_gets_a_label() {
        let report = ClassificationReport::new("animals plants", Depth::TOP, &taxonomy());
        assert_eq!(report.word_line(), "animals = 1; plants = 1");
        assert_eq!(report.group_line(), "(top level) = 2");
    }

    #[test]
    fn json_form_carries_tokens_and_matches() {
        let report = ClassificationReport::new("oak  tree", Depth::new(2).unwrap(), &taxonomy());
        let value: serde_json::Value =
            serde_json::from_str(&report.to_json_pretty().unwrap()).unwrap();
        assert_eq!(
            value,
            json!({
                "phrase": "oak  tree",
                "depth": 2,
                "tokens": ["oak", "tree"],
                "matches": {"oak": {"count": 1, "group": "trees"}},
                "group_totals": {"trees": 1},
                "total": 1
            })
        );
    }

    #[test]
    fn schema_describes_report_fields() {
        let schema = serde_json::to_value(ClassificationReport::json_schema()).unwrap();
        let props = schema["properties"].as_object().unwrap();
        for field in ["phrase", "depth", "tokens", "matches", "group_totals", "total"] {
            assert!(props.contains_key(field), "missing {field}");
        }
    }
}
