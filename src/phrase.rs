// Copyright 2025 Cowboy AI, LLC.

//! Phrase normalization
//!
//! Turns free text into the ordered token sequence the classifier consumes:
//! lower-cased, punctuation removed, split on single spaces. Repeated tokens
//! are kept because repetition is counted.

use serde::Serialize;

/// Characters removed from a phrase before it is split
pub const PUNCTUATION: &[char] = &[
    '.', ',', '/', '#', '!', '$', '%', '^', '&', '*', ';', ':', '{', '}', '=', '-', '_', '`', '~',
    '(', ')',
];

/// A normalized phrase: ordered tokens, duplicates retained
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Phrase {
    tokens: Vec<String>,
}

impl Phrase {
    /// Normalize raw text into tokens.
    ///
    /// Consecutive spaces would yield empty tokens; those are dropped. Only
    /// the space character separates tokens, other whitespace stays inside
    /// a token.
    pub fn normalize(raw: &str) -> Self {
        let folded: String = raw
            .to_lowercase()
            .chars()
            .filter(|ch| !PUNCTUATION.contains(ch))
            .collect();
        let tokens = folded
            .split(' ')
            .filter(|token| !token.is_empty())
            .map(str::to_string)
            .collect();
        Self { tokens }
    }

    /// Tokens in phrase order
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Iterate tokens in phrase order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.tokens.iter().map(String::as_str)
    }

    /// Number of tokens, duplicates included
    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    /// True when normalization left no tokens
    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }
}
