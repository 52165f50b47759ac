// Copyright 2025 Cowboy AI, LLC.

//! Group totals — sum of match counts per attributed group

use indexmap::IndexMap;

use crate::classifier::Classification;

/// Total match count per group, ordered by each group's first matched word
pub fn group_totals(classification: &Classification) -> IndexMap<String, usize> {
    let mut totals: IndexMap<String, usize> = IndexMap::new();
    for (_, record) in classification.iter() {
        *totals.entry(record.group.clone()).or_insert(0) += record.count;
    }
    totals
}

impl Classification {
    /// See [`group_totals`]
    pub fn group_totals(&self) -> IndexMap<String, usize> {
        group_totals(self)
    }
}
