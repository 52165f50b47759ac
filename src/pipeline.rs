// Copyright 2025 Cowboy AI, LLC.

//! Load-then-classify pipeline with timing
//!
//! The taxonomy load is awaited in full before classification begins; both
//! phases are timed so callers can surface diagnostics.

use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::depth::Depth;
use crate::errors::LexiconResult;
use crate::loader::TaxonomySource;
use crate::report::ClassificationReport;

/// Wall-clock time spent in each phase
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Timings {
    /// Loading and decoding the taxonomy
    pub load: Duration,
    /// Normalizing, classifying and aggregating
    pub classify: Duration,
}

/// A finished run: the report and how long it took
#[derive(Debug, Clone)]
pub struct RunOutcome {
    /// Classification report
    pub report: ClassificationReport,
    /// Phase timings
    pub timings: Timings,
}

/// Load the taxonomy from `source`, then classify `phrase` at `depth`.
///
/// Fails only when the source cannot be loaded.
pub async fn run(
    source: &dyn TaxonomySource,
    phrase: &str,
    depth: Depth,
) -> LexiconResult<RunOutcome> {
    let started = Instant::now();
    let taxonomy = source.load().await?;
    let load = started.elapsed();
    debug!(source = %source.source_id(), elapsed_ms = load.as_millis() as u64, "load phase done");

    let started = Instant::now();
    let report = ClassificationReport::new(phrase, depth, &taxonomy);
    let classify = started.elapsed();
    info!(
        depth = depth.get(),
        matches = report.matches.len(),
        total = report.total,
        elapsed_ms = classify.as_millis() as u64,
        "phrase classified"
    );

    Ok(RunOutcome {
        report,
        timings: Timings { load, classify },
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::InlineJsonSource;

    #[tokio::test]
    async fn runs_both_phases() {
        let source = InlineJsonSource::new("inline", r#"{"animals": {"wild": ["tiger"]}}"#);
        let outcome = run(&source, "tiger tiger", Depth::new(2).unwrap()).await.unwrap();
        assert_eq!(outcome.report.word_line(), "tiger = 2");
    }

    #[tokio::test]
    async fn load_failure_stops_before_classification() {
        let source = InlineJsonSource::new("inline", "[]");
        let err = run(&source, "tiger", Depth::TOP).await.unwrap_err();
        assert!(err.is_data_source());
    }
}
