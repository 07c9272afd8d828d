//! Lexicon-based sentiment scoring.
//!
//! The polarity itself comes from the VADER analyzer; this crate only loads
//! it once, checks that it answers sanely, and classifies the compound score.

use std::{fmt, sync::Arc};

use shared::domain::{SentimentResult, SCORE_MAX, SCORE_MIN};
use thiserror::Error;
use tracing::{debug, info, warn};
use vader_sentiment::SentimentIntensityAnalyzer;

const PROBE_POSITIVE: &str = "I love this!";
const PROBE_EMPTY: &str = "";

#[derive(Debug, Error)]
pub enum ScorerError {
    #[error("sentiment lexicon unavailable: {0}")]
    LexiconUnavailable(String),
}

/// Source of compound polarity scores in [-1, 1]. `None` means the analyzer
/// produced no compound score at all.
pub trait PolarityAnalyzer: Send + Sync {
    fn polarity(&self, text: &str) -> Option<f64>;
}

/// VADER analyzer. The lexicon ships inside `vader_sentiment`; it is parsed
/// when the analyzer is built and only read afterwards.
pub struct VaderAnalyzer {
    inner: SentimentIntensityAnalyzer<'static>,
}

impl VaderAnalyzer {
    pub fn new() -> Self {
        Self {
            inner: SentimentIntensityAnalyzer::new(),
        }
    }
}

impl Default for VaderAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for VaderAnalyzer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("VaderAnalyzer").finish_non_exhaustive()
    }
}

impl PolarityAnalyzer for VaderAnalyzer {
    fn polarity(&self, text: &str) -> Option<f64> {
        self.inner.polarity_scores(text).get("compound").copied()
    }
}

#[derive(Debug)]
pub struct SentimentScorer<A = VaderAnalyzer> {
    analyzer: Arc<A>,
}

impl<A> Clone for SentimentScorer<A> {
    fn clone(&self) -> Self {
        Self {
            analyzer: Arc::clone(&self.analyzer),
        }
    }
}

impl SentimentScorer<VaderAnalyzer> {
    /// Loads the VADER lexicon and verifies it before the scorer is handed out.
    pub fn load() -> Result<Self, ScorerError> {
        Self::with_analyzer(VaderAnalyzer::new())
    }
}

impl<A: PolarityAnalyzer> SentimentScorer<A> {
    /// Wraps `analyzer` after the same readiness check `load` performs:
    /// "I love this!" must score above zero and empty text exactly zero, so
    /// injected analyzers have to answer those two inputs like VADER does.
    pub fn with_analyzer(analyzer: A) -> Result<Self, ScorerError> {
        let scorer = Self {
            analyzer: Arc::new(analyzer),
        };
        scorer.probe()?;
        info!("sentiment lexicon loaded");
        Ok(scorer)
    }

    pub fn score(&self, text: &str) -> SentimentResult {
        let raw = self.analyzer.polarity(text).unwrap_or_else(|| {
            warn!("analyzer returned no compound score; treating input as neutral");
            0.0
        });
        let result = SentimentResult::from_score(raw);
        debug!(
            chars = text.chars().count(),
            score = result.score,
            verdict = %result.verdict,
            "scored input"
        );
        result
    }

    fn probe(&self) -> Result<(), ScorerError> {
        let positive = self.checked_polarity(PROBE_POSITIVE)?;
        if positive <= 0.0 {
            return Err(ScorerError::LexiconUnavailable(format!(
                "probe phrase {PROBE_POSITIVE:?} scored {positive}, expected a positive score"
            )));
        }

        let empty = self.checked_polarity(PROBE_EMPTY)?;
        if empty != 0.0 {
            return Err(ScorerError::LexiconUnavailable(format!(
                "empty input scored {empty}, expected 0"
            )));
        }

        Ok(())
    }

    fn checked_polarity(&self, text: &str) -> Result<f64, ScorerError> {
        let raw = self.analyzer.polarity(text).ok_or_else(|| {
            ScorerError::LexiconUnavailable(format!(
                "analyzer returned no compound score for {text:?}"
            ))
        })?;
        if !raw.is_finite() || !(SCORE_MIN..=SCORE_MAX).contains(&raw) {
            return Err(ScorerError::LexiconUnavailable(format!(
                "analyzer returned out-of-range score {raw} for {text:?}"
            )));
        }
        Ok(raw)
    }
}

#[cfg(test)]
#[path = "tests/lib_tests.rs"]
mod tests;
