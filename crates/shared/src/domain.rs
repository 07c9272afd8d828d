use std::fmt;

use serde::{Deserialize, Serialize};

/// Lower and upper bound of a compound polarity score.
pub const SCORE_MIN: f64 = -1.0;
pub const SCORE_MAX: f64 = 1.0;

/// Edge of the neutral gauge band. Classification uses 0 instead.
pub const NEUTRAL_BAND_EDGE: f64 = 0.05;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Verdict {
    Positive,
    Neutral,
    Negative,
}

impl Verdict {
    /// Three-way classification of a compound score. NaN classifies as neutral.
    pub fn from_score(score: f64) -> Self {
        if score > 0.0 {
            Verdict::Positive
        } else if score < 0.0 {
            Verdict::Negative
        } else {
            Verdict::Neutral
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Verdict::Positive => "Positive",
            Verdict::Neutral => "Neutral",
            Verdict::Negative => "Negative",
        }
    }
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SentimentResult {
    pub verdict: Verdict,
    pub score: f64,
}

impl SentimentResult {
    /// Builds a result whose verdict always agrees with its (clamped) score.
    pub fn from_score(score: f64) -> Self {
        let score = if score.is_nan() {
            0.0
        } else {
            score.clamp(SCORE_MIN, SCORE_MAX)
        };
        Self {
            verdict: Verdict::from_score(score),
            score,
        }
    }

    pub fn band(&self) -> BandKind {
        BandKind::for_score(self.score)
    }
}

/// Colored gauge band a score falls into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BandKind {
    Negative,
    Neutral,
    Positive,
}

impl BandKind {
    /// -0.05 belongs to the red band and 0.05 to the green band.
    pub fn for_score(score: f64) -> Self {
        if score <= -NEUTRAL_BAND_EDGE {
            BandKind::Negative
        } else if score >= NEUTRAL_BAND_EDGE {
            BandKind::Positive
        } else {
            BandKind::Neutral
        }
    }

    pub fn range(self) -> [f64; 2] {
        match self {
            BandKind::Negative => [SCORE_MIN, -NEUTRAL_BAND_EDGE],
            BandKind::Neutral => [-NEUTRAL_BAND_EDGE, NEUTRAL_BAND_EDGE],
            BandKind::Positive => [NEUTRAL_BAND_EDGE, SCORE_MAX],
        }
    }

    pub fn color(self) -> &'static str {
        match self {
            BandKind::Negative => "red",
            BandKind::Neutral => "gold",
            BandKind::Positive => "green",
        }
    }

    pub fn all() -> [BandKind; 3] {
        [BandKind::Negative, BandKind::Neutral, BandKind::Positive]
    }
}
