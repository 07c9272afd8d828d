//! Per-connection reactive pipeline: input text in, gauge update out.

use scorer::SentimentScorer;
use shared::{
    error::{ApiException, ErrorCode},
    protocol::{ClientMessage, ServerMessage},
};
use tracing::debug;

use crate::gauge::{figure_for, render_svg};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Computing,
}

pub struct Session {
    scorer: SentimentScorer,
    phase: Phase,
}

impl Session {
    pub fn new(scorer: SentimentScorer) -> Self {
        Self {
            scorer,
            phase: Phase::Idle,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Idle -> Computing. The returned message turns on the loading indicator.
    pub fn begin(&mut self) -> ServerMessage {
        self.phase = Phase::Computing;
        ServerMessage::Computing
    }

    /// Computing -> Idle with the recomputed gauge.
    pub fn complete(&mut self, text: &str) -> ServerMessage {
        let update = gauge_update(&self.scorer, text);
        self.phase = Phase::Idle;
        update
    }

    pub fn reject(&self, error: ApiException) -> ServerMessage {
        debug!(%error, "rejected client frame");
        ServerMessage::Error {
            error: error.into(),
        }
    }
}

pub fn gauge_update(scorer: &SentimentScorer, text: &str) -> ServerMessage {
    let result = scorer.score(text);
    let figure = figure_for(&result);
    let svg = render_svg(&figure);
    ServerMessage::GaugeUpdated {
        result,
        figure,
        svg,
    }
}

pub fn decode_client_message(raw: &str) -> Result<ClientMessage, ApiException> {
    serde_json::from_str(raw).map_err(|e| {
        ApiException::new(
            ErrorCode::Validation,
            format!("invalid client message: {e}"),
        )
    })
}
