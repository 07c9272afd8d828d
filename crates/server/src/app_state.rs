use scorer::SentimentScorer;

/// Process-wide state: the loaded scorer and immutable transport limits.
#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) scorer: SentimentScorer,
    pub(crate) max_input_bytes: usize,
}
