//! chainboard-mock
//!
//! Deterministic `ChainSource` for CI-safe tests and examples: serves a fixed
//! envelope (or a forced failure) without touching the network.

use async_trait::async_trait;
use chainboard_core::{ChainEnvelope, ChainSource, ChainboardError, WireRow};

mod fixtures;

pub use fixtures::{chain_rows, single_row};

/// Mock source returning a pre-set outcome on every fetch.
pub struct MockSource {
    outcome: Result<ChainEnvelope, ChainboardError>,
}

impl Default for MockSource {
    fn default() -> Self {
        Self::new()
    }
}

impl MockSource {
    /// Source serving the standard fixture chain (see [`chain_rows`]).
    #[must_use]
    pub fn new() -> Self {
        Self::with_rows(fixtures::chain_rows())
    }

    /// Source serving the given rows.
    #[must_use]
    pub fn with_rows(rows: Vec<WireRow>) -> Self {
        Self::with_envelope(ChainEnvelope::new(rows))
    }

    /// Source serving the given envelope verbatim.
    #[must_use]
    pub fn with_envelope(envelope: ChainEnvelope) -> Self {
        Self {
            outcome: Ok(envelope),
        }
    }

    /// Source serving an envelope with no rows.
    #[must_use]
    pub fn empty() -> Self {
        Self::with_envelope(ChainEnvelope::default())
    }

    /// Source failing every fetch with the given error.
    #[must_use]
    pub fn failing(err: ChainboardError) -> Self {
        Self { outcome: Err(err) }
    }
}

#[async_trait]
impl ChainSource for MockSource {
    fn name(&self) -> &'static str {
        "chainboard-mock"
    }

    async fn fetch_chain(&self) -> Result<ChainEnvelope, ChainboardError> {
        self.outcome.clone()
    }
}
