use async_trait::async_trait;

use crate::{ChainEnvelope, ChainboardError};

/// Role trait for anything that can produce an option-chain envelope.
///
/// Implementations cover the production HTTP backend (`chainboard-http`) and
/// deterministic fixtures (`chainboard-mock`). The renderer only ever sees
/// this trait, so failure injection in tests needs no network.
#[async_trait]
pub trait ChainSource: Send + Sync {
    /// Stable source name, used to tag `ChainboardError::Source` failures.
    fn name(&self) -> &'static str;

    /// Fetch one option-chain envelope.
    ///
    /// This is the single suspension point of a render: the call runs to
    /// completion or returns a typed error; there is no retry machinery.
    async fn fetch_chain(&self) -> Result<ChainEnvelope, ChainboardError>;
}
