use std::sync::Arc;

use chainboard_core::{ChainSource, ChainTable, ChainboardError, Page, render_table};
use tracing::{debug, warn};

/// Container id dashboard pages reserve for the option-chain table.
pub const OPTION_CHAIN_CONTAINER_ID: &str = "optionchain-container";

/// Configuration for a [`Dashboard`].
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Id of the page container the option chain is rendered into.
    pub container_id: String,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            container_id: OPTION_CHAIN_CONTAINER_ID.to_string(),
        }
    }
}

/// Renders option-chain data from a source into a page container.
pub struct Dashboard {
    source: Arc<dyn ChainSource>,
    cfg: DashboardConfig,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("source", &self.source.name())
            .field("cfg", &self.cfg)
            .finish()
    }
}

/// Builder for constructing a [`Dashboard`].
pub struct DashboardBuilder {
    source: Option<Arc<dyn ChainSource>>,
    cfg: DashboardConfig,
}

impl Default for DashboardBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardBuilder {
    /// Create a builder with the default container id and no source.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            cfg: DashboardConfig::default(),
        }
    }

    /// Set the chain source. Required.
    #[must_use]
    pub fn with_source(mut self, source: Arc<dyn ChainSource>) -> Self {
        self.source = Some(source);
        self
    }

    /// Target a container id other than [`OPTION_CHAIN_CONTAINER_ID`].
    #[must_use]
    pub fn container_id(mut self, id: impl Into<String>) -> Self {
        self.cfg.container_id = id.into();
        self
    }

    /// Build the dashboard.
    ///
    /// # Errors
    /// Returns `ChainboardError::InvalidArg` if no source was registered.
    pub fn build(self) -> Result<Dashboard, ChainboardError> {
        let source = self
            .source
            .ok_or_else(|| ChainboardError::invalid_arg("dashboard requires a chain source"))?;
        Ok(Dashboard {
            source,
            cfg: self.cfg,
        })
    }
}

impl Dashboard {
    /// Start building a dashboard.
    #[must_use]
    pub fn builder() -> DashboardBuilder {
        DashboardBuilder::new()
    }

    /// The configured target container id.
    #[must_use]
    pub fn container_id(&self) -> &str {
        &self.cfg.container_id
    }

    /// Fetch one envelope from the source and project it into a table.
    ///
    /// # Errors
    /// Propagates the source's `Source`/`Decode` failures.
    pub async fn fetch_table(&self) -> Result<ChainTable, ChainboardError> {
        let envelope = match self.source.fetch_chain().await {
            Ok(envelope) => envelope,
            Err(err) => {
                warn!(source = self.source.name(), error = %err, "option chain fetch failed");
                return Err(err);
            }
        };
        let table = ChainTable::from_envelope(envelope);
        debug!(
            columns = table.columns.len(),
            rows = table.rows.len(),
            "projected option chain"
        );
        Ok(table)
    }

    /// Fetch the option chain and render it into the designated container.
    ///
    /// On success the container's inner HTML is exactly the table markup for
    /// the fetched payload: one header row from the first row's keys, one
    /// body row per envelope row, in original order.
    ///
    /// The page is mutated last, so on any error it is left exactly as it
    /// was — including when the designated container does not exist.
    ///
    /// # Errors
    /// `Source` on fetch failure, `Decode` on a malformed envelope, and
    /// `ContainerNotFound` if the page lacks the configured container.
    pub async fn render_option_chain(&self, page: &mut Page) -> Result<(), ChainboardError> {
        let table = self.fetch_table().await?;
        let markup = render_table(&table);

        let container = page
            .container_mut(&self.cfg.container_id)
            .ok_or_else(|| ChainboardError::container_not_found(&self.cfg.container_id))?;
        container.set_inner_html(markup);

        debug!(container = %self.cfg.container_id, "rendered option chain");
        Ok(())
    }
}
