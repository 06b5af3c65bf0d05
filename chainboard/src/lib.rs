//! Chainboard renders backend option-chain data into a dashboard page.
//!
//! Overview
//! - A [`ChainSource`] produces the `{ "data": [...] }` envelope — over HTTP
//!   in production (`chainboard-http`) or from fixtures (`chainboard-mock`).
//! - The envelope is projected into a column-ordered [`ChainTable`]: the
//!   header is the first row's key sequence, every body row is aligned to it.
//! - [`Dashboard::render_option_chain`] renders the table as HTML markup and
//!   replaces the content of the designated [`Page`] container.
//!
//! Key behaviors
//! - Failure is explicit: source, decode, and missing-container faults each
//!   map to a [`ChainboardError`] variant, and an error always leaves the
//!   page untouched (the container mutation is the final step).
//! - An empty `data` sequence is not an error; it renders as a bare
//!   `<table></table>`.
//! - Re-rendering into the same container is last-write-wins; the `&mut Page`
//!   parameter rules out interleaved renders against one page.
//!
//! Examples
//! Rendering a chain into a page:
//! ```rust,ignore
//! use std::sync::Arc;
//! use chainboard::{Dashboard, OPTION_CHAIN_CONTAINER_ID, Page};
//! use chainboard_http::HttpSource;
//!
//! let source = Arc::new(HttpSource::builder("http://localhost:8000").build()?);
//! let dashboard = Dashboard::builder().with_source(source).build()?;
//!
//! let mut page = Page::new().with_container(OPTION_CHAIN_CONTAINER_ID);
//! dashboard.render_option_chain(&mut page).await?;
//! ```
//!
//! Fetching the projected table without touching a page:
//! ```rust,ignore
//! let table = dashboard.fetch_table().await?;
//! println!("{} strikes", table.rows.len());
//! ```
#![warn(missing_docs)]

mod core;

pub use crate::core::{Dashboard, DashboardBuilder, DashboardConfig, OPTION_CHAIN_CONTAINER_ID};
pub use chainboard_core::{
    Cell, ChainEnvelope, ChainSource, ChainTable, ChainboardError, Container, Page, WireRow,
    render_table,
};
