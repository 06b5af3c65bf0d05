//! chainboard-core
//!
//! Core types, traits, and utilities shared across the chainboard ecosystem.
//!
//! - `types`: the wire envelope and the projected, column-ordered table model.
//! - `source`: the `ChainSource` trait implemented by envelope producers.
//! - `html`: the table-markup renderer.
//! - `page`: the page/container model the renderer writes into.
//!
//! The crate is runtime-agnostic apart from `ChainSource` being an async
//! trait; sources are expected to run under a Tokio 1.x runtime.
#![warn(missing_docs)]

mod error;
/// HTML table rendering for projected chain tables.
pub mod html;
/// Named containers on a dashboard page.
pub mod page;
/// The `ChainSource` trait implemented by envelope producers.
pub mod source;
pub mod types;

pub use error::ChainboardError;
pub use html::render_table;
pub use page::{Container, Page};
pub use source::ChainSource;
pub use types::{Cell, ChainEnvelope, ChainTable, WireRow};
