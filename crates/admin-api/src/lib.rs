//! REST client for the admin API.
//!
//! This crate talks to the card and user admin endpoints:
//!
//! - [`ResourceClient`]: the list / remove / set-active contract, one network
//!   round trip per call and no retries
//! - [`HttpClient`]: the `reqwest` implementation
//! - [`envelope`]: normalization of the list response envelope
//! - [`config`]: API and display settings persisted as TOML
//!
//! # Example
//!
//! ```no_run
//! use admin_api::{ApiSettings, HttpClient, ResourceClient};
//! use admin_model::{Card, PageQuery};
//!
//! async fn first_cards() -> admin_api::Result<()> {
//!     let client = HttpClient::new(&ApiSettings::default())?;
//!     let page = client.list::<Card>(&PageQuery::first_page()).await?;
//!     tracing::info!("{} of {} cards", page.records.len(), page.total);
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]

pub mod client;
pub mod config;
pub mod envelope;
pub mod error;

pub use client::{HttpClient, ResourceClient};
pub use config::{ApiSettings, DisplaySettings, Settings};
pub use error::{ApiError, Result};
