//! Remote sales API client.
//!
//! Fetches the client listing used to prefill a delivery configuration.
//! Entirely outside the normalization core: the pipeline only sees the
//! resulting [`pluxee_model::DeliveryConfig`].

pub mod client;
pub mod error;
pub mod types;

pub use client::SalesClient;
pub use error::{Result, SalesError};
pub use types::SaleRecord;
