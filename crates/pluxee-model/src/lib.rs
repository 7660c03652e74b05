//! Data model for Pluxee PLANSIP3C order generation.
//!
//! Person records, resolved column labels, delivery configuration, and the
//! fixed-layout output row shared by the ingest, transform, and output
//! crates.

pub mod delivery;
pub mod error;
pub mod order;
pub mod person;

pub use delivery::DeliveryConfig;
pub use error::{OrderError, Result};
pub use order::{
    DEFAULT_BIRTH_DATE, NAME_LIMIT, ORDER_TYPE_NORMAL, OutputRow, PLACE_LIMIT, PRODUCT_CODES,
    STATUS_ACTIVE,
};
pub use person::{RawPersonRecord, ResolvedColumns};
