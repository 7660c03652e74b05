//! Output rows and the fixed vendor constants they carry.

use serde::{Deserialize, Serialize};

use crate::DeliveryConfig;

/// Beneficiary status written on every row.
pub const STATUS_ACTIVE: &str = "Ativo";

/// Order-type label written on every row.
pub const ORDER_TYPE_NORMAL: &str = "001 - Pedido Normal";

/// The two benefit products every valid person receives, in emission order.
pub const PRODUCT_CODES: [&str; 2] = [
    "6001 - Carteira Refeição",
    "6002 - Carteira Alimentação",
];

/// Birth date substituted when none is available or parseable.
pub const DEFAULT_BIRTH_DATE: &str = "01/01/1980";

/// Vendor length limit for beneficiary names.
pub const NAME_LIMIT: usize = 40;

/// Vendor length limit for district and city names.
pub const PLACE_LIMIT: usize = 30;

/// One PLANSIP3C order row: (valid person, product code) pair.
///
/// Exactly two of these exist per valid person. The core emits them in
/// input order; the workbook writer owns the concrete cell positions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputRow {
    /// Beneficiary status, always [`STATUS_ACTIVE`].
    pub status: String,
    /// Normalized, abbreviated beneficiary name (≤ 40 chars).
    pub name: String,
    /// Normalized CPF, digits only, ≥ 11 chars.
    pub cpf: String,
    /// Birth date as DD/MM/YYYY.
    pub birth_date: String,
    /// Name printed on the card; same value as `name`.
    pub card_name: String,
    /// Order type, always [`ORDER_TYPE_NORMAL`].
    pub order_type: String,
    /// One of [`PRODUCT_CODES`].
    pub product_code: String,
    /// Quantity placeholder, always zero.
    pub quantity: u32,
    /// Credit date shared by every row of the run, DD/MM/YYYY.
    pub credit_date: String,
    /// Delivery/contact fields copied verbatim.
    pub delivery: DeliveryConfig,
}
