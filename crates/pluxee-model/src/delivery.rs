//! Delivery and contact configuration merged into every output row.

use serde::{Deserialize, Serialize};

/// Delivery/contact metadata for one order run.
///
/// Supplied by the surrounding layer (config file or sales API); the core
/// reads it verbatim and never mutates it. Every field is present — missing
/// values default to empty strings at deserialization time, so downstream
/// code never deals with absent keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeliveryConfig {
    /// Delivery site label, e.g. "MATRIZ".
    pub delivery_site: String,
    /// Postal code (CEP).
    pub cep: String,
    /// Street line of the delivery address.
    pub street: String,
    /// Street number.
    pub number: String,
    /// Address complement.
    pub complement: String,
    /// Address reference.
    pub reference: String,
    /// District (bairro), expected to fit the 30-char vendor limit.
    pub district: String,
    /// City, expected to fit the 30-char vendor limit.
    pub city: String,
    /// Two-letter state code (UF).
    pub uf: String,
    /// Name of the responsible party for the order.
    pub responsible: String,
    /// Phone area code (DDD).
    pub ddd: String,
    /// Contact phone.
    pub phone: String,
    /// Contact email.
    pub email: String,
    /// Hand-delivery flag ("Sim" / "Não").
    pub hand_delivery: String,
}
