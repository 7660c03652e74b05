//! Sales records as returned by the remote API.

use serde::{Deserialize, Serialize};

use pluxee_model::{DeliveryConfig, PLACE_LIMIT};
use pluxee_normalize::abbreviate;

/// One sale, keyed by the client's legal name.
///
/// Wire field names follow the API; they are renamed here to the vocabulary
/// the rest of the pipeline uses.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SaleRecord {
    #[serde(rename = "cliente_nome", default)]
    pub razao_social: String,
    #[serde(rename = "endereco_cep", default)]
    pub cep: String,
    #[serde(rename = "endereco", default)]
    pub street: String,
    #[serde(rename = "numero", default)]
    pub number: String,
    #[serde(rename = "endereco_complemento", default)]
    pub complement: String,
    #[serde(rename = "endereco_bairro", default)]
    pub district: String,
    #[serde(rename = "cidade", default)]
    pub city: String,
    #[serde(rename = "estado", default)]
    pub uf: String,
    #[serde(rename = "responsavel_pedido", default)]
    pub responsible: String,
}

impl SaleRecord {
    /// Build a delivery config from this sale.
    ///
    /// Empty fields take the same defaults the order form used to offer;
    /// district and city pass through the place abbreviator so they respect
    /// the vendor's 30-char limit, and the UF is upper-cased.
    pub fn delivery_config(&self) -> DeliveryConfig {
        DeliveryConfig {
            delivery_site: "MATRIZ".to_string(),
            cep: or_default(&self.cep, "00000-000"),
            street: or_default(&self.street, "RUA EXEMPLO"),
            number: or_default(&self.number, "100"),
            complement: self.complement.clone(),
            reference: String::new(),
            district: abbreviate(&or_default(&self.district, "CENTRO"), PLACE_LIMIT),
            city: abbreviate(&or_default(&self.city, "SÃO PAULO"), PLACE_LIMIT),
            uf: or_default(&self.uf, "SP").to_uppercase(),
            responsible: self.responsible.clone(),
            ddd: "11".to_string(),
            phone: "999999999".to_string(),
            email: String::new(),
            hand_delivery: "Não".to_string(),
        }
    }
}

fn or_default(value: &str, default: &str) -> String {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        default.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_names_deserialize() {
        let sale: SaleRecord = serde_json::from_str(
            r#"{
                "cliente_nome": "ACME LTDA",
                "endereco_cep": "01310-100",
                "endereco": "Avenida Paulista",
                "numero": "1000",
                "endereco_bairro": "Bela Vista",
                "cidade": "São Paulo",
                "estado": "sp",
                "responsavel_pedido": "Ana"
            }"#,
        )
        .expect("deserialize sale");
        assert_eq!(sale.razao_social, "ACME LTDA");
        assert_eq!(sale.uf, "sp");
    }

    #[test]
    fn delivery_config_normalizes_places_and_uf() {
        let sale = SaleRecord {
            razao_social: "ACME".to_string(),
            district: "Jardim das Laranjeiras Imperiais do Sul".to_string(),
            city: "São Paulo".to_string(),
            uf: "sp".to_string(),
            ..SaleRecord::default()
        };
        let config = sale.delivery_config();
        assert!(config.district.chars().count() <= PLACE_LIMIT);
        assert_eq!(config.city, "SAO PAULO");
        assert_eq!(config.uf, "SP");
        // Unset fields fall back to the form defaults.
        assert_eq!(config.cep, "00000-000");
        assert_eq!(config.hand_delivery, "Não");
    }
}
