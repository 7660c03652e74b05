//! PLANSIP3C workbook output.
//!
//! The vendor imports a fixed cell layout: sheet "Dados dos Beneficiários",
//! beneficiary data from spreadsheet row 8, with absolute column positions
//! inherited from the official template. The core is agnostic to this
//! encoding; only this module knows the concrete cells.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook, Worksheet, XlsxError};
use thiserror::Error;

use pluxee_model::OutputRow;

/// Sheet the vendor importer reads.
const SHEET_NAME: &str = "Dados dos Beneficiários";

/// First data row, 0-based (spreadsheet row 8).
const FIRST_DATA_ROW: u32 = 7;

/// Label row above the data block, 0-based.
const LABEL_ROW: u32 = 6;

// Absolute column positions of the vendor layout, 0-based.
const COL_STATUS: u16 = 1;
const COL_NAME: u16 = 2;
const COL_CPF: u16 = 3;
const COL_BIRTH_DATE: u16 = 4;
const COL_CARD_NAME: u16 = 5;
const COL_ORDER_TYPE: u16 = 10;
const COL_PRODUCT: u16 = 11;
const COL_QUANTITY: u16 = 12;
const COL_CREDIT_DATE: u16 = 13;
const COL_DELIVERY_SITE: u16 = 15;
const COL_CEP: u16 = 16;
const COL_STREET: u16 = 17;
const COL_NUMBER: u16 = 18;
const COL_COMPLEMENT: u16 = 19;
// Column 20 (reference) is present in the template but never written.
const COL_DISTRICT: u16 = 21;
const COL_CITY: u16 = 22;
const COL_UF: u16 = 23;
const COL_RESPONSIBLE: u16 = 24;
const COL_DDD: u16 = 25;
const COL_PHONE: u16 = 26;
const COL_EMAIL: u16 = 27;
const COL_HAND_DELIVERY: u16 = 28;

#[derive(Debug, Error)]
pub enum WorkbookError {
    #[error("failed to write workbook: {0}")]
    Xlsx(#[from] XlsxError),
}

/// File name for the generated order: client name stripped to alphanumerics.
pub fn output_file_name(client_name: &str) -> String {
    let stripped: String = client_name
        .chars()
        .filter(char::is_ascii_alphanumeric)
        .collect();
    format!("PLANSIP3C_{stripped}.xlsx")
}

/// Write the order rows into a PLANSIP3C workbook at `path`.
pub fn write_workbook(rows: &[OutputRow], path: &Path) -> Result<(), WorkbookError> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    write_labels(worksheet)?;
    for (offset, row) in rows.iter().enumerate() {
        write_row(worksheet, FIRST_DATA_ROW + offset as u32, row)?;
    }

    workbook.save(path)?;
    tracing::info!(rows = rows.len(), path = %path.display(), "wrote PLANSIP3C workbook");
    Ok(())
}

fn write_labels(worksheet: &mut Worksheet) -> Result<(), XlsxError> {
    let bold = Format::new().set_bold();
    let labels: [(u16, &str); 22] = [
        (COL_STATUS, "Status"),
        (COL_NAME, "Nome do Beneficiário"),
        (COL_CPF, "CPF"),
        (COL_BIRTH_DATE, "Data de Nascimento"),
        (COL_CARD_NAME, "Nome no Cartão"),
        (COL_ORDER_TYPE, "Tipo de Pedido"),
        (COL_PRODUCT, "Produto"),
        (COL_QUANTITY, "Quantidade"),
        (COL_CREDIT_DATE, "Data de Crédito"),
        (COL_DELIVERY_SITE, "Local de Entrega"),
        (COL_CEP, "CEP"),
        (COL_STREET, "Endereço"),
        (COL_NUMBER, "Número"),
        (COL_COMPLEMENT, "Complemento"),
        (COL_DISTRICT, "Bairro"),
        (COL_CITY, "Cidade"),
        (COL_UF, "UF"),
        (COL_RESPONSIBLE, "Responsável"),
        (COL_DDD, "DDD"),
        (COL_PHONE, "Telefone"),
        (COL_EMAIL, "Email"),
        (COL_HAND_DELIVERY, "Porta a Porta"),
    ];
    for (col, label) in labels {
        worksheet.write_string_with_format(LABEL_ROW, col, label, &bold)?;
    }
    Ok(())
}

fn write_row(worksheet: &mut Worksheet, index: u32, row: &OutputRow) -> Result<(), XlsxError> {
    worksheet.write_string(index, COL_STATUS, &row.status)?;
    worksheet.write_string(index, COL_NAME, &row.name)?;
    worksheet.write_string(index, COL_CPF, &row.cpf)?;
    worksheet.write_string(index, COL_BIRTH_DATE, &row.birth_date)?;
    worksheet.write_string(index, COL_CARD_NAME, &row.card_name)?;
    worksheet.write_string(index, COL_ORDER_TYPE, &row.order_type)?;
    worksheet.write_string(index, COL_PRODUCT, &row.product_code)?;
    worksheet.write_number(index, COL_QUANTITY, f64::from(row.quantity))?;
    worksheet.write_string(index, COL_CREDIT_DATE, &row.credit_date)?;

    let delivery = &row.delivery;
    worksheet.write_string(index, COL_DELIVERY_SITE, &delivery.delivery_site)?;
    worksheet.write_string(index, COL_CEP, &delivery.cep)?;
    worksheet.write_string(index, COL_STREET, &delivery.street)?;
    worksheet.write_string(index, COL_NUMBER, &delivery.number)?;
    worksheet.write_string(index, COL_COMPLEMENT, &delivery.complement)?;
    worksheet.write_string(index, COL_DISTRICT, &delivery.district)?;
    worksheet.write_string(index, COL_CITY, &delivery.city)?;
    worksheet.write_string(index, COL_UF, &delivery.uf)?;
    worksheet.write_string(index, COL_RESPONSIBLE, &delivery.responsible)?;
    worksheet.write_string(index, COL_DDD, &delivery.ddd)?;
    worksheet.write_string(index, COL_PHONE, &delivery.phone)?;
    worksheet.write_string(index, COL_EMAIL, &delivery.email)?;
    worksheet.write_string(index, COL_HAND_DELIVERY, &delivery.hand_delivery)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_name_strips_non_alphanumerics() {
        assert_eq!(
            output_file_name("Açougue São João Ltda."),
            "PLANSIP3C_AougueSoJooLtda.xlsx"
        );
        assert_eq!(output_file_name("ACME"), "PLANSIP3C_ACME.xlsx");
    }
}
