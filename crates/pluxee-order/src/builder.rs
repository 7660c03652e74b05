//! Order row construction: one pass over the extracted person records.

use chrono::{Months, NaiveDate};

use pluxee_model::{
    DEFAULT_BIRTH_DATE, DeliveryConfig, NAME_LIMIT, ORDER_TYPE_NORMAL, OutputRow, PRODUCT_CODES,
    RawPersonRecord, STATUS_ACTIVE,
};
use pluxee_normalize::{abbreviate, normalize_cpf, normalize_date};

/// Read-only inputs shared by every row of one run.
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Delivery/contact fields copied verbatim onto each row.
    pub delivery: DeliveryConfig,
    /// Credit date as DD/MM/YYYY, computed once per run.
    pub credit_date: String,
    /// Birth date substituted when no candidate is available or parseable.
    pub default_birth_date: String,
}

impl BuildConfig {
    /// Config for a run starting today, crediting one month ahead.
    pub fn for_run_date(run_date: NaiveDate, delivery: DeliveryConfig) -> Self {
        Self {
            delivery,
            credit_date: credit_date(run_date).format("%d/%m/%Y").to_string(),
            default_birth_date: DEFAULT_BIRTH_DATE.to_string(),
        }
    }
}

/// The rows of a run plus the diagnostics the summary reports.
#[derive(Debug, Default)]
pub struct BuildOutcome {
    pub rows: Vec<OutputRow>,
    /// Persons excluded for missing name or CPF.
    pub skipped: usize,
    /// Persons that produced rows.
    pub emitted: usize,
}

/// The disbursement date: run date advanced by exactly one calendar month.
pub fn credit_date(run_date: NaiveDate) -> NaiveDate {
    run_date + Months::new(1)
}

/// Fold person records into output rows.
///
/// Invalid persons (blank name or missing CPF) emit nothing and are
/// counted; every valid person emits exactly one row per product code, in
/// input order with the product order nested.
pub fn build_rows(records: &[RawPersonRecord], config: &BuildConfig) -> BuildOutcome {
    let mut outcome = BuildOutcome::default();

    for record in records {
        if !record.is_valid() {
            tracing::debug!("skipping person without name or CPF");
            outcome.skipped += 1;
            continue;
        }

        let name = abbreviate(&record.name, NAME_LIMIT);
        let cpf = normalize_cpf(&record.cpf);
        let birth_date = match record.birth_date_candidates.first() {
            Some(candidate) => normalize_date(candidate, &config.default_birth_date),
            None => config.default_birth_date.clone(),
        };

        for product_code in PRODUCT_CODES {
            outcome.rows.push(OutputRow {
                status: STATUS_ACTIVE.to_string(),
                name: name.clone(),
                cpf: cpf.clone(),
                birth_date: birth_date.clone(),
                card_name: name.clone(),
                order_type: ORDER_TYPE_NORMAL.to_string(),
                product_code: product_code.to_string(),
                quantity: 0,
                credit_date: config.credit_date.clone(),
                delivery: config.delivery.clone(),
            });
        }
        outcome.emitted += 1;
    }

    tracing::info!(
        emitted = outcome.emitted,
        skipped = outcome.skipped,
        rows = outcome.rows.len(),
        "built order rows"
    );
    outcome
}
