//! The generate pipeline: roster file in, PLANSIP3C workbook out.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::Local;
use tracing::info_span;

use pluxee_ingest::{extract_roster, load_roster};
use pluxee_model::{DeliveryConfig, PLACE_LIMIT};
use pluxee_normalize::abbreviate;
use pluxee_order::{BuildConfig, build_rows, output_file_name, write_workbook};

/// Everything one generate run needs, assembled by the command layer.
#[derive(Debug)]
pub struct GenerateRequest {
    /// Roster file (csv, xlsx, xls, or docx).
    pub roster: PathBuf,
    /// Delivery/contact configuration, already finalized.
    pub delivery: DeliveryConfig,
    /// Client legal name; drives the output file name.
    pub client_name: String,
    /// Directory receiving the workbook.
    pub output_dir: PathBuf,
}

/// Counts and paths the summary table reports.
#[derive(Debug)]
pub struct GenerateResult {
    pub output_path: PathBuf,
    /// Persons extracted from the roster, valid or not.
    pub persons: usize,
    /// Persons that produced rows.
    pub emitted: usize,
    /// Persons skipped for missing name or CPF.
    pub skipped: usize,
    /// Output rows written (2 per emitted person).
    pub rows: usize,
    /// Birth-date header resolved for tabular sources, when any.
    pub birth_column: Option<String>,
    pub credit_date: String,
}

/// Enforce the boundary invariants on a delivery config: district and city
/// within the vendor place limit, UF upper-cased.
pub fn finalize_delivery(mut config: DeliveryConfig) -> DeliveryConfig {
    config.district = abbreviate(&config.district, PLACE_LIMIT);
    config.city = abbreviate(&config.city, PLACE_LIMIT);
    config.uf = config.uf.trim().to_uppercase();
    config
}

/// Run the full pipeline for one roster file.
pub fn run_generate(request: &GenerateRequest) -> Result<GenerateResult> {
    let span = info_span!("generate", client = %request.client_name);
    let _guard = span.enter();

    let source = load_roster(&request.roster)
        .with_context(|| format!("load roster {}", request.roster.display()))?;
    let roster = extract_roster(source).context("extract roster")?;
    let persons = roster.records.len();

    let run_date = Local::now().date_naive();
    let config = BuildConfig::for_run_date(run_date, request.delivery.clone());
    let credit_date = config.credit_date.clone();
    let outcome = build_rows(&roster.records, &config);

    std::fs::create_dir_all(&request.output_dir)
        .with_context(|| format!("create output dir {}", request.output_dir.display()))?;
    let output_path = request
        .output_dir
        .join(output_file_name(&request.client_name));
    write_workbook(&outcome.rows, &output_path)
        .with_context(|| format!("write workbook {}", output_path.display()))?;

    Ok(GenerateResult {
        output_path,
        persons,
        emitted: outcome.emitted,
        skipped: outcome.skipped,
        rows: outcome.rows.len(),
        birth_column: roster.columns.and_then(|columns| columns.birth_date),
        credit_date,
    })
}

/// Load a delivery config from a JSON file and finalize it.
pub fn load_delivery_config(path: &Path) -> Result<DeliveryConfig> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("read delivery config {}", path.display()))?;
    let config: DeliveryConfig = serde_json::from_str(&content)
        .with_context(|| format!("parse delivery config {}", path.display()))?;
    Ok(finalize_delivery(config))
}
