//! Command implementations: wiring arguments to the pipeline and the
//! sales API.

use anyhow::{Context, Result, bail};
use comfy_table::Table;

use pluxee_cli::pipeline::{
    GenerateRequest, GenerateResult, load_delivery_config, run_generate,
};
use pluxee_model::DeliveryConfig;
use pluxee_sales::SalesClient;

use crate::cli::{GenerateArgs, SalesArgs};
use crate::summary::apply_table_style;

pub fn run_generate_command(args: &GenerateArgs) -> Result<GenerateResult> {
    let (delivery, client_name) = resolve_delivery(args)?;

    let request = GenerateRequest {
        roster: args.roster.clone(),
        delivery,
        client_name,
        output_dir: args.output_dir.clone(),
    };
    run_generate(&request)
}

/// Delivery config comes from a local JSON file or from the sales API,
/// never both.
fn resolve_delivery(args: &GenerateArgs) -> Result<(DeliveryConfig, String)> {
    if let Some(path) = &args.delivery_config {
        let delivery = load_delivery_config(path)?;
        return Ok((delivery, args.client_name.clone()));
    }

    let Some(client) = &args.client else {
        bail!("provide either --delivery-config <PATH> or --client <NAME>");
    };
    let (sales, token) = connect_sales(&args.sales)?;
    let sale = sales
        .find_sale(&token, client)
        .context("fetch sales listing")?;
    let Some(sale) = sale else {
        bail!("client '{client}' not found in the sales listing");
    };
    Ok((sale.delivery_config(), sale.razao_social.clone()))
}

pub fn run_clients(args: &SalesArgs) -> Result<()> {
    let (sales, token) = connect_sales(args)?;
    let mut listing = sales.list_sales(&token).context("fetch sales listing")?;
    listing.sort_by(|a, b| a.razao_social.cmp(&b.razao_social));

    let mut table = Table::new();
    table.set_header(vec!["Cliente", "Cidade", "UF", "Responsável"]);
    apply_table_style(&mut table);
    for sale in listing {
        table.add_row(vec![sale.razao_social, sale.city, sale.uf, sale.responsible]);
    }
    println!("{table}");
    Ok(())
}

fn connect_sales(args: &SalesArgs) -> Result<(SalesClient, String)> {
    let (Some(url), Some(key)) = (&args.sales_url, &args.sales_key) else {
        bail!(
            "sales API access needs --sales-url and --sales-key \
             (or PLUXEE_SALES_URL / PLUXEE_SALES_ANON_KEY)"
        );
    };
    let (Some(email), Some(password)) = (&args.sales_email, &args.sales_password) else {
        bail!(
            "sales API access needs --sales-email and --sales-password \
             (or PLUXEE_SALES_EMAIL / PLUXEE_SALES_PASSWORD)"
        );
    };
    let client = SalesClient::new(url.as_str(), key.as_str()).context("build sales client")?;
    let token = client
        .login(email, password)
        .context("authenticate against sales API")?;
    Ok((client, token))
}
