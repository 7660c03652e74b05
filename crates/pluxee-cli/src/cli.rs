//! CLI argument definitions for the Pluxee order generator.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use colorchoice_clap::Color;

#[derive(Parser)]
#[command(
    name = "pluxee-orders",
    version,
    about = "Generate Pluxee PLANSIP3C order workbooks from employee rosters",
    long_about = "Convert an employee roster (XLSX, XLS, CSV or DOCX) into the\n\
                  fixed-layout PLANSIP3C benefit order workbook, normalizing\n\
                  names, CPFs and birth dates along the way."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Adjust log verbosity (-v for debug, -vv for trace, -q to quiet down).
    #[command(flatten)]
    pub verbosity: Verbosity<InfoLevel>,

    /// Control ANSI color output (auto, always, never).
    #[command(flatten)]
    pub color: Color,

    /// Log output format (pretty for human, json for machine parsing).
    #[arg(
        long = "log-format",
        value_enum,
        default_value = "pretty",
        global = true
    )]
    pub log_format: LogFormatArg,

    /// Write logs to a file instead of stderr.
    #[arg(long = "log-file", value_name = "PATH", global = true)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Generate a PLANSIP3C workbook from a roster file.
    Generate(GenerateArgs),

    /// List clients available from the remote sales API.
    Clients(SalesArgs),
}

#[derive(Args)]
pub struct GenerateArgs {
    /// Roster file with the employees (.xlsx, .xls, .csv or .docx).
    #[arg(value_name = "ROSTER")]
    pub roster: PathBuf,

    /// Delivery configuration as a JSON file. Mutually exclusive with
    /// --client.
    #[arg(long = "delivery-config", value_name = "PATH")]
    pub delivery_config: Option<PathBuf>,

    /// Fetch delivery data from the sales API for this client name.
    #[arg(long = "client", value_name = "NAME", conflicts_with = "delivery_config")]
    pub client: Option<String>,

    /// Client name used for the output file when --delivery-config is used.
    #[arg(long = "client-name", value_name = "NAME", default_value = "Cliente_Novo")]
    pub client_name: String,

    /// Output directory for the workbook (default: current directory).
    #[arg(long = "output-dir", value_name = "DIR", default_value = ".")]
    pub output_dir: PathBuf,

    #[command(flatten)]
    pub sales: SalesArgs,
}

/// Connection settings for the remote sales API.
#[derive(Args)]
pub struct SalesArgs {
    /// Base URL of the sales API.
    #[arg(long = "sales-url", env = "PLUXEE_SALES_URL", value_name = "URL")]
    pub sales_url: Option<String>,

    /// Anonymous API key sent with every request.
    #[arg(
        long = "sales-key",
        env = "PLUXEE_SALES_ANON_KEY",
        value_name = "KEY",
        hide_env_values = true
    )]
    pub sales_key: Option<String>,

    /// Login email for the sales API.
    #[arg(long = "sales-email", env = "PLUXEE_SALES_EMAIL", value_name = "EMAIL")]
    pub sales_email: Option<String>,

    /// Login password for the sales API.
    #[arg(
        long = "sales-password",
        env = "PLUXEE_SALES_PASSWORD",
        value_name = "PASSWORD",
        hide_env_values = true
    )]
    pub sales_password: Option<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum LogFormatArg {
    Pretty,
    Compact,
    Json,
}
