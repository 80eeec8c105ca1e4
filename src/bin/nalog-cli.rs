use std::path::PathBuf;

use anyhow::{anyhow, bail, Context, Result};
use chrono::{DateTime, FixedOffset};
use clap::{Parser, Subcommand};
use nalog_client::utils::config_loader;
use nalog_client::utils::logging;
use nalog_client::utils::logging::LogLevel;
use nalog_client::{NalogClient, Receipt, ReceiptFormat, ServiceConfig};
use rust_decimal::Decimal;
use tracing::info;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[arg(short, long, env = "CONFIG", default_value = "nalog-cli.yaml")]
    config: String,
    #[arg(long, env = "LOG_LEVEL" , value_enum)]
    log_level: Option<LogLevel>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Print the taxpayer profile
    User,
    /// Register a cash income from an individual
    AddIncome {
        #[arg(long)]
        amount: Decimal,
        /// service description shown on the receipt
        #[arg(long)]
        name: String,
        #[arg(long, default_value = "1")]
        quantity: Decimal,
        /// hours east of UTC, defaults to settings.timezone_offset_hours
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<i32>,
        /// RFC 3339 time of the operation, defaults to now
        #[arg(long)]
        occurred_at: Option<DateTime<FixedOffset>>,
    },
    /// Cancel a registered income
    CancelIncome {
        #[arg(long)]
        receipt: String,
        #[arg(long)]
        comment: String,
        #[arg(long, allow_hyphen_values = true)]
        offset: Option<i32>,
    },
    /// Download an approved receipt
    Receipt {
        #[arg(long)]
        receipt: String,
        #[arg(long, default_value = "json")]
        format: ReceiptFormat,
        /// file for non-json formats
        #[arg(long)]
        output: Option<PathBuf>,
    },
    /// Print the public receipt link
    Link {
        #[arg(long)]
        receipt: String,
        #[arg(long, default_value = "print")]
        format: ReceiptFormat,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // -------------------------------
    // 1. Load YAML config, init logging
    // -------------------------------

    let args = Args::parse();
    let service_config = config_loader::run(&args.config)?;
    logging::run(&service_config, args.log_level.to_owned());

    // -------------------------------
    // 2. Log in
    // -------------------------------

    let mut client = connect(&service_config).await?;
    let offset_default = service_config.settings.timezone_offset_hours();

    // -------------------------------
    // 3. Run command
    // -------------------------------

    match args.command {
        Command::User => {
            let user = client.get_user_info().await?;
            println!("{}", serde_json::to_string_pretty(&user)?);
        }
        Command::AddIncome { amount, name, quantity, offset, occurred_at } => {
            let receipt_uuid = client
                .add_income(offset.unwrap_or(offset_default), amount, &name, quantity, occurred_at)
                .await?;
            println!("{}", receipt_uuid);
            println!("{}", client.income_link(&receipt_uuid, &ReceiptFormat::Print)?);
        }
        Command::CancelIncome { receipt, comment, offset } => {
            let income_info = client
                .cancel_income(offset.unwrap_or(offset_default), &receipt, &comment)
                .await?;
            println!("{}", serde_json::to_string_pretty(&income_info)?);
        }
        Command::Receipt { receipt, format, output } => {
            if !format.is_json() && output.is_none() {
                bail!("--output is required for '{}' receipts", format);
            }
            match client.get_approved_income(&receipt, &format).await? {
                Receipt::Json(value) => println!("{}", serde_json::to_string_pretty(&value)?),
                Receipt::Raw(bytes) => {
                    let path = output.ok_or_else(|| anyhow!("--output is required"))?;
                    tokio::fs::write(&path, &bytes)
                        .await
                        .with_context(|| format!("cannot write {}", path.display()))?;
                    info!(path = %path.display(), size = bytes.len(), "receipt saved");
                }
            }
        }
        Command::Link { receipt, format } => {
            println!("{}", client.income_link(&receipt, &format)?);
        }
    }

    Ok(())
}

async fn connect(service_config: &ServiceConfig) -> Result<NalogClient> {
    let credentials = service_config
        .credentials
        .as_ref()
        .ok_or_else(|| anyhow!("config has no 'credentials' block"))?;
    NalogClient::connect(&service_config.settings, &credentials.inn, &credentials.password)
        .await
        .context("cannot log in to lknpd.nalog.ru")
}
