//! Operator CLI for the taxpayer registry.
//!
//! Argument parsing lives here so commands can be exercised without a
//! process boundary; `main.rs` only wires stdout and exit codes.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::info;
use std::io::Write;
use std::path::PathBuf;
use taxreg_core::db::open_db;
use taxreg_core::{
    init_logging, SqliteTaxPayerRepository, StoreBackend, StoreConfig, TaxPayerService,
};

const DEFAULT_DB_FILE_NAME: &str = "taxreg.sqlite3";

/// Taxpayer registry: list, add and look up taxpayer records.
#[derive(Parser, Debug)]
#[command(name = "taxreg", version, about)]
pub struct Cli {
    /// SQLite registry file. Defaults to `TAXREG_DB_PATH`, then a file in the
    /// system temp directory.
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true)]
    pub log_dir: Option<String>,

    /// Log level override (`trace|debug|info|warn|error`).
    #[arg(long, global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print every taxpayer as a JSON array, in insertion order.
    List,
    /// Register a new taxpayer. Fails if the TID already exists.
    Add {
        tid: String,
        first_name: String,
        last_name: String,
        address: String,
    },
    /// Print the taxpayer with this exact TID as JSON, or `null`.
    Search { tid: String },
    /// Check that the core library is linked.
    Ping,
}

/// Executes one parsed command, writing results to `out`.
pub fn execute(cli: Cli, config: &StoreConfig, out: &mut impl Write) -> Result<()> {
    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(config.log_level.as_str());
        init_logging(level, log_dir).map_err(anyhow::Error::msg)?;
    }

    if let Commands::Ping = cli.command {
        writeln!(out, "taxreg_core ping={}", taxreg_core::ping())?;
        writeln!(out, "taxreg_core version={}", taxreg_core::core_version())?;
        return Ok(());
    }

    let db_path = resolve_db_path(cli.db, config);
    let conn = open_db(&db_path)
        .with_context(|| format!("failed to open registry at `{}`", db_path.display()))?;
    let service = TaxPayerService::new(SqliteTaxPayerRepository::new(&conn));
    info!("event=cli_command module=cli status=start");

    match cli.command {
        Commands::List => {
            let records = service.get_tax_payers()?;
            writeln!(out, "{}", serde_json::to_string_pretty(&records)?)?;
        }
        Commands::Add {
            tid,
            first_name,
            last_name,
            address,
        } => {
            service.add_tax_payer(tid, first_name, last_name, address)?;
            writeln!(out, "Taxpayer added.")?;
        }
        Commands::Search { tid } => {
            let found = service.search_tax_payer(&tid)?;
            writeln!(out, "{}", serde_json::to_string_pretty(&found)?)?;
        }
        Commands::Ping => {}
    }

    Ok(())
}

fn resolve_db_path(flag: Option<PathBuf>, config: &StoreConfig) -> PathBuf {
    if let Some(path) = flag {
        return path;
    }
    match &config.backend {
        StoreBackend::Sqlite(path) => path.clone(),
        // A CLI process is too short-lived for the in-memory backend.
        StoreBackend::Memory => std::env::temp_dir().join(DEFAULT_DB_FILE_NAME),
    }
}
