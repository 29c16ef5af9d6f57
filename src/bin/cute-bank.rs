use std::{fs::File, path::PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use cute_bank::{
    bin_utils::{Service, load_accounts},
    processor::in_memory_ledger::InMemoryLedger,
};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Interactive in-memory banking system
#[derive(Parser, Debug)]
#[command(name = "cute-bank", version, about)]
struct Cli {
    /// CSV file (`id,owner,balance`) with accounts to open at startup
    #[arg(long)]
    accounts: Option<PathBuf>,

    /// Do not open the sample accounts 001, 002 and 003
    #[arg(long)]
    no_sample: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cute_bank=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut ledger = if cli.no_sample {
        InMemoryLedger::default()
    } else {
        InMemoryLedger::with_sample_accounts().context("Failed to open sample accounts")?
    };

    if let Some(path) = &cli.accounts {
        let file = File::open(path)
            .with_context(|| format!("Failed to open `{}`", path.display()))?;
        let opened = load_accounts(&mut ledger, file)
            .with_context(|| format!("Failed to load accounts from `{}`", path.display()))?;
        info!(opened, path = %path.display(), "accounts loaded");
    }

    let stdin = std::io::stdin();
    let service = Service {
        input: stdin.lock(),
        output: &mut std::io::stdout(),
        ledger,
    };
    service.run()?;
    Ok(())
}
